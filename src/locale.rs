//! Translated labels and note spellings.
//!
//! See <https://en.wikipedia.org/wiki/Key_signature_names_and_translations>.

use serde::{Deserialize, Serialize};

use crate::key_signature::Accidental;

/// Languages with a dictionary; anything else falls back to English.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    De,
}

/// Labels printed on a sheet.
#[derive(Debug)]
pub struct Texts {
    pub flat_scales: &'static str,
    pub sharp_scales: &'static str,
    pub major: &'static str,
    pub minor: &'static str,
    /// Note names by semitone, spelled with flats.
    pub lowered: [&'static str; 13],
    /// Note names by semitone, spelled with sharps.
    pub raised: [&'static str; 13],
}

static EN: Texts = Texts {
    flat_scales: "flat scales",
    sharp_scales: "sharp scales",
    major: "major",
    minor: "minor",
    lowered: ["c", "des", "d", "es", "e", "f", "ges", "g", "as", "a", "bes", "b", "ces"],
    raised: ["c", "cis", "d", "dis", "e", "f", "fis", "g", "gis", "a", "ais", "b", "bis"],
};

static DE: Texts = Texts {
    flat_scales: "Be Tonarten",
    sharp_scales: "Kreuz Tonarten",
    major: "Dur",
    minor: "Moll",
    lowered: ["c", "des", "d", "es", "e", "f", "ges", "g", "as", "a", "b", "h", "ces"],
    raised: ["c", "cis", "d", "dis", "e", "f", "fis", "g", "gis", "a", "ais", "h", "his"],
};

impl Locale {
    /// Parses a tag such as `de_DE.UTF-8`, `de` or `C`.
    pub fn from_tag(tag: &str) -> Self {
        let lang = tag.split(&['.', '_', '-', '@'][..]).next().unwrap_or_default();
        match lang.to_ascii_lowercase().as_str() {
            "de" => Locale::De,
            _ => Locale::En,
        }
    }

    pub fn texts(self) -> &'static Texts {
        match self {
            Locale::En => &EN,
            Locale::De => &DE,
        }
    }
}

impl Texts {
    /// Spelling of `pitch` (0..12) for a key signature using `accidental`.
    pub fn note_name(&self, accidental: Accidental, pitch: u8) -> &'static str {
        let names = match accidental {
            Accidental::Sharp => &self.raised,
            Accidental::Flat => &self.lowered,
        };
        names[usize::from(pitch % 12)]
    }

    /// Spelling of a German pitch name in this locale.
    pub fn spell(&self, accidental: Accidental, name: &str) -> Option<&'static str> {
        crate::tables::semitone_offset(name)
            .ok()
            .map(|pitch| self.note_name(accidental, pitch))
    }
}
