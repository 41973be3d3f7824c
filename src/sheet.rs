//! The pages of the reference sheet.
//!
//! Each row pairs a major scale with its relative minor, a minor third
//! below. Going down the flat page every key starts a fifth lower and flats
//! its fourth degree; going down the sharp page every key starts a fifth
//! higher and sharpens its seventh.

use serde::Serialize;

use crate::error::Result;
use crate::key_signature::{Accidental, KeySignature, MAX_ACCIDENTALS};
use crate::locale::Texts;
use crate::scale::{build_scale, Quality, Scale};

/// (major root, minor root) for 0..=6 flats.
const FLAT_KEYS: [(&str, &str); MAX_ACCIDENTALS + 1] = [
    ("c", "a"),
    ("f", "d"),
    ("b", "g"),
    ("es", "c"),
    ("as", "f"),
    ("des", "b"),
    ("ges", "es"),
];

/// (major root, minor root) for 0..=6 sharps.
const SHARP_KEYS: [(&str, &str); MAX_ACCIDENTALS + 1] = [
    ("c", "a"),
    ("g", "e"),
    ("d", "h"),
    ("a", "fis"),
    ("e", "cis"),
    ("h", "gis"),
    ("fis", "dis"),
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PageKind {
    Flat,
    Sharp,
}

impl PageKind {
    pub const ALL: [PageKind; 2] = [PageKind::Flat, PageKind::Sharp];

    pub fn accidental(self) -> Accidental {
        match self {
            PageKind::Flat => Accidental::Flat,
            PageKind::Sharp => Accidental::Sharp,
        }
    }

    /// Output file name without extension.
    pub fn file_stem(self) -> &'static str {
        match self {
            PageKind::Flat => "scales_flat",
            PageKind::Sharp => "scales_sharp",
        }
    }

    pub fn title(self, texts: &Texts) -> &'static str {
        match self {
            PageKind::Flat => texts.flat_scales,
            PageKind::Sharp => texts.sharp_scales,
        }
    }

    fn keys(self) -> &'static [(&'static str, &'static str)] {
        match self {
            PageKind::Flat => &FLAT_KEYS,
            PageKind::Sharp => &SHARP_KEYS,
        }
    }
}

/// A major scale and its relative minor under one key signature.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ScaleRow {
    pub key_signature: KeySignature,
    pub major: Scale,
    pub minor: Scale,
}

impl ScaleRow {
    pub fn new(key_signature: KeySignature, major_root: &str, minor_root: &str) -> Result<Self> {
        Ok(Self {
            key_signature,
            major: build_scale(major_root, Quality::Major)?,
            minor: build_scale(minor_root, Quality::Minor)?,
        })
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Page {
    pub kind: PageKind,
    pub rows: Vec<ScaleRow>,
}

/// Builds the rows of one page, 0 through 6 accidentals.
pub fn build_page(kind: PageKind) -> Result<Page> {
    let rows = kind
        .keys()
        .iter()
        .enumerate()
        .map(|(count, (major, minor))| {
            ScaleRow::new(KeySignature::new(kind.accidental(), count)?, major, minor)
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(Page { kind, rows })
}

/// The flat page, then the sharp page.
pub fn all_pages() -> Result<Vec<Page>> {
    PageKind::ALL.into_iter().map(build_page).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::Locale;
    use pretty_assertions::assert_eq;

    #[test]
    fn pages_in_order() {
        let pages = all_pages().unwrap();
        let kinds: Vec<PageKind> = pages.iter().map(|p| p.kind).collect();
        assert_eq!(kinds, vec![PageKind::Flat, PageKind::Sharp]);
        assert!(pages.iter().all(|p| p.rows.len() == 7));
    }

    #[test]
    fn counts_and_kinds() {
        for kind in PageKind::ALL {
            let page = build_page(kind).unwrap();
            for (i, row) in page.rows.iter().enumerate() {
                assert_eq!(row.key_signature.count(), i);
                assert_eq!(row.key_signature.accidental(), kind.accidental());
            }
        }
    }

    #[test]
    fn roots_walk_the_circle_of_fifths() {
        for (kind, step) in [(PageKind::Flat, 5u8), (PageKind::Sharp, 7u8)] {
            let page = build_page(kind).unwrap();
            for (i, row) in page.rows.iter().enumerate() {
                let expected = (step * i as u8) % 12;
                assert_eq!(row.major.key_nums[0], expected, "{}", row.major.title());
                assert_eq!(row.minor.key_nums[0], (expected + 9) % 12, "{}", row.minor.title());
            }
        }
    }

    #[test]
    fn relative_keys_share_pitches() {
        for page in all_pages().unwrap() {
            for row in &page.rows {
                let mut major = row.major.key_nums[..7].to_vec();
                let mut minor = row.minor.key_nums[..7].to_vec();
                major.sort();
                minor.sort();
                assert_eq!(major, minor, "{}", row.major.title());
            }
        }
    }

    #[test]
    fn file_stems_and_titles() {
        assert_eq!(PageKind::Flat.file_stem(), "scales_flat");
        assert_eq!(PageKind::Sharp.title(Locale::De.texts()), "Kreuz Tonarten");
    }
}
