//! Key signatures and the circle-of-fifths order of their accidentals.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Most accidentals a sheet renders.
pub const MAX_ACCIDENTALS: usize = 6;

/// Sharps in the order they enter successive key signatures.
pub const SHARP_ORDER: [&str; 7] = ["fis", "cis", "gis", "dis", "ais", "eis", "his"];

/// Flats in the order they enter successive key signatures.
pub const FLAT_ORDER: [&str; 7] = ["b", "es", "as", "des", "ges", "ces", "fes"];

/// The kind of accidental a key signature uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Accidental {
    Sharp,
    Flat,
}

impl Accidental {
    /// Music glyph for this accidental.
    pub fn glyph(self) -> &'static str {
        match self {
            Accidental::Sharp => "\u{266F}",
            Accidental::Flat => "\u{266D}",
        }
    }

    fn order(self) -> &'static [&'static str; 7] {
        match self {
            Accidental::Sharp => &SHARP_ORDER,
            Accidental::Flat => &FLAT_ORDER,
        }
    }
}

impl fmt::Display for Accidental {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Accidental::Sharp => f.write_str("sharp"),
            Accidental::Flat => f.write_str("flat"),
        }
    }
}

/// A key signature with 0 to 6 sharps or flats.
///
/// Only built through [`KeySignature::new`], which checks the count.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct KeySignature {
    accidental: Accidental,
    count: usize,
}

impl KeySignature {
    pub fn new(accidental: Accidental, count: usize) -> Result<Self> {
        if count > MAX_ACCIDENTALS {
            return Err(Error::InvalidKeySignature { accidental, count });
        }
        Ok(Self { accidental, count })
    }

    pub fn sharps(count: usize) -> Result<Self> {
        Self::new(Accidental::Sharp, count)
    }

    pub fn flats(count: usize) -> Result<Self> {
        Self::new(Accidental::Flat, count)
    }

    pub fn accidental(&self) -> Accidental {
        self.accidental
    }

    pub fn count(&self) -> usize {
        self.count
    }

    /// Pitch names carrying an accidental, in the order they are drawn.
    pub fn accidentals(&self) -> Result<Vec<&'static str>> {
        accidentals_in_effect(self.accidental, self.count)
    }
}

/// Returns the first `count` accidentals for `accidental`, in circle-of-fifths order.
pub fn accidentals_in_effect(accidental: Accidental, count: usize) -> Result<Vec<&'static str>> {
    let order = accidental.order();
    if count > order.len() {
        return Err(Error::InvalidKeySignature { accidental, count });
    }
    Ok(order[..count].to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn sharps_follow_circle_of_fifths() {
        assert_eq!(accidentals_in_effect(Accidental::Sharp, 3).unwrap(), vec!["fis", "cis", "gis"]);
    }

    #[test]
    fn flats_follow_circle_of_fifths() {
        assert_eq!(accidentals_in_effect(Accidental::Flat, 3).unwrap(), vec!["b", "es", "as"]);
    }

    #[test]
    fn zero_accidentals_is_empty() {
        assert!(accidentals_in_effect(Accidental::Sharp, 0).unwrap().is_empty());
        assert!(KeySignature::flats(0).unwrap().accidentals().unwrap().is_empty());
    }

    #[test]
    fn whole_table_is_available() {
        assert_eq!(accidentals_in_effect(Accidental::Flat, 7).unwrap().len(), 7);
    }

    #[test]
    fn count_past_table_is_rejected() {
        let err = accidentals_in_effect(Accidental::Sharp, 8).unwrap_err();
        assert!(matches!(err, Error::InvalidKeySignature { accidental: Accidental::Sharp, count: 8 }));
    }

    #[test]
    fn key_signature_allows_up_to_six() {
        assert_eq!(KeySignature::sharps(6).unwrap().accidentals().unwrap().len(), 6);
        assert!(KeySignature::sharps(7).is_err());
        let key = KeySignature::new(Accidental::Flat, 4).unwrap();
        assert_eq!((key.accidental(), key.count()), (Accidental::Flat, 4));
        assert_eq!(
            KeySignature::flats(9).unwrap_err().to_string(),
            "invalid key signature: 9 flats"
        );
    }

    #[test]
    fn glyphs() {
        assert_eq!(Accidental::Sharp.glyph(), "♯");
        assert_eq!(Accidental::Flat.glyph(), "♭");
    }
}
