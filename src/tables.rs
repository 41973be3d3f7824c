//! Pitch geometry tables.
//!
//! Pitch names use the German spelling: `b` is B-flat and `h` is B. All
//! staff shifts are in half-line units, positive downwards, relative to the
//! baseline the staff glyphs are drawn on.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// White keys of one octave, as semitone offsets from C.
pub const WHITE_KEY_PITCHES: [u8; 7] = [0, 2, 4, 5, 7, 9, 11];

/// Black key following each white key, `None` after E and after B.
pub const BLACK_KEY_PITCHES: [Option<u8>; 7] = [Some(1), Some(3), None, Some(6), Some(8), Some(10), None];

/// Semitone offset of a pitch name from C.
pub fn semitone_offset(name: &str) -> Result<u8> {
    let offset = match name {
        "c" => 0,
        "cis" | "des" => 1,
        "d" => 2,
        "dis" | "es" => 3,
        "e" => 4,
        "f" => 5,
        "fis" | "ges" => 6,
        "g" => 7,
        "gis" | "as" => 8,
        "a" => 9,
        "ais" | "b" => 10,
        "h" => 11,
        _ => return Err(unknown(name)),
    };
    Ok(offset)
}

/// Index of the white key a pitch name sits on (or just right of), C = 0.
pub fn white_key_index(name: &str) -> Result<usize> {
    let index = match name {
        "c" | "cis" | "des" => 0,
        "d" | "dis" | "es" => 1,
        "e" => 2,
        "f" | "fis" | "ges" => 3,
        "g" | "gis" | "as" => 4,
        "a" | "ais" | "b" => 5,
        "h" => 6,
        _ => return Err(unknown(name)),
    };
    Ok(index)
}

/// Staff shift of a scale's root in the treble clef.
pub fn treble_note_shift(name: &str) -> Result<i32> {
    let shift = match name {
        "c" | "cis" => 3,
        "des" | "d" | "dis" => 2,
        "es" | "e" => 1,
        "f" | "fis" => 0,
        "ges" | "g" | "gis" => -1,
        "as" | "a" | "ais" => -2,
        "h" | "b" => -3,
        _ => return Err(unknown(name)),
    };
    Ok(shift)
}

/// Staff shift of a scale's root in the bass clef.
pub fn bass_note_shift(name: &str) -> Result<i32> {
    let shift = match name {
        "c" | "cis" => -2,
        "des" | "d" | "dis" => -3,
        "es" | "e" => 3,
        "f" | "fis" => 2,
        "ges" | "g" | "gis" => 1,
        "as" | "a" | "ais" => 0,
        "h" | "b" => -1,
        _ => return Err(unknown(name)),
    };
    Ok(shift)
}

/// Staff shift of a key-signature accidental in the treble clef.
pub fn treble_accidental_shift(name: &str) -> Result<i32> {
    let shift = match name {
        "ces" | "cis" => -4,
        "des" | "dis" => -5,
        "es" | "eis" => -6,
        "fes" | "fis" => -7,
        "ges" => -1,
        "gis" => -8,
        "as" | "ais" => -2,
        "b" | "h" => -3,
        _ => return Err(unknown(name)),
    };
    Ok(shift)
}

/// Staff shift of a key-signature accidental in the bass clef.
pub fn bass_accidental_shift(name: &str) -> Result<i32> {
    let shift = match name {
        "ces" | "cis" => -2,
        "des" | "dis" => -3,
        "es" | "eis" => -4,
        "fes" | "fis" => -5,
        "ges" => 1,
        "gis" => -6,
        "as" | "ais" => 0,
        "b" | "h" => -1,
        _ => return Err(unknown(name)),
    };
    Ok(shift)
}

/// A staff clef and its vertical geometry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Clef {
    Treble,
    Bass,
}

impl Clef {
    /// Staff shift of a scale's root note.
    pub fn note_shift(self, root: &str) -> Result<i32> {
        match self {
            Clef::Treble => treble_note_shift(root),
            Clef::Bass => bass_note_shift(root),
        }
    }

    /// Staff shift of a key-signature accidental.
    pub fn accidental_shift(self, name: &str) -> Result<i32> {
        match self {
            Clef::Treble => treble_accidental_shift(name),
            Clef::Bass => bass_accidental_shift(name),
        }
    }
}

fn unknown(name: &str) -> Error {
    Error::UnknownPitchClass(name.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROOTS: [&str; 17] = [
        "c", "cis", "des", "d", "dis", "es", "e", "f", "fis", "ges", "g", "gis", "as", "a", "ais", "b", "h",
    ];

    #[test]
    fn enharmonic_names_share_offsets() {
        assert_eq!(semitone_offset("cis").unwrap(), semitone_offset("des").unwrap());
        assert_eq!(semitone_offset("ais").unwrap(), semitone_offset("b").unwrap());
        assert_eq!(semitone_offset("h").unwrap(), 11);
    }

    #[test]
    fn every_root_is_in_every_root_table() {
        for root in ROOTS {
            assert!(semitone_offset(root).unwrap() < 12, "{root}");
            assert!(white_key_index(root).unwrap() < 7, "{root}");
            treble_note_shift(root).unwrap();
            bass_note_shift(root).unwrap();
        }
    }

    #[test]
    fn white_key_index_matches_offset() {
        for root in ROOTS {
            let offset = semitone_offset(root).unwrap();
            let white = WHITE_KEY_PITCHES[white_key_index(root).unwrap()];
            let black = BLACK_KEY_PITCHES[white_key_index(root).unwrap()];
            assert!(offset == white || Some(offset) == black, "{root}");
        }
    }

    #[test]
    fn unknown_names_are_rejected() {
        assert!(matches!(semitone_offset("x"), Err(Error::UnknownPitchClass(n)) if n == "x"));
        assert!(treble_accidental_shift("his").is_err());
        assert!(bass_accidental_shift("c").is_err());
    }

    #[test]
    fn clef_dispatch() {
        assert_eq!(Clef::Treble.note_shift("c").unwrap(), 3);
        assert_eq!(Clef::Bass.note_shift("c").unwrap(), -2);
        assert_eq!(Clef::Treble.accidental_shift("fis").unwrap(), -7);
        assert_eq!(Clef::Bass.accidental_shift("b").unwrap(), -1);
    }

    #[test]
    fn bass_accidentals_sit_two_positions_lower_than_treble() {
        for name in ["ces", "cis", "des", "dis", "es", "eis", "fes", "fis", "gis", "as", "ais", "b", "h"] {
            let treble = treble_accidental_shift(name).unwrap();
            let bass = bass_accidental_shift(name).unwrap();
            assert_eq!(bass - treble, 2, "{name}");
        }
    }
}
