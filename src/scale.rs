//! Major and minor scales as pitch classes.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::tables::semitone_offset;

/// Scale quality, carrying its step pattern and title rule.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Quality {
    Major,
    Minor,
}

impl Quality {
    /// Semitone steps from one degree to the next, starting with the root.
    pub fn steps(self) -> [u8; 8] {
        match self {
            Quality::Major => [0, 2, 2, 1, 2, 2, 2, 1],
            Quality::Minor => [0, 2, 1, 2, 2, 1, 2, 2],
        }
    }
}

impl fmt::Display for Quality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Quality::Major => f.write_str("Major"),
            Quality::Minor => f.write_str("Minor"),
        }
    }
}

/// One octave of a scale, root to octave.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scale {
    pub root: String,
    pub quality: Quality,
    /// Pitch class of each degree; the last repeats the first.
    pub key_nums: [u8; 8],
}

impl Scale {
    /// Title such as `Es-Major` or `es-Minor`.
    ///
    /// Major roots are capitalized, minor roots are not.
    pub fn title(&self) -> String {
        let root = match self.quality {
            Quality::Major => capitalize(&self.root),
            Quality::Minor => self.root.clone(),
        };
        format!("{root}-{}", self.quality)
    }

    /// Id of the SVG group holding this scale's diagram.
    pub fn group_id(&self) -> String {
        format!("g_{}", self.title().to_lowercase().replace(' ', "_"))
    }

    pub fn contains(&self, pitch: u8) -> bool {
        self.key_nums.contains(&pitch)
    }
}

/// Builds the scale of `quality` starting on `root`.
pub fn build_scale(root: &str, quality: Quality) -> Result<Scale> {
    let mut pitch = semitone_offset(root)?;
    let mut key_nums = [0u8; 8];
    for (num, step) in key_nums.iter_mut().zip(quality.steps()) {
        pitch = (pitch + step) % 12;
        *num = pitch;
    }
    Ok(Scale {
        root: root.to_string(),
        quality,
        key_nums,
    })
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
