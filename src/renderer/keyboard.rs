//! One-octave keyboard diagram.
//!
//! The octave starts on the white key under the scale's root, so a scale
//! always reads left to right from its root to the root an octave up.

use serde::Serialize;

use super::constants::*;
use super::svg_builder::{ShapeStyle, SvgBuilder, TextStyle};
use crate::error::Result;
use crate::key_signature::KeySignature;
use crate::locale::Texts;
use crate::scale::Scale;
use crate::tables::{white_key_index, BLACK_KEY_PITCHES, WHITE_KEY_PITCHES};

const WHITE_NOTENAME_STYLE: TextStyle = TextStyle::new(NOTENAME_HEIGHT * 0.9, "text").centered();
const BLACK_NOTENAME_STYLE: TextStyle = TextStyle::new(NOTENAME_HEIGHT * 0.9, "w_text").centered();

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyKind {
    White,
    Black,
    /// Half a black key on the left edge, belonging to the octave below.
    PartialLeft,
    /// Half a black key on the right edge, belonging to the octave above.
    PartialRight,
}

impl KeyKind {
    fn class(self) -> &'static str {
        match self {
            KeyKind::White => "white-key",
            KeyKind::Black => "black-key",
            KeyKind::PartialLeft | KeyKind::PartialRight => "partial-key",
        }
    }

    pub fn is_partial(self) -> bool {
        matches!(self, KeyKind::PartialLeft | KeyKind::PartialRight)
    }
}

/// A key's place in the diagram, relative to the keyboard origin.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Key {
    pub kind: KeyKind,
    pub x: f64,
    pub width: f64,
    pub height: f64,
    pub pitch: u8,
    /// Whether the pitch belongs to the scale.
    pub selected: bool,
}

impl Key {
    /// Horizontal inset and width of the label box marking a selected key.
    fn label_box(&self) -> (f64, f64) {
        match self.kind {
            KeyKind::White | KeyKind::Black => (1.0, self.width - 2.0),
            KeyKind::PartialLeft => (0.0, self.width - 1.0),
            KeyKind::PartialRight => (1.0, self.width - 1.0),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct KeyboardLayout {
    /// Keys in drawing order: white, black, right edge, left edge.
    pub keys: Vec<Key>,
}

impl KeyboardLayout {
    pub fn count(&self, kind: KeyKind) -> usize {
        self.keys.iter().filter(|k| k.kind == kind).count()
    }

    pub fn selected(&self) -> impl Iterator<Item = &Key> {
        self.keys.iter().filter(|k| k.selected)
    }
}

/// Computes the keys of one octave starting at `scale`'s root.
pub fn keyboard_layout(height: f64, scale: &Scale) -> Result<KeyboardLayout> {
    let start = white_key_index(&scale.root)?;
    let mut keys = Vec::with_capacity(16);

    let mut k = start;
    for i in 0..8 {
        let pitch = WHITE_KEY_PITCHES[k];
        keys.push(Key {
            kind: KeyKind::White,
            x: i as f64 * WHITE_KEY_WIDTH,
            width: WHITE_KEY_WIDTH,
            height,
            pitch,
            selected: scale.contains(pitch),
        });
        k = (k + 1) % 7;
    }

    let black_height = height - BLACK_KEY_SHORTEN;
    let black_key = |kind, x, width, pitch| Key {
        kind,
        x,
        width,
        height: black_height,
        pitch,
        selected: scale.contains(pitch),
    };

    let mut x = WHITE_KEY_WIDTH - BLACK_KEY_WIDTH / 2.0;
    k = start;
    for _ in 0..7 {
        if let Some(pitch) = BLACK_KEY_PITCHES[k] {
            keys.push(black_key(KeyKind::Black, x, BLACK_KEY_WIDTH, pitch));
        }
        x += WHITE_KEY_WIDTH;
        k = (k + 1) % 7;
    }

    // k has wrapped back to the root: the slot after the last white key
    if let Some(pitch) = BLACK_KEY_PITCHES[k] {
        keys.push(black_key(KeyKind::PartialRight, x, PARTIAL_KEY_WIDTH, pitch));
    }
    if let Some(pitch) = BLACK_KEY_PITCHES[(start + 6) % 7] {
        keys.push(black_key(KeyKind::PartialLeft, 0.0, PARTIAL_KEY_WIDTH, pitch));
    }

    Ok(KeyboardLayout { keys })
}

/// Draws the keyboard for `scale` with its top-left corner at (x, y).
///
/// Selected keys get a label box near their bottom edge; full keys also carry
/// the note name spelled for `key_signature`.
pub(super) fn render_keyboard(
    svg: &mut SvgBuilder,
    x: f64,
    y: f64,
    height: f64,
    key_signature: &KeySignature,
    scale: &Scale,
    texts: &Texts,
) -> Result<KeyboardLayout> {
    let layout = keyboard_layout(height, scale)?;

    for key in &layout.keys {
        let kx = x + key.x;
        let (style, selected_style, label_style): (&ShapeStyle, &ShapeStyle, &TextStyle) = match key.kind {
            KeyKind::White => (&WHITE_KEY_STYLE, &WHITE_KEY_SELECTED_STYLE, &WHITE_NOTENAME_STYLE),
            _ => (&BLACK_KEY_STYLE, &BLACK_KEY_SELECTED_STYLE, &BLACK_NOTENAME_STYLE),
        };
        svg.rect(kx, y, key.width, key.height, style, key.kind.class());

        if !key.selected {
            continue;
        }
        let label_y = y + key.height - KEY_LABEL_RISE;
        let (dx, w) = key.label_box();
        svg.rect(kx + dx, label_y, w, NOTENAME_HEIGHT, selected_style, "key-label");
        if !key.kind.is_partial() {
            let name = texts.note_name(key_signature.accidental(), key.pitch);
            svg.text(kx + dx + w / 2.0, label_y + NOTENAME_HEIGHT - 0.5, name, label_style);
        }
    }

    Ok(layout)
}
