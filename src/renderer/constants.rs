//! Shared constants for the sheet renderer (all in millimetres, SVG user units).

use super::svg_builder::ShapeStyle;

// ── Page & margins ──────────────────────────────────────────────────
pub(super) const PAGE_WIDTH: f64 = 210.0; // A4
pub(super) const PAGE_HEIGHT: f64 = 297.0;
pub(super) const FRAME_PAD: f64 = 2.7; // page margin
pub(super) const INNER_PAD: f64 = 2.7; // padding inside a diagram frame

// ── Text ────────────────────────────────────────────────────────────
pub(super) const LABEL_HEIGHT: f64 = 4.0;
pub(super) const NOTENAME_HEIGHT: f64 = 3.0;
pub(super) const TEXT_HEIGHT: f64 = 8.0; // music font size, one staff high
/// Distance between adjacent staff positions: 5 lines × 2 positions, plus the
/// glyph's own metrics.
pub const HALF_LINE: f64 = TEXT_HEIGHT / 10.5;

// ── Header ──────────────────────────────────────────────────────────
pub(super) const HEADER_HEIGHT: f64 = 2.0 * (LABEL_HEIGHT + FRAME_PAD); // title + column headings
pub(super) const FIRST_ROW_TOP: f64 = FRAME_PAD + HEADER_HEIGHT;

// ── Diagram ─────────────────────────────────────────────────────────
pub(super) const DIAGRAM_INDENT: f64 = 2.0;
pub(super) const STAFF_WIDTH: f64 = 100.0;
pub(super) const DIAGRAM_WIDTH: f64 = STAFF_WIDTH + INNER_PAD;
pub(super) const DIAGRAM_HEIGHT: f64 = 4.0 * INNER_PAD + KEYBOARD_HEIGHT + 2.0 * TEXT_HEIGHT;

// ── Keyboard ────────────────────────────────────────────────────────
pub(super) const KEYBOARD_OFFSET: f64 = 14.0; // right of the scale label
pub(super) const KEYBOARD_HEIGHT: f64 = TEXT_HEIGHT * 1.4;
pub(super) const WHITE_KEY_WIDTH: f64 = 10.0;
pub(super) const BLACK_KEY_WIDTH: f64 = 8.0;
pub(super) const PARTIAL_KEY_WIDTH: f64 = 4.0;
pub(super) const BLACK_KEY_SHORTEN: f64 = 5.0;
pub(super) const KEY_LABEL_RISE: f64 = 4.0; // label box top, above the key bottom

// ── Staff ───────────────────────────────────────────────────────────
pub(super) const STAFF_SEGMENTS: usize = 15;
pub(super) const ACCIDENTAL_OFFSET: f64 = 6.0;
pub(super) const ACCIDENTAL_SPACING: f64 = 1.5;
pub(super) const NOTES_OFFSET: f64 = 18.0;
pub(super) const NOTE_SPACING: f64 = 10.0;
pub(super) const LEDGER_LEFT: f64 = 0.8;
pub(super) const LEDGER_RIGHT: f64 = 4.0;

// ── Styles ──────────────────────────────────────────────────────────
pub(super) const STYLES: &str = ".text {
  font-family: 'Sans';
  fill: #000000;
}
.w_text {
  font-family: 'Sans';
  fill: #ffffff;
}
.notes {
  font-family: 'FreeSerif';
  fill: #000000;
}
";

pub(super) const FRAME_STYLE: ShapeStyle = ShapeStyle { stroke: "#777777", stroke_width: 0.3, fill: "none" };
pub(super) const STAFF_STYLE: ShapeStyle = ShapeStyle { stroke: "#000000", stroke_width: 0.2, fill: "none" };
pub(super) const WHITE_KEY_STYLE: ShapeStyle = ShapeStyle { stroke: "#000000", stroke_width: 0.3, fill: "#ffffff" };
pub(super) const WHITE_KEY_SELECTED_STYLE: ShapeStyle = ShapeStyle { stroke: "#eeeeee", stroke_width: 0.3, fill: "#dddddd" };
pub(super) const BLACK_KEY_STYLE: ShapeStyle = ShapeStyle { stroke: "#000000", stroke_width: 0.3, fill: "#000000" };
pub(super) const BLACK_KEY_SELECTED_STYLE: ShapeStyle = ShapeStyle { stroke: "#222222", stroke_width: 0.3, fill: "#333333" };
