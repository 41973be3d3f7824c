//! Sheet renderer. Lays out scale diagrams on A4 pages and produces SVG.
//!
//! Each diagram shows one scale: a keyboard octave starting on the root, a
//! treble staff and a bass staff with the key signature and the eight notes
//! from root to octave. A page stacks one row per key signature, major scale
//! on the left and its relative minor on the right.

mod constants;
mod glyphs;
mod keyboard;
mod layout;
mod staff;
mod svg_builder;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::key_signature::KeySignature;
use crate::locale::Texts;
use crate::scale::Scale;
use crate::sheet::{Page, ScaleRow};
use crate::tables::Clef;
use constants::*;
use keyboard::render_keyboard;
use staff::render_staff;
use svg_builder::{SvgBuilder, TextStyle};

pub use constants::HALF_LINE;
pub use keyboard::{keyboard_layout, Key, KeyKind, KeyboardLayout};
pub use layout::LayoutCursor;
pub use staff::{ledger_line, staff_layout, AccidentalGlyph, LedgerLine, Notehead, StaffLayout};

const LABEL_STYLE: TextStyle = TextStyle::new(LABEL_HEIGHT, "text");
const CENTER_LABEL_STYLE: TextStyle = LABEL_STYLE.centered();

// ═══════════════════════════════════════════════════════════════════════
// Public API
// ═══════════════════════════════════════════════════════════════════════

/// Where one scale diagram landed on its page.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DiagramBox {
    pub id: String,
    pub title: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Summary of a composed page.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PageLayout {
    pub title: String,
    pub width: f64,
    pub height: f64,
    pub diagrams: Vec<DiagramBox>,
    /// Height of the last row, 0 for an empty page.
    pub row_height: f64,
    /// Cursor after the last row.
    pub cursor: LayoutCursor,
}

impl PageLayout {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// A finished page: the SVG document and where everything went.
#[derive(Clone, Debug)]
pub struct RenderedPage {
    pub svg: String,
    pub layout: PageLayout,
}

/// Renders one page of the sheet.
pub fn render_page(page: &Page, texts: &Texts) -> Result<RenderedPage> {
    compose_page(page.kind.title(texts), &page.rows, texts)
}

/// Lays out `rows` under `title`, one (major, minor) pair per row.
pub fn compose_page(title: &str, rows: &[ScaleRow], texts: &Texts) -> Result<RenderedPage> {
    let mut svg = SvgBuilder::page();

    svg.text(PAGE_WIDTH / 2.0, FRAME_PAD + LABEL_HEIGHT, title, &CENTER_LABEL_STYLE);

    let mut cursor = LayoutCursor::new(FRAME_PAD, FIRST_ROW_TOP);
    let mut diagrams = Vec::with_capacity(rows.len() * 2);
    for row in rows {
        for scale in [&row.major, &row.minor] {
            let (x, y) = (cursor.x, cursor.y);
            let diagram = render_diagram(&mut svg, x, y, &row.key_signature, scale, texts)?;
            cursor.place(diagram.width, diagram.height);
            diagrams.push(diagram);
        }
        cursor.next_row();
    }

    // column headings need a diagram's width
    if let Some(first) = diagrams.first() {
        let y = FRAME_PAD + 2.0 * LABEL_HEIGHT;
        let mut x = FRAME_PAD + first.width / 2.0;
        for heading in [texts.major, texts.minor] {
            svg.text(x, y, heading, &CENTER_LABEL_STYLE);
            x += first.width;
        }
    }

    Ok(RenderedPage {
        svg: svg.build(),
        layout: PageLayout {
            title: title.to_string(),
            width: PAGE_WIDTH,
            height: PAGE_HEIGHT,
            diagrams,
            row_height: cursor.last_row_height(),
            cursor,
        },
    })
}

// ═══════════════════════════════════════════════════════════════════════
// Diagram rendering
// ═══════════════════════════════════════════════════════════════════════

/// Baselines of the treble and bass staves of a diagram whose top is at `gy`.
fn staff_baselines(gy: f64) -> (f64, f64) {
    let treble_top = gy + INNER_PAD + KEYBOARD_HEIGHT + INNER_PAD;
    let bass_top = treble_top + TEXT_HEIGHT + INNER_PAD;
    (treble_top + TEXT_HEIGHT - 1.0, bass_top + TEXT_HEIGHT - 1.0)
}

/// Draws one framed scale diagram with its top-left corner at (gx, gy).
fn render_diagram(
    svg: &mut SvgBuilder,
    gx: f64,
    gy: f64,
    key_signature: &KeySignature,
    scale: &Scale,
    texts: &Texts,
) -> Result<DiagramBox> {
    let id = scale.group_id();
    svg.begin_group(&id);

    let mut x = gx + INNER_PAD;
    let y = gy + INNER_PAD;

    let label = texts
        .spell(key_signature.accidental(), &scale.root)
        .unwrap_or(scale.root.as_str());
    svg.text(x, y + LABEL_HEIGHT - 1.0, label, &LABEL_STYLE);
    x += DIAGRAM_INDENT;

    render_keyboard(svg, x + KEYBOARD_OFFSET, y, KEYBOARD_HEIGHT, key_signature, scale, texts)?;

    // G on the second line from the bottom, F on the fourth
    let (treble, bass) = staff_baselines(gy);
    render_staff(svg, x, treble, Clef::Treble, key_signature, scale)?;
    render_staff(svg, x, bass, Clef::Bass, key_signature, scale)?;

    let width = DIAGRAM_WIDTH;
    let height = bass + 1.0 + INNER_PAD - gy;
    svg.rect(gx, gy, width, height, &FRAME_STYLE, "frame");
    svg.end_group();

    let title = scale.title();
    debug!("scale({title}).size: w={width:.1}, h={height:.1}");
    Ok(DiagramBox {
        id,
        title,
        x: gx,
        y: gy,
        width,
        height,
    })
}
