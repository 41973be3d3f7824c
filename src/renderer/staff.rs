//! Staff, clef, key signature, notehead and ledger line rendering.
//!
//! Vertical positions are measured from the staff baseline: the y the staff
//! and clef glyphs are drawn at. A position `n` half-lines below the baseline
//! is at `baseline + n * HALF_LINE`. The bottom staff line is position 1, the
//! top line position -7.

use serde::Serialize;

use super::constants::*;
use super::glyphs::*;
use super::svg_builder::{SvgBuilder, TextStyle};
use crate::error::Result;
use crate::key_signature::{Accidental, KeySignature};
use crate::scale::Scale;
use crate::tables::Clef;

const NOTE_STYLE: TextStyle = TextStyle::new(TEXT_HEIGHT, "notes");
// the accidental glyphs come out twice as large as the rest of the font
const ACCIDENTAL_STYLE: TextStyle = TextStyle::new(TEXT_HEIGHT / 2.0, "notes");

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct LedgerLine {
    pub x1: f64,
    pub x2: f64,
    pub y: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Notehead {
    pub x: f64,
    pub y: f64,
    /// Half-lines below the baseline.
    pub position: i32,
    pub ledger: Option<LedgerLine>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AccidentalGlyph {
    pub name: &'static str,
    pub x: f64,
    pub y: f64,
}

/// Positions of everything drawn on one staff.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct StaffLayout {
    pub clef: Clef,
    pub accidental: Accidental,
    /// Key signature glyphs, in circle-of-fifths order.
    pub accidentals: Vec<AccidentalGlyph>,
    /// One whole note per degree, root to octave.
    pub notes: Vec<Notehead>,
}

impl StaffLayout {
    pub fn ledger_lines(&self) -> impl Iterator<Item = &LedgerLine> {
        self.notes.iter().filter_map(|n| n.ledger.as_ref())
    }
}

fn clef_glyph(clef: Clef) -> &'static str {
    match clef {
        Clef::Treble => G_CLEF,
        Clef::Bass => F_CLEF,
    }
}

const BOTTOM_LINE: i32 = 1;
const TOP_LINE: i32 = -7;

/// Ledger line for a notehead at (x, y) on staff position `position`.
///
/// Only notes outside the staff on an odd position get one; out-of-range
/// notes on even positions are left without.
pub fn ledger_line(x: f64, y: f64, position: i32) -> Option<LedgerLine> {
    let odd = position.rem_euclid(2) == 1;
    let outside = position > BOTTOM_LINE || position < TOP_LINE;
    (odd && outside).then(|| LedgerLine {
        x1: x - LEDGER_LEFT,
        x2: x + LEDGER_RIGHT,
        y: y - (HALF_LINE - 0.1),
    })
}

/// Computes the key signature and notes of `scale` on a staff whose glyphs
/// start at (x, baseline).
pub fn staff_layout(
    x: f64,
    baseline: f64,
    clef: Clef,
    key_signature: &KeySignature,
    scale: &Scale,
) -> Result<StaffLayout> {
    let accidentals = key_signature
        .accidentals()?
        .into_iter()
        .enumerate()
        .map(|(i, name)| {
            Ok(AccidentalGlyph {
                name,
                x: x + ACCIDENTAL_OFFSET + i as f64 * ACCIDENTAL_SPACING,
                y: baseline + f64::from(clef.accidental_shift(name)?) * HALF_LINE,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let shift = clef.note_shift(&scale.root)?;
    let root_y = baseline + f64::from(shift) * HALF_LINE;
    let notes = (0..scale.key_nums.len())
        .map(|degree| {
            let position = shift - degree as i32;
            let nx = x + NOTES_OFFSET + degree as f64 * NOTE_SPACING;
            let ny = root_y - degree as f64 * HALF_LINE;
            Notehead {
                x: nx,
                y: ny,
                position,
                ledger: ledger_line(nx, ny, position),
            }
        })
        .collect();

    Ok(StaffLayout {
        clef,
        accidental: key_signature.accidental(),
        accidentals,
        notes,
    })
}

/// Draws a staff with clef, key signature and the notes of `scale`.
pub(super) fn render_staff(
    svg: &mut SvgBuilder,
    x: f64,
    baseline: f64,
    clef: Clef,
    key_signature: &KeySignature,
    scale: &Scale,
) -> Result<StaffLayout> {
    let layout = staff_layout(x, baseline, clef, key_signature, scale)?;

    svg.text(x, baseline, &staff_run(STAFF_SEGMENTS), &NOTE_STYLE);
    svg.text(x, baseline, clef_glyph(clef), &NOTE_STYLE);

    let glyph = layout.accidental.glyph();
    for acc in &layout.accidentals {
        svg.text(acc.x, acc.y, glyph, &ACCIDENTAL_STYLE);
    }

    for note in &layout.notes {
        if let Some(ledger) = note.ledger {
            svg.line(ledger.x1, ledger.y, ledger.x2, ledger.y, &STAFF_STYLE, "ledger");
        }
        svg.text(note.x, note.y, WHOLE_NOTE, &NOTE_STYLE);
    }

    Ok(layout)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::scale::{build_scale, Quality};
    use pretty_assertions::assert_eq;

    const EPS: f64 = 1e-9;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < EPS
    }

    fn layout(root: &str, quality: Quality, clef: Clef, key: KeySignature) -> StaffLayout {
        let scale = build_scale(root, quality).unwrap();
        staff_layout(0.0, 100.0, clef, &key, &scale).unwrap()
    }

    #[test]
    fn half_line_matches_glyph_metrics() {
        assert!(close(HALF_LINE, 8.0 / 10.5));
    }

    #[test]
    fn c_major_treble() {
        let staff = layout("c", Quality::Major, Clef::Treble, KeySignature::flats(0).unwrap());
        assert!(staff.accidentals.is_empty());
        assert_eq!(staff.notes.len(), 8);
        for (i, note) in staff.notes.iter().enumerate() {
            assert!(close(note.x, 18.0 + 10.0 * i as f64));
            assert!(close(note.y, 100.0 + (3.0 - i as f64) * HALF_LINE));
        }
        // middle C only
        let ledgers: Vec<&LedgerLine> = staff.ledger_lines().collect();
        assert_eq!(ledgers.len(), 1);
        let first = staff.notes[0];
        assert_eq!(first.ledger.as_ref(), Some(ledgers[0]));
        assert!(close(ledgers[0].y, first.y - (HALF_LINE - 0.1)));
        assert!(close(ledgers[0].x1, 18.0 - 0.8));
        assert!(close(ledgers[0].x2, 22.0));
    }

    #[test]
    fn sharps_in_treble_order() {
        let staff = layout("a", Quality::Major, Clef::Treble, KeySignature::sharps(3).unwrap());
        let names: Vec<&str> = staff.accidentals.iter().map(|a| a.name).collect();
        assert_eq!(names, vec!["fis", "cis", "gis"]);
        let shifts = [-7.0, -4.0, -8.0];
        for (i, acc) in staff.accidentals.iter().enumerate() {
            assert!(close(acc.x, 6.0 + 1.5 * i as f64));
            assert!(close(acc.y, 100.0 + shifts[i] * HALF_LINE));
        }
        assert_eq!(staff.accidental, Accidental::Sharp);
    }

    #[test]
    fn flats_in_bass_order() {
        let staff = layout("es", Quality::Major, Clef::Bass, KeySignature::flats(3).unwrap());
        let ys: Vec<f64> = staff.accidentals.iter().map(|a| (a.y - 100.0) / HALF_LINE).collect();
        assert_eq!(ys.len(), 3);
        assert!(close(ys[0], -1.0) && close(ys[1], -4.0) && close(ys[2], 0.0));
    }

    #[test]
    fn a_minor_bass_needs_no_ledger() {
        let staff = layout("a", Quality::Minor, Clef::Bass, KeySignature::flats(0).unwrap());
        assert_eq!(staff.ledger_lines().count(), 0);
        assert!(close(staff.notes[7].y, 100.0 - 7.0 * HALF_LINE));
    }

    #[test]
    fn ledger_above_staff_on_odd_position() {
        let y = 100.0 - 9.0 * HALF_LINE;
        let ledger = ledger_line(50.0, y, -9).unwrap();
        assert!(close(ledger.y, y - (HALF_LINE - 0.1)));
        assert!(close(ledger.x1, 49.2));
        assert!(close(ledger.x2, 54.0));
    }

    #[test]
    fn no_ledger_inside_staff() {
        for position in TOP_LINE..=BOTTOM_LINE {
            let y = 100.0 + f64::from(position) * HALF_LINE;
            assert_eq!(ledger_line(50.0, y, position), None, "position {position}");
        }
    }

    #[test]
    fn no_ledger_on_even_position_outside_staff() {
        assert_eq!(ledger_line(50.0, 0.0, -10), None);
        assert_eq!(ledger_line(50.0, 0.0, 2), None);
    }

    #[test]
    fn ledger_just_outside_each_line() {
        assert!(ledger_line(0.0, 0.0, 3).is_some());
        assert!(ledger_line(0.0, 0.0, -9).is_some());
    }

    #[test]
    fn notes_on_outer_lines_get_no_ledger() {
        // E on the bottom treble line, F on the top treble line
        let e_minor = layout("e", Quality::Minor, Clef::Treble, KeySignature::sharps(1).unwrap());
        assert_eq!(e_minor.notes[0].position, BOTTOM_LINE);
        assert_eq!(e_minor.notes[0].ledger, None);

        let b_major = layout("b", Quality::Major, Clef::Treble, KeySignature::flats(2).unwrap());
        assert_eq!(b_major.notes[4].position, TOP_LINE);
        assert_eq!(b_major.notes[4].ledger, None);
    }

    #[test]
    fn ledgers_match_positions_at_any_baseline() {
        // baselines whose float arithmetic rounds unevenly near the outer lines
        let baselines = [0.0, 33.2, 45.2, 100.0, 147.7, 261.4, 279.5];
        for root in ["c", "d", "e", "f", "g", "a", "h", "b", "es", "fis"] {
            let scale = build_scale(root, Quality::Major).unwrap();
            for clef in [Clef::Treble, Clef::Bass] {
                for baseline in baselines {
                    let key = KeySignature::flats(0).unwrap();
                    let staff = staff_layout(0.0, baseline, clef, &key, &scale).unwrap();
                    for note in &staff.notes {
                        let expected = note.position.rem_euclid(2) == 1
                            && (note.position > BOTTOM_LINE || note.position < TOP_LINE);
                        assert_eq!(note.ledger.is_some(), expected, "{root} {clef:?} at {baseline}");
                    }
                }
            }
        }
    }

    #[test]
    fn unknown_root_fails() {
        let scale = Scale {
            root: "x".into(),
            quality: Quality::Major,
            key_nums: [0; 8],
        };
        let key = KeySignature::sharps(0).unwrap();
        let err = staff_layout(0.0, 0.0, Clef::Treble, &key, &scale).unwrap_err();
        assert!(matches!(err, Error::UnknownPitchClass(ref n) if n == "x"));
    }

    #[test]
    fn rendered_staff_glyphs() {
        let scale = build_scale("d", Quality::Major).unwrap();
        let key = KeySignature::sharps(2).unwrap();
        let mut svg = SvgBuilder::new(120.0, 40.0);
        render_staff(&mut svg, 0.0, 20.0, Clef::Bass, &key, &scale).unwrap();
        let out = svg.build();
        let doc = roxmltree::Document::parse(&out).unwrap();
        let texts: Vec<&str> = doc.descendants().filter(|n| n.has_tag_name("text")).filter_map(|n| n.text()).collect();
        assert_eq!(texts.iter().filter(|t| **t == "♯").count(), 2);
        assert_eq!(texts.iter().filter(|t| **t == WHOLE_NOTE).count(), 8);
        assert!(texts.contains(&F_CLEF));
        assert!(texts[0].starts_with(SINGLE_BARLINE));
    }
}
