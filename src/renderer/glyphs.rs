//! Music font glyphs (Unicode "Musical Symbols" block).

pub(super) const SINGLE_BARLINE: &str = "\u{1D100}";
pub(super) const FIVE_LINE_STAFF: &str = "\u{1D11A}";
pub(super) const G_CLEF: &str = "\u{1D11E}";
pub(super) const F_CLEF: &str = "\u{1D122}";
pub(super) const WHOLE_NOTE: &str = "\u{1D15D}";

/// A barline, `segments` five-line staff pieces, and a closing barline.
pub(super) fn staff_run(segments: usize) -> String {
    format!("{SINGLE_BARLINE}{}{SINGLE_BARLINE}", FIVE_LINE_STAFF.repeat(segments))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn staff_run_is_bracketed_by_barlines() {
        let run: Vec<String> = staff_run(15).chars().map(String::from).collect();
        assert_eq!(run.len(), 17);
        assert_eq!(run[0], SINGLE_BARLINE);
        assert_eq!(run[16], SINGLE_BARLINE);
        assert!(run[1..16].iter().all(|c| c == FIVE_LINE_STAFF));
    }
}
