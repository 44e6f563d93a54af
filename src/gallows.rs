//! ASCII gallows, one stage per wrong guess.

use crate::engine::MAX_ATTEMPTS;

pub const STAGE_COUNT: usize = MAX_ATTEMPTS + 1;
const STAGE_HEIGHT: usize = 7;

static STAGES: [[&str; STAGE_HEIGHT]; STAGE_COUNT] = [
    [
        "   +----+", "   |    |", "        |", "        |", "        |", "        |",
        "=========",
    ],
    [
        "   +----+", "   |    |", "   O    |", "        |", "        |", "        |",
        "=========",
    ],
    [
        "   +----+", "   |    |", "   O    |", "   |    |", "        |", "        |",
        "=========",
    ],
    [
        "   +----+", "   |    |", "   O    |", "  /|    |", "        |", "        |",
        "=========",
    ],
    [
        "   +----+", "   |    |", "   O    |", "  /|\\   |", "        |", "        |",
        "=========",
    ],
    [
        "   +----+", "   |    |", "   O    |", "  /|\\   |", "  /     |", "        |",
        "=========",
    ],
    [
        "   +----+", "   |    |", "   O    |", "  /|\\   |", "  / \\   |", "        |",
        "=========",
    ],
];

/// Lines of the gallows after `wrong_guesses` misses. Counts past the last
/// stage show the full figure.
pub fn gallows_lines(wrong_guesses: usize) -> &'static [&'static str] {
    &STAGES[wrong_guesses.min(STAGE_COUNT - 1)]
}

pub fn render_gallows(wrong_guesses: usize) -> String {
    gallows_lines(wrong_guesses).join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seven_distinct_stages() {
        let stages: Vec<String> = (0..STAGE_COUNT).map(render_gallows).collect();
        assert_eq!(stages.len(), 7);
        for pair in stages.windows(2) {
            assert_ne!(pair[0], pair[1]);
        }
    }

    #[test]
    fn test_every_stage_same_height() {
        for wrong in 0..STAGE_COUNT {
            assert_eq!(gallows_lines(wrong).len(), STAGE_HEIGHT);
        }
    }

    #[test]
    fn test_empty_and_full_figure() {
        assert!(!render_gallows(0).contains('O'));
        let full = render_gallows(6);
        assert!(full.contains("  /|\\   |"));
        assert!(full.contains("  / \\   |"));
    }

    #[test]
    fn test_clamps_past_last_stage() {
        assert_eq!(render_gallows(42), render_gallows(6));
    }
}
