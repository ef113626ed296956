//! Block-letter ASCII art for the page header.

/// Height of every letter, in lines.
pub const LETTER_HEIGHT: usize = 5;

/// Width of every letter, in columns.
pub const LETTER_WIDTH: usize = 5;

/// Large block letters A to Z (5 lines tall, 5 chars wide)
const LETTERS: [[&str; LETTER_HEIGHT]; 26] = [
    // A
    [
        " ███ ",
        "█   █",
        "█████",
        "█   █",
        "█   █",
    ],
    // B
    [
        "████ ",
        "█   █",
        "████ ",
        "█   █",
        "████ ",
    ],
    // C
    [
        " ████",
        "█    ",
        "█    ",
        "█    ",
        " ████",
    ],
    // D
    [
        "████ ",
        "█   █",
        "█   █",
        "█   █",
        "████ ",
    ],
    // E
    [
        "█████",
        "█    ",
        "████ ",
        "█    ",
        "█████",
    ],
    // F
    [
        "█████",
        "█    ",
        "████ ",
        "█    ",
        "█    ",
    ],
    // G
    [
        " ████",
        "█    ",
        "█  ██",
        "█   █",
        " ████",
    ],
    // H
    [
        "█   █",
        "█   █",
        "█████",
        "█   █",
        "█   █",
    ],
    // I
    [
        "█████",
        "  █  ",
        "  █  ",
        "  █  ",
        "█████",
    ],
    // J
    [
        "█████",
        "   █ ",
        "   █ ",
        "█  █ ",
        " ██  ",
    ],
    // K
    [
        "█   █",
        "█  █ ",
        "███  ",
        "█  █ ",
        "█   █",
    ],
    // L
    [
        "█    ",
        "█    ",
        "█    ",
        "█    ",
        "█████",
    ],
    // M
    [
        "█   █",
        "██ ██",
        "█ █ █",
        "█   █",
        "█   █",
    ],
    // N
    [
        "█   █",
        "██  █",
        "█ █ █",
        "█  ██",
        "█   █",
    ],
    // O
    [
        " ███ ",
        "█   █",
        "█   █",
        "█   █",
        " ███ ",
    ],
    // P
    [
        "████ ",
        "█   █",
        "████ ",
        "█    ",
        "█    ",
    ],
    // Q
    [
        " ███ ",
        "█   █",
        "█ █ █",
        "█  █ ",
        " ██ █",
    ],
    // R
    [
        "████ ",
        "█   █",
        "████ ",
        "█  █ ",
        "█   █",
    ],
    // S
    [
        " ████",
        "█    ",
        " ███ ",
        "    █",
        "████ ",
    ],
    // T
    [
        "█████",
        "  █  ",
        "  █  ",
        "  █  ",
        "  █  ",
    ],
    // U
    [
        "█   █",
        "█   █",
        "█   █",
        "█   █",
        " ███ ",
    ],
    // V
    [
        "█   █",
        "█   █",
        "█   █",
        " █ █ ",
        "  █  ",
    ],
    // W
    [
        "█   █",
        "█   █",
        "█ █ █",
        "██ ██",
        "█   █",
    ],
    // X
    [
        "█   █",
        " █ █ ",
        "  █  ",
        " █ █ ",
        "█   █",
    ],
    // Y
    [
        "█   █",
        " █ █ ",
        "  █  ",
        "  █  ",
        "  █  ",
    ],
    // Z
    [
        "█████",
        "   █ ",
        "  █  ",
        " █   ",
        "█████",
    ],
];

/// Blank cell used for spaces and characters the font does not cover.
const BLANK: &str = "     ";

/// Columns between two letters.
const LETTER_GAP: &str = " ";

fn letter_rows(ch: char) -> Option<&'static [&'static str; LETTER_HEIGHT]> {
    let upper = ch.to_ascii_uppercase();
    if upper.is_ascii_uppercase() {
        Some(&LETTERS[(upper as u8 - b'A') as usize])
    } else {
        None
    }
}

/// Build large block-letter art for `text`.
///
/// Letters are case-insensitive; anything outside A-Z renders as a blank
/// letter-sized gap.
///
/// # Returns
/// A vector of [`LETTER_HEIGHT`] strings, each one line of the art.
pub fn build_banner(text: &str) -> Vec<String> {
    (0..LETTER_HEIGHT)
        .map(|row| {
            text.chars()
                .map(|ch| letter_rows(ch).map_or(BLANK, |rows| rows[row]))
                .collect::<Vec<_>>()
                .join(LETTER_GAP)
        })
        .collect()
}

/// Display width, in columns, of the art [`build_banner`] produces.
pub fn banner_width(text: &str) -> usize {
    let letters = text.chars().count();
    if letters == 0 {
        return 0;
    }
    letters * LETTER_WIDTH + (letters - 1) * LETTER_GAP.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_letter_is_well_formed() {
        for rows in LETTERS {
            for row in rows {
                assert_eq!(row.chars().count(), LETTER_WIDTH);
            }
        }
    }

    #[test]
    fn test_banner_dimensions() {
        let art = build_banner("M Shashidhar");
        assert_eq!(art.len(), LETTER_HEIGHT);
        for line in &art {
            assert_eq!(line.chars().count(), banner_width("M Shashidhar"));
        }
    }

    #[test]
    fn test_banner_is_case_insensitive() {
        assert_eq!(build_banner("abc"), build_banner("ABC"));
    }

    #[test]
    fn test_unknown_characters_are_blank() {
        let art = build_banner("?");
        assert!(art.iter().all(|line| line.trim().is_empty()));
    }

    #[test]
    fn test_empty_text() {
        assert_eq!(banner_width(""), 0);
        assert!(build_banner("").iter().all(String::is_empty));
    }
}
