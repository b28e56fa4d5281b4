//! Block letter banner art for the folio hero section.

/// Height of every glyph in lines.
pub const GLYPH_HEIGHT: usize = 5;

/// Width of a letter glyph in columns.
pub const LETTER_WIDTH: usize = 5;

/// Word gap (3 columns, plus the usual letter spacing on both sides).
pub const SPACE: [&str; GLYPH_HEIGHT] = ["   ", "   ", "   ", "   ", "   "];

/// Block letters A-Z (5 lines tall, 5 chars wide), indexed by `letter - 'A'`.
pub const LETTERS: [[&str; GLYPH_HEIGHT]; 26] = [
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

/// Look up the glyph for `c`. Letters are case-insensitive; anything that is
/// not an ASCII letter renders as a word gap.
pub fn glyph(c: char) -> &'static [&'static str; GLYPH_HEIGHT] {
    let upper = c.to_ascii_uppercase();
    if upper.is_ascii_uppercase() {
        &LETTERS[(upper as u8 - b'A') as usize]
    } else {
        &SPACE
    }
}

/// Number of columns `build_banner(text)` produces.
pub fn banner_width(text: &str) -> usize {
    let glyphs: usize = text.chars().map(|c| glyph(c)[0].chars().count()).sum();
    glyphs + text.chars().count().saturating_sub(1)
}

/// Build the banner for `text`, one string per line, glyphs separated by a
/// single space column.
pub fn build_banner(text: &str) -> Vec<String> {
    (0..GLYPH_HEIGHT)
        .map(|row| {
            let mut line = String::new();
            for (i, c) in text.chars().enumerate() {
                if i > 0 {
                    line.push(' ');
                }
                line.push_str(glyph(c)[row]);
            }
            line
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_letters_are_uniform() {
        for letter in LETTERS.iter() {
            for row in letter {
                assert_eq!(row.chars().count(), LETTER_WIDTH);
            }
        }
    }

    #[test]
    fn test_banner_dimensions() {
        let lines = build_banner("Hi there");
        assert_eq!(lines.len(), GLYPH_HEIGHT);
        for line in &lines {
            assert_eq!(line.chars().count(), banner_width("Hi there"));
        }
        // 7 letters, 1 gap, 7 separators
        assert_eq!(banner_width("Hi there"), 7 * 5 + 3 + 7);
    }

    #[test]
    fn test_lowercase_matches_uppercase() {
        assert_eq!(build_banner("abc"), build_banner("ABC"));
    }

    #[test]
    fn test_empty_banner() {
        assert_eq!(banner_width(""), 0);
        assert!(build_banner("").iter().all(|line| line.is_empty()));
    }
}
