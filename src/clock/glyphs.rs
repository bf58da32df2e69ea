//! Fixed 5-row block glyphs for the clock face.

/// Number of rows in every glyph.
pub const GLYPH_ROWS: usize = 5;

/// Terminal columns occupied by every glyph row.
pub const GLYPH_WIDTH: usize = 5;

pub type DigitGlyph = [&'static str; GLYPH_ROWS];

const ZERO: DigitGlyph = [" ███ ", "█   █", "█   █", "█   █", " ███ "];
const ONE: DigitGlyph = ["  █  ", " ██  ", "  █  ", "  █  ", " ███ "];
const TWO: DigitGlyph = [" ███ ", "    █", " ███ ", "█    ", "█████"];
const THREE: DigitGlyph = ["████ ", "    █", " ███ ", "    █", "████ "];
const FOUR: DigitGlyph = ["█  █ ", "█  █ ", "█████", "   █ ", "   █ "];
const FIVE: DigitGlyph = ["█████", "█    ", "████ ", "    █", "████ "];
const SIX: DigitGlyph = [" ███ ", "█    ", "████ ", "█   █", " ███ "];
const SEVEN: DigitGlyph = ["█████", "   █ ", "  █  ", " █   ", " █   "];
const EIGHT: DigitGlyph = [" ███ ", "█   █", " ███ ", "█   █", " ███ "];
const NINE: DigitGlyph = [" ███ ", "█   █", " ████", "    █", " ███ "];
const COLON: DigitGlyph = ["     ", "  █  ", "     ", "  █  ", "     "];

/// Glyph for a clock symbol (`0`-`9` or `:`); `None` for anything else.
pub fn glyph(ch: char) -> Option<&'static DigitGlyph> {
    match ch {
        '0' => Some(&ZERO),
        '1' => Some(&ONE),
        '2' => Some(&TWO),
        '3' => Some(&THREE),
        '4' => Some(&FOUR),
        '5' => Some(&FIVE),
        '6' => Some(&SIX),
        '7' => Some(&SEVEN),
        '8' => Some(&EIGHT),
        '9' => Some(&NINE),
        ':' => Some(&COLON),
        _ => None,
    }
}
