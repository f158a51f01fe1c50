use std::fmt;
use unicode_width::UnicodeWidthChar;

const ESC: char = '\x1b';

/// Reset all attributes.
pub const RESET: &str = "\x1b[m";

/// A color triple. Channels are signed so derived shades may fall below zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: i16,
    pub g: i16,
    pub b: i16,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as i16,
            g: g as i16,
            b: b as i16,
        }
    }

    /// Channel-wise subtraction. The result is not clamped to 0..=255.
    pub fn shade(self, amount: i16) -> Self {
        Self {
            r: self.r - amount,
            g: self.g - amount,
            b: self.b - amount,
        }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{};{};{}", self.r, self.g, self.b)
    }
}

pub fn fg(color: Rgb) -> String {
    format!("\x1b[38;2;{color}m")
}

pub fn bg(color: Rgb) -> String {
    format!("\x1b[48;2;{color}m")
}

pub fn fg_bg(fg: Rgb, bg: Rgb) -> String {
    format!("\x1b[38;2;{fg};48;2;{bg}m")
}

/// One piece of a decoded line: either a control sequence or a visible glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token<'a> {
    Control(&'a str),
    Glyph(char),
}

fn tokens(line: &str) -> impl Iterator<Item = Token<'_>> {
    let mut rest = line;
    std::iter::from_fn(move || {
        let mut chars = rest.chars();
        let c = chars.next()?;
        if c != ESC {
            rest = chars.as_str();
            return Some(Token::Glyph(c));
        }
        let end = control_len(rest);
        let (seq, tail) = rest.split_at(end);
        rest = tail;
        Some(Token::Control(seq))
    })
}

/// Byte length of the control sequence at the start of `s` (which begins with ESC).
fn control_len(s: &str) -> usize {
    let bytes = s.as_bytes();
    if bytes.get(1) != Some(&b'[') {
        return ESC.len_utf8();
    }
    for (idx, byte) in bytes.iter().enumerate().skip(2) {
        if (0x40..=0x7e).contains(byte) {
            return idx + 1;
        }
    }
    bytes.len()
}

/// Display cells occupied by `line`, not counting control markers.
pub fn visible_width(line: &str) -> usize {
    tokens(line)
        .map(|token| match token {
            Token::Glyph(c) => c.width().unwrap_or(0),
            Token::Control(_) => 0,
        })
        .sum()
}

/// A run of glyphs drawn under the same color state.
///
/// `style` holds every control sequence issued since the last reset, so a run
/// can be re-emitted anywhere on the line without depending on its neighbours.
/// An empty `style` means the glyphs are uncolored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Run {
    pub style: String,
    pub glyphs: String,
}

fn is_reset(seq: &str) -> bool {
    matches!(seq, "\x1b[m" | "\x1b[0m")
}

/// Decode a line into colored runs. Uncolored glyphs become one run each.
pub fn parse_runs(line: &str) -> Vec<Run> {
    let mut runs = Vec::new();
    let mut style = String::new();
    let mut glyphs = String::new();

    for token in tokens(line) {
        match token {
            Token::Control(seq) => {
                if !glyphs.is_empty() {
                    runs.push(Run {
                        style: style.clone(),
                        glyphs: std::mem::take(&mut glyphs),
                    });
                }
                if is_reset(seq) {
                    style.clear();
                } else {
                    style.push_str(seq);
                }
            }
            Token::Glyph(c) if style.is_empty() => runs.push(Run {
                style: String::new(),
                glyphs: c.to_string(),
            }),
            Token::Glyph(c) => glyphs.push(c),
        }
    }
    if !glyphs.is_empty() {
        runs.push(Run { style, glyphs });
    }
    runs
}

/// Encode runs back into a marker-annotated line. Styled runs are closed with a reset.
pub fn emit_runs(runs: &[Run]) -> String {
    let mut out = String::new();
    for run in runs {
        if run.style.is_empty() {
            out.push_str(&run.glyphs);
        } else {
            out.push_str(&run.style);
            out.push_str(&run.glyphs);
            out.push_str(RESET);
        }
    }
    out
}

/// Mirror a line horizontally, keeping every colored run attached to its color.
pub fn mirror_line(line: &str) -> String {
    let mut runs = parse_runs(line);
    runs.reverse();
    emit_runs(&runs)
}
