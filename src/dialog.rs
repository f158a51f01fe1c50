use crate::ansi::{bg, fg, fg_bg, Rgb, RESET};
use std::io::{self, Write};

/// How much darker the bevel is than the background.
const SHADOW_DEPTH: i16 = 45;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogStyle {
    pub edge: Rgb,
    pub background: Rgb,
    pub text: Rgb,
    /// Blank cells between frame and text. Only `border / 2` blank rows are drawn.
    pub border: usize,
    /// Indentation of the whole box.
    pub spacing: i64,
    pub centered: bool,
}

impl Default for DialogStyle {
    fn default() -> Self {
        Self {
            edge: Rgb::BLACK,
            background: Rgb::new(254, 254, 254),
            text: Rgb::BLACK,
            border: 0,
            spacing: 0,
            centered: true,
        }
    }
}

impl DialogStyle {
    pub fn with_border(mut self, border: usize) -> Self {
        self.border = border;
        self
    }
}

/// A styled frame that can be filled with successive sets of lines.
#[derive(Debug, Clone)]
pub struct DialogBox {
    style: DialogStyle,
    shadow: Rgb,
    lines: Option<Vec<String>>,
    width: usize,
    text: String,
}

impl DialogBox {
    pub fn new(style: DialogStyle) -> Self {
        let shadow = style.background.shade(SHADOW_DEPTH);
        Self {
            style,
            shadow,
            lines: None,
            width: 0,
            text: String::new(),
        }
    }

    pub fn style(&self) -> &DialogStyle {
        &self.style
    }

    pub fn shadow(&self) -> Rgb {
        self.shadow
    }

    pub fn spacing(&self) -> i64 {
        self.style.spacing
    }

    /// Width of the last render; zero before any content is set.
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn lines(&self) -> Option<&[String]> {
        self.lines.as_deref()
    }

    /// The rendered block, or `None` while the box has no content.
    pub fn text(&self) -> Option<&str> {
        self.lines.as_ref().map(|_| self.text.as_str())
    }

    /// Replace the content and return the freshly rendered block.
    pub fn update<I, S>(&mut self, lines: I) -> &str
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.lines = Some(lines.into_iter().map(Into::into).collect());
        self.render();
        &self.text
    }

    /// Indent the box so it sits centred over something `target` cells wide.
    pub fn center(&mut self, target: usize) {
        let offset = (target as f64 - self.width as f64) / 2.0;
        self.style.spacing = offset.round_ties_even() as i64;
        self.render();
    }

    /// Content lines padded for alignment inside the frame.
    pub fn positioned_lines(&self) -> Vec<String> {
        let Some(lines) = &self.lines else {
            return Vec::new();
        };
        let border = self.style.border;
        let max_length = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0);

        lines
            .iter()
            .map(|line| {
                let length = line.chars().count();
                let diff = max_length - length;
                if self.style.centered {
                    let lead = border + (diff + max_length % 2) / 2;
                    let trail = lead + length % 2;
                    format!("{}{line}{}", " ".repeat(lead), " ".repeat(trail))
                } else {
                    format!("{}{line}{}", " ".repeat(border), " ".repeat(border + diff))
                }
            })
            .collect()
    }

    pub fn render(&mut self) {
        if self.lines.is_none() {
            return;
        }
        let positioned = self.positioned_lines();
        let max_length = positioned
            .iter()
            .map(|l| l.chars().count())
            .max()
            .unwrap_or(0);
        self.width = max_length + 6;
        self.text = self.frame(&positioned, max_length);
    }

    fn frame(&self, positioned: &[String], max_length: usize) -> String {
        let edge = self.style.edge;
        let fill = self.style.background;
        let shadow = self.shadow;
        let ink = self.style.text;

        let indent = " ".repeat(self.style.spacing.max(0) as usize);
        let new_line = format!("\n{indent}");
        let cap_run = max_length.saturating_sub(4);
        let shoulder_run = " ".repeat(max_length.saturating_sub(2));
        let blank_row = format!(
            "{} {}{}{RESET}{} {RESET}{new_line}",
            bg(edge),
            bg(fill),
            " ".repeat(max_length),
            bg(edge)
        );

        let mut out = String::new();
        out.push_str(&format!(
            "{indent} {}▄{}▄{}{}{}▄{RESET}{}▄ {RESET}{new_line}",
            fg(edge),
            fg_bg(shadow, edge),
            fg_bg(edge, fill),
            "▀".repeat(cap_run),
            fg_bg(shadow, edge),
            fg(edge)
        ));
        out.push_str(&format!(
            "{} {}▄{}{shoulder_run}{}▄{RESET}{} {RESET}{new_line}",
            bg(edge),
            fg_bg(fill, shadow),
            bg(fill),
            fg_bg(fill, shadow),
            bg(edge)
        ));
        out.push_str(&blank_row.repeat(self.style.border / 2));
        for line in positioned {
            out.push_str(&format!(
                "{} {}{}{line}{RESET}{} {RESET}{new_line}",
                bg(edge),
                bg(fill),
                fg(ink),
                bg(edge)
            ));
        }
        out.push_str(&blank_row.repeat(self.style.border / 2));
        out.push_str(&format!(
            "{} {}▀{}{shoulder_run}{RESET}{}▀{} {RESET}{new_line}",
            bg(edge),
            fg_bg(fill, shadow),
            bg(fill),
            fg_bg(fill, shadow),
            bg(edge)
        ));
        out.push_str(&format!(
            " {}▀{}▄{}{}{RESET}{}▄{RESET}{}▀{RESET}",
            fg(edge),
            fg_bg(edge, shadow),
            fg_bg(edge, fill),
            "▄".repeat(cap_run),
            fg_bg(edge, shadow),
            fg(edge)
        ));
        out
    }

    /// Re-render and print. Does nothing until content has been set.
    pub fn show_to<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        if self.lines.is_none() {
            return Ok(());
        }
        self.render();
        writeln!(out, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(text: &str) -> String {
        let mut out = String::new();
        let mut in_seq = false;
        for c in text.chars() {
            match c {
                '\x1b' => in_seq = true,
                'm' if in_seq => in_seq = false,
                _ if in_seq => {}
                _ => out.push(c),
            }
        }
        out
    }

    #[test]
    fn centered_lines_share_one_length() {
        let mut dialog = DialogBox::new(DialogStyle::default().with_border(2));
        dialog.update(["0 - Play", "1 - Exit", "odd", "even"]);
        let positioned = dialog.positioned_lines();
        assert_eq!(positioned[0], "  0 - Play  ");
        assert_eq!(positioned[2], "    odd     ");
        assert_eq!(positioned[3], "    even    ");
        assert!(positioned.iter().all(|l| l.chars().count() == 12));
    }

    #[test]
    fn centered_odd_maximum() {
        let mut dialog = DialogBox::new(DialogStyle::default());
        dialog.update(["abcde", "abcd", "abc"]);
        assert_eq!(dialog.positioned_lines(), ["abcde ", " abcd ", " abc  "]);
    }

    #[test]
    fn left_aligned_pads_on_the_right() {
        let style = DialogStyle {
            centered: false,
            border: 1,
            ..DialogStyle::default()
        };
        let mut dialog = DialogBox::new(style);
        dialog.update(["long line", "short"]);
        assert_eq!(dialog.positioned_lines(), [" long line ", " short     "]);
    }

    #[test]
    fn width_is_positioned_length_plus_six() {
        let mut dialog = DialogBox::new(DialogStyle::default().with_border(2));
        dialog.update(["Pikachu used Thunder", "It was effective."]);
        assert_eq!(dialog.width(), 20 + 4 + 6);
    }

    #[test]
    fn frame_rows_follow_border() {
        let mut dialog = DialogBox::new(DialogStyle::default().with_border(3));
        let text = dialog.update(["hi"]).to_string();
        // cap, shoulder, one padding row, content, one padding row, shoulder, cap
        assert_eq!(text.lines().count(), 7);
        let rows: Vec<String> = text.lines().map(plain).collect();
        assert_eq!(rows[0], " ▄▄▀▀▀▀▄▄ ");
        assert_eq!(rows[1], " ▄      ▄ ");
        assert_eq!(rows[3], "    hi    ");
        assert_eq!(rows[6], " ▀▄▄▄▄▄▄▀");
    }

    #[test]
    fn shadow_is_unclamped() {
        let style = DialogStyle {
            background: Rgb::new(20, 200, 45),
            ..DialogStyle::default()
        };
        let mut dialog = DialogBox::new(style);
        let text = dialog.update(["x"]).to_string();
        assert_eq!(dialog.shadow(), Rgb { r: -25, g: 155, b: 0 });
        assert!(text.contains("\x1b[38;2;0;0;0;48;2;-25;155;0m▄"));
    }

    #[test]
    fn center_uses_half_to_even() {
        let mut dialog = DialogBox::new(DialogStyle::default());
        dialog.update(["abc"]);
        assert_eq!(dialog.width(), 10);
        dialog.center(15);
        assert_eq!(dialog.spacing(), 2);
        dialog.center(17);
        assert_eq!(dialog.spacing(), 4);
        dialog.center(9);
        assert_eq!(dialog.spacing(), 0);
        dialog.center(7);
        assert_eq!(dialog.spacing(), -2);
        assert!(dialog.text().is_some_and(|t| t.starts_with(" \x1b")));
    }

    #[test]
    fn show_without_content_prints_nothing() {
        let mut dialog = DialogBox::new(DialogStyle::default());
        let mut out = Vec::new();
        dialog.show_to(&mut out).unwrap();
        assert!(out.is_empty());
        assert!(dialog.text().is_none());
    }
}
