use crate::ansi::{mirror_line, visible_width};
use crate::error::SpriteError;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

/// A block of text-art lines padded to one display width.
///
/// The source lines are kept as given; the padded lines and text are derived
/// from them, so rendering is repeatable. A sprite with no source lines is the
/// explicit empty state produced when a named resource is missing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sprite {
    source: Vec<String>,
    spacing: usize,
    lines: Vec<String>,
    width: usize,
    text: String,
}

impl Sprite {
    pub fn from_lines<I, S>(lines: I, spacing: usize) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut sprite = Self {
            source: lines.into_iter().map(Into::into).collect(),
            spacing,
            lines: Vec::new(),
            width: 0,
            text: String::new(),
        };
        sprite.render();
        sprite
    }

    pub fn empty(spacing: usize) -> Self {
        Self::from_lines(Vec::<String>::new(), spacing)
    }

    fn render(&mut self) {
        let content_width = self
            .source
            .iter()
            .map(|line| visible_width(line))
            .max()
            .unwrap_or(0);
        self.width = content_width + self.spacing;

        let indent = " ".repeat(self.spacing);
        self.lines = self
            .source
            .iter()
            .map(|line| {
                let pad = content_width - visible_width(line);
                format!("{indent}{line}{}", " ".repeat(pad))
            })
            .collect();

        self.text = if self.lines.is_empty() {
            String::new()
        } else {
            let mut text = self.lines.join("\n");
            text.push('\n');
            text
        };
    }

    pub fn is_empty(&self) -> bool {
        self.source.is_empty()
    }

    /// Lines as supplied, before spacing and padding.
    pub fn source(&self) -> &[String] {
        &self.source
    }

    /// Rendered lines, each exactly `width` cells wide.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn spacing(&self) -> usize {
        self.spacing
    }

    /// Horizontal mirror. Leading spacing stays on the left.
    pub fn flip(&self) -> Sprite {
        let content_width = self.width - self.spacing;
        // padding stays outside any color the source line leaves open
        let flipped: Vec<String> = self
            .source
            .iter()
            .map(|line| {
                let pad = content_width - visible_width(line);
                format!("{}{}", " ".repeat(pad), mirror_line(line))
            })
            .collect();
        Sprite::from_lines(flipped, self.spacing)
    }

    /// Place `other` to the right of this sprite, `gap` cells apart.
    ///
    /// The shorter sprite is padded with blank rows on top so both end on the
    /// same bottom row.
    pub fn join(&self, other: &Sprite, gap: usize) -> Sprite {
        let height = self.lines.len().max(other.lines.len());
        let left = bottom_anchored(&self.lines, self.width, height);
        let right = bottom_anchored(&other.lines, other.width, height);
        let separator = " ".repeat(gap);
        let joined: Vec<String> = left
            .iter()
            .zip(right.iter())
            .map(|(l, r)| format!("{l}{separator}{r}"))
            .collect();
        Sprite::from_lines(joined, 0)
    }

    pub fn show_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "{}", self.text)
    }
}

fn bottom_anchored(lines: &[String], width: usize, height: usize) -> Vec<String> {
    let missing = height - lines.len();
    let blank = " ".repeat(width);
    std::iter::repeat(blank)
        .take(missing)
        .chain(lines.iter().cloned())
        .collect()
}

/// Sprite resources stored as one text file per sprite, named in lowercase.
#[derive(Debug, Clone)]
pub struct SpriteSheet {
    dir: PathBuf,
}

impl SpriteSheet {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path_for(&self, name: &str) -> PathBuf {
        self.dir.join(name.to_lowercase())
    }

    pub fn load(&self, name: &str, spacing: usize) -> Result<Sprite, SpriteError> {
        let path = self.path_for(name);
        let raw = fs::read_to_string(&path).map_err(|source| {
            if source.kind() == io::ErrorKind::NotFound {
                SpriteError::NotFound {
                    name: name.to_lowercase(),
                }
            } else {
                SpriteError::Io { path, source }
            }
        })?;
        tracing::debug!(sprite = name, "loaded sprite");
        Ok(Sprite::from_lines(raw.split('\n'), spacing))
    }

    /// Like [`SpriteSheet::load`], but a failure prints a notice and yields an empty sprite.
    pub fn load_or_empty(&self, name: &str, spacing: usize) -> Sprite {
        match self.load(name, spacing) {
            Ok(sprite) => sprite,
            Err(err) => {
                tracing::warn!(sprite = name, dir = %self.dir.display(), error = %err, "sprite unavailable");
                eprintln!("{err}");
                Sprite::empty(spacing)
            }
        }
    }
}
