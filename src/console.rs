use anyhow::{bail, Context, Result};
use std::io::{self, BufRead, StdinLock, Stdout, Write};

pub struct Console<R, W> {
    input: R,
    output: W,
}

impl Console<StdinLock<'static>, Stdout> {
    pub fn stdio() -> Self {
        Console::new(io::stdin().lock(), io::stdout())
    }
}

/// `Some(index)` if `input` is all digits and names one of `count` choices.
pub fn parse_choice(input: &str, count: usize) -> Option<usize> {
    if input.is_empty() || !input.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    input.parse::<usize>().ok().filter(|choice| *choice < count)
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Print `text` without a newline and read one line back, minus the line ending.
    pub fn prompt(&mut self, text: &str) -> Result<String> {
        write!(self.output, "{text}")?;
        self.output.flush()?;
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("failed to read from the terminal")?;
        if read == 0 {
            bail!("input closed while waiting for an answer to '{}'", text.trim());
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(line)
    }

    /// Draw a menu and ask until the answer is a valid index below `count`.
    ///
    /// `draw` is called before every attempt so the hint appears under a fresh menu.
    pub fn choose<F>(&mut self, prompt: &str, count: usize, mut draw: F) -> Result<usize>
    where
        F: FnMut(&mut W) -> io::Result<()>,
    {
        draw(&mut self.output)?;
        let mut answer = self.prompt(prompt)?;
        loop {
            if let Some(choice) = parse_choice(&answer, count) {
                writeln!(self.output)?;
                return Ok(choice);
            }
            tracing::debug!(answer = %answer, count, "rejected menu input");
            draw(&mut self.output)?;
            writeln!(
                self.output,
                "Please show a valid option (0 - {}).",
                count.saturating_sub(1)
            )?;
            answer = self.prompt(prompt)?;
        }
    }
}
