//! Terminal and JSON step reporters.
//!
//! [`TerminalRenderer`] draws each snapshot as horizontal bars:
//!
//! ```text
//! > 45 ##############
//!   20 ######
//! * 10 ###
//! ```
//!
//! `>` marks highlighted indices and `*` marks indices the progress marker
//! reports as sorted. [`JsonLines`] writes one JSON object per step for
//! external renderers.

use crate::error::Result;
use crate::player::StepReporter;
use crate::session::Session;
use crate::step::{Highlights, Progress, Step};
use std::io::Write;

/// Widest bar drawn, in characters.
const MAX_BAR_WIDTH: usize = 40;

pub struct TerminalRenderer<W: Write> {
    out: W,
    title: String,
    frame: usize,
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W, title: &str) -> Self {
        TerminalRenderer {
            out,
            title: title.to_string(),
            frame: 0,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn draw(&mut self, data: &[i32], highlights: Highlights, progress: &Progress) -> Result<()> {
        let widest = data.iter().map(|v| v.unsigned_abs()).max().unwrap_or(0).max(1);
        let len = data.len();

        for (index, &value) in data.iter().enumerate() {
            let glyph = if highlights.contains(index) {
                '>'
            } else if progress.is_marked(index, len) {
                '*'
            } else {
                ' '
            };
            let width = bar_width(value, widest);
            writeln!(self.out, "{} {:>4} {}", glyph, value, "#".repeat(width))?;
        }
        Ok(())
    }
}

impl<W: Write> StepReporter for TerminalRenderer<W> {
    fn report(&mut self, step: &Step) -> Result<()> {
        self.frame += 1;
        writeln!(
            self.out,
            "{} | step {} | {:?}",
            self.title, self.frame, step.kind
        )?;
        self.draw(&step.snapshot, step.highlights, &step.progress)?;
        writeln!(self.out)?;
        self.out.flush()?;
        Ok(())
    }

    fn finished(&mut self, session: &Session) -> Result<()> {
        writeln!(self.out, "{} | done after {} steps", self.title, self.frame)?;
        self.draw(session.data(), session.highlights(), session.progress())?;
        self.out.flush()?;
        Ok(())
    }
}

/// Writes each step as one line of JSON.
pub struct JsonLines<W: Write> {
    out: W,
}

impl<W: Write> JsonLines<W> {
    pub fn new(out: W) -> Self {
        JsonLines { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> StepReporter for JsonLines<W> {
    fn report(&mut self, step: &Step) -> Result<()> {
        serde_json::to_writer(&mut self.out, step)?;
        writeln!(self.out)?;
        Ok(())
    }

    fn finished(&mut self, _session: &Session) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }
}

/// Bar length for `value`, scaled so the widest magnitude fills the bar.
/// Non-zero values always get at least one character.
fn bar_width(value: i32, widest: u32) -> usize {
    let magnitude = value.unsigned_abs() as usize;
    if magnitude == 0 {
        return 0;
    }
    (magnitude * MAX_BAR_WIDTH / widest as usize).max(1)
}
