#![cfg_attr(not(feature = "colored"), allow(unused_variables))]

use chrono::{DateTime, Local};
#[cfg(feature = "colored")]
use colored::{Color, Colorize};
use core::fmt;

pub(crate) fn default_dt_fmt(now: DateTime<Local>, at: DateTime<Local>) -> String {
    let elapsed = now.signed_duration_since(at).to_std().unwrap_or_default();
    format!("{elapsed:.1?}")
}

#[derive(Copy, Clone, Debug)]
pub(crate) struct Format {
    #[cfg(feature = "colored")]
    pub colored: bool,
    pub detailed: bool,
    pub head: bool,
}

impl Default for Format {
    fn default() -> Self {
        Format {
            #[cfg(feature = "colored")]
            colored: true,
            detailed: true,
            head: true,
        }
    }
}

impl Format {
    pub fn message(self, f: &mut fmt::Formatter, msg: &impl ToString) -> fmt::Result {
        let msg = msg.to_string();
        let lines = msg.lines();
        if self.detailed {
            for line in lines {
                writeln!(f, "{}", line.trim())?;
            }
        } else if let Some(line) = lines.map(str::trim).find(|s| !s.is_empty()) {
            f.write_str(line)?;
        }
        Ok(())
    }

    pub fn index(self, f: &mut fmt::Formatter, index: usize) -> fmt::Result {
        #[cfg(feature = "colored")]
        if self.colored {
            let index = index.to_string();
            return write!(f, "{}", index.yellow().bold());
        }
        write!(f, "{index}")
    }

    pub fn labels(self, f: &mut fmt::Formatter, index: usize, head: usize) -> fmt::Result {
        if !self.head || index != head {
            return Ok(());
        }
        #[cfg(feature = "colored")]
        if self.colored {
            return write!(
                f,
                " {}{}{}",
                "[".yellow(),
                "HEAD".cyan().bold(),
                "]".yellow()
            );
        }
        f.write_str(" [HEAD]")
    }

    pub fn elapsed(self, f: &mut fmt::Formatter, string: String) -> fmt::Result {
        #[cfg(feature = "colored")]
        if self.colored {
            return write!(f, " {}", string.color(Color::Yellow));
        }
        write!(f, " {string}")
    }

    pub fn edge(self, f: &mut fmt::Formatter) -> fmt::Result {
        #[cfg(feature = "colored")]
        if self.colored {
            return write!(f, "{} ", "|".color(Color::Cyan));
        }
        f.write_str("| ")
    }
}
