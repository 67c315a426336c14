use crate::format::Format;
use crate::{History, Memento, Originator};
use chrono::{DateTime, Local};
use core::fmt::{self, Write};

/// Configurable display formatting for the [`History`].
///
/// The snapshots are listed from the most recent to the oldest.
///
/// # Examples
/// ```
/// # use memento::{History, ImageEditor};
/// let editor = ImageEditor::new(640, 480);
/// let mut history = History::new();
/// history.backup(&editor);
/// history.mark("exported");
///
/// let mut display = history.display();
/// # #[cfg(feature = "colored")]
/// # display.colored(false);
/// let text = display.detailed(false).to_string();
/// let mut lines = text.lines();
/// assert!(lines.next().unwrap().starts_with("2 [HEAD] "));
/// assert!(lines.next().unwrap().ends_with(" / 640x480 / Brightness: 0 / Filter: None"));
/// assert_eq!(lines.next(), None);
/// ```
pub struct Display<'a, O: Originator, S> {
    history: &'a History<O, S>,
    format: Format,
    dt_fmt: &'a dyn Fn(DateTime<Local>, DateTime<Local>) -> String,
}

impl<'a, O: Originator, S> Display<'a, O, S> {
    /// Show colored output (on by default).
    ///
    /// Requires the `colored` feature to be enabled.
    #[cfg(feature = "colored")]
    pub fn colored(&mut self, on: bool) -> &mut Self {
        self.format.colored = on;
        self
    }

    /// Show detailed output (on by default).
    ///
    /// Detailed output shows the time elapsed since each snapshot was captured
    /// and puts the label on its own line.
    pub fn detailed(&mut self, on: bool) -> &mut Self {
        self.format.detailed = on;
        self
    }

    /// Show the most recent snapshot in the output (on by default).
    pub fn head(&mut self, on: bool) -> &mut Self {
        self.format.head = on;
        self
    }

    /// Sets the format used to display the elapsed time.
    ///
    /// The first input parameter is the current time.
    /// The second input parameter is the time the snapshot was captured.
    pub fn set_dt_fmt(
        &mut self,
        dt_fmt: &'a dyn Fn(DateTime<Local>, DateTime<Local>) -> String,
    ) -> &mut Self {
        self.dt_fmt = dt_fmt;
        self
    }
}

impl<O: Originator, S> Display<'_, O, S> {
    fn fmt_list(
        &self,
        f: &mut fmt::Formatter,
        index: usize,
        snapshot: &O::Snapshot,
        now: DateTime<Local>,
    ) -> fmt::Result {
        self.format.index(f, index)?;
        if self.format.detailed {
            let dt_fmt = self.dt_fmt;
            self.format.elapsed(f, dt_fmt(now, snapshot.created_at()))?;
        }
        self.format.labels(f, index, self.history.len())?;
        if self.format.detailed {
            writeln!(f)?;
            self.format.edge(f)?;
            self.format.message(f, snapshot)
        } else {
            f.write_char(' ')?;
            self.format.message(f, snapshot)?;
            writeln!(f)
        }
    }
}

impl<'a, O: Originator, S> From<&'a History<O, S>> for Display<'a, O, S> {
    fn from(history: &'a History<O, S>) -> Self {
        Display {
            history,
            format: Format::default(),
            dt_fmt: &crate::format::default_dt_fmt,
        }
    }
}

impl<O: Originator, S> fmt::Display for Display<'_, O, S> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let now = Local::now();
        for (i, snapshot) in self.history.snapshots.iter().enumerate().rev() {
            self.fmt_list(f, i + 1, snapshot, now)?;
        }
        Ok(())
    }
}
