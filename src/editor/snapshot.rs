use super::EditorState;
use crate::Memento;
use chrono::{DateTime, Local};
use core::fmt;

/// The kinds of snapshots that exist.
///
/// Only [`ImageEditor`](super::ImageEditor) matches on this.
#[derive(Clone)]
pub(super) enum Kind {
    Image(EditorState),
    Marker(String),
}

/// An opaque capture of an [`ImageEditor`](super::ImageEditor) at one point in time.
///
/// Code outside the editor can only read the time the snapshot was captured
/// and its label, through [`Memento`] and [`Display`](fmt::Display).
///
/// # Examples
/// ```
/// # use memento::{ImageEditor, Originator};
/// let mut editor = ImageEditor::new(1920, 1080);
/// editor.apply_brightness(20);
/// let label = editor.save().to_string();
/// assert!(label.ends_with(" / 1920x1080 / Brightness: 20 / Filter: None"));
/// ```
#[derive(Clone)]
pub struct Snapshot {
    created_at: DateTime<Local>,
    kind: Kind,
}

impl Snapshot {
    pub(super) fn image(state: EditorState) -> Snapshot {
        Snapshot {
            created_at: Local::now(),
            kind: Kind::Image(state),
        }
    }

    /// Returns a named marker.
    ///
    /// A marker can be stored in a [`History`](crate::History) like any other snapshot
    /// but it holds no editor state, so it can never be restored.
    /// Undoing past a marker discards it and restores the snapshot below it.
    pub fn marker(name: impl Into<String>) -> Snapshot {
        Snapshot {
            created_at: Local::now(),
            kind: Kind::Marker(name.into()),
        }
    }

    pub(super) fn kind(&self) -> &Kind {
        &self.kind
    }
}

impl Memento for Snapshot {
    fn created_at(&self) -> DateTime<Local> {
        self.created_at
    }
}

impl fmt::Display for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let time = self.created_at.format("%H:%M:%S");
        match &self.kind {
            Kind::Image(state) => write!(
                f,
                "{time} / {}x{} / Brightness: {} / Filter: {}",
                state.width, state.height, state.brightness, state.filter
            ),
            Kind::Marker(name) => write!(f, "{time} / {name}"),
        }
    }
}

impl fmt::Debug for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Snapshot")
            .field("created_at", &self.created_at)
            .finish_non_exhaustive()
    }
}
