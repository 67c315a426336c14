//! Snapshot based undo history for an image editor.
//!
//! It is an implementation of the memento pattern, where the state of the target is
//! captured in opaque snapshots that only the target itself knows how to read.
//! The [`History`] stores the snapshots and hands them back to the target when undoing,
//! without ever looking inside them.
//!
//! # Features
//!
//! * [`Originator`] provides the save and restore functionality for all targets.
//! * [`Memento`] is the only view of a snapshot that code outside the target gets.
//! * [`ImageEditor`] is an originator that captures its whole state in a [`Snapshot`].
//! * [`History`] provides linear undo functionality that skips snapshots that can not be restored.
//! * Changes to the history are reported through [`Signal`]s to a connected [`Slot`].
//! * Configurable display formatting of the history.
//!
//! # Cargo Feature Flags
//!
//! | Name    | Default | Description                                                      |
//! |---------|---------|------------------------------------------------------------------|
//! | colored | ✓       | Enables colored output when visualizing the display structures. |
//! | serde   |         | Enables serialization and deserialization of signals.           |
//!
//! # Examples
//!
//! ```
//! use memento::{History, ImageEditor};
//!
//! let mut editor = ImageEditor::new(100, 100);
//! let mut history = History::new();
//!
//! history.backup(&editor);
//! editor.apply_brightness(20);
//! history.backup(&editor);
//! editor.apply_filter("Sepia");
//! editor.crop(50, 50);
//!
//! history.undo(&mut editor);
//! assert_eq!(editor.brightness(), 20);
//! assert_eq!(editor.filter(), "None");
//! assert_eq!((editor.width(), editor.height()), (100, 100));
//!
//! history.undo(&mut editor);
//! assert_eq!(editor.brightness(), 0);
//! assert!(history.undo(&mut editor).is_none());
//! ```

#![doc(html_root_url = "https://docs.rs/memento")]
#![deny(missing_docs)]
#![forbid(unsafe_code)]

pub mod editor;
mod error;
mod format;
pub mod history;
mod socket;

use chrono::{DateTime, Local};
use core::fmt;

pub use self::editor::{EditorState, ImageEditor, Snapshot, NO_FILTER};
pub use self::error::RestoreError;
pub use self::history::History;
pub use self::socket::{Signal, Slot};

/// The interface of a snapshot that is visible to code outside its originator.
///
/// The [`Display`](fmt::Display) implementation gives the human readable label of the snapshot.
pub trait Memento: fmt::Display {
    /// Returns the time the snapshot was captured.
    fn created_at(&self) -> DateTime<Local>;
}

/// Base functionality for all targets that can be stored in a [`History`].
pub trait Originator {
    /// The snapshot type produced and consumed by the originator.
    type Snapshot: Memento;

    /// Captures the current state in a new snapshot.
    ///
    /// The snapshot must not share any data with the live state.
    fn save(&self) -> Self::Snapshot;

    /// Restores the state captured in `snapshot`.
    ///
    /// # Errors
    /// Returns an error if the snapshot was not produced by this kind of originator.
    /// The state is left untouched in that case.
    fn restore(&mut self, snapshot: &Self::Snapshot) -> Result<(), RestoreError>;
}
