//! A history of snapshots.

mod builder;
mod display;

pub use self::{builder::Builder, display::Display};

use crate::socket::{Signal, Slot, Socket};
use crate::{Originator, Snapshot};
use core::fmt;
use core::iter::FusedIterator;
use std::slice;

/// A stack of snapshots.
///
/// The history captures the state of the target with [`backup`](History::backup) and
/// rolls it back with [`undo`](History::undo). It never looks inside the snapshots it holds,
/// it only stores them and hands them back to the target.
///
/// If the target fails to restore a snapshot, the snapshot is discarded and the one below it
/// is tried instead, until a restore succeeds or the history is empty.
///
/// # Examples
/// ```
/// # use memento::{History, ImageEditor};
/// let mut editor = ImageEditor::new(1920, 1080);
/// let mut history = History::new();
/// history.backup(&editor);
/// editor.apply_brightness(20);
/// history.backup(&editor);
/// editor.apply_filter("Sepia");
/// history.backup(&editor);
/// editor.rotate(90.0);
/// assert_eq!(history.len(), 3);
///
/// history.undo(&mut editor);
/// assert_eq!(editor.rotation(), 0.0);
/// assert_eq!(editor.filter(), "Sepia");
/// history.undo(&mut editor);
/// assert_eq!(editor.filter(), "None");
/// history.undo(&mut editor);
/// assert_eq!(editor.brightness(), 0);
/// assert!(history.is_empty());
/// ```
pub struct History<O: Originator, S = ()> {
    pub(crate) snapshots: Vec<O::Snapshot>,
    pub(crate) socket: Socket<S>,
}

impl<O: Originator> History<O> {
    /// Returns a new history.
    pub fn new() -> History<O> {
        History::builder().build()
    }
}

impl<O: Originator, S> History<O, S> {
    /// Returns a new history builder.
    pub fn builder() -> Builder<O, S> {
        Builder::default()
    }

    /// Reserves capacity for at least `additional` more snapshots.
    ///
    /// # Panics
    /// Panics if the new capacity overflows usize.
    pub fn reserve(&mut self, additional: usize) {
        self.snapshots.reserve(additional);
    }

    /// Returns the capacity of the history.
    pub fn capacity(&self) -> usize {
        self.snapshots.capacity()
    }

    /// Shrinks the capacity of the history as much as possible.
    pub fn shrink_to_fit(&mut self) {
        self.snapshots.shrink_to_fit();
    }

    /// Returns the number of snapshots in the history.
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Returns `true` if the history is empty.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Returns `true` if the history can undo.
    pub fn can_undo(&self) -> bool {
        !self.is_empty()
    }

    /// Sets how the signal should be handled when the state changes.
    ///
    /// The previous slot is returned if it exists.
    pub fn connect(&mut self, slot: S) -> Option<S> {
        self.socket.connect(Some(slot))
    }

    /// Removes and returns the slot if it exists.
    pub fn disconnect(&mut self) -> Option<S> {
        self.socket.disconnect()
    }

    /// Returns the labels of the snapshots, oldest first.
    ///
    /// The iterator is lazy and can be restarted by cloning it before use.
    pub fn show_history(&self) -> Labels<'_, O::Snapshot> {
        Labels {
            iter: self.snapshots.iter(),
        }
    }

    /// Returns a structure for configurable formatting of the history.
    pub fn display(&self) -> Display<'_, O, S> {
        Display::from(self)
    }
}

impl<O: Originator, S: Slot> History<O, S> {
    /// Captures the state of `target` and pushes the snapshot on top of the history.
    pub fn backup(&mut self, target: &O) {
        log::info!("saving state");
        self.push(target.save());
    }

    /// Pushes an already captured snapshot on top of the history.
    pub fn push(&mut self, snapshot: O::Snapshot) {
        let could_undo = self.can_undo();
        self.snapshots.push(snapshot);
        self.socket.emit_if(!could_undo, || Signal::Undo(true));
        self.socket.emit(|| Signal::Len(self.snapshots.len()));
    }

    /// Pops the most recent snapshot and restores `target` from it.
    ///
    /// Snapshots that `target` fails to restore are discarded, and the next one is tried
    /// until a restore succeeds or the history is empty.
    ///
    /// Returns `None` if there was nothing to restore, otherwise the number of snapshots
    /// that were skipped before the restore succeeded.
    pub fn undo(&mut self, target: &mut O) -> Option<usize> {
        let old = self.len();
        let mut skipped = 0;
        let mut restored = false;
        while let Some(snapshot) = self.snapshots.pop() {
            match target.restore(&snapshot) {
                Ok(()) => {
                    restored = true;
                    self.socket.emit(|| Signal::Restored);
                    break;
                }
                Err(err) => {
                    log::debug!("discarding snapshot {snapshot}: {err}");
                    skipped += 1;
                    self.socket.emit(|| Signal::Skipped);
                }
            }
        }
        if !restored {
            log::info!("no state to undo");
            self.socket.emit(|| Signal::Empty);
        }
        self.socket.emit_if(old > 0 && self.is_empty(), || Signal::Undo(false));
        let len = self.len();
        self.socket.emit_if(old != len, || Signal::Len(len));
        restored.then_some(skipped)
    }

    /// Removes all snapshots from the history without restoring them.
    pub fn clear(&mut self) {
        let could_undo = self.can_undo();
        self.snapshots.clear();
        self.socket.emit_if(could_undo, || Signal::Undo(false));
        self.socket.emit_if(could_undo, || Signal::Len(0));
    }
}

impl<O: Originator<Snapshot = Snapshot>, S: Slot> History<O, S> {
    /// Pushes a named marker on top of the history.
    ///
    /// See [`Snapshot::marker`] for more information.
    pub fn mark(&mut self, name: impl Into<String>) {
        self.push(Snapshot::marker(name));
    }
}

impl<O: Originator> Default for History<O> {
    fn default() -> History<O> {
        History::new()
    }
}

impl<O: Originator, S> fmt::Debug for History<O, S>
where
    O::Snapshot: fmt::Debug,
    S: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("History")
            .field("snapshots", &self.snapshots)
            .field("socket", &self.socket)
            .finish()
    }
}

/// Iterator over the labels of the snapshots in a [`History`].
///
/// Created by [`History::show_history`].
#[derive(Debug)]
pub struct Labels<'a, M> {
    iter: slice::Iter<'a, M>,
}

impl<M> Clone for Labels<'_, M> {
    fn clone(&self) -> Self {
        Labels {
            iter: self.iter.clone(),
        }
    }
}

impl<M: fmt::Display> Iterator for Labels<'_, M> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        self.iter.next().map(ToString::to_string)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<M: fmt::Display> DoubleEndedIterator for Labels<'_, M> {
    fn next_back(&mut self) -> Option<String> {
        self.iter.next_back().map(ToString::to_string)
    }
}

impl<M: fmt::Display> ExactSizeIterator for Labels<'_, M> {}

impl<M: fmt::Display> FusedIterator for Labels<'_, M> {}

#[cfg(test)]
mod tests {
    use super::History;
    use crate::{ImageEditor, Memento, Originator, RestoreError, Signal};
    use chrono::{DateTime, Local};
    use core::fmt;

    /// Counter whose odd snapshots can not be restored.
    #[derive(Default)]
    struct Counter(u32);

    struct Tick(u32, DateTime<Local>);

    impl fmt::Display for Tick {
        fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
            write!(f, "tick {}", self.0)
        }
    }

    impl Memento for Tick {
        fn created_at(&self) -> DateTime<Local> {
            self.1
        }
    }

    impl Originator for Counter {
        type Snapshot = Tick;

        fn save(&self) -> Tick {
            Tick(self.0, Local::now())
        }

        fn restore(&mut self, tick: &Tick) -> Result<(), RestoreError> {
            if tick.0 % 2 == 1 {
                return Err(RestoreError::UnknownVariant);
            }
            self.0 = tick.0;
            Ok(())
        }
    }

    #[test]
    fn undo_empty() {
        let mut editor = ImageEditor::new(10, 10);
        editor.apply_brightness(3);
        let before = editor.clone();
        let mut history = History::new();
        assert_eq!(history.undo(&mut editor), None);
        assert_eq!(history.undo(&mut editor), None);
        assert_eq!(editor, before);
        assert_eq!(history.len(), 0);
    }

    #[test]
    fn undo_skips_unrestorable() {
        let mut counter = Counter::default();
        let mut history = History::new();
        for _ in 0..5 {
            history.backup(&counter);
            counter.0 += 1;
        }
        assert_eq!(counter.0, 5);
        // Stack is 0 1 2 3 4, so 4 restores directly and 3 is skipped on the way to 2.
        assert_eq!(history.undo(&mut counter), Some(0));
        assert_eq!(counter.0, 4);
        assert_eq!(history.undo(&mut counter), Some(1));
        assert_eq!(counter.0, 2);
        assert_eq!(history.len(), 2);
    }

    #[test]
    fn undo_skips_until_empty() {
        let mut counter = Counter(7);
        let mut history = History::new();
        history.backup(&counter);
        history.backup(&counter);
        counter.0 = 8;
        assert_eq!(history.undo(&mut counter), None);
        assert!(history.is_empty());
        assert_eq!(counter.0, 8);
    }

    #[test]
    fn deep_history() {
        let mut counter = Counter(1);
        let mut history = History::new();
        history.push(Tick(0, Local::now()));
        for _ in 0..100_000 {
            history.backup(&counter);
        }
        assert_eq!(history.undo(&mut counter), Some(100_000));
        assert_eq!(counter.0, 0);
    }

    #[test]
    fn signals() {
        let mut signals = Vec::new();
        let mut counter = Counter::default();
        let mut history = History::builder()
            .connect(|s: Signal| signals.push(s))
            .build();
        history.backup(&counter);
        counter.0 = 1;
        history.backup(&counter);
        history.undo(&mut counter);
        history.undo(&mut counter);
        history.clear();
        drop(history);
        assert_eq!(
            signals,
            [
                Signal::Undo(true),
                Signal::Len(1),
                Signal::Len(2),
                Signal::Skipped,
                Signal::Restored,
                Signal::Undo(false),
                Signal::Len(0),
                Signal::Empty,
            ]
        );
    }

    #[test]
    fn clear() {
        let mut editor = ImageEditor::new(2, 2);
        let mut history = History::new();
        history.backup(&editor);
        history.mark("exported");
        editor.apply_filter("Sepia");
        history.clear();
        assert!(!history.can_undo());
        assert_eq!(history.undo(&mut editor), None);
        assert_eq!(editor.filter(), "Sepia");
    }

    #[test]
    fn show_history() {
        let mut counter = Counter::default();
        let mut history = History::new();
        for i in 0..3 {
            counter.0 = i;
            history.backup(&counter);
        }
        let labels = history.show_history();
        assert_eq!(labels.len(), 3);
        let first = labels.clone().collect::<Vec<_>>();
        let second = labels.collect::<Vec<_>>();
        assert_eq!(first, ["tick 0", "tick 1", "tick 2"]);
        assert_eq!(first, second);
        assert_eq!(history.show_history().rev().next().as_deref(), Some("tick 2"));
        assert_eq!(history.len(), 3);
    }
}
