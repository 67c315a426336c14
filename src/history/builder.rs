use crate::socket::Socket;
use crate::{History, Originator};
use core::fmt;
use core::marker::PhantomData;

/// Builder for a [`History`].
///
/// # Examples
/// ```
/// # use memento::{History, ImageEditor};
/// # let editor = ImageEditor::new(8, 8);
/// let mut history = History::builder()
///     .capacity(100)
///     .connect(|s| { dbg!(s); })
///     .build();
/// history.backup(&editor);
/// assert!(history.capacity() >= 100);
/// ```
pub struct Builder<O, S = ()> {
    capacity: usize,
    socket: Socket<S>,
    pd: PhantomData<fn() -> O>,
}

impl<O: Originator, S> Builder<O, S> {
    /// Sets the initial capacity of the history.
    ///
    /// The history grows without limit, this only avoids reallocations.
    pub fn capacity(mut self, capacity: usize) -> Builder<O, S> {
        self.capacity = capacity;
        self
    }

    /// Connects the slot.
    pub fn connect(mut self, slot: S) -> Builder<O, S> {
        self.socket = Socket::new(slot);
        self
    }

    /// Builds the history.
    pub fn build(self) -> History<O, S> {
        History {
            snapshots: Vec::with_capacity(self.capacity),
            socket: self.socket,
        }
    }
}

impl<O, S> Default for Builder<O, S> {
    fn default() -> Self {
        Builder {
            capacity: 0,
            socket: Socket::default(),
            pd: PhantomData,
        }
    }
}

impl<O, S: fmt::Debug> fmt::Debug for Builder<O, S> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Builder")
            .field("capacity", &self.capacity)
            .field("socket", &self.socket)
            .finish()
    }
}
