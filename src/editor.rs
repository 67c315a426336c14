//! An image editor that can capture its state in snapshots.

mod snapshot;

pub use self::snapshot::Snapshot;

use self::snapshot::Kind;
use crate::{Originator, RestoreError};
use core::fmt;

/// The name of the filter used when no filter has been applied.
pub const NO_FILTER: &str = "None";

/// The complete state of an [`ImageEditor`].
///
/// The pixel buffer is stored as RGB, so its length is always `width * height * 3`.
#[derive(Clone, PartialEq)]
pub struct EditorState {
    pixels: Vec<u8>,
    width: usize,
    height: usize,
    brightness: i64,
    filter: String,
    rotation: f64,
}

impl EditorState {
    fn new(width: usize, height: usize) -> EditorState {
        EditorState {
            pixels: vec![0; buffer_len(width, height)],
            width,
            height,
            brightness: 0,
            filter: String::from(NO_FILTER),
            rotation: 0.0,
        }
    }

    /// Returns the pixel buffer.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Returns the width of the image.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the height of the image.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the accumulated brightness.
    pub fn brightness(&self) -> i64 {
        self.brightness
    }

    /// Returns the name of the applied filter.
    pub fn filter(&self) -> &str {
        &self.filter
    }

    /// Returns the accumulated rotation in degrees.
    pub fn rotation(&self) -> f64 {
        self.rotation
    }
}

impl fmt::Debug for EditorState {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("EditorState")
            .field("pixels", &self.pixels.len())
            .field("width", &self.width)
            .field("height", &self.height)
            .field("brightness", &self.brightness)
            .field("filter", &self.filter)
            .field("rotation", &self.rotation)
            .finish()
    }
}

/// An image editor holding a single RGB image.
///
/// The editor is an [`Originator`], so its whole state can be captured in a [`Snapshot`]
/// and restored later. Only the editor can read what is stored in the snapshots it produces.
///
/// # Examples
/// ```
/// # use memento::{ImageEditor, Originator};
/// let mut editor = ImageEditor::new(2, 2);
/// let snapshot = editor.save();
/// editor.rotate(90.0);
/// editor.apply_filter("Sepia");
/// editor.restore(&snapshot).unwrap();
/// assert_eq!(editor.rotation(), 0.0);
/// assert_eq!(editor.filter(), "None");
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct ImageEditor {
    state: EditorState,
}

impl ImageEditor {
    /// Returns a new editor with a black `width` x `height` image.
    ///
    /// # Panics
    /// Panics if `width` or `height` is `0`, or if `width * height * 3` overflows usize.
    pub fn new(width: usize, height: usize) -> ImageEditor {
        let state = EditorState::new(width, height);
        log::info!(target: "memento::editor", "image created: {width}x{height}");
        ImageEditor { state }
    }

    /// Returns the current state.
    pub fn state(&self) -> &EditorState {
        &self.state
    }

    /// Returns the pixel buffer.
    pub fn pixels(&self) -> &[u8] {
        self.state.pixels()
    }

    /// Returns the pixel buffer as a mutable slice.
    pub fn pixels_mut(&mut self) -> &mut [u8] {
        &mut self.state.pixels
    }

    /// Returns the width of the image.
    pub fn width(&self) -> usize {
        self.state.width
    }

    /// Returns the height of the image.
    pub fn height(&self) -> usize {
        self.state.height
    }

    /// Returns the accumulated brightness.
    pub fn brightness(&self) -> i64 {
        self.state.brightness
    }

    /// Returns the name of the applied filter.
    pub fn filter(&self) -> &str {
        &self.state.filter
    }

    /// Returns the accumulated rotation in degrees.
    pub fn rotation(&self) -> f64 {
        self.state.rotation
    }

    /// Adds `delta` to the brightness.
    pub fn apply_brightness(&mut self, delta: i64) {
        self.state.brightness += delta;
        log::info!(target: "memento::editor", "brightness adjusted to {}", self.state.brightness);
    }

    /// Applies the filter named `filter`, replacing the previous one.
    pub fn apply_filter(&mut self, filter: impl Into<String>) {
        self.state.filter = filter.into();
        log::info!(target: "memento::editor", "filter applied: {}", self.state.filter);
    }

    /// Adds `degrees` to the rotation.
    ///
    /// The rotation is not normalized, so rotating by `360.0` twice gives `720.0`.
    pub fn rotate(&mut self, degrees: f64) {
        self.state.rotation += degrees;
        log::info!(target: "memento::editor", "rotation: {}°", self.state.rotation);
    }

    /// Crops the image to `width` x `height`.
    ///
    /// The pixel buffer is resized by raw index: bytes that fit in the new buffer keep their
    /// value and bytes added at the end are zero. Rows are not remapped.
    ///
    /// # Panics
    /// Panics if `width` or `height` is `0`, or if `width * height * 3` overflows usize.
    /// The image is left untouched in that case.
    pub fn crop(&mut self, width: usize, height: usize) {
        let len = buffer_len(width, height);
        self.state.width = width;
        self.state.height = height;
        self.state.pixels.resize(len, 0);
        log::info!(target: "memento::editor", "image cropped to {width}x{height}");
    }
}

impl Originator for ImageEditor {
    type Snapshot = Snapshot;

    fn save(&self) -> Snapshot {
        Snapshot::image(self.state.clone())
    }

    fn restore(&mut self, snapshot: &Snapshot) -> Result<(), RestoreError> {
        match snapshot.kind() {
            Kind::Image(state) => {
                self.state.clone_from(state);
                log::info!(target: "memento::editor", "state restored: {snapshot}");
                Ok(())
            }
            Kind::Marker(_) => Err(RestoreError::UnknownVariant),
        }
    }
}

impl fmt::Display for ImageEditor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "--- Current State ---")?;
        writeln!(f, "Dimensions: {}x{}", self.width(), self.height())?;
        writeln!(f, "Brightness: {}", self.brightness())?;
        writeln!(f, "Filter: {}", self.filter())?;
        writeln!(f, "Rotation: {}°", self.rotation())?;
        f.write_str("---------------------")
    }
}

fn buffer_len(width: usize, height: usize) -> usize {
    assert!(width > 0 && height > 0, "image dimensions can not be `0`");
    width
        .checked_mul(height)
        .and_then(|n| n.checked_mul(3))
        .expect("image dimensions overflow the pixel buffer length")
}

#[cfg(test)]
mod tests {
    use super::{ImageEditor, NO_FILTER};
    use crate::{Memento, Originator, RestoreError, Snapshot};

    #[test]
    fn new() {
        let editor = ImageEditor::new(4, 2);
        assert_eq!(editor.pixels().len(), 24);
        assert!(editor.pixels().iter().all(|&b| b == 0));
        assert_eq!(editor.brightness(), 0);
        assert_eq!(editor.filter(), NO_FILTER);
        assert_eq!(editor.rotation(), 0.0);
    }

    #[test]
    #[should_panic(expected = "image dimensions can not be `0`")]
    fn new_zero() {
        ImageEditor::new(0, 10);
    }

    #[test]
    #[should_panic(expected = "image dimensions overflow the pixel buffer length")]
    fn new_overflow() {
        ImageEditor::new(usize::MAX, 2);
    }

    #[test]
    fn crop_overflow_keeps_image() {
        use std::panic::{catch_unwind, AssertUnwindSafe};

        let mut editor = ImageEditor::new(1, 1);
        editor.pixels_mut().copy_from_slice(&[1, 2, 3]);
        let before = editor.clone();
        let result = catch_unwind(AssertUnwindSafe(|| editor.crop(1 << (usize::BITS - 1), 2)));
        assert!(result.is_err());
        assert_eq!(editor, before);
        assert_eq!(editor.pixels().len(), editor.width() * editor.height() * 3);
    }

    #[test]
    fn accumulate() {
        let mut editor = ImageEditor::new(1, 1);
        editor.apply_brightness(20);
        editor.apply_brightness(-50);
        editor.rotate(270.0);
        editor.rotate(180.0);
        assert_eq!(editor.brightness(), -30);
        assert_eq!(editor.rotation(), 450.0);
    }

    #[test]
    fn crop_smaller_truncates() {
        let mut editor = ImageEditor::new(2, 2);
        for (i, b) in editor.pixels_mut().iter_mut().enumerate() {
            *b = i as u8 + 1;
        }
        editor.crop(1, 2);
        assert_eq!(editor.pixels(), &[1, 2, 3, 4, 5, 6]);
        assert_eq!((editor.width(), editor.height()), (1, 2));
    }

    #[test]
    fn crop_larger_zero_extends() {
        let mut editor = ImageEditor::new(1, 1);
        editor.pixels_mut().copy_from_slice(&[7, 8, 9]);
        editor.crop(2, 1);
        assert_eq!(editor.pixels(), &[7, 8, 9, 0, 0, 0]);
    }

    #[test]
    fn crop_same_size() {
        let mut editor = ImageEditor::new(2, 1);
        editor.pixels_mut().copy_from_slice(&[1, 2, 3, 4, 5, 6]);
        editor.crop(2, 1);
        assert_eq!(editor.pixels(), &[1, 2, 3, 4, 5, 6]);
        // Same area with other dimensions keeps the bytes as well.
        editor.crop(1, 2);
        assert_eq!(editor.pixels(), &[1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn snapshot_is_isolated() {
        let mut editor = ImageEditor::new(1, 1);
        editor.pixels_mut().copy_from_slice(&[1, 1, 1]);
        let snapshot = editor.save();
        let before = editor.clone();
        editor.pixels_mut().copy_from_slice(&[9, 9, 9]);
        editor.apply_brightness(5);
        editor.apply_filter("Sepia");
        editor.rotate(10.0);
        editor.crop(3, 3);
        editor.restore(&snapshot).unwrap();
        assert_eq!(editor, before);
        // Restoring must copy, so editing again leaves the snapshot untouched.
        editor.pixels_mut()[0] = 42;
        editor.restore(&snapshot).unwrap();
        assert_eq!(editor, before);
    }

    #[test]
    fn restore_marker() {
        let mut editor = ImageEditor::new(3, 3);
        editor.apply_brightness(10);
        let before = editor.clone();
        let marker = Snapshot::marker("checkpoint");
        assert_eq!(editor.restore(&marker), Err(RestoreError::UnknownVariant));
        assert_eq!(editor, before);
    }

    #[test]
    fn display() {
        let mut editor = ImageEditor::new(1920, 1080);
        editor.apply_brightness(20);
        editor.apply_filter("Sepia");
        editor.rotate(90.0);
        let text = editor.to_string();
        assert!(text.contains("Dimensions: 1920x1080"));
        assert!(text.contains("Brightness: 20"));
        assert!(text.contains("Filter: Sepia"));
        assert!(text.contains("Rotation: 90°"));
        assert!(editor.save().created_at() <= chrono::Local::now());
    }
}
