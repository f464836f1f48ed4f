//! Keyboard source trait

/// Source of key presses
///
/// Polled once per loop iteration. Returns the character code of a new
/// press, or `None` when nothing was pressed since the last poll.
pub trait KeySource {
    /// Poll for the next key press
    fn poll(&mut self) -> Option<char>;
}
