//! End-marked source buffer.
//!
//! The buffer guarantees that the source text ends with [`END_OF_INPUT`].
//! When the caller's string does not already end with the marker, one is
//! appended at construction, so every scan terminates on a real `#`
//! character before the cursor ever runs off the end of the text.
//!
//! # Layout
//!
//! ```text
//! [source chars..., '#']
//!  ^                ^
//!  0                len() - 1
//! ```

use crate::Cursor;

/// The designated end-of-input marker character.
///
/// Also returned by [`Cursor::peek`] once the cursor is past the end.
pub const END_OF_INPUT: char = '#';

/// Owned source text terminated by [`END_OF_INPUT`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceBuffer {
    text: Box<str>,
    /// Whether construction had to append the marker.
    marker_appended: bool,
}

impl SourceBuffer {
    /// Create a buffer from source code, appending the end marker if missing.
    pub fn new(source: &str) -> Self {
        if source.ends_with(END_OF_INPUT) {
            SourceBuffer {
                text: source.into(),
                marker_appended: false,
            }
        } else {
            let mut text = String::with_capacity(source.len() + 1);
            text.push_str(source);
            text.push(END_OF_INPUT);
            SourceBuffer {
                text: text.into_boxed_str(),
                marker_appended: true,
            }
        }
    }

    /// The full text including the trailing marker.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Length in bytes, including the trailing marker.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always `false`: the marker is present even for empty input.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Returns `true` if the marker was appended rather than supplied.
    pub fn marker_appended(&self) -> bool {
        self.marker_appended
    }

    /// Consume the buffer into a [`Cursor`] positioned at byte 0.
    pub fn into_cursor(self) -> Cursor {
        Cursor::new(self)
    }
}
