//! The sink a matcher writes its self-description into.
//!
//! A [`Description`] accumulates a human-readable phrase such as
//! `is not <5>` or `any of "foo" or "bar".` Matchers append to it from
//! [`Matcher::describe`](crate::Matcher::describe); the assertion entry point
//! renders it into the failure message.

use std::fmt;

/// A growable text sink for matcher descriptions.
///
/// Plain text goes in through [`text`](Description::text); expected values go
/// in through [`value`](Description::value), which renders them with `Debug`
/// so strings come out quoted and containers come out bracketed.
///
/// # Example
///
/// ```rust
/// use attest::Description;
///
/// let mut out = Description::new();
/// out.text("contains ").value(&"foo");
/// assert_eq!(out.as_str(), "contains \"foo\"");
/// ```
#[derive(Debug, Default, Clone)]
pub struct Description {
    buf: String,
}

impl Description {
    /// Create an empty description.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a fixed phrase.
    pub fn text(&mut self, phrase: &str) -> &mut Self {
        self.buf.push_str(phrase);
        self
    }

    /// Append a value rendered with its `Debug` representation.
    pub fn value<T: fmt::Debug + ?Sized>(&mut self, value: &T) -> &mut Self {
        use fmt::Write;
        // String never errors on write.
        let _ = write!(self.buf, "{:?}", value);
        self
    }

    /// The description accumulated so far.
    pub fn as_str(&self) -> &str {
        &self.buf
    }

    /// Consume the sink and return its text.
    pub fn into_string(self) -> String {
        self.buf
    }
}

impl fmt::Write for Description {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.buf.push_str(s);
        Ok(())
    }
}

impl fmt::Display for Description {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.buf)
    }
}
