//! String concatenation of displayable elements.

use crate::collector::Collector;
use crate::error::Result;
use std::fmt::Display;

/// Concatenates elements with a delimiter between them and a prefix and
/// suffix around the whole result, each written once.
///
/// No elements yields `prefix + suffix`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Joining {
    delimiter: String,
    prefix: String,
    suffix: String,
}

/// Join with a single space.
#[must_use]
pub fn joining() -> Joining {
    joining_with(" ")
}

/// Join with `delimiter`.
#[must_use]
pub fn joining_with(delimiter: impl Into<String>) -> Joining {
    joining_full(delimiter, "", "")
}

/// Join with `delimiter`, wrapped in `prefix` and `suffix`.
///
/// ```
/// use ironstream::Stream;
/// use ironstream::collectors::joining_full;
///
/// # fn main() -> anyhow::Result<()> {
/// let s = Stream::from_vec(vec!["a", "b", "c"]).collect(joining_full(", ", "[", "]"))?;
/// assert_eq!(s, "[a, b, c]");
/// # Ok(())
/// # }
/// ```
#[must_use]
pub fn joining_full(
    delimiter: impl Into<String>,
    prefix: impl Into<String>,
    suffix: impl Into<String>,
) -> Joining {
    Joining {
        delimiter: delimiter.into(),
        prefix: prefix.into(),
        suffix: suffix.into(),
    }
}

/// Accumulator for [`Joining`]: the text so far, and whether anything was
/// appended after the prefix.
#[derive(Debug, Default)]
pub struct JoinBuffer {
    text: String,
    started: bool,
}

impl<T: Display> Collector<T> for Joining {
    type Acc = JoinBuffer;
    type Output = String;

    fn supply(&self) -> JoinBuffer {
        JoinBuffer {
            text: self.prefix.clone(),
            started: false,
        }
    }

    fn accumulate(&self, acc: &mut JoinBuffer, item: T) {
        if acc.started {
            acc.text.push_str(&self.delimiter);
        }
        acc.started = true;
        acc.text.push_str(&item.to_string());
    }

    fn finish(&self, mut acc: JoinBuffer) -> Result<String> {
        acc.text.push_str(&self.suffix);
        Ok(acc.text)
    }
}
