use std::{cmp::Ordering, fmt};

use crate::{util::Number, InvalidRange};

mod convert;
mod ordering;

pub use convert::*;
pub use ordering::*;

/// Half-open range `[start, end)`.
///
/// A `Range` is always valid: its end never precedes its start.
/// A range whose start equals its end is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Range<T> {
	pub(crate) start: T,
	pub(crate) end: T,
}

impl<T: Number> Range<T> {
	/// Creates a new range, checking that `end` does not precede `start`.
	///
	/// ```
	/// use range_list::{Range, InvalidRange};
	///
	/// assert!(Range::new(1, 5).is_ok());
	/// assert!(Range::new(3, 3).unwrap().is_empty());
	/// assert!(matches!(Range::new(5, 1), Err(InvalidRange::Reversed { .. })));
	/// ```
	pub fn new(start: T, end: T) -> Result<Range<T>, InvalidRange> {
		match end.partial_cmp(&start) {
			Some(Ordering::Less) => Err(InvalidRange::Reversed {
				start: start.to_string(),
				end: end.to_string(),
			}),
			Some(_) => Ok(Range { start, end }),
			None => Err(InvalidRange::NotANumber),
		}
	}

	pub fn start(&self) -> T {
		self.start
	}

	pub fn end(&self) -> T {
		self.end
	}

	pub fn is_empty(&self) -> bool {
		self.start == self.end
	}

	/// Smallest range covering both `self` and `other` (their hull).
	///
	/// When the two ranges overlap or touch, this is exactly their union.
	/// Otherwise the result also covers the gap between them.
	pub fn merge(&self, other: &Range<T>) -> Range<T> {
		Range {
			start: if other.start < self.start {
				other.start
			} else {
				self.start
			},
			end: if other.end > self.end {
				other.end
			} else {
				self.end
			},
		}
	}

	/// Removes `exclusion` from this range.
	///
	/// Returns what is left on the left of `exclusion`, and what is left on
	/// its right. Fragments never reach outside of `self`, and empty fragments
	/// are never returned: an `exclusion` not intersecting `self` leaves it
	/// whole, on one side.
	///
	/// ```
	/// use range_list::Range;
	///
	/// let target = Range::new(1, 10).unwrap();
	/// let (left, right) = target.without(&Range::new(3, 7).unwrap());
	/// assert_eq!(left, Some(Range::new(1, 3).unwrap()));
	/// assert_eq!(right, Some(Range::new(7, 10).unwrap()));
	/// ```
	pub fn without(&self, exclusion: &Range<T>) -> (Option<Range<T>>, Option<Range<T>>) {
		let left = if exclusion.start > self.start {
			Some(Range {
				start: self.start,
				end: if exclusion.start < self.end {
					exclusion.start
				} else {
					self.end
				},
			})
		} else {
			None
		};

		let right = if self.end > exclusion.end {
			Some(Range {
				start: if exclusion.end > self.start {
					exclusion.end
				} else {
					self.start
				},
				end: self.end,
			})
		} else {
			None
		};

		(left, right)
	}
}

impl<T: fmt::Display> fmt::Display for Range<T> {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		write!(f, "[{}, {})", self.start, self.end)
	}
}
