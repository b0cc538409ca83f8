use super::Range;
use crate::util::Number;

/// Position of a stored range relative to a candidate range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeOrdering {
	/// The stored range ends strictly before the candidate starts.
	Before,

	/// The ranges intersect, or touch.
	Overlap,

	/// The stored range starts strictly after the candidate ends.
	After,
}

impl RangeOrdering {
	/// `-1` for `Before`, `0` for `Overlap` and `1` for `After`.
	pub fn as_i8(&self) -> i8 {
		match self {
			RangeOrdering::Before => -1,
			RangeOrdering::Overlap => 0,
			RangeOrdering::After => 1,
		}
	}
}

impl<T: Number> Range<T> {
	/// Locates `stored` relative to this range.
	///
	/// Ranges sharing a boundary (`self.end == stored.start` or
	/// `self.start == stored.end`) overlap: they can be merged into one, and
	/// they collide when removing.
	///
	/// ```
	/// use range_list::{Range, RangeOrdering};
	///
	/// let candidate = Range::new(3, 5).unwrap();
	/// assert_eq!(candidate.locate(&Range::new(0, 2).unwrap()), RangeOrdering::Before);
	/// assert_eq!(candidate.locate(&Range::new(5, 9).unwrap()), RangeOrdering::Overlap);
	/// assert_eq!(candidate.locate(&Range::new(6, 9).unwrap()), RangeOrdering::After);
	/// ```
	pub fn locate(&self, stored: &Range<T>) -> RangeOrdering {
		if self.end < stored.start {
			RangeOrdering::After
		} else if self.start > stored.end {
			RangeOrdering::Before
		} else {
			RangeOrdering::Overlap
		}
	}
}
