use std::fmt;

use crate::{
	util::Number, InvalidRange, IntoRange, Logger, NullLogger, Range, RangeOrdering,
};

/// Range list.
///
/// Sorted list of disjoint half-open ranges. Two stored ranges never touch:
/// ranges sharing a boundary are merged when added.
///
/// The type parameter `L` is the [`Logger`] receiving the output of
/// [`render`](RangeList::render).
#[derive(Clone)]
pub struct RangeList<T, L = NullLogger> {
	ranges: Vec<Range<T>>,
	logger: L,
}

impl<T, L: Default> RangeList<T, L> {
	/// Create a new empty list.
	pub fn new() -> RangeList<T, L> {
		Self::with_logger(L::default())
	}
}

impl<T, L: Default> Default for RangeList<T, L> {
	fn default() -> Self {
		Self::new()
	}
}

impl<T, L> RangeList<T, L> {
	/// Create a new empty list rendering to the given logger.
	pub fn with_logger(logger: L) -> RangeList<T, L> {
		RangeList {
			ranges: Vec::new(),
			logger,
		}
	}

	pub fn logger(&self) -> &L {
		&self.logger
	}

	pub fn range_count(&self) -> usize {
		self.ranges.len()
	}

	pub fn is_empty(&self) -> bool {
		self.ranges.is_empty()
	}

	pub fn as_slice(&self) -> &[Range<T>] {
		&self.ranges
	}

	pub fn iter(&self) -> std::slice::Iter<Range<T>> {
		self.ranges.iter()
	}

	pub fn clear(&mut self) {
		self.ranges.clear()
	}
}

impl<T: Number, L> RangeList<T, L> {
	/// Builds a list by adding every given range in order.
	///
	/// Fails on the first invalid range.
	pub fn try_from_ranges<I>(ranges: I) -> Result<RangeList<T, L>, InvalidRange>
	where
		I: IntoIterator,
		I::Item: IntoRange<T>,
		L: Default,
	{
		let mut result = RangeList::new();

		for range in ranges {
			result.add(range)?;
		}

		Ok(result)
	}

	fn validate<R: IntoRange<T>>(range: R) -> Result<Range<T>, InvalidRange> {
		range.into_range().map_err(|e| {
			tracing::debug!("rejected input range: {}", e);
			e
		})
	}

	/// Adds a range to the list.
	///
	/// Every stored range overlapping or touching `range` is merged with it.
	/// On error the list is left unchanged.
	///
	/// ```
	/// use range_list::RangeList;
	///
	/// let mut list: RangeList<i32> = RangeList::new();
	/// list.add([1, 3]).unwrap();
	/// list.add([3, 5]).unwrap();
	/// list.add([10, 20]).unwrap();
	/// assert_eq!(list.render(), "[1, 5) [10, 20)");
	/// ```
	pub fn add<R: IntoRange<T>>(&mut self, range: R) -> Result<(), InvalidRange> {
		let mut candidate = Self::validate(range)?;
		tracing::trace!("add {}", candidate);

		let mut ranges = Vec::with_capacity(self.ranges.len() + 1);
		let mut stored = std::mem::take(&mut self.ranges).into_iter();
		let mut next = None;

		for target in stored.by_ref() {
			match candidate.locate(&target) {
				RangeOrdering::Before => ranges.push(target),
				RangeOrdering::Overlap => candidate = candidate.merge(&target),
				RangeOrdering::After => {
					next = Some(target);
					break;
				}
			}
		}

		// an empty candidate that absorbed nothing is not stored.
		if !candidate.is_empty() {
			ranges.push(candidate);
		}

		ranges.extend(next);
		ranges.extend(stored);
		self.ranges = ranges;

		tracing::trace!("{} ranges", self.ranges.len());
		Ok(())
	}

	/// Removes a range from the list.
	///
	/// Every stored range overlapping `range` is trimmed, split in two, or
	/// dropped. On error the list is left unchanged.
	///
	/// ```
	/// use range_list::RangeList;
	///
	/// let mut list: RangeList<i32> = RangeList::new();
	/// list.add([1, 10]).unwrap();
	/// list.remove([3, 7]).unwrap();
	/// assert_eq!(list.render(), "[1, 3) [7, 10)");
	/// ```
	pub fn remove<R: IntoRange<T>>(&mut self, range: R) -> Result<(), InvalidRange> {
		let candidate = Self::validate(range)?;
		tracing::trace!("remove {}", candidate);

		if candidate.is_empty() {
			return Ok(());
		}

		let mut ranges = Vec::with_capacity(self.ranges.len() + 1);
		let mut stored = std::mem::take(&mut self.ranges).into_iter();
		let mut next = None;

		for target in stored.by_ref() {
			match candidate.locate(&target) {
				RangeOrdering::Before => ranges.push(target),
				RangeOrdering::Overlap => {
					let (left, right) = target.without(&candidate);
					ranges.extend(left);
					ranges.extend(right);
				}
				RangeOrdering::After => {
					next = Some(target);
					break;
				}
			}
		}

		ranges.extend(next);
		ranges.extend(stored);
		self.ranges = ranges;

		tracing::trace!("{} ranges", self.ranges.len());
		Ok(())
	}
}

impl<T: fmt::Display, L: Logger> RangeList<T, L> {
	/// Renders the list as `[a, b) [c, d) ...`.
	///
	/// The text is also sent to the logger.
	pub fn render(&self) -> String {
		let message = self.to_string();
		self.logger.info(&message);
		message
	}
}

impl<T: fmt::Display, L> fmt::Display for RangeList<T, L> {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		for (i, range) in self.ranges.iter().enumerate() {
			if i > 0 {
				f.write_str(" ")?;
			}

			fmt::Display::fmt(range, f)?;
		}

		Ok(())
	}
}

impl<T: fmt::Debug, L> fmt::Debug for RangeList<T, L> {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		f.debug_list().entries(self.ranges.iter()).finish()
	}
}

impl<T: PartialEq, L, M> PartialEq<RangeList<T, M>> for RangeList<T, L> {
	fn eq(&self, other: &RangeList<T, M>) -> bool {
		self.ranges == other.ranges
	}
}

impl<T: Eq, L> Eq for RangeList<T, L> {}

impl<'a, T, L> IntoIterator for &'a RangeList<T, L> {
	type Item = &'a Range<T>;
	type IntoIter = std::slice::Iter<'a, Range<T>>;

	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}

impl<T, L> IntoIterator for RangeList<T, L> {
	type Item = Range<T>;
	type IntoIter = std::vec::IntoIter<Range<T>>;

	fn into_iter(self) -> Self::IntoIter {
		self.ranges.into_iter()
	}
}
