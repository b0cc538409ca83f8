use super::Range;
use crate::{util::Number, InvalidRange};

/// Types that can be turned into a validated [`Range`].
///
/// Sequences of bounds (slices, arrays, vectors) follow a permissive
/// construction: a missing bound is [`Number::ZERO`], so `[]` is `[0, 0)`
/// and `[7]` is `[7, 0)` (which is then rejected). More than two bounds is an
/// error.
pub trait IntoRange<T> {
	fn into_range(self) -> Result<Range<T>, InvalidRange>;
}

impl<T: Number> IntoRange<T> for Range<T> {
	fn into_range(self) -> Result<Range<T>, InvalidRange> {
		Ok(self)
	}
}

impl<T: Number> IntoRange<T> for (T, T) {
	fn into_range(self) -> Result<Range<T>, InvalidRange> {
		Range::new(self.0, self.1)
	}
}

impl<T: Number> IntoRange<T> for std::ops::Range<T> {
	fn into_range(self) -> Result<Range<T>, InvalidRange> {
		Range::new(self.start, self.end)
	}
}

impl<'a, T: Number> IntoRange<T> for &'a [T] {
	fn into_range(self) -> Result<Range<T>, InvalidRange> {
		match *self {
			[] => Range::new(T::ZERO, T::ZERO),
			[start] => Range::new(start, T::ZERO),
			[start, end] => Range::new(start, end),
			_ => Err(InvalidRange::Arity(self.len())),
		}
	}
}

impl<T: Number, const N: usize> IntoRange<T> for [T; N] {
	fn into_range(self) -> Result<Range<T>, InvalidRange> {
		self.as_slice().into_range()
	}
}

impl<'a, T: Number, const N: usize> IntoRange<T> for &'a [T; N] {
	fn into_range(self) -> Result<Range<T>, InvalidRange> {
		self.as_slice().into_range()
	}
}

impl<T: Number> IntoRange<T> for Vec<T> {
	fn into_range(self) -> Result<Range<T>, InvalidRange> {
		self.as_slice().into_range()
	}
}

impl<'a, T: Number> IntoRange<T> for &'a Vec<T> {
	fn into_range(self) -> Result<Range<T>, InvalidRange> {
		self.as_slice().into_range()
	}
}
