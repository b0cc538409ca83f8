use std::fmt::{Debug, Display};

/// Range bound.
///
/// Any totally ordered number works, as long as it can be copied around and
/// printed. Floating point numbers are accepted, but `NaN` bounds are rejected
/// when a range is built.
pub trait Number: Copy + PartialOrd + Debug + Display {
	/// Value given to missing bounds.
	const ZERO: Self;
}

macro_rules! impl_number {
	($($ty:ty),*) => {
		$(
			impl Number for $ty {
				const ZERO: $ty = 0;
			}
		)*
	};
}

impl_number!(u8, u16, u32, u64, u128, usize);
impl_number!(i8, i16, i32, i64, i128, isize);

macro_rules! impl_f_number {
	($($ty:ty),*) => {
		$(
			impl Number for $ty {
				const ZERO: $ty = 0.0;
			}
		)*
	};
}

impl_f_number!(f32, f64);
