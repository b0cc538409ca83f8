use thiserror::Error;

/// Error raised when an input range cannot be accepted.
///
/// Whatever the reason, the list the range was given to is left untouched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidRange {
	#[error("invalid input range: expected two bounds, got {0}")]
	Arity(usize),

	#[error("invalid input range: bounds are not numbers")]
	NotANumber,

	#[error("invalid input range: end {end} precedes start {start}")]
	Reversed { start: String, end: String },
}
