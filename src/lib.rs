//! A *range list* is a sorted list of disjoint half-open ranges `[start, end)`
//! over numbers. It supports two set operations: adding a range (union) and
//! removing a range (difference). Both are performed in a single linear pass
//! over the stored ranges, keeping the list sorted, disjoint and minimal:
//! ranges sharing a boundary are always merged.
//!
//! ## Usage
//!
//! ```
//! use range_list::RangeList;
//!
//! let mut list: RangeList<i32> = RangeList::new();
//! list.add([1, 5]).unwrap();
//! list.add([10, 20]).unwrap();
//! list.add([20, 21]).unwrap();
//! assert_eq!(list.render(), "[1, 5) [10, 21)");
//!
//! list.remove([10, 11]).unwrap();
//! list.remove([15, 17]).unwrap();
//! assert_eq!(list.render(), "[1, 5) [11, 15) [17, 21)");
//! ```
//!
//! Ranges can be given as arrays, tuples, slices, vectors or standard
//! ranges. Invalid ranges are rejected and leave the list untouched:
//!
//! ```
//! # use range_list::{RangeList, InvalidRange};
//! # let mut list: RangeList<i32> = RangeList::new();
//! list.add(3..8).unwrap();
//! assert_eq!(list.add((5, 1)), Err(InvalidRange::Reversed { start: "5".into(), end: "1".into() }));
//! assert_eq!(list.add([1, 2, 3]), Err(InvalidRange::Arity(3)));
//! assert_eq!(list.render(), "[3, 8)");
//! ```
//!
//! ### Logging
//!
//! The rendered text can be sent to a [`Logger`], given when the list is
//! created. By default it goes nowhere.
//!
//! ```
//! use range_list::{generic, TracingLogger};
//!
//! let mut list = generic::RangeList::with_logger(TracingLogger);
//! list.add([0.5, 1.5]).unwrap();
//! assert_eq!(list.render(), "[0.5, 1.5)"); // also emitted as a `tracing` event.
//! ```
pub mod generic;
mod error;
mod logger;
mod range;
pub mod util;

#[cfg(feature = "serde")]
mod serde;

pub use error::*;
pub use logger::*;
pub use range::*;

pub use generic::RangeList;

pub type TracingRangeList<T> = generic::RangeList<T, TracingLogger>;
