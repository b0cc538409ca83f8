pub mod list;

pub use list::RangeList;
