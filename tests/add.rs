use range_list::{InvalidRange, RangeList};

#[test]
fn add_range() {
	let mut list: RangeList<i32> = RangeList::new();

	list.add([1, 5]).unwrap();

	assert_eq!(list.range_count(), 1);
	assert_eq!(list.render(), "[1, 5)");
}

#[test]
fn add_disjoint_ranges() {
	let mut list: RangeList<i32> = RangeList::new();

	list.add([1, 5]).unwrap();
	list.add([10, 20]).unwrap();

	assert_eq!(list.render(), "[1, 5) [10, 20)");
}

#[test]
fn add_overlapping_ranges() {
	let mut list: RangeList<i32> = RangeList::new();

	list.add([1, 5]).unwrap();
	list.add([3, 8]).unwrap();

	assert_eq!(list.render(), "[1, 8)");
}

#[test]
fn add_keeps_ranges_sorted() {
	let mut list: RangeList<i32> = RangeList::new();

	list.add([-5, -2]).unwrap();
	list.add([101, 120]).unwrap();
	list.add([1, 5]).unwrap();

	assert_eq!(list.render(), "[-5, -2) [1, 5) [101, 120)");
}

#[test]
fn add_touching_ranges() {
	let mut list: RangeList<i32> = RangeList::new();

	list.add([1, 3]).unwrap();
	list.add([3, 5]).unwrap();
	assert_eq!(list.render(), "[1, 5)");

	list.add([0, 1]).unwrap();
	assert_eq!(list.render(), "[0, 5)");
}

#[test]
fn add_bridging_range() {
	let mut list: RangeList<i32> = RangeList::new();

	list.add([1, 3]).unwrap();
	list.add([5, 7]).unwrap();
	list.add([9, 11]).unwrap();
	list.add([20, 21]).unwrap();
	list.add([2, 10]).unwrap();

	assert_eq!(list.render(), "[1, 11) [20, 21)");
}

#[test]
fn add_covered_range() {
	let mut list: RangeList<i32> = RangeList::new();

	list.add([1, 10]).unwrap();
	list.add([3, 4]).unwrap();

	assert_eq!(list.render(), "[1, 10)");
}

#[test]
fn add_is_idempotent() {
	let mut once: RangeList<i32> = RangeList::new();
	once.add([1, 3]).unwrap();
	once.add([7, 9]).unwrap();

	let mut twice = once.clone();
	twice.add([7, 9]).unwrap();

	assert_eq!(once, twice);
}

#[test]
fn add_disjoint_ranges_commute() {
	let mut a: RangeList<i32> = RangeList::new();
	a.add([1, 3]).unwrap();
	a.add([5, 7]).unwrap();

	let mut b: RangeList<i32> = RangeList::new();
	b.add([5, 7]).unwrap();
	b.add([1, 3]).unwrap();

	assert_eq!(a, b);
}

#[test]
fn add_empty_range() {
	let mut list: RangeList<i32> = RangeList::new();

	list.add([4, 4]).unwrap();
	assert!(list.is_empty());

	list.add([1, 4]).unwrap();
	list.add([4, 4]).unwrap();
	list.add([2, 2]).unwrap();
	list.add([6, 6]).unwrap();
	assert_eq!(list.render(), "[1, 4)");
}

#[test]
fn add_missing_bounds() {
	let mut list: RangeList<i32> = RangeList::new();

	list.add(Vec::<i32>::new()).unwrap();
	assert!(list.is_empty());

	list.add(vec![-3]).unwrap();
	assert_eq!(list.render(), "[-3, 0)");
}

#[test]
fn add_invalid_range() {
	let mut list: RangeList<i32> = RangeList::new();
	list.add([1, 5]).unwrap();

	assert_eq!(list.add([1, 2, 3]), Err(InvalidRange::Arity(3)));
	assert_eq!(
		list.add([8, 2]),
		Err(InvalidRange::Reversed {
			start: "8".to_string(),
			end: "2".to_string()
		})
	);
	assert!(list.add(vec![7]).is_err());

	assert_eq!(list.render(), "[1, 5)");
}

#[test]
fn add_float_ranges() {
	let mut list: RangeList<f64> = RangeList::new();

	list.add([0.5, 1.0]).unwrap();
	list.add([1.0, 2.25]).unwrap();
	list.add([3.0, 4.0]).unwrap();

	assert_eq!(list.render(), "[0.5, 2.25) [3, 4)");
	assert_eq!(list.add([f64::NAN, 1.0]), Err(InvalidRange::NotANumber));
	assert_eq!(list.range_count(), 2);
}

#[test]
fn try_from_ranges() {
	let list: RangeList<i32> = RangeList::try_from_ranges([(10, 20), (1, 5), (4, 8)]).unwrap();
	assert_eq!(list.render(), "[1, 8) [10, 20)");

	let invalid: Result<RangeList<i32>, _> = RangeList::try_from_ranges([(1, 5), (5, 1)]);
	assert!(invalid.is_err());
}
