use std::marker::PhantomData;

use serde::{de::Error, ser::SerializeSeq, ser::SerializeTuple, Deserialize, Serialize};

use crate::{generic, util::Number, Range};

impl<T: Serialize> Serialize for Range<T> {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: serde::Serializer,
	{
		let mut t = serializer.serialize_tuple(2)?;
		t.serialize_element(&self.start)?;
		t.serialize_element(&self.end)?;
		t.end()
	}
}

impl<'de, T: Number + Deserialize<'de>> Deserialize<'de> for Range<T> {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: serde::Deserializer<'de>,
	{
		struct Visitor<T>(PhantomData<T>);

		impl<'de, T: Number + Deserialize<'de>> serde::de::Visitor<'de> for Visitor<T> {
			type Value = Range<T>;

			fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
				write!(formatter, "a range")
			}

			fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
			where
				A: serde::de::SeqAccess<'de>,
			{
				let start = seq
					.next_element()?
					.ok_or_else(|| A::Error::custom("missing start bound"))?;
				let end = seq
					.next_element()?
					.ok_or_else(|| A::Error::custom("missing end bound"))?;
				Range::new(start, end).map_err(A::Error::custom)
			}
		}

		deserializer.deserialize_tuple(2, Visitor(PhantomData))
	}
}

impl<T: Serialize, L> Serialize for generic::RangeList<T, L> {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: serde::Serializer,
	{
		let mut seq = serializer.serialize_seq(Some(self.range_count()))?;

		for range in self {
			seq.serialize_element(range)?;
		}

		seq.end()
	}
}

impl<'de, T: Number + Deserialize<'de>, L: Default> Deserialize<'de> for generic::RangeList<T, L> {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: serde::Deserializer<'de>,
	{
		struct Visitor<T, L>(PhantomData<(T, L)>);

		impl<'de, T: Number + Deserialize<'de>, L: Default> serde::de::Visitor<'de> for Visitor<T, L> {
			type Value = generic::RangeList<T, L>;

			fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
				write!(formatter, "a range list")
			}

			fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
			where
				A: serde::de::SeqAccess<'de>,
			{
				let mut result = generic::RangeList::new();

				while let Some(range) = seq.next_element::<Range<T>>()? {
					result.add(range).map_err(A::Error::custom)?;
				}

				Ok(result)
			}
		}

		deserializer.deserialize_seq(Visitor(PhantomData))
	}
}
