use std::{fmt, marker::PhantomData};

use serde::{de::Error, ser::SerializeSeq, Deserialize, Serialize};

use crate::ConstEnum;

impl<A: Serialize> Serialize for ConstEnum<A> {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: serde::Serializer,
	{
		let mut seq = serializer.serialize_seq(Some(self.values().len()))?;
		for value in self.values() {
			seq.serialize_element(value)?;
		}
		seq.end()
	}
}

impl<'de, A: Deserialize<'de> + Ord + Clone> Deserialize<'de> for ConstEnum<A> {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: serde::Deserializer<'de>,
	{
		struct Visitor<A>(PhantomData<A>);

		impl<'de, A: Deserialize<'de> + Ord + Clone> serde::de::Visitor<'de> for Visitor<A> {
			type Value = ConstEnum<A>;

			fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
				write!(formatter, "a non-empty sequence of domain values")
			}

			fn visit_seq<S>(self, mut seq: S) -> Result<Self::Value, S::Error>
			where
				S: serde::de::SeqAccess<'de>,
			{
				let mut items = Vec::new();
				while let Some(value) = seq.next_element()? {
					items.push(value);
				}
				ConstEnum::new(items).map_err(S::Error::custom)
			}
		}

		deserializer.deserialize_seq(Visitor(PhantomData))
	}
}
