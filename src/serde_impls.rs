use core::fmt;
use core::marker::PhantomData;

use serde::de::{SeqAccess, Visitor};
use serde::ser::SerializeSeq;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::AssocArray;

// A serde map cannot carry the null key; a sequence of (key, value) tuples
// can, and it keeps insertion order.
impl<K: Serialize, V: Serialize> Serialize for AssocArray<K, V> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;

        for pair in &self.pairs {
            seq.serialize_element(&(pair.key(), pair.value()))?;
        }

        seq.end()
    }
}

impl<'de, K, V> Deserialize<'de> for AssocArray<K, V>
where
    K: Deserialize<'de> + Eq,
    V: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_seq(PairSeqVisitor {
            marker: PhantomData,
        })
    }
}

struct PairSeqVisitor<K, V> {
    marker: PhantomData<AssocArray<K, V>>,
}

impl<'de, K, V> Visitor<'de> for PairSeqVisitor<K, V>
where
    K: Deserialize<'de> + Eq,
    V: Deserialize<'de>,
{
    type Value = AssocArray<K, V>;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a sequence of key-value pairs")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        // Replaying set re-imposes key uniqueness on whatever the input holds.
        let mut array = AssocArray::new();

        while let Some((key, value)) = seq.next_element::<(Option<K>, Option<V>)>()? {
            array.set(key, value);
        }

        Ok(array)
    }
}
