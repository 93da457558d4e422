//! Human-readable formats get text whenever the content can be represented as text. Compact
//! formats always get the same shape: bytes for `u8` strings, a sequence of code units for the
//! wider ones.

use core::fmt;
use core::marker::PhantomData;

use serde::de::{Deserialize, Deserializer, Error as _, SeqAccess, Visitor};
use serde::ser::{Serialize, Serializer};

use crate::{Char, FixedString};

impl<const N: usize> Serialize for FixedString<N, u8> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if serializer.is_human_readable() {
            if let Ok(s) = self.to_str() {
                return serializer.serialize_str(s);
            }
        }
        serializer.serialize_bytes(self)
    }
}

impl<'de, const N: usize> Deserialize<'de> for FixedString<N, u8> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        if deserializer.is_human_readable() {
            deserializer.deserialize_any(FixedStringVisitor(PhantomData))
        } else {
            deserializer.deserialize_bytes(FixedStringVisitor(PhantomData))
        }
    }
}

impl<const N: usize> Serialize for FixedString<N, char> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if serializer.is_human_readable() {
            serializer.collect_str(self)
        } else {
            serializer.collect_seq(self.iter())
        }
    }
}

// UTF-16 and UTF-32 strings may hold invalid sequences, which a `str` can't represent.
macro_rules! impl_serialize_as_seq {
    ($($unit:ty),*) => {$(
        impl<const N: usize> Serialize for FixedString<N, $unit> {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.collect_seq(self.iter())
            }
        }
    )*};
}

impl_serialize_as_seq!(u16, u32);

macro_rules! impl_deserialize_wide {
    ($($unit:ty),*) => {$(
        impl<'de, const N: usize> Deserialize<'de> for FixedString<N, $unit> {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                if deserializer.is_human_readable() {
                    deserializer.deserialize_any(FixedStringVisitor(PhantomData))
                } else {
                    deserializer.deserialize_seq(FixedStringVisitor(PhantomData))
                }
            }
        }
    )*};
}

impl_deserialize_wide!(u16, u32, char);

struct FixedStringVisitor<const N: usize, C>(PhantomData<C>);

impl<'de, const N: usize, C> Visitor<'de> for FixedStringVisitor<N, C>
where
    C: Char + Deserialize<'de>,
{
    type Value = FixedString<N, C>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "a string of at most {N} code units")
    }

    fn visit_str<E: serde::de::Error>(self, v: &str) -> Result<Self::Value, E> {
        let mut ret = FixedString::new();
        ret.push_str(v)
            .map_err(|_| E::invalid_length(C::encoded_len(v), &self))?;
        Ok(ret)
    }

    fn visit_bytes<E: serde::de::Error>(self, v: &[u8]) -> Result<Self::Value, E> {
        let mut ret = FixedString::new();
        ret.try_extend(v.iter().map(|&b| C::from_byte(b)))
            .map_err(|_| E::invalid_length(v.len(), &self))?;
        Ok(ret)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        let mut ret = FixedString::new();
        while let Some(unit) = seq.next_element::<C>()? {
            if ret.push(unit).is_err() {
                return Err(A::Error::invalid_length(N + 1, &self));
            }
        }
        Ok(ret)
    }
}
