//! Fixed-capacity strings.
//!
//! [`FixedString<N, C>`] combines the storage of an array (at most `N` code units of type `C`,
//! stored inline, never on the heap) with the operations of a string. The code unit following
//! the content is always a terminator, so a string can be handed to APIs that expect
//! null-terminated data.
//!
//! Nearly every operation is a `const fn`:
//!
//! ```
//! use fixstr::{concat, fixed_str, FixedString};
//!
//! const GREETING: FixedString<12> = {
//!     let mut s = concat(&fixed_str!("hello"), &fixed_str!(", "));
//!     assert!(s.append(b"world").is_ok());
//!     s
//! };
//!
//! assert_eq!(GREETING, "hello, world");
//! assert_eq!(GREETING.find(b"world"), Some(7));
//! ```
//!
//! # Features
//!
//! - `serde`: implements `Serialize` and `Deserialize` for [`FixedString`].

#![no_std]
#![warn(missing_docs, missing_debug_implementations)]
#![deny(unsafe_op_in_unsafe_fn)]

#[cfg(test)]
extern crate std;

mod cmp;
mod concat;
mod error;
mod fmt;
mod macros;
#[cfg(feature = "serde")]
mod serde;
mod string;
mod text;
mod unit;

pub use self::concat::*;
pub use self::error::*;
pub use self::string::*;
pub use self::unit::*;

/// A fixed-capacity UTF-16 string.
pub type FixedU16String<const N: usize> = FixedString<N, u16>;

/// A fixed-capacity UTF-32 string.
pub type FixedU32String<const N: usize> = FixedString<N, u32>;

/// A fixed-capacity string of Unicode scalar values.
pub type FixedCharString<const N: usize> = FixedString<N, char>;
