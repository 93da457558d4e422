//! Constant-evaluable text operations.
//!
//! Comparing two generic code units requires a trait call, which cannot happen during constant
//! evaluation. Those operations are generated for every concrete [`Char`](crate::Char) instead.

use core::cmp::Ordering;

use crate::unit::{decode_utf8, scalar_count, utf16_len};
use crate::{Error, FixedString};

macro_rules! impl_text_ops {
    ($($unit:ty),* $(,)?) => {$(
        impl<const N: usize> FixedString<N, $unit> {
            /// Returns whether the content of the string is equal to `other`.
            pub const fn equals(&self, other: &[$unit]) -> bool {
                let this = self.as_slice();
                if this.len() != other.len() {
                    return false;
                }

                let mut i = 0;
                while i < this.len() {
                    if this[i] != other[i] {
                        return false;
                    }
                    i += 1;
                }
                true
            }

            /// Compares the content of the string with `other`, lexicographically.
            pub const fn compare(&self, other: &[$unit]) -> Ordering {
                let this = self.as_slice();

                let mut i = 0;
                while i < this.len() && i < other.len() {
                    if this[i] < other[i] {
                        return Ordering::Less;
                    }
                    if this[i] > other[i] {
                        return Ordering::Greater;
                    }
                    i += 1;
                }

                if this.len() < other.len() {
                    Ordering::Less
                } else if this.len() > other.len() {
                    Ordering::Greater
                } else {
                    Ordering::Equal
                }
            }

            /// Returns whether the string starts with `prefix`.
            #[inline]
            pub const fn starts_with(&self, prefix: &[$unit]) -> bool {
                prefix.len() <= self.len() && Self::matches_at(self.as_slice(), 0, prefix)
            }

            /// Returns whether the string ends with `suffix`.
            #[inline]
            pub const fn ends_with(&self, suffix: &[$unit]) -> bool {
                suffix.len() <= self.len()
                    && Self::matches_at(self.as_slice(), self.len() - suffix.len(), suffix)
            }

            /// Returns whether `needle` appears in the string.
            #[inline]
            pub const fn contains(&self, needle: &[$unit]) -> bool {
                self.find(needle).is_some()
            }

            /// Returns whether `unit` appears in the string.
            #[inline]
            pub const fn contains_char(&self, unit: $unit) -> bool {
                self.find_char(unit).is_some()
            }

            /// Returns the position of the first occurrence of `needle`.
            ///
            /// An empty needle is found at position 0.
            #[inline]
            pub const fn find(&self, needle: &[$unit]) -> Option<usize> {
                self.find_from(needle, 0)
            }

            /// Returns the position of the first occurrence of `needle` that starts at or after
            /// `from`.
            pub const fn find_from(&self, needle: &[$unit], from: usize) -> Option<usize> {
                let this = self.as_slice();
                if from > this.len() || needle.len() > this.len() - from {
                    return None;
                }

                let mut pos = from;
                while pos + needle.len() <= this.len() {
                    if Self::matches_at(this, pos, needle) {
                        return Some(pos);
                    }
                    pos += 1;
                }
                None
            }

            /// Returns the position of the last occurrence of `needle`.
            ///
            /// An empty needle is found at the end of the string.
            pub const fn rfind(&self, needle: &[$unit]) -> Option<usize> {
                let this = self.as_slice();
                if needle.len() > this.len() {
                    return None;
                }

                let mut pos = this.len() - needle.len();
                loop {
                    if Self::matches_at(this, pos, needle) {
                        return Some(pos);
                    }
                    if pos == 0 {
                        return None;
                    }
                    pos -= 1;
                }
            }

            /// Returns the position of the first occurrence of `unit`.
            pub const fn find_char(&self, unit: $unit) -> Option<usize> {
                let this = self.as_slice();

                let mut i = 0;
                while i < this.len() {
                    if this[i] == unit {
                        return Some(i);
                    }
                    i += 1;
                }
                None
            }

            /// Creates a string from the code units of `units` that precede the first
            /// terminator.
            ///
            /// If `units` holds no terminator, all of it is used.
            ///
            /// # Errors
            ///
            /// Fails with [`Error::CapacityExceeded`] if the content is longer than `N`.
            pub const fn from_nul_terminated(units: &[$unit]) -> Result<Self, Error> {
                let mut len = 0;
                while len < units.len() && units[len] != <$unit as crate::Char>::NUL {
                    len += 1;
                }

                Self::try_from_slice(units.split_at(len).0)
            }

            /// Creates a string from a null-terminated sequence of code units.
            ///
            /// At most `N + 1` code units are read: if no terminator is found among them, the
            /// sequence is too long and nothing more is read.
            ///
            /// # Errors
            ///
            /// Fails with [`Error::CapacityExceeded`] if the sequence is longer than `N`.
            ///
            /// # Safety
            ///
            /// `ptr` must point to a null-terminated sequence of code units, or to at least
            /// `N + 1` readable code units.
            pub const unsafe fn from_ptr(ptr: *const $unit) -> Result<Self, Error> {
                let mut ret = Self::new();

                loop {
                    let unit = unsafe { *ptr.add(ret.len()) };
                    if unit == <$unit as crate::Char>::NUL {
                        return Ok(ret);
                    }

                    if ret.push(unit).is_err() {
                        // We know there is at least one more code unit, since we have just read
                        // a non-terminator one.
                        return Err(Error::capacity_exceeded(N, 1, N));
                    }
                }
            }

            /// Returns whether `haystack[pos..]` starts with `needle`.
            ///
            /// `pos + needle.len()` must not exceed `haystack.len()`.
            const fn matches_at(haystack: &[$unit], pos: usize, needle: &[$unit]) -> bool {
                let mut i = 0;
                while i < needle.len() {
                    if haystack[pos + i] != needle[i] {
                        return false;
                    }
                    i += 1;
                }
                true
            }
        }
    )*};
}

impl_text_ops!(u8, u16, u32, char);

impl<const N: usize> FixedString<N, u8> {
    /// Returns the content of the string as a C string.
    ///
    /// Returns [`None`] if the string contains an interior null byte.
    #[inline]
    pub const fn as_c_str(&self) -> Option<&core::ffi::CStr> {
        match core::ffi::CStr::from_bytes_with_nul(self.as_slice_with_nul()) {
            Ok(s) => Some(s),
            Err(_) => None,
        }
    }

    /// Creates a string holding a copy of `s`, without its terminator.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::CapacityExceeded`] if `s` is longer than `N` bytes.
    #[inline]
    pub const fn from_c_str(s: &core::ffi::CStr) -> Result<Self, Error> {
        Self::try_from_slice(s.to_bytes())
    }
}

impl<const N: usize> FixedString<N, u16> {
    /// Creates a string holding the UTF-16 encoding of `s`.
    ///
    /// This is the constant-evaluable counterpart of [`push_str`](Self::push_str).
    ///
    /// # Errors
    ///
    /// Fails with [`Error::CapacityExceeded`] if the encoding is longer than `N` code units.
    pub const fn try_encode(s: &str) -> Result<Self, Error> {
        let required = utf16_len(s);
        if required > N {
            return Err(Error::CapacityExceeded {
                required,
                capacity: N,
            });
        }

        let mut ret = Self::new();
        let mut i = 0;
        while i < s.len() {
            let (scalar, width) = decode_utf8(s, i);
            i += width;

            // SAFETY: the whole encoding fits, as checked above.
            if scalar < 0x1_0000 {
                unsafe { ret.push_unchecked(scalar as u16) };
            } else {
                let offset = scalar - 0x1_0000;
                unsafe { ret.push_unchecked(0xd800 | (offset >> 10) as u16) };
                unsafe { ret.push_unchecked(0xdc00 | (offset & 0x3ff) as u16) };
            }
        }
        Ok(ret)
    }
}

macro_rules! impl_scalar_encode {
    ($($unit:ty => $convert:expr),* $(,)?) => {$(
        impl<const N: usize> FixedString<N, $unit> {
            /// Creates a string holding one code unit per scalar value of `s`.
            ///
            /// This is the constant-evaluable counterpart of [`push_str`](Self::push_str).
            ///
            /// # Errors
            ///
            /// Fails with [`Error::CapacityExceeded`] if `s` holds more than `N` scalar values.
            pub const fn try_encode(s: &str) -> Result<Self, Error> {
                let required = scalar_count(s);
                if required > N {
                    return Err(Error::CapacityExceeded {
                        required,
                        capacity: N,
                    });
                }

                let mut ret = Self::new();
                let mut i = 0;
                while i < s.len() {
                    let (scalar, width) = decode_utf8(s, i);
                    i += width;

                    // SAFETY: there are at most `N` scalar values, as checked above.
                    unsafe { ret.push_unchecked($convert(scalar)) };
                }
                Ok(ret)
            }
        }
    )*};
}

impl_scalar_encode!(u32 => scalar_to_u32, char => scalar_to_char);

#[inline(always)]
const fn scalar_to_u32(scalar: u32) -> u32 {
    scalar
}

#[inline(always)]
const fn scalar_to_char(scalar: u32) -> char {
    match char::from_u32(scalar) {
        Some(c) => c,
        // `decode_utf8` only yields scalar values.
        None => char::REPLACEMENT_CHARACTER,
    }
}
