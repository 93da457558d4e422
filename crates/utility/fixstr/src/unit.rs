use core::fmt;
use core::hash::Hash;

mod sealed {
    pub trait Sealed {}

    impl Sealed for u8 {}
    impl Sealed for u16 {}
    impl Sealed for u32 {}
    impl Sealed for char {}
}

/// A code unit that can be stored in a [`FixedString`](crate::FixedString).
///
/// This trait is sealed. It is implemented for:
///
/// - [`u8`], for narrow strings (usually UTF-8);
/// - [`u16`], for UTF-16 strings;
/// - [`u32`], for UTF-32 strings;
/// - [`char`], for strings of Unicode scalar values.
pub trait Char: Copy + Eq + Ord + Hash + fmt::Debug + Send + Sync + 'static + sealed::Sealed {
    /// The terminator written after the last code unit of a string.
    const NUL: Self;

    /// Converts a Latin-1 byte into a code unit.
    fn from_byte(byte: u8) -> Self;

    /// Returns the number of code units needed to encode `s`.
    fn encoded_len(s: &str) -> usize;

    /// Encodes `s` into `dst`.
    ///
    /// `dst` must be exactly [`encoded_len(s)`](Char::encoded_len) code units long.
    fn encode(s: &str, dst: &mut [Self]);

    /// Decodes `units` into `char`s, passing each one to `f`.
    ///
    /// Invalid sequences are replaced by [`char::REPLACEMENT_CHARACTER`].
    fn decode(units: &[Self], f: &mut dyn FnMut(char) -> fmt::Result) -> fmt::Result;
}

impl Char for u8 {
    const NUL: Self = 0;

    #[inline(always)]
    fn from_byte(byte: u8) -> Self {
        byte
    }

    #[inline(always)]
    fn encoded_len(s: &str) -> usize {
        s.len()
    }

    #[inline]
    fn encode(s: &str, dst: &mut [Self]) {
        dst.copy_from_slice(s.as_bytes());
    }

    fn decode(units: &[Self], f: &mut dyn FnMut(char) -> fmt::Result) -> fmt::Result {
        for chunk in units.utf8_chunks() {
            for c in chunk.valid().chars() {
                f(c)?;
            }

            if !chunk.invalid().is_empty() {
                f(char::REPLACEMENT_CHARACTER)?;
            }
        }
        Ok(())
    }
}

impl Char for u16 {
    const NUL: Self = 0;

    #[inline(always)]
    fn from_byte(byte: u8) -> Self {
        byte as u16
    }

    #[inline]
    fn encoded_len(s: &str) -> usize {
        s.encode_utf16().count()
    }

    #[inline]
    fn encode(s: &str, dst: &mut [Self]) {
        for (slot, unit) in dst.iter_mut().zip(s.encode_utf16()) {
            *slot = unit;
        }
    }

    fn decode(units: &[Self], f: &mut dyn FnMut(char) -> fmt::Result) -> fmt::Result {
        for c in char::decode_utf16(units.iter().copied()) {
            f(c.unwrap_or(char::REPLACEMENT_CHARACTER))?;
        }
        Ok(())
    }
}

impl Char for u32 {
    const NUL: Self = 0;

    #[inline(always)]
    fn from_byte(byte: u8) -> Self {
        byte as u32
    }

    #[inline]
    fn encoded_len(s: &str) -> usize {
        s.chars().count()
    }

    #[inline]
    fn encode(s: &str, dst: &mut [Self]) {
        for (slot, c) in dst.iter_mut().zip(s.chars()) {
            *slot = c as u32;
        }
    }

    fn decode(units: &[Self], f: &mut dyn FnMut(char) -> fmt::Result) -> fmt::Result {
        for &unit in units {
            f(char::from_u32(unit).unwrap_or(char::REPLACEMENT_CHARACTER))?;
        }
        Ok(())
    }
}

impl Char for char {
    const NUL: Self = '\0';

    #[inline(always)]
    fn from_byte(byte: u8) -> Self {
        char::from(byte)
    }

    #[inline]
    fn encoded_len(s: &str) -> usize {
        s.chars().count()
    }

    #[inline]
    fn encode(s: &str, dst: &mut [Self]) {
        for (slot, c) in dst.iter_mut().zip(s.chars()) {
            *slot = c;
        }
    }

    fn decode(units: &[Self], f: &mut dyn FnMut(char) -> fmt::Result) -> fmt::Result {
        units.iter().try_for_each(|&c| f(c))
    }
}

/// Decodes the scalar value starting at byte `i` of `s`, returning it with its encoded width.
///
/// `i` must be the start of a scalar value.
pub(crate) const fn decode_utf8(s: &str, i: usize) -> (u32, usize) {
    const fn cont(bytes: &[u8], at: usize) -> u32 {
        (bytes[at] & 0x3f) as u32
    }

    let bytes = s.as_bytes();
    let lead = bytes[i] as u32;

    if lead < 0x80 {
        (lead, 1)
    } else if lead < 0xe0 {
        (((lead & 0x1f) << 6) | cont(bytes, i + 1), 2)
    } else if lead < 0xf0 {
        (
            ((lead & 0x0f) << 12) | (cont(bytes, i + 1) << 6) | cont(bytes, i + 2),
            3,
        )
    } else {
        (
            ((lead & 0x07) << 18)
                | (cont(bytes, i + 1) << 12)
                | (cont(bytes, i + 2) << 6)
                | cont(bytes, i + 3),
            4,
        )
    }
}

/// Returns the number of UTF-16 code units needed to encode `s`.
#[doc(hidden)]
pub const fn utf16_len(s: &str) -> usize {
    let mut len = 0;
    let mut i = 0;
    while i < s.len() {
        let (scalar, width) = decode_utf8(s, i);
        len += if scalar >= 0x1_0000 { 2 } else { 1 };
        i += width;
    }
    len
}

/// Returns the number of scalar values in `s`.
#[doc(hidden)]
pub const fn scalar_count(s: &str) -> usize {
    let mut count = 0;
    let mut i = 0;
    while i < s.len() {
        count += 1;
        i += decode_utf8(s, i).1;
    }
    count
}
