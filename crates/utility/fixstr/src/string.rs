use core::ops::{Deref, DerefMut};

use crate::{Char, Error};

/// A fixed-capacity string of `C` code units.
///
/// The string stores at most `N` code units inline, followed by a terminator slot. The code
/// unit right after the logical content is always [`Char::NUL`], which makes the string usable
/// by APIs that expect null-terminated data (see [`as_ptr`](Self::as_ptr)).
///
/// Almost every operation is a `const fn` and can run during constant evaluation.
///
/// # Errors
///
/// Checked operations return an [`Error`] and leave the string untouched when they fail.
#[derive(Clone, Copy)]
#[repr(C)]
pub struct FixedString<const N: usize, C: Char = u8> {
    /// The code units of the string. Only the first `len` are meaningful.
    buffer: [C; N],
    /// The terminator used when the string is full.
    ///
    /// Because of `repr(C)`, this slot directly follows `buffer` in memory.
    nul: C,
    /// The logical length of the string.
    len: usize,
}

impl<const N: usize, C: Char> FixedString<N, C> {
    /// The maximum number of code units the string can hold.
    pub const CAPACITY: usize = N;

    /// Creates a new empty string.
    ///
    /// Every slot of the buffer holds [`Char::NUL`].
    #[inline(always)]
    pub const fn new() -> Self {
        Self {
            buffer: [C::NUL; N],
            nul: C::NUL,
            len: 0,
        }
    }

    /// Creates a string holding a copy of `array`.
    ///
    /// Arrays longer than `N` are rejected at compile time.
    ///
    /// ```
    /// # use fixstr::FixedString;
    /// let s = FixedString::<8>::from_array(b"hello");
    /// assert_eq!(s, "hello");
    /// ```
    ///
    /// ```compile_fail
    /// # use fixstr::FixedString;
    /// const TOO_LONG: FixedString<2> = FixedString::from_array(b"abc");
    /// ```
    pub const fn from_array<const L: usize>(array: &[C; L]) -> Self {
        const { assert!(L <= N, "the array does not fit in the string") };

        let mut ret = Self::new();
        copy_units(&mut ret.buffer, 0, array);
        ret.len = L;
        ret
    }

    /// Creates a string holding a copy of `units`.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::CapacityExceeded`] if `units` is longer than `N`.
    pub const fn try_from_slice(units: &[C]) -> Result<Self, Error> {
        let mut ret = Self::new();
        match ret.assign(units) {
            Ok(()) => Ok(ret),
            Err(err) => Err(err),
        }
    }

    /// Creates a string holding a copy of `other`.
    ///
    /// A source with a larger capacity than `N` is rejected at compile time, even if its content
    /// would fit. Use [`try_from_slice`](Self::try_from_slice) in that case.
    ///
    /// ```
    /// # use fixstr::FixedString;
    /// const WIDER: FixedString<8> = FixedString::from_fixed(&FixedString::<3>::from_array(b"abc"));
    /// assert_eq!(WIDER, "abc");
    /// ```
    ///
    /// ```compile_fail
    /// # use fixstr::FixedString;
    /// const NARROWER: FixedString<2> = FixedString::from_fixed(&FixedString::<3>::new());
    /// ```
    pub const fn from_fixed<const M: usize>(other: &FixedString<M, C>) -> Self {
        const { assert!(M <= N, "the source string has a larger capacity") };

        let mut ret = Self::new();
        copy_units(&mut ret.buffer, 0, other.as_slice());
        ret.len = other.len;
        ret
    }

    /// Returns the capacity of the string.
    #[inline(always)]
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Returns the length of the string.
    ///
    /// This is the number of code units stored in the string, not the number of characters.
    #[inline(always)]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns whether the string is empty.
    #[inline(always)]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns whether the string is full.
    #[inline(always)]
    pub const fn is_full(&self) -> bool {
        self.len == N
    }

    /// Returns the number of code units that can still be pushed.
    #[inline(always)]
    pub const fn remaining_capacity(&self) -> usize {
        N - self.len
    }

    /// Returns a pointer to the first code unit of the string.
    ///
    /// The pointed sequence is null-terminated: the code unit at offset [`len`](Self::len) is
    /// always [`Char::NUL`]. The pointer is valid for `len() + 1` reads as long as the string
    /// is neither moved nor modified.
    #[inline(always)]
    pub const fn as_ptr(&self) -> *const C {
        // The pointer is derived from the whole structure rather than from `buffer` so that it
        // may also be used to read the `nul` field.
        self as *const Self as *const C
    }

    /// Returns a mutable pointer to the first code unit of the string.
    ///
    /// The pointer is valid for writes of `N + 1` code units, but the code unit at offset
    /// [`len`](Self::len) must stay [`Char::NUL`]. In particular, the code unit at offset `N`
    /// is the terminator of a full string and must never be overwritten.
    #[inline(always)]
    pub const fn as_mut_ptr(&mut self) -> *mut C {
        self as *mut Self as *mut C
    }

    /// Returns the content of the string.
    #[inline(always)]
    pub const fn as_slice(&self) -> &[C] {
        self.buffer.split_at(self.len).0
    }

    /// Returns the content of the string.
    #[inline(always)]
    pub const fn as_mut_slice(&mut self) -> &mut [C] {
        self.buffer.split_at_mut(self.len).0
    }

    /// Returns the content of the string, including the terminator.
    #[inline]
    pub const fn as_slice_with_nul(&self) -> &[C] {
        // SAFETY:
        //  Because of `repr(C)`, `buffer` is at offset zero and `nul` immediately follows it.
        //  Both have the alignment of `C`, so there is no padding between them and the `N + 1`
        //  code units are contiguous and initialized. `len <= N` by invariant.
        unsafe { core::slice::from_raw_parts(self.as_ptr(), self.len + 1) }
    }

    /// Returns the code unit at `index`.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::OutOfRange`] if `index` is not less than the length of the string.
    #[inline]
    pub const fn at(&self, index: usize) -> Result<C, Error> {
        if index < self.len {
            Ok(self.buffer[index])
        } else {
            Err(self.out_of_range(index))
        }
    }

    /// Returns a mutable reference to the code unit at `index`.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::OutOfRange`] if `index` is not less than the length of the string.
    #[inline]
    pub const fn at_mut(&mut self, index: usize) -> Result<&mut C, Error> {
        if index < self.len {
            Ok(&mut self.buffer[index])
        } else {
            Err(self.out_of_range(index))
        }
    }

    /// Returns the code unit at `index` without checking bounds.
    ///
    /// # Safety
    ///
    /// `index` must be less than the length of the string.
    #[inline(always)]
    pub const unsafe fn at_unchecked(&self, index: usize) -> C {
        debug_assert!(index < self.len);

        unsafe { *self.buffer.as_ptr().add(index) }
    }

    /// Returns a mutable reference to the code unit at `index` without checking bounds.
    ///
    /// # Safety
    ///
    /// `index` must be less than the length of the string.
    #[inline(always)]
    pub const unsafe fn at_unchecked_mut(&mut self, index: usize) -> &mut C {
        debug_assert!(index < self.len);

        unsafe { &mut *self.buffer.as_mut_ptr().add(index) }
    }

    /// Returns the first code unit of the string.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::EmptyAccess`] if the string is empty.
    #[inline]
    pub const fn front(&self) -> Result<C, Error> {
        if self.is_empty() {
            Err(Error::EmptyAccess)
        } else {
            Ok(self.buffer[0])
        }
    }

    /// Returns a mutable reference to the first code unit of the string.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::EmptyAccess`] if the string is empty.
    #[inline]
    pub const fn front_mut(&mut self) -> Result<&mut C, Error> {
        if self.is_empty() {
            Err(Error::EmptyAccess)
        } else {
            Ok(&mut self.buffer[0])
        }
    }

    /// Returns the last code unit of the string.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::EmptyAccess`] if the string is empty.
    #[inline]
    pub const fn back(&self) -> Result<C, Error> {
        if self.is_empty() {
            Err(Error::EmptyAccess)
        } else {
            Ok(self.buffer[self.len - 1])
        }
    }

    /// Returns a mutable reference to the last code unit of the string.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::EmptyAccess`] if the string is empty.
    #[inline]
    pub const fn back_mut(&mut self) -> Result<&mut C, Error> {
        if self.is_empty() {
            Err(Error::EmptyAccess)
        } else {
            Ok(&mut self.buffer[self.len - 1])
        }
    }

    /// Attempts to push a code unit at the end of the string.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::CapacityExceeded`] if the string is full.
    #[doc(alias = "push_back")]
    #[inline]
    pub const fn push(&mut self, unit: C) -> Result<(), Error> {
        if self.is_full() {
            return Err(Error::capacity_exceeded(self.len, 1, N));
        }

        unsafe { self.push_unchecked(unit) };
        Ok(())
    }

    /// Pushes a code unit at the end of the string without checking whether it is full.
    ///
    /// # Safety
    ///
    /// The string must not be full.
    pub const unsafe fn push_unchecked(&mut self, unit: C) {
        debug_assert!(self.len < N);

        unsafe { *self.buffer.as_mut_ptr().add(self.len) = unit };
        self.len += 1;
        self.terminate();
    }

    /// Attempts to remove the last code unit of the string.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::EmptyAccess`] if the string is empty.
    #[doc(alias = "pop_back")]
    #[inline]
    pub const fn pop(&mut self) -> Result<C, Error> {
        if self.is_empty() {
            Err(Error::EmptyAccess)
        } else {
            Ok(unsafe { self.pop_unchecked() })
        }
    }

    /// Removes the last code unit of the string without checking whether it is empty.
    ///
    /// # Safety
    ///
    /// The string must not be empty.
    pub const unsafe fn pop_unchecked(&mut self) -> C {
        debug_assert!(self.len > 0);

        self.len -= 1;
        let unit = unsafe { *self.buffer.as_ptr().add(self.len) };
        self.terminate();
        unit
    }

    /// Attempts to append `units` at the end of the string.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::CapacityExceeded`] if the result would not fit. The string is left
    /// unchanged in that case.
    pub const fn append(&mut self, units: &[C]) -> Result<(), Error> {
        if units.len() > self.remaining_capacity() {
            return Err(Error::capacity_exceeded(self.len, units.len(), N));
        }

        copy_units(&mut self.buffer, self.len, units);
        self.len += units.len();
        self.terminate();
        Ok(())
    }

    /// Replaces the content of the string with `units`.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::CapacityExceeded`] if `units` is longer than `N`. The string is left
    /// unchanged in that case.
    pub const fn assign(&mut self, units: &[C]) -> Result<(), Error> {
        if units.len() > N {
            return Err(Error::capacity_exceeded(0, units.len(), N));
        }

        copy_units(&mut self.buffer, 0, units);
        self.len = units.len();
        self.terminate();
        Ok(())
    }

    /// Removes up to `count` code units starting at `pos`.
    ///
    /// `count` is clamped to the number of code units after `pos`. The following code units are
    /// shifted to the left.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::OutOfRange`] if `pos` is greater than the length of the string.
    pub const fn erase(&mut self, pos: usize, count: usize) -> Result<(), Error> {
        if pos > self.len {
            return Err(self.out_of_range(pos));
        }

        let count = min(count, self.len - pos);
        let mut i = pos;
        while i + count < self.len {
            self.buffer[i] = self.buffer[i + count];
            i += 1;
        }

        self.len -= count;
        self.terminate();
        Ok(())
    }

    /// Shortens the string to `len` code units.
    ///
    /// This does nothing if `len` is greater than or equal to the current length.
    #[inline]
    pub const fn truncate(&mut self, len: usize) {
        if len < self.len {
            self.len = len;
            self.terminate();
        }
    }

    /// Removes all code units from the string.
    #[inline]
    pub const fn clear(&mut self) {
        self.len = 0;
        self.terminate();
    }

    /// Returns a copy of the code units in `pos..pos + count`.
    ///
    /// `count` is clamped to the number of code units after `pos`.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::OutOfRange`] if `pos` is greater than the length of the string.
    pub const fn substr(&self, pos: usize, count: usize) -> Result<Self, Error> {
        if pos > self.len {
            return Err(self.out_of_range(pos));
        }

        let count = min(count, self.len - pos);
        let mut ret = Self::new();
        copy_units(&mut ret.buffer, 0, self.as_slice().split_at(pos).1.split_at(count).0);
        ret.len = count;
        Ok(ret)
    }

    /// Writes the terminator right after the last code unit.
    ///
    /// When the string is full, the terminator is the `nul` field, which never changes.
    #[inline(always)]
    const fn terminate(&mut self) {
        if self.len < N {
            self.buffer[self.len] = C::NUL;
        }
    }

    #[inline(always)]
    const fn out_of_range(&self, position: usize) -> Error {
        Error::OutOfRange {
            position,
            len: self.len,
        }
    }
}

impl<const N: usize, C: Char> FixedString<N, C> {
    /// Attempts to append `s`, encoded as `C` code units.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::CapacityExceeded`] if the encoded string does not fit. The string is
    /// left unchanged in that case.
    pub fn push_str(&mut self, s: &str) -> Result<(), Error> {
        let additional = C::encoded_len(s);
        if additional > self.remaining_capacity() {
            return Err(Error::capacity_exceeded(self.len, additional, N));
        }

        C::encode(s, &mut self.buffer[self.len..self.len + additional]);
        self.len += additional;
        self.terminate();
        Ok(())
    }

    /// Attempts to push every code unit produced by `iter`.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::CapacityExceeded`] if the iterator yields too many code units. The
    /// string is left unchanged in that case.
    pub fn try_extend<I>(&mut self, iter: I) -> Result<(), Error>
    where
        I: IntoIterator<Item = C>,
    {
        let mut staged = *self;
        for unit in iter {
            staged.push(unit)?;
        }
        *self = staged;
        Ok(())
    }
}

impl<const N: usize> FixedString<N, u8> {
    /// Creates a string holding the UTF-8 bytes of `s`.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::CapacityExceeded`] if `s` is longer than `N` bytes.
    #[inline]
    pub const fn try_from_str(s: &str) -> Result<Self, Error> {
        Self::try_from_slice(s.as_bytes())
    }

    /// Returns the content of the string as a `&str`.
    ///
    /// # Errors
    ///
    /// Fails if the content is not valid UTF-8.
    #[inline]
    pub const fn to_str(&self) -> Result<&str, core::str::Utf8Error> {
        core::str::from_utf8(self.as_slice())
    }
}

impl<const N: usize, C: Char> Default for FixedString<N, C> {
    #[inline(always)]
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize, C: Char> Deref for FixedString<N, C> {
    type Target = [C];

    #[inline(always)]
    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}

impl<const N: usize, C: Char> DerefMut for FixedString<N, C> {
    #[inline(always)]
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.as_mut_slice()
    }
}

impl<const N: usize, C: Char> AsRef<[C]> for FixedString<N, C> {
    #[inline(always)]
    fn as_ref(&self) -> &[C] {
        self
    }
}

impl<const N: usize, C: Char> AsMut<[C]> for FixedString<N, C> {
    #[inline(always)]
    fn as_mut(&mut self) -> &mut [C] {
        self
    }
}

impl<'a, const N: usize, C: Char> IntoIterator for &'a FixedString<N, C> {
    type Item = &'a C;
    type IntoIter = core::slice::Iter<'a, C>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

impl<'a, const N: usize, C: Char> IntoIterator for &'a mut FixedString<N, C> {
    type Item = &'a mut C;
    type IntoIter = core::slice::IterMut<'a, C>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.as_mut_slice().iter_mut()
    }
}

impl<'a, const N: usize, C: Char> TryFrom<&'a [C]> for FixedString<N, C> {
    type Error = Error;

    #[inline]
    fn try_from(units: &'a [C]) -> Result<Self, Self::Error> {
        Self::try_from_slice(units)
    }
}

impl<'a, const N: usize, C: Char> TryFrom<&'a str> for FixedString<N, C> {
    type Error = Error;

    #[inline]
    fn try_from(s: &'a str) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl<const N: usize, C: Char> core::str::FromStr for FixedString<N, C> {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut ret = Self::new();
        ret.push_str(s)?;
        Ok(ret)
    }
}

/// Copies `src` into `dst`, starting at index `at`.
///
/// `dst` must have room for `src.len()` code units after `at`.
#[inline]
pub(crate) const fn copy_units<C: Copy>(dst: &mut [C], at: usize, src: &[C]) {
    let mut i = 0;
    while i < src.len() {
        dst[at + i] = src[i];
        i += 1;
    }
}

#[inline(always)]
const fn min(a: usize, b: usize) -> usize {
    if a < b {
        a
    } else {
        b
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    /// Checks the invariants that must hold after every operation.
    fn assert_consistent<const N: usize, C: Char>(s: &FixedString<N, C>) {
        assert!(s.len() <= s.capacity());
        assert_eq!(s.as_slice_with_nul()[s.len()], C::NUL);
        assert_eq!(unsafe { *s.as_ptr().add(s.len()) }, C::NUL);
    }

    #[test]
    fn new_string_is_zero_filled() {
        let s = FixedString::<15>::new();

        assert_eq!(s.len(), 0);
        assert!(s.is_empty());
        assert_eq!(s.capacity(), 15);
        assert!(s.buffer.iter().all(|&b| b == 0));
        assert_consistent(&s);
    }

    #[test]
    fn zero_capacity_string_is_always_full() {
        let mut s = FixedString::<0>::new();

        assert!(s.is_empty());
        assert!(s.is_full());
        assert_eq!(s.as_slice_with_nul(), &[0u8]);
        assert_eq!(
            s.push(b'a'),
            Err(Error::CapacityExceeded {
                required: 1,
                capacity: 0
            })
        );
        assert_consistent(&s);
    }

    #[test]
    fn construction_respects_capacity() {
        let s = FixedString::<5>::try_from_slice(b"hello").unwrap();
        assert_eq!(s.len(), 5);
        assert_eq!(s.as_slice(), b"hello");
        assert_consistent(&s);

        assert_eq!(
            FixedString::<5>::try_from_slice(b"hello!").unwrap_err(),
            Error::CapacityExceeded {
                required: 6,
                capacity: 5
            }
        );
    }

    #[test]
    fn from_fixed_copies_content_and_length() {
        let small = FixedString::<5>::from_array(b"abc");
        let large = FixedString::<10>::from_fixed(&small);

        assert_eq!(large.as_slice(), b"abc");
        assert_eq!(large.capacity(), 10);
        assert_consistent(&large);
    }

    #[test]
    fn append_is_all_or_nothing() {
        let mut s = FixedString::<3>::from_array(b"ab");

        assert_eq!(
            s.append(b"cd"),
            Err(Error::CapacityExceeded {
                required: 4,
                capacity: 3
            })
        );
        assert_eq!(s.as_slice(), b"ab");
        assert_consistent(&s);

        s.append(b"c").unwrap();
        assert_eq!(s.as_slice(), b"abc");
        assert!(s.is_full());
        assert_consistent(&s);
    }

    #[test]
    fn push_and_pop() {
        let mut s = FixedString::<2, char>::new();

        s.push('x').unwrap();
        s.push('y').unwrap();
        assert!(s.push('z').is_err());
        assert_eq!(s.as_slice(), &['x', 'y']);

        assert_eq!(s.pop(), Ok('y'));
        assert_eq!(s.pop(), Ok('x'));
        assert_eq!(s.pop(), Err(Error::EmptyAccess));
        assert_consistent(&s);
    }

    #[test]
    fn clear_is_idempotent() {
        let mut s = FixedString::<8>::from_array(b"abc");

        s.clear();
        assert_eq!(s.len(), 0);
        s.clear();
        assert_eq!(s.len(), 0);
        assert_eq!(s.pop(), Err(Error::EmptyAccess));
        assert_consistent(&s);
    }

    #[test]
    fn writes_through_the_mutable_pointer_keep_the_terminator() {
        let mut s = FixedString::<3>::from_array(b"abc");

        unsafe { *s.as_mut_ptr().add(1) = b'B' };
        assert_eq!(s.as_slice(), b"aBc");
        assert_eq!(unsafe { *s.as_mut_ptr().add(3) }, 0);
        assert_consistent(&s);

        s.truncate(1);
        unsafe { *s.as_mut_ptr().add(2) = b'z' };
        assert_eq!(s.as_slice_with_nul(), b"a\0");
        assert_consistent(&s);
    }

    #[test]
    fn erase_shifts_the_tail() {
        let mut s = FixedString::<11>::from_array(b"hello world");
        s.truncate(5);
        assert_eq!(s.as_slice(), b"hello");

        s.erase(1, 3).unwrap();
        assert_eq!(s.as_slice(), b"ho");
        assert_eq!(s.len(), 2);
        assert_consistent(&s);
    }

    #[test]
    fn erase_clamps_count_and_checks_position() {
        let mut s = FixedString::<8>::from_array(b"abcdef");

        s.erase(4, 100).unwrap();
        assert_eq!(s.as_slice(), b"abcd");

        s.erase(4, 1).unwrap();
        assert_eq!(s.as_slice(), b"abcd");

        assert_eq!(
            s.erase(5, 1),
            Err(Error::OutOfRange {
                position: 5,
                len: 4
            })
        );
        assert_eq!(s.as_slice(), b"abcd");
        assert_consistent(&s);
    }

    #[test]
    fn checked_and_unchecked_access() {
        let mut s = FixedString::<4>::from_array(b"abc");

        assert_eq!(s.at(0), Ok(b'a'));
        assert_eq!(s.at(3), Err(Error::OutOfRange { position: 3, len: 3 }));
        assert_eq!(unsafe { s.at_unchecked(2) }, b'c');

        *s.at_mut(1).unwrap() = b'B';
        unsafe { *s.at_unchecked_mut(2) = b'C' };
        assert_eq!(s.as_slice(), b"aBC");
    }

    #[test]
    fn front_and_back() {
        let mut s = FixedString::<9>::from_array(b"Exemplary");

        *s.front_mut().unwrap() = b'e';
        *s.back_mut().unwrap() = b's';
        assert_eq!(s.as_slice(), b"exemplars");
        assert_eq!(s.front(), Ok(b'e'));
        assert_eq!(s.back(), Ok(b's'));

        let empty = FixedString::<9>::new();
        assert_eq!(empty.front(), Err(Error::EmptyAccess));
        assert_eq!(empty.back(), Err(Error::EmptyAccess));
    }

    #[test]
    fn assign_replaces_content() {
        let mut s = FixedString::<5>::from_array(b"hello");

        s.assign(b"hi").unwrap();
        assert_eq!(s.as_slice(), b"hi");
        assert_consistent(&s);

        assert!(s.assign(b"too long").is_err());
        assert_eq!(s.as_slice(), b"hi");
    }

    #[test]
    fn substr_clamps_count() {
        let s = FixedString::<20>::from_array(b"0123456789abcdefghij");

        assert_eq!(s.substr(10, usize::MAX).unwrap().as_slice(), b"abcdefghij");
        assert_eq!(s.substr(5, 3).unwrap().as_slice(), b"567");
        assert_eq!(s.substr(17, 50).unwrap().as_slice(), b"hij");
        assert_eq!(s.substr(20, 1).unwrap().len(), 0);
        assert!(s.substr(23, 50).is_err());
    }

    #[test]
    fn push_str_encodes_units() {
        let mut narrow = FixedString::<24>::new();
        let mut wide = FixedString::<8, u16>::new();

        narrow.push_str("ハロー・ワールド").unwrap();
        wide.push_str("ハロー・ワールド").unwrap();

        assert_eq!(narrow.len(), 24);
        assert_eq!(wide.len(), 8);
        assert!(wide.push_str("!").is_err());
        assert_consistent(&wide);
    }

    #[test]
    fn try_extend_is_all_or_nothing() {
        let mut s = FixedString::<4>::from_array(b"ab");

        assert!(s.try_extend(*b"cde").is_err());
        assert_eq!(s.as_slice(), b"ab");

        s.try_extend(*b"cd").unwrap();
        assert_eq!(s.as_slice(), b"abcd");
    }

    #[test]
    fn parsing_from_str() {
        let s: FixedString<5, u32> = "héllo".parse().unwrap();
        assert_eq!(s.len(), 5);

        let err = FixedString::<4>::try_from("héllo").unwrap_err();
        assert_eq!(
            err,
            Error::CapacityExceeded {
                required: 6,
                capacity: 4
            }
        );
    }

    #[test]
    fn to_str_validates_utf8() {
        let mut s = FixedString::<4>::try_from_str("ok").unwrap();
        assert_eq!(s.to_str(), Ok("ok"));

        s.push(0xff).unwrap();
        assert!(s.to_str().is_err());
    }
}
