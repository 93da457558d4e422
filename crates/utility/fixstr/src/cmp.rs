use core::borrow::{Borrow, BorrowMut};
use core::cmp::Ordering;
use core::hash::{Hash, Hasher};

use crate::{Char, FixedString};

//
// Only the logical content of a string takes part in comparisons and hashing. The capacity and
// whatever lies in the buffer past the terminator are ignored, so strings of different
// capacities compare and hash like the equivalent `[C]`.
//

impl<const N: usize, const M: usize, C: Char> PartialEq<FixedString<M, C>> for FixedString<N, C> {
    #[inline]
    fn eq(&self, other: &FixedString<M, C>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<const N: usize, C: Char> Eq for FixedString<N, C> {}

impl<const N: usize, C: Char> PartialEq<[C]> for FixedString<N, C> {
    #[inline]
    fn eq(&self, other: &[C]) -> bool {
        self.as_slice() == other
    }
}

impl<const N: usize, C: Char> PartialEq<&[C]> for FixedString<N, C> {
    #[inline]
    fn eq(&self, other: &&[C]) -> bool {
        self.as_slice() == *other
    }
}

impl<const N: usize, const L: usize, C: Char> PartialEq<[C; L]> for FixedString<N, C> {
    #[inline]
    fn eq(&self, other: &[C; L]) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<const N: usize, const L: usize, C: Char> PartialEq<&[C; L]> for FixedString<N, C> {
    #[inline]
    fn eq(&self, other: &&[C; L]) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<const N: usize> PartialEq<str> for FixedString<N, u8> {
    #[inline]
    fn eq(&self, other: &str) -> bool {
        self.as_slice() == other.as_bytes()
    }
}

impl<const N: usize> PartialEq<&str> for FixedString<N, u8> {
    #[inline]
    fn eq(&self, other: &&str) -> bool {
        self.as_slice() == other.as_bytes()
    }
}

impl<const N: usize> PartialEq<FixedString<N, u8>> for str {
    #[inline]
    fn eq(&self, other: &FixedString<N, u8>) -> bool {
        self.as_bytes() == other.as_slice()
    }
}

impl<const N: usize> PartialEq<FixedString<N, u8>> for &str {
    #[inline]
    fn eq(&self, other: &FixedString<N, u8>) -> bool {
        self.as_bytes() == other.as_slice()
    }
}

impl<const N: usize, const M: usize, C: Char> PartialOrd<FixedString<M, C>> for FixedString<N, C> {
    #[inline]
    fn partial_cmp(&self, other: &FixedString<M, C>) -> Option<Ordering> {
        Some(self.as_slice().cmp(other.as_slice()))
    }
}

impl<const N: usize, C: Char> PartialOrd<[C]> for FixedString<N, C> {
    #[inline]
    fn partial_cmp(&self, other: &[C]) -> Option<Ordering> {
        Some(self.as_slice().cmp(other))
    }
}

impl<const N: usize, C: Char> PartialOrd<&[C]> for FixedString<N, C> {
    #[inline]
    fn partial_cmp(&self, other: &&[C]) -> Option<Ordering> {
        Some(self.as_slice().cmp(*other))
    }
}

impl<const N: usize, const L: usize, C: Char> PartialOrd<[C; L]> for FixedString<N, C> {
    #[inline]
    fn partial_cmp(&self, other: &[C; L]) -> Option<Ordering> {
        Some(self.as_slice().cmp(other.as_slice()))
    }
}

impl<const N: usize, const L: usize, C: Char> PartialOrd<&[C; L]> for FixedString<N, C> {
    #[inline]
    fn partial_cmp(&self, other: &&[C; L]) -> Option<Ordering> {
        Some(self.as_slice().cmp(other.as_slice()))
    }
}

impl<const N: usize> PartialOrd<str> for FixedString<N, u8> {
    #[inline]
    fn partial_cmp(&self, other: &str) -> Option<Ordering> {
        Some(self.as_slice().cmp(other.as_bytes()))
    }
}

impl<const N: usize> PartialOrd<&str> for FixedString<N, u8> {
    #[inline]
    fn partial_cmp(&self, other: &&str) -> Option<Ordering> {
        Some(self.as_slice().cmp(other.as_bytes()))
    }
}

impl<const N: usize> PartialOrd<FixedString<N, u8>> for str {
    #[inline]
    fn partial_cmp(&self, other: &FixedString<N, u8>) -> Option<Ordering> {
        Some(self.as_bytes().cmp(other.as_slice()))
    }
}

impl<const N: usize> PartialOrd<FixedString<N, u8>> for &str {
    #[inline]
    fn partial_cmp(&self, other: &FixedString<N, u8>) -> Option<Ordering> {
        Some(self.as_bytes().cmp(other.as_slice()))
    }
}

impl<const N: usize, C: Char> Ord for FixedString<N, C> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}

impl<const N: usize, C: Char> Hash for FixedString<N, C> {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state);
    }
}

impl<const N: usize, C: Char> Borrow<[C]> for FixedString<N, C> {
    #[inline(always)]
    fn borrow(&self) -> &[C] {
        self.as_slice()
    }
}

impl<const N: usize, C: Char> BorrowMut<[C]> for FixedString<N, C> {
    #[inline(always)]
    fn borrow_mut(&mut self) -> &mut [C] {
        self.as_mut_slice()
    }
}
