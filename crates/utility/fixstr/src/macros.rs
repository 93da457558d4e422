/// Creates a [`FixedString`](crate::FixedString) from a string literal.
///
/// Without an explicit capacity, the capacity is the length of the encoded literal. The string
/// is built during constant evaluation, so a literal that does not fit in the requested capacity
/// is a compile error.
///
/// Both arguments must be constant expressions. Prefix the literal with `u16:`, `u32:` or
/// `char:` to build a [`FixedU16String`](crate::FixedU16String),
/// [`FixedU32String`](crate::FixedU32String) or [`FixedCharString`](crate::FixedCharString).
///
/// ```
/// # use fixstr::{fixed_str, FixedString, FixedU16String};
/// let exact = fixed_str!("hello");
/// let roomy: FixedString<16> = fixed_str!("hello", 16);
///
/// assert_eq!(exact.capacity(), 5);
/// assert_eq!(exact, roomy);
///
/// let clef: FixedU16String<2> = fixed_str!(u16: "𝄞");
/// assert_eq!(clef.as_slice(), &[0xd834, 0xdd1e]);
/// assert_eq!(fixed_str!(char: "ßπ∞").len(), 3);
/// ```
///
/// ```compile_fail
/// # use fixstr::fixed_str;
/// let too_small = fixed_str!("hello", 3);
/// ```
#[macro_export]
macro_rules! fixed_str {
    (@build $ty:ty, $ctor:ident, $s:expr) => {{
        const VALUE: $ty = match <$ty>::$ctor($s) {
            ::core::result::Result::Ok(value) => value,
            ::core::result::Result::Err(_) => {
                ::core::panic!("the string literal does not fit in the requested capacity")
            }
        };
        VALUE
    }};
    (u16: $s:expr $(,)?) => {
        $crate::fixed_str!(@build $crate::FixedU16String<{ $crate::utf16_len($s) }>, try_encode, $s)
    };
    (u16: $s:expr, $capacity:expr $(,)?) => {
        $crate::fixed_str!(@build $crate::FixedU16String<{ $capacity }>, try_encode, $s)
    };
    (u32: $s:expr $(,)?) => {
        $crate::fixed_str!(@build $crate::FixedU32String<{ $crate::scalar_count($s) }>, try_encode, $s)
    };
    (u32: $s:expr, $capacity:expr $(,)?) => {
        $crate::fixed_str!(@build $crate::FixedU32String<{ $capacity }>, try_encode, $s)
    };
    (char: $s:expr $(,)?) => {
        $crate::fixed_str!(@build $crate::FixedCharString<{ $crate::scalar_count($s) }>, try_encode, $s)
    };
    (char: $s:expr, $capacity:expr $(,)?) => {
        $crate::fixed_str!(@build $crate::FixedCharString<{ $capacity }>, try_encode, $s)
    };
    ($s:expr $(,)?) => {
        $crate::fixed_str!(@build $crate::FixedString<{ $s.len() }>, try_from_str, $s)
    };
    ($s:expr, $capacity:expr $(,)?) => {
        $crate::fixed_str!(@build $crate::FixedString<{ $capacity }>, try_from_str, $s)
    };
}
