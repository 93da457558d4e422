use crate::{Char, Error, FixedString};

/// Concatenates `a` and `b` into a string of capacity `M`.
///
/// The capacity of the result must be able to hold both operands whatever their content,
/// which is checked at compile time. `M` is usually inferred from the destination.
///
/// ```
/// # use fixstr::{concat, fixed_str, FixedString};
/// const HELLO_WORLD: FixedString<10> = concat(&fixed_str!("hello"), &fixed_str!("world"));
/// assert_eq!(HELLO_WORLD, "helloworld");
/// ```
///
/// The destination must be large enough for full operands, even empty ones:
///
/// ```compile_fail
/// # use fixstr::{concat, FixedString};
/// const A: FixedString<2> = FixedString::new();
/// const B: FixedString<2> = FixedString::new();
/// const AB: FixedString<3> = concat(&A, &B);
/// ```
pub const fn concat<const M: usize, const N1: usize, const N2: usize, C: Char>(
    a: &FixedString<N1, C>,
    b: &FixedString<N2, C>,
) -> FixedString<M, C> {
    const { assert!(N1 + N2 <= M, "the result may not fit in the destination capacity") };

    let mut ret = FixedString::<M, C>::from_fixed(a);
    // The assertion above ensures this can't fail.
    match ret.append(b.as_slice()) {
        Ok(()) => ret,
        Err(_) => unreachable!(),
    }
}

/// Concatenates `a` and `b` into a string of capacity `M`.
///
/// Unlike [`concat`], only the actual content of the operands has to fit.
///
/// # Errors
///
/// Fails with [`Error::CapacityExceeded`] if the combined length of `a` and `b` exceeds `M`.
pub const fn try_concat<const M: usize, const N1: usize, const N2: usize, C: Char>(
    a: &FixedString<N1, C>,
    b: &FixedString<N2, C>,
) -> Result<FixedString<M, C>, Error> {
    if a.len() + b.len() > M {
        return Err(Error::capacity_exceeded(a.len(), b.len(), M));
    }

    let mut ret = FixedString::<M, C>::new();
    // Both appends fit, as checked above.
    if ret.append(a.as_slice()).is_err() || ret.append(b.as_slice()).is_err() {
        unreachable!();
    }
    Ok(ret)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn concat_sums_capacities() {
        let a = FixedString::<3>::from_array(b"foo");
        let b = FixedString::<4>::from_array(b"bar");
        let c: FixedString<7> = concat(&a, &b);

        assert_eq!(c, "foobar");
        assert_eq!(c.capacity(), 7);
    }

    #[test]
    fn try_concat_checks_content_only() {
        let a = FixedString::<16>::from_array(b"foo");
        let b = FixedString::<16>::from_array(b"bar");

        let c: FixedString<6> = try_concat(&a, &b).unwrap();
        assert_eq!(c, "foobar");
        assert_eq!(c.as_slice_with_nul()[6], 0);

        let err = try_concat::<5, 16, 16, u8>(&a, &b).unwrap_err();
        assert_eq!(
            err,
            Error::CapacityExceeded {
                required: 6,
                capacity: 5
            }
        );
    }
}
