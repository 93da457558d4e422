//! Every operation below runs during constant evaluation. A failure shows up as a compile error
//! rather than as a failed test.

use core::cmp::Ordering;

use fixstr::{
    concat, fixed_str, try_concat, Error, FixedCharString, FixedString, FixedU16String,
    FixedU32String,
};
use pretty_assertions::assert_eq;

const HELLO: FixedString<5> = fixed_str!("hello");
const WORLD: FixedString<8> = fixed_str!("world", 8);
const HELLO_WORLD: FixedString<13> = concat(&HELLO, &WORLD);

const EDITED: FixedString<16> = {
    let mut s = FixedString::<16>::from_array(b"hello world");
    s.truncate(5);
    assert!(s.erase(1, 3).is_ok());
    assert!(s.push(b'!').is_ok());
    assert!(s.append(b"??").is_ok());
    assert!(s.pop().is_ok());
    s
};

const OVERFLOW: Result<(), Error> = {
    let mut s = FixedString::<3>::from_array(b"ab");
    s.append(b"cd")
};

const NOT_ENOUGH_ROOM: Result<FixedString<4>, Error> = try_concat(&HELLO, &WORLD);

const SUB: FixedString<13> = match HELLO_WORLD.substr(3, 4) {
    Ok(s) => s,
    Err(_) => panic!(),
};

const WIDE: FixedCharString<4> = FixedCharString::from_array(&['ß', 'π', '∞']);

const CLEF: FixedU16String<3> = fixed_str!(u16: "a𝄞");
const CLEF_ROOMY: FixedU16String<8> = fixed_str!(u16: "a𝄞", 8);
const SCALARS: FixedU32String<3> = fixed_str!(u32: "ßπ∞");
const LETTERS: FixedCharString<4> = fixed_str!(char: "été", 4);

const _: () = {
    assert!(HELLO.len() == 5);
    assert!(HELLO.is_full());
    assert!(WORLD.capacity() == 8);
    assert!(WORLD.remaining_capacity() == 3);
    assert!(HELLO_WORLD.len() == 10);
    assert!(HELLO_WORLD.equals(b"helloworld"));
    assert!(HELLO_WORLD.starts_with(b"hello"));
    assert!(HELLO_WORLD.ends_with(b"world"));
    assert!(matches!(HELLO_WORLD.find(b"low"), Some(3)));
    assert!(matches!(HELLO.compare(WORLD.as_slice()), Ordering::Less));
    assert!(matches!(HELLO.front(), Ok(b'h')));
    assert!(matches!(HELLO.back(), Ok(b'o')));
    assert!(matches!(HELLO.at(5), Err(Error::OutOfRange { position: 5, len: 5 })));
    assert!(SUB.equals(b"lowo"));
    assert!(EDITED.equals(b"ho!?"));
    assert!(WIDE.contains_char('π'));
    assert!(matches!(WIDE.rfind(&['∞']), Some(2)));
    assert!(OVERFLOW.is_err());
    assert!(NOT_ENOUGH_ROOM.is_err());
    assert!(CLEF.is_full());
    assert!(CLEF.equals(&[0x61, 0xd834, 0xdd1e]));
    assert!(CLEF_ROOMY.equals(CLEF.as_slice()));
    assert!(SCALARS.equals(&[0xdf, 0x3c0, 0x221e]));
    assert!(LETTERS.equals(&['é', 't', 'é']));
};

#[test]
fn constants_hold_the_expected_content() {
    assert_eq!(HELLO, "hello");
    assert_eq!(WORLD, "world");
    assert_eq!(HELLO_WORLD, "helloworld");
    assert_eq!(EDITED, "ho!?");
    assert_eq!(SUB, "lowo");
    assert_eq!(WIDE.to_string(), "ßπ∞");
    assert_eq!(CLEF.to_string(), "a𝄞");
    assert_eq!(SCALARS.to_string(), "ßπ∞");
    assert_eq!(LETTERS.to_string(), "été");
}

#[test]
fn failed_constant_operations_report_their_error() {
    assert_eq!(
        OVERFLOW,
        Err(Error::CapacityExceeded {
            required: 4,
            capacity: 3
        })
    );
    assert_eq!(
        NOT_ENOUGH_ROOM.unwrap_err(),
        Error::CapacityExceeded {
            required: 10,
            capacity: 4
        }
    );
}

#[test]
fn constant_strings_are_null_terminated() {
    assert_eq!(HELLO.as_slice_with_nul(), b"hello\0");
    assert_eq!(HELLO.as_c_str().unwrap().to_bytes(), b"hello");
    assert_eq!(unsafe { *HELLO_WORLD.as_ptr().add(10) }, 0);
}
