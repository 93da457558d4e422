use core::fmt::{self, Write};

use crate::{Char, FixedString};

/// Honors the width, fill, alignment and precision flags the same way `str` does.
impl<const N: usize, C: Char> fmt::Display for FixedString<N, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.width().is_none() && f.precision().is_none() {
            return C::decode(self, &mut |c| f.write_char(c));
        }

        let mut chars = 0;
        C::decode(self, &mut |_| {
            chars += 1;
            Ok(())
        })?;

        let shown = f.precision().map_or(chars, |precision| precision.min(chars));
        let padding = f.width().map_or(0, |width| width.saturating_sub(shown));
        let (before, after) = match f.align() {
            Some(fmt::Alignment::Right) => (padding, 0),
            Some(fmt::Alignment::Center) => (padding / 2, padding - padding / 2),
            Some(fmt::Alignment::Left) | None => (0, padding),
        };
        let fill = f.fill();

        for _ in 0..before {
            f.write_char(fill)?;
        }
        let mut remaining = shown;
        C::decode(self, &mut |c| {
            if remaining == 0 {
                return Ok(());
            }
            remaining -= 1;
            f.write_char(c)
        })?;
        for _ in 0..after {
            f.write_char(fill)?;
        }
        Ok(())
    }
}

impl<const N: usize, C: Char> fmt::Debug for FixedString<N, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char('"')?;
        C::decode(self, &mut |c| {
            if c == '\'' {
                // Single quotes don't need escaping in a double-quoted string.
                f.write_char(c)
            } else {
                c.escape_debug().try_for_each(|e| f.write_char(e))
            }
        })?;
        f.write_char('"')
    }
}

/// Writing fails when the formatted text does not fit; the text that was written by previous
/// calls is kept.
impl<const N: usize, C: Char> fmt::Write for FixedString<N, C> {
    #[inline]
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.push_str(s).map_err(|_| fmt::Error)
    }
}
