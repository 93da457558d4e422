//! Search a string for a substring.

use anyhow::Context;
use clap::Args;
use fixstr::FixedString;

use super::{GlobalOpts, SubCommand};

/// Search HAYSTACK for every occurrence of NEEDLE.
#[derive(Debug, Args)]
pub struct Opts {
    /// The string to search in, at most 256 bytes.
    haystack: String,

    /// The string to search for, at most 64 bytes.
    needle: String,
}

pub(super) fn run(global: GlobalOpts) -> anyhow::Result<()> {
    let local = unwrap_command!(global, SubCommand::Find);

    let haystack: FixedString<256> = local.haystack.parse().context("invalid haystack")?;
    let needle: FixedString<64> = local.needle.parse().context("invalid needle")?;

    let positions = positions(&haystack, &needle);
    log::debug!("{} matches of {:?} in {:?}", positions.len(), needle, haystack);

    if positions.is_empty() {
        println!("no match");
    } else {
        for pos in &positions {
            println!("{pos}");
        }
    }

    log::info!(
        "prefix: {}, suffix: {}",
        haystack.starts_with(&needle),
        haystack.ends_with(&needle)
    );

    Ok(())
}

/// Returns the start of every occurrence of `needle`, overlapping ones included.
fn positions(haystack: &FixedString<256>, needle: &FixedString<64>) -> Vec<usize> {
    let mut ret = Vec::new();
    let mut from = 0;
    while let Some(pos) = haystack.find_from(needle, from) {
        ret.push(pos);
        if pos == haystack.len() {
            break;
        }
        from = pos + 1;
    }
    ret
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn search(haystack: &str, needle: &str) -> Vec<usize> {
        positions(&haystack.parse().unwrap(), &needle.parse().unwrap())
    }

    #[test]
    fn overlapping_matches_are_reported() {
        assert_eq!(search("aaaa", "aa"), [0, 1, 2]);
        assert_eq!(search("This is a string", "is"), [2, 5]);
        assert_eq!(search("abc", "d"), Vec::<usize>::new());
    }

    #[test]
    fn empty_needle_matches_everywhere() {
        assert_eq!(search("ab", ""), [0, 1, 2]);
    }
}
