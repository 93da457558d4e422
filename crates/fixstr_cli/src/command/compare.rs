//! Compare two strings.

use std::cmp::Ordering;

use anyhow::Context;
use clap::Args;
use fixstr::FixedString;

use super::{GlobalOpts, SubCommand};

/// Compare LEFT and RIGHT lexicographically, byte by byte.
#[derive(Debug, Args)]
pub struct Opts {
    /// At most 64 bytes.
    left: String,

    /// At most 128 bytes.
    right: String,
}

pub(super) fn run(global: GlobalOpts) -> anyhow::Result<()> {
    let local = unwrap_command!(global, SubCommand::Compare);

    let left: FixedString<64> = local.left.parse().context("invalid left operand")?;
    let right: FixedString<128> = local.right.parse().context("invalid right operand")?;
    log::debug!("comparing {left:?} with {right:?}");

    println!("{left} {} {right}", symbol(&left, &right));
    if let Some(pos) = mismatch(&left, &right) {
        log::info!("first difference at byte {pos}");
    }

    Ok(())
}

fn symbol(left: &FixedString<64>, right: &FixedString<128>) -> &'static str {
    match left.compare(right) {
        Ordering::Less => "<",
        Ordering::Equal => "==",
        Ordering::Greater => ">",
    }
}

/// Returns the first position where the strings differ, if they are not equal.
fn mismatch(left: &[u8], right: &[u8]) -> Option<usize> {
    let common = left.iter().zip(right).take_while(|(a, b)| a == b).count();
    (common < left.len().max(right.len())).then_some(common)
}
