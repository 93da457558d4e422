//! Count word occurrences.

use std::collections::HashMap;
use std::io::Read;
use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use fixstr::FixedString;

use super::{GlobalOpts, SubCommand};

/// Words longer than this many bytes are skipped.
const WORD_CAPACITY: usize = 32;

type Word = FixedString<WORD_CAPACITY>;

/// Count word occurrences in a file, or in standard input.
#[derive(Debug, Args)]
pub struct Opts {
    /// File to read. Standard input is read when omitted.
    file: Option<PathBuf>,

    /// Only print the K most frequent words.
    #[arg(long, value_name = "K")]
    top: Option<usize>,
}

pub(super) fn run(global: GlobalOpts) -> anyhow::Result<()> {
    let local = unwrap_command!(global, SubCommand::Count);

    let text = match &local.file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("failed to read standard input")?;
            text
        }
    };

    let mut counts = HashMap::new();
    let skipped = tally(&text, &mut counts);
    log::debug!("{} distinct words, {} skipped", counts.len(), skipped);

    let ranked = rank(counts, local.top);
    for (word, count) in ranked {
        println!("{count:>7} {word}");
    }

    Ok(())
}

/// Adds every word of `text` to `counts`, ignoring case and surrounding punctuation.
///
/// Returns the number of words that did not fit in a [`Word`].
fn tally(text: &str, counts: &mut HashMap<Word, usize>) -> usize {
    let mut skipped = 0;

    for raw in text.split_whitespace() {
        let trimmed = raw.trim_matches(|c: char| !c.is_alphanumeric());
        if trimmed.is_empty() {
            continue;
        }

        let mut word = match Word::try_from_str(trimmed) {
            Ok(word) => word,
            Err(err) => {
                log::warn!("skipping `{trimmed}`: {err}");
                skipped += 1;
                continue;
            }
        };
        word.make_ascii_lowercase();

        *counts.entry(word).or_default() += 1;
    }

    skipped
}

/// Sorts words by decreasing count, then alphabetically.
fn rank(counts: HashMap<Word, usize>, top: Option<usize>) -> Vec<(Word, usize)> {
    let mut ranked: Vec<_> = counts.into_iter().collect();
    ranked.sort_unstable_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    if let Some(top) = top {
        ranked.truncate(top);
    }
    ranked
}
