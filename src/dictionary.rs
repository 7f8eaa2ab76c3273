//! Plain-text unigram and bigram count files.
//!
//! This is the alternate way to bootstrap a model when no corpus is at hand,
//! and the way to inspect a trained one.
//!
//! # Format
//!
//! Unigram files hold one `word count` entry per line, bigram files one
//! `word1 word2 count` entry per line:
//! ```text
//! # Comments start with #
//! le 15000
//! chat 320
//! ```
//! ```text
//! le chat 42
//! ```
//!
//! Blank lines and comments are ignored. Lines with the wrong number of
//! fields or an unparsable count are skipped. Words are lower-cased. When a
//! word or pair appears more than once, the last entry wins.

use crate::error::Result;
use crate::model::FrequencyModel;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// Outcome of reading one count file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportSummary {
    pub entries: usize,
    pub skipped: usize,
}

/// Set the counts of the `word count` entries read from `reader` in `model`.
pub fn import_unigrams<R: BufRead>(model: &mut FrequencyModel, reader: R) -> Result<ImportSummary> {
    let mut summary = ImportSummary::default();

    for line in reader.lines() {
        let line = line?;
        let Some(parts) = entry_fields(&line) else {
            continue;
        };

        match parts.as_slice() {
            [word, count] => match count.parse::<u64>() {
                Ok(count) => {
                    model.set_count(&word.to_lowercase(), count);
                    summary.entries += 1;
                }
                Err(_) => summary.skipped += 1,
            },
            _ => summary.skipped += 1,
        }
    }

    Ok(summary)
}

/// Set the counts of the `word1 word2 count` entries read from `reader` in `model`.
pub fn import_bigrams<R: BufRead>(model: &mut FrequencyModel, reader: R) -> Result<ImportSummary> {
    let mut summary = ImportSummary::default();

    for line in reader.lines() {
        let line = line?;
        let Some(parts) = entry_fields(&line) else {
            continue;
        };

        match parts.as_slice() {
            [previous, next, count] => match count.parse::<u64>() {
                Ok(count) => {
                    model.set_bigram(&previous.to_lowercase(), &next.to_lowercase(), count);
                    summary.entries += 1;
                }
                Err(_) => summary.skipped += 1,
            },
            _ => summary.skipped += 1,
        }
    }

    Ok(summary)
}

/// Build a model from a unigram file and an optional bigram file.
pub fn load_files(unigram_path: &Path, bigram_path: Option<&Path>) -> Result<FrequencyModel> {
    let mut model = FrequencyModel::new();

    let summary = import_unigrams(&mut model, BufReader::new(File::open(unigram_path)?))?;
    log::info!(
        "Imported {} unigram entries from {} ({} skipped)",
        summary.entries,
        unigram_path.display(),
        summary.skipped
    );

    if let Some(bigram_path) = bigram_path {
        let summary = import_bigrams(&mut model, BufReader::new(File::open(bigram_path)?))?;
        log::info!(
            "Imported {} bigram entries from {} ({} skipped)",
            summary.entries,
            bigram_path.display(),
            summary.skipped
        );
    }

    Ok(model)
}

/// Write the vocabulary as `word count` lines, sorted by word.
pub fn export_unigrams<W: Write>(model: &FrequencyModel, writer: W) -> Result<()> {
    let mut writer = BufWriter::new(writer);
    let sorted: BTreeMap<&str, u64> = model.words().collect();
    for (word, count) in sorted {
        writeln!(writer, "{word} {count}")?;
    }
    writer.flush()?;
    Ok(())
}

/// Write the bigram table as `word1 word2 count` lines, sorted by pair.
pub fn export_bigrams<W: Write>(model: &FrequencyModel, writer: W) -> Result<()> {
    let mut writer = BufWriter::new(writer);
    let sorted: BTreeMap<(&str, &str), u64> = model
        .bigrams()
        .map(|(previous, next, count)| ((previous, next), count))
        .collect();
    for ((previous, next), count) in sorted {
        writeln!(writer, "{previous} {next} {count}")?;
    }
    writer.flush()?;
    Ok(())
}

pub fn save_files(model: &FrequencyModel, unigram_path: &Path, bigram_path: &Path) -> Result<()> {
    export_unigrams(model, File::create(unigram_path)?)?;
    export_bigrams(model, File::create(bigram_path)?)?;
    log::info!(
        "Exported {} words to {} and {} pairs to {}",
        model.vocabulary_len(),
        unigram_path.display(),
        model.bigram_len(),
        bigram_path.display()
    );
    Ok(())
}

/// Whitespace-separated fields of a line, or `None` for blank and comment lines.
fn entry_fields(line: &str) -> Option<Vec<&str>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }
    Some(line.split_whitespace().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_import_unigrams_skips_malformed_lines() {
        let text = "# header\nle 100\n\nChat 5\nchien\nmaison beaucoup\ntrop de champs 3\nchat 2\n";
        let mut model = FrequencyModel::new();

        let summary = import_unigrams(&mut model, Cursor::new(text)).unwrap();

        assert_eq!(summary, ImportSummary { entries: 3, skipped: 3 });
        assert_eq!(model.count("le"), 100);
        // "chat 2" comes after "Chat 5" and replaces it.
        assert_eq!(model.count("chat"), 2);
        assert!(!model.contains("chien"));
        assert!(!model.contains("maison"));
    }

    #[test]
    fn test_import_bigrams() {
        let text = "le chat 10\nle chien 4\nle -3 x\nun seul\nLe Chat 1\n";
        let mut model = FrequencyModel::new();

        let summary = import_bigrams(&mut model, Cursor::new(text)).unwrap();

        assert_eq!(summary, ImportSummary { entries: 3, skipped: 2 });
        assert_eq!(model.bigram_count("le", "chat"), Some(1));
        assert_eq!(model.bigram_count("le", "chien"), Some(4));
    }

    #[test]
    fn test_export_then_import_reproduces_model() {
        let mut model = FrequencyModel::new();
        let mut previous: Option<&str> = None;
        for token in ["le", "chat", "et", "le", "chien", "."] {
            model.observe(previous, token);
            previous = Some(token);
        }

        let mut unigrams = Vec::new();
        let mut bigrams = Vec::new();
        export_unigrams(&model, &mut unigrams).unwrap();
        export_bigrams(&model, &mut bigrams).unwrap();

        let exported = String::from_utf8(unigrams.clone()).unwrap();
        assert_eq!(exported.lines().next(), Some(". 1"));

        let mut reloaded = FrequencyModel::new();
        import_unigrams(&mut reloaded, Cursor::new(unigrams)).unwrap();
        import_bigrams(&mut reloaded, Cursor::new(bigrams)).unwrap();
        assert_eq!(reloaded, model);
    }
}
