/*!
 * Tests for row building, deduplication and table output
 */

use anyhow::Result;
use std::fs;
use vocab_tr::app_config::OutputFormat;
use vocab_tr::exporter::{dedup_by_term, TableWriter, VocabRow, HEADER};
use vocab_tr::vocabulary::VocabPair;
use crate::common;

fn rows() -> Vec<VocabRow> {
    vec![
        VocabRow::from_pair(VocabPair::new("Guten Morgen", "sabahınız xeyir")),
        VocabRow::from_pair(VocabPair::new("gehen, ging", "getmək, yerimək")),
        VocabRow::from_pair(VocabPair::new("Guten Morgen", "sabahınız xeyir olsun")),
    ]
}

#[test]
fn test_writeRows_withCsvFormat_shouldWriteHeaderAndQuotedFields() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = temp_dir.path().join("vocab.csv");

    TableWriter::write_rows(&rows(), &path, OutputFormat::Csv)?;

    let content = fs::read_to_string(&path)?;
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0], HEADER.join(","));
    assert_eq!(lines[1], "Guten Morgen,sabahınız xeyir,günaydın");
    assert_eq!(lines[2], "\"gehen, ging\",\"getmək, yerimək\",\"getmek, yerimek\"");
    Ok(())
}

#[test]
fn test_writeRows_withTsvFormat_shouldUseTabs() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = temp_dir.path().join("vocab.tsv");

    TableWriter::write_rows(&rows(), &path, OutputFormat::Tsv)?;

    let content = fs::read_to_string(&path)?;
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines[0], "german\tsource_translation\tturkish_like");
    assert_eq!(lines[2], "gehen, ging\tgetmək, yerimək\tgetmek, yerimek");
    Ok(())
}

#[test]
fn test_writeRows_withMissingParentDir_shouldCreateIt() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = temp_dir.path().join("nested").join("out").join("vocab.csv");

    TableWriter::write_rows(&[], &path, OutputFormat::Csv)?;

    assert_eq!(fs::read_to_string(&path)?.trim_end(), HEADER.join(","));
    Ok(())
}

#[test]
fn test_writeRows_withDirectoryAsPath_shouldFail() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    assert!(TableWriter::write_rows(&rows(), temp_dir.path(), OutputFormat::Csv).is_err());
    Ok(())
}

#[test]
fn test_dedupByTerm_shouldKeepExactlyOneRowPerTerm() {
    let unique = dedup_by_term(rows());
    assert_eq!(unique.len(), 2);
    assert_eq!(unique[0].source_gloss, "sabahınız xeyir");
    assert_eq!(unique[1].term, "gehen, ging");
}

#[test]
fn test_dedupByTerm_withDistinctTerms_shouldKeepOrder() {
    let input: Vec<VocabRow> = ["c", "a", "b"]
        .iter()
        .map(|term| VocabRow::from_pair(VocabPair::new(*term, "bir az")))
        .collect();
    let terms: Vec<String> = dedup_by_term(input).into_iter().map(|row| row.term).collect();
    assert_eq!(terms, vec!["c", "a", "b"]);
}
