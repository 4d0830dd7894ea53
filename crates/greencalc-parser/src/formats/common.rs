use csv::{ReaderBuilder, StringRecord, Trim};

use crate::errors::ParserError;
use crate::model::TableKind;

/// Splits raw comma-separated text into trimmed records. Quoted fields may contain
/// commas but never span lines, so an unbalanced quote only spoils its own row. Rows
/// where every field is blank are dropped before any header skipping. Input that is not
/// valid UTF-8 is rejected.
pub(crate) fn read_records(
    table: TableKind,
    content: &[u8],
) -> Result<Vec<StringRecord>, ParserError> {
    let mut builder = ReaderBuilder::new();
    builder.has_headers(false).flexible(true).trim(Trim::All);

    let mut records = Vec::new();
    for line in content.split(|byte| *byte == b'\n') {
        let line = strip_blanks_before_quotes(line);
        let mut reader = builder.from_reader(line.as_slice());
        for result in reader.records() {
            let record = result.map_err(|source| ParserError::Csv { table, source })?;
            if record.iter().all(str::is_empty) {
                continue;
            }
            records.push(record);
        }
    }
    Ok(records)
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum FieldState {
    Start,
    Unquoted,
    Quoted,
    AfterQuote,
}

/// Drops whitespace between a delimiter and an opening quote, so `a, "b, c"` still
/// yields `b, c` as one field. csv only honours a quote as the first byte of a field.
fn strip_blanks_before_quotes(line: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(line.len());
    let mut pending = Vec::new();
    let mut state = FieldState::Start;

    for &byte in line {
        state = match (state, byte) {
            (FieldState::Start, b' ' | b'\t') => {
                pending.push(byte);
                continue;
            }
            (FieldState::Start, b'"') => {
                pending.clear();
                FieldState::Quoted
            }
            (FieldState::Start, b',') | (FieldState::Unquoted, b',') => FieldState::Start,
            (FieldState::Start, _) => FieldState::Unquoted,
            (FieldState::Quoted, b'"') => FieldState::AfterQuote,
            (FieldState::AfterQuote, b'"') => FieldState::Quoted,
            (FieldState::AfterQuote, b',') => FieldState::Start,
            (FieldState::AfterQuote, _) => FieldState::Unquoted,
            (other, _) => other,
        };
        out.append(&mut pending);
        out.push(byte);
    }
    out.append(&mut pending);
    out
}

pub(crate) fn is_placeholder_key(key: Option<&str>, sentinels: &[&str]) -> bool {
    match key {
        None => true,
        Some(key) => key.is_empty() || sentinels.contains(&key),
    }
}

pub(crate) fn optional_text(record: &StringRecord, index: usize) -> String {
    record.get(index).unwrap_or_default().to_string()
}

pub(crate) fn parse_finite(value: Option<&str>) -> Option<f64> {
    value?
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|parsed| parsed.is_finite())
}

pub(crate) fn parse_optional_f64(value: Option<&str>) -> Option<f64> {
    match value.map(str::trim) {
        Some(trimmed) if !trimmed.is_empty() => parse_finite(Some(trimmed)),
        _ => None,
    }
}

pub(crate) fn parse_optional_year(value: Option<&str>) -> Option<i32> {
    let trimmed = value.map(str::trim).filter(|v| !v.is_empty())?;
    trimmed.parse::<i32>().ok().or_else(|| {
        // Spreadsheet exports sometimes write years as "2016.0".
        parse_finite(Some(trimmed))
            .filter(|year| year.fract() == 0.0 && year.abs() < i32::MAX as f64)
            .map(|year| year as i32)
    })
}
