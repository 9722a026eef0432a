//! Query file reader.
//!
//! One query per row: `<type>,<name>[,<expected_0>,...,<expected_n>]`. Rows
//! may carry any number of fields, fields may be double-quoted with `""` as
//! an escaped quote, and a leading UTF-8 byte-order mark (common in
//! spreadsheet exports) is skipped.

use async_trait::async_trait;
use dnsload_application::ports::QuerySource;
use dnsload_domain::{DomainError, QueryRecord, RecordType};
use std::path::PathBuf;
use tracing::{debug, warn};

const BOM: char = '\u{feff}';

pub struct CsvQuerySource {
    path: PathBuf,
}

impl CsvQuerySource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Parses file contents into query records, dropping rows that cannot be
    /// sent: fewer than two fields, an empty name, or an unsupported record
    /// type.
    pub fn parse(contents: &str) -> Vec<QueryRecord> {
        let contents = contents.strip_prefix(BOM).unwrap_or(contents);
        let mut records = Vec::new();

        for (index, line) in contents.lines().enumerate() {
            let line_no = index + 1;
            if line.trim().is_empty() {
                continue;
            }

            let fields = split_fields(line);
            if fields.len() < 2 || fields[1].is_empty() {
                warn!(line = line_no, row = line, "Malformed row - excluding from test");
                continue;
            }

            let record_type = match fields[0].parse::<RecordType>() {
                Ok(rt) => rt,
                Err(_) => {
                    warn!(
                        line = line_no,
                        record_type = %fields[0],
                        question = %fields[1],
                        "Invalid or unsupported record type - excluding from test"
                    );
                    continue;
                }
            };

            let expected: Vec<String> = fields[2..]
                .iter()
                .filter(|f| !f.is_empty())
                .cloned()
                .collect();

            debug!(
                line = line_no,
                record_type = %record_type,
                question = %fields[1],
                expects = ?expected,
                "Input record"
            );

            records.push(QueryRecord::new(
                record_type,
                fields[1].as_str(),
                expected,
            ));
        }

        records
    }
}

#[async_trait]
impl QuerySource for CsvQuerySource {
    async fn load(&self) -> Result<Vec<QueryRecord>, DomainError> {
        let contents = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| DomainError::QueryFileRead {
                path: self.path.display().to_string(),
                reason: e.to_string(),
            })?;

        Ok(Self::parse(&contents))
    }
}

/// Splits one CSV line, honouring double quotes. Unquoted fields are trimmed.
fn split_fields(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut quoted = false;
    let mut was_quoted = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if quoted => {
                if chars.peek() == Some(&'"') {
                    field.push('"');
                    chars.next();
                } else {
                    quoted = false;
                }
            }
            '"' if field.trim().is_empty() => {
                field.clear();
                quoted = true;
                was_quoted = true;
            }
            ',' if !quoted => {
                fields.push(finish_field(&mut field, was_quoted));
                was_quoted = false;
            }
            _ => field.push(c),
        }
    }
    fields.push(finish_field(&mut field, was_quoted));

    fields
}

fn finish_field(field: &mut String, was_quoted: bool) -> String {
    let value = std::mem::take(field);
    if was_quoted {
        value
    } else {
        value.trim().to_string()
    }
}
