//! VCF record reading.
//!
//! Reads a VCF file (plain text or gzipped/bgzf), yielding one
//! [`VcfRecord`] per data line in file order, capped at a configurable
//! record count.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use flate2::read::MultiGzDecoder;

use crate::errors::AnnotateError;

/// One parsed VCF data line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VcfRecord {
    pub chrom: String,
    /// 1-based position as written in the POS column.
    pub pos: u64,
    pub ref_allele: String,
    /// Comma-split ALT column, in file order. Never empty.
    pub alt_alleles: Vec<String>,
}

impl VcfRecord {
    /// The first alternate allele.
    pub fn primary_alt(&self) -> &str {
        &self.alt_alleles[0]
    }
}

/// Open a VCF file, auto-detecting gzip/bgzf compression.
fn open_vcf(path: &Path) -> Result<Box<dyn BufRead>, AnnotateError> {
    let file = File::open(path)
        .map_err(|e| AnnotateError::FileAccess(format!("{}: {}", path.display(), e)))?;
    let capacity = 256 * 1024; // 256KB buffer for large VCF files
    let name = path.to_string_lossy();
    if name.ends_with(".gz") || name.ends_with(".bgz") {
        Ok(Box::new(BufReader::with_capacity(
            capacity,
            MultiGzDecoder::new(file),
        )))
    } else {
        Ok(Box::new(BufReader::with_capacity(capacity, file)))
    }
}

/// Lazy reader over the data lines of a VCF file.
///
/// Yields at most `max_records` records. The underlying file handle is
/// released as soon as iteration finishes; a reader is not restartable.
pub struct VcfReader {
    reader: Option<Box<dyn BufRead>>,
    line_buf: String,
    saw_column_header: bool,
    yielded: usize,
    max_records: usize,
}

impl std::fmt::Debug for VcfReader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VcfReader")
            .field("reader", &self.reader.as_ref().map(|_| "<BufRead>"))
            .field("line_buf", &self.line_buf)
            .field("saw_column_header", &self.saw_column_header)
            .field("yielded", &self.yielded)
            .field("max_records", &self.max_records)
            .finish()
    }
}

impl VcfReader {
    pub fn from_path<P: AsRef<Path>>(path: P, max_records: usize) -> Result<Self, AnnotateError> {
        Ok(VcfReader {
            reader: Some(open_vcf(path.as_ref())?),
            line_buf: String::new(),
            saw_column_header: false,
            yielded: 0,
            max_records,
        })
    }

    fn next_record(&mut self) -> Result<Option<VcfRecord>, AnnotateError> {
        if self.yielded >= self.max_records {
            self.reader = None;
            return Ok(None);
        }

        loop {
            self.line_buf.clear();
            let n = match self.reader.as_mut() {
                Some(reader) => reader.read_line(&mut self.line_buf)?,
                None => return Ok(None),
            };
            if n == 0 {
                self.reader = None;
                return Ok(None);
            }

            let line = self.line_buf.trim_end_matches('\n').trim_end_matches('\r');
            if line.is_empty() {
                continue;
            }
            if line.starts_with('#') {
                if line.starts_with("#CHROM") {
                    self.saw_column_header = true;
                }
                continue;
            }
            if !self.saw_column_header {
                return Err(AnnotateError::VcfFormat(
                    "Data line before the #CHROM header line".to_string(),
                ));
            }

            let fields: Vec<&str> = line.splitn(10, '\t').collect();
            if fields.len() < 5 {
                return Err(AnnotateError::VcfFormat(format!(
                    "Expected at least 5 tab-separated columns, got {}",
                    fields.len()
                )));
            }

            let pos: u64 = fields[1]
                .parse()
                .map_err(|_| AnnotateError::VcfFormat(format!("Invalid POS field: {}", fields[1])))?;

            return Ok(Some(VcfRecord {
                chrom: fields[0].to_string(),
                pos,
                ref_allele: fields[3].to_string(),
                alt_alleles: fields[4].split(',').map(str::to_string).collect(),
            }));
        }
    }
}

impl Iterator for VcfReader {
    type Item = Result<VcfRecord, AnnotateError>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.next_record() {
            Ok(Some(record)) => {
                self.yielded += 1;
                Some(Ok(record))
            }
            Ok(None) => None,
            Err(e) => {
                // A malformed file poisons the rest of the iteration.
                self.reader = None;
                Some(Err(e))
            }
        }
    }
}
