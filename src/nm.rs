//! Front end for symbol tables as printed by `nm -ClSp`, e.g.,
//! `0000000000a1b2c0 0000000000000042 T foo::bar()	../../foo/bar.cc:17`.

use std::fmt;
use std::num::ParseIntError;

use log::debug;
use regex::Regex;
use thiserror::Error;

use crate::record::{Record, RecordError};

const SIZED_SYMBOL_PATTERN: &str = r"^[0-9a-f]{16} (?P<size>[0-9a-z]{16}) (?P<section>[a-zA-Z]) (?P<symbol>[^\t\n]+)(\t(?P<path>[^:]+):(?P<line>[0-9]+))?";

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("invalid hexadecimal size '{size}': {source}")]
    InvalidSize { size: String, source: ParseIntError },

    #[error(transparent)]
    InvalidRecord(#[from] RecordError),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseStats {
    pub lines: usize,
    /// Lines that describe a sized symbol.
    pub matches: usize,
    /// Matched lines that were not turned into a record, because the symbol has size zero.
    pub skipped: usize,
}

impl fmt::Display for ParseStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "matched {} of {} lines", self.matches, self.lines)?;
        if self.skipped > 0 {
            write!(f, " ({} with size zero skipped)", self.skipped)?;
        }
        Ok(())
    }
}

#[derive(Debug)]
pub struct SymbolTableParser {
    sized_symbol: Regex,
    /// Add the symbol as the last name segment, which gives symbol-level breakdowns but
    /// drastically increases the size of the report.
    with_symbols: bool,
    /// Number of characters of the symbol to use as path if the line has no path.
    placeholder_len: usize,
    stats: ParseStats,
}

impl SymbolTableParser {
    pub fn new(with_symbols: bool, placeholder_len: usize) -> Result<Self, regex::Error> {
        Ok(Self {
            sized_symbol: Regex::new(SIZED_SYMBOL_PATTERN)?,
            with_symbols,
            placeholder_len,
            stats: ParseStats::default(),
        })
    }

    pub fn stats(&self) -> ParseStats {
        self.stats
    }

    /// Returns `None` for lines without a sized symbol, and for symbols with size zero.
    pub fn parse_line(&mut self, line: &str) -> Result<Option<Record>, ParseError> {
        self.stats.lines += 1;
        let Some(captures) = self.sized_symbol.captures(line) else {
            return Ok(None);
        };
        self.stats.matches += 1;

        let size_str = &captures["size"];
        let size = u64::from_str_radix(size_str, 16).map_err(|source| ParseError::InvalidSize {
            size: size_str.to_owned(),
            source,
        })?;
        let symbol = &captures["symbol"];
        if size == 0 {
            debug!("skipping symbol with size zero: {symbol}");
            self.stats.skipped += 1;
            return Ok(None);
        }

        let path = match captures.name("path") {
            Some(path) => path.as_str().to_owned(),
            // Without a path, group by the beginning of the symbol. Good enough to keep the report
            // at a size that can still be rendered.
            None => {
                let mut placeholder: String = symbol.chars().take(self.placeholder_len).collect();
                placeholder.push_str("...");
                placeholder
            }
        };
        let symbol = self.with_symbols.then(|| symbol.to_owned());
        Ok(Some(Record::new(size, path, symbol)?))
    }
}
