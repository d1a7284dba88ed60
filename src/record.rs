use thiserror::Error;

/// A single name segment, i.e., one directory, file, or symbol name.
pub type Segment = Box<str>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    #[error("record for '{path}' has size zero")]
    ZeroSize { path: String },

    #[error("record has an empty path")]
    EmptyPath,
}

/// One sized program element, e.g., a function or global from the symbol table.
/// Can only be constructed with a non-zero size and a non-empty path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    size: u64,
    path: String,
    symbol: Option<String>,
}

impl Record {
    pub fn new(size: u64, path: impl Into<String>, symbol: Option<String>) -> Result<Self, RecordError> {
        let path = path.into();
        if path.is_empty() {
            return Err(RecordError::EmptyPath);
        }
        if size == 0 {
            return Err(RecordError::ZeroSize { path });
        }
        Ok(Self { size, path, symbol })
    }

    pub fn size(&self) -> u64 {
        self.size
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn symbol(&self) -> Option<&str> {
        self.symbol.as_deref()
    }

    /// The key under which the record is merged into the tree:
    /// the `/`-separated path segments, followed by the symbol (if any).
    pub fn name(&self) -> Vec<Segment> {
        self.path
            .split('/')
            .chain(self.symbol.as_deref())
            .map(Into::into)
            .collect()
    }
}
