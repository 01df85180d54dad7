//! Named compressors used for size comparison

use crate::error::{SizeError, SizeResult};
use flate2::write::GzEncoder;
use flate2::Compression;
use std::fmt;
use std::io::{self, Write};

/// A named function from raw bytes to a compressed byte count
pub trait Compressor: Send + Sync {
    /// Name used as the record key and column header
    fn name(&self) -> &str;

    /// Size of `bytes` after compression
    fn compressed_len(&self, bytes: &[u8]) -> io::Result<u64>;
}

/// gzip at the default compression level
#[derive(Debug, Clone, Copy, Default)]
pub struct Gzip;

impl Compressor for Gzip {
    fn name(&self) -> &str {
        "gz"
    }

    fn compressed_len(&self, bytes: &[u8]) -> io::Result<u64> {
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(bytes)?;
        Ok(encoder.finish()?.len() as u64)
    }
}

/// Ordered set of compressors applied to every artifact
#[derive(Default)]
pub struct CompressorSet {
    compressors: Vec<Box<dyn Compressor>>,
}

impl CompressorSet {
    /// An empty set: raw sizes only
    pub fn none() -> Self {
        Self::default()
    }

    /// Build a set from configured names, in the given order
    pub fn from_names<S: AsRef<str>>(names: &[S]) -> SizeResult<Self> {
        let mut set = Self::none();
        for name in names {
            let compressor: Box<dyn Compressor> = match name.as_ref() {
                "gz" | "gzip" => Box::new(Gzip),
                other => return Err(SizeError::UnknownCompressor(other.to_string())),
            };
            set = set.with(compressor);
        }
        Ok(set)
    }

    /// Add a compressor; a later one with the same name replaces the earlier
    pub fn with(mut self, compressor: Box<dyn Compressor>) -> Self {
        self.compressors.retain(|c| c.name() != compressor.name());
        self.compressors.push(compressor);
        self
    }

    /// Compressor names in column order
    pub fn names(&self) -> Vec<String> {
        self.compressors.iter().map(|c| c.name().to_string()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn Compressor> {
        self.compressors.iter().map(|c| c.as_ref())
    }

    pub fn is_empty(&self) -> bool {
        self.compressors.is_empty()
    }
}

impl fmt::Debug for CompressorSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}
