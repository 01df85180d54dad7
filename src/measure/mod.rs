//! Artifact size measurement
//!
//! Builds a fresh [`SizeRecordSet`] for a list of artifacts: the raw byte
//! length of each, plus one entry per configured compressor.

mod compress;
mod reader;

pub use compress::{Compressor, CompressorSet, Gzip};
pub use reader::{FileReader, FsReader};

use crate::cache::{SizeRecord, SizeRecordSet, RAW};
use std::path::Path;
use tracing::{debug, warn};

/// Measure every artifact with every compressor.
///
/// An unreadable artifact counts as empty so that it still gets a row.
/// Empty contents are zero bytes under every compressor.
pub fn measure<S: AsRef<str>>(
    reader: &dyn FileReader,
    artifacts: &[S],
    compressors: &CompressorSet,
) -> SizeRecordSet {
    let mut sizes = SizeRecordSet::new();

    for artifact in artifacts {
        let artifact = artifact.as_ref();
        let contents = reader.read(Path::new(artifact)).unwrap_or_else(|e| {
            warn!("Unable to read {}, counting it as empty: {}", artifact, e);
            Vec::new()
        });

        let mut record = SizeRecord::new();
        record.insert(RAW.to_string(), contents.len() as u64);

        for compressor in compressors.iter() {
            if contents.is_empty() {
                record.insert(compressor.name().to_string(), 0);
                continue;
            }

            match compressor.compressed_len(&contents) {
                Ok(len) => {
                    record.insert(compressor.name().to_string(), len);
                }
                Err(e) => warn!(
                    "Unable to {} {}, omitting compressed size: {}",
                    compressor.name(),
                    artifact,
                    e
                ),
            }
        }

        debug!("Measured {}: {:?}", artifact, record);
        sizes.insert(artifact.to_string(), record);
    }

    sizes
}
