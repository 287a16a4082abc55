//! Hash provider interface.

use std::collections::HashMap;
use std::path::Path;

use crate::error::Result;

/// Mapping from filename (relative to the scanned directory) to an opaque
/// perceptual-hash encoding.
pub type EncodingMap = HashMap<String, String>;

/// Two-call interface to the perceptual hashing engine.
///
/// The resolver only ever consumes these two operations; hash format,
/// similarity metric and threshold are opaque to it, so any engine can be
/// substituted behind this trait.
pub trait HashProvider {
    /// Encode every image file found directly under `directory`.
    ///
    /// Non-recursive: files in subfolders are not scanned. An empty or
    /// image-free directory yields an empty map. An unreadable directory or
    /// an undecodable image is fatal and propagates.
    fn encode(&self, directory: &Path) -> Result<EncodingMap>;

    /// Select the removable members of each similarity cluster.
    ///
    /// One member per cluster is kept implicitly (by omission); every other
    /// member is returned. Every returned filename is a key of `encodings`.
    /// Callers must not assume any particular order.
    fn select_duplicates(&self, encodings: &EncodingMap) -> Result<Vec<String>>;
}
