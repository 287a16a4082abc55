//! Perceptual hash provider backed by the `image_hasher` crate.

use std::path::Path;

use image_hasher::{HashAlg, Hasher, HasherConfig, ImageHash};

use crate::config::{HashAlgorithm, HashingConfig};
use crate::error::{Error, Result};
use crate::fs::is_image_file;
use crate::hash::provider::{EncodingMap, HashProvider};

/// Default hash provider: perceptual image hashing with greedy clustering
/// over Hamming distance.
#[derive(Debug, Clone)]
pub struct PerceptualHasher {
    config: HashingConfig,
}

impl PerceptualHasher {
    /// Create a provider from hashing configuration.
    pub fn new(config: HashingConfig) -> Self {
        Self { config }
    }

    fn build_hasher(&self) -> Hasher {
        let alg = match self.config.algorithm {
            HashAlgorithm::Mean => HashAlg::Mean,
            HashAlgorithm::Gradient => HashAlg::Gradient,
            HashAlgorithm::DoubleGradient => HashAlg::DoubleGradient,
            HashAlgorithm::Blockhash => HashAlg::Blockhash,
        };

        HasherConfig::new()
            .hash_size(self.config.hash_size, self.config.hash_size)
            .hash_alg(alg)
            .to_hasher()
    }
}

impl Default for PerceptualHasher {
    fn default() -> Self {
        Self::new(HashingConfig::default())
    }
}

impl HashProvider for PerceptualHasher {
    fn encode(&self, directory: &Path) -> Result<EncodingMap> {
        let hasher = self.build_hasher();
        let mut encodings = EncodingMap::new();

        let entries = std::fs::read_dir(directory)
            .map_err(|e| Error::Scan(format!("{}: {}", directory.display(), e)))?;

        for entry in entries {
            let entry = entry.map_err(|e| Error::Scan(format!("{}: {}", directory.display(), e)))?;
            let path = entry.path();

            if !path.is_file() || !is_image_file(&path) {
                continue;
            }

            let filename = match path.file_name().and_then(|n| n.to_str()) {
                Some(name) => name.to_string(),
                None => continue,
            };

            let image = image::open(&path)
                .map_err(|e| Error::Image(format!("Failed to decode {}: {}", filename, e)))?;

            let hash = hasher.hash_image(&image);
            tracing::debug!("Hashed {}", filename);
            encodings.insert(filename, hash.to_base64());
        }

        Ok(encodings)
    }

    fn select_duplicates(&self, encodings: &EncodingMap) -> Result<Vec<String>> {
        // Sorted iteration makes the kept representative deterministic: the
        // lexicographically first member of each cluster survives.
        let mut filenames: Vec<&String> = encodings.keys().collect();
        filenames.sort();

        let mut hashes: Vec<(&String, ImageHash)> = Vec::with_capacity(filenames.len());
        for filename in filenames {
            let encoded = &encodings[filename];
            let hash = ImageHash::from_base64(encoded).map_err(|e| {
                Error::Encoding(format!("Bad encoding for {}: {:?}", filename, e))
            })?;
            hashes.push((filename, hash));
        }

        let mut removable = vec![false; hashes.len()];
        let mut duplicates = Vec::new();

        for i in 0..hashes.len() {
            if removable[i] {
                continue;
            }
            for j in (i + 1)..hashes.len() {
                if removable[j] {
                    continue;
                }
                if hashes[i].1.dist(&hashes[j].1) <= self.config.distance_threshold {
                    removable[j] = true;
                    duplicates.push(hashes[j].0.clone());
                }
            }
        }

        tracing::debug!(
            "Selected {} duplicates out of {} images",
            duplicates.len(),
            encodings.len()
        );

        Ok(duplicates)
    }
}
