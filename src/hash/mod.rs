//! Perceptual hashing module.
//!
//! Provides:
//! - The two-call `HashProvider` interface (encode, select duplicates)
//! - The default `image_hasher`-backed implementation

pub mod perceptual;
pub mod provider;

pub use perceptual::PerceptualHasher;
pub use provider::{EncodingMap, HashProvider};
