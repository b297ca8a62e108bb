use std::path::{Path, PathBuf};

use crate::data_structures::texture::DecodedImage;

/**
 * This module contains all logic for loading textures from external files and
 * handing device resources to the rest of the engine.
 */
pub mod gpu;
pub mod mesh;
pub mod texture;

/// Turns an image file into raw pixels.
///
/// Decoded rows are expected bottom row first (flipped vertically on load) so
/// that texture coordinates with the origin in the lower-left corner sample
/// the image upright.
pub trait ImageDecoder {
    fn decode(&self, path: &Path) -> anyhow::Result<DecodedImage>;
}

impl<F> ImageDecoder for F
where
    F: Fn(&Path) -> anyhow::Result<DecodedImage>,
{
    fn decode(&self, path: &Path) -> anyhow::Result<DecodedImage> {
        self(path)
    }
}

/// Reads image files relative to an asset root and decodes them with the `image` crate.
#[derive(Clone, Debug)]
pub struct ImageFileDecoder {
    root: PathBuf,
}

impl ImageFileDecoder {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl Default for ImageFileDecoder {
    fn default() -> Self {
        Self::new(Path::new("./").join("assets"))
    }
}

impl ImageDecoder for ImageFileDecoder {
    fn decode(&self, path: &Path) -> anyhow::Result<DecodedImage> {
        let data = load_binary(&self.root.join(path))?;
        decode_bytes(&data)
    }
}

pub fn load_binary(path: &Path) -> anyhow::Result<Vec<u8>> {
    let data = std::fs::read(path)
        .map_err(|e| anyhow::anyhow!("could not read {}: {e}", path.display()))?;
    Ok(data)
}

/// Decode encoded image bytes (PNG, JPEG, ...), flipped vertically.
pub fn decode_bytes(bytes: &[u8]) -> anyhow::Result<DecodedImage> {
    let img = image::load_from_memory(bytes)?;
    Ok(DecodedImage::from_dynamic(img))
}
