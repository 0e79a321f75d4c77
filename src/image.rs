use std::fs;
use std::path::{Path, PathBuf};

use image::error::{DecodingError, ImageFormatHint};
use image::{imageops::FilterType, ImageError, ImageFormat};
use tracing::{debug, error};

use crate::error::ResizeError;

pub const TARGET_WIDTH: u32 = 128;
pub const TARGET_HEIGHT: u32 = 128;

// image has no default filter; keep the Lanczos3 the service always resized with.
const FILTER: FilterType = FilterType::Lanczos3;

// Zero-length IEND chunk including its CRC. The PNG decoder stops once the
// pixel data is read, so a payload cut inside IEND would otherwise decode.
const IEND_CHUNK: [u8; 12] = [0, 0, 0, 0, b'I', b'E', b'N', b'D', 0xAE, 0x42, 0x60, 0x82];

const INPUT_FILE: &str = "input.png";
const OUTPUT_FILE: &str = "output_128.png";

/// Resizes PNG payloads to a fixed 128x128 thumbnail.
///
/// Every call stages its input and output in a freshly created directory
/// under `scratch_root`, so concurrent calls never touch the same files.
/// The directory is removed when the call returns.
#[derive(Debug, Clone)]
pub struct ImageResizeHandler {
    scratch_root: PathBuf,
}

impl Default for ImageResizeHandler {
    fn default() -> Self {
        Self::new(std::env::temp_dir())
    }
}

impl ImageResizeHandler {
    pub fn new(scratch_root: impl Into<PathBuf>) -> Self {
        Self {
            scratch_root: scratch_root.into(),
        }
    }

    pub fn scratch_root(&self) -> &Path {
        &self.scratch_root
    }

    pub fn resize(&self, input: &[u8]) -> Result<Vec<u8>, ResizeError> {
        let staging = tempfile::Builder::new()
            .prefix("png-resize-")
            .tempdir_in(&self.scratch_root)?;
        let input_path = staging.path().join(INPUT_FILE);
        let output_path = staging.path().join(OUTPUT_FILE);

        fs::write(&input_path, input)?;
        debug!("Staged {} input bytes at {}", input.len(), input_path.display());

        let img = decode_staged(&input_path, input).map_err(|e| {
            error!("Failed to read image: {e}");
            ResizeError::Decode(e)
        })?;

        let resized = img.resize_exact(TARGET_WIDTH, TARGET_HEIGHT, FILTER);
        resized
            .save_with_format(&output_path, ImageFormat::Png)
            .map_err(|e| {
                error!("Failed to write image: {e}");
                ResizeError::Encode(e)
            })?;

        let output = fs::read(&output_path)?;
        debug!(
            "Resized {}x{} to {TARGET_WIDTH}x{TARGET_HEIGHT}, {} bytes",
            img.width(),
            img.height(),
            output.len()
        );

        Ok(output)
    }
}

fn decode_staged(path: &Path, staged: &[u8]) -> image::ImageResult<image::DynamicImage> {
    if !staged.ends_with(&IEND_CHUNK) {
        return Err(ImageError::Decoding(DecodingError::new(
            ImageFormatHint::Exact(ImageFormat::Png),
            "missing or truncated IEND chunk",
        )));
    }
    image::open(path)
}
