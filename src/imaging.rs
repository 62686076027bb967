//! Intake validation: decode whatever the user uploaded and normalize it to
//! JPEG before it goes to the vision provider.

use std::io::Cursor;

use anyhow::{Context, Result};
use image::ImageFormat;
use tracing::trace;

/// Decode an uploaded image and re-encode it as JPEG.
///
/// Fails when the bytes are not a decodable image, which is the only intake
/// validation the pipeline performs.
pub fn to_jpeg_bytes(data: &[u8]) -> Result<Vec<u8>> {
    let decoded = image::load_from_memory(data).context("could not decode uploaded image")?;

    let mut out = Cursor::new(Vec::new());
    decoded
        .to_rgb8()
        .write_to(&mut out, ImageFormat::Jpeg)
        .context("could not re-encode image as JPEG")?;

    let bytes = out.into_inner();
    trace!(input = data.len(), output = bytes.len(), "re-encoded image as JPEG");
    Ok(bytes)
}
