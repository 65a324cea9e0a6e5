//! Image compression pipeline.
//!
//! `prepare_image` is pure and `Send`, so the host may run it off the UI
//! thread and hand the result back to `VisionBoard::complete_image_ingest`.

use crate::constants::COMPRESSED_MIME;
use crate::error::{BoardError, BoardResult};
use crate::profile_scope;
use crate::settings::MediaSettings;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use image::codecs::jpeg::JpegEncoder;
use image::imageops::FilterType;
use image::{DynamicImage, GenericImageView};
use tracing::debug;

/// An image ready to be placed on the board.
#[derive(Debug, Clone, PartialEq)]
pub struct PreparedImage {
    /// `data:image/jpeg;base64,...`
    pub data_uri: String,
    /// Pixel size of the stored (compressed) image
    pub pixel_size: (u32, u32),
    /// Initial on-board size in world units
    pub display_size: (f64, f64),
}

/// Decode, compress and size an image.
pub fn prepare_image(bytes: &[u8], settings: &MediaSettings) -> BoardResult<PreparedImage> {
    profile_scope!("prepare_image");

    let decoded =
        image::load_from_memory(bytes).map_err(|e| BoardError::Decode(e.to_string()))?;
    let (source_w, source_h) = decoded.dimensions();
    if source_w == 0 || source_h == 0 {
        return Err(BoardError::Decode("image has no pixels".to_string()));
    }

    let (jpeg, width, height) =
        compress_image(&decoded, settings.max_compressed_width, settings.jpeg_quality)?;
    debug!(
        source = format!("{}x{}", source_w, source_h),
        stored = format!("{}x{}", width, height),
        bytes_in = bytes.len(),
        bytes_out = jpeg.len(),
        "Image compressed"
    );

    Ok(PreparedImage {
        data_uri: data_uri(COMPRESSED_MIME, &jpeg),
        pixel_size: (width, height),
        display_size: display_size(width as f64, height as f64, settings.max_display_size),
    })
}

/// Downscale to `max_width` (aspect preserved) if wider, then re-encode as JPEG.
///
/// Returns the encoded bytes and the stored pixel size.
pub fn compress_image(
    image: &DynamicImage,
    max_width: u32,
    quality: u8,
) -> BoardResult<(Vec<u8>, u32, u32)> {
    let (width, height) = image.dimensions();

    let resized;
    let source = if width > max_width {
        let scaled_height = ((max_width as f64 / width as f64) * height as f64)
            .round()
            .max(1.0) as u32;
        resized = image.resize_exact(max_width, scaled_height, FilterType::Triangle);
        &resized
    } else {
        image
    };

    // JPEG has no alpha channel
    let rgb = DynamicImage::ImageRgb8(source.to_rgb8());
    let mut out = Vec::new();
    let encoder = JpegEncoder::new_with_quality(&mut out, quality.clamp(1, 100));
    rgb.write_with_encoder(encoder)?;

    Ok((out, rgb.width(), rgb.height()))
}

/// Fit `(width, height)` into a `max` x `max` box, clamping width first, then height.
pub fn display_size(width: f64, height: f64, max: f64) -> (f64, f64) {
    let (mut w, mut h) = (width, height);
    if w > max {
        h = (max / w) * h;
        w = max;
    }
    if h > max {
        w = (max / h) * w;
        h = max;
    }
    (w, h)
}

/// Wrap encoded bytes in a base64 `data:` URI.
pub fn data_uri(mime: &str, bytes: &[u8]) -> String {
    format!("data:{};base64,{}", mime, STANDARD.encode(bytes))
}
