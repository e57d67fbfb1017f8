//! Image adapter: one input image becomes one full-size page.
//!
//! Pixel dimensions are converted to points at 96 DPI, the historical
//! default for scanned inputs, so a 960x960 px image yields a 720x720 pt
//! page. JPEG data that is already 8-bit gray or RGB is embedded verbatim
//! under a `DCTDecode` filter; everything else is decoded to RGB8 and
//! embedded raw (the writer's document-wide compression picks it up).

use crate::error::{DocFuseError, Result};
use crate::merge::DocumentBuilder;
use image::{ColorType, GenericImageView, ImageFormat};
use lopdf::{Object, Stream, dictionary};
use std::path::Path;
use tokio::task;

/// Resolution assumed when converting pixels to points.
const DEFAULT_DPI: f64 = 96.0;

/// Decode the image at `path` and append it to the builder as one page.
pub async fn add_image(builder: &mut DocumentBuilder, path: &Path) -> Result<()> {
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|err| DocFuseError::from_read_error(path, err))?;

    let owned_path = path.to_path_buf();
    let decoded = task::spawn_blocking(move || decode(&bytes))
        .await
        .map_err(|err| DocFuseError::other(format!("image decode task failed: {err}")))?
        .map_err(|reason| DocFuseError::failed_to_read_image(owned_path, reason))?;

    builder.add_image_page(decoded.stream, decoded.width_pt, decoded.height_pt)
}

struct DecodedImage {
    stream: Stream,
    width_pt: f64,
    height_pt: f64,
}

fn decode(bytes: &[u8]) -> std::result::Result<DecodedImage, String> {
    let format = image::guess_format(bytes).map_err(|err| err.to_string())?;
    let decoded = image::load_from_memory_with_format(bytes, format)
        .map_err(|err| err.to_string())?;

    let (width, height) = decoded.dimensions();

    let stream = match (format, decoded.color()) {
        (ImageFormat::Jpeg, ColorType::L8) => jpeg_stream(bytes, width, height, "DeviceGray"),
        (ImageFormat::Jpeg, ColorType::Rgb8) => jpeg_stream(bytes, width, height, "DeviceRGB"),
        _ => rgb_stream(&decoded.to_rgb8()),
    };

    Ok(DecodedImage {
        stream,
        width_pt: f64::from(width) * 72.0 / DEFAULT_DPI,
        height_pt: f64::from(height) * 72.0 / DEFAULT_DPI,
    })
}

/// Embed original JPEG bytes; viewers decode them via DCTDecode.
fn jpeg_stream(bytes: &[u8], width: u32, height: u32, color_space: &str) -> Stream {
    let dict = dictionary! {
        "Type" => "XObject",
        "Subtype" => "Image",
        "Width" => i64::from(width),
        "Height" => i64::from(height),
        "ColorSpace" => Object::Name(color_space.as_bytes().to_vec()),
        "BitsPerComponent" => 8_i64,
        "Filter" => "DCTDecode",
    };
    let mut stream = Stream::new(dict, bytes.to_vec());
    // Already DCT-compressed; keep document-wide compression away from it.
    stream.allows_compression = false;
    stream
}

/// Embed raw RGB8 samples; alpha, palettes and exotic formats all funnel
/// through `to_rgb8` first.
fn rgb_stream(image: &image::RgbImage) -> Stream {
    let dict = dictionary! {
        "Type" => "XObject",
        "Subtype" => "Image",
        "Width" => i64::from(image.width()),
        "Height" => i64::from(image.height()),
        "ColorSpace" => "DeviceRGB",
        "BitsPerComponent" => 8_i64,
    };
    Stream::new(dict, image.as_raw().clone())
}
