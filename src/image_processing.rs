use image::{DynamicImage, ImageFormat, Rgba, RgbaImage, imageops::FilterType};

use crate::error::GenerationError;

pub const DEFAULT_CANVAS_SIZE: u32 = 1024;
/// Square sizes the edit endpoint accepts.
pub const SUPPORTED_CANVAS_SIZES: [u32; 3] = [256, 512, 1024];

const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);
const OPAQUE_WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// Decodes `bytes`, fits the picture inside a `size`x`size` transparent canvas
/// and returns it PNG encoded.
pub fn prepare_canvas(bytes: &[u8], size: u32) -> Result<Vec<u8>, GenerationError> {
    ensure_canvas_size(size)?;
    let source = decode_image(bytes)?;
    let canvas = fit_to_canvas(&source, size);
    encode_png(canvas)
}

/// Builds the edit mask for a `size`x`size` canvas: an opaque frame of
/// `size / 20` pixels that the editing service keeps, around a transparent
/// interior that it may repaint.
pub fn create_mask(size: u32) -> Result<Vec<u8>, GenerationError> {
    ensure_canvas_size(size)?;
    encode_png(mask_pixels(size))
}

fn ensure_canvas_size(size: u32) -> Result<(), GenerationError> {
    if size == 0 {
        return Err(GenerationError::Internal("canvas size must be positive".to_string()));
    }
    Ok(())
}

pub fn decode_image(bytes: &[u8]) -> Result<RgbaImage, GenerationError> {
    let mime_type = detect_mime_type(bytes)
        .ok_or_else(|| GenerationError::ImageDecode("unrecognized image format".to_string()))?;
    let format = mime_to_format(mime_type)?;
    let image = image::load_from_memory_with_format(bytes, format)
        .map_err(|err| GenerationError::ImageDecode(format!("decode {mime_type} failed: {err}")))?;
    Ok(image.to_rgba8())
}

/// Scaled size of a `width`x`height` image whose longer side becomes `size`.
pub fn scaled_dimensions(width: u32, height: u32, size: u32) -> (u32, u32) {
    let aspect = width as f64 / height as f64;
    let (new_width, new_height) = if aspect > 1.0 {
        (size as f64, (size as f64 / aspect).round())
    } else {
        ((size as f64 * aspect).round(), size as f64)
    };
    (
        (new_width as u32).clamp(1, size.max(1)),
        (new_height as u32).clamp(1, size.max(1)),
    )
}

fn fit_to_canvas(source: &RgbaImage, size: u32) -> RgbaImage {
    let (width, height) = source.dimensions();
    let (new_width, new_height) = scaled_dimensions(width, height, size);
    let resized = image::imageops::resize(source, new_width, new_height, FilterType::Lanczos3);

    let mut canvas = RgbaImage::from_pixel(size, size, TRANSPARENT);
    let offset_x = (size - new_width) / 2;
    let offset_y = (size - new_height) / 2;
    image::imageops::replace(&mut canvas, &resized, offset_x as i64, offset_y as i64);
    canvas
}

fn mask_pixels(size: u32) -> RgbaImage {
    let border = size / 20;
    RgbaImage::from_fn(size, size, |x, y| {
        let in_frame = x < border || y < border || x >= size - border || y >= size - border;
        if in_frame { OPAQUE_WHITE } else { TRANSPARENT }
    })
}

fn encode_png(image: RgbaImage) -> Result<Vec<u8>, GenerationError> {
    let mut output = Vec::new();
    DynamicImage::ImageRgba8(image)
        .write_to(&mut std::io::Cursor::new(&mut output), ImageFormat::Png)
        .map_err(|err| GenerationError::Internal(format!("encode png failed: {err}")))?;
    Ok(output)
}

pub fn detect_mime_type(bytes: &[u8]) -> Option<&'static str> {
    if bytes.starts_with(&[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A]) {
        return Some("image/png");
    }
    if bytes.starts_with(&[0xFF, 0xD8, 0xFF]) {
        return Some("image/jpeg");
    }
    if bytes.starts_with(b"GIF87a") || bytes.starts_with(b"GIF89a") {
        return Some("image/gif");
    }
    if bytes.len() >= 12 && &bytes[0..4] == b"RIFF" && &bytes[8..12] == b"WEBP" {
        return Some("image/webp");
    }
    if bytes.starts_with(b"BM") {
        return Some("image/bmp");
    }
    None
}

pub fn mime_to_format(mime_type: &str) -> Result<ImageFormat, GenerationError> {
    match mime_type {
        "image/png" => Ok(ImageFormat::Png),
        "image/jpeg" | "image/jpg" => Ok(ImageFormat::Jpeg),
        "image/gif" => Ok(ImageFormat::Gif),
        "image/webp" => Ok(ImageFormat::WebP),
        "image/bmp" => Ok(ImageFormat::Bmp),
        _ => Err(GenerationError::ImageDecode(format!(
            "unsupported mime type: {mime_type}"
        ))),
    }
}
