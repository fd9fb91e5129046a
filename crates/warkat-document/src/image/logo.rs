// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Letterhead logo: decode once, flatten onto white, downscale, and share.

use std::path::Path;
use std::sync::Arc;

use image::{DynamicImage, Rgba, RgbaImage};
use tracing::{debug, info, instrument, warn};
use warkat_core::error::WarkatError;
use warkat_core::{RasterImage, Result};

/// Longest edge kept after downscaling. The logo prints about 20 mm tall, so
/// this is well above print resolution.
pub const MAX_LOGO_EDGE_PX: u32 = 600;

/// Decode an encoded image (PNG, JPEG, ...) into RGB8 pixels.
///
/// Transparent areas become white. Images larger than
/// [`MAX_LOGO_EDGE_PX`] are downscaled with Lanczos3.
#[instrument(skip(data), fields(data_len = data.len()))]
pub fn decode_logo(data: &[u8]) -> Result<RasterImage> {
    let img = image::load_from_memory(data)
        .map_err(|err| WarkatError::Image(format!("failed to decode logo: {}", err)))?;
    debug!(width = img.width(), height = img.height(), "Logo decoded");
    Ok(to_raster(img))
}

/// Load the letterhead logo for sharing across renders.
///
/// Failure is not fatal: it is logged and the letter renders without a logo.
#[instrument(skip_all, fields(path = %path.as_ref().display()))]
pub fn load_logo(path: impl AsRef<Path>) -> Option<Arc<RasterImage>> {
    let path = path.as_ref();
    let decoded = std::fs::read(path)
        .map_err(WarkatError::from)
        .and_then(|bytes| decode_logo(&bytes));
    match decoded {
        Ok(logo) => {
            info!(width = logo.width, height = logo.height, "Logo loaded");
            Some(Arc::new(logo))
        }
        Err(err) => {
            warn!(%err, "Logo unavailable, rendering without it");
            None
        }
    }
}

fn to_raster(img: DynamicImage) -> RasterImage {
    let img = if img.width().max(img.height()) > MAX_LOGO_EDGE_PX {
        let resized = img.resize(
            MAX_LOGO_EDGE_PX,
            MAX_LOGO_EDGE_PX,
            image::imageops::FilterType::Lanczos3,
        );
        debug!(width = resized.width(), height = resized.height(), "Logo downscaled");
        resized
    } else {
        img
    };

    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();
    RasterImage {
        width,
        height,
        rgb: flatten_on_white(&rgba),
    }
}

fn flatten_on_white(rgba: &RgbaImage) -> Vec<u8> {
    let mut rgb = Vec::with_capacity(rgba.len() / 4 * 3);
    for Rgba([r, g, b, a]) in rgba.pixels().copied() {
        let alpha = u16::from(a);
        for channel in [r, g, b] {
            let blended = (u16::from(channel) * alpha + 255 * (255 - alpha)) / 255;
            rgb.push(blended as u8);
        }
    }
    rgb
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use image::ImageFormat;

    use super::*;

    fn png(img: RgbaImage) -> Vec<u8> {
        let mut out = Cursor::new(Vec::new());
        DynamicImage::ImageRgba8(img)
            .write_to(&mut out, ImageFormat::Png)
            .unwrap();
        out.into_inner()
    }

    #[test]
    fn transparent_pixels_become_white() {
        let mut img = RgbaImage::from_pixel(2, 1, Rgba([0, 0, 0, 0]));
        img.put_pixel(1, 0, Rgba([10, 20, 30, 255]));
        let logo = decode_logo(&png(img)).unwrap();
        assert_eq!((logo.width, logo.height), (2, 1));
        assert_eq!(logo.rgb, vec![255, 255, 255, 10, 20, 30]);
    }

    #[test]
    fn large_logos_are_downscaled() {
        let img = RgbaImage::from_pixel(1200, 300, Rgba([0, 0, 128, 255]));
        let logo = decode_logo(&png(img)).unwrap();
        assert_eq!(logo.width, MAX_LOGO_EDGE_PX);
        assert_eq!(logo.height, 150);
        assert_eq!(logo.rgb.len(), (logo.width * logo.height * 3) as usize);
    }

    #[test]
    fn undecodable_bytes_are_an_image_error() {
        assert!(matches!(
            decode_logo(b"GIF? no"),
            Err(WarkatError::Image(_))
        ));
    }

    #[test]
    fn missing_logo_degrades_to_none() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_logo(dir.path().join("logo.png")).is_none());

        let path = dir.path().join("logo.png");
        std::fs::write(&path, png(RgbaImage::from_pixel(8, 8, Rgba([1, 2, 3, 255])))).unwrap();
        let logo = load_logo(&path).unwrap();
        assert_eq!(logo.aspect(), 1.0);
    }
}
