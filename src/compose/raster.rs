use std::path::Path;

use image::{ImageReader, RgbaImage, imageops};

use crate::{ImgHeaderError, ImgHeaderResult};

/// Decode the image at `path` and convert it to RGBA8.
///
/// The format is sniffed from the file contents, not taken from the extension.
pub fn load_raster(path: &Path) -> ImgHeaderResult<RgbaImage> {
    let reader = ImageReader::open(path)
        .and_then(|r| r.with_guessed_format())
        .map_err(|e| ImgHeaderError::io(path, e))?;
    let img = reader
        .decode()
        .map_err(|e| ImgHeaderError::decode(path, e))?;
    Ok(img.to_rgba8())
}

/// Stack `header` on top of `target`.
///
/// The result is `target.width()` wide and `header.height() + target.height()` tall.
/// Both blits overwrite (no blending). A header wider than the target is clipped
/// at the right edge; a narrower one leaves the rest of its rows fully transparent.
pub fn compose(header: &RgbaImage, target: &RgbaImage) -> RgbaImage {
    let mut out = RgbaImage::new(target.width(), header.height() + target.height());
    imageops::replace(&mut out, header, 0, 0);
    imageops::replace(&mut out, target, 0, i64::from(header.height()));
    out
}

#[cfg(test)]
#[path = "../../tests/unit/compose/raster.rs"]
mod tests;
