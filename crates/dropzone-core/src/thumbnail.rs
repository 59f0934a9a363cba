//! Thumbnail preparation.
//!
//! The card shows the original file bytes (wrapped in a Blob URL by the
//! browser layer) and lets the browser decode them off the page's event
//! loop. This module only reads the image header with the `image` crate
//! to size the preview inside a square bounding box. PDFs get a document
//! preview (an icon) instead of a rendered page.
//!
//! A header that cannot be read does not reject the file: acceptance is
//! decided by the extension alone, so such files still get an image
//! preview, just without a precomputed size.

use std::io::Cursor;

use crate::extension::FileKind;
use crate::types::Dimensions;

/// Errors that prevent a preview from being produced.
#[derive(Debug, thiserror::Error)]
pub enum ThumbnailError {
    /// The file contained no bytes.
    #[error("file is empty")]
    EmptyInput,

    /// The browser could not read the file.
    #[error("failed to read file: {0}")]
    Read(String),

    /// The image header could not be parsed.
    #[error("failed to decode image: {0}")]
    ImageDecode(#[from] image::ImageError),
}

/// A prepared preview, independent of how it is displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Thumbnail {
    /// A raster image shown from its original bytes.
    Raster {
        /// MIME type of the Blob holding the bytes.
        mime: &'static str,
        /// Display size within the bounding box, when the header could
        /// be read.
        display: Option<Dimensions>,
    },
    /// A non-raster document, shown as an icon.
    Document,
}

/// Prepare a preview for `bytes` of the given kind.
///
/// Raster images larger than `max_edge` on either side get a display
/// size that fits (aspect ratio preserved); smaller images keep their
/// size. Only the header is parsed, never the pixel data.
///
/// # Errors
///
/// Returns [`ThumbnailError::EmptyInput`] if `bytes` is empty.
pub fn render(bytes: &[u8], kind: FileKind, max_edge: u32) -> Result<Thumbnail, ThumbnailError> {
    if bytes.is_empty() {
        return Err(ThumbnailError::EmptyInput);
    }

    if !kind.is_raster() {
        return Ok(Thumbnail::Document);
    }

    let display = dimensions(bytes, kind)
        .ok()
        .map(|size| fit(size, max_edge));
    Ok(Thumbnail::Raster {
        mime: kind.mime_type(),
        display,
    })
}

/// Read the pixel size from an image header.
///
/// The format is sniffed from the bytes, falling back to the one the
/// extension names, so a PNG saved as `.jpg` still reports its size.
///
/// # Errors
///
/// Returns [`ThumbnailError::ImageDecode`] if no supported header is
/// found.
pub fn dimensions(bytes: &[u8], kind: FileKind) -> Result<Dimensions, ThumbnailError> {
    let mut reader = image::ImageReader::new(Cursor::new(bytes));
    if let Some(format) = kind.image_format() {
        reader.set_format(format);
    }
    let reader = reader
        .with_guessed_format()
        .map_err(image::ImageError::from)?;
    let (width, height) = reader.into_dimensions()?;
    Ok(Dimensions { width, height })
}

/// Scale `size` down so both sides fit in `max_edge`. Never upscales.
#[must_use]
pub fn fit(size: Dimensions, max_edge: u32) -> Dimensions {
    let max_edge = max_edge.max(1);
    if size.width <= max_edge && size.height <= max_edge {
        return size;
    }

    let (long, short) = if size.width >= size.height {
        (size.width, size.height)
    } else {
        (size.height, size.width)
    };
    let scaled = (u64::from(short) * u64::from(max_edge) + u64::from(long) / 2) / u64::from(long);
    let scaled = u32::try_from(scaled).unwrap_or(max_edge).clamp(1, max_edge);

    if size.width >= size.height {
        Dimensions {
            width: max_edge,
            height: scaled,
        }
    } else {
        Dimensions {
            width: scaled,
            height: max_edge,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic, clippy::cast_possible_truncation)]
mod tests {
    use super::*;

    /// Encode a gradient test image. JPEG has no alpha channel, so it
    /// gets RGB; everything else gets RGBA.
    fn encode(width: u32, height: u32, format: image::ImageFormat) -> Vec<u8> {
        let rgba = image::RgbaImage::from_fn(width, height, |x, y| {
            image::Rgba([(x % 256) as u8, (y % 256) as u8, 128, 255])
        });
        let img = if format == image::ImageFormat::Jpeg {
            image::DynamicImage::ImageRgb8(image::DynamicImage::ImageRgba8(rgba).to_rgb8())
        } else {
            image::DynamicImage::ImageRgba8(rgba)
        };
        let mut buf = Vec::new();
        img.write_to(&mut Cursor::new(&mut buf), format).unwrap();
        buf
    }

    fn display_of(thumbnail: Thumbnail) -> Option<Dimensions> {
        match thumbnail {
            Thumbnail::Raster { display, .. } => display,
            Thumbnail::Document => panic!("expected raster thumbnail"),
        }
    }

    const fn dims(width: u32, height: u32) -> Dimensions {
        Dimensions { width, height }
    }

    #[test]
    fn empty_input_is_an_error() {
        assert!(matches!(
            render(&[], FileKind::Png, 160),
            Err(ThumbnailError::EmptyInput)
        ));
        assert!(matches!(
            render(&[], FileKind::Pdf, 160),
            Err(ThumbnailError::EmptyInput)
        ));
    }

    #[test]
    fn unreadable_header_still_gets_an_image_preview() {
        let thumb = render(&[0xFF, 0x00, 0x12], FileKind::Jpeg, 160).unwrap();
        assert_eq!(
            thumb,
            Thumbnail::Raster {
                mime: "image/jpeg",
                display: None
            }
        );
    }

    #[test]
    fn content_that_disagrees_with_extension_is_still_previewed() {
        // PNG bytes under a .jpg name: the extension decides the MIME
        // type, the header still gives the size.
        let png = encode(400, 200, image::ImageFormat::Png);
        let thumb = render(&png, FileKind::Jpeg, 160).unwrap();
        assert_eq!(
            thumb,
            Thumbnail::Raster {
                mime: "image/jpeg",
                display: Some(dims(160, 80))
            }
        );
    }

    #[test]
    fn only_the_header_is_read() {
        // Pixel data cut off halfway: the size is still known.
        let png = encode(400, 200, image::ImageFormat::Png);
        let header_and_some = &png[..png.len() / 2];
        assert_eq!(
            dimensions(header_and_some, FileKind::Png).unwrap(),
            dims(400, 200)
        );
    }

    #[test]
    fn large_image_is_fitted_preserving_aspect() {
        let png = encode(400, 200, image::ImageFormat::Png);
        assert_eq!(
            display_of(render(&png, FileKind::Png, 160).unwrap()),
            Some(dims(160, 80))
        );
    }

    #[test]
    fn tall_image_fits_the_long_edge() {
        let jpeg = encode(100, 300, image::ImageFormat::Jpeg);
        assert_eq!(
            display_of(render(&jpeg, FileKind::Jpeg, 150).unwrap()),
            Some(dims(50, 150))
        );
    }

    #[test]
    fn small_image_is_not_upscaled() {
        let gif = encode(20, 10, image::ImageFormat::Gif);
        assert_eq!(
            display_of(render(&gif, FileKind::Gif, 160).unwrap()),
            Some(dims(20, 10))
        );
    }

    #[test]
    fn fit_keeps_thin_images_visible() {
        assert_eq!(fit(dims(10_000, 1), 160), dims(160, 1));
        assert_eq!(fit(dims(1, 10_000), 160), dims(1, 160));
        assert_eq!(fit(dims(500, 500), 160), dims(160, 160));
    }

    #[test]
    fn raster_mime_follows_the_extension() {
        let gif = encode(4, 4, image::ImageFormat::Gif);
        let Thumbnail::Raster { mime, .. } = render(&gif, FileKind::Gif, 160).unwrap() else {
            panic!("expected raster thumbnail");
        };
        assert_eq!(mime, "image/gif");
    }

    #[test]
    fn pdf_becomes_document_preview() {
        let thumb = render(b"%PDF-1.7\n", FileKind::Pdf, 160).unwrap();
        assert_eq!(thumb, Thumbnail::Document);
    }
}
