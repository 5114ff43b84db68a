// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Logo normalizer — load a raster logo, flatten any transparency onto a white
// background and re-encode it as an in-memory PNG. Operates on in-memory
// images using the `image` crate; no intermediate file touches the disk.

use image::{DynamicImage, ImageFormat, RgbImage, Rgba, RgbaImage, imageops};
use letterhead_core::error::{LetterheadError, Result};
use tracing::{debug, info, instrument};

/// Opaque white, the background transparent logo pixels end up on.
const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// An alpha-free logo encoded as PNG, plus the same pixels unencoded.
///
/// The PNG is the portable form of the normalized logo; the PDF embeds raw
/// RGB samples, so those are kept too instead of decoding the PNG again.
#[derive(Debug, Clone)]
pub struct NormalizedImage {
    png: Vec<u8>,
    rgb: RgbImage,
}

impl NormalizedImage {
    /// Natural width in pixels.
    pub fn width(&self) -> u32 {
        self.rgb.width()
    }

    /// Natural height in pixels.
    pub fn height(&self) -> u32 {
        self.rgb.height()
    }

    /// The encoded PNG bytes.
    pub fn as_png(&self) -> &[u8] {
        &self.png
    }

    /// The flattened 8-bit RGB pixels.
    pub fn as_rgb(&self) -> &RgbImage {
        &self.rgb
    }
}

/// A logo in the middle of normalization.
///
/// Methods consume `self` and return the transformed logo so the steps chain:
///
/// ```ignore
/// let png = LogoNormalizer::open("logo.png")?
///     .flatten_onto_white()
///     .to_png_bytes()?;
/// ```
pub struct LogoNormalizer {
    image: DynamicImage,
}

impl LogoNormalizer {
    // -- Construction ---------------------------------------------------------

    /// Load a logo from a file path. The format is guessed from the content.
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn open(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let img = image::open(path.as_ref()).map_err(|err| {
            LetterheadError::ImageError(format!(
                "failed to open {}: {}",
                path.as_ref().display(),
                err
            ))
        })?;
        info!(
            width = img.width(),
            height = img.height(),
            color = ?img.color(),
            "Logo loaded"
        );
        Ok(Self { image: img })
    }

    /// Decode a logo from encoded bytes (PNG, JPEG, etc.).
    #[instrument(skip(data), fields(data_len = data.len()))]
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        let img = image::load_from_memory(data).map_err(|err| {
            LetterheadError::ImageError(format!("failed to decode logo: {}", err))
        })?;
        debug!(width = img.width(), height = img.height(), "Logo decoded from bytes");
        Ok(Self { image: img })
    }

    /// Wrap an already-decoded `DynamicImage`.
    pub fn from_dynamic(image: DynamicImage) -> Self {
        Self { image }
    }

    // -- Accessors ------------------------------------------------------------

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Whether the current image carries an alpha channel.
    pub fn has_alpha(&self) -> bool {
        self.image.color().has_alpha()
    }

    /// Borrow the underlying `DynamicImage`.
    pub fn as_dynamic(&self) -> &DynamicImage {
        &self.image
    }

    // -- Transformations ------------------------------------------------------

    /// Force the image into 8-bit RGB.
    ///
    /// With an alpha channel the image is composited over an opaque white
    /// canvas of the same size, alpha acting as the blend mask: fully
    /// transparent pixels become white, opaque pixels keep their colour.
    /// Without one it is only converted to RGB.
    #[instrument(skip(self), fields(color = ?self.image.color()))]
    pub fn flatten_onto_white(self) -> Self {
        if !self.has_alpha() {
            return Self {
                image: DynamicImage::ImageRgb8(self.image.to_rgb8()),
            };
        }

        let source = self.image.to_rgba8();
        let mut canvas = RgbaImage::from_pixel(source.width(), source.height(), WHITE);
        imageops::overlay(&mut canvas, &source, 0, 0);
        debug!("Alpha flattened onto white");

        Self {
            image: DynamicImage::ImageRgb8(DynamicImage::ImageRgba8(canvas).to_rgb8()),
        }
    }

    // -- Output ---------------------------------------------------------------

    /// Encode the current image as PNG bytes.
    pub fn to_png_bytes(&self) -> Result<Vec<u8>> {
        let mut buffer = Vec::new();
        let mut cursor = std::io::Cursor::new(&mut buffer);
        self.image
            .write_to(&mut cursor, ImageFormat::Png)
            .map_err(|err| LetterheadError::ImageError(format!("PNG encoding failed: {}", err)))?;
        Ok(buffer)
    }

    /// Flatten and encode, keeping the natural dimensions alongside the bytes.
    pub fn into_normalized(self) -> Result<NormalizedImage> {
        let flat = self.flatten_onto_white();
        let png = flat.to_png_bytes()?;
        debug!(png_len = png.len(), "Logo normalized");
        Ok(NormalizedImage {
            rgb: flat.image.into_rgb8(),
            png,
        })
    }
}

/// Load the logo at `path` and produce its normalized buffer.
pub fn normalize(path: impl AsRef<std::path::Path>) -> Result<NormalizedImage> {
    LogoNormalizer::open(path)?.into_normalized()
}
