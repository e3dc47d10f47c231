use crate::resize::dimensions::ImageDimensions;
use crate::resize::error::ResizeError;
use crate::resize::params::{OutputFormat, Quality};
use image::codecs::jpeg::JpegEncoder;
use image::codecs::webp::WebPEncoder;
use image::imageops::FilterType;
use image::{DynamicImage, ImageFormat, ImageReader};
use std::io::Cursor;

/// Capability interface over an image library: decode compressed bytes into
/// a pixel grid, resample the grid to given dimensions, encode the grid back
/// into compressed bytes.
pub trait ImageCodec {
    fn decode(&self, bytes: &[u8]) -> Result<DynamicImage, ResizeError>;

    fn resample(&self, image: &DynamicImage, dimensions: ImageDimensions) -> DynamicImage;

    fn encode(
        &self,
        image: &DynamicImage,
        format: OutputFormat,
        quality: Quality,
    ) -> Result<Vec<u8>, ResizeError>;
}

/// Codec backed by the `image` crate.
pub struct ImageRsCodec;

impl ImageCodec for ImageRsCodec {
    fn decode(&self, bytes: &[u8]) -> Result<DynamicImage, ResizeError> {
        ImageReader::new(Cursor::new(bytes))
            .with_guessed_format()
            .map_err(|err| ResizeError::Decode(err.to_string()))?
            .decode()
            .map_err(|err| ResizeError::Decode(err.to_string()))
    }

    fn resample(&self, image: &DynamicImage, dimensions: ImageDimensions) -> DynamicImage {
        image.resize_exact(dimensions.width, dimensions.height, FilterType::Lanczos3)
    }

    fn encode(
        &self,
        image: &DynamicImage,
        format: OutputFormat,
        quality: Quality,
    ) -> Result<Vec<u8>, ResizeError> {
        // For a rough estimate, assume 4 bytes per pixel (RGBA).
        let estimated_size = (image.width() as usize) * (image.height() as usize) * 4;
        let mut buffer = Cursor::new(Vec::with_capacity(estimated_size));

        match format {
            OutputFormat::Jpeg => {
                let encoder = JpegEncoder::new_with_quality(&mut buffer, quality.value());
                image
                    .to_rgb8()
                    .write_with_encoder(encoder)
                    .map_err(|err| ResizeError::Encode(err.to_string()))?;
            }
            OutputFormat::Png => {
                image
                    .write_to(&mut buffer, ImageFormat::Png)
                    .map_err(|err| ResizeError::Encode(err.to_string()))?;
            }
            OutputFormat::WebP => {
                // The image crate only ships a lossless WebP encoder, so the
                // quality setting is ignored for this format.
                let encoder = WebPEncoder::new_lossless(&mut buffer);
                image
                    .to_rgba8()
                    .write_with_encoder(encoder)
                    .map_err(|err| ResizeError::Encode(err.to_string()))?;
            }
        }

        Ok(buffer.into_inner())
    }
}
