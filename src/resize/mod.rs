use crate::resize::codec::ImageCodec;
use crate::resize::dimensions::ImageDimensions;
use crate::resize::error::ResizeError;
use crate::resize::params::ResizeParams;

pub mod codec;
pub mod dimensions;
pub mod error;
pub mod handlers;
pub mod params;
pub mod requests;
pub mod responses;

/// Output of a successful resize: the encoded bytes and the MIME type they
/// should be served with.
#[derive(Debug)]
pub struct ResizeResult {
    pub bytes: Vec<u8>,
    pub mime_type: String,
}

/// Run one resize from start to finish: decode, resolve the output
/// dimensions, resample, re-encode.
///
/// Single-shot by contract. Any failure aborts the request with no partial
/// output, and nothing is retained between calls.
pub fn process<C: ImageCodec>(
    codec: &C,
    source_bytes: &[u8],
    params: &ResizeParams,
) -> Result<ResizeResult, ResizeError> {
    let image = codec.decode(source_bytes)?;
    let source = ImageDimensions {
        width: image.width(),
        height: image.height(),
    };
    let output = dimensions::resolve(
        source,
        params.target_width,
        params.target_height,
        params.scale,
        params.max_dimension,
    )?;

    let resized = if output == source {
        image
    } else {
        codec.resample(&image, output)
    };
    let bytes = codec.encode(&resized, params.format, params.quality)?;

    Ok(ResizeResult {
        bytes,
        mime_type: params.format.mime_type().to_string(),
    })
}
