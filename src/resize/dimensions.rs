use crate::resize::error::ResizeError;

/// Pixel dimensions of an image. Both axes are at least 1 for any value
/// produced by [`resolve`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageDimensions {
    pub width: u32,
    pub height: u32,
}

/// Resolve the final output dimensions for a resize.
///
/// "Fit inside" policy: when both targets are given and they disagree with
/// the source aspect ratio, the width target wins unless the height it
/// implies would overflow the height target, in which case the height target
/// wins. The `scale` multiplier applies to the fitted dimensions, and the
/// result is shrunk further if either axis would exceed `max_dimension`.
/// Aspect ratio is preserved throughout; rounding happens once, at the end.
pub fn resolve(
    source: ImageDimensions,
    target_width: Option<u32>,
    target_height: Option<u32>,
    scale: f64,
    max_dimension: u32,
) -> Result<ImageDimensions, ResizeError> {
    if source.width == 0 || source.height == 0 {
        return Err(ResizeError::InvalidDimensions(format!(
            "source is {}x{}, both sides must be positive",
            source.width, source.height,
        )));
    }
    if target_width == Some(0) || target_height == Some(0) {
        return Err(ResizeError::InvalidDimensions(String::from(
            "target dimensions must be positive when given",
        )));
    }
    if !(scale > 0.0) || !scale.is_finite() {
        return Err(ResizeError::InvalidDimensions(format!(
            "scale must be a positive finite number, got {scale}",
        )));
    }

    let aspect_ratio = source.width as f64 / source.height as f64;

    let (mut width, mut height) = match (target_width, target_height) {
        (None, None) => (source.width as f64, source.height as f64),
        (Some(w), None) => (w as f64, w as f64 / aspect_ratio),
        (None, Some(h)) => (h as f64 * aspect_ratio, h as f64),
        (Some(w), Some(h)) => {
            let (w, h) = (w as f64, h as f64);
            if w / aspect_ratio <= h {
                (w, w / aspect_ratio)
            } else {
                (h * aspect_ratio, h)
            }
        }
    };

    width *= scale;
    height *= scale;

    let larger = width.max(height);
    if larger > max_dimension as f64 {
        let shrink = max_dimension as f64 / larger;
        width *= shrink;
        height *= shrink;
    }

    Ok(ImageDimensions {
        width: (width.round() as u32).max(1),
        height: (height.round() as u32).max(1),
    })
}
