use crate::resize::error::ResizeError;

pub const DEFAULT_QUALITY: u8 = 90;
pub const DEFAULT_MAX_DIMENSION: u32 = 2000;

/// Output encodings the codec can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Jpeg,
    Png,
    WebP,
}

impl OutputFormat {
    pub fn parse(value: &str) -> Result<Self, ResizeError> {
        match value.to_lowercase().as_str() {
            "jpeg" | "jpg" => Ok(Self::Jpeg),
            "png" => Ok(Self::Png),
            "webp" => Ok(Self::WebP),
            other => Err(ResizeError::UnsupportedFormat(other.to_string())),
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            Self::Jpeg => "image/jpeg",
            Self::Png => "image/png",
            Self::WebP => "image/webp",
        }
    }
}

/// Lossy encoding quality (1-100). Out-of-range values are clamped on
/// construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quality(u8);

impl Quality {
    pub fn new(value: u8) -> Self {
        Self(value.clamp(1, 100))
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl Default for Quality {
    fn default() -> Self {
        Self(DEFAULT_QUALITY)
    }
}

/// Everything needed to turn one source image into one output image, minus
/// the source bytes themselves.
#[derive(Debug, Clone, Copy)]
pub struct ResizeParams {
    pub target_width: Option<u32>,
    pub target_height: Option<u32>,
    pub scale: f64,
    pub max_dimension: u32,
    pub format: OutputFormat,
    pub quality: Quality,
}
