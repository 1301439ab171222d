use std::io::Cursor;

use image::{ImageFormat, Rgba, RgbaImage};
use qrcode::types::QrError;
use qrcode::{Color, EcLevel, QrCode};
use qrview_logging::qr_debug;
use thiserror::Error;

use crate::export::{png_data_url, ExportError};

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("content cannot be encoded as a QR symbol: {0}")]
    Encode(#[from] QrError),
    #[error("{size}px is too small for a symbol of {modules} modules")]
    TooSmall { size: u32, modules: u32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorCorrection {
    Low,
    Medium,
    Quartile,
    #[default]
    High,
}

impl From<ErrorCorrection> for EcLevel {
    fn from(level: ErrorCorrection) -> Self {
        match level {
            ErrorCorrection::Low => EcLevel::L,
            ErrorCorrection::Medium => EcLevel::M,
            ErrorCorrection::Quartile => EcLevel::Q,
            ErrorCorrection::High => EcLevel::H,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderSettings {
    pub foreground: Rgba<u8>,
    pub background: Rgba<u8>,
    pub error_correction: ErrorCorrection,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            foreground: Rgba([0x00, 0x00, 0x00, 0xff]),
            background: Rgba([0xff, 0xff, 0xff, 0xff]),
            error_correction: ErrorCorrection::High,
        }
    }
}

/// Turns content into a square raster of exactly `pixel_size` pixels.
pub trait SymbolRenderer {
    fn render(&self, content: &str, pixel_size: u32) -> Result<RenderedSymbol, RenderError>;
}

#[derive(Debug, Clone, Default)]
pub struct QrSymbolRenderer {
    settings: RenderSettings,
}

impl QrSymbolRenderer {
    pub fn new(settings: RenderSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &RenderSettings {
        &self.settings
    }
}

impl SymbolRenderer for QrSymbolRenderer {
    fn render(&self, content: &str, pixel_size: u32) -> Result<RenderedSymbol, RenderError> {
        let code = QrCode::with_error_correction_level(
            content.as_bytes(),
            self.settings.error_correction.into(),
        )?;
        let modules = code.width() as u32;
        if pixel_size < modules {
            return Err(RenderError::TooSmall {
                size: pixel_size,
                modules,
            });
        }

        // Modules are stretched over the full canvas, no quiet zone, so module
        // edges land on floor(i * size / modules).
        let colors = code.to_colors();
        let module_at =
            |pixel: u32| (u64::from(pixel) * u64::from(modules) / u64::from(pixel_size)) as usize;
        let image = RgbaImage::from_fn(pixel_size, pixel_size, |x, y| {
            match colors[module_at(y) * modules as usize + module_at(x)] {
                Color::Dark => self.settings.foreground,
                Color::Light => self.settings.background,
            }
        });

        qr_debug!(
            "Rendered symbol content_len={} modules={} size={}px",
            content.len(),
            modules,
            pixel_size
        );
        Ok(RenderedSymbol {
            content: content.to_string(),
            image,
        })
    }
}

/// A rendered symbol: the encoded content and its RGBA surface.
#[derive(Debug, Clone)]
pub struct RenderedSymbol {
    content: String,
    image: RgbaImage,
}

impl RenderedSymbol {
    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    /// Row-major RGBA bytes, as a canvas `ImageData` expects them.
    pub fn rgba(&self) -> &[u8] {
        self.image.as_raw()
    }

    pub fn to_png(&self) -> Result<Vec<u8>, ExportError> {
        let mut bytes = Vec::new();
        self.image.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
        Ok(bytes)
    }

    pub fn to_png_data_url(&self) -> Result<String, ExportError> {
        Ok(png_data_url(&self.to_png()?))
    }
}
