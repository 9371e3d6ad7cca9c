//! Text measurement backends for hit-testing
//!
//! [`FontMetrics`] measures with a real font file and is what a pixel
//! front-end should use, configured with the same font and size it draws
//! rows with. [`CellMetrics`] is for character-cell displays.

use fontdue::{Font, FontSettings};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use super::hit_test::TextMeasure;

#[derive(Debug, Error)]
pub enum MetricsError {
    #[error("Failed to read font {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to load font {}: {reason}", path.display())]
    Parse { path: PathBuf, reason: &'static str },

    #[error("Font size must be positive, got {0}")]
    Size(f32),
}

/// Advance widths of a scalable font at a fixed pixel size
pub struct FontMetrics {
    font: Font,
    px: f32,
}

impl FontMetrics {
    /// Load a TTF/OTF file for measuring at `px` pixels
    pub fn from_file<P: AsRef<Path>>(path: P, px: f32) -> Result<Self, MetricsError> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|source| MetricsError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_bytes(&bytes, px).map_err(|e| match e {
            MetricsError::Parse { reason, .. } => MetricsError::Parse {
                path: path.to_path_buf(),
                reason,
            },
            other => other,
        })
    }

    pub fn from_bytes(bytes: &[u8], px: f32) -> Result<Self, MetricsError> {
        if px.is_nan() || px <= 0.0 {
            return Err(MetricsError::Size(px));
        }
        let font = Font::from_bytes(bytes, FontSettings::default()).map_err(|reason| {
            MetricsError::Parse {
                path: PathBuf::new(),
                reason,
            }
        })?;
        tracing::debug!("Loaded font {:?} at {}px", font.name(), px);
        Ok(Self { font, px })
    }
}

impl TextMeasure for FontMetrics {
    /// Sum of advance widths plus pair kerning
    fn measure(&self, text: &str) -> f32 {
        let mut width = 0.0;
        let mut prev: Option<char> = None;
        for ch in text.chars() {
            if let Some(left) = prev {
                width += self.font.horizontal_kern(left, ch, self.px).unwrap_or(0.0);
            }
            width += self.font.metrics(ch, self.px).advance_width;
            prev = Some(ch);
        }
        width
    }
}

/// Every character occupies one cell of the same width
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellMetrics {
    pub cell_width: f32,
}

impl CellMetrics {
    pub fn new(cell_width: f32) -> Self {
        Self { cell_width }
    }
}

impl TextMeasure for CellMetrics {
    fn measure(&self, text: &str) -> f32 {
        text.chars().count() as f32 * self.cell_width
    }
}
