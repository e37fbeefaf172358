//! Output formats and the rendered artifact handed back to the caller.

use std::fmt;

use crate::render::defaults::{PAGE, RASTER, SurfaceProfile};

/// The two output targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutputFormat {
    /// Single-page A4 PDF
    Pdf,
    /// 2480 x 3508 PNG
    Png,
}

impl OutputFormat {
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Pdf => "pdf",
            OutputFormat::Png => "png",
        }
    }

    pub fn media_type(self) -> &'static str {
        match self {
            OutputFormat::Pdf => "application/pdf",
            OutputFormat::Png => "image/png",
        }
    }

    /// Layout and decoration constants for this target
    pub fn profile(self) -> &'static SurfaceProfile {
        match self {
            OutputFormat::Pdf => &PAGE,
            OutputFormat::Png => &RASTER,
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Pdf => write!(f, "PDF"),
            OutputFormat::Png => write!(f, "PNG"),
        }
    }
}

/// Encoded calendar, ready to save or download
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderArtifact {
    pub filename: String,
    pub format: OutputFormat,
    pub bytes: Vec<u8>,
}

impl RenderArtifact {
    pub fn media_type(&self) -> &'static str {
        self.format.media_type()
    }
}
