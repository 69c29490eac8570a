//! Export of a finished draw to an image through a [`Rasterizer`].
use std::fmt;

use tracing::{info, warn};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

pub const DEFAULT_REGION: &str = "capture-area";
pub const DEFAULT_SCALE: f32 = 2.0;
pub const DEFAULT_BACKGROUND: [u8; 3] = [255, 255, 255];

/// Identifier of the on-screen region to capture.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RegionRef(pub String);

impl RegionRef {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl fmt::Display for RegionRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ExportConfig {
    /// Region to capture; `None` means there is nothing to export.
    pub region: Option<RegionRef>,
    /// Pixel density multiplier.
    pub scale: f32,
    /// sRGB background fill.
    pub background: [u8; 3],
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            region: Some(RegionRef::new(DEFAULT_REGION)),
            scale: DEFAULT_SCALE,
            background: DEFAULT_BACKGROUND,
        }
    }
}

impl ExportConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_region(mut self, region: Option<RegionRef>) -> Self {
        self.region = region;
        self
    }

    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_background(mut self, background: [u8; 3]) -> Self {
        self.background = background;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if !self.scale.is_finite() || self.scale <= 0.0 {
            return Err(Error::InvalidConfig("scale must be finite and > 0".into()));
        }
        Ok(())
    }
}

/// What the rasterizer is asked to draw.
#[derive(Debug, Clone, Copy)]
pub struct ExportRequest<'a> {
    pub region: &'a RegionRef,
    pub scale: f32,
    pub background: [u8; 3],
    /// The finished draw shown in the region.
    pub numbers: &'a [u32],
}

/// Renders a region to encoded image bytes.
pub trait Rasterizer {
    fn rasterize(&mut self, request: &ExportRequest<'_>) -> Result<Vec<u8>>;
}

/// Encoded image ready for download.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportArtifact {
    pub file_name: String,
    pub bytes: Vec<u8>,
    pub scale: f32,
    pub background: [u8; 3],
}

/// Content-derived file name, e.g. `lucky-numbers-3-11-22-29-34-45.png`.
pub fn artifact_name(numbers: &[u32]) -> String {
    let mut name = String::from("lucky-numbers");
    for n in numbers {
        name.push('-');
        name.push_str(&n.to_string());
    }
    name.push_str(".png");
    name
}

/// Exports `numbers` through `rasterizer`.
///
/// A missing region, a rasterizer error or an empty result is reported as
/// [`Error::ExportFailure`] and logged; nothing is retried.
pub fn export_image(
    rasterizer: &mut dyn Rasterizer,
    config: &ExportConfig,
    numbers: &[u32],
) -> Result<ExportArtifact> {
    config.validate()?;

    let Some(region) = config.region.as_ref() else {
        warn!("Export skipped: no capture region.");
        return Err(Error::ExportFailure("no capture region".into()));
    };

    let request = ExportRequest {
        region,
        scale: config.scale,
        background: config.background,
        numbers,
    };
    let bytes = match rasterizer.rasterize(&request) {
        Ok(bytes) if bytes.is_empty() => {
            warn!("Export of region '{region}' produced no data.");
            return Err(Error::ExportFailure("rasterizer returned no data".into()));
        }
        Ok(bytes) => bytes,
        Err(e) => {
            warn!("Export of region '{region}' failed: {e}.");
            return Err(Error::ExportFailure(e.to_string()));
        }
    };

    let file_name = artifact_name(numbers);
    info!("Exported {} ({} bytes).", file_name, bytes.len());
    Ok(ExportArtifact {
        file_name,
        bytes,
        scale: config.scale,
        background: config.background,
    })
}
