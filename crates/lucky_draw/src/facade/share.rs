//! Social share payloads and the [`ShareSdk`] capability.
use tracing::{debug, info, warn};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::facade::clipboard::format_numbers;
use crate::facade::collaborator_error;

pub const DEFAULT_DESCRIPTION: &str = "Trust your luck and grab it!";
pub const DEFAULT_IMAGE_URL: &str = "https://lucky-guide.pages.dev/og-image.png";
pub const DEFAULT_LINK_URL: &str = "https://lucky-guide.pages.dev";

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ShareLink {
    pub mobile_web_url: String,
    pub web_url: String,
}

/// Feed card handed to the share SDK.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SharePayload {
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub link: ShareLink,
}

#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ShareConfig {
    pub description: String,
    pub image_url: String,
    /// Used for both the mobile and the desktop link.
    pub link_url: String,
}

impl Default for ShareConfig {
    fn default() -> Self {
        Self {
            description: DEFAULT_DESCRIPTION.into(),
            image_url: DEFAULT_IMAGE_URL.into(),
            link_url: DEFAULT_LINK_URL.into(),
        }
    }
}

impl ShareConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = image_url.into();
        self
    }

    pub fn with_link_url(mut self, link_url: impl Into<String>) -> Self {
        self.link_url = link_url.into();
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.link_url.trim().is_empty() {
            return Err(Error::InvalidConfig("link_url must not be empty".into()));
        }
        if self.image_url.trim().is_empty() {
            return Err(Error::InvalidConfig("image_url must not be empty".into()));
        }
        Ok(())
    }
}

/// Injected social share capability.
pub trait ShareSdk {
    /// Whether the SDK is loaded and initialised.
    fn is_available(&self) -> bool;
    fn invoke(&mut self, payload: &SharePayload) -> Result<()>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareOutcome {
    Sent,
    /// No usable SDK; the request was dropped.
    Skipped,
}

/// Builds the feed payload. The title embeds the draw when there is one.
pub fn build_payload(config: &ShareConfig, numbers: Option<&[u32]>) -> SharePayload {
    let title = match numbers {
        Some(n) if !n.is_empty() => format!("🍀 My lucky numbers: {}", format_numbers(n)),
        _ => "🍀 How is my luck today?".to_string(),
    };
    SharePayload {
        title,
        description: config.description.clone(),
        image_url: config.image_url.clone(),
        link: ShareLink {
            mobile_web_url: config.link_url.clone(),
            web_url: config.link_url.clone(),
        },
    }
}

fn available(sdk: Option<&mut dyn ShareSdk>) -> Result<&mut dyn ShareSdk> {
    match sdk {
        Some(sdk) if sdk.is_available() => Ok(sdk),
        _ => Err(Error::MissingCollaborator("share".into())),
    }
}

/// Shares the draw. An absent or uninitialised SDK yields [`ShareOutcome::Skipped`].
pub fn share(
    sdk: Option<&mut dyn ShareSdk>,
    config: &ShareConfig,
    numbers: Option<&[u32]>,
) -> Result<ShareOutcome> {
    config.validate()?;
    let sdk = match available(sdk) {
        Ok(sdk) => sdk,
        Err(e) => {
            debug!("Share skipped: {e}.");
            return Ok(ShareOutcome::Skipped);
        }
    };

    let payload = build_payload(config, numbers);
    if let Err(e) = sdk.invoke(&payload) {
        warn!("Share failed: {e}.");
        return Err(collaborator_error("share", e));
    }
    info!("Shared '{}'.", payload.title);
    Ok(ShareOutcome::Sent)
}
