//! Hand-off of a finished draw to external collaborators.
//!
//! The core only builds complete requests and payloads; rasterising, clipboard
//! access and social sharing are injected through the [`Rasterizer`],
//! [`Clipboard`] and [`ShareSdk`] traits. None of them is assumed to exist.
use crate::error::Error;

pub mod clipboard;
pub mod export;
pub mod share;

pub use clipboard::{copy_numbers, format_numbers, Clipboard};
pub use export::{
    artifact_name, export_image, ExportArtifact, ExportConfig, ExportRequest, Rasterizer,
    RegionRef,
};
pub use share::{build_payload, share, ShareConfig, ShareLink, ShareOutcome, SharePayload, ShareSdk};

/// Reports a failure raised inside the `name` collaborator as [`Error::Collaborator`].
pub(crate) fn collaborator_error(name: &str, err: Error) -> Error {
    match err {
        Error::Collaborator(_) => err,
        other => Error::Collaborator(format!("{name}: {other}")),
    }
}
