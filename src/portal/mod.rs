//! Mod portal API integration.
//!
//! The portal stores published releases and accepts uploads through a
//! two-step protocol: `init_upload` hands out a one-time URL, then the
//! archive is posted to it.

mod client;
mod types;

pub use client::PortalClient;
pub use types::{ApiError, ApiResponse, InitUpload, ModPage, PortalRelease};
