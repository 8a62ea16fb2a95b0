//! Output management.
//!
//! - [`StarterManifest`] - the buildconfig.toml written by `bconf init`
//! - [`find_stale_files`] / [`remove_stale_files`] - cleanup of files left by
//!   earlier runs

mod manifest_toml;
mod stale;

pub use manifest_toml::StarterManifest;
pub use stale::{find_stale_files, remove_stale_files};
