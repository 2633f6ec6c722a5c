//! Shared utilities for the Tiffin admin dashboard.
//!
//! Holds build-time metadata shared by the `business` and `ui` crates.

pub mod version_info;
