//! Font catalog resolution and XFT directive assembly for urxvt-launch.
//!
//! This crate provides:
//! - [`FontCatalog`]: a frozen mapping from font family name to the concrete
//!   style string usable for its regular and bold renditions, built by
//!   parsing `fc-list` output
//! - [`FontFace`]: one requested family at one pixel size, exposing memoized
//!   `xft:` directive strings for both renditions
//! - [`FontRequest`]: the ordered face list (bitmap face, requested
//!   families, supplementary coverage families) and its comma-joined
//!   directives
//!
//! # Architecture
//!
//! Real-world font catalogs use inconsistent style names ("Book", "Medium",
//! "Normal" all stand in for "regular"), so the catalog classifies each
//! reported style list once, deterministically, and freezes the result for
//! the remainder of the process. Everything downstream is a pure lookup.

pub mod error;
pub mod fallbacks;
pub mod font_catalog;
pub mod font_face;
pub mod font_request;

// Re-export main types for convenience
pub use error::FontError;
pub use fallbacks::SUPPLEMENTARY_FAMILIES;
pub use font_catalog::{FontCatalog, catalog};
pub use font_face::FontFace;
pub use font_request::{FontRequest, ResolvedFonts};
