//! One requested font family at one pixel size.

use crate::font_catalog::FontCatalog;
use std::sync::OnceLock;

/// Render an XFT directive embedding family, resolved style, and pixel size.
fn xft_directive(name: &str, style: &str, size: u32) -> String {
    format!("xft:{name}:style={style}:pixelsize={size}")
}

/// A requested font family at a pixel size, with lazily computed directive
/// strings for the regular and bold renditions.
///
/// Both accessors are pure functions of the frozen catalog plus the face's
/// name and size, so their results are memoized per instance on first
/// access. Callers must pass the same catalog for the face's lifetime
/// (in practice the process-wide one from [`crate::catalog`]).
#[derive(Debug)]
pub struct FontFace {
    name: String,
    size: u32,
    regular: OnceLock<Option<String>>,
    bold: OnceLock<Option<String>>,
}

impl FontFace {
    /// Create a face for `name` at `size` pixels. The name is trimmed of
    /// surrounding whitespace; no other normalization is applied.
    pub fn new(name: impl Into<String>, size: u32) -> Self {
        Self {
            name: name.into().trim().to_string(),
            size,
            regular: OnceLock::new(),
            bold: OnceLock::new(),
        }
    }

    /// The requested family name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The requested pixel size.
    pub fn size(&self) -> u32 {
        self.size
    }

    /// The XFT directive for the regular rendition, or `None` (with a
    /// warning logged) when the catalog has no regular style for this
    /// family. An unresolved slot never aborts the run; it is simply
    /// omitted from the joined directive.
    pub fn regular(&self, catalog: &FontCatalog) -> Option<&str> {
        self.regular
            .get_or_init(|| match catalog.regular_style(&self.name) {
                Some(style) => Some(xft_directive(&self.name, style, self.size)),
                None => {
                    log::warn!("No regular style found for font '{}'", self.name);
                    None
                }
            })
            .as_deref()
    }

    /// The XFT directive for the bold rendition; same contract as
    /// [`FontFace::regular`] against the bold mapping.
    pub fn bold(&self, catalog: &FontCatalog) -> Option<&str> {
        self.bold
            .get_or_init(|| match catalog.bold_style(&self.name) {
                Some(style) => Some(xft_directive(&self.name, style, self.size)),
                None => {
                    log::warn!("No bold style found for font '{}'", self.name);
                    None
                }
            })
            .as_deref()
    }

    /// Whether at least one rendition resolved. A face that is not usable
    /// contributes nothing to the launch arguments.
    pub fn is_usable(&self, catalog: &FontCatalog) -> bool {
        self.regular(catalog).is_some() || self.bold(catalog).is_some()
    }
}
