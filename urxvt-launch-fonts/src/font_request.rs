//! Ordered font request list and directive joining.

use crate::fallbacks::SUPPLEMENTARY_FAMILIES;
use crate::font_catalog::FontCatalog;
use crate::font_face::FontFace;
use urxvt_launch_config::Config;

/// The two comma-joined directive strings handed to the terminal.
///
/// Either string may be empty when nothing resolved for that rendition; the
/// launch proceeds regardless.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedFonts {
    /// Joined `-fn` value: every non-empty regular directive, in list order.
    pub regular: String,
    /// Joined `-fb` value: every non-empty bold directive, in list order.
    pub bold: String,
}

/// An ordered list of requested font faces.
///
/// Order is precedence: the first face is the primary rendering font, later
/// ones serve only glyphs no earlier face can render.
#[derive(Debug)]
pub struct FontRequest {
    faces: Vec<FontFace>,
}

impl FontRequest {
    /// Build the face list from a comma-separated family specification.
    ///
    /// The layout is: the configured bitmap face first when `prefer_bitmap`
    /// is set (at its own fixed pixel size), then the requested families in
    /// caller order at `size`, then the fixed supplementary coverage
    /// families from [`SUPPLEMENTARY_FAMILIES`].
    pub fn new(families: &str, size: u32, prefer_bitmap: bool, config: &Config) -> Self {
        let mut faces = Vec::new();
        if prefer_bitmap {
            faces.push(FontFace::new(&config.bitmap_family, config.bitmap_size));
        }
        for family in families.split(',').map(str::trim).filter(|f| !f.is_empty()) {
            faces.push(FontFace::new(family, size));
        }
        for family in SUPPLEMENTARY_FAMILIES {
            faces.push(FontFace::new(*family, size));
        }
        Self { faces }
    }

    /// The faces in precedence order.
    pub fn faces(&self) -> &[FontFace] {
        &self.faces
    }

    /// Comma-join of every face's non-empty regular directive, in list
    /// order. Faces with no regular style are skipped without leaving an
    /// empty placeholder.
    pub fn regular_directive(&self, catalog: &FontCatalog) -> String {
        join(self.faces.iter().map(|face| face.regular(catalog)))
    }

    /// Comma-join of every face's non-empty bold directive, in list order.
    pub fn bold_directive(&self, catalog: &FontCatalog) -> String {
        join(self.faces.iter().map(|face| face.bold(catalog)))
    }

    /// Resolve both joined directives, reporting faces that contribute
    /// nothing at all. Unusable faces are an error-level observation, never
    /// a hard failure.
    pub fn resolve(&self, catalog: &FontCatalog) -> ResolvedFonts {
        for face in &self.faces {
            if !face.is_usable(catalog) {
                log::error!(
                    "Font '{}' has neither a regular nor a bold style; it contributes nothing",
                    face.name()
                );
            }
        }
        ResolvedFonts {
            regular: self.regular_directive(catalog),
            bold: self.bold_directive(catalog),
        }
    }
}

fn join<'a>(parts: impl Iterator<Item = Option<&'a str>>) -> String {
    parts.flatten().collect::<Vec<_>>().join(",")
}
