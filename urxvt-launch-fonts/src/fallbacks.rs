//! Supplementary coverage font configuration.
//!
//! Defines the fixed list of families appended after the requested fonts.

/// Supplementary families appended, in this order, after every requested
/// font.
///
/// They guarantee glyph coverage beyond the primary font (symbols, icons,
/// emoji — besides what a Nerd Font already carries). Their relative order
/// is baked into the final comma-joined directive, so later entries only
/// serve glyphs no earlier entry can render.
pub const SUPPLEMENTARY_FAMILIES: &[&str] = &[
    "Symbola",
    "Unifont Upper",
    "DejaVu Sans",
];
