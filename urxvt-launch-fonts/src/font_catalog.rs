//! System font catalog resolution.
//!
//! Builds a frozen, process-wide mapping from font family name to the style
//! string usable for its regular and bold renditions by invoking `fc-list`
//! once and parsing its output. Each output line has the form:
//!
//! ```text
//! <filename>: <name1>[,<name2>,…]:style=<style1>[,<style2>,…]
//! ```
//!
//! A font can report several names and several style aliases (including
//! internationalized style names). Classification is deterministic: lines
//! are processed in lexicographic order and the first style recorded for a
//! name/slot pair wins, so two builds over the same listing are
//! bit-identical regardless of `fc-list` output order.

use crate::error::FontError;
use std::collections::HashMap;
use std::process::Command;
use std::sync::OnceLock;

/// The external font listing command. Only its textual output contract
/// matters; any binary printing the same format would do.
pub const LIST_COMMAND: &str = "fc-list";

/// Style aliases accepted for the regular rendition, in priority order.
const REGULAR_ALIASES: &[&str] = &["regular", "normal", "book", "medium"];

/// The single style alias accepted for the bold rendition.
const BOLD_ALIAS: &str = "bold";

/// Frozen mapping from font family name to resolved style names.
///
/// Lookups use the family name exactly as supplied by the caller, trimmed of
/// surrounding whitespace but otherwise case-sensitive, matching how
/// `fc-list` reports names. A name absent from a mapping means that slot is
/// unresolved; the empty string never occurs as a value.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FontCatalog {
    regular: HashMap<String, String>,
    bold: HashMap<String, String>,
}

impl FontCatalog {
    /// Style recorded for the regular rendition of `name`, if any.
    pub fn regular_style(&self, name: &str) -> Option<&str> {
        self.regular.get(name.trim()).map(String::as_str)
    }

    /// Style recorded for the bold rendition of `name`, if any.
    pub fn bold_style(&self, name: &str) -> Option<&str> {
        self.bold.get(name.trim()).map(String::as_str)
    }

    /// Number of families with a resolved regular style.
    pub fn regular_count(&self) -> usize {
        self.regular.len()
    }

    /// Number of families with a resolved bold style.
    pub fn bold_count(&self) -> usize {
        self.bold.len()
    }

    /// Parse a font listing into a catalog.
    ///
    /// Pure function of the listing text. Lines lacking the `": "`
    /// filename/metadata separator or the `":style="` marker contribute
    /// nothing.
    pub fn parse(listing: &str) -> Self {
        // Lexicographic order makes resolution reproducible even though
        // fc-list output order is unspecified.
        let mut lines: Vec<&str> = listing.lines().collect();
        lines.sort_unstable();

        let mut catalog = FontCatalog::default();
        for line in lines {
            let Some((_, metadata)) = line.split_once(": ") else {
                continue;
            };
            let Some((names_part, styles_part)) = metadata.split_once(":style=") else {
                continue;
            };
            // Names occupy the first colon-separated field of the metadata.
            let names_part = names_part.split(':').next().unwrap_or(names_part);

            let styles: Vec<&str> = styles_part.split(',').map(str::trim).collect();
            let regular = pick_regular(&styles);
            let bold = pick_bold(&styles);
            if regular.is_none() && bold.is_none() {
                continue;
            }

            for name in names_part.split(',').map(str::trim) {
                if name.is_empty() {
                    continue;
                }
                if let Some(style) = regular {
                    catalog
                        .regular
                        .entry(name.to_string())
                        .or_insert_with(|| style.to_string());
                }
                if let Some(style) = bold {
                    catalog
                        .bold
                        .entry(name.to_string())
                        .or_insert_with(|| style.to_string());
                }
            }
        }
        catalog
    }

    /// Build a catalog by invoking the system font listing command once.
    ///
    /// No retries: a spawn failure or non-zero exit yields
    /// [`FontError::CatalogUnavailable`] / [`FontError::CatalogFailed`] and
    /// the catalog stays unbuilt.
    pub fn from_system() -> Result<Self, FontError> {
        let output = Command::new(LIST_COMMAND)
            .output()
            .map_err(|source| FontError::CatalogUnavailable {
                command: LIST_COMMAND,
                source,
            })?;
        if !output.status.success() {
            return Err(FontError::CatalogFailed {
                command: LIST_COMMAND,
                status: output.status,
            });
        }
        let listing = String::from_utf8_lossy(&output.stdout);
        let catalog = Self::parse(&listing);
        log::info!(
            "Resolved {} regular and {} bold styles from {}",
            catalog.regular_count(),
            catalog.bold_count(),
            LIST_COMMAND
        );
        Ok(catalog)
    }
}

/// Pick the style token serving the regular slot.
///
/// Aliases are scanned in priority order; the first alias some token is
/// case-insensitively equal to wins, and the winner keeps its original
/// spelling. An alias appearing only as a substring of a longer token
/// ("Medium Italic") does not match and scanning moves to the next alias.
fn pick_regular<'a>(styles: &[&'a str]) -> Option<&'a str> {
    let joined = styles.join(",").to_lowercase();
    for alias in REGULAR_ALIASES {
        if !joined.contains(alias) {
            continue;
        }
        if let Some(style) = styles.iter().find(|s| s.eq_ignore_ascii_case(alias)) {
            return Some(*style);
        }
    }
    None
}

/// Pick the style token serving the bold slot: the first token exactly
/// equal (case-insensitively) to "bold". Variants like "SemiBold" never
/// match.
fn pick_bold<'a>(styles: &[&'a str]) -> Option<&'a str> {
    if !styles.join(",").to_lowercase().contains(BOLD_ALIAS) {
        return None;
    }
    styles
        .iter()
        .find(|s| s.eq_ignore_ascii_case(BOLD_ALIAS))
        .copied()
}

static CATALOG: OnceLock<FontCatalog> = OnceLock::new();

/// Process-wide font catalog, built on first access and frozen afterwards.
///
/// A failed build leaves the cache unset, so a later call may retry; once a
/// build succeeds the same catalog is returned for the remainder of the
/// process. The reference flow is single-threaded; a multi-threaded host
/// racing first access may invoke the listing command more than once, but
/// only one result is ever kept.
pub fn catalog() -> Result<&'static FontCatalog, FontError> {
    if let Some(catalog) = CATALOG.get() {
        return Ok(catalog);
    }
    let built = FontCatalog::from_system()?;
    Ok(CATALOG.get_or_init(|| built))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_lines_are_noops() {
        let catalog = FontCatalog::parse(
            "no separator here\n\
             /path/file.ttf: Name Without Style Marker\n\
             style=orphan marker without filename separator\n\
             \n",
        );
        assert_eq!(catalog.regular_count(), 0);
        assert_eq!(catalog.bold_count(), 0);
    }

    #[test]
    fn test_bold_only_styles() {
        let catalog = FontCatalog::parse("/f.ttf: Foo:style=Bold,SemiBold\n");
        assert_eq!(catalog.bold_style("Foo"), Some("Bold"));
        assert_eq!(catalog.regular_style("Foo"), None);
    }

    #[test]
    fn test_semibold_is_not_bold() {
        let catalog = FontCatalog::parse("/f.ttf: Foo:style=SemiBold\n");
        assert_eq!(catalog.bold_style("Foo"), None);
        assert_eq!(catalog.regular_style("Foo"), None);
    }

    #[test]
    fn test_both_slots_from_one_line() {
        let catalog = FontCatalog::parse("/f.ttf: Foo:style=Book,Bold\n");
        assert_eq!(catalog.regular_style("Foo"), Some("Book"));
        assert_eq!(catalog.bold_style("Foo"), Some("Bold"));
    }

    #[test]
    fn test_alias_priority_order() {
        // "regular" outranks "medium" even when declared later.
        let catalog = FontCatalog::parse("/f.ttf: Foo:style=Medium,Regular\n");
        assert_eq!(catalog.regular_style("Foo"), Some("Regular"));
    }

    #[test]
    fn test_alias_match_is_exact_not_substring() {
        // "Medium Italic" contains the alias but equals none of them.
        let catalog = FontCatalog::parse("/f.ttf: Foo:style=Medium Italic\n");
        assert_eq!(catalog.regular_style("Foo"), None);
    }

    #[test]
    fn test_substring_hit_falls_through_to_next_alias() {
        // "book" only appears inside "Bookish"; "medium" has an exact token.
        let catalog = FontCatalog::parse("/f.ttf: Foo:style=Bookish,Medium\n");
        assert_eq!(catalog.regular_style("Foo"), Some("Medium"));
    }

    #[test]
    fn test_case_insensitive_match_keeps_original_spelling() {
        let catalog = FontCatalog::parse("/f.ttf: Foo:style=BOOK\n");
        assert_eq!(catalog.regular_style("Foo"), Some("BOOK"));
    }

    #[test]
    fn test_first_seen_wins_across_lines() {
        // Lexicographic line order puts /a.ttf first regardless of input order.
        let catalog = FontCatalog::parse(
            "/b.ttf: Foo:style=Normal\n\
             /a.ttf: Foo:style=Book\n",
        );
        assert_eq!(catalog.regular_style("Foo"), Some("Book"));
    }

    #[test]
    fn test_multiple_names_share_styles() {
        let catalog = FontCatalog::parse("/f.ttf: Foo,Foo Mono:style=Regular,Bold\n");
        assert_eq!(catalog.regular_style("Foo"), Some("Regular"));
        assert_eq!(catalog.regular_style("Foo Mono"), Some("Regular"));
        assert_eq!(catalog.bold_style("Foo Mono"), Some("Bold"));
    }

    #[test]
    fn test_names_trimmed_and_lookup_trims() {
        let catalog = FontCatalog::parse("/f.ttf: Foo , Bar:style=Regular\n");
        assert_eq!(catalog.regular_style("Foo"), Some("Regular"));
        assert_eq!(catalog.regular_style(" Bar "), Some("Regular"));
    }

    #[test]
    fn test_metadata_extra_fields_do_not_pollute_names() {
        let catalog = FontCatalog::parse("/f.ttf: Foo:fullname=Foo Regular:style=Regular\n");
        assert_eq!(catalog.regular_style("Foo"), Some("Regular"));
        assert_eq!(catalog.regular_style("Foo:fullname=Foo Regular"), None);
    }

    #[test]
    fn test_unmatched_styles_leave_no_entry() {
        let catalog = FontCatalog::parse("/f.ttf: Foo:style=Italic,Oblique\n");
        assert_eq!(catalog.regular_style("Foo"), None);
        assert_eq!(catalog.bold_style("Foo"), None);
    }

    #[test]
    fn test_parse_is_idempotent() {
        let listing = "/b.ttf: Foo:style=Normal\n\
                       /a.ttf: Foo:style=Book,Bold\n\
                       /c.ttf: Bar,Baz:style=Medium\n";
        assert_eq!(FontCatalog::parse(listing), FontCatalog::parse(listing));
    }
}
