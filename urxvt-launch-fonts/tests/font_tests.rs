//! Integration tests for the urxvt-launch-fonts crate.

use urxvt_launch_config::Config;
use urxvt_launch_fonts::{FontCatalog, FontFace, FontRequest};

/// A small synthetic `fc-list` listing exercising every classification rule.
const LISTING: &str = "\
/usr/share/fonts/dejavu/DejaVuSansMono.ttf: DejaVuSansMono Nerd Font Mono:style=Book\n\
/usr/share/fonts/dejavu/DejaVuSansMono-Bold.ttf: DejaVuSansMono Nerd Font Mono:style=Bold\n\
/usr/share/fonts/dejavu/DejaVuSans.ttf: DejaVu Sans:style=Book\n\
/usr/share/fonts/misc/9x15.pcf.gz: Misc Fixed:style=Regular\n\
/usr/share/fonts/symbola/Symbola.ttf: Symbola:style=Regular,Normal\n\
/usr/share/fonts/iosevka/Iosevka.ttc: Iosevka,Iosevka Term:style=Medium,Bold\n\
/usr/share/fonts/broken/NoStyleLine.ttf\n\
/usr/share/fonts/thin/Thin.ttf: Thin Font:style=Thin,ExtraLight\n";

#[test]
fn test_catalog_resolves_expected_families() {
    let catalog = FontCatalog::parse(LISTING);
    assert_eq!(
        catalog.regular_style("DejaVuSansMono Nerd Font Mono"),
        Some("Book")
    );
    assert_eq!(catalog.bold_style("DejaVuSansMono Nerd Font Mono"), Some("Bold"));
    assert_eq!(catalog.regular_style("Misc Fixed"), Some("Regular"));
    assert_eq!(catalog.regular_style("Iosevka Term"), Some("Medium"));
    assert_eq!(catalog.bold_style("Iosevka"), Some("Bold"));
    assert_eq!(catalog.regular_style("Thin Font"), None);
    assert_eq!(catalog.bold_style("Thin Font"), None);
}

#[test]
fn test_catalog_build_is_deterministic() {
    // Same lines in reversed input order must produce the same catalog.
    let reversed: String = LISTING.lines().rev().map(|l| format!("{l}\n")).collect();
    assert_eq!(FontCatalog::parse(LISTING), FontCatalog::parse(&reversed));
}

#[test]
fn test_face_directives_against_listing() {
    let catalog = FontCatalog::parse(LISTING);
    let face = FontFace::new("DejaVuSansMono Nerd Font Mono", 14);
    assert_eq!(
        face.regular(&catalog),
        Some("xft:DejaVuSansMono Nerd Font Mono:style=Book:pixelsize=14")
    );
    assert_eq!(
        face.bold(&catalog),
        Some("xft:DejaVuSansMono Nerd Font Mono:style=Bold:pixelsize=14")
    );
}

#[test]
fn test_full_request_with_bitmap_first() {
    let catalog = FontCatalog::parse(LISTING);
    let config = Config::default();
    let request = FontRequest::new(&config.font_family, config.size, true, &config);
    let fonts = request.resolve(&catalog);

    let parts: Vec<&str> = fonts.regular.split(',').collect();
    assert_eq!(
        parts[0], "xft:Misc Fixed:style=Regular:pixelsize=16",
        "bitmap face comes first at its fixed size"
    );
    assert_eq!(
        parts[1],
        "xft:DejaVuSansMono Nerd Font Mono:style=Book:pixelsize=14"
    );
    // Unifont Upper is not in the listing; Symbola and DejaVu Sans are.
    assert_eq!(parts[2], "xft:Symbola:style=Regular:pixelsize=14");
    assert_eq!(parts[3], "xft:DejaVu Sans:style=Book:pixelsize=14");
    assert_eq!(parts.len(), 4);

    assert_eq!(
        fonts.bold, "xft:DejaVuSansMono Nerd Font Mono:style=Bold:pixelsize=14",
        "only the primary family resolves a bold style"
    );
}

#[test]
fn test_request_with_nothing_resolvable_is_empty_not_fatal() {
    let catalog = FontCatalog::parse("");
    let config = Config::default();
    let request = FontRequest::new("Ghost Font", config.size, false, &config);
    let fonts = request.resolve(&catalog);
    assert!(fonts.regular.is_empty());
    assert!(fonts.bold.is_empty());
}
