//! # Composition Tests
//!
//! End-to-end tests for the emblem and coin pipelines: each test writes
//! real fragment files into a scratch directory, composes a document,
//! and inspects the serialized SVG.

use std::fs;
use std::path::PathBuf;

use pretty_assertions::assert_eq;
use tempfile::TempDir;

use escudo::compose::{CoinSpec, compose_coin, compose_emblem};
use escudo::error::EscudoError;

/// A shield with a 250x250 coordinate space (normalizes to scale 2 on
/// the 500px emblem canvas).
const SHIELD: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 250 250">
  <path d="M 10 10 L 240 10 L 125 240 Z" fill="#8B0000"/>
  <rect x="40" y="40" width="170" height="60" fill="#DAA520"/>
</svg>"##;

/// An icon with a 100x100 coordinate space (fit-scales to 1.25 in a
/// 125px quadrant).
const ICON: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 100 100">
  <circle cx="50" cy="50" r="40" fill="navy"/>
</svg>"#;

/// A crown with a 100x100 coordinate space (net scale 2.4 on the coin).
const CROWN: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 100 100">
  <path d="M 10 90 L 10 30 L 50 60 L 90 30 L 90 90 Z" fill="gold"/>
</svg>"#;

const LAURELS: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 1280 1024">
  <path d="M 100 900 C 200 400 1080 400 1180 900" fill="none" stroke="green"/>
</svg>"#;

// ============================================================================
// HELPER FUNCTIONS
// ============================================================================

struct Scratch {
    dir: TempDir,
}

impl Scratch {
    fn new() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    fn write(&self, name: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }
}

fn icon_set(scratch: &Scratch, count: usize) -> Vec<PathBuf> {
    (1..=count)
        .map(|index| scratch.write(&format!("icon{index}.svg"), ICON))
        .collect()
}

// ============================================================================
// EMBLEM
// ============================================================================

#[test]
fn test_emblem_end_to_end() {
    let scratch = Scratch::new();
    let shield = scratch.write("shield.svg", SHIELD);
    let icons = icon_set(&scratch, 4);
    let output = scratch.path("emblem.svg");

    compose_emblem(&output, &shield, &icons).unwrap();
    let markup = fs::read_to_string(&output).unwrap();

    // 500x500 canvas with a matching viewBox
    assert!(markup.contains(r#"width="500" height="500""#));
    assert!(markup.contains(r#"viewBox="0 0 500 500""#));

    // Shield children normalized by one scaled group (500 / 250 = 2)
    assert!(markup.contains(r#"<g transform="scale(2)">"#));

    // All four quadrants filled with the icon's own fit scale (125 / 100)
    for anchor in [
        "translate(90, 70)",
        "translate(300, 70)",
        "translate(90, 270)",
        "translate(300, 270)",
    ] {
        assert!(
            markup.contains(&format!(r#"transform="{anchor} scale(1.25)""#)),
            "missing quadrant transform {anchor}"
        );
    }
}

#[test]
fn test_emblem_is_deterministic() {
    let scratch = Scratch::new();
    let shield = scratch.write("shield.svg", SHIELD);
    let icons = icon_set(&scratch, 4);

    let first_path = scratch.path("first.svg");
    let second_path = scratch.path("second.svg");
    compose_emblem(&first_path, &shield, &icons).unwrap();
    compose_emblem(&second_path, &shield, &icons).unwrap();

    let first = fs::read_to_string(&first_path).unwrap();
    let second = fs::read_to_string(&second_path).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_emblem_partial_fill_keeps_order() {
    let scratch = Scratch::new();
    let shield = scratch.write("shield.svg", SHIELD);
    let icons = icon_set(&scratch, 2);
    let output = scratch.path("emblem.svg");

    compose_emblem(&output, &shield, &icons).unwrap();
    let markup = fs::read_to_string(&output).unwrap();

    // The first two quadrants are filled, in order, and the last two stay
    // empty - no layout shift
    assert!(markup.contains("translate(90, 70)"));
    assert!(markup.contains("translate(300, 70)"));
    assert!(!markup.contains("translate(90, 270)"));
    assert!(!markup.contains("translate(300, 270)"));
}

#[test]
fn test_emblem_missing_fragment_writes_nothing() {
    let scratch = Scratch::new();
    let shield = scratch.write("shield.svg", SHIELD);
    let mut icons = icon_set(&scratch, 2);
    icons.push(scratch.path("missing.svg"));
    let output = scratch.path("emblem.svg");

    let err = compose_emblem(&output, &shield, &icons).unwrap_err();
    assert!(matches!(err, EscudoError::FragmentLoad { .. }));
    assert!(!output.exists());
}

// ============================================================================
// COIN
// ============================================================================

#[test]
fn test_coin_end_to_end_with_crown_and_text() {
    let scratch = Scratch::new();
    let shield = scratch.write("shield.svg", SHIELD);
    let icons = icon_set(&scratch, 4);
    let emblem = scratch.path("emblem.svg");
    compose_emblem(&emblem, &shield, &icons).unwrap();

    let crown = scratch.write("crown.svg", CROWN);
    let output = scratch.path("coin.svg");

    let mut spec = CoinSpec::new(&emblem);
    spec.crown = Some(crown);
    spec.left_text = "LEFT TEXT".to_string();
    spec.right_text = "RIGHT TEXT".to_string();
    spec.center_normalized = true;
    compose_coin(&output, &spec).unwrap();

    let markup = fs::read_to_string(&output).unwrap();

    // 850x850 canvas, white background, two concentric border circles
    assert!(markup.contains(r#"width="850" height="850""#));
    assert!(markup.contains(r#"<rect x="0" y="0" width="850" height="850" fill="white"/>"#));
    assert!(markup.contains(r#"r="420""#) && markup.contains(r#"fill="black""#));
    assert!(markup.contains(r#"r="390""#) && markup.contains(r##"fill="#FFD700""##));

    // Normalized emblem at the crown-present anchor, no extra scale
    assert!(markup.contains(r#"<g transform="translate(172, 230)">"#));

    // Crown fit against its 100x100 box then enlarged 2.4x
    assert!(markup.contains(r#"transform="translate(263, -15) scale(2.4)""#));

    // Guide circle at radius 315 plus both inscriptions at their offsets
    assert!(markup.contains("M 425 110 A 315 315 0 1 1 425 740 A 315 315 0 1 1 425 110"));
    assert!(markup.contains(r#"startOffset="61%">LEFT TEXT</textPath>"#));
    assert!(markup.contains(r#"startOffset="11.8%">RIGHT TEXT</textPath>"#));
}

#[test]
fn test_coin_raw_icon_gets_fit_scaled() {
    let scratch = Scratch::new();
    let icon = scratch.write("icon.svg", ICON);
    let output = scratch.path("coin.svg");

    let spec = CoinSpec::new(&icon);
    compose_coin(&output, &spec).unwrap();

    let markup = fs::read_to_string(&output).unwrap();
    // Raw icon: fit into the 500px center box (500 / 100 = 5), at the
    // crownless anchor
    assert!(markup.contains(r#"<g transform="translate(175, 215) scale(5)">"#));
}

#[test]
fn test_coin_crown_shifts_center_down() {
    let scratch = Scratch::new();
    let icon = scratch.write("icon.svg", ICON);
    let crown = scratch.write("crown.svg", CROWN);
    let output = scratch.path("coin.svg");

    let mut spec = CoinSpec::new(&icon);
    spec.crown = Some(crown);
    compose_coin(&output, &spec).unwrap();

    let markup = fs::read_to_string(&output).unwrap();
    assert!(markup.contains(r#"<g transform="translate(175, 240) scale(5)">"#));
}

#[test]
fn test_coin_laurels_exclude_inscriptions() {
    let scratch = Scratch::new();
    let icon = scratch.write("icon.svg", ICON);
    let laurels = scratch.write("laurels.svg", LAURELS);
    let output = scratch.path("coin.svg");

    let mut spec = CoinSpec::new(&icon);
    spec.laurels = Some(laurels);
    spec.left_text = "IGNORED".to_string();
    compose_coin(&output, &spec).unwrap();

    let markup = fs::read_to_string(&output).unwrap();
    assert!(markup.contains(r#"transform="translate(31, 60) scale(0.615)""#));
    // No circular text machinery at all
    assert!(!markup.contains("textPath"));
    assert!(!markup.contains("rim-text-guide"));
    assert!(!markup.contains("IGNORED"));
}

#[test]
fn test_coin_without_laurels_uses_default_motto() {
    let scratch = Scratch::new();
    let icon = scratch.write("icon.svg", ICON);
    let output = scratch.path("coin.svg");

    compose_coin(&output, &CoinSpec::new(&icon)).unwrap();

    let markup = fs::read_to_string(&output).unwrap();
    assert!(markup.contains("DARK \u{25BE} VADA"));
    assert!(markup.contains("VADA \u{25BE} COIN"));
}

#[test]
fn test_coin_debug_overlay_is_off_by_default() {
    let scratch = Scratch::new();
    let icon = scratch.write("icon.svg", ICON);

    let plain_path = scratch.path("plain.svg");
    compose_coin(&plain_path, &CoinSpec::new(&icon)).unwrap();
    let plain = fs::read_to_string(&plain_path).unwrap();
    assert!(!plain.contains("<line"));

    let debug_path = scratch.path("debug.svg");
    let mut spec = CoinSpec::new(&icon);
    spec.debug = true;
    compose_coin(&debug_path, &spec).unwrap();
    let debug = fs::read_to_string(&debug_path).unwrap();
    assert_eq!(debug.matches("<line").count(), 2);
}

#[test]
fn test_coin_background_can_be_disabled() {
    let scratch = Scratch::new();
    let icon = scratch.write("icon.svg", ICON);
    let output = scratch.path("coin.svg");

    let mut spec = CoinSpec::new(&icon);
    spec.with_background = false;
    compose_coin(&output, &spec).unwrap();

    let markup = fs::read_to_string(&output).unwrap();
    assert!(!markup.contains(r#"fill="white""#));
}

#[test]
fn test_coin_missing_center_writes_nothing() {
    let scratch = Scratch::new();
    let output = scratch.path("coin.svg");

    let err = compose_coin(&output, &CoinSpec::new(scratch.path("missing.svg"))).unwrap_err();
    assert!(matches!(err, EscudoError::FragmentLoad { .. }));
    assert!(!output.exists());
}

#[test]
fn test_output_is_namespace_clean() {
    let scratch = Scratch::new();
    // A fragment authored with a synthetic prefix, as some editors emit
    let prefixed = scratch.write(
        "prefixed.svg",
        r#"<ns0:svg xmlns:ns0="http://www.w3.org/2000/svg" viewBox="0 0 100 100">
             <ns0:circle cx="50" cy="50" r="40"/>
           </ns0:svg>"#,
    );
    let output = scratch.path("coin.svg");

    compose_coin(&output, &CoinSpec::new(&prefixed)).unwrap();

    let markup = fs::read_to_string(&output).unwrap();
    assert!(markup.starts_with(r#"<?xml version="1.0" encoding="UTF-8"?>"#));
    assert!(!markup.contains("ns0:"));
    assert!(!markup.contains(":ns0"));
}
