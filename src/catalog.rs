//! # Fragment Catalog
//!
//! Enumerates the selectable fragment files under the assets directory,
//! one subdirectory per category. The web UI reads this to populate its
//! dropdowns; missing category directories simply yield empty lists.

use serde::Serialize;
use std::path::Path;

use crate::error::EscudoError;

/// One selectable fragment file.
#[derive(Debug, Clone, Serialize)]
pub struct CatalogEntry {
    /// Display name (the file stem).
    pub name: String,
    /// Path relative to the assets directory.
    pub path: String,
}

/// The selectable fragments, grouped by category.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Catalog {
    pub shields: Vec<CatalogEntry>,
    pub icons: Vec<CatalogEntry>,
    pub crowns: Vec<CatalogEntry>,
    pub laurels: Vec<CatalogEntry>,
}

impl Catalog {
    /// Scan `assets_dir` for fragments.
    pub fn scan(assets_dir: &Path) -> Result<Self, EscudoError> {
        Ok(Self {
            shields: scan_category(assets_dir, "shields")?,
            icons: scan_category(assets_dir, "icons")?,
            crowns: scan_category(assets_dir, "crowns")?,
            laurels: scan_category(assets_dir, "laurels")?,
        })
    }
}

/// List the `.svg` files in one category subdirectory, sorted by name.
fn scan_category(assets_dir: &Path, category: &str) -> Result<Vec<CatalogEntry>, EscudoError> {
    let dir = assets_dir.join(category);
    if !dir.is_dir() {
        return Ok(Vec::new());
    }

    let mut entries = Vec::new();
    for entry in std::fs::read_dir(&dir)? {
        let entry = entry?;
        let path = entry.path();
        let is_svg = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("svg"));
        if !is_svg {
            continue;
        }
        let name = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default();
        entries.push(CatalogEntry {
            name,
            path: format!("{category}/{}", entry.file_name().to_string_lossy()),
        });
    }

    entries.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_scan_filters_and_sorts() {
        let dir = TempDir::new().unwrap();
        let shields = dir.path().join("shields");
        fs::create_dir(&shields).unwrap();
        fs::write(shields.join("round.svg"), "<svg/>").unwrap();
        fs::write(shields.join("heater.svg"), "<svg/>").unwrap();
        fs::write(shields.join("notes.txt"), "not a fragment").unwrap();

        let catalog = Catalog::scan(dir.path()).unwrap();
        let names: Vec<&str> = catalog.shields.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["heater", "round"]);
        assert_eq!(catalog.shields[0].path, "shields/heater.svg");
    }

    #[test]
    fn test_missing_categories_are_empty() {
        let dir = TempDir::new().unwrap();
        let catalog = Catalog::scan(dir.path()).unwrap();
        assert!(catalog.shields.is_empty());
        assert!(catalog.laurels.is_empty());
    }
}
