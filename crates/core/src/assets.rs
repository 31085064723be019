//! Discovery of visual cake assets on disk.
//!
//! Shapes and designs (toppings) render from SVG files under the asset
//! root. The set of files physically present is the strongest source of
//! truth for what can be displayed, so the option resolver prefers it over
//! the static vocabulary. Discovery reads the directory at call time; a
//! missing directory simply means no assets, never an error.

use std::fs;
use std::path::{Path, PathBuf};

use crate::options::OptionDimension;

/// Subdirectory of the asset root holding shape SVGs.
pub const SHAPES_SUBDIR: &str = "shapes";

/// Subdirectory of the asset root holding topping/design SVGs.
pub const TOPPINGS_SUBDIR: &str = "toppings";

/// The asset directory for a dimension, or `None` for non-visual ones.
pub fn asset_dir(root: &Path, dimension: OptionDimension) -> Option<PathBuf> {
    match dimension {
        OptionDimension::Shape => Some(root.join(SHAPES_SUBDIR)),
        OptionDimension::Design => Some(root.join(TOPPINGS_SUBDIR)),
        OptionDimension::Flavor | OptionDimension::Color => None,
    }
}

/// List the slugs of SVG assets available for a dimension.
///
/// Returns the `.svg` file stems under the dimension's directory, sorted
/// for stable ordering. Non-visual dimensions and absent/unreadable
/// directories yield an empty set.
pub fn available_slugs(root: &Path, dimension: OptionDimension) -> Vec<String> {
    let Some(dir) = asset_dir(root, dimension) else {
        return Vec::new();
    };

    let Ok(entries) = fs::read_dir(&dir) else {
        return Vec::new();
    };

    let mut slugs: Vec<String> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.extension().is_some_and(|ext| ext == "svg"))
        .filter_map(|path| {
            path.file_stem()
                .and_then(|stem| stem.to_str())
                .map(|stem| stem.to_string())
        })
        .collect();

    slugs.sort();
    slugs
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;

    fn touch(dir: &Path, name: &str) {
        File::create(dir.join(name)).unwrap();
    }

    #[test]
    fn lists_svg_stems_sorted() {
        let tmp = tempfile::tempdir().unwrap();
        let shapes = tmp.path().join(SHAPES_SUBDIR);
        fs::create_dir_all(&shapes).unwrap();
        touch(&shapes, "round.svg");
        touch(&shapes, "heart.svg");
        touch(&shapes, "mini_heart.svg");

        let slugs = available_slugs(tmp.path(), OptionDimension::Shape);
        assert_eq!(slugs, vec!["heart", "mini_heart", "round"]);
    }

    #[test]
    fn non_svg_files_ignored() {
        let tmp = tempfile::tempdir().unwrap();
        let toppings = tmp.path().join(TOPPINGS_SUBDIR);
        fs::create_dir_all(&toppings).unwrap();
        touch(&toppings, "drip.svg");
        touch(&toppings, "readme.txt");
        touch(&toppings, "sketch.png");

        let slugs = available_slugs(tmp.path(), OptionDimension::Design);
        assert_eq!(slugs, vec!["drip"]);
    }

    #[test]
    fn missing_directory_yields_empty_set() {
        let tmp = tempfile::tempdir().unwrap();
        assert!(available_slugs(tmp.path(), OptionDimension::Shape).is_empty());
    }

    #[test]
    fn non_visual_dimensions_have_no_assets() {
        let tmp = tempfile::tempdir().unwrap();
        let shapes = tmp.path().join(SHAPES_SUBDIR);
        fs::create_dir_all(&shapes).unwrap();
        touch(&shapes, "round.svg");

        assert!(available_slugs(tmp.path(), OptionDimension::Flavor).is_empty());
        assert!(available_slugs(tmp.path(), OptionDimension::Color).is_empty());
    }

    #[test]
    fn reflects_filesystem_at_call_time() {
        let tmp = tempfile::tempdir().unwrap();
        let shapes = tmp.path().join(SHAPES_SUBDIR);
        fs::create_dir_all(&shapes).unwrap();
        touch(&shapes, "round.svg");
        assert_eq!(available_slugs(tmp.path(), OptionDimension::Shape), vec!["round"]);

        touch(&shapes, "square.svg");
        assert_eq!(
            available_slugs(tmp.path(), OptionDimension::Shape),
            vec!["round", "square"]
        );
    }
}
