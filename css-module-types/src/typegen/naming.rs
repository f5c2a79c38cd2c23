//! Naming conventions for stylesheets and their declaration files

use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// File name suffix identifying a CSS Module
pub const STYLESHEET_SUFFIX: &str = ".module.css";

/// Extension appended to a stylesheet path to form its declaration path
pub const DECLARATION_EXTENSION: &str = ".d.ts";

/// Literal appended to every derived interface name
pub const INTERFACE_SUFFIX: &str = "Styles";

/// Whether a file name follows the CSS Module naming convention
#[must_use]
pub fn is_stylesheet_name(file_name: &str) -> bool {
    file_name.ends_with(STYLESHEET_SUFFIX)
}

/// Derive the interface name from a stylesheet base name (suffix already stripped)
///
/// Each `-` separated segment gets its first character upper-cased; the rest
/// of the segment is kept as is.
///
/// # Examples
///
/// ```
/// # use css_module_types::typegen::naming::interface_name;
/// assert_eq!(interface_name("user-profile"), "UserProfileStyles");
/// assert_eq!(interface_name("navBar"), "NavBarStyles");
/// assert_eq!(interface_name(""), "Styles");
/// ```
#[must_use]
pub fn interface_name(base_name: &str) -> String {
    let mut name: String = base_name.split('-').map(capitalize).collect();
    name.push_str(INTERFACE_SUFFIX);
    name
}

/// Derive the interface name for a stylesheet path
///
/// # Examples
///
/// ```
/// # use std::path::Path;
/// # use css_module_types::typegen::naming::interface_name_for;
/// assert_eq!(interface_name_for(Path::new("src/card-header.module.css")), "CardHeaderStyles");
/// ```
#[must_use]
pub fn interface_name_for(stylesheet: &Path) -> String {
    let file_name = stylesheet
        .file_name()
        .map(|name| name.to_string_lossy())
        .unwrap_or_default();
    let base = file_name
        .strip_suffix(STYLESHEET_SUFFIX)
        .unwrap_or(file_name.as_ref());
    interface_name(base)
}

/// Path of the declaration file generated for a stylesheet
///
/// # Examples
///
/// ```
/// # use std::path::{Path, PathBuf};
/// # use css_module_types::typegen::naming::declaration_path;
/// assert_eq!(
///     declaration_path(Path::new("src/button.module.css")),
///     PathBuf::from("src/button.module.css.d.ts")
/// );
/// ```
#[must_use]
pub fn declaration_path(stylesheet: &Path) -> PathBuf {
    let mut path = OsString::from(stylesheet.as_os_str());
    path.push(DECLARATION_EXTENSION);
    PathBuf::from(path)
}

fn capitalize(segment: &str) -> String {
    let mut chars = segment.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interface_name_single_segment() {
        assert_eq!(interface_name_for(Path::new("button.module.css")), "ButtonStyles");
    }

    #[test]
    fn test_interface_name_hyphenated() {
        assert_eq!(
            interface_name_for(Path::new("card-header.module.css")),
            "CardHeaderStyles"
        );
        assert_eq!(
            interface_name_for(Path::new("/abs/src/user-profile.module.css")),
            "UserProfileStyles"
        );
    }

    #[test]
    fn test_interface_name_empty_base() {
        assert_eq!(interface_name(""), "Styles");
        assert_eq!(interface_name_for(Path::new("src/.module.css")), "Styles");
    }

    #[test]
    fn test_interface_name_keeps_rest_of_segment() {
        assert_eq!(interface_name("myHTML-panel"), "MyHTMLPanelStyles");
        assert_eq!(interface_name("nav_bar"), "Nav_barStyles");
    }

    #[test]
    fn test_interface_name_empty_segments() {
        assert_eq!(interface_name("a--b"), "ABStyles");
        assert_eq!(interface_name("-lead"), "LeadStyles");
    }

    #[test]
    fn test_is_stylesheet_name() {
        assert!(is_stylesheet_name("button.module.css"));
        assert!(is_stylesheet_name(".module.css"));
        assert!(!is_stylesheet_name("button.css"));
        assert!(!is_stylesheet_name("button.module.css.d.ts"));
        assert!(!is_stylesheet_name("button.module.scss"));
    }

    #[test]
    fn test_declaration_path_only_touches_file_name() {
        assert_eq!(
            declaration_path(Path::new("src/theme.module.css/card.module.css")),
            PathBuf::from("src/theme.module.css/card.module.css.d.ts")
        );
    }
}
