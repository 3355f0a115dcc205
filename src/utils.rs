use std::path::Path;

use directories::ProjectDirs;

use crate::constants::{APPLICATION, ORGANIZATION, QUALIFIER};
use crate::errors::{Result, generic_error};

/// Expand a leading `~` and environment variables in a user-supplied path
///
/// Falls back to the input unchanged when a variable cannot be resolved.
pub fn expand_home(path: &str) -> String {
    shellexpand::full(path)
        .map(|expanded| expanded.to_string())
        .unwrap_or_else(|_| path.to_string())
}

/// Locate the platform directories of the application without creating them
pub(crate) fn find_project_folder() -> Result<ProjectDirs> {
    ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
        .ok_or_else(|| generic_error("Failed to determine project directories"))
}

/// Lowercased file name of a path, if it is valid Unicode
pub(crate) fn lowercase_file_name(path: &Path) -> Option<String> {
    path.file_name()
        .and_then(|name| name.to_str())
        .map(str::to_lowercase)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_home_leaves_plain_paths() {
        assert_eq!(expand_home("pandoc"), "pandoc");
        assert_eq!(expand_home("/usr/bin/pandoc"), "/usr/bin/pandoc");
    }

    #[test]
    fn test_expand_home_unknown_variable_is_kept() {
        assert_eq!(
            expand_home("$MD2DOCX_SURELY_UNSET_VARIABLE/pandoc"),
            "$MD2DOCX_SURELY_UNSET_VARIABLE/pandoc"
        );
    }

    #[test]
    fn test_lowercase_file_name() {
        assert_eq!(
            lowercase_file_name(Path::new("docs/Readme.MD")),
            Some("readme.md".to_string())
        );
        assert_eq!(lowercase_file_name(Path::new("/")), None);
    }
}
