//! Resource file discovery.
//!
//! Country name resources are named `iso_3166_alpha2_<language>.properties`
//! and usually live in an `alpha2` directory.

use std::fs;
use std::path::{Path, PathBuf};

use crate::types::{Alpha2Error, Alpha2Result};

/// Language used when none is given.
pub const DEFAULT_LANGUAGE: &str = "german";

/// Returns the resource file name for a language, e.g. `german`.
pub fn resource_file_name(language: &str) -> String {
    format!("iso_3166_alpha2_{}.properties", language.trim().to_lowercase())
}

/// Finds the resource file for `language` below `base`.
///
/// Looks in `base` itself, then in `base/alpha2`, then one directory level
/// deeper in each subdirectory's `alpha2`.
pub fn find_resource<P: AsRef<Path>>(base: P, language: &str) -> Alpha2Result<PathBuf> {
    let base = base.as_ref();

    if !base.is_dir() {
        return Err(Alpha2Error::DirectoryNotFound {
            path: base.display().to_string(),
        });
    }

    let file_name = resource_file_name(language);

    let direct = base.join(&file_name);
    if direct.is_file() {
        return Ok(direct);
    }

    let alpha2 = base.join("alpha2").join(&file_name);
    if alpha2.is_file() {
        return Ok(alpha2);
    }

    for entry in fs::read_dir(base)? {
        let entry = entry?;
        if entry.file_type()?.is_dir() {
            let candidate = entry.path().join("alpha2").join(&file_name);
            if candidate.is_file() {
                return Ok(candidate);
            }
        }
    }

    Err(Alpha2Error::FileNotFound {
        path: base.join(file_name).display().to_string(),
    })
}

/// Lists the languages for which `dir` holds a resource file.
pub fn available_languages<P: AsRef<Path>>(dir: P) -> Alpha2Result<Vec<String>> {
    let dir = dir.as_ref();

    if !dir.is_dir() {
        return Err(Alpha2Error::DirectoryNotFound {
            path: dir.display().to_string(),
        });
    }

    let mut languages = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let filename = entry.file_name();
        if let Some(language) = extract_language(&filename.to_string_lossy()) {
            languages.push(language);
        }
    }
    languages.sort();

    Ok(languages)
}

/// Extracts the language from a resource file name.
fn extract_language(filename: &str) -> Option<String> {
    let language = filename
        .strip_prefix("iso_3166_alpha2_")?
        .strip_suffix(".properties")?;

    if language.is_empty() {
        None
    } else {
        Some(language.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn data_dir() -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR")).join("../../data")
    }

    #[test]
    fn test_resource_file_name() {
        assert_eq!(resource_file_name("german"), "iso_3166_alpha2_german.properties");
        assert_eq!(resource_file_name(" German "), "iso_3166_alpha2_german.properties");
    }

    #[test]
    fn test_extract_language() {
        assert_eq!(
            extract_language("iso_3166_alpha2_german.properties"),
            Some("german".to_string())
        );
        assert_eq!(extract_language("iso_3166_alpha2_.properties"), None);
        assert_eq!(extract_language("iso_3166_alpha3_german.properties"), None);
        assert_eq!(extract_language("README.md"), None);
    }

    #[test]
    fn test_find_bundled_resource() {
        let path = find_resource(data_dir(), DEFAULT_LANGUAGE).unwrap();
        assert!(path.ends_with("iso_3166_alpha2_german.properties"));
    }

    #[test]
    fn test_find_missing_language() {
        let result = find_resource(data_dir(), "klingon");
        assert!(matches!(result, Err(Alpha2Error::FileNotFound { .. })));
    }

    #[test]
    fn test_find_in_missing_directory() {
        let result = find_resource("no/such/dir", DEFAULT_LANGUAGE);
        assert!(matches!(result, Err(Alpha2Error::DirectoryNotFound { .. })));
    }

    #[test]
    fn test_available_languages() {
        let languages = available_languages(data_dir()).unwrap();
        assert!(languages.contains(&"german".to_string()));
    }
}
