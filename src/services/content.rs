//! Loading of the site content served to the page.

use std::path::Path;

use crate::models::SiteContent;

#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("Failed to read content file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid content file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("Content file {path} has no {what}")]
    Incomplete { path: String, what: &'static str },
}

/// Reads a full `SiteContent` from a JSON file.
pub fn load_from_file(path: &Path) -> Result<SiteContent, ContentError> {
    let display = path.display().to_string();
    let raw = std::fs::read_to_string(path).map_err(|source| ContentError::Io {
        path: display.clone(),
        source,
    })?;
    let content: SiteContent = serde_json::from_str(&raw).map_err(|source| ContentError::Parse {
        path: display.clone(),
        source,
    })?;

    // The presentation screen and the nav bar cannot render anything useful
    // without these.
    if content.presentation.languages.is_empty() {
        return Err(ContentError::Incomplete {
            path: display,
            what: "presentation languages",
        });
    }
    if content.nav.is_empty() {
        return Err(ContentError::Incomplete {
            path: display,
            what: "navigation items",
        });
    }
    Ok(content)
}

/// Content override from `path` when given, the built-in content otherwise.
/// A broken override is logged and ignored so the site still comes up.
pub fn resolve(path: Option<&Path>) -> SiteContent {
    let Some(path) = path else {
        tracing::info!("Using built-in site content");
        return SiteContent::default();
    };
    match load_from_file(path) {
        Ok(content) => {
            tracing::info!(path = %path.display(), "Loaded site content");
            content
        }
        Err(e) => {
            tracing::error!(error = %e, "Falling back to built-in site content");
            SiteContent::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn loads_serialized_content() {
        let mut content = SiteContent::default();
        content.hero.title = "A quieter variant".into();
        let file = write_temp(&serde_json::to_string(&content).unwrap());

        let loaded = load_from_file(file.path()).unwrap();
        assert_eq!(loaded.hero.title, "A quieter variant");
        assert_eq!(loaded, content);
    }

    #[test]
    fn reports_parse_errors() {
        let file = write_temp("{ \"brand\": 42 }");
        let err = load_from_file(file.path()).unwrap_err();
        assert!(matches!(err, ContentError::Parse { .. }), "{err}");
    }

    #[test]
    fn reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_from_file(&dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, ContentError::Io { .. }));
    }

    #[test]
    fn rejects_content_without_languages() {
        let mut content = SiteContent::default();
        content.presentation.languages.clear();
        let file = write_temp(&serde_json::to_string(&content).unwrap());

        let err = load_from_file(file.path()).unwrap_err();
        assert!(matches!(
            err,
            ContentError::Incomplete {
                what: "presentation languages",
                ..
            }
        ));
    }

    #[test]
    fn resolve_falls_back_on_bad_override() {
        let file = write_temp("not json");
        assert_eq!(resolve(Some(file.path())), SiteContent::default());
        assert_eq!(resolve(None), SiteContent::default());
    }
}
