//! Geode catalog loader.

use std::path::Path;

use geode_core::GeodeDefinition;
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};
use crate::provider::StaticObjectProvider;

/// Geode catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeodeCatalog {
    pub geodes: Vec<GeodeDefinition>,
}

/// Loader for geode catalogs from RON files.
pub struct CatalogLoader;

impl CatalogLoader {
    /// Load a geode catalog from a RON file.
    ///
    /// Example:
    /// ```ron
    /// (
    ///     geodes: [
    ///         (kind: 535, name: "Geode"),
    ///         (kind: 536, name: "Frozen Geode"),
    ///     ],
    /// )
    /// ```
    pub fn load(path: &Path) -> LoadResult<Vec<GeodeDefinition>> {
        let content = read_file(path)?;
        let catalog: GeodeCatalog = ron::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse geode catalog RON at {:?}: {}", path, e))?;

        Ok(catalog.geodes)
    }

    /// Load a geode catalog straight into an object provider.
    pub fn load_provider(path: &Path) -> LoadResult<StaticObjectProvider> {
        Ok(StaticObjectProvider::from_definitions(Self::load(path)?))
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use geode_core::{GeodeKind, ObjectProvider};

    use super::*;

    fn write_temp(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn loads_catalog_in_file_order() {
        let file = write_temp(
            r#"(
    geodes: [
        (kind: 535, name: "Geode"),
        (kind: 536, name: "Frozen Geode"),
        (kind: 749, name: "Omni Geode"),
    ],
)"#,
        );

        let definitions = CatalogLoader::load(file.path()).unwrap();

        assert_eq!(definitions.len(), 3);
        assert_eq!(definitions[0].kind, GeodeKind(535));
        assert_eq!(definitions[2].name, "Omni Geode");
    }

    #[test]
    fn loads_provider_directly() {
        let file = write_temp(r#"(geodes: [(kind: 535, name: "Geode")])"#);

        let provider = CatalogLoader::load_provider(file.path()).unwrap();

        assert_eq!(provider.geode_definitions().unwrap().len(), 1);
    }

    #[test]
    fn malformed_ron_names_the_path() {
        let file = write_temp("(geodes: [oops");

        let error = CatalogLoader::load(file.path()).unwrap_err();

        assert!(error.to_string().contains("Failed to parse geode catalog"));
    }

    #[test]
    fn missing_file_is_an_error() {
        let error = CatalogLoader::load(Path::new("/nonexistent/geodes.ron")).unwrap_err();

        assert!(error.to_string().contains("Failed to read file"));
    }
}
