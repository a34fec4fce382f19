//! Standard catalog derivation from an object provider.

use geode_core::{GeodeKind, GeodeService, ObjectProvider, OracleError};

/// Derives the geode catalog in provider order, dropping duplicate kinds.
///
/// A provider with no geodes at all is an [`OracleError::EmptyCatalog`]:
/// a predictor built over nothing has nothing to predict.
#[derive(Clone, Copy, Debug, Default)]
pub struct StandardGeodeService;

impl GeodeService for StandardGeodeService {
    fn retrieve_geodes(
        &self,
        provider: &dyn ObjectProvider,
    ) -> Result<Vec<GeodeKind>, OracleError> {
        let definitions = provider.geode_definitions()?;

        let mut kinds: Vec<GeodeKind> = Vec::with_capacity(definitions.len());
        for definition in definitions {
            // First occurrence wins the catalog slot.
            if !kinds.contains(&definition.kind) {
                kinds.push(definition.kind);
            }
        }

        if kinds.is_empty() {
            return Err(OracleError::EmptyCatalog);
        }
        Ok(kinds)
    }
}

#[cfg(test)]
mod tests {
    use geode_core::GeodeDefinition;

    use super::*;
    use crate::provider::StaticObjectProvider;

    #[test]
    fn catalog_follows_provider_order() {
        let provider = StaticObjectProvider::from_definitions(vec![
            GeodeDefinition::new(GeodeKind(536), "Frozen Geode"),
            GeodeDefinition::new(GeodeKind(535), "Geode"),
            GeodeDefinition::new(GeodeKind(537), "Magma Geode"),
        ]);

        let kinds = StandardGeodeService.retrieve_geodes(&provider).unwrap();

        assert_eq!(kinds, vec![GeodeKind(536), GeodeKind(535), GeodeKind(537)]);
    }

    #[test]
    fn duplicate_kinds_are_dropped() {
        let provider = StaticObjectProvider::from_definitions(vec![
            GeodeDefinition::new(GeodeKind(535), "Geode"),
            GeodeDefinition::new(GeodeKind(535), "Geode (duplicate)"),
            GeodeDefinition::new(GeodeKind(749), "Omni Geode"),
        ]);

        let kinds = StandardGeodeService.retrieve_geodes(&provider).unwrap();

        assert_eq!(kinds, vec![GeodeKind(535), GeodeKind(749)]);
    }

    #[test]
    fn empty_provider_is_an_error() {
        let provider = StaticObjectProvider::new();

        let result = StandardGeodeService.retrieve_geodes(&provider);

        assert_eq!(result, Err(OracleError::EmptyCatalog));
    }
}
