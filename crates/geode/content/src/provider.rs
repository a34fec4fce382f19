//! In-memory object provider backed by a fixed definition list.

use geode_core::{GeodeDefinition, ObjectProvider, OracleError};

/// Object provider serving a fixed, ordered set of geode definitions.
///
/// Order is preserved exactly as given; the catalog the service derives
/// from this provider follows it.
#[derive(Clone, Debug, Default)]
pub struct StaticObjectProvider {
    definitions: Vec<GeodeDefinition>,
}

impl StaticObjectProvider {
    pub fn new() -> Self {
        Self {
            definitions: Vec::new(),
        }
    }

    pub fn from_definitions(definitions: Vec<GeodeDefinition>) -> Self {
        Self { definitions }
    }

    pub fn push(&mut self, definition: GeodeDefinition) {
        self.definitions.push(definition);
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

impl ObjectProvider for StaticObjectProvider {
    fn geode_definitions(&self) -> Result<Vec<GeodeDefinition>, OracleError> {
        Ok(self.definitions.clone())
    }
}

#[cfg(test)]
mod tests {
    use geode_core::GeodeKind;

    use super::*;

    #[test]
    fn definitions_keep_insertion_order() {
        let mut provider = StaticObjectProvider::new();
        provider.push(GeodeDefinition::new(GeodeKind(749), "Omni Geode"));
        provider.push(GeodeDefinition::new(GeodeKind(535), "Geode"));

        let definitions = provider.geode_definitions().unwrap();

        assert_eq!(definitions.len(), 2);
        assert_eq!(definitions[0].kind, GeodeKind(749));
        assert_eq!(definitions[1].name, "Geode");
    }
}
