use crate::model::{Entity, RosterFile};
use crate::types::Type;
use anyhow::Context;
use std::collections::BTreeSet;
use std::path::Path;

/// Source of roster entities. Counter search depends on it but never owns it.
pub trait RosterStore {
    fn all(&self) -> anyhow::Result<Vec<Entity>>;

    /// Entities with at least one type in `types`. Fails on the first entity
    /// whose type list does not validate.
    fn with_any_type(&self, types: &BTreeSet<Type>) -> anyhow::Result<Vec<Entity>> {
        let mut matching = Vec::new();
        for entity in self.all()? {
            let set = entity.type_set()?;
            if types.iter().any(|t| set.contains(*t)) {
                matching.push(entity);
            }
        }
        Ok(matching)
    }
}

/// Roster snapshot held in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryRoster {
    entities: Vec<Entity>,
}

impl MemoryRoster {
    pub fn new(entities: Vec<Entity>) -> Self {
        MemoryRoster { entities }
    }

    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        Ok(MemoryRoster::new(load_roster(path)?))
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}

impl RosterStore for MemoryRoster {
    fn all(&self) -> anyhow::Result<Vec<Entity>> {
        Ok(self.entities.clone())
    }
}

pub fn load_roster(path: &Path) -> anyhow::Result<Vec<Entity>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read roster file at {}", path.display()))?;
    let parsed: RosterFile = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse JSON from {}", path.display()))?;
    tracing::info!(
        entities = parsed.pokemon.len(),
        path = %path.display(),
        "loaded roster"
    );
    Ok(parsed.pokemon)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CounterError;

    #[test]
    fn filters_by_any_type() {
        let store = MemoryRoster::new(vec![
            Entity::new("1", "bulbasaur", &["grass", "poison"]),
            Entity::new("4", "charmander", &["fire"]),
            Entity::new("7", "squirtle", &["water"]),
        ]);
        let wanted: BTreeSet<Type> = [Type::Poison, Type::Water].into_iter().collect();
        let ids: Vec<String> = store
            .with_any_type(&wanted)
            .unwrap()
            .into_iter()
            .map(|e| e.id)
            .collect();
        assert_eq!(ids, vec!["1", "7"]);
        assert!(store.with_any_type(&BTreeSet::new()).unwrap().is_empty());
    }

    #[test]
    fn type_filter_rejects_corrupt_entities() {
        let store = MemoryRoster::new(vec![
            Entity::new("4", "charmander", &["fire"]),
            Entity::new("9", "bad", &["fire", "plasma"]),
        ]);
        let wanted: BTreeSet<Type> = [Type::Fire].into_iter().collect();
        let err = store.with_any_type(&wanted).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CounterError>(),
            Some(CounterError::InvalidTypeSet { entity, .. }) if entity == "9"
        ));
    }
}
