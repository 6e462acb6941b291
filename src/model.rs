use crate::error::{CounterError, Result};
use crate::types::Type;
use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};

/// Roster member as supplied by the roster store.
///
/// Types stay as raw names here; [`Entity::type_set`] turns them into a
/// validated [`TypeSet`].
#[derive(Debug, Clone, Deserialize)]
pub struct Entity {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub types: Vec<String>,
    #[serde(default)]
    pub abilities: Vec<String>,
    #[serde(default)]
    pub moves: Vec<String>,
    #[serde(default)]
    pub stats: BTreeMap<String, i64>,
    #[serde(flatten, default)]
    pub extras: HashMap<String, serde_json::Value>,
}

impl Entity {
    pub fn new(id: impl Into<String>, name: impl Into<String>, types: &[&str]) -> Self {
        Entity {
            id: id.into(),
            name: name.into(),
            types: types.iter().map(|t| t.to_string()).collect(),
            abilities: Vec::new(),
            moves: Vec::new(),
            stats: BTreeMap::new(),
            extras: HashMap::new(),
        }
    }

    pub fn type_set(&self) -> Result<TypeSet> {
        if self.id.trim().is_empty() {
            return Err(CounterError::InvalidIdentifier {
                name: self.name.clone(),
            });
        }
        TypeSet::parse(&self.types).map_err(|reason| CounterError::InvalidTypeSet {
            entity: self.id.clone(),
            reason,
        })
    }
}

/// One or two distinct types, in the order the roster lists them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeSet {
    types: [Type; 2],
    len: usize,
}

impl TypeSet {
    pub fn single(t: Type) -> Self {
        TypeSet {
            types: [t, t],
            len: 1,
        }
    }

    pub fn dual(first: Type, second: Type) -> Option<Self> {
        if first == second {
            return None;
        }
        Some(TypeSet {
            types: [first, second],
            len: 2,
        })
    }

    fn parse<S: AsRef<str>>(names: &[S]) -> std::result::Result<Self, String> {
        let mut parsed = Vec::with_capacity(names.len());
        for name in names {
            let name = name.as_ref();
            let t = Type::from_name(name).ok_or_else(|| format!("unknown type {name:?}"))?;
            parsed.push(t);
        }
        match parsed.as_slice() {
            [] => Err("no types".to_string()),
            [t] => Ok(TypeSet::single(*t)),
            [a, b] => TypeSet::dual(*a, *b).ok_or_else(|| format!("type {a} listed twice")),
            more => Err(format!("{} types, at most 2 allowed", more.len())),
        }
    }

    pub fn as_slice(&self) -> &[Type] {
        &self.types[..self.len]
    }

    pub fn contains(&self, t: Type) -> bool {
        self.as_slice().contains(&t)
    }
}

/// On-disk roster snapshot.
#[derive(Debug, Deserialize)]
pub struct RosterFile {
    pub pokemon: Vec<Entity>,
    #[serde(flatten, default)]
    pub extras: HashMap<String, serde_json::Value>,
}
