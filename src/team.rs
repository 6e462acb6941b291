use crate::favorable::{favorable_types, opposing_types};
use crate::model::Entity;
use crate::store::RosterStore;
use rand::seq::SliceRandom;
use rand::Rng;

pub const DEFAULT_TEAM_SIZE: usize = 6;
pub const MOVES_PER_MEMBER: usize = 4;

/// An entity picked for a team, with one ability and a moveset drawn from
/// what it can learn.
#[derive(Debug, Clone)]
pub struct TeamMember {
    pub entity: Entity,
    pub ability: Option<String>,
    pub moves: Vec<String>,
}

impl TeamMember {
    pub fn roll<R: Rng + ?Sized>(entity: Entity, rng: &mut R) -> Self {
        let ability = entity.abilities.choose(rng).cloned();
        let moves = entity
            .moves
            .choose_multiple(rng, MOVES_PER_MEMBER)
            .cloned()
            .collect();
        TeamMember {
            entity,
            ability,
            moves,
        }
    }
}

fn sample<R: Rng + ?Sized>(pool: Vec<Entity>, size: usize, rng: &mut R) -> Vec<TeamMember> {
    let picked: Vec<Entity> = pool.choose_multiple(rng, size).cloned().collect();
    picked
        .into_iter()
        .map(|entity| TeamMember::roll(entity, rng))
        .collect()
}

/// Up to `size` distinct entities drawn uniformly from the whole store.
pub fn random_team<S, R>(store: &S, size: usize, rng: &mut R) -> anyhow::Result<Vec<TeamMember>>
where
    S: RosterStore + ?Sized,
    R: Rng + ?Sized,
{
    let pool = store.all()?;
    for entity in &pool {
        entity.type_set()?;
    }
    Ok(sample(pool, size, rng))
}

/// Up to `size` distinct entities carrying at least one type that is
/// favorable against `rival`.
pub fn counter_team<S, R>(
    store: &S,
    rival: &[TeamMember],
    size: usize,
    rng: &mut R,
) -> anyhow::Result<Vec<TeamMember>>
where
    S: RosterStore + ?Sized,
    R: Rng + ?Sized,
{
    let opposing = opposing_types(rival.iter().map(|m| &m.entity))?;
    let favorable = favorable_types(opposing.iter().copied());
    if favorable.is_empty() {
        tracing::warn!(?opposing, "no favorable types against rival team");
        return Ok(Vec::new());
    }
    let pool = store.with_any_type(&favorable)?;
    tracing::debug!(
        favorable = favorable.len(),
        candidates = pool.len(),
        "sampling counter team"
    );
    Ok(sample(pool, size, rng))
}
