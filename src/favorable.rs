use crate::error::Result;
use crate::model::Entity;
use crate::types::Type;
use std::collections::BTreeSet;

/// Types that hit at least one opposing type super effectively, minus the
/// types the opposing side already has.
///
/// This is a coarse pre-filter over the roster store: it looks only at the
/// single-type strong lists and ignores dual-type stacking, weaknesses and
/// immunities. [`crate::graph::CounterGraph`] is the precise model.
pub fn favorable_types<I>(opposing: I) -> BTreeSet<Type>
where
    I: IntoIterator<Item = Type>,
{
    let opposing: BTreeSet<Type> = opposing.into_iter().collect();
    let mut favorable: BTreeSet<Type> = opposing
        .iter()
        .flat_map(|t| t.matchup().strong_against.iter().copied())
        .collect();
    favorable.retain(|t| !opposing.contains(t));
    favorable
}

/// Union of the validated types of every team member.
pub fn opposing_types<'a, I>(team: I) -> Result<BTreeSet<Type>>
where
    I: IntoIterator<Item = &'a Entity>,
{
    let mut types = BTreeSet::new();
    for member in team {
        types.extend(member.type_set()?.as_slice().iter().copied());
    }
    Ok(types)
}
