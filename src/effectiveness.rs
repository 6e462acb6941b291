use crate::types::{effect_class, EffectClass, Type};

/// Multiplier for an attacker with `attacker` types hitting a defender with
/// `defender` types.
///
/// Every (attacking, defending) pair contributes its factor multiplicatively.
/// A single immune pairing returns 0 straight away, even when the remaining
/// pairs would be super effective: a Ground/Electric attacker scores 0 against
/// a Ground/Flying defender rather than 2. Counter search has always scored
/// dual types this way and results are expected to stay comparable, so the
/// rule is kept deliberately.
///
/// Empty slices evaluate no pairs and yield 1.0.
pub fn compute_multiplier(attacker: &[Type], defender: &[Type]) -> f64 {
    let mut multiplier = 1.0;
    for &atk in attacker {
        for &def in defender {
            match effect_class(atk, def) {
                EffectClass::Immune => return 0.0,
                class => multiplier *= class.factor(),
            }
        }
    }
    multiplier
}
