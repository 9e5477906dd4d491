//! Picking the next quiz question.

use std::collections::HashSet;

use rand::seq::IteratorRandom;
use rand::Rng;

use crate::db::Question;

/// Category id that stands for "every category" in a quiz request.
pub const ALL_CATEGORIES: i64 = 0;

/// Chooses uniformly among the candidates that were not served yet.
///
/// `None` means the quiz is exhausted. Duplicate or foreign ids in `previous`
/// only shrink the eligible set, they never make the choice fail.
pub fn pick_next<R: Rng + ?Sized>(
    candidates: Vec<Question>,
    previous: &[i64],
    rng: &mut R,
) -> Option<Question> {
    let served: HashSet<i64> = previous.iter().copied().collect();
    candidates
        .into_iter()
        .filter(|question| !served.contains(&question.id))
        .choose(rng)
}
