use crate::trivia::core::Question;
use rand::Rng;

/// Ids of questions the player has already seen, sorted and de-duplicated
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PreviousQuestions {
    ids: Vec<i64>,
}

impl PreviousQuestions {
    pub fn new(ids: impl IntoIterator<Item = i64>) -> Self {
        let mut ids: Vec<i64> = ids.into_iter().collect();
        ids.sort_unstable();
        ids.dedup();
        Self { ids }
    }

    pub fn as_slice(&self) -> &[i64] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

/// Picks one of the unseen candidates uniformly at random.
/// Returns None once the quiz is exhausted.
pub fn draw<R: Rng>(mut candidates: Vec<Question>, rng: &mut R) -> Option<Question> {
    if candidates.is_empty() {
        return None;
    }
    let index = rng.random_range(0..candidates.len());
    Some(candidates.swap_remove(index))
}
