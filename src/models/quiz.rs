use {
    log::debug,
    serde::Deserialize,
    std::collections::HashSet,
    rand::{Rng, seq::IteratorRandom},
    super::{
        config::CategoryIds,
        repo::{Repository, StoreResult},
        db::models::Question
    }
};

/// Clients also send the category's `type`, only the id matters here.
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
pub struct QuizCategory {
    #[serde(default)]
    pub id: Option<i32>
}

#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
pub struct QuizRequest {
    #[serde(default)]
    pub previous_questions: Vec<i32>,
    #[serde(default)]
    pub quiz_category: Option<QuizCategory>
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pool {
    All,
    Category(i32),
    /// The client's category id has no store id, nothing can qualify.
    Empty
}

impl QuizRequest {
    pub fn pool(&self, ids: CategoryIds) -> Pool {
        match self.quiz_category.as_ref().and_then(|cat| cat.id) {
            None => Pool::All,
            Some(client_id) => ids
                .to_store(client_id)
                .map_or(Pool::Empty, Pool::Category)
        }
    }
}

/// Uniformly picks one question from `pool` that isn't in `previous`.
pub fn pick<'a, I, R>(pool: I, previous: &HashSet<i32>, rng: &mut R) -> Option<&'a Question>
where
    I: IntoIterator<Item = &'a Question>,
    R: Rng + ?Sized
{
    pool.into_iter()
        .filter(|q| !previous.contains(&q.id))
        .choose(rng)
}

pub fn next_question(repo: &dyn Repository, request: &QuizRequest, ids: CategoryIds) -> StoreResult<Option<Question>> {
    let question = match request.pool(ids) {
        Pool::Empty => None,
        Pool::All => repo.random_question(None, &request.previous_questions)?,
        Pool::Category(cat) => repo.random_question(Some(cat), &request.previous_questions)?
    };

    debug!(
        "quiz: {} previous, picked {:?}",
        request.previous_questions.len(),
        question.as_ref().map(|q| q.id)
    );

    Ok(question)
}
