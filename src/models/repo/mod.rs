mod memory;

pub use memory::MemoryRepository;

use {
    thiserror::Error,
    super::{
        filter::QuestionFilter,
        pagination::Pagination,
        db::models::{Question, NewQuestion, Category}
    }
};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("query failed: {0}")]
    Query(#[from] diesel::result::Error),
    #[cfg(feature = "postgres")]
    #[error("no database connection available: {0}")]
    Pool(#[from] diesel::r2d2::PoolError),
    #[error("no category with id {0}")]
    UnknownCategory(i32),
    #[error("store lock poisoned")]
    Poisoned
}

pub type StoreResult<T> = Result<T, StoreError>;

/// One page of questions plus the number of questions matching the filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Listing {
    pub questions: Vec<Question>,
    pub matching: i64
}

pub trait Repository: Send + Sync {
    /// All categories, ordered by id.
    fn categories(&self) -> StoreResult<Vec<Category>>;

    fn category(&self, id: i32) -> StoreResult<Option<Category>>;

    fn count_questions(&self) -> StoreResult<i64>;

    /// Questions matching `filter`, ordered by id, cut down to `page`.
    fn questions(&self, filter: &QuestionFilter, page: Pagination) -> StoreResult<Listing>;

    fn insert_question(&self, new: &NewQuestion) -> StoreResult<Question>;

    /// Returns whether a question with that id existed.
    fn delete_question(&self, id: i32) -> StoreResult<bool>;

    /// A uniformly random question in `category` (or any category) whose id isn't in `exclude`.
    fn random_question(&self, category: Option<i32>, exclude: &[i32]) -> StoreResult<Option<Question>>;
}
