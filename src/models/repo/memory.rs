use {
    rand::thread_rng,
    std::{
        collections::{BTreeMap, HashSet},
        sync::RwLock
    },
    crate::models::{
        quiz,
        filter::QuestionFilter,
        pagination::Pagination,
        db::models::{Question, NewQuestion, Category}
    },
    super::{Repository, StoreError, StoreResult, Listing}
};

pub const DEFAULT_CATEGORIES: [&str; 6] = [
    "Science",
    "Art",
    "Geography",
    "History",
    "Entertainment",
    "Sports"
];

#[derive(Debug, Default)]
struct Tables {
    categories: BTreeMap<i32, Category>,
    questions: BTreeMap<i32, Question>,
    last_question_id: i32
}

/// Keeps both tables in process. Ids are handed out like a `SERIAL` column.
#[derive(Debug, Default)]
pub struct MemoryRepository {
    tables: RwLock<Tables>
}

impl MemoryRepository {
    pub fn with_categories<I, S>(names: I) -> MemoryRepository
    where
        I: IntoIterator<Item = S>,
        S: Into<String>
    {
        let categories = names
            .into_iter()
            .zip(1..)
            .map(|(name, id)| (id, Category { id, kind: name.into() }))
            .collect();

        MemoryRepository {
            tables: RwLock::new(Tables {
                categories,
                ..Tables::default()
            })
        }
    }

    pub fn seeded() -> MemoryRepository {
        MemoryRepository::with_categories(DEFAULT_CATEGORIES)
    }
}

impl Repository for MemoryRepository {
    fn categories(&self) -> StoreResult<Vec<Category>> {
        self.tables
            .read()
            .map_err(|_| StoreError::Poisoned)
            .map(|tables| tables.categories
                .values()
                .cloned()
                .collect()
            )
    }

    fn category(&self, id: i32) -> StoreResult<Option<Category>> {
        self.tables
            .read()
            .map_err(|_| StoreError::Poisoned)
            .map(|tables| tables.categories
                .get(&id)
                .cloned()
            )
    }

    fn count_questions(&self) -> StoreResult<i64> {
        self.tables
            .read()
            .map_err(|_| StoreError::Poisoned)
            .map(|tables| tables.questions.len() as i64)
    }

    fn questions(&self, filter: &QuestionFilter, page: Pagination) -> StoreResult<Listing> {
        let tables = self.tables
            .read()
            .map_err(|_| StoreError::Poisoned)?;

        let matching = tables.questions
            .values()
            .filter(|q| filter.matches(q))
            .collect::<Vec<_>>();

        Ok(Listing {
            questions: page
                .apply(&matching)
                .iter()
                .map(|&q| q.clone())
                .collect(),
            matching: matching.len() as i64
        })
    }

    fn insert_question(&self, new: &NewQuestion) -> StoreResult<Question> {
        let mut tables = self.tables
            .write()
            .map_err(|_| StoreError::Poisoned)?;

        if !tables.categories.contains_key(&new.category) {
            return Err(StoreError::UnknownCategory(new.category));
        }

        tables.last_question_id += 1;
        let question = Question {
            id: tables.last_question_id,
            question: new.question.clone(),
            answer: new.answer.clone(),
            category: new.category,
            difficulty: new.difficulty
        };
        tables.questions.insert(question.id, question.clone());

        Ok(question)
    }

    fn delete_question(&self, id: i32) -> StoreResult<bool> {
        self.tables
            .write()
            .map_err(|_| StoreError::Poisoned)
            .map(|mut tables| tables.questions
                .remove(&id)
                .is_some()
            )
    }

    fn random_question(&self, category: Option<i32>, exclude: &[i32]) -> StoreResult<Option<Question>> {
        let tables = self.tables
            .read()
            .map_err(|_| StoreError::Poisoned)?;

        let filter = QuestionFilter::default().in_category(category);
        let previous = exclude.iter().copied().collect::<HashSet<_>>();

        Ok(quiz::pick(
            tables.questions.values().filter(|q| filter.matches(q)),
            &previous,
            &mut thread_rng()
        ).cloned())
    }
}
