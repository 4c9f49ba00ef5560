use {
    serde_json::Value,
    rocket::{
        http::Status,
        local::blocking::{Client, LocalResponse}
    },
    crate::models::{
        web::Store,
        config::TriviaConfig,
        filter::QuestionFilter,
        pagination::Pagination,
        repo::{MemoryRepository, Repository, StoreError, StoreResult, Listing},
        db::models::{Question, NewQuestion, Category}
    }
};

const QUESTIONS: [(i32, &str, &str, i32); 19] = [
    (5, "Whose autobiography is entitled 'I Know Why the Caged Bird Sings'?", "Maya Angelou", 2),
    (5, "What actor did author Anne Rice first denounce, then praise in the role of her beloved Lestat?", "Tom Cruise", 4),
    (5, "What was the title of the 1990 fantasy directed by Tim Burton about a young man with multi-bladed appendages?", "Edward Scissorhands", 3),
    (4, "What boxer's original name is Cassius Clay?", "Muhammad Ali", 1),
    (4, "Which dung beetle was worshipped by the ancient Egyptians?", "Scarab", 4),
    (4, "Whose title was 'Lord Protector' of England?", "Oliver Cromwell", 3),
    (6, "Which is the only team to play in every soccer World Cup tournament?", "Brazil", 3),
    (6, "Which country won the first ever soccer World Cup in 1930?", "Uruguay", 4),
    (4, "Who invented Peanut Butter?", "George Washington Carver", 2),
    (3, "What is the largest lake in Africa?", "Lake Victoria", 2),
    (3, "In which royal palace would you find the Hall of Mirrors?", "The Palace of Versailles", 3),
    (3, "What is the heaviest organ in the human body?", "The Liver", 4),
    (2, "La Giaconda is better known as what?", "Mona Lisa", 3),
    (2, "How many paintings did Van Gogh sell in his lifetime?", "One", 4),
    (2, "Which American artist was a pioneer of Abstract Expressionism, and a leading exponent of action painting?", "Jackson Pollock", 2),
    (1, "Who discovered penicillin?", "Alexander Fleming", 3),
    (1, "Hematology is a branch of medicine involving the study of what?", "Blood", 4),
    (1, "What is the title of the periodic table's heaviest naturally occurring element?", "Uranium", 5),
    (3, "What is the capital of Australia?", "Canberra", 2)
];

pub fn new_question(category: i32, question: &str, difficulty: i32) -> NewQuestion {
    NewQuestion {
        question: question.to_string(),
        answer: "answer".to_string(),
        category,
        difficulty
    }
}

/// Inserts the fixture questions, returned in id order.
pub fn seed_questions(store: &Store) -> Vec<Question> {
    QUESTIONS
        .iter()
        .map(|&(category, question, answer, difficulty)| store
            .insert_question(&NewQuestion {
                question: question.to_string(),
                answer: answer.to_string(),
                category,
                difficulty
            })
            .expect("fixture categories exist")
        )
        .collect()
}

pub fn client_with(store: Store, config: TriviaConfig) -> Client {
    Client::tracked(crate::mount(rocket::build(), store, config))
        .expect("valid rocket instance")
}

/// A client over a fresh in-memory store holding only the default categories.
pub fn client() -> (Client, Store) {
    let store = Store::new(MemoryRepository::seeded());
    (client_with(store.clone(), TriviaConfig::default()), store)
}

/// Every call fails the way a broken store would.
pub struct FailingRepository;

impl Repository for FailingRepository {
    fn categories(&self) -> StoreResult<Vec<Category>> {
        Err(StoreError::Poisoned)
    }

    fn category(&self, _id: i32) -> StoreResult<Option<Category>> {
        Err(StoreError::Poisoned)
    }

    fn count_questions(&self) -> StoreResult<i64> {
        Err(StoreError::Poisoned)
    }

    fn questions(&self, _filter: &QuestionFilter, _page: Pagination) -> StoreResult<Listing> {
        Err(StoreError::Poisoned)
    }

    fn insert_question(&self, _new: &NewQuestion) -> StoreResult<Question> {
        Err(StoreError::Poisoned)
    }

    fn delete_question(&self, _id: i32) -> StoreResult<bool> {
        Err(StoreError::Poisoned)
    }

    fn random_question(&self, _category: Option<i32>, _exclude: &[i32]) -> StoreResult<Option<Question>> {
        Err(StoreError::Poisoned)
    }
}

pub fn failing_client() -> Client {
    client_with(Store::new(FailingRepository), TriviaConfig::default())
}

/// Checks the status and the `{success: false, error: <code>}` body together.
pub fn assert_error(res: LocalResponse<'_>, status: Status) {
    assert_eq!(res.status(), status);

    let body = res.into_json::<Value>().expect("json error body");
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], status.code);
    assert!(body["message"].is_string());
}
