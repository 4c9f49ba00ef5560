use {
    serde::{Serialize, Deserialize},
    rocket::{get, post, delete, State, serde::json::Json},
    crate::models::{
        config::TriviaConfig,
        filter::QuestionFilter,
        pagination::Pagination,
        repo::Repository,
        web::{Store, ApiError, ApiResult, Or404},
        db::models::{Question, NewQuestion, Category}
    },
    super::categories::category_types
};

#[derive(Serialize, Debug)]
pub struct QuestionPage {
    success: bool,
    questions: Vec<Question>,
    total_questions: i64,
    matching_questions: i64,
    current_category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    categories: Option<Vec<String>>
}

impl QuestionPage {
    pub fn load(repo: &dyn Repository, filter: &QuestionFilter, current: Option<Category>, page: Pagination) -> ApiResult<QuestionPage> {
        let listing = repo.questions(filter, page)?;

        Ok(QuestionPage {
            success: true,
            questions: listing.questions,
            total_questions: repo.count_questions()?,
            matching_questions: listing.matching,
            current_category: current.map(|cat| cat.kind),
            categories: None
        })
    }

    fn with_categories(mut self, categories: Vec<Category>) -> QuestionPage {
        self.categories = Some(category_types(categories));
        self
    }
}

fn current_category(repo: &dyn Repository, id: Option<i32>) -> ApiResult<Option<Category>> {
    id.map(|id| repo
        .category(id)?
        .or_404(format!("category {}", id))
    ).transpose()
}

#[get("/questions?<page>&<category>")]
pub async fn list_questions(page: Option<u32>, category: Option<i32>, store: Store, config: &State<TriviaConfig>) -> ApiResult<Json<QuestionPage>> {
    let page = config.pagination(page);

    store.run(move |repo| {
        let current = current_category(repo, category)?;
        let filter = QuestionFilter::default().in_category(category);

        Ok(QuestionPage::load(repo, &filter, current, page)?
            .with_categories(repo.categories()?))
    }).await.map(Json)
}

#[derive(Serialize, Debug)]
pub struct Deleted {
    success: bool,
    deleted: i32
}

#[delete("/questions/<id>")]
pub async fn delete_question(id: Result<i32, &str>, store: Store) -> ApiResult<Json<Deleted>> {
    let id = id.map_err(|raw| ApiError::BadRequest(format!("'{}' is not a question id", raw)))?;

    store.run(move |repo| {
        let existed = repo
            .delete_question(id)
            .map_err(ApiError::bad_request)?;

        Some(Deleted { success: true, deleted: id })
            .filter(|_| existed)
            .or_404(format!("question {}", id))
    }).await.map(Json)
}

/// `POST /questions` either searches or creates, depending on whether a search term is present.
#[derive(Deserialize, Debug)]
#[serde(untagged)]
pub enum QuestionsBody {
    Search {
        #[serde(rename = "searchTerm")]
        search_term: String,
        #[serde(default)]
        category_id: Option<i32>
    },
    Create(NewQuestion)
}

#[derive(Serialize, Debug)]
pub struct Created {
    success: bool,
    id: i32
}

#[derive(Serialize, Debug)]
#[serde(untagged)]
pub enum QuestionsReply {
    Found(QuestionPage),
    Created(Created)
}

fn create(repo: &dyn Repository, new: NewQuestion) -> ApiResult<Created> {
    let new = new
        .validated()
        .map_err(|e| ApiError::Unprocessable(e.to_string()))?;

    if repo.category(new.category)?.is_none() {
        return Err(ApiError::Unprocessable(format!("no category with id {}", new.category)));
    }

    repo.insert_question(&new)
        .map(|question| Created { success: true, id: question.id })
        .map_err(ApiError::from)
}

#[post("/questions?<page>", data = "<body>")]
pub async fn search_or_create(page: Option<u32>, body: Json<QuestionsBody>, store: Store, config: &State<TriviaConfig>) -> ApiResult<Json<QuestionsReply>> {
    let page = config.pagination(page);

    store.run(move |repo| match body.into_inner() {
        QuestionsBody::Search { search_term, category_id } => {
            let current = current_category(repo, category_id)?;
            let filter = QuestionFilter::default()
                .in_category(category_id)
                .containing(Some(search_term));

            QuestionPage::load(repo, &filter, current, page)
                .map(QuestionsReply::Found)
        }
        QuestionsBody::Create(new) => create(repo, new)
            .map(QuestionsReply::Created)
    }).await.map(Json)
}
