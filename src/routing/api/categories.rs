use {
    serde::Serialize,
    rocket::{get, State, serde::json::Json},
    crate::models::{
        config::TriviaConfig,
        filter::QuestionFilter,
        web::{Store, ApiResult, Or404},
        db::models::Category
    },
    super::questions::QuestionPage
};

#[derive(Serialize, Debug)]
pub struct Categories {
    success: bool,
    categories: Vec<String>,
    total_categories: usize
}

pub(super) fn category_types(categories: Vec<Category>) -> Vec<String> {
    categories
        .into_iter()
        .map(|cat| cat.kind)
        .collect()
}

#[get("/categories")]
pub async fn all_categories(store: Store) -> ApiResult<Json<Categories>> {
    store.run(|repo| {
        let categories = Some(repo.categories()?)
            .filter(|cats| !cats.is_empty())
            .or_404("categories")?;

        Ok(Categories {
            success: true,
            total_categories: categories.len(),
            categories: category_types(categories)
        })
    }).await.map(Json)
}

#[get("/categories/<cat_id>/questions?<page>")]
pub async fn category_questions(cat_id: i32, page: Option<u32>, store: Store, config: &State<TriviaConfig>) -> ApiResult<Json<QuestionPage>> {
    let page = config.pagination(page);
    let store_id = config.category_ids.to_store(cat_id);

    store.run(move |repo| {
        let current = store_id
            .map(|id| repo.category(id))
            .transpose()?
            .flatten()
            .or_404(format!("category {}", cat_id))?;

        QuestionPage::load(
            repo,
            &QuestionFilter::default().in_category(Some(current.id)),
            Some(current),
            page
        )
    }).await.map(Json)
}
