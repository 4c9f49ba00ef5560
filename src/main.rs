mod routing;
mod models;
#[cfg(test)]
mod test;

use {
    log::{info, warn},
    rocket::{Rocket, Build, routes, catchers},
    models::{
        config::TriviaConfig,
        repo::MemoryRepository,
        web::{Store, Cors}
    }
};

pub fn mount(rocket: Rocket<Build>, store: Store, config: TriviaConfig) -> Rocket<Build> {
    rocket
        .mount("/", routes![
            routing::preflight,
            routing::api::all_categories,
            routing::api::category_questions,
            routing::api::list_questions,
            routing::api::delete_question,
            routing::api::search_or_create,
            routing::api::quiz_question
        ])
        .register("/", catchers![
            routing::catchers::bad_request,
            routing::catchers::not_found,
            routing::catchers::unprocessable,
            routing::catchers::fallback
        ])
        .attach(Cors)
        .manage(store)
        .manage(config)
}

fn memory_store() -> Store {
    warn!("no database configured, questions are kept in memory and lost on shutdown");
    Store::new(MemoryRepository::seeded())
}

#[cfg(feature = "postgres")]
fn open_store(config: &TriviaConfig) -> anyhow::Result<Store> {
    match &config.database_url {
        Some(url) => models::db::PgRepository::connect(url, config.pool_size)
            .map(Store::new)
            .map_err(Into::into),
        None => Ok(memory_store())
    }
}

#[cfg(not(feature = "postgres"))]
fn open_store(config: &TriviaConfig) -> anyhow::Result<Store> {
    if config.database_url.is_some() {
        warn!("built without postgres support, ignoring the configured database");
    }
    Ok(memory_store())
}

#[rocket::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    let rocket = rocket::build();
    let config = rocket
        .figment()
        .extract::<TriviaConfig>()?
        .with_env_fallback();
    let store = open_store(&config)?;
    info!(
        "serving {} questions per page, category ids {:?}",
        config.page_size,
        config.category_ids
    );

    mount(rocket, store, config)
        .launch()
        .await
        .map_err(|e| anyhow::anyhow!(e.to_string()))?;

    Ok(())
}
