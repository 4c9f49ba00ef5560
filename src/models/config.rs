use {
    serde::Deserialize,
    super::pagination::{Pagination, DEFAULT_PAGE_SIZE}
};

/// How category ids sent to `/categories/<id>/questions` and `/quizzes`
/// relate to the ids in the store.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum CategoryIds {
    /// Clients send a 0-based index, the store id is one higher.
    #[default]
    ZeroBased,
    /// Clients send store ids.
    Store
}

impl CategoryIds {
    pub fn to_store(self, client_id: i32) -> Option<i32> {
        match self {
            CategoryIds::ZeroBased => client_id.checked_add(1),
            CategoryIds::Store => Some(client_id)
        }
    }
}

#[derive(Deserialize, Debug, Clone)]
pub struct TriviaConfig {
    #[serde(default = "default_page_size")]
    pub page_size: u32,
    #[serde(default)]
    pub category_ids: CategoryIds,
    #[serde(default)]
    pub database_url: Option<String>,
    #[serde(default = "default_pool_size")]
    pub pool_size: u32
}

fn default_page_size() -> u32 {
    DEFAULT_PAGE_SIZE
}

fn default_pool_size() -> u32 {
    8
}

impl Default for TriviaConfig {
    fn default() -> TriviaConfig {
        TriviaConfig {
            page_size: default_page_size(),
            category_ids: CategoryIds::default(),
            database_url: None,
            pool_size: default_pool_size()
        }
    }
}

impl TriviaConfig {
    /// Fills in `database_url` from the diesel-conventional `DATABASE_URL`
    /// if the figment didn't carry one.
    pub fn with_env_fallback(mut self) -> TriviaConfig {
        if self.database_url.is_none() {
            self.database_url = std::env::var("DATABASE_URL").ok();
        }
        self
    }

    pub fn pagination(&self, page: Option<u32>) -> Pagination {
        Pagination::new(page, self.page_size)
    }
}

#[cfg(test)]
mod test {
    use {
        super::*,
        rocket::figment::{Figment, providers::{Format, Toml}}
    };

    #[test]
    fn zero_based_ids_are_offset() {
        assert_eq!(CategoryIds::ZeroBased.to_store(0), Some(1));
        assert_eq!(CategoryIds::ZeroBased.to_store(i32::MAX), None);
        assert_eq!(CategoryIds::Store.to_store(3), Some(3));
    }

    #[test]
    fn extracts_from_toml() {
        let config: TriviaConfig = Figment::new()
            .merge(Toml::string(r#"
                page_size = 5
                category_ids = "store"
            "#))
            .extract()
            .unwrap();

        assert_eq!(config.page_size, 5);
        assert_eq!(config.category_ids, CategoryIds::Store);
        assert_eq!(config.pool_size, 8);
        assert!(config.database_url.is_none());
    }

    #[test]
    fn defaults_keep_offset() {
        let config: TriviaConfig = Figment::new().extract().unwrap();

        assert_eq!(config.page_size, DEFAULT_PAGE_SIZE);
        assert_eq!(config.category_ids, CategoryIds::ZeroBased);
    }
}
