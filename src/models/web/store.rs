use {
    std::sync::Arc,
    derive_more::Deref,
    rocket::{
        Request,
        tokio::task,
        http::Status,
        outcome::Outcome,
        request::{self, FromRequest}
    },
    crate::models::repo::Repository,
    super::{ApiError, ApiResult}
};

/// Shared handle to whichever repository the server was started with.
#[derive(Clone, Deref)]
pub struct Store(Arc<dyn Repository>);

impl Store {
    pub fn new<R: Repository + 'static>(repo: R) -> Store {
        Store(Arc::new(repo))
    }

    /// Runs blocking repository work off the async executor.
    pub async fn run<F, T>(&self, f: F) -> ApiResult<T>
    where
        F: FnOnce(&dyn Repository) -> ApiResult<T> + Send + 'static,
        T: Send + 'static
    {
        let repo = Arc::clone(&self.0);
        task::spawn_blocking(move || f(&*repo))
            .await
            .map_err(|e| ApiError::Internal(e.to_string()))?
    }
}

#[rocket::async_trait]
impl <'r> FromRequest<'r> for Store {
    type Error = ();

    async fn from_request(request: &'r Request<'_>) -> request::Outcome<Self, Self::Error> {
        match request.rocket().state::<Store>() {
            Some(store) => Outcome::Success(store.clone()),
            None => Outcome::Error((Status::ServiceUnavailable, ()))
        }
    }
}
