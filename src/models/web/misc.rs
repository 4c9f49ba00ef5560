use {
    std::fmt::Display,
    super::ApiError
};

pub trait Or404<T> {
    fn or_404(self, what: impl Display) -> Result<T, ApiError>;
}

impl <T> Or404<T> for Option<T> {
    fn or_404(self, what: impl Display) -> Result<T, ApiError> {
        self.ok_or_else(|| ApiError::NotFound(format!("{} not found", what)))
    }
}
