use crate::models::db::models::Question;

/// Predicates over questions, combined with AND. `None` leaves a predicate out.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct QuestionFilter {
    pub category: Option<i32>,
    pub search: Option<String>
}

impl QuestionFilter {
    pub fn in_category(mut self, category: Option<i32>) -> QuestionFilter {
        self.category = category;
        self
    }

    pub fn containing<S: Into<String>>(mut self, term: Option<S>) -> QuestionFilter {
        self.search = term.map(Into::into);
        self
    }

    pub fn matches(&self, question: &Question) -> bool {
        self.category
            .map_or(true, |cat| question.category == cat)
            && self.search
                .as_ref()
                .map_or(true, |term| question.question
                    .to_lowercase()
                    .contains(&term.to_lowercase())
                )
    }

    /// `ILIKE` pattern matching the search term anywhere, taken literally.
    pub fn like_pattern(&self) -> Option<String> {
        self.search
            .as_ref()
            .map(|term| format!("%{}%", escape_like(term)))
    }
}

fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
