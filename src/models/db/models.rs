use {
    thiserror::Error,
    serde::{Serialize, Deserialize},
    diesel::{Identifiable, Queryable, Insertable},
    super::schema::{questions, categories}
};

pub const MIN_DIFFICULTY: i32 = 1;
pub const MAX_DIFFICULTY: i32 = 5;

#[derive(Identifiable, Queryable, Serialize, PartialEq, Eq, Clone, Debug)]
#[diesel(table_name = questions)]
pub struct Question {
    pub id: i32,
    pub question: String,
    pub answer: String,
    pub category: i32,
    pub difficulty: i32
}

#[derive(Insertable, Deserialize, PartialEq, Eq, Clone, Debug)]
#[diesel(table_name = questions)]
pub struct NewQuestion {
    pub question: String,
    pub answer: String,
    pub category: i32,
    pub difficulty: i32
}

#[derive(Identifiable, Queryable, Serialize, PartialEq, Eq, Clone, Debug)]
#[diesel(table_name = categories)]
pub struct Category {
    pub id: i32,
    #[serde(rename = "type")]
    pub kind: String
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Invalid {
    #[error("question text must not be empty")]
    BlankQuestion,
    #[error("answer must not be empty")]
    BlankAnswer,
    #[error("difficulty {0} is outside {min}..={max}", min = MIN_DIFFICULTY, max = MAX_DIFFICULTY)]
    Difficulty(i32)
}

impl NewQuestion {
    /// Trims both texts and checks the fields the store can't check for us.
    pub fn validated(self) -> Result<NewQuestion, Invalid> {
        let question = self.question.trim().to_string();
        let answer = self.answer.trim().to_string();

        if question.is_empty() {
            Err(Invalid::BlankQuestion)
        } else if answer.is_empty() {
            Err(Invalid::BlankAnswer)
        } else if !(MIN_DIFFICULTY..=MAX_DIFFICULTY).contains(&self.difficulty) {
            Err(Invalid::Difficulty(self.difficulty))
        } else {
            Ok(NewQuestion { question, answer, ..self })
        }
    }
}
