mod category;
mod ids;
mod question;
mod quiz;

pub use ids::{CategoryId, ParseIdError, QuestionId};

pub use category::{Category, CategoryError};
pub use question::{Difficulty, NewQuestion, Question, QuestionDraft, QuestionError};
pub use quiz::QuizRound;
