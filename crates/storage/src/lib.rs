#![forbid(unsafe_code)]

pub mod fixtures;
pub mod repository;
pub mod sqlite;

pub use repository::{
    CategoryRepository, InMemoryRepository, NewQuestionRecord, QuestionRepository, Storage,
    StorageError,
};
