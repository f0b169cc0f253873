#![forbid(unsafe_code)]

pub mod model;
pub mod pagination;

pub use pagination::{PageWindow, QUESTIONS_PER_PAGE, paginate};
