//! Sample trivia data for local development and tests.

use trivia_core::model::{Category, CategoryId};

use crate::repository::{NewQuestionRecord, Storage, StorageError};

/// `(id, type)` pairs for the stock categories.
pub const SAMPLE_CATEGORIES: &[(u64, &str)] = &[
    (1, "Science"),
    (2, "Art"),
    (3, "Geography"),
    (4, "History"),
    (5, "Entertainment"),
    (6, "Sports"),
];

/// `(question, answer, category, difficulty)` rows, inserted in this order.
pub const SAMPLE_QUESTIONS: &[(&str, &str, u64, u8)] = &[
    (
        "Whose autobiography is entitled 'I Know Why the Caged Bird Sings'?",
        "Maya Angelou",
        4,
        2,
    ),
    (
        "What boxer's original name is Cassius Clay?",
        "Muhammad Ali",
        4,
        1,
    ),
    (
        "What movie earned Tom Hanks his third straight Oscar nomination, in 1996?",
        "Apollo 13",
        5,
        4,
    ),
    (
        "What actor did author Anne Rice first denounce, then praise in the role of her beloved Lestat?",
        "Tom Cruise",
        5,
        4,
    ),
    (
        "Which is the only team to play in every soccer World Cup tournament?",
        "Brazil",
        6,
        3,
    ),
    (
        "Which country won the first ever soccer World Cup in 1930?",
        "Uruguay",
        6,
        4,
    ),
    (
        "Who invented hundreds of products made from the peanut?",
        "George Washington Carver",
        4,
        2,
    ),
    (
        "What is the largest lake in Africa?",
        "Lake Victoria",
        3,
        2,
    ),
    (
        "In which royal palace would you find the Hall of Mirrors?",
        "The Palace of Versailles",
        3,
        3,
    ),
    (
        "The Taj Mahal is located in which Indian city?",
        "Agra",
        3,
        2,
    ),
    (
        "Which Dutch graphic artist, initials M C, was a creator of optical illusions?",
        "Escher",
        2,
        1,
    ),
    (
        "La Giaconda is better known as what?",
        "Mona Lisa",
        2,
        3,
    ),
    (
        "How many paintings did Van Gogh sell in his lifetime?",
        "One",
        2,
        4,
    ),
    (
        "Which American artist was a pioneer of Abstract Expressionism, and a leading exponent of action painting?",
        "Jackson Pollock",
        2,
        2,
    ),
    (
        "What is the heaviest organ in the human body?",
        "The Liver",
        1,
        4,
    ),
    (
        "Who discovered penicillin?",
        "Alexander Fleming",
        1,
        3,
    ),
    (
        "Hematology is a branch of medicine involving the study of what?",
        "Blood",
        1,
        4,
    ),
    (
        "Which dung beetle was worshipped by the ancient Egyptians?",
        "Scarab",
        4,
        4,
    ),
    (
        "What is the chemical symbol for gold?",
        "Au",
        1,
        1,
    ),
    (
        "Which planet is closest to the sun?",
        "Mercury",
        1,
        1,
    ),
];

/// What a seeding run inserted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub categories: usize,
    pub questions: usize,
}

/// Load the sample categories and questions into an empty store.
///
/// Categories are always upserted. Questions are only inserted when the
/// store holds none, so running this twice does not duplicate rows.
///
/// # Errors
///
/// Returns `StorageError` if any write fails.
pub async fn seed_sample_data(storage: &Storage) -> Result<SeedReport, StorageError> {
    let mut report = SeedReport::default();

    for (id, kind) in SAMPLE_CATEGORIES {
        let category = Category::new(CategoryId::new(*id), *kind)
            .map_err(|e| StorageError::Serialization(e.to_string()))?;
        storage.categories.upsert_category(&category).await?;
        report.categories += 1;
    }

    if storage.questions.count_questions().await? > 0 {
        tracing::info!("questions already present, skipping sample questions");
        return Ok(report);
    }

    for (question, answer, category, difficulty) in SAMPLE_QUESTIONS {
        storage
            .questions
            .insert_new_question(NewQuestionRecord {
                question: (*question).to_string(),
                answer: (*answer).to_string(),
                category: CategoryId::new(*category),
                difficulty: *difficulty,
            })
            .await?;
        report.questions += 1;
    }

    tracing::info!(
        categories = report.categories,
        questions = report.questions,
        "seeded sample data"
    );
    Ok(report)
}
