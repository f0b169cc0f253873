use trivia_core::model::{CategoryId, Question, QuestionId};

use super::SqliteRepository;
use super::mapping::{
    category_id_to_i64, map_question_row, question_id_from_i64, question_id_to_i64,
};
use crate::repository::{NewQuestionRecord, QuestionRepository, StorageError};

fn map_rows(rows: &[sqlx::sqlite::SqliteRow]) -> Result<Vec<Question>, StorageError> {
    let mut questions = Vec::with_capacity(rows.len());
    for row in rows {
        questions.push(map_question_row(row)?);
    }
    Ok(questions)
}

fn insert_error(e: sqlx::Error) -> StorageError {
    match &e {
        sqlx::Error::Database(db) if db.is_foreign_key_violation() || db.is_check_violation() => {
            StorageError::Conflict
        }
        _ => StorageError::Connection(e.to_string()),
    }
}

#[async_trait::async_trait]
impl QuestionRepository for SqliteRepository {
    async fn list_questions(&self) -> Result<Vec<Question>, StorageError> {
        let rows = sqlx::query(
            r"
            SELECT id, question, answer, category, difficulty
            FROM questions
            ORDER BY id ASC
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| StorageError::Connection(e.to_string()))?;

        map_rows(&rows)
    }

    async fn get_question(&self, id: QuestionId) -> Result<Option<Question>, StorageError> {
        let row = sqlx::query(
            r"
            SELECT id, question, answer, category, difficulty
            FROM questions WHERE id = ?1
            ",
        )
        .bind(question_id_to_i64(id)?)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| StorageError::Connection(e.to_string()))?;

        row.as_ref().map(map_question_row).transpose()
    }

    async fn insert_new_question(
        &self,
        question: NewQuestionRecord,
    ) -> Result<QuestionId, StorageError> {
        let res = sqlx::query(
            r"
            INSERT INTO questions (question, answer, category, difficulty)
            VALUES (?1, ?2, ?3, ?4)
            ",
        )
        .bind(question.question)
        .bind(question.answer)
        .bind(category_id_to_i64(question.category)?)
        .bind(i64::from(question.difficulty))
        .execute(&self.pool)
        .await
        .map_err(insert_error)?;

        question_id_from_i64(res.last_insert_rowid())
    }

    async fn delete_question(&self, id: QuestionId) -> Result<(), StorageError> {
        let res = sqlx::query("DELETE FROM questions WHERE id = ?1")
            .bind(question_id_to_i64(id)?)
            .execute(&self.pool)
            .await
            .map_err(|e| StorageError::Connection(e.to_string()))?;

        if res.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }
        Ok(())
    }

    async fn questions_in_category(
        &self,
        category: CategoryId,
    ) -> Result<Vec<Question>, StorageError> {
        let rows = sqlx::query(
            r"
            SELECT id, question, answer, category, difficulty
            FROM questions
            WHERE category = ?1
            ORDER BY id ASC
            ",
        )
        .bind(category_id_to_i64(category)?)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| StorageError::Connection(e.to_string()))?;

        map_rows(&rows)
    }

    async fn search_questions(&self, term: &str) -> Result<Vec<Question>, StorageError> {
        // SQLite LIKE and lower() fold ASCII only; match in Rust so both stores agree.
        let mut questions = self.list_questions().await?;
        questions.retain(|q| q.matches_term(term));
        Ok(questions)
    }

    async fn count_questions(&self) -> Result<u64, StorageError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM questions")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| StorageError::Connection(e.to_string()))?;

        u64::try_from(count).map_err(|_| StorageError::Serialization("negative count".into()))
    }
}
