use super::question::{NewQuestion, Question, QuestionScope};
use sqlx::SqlitePool;

const COLUMNS: &str = "id, question, answer, category, difficulty";

#[derive(Clone)]
pub struct QuestionRepository {
    pool: SqlitePool,
}

impl QuestionRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn page(&self, offset: i64, limit: i64) -> Result<Vec<Question>, sqlx::Error> {
        let sql = format!("SELECT {COLUMNS} FROM questions ORDER BY id LIMIT ? OFFSET ?");
        sqlx::query_as(&sql)
            .bind(limit)
            .bind(offset)
            .fetch_all(&self.pool)
            .await
    }

    pub async fn count(&self) -> Result<i64, sqlx::Error> {
        let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM questions")
            .fetch_one(&self.pool)
            .await?;
        Ok(row.0)
    }

    pub async fn find(&self, id: i64) -> Result<Option<Question>, sqlx::Error> {
        let sql = format!("SELECT {COLUMNS} FROM questions WHERE id = ?");
        sqlx::query_as(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    /// Returns true when a row was removed.
    pub async fn delete(&self, id: i64) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM questions WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    pub async fn insert(&self, new: &NewQuestion) -> Result<Question, sqlx::Error> {
        let sql = format!(
            "INSERT INTO questions (question, answer, category, difficulty) \
             VALUES (?, ?, ?, ?) RETURNING {COLUMNS}"
        );
        sqlx::query_as(&sql)
            .bind(&new.question)
            .bind(&new.answer)
            .bind(new.category)
            .bind(new.difficulty)
            .fetch_one(&self.pool)
            .await
    }

    /// Questions whose text contains `term`, ignoring ASCII case.
    /// LIKE wildcards in the term match literally.
    pub async fn search(&self, term: &str) -> Result<Vec<Question>, sqlx::Error> {
        let pattern = format!("%{}%", escape_like(term));
        let sql = format!(
            "SELECT {COLUMNS} FROM questions WHERE question LIKE ? ESCAPE '\\' ORDER BY id"
        );
        sqlx::query_as(&sql)
            .bind(pattern)
            .fetch_all(&self.pool)
            .await
    }

    pub async fn by_category(&self, category_id: i64) -> Result<Vec<Question>, sqlx::Error> {
        let sql = format!("SELECT {COLUMNS} FROM questions WHERE category = ? ORDER BY id");
        sqlx::query_as(&sql)
            .bind(category_id)
            .fetch_all(&self.pool)
            .await
    }

    /// Questions in `scope` whose ids are not in `exclude`. The exclusion
    /// list travels as one JSON array bind, so its length is not bounded by
    /// SQLite's variable limit.
    pub async fn quiz_candidates(
        &self,
        scope: QuestionScope,
        exclude: &[i64],
    ) -> Result<Vec<Question>, sqlx::Error> {
        let mut sql = format!(
            "SELECT {COLUMNS} FROM questions \
             WHERE id NOT IN (SELECT value FROM json_each(?))"
        );
        if let QuestionScope::Category(_) = scope {
            sql.push_str(" AND category = ?");
        }
        sql.push_str(" ORDER BY id");

        let exclude =
            serde_json::to_string(exclude).map_err(|e| sqlx::Error::Encode(Box::new(e)))?;

        let mut query = sqlx::query_as(&sql).bind(exclude);
        if let QuestionScope::Category(category_id) = scope {
            query = query.bind(category_id);
        }

        query.fetch_all(&self.pool).await
    }
}

fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
