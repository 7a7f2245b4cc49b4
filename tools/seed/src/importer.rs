use crate::bank::{CategoryEntry, QuestionEntry};
use sqlx::SqlitePool;

const MIN_DIFFICULTY: i64 = 1;
const MAX_DIFFICULTY: i64 = 5;

/// Statistics from an import operation
#[derive(Debug, Default)]
pub struct ImportStats {
    /// Number of categories inserted or renamed
    pub categories: usize,
    /// Number of entries that passed all filters
    pub filtered: usize,
    /// Number of rows successfully inserted
    pub inserted: usize,
    /// Number of entries skipped (blank text, difficulty out of range)
    pub skipped: usize,
}

/// Insert categories, replacing the type of any that already exist.
pub async fn import_categories(
    pool: &SqlitePool,
    categories: &[CategoryEntry],
    stats: &mut ImportStats,
) -> Result<(), Box<dyn std::error::Error>> {
    for category in categories {
        let result = sqlx::query(
            "INSERT INTO categories (id, type) VALUES (?, ?) \
             ON CONFLICT(id) DO UPDATE SET type = excluded.type",
        )
        .bind(category.id)
        .bind(&category.kind)
        .execute(pool)
        .await?;
        stats.categories += result.rows_affected() as usize;
    }

    Ok(())
}

fn is_importable(entry: &QuestionEntry) -> bool {
    !entry.question.trim().is_empty()
        && !entry.answer.trim().is_empty()
        && (MIN_DIFFICULTY..=MAX_DIFFICULTY).contains(&entry.difficulty)
}

/// Import questions into the database.
///
/// Skips entries with a blank question or answer and entries whose
/// difficulty is outside 1..=5. Entries referencing an unknown category
/// fail the batch they are in.
pub async fn import_questions(
    pool: &SqlitePool,
    entries: Vec<QuestionEntry>,
    limit: Option<usize>,
    stats: &mut ImportStats,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut questions: Vec<QuestionEntry> = entries
        .into_iter()
        .filter(|entry| {
            let keep = is_importable(entry);
            if !keep {
                stats.skipped += 1;
            }
            keep
        })
        .collect();

    if let Some(limit) = limit {
        questions.truncate(limit);
    }

    stats.filtered = questions.len();

    const BATCH_SIZE: usize = 500;

    for chunk in questions.chunks(BATCH_SIZE) {
        let mut query =
            String::from("INSERT INTO questions (question, answer, category, difficulty) VALUES ");

        for (i, _) in chunk.iter().enumerate() {
            if i > 0 {
                query.push_str(", ");
            }
            query.push_str("(?, ?, ?, ?)");
        }

        let mut q = sqlx::query(&query);
        for entry in chunk {
            q = q
                .bind(entry.question.trim())
                .bind(entry.answer.trim())
                .bind(entry.category)
                .bind(entry.difficulty);
        }

        let result = q.execute(pool).await?;
        stats.inserted += result.rows_affected() as usize;
    }

    Ok(())
}
