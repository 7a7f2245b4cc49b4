use sqlx::SqlitePool;
use trivia::{CategoryRepository, NewQuestion, QuestionRepository, QuestionScope};

#[sqlx::test]
async fn migrations_seed_categories_and_questions(pool: SqlitePool) {
    let category_count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM categories")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(category_count.0, 6);

    let questions = QuestionRepository::new(pool);
    assert_eq!(questions.count().await.unwrap(), 18);
}

#[sqlx::test]
async fn finds_category_by_id(pool: SqlitePool) {
    let categories = CategoryRepository::new(pool);

    let art = categories.find(2).await.unwrap().unwrap();
    assert_eq!(art.kind, "Art");
    assert!(categories.find(99).await.unwrap().is_none());

    let all = categories.all().await.unwrap();
    let ids: Vec<i64> = all.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
}

#[sqlx::test]
async fn pages_are_ordered_by_id(pool: SqlitePool) {
    let questions = QuestionRepository::new(pool);

    let page = questions.page(10, 10).await.unwrap();
    assert_eq!(page.len(), 8);
    assert_eq!(page[0].id, 15);
    assert!(page.windows(2).all(|w| w[0].id < w[1].id));

    assert!(questions.page(20, 10).await.unwrap().is_empty());
}

#[sqlx::test]
async fn insert_assigns_new_id(pool: SqlitePool) {
    let questions = QuestionRepository::new(pool);

    let stored = questions
        .insert(&NewQuestion {
            question: "What is your quest?".to_string(),
            answer: "To seek the Holy Grail!".to_string(),
            category: 1,
            difficulty: 1,
        })
        .await
        .unwrap();

    assert!(stored.id > 22);
    assert_eq!(questions.find(stored.id).await.unwrap(), Some(stored.clone()));

    assert!(questions.delete(stored.id).await.unwrap());
    assert!(!questions.delete(stored.id).await.unwrap());
    assert!(questions.find(stored.id).await.unwrap().is_none());
}

#[sqlx::test]
async fn search_escapes_underscore(pool: SqlitePool) {
    let questions = QuestionRepository::new(pool);

    // An unescaped "_" would match any single character
    assert!(questions.search("_").await.unwrap().is_empty());
    assert_eq!(questions.search("penicillin").await.unwrap()[0].id, 21);
}

#[sqlx::test]
async fn quiz_candidates_exclude_previous(pool: SqlitePool) {
    let questions = QuestionRepository::new(pool);

    let candidates = questions
        .quiz_candidates(QuestionScope::Category(2), &[16, 18])
        .await
        .unwrap();
    let ids: Vec<i64> = candidates.iter().map(|q| q.id).collect();
    assert_eq!(ids, vec![17, 19]);

    let all = questions
        .quiz_candidates(QuestionScope::All, &[])
        .await
        .unwrap();
    assert_eq!(all.len(), 18);
}

#[sqlx::test]
async fn deleting_category_cascades_to_questions(pool: SqlitePool) {
    sqlx::query("DELETE FROM categories WHERE id = 6")
        .execute(&pool)
        .await
        .unwrap();

    let questions = QuestionRepository::new(pool);
    assert!(questions.by_category(6).await.unwrap().is_empty());
    assert_eq!(questions.count().await.unwrap(), 16);
}

#[sqlx::test]
async fn quiz_candidates_accept_exclusions_past_variable_limit(pool: SqlitePool) {
    let questions = QuestionRepository::new(pool);

    // Far more ids than SQLite allows as individual bind variables
    let mut exclude: Vec<i64> = (1000..100_000).collect();
    exclude.extend([16, 17, 18]);

    let candidates = questions
        .quiz_candidates(QuestionScope::Category(2), &exclude)
        .await
        .unwrap();
    let ids: Vec<i64> = candidates.iter().map(|q| q.id).collect();
    assert_eq!(ids, vec![19]);
}
