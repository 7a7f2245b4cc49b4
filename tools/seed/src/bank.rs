use serde::Deserialize;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// A question bank file:
///
/// ```json
/// {
///   "categories": [{"id": 1, "type": "Science"}],
///   "questions": [{"question": "...", "answer": "...", "category": 1, "difficulty": 4}]
/// }
/// ```
#[derive(Debug, Deserialize)]
pub struct QuestionBank {
    #[serde(default)]
    pub categories: Vec<CategoryEntry>,
    pub questions: Vec<QuestionEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CategoryEntry {
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct QuestionEntry {
    pub question: String,
    pub answer: String,
    pub category: i64,
    pub difficulty: i64,
}

pub fn parse_bank(path: &Path) -> Result<QuestionBank, Box<dyn std::error::Error>> {
    let file = File::open(path)?;
    let bank = serde_json::from_reader(BufReader::new(file))?;
    Ok(bank)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_bank_without_categories() {
        let bank: QuestionBank = serde_json::from_str(
            r#"{"questions": [{"question": "Who discovered penicillin?", "answer": "Alexander Fleming", "category": 1, "difficulty": 3}]}"#,
        )
        .unwrap();

        assert!(bank.categories.is_empty());
        assert_eq!(bank.questions.len(), 1);
        assert_eq!(bank.questions[0].answer, "Alexander Fleming");
    }

    #[test]
    fn category_type_field_is_renamed() {
        let bank: QuestionBank = serde_json::from_str(
            r#"{"categories": [{"id": 2, "type": "Art"}], "questions": []}"#,
        )
        .unwrap();

        assert_eq!(bank.categories[0].kind, "Art");
    }
}
