//! Sorting hat quiz loader.

use std::path::Path;

use game_core::{SortingQuestion, SortingQuiz};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Quiz structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizFile {
    pub questions: Vec<SortingQuestion>,
}

/// Loader for the sorting hat quiz from RON files.
pub struct QuizLoader;

impl QuizLoader {
    pub fn load(path: &Path) -> LoadResult<SortingQuiz> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Every question needs at least one option.
    pub fn parse(content: &str) -> LoadResult<SortingQuiz> {
        let file: QuizFile = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse sorting quiz RON: {}", e))?;

        anyhow::ensure!(!file.questions.is_empty(), "Sorting quiz has no questions");
        for question in &file.questions {
            anyhow::ensure!(
                !question.options.is_empty(),
                "Question '{}' has no options",
                question.prompt
            );
        }

        Ok(SortingQuiz::new(file.questions))
    }
}
