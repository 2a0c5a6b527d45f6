use yomi_types::Level;

/// Validation failure on a single entry. Any of these aborts the whole build.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CompileError {
    #[error("Reading is empty (kanji: {kanji})")]
    EmptyReading { kanji: String },

    #[error(
        "Parenthesized reading count does not match the kanji (kanji: {kanji}, expected: {expected}, readings: {})",
        .readings.join(", ")
    )]
    ReadingParenMismatch {
        kanji: String,
        readings: Vec<String>,
        expected: usize,
    },

    #[error(
        "Level count does not match the parenthesized kanji count (kanji: {kanji}, expected: {expected}, levels: [{}])",
        join_levels(.levels)
    )]
    LevelCountMismatch {
        kanji: String,
        levels: Vec<Level>,
        expected: usize,
    },

    #[error("Comment is empty (kanji: {kanji})")]
    EmptyComment { kanji: String },

    #[error(
        "Reading contains characters other than hiragana (kanji: {kanji}, segment: {segment}, readings: {})",
        .answers.join(", ")
    )]
    NonHiraganaReading {
        kanji: String,
        segment: String,
        answers: Vec<String>,
    },

    #[error(
        "Kanji is written in hiragana (kanji: {kanji}, segment: {segment}, readings: {})",
        .answers.join(", ")
    )]
    KanjiIsHiragana {
        kanji: String,
        segment: String,
        answers: Vec<String>,
    },
}

impl CompileError {
    /// Written form of the entry that failed
    pub fn kanji(&self) -> &str {
        match self {
            CompileError::EmptyReading { kanji }
            | CompileError::ReadingParenMismatch { kanji, .. }
            | CompileError::LevelCountMismatch { kanji, .. }
            | CompileError::EmptyComment { kanji }
            | CompileError::NonHiraganaReading { kanji, .. }
            | CompileError::KanjiIsHiragana { kanji, .. } => kanji,
        }
    }
}

fn join_levels(levels: &[Level]) -> String {
    levels
        .iter()
        .map(Level::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
