use serde::{Deserialize, Serialize};

use crate::entry::Hint;
use crate::level::Level;

/// One playable question produced by the dictionary compiler
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizRecord {
    /// The text the player is asked to read
    pub kanji: String,
    /// Accepted hiragana readings
    pub answers: Vec<String>,
    /// Kanji shown before `kanji` as context
    pub prefix: String,
    /// Kanji shown after `kanji` as context
    pub suffix: String,
    pub yomi_prefix: String,
    pub yomi_suffix: String,
    /// Category labels from the tree root down to the entry list
    pub category: Vec<String>,
    pub comment: String,
    pub hint: Hint,
    pub level: Level,
    pub is_official: bool,
}
