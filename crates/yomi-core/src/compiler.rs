use yomi_types::{Entry, Level, QuizRecord};

use crate::error::CompileError;
use crate::kana::{alternatives, is_hiragana_reading, primary_alternative};
use crate::segment::{ParenSegments, segment};

/// Kanji, answers and context of one quiz before entry metadata is attached
#[derive(Debug, Default)]
struct KanjiAnswerPair {
    kanji: String,
    answers: Vec<String>,
    prefix: String,
    suffix: String,
    yomi_prefix: String,
    yomi_suffix: String,
}

impl KanjiAnswerPair {
    /// Quiz for the whole entry when it has no parenthesized groups
    fn whole(kanji: &str, yomis: &[String]) -> Self {
        Self {
            kanji: kanji.to_string(),
            answers: yomis.to_vec(),
            ..Default::default()
        }
    }

    /// Quiz for group `index`, showing the rest of the term as context.
    ///
    /// Neighbouring groups appear as written in the kanji and with their first
    /// alternative in the primary reading.
    fn for_group(
        kanji: &ParenSegments<'_>,
        primary: &ParenSegments<'_>,
        yomis: &[ParenSegments<'_>],
        index: usize,
    ) -> Self {
        let mut pair = Self {
            kanji: kanji.paren[index].to_string(),
            answers: yomis
                .iter()
                .flat_map(|yomi| alternatives(yomi.paren[index]))
                .map(str::to_string)
                .collect(),
            ..Default::default()
        };

        let last = kanji.non_paren.len() - 1;

        for j in 0..kanji.non_paren.len() {
            if j <= index {
                if j != 0 {
                    pair.prefix.push_str(kanji.paren[j - 1]);
                    pair.yomi_prefix
                        .push_str(primary_alternative(primary.paren[j - 1]));
                }
                pair.prefix.push_str(kanji.non_paren[j]);
                pair.yomi_prefix.push_str(primary.non_paren[j]);
            } else {
                pair.suffix.push_str(kanji.non_paren[j]);
                pair.yomi_suffix.push_str(primary.non_paren[j]);
                if j != last {
                    pair.suffix.push_str(kanji.paren[j]);
                    pair.yomi_suffix
                        .push_str(primary_alternative(primary.paren[j]));
                }
            }
        }

        pair
    }

    fn into_record(self, entry: &Entry, category: &[String], level: Level) -> QuizRecord {
        QuizRecord {
            kanji: self.kanji,
            answers: self.answers,
            prefix: self.prefix,
            suffix: self.suffix,
            yomi_prefix: self.yomi_prefix,
            yomi_suffix: self.yomi_suffix,
            category: category.to_vec(),
            comment: entry.comment.clone(),
            hint: entry.hint,
            level,
            is_official: entry.is_official,
        }
    }
}

/// Expand one entry into its quizzes.
///
/// Returns `Ok(None)` for an entry without a level; such entries are not
/// ready to ship and are left out of the dictionary.
pub fn compile_entry(
    entry: &Entry,
    category: &[String],
) -> Result<Option<Vec<QuizRecord>>, CompileError> {
    let Some(level) = &entry.level else {
        tracing::debug!(kanji = %entry.kanji, "Skipping unclassified entry");
        return Ok(None);
    };

    let yomis = entry.yomi.as_slice();
    let levels = level.as_slice();

    if yomis.is_empty() || yomis.iter().any(String::is_empty) {
        return Err(CompileError::EmptyReading {
            kanji: entry.kanji.clone(),
        });
    }

    let kanji_segments = segment(&entry.kanji);
    let yomi_segments: Vec<ParenSegments<'_>> = yomis.iter().map(|yomi| segment(yomi)).collect();
    let paren_count = kanji_segments.paren_count();

    if yomi_segments
        .iter()
        .any(|segments| segments.paren_count() != paren_count)
    {
        return Err(CompileError::ReadingParenMismatch {
            kanji: entry.kanji.clone(),
            readings: yomis.to_vec(),
            expected: paren_count,
        });
    }

    // Without groups the entry is a single quiz with a single level
    let expected_levels = paren_count.max(1);
    if levels.len() != expected_levels {
        return Err(CompileError::LevelCountMismatch {
            kanji: entry.kanji.clone(),
            levels: levels.to_vec(),
            expected: expected_levels,
        });
    }

    if entry.comment.is_empty() {
        return Err(CompileError::EmptyComment {
            kanji: entry.kanji.clone(),
        });
    }

    let quizzes: Vec<QuizRecord> = if paren_count == 0 {
        vec![KanjiAnswerPair::whole(&entry.kanji, yomis).into_record(entry, category, levels[0])]
    } else {
        let primary = &yomi_segments[0];
        levels
            .iter()
            .enumerate()
            .map(|(index, &level)| {
                KanjiAnswerPair::for_group(&kanji_segments, primary, &yomi_segments, index)
                    .into_record(entry, category, level)
            })
            .collect()
    };

    for quiz in &quizzes {
        validate_quiz(entry, quiz)?;
    }

    tracing::debug!(
        kanji = %entry.kanji,
        quizzes = quizzes.len(),
        "Compiled entry"
    );

    Ok(Some(quizzes))
}

fn validate_quiz(entry: &Entry, quiz: &QuizRecord) -> Result<(), CompileError> {
    if !quiz.answers.iter().all(|answer| is_hiragana_reading(answer)) {
        return Err(CompileError::NonHiraganaReading {
            kanji: entry.kanji.clone(),
            segment: quiz.kanji.clone(),
            answers: quiz.answers.clone(),
        });
    }

    if is_hiragana_reading(&quiz.kanji) {
        return Err(CompileError::KanjiIsHiragana {
            kanji: entry.kanji.clone(),
            segment: quiz.kanji.clone(),
            answers: quiz.answers.clone(),
        });
    }

    Ok(())
}
