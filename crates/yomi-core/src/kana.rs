/// Separates alternative readings inside one parenthesized group
pub const READING_DELIMITER: char = '、';

/// Long vowel mark, accepted in readings alongside hiragana
pub const PROLONGED_SOUND_MARK: char = 'ー';

/// ぁ (U+3041) through ん (U+3093), plus ー
pub fn is_hiragana_char(c: char) -> bool {
    ('ぁ'..='ん').contains(&c) || c == PROLONGED_SOUND_MARK
}

/// True for a non-empty string made only of hiragana and ー
pub fn is_hiragana_reading(text: &str) -> bool {
    !text.is_empty() && text.chars().all(is_hiragana_char)
}

/// Alternatives of a reading group, e.g. `にち、じつ` -> `にち`, `じつ`
pub fn alternatives(group: &str) -> impl Iterator<Item = &str> {
    group.split(READING_DELIMITER)
}

/// First alternative of a reading group
pub fn primary_alternative(group: &str) -> &str {
    alternatives(group).next().unwrap_or(group)
}
