use std::fmt;
use std::marker::PhantomData;

use serde::de::value::{BorrowedStrDeserializer, StringDeserializer};
use serde::de::{self, Deserializer, IntoDeserializer, SeqAccess, Visitor};
use serde::{Deserialize, Serialize};

use crate::error::EmptyListError;
use crate::level::Level;

/// One authored vocabulary item as it appears in a term file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Entry {
    /// Written form, e.g. `東(京)都`
    pub kanji: String,
    /// Readings of the whole `kanji`, each with the same parenthesization
    pub yomi: OneOrMany<String>,
    /// Missing when the entry has not been classified yet
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<OneOrMany<Level>>,
    #[serde(default)]
    pub comment: String,
    #[serde(default)]
    pub is_official: bool,
    #[serde(default, rename = "ref")]
    pub references: Vec<String>,
    #[serde(default)]
    pub hint: Hint,
    #[serde(default)]
    pub note: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Hint {
    Length,
    Initial,
    #[default]
    None,
}

/// A scalar or a non-empty list, keeping the authored shape
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    One(T),
    Many(Vec<T>),
}

impl<T> OneOrMany<T> {
    pub fn one(value: T) -> Self {
        OneOrMany::One(value)
    }

    pub fn many(values: Vec<T>) -> Result<Self, EmptyListError> {
        if values.is_empty() {
            Err(EmptyListError)
        } else {
            Ok(OneOrMany::Many(values))
        }
    }

    pub fn as_slice(&self) -> &[T] {
        match self {
            OneOrMany::One(value) => std::slice::from_ref(value),
            OneOrMany::Many(values) => values,
        }
    }

    pub fn len(&self) -> usize {
        self.as_slice().len()
    }

    pub fn is_scalar(&self) -> bool {
        matches!(self, OneOrMany::One(_))
    }

    pub fn first(&self) -> Option<&T> {
        self.as_slice().first()
    }
}

/// Scalars are handed to `T` as they are so its own errors reach the author
struct OneOrManyVisitor<T>(PhantomData<T>);

impl<'de, T: Deserialize<'de>> Visitor<'de> for OneOrManyVisitor<T> {
    type Value = OneOrMany<T>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a value or a non-empty list of values")
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<Self::Value, E> {
        T::deserialize(v.into_deserializer()).map(OneOrMany::One)
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        T::deserialize(v.into_deserializer()).map(OneOrMany::One)
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        T::deserialize(v.into_deserializer()).map(OneOrMany::One)
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
        T::deserialize(v.into_deserializer()).map(OneOrMany::One)
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        T::deserialize(v.into_deserializer()).map(OneOrMany::One)
    }

    fn visit_borrowed_str<E: de::Error>(self, v: &'de str) -> Result<Self::Value, E> {
        T::deserialize(BorrowedStrDeserializer::new(v)).map(OneOrMany::One)
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<Self::Value, E> {
        T::deserialize(StringDeserializer::new(v)).map(OneOrMany::One)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        let mut values = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(value) = seq.next_element()? {
            values.push(value);
        }
        OneOrMany::many(values).map_err(<A::Error as de::Error>::custom)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for OneOrMany<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(OneOrManyVisitor(PhantomData))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_entry_defaults() {
        let entry: Entry = serde_json::from_value(json!({
            "kanji": "東京",
            "yomi": "とうきょう",
        }))
        .unwrap();

        assert_eq!(entry.yomi, OneOrMany::One("とうきょう".to_string()));
        assert!(entry.level.is_none());
        assert_eq!(entry.comment, "");
        assert!(!entry.is_official);
        assert!(entry.references.is_empty());
        assert_eq!(entry.hint, Hint::None);
    }

    #[test]
    fn test_entry_full() {
        let entry: Entry = serde_json::from_value(json!({
            "kanji": "東(京)都",
            "yomi": ["とう(きょう)と", "ひがし(みやこ)と"],
            "level": [2],
            "comment": "首都",
            "isOfficial": true,
            "ref": ["https://example.com"],
            "hint": "initial",
            "note": "要確認",
        }))
        .unwrap();

        assert_eq!(entry.yomi.len(), 2);
        assert!(!entry.yomi.is_scalar());
        assert_eq!(entry.level.as_ref().unwrap().as_slice(), &[Level::new(2).unwrap()]);
        assert!(entry.is_official);
        assert_eq!(entry.references, vec!["https://example.com".to_string()]);
        assert_eq!(entry.hint, Hint::Initial);
        assert_eq!(entry.note, "要確認");
    }

    #[test]
    fn test_entry_rejects_unknown_field() {
        let result = serde_json::from_value::<Entry>(json!({
            "kanji": "東京",
            "yomi": "とうきょう",
            "reading": "とうきょう",
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_entry_rejects_empty_lists() {
        let empty_yomi = serde_json::from_value::<Entry>(json!({
            "kanji": "東京",
            "yomi": [],
        }));
        assert!(empty_yomi.is_err());

        let empty_level = serde_json::from_value::<Entry>(json!({
            "kanji": "東京",
            "yomi": "とうきょう",
            "level": [],
        }));
        assert!(empty_level.is_err());
    }

    #[test]
    fn test_entry_rejects_bad_level_and_hint() {
        let bad_level = serde_json::from_value::<Entry>(json!({
            "kanji": "東京",
            "yomi": "とうきょう",
            "level": [1, 9],
        }));
        assert!(bad_level.is_err());

        let bad_hint = serde_json::from_value::<Entry>(json!({
            "kanji": "東京",
            "yomi": "とうきょう",
            "hint": "everything",
        }));
        assert!(bad_hint.is_err());
    }

    #[test]
    fn test_entry_out_of_range_level_is_named() {
        for source in [
            r#"{"kanji": "東京", "yomi": "とうきょう", "level": 9}"#,
            r#"{"kanji": "東京", "yomi": "とうきょう", "level": [1, 9]}"#,
        ] {
            let message = serde_json::from_str::<Entry>(source).unwrap_err().to_string();
            assert!(message.contains("Level 9 is out of range"), "{message}");
        }
    }

    #[test]
    fn test_entry_wrong_reading_type() {
        let message = serde_json::from_str::<Entry>(r#"{"kanji": "東京", "yomi": {"a": 1}}"#)
            .unwrap_err()
            .to_string();
        assert!(message.contains("a value or a non-empty list of values"), "{message}");

        let message = serde_json::from_str::<Entry>(r#"{"kanji": "東京", "yomi": 3}"#)
            .unwrap_err()
            .to_string();
        assert!(message.contains("expected a string"), "{message}");
    }

    #[test]
    fn test_entry_integral_float_level() {
        let entry: Entry =
            serde_json::from_str(r#"{"kanji": "東京", "yomi": "とうきょう", "level": [2.0, 1]}"#)
                .unwrap();
        let levels: Vec<u8> = entry.level.unwrap().as_slice().iter().map(|l| l.get()).collect();
        assert_eq!(levels, vec![2, 1]);
    }

    #[test]
    fn test_one_or_many_shape() {
        let one = OneOrMany::one("よみ".to_string());
        assert!(one.is_scalar());
        assert_eq!(one.first().map(String::as_str), Some("よみ"));
        assert_eq!(serde_json::to_value(&one).unwrap(), json!("よみ"));

        let many = OneOrMany::many(vec![1, 2]).unwrap();
        assert_eq!(many.as_slice(), &[1, 2]);
        assert_eq!(serde_json::to_value(&many).unwrap(), json!([1, 2]));

        assert_eq!(OneOrMany::<i32>::many(vec![]), Err(EmptyListError));
    }
}
