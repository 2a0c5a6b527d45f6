use std::fs;
use std::path::Path;

use yomi_config::build::BuildConfig;
use yomi_types::{Hint, Level, QuizRecord};

use crate::build::{build, count_by_level, sort_by_level};

fn config(root: &Path) -> BuildConfig {
    BuildConfig {
        terms_dir: root.join("terms"),
        output_path: root.join("out/dictionary.json"),
        pretty: true,
        root_category: vec![],
    }
}

fn write_terms(root: &Path) {
    let terms = root.join("terms");
    fs::create_dir_all(&terms).unwrap();
    fs::write(
        terms.join("01-places.json"),
        r#"{
            "地名": [
                {"kanji": "秋葉原", "yomi": "あきはばら", "level": 3, "comment": "千代田区"},
                {"kanji": "(御)茶(ノ)水", "yomi": "(お)ちゃ(の)みず", "level": [2, 0], "comment": "千代田区"}
            ]
        }"#,
    )
    .unwrap();
    fs::write(
        terms.join("02-stations.yml"),
        "駅:\n  - kanji: 新宿\n    yomi: しんじゅく\n    level: 0\n    comment: 新宿区\n  - kanji: 渋谷\n    yomi: しぶや\n",
    )
    .unwrap();
}

#[test]
fn test_build_writes_sorted_dictionary() {
    let dir = tempfile::tempdir().unwrap();
    write_terms(dir.path());
    let config = config(dir.path());

    let quizzes = build(&config, true).unwrap();

    let order: Vec<(&str, u8)> = quizzes
        .iter()
        .map(|quiz| (quiz.kanji.as_str(), quiz.level.get()))
        .collect();
    assert_eq!(order, vec![("ノ", 0), ("新宿", 0), ("御", 2), ("秋葉原", 3)]);

    let written = fs::read_to_string(&config.output_path).unwrap();
    assert!(written.contains("\n  {"), "expected indented output");
    assert!(written.contains("\"yomiPrefix\""));
    assert!(written.contains("\"isOfficial\""));

    let parsed: Vec<QuizRecord> = serde_json::from_str(&written).unwrap();
    assert_eq!(parsed, quizzes);
}

#[test]
fn test_check_does_not_write() {
    let dir = tempfile::tempdir().unwrap();
    write_terms(dir.path());
    let config = config(dir.path());

    let quizzes = build(&config, false).unwrap();
    assert_eq!(quizzes.len(), 4);
    assert!(!config.output_path.exists());
}

#[test]
fn test_build_compact_with_root_category() {
    let dir = tempfile::tempdir().unwrap();
    write_terms(dir.path());
    let config = BuildConfig {
        pretty: false,
        root_category: vec!["東京".to_string()],
        ..config(dir.path())
    };

    let quizzes = build(&config, true).unwrap();
    assert!(quizzes.iter().all(|quiz| quiz.category[0] == "東京"));

    let written = fs::read_to_string(&config.output_path).unwrap();
    assert!(!written.contains('\n'));
}

#[test]
fn test_build_fails_without_quizzes() {
    let dir = tempfile::tempdir().unwrap();
    let terms = dir.path().join("terms");
    fs::create_dir_all(&terms).unwrap();
    fs::write(terms.join("pending.json"), r#"{"駅": [{"kanji": "渋谷", "yomi": "しぶや"}]}"#).unwrap();

    let error = build(&config(dir.path()), true).unwrap_err();
    assert!(error.to_string().contains("No quizzes"), "{error}");
}

#[test]
fn test_build_names_file_of_invalid_entry() {
    let dir = tempfile::tempdir().unwrap();
    let terms = dir.path().join("terms");
    fs::create_dir_all(&terms).unwrap();
    fs::write(
        terms.join("bad.json"),
        r#"{"駅": [{"kanji": "渋谷", "yomi": "しぶや", "level": 1}]}"#,
    )
    .unwrap();

    let error = build(&config(dir.path()), true).unwrap_err();
    let message = format!("{error:#}");
    assert!(message.contains("bad.json"), "{message}");
    assert!(message.contains("Comment is empty"), "{message}");
}

#[test]
fn test_count_and_sort_by_level() {
    let quiz = |kanji: &str, level: u8| QuizRecord {
        kanji: kanji.to_string(),
        answers: vec!["よみ".to_string()],
        prefix: String::new(),
        suffix: String::new(),
        yomi_prefix: String::new(),
        yomi_suffix: String::new(),
        category: vec![],
        comment: "c".to_string(),
        hint: Hint::None,
        level: Level::new(level).unwrap(),
        is_official: false,
    };

    let mut quizzes = vec![quiz("三", 2), quiz("一", 0), quiz("二", 2), quiz("四", 1)];
    sort_by_level(&mut quizzes);

    let kanji: Vec<&str> = quizzes.iter().map(|q| q.kanji.as_str()).collect();
    assert_eq!(kanji, vec!["一", "四", "三", "二"]);

    let counts: Vec<(u8, usize)> = count_by_level(&quizzes)
        .into_iter()
        .map(|(level, count)| (level.get(), count))
        .collect();
    assert_eq!(counts, vec![(0, 1), (1, 1), (2, 2)]);
}
