use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::Context;
use yomi_config::build::BuildConfig;
use yomi_types::{Level, QuizRecord};

use crate::loader::{self, TermFile};

/// Compile, sort and (optionally) write the dictionary
pub fn build(config: &BuildConfig, write: bool) -> anyhow::Result<Vec<QuizRecord>> {
    let files = loader::load_terms(&config.terms_dir)?;

    let mut quizzes = compile_files(&files, &config.root_category)?;
    anyhow::ensure!(
        !quizzes.is_empty(),
        "No quizzes were found in {}",
        config.terms_dir.display()
    );

    sort_by_level(&mut quizzes);

    tracing::info!("Built {} quizzes", quizzes.len());
    for (level, count) in count_by_level(&quizzes) {
        tracing::info!(%level, count, "Quizzes per level");
    }

    if write {
        write_dictionary(&config.output_path, &quizzes, config.pretty)?;
        tracing::info!("Wrote dictionary to {}", config.output_path.display());
    }

    Ok(quizzes)
}

/// Each file is compiled on its own, under the same root category
pub fn compile_files(files: &[TermFile], root: &[String]) -> anyhow::Result<Vec<QuizRecord>> {
    let mut quizzes = Vec::new();

    for file in files {
        let compiled = yomi_core::compile_all_with_category(&file.tree, root)
            .with_context(|| format!("Failed to compile {}", file.path.display()))?;
        quizzes.extend(compiled);
    }

    Ok(quizzes)
}

/// Stable, so quizzes of one level keep their compile order
pub fn sort_by_level(quizzes: &mut [QuizRecord]) {
    quizzes.sort_by_key(|quiz| quiz.level);
}

pub fn count_by_level(quizzes: &[QuizRecord]) -> BTreeMap<Level, usize> {
    let mut counts = BTreeMap::new();
    for quiz in quizzes {
        *counts.entry(quiz.level).or_insert(0) += 1;
    }
    counts
}

pub fn write_dictionary(path: &Path, quizzes: &[QuizRecord], pretty: bool) -> anyhow::Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(quizzes)?
    } else {
        serde_json::to_string(quizzes)?
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }

    fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}
