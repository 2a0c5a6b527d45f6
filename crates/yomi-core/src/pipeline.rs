use yomi_types::{QuizRecord, TermTree};

use crate::compiler::compile_entry;
use crate::error::CompileError;
use crate::flatten::{FlatEntry, flatten};

/// Compile every entry of `tree`, stopping at the first invalid one.
///
/// Quizzes from one entry stay adjacent, in tree order. Sorting is left to
/// the caller. A failure is returned without being logged here; the caller
/// reports it.
pub fn compile_all(tree: &TermTree) -> Result<Vec<QuizRecord>, CompileError> {
    compile_all_with_category(tree, &[])
}

/// Same as [`compile_all`], with every category path starting at `root`
pub fn compile_all_with_category(
    tree: &TermTree,
    root: &[String],
) -> Result<Vec<QuizRecord>, CompileError> {
    let entries = flatten(tree, root);
    let mut quizzes = Vec::new();
    let mut unclassified = 0usize;

    for FlatEntry { entry, category } in &entries {
        match compile_entry(entry, category)? {
            Some(compiled) => quizzes.extend(compiled),
            None => unclassified += 1,
        }
    }

    tracing::info!(
        "Compiled {} quizzes from {} entries ({} unclassified)",
        quizzes.len(),
        entries.len(),
        unclassified
    );

    Ok(quizzes)
}
