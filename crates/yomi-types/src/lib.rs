pub mod entry;
pub mod error;
pub mod level;
pub mod quiz;
pub mod tree;

pub use entry::{Entry, Hint, OneOrMany};
pub use error::{EmptyListError, LevelError, TreeError};
pub use level::Level;
pub use quiz::QuizRecord;
pub use tree::{TermNode, TermTree};
