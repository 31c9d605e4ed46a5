//! Project configuration: the user's choices and the questions that collect them

pub mod model;
pub mod questions;

pub use model::{Answer, Answers, Backend, Frontend, ProjectConfig, ProjectConfigBuilder, UiLibrary};
pub use questions::{project_questions, Choice, Question, QuestionKind};
