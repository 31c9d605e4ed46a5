//! The question list that drives the interactive flow
//!
//! Questions are plain data: the prompt implementation walks the list, skips any
//! question whose `visible_when` predicate is false and records the answers.

use super::model::{Answer, Answers, Backend, Frontend, UiLibrary};
use std::fmt;

/// One selectable option
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    pub value: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestionKind {
    Select {
        choices: Vec<Choice>,
        default: &'static str,
    },
    Confirm {
        default: bool,
    },
}

/// One prompt in the question flow
#[derive(Clone)]
pub struct Question {
    pub key: &'static str,
    pub message: &'static str,
    pub kind: QuestionKind,
    pub visible_when: fn(&Answers) -> bool,
}

impl fmt::Debug for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Question")
            .field("key", &self.key)
            .field("message", &self.message)
            .field("kind", &self.kind)
            .finish_non_exhaustive()
    }
}

impl Question {
    fn select(
        key: &'static str,
        message: &'static str,
        choices: Vec<Choice>,
        default: &'static str,
    ) -> Self {
        Self {
            key,
            message,
            kind: QuestionKind::Select { choices, default },
            visible_when: always,
        }
    }

    fn confirm(key: &'static str, message: &'static str, default: bool) -> Self {
        Self {
            key,
            message,
            kind: QuestionKind::Confirm { default },
            visible_when: always,
        }
    }

    fn when(mut self, predicate: fn(&Answers) -> bool) -> Self {
        self.visible_when = predicate;
        self
    }

    /// Whether this question should be asked given the answers so far
    pub fn is_visible(&self, answers: &Answers) -> bool {
        (self.visible_when)(answers)
    }

    /// The answer used when the question is skipped or accepted as-is
    pub fn default_answer(&self) -> Answer {
        match &self.kind {
            QuestionKind::Select { default, .. } => Answer::Choice(default.to_string()),
            QuestionKind::Confirm { default } => Answer::Confirm(*default),
        }
    }
}

fn always(_: &Answers) -> bool {
    true
}

fn has_backend(answers: &Answers) -> bool {
    !matches!(
        answers.get("backend"),
        Some(Answer::Choice(value)) if value == Backend::None.id()
    )
}

/// The authoritative option lists and questions, in prompt order
pub fn project_questions() -> Vec<Question> {
    vec![
        Question::select(
            "frontend",
            "Choose a frontend framework:",
            Frontend::ALL
                .iter()
                .map(|f| Choice {
                    value: f.id(),
                    label: f.label(),
                })
                .collect(),
            Frontend::NextJs.id(),
        ),
        Question::select(
            "ui",
            "Choose a UI library:",
            UiLibrary::ALL
                .iter()
                .map(|u| Choice {
                    value: u.id(),
                    label: u.label(),
                })
                .collect(),
            UiLibrary::Shadcn.id(),
        ),
        Question::select(
            "backend",
            "Choose a backend:",
            Backend::ALL
                .iter()
                .map(|b| Choice {
                    value: b.id(),
                    label: b.label(),
                })
                .collect(),
            Backend::Firebase.id(),
        ),
        Question::confirm("typescript", "Do you want to use TypeScript?", true),
        Question::confirm("auth", "Do you want authentication pre-configured?", true)
            .when(has_backend),
        Question::confirm(
            "animations",
            "Do you want to add animation libraries (Framer Motion & GSAP)?",
            false,
        ),
        Question::confirm("threeD", "Do you want to add 3D support (Three.js)?", false),
        Question::confirm(
            "testing",
            "Do you want to include testing setup (Jest & Testing Library)?",
            true,
        ),
        Question::confirm("docker", "Do you want Docker configuration?", false),
    ]
}
