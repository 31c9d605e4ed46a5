//! The immutable record of choices every generation stage reads

use crate::error::{Result, ScaffoldError};
use indexmap::IndexMap;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Frontend framework
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Frontend {
    #[default]
    NextJs,
    React,
}

/// UI library
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UiLibrary {
    #[default]
    Shadcn,
    Tailwind,
    Mui,
}

/// Persistence layer ("backend kind")
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    #[default]
    Firebase,
    MongoDb,
    Postgres,
    None,
}

impl Frontend {
    pub const ALL: [Frontend; 2] = [Frontend::NextJs, Frontend::React];

    pub fn id(&self) -> &'static str {
        match self {
            Frontend::NextJs => "nextjs",
            Frontend::React => "react",
        }
    }

    /// Label shown in the prompt
    pub fn label(&self) -> &'static str {
        match self {
            Frontend::NextJs => "Next.js 14 (Recommended)",
            Frontend::React => "React.js with Vite",
        }
    }

    /// Description used in the generated README
    pub fn description(&self) -> &'static str {
        match self {
            Frontend::NextJs => "Next.js 14 with App Router",
            Frontend::React => "React.js with Vite",
        }
    }
}

impl UiLibrary {
    pub const ALL: [UiLibrary; 3] = [UiLibrary::Shadcn, UiLibrary::Tailwind, UiLibrary::Mui];

    pub fn id(&self) -> &'static str {
        match self {
            UiLibrary::Shadcn => "shadcn",
            UiLibrary::Tailwind => "tailwind",
            UiLibrary::Mui => "mui",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            UiLibrary::Shadcn => "ShadCN UI (Recommended)",
            UiLibrary::Tailwind => "Tailwind CSS",
            UiLibrary::Mui => "Material UI",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            UiLibrary::Shadcn => "ShadCN UI with Tailwind CSS",
            UiLibrary::Tailwind => "Tailwind CSS",
            UiLibrary::Mui => "Material UI",
        }
    }

    /// Whether the project carries a Tailwind toolchain
    pub fn uses_tailwind(&self) -> bool {
        matches!(self, UiLibrary::Shadcn | UiLibrary::Tailwind)
    }
}

impl Backend {
    pub const ALL: [Backend; 4] = [
        Backend::Firebase,
        Backend::MongoDb,
        Backend::Postgres,
        Backend::None,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Backend::Firebase => "firebase",
            Backend::MongoDb => "mongodb",
            Backend::Postgres => "postgres",
            Backend::None => "none",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Backend::Firebase => "Firebase (Recommended)",
            Backend::MongoDb => "MongoDB with Mongoose",
            Backend::Postgres => "PostgreSQL with Sequelize",
            Backend::None => "None (Frontend only)",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Backend::Firebase => "Firebase",
            Backend::MongoDb => "MongoDB with Mongoose",
            Backend::Postgres => "PostgreSQL with Sequelize",
            Backend::None => "None (Frontend only)",
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Backend::None)
    }
}

macro_rules! impl_id_traits {
    ($ty:ident, $question:literal) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.id())
            }
        }

        impl FromStr for $ty {
            type Err = ScaffoldError;

            fn from_str(s: &str) -> Result<Self> {
                $ty::ALL
                    .into_iter()
                    .find(|v| v.id().eq_ignore_ascii_case(s))
                    .ok_or_else(|| ScaffoldError::InvalidAnswer {
                        question: $question.to_string(),
                        value: s.to_string(),
                    })
            }
        }
    };
}

impl_id_traits!(Frontend, "frontend");
impl_id_traits!(UiLibrary, "ui");
impl_id_traits!(Backend, "backend");

/// A single prompt answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    Choice(String),
    Confirm(bool),
}

/// Answers keyed by question key, in the order they were given
pub type Answers = IndexMap<String, Answer>;

/// The full set of options for one generated project.
///
/// Fields are private so the `auth` correction cannot be bypassed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectConfig {
    project_name: String,
    frontend: Frontend,
    ui: UiLibrary,
    backend: Backend,
    typescript: bool,
    auth: bool,
    animations: bool,
    three_d: bool,
    testing: bool,
    docker: bool,
}

impl ProjectConfig {
    /// Start from the prompt defaults
    pub fn builder(project_name: impl Into<String>) -> ProjectConfigBuilder {
        ProjectConfigBuilder::new(project_name)
    }

    /// Build a config from prompt answers. Hidden questions fall back to their defaults.
    pub fn from_answers(project_name: impl Into<String>, answers: &Answers) -> Result<Self> {
        let mut builder = Self::builder(project_name);

        if let Some(value) = choice(answers, "frontend") {
            builder = builder.frontend(value.parse()?);
        }
        if let Some(value) = choice(answers, "ui") {
            builder = builder.ui(value.parse()?);
        }
        if let Some(value) = choice(answers, "backend") {
            builder = builder.backend(value.parse()?);
        }
        if let Some(value) = confirm(answers, "typescript") {
            builder = builder.typescript(value);
        }
        if let Some(value) = confirm(answers, "auth") {
            builder = builder.auth(value);
        }
        if let Some(value) = confirm(answers, "animations") {
            builder = builder.animations(value);
        }
        if let Some(value) = confirm(answers, "threeD") {
            builder = builder.three_d(value);
        }
        if let Some(value) = confirm(answers, "testing") {
            builder = builder.testing(value);
        }
        if let Some(value) = confirm(answers, "docker") {
            builder = builder.docker(value);
        }

        Ok(builder.build())
    }

    pub fn project_name(&self) -> &str {
        &self.project_name
    }

    pub fn frontend(&self) -> Frontend {
        self.frontend
    }

    pub fn ui(&self) -> UiLibrary {
        self.ui
    }

    pub fn backend(&self) -> Backend {
        self.backend
    }

    pub fn typescript(&self) -> bool {
        self.typescript
    }

    pub fn auth(&self) -> bool {
        self.auth
    }

    pub fn animations(&self) -> bool {
        self.animations
    }

    pub fn three_d(&self) -> bool {
        self.three_d
    }

    pub fn testing(&self) -> bool {
        self.testing
    }

    pub fn docker(&self) -> bool {
        self.docker
    }

    pub fn has_backend(&self) -> bool {
        !self.backend.is_none()
    }

    /// Extension for JSX source files
    pub fn component_ext(&self) -> &'static str {
        if self.typescript {
            "tsx"
        } else {
            "jsx"
        }
    }

    /// Extension for plain script source files
    pub fn script_ext(&self) -> &'static str {
        if self.typescript {
            "ts"
        } else {
            "js"
        }
    }
}

fn choice<'a>(answers: &'a Answers, key: &str) -> Option<&'a str> {
    match answers.get(key) {
        Some(Answer::Choice(value)) => Some(value.as_str()),
        _ => None,
    }
}

fn confirm(answers: &Answers, key: &str) -> Option<bool> {
    match answers.get(key) {
        Some(Answer::Confirm(value)) => Some(*value),
        _ => None,
    }
}

/// Builder for [`ProjectConfig`]; defaults mirror the prompt defaults.
#[derive(Debug, Clone)]
pub struct ProjectConfigBuilder {
    project_name: String,
    frontend: Frontend,
    ui: UiLibrary,
    backend: Backend,
    typescript: bool,
    auth: bool,
    animations: bool,
    three_d: bool,
    testing: bool,
    docker: bool,
}

impl ProjectConfigBuilder {
    fn new(project_name: impl Into<String>) -> Self {
        Self {
            project_name: project_name.into(),
            frontend: Frontend::default(),
            ui: UiLibrary::default(),
            backend: Backend::default(),
            typescript: true,
            auth: true,
            animations: false,
            three_d: false,
            testing: true,
            docker: false,
        }
    }

    pub fn frontend(mut self, frontend: Frontend) -> Self {
        self.frontend = frontend;
        self
    }

    pub fn ui(mut self, ui: UiLibrary) -> Self {
        self.ui = ui;
        self
    }

    pub fn backend(mut self, backend: Backend) -> Self {
        self.backend = backend;
        self
    }

    pub fn typescript(mut self, typescript: bool) -> Self {
        self.typescript = typescript;
        self
    }

    pub fn auth(mut self, auth: bool) -> Self {
        self.auth = auth;
        self
    }

    pub fn animations(mut self, animations: bool) -> Self {
        self.animations = animations;
        self
    }

    pub fn three_d(mut self, three_d: bool) -> Self {
        self.three_d = three_d;
        self
    }

    pub fn testing(mut self, testing: bool) -> Self {
        self.testing = testing;
        self
    }

    pub fn docker(mut self, docker: bool) -> Self {
        self.docker = docker;
        self
    }

    /// Finish the config. Auth is dropped when there is no backend to authenticate against.
    pub fn build(self) -> ProjectConfig {
        ProjectConfig {
            auth: self.auth && !self.backend.is_none(),
            project_name: self.project_name,
            frontend: self.frontend,
            ui: self.ui,
            backend: self.backend,
            typescript: self.typescript,
            animations: self.animations,
            three_d: self.three_d,
            testing: self.testing,
            docker: self.docker,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults_match_prompt_defaults() {
        let config = ProjectConfig::builder("demo").build();
        assert_eq!(config.project_name(), "demo");
        assert_eq!(config.frontend(), Frontend::NextJs);
        assert_eq!(config.ui(), UiLibrary::Shadcn);
        assert_eq!(config.backend(), Backend::Firebase);
        assert!(config.typescript());
        assert!(config.auth());
        assert!(!config.animations());
        assert!(!config.three_d());
        assert!(config.testing());
        assert!(!config.docker());
    }

    #[test]
    fn test_auth_forced_off_without_backend() {
        let config = ProjectConfig::builder("demo")
            .backend(Backend::None)
            .auth(true)
            .build();
        assert!(!config.auth());
        assert!(!config.has_backend());
    }

    #[test]
    fn test_from_answers_applies_auth_correction() {
        let mut answers = Answers::new();
        answers.insert("backend".to_string(), Answer::Choice("none".to_string()));
        answers.insert("auth".to_string(), Answer::Confirm(true));

        let config = ProjectConfig::from_answers("demo", &answers).unwrap();
        assert_eq!(config.backend(), Backend::None);
        assert!(!config.auth());
    }

    #[test]
    fn test_from_answers_reads_every_field() {
        let mut answers = Answers::new();
        answers.insert("frontend".to_string(), Answer::Choice("react".to_string()));
        answers.insert("ui".to_string(), Answer::Choice("mui".to_string()));
        answers.insert("backend".to_string(), Answer::Choice("postgres".to_string()));
        answers.insert("typescript".to_string(), Answer::Confirm(false));
        answers.insert("auth".to_string(), Answer::Confirm(false));
        answers.insert("animations".to_string(), Answer::Confirm(true));
        answers.insert("threeD".to_string(), Answer::Confirm(true));
        answers.insert("testing".to_string(), Answer::Confirm(false));
        answers.insert("docker".to_string(), Answer::Confirm(true));

        let config = ProjectConfig::from_answers("demo", &answers).unwrap();
        assert_eq!(config.frontend(), Frontend::React);
        assert_eq!(config.ui(), UiLibrary::Mui);
        assert_eq!(config.backend(), Backend::Postgres);
        assert!(!config.typescript());
        assert!(!config.auth());
        assert!(config.animations());
        assert!(config.three_d());
        assert!(!config.testing());
        assert!(config.docker());
        assert_eq!(config.component_ext(), "jsx");
        assert_eq!(config.script_ext(), "js");
    }

    #[test]
    fn test_from_answers_rejects_unknown_choice() {
        let mut answers = Answers::new();
        answers.insert("backend".to_string(), Answer::Choice("supabase".to_string()));

        let err = ProjectConfig::from_answers("demo", &answers).unwrap_err();
        assert!(err.to_string().contains("supabase"));
    }

    #[test]
    fn test_ids_round_trip_through_from_str() {
        for backend in Backend::ALL {
            assert_eq!(backend.id().parse::<Backend>().unwrap(), backend);
        }
        assert_eq!("MongoDB".parse::<Backend>().unwrap(), Backend::MongoDb);
        assert_eq!("NEXTJS".parse::<Frontend>().unwrap(), Frontend::NextJs);
    }

    #[test]
    fn test_serializes_with_prompt_keys() {
        let config = ProjectConfig::builder("demo").three_d(true).build();
        let value = serde_json::to_value(&config).unwrap();
        assert_eq!(value["projectName"], "demo");
        assert_eq!(value["threeD"], true);
        assert_eq!(value["backend"], "firebase");
    }
}
