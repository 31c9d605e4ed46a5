//! Content builders for every generated file.
//!
//! Each function takes the [`ProjectConfig`](crate::config::ProjectConfig) and returns
//! finished file text. Templates that contain a lot of JSX keep their braces verbatim
//! and mark substitutions as `__NAME__`, filled in by [`fill`].

pub mod backend;
pub mod components;
pub mod config_files;
pub mod docker;
pub mod docs;
pub mod extras;
pub mod source;

/// Replace each `__KEY__` marker in `template` with its value
pub(crate) fn fill(template: &str, vars: &[(&str, &str)]) -> String {
    vars.iter().fold(template.to_string(), |text, (key, value)| {
        text.replace(&format!("__{}__", key), value)
    })
}

/// Pick the TypeScript or JavaScript spelling of a fragment
pub(crate) fn ts<'a>(typescript: bool, ts: &'a str, js: &'a str) -> &'a str {
    if typescript {
        ts
    } else {
        js
    }
}
