//! Project name validation using npm package naming rules

/// Names npm refuses outright
const BLACKLISTED_NAMES: &[&str] = &["node_modules", "favicon.ico"];

/// Node.js core modules; a package with one of these names would shadow it
const CORE_MODULES: &[&str] = &[
    "assert",
    "async_hooks",
    "buffer",
    "child_process",
    "cluster",
    "console",
    "constants",
    "crypto",
    "dgram",
    "diagnostics_channel",
    "dns",
    "domain",
    "events",
    "fs",
    "http",
    "http2",
    "https",
    "inspector",
    "module",
    "net",
    "os",
    "path",
    "perf_hooks",
    "process",
    "punycode",
    "querystring",
    "readline",
    "repl",
    "stream",
    "string_decoder",
    "sys",
    "timers",
    "tls",
    "trace_events",
    "tty",
    "url",
    "util",
    "v8",
    "vm",
    "wasi",
    "worker_threads",
    "zlib",
];

const MAX_NAME_LENGTH: usize = 214;

/// Result of validating a proposed project name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameValidation {
    pub valid: bool,
    pub errors: Vec<String>,
}

/// Validate a project name against npm's rules for new packages.
///
/// Every violation is collected so the caller can show them all at once.
pub fn validate_project_name(name: &str) -> NameValidation {
    let mut errors = Vec::new();

    if name.is_empty() {
        errors.push("name length must be greater than zero".to_string());
    }
    if name.starts_with('.') {
        errors.push("name cannot start with a period".to_string());
    }
    if name.starts_with('_') {
        errors.push("name cannot start with an underscore".to_string());
    }
    if name.trim() != name {
        errors.push("name cannot contain leading or trailing spaces".to_string());
    }

    let lowered = name.to_lowercase();
    if BLACKLISTED_NAMES.contains(&lowered.as_str()) {
        errors.push(format!("{} is a blacklisted name", lowered));
    }
    if CORE_MODULES.contains(&lowered.as_str()) {
        errors.push(format!("{} is a core module name", lowered));
    }

    if name.chars().count() > MAX_NAME_LENGTH {
        errors.push(format!(
            "name can no longer contain more than {} characters",
            MAX_NAME_LENGTH
        ));
    }
    if lowered != name {
        errors.push("name can no longer contain capital letters".to_string());
    }

    let base_name = name.rsplit('/').next().unwrap_or(name);
    if base_name.chars().any(|c| "~'!()*".contains(c)) {
        errors.push("name can no longer contain special characters (\"~'!()*\")".to_string());
    }

    if !is_url_friendly(name) {
        errors.push("name can only contain URL-friendly characters".to_string());
    }

    NameValidation {
        valid: errors.is_empty(),
        errors,
    }
}

/// Characters `encodeURIComponent` leaves untouched
fn is_unreserved(c: char) -> bool {
    c.is_ascii_alphanumeric() || "-_.!~*'()".contains(c)
}

/// A name is URL-friendly when it needs no percent-encoding, or when it is a scoped
/// name (`@scope/name`) whose two halves need none.
fn is_url_friendly(name: &str) -> bool {
    if name.chars().all(is_unreserved) {
        return true;
    }

    match name.strip_prefix('@').and_then(|rest| rest.split_once('/')) {
        Some((scope, package)) => {
            !scope.is_empty()
                && !package.is_empty()
                && scope.chars().all(is_unreserved)
                && package.chars().all(is_unreserved)
        }
        None => false,
    }
}
