//! The `ProjectConfig -> FileTree` mapping
//!
//! Generation runs in independent stages that touch disjoint paths. Nothing here does
//! I/O; the caller realizes the result with [`FileTree::write_to`].

use super::content::{backend, components, config_files, docker, docs, extras, source};
use super::manifest::PackageManifest;
use super::tree::FileTree;
use crate::config::{ProjectConfig, UiLibrary};
use crate::error::Result;

const BASE_DIRECTORIES: &[&str] = &[
    "src",
    "src/app",
    "src/app/about",
    "src/app/contact",
    "src/components",
    "src/components/ui",
    "src/lib",
    "src/hooks",
    "src/utils",
    "src/styles",
    "public",
    "public/images",
    ".github",
    ".github/workflows",
    ".vscode",
];

const BACKEND_DIRECTORIES: &[&str] = &[
    "src/backend",
    "src/backend/config",
    "src/backend/models",
    "src/backend/utils",
    "src/backend/lib",
    "scripts",
    "src/app/api/users",
    "src/app/api/users/[id]",
];

const TEST_DIRECTORIES: &[&str] = &[
    "__tests__",
    "__tests__/components",
    "__tests__/utils",
    "__tests__/pages",
];

/// Produce every directory and file for a project
pub fn generate(config: &ProjectConfig) -> Result<FileTree> {
    let mut tree = FileTree::new();

    directories(config, &mut tree);
    manifest(config, &mut tree);
    configuration(config, &mut tree)?;
    sources(config, &mut tree);
    if config.has_backend() {
        backend_files(config, &mut tree);
    }
    tree.file("README.md", docs::readme(config));
    additional_files(config, &mut tree);

    tracing::debug!(
        project = config.project_name(),
        entries = tree.len(),
        "generated project tree"
    );
    Ok(tree)
}

fn directories(config: &ProjectConfig, tree: &mut FileTree) {
    let mut groups = vec![BASE_DIRECTORIES];
    if config.has_backend() {
        groups.push(BACKEND_DIRECTORIES);
    }
    if config.testing() {
        groups.push(TEST_DIRECTORIES);
    }

    for dir in groups.into_iter().flatten() {
        tree.dir(*dir);
    }
}

fn manifest(config: &ProjectConfig, tree: &mut FileTree) {
    tree.json(
        "package.json",
        &PackageManifest::for_config(config).to_json(),
    );
}

fn configuration(config: &ProjectConfig, tree: &mut FileTree) -> Result<()> {
    tree.file("next.config.js", config_files::next_config(config));

    if config.typescript() {
        tree.json("tsconfig.json", &config_files::tsconfig());
    } else {
        tree.json("jsconfig.json", &config_files::jsconfig());
    }
    if config.ui().uses_tailwind() {
        tree.file("tailwind.config.js", config_files::tailwind_config(config));
        tree.file("postcss.config.js", config_files::POSTCSS_CONFIG);
    }

    tree.file(".eslintrc.js", config_files::eslint_config(config));
    tree.file(".prettierrc.js", config_files::PRETTIER_CONFIG);

    if config.testing() {
        tree.file("jest.config.js", config_files::JEST_CONFIG);
        tree.file("jest.setup.js", config_files::JEST_SETUP);
    }
    if config.docker() {
        tree.file("Dockerfile", docker::DOCKERFILE);
        tree.file("docker-compose.yml", docker::compose(config)?);
    }

    tree.file(".gitignore", config_files::GITIGNORE);
    Ok(())
}

fn sources(config: &ProjectConfig, tree: &mut FileTree) {
    let jsx = config.component_ext();

    tree.file(format!("src/app/layout.{jsx}"), source::layout(config));
    tree.file(format!("src/app/page.{jsx}"), source::home_page(config));
    tree.file(format!("src/app/about/page.{jsx}"), source::about_page(config));
    tree.file(
        format!("src/app/contact/page.{jsx}"),
        source::contact_page(config),
    );

    if config.ui() == UiLibrary::Shadcn {
        tree.file(
            format!("src/components/theme-provider.{jsx}"),
            source::theme_provider(config),
        );
        for (name, content) in components::all(config) {
            tree.file(format!("src/components/ui/{name}.{jsx}"), content);
        }
    }
    if config.animations() {
        tree.file(format!("src/components/fade-in.{jsx}"), source::fade_in(config));
    }
    if config.three_d() {
        tree.file(format!("src/components/scene.{jsx}"), source::scene(config));
    }

    tree.file(
        format!("src/lib/utils.{}", config.script_ext()),
        source::utils(config),
    );
    tree.file("src/app/globals.css", source::globals_css(config));
}

fn backend_files(config: &ProjectConfig, tree: &mut FileTree) {
    let ext = config.script_ext();

    if let Some((name, content)) = backend::connection_module(config) {
        tree.file(format!("src/backend/config/{name}.{ext}"), content);
    }
    if let Some(content) = backend::user_model(config) {
        tree.file(format!("src/backend/models/User.{ext}"), content);
    }
    if config.auth() {
        tree.file(format!("src/backend/utils/auth.{ext}"), backend::auth_utils(config));
    }

    tree.file(format!("src/app/api/users/route.{ext}"), backend::users_route(config));
    tree.file(
        format!("src/app/api/users/[id]/route.{ext}"),
        backend::user_route(config),
    );

    if let Some(script) = backend::seed_script(config) {
        tree.file("scripts/seed-db.js", script);
    }
}

fn additional_files(config: &ProjectConfig, tree: &mut FileTree) {
    tree.file(".env.example", extras::env_example(config));
    tree.file(".github/workflows/ci-cd.yml", extras::workflow(config));
    tree.json(".lintstagedrc.json", &extras::lint_staged());
    tree.json(".vscode/settings.json", &extras::vscode_settings());
    tree.json(".vscode/extensions.json", &extras::vscode_extensions(config));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Backend;
    use std::path::Path;
    use tempfile::TempDir;
    use walkdir::WalkDir;

    fn package_json(tree: &FileTree) -> serde_json::Value {
        serde_json::from_str(tree.content("package.json").unwrap()).unwrap()
    }

    #[test]
    fn test_frontend_only_tailwind_project() {
        let config = ProjectConfig::builder("demo")
            .backend(Backend::None)
            .typescript(true)
            .ui(UiLibrary::Tailwind)
            .testing(false)
            .docker(false)
            .build();
        let tree = generate(&config).unwrap();

        let manifest = package_json(&tree);
        for package in ["mongoose", "pg", "firebase"] {
            assert!(manifest["dependencies"].get(package).is_none(), "{}", package);
        }
        assert!(!tree.contains("scripts/seed-db.js"));
        assert!(!tree.contains("scripts"));
        assert!(tree.contains("tailwind.config.js"));
        assert!(!tree.contains("__tests__"));
        assert!(!tree.contains("src/backend"));
        assert!(!tree.contains("src/app/api/users/route.ts"));
    }

    #[test]
    fn test_mongodb_with_auth_project() {
        let config = ProjectConfig::builder("demo")
            .backend(Backend::MongoDb)
            .auth(true)
            .typescript(true)
            .build();
        let tree = generate(&config).unwrap();

        assert!(tree.contains("src/backend/config/mongodb.ts"));
        assert!(tree.contains("src/backend/models/User.ts"));
        assert!(tree.contains("src/backend/utils/auth.ts"));
        assert!(tree.contains("src/app/api/users/[id]/route.ts"));
        assert!(tree.contains("scripts/seed-db.js"));

        let manifest = package_json(&tree);
        for package in ["mongoose", "next-auth", "jsonwebtoken", "bcryptjs"] {
            assert!(manifest["dependencies"].get(package).is_some(), "{}", package);
        }
        assert_eq!(manifest["scripts"]["seed-db"], "node scripts/seed-db.js");
    }

    #[test]
    fn test_source_extensions_follow_typescript() {
        let check = |typescript: bool, allowed: &[&str], forbidden: &[&str]| {
            let config = ProjectConfig::builder("demo")
                .typescript(typescript)
                .backend(Backend::Postgres)
                .animations(true)
                .three_d(true)
                .build();
            let tree = generate(&config).unwrap();

            let sources: Vec<_> = tree
                .files()
                .filter(|p| p.starts_with("src/") && !p.ends_with(".css"))
                .collect();
            assert!(!sources.is_empty());
            for path in sources {
                let ext = path.rsplit('.').next().unwrap();
                assert!(allowed.contains(&ext), "{} has extension {}", path, ext);
                assert!(!forbidden.contains(&ext));
            }
        };

        check(true, &["ts", "tsx"], &["js", "jsx"]);
        check(false, &["js", "jsx"], &["ts", "tsx"]);
    }

    #[test]
    fn test_type_check_and_tsconfig_follow_typescript() {
        let ts = generate(&ProjectConfig::builder("demo").build()).unwrap();
        assert!(ts.contains("tsconfig.json"));
        assert!(package_json(&ts)["scripts"].get("type-check").is_some());

        let js = generate(&ProjectConfig::builder("demo").typescript(false).build()).unwrap();
        assert!(!js.contains("tsconfig.json"));
        assert!(package_json(&js)["scripts"].get("type-check").is_none());
        assert!(js.contains("src/lib/utils.js"));
        assert!(!js.contains("src/lib/utils.ts"));
    }

    #[test]
    fn test_javascript_projects_resolve_the_source_alias() {
        let ts = generate(&ProjectConfig::builder("demo").build()).unwrap();
        assert!(!ts.contains("jsconfig.json"));

        let js = generate(&ProjectConfig::builder("demo").typescript(false).build()).unwrap();
        let aliased: Vec<_> = js
            .files()
            .filter(|path| js.content(path).is_some_and(|c| c.contains("from '@/")))
            .collect();
        assert!(aliased.contains(&"src/app/page.jsx"));

        let jsconfig: serde_json::Value =
            serde_json::from_str(js.content("jsconfig.json").unwrap()).unwrap();
        assert_eq!(jsconfig["compilerOptions"]["paths"]["@/*"][0], "./src/*");
    }

    #[test]
    fn test_testing_directories() {
        let with = generate(&ProjectConfig::builder("demo").testing(true).build()).unwrap();
        for dir in TEST_DIRECTORIES {
            assert!(with.contains(dir), "{}", dir);
        }
        assert!(with.contains("jest.config.js"));

        let without = generate(&ProjectConfig::builder("demo").testing(false).build()).unwrap();
        for dir in TEST_DIRECTORIES {
            assert!(!without.contains(dir));
        }
        assert!(!without.contains("jest.setup.js"));
    }

    #[test]
    fn test_shadcn_components_only_for_shadcn() {
        let shadcn = generate(&ProjectConfig::builder("demo").build()).unwrap();
        for name in ["button", "card", "input", "label", "textarea"] {
            assert!(shadcn.contains(&format!("src/components/ui/{}.tsx", name)));
        }
        assert!(shadcn.contains("src/components/theme-provider.tsx"));

        let mui = generate(&ProjectConfig::builder("demo").ui(UiLibrary::Mui).build()).unwrap();
        assert!(!mui.contains("src/components/ui/button.tsx"));
        assert!(!mui.contains("tailwind.config.js"));
        assert!(mui.contains("src/components/ui"));
    }

    #[test]
    fn test_docker_files() {
        let config = ProjectConfig::builder("demo")
            .backend(Backend::Postgres)
            .docker(true)
            .build();
        let tree = generate(&config).unwrap();
        assert!(tree.contains("Dockerfile"));
        assert!(tree
            .content("docker-compose.yml")
            .unwrap()
            .contains("postgres:latest"));
        assert!(tree
            .content("next.config.js")
            .unwrap()
            .contains("output: 'standalone'"));
    }

    #[test]
    fn test_generation_is_deterministic() {
        let config = ProjectConfig::builder("demo").backend(Backend::MongoDb).build();
        assert_eq!(generate(&config).unwrap(), generate(&config).unwrap());
    }

    fn snapshot(root: &Path) -> Vec<(String, Option<Vec<u8>>)> {
        WalkDir::new(root)
            .sort_by_file_name()
            .into_iter()
            .map(|entry| entry.unwrap())
            .map(|entry| {
                let relative = entry
                    .path()
                    .strip_prefix(root)
                    .unwrap()
                    .to_string_lossy()
                    .into_owned();
                let content = entry
                    .file_type()
                    .is_file()
                    .then(|| std::fs::read(entry.path()).unwrap());
                (relative, content)
            })
            .collect()
    }

    #[tokio::test]
    async fn test_written_trees_are_byte_identical() {
        let config = ProjectConfig::builder("demo")
            .backend(Backend::Firebase)
            .docker(true)
            .three_d(true)
            .build();

        let first = TempDir::new().unwrap();
        let second = TempDir::new().unwrap();
        generate(&config)
            .unwrap()
            .write_to(&first.path().join("demo"))
            .await
            .unwrap();
        generate(&config)
            .unwrap()
            .write_to(&second.path().join("demo"))
            .await
            .unwrap();

        let first = snapshot(&first.path().join("demo"));
        let second = snapshot(&second.path().join("demo"));
        assert!(first.len() > 40);
        assert_eq!(first, second);
    }
}
