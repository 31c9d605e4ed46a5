//! `package.json` generation
//!
//! The manifest is assembled from layers of entries, each gated by a predicate on the
//! config. Nothing is inserted and later deleted: a script or dependency either has a
//! layer that applies or it is absent.

use crate::config::{Backend, ProjectConfig, UiLibrary};
use indexmap::IndexMap;

type Pairs = &'static [(&'static str, &'static str)];

const BASE_SCRIPTS: Pairs = &[
    ("dev", "next dev"),
    ("build", "next build"),
    ("start", "next start"),
    ("lint", "next lint"),
];

const BASE_DEPENDENCIES: Pairs = &[
    ("next", "14.2.4"),
    ("react", "18.2.0"),
    ("react-dom", "18.2.0"),
    ("zod", "3.22.4"),
    ("class-variance-authority", "0.7.0"),
    ("clsx", "2.1.0"),
    ("tailwind-merge", "2.2.1"),
    ("lucide-react", "0.344.0"),
];

const BASE_DEV_DEPENDENCIES: Pairs = &[
    ("eslint", "8.57.0"),
    ("eslint-config-next", "14.2.4"),
    ("eslint-config-prettier", "9.1.0"),
    ("eslint-plugin-prettier", "5.1.3"),
    ("prettier", "3.2.5"),
    ("husky", "9.0.11"),
    ("lint-staged", "15.2.2"),
];

const TAILWIND_DEPENDENCIES: Pairs = &[
    ("tailwindcss", "3.4.1"),
    ("postcss", "8.4.35"),
    ("autoprefixer", "10.4.18"),
];

const SHADCN_DEPENDENCIES: Pairs = &[
    ("@radix-ui/react-icons", "1.3.0"),
    ("@radix-ui/react-slot", "1.0.2"),
    ("@radix-ui/react-dialog", "1.0.5"),
    ("@radix-ui/react-dropdown-menu", "2.0.6"),
    ("@radix-ui/react-avatar", "1.0.4"),
    ("@radix-ui/react-label", "2.0.2"),
    ("tailwindcss-animate", "1.0.7"),
    ("next-themes", "0.2.1"),
];

const MUI_DEPENDENCIES: Pairs = &[
    ("@mui/material", "5.15.12"),
    ("@mui/icons-material", "5.15.12"),
    ("@emotion/react", "11.11.4"),
    ("@emotion/styled", "11.11.0"),
];

const FIREBASE_DEPENDENCIES: Pairs = &[("firebase", "10.8.1"), ("firebase-admin", "12.0.0")];

const MONGODB_DEPENDENCIES: Pairs = &[("mongoose", "8.2.1"), ("mongodb", "6.3.0")];

const POSTGRES_DEPENDENCIES: Pairs = &[("pg", "8.11.3"), ("sequelize", "6.37.1")];

const AUTH_DEPENDENCIES: Pairs = &[("next-auth", "4.24.6"), ("jsonwebtoken", "9.0.2")];

const ANIMATION_DEPENDENCIES: Pairs = &[("framer-motion", "11.0.8"), ("gsap", "3.12.5")];

const THREE_D_DEPENDENCIES: Pairs = &[
    ("three", "0.162.0"),
    ("@react-three/fiber", "8.15.19"),
    ("@react-three/drei", "9.102.6"),
];

const TYPESCRIPT_DEV_DEPENDENCIES: Pairs = &[
    ("typescript", "5.4.2"),
    ("@types/react", "18.2.64"),
    ("@types/node", "20.11.25"),
    ("@types/react-dom", "18.2.21"),
    ("@typescript-eslint/parser", "7.1.1"),
    ("@typescript-eslint/eslint-plugin", "7.1.1"),
];

const TESTING_DEV_DEPENDENCIES: Pairs = &[
    ("jest", "29.7.0"),
    ("@testing-library/react", "14.2.1"),
    ("@testing-library/jest-dom", "6.4.2"),
    ("@testing-library/user-event", "14.5.2"),
    ("jest-environment-jsdom", "29.7.0"),
];

/// Which section of the manifest a layer feeds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Scripts,
    Dependencies,
    DevDependencies,
}

/// A group of entries that applies when its predicate holds
struct Layer {
    section: Section,
    applies: fn(&ProjectConfig) -> bool,
    entries: Pairs,
}

fn layer(section: Section, applies: fn(&ProjectConfig) -> bool, entries: Pairs) -> Layer {
    Layer {
        section,
        applies,
        entries,
    }
}

fn always(_: &ProjectConfig) -> bool {
    true
}

/// The auth helpers and the mongoose User model both hash with bcrypt
fn hashes_passwords(config: &ProjectConfig) -> bool {
    config.auth() || config.backend() == Backend::MongoDb
}

/// Every layer, in the order entries appear in the written file
fn layers() -> Vec<Layer> {
    use Section::*;

    vec![
        // scripts
        layer(Scripts, always, BASE_SCRIPTS),
        layer(Scripts, |c| c.typescript(), &[("type-check", "tsc --noEmit")]),
        layer(
            Scripts,
            |c| c.testing(),
            &[
                ("test", "jest"),
                ("test:watch", "jest --watch"),
                ("test:coverage", "jest --coverage"),
            ],
        ),
        layer(Scripts, always, &[("prepare", "husky install")]),
        layer(
            Scripts,
            |c| c.has_backend(),
            &[("seed-db", "node scripts/seed-db.js")],
        ),
        // dependencies
        layer(Dependencies, always, BASE_DEPENDENCIES),
        layer(Dependencies, |c| c.ui() == UiLibrary::Shadcn, SHADCN_DEPENDENCIES),
        layer(Dependencies, |c| c.ui().uses_tailwind(), TAILWIND_DEPENDENCIES),
        layer(Dependencies, |c| c.ui() == UiLibrary::Mui, MUI_DEPENDENCIES),
        layer(
            Dependencies,
            |c| c.backend() == Backend::Firebase,
            FIREBASE_DEPENDENCIES,
        ),
        layer(
            Dependencies,
            |c| c.backend() == Backend::MongoDb,
            MONGODB_DEPENDENCIES,
        ),
        layer(
            Dependencies,
            |c| c.backend() == Backend::Postgres,
            POSTGRES_DEPENDENCIES,
        ),
        layer(Dependencies, |c| c.auth(), AUTH_DEPENDENCIES),
        layer(Dependencies, hashes_passwords, &[("bcryptjs", "2.4.3")]),
        layer(Dependencies, |c| c.animations(), ANIMATION_DEPENDENCIES),
        layer(Dependencies, |c| c.three_d(), THREE_D_DEPENDENCIES),
        // devDependencies
        layer(DevDependencies, always, BASE_DEV_DEPENDENCIES),
        layer(DevDependencies, |c| c.typescript(), TYPESCRIPT_DEV_DEPENDENCIES),
        layer(
            DevDependencies,
            |c| c.typescript() && c.backend() == Backend::Postgres,
            &[("@types/pg", "8.11.0")],
        ),
        layer(DevDependencies, |c| c.has_backend(), &[("dotenv", "16.4.5")]),
        layer(
            DevDependencies,
            |c| c.typescript() && c.auth(),
            &[("@types/jsonwebtoken", "9.0.5")],
        ),
        layer(
            DevDependencies,
            |c| c.typescript() && hashes_passwords(c),
            &[("@types/bcryptjs", "2.4.6")],
        ),
        layer(
            DevDependencies,
            |c| c.typescript() && c.animations(),
            &[("@types/gsap", "3.0.0")],
        ),
        layer(
            DevDependencies,
            |c| c.typescript() && c.three_d(),
            &[("@types/three", "0.162.0")],
        ),
        layer(DevDependencies, |c| c.testing(), TESTING_DEV_DEPENDENCIES),
        layer(
            DevDependencies,
            |c| c.typescript() && c.testing(),
            &[("@types/jest", "29.5.12"), ("ts-jest", "29.1.2")],
        ),
    ]
}

/// The generated `package.json`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageManifest {
    pub name: String,
    pub version: String,
    pub private: bool,
    pub scripts: IndexMap<String, String>,
    pub dependencies: IndexMap<String, String>,
    pub dev_dependencies: IndexMap<String, String>,
}

impl PackageManifest {
    /// Build the manifest for a project
    pub fn for_config(config: &ProjectConfig) -> Self {
        let mut manifest = Self {
            name: config.project_name().to_string(),
            version: "0.1.0".to_string(),
            private: true,
            scripts: IndexMap::new(),
            dependencies: IndexMap::new(),
            dev_dependencies: IndexMap::new(),
        };

        for layer in layers().iter().filter(|l| (l.applies)(config)) {
            let target = match layer.section {
                Section::Scripts => &mut manifest.scripts,
                Section::Dependencies => &mut manifest.dependencies,
                Section::DevDependencies => &mut manifest.dev_dependencies,
            };
            for (name, value) in layer.entries {
                target.insert(name.to_string(), value.to_string());
            }
        }

        manifest
    }

    /// Whether a package appears in either dependency section
    pub fn depends_on(&self, package: &str) -> bool {
        self.dependencies.contains_key(package) || self.dev_dependencies.contains_key(package)
    }

    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "name": self.name,
            "version": self.version,
            "private": self.private,
            "scripts": self.scripts,
            "dependencies": self.dependencies,
            "devDependencies": self.dev_dependencies,
        })
    }
}
