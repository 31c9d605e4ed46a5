//! Tooling configuration: Next.js, TypeScript, Tailwind, ESLint, Prettier, Jest, git

use crate::config::ProjectConfig;
use serde_json::{json, Value};

pub fn next_config(config: &ProjectConfig) -> String {
    let output = if config.docker() {
        "\n  output: 'standalone',"
    } else {
        ""
    };

    format!(
        r#"/** @type {{import('next').NextConfig}} */
const nextConfig = {{
  reactStrictMode: true,{output}
  images: {{
    domains: ['localhost'],
  }},
  env: {{
    NEXT_PUBLIC_API_URL: process.env.NEXT_PUBLIC_API_URL,
  }},
}};

module.exports = nextConfig;
"#
    )
}

pub fn tsconfig() -> Value {
    json!({
        "compilerOptions": {
            "target": "es5",
            "lib": ["dom", "dom.iterable", "esnext"],
            "allowJs": true,
            "skipLibCheck": true,
            "strict": true,
            "forceConsistentCasingInFileNames": true,
            "noEmit": true,
            "esModuleInterop": true,
            "module": "esnext",
            "moduleResolution": "bundler",
            "resolveJsonModule": true,
            "isolatedModules": true,
            "jsx": "preserve",
            "incremental": true,
            "plugins": [{ "name": "next" }],
            "paths": { "@/*": ["./src/*"] },
            "baseUrl": "."
        },
        "include": ["next-env.d.ts", "**/*.ts", "**/*.tsx", ".next/types/**/*.ts"],
        "exclude": ["node_modules"]
    })
}

/// Path alias for JavaScript projects, matching the `@/*` entry in `tsconfig.json`
pub fn jsconfig() -> Value {
    json!({
        "compilerOptions": {
            "baseUrl": ".",
            "paths": { "@/*": ["./src/*"] }
        }
    })
}

pub const TAILWIND_CONFIG: &str = r#"/** @type {import('tailwindcss').Config} */
module.exports = {
  darkMode: ["class"],
  content: [
    './pages/**/*.{js,jsx,ts,tsx}',
    './components/**/*.{js,jsx,ts,tsx}',
    './app/**/*.{js,jsx,ts,tsx}',
    './src/**/*.{js,jsx,ts,tsx}',
  ],
  theme: {
    container: {
      center: true,
      padding: "2rem",
      screens: {
        "2xl": "1400px",
      },
    },
    extend: {
      colors: {
        border: "hsl(var(--border))",
        input: "hsl(var(--input))",
        ring: "hsl(var(--ring))",
        background: "hsl(var(--background))",
        foreground: "hsl(var(--foreground))",
        primary: {
          DEFAULT: "hsl(var(--primary))",
          foreground: "hsl(var(--primary-foreground))",
        },
        secondary: {
          DEFAULT: "hsl(var(--secondary))",
          foreground: "hsl(var(--secondary-foreground))",
        },
        destructive: {
          DEFAULT: "hsl(var(--destructive))",
          foreground: "hsl(var(--destructive-foreground))",
        },
        muted: {
          DEFAULT: "hsl(var(--muted))",
          foreground: "hsl(var(--muted-foreground))",
        },
        accent: {
          DEFAULT: "hsl(var(--accent))",
          foreground: "hsl(var(--accent-foreground))",
        },
        popover: {
          DEFAULT: "hsl(var(--popover))",
          foreground: "hsl(var(--popover-foreground))",
        },
        card: {
          DEFAULT: "hsl(var(--card))",
          foreground: "hsl(var(--card-foreground))",
        },
      },
      borderRadius: {
        lg: "var(--radius)",
        md: "calc(var(--radius) - 2px)",
        sm: "calc(var(--radius) - 4px)",
      },
      keyframes: {
        "accordion-down": {
          from: { height: 0 },
          to: { height: "var(--radix-accordion-content-height)" },
        },
        "accordion-up": {
          from: { height: "var(--radix-accordion-content-height)" },
          to: { height: 0 },
        },
      },
      animation: {
        "accordion-down": "accordion-down 0.2s ease-out",
        "accordion-up": "accordion-up 0.2s ease-out",
      },
    },
  },
  plugins: [],
}
"#;

/// Tailwind config; only shadcn projects ship the animate plugin
pub fn tailwind_config(config: &ProjectConfig) -> String {
    if config.ui() == crate::config::UiLibrary::Shadcn {
        TAILWIND_CONFIG.replace(
            "plugins: [],",
            "plugins: [require(\"tailwindcss-animate\")],",
        )
    } else {
        TAILWIND_CONFIG.to_string()
    }
}

pub const POSTCSS_CONFIG: &str = r#"module.exports = {
  plugins: {
    tailwindcss: {},
    autoprefixer: {},
  },
}
"#;

pub fn eslint_config(config: &ProjectConfig) -> String {
    let mut extends = vec!["'next/core-web-vitals'"];
    let mut rules = vec![
        "'react/react-in-jsx-scope': 'off'",
        "'react/prop-types': 'off'",
    ];
    let mut header = String::new();

    if config.typescript() {
        extends.push("'plugin:@typescript-eslint/recommended'");
        rules.push("'@typescript-eslint/explicit-module-boundary-types': 'off'");
        rules.push("'@typescript-eslint/no-unused-vars': ['error', { argsIgnorePattern: '^_' }]");
        header.push_str("  parser: '@typescript-eslint/parser',\n");
        header.push_str("  plugins: ['@typescript-eslint'],\n");
    }
    extends.push("'plugin:prettier/recommended'");
    rules.push("'prettier/prettier': 'error'");

    let indent = |items: &[&str]| {
        items
            .iter()
            .map(|item| format!("    {},\n", item))
            .collect::<String>()
    };

    format!(
        "module.exports = {{\n  extends: [\n{extends}  ],\n{header}  rules: {{\n{rules}  }},\n  settings: {{\n    react: {{\n      version: 'detect',\n    }},\n  }},\n}}\n",
        extends = indent(&extends),
        header = header,
        rules = indent(&rules),
    )
}

pub const PRETTIER_CONFIG: &str = r#"module.exports = {
  semi: true,
  trailingComma: 'es5',
  singleQuote: true,
  printWidth: 100,
  tabWidth: 2,
  useTabs: false,
};
"#;

pub const JEST_CONFIG: &str = r#"const nextJest = require('next/jest')

const createJestConfig = nextJest({
  dir: './',
})

const customJestConfig = {
  setupFilesAfterEnv: ['<rootDir>/jest.setup.js'],
  moduleNameMapper: {
    '^@/(.*)$': '<rootDir>/src/$1',
  },
  testEnvironment: 'jest-environment-jsdom',
}

module.exports = createJestConfig(customJestConfig)
"#;

pub const JEST_SETUP: &str = "import '@testing-library/jest-dom';\n";

pub const GITIGNORE: &str = r#"# Dependencies
node_modules/
/.pnp
.pnp.js

# Testing
/coverage

# Next.js
/.next/
/out/

# Production
/build

# Misc
.DS_Store
*.pem

# Debug
npm-debug.log*
yarn-debug.log*
yarn-error.log*

# Local env files
.env*.local
.env

# Vercel
.vercel

# TypeScript
*.tsbuildinfo
next-env.d.ts

# IDE
.idea/

# Logs
logs
*.log

# Database
*.db
*.sqlite
"#;
