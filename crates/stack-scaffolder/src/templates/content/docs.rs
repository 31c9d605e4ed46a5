//! README composed from per-topic sections

use super::extras::{backend_env, APP_ENV, AUTH_ENV};
use crate::config::{Backend, ProjectConfig, UiLibrary};

fn yes_no(enabled: bool, detail: &str) -> String {
    match (enabled, detail.is_empty()) {
        (true, true) => "✅ Yes".to_string(),
        (true, false) => format!("✅ Yes ({detail})"),
        (false, _) => "❌ No".to_string(),
    }
}

fn bash(command: &str) -> String {
    format!("```bash\n{command}\n```")
}

fn features(config: &ProjectConfig) -> String {
    [
        "## 🚀 Features\n".to_string(),
        format!("- **Frontend:** {}", config.frontend().description()),
        format!("- **UI Framework:** {}", config.ui().description()),
        format!("- **Backend:** {}", config.backend().description()),
        format!("- **TypeScript:** {}", yes_no(config.typescript(), "")),
        format!("- **Authentication:** {}", yes_no(config.auth(), "")),
        format!(
            "- **Animations:** {}",
            yes_no(config.animations(), "Framer Motion & GSAP")
        ),
        format!("- **3D Support:** {}", yes_no(config.three_d(), "Three.js")),
        format!(
            "- **Testing:** {}",
            yes_no(config.testing(), "Jest & Testing Library")
        ),
        format!("- **Docker:** {}", yes_no(config.docker(), "")),
    ]
    .join("\n")
}

fn getting_started(config: &ProjectConfig) -> String {
    let mut steps = vec![
        format!(
            "**Navigate to the project:**\n   {}",
            bash(&format!("cd {}", config.project_name())).replace('\n', "\n   ")
        ),
        format!(
            "**Install dependencies:**\n   {}",
            bash("npm install\n# or\nyarn install\n# or\npnpm install").replace('\n', "\n   ")
        ),
        format!(
            "**Set up environment variables:**\n   {}\n\n   Edit the `.env` file with your configuration values.",
            bash("cp .env.example .env").replace('\n', "\n   ")
        ),
    ];
    if config.has_backend() {
        steps.push(format!(
            "**Seed the database (optional):**\n   {}",
            bash("npm run seed-db").replace('\n', "\n   ")
        ));
    }
    steps.push(format!(
        "**Start the development server:**\n   {}",
        bash("npm run dev").replace('\n', "\n   ")
    ));
    steps.push(
        "**Open your browser:**\n   Navigate to [http://localhost:3000](http://localhost:3000)"
            .to_string(),
    );

    let numbered: Vec<String> = steps
        .iter()
        .enumerate()
        .map(|(i, step)| format!("{}. {}", i + 1, step))
        .collect();

    format!(
        "## 🛠️ Getting Started\n\n### Prerequisites\n\n- Node.js 18+\n- npm, yarn, or pnpm\n\n### Installation\n\n{}",
        numbered.join("\n\n")
    )
}

fn project_structure(config: &ProjectConfig) -> String {
    let ext = config.component_ext();
    let mut lines = vec![
        format!("{}/", config.project_name()),
        "├── src/".to_string(),
        "│   ├── app/                 # Next.js app directory".to_string(),
        "│   │   ├── about/           # About page".to_string(),
        "│   │   ├── contact/         # Contact page".to_string(),
    ];
    if config.has_backend() {
        lines.push("│   │   ├── api/             # API routes".to_string());
    }
    lines.extend([
        "│   │   ├── globals.css      # Global styles".to_string(),
        format!("│   │   ├── layout.{ext}       # Root layout"),
        format!("│   │   └── page.{ext}         # Home page"),
        "│   ├── components/          # React components".to_string(),
        "│   │   └── ui/              # UI components".to_string(),
        "│   ├── lib/                 # Utility libraries".to_string(),
        "│   ├── hooks/               # Custom React hooks".to_string(),
    ]);
    if config.has_backend() {
        lines.extend([
            "│   ├── utils/               # Utility functions".to_string(),
            "│   └── backend/             # Backend code".to_string(),
            "│       ├── config/          # Database configuration".to_string(),
            "│       ├── models/          # Data models".to_string(),
            "│       └── utils/           # Backend utilities".to_string(),
        ]);
    } else {
        lines.push("│   └── utils/               # Utility functions".to_string());
    }
    lines.push("├── public/                  # Static assets".to_string());
    if config.testing() {
        lines.push("├── __tests__/               # Test files".to_string());
    }
    if config.has_backend() {
        lines.push("├── scripts/                 # Database scripts".to_string());
    }
    if config.docker() {
        lines.push("├── Dockerfile               # Docker configuration".to_string());
        lines.push("├── docker-compose.yml       # Docker Compose".to_string());
    }
    lines.extend([
        "├── .env.example             # Environment variables template".to_string(),
        "├── package.json             # Dependencies and scripts".to_string(),
        "└── README.md                # This file".to_string(),
    ]);

    format!("## 📁 Project Structure\n\n```\n{}\n```", lines.join("\n"))
}

fn scripts(config: &ProjectConfig) -> String {
    let mut lines = vec![
        "- `npm run dev` - Start development server",
        "- `npm run build` - Build for production",
        "- `npm run start` - Start production server",
        "- `npm run lint` - Run ESLint",
    ];
    if config.typescript() {
        lines.push("- `npm run type-check` - Run TypeScript type checking");
    }
    if config.testing() {
        lines.push("- `npm run test` - Run tests");
        lines.push("- `npm run test:watch` - Run tests in watch mode");
        lines.push("- `npm run test:coverage` - Run tests with coverage");
    }
    if config.has_backend() {
        lines.push("- `npm run seed-db` - Seed database with sample data");
    }
    format!("## 🔧 Available Scripts\n\n{}", lines.join("\n"))
}

fn environment(config: &ProjectConfig) -> String {
    let Some(backend) = backend_env(config) else {
        return "## ⚙️ Environment Variables\n\nThis project doesn't require environment variables for basic functionality.".to_string();
    };

    let mut blocks = vec![APP_ENV.to_string(), backend];
    if config.auth() {
        blocks.push(AUTH_ENV.to_string());
    }
    format!(
        "## ⚙️ Environment Variables\n\nCreate a `.env` file in the root directory with the following variables:\n\n```env\n{}```",
        blocks.join("\n")
    )
}

fn customization(config: &ProjectConfig) -> String {
    let styling = match config.ui() {
        UiLibrary::Shadcn => "- Components use ShadCN UI with Tailwind CSS",
        UiLibrary::Tailwind => "- Styling is done with Tailwind CSS",
        UiLibrary::Mui => "- Styling uses Material UI components",
    };
    let mut styling = vec![styling, "- Global styles are in `src/app/globals.css`"];
    if config.ui().uses_tailwind() {
        styling.push("- Tailwind configuration is in `tailwind.config.js`");
    }

    let mut out = format!(
        "## 🎨 Customization\n\n### Styling\n{}\n\n### Components\n- UI components are in `src/components/ui/`\n- Custom components go in `src/components/`\n- Follow the established patterns for consistency",
        styling.join("\n")
    );

    let database = match config.backend() {
        Backend::Firebase => Some(format!(
            "- Firebase configuration is in `src/backend/config/firebase.{}`",
            config.script_ext()
        )),
        Backend::MongoDb => Some("- MongoDB models are in `src/backend/models/`".to_string()),
        Backend::Postgres => Some("- PostgreSQL models are in `src/backend/models/`".to_string()),
        Backend::None => None,
    };
    if let Some(database) = database {
        out.push_str(&format!(
            "\n\n### Database\n{database}\n- Database utilities are in `src/backend/utils/`\n- API routes are in `src/app/api/`"
        ));
    }
    out
}

fn testing(config: &ProjectConfig) -> String {
    if !config.testing() {
        return "## 🧪 Testing\n\nTesting is not configured. You can add Jest and React Testing Library if needed.".to_string();
    }
    format!(
        "## 🧪 Testing\n\nThis project includes a testing setup:\n\n- **Jest** for unit testing\n- **React Testing Library** for component testing\n- Test files live in `__tests__/`\n\nRun tests with:\n{}\n\nFor watch mode:\n{}\n\nFor coverage:\n{}",
        bash("npm run test"),
        bash("npm run test:watch"),
        bash("npm run test:coverage"),
    )
}

fn deployment(config: &ProjectConfig) -> String {
    let docker = if config.docker() {
        format!(
            "Build and run with Docker:\n{}\n\nStop containers:\n{}",
            bash("docker-compose up -d"),
            bash("docker-compose down")
        )
    } else {
        "Docker configuration is not included. You can add a Dockerfile and docker-compose.yml if needed.".to_string()
    };
    format!(
        "## 🚢 Deployment\n\n### Vercel (Recommended)\n1. Push your code to GitHub\n2. Connect your repository to Vercel\n3. Configure environment variables in the Vercel dashboard\n4. Deploy!\n\n### Docker\n{docker}\n\n### Other Platforms\n- **Netlify:** Works well for static exports\n- **Railway:** Good for full-stack apps\n- **Heroku:** Classic choice for web apps"
    )
}

fn security(config: &ProjectConfig) -> String {
    let mut lines = vec!["- Input validation with Zod"];
    if config.auth() {
        lines.push("- JWT authentication");
        lines.push("- Password hashing with bcrypt");
    }
    lines.push("- Secrets kept in environment variables");
    format!("## 🔒 Security\n\n{}", lines.join("\n"))
}

fn learn_more(config: &ProjectConfig) -> String {
    let mut technologies = vec![
        "- [Next.js](https://nextjs.org/) - React framework",
        "- [React](https://react.dev/) - UI library",
    ];
    technologies.push(match config.ui() {
        UiLibrary::Shadcn => "- [ShadCN UI](https://ui.shadcn.com/) - UI components",
        UiLibrary::Tailwind => "- [Tailwind CSS](https://tailwindcss.com/) - Utility-first CSS",
        UiLibrary::Mui => "- [Material UI](https://mui.com/) - React components",
    });
    if config.typescript() {
        technologies.push("- [TypeScript](https://www.typescriptlang.org/) - Type safety");
    }
    match config.backend() {
        Backend::Firebase => {
            technologies.push("- [Firebase](https://firebase.google.com/) - Backend platform")
        }
        Backend::MongoDb => technologies.push("- [MongoDB](https://www.mongodb.com/) - Database"),
        Backend::Postgres => {
            technologies.push("- [PostgreSQL](https://www.postgresql.org/) - Database")
        }
        Backend::None => {}
    }
    if config.animations() {
        technologies.push("- [Framer Motion](https://www.framer.com/motion/) - Animations");
    }
    if config.three_d() {
        technologies.push("- [Three.js](https://threejs.org/) - 3D graphics");
    }

    let mut resources = vec![
        "- [Next.js Documentation](https://nextjs.org/docs)",
        "- [React Documentation](https://react.dev/learn)",
    ];
    if config.ui().uses_tailwind() {
        resources.push("- [Tailwind CSS Documentation](https://tailwindcss.com/docs)");
    }

    format!(
        "## 📚 Learn More\n\n### Technologies Used\n{}\n\n### Resources\n{}",
        technologies.join("\n"),
        resources.join("\n")
    )
}

const CONTRIBUTING: &str = "## 🤝 Contributing

1. Fork the repository
2. Create your feature branch (`git checkout -b feature/amazing-feature`)
3. Commit your changes (`git commit -m 'Add some amazing feature'`)
4. Push to the branch (`git push origin feature/amazing-feature`)
5. Open a Pull Request";

const LICENSE: &str = "## 📄 License

This project is licensed under the MIT License.";

/// `README.md`
pub fn readme(config: &ProjectConfig) -> String {
    let sections = [
        format!(
            "# {}\n\nThis project was generated using **create-stack-app**, a CLI for generating full-stack web applications.",
            config.project_name()
        ),
        features(config),
        getting_started(config),
        project_structure(config),
        scripts(config),
        environment(config),
        customization(config),
        testing(config),
        deployment(config),
        security(config),
        learn_more(config),
        CONTRIBUTING.to_string(),
        LICENSE.to_string(),
    ];
    let mut readme = sections.join("\n\n");
    readme.push('\n');
    readme
}
