//! Application source: layout, pages, shared components, styles

use super::{fill, ts};
use crate::config::{ProjectConfig, UiLibrary};

const LAYOUT: &str = r#"__METADATA_IMPORT__import { Inter } from 'next/font/google';
import './globals.css';
__THEME_IMPORT__
const inter = Inter({ subsets: ['latin'] });

export const metadata__METADATA_TYPE__ = {
  title: '__TITLE__',
  description: '__DESCRIPTION__',
};

export default function RootLayout({
  children,
}__CHILDREN_TYPE__) {
  return (
    <html lang="en" suppressHydrationWarning>
      <body className={inter.className}>
__BODY__      </body>
    </html>
  );
}
"#;

const THEMED_BODY: &str = r#"        <ThemeProvider
          attribute="class"
          defaultTheme="system"
          enableSystem
          disableTransitionOnChange
        >
          {children}
        </ThemeProvider>
"#;

pub fn layout(config: &ProjectConfig) -> String {
    let shadcn = config.ui() == UiLibrary::Shadcn;
    let typescript = config.typescript();

    fill(
        LAYOUT,
        &[
            (
                "METADATA_IMPORT",
                ts(typescript, "import type { Metadata } from 'next';\n", ""),
            ),
            (
                "THEME_IMPORT",
                if shadcn {
                    "import { ThemeProvider } from '@/components/theme-provider';\n"
                } else {
                    ""
                },
            ),
            ("METADATA_TYPE", ts(typescript, ": Metadata", "")),
            ("TITLE", config.project_name()),
            ("DESCRIPTION", stack_summary(config).as_str()),
            (
                "CHILDREN_TYPE",
                ts(typescript, ": {\n  children: React.ReactNode;\n}", ""),
            ),
            (
                "BODY",
                if shadcn {
                    THEMED_BODY
                } else {
                    "        {children}\n"
                },
            ),
        ],
    )
}

/// One-line description of the chosen stack, e.g. "Next.js, TypeScript, and Tailwind CSS"
fn stack_summary(config: &ProjectConfig) -> String {
    let styling = match config.ui() {
        UiLibrary::Mui => "Material UI",
        UiLibrary::Shadcn | UiLibrary::Tailwind => "Tailwind CSS",
    };
    if config.typescript() {
        format!("A modern web application built with Next.js, TypeScript, and {styling}.")
    } else {
        format!("A modern web application built with Next.js and {styling}.")
    }
}

fn muted(config: &ProjectConfig) -> &'static str {
    if config.ui() == UiLibrary::Shadcn {
        "text-muted-foreground"
    } else {
        "text-gray-600"
    }
}

/// Prefix every non-empty line with `width` spaces
fn indent(text: &str, width: usize) -> String {
    let pad = " ".repeat(width);
    text.lines()
        .map(|line| {
            if line.is_empty() {
                "\n".to_string()
            } else {
                format!("{pad}{line}\n")
            }
        })
        .collect()
}

/// A card block at section depth, built from shadcn primitives or plain elements
fn card(config: &ProjectConfig, title: &str, description: Option<&str>, body: &str) -> String {
    if config.ui() == UiLibrary::Shadcn {
        let description = description
            .map(|d| format!("            <CardDescription>{d}</CardDescription>\n"))
            .unwrap_or_default();
        format!(
            "        <Card>\n          <CardHeader>\n            <CardTitle>{title}</CardTitle>\n{description}          </CardHeader>\n          <CardContent>\n{body}          </CardContent>\n        </Card>\n",
            body = indent(body, 12),
        )
    } else {
        let description = description
            .map(|d| format!("          <p className=\"mb-4 text-sm text-gray-500\">{d}</p>\n"))
            .unwrap_or_default();
        format!(
            "        <div className=\"rounded-lg border p-6 shadow-sm\">\n          <h3 className=\"mb-2 text-2xl font-semibold\">{title}</h3>\n{description}{body}        </div>\n",
            body = indent(body, 10),
        )
    }
}

fn import_block(lines: &[&str]) -> String {
    lines.iter().map(|line| format!("{line}\n")).collect()
}

const HOME_PAGE: &str = r#"__IMPORTS__export default function HomePage() {
  return (
    <div className="container mx-auto px-4 py-8">
__HERO__
      <section className="grid gap-6 sm:grid-cols-2 lg:grid-cols-3">
__CARDS__      </section>
__SCENE__    </div>
  );
}
"#;

const HERO: &str = r#"<section className="mb-12 text-center">
  <h1 className="mb-4 text-4xl font-bold tracking-tight sm:text-5xl">
    Welcome to __NAME__
  </h1>
  <p className="mx-auto max-w-2xl text-lg __MUTED__">
    __SUMMARY__
  </p>
</section>
"#;

const SCENE_SECTION: &str = r#"
      <section className="mt-12">
        <Scene />
      </section>
"#;

pub fn home_page(config: &ProjectConfig) -> String {
    let mut imports = Vec::new();
    if config.ui() == UiLibrary::Shadcn {
        imports.push(
            "import { Card, CardContent, CardDescription, CardHeader, CardTitle } from '@/components/ui/card';",
        );
    }
    if config.animations() {
        imports.push("import { FadeIn } from '@/components/fade-in';");
    }
    if config.three_d() {
        imports.push("import { Scene } from '@/components/scene';");
    }
    let mut imports = import_block(&imports);
    if !imports.is_empty() {
        imports.push('\n');
    }

    let hero = fill(
        HERO,
        &[
            ("NAME", config.project_name()),
            ("MUTED", muted(config)),
            ("SUMMARY", stack_summary(config).as_str()),
        ],
    );
    let hero = if config.animations() {
        format!("      <FadeIn>\n{}      </FadeIn>\n", indent(&hero, 8))
    } else {
        indent(&hero, 6)
    };

    let cards = [
        card(
            config,
            "🚀 Modern Stack",
            Some("Built with the latest technologies"),
            "<p>Next.js 14, React 18, and a curated set of tools.</p>",
        ),
        card(
            config,
            "⚡ Fast Development",
            Some("Get started quickly"),
            "<p>Pre-configured with best practices and modern tooling.</p>",
        ),
        card(
            config,
            "🎨 Beautiful UI",
            Some("Stunning user interface"),
            "<p>Responsive components ready to customize.</p>",
        ),
    ]
    .join("\n");

    fill(
        HOME_PAGE,
        &[
            ("IMPORTS", imports.as_str()),
            ("HERO", hero.as_str()),
            ("CARDS", cards.as_str()),
            ("SCENE", if config.three_d() { SCENE_SECTION } else { "" }),
        ],
    )
}

const ABOUT_PAGE: &str = r#"__IMPORTS__export default function AboutPage() {
  return (
    <div className="container mx-auto px-4 py-8">
      <section className="mb-12">
        <h1 className="mb-4 text-4xl font-bold tracking-tight">About Us</h1>
        <p className="text-lg __MUTED__">Learn more about our mission and values.</p>
      </section>

      <section className="grid gap-6 sm:grid-cols-2">
__CARDS__      </section>
    </div>
  );
}
"#;

pub fn about_page(config: &ProjectConfig) -> String {
    let imports = if config.ui() == UiLibrary::Shadcn {
        "import { Card, CardContent, CardHeader, CardTitle } from '@/components/ui/card';\n\n"
    } else {
        ""
    };

    let cards = [
        card(
            config,
            "Our Mission",
            None,
            "<p>\n  We are dedicated to providing the best possible experience for our users.\n  Our mission is to create innovative solutions that make a difference.\n</p>",
        ),
        card(
            config,
            "Our Values",
            None,
            "<ul className=\"list-disc pl-4\">\n  <li>Innovation</li>\n  <li>Quality</li>\n  <li>User Focus</li>\n  <li>Integrity</li>\n</ul>",
        ),
    ]
    .join("\n");

    fill(
        ABOUT_PAGE,
        &[
            ("IMPORTS", imports),
            ("MUTED", muted(config)),
            ("CARDS", cards.as_str()),
        ],
    )
}

const CONTACT_PAGE: &str = r#"'use client';

import { useState } from 'react';
__IMPORTS__
export default function ContactPage() {
  const [formData, setFormData] = useState({
    name: '',
    email: '',
    message: '',
  });

  const handleSubmit = (e__SUBMIT_TYPE__) => {
    e.preventDefault();
    console.log('Form submitted:', formData);
  };

  const handleChange = (e__CHANGE_TYPE__) => {
    setFormData((prev) => ({
      ...prev,
      [e.target.name]: e.target.value,
    }));
  };

  return (
    <div className="container mx-auto px-4 py-8">
      <section className="mb-12">
        <h1 className="mb-4 text-4xl font-bold tracking-tight">Contact Us</h1>
        <p className="text-lg __MUTED__">Get in touch with our team.</p>
      </section>

      <section className="mx-auto max-w-2xl">
__FORM__      </section>
    </div>
  );
}
"#;

/// A labelled form control, at form depth
fn form_field(shadcn: bool, id: &str, label: &str, textarea: bool, attrs: &[&str]) -> String {
    let (label_tag, label_class) = if shadcn {
        ("Label", "")
    } else {
        ("label", " className=\"mb-1 block text-sm font-medium\"")
    };
    let control = match (shadcn, textarea) {
        (true, true) => "Textarea",
        (true, false) => "Input",
        (false, true) => "textarea",
        (false, false) => "input",
    };

    let mut lines = vec![
        format!("id=\"{id}\""),
        format!("name=\"{id}\""),
    ];
    lines.extend(attrs.iter().map(|attr| attr.to_string()));
    lines.push(format!("value={{formData.{id}}}"));
    lines.push("onChange={handleChange}".to_string());
    if !shadcn {
        lines.push("className=\"w-full rounded-md border px-3 py-2\"".to_string());
    }
    lines.push("required".to_string());
    let attributes: String = lines.iter().map(|line| format!("    {line}\n")).collect();

    format!(
        "<div>\n  <{label_tag} htmlFor=\"{id}\"{label_class}>{label}</{label_tag}>\n  <{control}\n{attributes}  />\n</div>\n"
    )
}

pub fn contact_page(config: &ProjectConfig) -> String {
    let shadcn = config.ui() == UiLibrary::Shadcn;
    let typescript = config.typescript();

    let imports = if shadcn {
        import_block(&[
            "import { Button } from '@/components/ui/button';",
            "import { Card, CardContent, CardHeader, CardTitle } from '@/components/ui/card';",
            "import { Input } from '@/components/ui/input';",
            "import { Label } from '@/components/ui/label';",
            "import { Textarea } from '@/components/ui/textarea';",
        ])
    } else {
        String::new()
    };

    let fields = [
        form_field(shadcn, "name", "Name", false, &["placeholder=\"Your name\""]),
        form_field(
            shadcn,
            "email",
            "Email",
            false,
            &["type=\"email\"", "placeholder=\"your.email@example.com\""],
        ),
        form_field(
            shadcn,
            "message",
            "Message",
            true,
            &["placeholder=\"Your message\"", "rows={4}"],
        ),
    ]
    .concat();

    let submit = if shadcn {
        "<Button type=\"submit\">Send Message</Button>"
    } else {
        "<button type=\"submit\" className=\"rounded-md bg-black px-4 py-2 text-white\">\n  Send Message\n</button>"
    };

    let form = format!(
        "<form onSubmit={{handleSubmit}} className=\"space-y-4\">\n{}{}</form>",
        indent(&fields, 2),
        indent(submit, 2),
    );

    let form_card = card(config, "Send us a message", None, &form);

    fill(
        CONTACT_PAGE,
        &[
            ("IMPORTS", imports.as_str()),
            ("SUBMIT_TYPE", ts(typescript, ": React.FormEvent", "")),
            (
                "CHANGE_TYPE",
                ts(
                    typescript,
                    ": React.ChangeEvent<HTMLInputElement | HTMLTextAreaElement>",
                    "",
                ),
            ),
            ("MUTED", muted(config)),
            ("FORM", form_card.as_str()),
        ],
    )
}

pub fn theme_provider(config: &ProjectConfig) -> String {
    if config.typescript() {
        r#"'use client';

import * as React from 'react';
import { ThemeProvider as NextThemesProvider } from 'next-themes';
import { type ThemeProviderProps } from 'next-themes/dist/types';

export function ThemeProvider({ children, ...props }: ThemeProviderProps) {
  return <NextThemesProvider {...props}>{children}</NextThemesProvider>;
}
"#
        .to_string()
    } else {
        r#"'use client';

import * as React from 'react';
import { ThemeProvider as NextThemesProvider } from 'next-themes';

export function ThemeProvider({ children, ...props }) {
  return <NextThemesProvider {...props}>{children}</NextThemesProvider>;
}
"#
        .to_string()
    }
}

/// The `cn` class-name helper
pub fn utils(config: &ProjectConfig) -> String {
    if config.typescript() {
        r#"import { type ClassValue, clsx } from 'clsx';
import { twMerge } from 'tailwind-merge';

export function cn(...inputs: ClassValue[]) {
  return twMerge(clsx(inputs));
}
"#
        .to_string()
    } else {
        r#"import { clsx } from 'clsx';
import { twMerge } from 'tailwind-merge';

export function cn(...inputs) {
  return twMerge(clsx(inputs));
}
"#
        .to_string()
    }
}

const FADE_IN: &str = r#"'use client';

import { motion } from 'framer-motion';
__TYPES__
export function FadeIn({ children, delay = 0 }__PROPS_TYPE__) {
  return (
    <motion.div
      initial={{ opacity: 0, y: 16 }}
      animate={{ opacity: 1, y: 0 }}
      transition={{ duration: 0.5, delay }}
    >
      {children}
    </motion.div>
  );
}
"#;

pub fn fade_in(config: &ProjectConfig) -> String {
    let typescript = config.typescript();
    fill(
        FADE_IN,
        &[
            (
                "TYPES",
                ts(
                    typescript,
                    "import type { ReactNode } from 'react';\n\ninterface FadeInProps {\n  children: ReactNode;\n  delay?: number;\n}\n",
                    "",
                ),
            ),
            ("PROPS_TYPE", ts(typescript, ": FadeInProps", "")),
        ],
    )
}

const SCENE: &str = r#"'use client';

import { useRef } from 'react';
import { Canvas, useFrame } from '@react-three/fiber';
import { OrbitControls } from '@react-three/drei';
__TYPES__
function SpinningBox() {
  const mesh = useRef__MESH_TYPE__(null);

  useFrame((_, delta) => {
    if (mesh.current) {
      mesh.current.rotation.x += delta * 0.5;
      mesh.current.rotation.y += delta * 0.5;
    }
  });

  return (
    <mesh ref={mesh}>
      <boxGeometry args={[1, 1, 1]} />
      <meshStandardMaterial color="hotpink" />
    </mesh>
  );
}

export function Scene() {
  return (
    <div className="h-96 w-full">
      <Canvas camera={{ position: [0, 0, 3] }}>
        <ambientLight intensity={0.5} />
        <directionalLight position={[2, 2, 2]} />
        <SpinningBox />
        <OrbitControls />
      </Canvas>
    </div>
  );
}
"#;

pub fn scene(config: &ProjectConfig) -> String {
    let typescript = config.typescript();
    fill(
        SCENE,
        &[
            ("TYPES", ts(typescript, "import type { Mesh } from 'three';\n", "")),
            ("MESH_TYPE", ts(typescript, "<Mesh>", "")),
        ],
    )
}

const TAILWIND_DIRECTIVES: &str = "@tailwind base;\n@tailwind components;\n@tailwind utilities;\n";

const DESIGN_TOKENS: &str = r#"
@layer base {
  :root {
    --background: 0 0% 100%;
    --foreground: 222.2 84% 4.9%;

    --card: 0 0% 100%;
    --card-foreground: 222.2 84% 4.9%;

    --popover: 0 0% 100%;
    --popover-foreground: 222.2 84% 4.9%;

    --primary: 222.2 47.4% 11.2%;
    --primary-foreground: 210 40% 98%;

    --secondary: 210 40% 96.1%;
    --secondary-foreground: 222.2 47.4% 11.2%;

    --muted: 210 40% 96.1%;
    --muted-foreground: 215.4 16.3% 46.9%;

    --accent: 210 40% 96.1%;
    --accent-foreground: 222.2 47.4% 11.2%;

    --destructive: 0 84.2% 60.2%;
    --destructive-foreground: 210 40% 98%;

    --border: 214.3 31.8% 91.4%;
    --input: 214.3 31.8% 91.4%;
    --ring: 222.2 84% 4.9%;

    --radius: 0.5rem;
  }

  .dark {
    --background: 222.2 84% 4.9%;
    --foreground: 210 40% 98%;

    --card: 222.2 84% 4.9%;
    --card-foreground: 210 40% 98%;

    --popover: 222.2 84% 4.9%;
    --popover-foreground: 210 40% 98%;

    --primary: 210 40% 98%;
    --primary-foreground: 222.2 47.4% 11.2%;

    --secondary: 217.2 32.6% 17.5%;
    --secondary-foreground: 210 40% 98%;

    --muted: 217.2 32.6% 17.5%;
    --muted-foreground: 215 20.2% 65.1%;

    --accent: 217.2 32.6% 17.5%;
    --accent-foreground: 210 40% 98%;

    --destructive: 0 62.8% 30.6%;
    --destructive-foreground: 210 40% 98%;

    --border: 217.2 32.6% 17.5%;
    --input: 217.2 32.6% 17.5%;
    --ring: 212.7 26.8% 83.9%;
  }
}

@layer base {
  * {
    @apply border-border;
  }
  body {
    @apply bg-background text-foreground;
  }
}
"#;

const CSS_RESET: &str = r#"*,
*::before,
*::after {
  box-sizing: border-box;
}

html,
body {
  margin: 0;
  padding: 0;
}

body {
  font-family: system-ui, -apple-system, 'Segoe UI', Roboto, sans-serif;
}
"#;

pub fn globals_css(config: &ProjectConfig) -> String {
    match config.ui() {
        UiLibrary::Shadcn => format!("{TAILWIND_DIRECTIVES}{DESIGN_TOKENS}"),
        UiLibrary::Tailwind => TAILWIND_DIRECTIVES.to_string(),
        UiLibrary::Mui => CSS_RESET.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shadcn() -> ProjectConfig {
        ProjectConfig::builder("demo").build()
    }

    fn plain_js() -> ProjectConfig {
        ProjectConfig::builder("demo")
            .ui(UiLibrary::Tailwind)
            .typescript(false)
            .build()
    }

    #[test]
    fn test_layout_wraps_children_for_shadcn() {
        let layout = layout(&shadcn());
        assert!(layout.contains("import { ThemeProvider } from '@/components/theme-provider';"));
        assert!(layout.contains("<ThemeProvider\n          attribute=\"class\""));
        assert!(layout.contains("export const metadata: Metadata = {"));
        assert!(!layout.contains("__"));
    }

    #[test]
    fn test_layout_javascript_has_no_type_annotations() {
        let layout = layout(&plain_js());
        assert!(!layout.contains("Metadata"));
        assert!(!layout.contains("React.ReactNode"));
        assert!(!layout.contains("ThemeProvider"));
        assert!(layout.contains("}) {\n  return ("));
        assert!(layout.contains("<body className={inter.className}>\n        {children}\n      </body>"));
    }

    #[test]
    fn test_home_page_uses_card_primitives_only_for_shadcn() {
        let home = home_page(&shadcn());
        assert!(home.contains("<CardTitle>🚀 Modern Stack</CardTitle>"));
        assert!(home.contains("Welcome to demo"));

        let plain = home_page(&plain_js());
        assert!(!plain.contains("Card"));
        assert!(!plain.contains("@/components/ui"));
        assert!(plain.starts_with("export default function HomePage()"));
        assert!(plain.contains("<h3 className=\"mb-2 text-2xl font-semibold\">⚡ Fast Development</h3>"));
    }

    #[test]
    fn test_home_page_pulls_in_optional_components() {
        let config = ProjectConfig::builder("demo").animations(true).three_d(true).build();
        let home = home_page(&config);
        assert!(home.contains("import { FadeIn } from '@/components/fade-in';"));
        assert!(home.contains("<FadeIn>\n        <section"));
        assert!(home.contains("<Scene />"));
    }

    #[test]
    fn test_about_page_lists_values() {
        let about = about_page(&plain_js());
        assert!(about.contains("<li>Integrity</li>"));
        assert!(!about.contains("__"));
    }

    #[test]
    fn test_contact_page_form_state() {
        let ts_page = contact_page(&shadcn());
        assert!(ts_page.starts_with("'use client';"));
        assert!(ts_page.contains("(e: React.FormEvent) =>"));
        assert!(ts_page.contains("<Textarea\n"));
        assert!(ts_page.contains("value={formData.email}"));
        assert!(ts_page.contains("<Button type=\"submit\">Send Message</Button>"));

        let js_page = contact_page(&plain_js());
        assert!(js_page.contains("const handleSubmit = (e) => {"));
        assert!(js_page.contains("<textarea\n"));
        assert!(!js_page.contains("@/components/ui"));
    }

    #[test]
    fn test_utils_per_language() {
        assert!(utils(&shadcn()).contains("...inputs: ClassValue[]"));
        assert!(!utils(&plain_js()).contains("ClassValue"));
    }

    #[test]
    fn test_scene_and_fade_in_types() {
        assert!(scene(&shadcn()).contains("useRef<Mesh>(null)"));
        assert!(scene(&plain_js()).contains("useRef(null)"));
        assert!(fade_in(&shadcn()).contains("interface FadeInProps"));
        assert!(fade_in(&plain_js()).contains("export function FadeIn({ children, delay = 0 }) {"));
    }

    #[test]
    fn test_globals_css_variants() {
        assert!(globals_css(&shadcn()).contains("--radius: 0.5rem;"));
        assert_eq!(globals_css(&plain_js()), TAILWIND_DIRECTIVES);
        let mui = ProjectConfig::builder("demo").ui(UiLibrary::Mui).build();
        assert!(!globals_css(&mui).contains("@tailwind"));
    }

    #[test]
    fn test_indent_skips_blank_lines() {
        assert_eq!(indent("a\n\nb", 2), "  a\n\n  b\n");
    }
}
