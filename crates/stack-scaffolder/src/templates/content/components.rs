//! shadcn/ui primitives written into `src/components/ui`

use super::{fill, ts};
use crate::config::ProjectConfig;

/// `React.forwardRef` with or without its type parameters
fn forward_ref(typescript: bool, element: &str, props: &str) -> String {
    if typescript {
        format!("React.forwardRef<{element}, {props}>")
    } else {
        "React.forwardRef".to_string()
    }
}

const BUTTON: &str = r#"import * as React from 'react';
import { Slot } from '@radix-ui/react-slot';
import { cva__VARIANT_PROPS__ } from 'class-variance-authority';
import { cn } from '@/lib/utils';

const buttonVariants = cva(
  'inline-flex items-center justify-center whitespace-nowrap rounded-md text-sm font-medium ring-offset-background transition-colors focus-visible:outline-none focus-visible:ring-2 focus-visible:ring-ring focus-visible:ring-offset-2 disabled:pointer-events-none disabled:opacity-50',
  {
    variants: {
      variant: {
        default: 'bg-primary text-primary-foreground hover:bg-primary/90',
        destructive: 'bg-destructive text-destructive-foreground hover:bg-destructive/90',
        outline: 'border border-input bg-background hover:bg-accent hover:text-accent-foreground',
        secondary: 'bg-secondary text-secondary-foreground hover:bg-secondary/80',
        ghost: 'hover:bg-accent hover:text-accent-foreground',
        link: 'text-primary underline-offset-4 hover:underline',
      },
      size: {
        default: 'h-10 px-4 py-2',
        sm: 'h-9 rounded-md px-3',
        lg: 'h-11 rounded-md px-8',
        icon: 'h-10 w-10',
      },
    },
    defaultVariants: {
      variant: 'default',
      size: 'default',
    },
  }
);
__PROPS__
const Button = __FORWARD_REF__(
  ({ className, variant, size, asChild = false, ...props }, ref) => {
    const Comp = asChild ? Slot : 'button';
    return (
      <Comp
        className={cn(buttonVariants({ variant, size, className }))}
        ref={ref}
        {...props}
      />
    );
  }
);
Button.displayName = 'Button';

export { Button, buttonVariants };
"#;

const BUTTON_PROPS: &str = r#"
export interface ButtonProps
  extends React.ButtonHTMLAttributes<HTMLButtonElement>,
    VariantProps<typeof buttonVariants> {
  asChild?: boolean;
}
"#;

pub fn button(config: &ProjectConfig) -> String {
    let typescript = config.typescript();
    let forward = forward_ref(typescript, "HTMLButtonElement", "ButtonProps");
    fill(
        BUTTON,
        &[
            ("VARIANT_PROPS", ts(typescript, ", type VariantProps", "")),
            ("PROPS", ts(typescript, BUTTON_PROPS, "")),
            ("FORWARD_REF", forward.as_str()),
        ],
    )
}

/// (component, tag, element type, props type, classes)
const CARD_PARTS: &[(&str, &str, &str, &str, &str)] = &[
    (
        "Card",
        "div",
        "HTMLDivElement",
        "React.HTMLAttributes<HTMLDivElement>",
        "rounded-lg border bg-card text-card-foreground shadow-sm",
    ),
    (
        "CardHeader",
        "div",
        "HTMLDivElement",
        "React.HTMLAttributes<HTMLDivElement>",
        "flex flex-col space-y-1.5 p-6",
    ),
    (
        "CardTitle",
        "h3",
        "HTMLParagraphElement",
        "React.HTMLAttributes<HTMLHeadingElement>",
        "text-2xl font-semibold leading-none tracking-tight",
    ),
    (
        "CardDescription",
        "p",
        "HTMLParagraphElement",
        "React.HTMLAttributes<HTMLParagraphElement>",
        "text-sm text-muted-foreground",
    ),
    (
        "CardContent",
        "div",
        "HTMLDivElement",
        "React.HTMLAttributes<HTMLDivElement>",
        "p-6 pt-0",
    ),
    (
        "CardFooter",
        "div",
        "HTMLDivElement",
        "React.HTMLAttributes<HTMLDivElement>",
        "flex items-center p-6 pt-0",
    ),
];

pub fn card(config: &ProjectConfig) -> String {
    let typescript = config.typescript();
    let mut out = String::from("import * as React from 'react';\nimport { cn } from '@/lib/utils';\n");

    for (name, tag, element, props, classes) in CARD_PARTS {
        out.push_str(&format!(
            "\nconst {name} = {forward}(({{ className, ...props }}, ref) => (\n  <{tag} ref={{ref}} className={{cn('{classes}', className)}} {{...props}} />\n));\n{name}.displayName = '{name}';\n",
            forward = forward_ref(typescript, element, props),
        ));
    }

    let names: Vec<&str> = CARD_PARTS.iter().map(|part| part.0).collect();
    out.push_str(&format!("\nexport {{ {} }};\n", names.join(", ")));
    out
}

const INPUT: &str = r#"import * as React from 'react';
import { cn } from '@/lib/utils';
__PROPS__
const Input = __FORWARD_REF__(({ className, type, ...props }, ref) => {
  return (
    <input
      type={type}
      className={cn(
        'flex h-10 w-full rounded-md border border-input bg-background px-3 py-2 text-sm ring-offset-background file:border-0 file:bg-transparent file:text-sm file:font-medium placeholder:text-muted-foreground focus-visible:outline-none focus-visible:ring-2 focus-visible:ring-ring focus-visible:ring-offset-2 disabled:cursor-not-allowed disabled:opacity-50',
        className
      )}
      ref={ref}
      {...props}
    />
  );
});
Input.displayName = 'Input';

export { Input };
"#;

pub fn input(config: &ProjectConfig) -> String {
    let typescript = config.typescript();
    let forward = forward_ref(typescript, "HTMLInputElement", "InputProps");
    fill(
        INPUT,
        &[
            (
                "PROPS",
                ts(
                    typescript,
                    "\nexport type InputProps = React.InputHTMLAttributes<HTMLInputElement>;\n",
                    "",
                ),
            ),
            ("FORWARD_REF", forward.as_str()),
        ],
    )
}

const TEXTAREA: &str = r#"import * as React from 'react';
import { cn } from '@/lib/utils';
__PROPS__
const Textarea = __FORWARD_REF__(({ className, ...props }, ref) => {
  return (
    <textarea
      className={cn(
        'flex min-h-[80px] w-full rounded-md border border-input bg-background px-3 py-2 text-sm ring-offset-background placeholder:text-muted-foreground focus-visible:outline-none focus-visible:ring-2 focus-visible:ring-ring focus-visible:ring-offset-2 disabled:cursor-not-allowed disabled:opacity-50',
        className
      )}
      ref={ref}
      {...props}
    />
  );
});
Textarea.displayName = 'Textarea';

export { Textarea };
"#;

pub fn textarea(config: &ProjectConfig) -> String {
    let typescript = config.typescript();
    let forward = forward_ref(typescript, "HTMLTextAreaElement", "TextareaProps");
    fill(
        TEXTAREA,
        &[
            (
                "PROPS",
                ts(
                    typescript,
                    "\nexport type TextareaProps = React.TextareaHTMLAttributes<HTMLTextAreaElement>;\n",
                    "",
                ),
            ),
            ("FORWARD_REF", forward.as_str()),
        ],
    )
}

const LABEL: &str = r#"'use client';

import * as React from 'react';
import * as LabelPrimitive from '@radix-ui/react-label';
import { cva__VARIANT_PROPS__ } from 'class-variance-authority';
import { cn } from '@/lib/utils';

const labelVariants = cva(
  'text-sm font-medium leading-none peer-disabled:cursor-not-allowed peer-disabled:opacity-70'
);

const Label = __FORWARD_REF__(({ className, ...props }, ref) => (
  <LabelPrimitive.Root ref={ref} className={cn(labelVariants(), className)} {...props} />
));
Label.displayName = LabelPrimitive.Root.displayName;

export { Label };
"#;

pub fn label(config: &ProjectConfig) -> String {
    let typescript = config.typescript();
    let forward = forward_ref(
        typescript,
        "React.ElementRef<typeof LabelPrimitive.Root>",
        "React.ComponentPropsWithoutRef<typeof LabelPrimitive.Root> & VariantProps<typeof labelVariants>",
    );
    fill(
        LABEL,
        &[
            ("VARIANT_PROPS", ts(typescript, ", type VariantProps", "")),
            ("FORWARD_REF", forward.as_str()),
        ],
    )
}

/// Every primitive as (file stem, content)
pub fn all(config: &ProjectConfig) -> Vec<(&'static str, String)> {
    vec![
        ("button", button(config)),
        ("card", card(config)),
        ("input", input(config)),
        ("label", label(config)),
        ("textarea", textarea(config)),
    ]
}
