//! Message templates and field-name helpers.
//!
//! Rule templates use brace fields: `{}` takes the next positional argument,
//! `{0}` a specific one, and `{name}` a named argument. `{{` and `}}` are
//! literal braces. Conversions and format specs (`{0!r}`, `{x:>4}`) are not
//! supported and fail rather than being silently dropped.

use crate::error::TemplateError;
use std::collections::BTreeMap;
use std::fmt::Display;

/// Arguments substituted into a message template.
///
/// Unused arguments are ignored.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TemplateArgs {
    positional: Vec<String>,
    named: BTreeMap<String, String>,
}

impl TemplateArgs {
    /// Creates an empty argument list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a positional argument.
    pub fn arg(mut self, value: impl Display) -> Self {
        self.positional.push(value.to_string());
        self
    }

    /// Sets a named argument, replacing an earlier value for the same name.
    pub fn named(mut self, name: impl Into<String>, value: impl Display) -> Self {
        self.named.insert(name.into(), value.to_string());
        self
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Numbering {
    Unknown,
    Automatic,
    Manual,
}

/// Substitutes `args` into `template`.
pub fn format_template(template: &str, args: &TemplateArgs) -> Result<String, TemplateError> {
    let mut out = String::with_capacity(template.len());
    let mut numbering = Numbering::Unknown;
    let mut next_auto = 0usize;
    let mut chars = template.char_indices().peekable();

    while let Some((pos, c)) = chars.next() {
        match c {
            '{' => {
                if chars.next_if(|&(_, next)| next == '{').is_some() {
                    out.push('{');
                    continue;
                }
                let mut field = String::new();
                let mut depth = 0usize;
                let mut closed = false;
                for (_, fc) in chars.by_ref() {
                    match fc {
                        '}' if depth == 0 => {
                            closed = true;
                            break;
                        }
                        '}' => depth -= 1,
                        // Nested fields only occur inside a format spec.
                        '{' if field.contains([':', '!']) => depth += 1,
                        '{' => break,
                        _ => {}
                    }
                    field.push(fc);
                }
                if !closed {
                    return Err(TemplateError::UnmatchedBrace {
                        brace: '{',
                        position: pos,
                    });
                }
                let value = resolve_field(&field, args, &mut numbering, &mut next_auto)?;
                out.push_str(value);
            }
            '}' => {
                if chars.next_if(|&(_, next)| next == '}').is_some() {
                    out.push('}');
                } else {
                    return Err(TemplateError::UnmatchedBrace {
                        brace: '}',
                        position: pos,
                    });
                }
            }
            _ => out.push(c),
        }
    }

    Ok(out)
}

fn resolve_field<'a>(
    field: &str,
    args: &'a TemplateArgs,
    numbering: &mut Numbering,
    next_auto: &mut usize,
) -> Result<&'a str, TemplateError> {
    if field.contains([':', '!', '.', '[']) {
        return Err(TemplateError::UnsupportedSpec(field.to_string()));
    }

    let index = if field.is_empty() {
        if *numbering == Numbering::Manual {
            return Err(TemplateError::MixedNumbering);
        }
        *numbering = Numbering::Automatic;
        let index = *next_auto;
        *next_auto += 1;
        Some(index)
    } else if field.bytes().all(|b| b.is_ascii_digit()) {
        if *numbering == Numbering::Automatic {
            return Err(TemplateError::MixedNumbering);
        }
        *numbering = Numbering::Manual;
        // All-digit fields too large for usize can never match an argument.
        Some(field.parse().unwrap_or(usize::MAX))
    } else {
        None
    };

    match index {
        Some(index) => args
            .positional
            .get(index)
            .map(String::as_str)
            .ok_or(TemplateError::MissingPositional {
                index,
                given: args.positional.len(),
            }),
        None => args
            .named
            .get(field)
            .map(String::as_str)
            .ok_or_else(|| TemplateError::MissingNamed(field.to_string())),
    }
}

/// Converts a kebab-case rule name into a snake_case field name.
pub fn kebab_case_to_snake_case(name: &str) -> String {
    name.replace('-', "_")
}

/// Reserved words that cannot name a field. Rule catalogs are shared with
/// Python tooling, so both Rust and Python keywords are excluded.
const KEYWORDS: &[&str] = &[
    // Rust
    "as", "async", "await", "break", "const", "continue", "crate", "dyn", "else", "enum",
    "extern", "false", "fn", "for", "if", "impl", "in", "let", "loop", "match", "mod", "move",
    "mut", "pub", "ref", "return", "self", "Self", "static", "struct", "super", "trait", "true",
    "type", "unsafe", "use", "where", "while",
    // Python
    "False", "None", "True", "and", "assert", "class", "def", "del", "elif", "except",
    "finally", "from", "global", "import", "is", "lambda", "nonlocal", "not", "or", "pass",
    "raise", "try", "with", "yield",
];

/// Returns `true` if `name` is usable as a field identifier: a letter or
/// underscore followed by letters, digits, or underscores, and not a keyword.
pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    let well_formed = match chars.next() {
        Some(first) if first == '_' || first.is_alphabetic() => {
            chars.all(|c| c == '_' || c.is_alphanumeric())
        }
        _ => false,
    };
    well_formed && !KEYWORDS.contains(&name)
}
