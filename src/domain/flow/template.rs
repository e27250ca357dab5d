//! Message templates with named placeholders.
//!
//! Syntax: `{name}` is replaced by the bound variable `name`; `{{` and `}}`
//! produce literal braces. Names are ASCII letters, digits and underscores.
//! Templates are parsed once when the catalog loads, so rendering can only
//! fail on an unbound name.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

/// Template parsing or rendering failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    #[error("Malformed template at byte {position}: {reason}")]
    Syntax { position: usize, reason: String },

    #[error("Template references unbound variable '{0}'")]
    Unbound(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Placeholder(String),
}

/// A parsed message template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MessageTemplate {
    source: String,
    segments: Vec<Segment>,
}

impl MessageTemplate {
    /// Parses a template.
    ///
    /// # Errors
    ///
    /// - `Syntax` for unclosed or empty placeholders, invalid names, or a
    ///   stray `}`
    pub fn parse(source: impl Into<String>) -> Result<Self, TemplateError> {
        let source = source.into();
        let segments = parse_segments(&source)?;
        Ok(Self { source, segments })
    }

    /// The template text as written.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Placeholder names in order of first appearance.
    pub fn placeholders(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for segment in &self.segments {
            if let Segment::Placeholder(name) = segment {
                if !names.contains(&name.as_str()) {
                    names.push(name);
                }
            }
        }
        names
    }

    /// Substitutes every placeholder.
    ///
    /// # Errors
    ///
    /// - `Unbound` naming the first placeholder without a variable
    pub fn render(&self, vars: &TemplateVariables) -> Result<String, TemplateError> {
        let mut out = String::with_capacity(self.source.len());
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Placeholder(name) => {
                    let value = vars
                        .get(name)
                        .ok_or_else(|| TemplateError::Unbound(name.clone()))?;
                    out.push_str(value);
                }
            }
        }
        Ok(out)
    }
}

impl TryFrom<String> for MessageTemplate {
    type Error = TemplateError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<MessageTemplate> for String {
    fn from(template: MessageTemplate) -> Self {
        template.source
    }
}

fn parse_segments(source: &str) -> Result<Vec<Segment>, TemplateError> {
    let mut segments = Vec::new();
    let mut literal = String::new();
    let mut chars = source.char_indices().peekable();

    while let Some((pos, c)) = chars.next() {
        match c {
            '{' if matches!(chars.peek(), Some((_, '{'))) => {
                chars.next();
                literal.push('{');
            }
            '}' if matches!(chars.peek(), Some((_, '}'))) => {
                chars.next();
                literal.push('}');
            }
            '}' => {
                return Err(TemplateError::Syntax {
                    position: pos,
                    reason: "unmatched '}'".to_string(),
                });
            }
            '{' => {
                let mut name = String::new();
                let mut closed = false;
                for (_, n) in chars.by_ref() {
                    if n == '}' {
                        closed = true;
                        break;
                    }
                    name.push(n);
                }
                if !closed {
                    return Err(TemplateError::Syntax {
                        position: pos,
                        reason: "unclosed placeholder".to_string(),
                    });
                }
                if name.is_empty() || !name.chars().all(|n| n.is_ascii_alphanumeric() || n == '_') {
                    return Err(TemplateError::Syntax {
                        position: pos,
                        reason: format!("invalid placeholder name '{}'", name),
                    });
                }
                if !literal.is_empty() {
                    segments.push(Segment::Literal(std::mem::take(&mut literal)));
                }
                segments.push(Segment::Placeholder(name));
            }
            other => literal.push(other),
        }
    }

    if !literal.is_empty() {
        segments.push(Segment::Literal(literal));
    }
    Ok(segments)
}

/// Named values available to a template.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplateVariables {
    values: BTreeMap<String, String>,
}

impl TemplateVariables {
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds a variable, replacing any previous value.
    pub fn bind(&mut self, name: impl Into<String>, value: impl ToString) -> &mut Self {
        self.values.insert(name.into(), value.to_string());
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Bound names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }
}

impl<K: Into<String>, V: ToString> Extend<(K, V)> for TemplateVariables {
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (k, v) in iter {
            self.bind(k, v);
        }
    }
}
