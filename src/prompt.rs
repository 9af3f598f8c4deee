//! Prompt templates with a single `{code_diff}` slot.
//!
//! Placeholders use brace syntax. `{{` and `}}` produce literal braces, so a
//! template may still show code samples that contain them.

use crate::error::PromptError;

/// Name of the placeholder replaced by the code under review
pub const CODE_PLACEHOLDER: &str = "code_diff";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PromptTemplate {
    source: String,
}

impl PromptTemplate {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn is_empty(&self) -> bool {
        self.source.trim().is_empty()
    }

    /// Fill every `{code_diff}` slot with `code`.
    ///
    /// The payload is inserted verbatim; braces inside it are never
    /// interpreted.
    pub fn render(&self, code: &str) -> Result<String, PromptError> {
        if self.is_empty() {
            return Err(PromptError::EmptyTemplate);
        }

        let src = self.source.as_str();
        let mut out = String::with_capacity(src.len() + code.len());
        let mut substituted = false;
        let mut rest = src.char_indices().peekable();

        while let Some((pos, ch)) = rest.next() {
            match ch {
                '{' if matches!(rest.peek(), Some((_, '{'))) => {
                    rest.next();
                    out.push('{');
                }
                '{' => {
                    let start = pos + 1;
                    let Some(len) = src[start..].find('}') else {
                        return Err(PromptError::UnmatchedBrace {
                            brace: '{',
                            position: pos,
                        });
                    };
                    let name = &src[start..start + len];
                    if name.contains('{') {
                        return Err(PromptError::UnmatchedBrace {
                            brace: '{',
                            position: pos,
                        });
                    }
                    if name != CODE_PLACEHOLDER {
                        return Err(PromptError::UnknownPlaceholder(name.to_string()));
                    }
                    out.push_str(code);
                    substituted = true;
                    // skip the name and the closing brace
                    while let Some((next, _)) = rest.peek() {
                        if *next > start + len {
                            break;
                        }
                        rest.next();
                    }
                }
                '}' if matches!(rest.peek(), Some((_, '}'))) => {
                    rest.next();
                    out.push('}');
                }
                '}' => {
                    return Err(PromptError::UnmatchedBrace {
                        brace: '}',
                        position: pos,
                    });
                }
                other => out.push(other),
            }
        }

        if !substituted {
            return Err(PromptError::MissingPlaceholder);
        }
        Ok(out)
    }
}

impl From<String> for PromptTemplate {
    fn from(source: String) -> Self {
        Self::new(source)
    }
}

impl From<&str> for PromptTemplate {
    fn from(source: &str) -> Self {
        Self::new(source)
    }
}
