//! The `{N}` label template language.
//!
//! `{{` is a literal `{`, `{<digits>}` refers to token `N` of the current
//! input line. Anything else after `{` is a syntax error: the rest of the
//! source, from the last consumed position on, is kept as literal text.

use crate::error::TemplateError;
use tracing::warn;

/// One compiled piece of a template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fragment {
    Literal(String),
    Reference(usize),
}

/// A compiled label template. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Template {
    fragments: Vec<Fragment>,
}

impl Template {
    /// Compile a template source string. Syntax errors are recovered locally.
    pub fn compile(source: &str) -> Self {
        let mut fragments = Vec::new();
        let mut pending = String::new();
        let mut lead = 0;

        loop {
            let Some(offset) = source[lead..].find('{') else {
                pending.push_str(&source[lead..]);
                break;
            };
            let open = lead + offset;
            let after = &source[open + 1..];

            if after.starts_with('{') {
                pending.push_str(&source[lead..open]);
                pending.push('{');
                lead = open + 2;
                continue;
            }

            let digits = after.bytes().take_while(u8::is_ascii_digit).count();
            if digits == 0 {
                warn!("template {source:?}: expected a digit or '{{' after '{{' at {open}; keeping the rest as text");
                pending.push_str(&source[lead..]);
                break;
            }

            let closed = after[digits..].starts_with('}');
            let index = after[..digits].parse::<usize>().ok();
            match (closed, index) {
                (true, Some(index)) => {
                    pending.push_str(&source[lead..open]);
                    if !pending.is_empty() {
                        fragments.push(Fragment::Literal(std::mem::take(&mut pending)));
                    }
                    fragments.push(Fragment::Reference(index));
                    lead = open + 1 + digits + 1;
                }
                _ => {
                    warn!("template {source:?}: malformed placeholder at {open}; keeping the rest as text");
                    pending.push_str(&source[lead..]);
                    break;
                }
            }
        }

        fragments.push(Fragment::Literal(pending));
        Self { fragments }
    }

    pub fn fragments(&self) -> &[Fragment] {
        &self.fragments
    }

    /// `true` if the output depends on the input tokens.
    #[must_use]
    pub fn is_dynamic(&self) -> bool {
        self.fragments
            .iter()
            .any(|f| matches!(f, Fragment::Reference(_)))
    }

    /// Substitute every reference with its token. Fails without partial output
    /// if any reference points past the end of `tokens`.
    pub fn render<S: AsRef<str>>(&self, tokens: &[S]) -> Result<String, TemplateError> {
        let mut out = String::new();
        for fragment in &self.fragments {
            match fragment {
                Fragment::Literal(text) => out.push_str(text),
                Fragment::Reference(index) => {
                    let token = tokens.get(*index).ok_or(TemplateError::IndexOutOfRange {
                        index: *index,
                        len:   tokens.len(),
                    })?;
                    out.push_str(token.as_ref());
                }
            }
        }
        Ok(out)
    }
}
