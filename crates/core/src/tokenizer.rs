//! Quote- and escape-aware splitting of an input line into word tokens.
//!
//! Rules, highest priority first:
//! 1. `\\`, `\ `, `\'` and `\"` produce the second character literally.
//!    `\n` and `\t` are rejected, any other escape is unknown; both are
//!    dropped with a warning, as is a trailing backslash.
//! 2. An unescaped `"` or `'` opens a quoted span that only the same
//!    character closes. The quotes are not part of the token and the closing
//!    quote ends the token. A span left open at end of line becomes the last
//!    token.
//! 3. An unquoted space ends a non-empty token; runs of spaces collapse.

use tracing::warn;

/// Something the tokenizer recovered from. Offsets are byte positions in the line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenizeWarning {
    /// `\n` or `\t`: control escapes are not supported.
    RejectedEscape { at: usize, escape: char },
    UnknownEscape { at: usize, escape: char },
    TrailingBackslash { at: usize },
    UnterminatedQuote { at: usize, quote: char },
}

/// Restartable token cursor over one line.
///
/// The caller owns the cursor: each [`Tokenizer::next_token`] call resumes
/// where the previous one stopped, until [`Tokenizer::reseed`] points it at
/// a new line.
#[derive(Debug, Clone)]
pub struct Tokenizer<'a> {
    line:     &'a str,
    pos:      usize,
    warnings: Vec<TokenizeWarning>,
}

impl<'a> Tokenizer<'a> {
    pub fn new(line: &'a str) -> Self {
        Self {
            line,
            pos: 0,
            warnings: Vec::new(),
        }
    }

    /// Restart on a new line, dropping the old cursor and warnings.
    pub fn reseed(&mut self, line: &'a str) {
        self.line = line;
        self.pos = 0;
        self.warnings.clear();
    }

    /// Warnings collected since the last (re)seed.
    pub fn warnings(&self) -> &[TokenizeWarning] {
        &self.warnings
    }

    /// Yield the next token, or `None` once the line is exhausted.
    pub fn next_token(&mut self) -> Option<String> {
        let line = self.line;
        let base = self.pos;
        let mut chars = line[base..].char_indices();

        let mut token = String::new();
        let mut started = false;
        let mut quote: Option<(char, usize)> = None;

        while let Some((i, c)) = chars.next() {
            match c {
                '\\' => match chars.next() {
                    Some((_, e @ ('\\' | ' ' | '\'' | '"'))) => {
                        token.push(e);
                        started = true;
                    }
                    Some((_, e @ ('n' | 't'))) => {
                        self.warn(TokenizeWarning::RejectedEscape { at: base + i, escape: e });
                    }
                    Some((_, e)) => {
                        self.warn(TokenizeWarning::UnknownEscape { at: base + i, escape: e });
                    }
                    None => self.warn(TokenizeWarning::TrailingBackslash { at: base + i }),
                },
                '"' | '\'' if quote.is_none() => {
                    quote = Some((c, base + i));
                    started = true;
                }
                _ if quote.is_some_and(|(open, _)| open == c) => {
                    self.pos = base + i + c.len_utf8();
                    return Some(token);
                }
                ' ' if quote.is_none() => {
                    if started {
                        self.pos = base + i + 1;
                        return Some(token);
                    }
                }
                _ => {
                    token.push(c);
                    started = true;
                }
            }
        }

        if let Some((quote, at)) = quote {
            self.warn(TokenizeWarning::UnterminatedQuote { at, quote });
        }
        self.pos = line.len();
        started.then_some(token)
    }

    fn warn(&mut self, warning: TokenizeWarning) {
        match &warning {
            TokenizeWarning::RejectedEscape { at, escape } => {
                warn!("unsupported escape '\\{escape}' at column {at}; skipped")
            }
            TokenizeWarning::UnknownEscape { at, escape } => {
                warn!("unknown escape '\\{escape}' at column {at}; skipped")
            }
            TokenizeWarning::TrailingBackslash { at } => {
                warn!("trailing backslash at column {at}; skipped")
            }
            TokenizeWarning::UnterminatedQuote { at, quote } => {
                warn!("unterminated {quote} quote opened at column {at}; taking the rest of the line")
            }
        }
        self.warnings.push(warning);
    }
}

impl Iterator for Tokenizer<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        self.next_token()
    }
}

/// Split a whole line into tokens.
pub fn tokenize(line: &str) -> Vec<String> {
    Tokenizer::new(line).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn splits_on_runs_of_spaces() {
        assert_eq!(tokenize("  55   Speaker  x "), ["55", "Speaker", "x"]);
    }

    #[test]
    fn empty_and_blank_lines_yield_nothing() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("    ").is_empty());
    }

    #[test]
    fn quoted_spans_keep_spaces() {
        assert_eq!(tokenize(r#"40 "Living Room" 'a "b" c'"#), ["40", "Living Room", r#"a "b" c"#]);
    }

    #[test]
    fn closing_quote_ends_token() {
        assert_eq!(tokenize(r#""ab"cd"#), ["ab", "cd"]);
        assert_eq!(tokenize(r#"x "" y"#), ["x", "", "y"]);
    }

    #[test]
    fn prefix_before_quote_is_kept() {
        assert_eq!(tokenize(r#"out"put x" y"#), ["output x", "y"]);
    }

    #[test]
    fn escaped_quote_inside_quoted_span() {
        assert_eq!(tokenize(r#"1 "a\"b" 'it\'s' x"#), ["1", r#"a"b"#, "it's", "x"]);
        assert_eq!(tokenize(r#""back\\slash\ here""#), [r"back\slash here"]);

        let mut t = Tokenizer::new(r#""a\"b"#);
        assert_eq!(t.next_token().as_deref(), Some(r#"a"b"#));
        assert!(matches!(t.warnings(), [TokenizeWarning::UnterminatedQuote { at: 0, quote: '"' }]));
    }

    #[test]
    fn escapes_collapse_to_literal() {
        assert_eq!(tokenize(r#"a\ b c\\d \"e\'"#), ["a b", r"c\d", r#""e'"#]);
    }

    #[test]
    fn control_escapes_are_rejected() {
        let mut t = Tokenizer::new(r"ab\ncd\t");
        assert_eq!(t.next_token().as_deref(), Some("abcd"));
        assert_eq!(t.next_token(), None);
        assert_eq!(
            t.warnings(),
            [
                TokenizeWarning::RejectedEscape { at: 2, escape: 'n' },
                TokenizeWarning::RejectedEscape { at: 6, escape: 't' },
            ]
        );
    }

    #[test]
    fn unknown_and_trailing_escapes_warn() {
        let mut t = Tokenizer::new(r"a\qb c\");
        let tokens: Vec<_> = t.by_ref().collect();
        assert_eq!(tokens, ["ab", "c"]);
        assert_eq!(
            t.warnings(),
            [
                TokenizeWarning::UnknownEscape { at: 1, escape: 'q' },
                TokenizeWarning::TrailingBackslash { at: 6 },
            ]
        );
    }

    #[test]
    fn unterminated_quote_takes_rest_of_line() {
        let mut t = Tokenizer::new("1 'open token  here");
        let tokens: Vec<_> = t.by_ref().collect();
        assert_eq!(tokens, ["1", "open token  here"]);
        assert_eq!(t.warnings(), [TokenizeWarning::UnterminatedQuote { at: 2, quote: '\'' }]);
    }

    #[test]
    fn braces_are_plain_text() {
        assert_eq!(tokenize("{{0}} {1}"), ["{{0}}", "{1}"]);
    }

    #[test]
    fn cursor_persists_and_reseeds() {
        let first = String::from("a b");
        let second = String::from("c");
        let mut t = Tokenizer::new(&first);
        assert_eq!(t.next_token().as_deref(), Some("a"));
        assert_eq!(t.next_token().as_deref(), Some("b"));
        assert_eq!(t.next_token(), None);
        assert_eq!(t.next_token(), None);
        t.reseed(&second);
        assert_eq!(t.next_token().as_deref(), Some("c"));
    }

    proptest! {
        #[test]
        fn plain_lines_split_like_str_split(line in "[a-z0-9! ]{0,40}") {
            let expected: Vec<&str> = line.split(' ').filter(|s| !s.is_empty()).collect();
            prop_assert_eq!(tokenize(&line), expected);
        }

        #[test]
        fn single_spaced_lines_round_trip(words in prop::collection::vec("[a-z0-9]{1,8}", 1..8)) {
            let line = words.join(" ");
            prop_assert_eq!(tokenize(&line).join(" "), line);
        }
    }
}
