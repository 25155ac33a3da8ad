use crate::{
    error::{BarError, Result},
    state::ShowMode,
    tokenizer::Tokenizer,
};

/// One parsed input line: `<integer>[!]( <token>)*`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputValue {
    pub value:  i64,
    pub mode:   ShowMode,
    /// Every token of the line; token 0 is the value token itself.
    pub tokens: Vec<String>,
}

impl InputValue {
    /// Parse a raw line. A missing or non-numeric first token is an error.
    pub fn parse(line: &str) -> Result<Self> {
        let line = line.strip_suffix('\n').unwrap_or(line);
        let line = line.strip_suffix('\r').unwrap_or(line);

        let tokens: Vec<String> = Tokenizer::new(line).collect();
        let Some(head) = tokens.first() else {
            return Err(BarError::InvalidInput("empty line".into()));
        };

        let (value, rest) = parse_leading_int(head)
            .ok_or_else(|| BarError::InvalidInput(format!("{head:?} does not start with an integer")))?;

        let mode = if rest.starts_with('!') {
            ShowMode::Alternative
        } else {
            ShowMode::Normal
        };

        Ok(Self { value, mode, tokens })
    }
}

/// Split `[+-]?<digits>` off the front of `s`.
fn parse_leading_int(s: &str) -> Option<(i64, &str)> {
    let sign = usize::from(s.starts_with(['+', '-']));
    let digits = s[sign..].bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    let end = sign + digits;
    let value = s[..end].parse::<i64>().ok()?;
    Some((value, &s[end..]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_value() {
        let v = InputValue::parse("55\n").unwrap();
        assert_eq!(v.value, 55);
        assert_eq!(v.mode, ShowMode::Normal);
        assert_eq!(v.tokens, ["55"]);
    }

    #[test]
    fn alternate_flag_and_tokens() {
        let v = InputValue::parse("150! \"Headphones 2\" x").unwrap();
        assert_eq!(v.value, 150);
        assert_eq!(v.mode, ShowMode::Alternative);
        assert_eq!(v.tokens, ["150!", "Headphones 2", "x"]);
    }

    #[test]
    fn negative_and_signed_values() {
        assert_eq!(InputValue::parse("-20").unwrap().value, -20);
        let v = InputValue::parse("-5!").unwrap();
        assert_eq!((v.value, v.mode), (-5, ShowMode::Alternative));
        assert_eq!(InputValue::parse("+7").unwrap().value, 7);
    }

    #[test]
    fn trailing_garbage_after_digits_is_ignored() {
        let v = InputValue::parse("42%").unwrap();
        assert_eq!((v.value, v.mode), (42, ShowMode::Normal));
    }

    #[test]
    fn separated_bang_is_not_alternate() {
        let v = InputValue::parse("42 !").unwrap();
        assert_eq!(v.mode, ShowMode::Normal);
        assert_eq!(v.tokens, ["42", "!"]);
    }

    #[test]
    fn invalid_lines() {
        for line in ["", "   ", "abc 5", "-", "!", "99999999999999999999"] {
            assert!(
                matches!(InputValue::parse(line), Err(BarError::InvalidInput(_))),
                "{line:?} should be rejected"
            );
        }
    }
}
