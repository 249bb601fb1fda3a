//! Tokenizer for the TaskSpec wire form.
//!
//! Produces plain words and parenthesised `(a b)` ranges, each tagged with
//! its byte span so the parser can slice the verbatim `EXTRA` tail.

use crate::error::FormatError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Token<'a> {
    Word(&'a str),
    Range(&'a str, &'a str),
}

impl<'a> Token<'a> {
    /// Source-like rendering for error messages.
    pub(crate) fn describe(&self) -> String {
        match self {
            Token::Word(w) => (*w).to_string(),
            Token::Range(a, b) => format!("({a} {b})"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Spanned<'a> {
    pub token: Token<'a>,
    pub end: usize,
}

#[derive(Clone, Debug)]
pub(crate) struct Lexer<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> Lexer<'a> {
    pub(crate) fn new(src: &'a str) -> Self {
        Self { src, pos: 0 }
    }

    pub(crate) fn source(&self) -> &'a str {
        self.src
    }

    /// Unconsumed input.
    pub(crate) fn remaining(&self) -> &'a str {
        &self.src[self.pos..]
    }

    /// Look at the next token without consuming it.
    pub(crate) fn peek(&self) -> Option<Result<Spanned<'a>, FormatError>> {
        self.clone().next()
    }

    fn skip_whitespace(&mut self) {
        let rest = &self.src[self.pos..];
        let trimmed = rest.trim_start();
        self.pos += rest.len() - trimmed.len();
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Result<Spanned<'a>, FormatError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.skip_whitespace();
        let rest = &self.src[self.pos..];
        if rest.is_empty() {
            return None;
        }

        if rest.starts_with('(') {
            let Some(close) = rest.find(')') else {
                let text = rest.split_whitespace().next().unwrap_or(rest).to_string();
                self.pos = self.src.len();
                return Some(Err(FormatError::MalformedRange { text }));
            };
            let inner = &rest[1..close];
            self.pos += close + 1;
            let mut parts = inner.split_whitespace();
            return Some(match (parts.next(), parts.next(), parts.next()) {
                (Some(a), Some(b), None) => Ok(Spanned {
                    token: Token::Range(a, b),
                    end: self.pos,
                }),
                _ => Err(FormatError::MalformedRange {
                    text: rest[..=close].to_string(),
                }),
            });
        }

        let len = rest.find(char::is_whitespace).unwrap_or(rest.len());
        self.pos += len;
        Some(Ok(Spanned {
            token: Token::Word(&rest[..len]),
            end: self.pos,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(src: &str) -> Vec<Token<'_>> {
        Lexer::new(src).map(|t| t.unwrap().token).collect()
    }

    #[test]
    fn words_and_ranges() {
        assert_eq!(
            tokens("INTS (0 1)  ( -1.5   2 ) CHARCOUNT 2"),
            vec![
                Token::Word("INTS"),
                Token::Range("0", "1"),
                Token::Range("-1.5", "2"),
                Token::Word("CHARCOUNT"),
                Token::Word("2"),
            ]
        );
    }

    #[test]
    fn spans_point_past_token() {
        let mut lx = Lexer::new("EXTRA  tail text");
        let first = lx.next().unwrap().unwrap();
        assert_eq!(first.end, 5);
        assert_eq!(&lx.source()[first.end..], "  tail text");
    }

    #[test]
    fn peek_does_not_consume() {
        let lx = Lexer::new("A B");
        assert_eq!(lx.peek().unwrap().unwrap().token, Token::Word("A"));
        assert_eq!(lx.peek().unwrap().unwrap().token, Token::Word("A"));
    }

    #[test]
    fn malformed_ranges() {
        let mut lx = Lexer::new("(1 2 3)");
        assert!(matches!(lx.next(), Some(Err(FormatError::MalformedRange { .. }))));

        let mut lx = Lexer::new("(1");
        assert!(matches!(lx.next(), Some(Err(FormatError::MalformedRange { .. }))));
        assert!(lx.next().is_none());
    }
}
