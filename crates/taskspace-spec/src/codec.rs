//! Text encode/decode for the TaskSpec wire form.
//!
//! Fields appear in a fixed order, separated by single spaces on output
//! and by any whitespace on input. Keywords are case-sensitive. Range
//! bounds are parsed per section kind: integer ranges accept integral real
//! literals (`0.0`), real ranges accept any number.

use std::fmt::{self, Write};

use taskspace_core::{Dimension, Number};

use crate::binder;
use crate::error::FormatError;
use crate::lexer::{Lexer, Spanned, Token};
use crate::taskspec::{RewardRange, TaskSpec};

// ── Keywords ────────────────────────────────────────────────────

const VERSION: &str = "VERSION";
const PROBLEMTYPE: &str = "PROBLEMTYPE";
const DISCOUNTFACTOR: &str = "DISCOUNTFACTOR";
const OBSERVATIONS: &str = "OBSERVATIONS";
const ACTIONS: &str = "ACTIONS";
const REWARDS: &str = "REWARDS";
const EXTRA: &str = "EXTRA";
const INTS: &str = "INTS";
const DOUBLES: &str = "DOUBLES";
const CHARCOUNT: &str = "CHARCOUNT";

// ── Decode ──────────────────────────────────────────────────────

/// Parse a wire string into a [`TaskSpec`].
pub fn decode(input: &str) -> Result<TaskSpec, FormatError> {
    let mut p = Parser {
        lexer: Lexer::new(input),
    };

    p.keyword(VERSION)?;
    let version = p.word(VERSION)?.to_string();
    p.keyword(PROBLEMTYPE)?;
    let problem_type = p.word(PROBLEMTYPE)?.to_string();
    p.keyword(DISCOUNTFACTOR)?;
    let discount_factor = parse_number(p.word(DISCOUNTFACTOR)?)?;

    p.keyword(OBSERVATIONS)?;
    let obs_ranges = p.typed_ranges()?;
    p.keyword(ACTIONS)?;
    let act_ranges = p.typed_ranges()?;

    p.keyword(REWARDS)?;
    let (lo, hi) = p.range(REWARDS)?;
    let rewards = RewardRange::new(parse_real(lo)?, parse_real(hi)?);

    let extra_at = p.keyword(EXTRA)?;
    let extra = extra_tail(input, extra_at).to_string();

    let (observations, actions) = binder::bind(&obs_ranges, &act_ranges, &extra)?;
    tracing::debug!(
        %version,
        %problem_type,
        observations = observations.len(),
        actions = actions.len(),
        "decoded task spec"
    );

    Ok(TaskSpec {
        version,
        problem_type,
        discount_factor,
        observations,
        actions,
        rewards,
        extra,
    })
}

/// Everything after `EXTRA` and its single separating whitespace character.
fn extra_tail(input: &str, keyword_end: usize) -> &str {
    let rest = &input[keyword_end..];
    let mut chars = rest.chars();
    match chars.next() {
        Some(c) if c.is_whitespace() => chars.as_str(),
        _ => rest,
    }
}

struct Parser<'a> {
    lexer: Lexer<'a>,
}

impl<'a> Parser<'a> {
    fn next(&mut self) -> Result<Option<Spanned<'a>>, FormatError> {
        self.lexer.next().transpose()
    }

    fn peek_word(&self) -> Result<Option<&'a str>, FormatError> {
        Ok(match self.lexer.peek().transpose()? {
            Some(Spanned {
                token: Token::Word(w),
                ..
            }) => Some(w),
            _ => None,
        })
    }

    fn peek_is_range(&self) -> Result<bool, FormatError> {
        Ok(matches!(
            self.lexer.peek().transpose()?,
            Some(Spanned {
                token: Token::Range(..),
                ..
            })
        ))
    }

    /// Consume `expected`, returning the byte offset just past it.
    fn keyword(&mut self, expected: &'static str) -> Result<usize, FormatError> {
        match self.next()? {
            Some(Spanned {
                token: Token::Word(w),
                end,
            }) if w == expected => Ok(end),
            other => Err(FormatError::MissingToken {
                token: expected,
                found: other.map(|s| s.token.describe()),
            }),
        }
    }

    fn word(&mut self, after: &'static str) -> Result<&'a str, FormatError> {
        match self.next()? {
            Some(Spanned {
                token: Token::Word(w),
                ..
            }) => Ok(w),
            _ => Err(FormatError::MissingValue { token: after }),
        }
    }

    fn range(&mut self, section: &'static str) -> Result<(&'a str, &'a str), FormatError> {
        match self.next()? {
            Some(Spanned {
                token: Token::Range(a, b),
                ..
            }) => Ok((a, b)),
            other => Err(FormatError::ExpectedRange {
                section,
                found: other.map(|s| s.token.describe()),
            }),
        }
    }

    /// `[INTS (a b)...] [DOUBLES (a b)...] [CHARCOUNT n]`
    fn typed_ranges(&mut self) -> Result<Vec<Dimension>, FormatError> {
        let mut dims = Vec::new();

        if self.peek_word()? == Some(INTS) {
            self.next()?;
            while self.peek_is_range()? {
                let (a, b) = self.range(INTS)?;
                dims.push(Dimension::integer(parse_int(a)?, parse_int(b)?));
            }
        }
        if self.peek_word()? == Some(DOUBLES) {
            self.next()?;
            while self.peek_is_range()? {
                let (a, b) = self.range(DOUBLES)?;
                dims.push(Dimension::double(parse_real(a)?, parse_real(b)?));
            }
        }
        if self.peek_word()? == Some(CHARCOUNT) {
            self.next()?;
            let text = self.word(CHARCOUNT)?;
            let n: usize = text.parse().map_err(|_| invalid_number(text))?;
            // Every char needs a name in EXTRA, so n can never exceed the
            // tokens still ahead.
            let available = self.lexer.remaining().split_whitespace().count();
            if n > available {
                return Err(FormatError::CharCountTooLarge {
                    count: n,
                    available,
                });
            }
            dims.extend(std::iter::repeat(Dimension::Char).take(n));
        }
        Ok(dims)
    }
}

fn invalid_number(text: &str) -> FormatError {
    FormatError::InvalidNumber {
        text: text.to_string(),
    }
}

fn parse_number(text: &str) -> Result<Number, FormatError> {
    text.parse().map_err(|_| invalid_number(text))
}

fn parse_real(text: &str) -> Result<f64, FormatError> {
    text.parse().map_err(|_| invalid_number(text))
}

fn parse_int(text: &str) -> Result<i64, FormatError> {
    if let Ok(v) = text.parse::<i64>() {
        return Ok(v);
    }
    let v = parse_real(text)?;
    if v.fract() == 0.0 && v >= i64::MIN as f64 && v < i64::MAX as f64 {
        Ok(v as i64)
    } else {
        Err(invalid_number(text))
    }
}

// ── Encode ──────────────────────────────────────────────────────

/// Write the canonical wire form of `spec`.
pub fn encode(spec: &TaskSpec, out: &mut impl Write) -> fmt::Result {
    tracing::debug!(
        version = %spec.version,
        observations = spec.observations.len(),
        actions = spec.actions.len(),
        "encoding task spec"
    );
    write!(
        out,
        "{VERSION} {} {PROBLEMTYPE} {} {DISCOUNTFACTOR} {}",
        spec.version, spec.problem_type, spec.discount_factor
    )?;
    section(out, OBSERVATIONS, &spec.observations.describe())?;
    section(out, ACTIONS, &spec.actions.describe())?;
    write!(out, " {REWARDS} {}", spec.rewards)?;
    section(out, EXTRA, &spec.extra)
}

fn section(out: &mut impl Write, keyword: &str, body: &str) -> fmt::Result {
    if body.is_empty() {
        write!(out, " {keyword}")
    } else {
        write!(out, " {keyword} {body}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use taskspace_core::DimensionKind;

    const MOUNTAIN: &str = "VERSION RL-Glue-3.0 PROBLEMTYPE episodic DISCOUNTFACTOR 1 \
        OBSERVATIONS INTS (0 1) (0 1) (0 1) DOUBLES (-1.200000 0.500000) (-1.200000 0.500000) \
        (-0.070000 0.070000) CHARCOUNT 2 ACTIONS INTS (0 4) REWARDS (-5.0 5.0) \
        EXTRA OBSERVATIONS INTS oi1 oi2 oi3 DOUBLES od1 od2 od3 CHARS oc1 oc2 ACTIONS INTS ai1";

    #[test]
    fn decodes_every_field() {
        let ts = decode(MOUNTAIN).unwrap();
        assert_eq!(ts.version, "RL-Glue-3.0");
        assert_eq!(ts.problem_type, "episodic");
        assert_eq!(ts.discount_factor, Number::Int(1));
        assert_eq!(ts.rewards, RewardRange::new(-5.0, 5.0));
        assert_eq!(ts.observations.len(), 8);
        assert_eq!(
            ts.observations.names_of(DimensionKind::Double),
            ["od1", "od2", "od3"]
        );
        assert_eq!(
            ts.observations.field("od3"),
            Some(&Dimension::double(-0.07, 0.07))
        );
        assert_eq!(ts.actions.field("ai1"), Some(&Dimension::integer(0, 4)));
        assert!(ts.extra.starts_with("OBSERVATIONS INTS oi1"));
    }

    #[test]
    fn canonical_string_round_trips() {
        let ts = decode(MOUNTAIN).unwrap();
        let mut out = String::new();
        encode(&ts, &mut out).unwrap();
        assert_eq!(out, MOUNTAIN);
    }

    #[test]
    fn extra_is_kept_verbatim() {
        let s = "VERSION v PROBLEMTYPE continuing DISCOUNTFACTOR 0.9 OBSERVATIONS ACTIONS \
                 REWARDS (0.0 1.0) EXTRA  two  spaces\tand tab ";
        let ts = decode(s).unwrap();
        assert_eq!(ts.extra, " two  spaces\tand tab ");
        assert_eq!(ts.discount_factor, Number::Real(0.9));
    }

    #[test]
    fn empty_extra_and_empty_spaces() {
        let s = "VERSION v PROBLEMTYPE episodic DISCOUNTFACTOR 1 OBSERVATIONS ACTIONS \
                 REWARDS (-1.0 1.0) EXTRA";
        let ts = decode(s).unwrap();
        assert!(ts.observations.is_empty());
        assert!(ts.actions.is_empty());
        assert_eq!(ts.extra, "");
        let mut out = String::new();
        encode(&ts, &mut out).unwrap();
        assert_eq!(out, s);
    }

    #[test]
    fn integral_reals_accepted_for_integer_ranges() {
        let s = "VERSION v PROBLEMTYPE episodic DISCOUNTFACTOR 1 OBSERVATIONS INTS (0.0 10.0) \
                 ACTIONS REWARDS (0 1) EXTRA OBSERVATIONS INTS x";
        let ts = decode(s).unwrap();
        assert_eq!(ts.observations.field("x"), Some(&Dimension::integer(0, 10)));
        assert_eq!(ts.rewards, RewardRange::new(0.0, 1.0));
    }

    #[test]
    fn missing_tokens_are_named() {
        let err = decode("PROBLEMTYPE episodic").unwrap_err();
        assert_eq!(
            err,
            FormatError::MissingToken {
                token: VERSION,
                found: Some("PROBLEMTYPE".into()),
            }
        );

        let err = decode("VERSION v PROBLEMTYPE p DISCOUNTFACTOR 1 OBSERVATIONS ACTIONS")
            .unwrap_err();
        assert_eq!(
            err,
            FormatError::MissingToken {
                token: REWARDS,
                found: None,
            }
        );

        let err = decode(
            "VERSION v PROBLEMTYPE p DISCOUNTFACTOR 1 OBSERVATIONS ACTIONS REWARDS (0 1)",
        )
        .unwrap_err();
        assert_eq!(
            err,
            FormatError::MissingToken {
                token: EXTRA,
                found: None,
            }
        );

        let err = decode("VERSION v PROBLEMTYPE p DISCOUNTFACTOR 1 ACTIONS").unwrap_err();
        assert!(matches!(
            err,
            FormatError::MissingToken {
                token: OBSERVATIONS,
                ..
            }
        ));
    }

    #[test]
    fn bad_numbers_carry_offending_text() {
        let err = decode("VERSION v PROBLEMTYPE p DISCOUNTFACTOR half OBSERVATIONS").unwrap_err();
        assert_eq!(err, FormatError::InvalidNumber { text: "half".into() });

        let err = decode(
            "VERSION v PROBLEMTYPE p DISCOUNTFACTOR 1 OBSERVATIONS INTS (0 1.5) ACTIONS \
             REWARDS (0 1) EXTRA",
        )
        .unwrap_err();
        assert_eq!(err, FormatError::InvalidNumber { text: "1.5".into() });

        let err = decode(
            "VERSION v PROBLEMTYPE p DISCOUNTFACTOR 1 OBSERVATIONS CHARCOUNT x ACTIONS \
             REWARDS (0 1) EXTRA",
        )
        .unwrap_err();
        assert_eq!(err, FormatError::InvalidNumber { text: "x".into() });
    }

    #[test]
    fn huge_charcount_is_rejected_before_allocating() {
        let err = decode(
            "VERSION v PROBLEMTYPE episodic DISCOUNTFACTOR 1 OBSERVATIONS \
             CHARCOUNT 18446744073709551615 ACTIONS REWARDS (0.0 1.0) EXTRA",
        )
        .unwrap_err();
        assert!(matches!(
            err,
            FormatError::CharCountTooLarge {
                count: usize::MAX,
                ..
            }
        ));

        // One past the tokens that follow.
        let err = decode(
            "VERSION v PROBLEMTYPE p DISCOUNTFACTOR 1 OBSERVATIONS CHARCOUNT 9 ACTIONS \
             REWARDS (0 1) EXTRA OBSERVATIONS CHARS c",
        )
        .unwrap_err();
        assert_eq!(
            err,
            FormatError::CharCountTooLarge {
                count: 9,
                available: 8,
            }
        );
    }

    #[test]
    fn multi_line_and_tabbed_input_decodes() {
        let messy = "VERSION\tRL-Glue-3.0\nPROBLEMTYPE  episodic\r\nDISCOUNTFACTOR\t1\n\
            OBSERVATIONS\n\tINTS (0\t1)\n\t\t(0 1)  (0 1)\n\tDOUBLES\t(-1.200000 0.500000)\n\
            \t\t(-1.200000\n0.500000) (-0.070000 0.070000)\n\tCHARCOUNT\t2\n\
            ACTIONS INTS\t(0 4)\nREWARDS\t(-5.0 5.0)\n\
            EXTRA OBSERVATIONS INTS oi1 oi2 oi3 DOUBLES od1 od2 od3 CHARS oc1 oc2 ACTIONS INTS ai1";
        let ts = decode(messy).unwrap();
        assert_eq!(ts, decode(MOUNTAIN).unwrap());
        assert_eq!(ts.to_string(), MOUNTAIN);
    }

    #[test]
    fn rewards_require_a_range() {
        let err = decode(
            "VERSION v PROBLEMTYPE p DISCOUNTFACTOR 1 OBSERVATIONS ACTIONS REWARDS 5 EXTRA",
        )
        .unwrap_err();
        assert_eq!(
            err,
            FormatError::ExpectedRange {
                section: REWARDS,
                found: Some("5".into()),
            }
        );
    }

    #[test]
    fn missing_value_after_keyword() {
        let err = decode("VERSION").unwrap_err();
        assert_eq!(err, FormatError::MissingValue { token: VERSION });
    }

    #[test]
    fn extra_tail_strips_one_separator() {
        assert_eq!(extra_tail("EXTRA x", 5), "x");
        assert_eq!(extra_tail("EXTRA   x", 5), "  x");
        assert_eq!(extra_tail("EXTRA", 5), "");
    }
}
