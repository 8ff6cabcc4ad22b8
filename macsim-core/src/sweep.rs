use crate::ArrivalRate;
use anyhow::{Result, anyhow, bail, ensure};
use logos::{Lexer, Logos};
use std::{fmt, str::FromStr};
use thiserror::Error;

/// A linearly-spaced sequence of arrival rates to evaluate.
///
/// The sweep driver walks these rates in order, invoking each engine once
/// per rate. The engines themselves make no assumption about how many rates
/// are swept or in what order.
///
/// # Example
///
/// ```
/// use macsim_core::RateSweep;
///
/// let sweep: RateSweep = "5%..50%x10".parse().unwrap();
/// let rates: Vec<_> = sweep.rates().collect();
/// assert_eq!(rates.len(), 10);
/// assert_eq!(rates[0].to_string(), "5%");
/// assert_eq!(rates[9].to_string(), "50%");
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RateSweep {
    start: ArrivalRate,
    end: ArrivalRate,
    steps: usize,
}

/// Error returned when constructing a [`RateSweep`] with no steps.
#[derive(Debug, Error)]
#[error("a rate sweep needs at least one step")]
pub struct RateSweepError;

impl RateSweep {
    /// Create a sweep of `steps` rates spaced evenly from `start` to `end`
    /// inclusive.
    ///
    /// A single-step sweep evaluates `start` only. `end` may be below
    /// `start` for a descending sweep.
    ///
    /// # Errors
    ///
    /// Returns [`RateSweepError`] if `steps` is zero.
    pub fn new(start: ArrivalRate, end: ArrivalRate, steps: usize) -> Result<Self, RateSweepError> {
        if steps == 0 {
            return Err(RateSweepError);
        }
        Ok(Self { start, end, steps })
    }

    /// Number of rates in the sweep.
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Iterate the swept rates in order.
    pub fn rates(&self) -> impl Iterator<Item = ArrivalRate> + '_ {
        let Self { start, end, steps } = *self;
        (0..steps).map(move |k| {
            let value = if steps == 1 {
                start.value()
            } else {
                let fraction = k as f64 / (steps - 1) as f64;
                start.value() + (end.value() - start.value()) * fraction
            };
            // both endpoints are probabilities, so the clamp only absorbs
            // floating-point drift
            ArrivalRate::new(value.clamp(0.0, 1.0)).expect("clamped value is a valid probability")
        })
    }
}

impl fmt::Display for RateSweep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{start}..{end}x{steps}",
            start = self.start,
            end = self.end,
            steps = self.steps,
        )
    }
}

impl FromStr for RateSweep {
    type Err = anyhow::Error;

    /// Parses a sweep expression of the form `"<start>%..<end>%x<steps>"`,
    /// e.g. `"5%..50%x10"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut lex = Lexer::new(s);

        let start = expect_percent(&mut lex, s)?;
        let Some(Ok(Token::Range)) = lex.next() else {
            bail!("Expecting `..` after the start rate, failed to parse: {s}")
        };
        let end = expect_percent(&mut lex, s)?;
        let Some(Ok(Token::Cross)) = lex.next() else {
            bail!("Expecting `x<steps>` after the end rate, failed to parse: {s}")
        };
        let Some(Ok(Token::Value)) = lex.next() else {
            bail!("Expecting a step count after `x`, failed to parse: {s}")
        };
        let steps: usize = lex.slice().parse()?;
        ensure!(lex.next().is_none(), "Trailing input, failed to parse: {s}");

        Self::new(start, end, steps).map_err(|error| anyhow!("{error}: {s}"))
    }
}

fn expect_percent(lex: &mut Lexer<'_, Token>, input: &str) -> Result<ArrivalRate> {
    let Some(next) = lex.next() else {
        bail!("Expecting a rate like `5%`, failed to parse: {input}")
    };
    let token = next.map_err(|()| anyhow!("Failed to parse: {input}"))?;
    ensure!(
        token == Token::Percent,
        "Expecting a rate like `5%`, failed to parse: {input}"
    );
    lex.slice()
        .parse::<ArrivalRate>()
        .map_err(|error| anyhow!("{error}: {input}"))
}

#[derive(Logos, Debug, PartialEq)]
#[logos(skip r"[ \t\n\f]+")] // Ignore this regex pattern between tokens
enum Token {
    #[token("..")]
    Range,
    #[token("x")]
    Cross,

    #[regex(r"[0-9]+(\.[0-9]+)?%")]
    Percent,
    #[regex(r"[0-9]+")]
    Value,
}
