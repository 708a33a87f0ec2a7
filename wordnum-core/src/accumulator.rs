//! Numeral accumulation
//!
//! A run starts at a number word and extends through every following
//! number, scale, and adder token. Its value is built with two accumulators:
//!
//! - `scale_acc` collects units and tens and is multiplied in place by
//!   "hundred", which may appear any number of times;
//! - `total` receives `scale_acc * scale` for thousand, million and billion,
//!   after which `scale_acc` restarts from zero.
//!
//! The run value is `total + scale_acc`. Each run is replaced by a single
//! number token, followed by a space when the next token is not already
//! punctuation or an adder.

use crate::classify::{ClassifiedToken, TokenKind};
use crate::error::{Error, Result};
use crate::vocabulary::{self, HUNDRED};

/// In-progress value of one number run
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AccumulationRun {
    scale_acc: u64,
    total: u64,
}

impl AccumulationRun {
    /// Start an empty run
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one token into the run
    ///
    /// Returns `None` on `u64` overflow. Tokens that carry no value leave
    /// the run unchanged.
    pub fn feed(&mut self, kind: TokenKind) -> Option<()> {
        match kind {
            TokenKind::Number(value) => {
                self.scale_acc = self.scale_acc.checked_add(value)?;
            }
            TokenKind::Exponent(HUNDRED) => {
                self.scale_acc = self.scale_acc.checked_mul(HUNDRED)?;
            }
            TokenKind::Exponent(scale) => {
                let scaled = self.scale_acc.checked_mul(scale)?;
                self.total = self.total.checked_add(scaled)?;
                self.scale_acc = 0;
            }
            TokenKind::Adder | TokenKind::Period | TokenKind::NotANumber => {}
        }
        Some(())
    }

    /// Final value of the run
    pub fn value(&self) -> Option<u64> {
        self.total.checked_add(self.scale_acc)
    }
}

/// Separator inserted after a converted run
const RUN_SEPARATOR: &str = " ";

/// Whether a space should follow a run that stopped at `next`
fn needs_separator(next: &ClassifiedToken<'_>) -> bool {
    !matches!(next.text, "." | "," | ";") && !vocabulary::is_adder(next.text)
}

/// Replace every number run in `tokens` with its accumulated value
pub fn convert_numerals<'a>(tokens: &[ClassifiedToken<'a>]) -> Result<Vec<ClassifiedToken<'a>>> {
    let mut output = Vec::with_capacity(tokens.len());
    let mut i = 0;

    while i < tokens.len() {
        let token = tokens[i];
        if !matches!(token.kind, TokenKind::Number(_)) {
            output.push(token);
            i += 1;
            continue;
        }

        let mut run = AccumulationRun::new();
        let mut end = i;
        while end < tokens.len() && tokens[end].kind.continues_run() {
            run.feed(tokens[end].kind)
                .ok_or_else(|| overflow(&tokens[i..=end]))?;
            end += 1;
        }
        let value = run.value().ok_or_else(|| overflow(&tokens[i..end]))?;

        log::debug!("converted {:?} to {value}", run_text(&tokens[i..end]));
        output.push(ClassifiedToken::new(TokenKind::Number(value), ""));

        let Some(next) = tokens.get(end) else {
            break;
        };
        if needs_separator(next) {
            output.push(ClassifiedToken::new(TokenKind::Adder, RUN_SEPARATOR));
        }
        output.push(*next);
        i = end + 1;
    }

    Ok(output)
}

fn run_text(tokens: &[ClassifiedToken<'_>]) -> String {
    tokens.iter().map(|t| t.text).collect()
}

fn overflow(tokens: &[ClassifiedToken<'_>]) -> Error {
    let run = run_text(tokens);
    log::warn!("number run overflows u64: {run:?}");
    Error::Overflow { run }
}
