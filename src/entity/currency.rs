//! Currency pair identity and its exchange string form.

use std::fmt;

/// A traded currency pair, e.g. BCH/USD.
///
/// The exchange addresses trading channels by a `t`-prefixed symbol string;
/// pairs where either currency name is longer than three characters use the
/// colon-separated form (`tDUSK:USD` instead of `tBCHUSD`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BitfinexCurrencyPair {
    base: String,
    quote: String,
}

impl BitfinexCurrencyPair {
    /// Create a pair from base and quote currency names.
    ///
    /// Names are normalized to upper case.
    pub fn of(base: &str, quote: &str) -> Self {
        Self {
            base: base.to_uppercase(),
            quote: quote.to_uppercase(),
        }
    }

    /// Base currency name.
    pub fn base(&self) -> &str {
        &self.base
    }

    /// Quote currency name.
    pub fn quote(&self) -> &str {
        &self.quote
    }

    /// The `t`-prefixed trading symbol the wire protocol expects.
    pub fn to_bitfinex_string(&self) -> String {
        if self.base.len() > 3 || self.quote.len() > 3 {
            format!("t{}:{}", self.base, self.quote)
        } else {
            format!("t{}{}", self.base, self.quote)
        }
    }
}

impl fmt::Display for BitfinexCurrencyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.base, self.quote)
    }
}
