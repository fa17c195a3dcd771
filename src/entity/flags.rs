//! Order flags and their combined wire representation.

use std::collections::HashSet;

/// Optional order behavior flags.
///
/// Each flag maps to a power-of-two code; an order carries the bitwise OR
/// of all its flags in the `flags` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BitfinexOrderFlag {
    /// Order is not visible in the book
    Hidden,
    /// Close position if present
    Close,
    /// Only reduce an existing position
    ReduceOnly,
    /// Post-only limit order, cancelled if it would take
    PostOnly,
    /// One cancels other
    Oco,
    /// Excludes variable rate funding offers
    NoVarRates,
}

impl BitfinexOrderFlag {
    /// The numeric flag code.
    pub fn code(&self) -> u64 {
        match self {
            Self::Hidden => 64,
            Self::Close => 512,
            Self::ReduceOnly => 1024,
            Self::PostOnly => 4096,
            Self::Oco => 16384,
            Self::NoVarRates => 524288,
        }
    }
}

/// Combine a flag set into the single numeric value the wire expects.
///
/// Order-independent: the codes are disjoint powers of two.
pub fn combined_flags(flags: &HashSet<BitfinexOrderFlag>) -> u64 {
    flags.iter().fold(0, |acc, flag| acc | flag.code())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_codes_are_disjoint() {
        let all = [
            BitfinexOrderFlag::Hidden,
            BitfinexOrderFlag::Close,
            BitfinexOrderFlag::ReduceOnly,
            BitfinexOrderFlag::PostOnly,
            BitfinexOrderFlag::Oco,
            BitfinexOrderFlag::NoVarRates,
        ];

        for a in &all {
            assert!(a.code().is_power_of_two());
            for b in &all {
                if a != b {
                    assert_eq!(a.code() & b.code(), 0);
                }
            }
        }
    }

    #[test]
    fn test_combined_flags() {
        let mut flags = HashSet::new();
        assert_eq!(combined_flags(&flags), 0);

        flags.insert(BitfinexOrderFlag::Hidden);
        assert_eq!(combined_flags(&flags), 64);

        flags.insert(BitfinexOrderFlag::PostOnly);
        assert_eq!(combined_flags(&flags), 64 + 4096);
    }

    #[test]
    fn test_combination_is_insertion_order_independent() {
        let mut forward = HashSet::new();
        forward.insert(BitfinexOrderFlag::Hidden);
        forward.insert(BitfinexOrderFlag::Close);
        forward.insert(BitfinexOrderFlag::Oco);

        let mut reverse = HashSet::new();
        reverse.insert(BitfinexOrderFlag::Oco);
        reverse.insert(BitfinexOrderFlag::Close);
        reverse.insert(BitfinexOrderFlag::Hidden);

        assert_eq!(combined_flags(&forward), combined_flags(&reverse));
        assert_eq!(combined_flags(&forward), 64 + 512 + 16384);
    }
}
