use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TypeError;

/// A non-negative monetary amount in mutez (micro-tez).
///
/// All arithmetic is checked: the registry never wraps or saturates money.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Mutez(u64);

impl Mutez {
    /// Zero mutez.
    pub const ZERO: Mutez = Mutez(0);

    /// Wrap a raw mutez amount.
    pub const fn new(amount: u64) -> Self {
        Self(amount)
    }

    /// The raw amount.
    pub const fn get(&self) -> u64 {
        self.0
    }

    /// Whether the amount is zero.
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checked addition.
    pub fn checked_add(self, other: Mutez) -> Result<Mutez, TypeError> {
        self.0
            .checked_add(other.0)
            .map(Mutez)
            .ok_or(TypeError::AmountOverflow)
    }

    /// Checked subtraction. Fails on underflow (amounts are non-negative).
    pub fn checked_sub(self, other: Mutez) -> Result<Mutez, TypeError> {
        self.0
            .checked_sub(other.0)
            .map(Mutez)
            .ok_or(TypeError::AmountOverflow)
    }
}

impl fmt::Display for Mutez {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} mutez", self.0)
    }
}

impl From<u64> for Mutez {
    fn from(amount: u64) -> Self {
        Self(amount)
    }
}

impl FromStr for Mutez {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().trim_end_matches("mutez").trim_end();
        s.parse::<u64>()
            .map(Mutez)
            .map_err(|e| TypeError::InvalidAmount(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checked_add_detects_overflow() {
        let max = Mutez::new(u64::MAX);
        assert_eq!(max.checked_add(Mutez::new(1)), Err(TypeError::AmountOverflow));
        assert_eq!(
            Mutez::new(2).checked_add(Mutez::new(3)).unwrap(),
            Mutez::new(5)
        );
    }

    #[test]
    fn checked_sub_detects_underflow() {
        assert_eq!(
            Mutez::new(1).checked_sub(Mutez::new(2)),
            Err(TypeError::AmountOverflow)
        );
        assert_eq!(
            Mutez::new(5).checked_sub(Mutez::new(3)).unwrap(),
            Mutez::new(2)
        );
    }

    #[test]
    fn parses_with_and_without_suffix() {
        assert_eq!("1000000".parse::<Mutez>().unwrap(), Mutez::new(1_000_000));
        assert_eq!("42 mutez".parse::<Mutez>().unwrap(), Mutez::new(42));
        assert!("tez".parse::<Mutez>().is_err());
    }

    #[test]
    fn serde_is_transparent() {
        let amount = Mutez::new(7);
        let json = serde_json::to_string(&amount).unwrap();
        assert_eq!(json, "7");
        assert_eq!(serde_json::from_str::<Mutez>("7").unwrap(), amount);
    }
}
