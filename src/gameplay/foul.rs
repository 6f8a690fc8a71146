/// A rejected submission. Both variants are recoverable values reported
/// back to the table, never faults; the core has no panicking paths.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Foul {
    /// token outside the legal move set
    Unknown,
    /// bomb submitted after this seat already consumed its bomb
    Spent,
}

impl Display for Foul {
    fn fmt(&self, f: &mut Formatter) -> Result {
        match self {
            Self::Unknown => write!(f, "Invalid move"),
            Self::Spent => write!(f, "Bomb already used"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reasons_are_stable() {
        assert!(Foul::Unknown.to_string() == "Invalid move");
        assert!(Foul::Spent.to_string() == "Bomb already used");
    }
}

use std::fmt::{Display, Formatter, Result};
