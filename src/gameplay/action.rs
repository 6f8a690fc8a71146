#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq)]
pub enum Move {
    Rock,
    Paper,
    Scissors,
    Bomb,
}

impl Move {
    pub const ALL: [Self; 4] = [Self::Rock, Self::Paper, Self::Scissors, Self::Bomb];

    /// the cyclic dominance among the three standard moves.
    /// bomb never participates; its rules live in the showdown.
    pub fn beats(&self, other: &Self) -> bool {
        matches!(
            (self, other),
            (Self::Rock, Self::Scissors)
                | (Self::Scissors, Self::Paper)
                | (Self::Paper, Self::Rock)
        )
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Rock => "rock",
            Self::Paper => "paper",
            Self::Scissors => "scissors",
            Self::Bomb => "bomb",
        }
    }
}

/// parsing expects an already-normalized token. trimming and lowercasing
/// happen at the console boundary, never here.
impl TryFrom<&str> for Move {
    type Error = Foul;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s {
            "rock" => Ok(Self::Rock),
            "paper" => Ok(Self::Paper),
            "scissors" => Ok(Self::Scissors),
            "bomb" => Ok(Self::Bomb),
            _ => Err(Foul::Unknown),
        }
    }
}

impl Display for Move {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match self {
            Self::Rock => write!(f, "{}", self.name().cyan()),
            Self::Paper => write!(f, "{}", self.name().yellow()),
            Self::Scissors => write!(f, "{}", self.name().green()),
            Self::Bomb => write!(f, "{}", self.name().red()),
        }
    }
}


use super::foul::Foul;
use colored::Colorize;
use std::fmt::{Display, Formatter};
