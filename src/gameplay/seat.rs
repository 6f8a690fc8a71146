/// One side of the table: cumulative score and one-shot bomb status.
/// The bomb flag latches; it transitions false -> true at most once per
/// match and never resets.
#[derive(Debug, Default, Clone, Copy)]
pub struct Seat {
    score: Score,
    spent: bool,
}

impl Seat {
    pub fn score(&self) -> Score {
        self.score
    }
    pub fn spent(&self) -> bool {
        self.spent
    }

    /// moves this seat may legally submit right now. bomb leaves the
    /// pool once consumed and never returns.
    pub fn options(&self) -> Vec<Move> {
        Move::ALL
            .iter()
            .copied()
            .filter(|mv| self.allows(*mv))
            .collect()
    }

    /// validate a normalized token against the closed move set and this
    /// seat's one-shot resource. pure in (input, self); symmetric over
    /// whichever seat is submitting.
    pub fn vet(&self, input: &str) -> Result<Move, Foul> {
        let mv = Move::try_from(input)?;
        match self.allows(mv) {
            true => Ok(mv),
            false => Err(Foul::Spent),
        }
    }

    fn allows(&self, mv: Move) -> bool {
        match mv {
            Move::Bomb => !self.spent,
            _ => true,
        }
    }

    pub(crate) fn credit(&mut self) {
        self.score += 1;
    }
    pub(crate) fn consume(&mut self, mv: Move) {
        if let Move::Bomb = mv {
            self.spent = true;
        }
    }
}


use super::action::Move;
use super::foul::Foul;
use crate::Score;
