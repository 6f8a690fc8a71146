/// Uniform random choice from the legal pool. Bomb leaves the pool
/// after its single use, so the draw can never regress into a foul.
pub struct Robot;

impl Player for Robot {
    fn act(&self, seat: &Seat) -> Result<Move, Foul> {
        let ref mut rng = rand::rng();
        Ok(seat
            .options()
            .choose(rng)
            .copied()
            .expect("legal pool is never empty"))
    }
}

impl Debug for Robot {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Robot")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stays_in_the_pool() {
        let mut seat = Seat::default();
        seat.consume(Move::Bomb);
        for _ in 0..64 {
            let mv = Robot.act(&seat).unwrap();
            assert!(mv != Move::Bomb);
            assert!(seat.options().contains(&mv));
        }
    }

    #[test]
    fn may_bomb_while_unspent() {
        let seat = Seat::default();
        for _ in 0..64 {
            let mv = Robot.act(&seat).unwrap();
            assert!(seat.options().contains(&mv));
        }
    }
}

use crate::gameplay::{action::Move, foul::Foul, player::Player, seat::Seat};
use rand::seq::IndexedRandom;
use std::fmt::{Debug, Formatter};
