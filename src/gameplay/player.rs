/// A decision-maker for one seat. The console boundary may surface a
/// foul from raw text; machine players draw from the legal pool and
/// never do.
pub trait Player: Debug {
    fn act(&self, seat: &Seat) -> Result<Move, Foul>;
}

use super::action::Move;
use super::foul::Foul;
use super::seat::Seat;
use std::fmt::Debug;
