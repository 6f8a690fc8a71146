/// The console boundary. Reads a raw line, trims and lowercases it,
/// then vets it against the submitting seat. Rejections come back as
/// values; the table decides whether the round burns or re-prompts.
pub struct Human;

impl Player for Human {
    fn act(&self, seat: &Seat) -> Result<Move, Foul> {
        let input: String = Input::new()
            .with_prompt("Your move")
            .allow_empty(true)
            .report(false)
            .interact_text()
            .expect("interactive terminal");
        seat.vet(input.trim().to_lowercase().as_str())
    }
}

impl Debug for Human {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Human")
    }
}

use crate::gameplay::{action::Move, foul::Foul, player::Player, seat::Seat};
use dialoguer::Input;
use std::fmt::{Debug, Formatter};
