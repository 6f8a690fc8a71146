/// One completed round from the state's point of view. Either both
/// moves reached a showdown, or the user's submission was rejected and
/// the round burns with no winner. Routing the burned round through the
/// same application keeps the round counter monotonic under a single
/// mutator.
#[derive(Debug, Clone, Copy)]
pub enum Ply {
    Showdown { user: Move, bot: Move, winner: Winner },
    Burned,
}

/// The authoritative match state: round counter and the two seats.
/// Constructed once per session, mutated only through apply, dropped at
/// process exit. Everything else reads.
#[derive(Debug, Clone, Copy)]
pub struct Game {
    round: u8,
    user: Seat,
    bot: Seat,
}

impl Game {
    pub fn new() -> Self {
        Self {
            round: 1,
            user: Seat::default(),
            bot: Seat::default(),
        }
    }

    pub fn round(&self) -> u8 {
        self.round
    }
    pub fn user(&self) -> &Seat {
        &self.user
    }
    pub fn bot(&self) -> &Seat {
        &self.bot
    }

    /// the only mutator. every ply advances the round counter by exactly
    /// one; a showdown additionally consumes bombs (idempotent) and
    /// credits at most one point. returns the post-round state for
    /// display.
    pub fn apply(&mut self, ply: Ply) -> &Self {
        match ply {
            Ply::Showdown { user, bot, winner } => {
                self.user.consume(user);
                self.bot.consume(bot);
                match winner {
                    Winner::User => self.user.credit(),
                    Winner::Bot => self.bot.credit(),
                    Winner::Draw => (),
                }
            }
            Ply::Burned => (),
        }
        self.round += 1;
        log::debug!(
            "round -> {} ({}-{})",
            self.round,
            self.user.score(),
            self.bot.score()
        );
        self
    }

    /// terminal once the round counter passes the fixed match length.
    /// no further rounds are processed.
    pub fn over(&self) -> bool {
        self.round > crate::N_ROUNDS
    }

    /// final standing by cumulative score.
    pub fn leader(&self) -> Winner {
        match self.user.score().cmp(&self.bot.score()) {
            Ordering::Greater => Winner::User,
            Ordering::Less => Winner::Bot,
            Ordering::Equal => Winner::Draw,
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Display for Game {
    fn fmt(&self, f: &mut Formatter) -> Result {
        write!(
            f,
            "{} {}  {} {}",
            "YOU".bold(),
            self.user.score(),
            "BOT".bold(),
            self.bot.score()
        )
    }
}


use super::action::Move;
use super::seat::Seat;
use super::showdown::Winner;
use colored::Colorize;
use std::cmp::Ordering;
use std::fmt::{Display, Formatter, Result};
