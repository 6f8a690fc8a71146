/// The match loop. Owns the game state for the session and composes
/// the seats' players, the showdown, and the state application; all
/// console display happens here.
pub struct Table {
    game: Game,
    user: Rc<dyn Player>,
    bot: Rc<dyn Player>,
    resubmit: bool,
}

impl Table {
    /// resubmit = false burns the round on a rejected move, matching
    /// the default policy; true re-prompts instead.
    pub fn new(user: Rc<dyn Player>, bot: Rc<dyn Player>, resubmit: bool) -> Self {
        Self {
            game: Game::new(),
            user,
            bot,
            resubmit,
        }
    }

    pub fn play(&mut self) {
        self.begin_match();
        while self.has_rounds() {
            self.begin_round();
            self.take_round();
        }
        self.end_match();
    }

    fn has_rounds(&self) -> bool {
        !self.game.over()
    }

    fn begin_match(&self) {
        log::debug!("match start vs {:?}", self.bot);
        println!("{}", "Rock-Paper-Scissors-Plus".bold());
        println!("Rules:");
        println!("- Best of {} rounds", crate::N_ROUNDS);
        println!("- Moves: rock, paper, scissors, bomb");
        println!("- Bomb can be used once");
    }

    fn begin_round(&self) {
        println!("\n{}\nRound  {}", "-".repeat(21), self.game.round());
    }

    fn take_round(&mut self) {
        loop {
            match self.user.act(self.game.user()) {
                Ok(user) => {
                    let bot = self
                        .bot
                        .act(self.game.bot())
                        .expect("machine players never foul");
                    let showdown = Showdown::decide(user, bot);
                    println!("You: {} | Bot: {}", user, bot);
                    println!("{}", showdown.message);
                    println!(
                        "{}",
                        self.game.apply(Ply::Showdown {
                            user,
                            bot,
                            winner: showdown.winner,
                        })
                    );
                    return;
                }
                Err(foul) => {
                    println!("{}", foul.to_string().red());
                    match self.resubmit {
                        true => continue,
                        false => {
                            self.game.apply(Ply::Burned);
                            return;
                        }
                    }
                }
            }
        }
    }

    fn end_match(&self) {
        log::debug!("match over after round {}", self.game.round() - 1);
        println!("\n{}\nFinal Result", "-".repeat(21));
        println!("{}", self.game);
        match self.game.leader() {
            Winner::User => println!("{}", "You win!".green()),
            Winner::Bot => println!("{}", "Bot wins!".red()),
            Winner::Draw => println!("{}", "It's a draw!".yellow()),
        }
    }
}

use super::game::{Game, Ply};
use super::player::Player;
use super::showdown::{Showdown, Winner};
use colored::Colorize;
use std::rc::Rc;
