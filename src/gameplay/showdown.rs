/// Which side took a round, or the match.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Winner {
    User,
    Bot,
    Draw,
}

/// ephemeral result of resolving two legal moves against each other.
/// never persisted; the game state consumes the winner and the table
/// displays the message.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Showdown {
    pub winner: Winner,
    pub message: String,
}

impl Showdown {
    /// pure and total over all pairs of legal moves. rule order matters:
    /// bomb collisions first, then the one-sided bombs, then the mirror
    /// match, then the cyclic relation read once from each side.
    pub fn decide(user: Move, bot: Move) -> Self {
        match (user, bot) {
            (Move::Bomb, Move::Bomb) => Self {
                winner: Winner::Draw,
                message: "Both used bomb".to_string(),
            },
            (Move::Bomb, _) => Self {
                winner: Winner::User,
                message: "Bomb beats everything".to_string(),
            },
            (_, Move::Bomb) => Self {
                winner: Winner::Bot,
                message: "Bot used bomb".to_string(),
            },
            _ if user == bot => Self {
                winner: Winner::Draw,
                message: "Same move".to_string(),
            },
            _ if user.beats(&bot) => Self {
                winner: Winner::User,
                message: format!("{} beats {}", user.name(), bot.name()),
            },
            _ => Self {
                winner: Winner::Bot,
                message: format!("{} beats {}", bot.name(), user.name()),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STANDARD: [Move; 3] = [Move::Rock, Move::Paper, Move::Scissors];

    #[test]
    fn bomb_collision_draws() {
        let showdown = Showdown::decide(Move::Bomb, Move::Bomb);
        assert!(showdown.winner == Winner::Draw);
        assert!(showdown.message == "Both used bomb");
    }

    #[test]
    fn user_bomb_beats_everything() {
        for bot in STANDARD {
            let showdown = Showdown::decide(Move::Bomb, bot);
            assert!(showdown.winner == Winner::User);
            assert!(showdown.message == "Bomb beats everything");
        }
    }

    #[test]
    fn bot_bomb_beats_everything() {
        for user in STANDARD {
            let showdown = Showdown::decide(user, Move::Bomb);
            assert!(showdown.winner == Winner::Bot);
            assert!(showdown.message == "Bot used bomb");
        }
    }

    #[test]
    fn mirror_match_draws() {
        for mv in STANDARD {
            let showdown = Showdown::decide(mv, mv);
            assert!(showdown.winner == Winner::Draw);
            assert!(showdown.message == "Same move");
        }
    }

    #[test]
    fn standard_relation_from_both_sides() {
        assert!(Showdown::decide(Move::Rock, Move::Scissors).winner == Winner::User);
        assert!(Showdown::decide(Move::Scissors, Move::Rock).winner == Winner::Bot);
        assert!(Showdown::decide(Move::Paper, Move::Rock).winner == Winner::User);
        assert!(Showdown::decide(Move::Scissors, Move::Paper).winner == Winner::User);
    }

    #[test]
    fn message_names_winner_first() {
        assert!(Showdown::decide(Move::Rock, Move::Scissors).message == "rock beats scissors");
        assert!(Showdown::decide(Move::Rock, Move::Paper).message == "paper beats rock");
    }

    #[test]
    fn total_over_all_pairs() {
        for user in Move::ALL {
            for bot in Move::ALL {
                let forward = Showdown::decide(user, bot).winner;
                let reverse = Showdown::decide(bot, user).winner;
                match forward {
                    Winner::Draw => assert!(reverse == Winner::Draw),
                    Winner::User => assert!(reverse == Winner::Bot),
                    Winner::Bot => assert!(reverse == Winner::User),
                }
            }
        }
    }
}

use super::action::Move;
