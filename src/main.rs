use clap::Parser;
use rpsplus::gameplay::Table;
use rpsplus::players::{Human, Robot};
use std::rc::Rc;

/// Console Rock-Paper-Scissors-Plus against a random bot.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Re-prompt on a rejected move instead of burning the round.
    #[arg(long)]
    resubmit: bool,
}

fn main() {
    rpsplus::log();
    let args = Args::parse();
    Table::new(Rc::new(Human), Rc::new(Robot), args.resubmit).play();
}
