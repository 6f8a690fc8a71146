pub mod action;
pub use action::*;

pub mod engine;
pub use engine::*;

pub mod foul;
pub use foul::*;

pub mod game;
pub use game::*;

pub mod player;
pub use player::*;

pub mod seat;
pub use seat::*;

pub mod showdown;
pub use showdown::*;
