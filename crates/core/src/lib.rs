//! Simulation engine for the slotgrid idle game. No IO, no rendering:
//! front ends drive [`game::Game`] and drain the [`events::EventBus`].

pub mod board;
pub mod catalog;
pub mod config;
pub mod events;
pub mod game;
pub mod inventory;
pub mod rng;
pub mod shop;
pub mod symbol;

pub use board::*;
pub use catalog::*;
pub use config::*;
pub use events::*;
pub use game::*;
pub use inventory::*;
pub use rng::*;
pub use shop::*;
pub use symbol::*;
