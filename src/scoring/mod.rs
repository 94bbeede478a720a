pub mod board;
pub use board::*;

pub mod foul;

pub mod rows;
pub use rows::*;

pub mod showdown;
pub use showdown::*;
