//! Core building blocks shared by every game and engine: sides, seeded
//! randomness, the error taxonomy and the temporary-move stack.

pub mod error;
pub mod rng;
pub mod side;
pub mod temp;

pub use error::{EngineError, Result};
pub use rng::{GameRng, GameRngState};
pub use side::{Side, SideMap};
pub use temp::TempStack;
