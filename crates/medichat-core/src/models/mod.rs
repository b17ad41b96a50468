//! Domain models for the MediChat symptom checker.

mod disease;
mod message;
mod prediction;
mod symptom;

pub use disease::*;
pub use message::*;
pub use prediction::*;
pub use symptom::*;
