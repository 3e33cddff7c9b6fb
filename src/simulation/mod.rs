pub mod engine;
pub mod flee;
pub mod movement;
pub mod spawner;

pub use engine::{Game, Phase, Summary, TurnReport};
pub use movement::MoveOutcome;
pub use spawner::Spawner;
