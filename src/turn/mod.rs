//! Turn alternation between the acting and reacting side.

mod machine;
mod state;

pub use machine::{ReactingTurn, TurnStateMachine};
pub use state::{TurnState, TurnTransition};
