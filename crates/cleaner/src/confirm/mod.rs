//! Confirm module — the interactive yes/no gate in front of each action.

pub mod gate;
pub mod provider;

pub use gate::{confirm, GateState};
pub use provider::{ConfirmOps, ScriptedConfirm, StdinConfirm};
