//! Gate — AWAITING_CONFIRMATION → {CONFIRMED, ABORTED}, once per action category.

use tracing::{info, warn};

use super::provider::ConfirmOps;
use crate::action::outcome::ActionKind;

/// The literal answer that lets an action proceed.
pub const CONFIRM_WORD: &str = "yes";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateState {
    /// Selection was empty; nobody was asked.
    NothingSelected,
    /// `-yes` was given; nobody was asked.
    Bypassed,
    /// Operator typed exactly `yes`.
    Confirmed,
    /// Any other answer, end of input, or an unreadable terminal.
    Aborted,
}

impl GateState {
    /// Whether the action's calls may be issued.
    pub fn proceeds(self) -> bool {
        matches!(self, GateState::Bypassed | GateState::Confirmed)
    }
}

/// Prompt text shown for `count` selected items of `kind`.
pub fn prompt_text(kind: ActionKind, count: usize) -> String {
    format!(
        "This will {} {} {}\nDo you want to continue? (yes/no)\n",
        kind.verb(),
        count,
        kind.noun()
    )
}

/// Run the gate for one category.
pub async fn confirm(
    provider: &mut dyn ConfirmOps,
    kind: ActionKind,
    count: usize,
    assume_yes: bool,
) -> GateState {
    if count == 0 {
        return GateState::NothingSelected;
    }
    if assume_yes {
        return GateState::Bypassed;
    }

    let prompt = prompt_text(kind, count);
    match provider.ask(&prompt).await {
        Ok(Some(answer)) if answer == CONFIRM_WORD => GateState::Confirmed,
        Ok(answer) => {
            info!(answer = ?answer.unwrap_or_default(), "Not confirmed, skipping {}", kind.noun());
            GateState::Aborted
        }
        Err(e) => {
            warn!(error = %e, "Could not read confirmation, skipping {}", kind.noun());
            GateState::Aborted
        }
    }
}
