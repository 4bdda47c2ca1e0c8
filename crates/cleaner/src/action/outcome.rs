//! Outcome — what happened to each selected identifier.
//!
//! Failures are values here. A batch never stops on the first error, and
//! nothing in a report turns into a process failure.

use crate::confirm::gate::GateState;
use crate::docker::client::DockerError;
use crate::docker::inventory::RemovalEntry;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    Stop,
    Delete,
}

impl ActionKind {
    pub fn verb(self) -> &'static str {
        match self {
            ActionKind::Stop => "stop",
            ActionKind::Delete => "delete",
        }
    }

    pub fn noun(self) -> &'static str {
        match self {
            ActionKind::Stop => "containers",
            ActionKind::Delete => "images",
        }
    }
}

/// Successful effect of one call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Stopped,
    Removed(Vec<RemovalEntry>),
}

#[derive(Debug)]
pub struct ItemOutcome {
    pub id: String,
    pub result: Result<Effect, DockerError>,
}

impl ItemOutcome {
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

/// One category's run: the gate decision and, if it proceeded, every call's outcome.
#[derive(Debug)]
pub struct ActionReport {
    pub kind: ActionKind,
    pub gate: GateState,
    pub outcomes: Vec<ItemOutcome>,
}

impl ActionReport {
    /// Report for a category that issued no calls.
    pub fn skipped(kind: ActionKind, gate: GateState) -> Self {
        Self {
            kind,
            gate,
            outcomes: Vec::new(),
        }
    }

    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_ok()).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.succeeded()
    }

    /// `(id, error)` for every failed call, in call order.
    pub fn errors(&self) -> impl Iterator<Item = (&str, &DockerError)> {
        self.outcomes
            .iter()
            .filter_map(|o| o.result.as_ref().err().map(|e| (o.id.as_str(), e)))
    }
}

/// Everything a run did. `None` means the category was not requested.
#[derive(Debug, Default)]
pub struct RunReport {
    pub stop: Option<ActionReport>,
    pub remove: Option<ActionReport>,
}

impl RunReport {
    pub fn reports(&self) -> impl Iterator<Item = &ActionReport> {
        self.stop.iter().chain(self.remove.iter())
    }

    pub fn errors(&self) -> impl Iterator<Item = (&str, &DockerError)> {
        self.reports().flat_map(|r| r.errors())
    }

    pub fn error_count(&self) -> usize {
        self.reports().map(ActionReport::failed).sum()
    }
}
