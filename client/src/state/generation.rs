//! Styling request lifecycle.
//!
//! DESIGN
//! ======
//! A submission is an explicit task: `Idle` → `Pending(ticket)` →
//! `Resolved(outcome)`. `begin` refuses to start while a ticket is pending,
//! which is the double-submission guard. `abandon` drops the pending ticket
//! so a completion arriving after the view is gone resolves nothing.

#[cfg(test)]
#[path = "generation_test.rs"]
mod generation_test;

/// Identifies one submission.
pub type Ticket = u64;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GenerationOutcome {
    /// Number of generated images recorded in the new session.
    Succeeded { images: usize },
    Failed(String),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum GenerationStatus {
    #[default]
    Idle,
    Pending(Ticket),
    Resolved(GenerationOutcome),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GenerationState {
    status: GenerationStatus,
    issued: Ticket,
}

impl GenerationState {
    #[must_use]
    pub fn status(&self) -> &GenerationStatus {
        &self.status
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        matches!(self.status, GenerationStatus::Pending(_))
    }

    /// Start a submission. Returns `None` while another one is pending.
    pub fn begin(&mut self) -> Option<Ticket> {
        if self.is_pending() {
            return None;
        }
        self.issued += 1;
        self.status = GenerationStatus::Pending(self.issued);
        Some(self.issued)
    }

    /// Resolve the pending submission if `ticket` is still current.
    ///
    /// Returns `false` for stale or abandoned tickets; the caller must then
    /// discard the result.
    pub fn resolve(&mut self, ticket: Ticket, outcome: GenerationOutcome) -> bool {
        if self.status != GenerationStatus::Pending(ticket) {
            return false;
        }
        self.status = GenerationStatus::Resolved(outcome);
        true
    }

    /// Forget the pending submission without resolving it.
    pub fn abandon(&mut self) {
        if self.is_pending() {
            self.status = GenerationStatus::Idle;
        }
    }
}
