//! Submission workflow: validate, submit, then flip a panel.
//!
//! The controller owns the form and the panel state. Each submit spawns one
//! detached request task; its outcome comes back over a channel and is
//! applied by whoever drives the controller. Requests cannot be cancelled
//! and nothing stops a second submit while one is in flight.

use std::sync::Arc;

use shared::{
    domain::{FormFields, SignupRequest, SubmissionResult},
    error::{SubmissionError, INVALID_EMAIL_MESSAGE},
    validation::validate_email,
};
use tokio::sync::mpsc;
use tracing::{debug, error, info, warn};
use uuid::Uuid;

use crate::{
    controller::{
        events::{handle_key_down, UiEvent},
        ui_state::UiState,
    },
    SubmissionClient,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkflowState {
    Idle,
    Validating,
    Invalid,
    Submitting,
    Submitted,
    Failed,
}

#[derive(Debug)]
pub struct SubmissionOutcome {
    pub attempt_id: Uuid,
    pub email: String,
    pub result: Result<SubmissionResult, SubmissionError>,
}

pub struct SignupController<S: SubmissionClient + ?Sized> {
    client: Arc<S>,
    form: FormFields,
    ui: UiState,
    state: WorkflowState,
    in_flight: usize,
    outcome_tx: mpsc::UnboundedSender<SubmissionOutcome>,
    outcome_rx: mpsc::UnboundedReceiver<SubmissionOutcome>,
}

impl<S> SignupController<S>
where
    S: SubmissionClient + ?Sized + 'static,
{
    pub fn new(client: Arc<S>) -> Self {
        let (outcome_tx, outcome_rx) = mpsc::unbounded_channel();
        Self {
            client,
            form: FormFields::default(),
            ui: UiState::default(),
            state: WorkflowState::Idle,
            in_flight: 0,
            outcome_tx,
            outcome_rx,
        }
    }

    pub fn with_form(mut self, form: FormFields) -> Self {
        self.form = form;
        self
    }

    pub fn form(&self) -> &FormFields {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut FormFields {
        &mut self.form
    }

    pub fn ui(&self) -> &UiState {
        &self.ui
    }

    pub fn state(&self) -> WorkflowState {
        self.state
    }

    /// Requests spawned but not yet applied.
    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    pub fn handle_event(&mut self, event: UiEvent) {
        debug!(event = event.name(), "ui event");
        match event {
            UiEvent::FieldChanged { name, value } => self.form.set(name, value),
            UiEvent::FieldCleared { name } => {
                self.form.remove(&name);
            }
            UiEvent::Submit => {
                self.submit_form();
            }
            UiEvent::KeyDown(key) => {
                if handle_key_down(&mut self.ui, &key) {
                    debug!("feedback panels dismissed");
                }
            }
            UiEvent::CloseSuccess => self.ui.hide_success(),
            UiEvent::CloseError => self.ui.hide_error(),
        }
    }

    /// Runs the synchronous half of a submission. Ends in `Invalid` without
    /// touching the network, or in `Submitting` with a request task spawned.
    pub fn submit_form(&mut self) -> WorkflowState {
        let request = SignupRequest::from_form(&self.form);
        self.transition(WorkflowState::Validating);

        if let Err(err) = validate_email(&request.email) {
            warn!(kind = ?err.kind(), "signup not sent: invalid email");
            self.ui.show_error(INVALID_EMAIL_MESSAGE);
            self.transition(WorkflowState::Invalid);
            return self.state;
        }

        let attempt_id = Uuid::new_v4();
        self.in_flight += 1;
        self.transition(WorkflowState::Submitting);
        info!(%attempt_id, in_flight = self.in_flight, "submitting signup");

        let client = Arc::clone(&self.client);
        let outcome_tx = self.outcome_tx.clone();
        tokio::spawn(async move {
            let result = client.submit(&request).await;
            // A closed channel means the controller is gone.
            let _ = outcome_tx.send(SubmissionOutcome {
                attempt_id,
                email: request.email,
                result,
            });
        });

        self.state
    }

    pub fn apply_outcome(&mut self, outcome: SubmissionOutcome) -> WorkflowState {
        self.in_flight = self.in_flight.saturating_sub(1);
        let attempt_id = outcome.attempt_id;

        match outcome.result {
            Ok(result) => {
                info!(%attempt_id, result = %result.0, "signup successful");
                self.ui.show_success(&outcome.email);
                self.form.reset();
                self.transition(WorkflowState::Submitted);
            }
            Err(err) => {
                error!(
                    %attempt_id,
                    kind = ?err.kind(),
                    status = ?err.status_code(),
                    error = %err,
                    "signup error"
                );
                self.ui.show_error(&err.user_message());
                self.transition(WorkflowState::Failed);
            }
        }

        self.state
    }

    /// Next completed request, in arrival order. Pends forever while
    /// nothing is in flight.
    pub async fn next_outcome(&mut self) -> Option<SubmissionOutcome> {
        self.outcome_rx.recv().await
    }

    /// Waits for the next completion to arrive and applies it.
    pub async fn settle(&mut self) -> WorkflowState {
        if self.in_flight == 0 {
            return self.state;
        }
        if let Some(outcome) = self.outcome_rx.recv().await {
            self.apply_outcome(outcome);
        }
        self.state
    }

    pub async fn settle_all(&mut self) -> WorkflowState {
        while self.in_flight > 0 {
            self.settle().await;
        }
        self.state
    }

    pub async fn submit_and_settle(&mut self) -> WorkflowState {
        match self.submit_form() {
            WorkflowState::Submitting => self.settle().await,
            state => state,
        }
    }

    fn transition(&mut self, next: WorkflowState) {
        debug!(from = ?self.state, to = ?next, "workflow transition");
        self.state = next;
    }
}

#[cfg(test)]
#[path = "../tests/workflow_tests.rs"]
mod tests;
