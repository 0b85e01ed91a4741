use std::collections::VecDeque;

use lead_capture_core::{validate_step, LeadRecord};
use tokio::task::JoinHandle;

use super::actions::FormAction;
use super::client::SubmitClient;
use super::state::FormState;

/// Host-supplied configuration: where submissions go, the choices offered
/// on the final step, and the completion callback.
pub struct LeadFormConfig {
    pub api_url: String,
    pub looking_for_options: Vec<String>,
    pub on_complete: Option<Box<dyn FnOnce() + Send>>,
}

/// Drives the three-step flow. Submissions are spawned onto the ambient
/// tokio runtime, so the manager must live inside one.
pub struct FormManager {
    // Current state - single source of truth
    state: FormState,

    // Client for the fire-and-forget submission POSTs
    client: SubmitClient,

    // Final-step choices, rendered in the order the host gave them
    looking_for_options: Vec<String>,

    // Consumed on the first successful terminal submit
    on_complete: Option<Box<dyn FnOnce() + Send>>,

    // Action queue for sequential processing
    pending_actions: VecDeque<FormAction>,

    // Submissions still in flight; nothing in the UI path waits on these
    in_flight: Vec<JoinHandle<()>>,
}

impl FormManager {
    pub fn new(config: LeadFormConfig) -> Self {
        Self {
            state: FormState::default(),
            client: SubmitClient::new(&config.api_url),
            looking_for_options: config.looking_for_options,
            on_complete: config.on_complete,
            pending_actions: VecDeque::new(),
            in_flight: Vec::new(),
        }
    }

    /// UI calls this - synchronous, just queues the action.
    pub fn dispatch(&mut self, action: FormAction) {
        log::debug!("Dispatching action: {}", action.description());
        self.pending_actions.push_back(action);
    }

    /// Call this each frame - drains the queued actions in order.
    pub fn update(&mut self) {
        while let Some(action) = self.pending_actions.pop_front() {
            self.handle_action(action);
        }
        self.in_flight.retain(|handle| !handle.is_finished());
    }

    /// UI reads this - immutable reference.
    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn looking_for_options(&self) -> &[String] {
        &self.looking_for_options
    }

    /// Check if there are queued actions (for UI repaint requests).
    pub fn has_pending_actions(&self) -> bool {
        !self.pending_actions.is_empty()
    }

    pub fn in_flight_count(&self) -> usize {
        self.in_flight.len()
    }

    /// Await submissions still in flight. The UI never calls this; tests
    /// and shutdown use it to observe request completion.
    pub async fn await_in_flight(&mut self) {
        for handle in self.in_flight.drain(..) {
            let _ = handle.await;
        }
    }

    fn handle_action(&mut self, action: FormAction) {
        match action {
            FormAction::Edit { field, value } => {
                self.state.edit(field, value);
            }
            FormAction::SubmitStep => {
                self.handle_submit_step();
            }
        }
    }

    fn handle_submit_step(&mut self) {
        let step = self.state.step;

        if let Err(error) = validate_step(step, &self.state.lead) {
            log::debug!("Step {} rejected: {}", step.index(), error);
            self.state.errors.set(error.field, error.message);
            return;
        }
        self.state.errors.clear(step.field());

        if step.is_last() {
            self.state.completed = true;
            if let Some(on_complete) = self.on_complete.take() {
                log::info!("Lead capture flow completed");
                on_complete();
            }
        } else {
            self.state.step = step.advance();
            log::info!("Advanced to step {}", self.state.step.index());
        }

        // The endpoint receives the record accumulated so far on every
        // successful step, not only the final one.
        self.submit(self.state.lead.clone());
    }

    /// Fire-and-forget: the step transition above already happened, and the
    /// request outcome is logged and discarded.
    fn submit(&mut self, lead: LeadRecord) {
        let client = self.client.clone();
        let handle = tokio::spawn(async move {
            if let Err(error) = client.post_lead(&lead).await {
                log::error!("Error submitting form: {error:#}");
            }
        });
        self.in_flight.push(handle);
    }
}
