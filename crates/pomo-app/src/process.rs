//! Message processing
//!
//! Runs a message through the TEA update loop, following up chained messages
//! and dispatching any returned actions.

use crate::handler;
use crate::message::Message;
use crate::notifier::Notifier;
use crate::state::AppState;

use super::actions::handle_action;

/// Process a message through the TEA update function
pub fn process_message(state: &mut AppState, message: Message, notifier: &Notifier) {
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);

        if let Some(action) = result.action {
            handle_action(action, notifier);
        }

        msg = result.message;
    }
}
