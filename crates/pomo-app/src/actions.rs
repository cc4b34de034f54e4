//! Action handlers: execute side effects returned by the update function

use crate::handler::UpdateAction;
use crate::notifier::Notifier;

/// Execute an action. Never blocks; effects run on detached tasks.
pub fn handle_action(action: UpdateAction, notifier: &Notifier) {
    match action {
        UpdateAction::Notify { message } => {
            // Handle is dropped: nothing waits on the notification
            let _ = notifier.notify(&message);
        }
    }
}
