//! Message processing
//!
//! Runs a message through the TEA update function, dispatches the
//! resulting action and follows up on chained messages until none remain.

use tokio::sync::mpsc;

use crate::actions::{handle_action, Services};
use crate::handler;
use crate::message::Message;
use crate::source::SourceFetcher;
use crate::state::AppState;

/// Process a message through the TEA update function
pub fn process_message<F>(
    state: &mut AppState,
    message: Message,
    msg_tx: &mpsc::Sender<Message>,
    services: &Services<F>,
) where
    F: SourceFetcher + Send + Sync + 'static,
{
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);

        if let Some(action) = result.action {
            handle_action(action, msg_tx.clone(), services);
        }

        // Continue with follow-up message
        msg = result.message;
    }
}
