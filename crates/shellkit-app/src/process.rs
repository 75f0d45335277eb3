//! Message processing

use std::collections::VecDeque;

use crate::actions::handle_action;
use crate::handler;
use crate::message::Message;
use crate::state::ShellState;

/// Process a message through the TEA update function, following every
/// returned message and action until the queue drains.
pub fn process_message(state: &mut ShellState, message: Message) {
    let mut queue = VecDeque::from([message]);
    while let Some(m) = queue.pop_front() {
        let result = handler::update(state, m);

        if let Some(action) = result.action {
            queue.extend(handle_action(state, action));
        }

        if let Some(msg) = result.message {
            queue.push_back(msg);
        }
    }
}
