//! Serialization point for user-acknowledged prompts: a single in-flight
//! slot plus a pending queue, so at most one prompt is ever open and
//! requests are served strictly in arrival order.

use iced::futures::channel::oneshot;
use std::collections::VecDeque;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Error,
    Question,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    pub title: String,
    pub body: String,
    pub intent: Intent,
}

struct Request {
    prompt: Prompt,
    reply: oneshot::Sender<bool>,
}

#[derive(Default)]
pub struct ConfirmQueue {
    active: Option<Request>,
    pending: VecDeque<Request>,
}

impl ConfirmQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Submit a prompt. Opens immediately if no prompt is in flight,
    /// otherwise waits its turn behind the queue. The receiver completes
    /// with the user's answer once this prompt has been dismissed; a
    /// `Canceled` result means the queue was dropped before then.
    pub fn present(&mut self, prompt: Prompt) -> oneshot::Receiver<bool> {
        let (tx, rx) = oneshot::channel();
        let request = Request { prompt, reply: tx };
        if self.active.is_none() {
            self.active = Some(request);
        } else {
            self.pending.push_back(request);
        }
        rx
    }

    /// The prompt currently shown to the user, if any.
    pub fn active(&self) -> Option<&Prompt> {
        self.active.as_ref().map(|request| &request.prompt)
    }

    /// Dismiss the open prompt with the user's answer. The slot is cleared
    /// and the caller answered before the next pending request opens.
    pub fn resolve(&mut self, answer: bool) {
        let Some(request) = self.active.take() else {
            return;
        };
        // The caller may have dropped its receiver; that is not an error.
        let _ = request.reply.send(answer);
        self.active = self.pending.pop_front();
    }

    pub fn is_idle(&self) -> bool {
        self.active.is_none() && self.pending.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prompt(text: &str) -> Prompt {
        Prompt {
            title: "Navigation failed".to_string(),
            body: text.to_string(),
            intent: Intent::Error,
        }
    }

    #[test]
    fn opens_immediately_when_idle() {
        let mut queue = ConfirmQueue::new();
        let _rx = queue.present(prompt("a"));
        assert_eq!(queue.active().unwrap().body, "a");
    }

    #[test]
    fn serves_one_prompt_at_a_time_in_order() {
        let mut queue = ConfirmQueue::new();
        let mut rx_a = queue.present(prompt("a"));
        let mut rx_b = queue.present(prompt("b"));
        let mut rx_c = queue.present(prompt("c"));

        // Only A is open; B and C are queued, unanswered.
        assert_eq!(queue.active().unwrap().body, "a");
        assert!(rx_b.try_recv().unwrap().is_none());
        assert!(rx_c.try_recv().unwrap().is_none());

        // A resolves strictly before B's prompt opens.
        queue.resolve(true);
        assert_eq!(rx_a.try_recv().unwrap(), Some(true));
        assert_eq!(queue.active().unwrap().body, "b");
        assert!(rx_c.try_recv().unwrap().is_none());

        queue.resolve(false);
        assert_eq!(rx_b.try_recv().unwrap(), Some(false));
        assert_eq!(queue.active().unwrap().body, "c");

        queue.resolve(true);
        assert_eq!(rx_c.try_recv().unwrap(), Some(true));
        assert!(queue.is_idle());
    }

    #[test]
    fn resolve_with_no_open_prompt_is_a_no_op() {
        let mut queue = ConfirmQueue::new();
        queue.resolve(true);
        assert!(queue.is_idle());
    }

    #[test]
    fn dropped_caller_does_not_stall_the_queue() {
        let mut queue = ConfirmQueue::new();
        drop(queue.present(prompt("a")));
        let mut rx_b = queue.present(prompt("b"));

        queue.resolve(true); // answer to A goes nowhere
        assert_eq!(queue.active().unwrap().body, "b");
        queue.resolve(true);
        assert_eq!(rx_b.try_recv().unwrap(), Some(true));
    }
}
