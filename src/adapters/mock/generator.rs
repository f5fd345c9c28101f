//! Scripted text generator for tests.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::generation::{ReplyInput, TextGenerator, GREETING_FALLBACK, REPLY_FALLBACK};

/// A text generator that replays queued lines.
///
/// When the queue is empty (or failure is switched on) it behaves like a
/// failing backend and returns the fallback lines, the same contract the
/// real client honors.
#[derive(Debug, Clone, Default)]
pub struct MockGenerator {
    replies: Arc<Mutex<VecDeque<String>>>,
    greetings: Arc<Mutex<VecDeque<String>>>,
    failing: Arc<Mutex<bool>>,
    reply_calls: Arc<Mutex<Vec<ReplyInput>>>,
    greeting_calls: Arc<Mutex<usize>>,
}

impl MockGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_replies<I, S>(replies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let generator = Self::new();
        generator
            .replies
            .lock()
            .unwrap()
            .extend(replies.into_iter().map(Into::into));
        generator
    }

    pub fn with_greeting(self, greeting: impl Into<String>) -> Self {
        self.greetings.lock().unwrap().push_back(greeting.into());
        self
    }

    pub fn failing() -> Self {
        let generator = Self::new();
        *generator.failing.lock().unwrap() = true;
        generator
    }

    pub fn push_reply(&self, reply: impl Into<String>) {
        self.replies.lock().unwrap().push_back(reply.into());
    }

    /// Every `reply` call seen so far.
    pub fn reply_calls(&self) -> Vec<ReplyInput> {
        self.reply_calls.lock().unwrap().clone()
    }

    pub fn greeting_calls(&self) -> usize {
        *self.greeting_calls.lock().unwrap()
    }

    fn next(&self, queue: &Mutex<VecDeque<String>>) -> Option<String> {
        if *self.failing.lock().unwrap() {
            return None;
        }
        queue.lock().unwrap().pop_front()
    }
}

#[async_trait]
impl TextGenerator for MockGenerator {
    async fn reply(&self, input: ReplyInput) -> String {
        self.reply_calls.lock().unwrap().push(input);
        self.next(&self.replies).unwrap_or_else(|| REPLY_FALLBACK.to_string())
    }

    async fn greeting(&self, _persona_name: &str, _persona_specialty: &str, _location: &str) -> String {
        *self.greeting_calls.lock().unwrap() += 1;
        self.next(&self.greetings).unwrap_or_else(|| GREETING_FALLBACK.to_string())
    }
}
