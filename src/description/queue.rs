//! Announcement channel between narration and the host.

use std::collections::VecDeque;

use tracing::trace;

/// One piece of narration. Utterances sharing a `type_id` replace each
/// other while still pending
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Utterance {
    pub text: String,
    pub type_id: Option<&'static str>,
}

impl Utterance {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            type_id: None,
        }
    }

    pub fn with_type(text: impl Into<String>, type_id: &'static str) -> Self {
        Self {
            text: text.into(),
            type_id: Some(type_id),
        }
    }
}

/// Anything that accepts narration in order
pub trait Announcer {
    fn enqueue(&mut self, utterance: Utterance);
}

/// Ordered queue drained by the host
#[derive(Debug, Default, Clone)]
pub struct UtteranceQueue {
    pending: VecDeque<Utterance>,
}

impl UtteranceQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn drain(&mut self) -> Vec<Utterance> {
        self.pending.drain(..).collect()
    }

    pub fn texts(&self) -> Vec<String> {
        self.pending.iter().map(|u| u.text.clone()).collect()
    }

    pub fn clear(&mut self) {
        self.pending.clear();
    }
}

impl Announcer for UtteranceQueue {
    fn enqueue(&mut self, utterance: Utterance) {
        // an unmatched template renders empty, nothing to say
        if utterance.text.is_empty() {
            return;
        }
        if let Some(id) = utterance.type_id {
            self.pending.retain(|u| u.type_id != Some(id));
        }
        trace!(text = %utterance.text, "enqueue");
        self.pending.push_back(utterance);
    }
}

impl Announcer for Vec<String> {
    fn enqueue(&mut self, utterance: Utterance) {
        if !utterance.text.is_empty() {
            self.push(utterance.text);
        }
    }
}
