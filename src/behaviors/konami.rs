//! Rolling key history and the sequence it is compared against.

use std::collections::VecDeque;

/// The most recent key labels, oldest first. Never cleared; the oldest entry
/// drops out once the window is full.
#[derive(Debug, Clone)]
pub struct KeyHistory {
    keys: VecDeque<String>,
    capacity: usize,
}

impl KeyHistory {
    pub fn new(capacity: usize) -> Self {
        Self { keys: VecDeque::with_capacity(capacity), capacity }
    }

    pub fn push(&mut self, key: &str) {
        if self.capacity == 0 {
            return;
        }
        if self.keys.len() == self.capacity {
            self.keys.pop_front();
        }
        self.keys.push_back(key.to_string());
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// True when the window holds exactly `sequence`, in order.
    pub fn matches(&self, sequence: &[String]) -> bool {
        self.keys.len() == sequence.len() && self.keys.iter().zip(sequence).all(|(a, b)| a == b)
    }
}
