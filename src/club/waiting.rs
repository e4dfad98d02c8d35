use serde::{Deserialize, Serialize};
use std::collections::vec_deque::VecDeque;

/// FIFO of clients waiting for a table. A name is queued at most once.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WaitQueue {
    capacity: usize,
    clients: VecDeque<String>,
}

impl WaitQueue {
    pub fn new(capacity: usize) -> WaitQueue {
        WaitQueue {
            capacity,
            clients: VecDeque::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.clients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clients.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.clients.len() >= self.capacity
    }

    pub fn contains(&self, client: &str) -> bool {
        self.clients.iter().any(|queued| queued == client)
    }

    /// Gives the client back if there is no room or they are already queued
    pub fn push(&mut self, client: String) -> Result<(), String> {
        if self.is_full() || self.contains(&client) {
            return Err(client);
        }

        self.clients.push_back(client);

        Ok(())
    }

    pub fn pop(&mut self) -> Option<String> {
        self.clients.pop_front()
    }

    pub fn remove(&mut self, client: &str) -> bool {
        match self.clients.iter().position(|queued| queued == client) {
            Some(index) => {
                self.clients.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self) {
        self.clients.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.clients.iter().map(String::as_str)
    }
}
