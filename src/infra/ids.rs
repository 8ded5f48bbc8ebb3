use std::sync::atomic::{AtomicU64, Ordering};

use crate::domain::SessionId;

/// Генерация ID сессий на монотонном счётчике (с единицы).
#[derive(Debug)]
pub struct IdGenerator {
    session_counter: AtomicU64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self {
            session_counter: AtomicU64::new(1),
        }
    }

    #[inline]
    pub fn next_session_id(&self) -> SessionId {
        self.session_counter.fetch_add(1, Ordering::Relaxed)
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}
