use serde::{Deserialize, Serialize};

use crate::domain::chips::Chips;

/// Банк раздачи. Сайд-потов в heads-up без мульти-оллинов не бывает.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Pot {
    pub total: Chips,
}

impl Pot {
    pub fn new() -> Self {
        Self { total: Chips::ZERO }
    }

    pub fn add(&mut self, amount: Chips) {
        self.total += amount;
    }

    /// Забрать весь банк (банк обнуляется).
    pub fn take_all(&mut self) -> Chips {
        std::mem::take(&mut self.total)
    }
}
