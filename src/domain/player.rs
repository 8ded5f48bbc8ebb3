use core::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::chips::Chips;

/// Место за heads-up столом: живой игрок или бот.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Seat {
    Human,
    Ai,
}

impl Seat {
    /// Соперник этого места.
    pub fn other(self) -> Seat {
        match self {
            Seat::Human => Seat::Ai,
            Seat::Ai => Seat::Human,
        }
    }
}

impl fmt::Display for Seat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Seat::Human => "human",
            Seat::Ai => "ai",
        })
    }
}

/// Стеки обоих игроков. Переносятся из раздачи в раздачу.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Stacks {
    pub human: Chips,
    pub ai: Chips,
}

impl Stacks {
    pub fn new(human: Chips, ai: Chips) -> Self {
        Self { human, ai }
    }

    /// Одинаковые стеки (старт матча).
    pub fn even(amount: Chips) -> Self {
        Self::new(amount, amount)
    }

    pub fn get(&self, seat: Seat) -> Chips {
        match seat {
            Seat::Human => self.human,
            Seat::Ai => self.ai,
        }
    }

    pub fn get_mut(&mut self, seat: Seat) -> &mut Chips {
        match seat {
            Seat::Human => &mut self.human,
            Seat::Ai => &mut self.ai,
        }
    }

    /// Сумма фишек на столе (без банка).
    pub fn total(&self) -> Chips {
        self.human + self.ai
    }

    /// Короткий стек – верхняя граница рейза без сайд-потов.
    pub fn effective(&self) -> Chips {
        self.human.min(self.ai)
    }

    /// Первый игрок с пустым стеком (если есть).
    pub fn busted(&self) -> Option<Seat> {
        if self.human.is_zero() {
            Some(Seat::Human)
        } else if self.ai.is_zero() {
            Some(Seat::Ai)
        } else {
            None
        }
    }
}
