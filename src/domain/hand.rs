use core::fmt;

use serde::{Deserialize, Serialize};

/// Улица раздачи. Это же и состояние автомата раздачи.
///
/// `Showdown` – транзитное состояние на время вскрытия,
/// `Ended` – раздача закрыта (шоудаун или фолд).
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Street {
    Preflop,
    Flop,
    Turn,
    River,
    Showdown,
    Ended,
}

impl Street {
    /// Следующая улица ставок и сколько карт борда для неё сдаётся.
    pub fn next_betting_street(self) -> Option<(Street, usize)> {
        match self {
            Street::Preflop => Some((Street::Flop, 3)),
            Street::Flop => Some((Street::Turn, 1)),
            Street::Turn => Some((Street::River, 1)),
            Street::River | Street::Showdown | Street::Ended => None,
        }
    }

    /// Улица, на которой ещё идут ставки.
    pub fn is_betting(self) -> bool {
        matches!(self, Street::Preflop | Street::Flop | Street::Turn | Street::River)
    }

    /// Сколько карт борда открыто к этой улице.
    pub fn board_len(self) -> usize {
        match self {
            Street::Preflop => 0,
            Street::Flop => 3,
            Street::Turn => 4,
            Street::River | Street::Showdown | Street::Ended => 5,
        }
    }
}

impl fmt::Display for Street {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Street::Preflop => "preflop",
            Street::Flop => "flop",
            Street::Turn => "turn",
            Street::River => "river",
            Street::Showdown => "showdown",
            Street::Ended => "ended",
        };
        f.write_str(s)
    }
}

/// Сила руки: чем больше, тем сильнее. Равенство = сплит.
/// Кодировку заполняет eval (см. `eval::hand_rank`).
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HandRank(pub u32);
