use core::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::Chips;

/// Действие, которое игрок (или бот) заявляет движку.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "action", content = "amount", rename_all = "lowercase")]
pub enum Action {
    Fold,
    /// Уравнять разницу ставок; при нулевой разнице это check.
    Call,
    /// Доложить столько фишек сверх уже поставленного на этой улице.
    Raise(Chips),
}

/// Допустимое действие с параметрами (то, что видит клиент).
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "action", rename_all = "lowercase")]
pub enum LegalAction {
    Fold,
    Call { amount: Chips },
    Raise { min: Chips, max: Chips },
}

/// Что реально произошло (с фактическими суммами) – для истории и сводок.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum ActionTaken {
    SmallBlind(Chips),
    BigBlind(Chips),
    Fold,
    Check,
    Call(Chips),
    Raise(Chips),
}

impl fmt::Display for ActionTaken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActionTaken::SmallBlind(c) => write!(f, "Small blind {c}"),
            ActionTaken::BigBlind(c) => write!(f, "Big blind {c}"),
            ActionTaken::Fold => f.write_str("Fold"),
            ActionTaken::Check => f.write_str("Check"),
            ActionTaken::Call(c) => write!(f, "Call {c}"),
            ActionTaken::Raise(c) => write!(f, "Raise {c}"),
        }
    }
}
