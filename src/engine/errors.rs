use thiserror::Error;

use crate::domain::chips::Chips;

/// Ошибки движка матча.
///
/// Все ошибки восстановимые: состояние после ошибки не меняется,
/// клиент просто перечитывает состояние и список допустимых действий.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("No active round")]
    NoActiveRound,

    #[error("Not waiting for action")]
    NotWaitingForAction,

    #[error("Cannot raise more than your stack (${stack}), requested ${amount}")]
    RaiseTooLarge { amount: u64, stack: u64 },

    #[error("Raise of ${amount} is below the minimum raise (${min})")]
    RaiseBelowMinimum { amount: u64, min: u64 },

    #[error("Current round is still in progress")]
    RoundInProgress,

    #[error("Game is already finished")]
    GameAlreadyFinished,

    #[error("Deck is exhausted")]
    DeckExhausted,

    #[error("Invalid game config: {0}")]
    InvalidConfig(String),

    #[error("Internal error: {0}")]
    Internal(&'static str),
}

impl EngineError {
    pub(crate) fn raise_too_large(amount: Chips, stack: Chips) -> Self {
        EngineError::RaiseTooLarge {
            amount: amount.0,
            stack: stack.0,
        }
    }

    pub(crate) fn raise_below_minimum(amount: Chips, min: Chips) -> Self {
        EngineError::RaiseBelowMinimum {
            amount: amount.0,
            min: min.0,
        }
    }
}
