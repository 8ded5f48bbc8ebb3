use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::SessionId;
use crate::engine::{EngineError, ManagerError};

/// Ошибки внешнего API (то, что отдаём фронту / клиенту).
#[derive(Clone, Debug, Error, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "error", rename_all = "snake_case")]
pub enum ApiError {
    #[error("Session {session_id} not found")]
    SessionNotFound { session_id: SessionId },

    #[error("No active game")]
    NoActiveRound,

    #[error("Not waiting for action")]
    NotWaitingForAction,

    /// Рейз без суммы – ловится только здесь, движок такого не видит.
    #[error("Raise amount required")]
    RaiseAmountMissing,

    #[error("Cannot raise more than your stack (${stack}), requested ${amount}")]
    RaiseTooLarge { amount: u64, stack: u64 },

    #[error("Raise of ${amount} is below the minimum raise (${min})")]
    RaiseBelowMinimum { amount: u64, min: u64 },

    #[error("Current round is still in progress")]
    RoundInProgress,

    #[error("Game is already finished")]
    GameFinished,

    #[error("Invalid game config: {reason}")]
    InvalidConfig { reason: String },

    #[error("Internal error: {reason}")]
    Internal { reason: String },
}

impl ApiError {
    /// Стабильный машинный код ошибки.
    pub fn code(&self) -> &'static str {
        match self {
            ApiError::SessionNotFound { .. } => "session_not_found",
            ApiError::NoActiveRound => "no_active_round",
            ApiError::NotWaitingForAction => "not_waiting_for_action",
            ApiError::RaiseAmountMissing => "raise_amount_missing",
            ApiError::RaiseTooLarge { .. } => "raise_too_large",
            ApiError::RaiseBelowMinimum { .. } => "raise_below_minimum",
            ApiError::RoundInProgress => "round_in_progress",
            ApiError::GameFinished => "game_finished",
            ApiError::InvalidConfig { .. } => "invalid_config",
            ApiError::Internal { .. } => "internal",
        }
    }
}

impl From<EngineError> for ApiError {
    fn from(err: EngineError) -> Self {
        match err {
            EngineError::NoActiveRound => ApiError::NoActiveRound,
            EngineError::NotWaitingForAction => ApiError::NotWaitingForAction,
            EngineError::RaiseTooLarge { amount, stack } => ApiError::RaiseTooLarge { amount, stack },
            EngineError::RaiseBelowMinimum { amount, min } => ApiError::RaiseBelowMinimum { amount, min },
            EngineError::RoundInProgress => ApiError::RoundInProgress,
            EngineError::GameAlreadyFinished => ApiError::GameFinished,
            EngineError::InvalidConfig(reason) => ApiError::InvalidConfig { reason },
            other @ (EngineError::DeckExhausted | EngineError::Internal(_)) => ApiError::Internal {
                reason: other.to_string(),
            },
        }
    }
}

impl From<ManagerError> for ApiError {
    fn from(err: ManagerError) -> Self {
        match err {
            ManagerError::SessionNotFound(session_id) => ApiError::SessionNotFound { session_id },
            ManagerError::Poisoned => ApiError::Internal {
                reason: err.to_string(),
            },
            ManagerError::Engine(e) => e.into(),
        }
    }
}
