use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::chips::Chips;
use crate::domain::config::GameConfig;
use crate::domain::SessionId;
use crate::engine::actions::Action;
use crate::engine::session::GameSession;
use crate::engine::session_manager::SessionRegistry;

use super::dto::{CommandResponse, GameStateDto};
use super::errors::ApiError;
use super::queries::Query;

/// Команда верхнего уровня – всё, что меняет состояние.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Command {
    /// Новый матч с заданным конфигом (или дефолтным).
    StartGame {
        #[serde(default)]
        config: GameConfig,
    },

    /// Действие человека в текущем раунде.
    SubmitAction {
        session_id: SessionId,
        request: ActionRequest,
    },

    /// Следующий раунд (или конец матча).
    AdvanceRound { session_id: SessionId },

    /// Удалить сессию.
    EndSession { session_id: SessionId },
}

/// Вид действия так, как его присылает клиент.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ActionKind {
    Fold,
    Call,
    Raise,
}

/// Запрос действия: для рейза нужна сумма.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ActionRequest {
    pub kind: ActionKind,
    #[serde(default)]
    pub amount: Option<u64>,
}

impl ActionRequest {
    pub fn fold() -> Self {
        Self {
            kind: ActionKind::Fold,
            amount: None,
        }
    }

    pub fn call() -> Self {
        Self {
            kind: ActionKind::Call,
            amount: None,
        }
    }

    pub fn raise(amount: u64) -> Self {
        Self {
            kind: ActionKind::Raise,
            amount: Some(amount),
        }
    }
}

impl TryFrom<ActionRequest> for Action {
    type Error = ApiError;

    fn try_from(req: ActionRequest) -> Result<Self, Self::Error> {
        match req.kind {
            ActionKind::Fold => Ok(Action::Fold),
            ActionKind::Call => Ok(Action::Call),
            ActionKind::Raise => req
                .amount
                .map(|a| Action::Raise(Chips(a)))
                .ok_or(ApiError::RaiseAmountMissing),
        }
    }
}

/// Выполнить команду над реестром.
///
/// `StartGame` создаёт сессию со стандартными колодами, оценщиком и ботом.
pub fn handle_command(registry: &SessionRegistry, command: Command) -> Result<CommandResponse, ApiError> {
    debug!(?command, "handling command");
    match command {
        Command::StartGame { config } => {
            let session = GameSession::new(config)?;
            let (session_id, state) = registry.create(session)?;
            Ok(CommandResponse::Started { session_id, state })
        }

        Command::SubmitAction { session_id, request } => {
            let action = Action::try_from(request)?;
            Ok(CommandResponse::State(registry.submit_action(session_id, action)?))
        }

        Command::AdvanceRound { session_id } => {
            Ok(CommandResponse::State(registry.advance_round(session_id)?))
        }

        Command::EndSession { session_id } => {
            registry.remove(session_id)?;
            Ok(CommandResponse::Ended)
        }
    }
}

/// Выполнить запрос "только чтение".
pub fn handle_query(registry: &SessionRegistry, query: Query) -> Result<GameStateDto, ApiError> {
    match query {
        Query::GetState { session_id } => Ok(registry.state(session_id)?),
    }
}
