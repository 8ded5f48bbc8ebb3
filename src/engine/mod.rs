//! Движок heads-up матча: ставки, переход улиц, шоудаун, сессии.
//!
//! Высокоуровневый объект: `GameSession`
//! Основные операции:
//!   - `start_game` – новый матч, первый раунд
//!   - `submit_action` – действие человека (бот отвечает сам)
//!   - `advance_round` – следующий раунд или конец матча
//!   - `state` – снимок для клиента

pub mod actions;
pub mod betting;
pub mod errors;
pub mod hand_history;
pub mod pot;
pub mod round;
pub mod session;
pub mod session_manager;
pub mod showdown;
pub mod validation;

pub use actions::{Action, ActionTaken, LegalAction};
pub use errors::EngineError;
pub use hand_history::{RoundEvent, RoundEventKind, RoundHistory};
pub use pot::Pot;
pub use round::{EndReason, Round, RoundResult, RoundStatus};
pub use session::{GameEndReason, GameOutcome, GameSession, GameWinner};
pub use session_manager::{ManagerError, SessionRegistry};
pub use showdown::{resolve_showdown, RoundWinner, ShowdownInput, ShowdownResult};

/// RNG интерфейс для engine.
/// Реализации – в infra (обёртки над `rand`).
pub trait RandomSource {
    fn shuffle<T>(&mut self, slice: &mut [T]);
}
