use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::chips::Chips;
use crate::domain::hand::Street;
use crate::domain::player::Seat;
use crate::domain::{RoundIndex, SessionId};
use crate::engine::actions::LegalAction;
use crate::engine::round::{EndReason, RoundResult};
use crate::engine::session::{GameEndReason, GameOutcome, GameWinner};
use crate::engine::showdown::RoundWinner;

/// Последние действия сторон на текущей улице ("Call $10", "Check", "-").
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct LastActionsDto {
    pub human: String,
    pub ai: String,
}

/// Итог раунда для клиента.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoundResultDto {
    pub winner: RoundWinner,
    pub reason: EndReason,
    pub pot: Chips,
    pub human_payout: Chips,
    pub ai_payout: Chips,
    /// Имена рук – только если дошли до вскрытия.
    pub human_hand: Option<String>,
    pub ai_hand: Option<String>,
    pub message: String,
}

impl From<&RoundResult> for RoundResultDto {
    fn from(r: &RoundResult) -> Self {
        Self {
            winner: r.winner,
            reason: r.reason,
            pot: r.pot,
            human_payout: r.payouts.human,
            ai_payout: r.payouts.ai,
            human_hand: r.showdown.as_ref().map(|s| s.human_hand_name.clone()),
            ai_hand: r.showdown.as_ref().map(|s| s.ai_hand_name.clone()),
            message: r.message.clone(),
        }
    }
}

/// Итог матча.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameOverDto {
    pub winner: GameWinner,
    pub reason: GameEndReason,
    pub human_stack: Chips,
    pub ai_stack: Chips,
    pub message: String,
}

impl From<&GameOutcome> for GameOverDto {
    fn from(o: &GameOutcome) -> Self {
        Self {
            winner: o.winner,
            reason: o.reason,
            human_stack: o.final_stacks.human,
            ai_stack: o.final_stacks.ai,
            message: o.message.clone(),
        }
    }
}

/// Снимок матча – всё, что нужно фронту для отрисовки стола.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameStateDto {
    pub round_index: RoundIndex,
    pub max_rounds: u32,
    pub street: Street,
    pub button: Seat,
    pub pot: Chips,
    pub human_stack: Chips,
    pub ai_stack: Chips,
    pub human_bet: Chips,
    pub ai_bet: Chips,
    pub human_cards: Vec<String>,
    /// Пусто, пока раунд не закончился.
    pub ai_cards: Vec<String>,
    pub board: Vec<String>,
    /// Пусто, если хода человека не ждём.
    pub legal_actions: Vec<LegalAction>,
    pub waiting_for_action: bool,
    pub last_actions: LastActionsDto,
    pub round_result: Option<RoundResultDto>,
    pub game_finished: bool,
    pub game_over: Option<GameOverDto>,
    pub message: String,
}

/// Ответ API на команду.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum CommandResponse {
    /// Матч создан и первый раунд сдан.
    Started {
        session_id: SessionId,
        state: GameStateDto,
    },

    /// Обновлённое состояние матча.
    State(GameStateDto),

    /// Сессия удалена.
    Ended,
}

/// Карты в текстовом виде: `["Ah", "Td"]`.
pub fn cards_to_strings(cards: &[Card]) -> Vec<String> {
    cards.iter().map(|c| c.to_string()).collect()
}
