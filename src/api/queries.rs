use serde::{Deserialize, Serialize};

use crate::domain::chips::Chips;
use crate::domain::hand::Street;
use crate::domain::player::Seat;
use crate::domain::SessionId;
use crate::engine::session::GameSession;

use super::dto::{cards_to_strings, GameOverDto, GameStateDto, LastActionsDto, RoundResultDto};

/// Запросы "только чтение".
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Query {
    /// Получить состояние матча.
    GetState { session_id: SessionId },
}

/// Сформировать снимок матча.
///
/// Карты бота попадают в снимок только после конца раунда,
/// список действий – только пока ждём хода человека.
pub fn build_game_state(session: &GameSession) -> GameStateDto {
    let stacks = session.stacks();
    let config = session.config();

    let mut dto = GameStateDto {
        round_index: session.round_index(),
        max_rounds: config.max_rounds,
        street: Street::Preflop,
        button: session.button(),
        pot: Chips::ZERO,
        human_stack: stacks.human,
        ai_stack: stacks.ai,
        human_bet: Chips::ZERO,
        ai_bet: Chips::ZERO,
        human_cards: Vec::new(),
        ai_cards: Vec::new(),
        board: Vec::new(),
        legal_actions: Vec::new(),
        waiting_for_action: false,
        last_actions: LastActionsDto {
            human: "-".to_string(),
            ai: "-".to_string(),
        },
        round_result: None,
        game_finished: session.is_finished(),
        game_over: session.outcome().map(GameOverDto::from),
        message: session.message().to_string(),
    };

    if let Some(round) = session.round() {
        dto.street = round.street;
        dto.pot = round.pot.total;
        dto.human_bet = round.bets.human_bet;
        dto.ai_bet = round.bets.ai_bet;
        dto.human_cards = cards_to_strings(&round.human_hole);
        dto.ai_cards = round.revealed_ai_cards().map(cards_to_strings).unwrap_or_default();
        dto.board = cards_to_strings(&round.board);
        dto.legal_actions = round.legal_actions(&stacks);
        dto.waiting_for_action = round.waiting_for_human();
        dto.last_actions = LastActionsDto {
            human: round.history.last_action_text(Seat::Human),
            ai: round.history.last_action_text(Seat::Ai),
        };
        dto.round_result = round.result.as_ref().map(RoundResultDto::from);
    }

    dto
}
