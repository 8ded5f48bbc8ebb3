use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::chips::Chips;
use crate::domain::hand::{HandRank, Street};
use crate::domain::player::Seat;
use crate::domain::RoundIndex;
use crate::engine::actions::ActionTaken;

/// Тип события в раунде.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub enum RoundEventKind {
    /// Новый раунд начался.
    RoundStarted { round_index: RoundIndex, button: Seat },

    /// Блайнды (уже обрезанные по стекам).
    BlindsPosted {
        button: Seat,
        small_blind: Chips,
        big_blind: Chips,
    },

    /// Игрок получил карманные карты.
    HoleCardsDealt { seat: Seat, cards: Vec<Card> },

    /// Открыты общие карты на борде.
    BoardDealt { street: Street, cards: Vec<Card> },

    /// Действие игрока или бота.
    PlayerActed {
        seat: Seat,
        action: ActionTaken,
        stack_after: Chips,
        pot_after: Chips,
    },

    /// Переход на новую улицу.
    StreetChanged { street: Street },

    /// Шоудаун – открытие карт.
    ShowdownReveal {
        seat: Seat,
        hole_cards: Vec<Card>,
        rank: HandRank,
    },

    /// Выплата банка.
    PotAwarded { seat: Seat, amount: Chips },

    /// Раунд завершён.
    RoundFinished { round_index: RoundIndex },
}

/// Событие в раунде с порядковым номером.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct RoundEvent {
    pub index: u32,
    pub kind: RoundEventKind,
}

/// Полная история раунда.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct RoundHistory {
    pub events: Vec<RoundEvent>,
}

impl RoundHistory {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn push(&mut self, kind: RoundEventKind) {
        let idx = self.events.len() as u32;
        self.events.push(RoundEvent { index: idx, kind });
    }

    /// Последнее действие места на текущей улице (после последнего `StreetChanged`).
    pub fn last_action_on_street(&self, seat: Seat) -> Option<ActionTaken> {
        for event in self.events.iter().rev() {
            match &event.kind {
                RoundEventKind::StreetChanged { .. } => return None,
                RoundEventKind::PlayerActed {
                    seat: s, action, ..
                } if *s == seat => return Some(*action),
                _ => {}
            }
        }
        None
    }

    /// Текст для UI: "Call $10", "Check" или "-".
    pub fn last_action_text(&self, seat: Seat) -> String {
        self.last_action_on_street(seat)
            .map(|a| a.to_string())
            .unwrap_or_else(|| "-".to_string())
    }
}
