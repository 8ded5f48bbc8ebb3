//! Поведение бота-соперника.
//!
//! Движок спрашивает бота только когда человек рейзит, и предлагает ему
//! урезанный набор: `[Fold, Call]` если доплата по карману, иначе `[Fold]`.

pub mod basic;
pub mod equity;

use crate::domain::card::Card;
use crate::domain::chips::Chips;
use crate::domain::hand::Street;
use crate::engine::actions::{Action, LegalAction};

pub use basic::{CallingPolicy, FoldingPolicy};
pub use equity::EquityPolicy;

/// То, что бот видит в момент решения. Карт человека здесь нет.
#[derive(Clone, Debug)]
pub struct OpponentView<'a> {
    pub hole_cards: &'a [Card],
    pub board: &'a [Card],
    pub street: Street,
    /// Банк вместе с рейзом человека.
    pub pot: Chips,
    pub ai_stack: Chips,
    pub human_stack: Chips,
    pub ai_bet: Chips,
    pub human_bet: Chips,
    pub initial_stack: Chips,
}

/// Политика бота: из предложенных действий выбрать одно.
///
/// Ответ вне `legal` движок не выполняет буквально (см. `engine::round`).
pub trait OpponentPolicy {
    fn decide(&mut self, legal: &[LegalAction], view: &OpponentView<'_>) -> Action;
}

/// Сумма call из списка допустимых действий (если call предложен).
pub fn offered_call(legal: &[LegalAction]) -> Option<Chips> {
    legal.iter().find_map(|a| match a {
        LegalAction::Call { amount } => Some(*amount),
        _ => None,
    })
}
