//! Модуль оценки силы покерных рук (Texas Hold'em).
//!
//! Движок видит только трейт `HandEvaluator`; стандартная реализация –
//! `StandardEvaluator` поверх `evaluate_best_hand(hole, board) -> HandRank`.

pub mod evaluator;
pub mod hand_rank;
pub mod lookup_tables;

use crate::domain::card::Card;
use crate::domain::hand::HandRank;

pub use evaluator::evaluate_best_hand;
pub use hand_rank::{describe_matchup, detailed_hand_name, HandCategory};

/// Оценщик силы руки.
///
/// Больше `score` – сильнее рука, равенство – сплит.
pub trait HandEvaluator: Send + Sync {
    fn score(&self, hole: &[Card], board: &[Card]) -> HandRank;

    fn classify(&self, hole: &[Card], board: &[Card]) -> HandCategory {
        self.score(hole, board).category()
    }
}

/// Оценщик "лучшие 5 из 7".
#[derive(Clone, Copy, Debug, Default)]
pub struct StandardEvaluator;

impl HandEvaluator for StandardEvaluator {
    fn score(&self, hole: &[Card], board: &[Card]) -> HandRank {
        evaluate_best_hand(hole, board)
    }
}
