use tracing::trace;

use crate::ai::{offered_call, OpponentPolicy, OpponentView};
use crate::domain::card::Card;
use crate::domain::deck::Deck;
use crate::engine::actions::{Action, LegalAction};
use crate::engine::RandomSource;
use crate::eval::{HandEvaluator, StandardEvaluator};

const DEFAULT_SIMULATIONS: u32 = 500;

/// Бот по шансам банка: Monte-Carlo оценка вероятности выигрыша
/// против случайной руки, call если `win_rate >= call / (pot + call)`.
pub struct EquityPolicy<R: RandomSource> {
    rng: R,
    simulations: u32,
    evaluator: StandardEvaluator,
}

impl<R: RandomSource> EquityPolicy<R> {
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            simulations: DEFAULT_SIMULATIONS,
            evaluator: StandardEvaluator,
        }
    }

    pub fn with_simulations(mut self, simulations: u32) -> Self {
        self.simulations = simulations.max(1);
        self
    }

    /// Доля выигрышей (сплит = половина) по `simulations` доигрываниям.
    pub fn estimate_win_rate(&mut self, hole: &[Card], board: &[Card]) -> f64 {
        let known: Vec<Card> = hole.iter().chain(board.iter()).copied().collect();
        let board_missing = 5usize.saturating_sub(board.len());

        let mut score = 0.0;
        let mut played = 0u32;
        for _ in 0..self.simulations {
            let mut deck = Deck::without(&known);
            self.rng.shuffle(&mut deck.cards);

            let villain: Vec<Card> = (0..2).filter_map(|_| deck.draw_one()).collect();
            let mut full_board = board.to_vec();
            full_board.extend((0..board_missing).filter_map(|_| deck.draw_one()));
            if villain.len() < 2 || full_board.len() < 5 {
                continue;
            }

            let ours = self.evaluator.score(hole, &full_board);
            let theirs = self.evaluator.score(&villain, &full_board);
            score += match ours.cmp(&theirs) {
                std::cmp::Ordering::Greater => 1.0,
                std::cmp::Ordering::Equal => 0.5,
                std::cmp::Ordering::Less => 0.0,
            };
            played += 1;
        }

        if played == 0 {
            return 0.0;
        }
        score / f64::from(played)
    }
}

impl<R: RandomSource> OpponentPolicy for EquityPolicy<R> {
    fn decide(&mut self, legal: &[LegalAction], view: &OpponentView<'_>) -> Action {
        let call = match offered_call(legal) {
            Some(call) => call,
            None => return Action::Fold,
        };
        if call.is_zero() {
            return Action::Call;
        }

        let win_rate = self.estimate_win_rate(view.hole_cards, view.board);
        let pot_odds = call.0 as f64 / (view.pot.0 + call.0) as f64;
        trace!(win_rate, pot_odds, street = %view.street, "equity estimate");

        if win_rate >= pot_odds {
            Action::Call
        } else {
            Action::Fold
        }
    }
}
