use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::chips::Chips;
use crate::domain::config::OddChipPolicy;
use crate::domain::hand::HandRank;
use crate::domain::player::{Seat, Stacks};
use crate::engine::pot::Pot;
use crate::eval::{describe_matchup, HandEvaluator};

/// Кто забрал банк раунда.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RoundWinner {
    Human,
    Ai,
    Tie,
}

impl From<Seat> for RoundWinner {
    fn from(seat: Seat) -> Self {
        match seat {
            Seat::Human => RoundWinner::Human,
            Seat::Ai => RoundWinner::Ai,
        }
    }
}

/// Итог вскрытия.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShowdownResult {
    pub winner: RoundWinner,
    pub human_rank: HandRank,
    pub ai_rank: HandRank,
    pub human_hand_name: String,
    pub ai_hand_name: String,
    /// Выплаты: (человеку, боту).
    pub payouts: Stacks,
    /// Кому ушла нечётная фишка при сплите.
    pub odd_chip: Option<Seat>,
    pub message: String,
}

/// Вход шоудауна: карты обоих, борд и правила раздела.
pub struct ShowdownInput<'a> {
    pub human_hole: &'a [Card],
    pub ai_hole: &'a [Card],
    pub board: &'a [Card],
    pub button: Seat,
    pub odd_chip: OddChipPolicy,
}

/// Сравнить руки, раздать банк, обнулить его.
///
/// Сплит: каждому `pot / 2`, остаток по `OddChipPolicy`
/// (`Drop` – фишка пропадает).
pub fn resolve_showdown(
    input: &ShowdownInput<'_>,
    pot: &mut Pot,
    stacks: &mut Stacks,
    evaluator: &dyn HandEvaluator,
) -> ShowdownResult {
    let human_rank = evaluator.score(input.human_hole, input.board);
    let ai_rank = evaluator.score(input.ai_hole, input.board);
    let (human_name, ai_name) = describe_matchup(human_rank, ai_rank);

    let total = pot.take_all();
    let mut payouts = Stacks::default();
    let mut odd_chip = None;

    let (winner, message) = match human_rank.cmp(&ai_rank) {
        std::cmp::Ordering::Greater => {
            payouts.human = total;
            (
                RoundWinner::Human,
                format!("You won with {human_name}! AI had {ai_name}"),
            )
        }
        std::cmp::Ordering::Less => {
            payouts.ai = total;
            (
                RoundWinner::Ai,
                format!("AI Bot won with {ai_name}! You had {human_name}"),
            )
        }
        std::cmp::Ordering::Equal => {
            let (half, rem) = total.split_half();
            payouts.human = half;
            payouts.ai = half;
            if !rem.is_zero() {
                odd_chip = input.odd_chip.recipient(input.button);
                if let Some(seat) = odd_chip {
                    *payouts.get_mut(seat) += rem;
                }
            }
            (RoundWinner::Tie, format!("Split pot! Both had {human_name}"))
        }
    };

    stacks.human += payouts.human;
    stacks.ai += payouts.ai;

    ShowdownResult {
        winner,
        human_rank,
        ai_rank,
        human_hand_name: human_name,
        ai_hand_name: ai_name,
        payouts,
        odd_chip,
        message,
    }
}

/// Сколько фишек пропало при сплите (только при `OddChipPolicy::Drop`).
pub fn dropped_chips(pot_before: Chips, payouts: &Stacks) -> Chips {
    pot_before.saturating_sub(payouts.total())
}
