use serde::{Deserialize, Serialize};

use crate::domain::chips::Chips;
use crate::domain::config::GameConfig;
use crate::domain::player::{Seat, Stacks};
use crate::engine::actions::LegalAction;

/// Состояние ставок на текущей улице.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct BettingState {
    /// Сколько человек поставил на этой улице.
    pub human_bet: Chips,
    /// Сколько бот поставил на этой улице.
    pub ai_bet: Chips,
    /// Планка ставки, от которой считается минимальный рейз.
    /// Между улицами не сбрасывается.
    pub current_bet: Chips,
}

impl BettingState {
    pub fn new(current_bet: Chips) -> Self {
        Self {
            human_bet: Chips::ZERO,
            ai_bet: Chips::ZERO,
            current_bet,
        }
    }

    pub fn bet(&self, seat: Seat) -> Chips {
        match seat {
            Seat::Human => self.human_bet,
            Seat::Ai => self.ai_bet,
        }
    }

    pub fn bet_mut(&mut self, seat: Seat) -> &mut Chips {
        match seat {
            Seat::Human => &mut self.human_bet,
            Seat::Ai => &mut self.ai_bet,
        }
    }

    /// Сколько месту нужно доложить до ставки соперника (не меньше нуля).
    pub fn to_call(&self, seat: Seat) -> Chips {
        self.bet(seat.other()).saturating_sub(self.bet(seat))
    }

    /// Новая улица: ставки улицы обнуляются, фишки уже лежат в банке.
    pub fn reset_street(&mut self) {
        self.human_bet = Chips::ZERO;
        self.ai_bet = Chips::ZERO;
    }

    /// Допустимые действия человека при данных стеках.
    ///
    /// Fold есть всегда, Call – всегда (нулевой call = check),
    /// Raise – только если `min <= max`, где max ограничен коротким стеком.
    pub fn legal_actions(&self, stacks: &Stacks, config: &GameConfig) -> Vec<LegalAction> {
        let mut actions = vec![
            LegalAction::Fold,
            LegalAction::Call {
                amount: self.to_call(Seat::Human),
            },
        ];

        let min = config.min_raise(self.current_bet);
        let max = stacks.effective();
        if min <= max {
            actions.push(LegalAction::Raise { min, max });
        }

        actions
    }
}
