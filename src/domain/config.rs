// src/domain/config.rs

use serde::{Deserialize, Serialize};

use crate::domain::chips::Chips;
use crate::domain::player::Seat;

/// Кому уходит лишняя фишка при делёжке нечётного банка.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum OddChipPolicy {
    /// Игроку вне позиции (биг-блайнд в heads-up).
    BigBlind,
    /// Игроку на кнопке.
    Button,
    /// Фишка сгорает – так делал старый сервер. Нарушает сохранение фишек.
    Drop,
}

impl OddChipPolicy {
    /// Кто получает остаток при данной кнопке.
    pub fn recipient(self, button: Seat) -> Option<Seat> {
        match self {
            OddChipPolicy::BigBlind => Some(button.other()),
            OddChipPolicy::Button => Some(button),
            OddChipPolicy::Drop => None,
        }
    }
}

/// Кто побеждает в матче при равных стеках после последнего раунда.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FinalTiePolicy {
    /// Ничья.
    Draw,
    Human,
    /// Старое поведение: сравнение `human > ai` отдавало ничью боту.
    Ai,
}

/// Конфиг матча: стеки, блайнды, лимит раундов и спорные правила.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct GameConfig {
    pub initial_stack: Chips,
    pub small_blind: Chips,
    pub big_blind: Chips,
    /// Матч заканчивается, когда номер раунда доходит до этого значения.
    pub max_rounds: u32,
    /// Кнопка в первом раунде у человека.
    pub human_starts_on_button: bool,
    /// Проверять рейз на минимум на сервере, а не только в списке действий.
    pub enforce_min_raise: bool,
    pub odd_chip: OddChipPolicy,
    pub final_tie: FinalTiePolicy,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            initial_stack: Chips(1000),
            small_blind: Chips(10),
            big_blind: Chips(20),
            max_rounds: 10,
            human_starts_on_button: true,
            enforce_min_raise: true,
            odd_chip: OddChipPolicy::BigBlind,
            final_tie: FinalTiePolicy::Draw,
        }
    }
}

impl GameConfig {
    pub fn validate(&self) -> Result<(), String> {
        if self.small_blind.is_zero() {
            return Err("GameConfig: small_blind = 0".into());
        }
        if self.big_blind.is_zero() {
            return Err("GameConfig: big_blind = 0".into());
        }
        if self.big_blind < self.small_blind {
            return Err(format!(
                "GameConfig: big_blind ({}) < small_blind ({})",
                self.big_blind.0, self.small_blind.0
            ));
        }
        if self.initial_stack < self.big_blind {
            return Err(format!(
                "GameConfig: initial_stack ({}) < big_blind ({})",
                self.initial_stack.0, self.big_blind.0
            ));
        }
        if self.max_rounds == 0 {
            return Err("GameConfig: max_rounds = 0".into());
        }
        Ok(())
    }

    /// Разобрать JSON и сразу провалидировать.
    /// Отсутствующие поля берутся из `Default`.
    pub fn from_json(json: &str) -> Result<Self, String> {
        let cfg: GameConfig =
            serde_json::from_str(json).map_err(|e| format!("GameConfig: bad json: {e}"))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Минимальный рейз при текущей ставке улицы.
    pub fn min_raise(&self, current_bet: Chips) -> Chips {
        self.big_blind.max(Chips(current_bet.0.saturating_mul(2)))
    }
}
