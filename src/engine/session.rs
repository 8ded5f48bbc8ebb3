use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::ai::{CallingPolicy, OpponentPolicy};
use crate::api::dto::GameStateDto;
use crate::api::queries::build_game_state;
use crate::domain::config::{FinalTiePolicy, GameConfig};
use crate::domain::player::{Seat, Stacks};
use crate::domain::RoundIndex;
use crate::engine::actions::Action;
use crate::engine::errors::EngineError;
use crate::engine::round::{Round, RoundResult, RoundStatus};
use crate::eval::{HandEvaluator, StandardEvaluator};
use crate::infra::decks::{DeckProvider, SystemDeckProvider};

/// Победитель матча.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum GameWinner {
    Human,
    Ai,
    Draw,
}

impl From<Seat> for GameWinner {
    fn from(seat: Seat) -> Self {
        match seat {
            Seat::Human => GameWinner::Human,
            Seat::Ai => GameWinner::Ai,
        }
    }
}

/// Почему матч закончился.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", content = "seat", rename_all = "snake_case")]
pub enum GameEndReason {
    /// У игрока кончились фишки.
    Busted(Seat),
    /// Сыграны все раунды.
    RoundLimit,
}

/// Итог матча.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameOutcome {
    pub winner: GameWinner,
    pub reason: GameEndReason,
    pub final_stacks: Stacks,
    pub message: String,
}

/// Матч human vs AI: стеки, счётчик раундов, кнопка, текущий раунд.
///
/// Все вызовы атомарны: либо `Ok` с новым снимком, либо ошибка
/// и состояние не изменилось.
pub struct GameSession {
    config: GameConfig,
    stacks: Stacks,
    round_index: RoundIndex,
    button: Seat,
    finished: bool,
    outcome: Option<GameOutcome>,
    round: Option<Round>,
    message: String,
    decks: Box<dyn DeckProvider>,
    evaluator: Box<dyn HandEvaluator>,
    policy: Box<dyn OpponentPolicy + Send>,
}

impl GameSession {
    /// Сессия со стандартными колодами, оценщиком и `CallingPolicy`.
    pub fn new(config: GameConfig) -> Result<Self, EngineError> {
        if let Err(reason) = config.validate() {
            warn!(%reason, "game config rejected");
            return Err(EngineError::InvalidConfig(reason));
        }

        let stacks = Stacks::even(config.initial_stack);
        Ok(Self {
            stacks,
            round_index: 0,
            button: Seat::Human,
            finished: false,
            outcome: None,
            round: None,
            message: String::new(),
            decks: Box::new(SystemDeckProvider),
            evaluator: Box::new(StandardEvaluator),
            policy: Box::new(CallingPolicy),
            config,
        })
    }

    pub fn with_decks(mut self, decks: Box<dyn DeckProvider>) -> Self {
        self.decks = decks;
        self
    }

    pub fn with_evaluator(mut self, evaluator: Box<dyn HandEvaluator>) -> Self {
        self.evaluator = evaluator;
        self
    }

    pub fn with_policy(mut self, policy: Box<dyn OpponentPolicy + Send>) -> Self {
        self.policy = policy;
        self
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn stacks(&self) -> Stacks {
        self.stacks
    }

    pub fn round_index(&self) -> RoundIndex {
        self.round_index
    }

    pub fn button(&self) -> Seat {
        self.button
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn outcome(&self) -> Option<&GameOutcome> {
        self.outcome.as_ref()
    }

    pub fn round(&self) -> Option<&Round> {
        self.round.as_ref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Начать (или перезапустить) матч: стеки = `initial_stack`, раунд 1.
    pub fn start_game(&mut self) -> Result<GameStateDto, EngineError> {
        let mut stacks = Stacks::even(self.config.initial_stack);
        let button = if self.config.human_starts_on_button {
            Seat::Human
        } else {
            Seat::Ai
        };
        let round = Round::start(&self.config, 1, button, &mut stacks, self.decks.fresh_deck())?;

        self.stacks = stacks;
        self.round_index = 1;
        self.button = button;
        self.finished = false;
        self.outcome = None;
        self.round = Some(round);
        self.message = "Game started! Cards dealt. Make your move!".to_string();

        info!(
            max_rounds = self.config.max_rounds,
            initial_stack = self.config.initial_stack.0,
            button = %button,
            "game started"
        );
        self.state()
    }

    /// Действие человека в текущем раунде.
    pub fn submit_action(&mut self, action: Action) -> Result<GameStateDto, EngineError> {
        let round = self.round.as_mut().ok_or(EngineError::NoActiveRound)?;
        let status = round.apply_action(
            &mut self.stacks,
            action,
            self.evaluator.as_ref(),
            self.policy.as_mut(),
        )?;

        match status {
            RoundStatus::Ongoing => {
                self.message = match action {
                    Action::Fold => "You folded".to_string(),
                    Action::Call => "You called".to_string(),
                    Action::Raise(amount) => format!("You raised {amount}, AI called"),
                };
            }
            RoundStatus::Finished(result) => self.on_round_ended(&result),
        }

        self.state()
    }

    /// Следующий раунд (или конец матча по лимиту раундов).
    pub fn advance_round(&mut self) -> Result<GameStateDto, EngineError> {
        let round = self.round.as_ref().ok_or(EngineError::NoActiveRound)?;
        if self.finished {
            return Err(EngineError::GameAlreadyFinished);
        }
        if !round.is_ended() {
            return Err(EngineError::RoundInProgress);
        }

        let next_index = self.round_index + 1;
        if next_index >= self.config.max_rounds {
            self.round_index = next_index;
            self.finish_by_round_limit();
            return self.state();
        }

        let next_button = self.button.other();
        let round = Round::start(
            &self.config,
            next_index,
            next_button,
            &mut self.stacks,
            self.decks.fresh_deck(),
        )?;

        self.round_index = next_index;
        self.button = next_button;
        self.round = Some(round);
        self.message = format!("Starting round {next_index}. Cards dealt!");
        self.state()
    }

    /// Снимок матча. Ничего не меняет.
    pub fn state(&self) -> Result<GameStateDto, EngineError> {
        if self.round.is_none() {
            return Err(EngineError::NoActiveRound);
        }
        Ok(build_game_state(self))
    }

    /// Раунд закрыт: проверить, не вылетел ли кто-то.
    /// Вылет важнее лимита раундов.
    fn on_round_ended(&mut self, result: &RoundResult) {
        self.message = result.message.clone();

        if let Some(busted) = self.stacks.busted() {
            let winner = busted.other();
            let message = match busted {
                Seat::Human => "You ran out of chips! AI Bot wins the game!",
                Seat::Ai => "AI Bot ran out of chips! You win the game!",
            };
            self.finish_game(GameOutcome {
                winner: winner.into(),
                reason: GameEndReason::Busted(busted),
                final_stacks: self.stacks,
                message: message.to_string(),
            });
        }
    }

    fn finish_by_round_limit(&mut self) {
        let Stacks { human, ai } = self.stacks;
        let winner = match human.cmp(&ai) {
            std::cmp::Ordering::Greater => GameWinner::Human,
            std::cmp::Ordering::Less => GameWinner::Ai,
            std::cmp::Ordering::Equal => match self.config.final_tie {
                FinalTiePolicy::Draw => GameWinner::Draw,
                FinalTiePolicy::Human => GameWinner::Human,
                FinalTiePolicy::Ai => GameWinner::Ai,
            },
        };
        let message = match winner {
            GameWinner::Human => "Game finished! You won!",
            GameWinner::Ai => "Game finished! AI Bot won!",
            GameWinner::Draw => "Game finished! It's a draw!",
        };

        self.finish_game(GameOutcome {
            winner,
            reason: GameEndReason::RoundLimit,
            final_stacks: self.stacks,
            message: message.to_string(),
        });
    }

    fn finish_game(&mut self, outcome: GameOutcome) {
        info!(
            winner = ?outcome.winner,
            reason = ?outcome.reason,
            human_stack = outcome.final_stacks.human.0,
            ai_stack = outcome.final_stacks.ai.0,
            rounds = self.round_index,
            "game finished"
        );
        self.message = outcome.message.clone();
        self.finished = true;
        self.outcome = Some(outcome);
    }
}
