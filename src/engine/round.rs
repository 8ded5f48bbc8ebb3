use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::ai::{OpponentPolicy, OpponentView};
use crate::domain::card::Card;
use crate::domain::chips::Chips;
use crate::domain::config::GameConfig;
use crate::domain::deck::DeckSource;
use crate::domain::hand::Street;
use crate::domain::player::{Seat, Stacks};
use crate::domain::RoundIndex;
use crate::engine::actions::{Action, ActionTaken, LegalAction};
use crate::engine::betting::BettingState;
use crate::engine::errors::EngineError;
use crate::engine::hand_history::{RoundEventKind, RoundHistory};
use crate::engine::pot::Pot;
use crate::engine::showdown::{resolve_showdown, RoundWinner, ShowdownInput, ShowdownResult};
use crate::engine::validation::validate_human_action;
use crate::eval::HandEvaluator;

/// Как закончился раунд.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum EndReason {
    Fold { folded: Seat },
    Showdown,
}

/// Итог раунда.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoundResult {
    pub winner: RoundWinner,
    pub reason: EndReason,
    /// Банк до выплаты.
    pub pot: Chips,
    /// Выплаты: (человеку, боту).
    pub payouts: Stacks,
    pub showdown: Option<ShowdownResult>,
    pub message: String,
}

/// Статус раунда после перехода.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RoundStatus {
    Ongoing,
    Finished(RoundResult),
}

/// Один раунд (раздача) heads-up.
///
/// Стеки живут в сессии и передаются сюда по `&mut`:
/// пока раунд идёт, `pot + human + ai` не меняется.
pub struct Round {
    pub round_index: RoundIndex,
    pub button: Seat,
    pub street: Street,
    pub pot: Pot,
    pub bets: BettingState,
    pub human_hole: [Card; 2],
    pub ai_hole: [Card; 2],
    pub board: Vec<Card>,
    pub result: Option<RoundResult>,
    pub history: RoundHistory,
    config: GameConfig,
    deck: Box<dyn DeckSource + Send>,
}

impl Round {
    /// Старт раунда: перемешать колоду, поставить блайнды, раздать по 2 карты.
    ///
    /// Кнопка платит малый блайнд, второй игрок – большой; блайнд обрезается
    /// по стеку. Если колода не может дать 4 карты – `DeckExhausted`,
    /// стеки не трогаются.
    pub fn start(
        config: &GameConfig,
        round_index: RoundIndex,
        button: Seat,
        stacks: &mut Stacks,
        mut deck: Box<dyn DeckSource + Send>,
    ) -> Result<Round, EngineError> {
        deck.shuffle();
        let human_hole = draw_pair(deck.as_mut())?;
        let ai_hole = draw_pair(deck.as_mut())?;

        let mut history = RoundHistory::new();
        history.push(RoundEventKind::RoundStarted {
            round_index,
            button,
        });

        let mut pot = Pot::new();
        let mut bets = BettingState::new(config.big_blind);

        let bb_seat = button.other();
        let sb_paid = stacks.get_mut(button).take_up_to(config.small_blind);
        let bb_paid = stacks.get_mut(bb_seat).take_up_to(config.big_blind);
        pot.add(sb_paid);
        pot.add(bb_paid);
        *bets.bet_mut(button) = sb_paid;
        *bets.bet_mut(bb_seat) = bb_paid;

        history.push(RoundEventKind::BlindsPosted {
            button,
            small_blind: sb_paid,
            big_blind: bb_paid,
        });
        history.push(RoundEventKind::PlayerActed {
            seat: button,
            action: ActionTaken::SmallBlind(sb_paid),
            stack_after: stacks.get(button),
            pot_after: sb_paid,
        });
        history.push(RoundEventKind::PlayerActed {
            seat: bb_seat,
            action: ActionTaken::BigBlind(bb_paid),
            stack_after: stacks.get(bb_seat),
            pot_after: pot.total,
        });
        history.push(RoundEventKind::HoleCardsDealt {
            seat: Seat::Human,
            cards: human_hole.to_vec(),
        });
        history.push(RoundEventKind::HoleCardsDealt {
            seat: Seat::Ai,
            cards: ai_hole.to_vec(),
        });

        info!(
            round = round_index,
            button = %button,
            small_blind = sb_paid.0,
            big_blind = bb_paid.0,
            "round started"
        );

        Ok(Round {
            round_index,
            button,
            street: Street::Preflop,
            pot,
            bets,
            human_hole,
            ai_hole,
            board: Vec::with_capacity(5),
            result: None,
            history,
            config: config.clone(),
            deck,
        })
    }

    /// Ждём ли хода человека.
    pub fn waiting_for_human(&self) -> bool {
        self.street.is_betting() && self.result.is_none()
    }

    pub fn is_ended(&self) -> bool {
        self.street == Street::Ended
    }

    /// Карты бота видны только после конца раунда.
    pub fn revealed_ai_cards(&self) -> Option<&[Card]> {
        if self.is_ended() {
            Some(&self.ai_hole[..])
        } else {
            None
        }
    }

    /// Допустимые действия человека; пусто, если его хода не ждём.
    pub fn legal_actions(&self, stacks: &Stacks) -> Vec<LegalAction> {
        if !self.waiting_for_human() {
            return Vec::new();
        }
        self.bets.legal_actions(stacks, &self.config)
    }

    /// Применить действие человека.
    ///
    /// На рейз сразу отвечает бот (call или fold, ре-рейза нет).
    /// После call улица закрывается автоматически. Любая ошибка
    /// возвращается до изменения состояния.
    pub fn apply_action(
        &mut self,
        stacks: &mut Stacks,
        action: Action,
        evaluator: &dyn HandEvaluator,
        policy: &mut dyn OpponentPolicy,
    ) -> Result<RoundStatus, EngineError> {
        if !self.waiting_for_human() {
            return Err(EngineError::NotWaitingForAction);
        }
        validate_human_action(&action, stacks.human, &self.bets, &self.config)?;
        if !matches!(action, Action::Fold) {
            self.ensure_cards_for_next_street()?;
        }

        match action {
            Action::Fold => Ok(self.finish_by_fold(Seat::Human, stacks)),

            Action::Call => {
                self.call(Seat::Human, stacks);
                self.advance_street(stacks, evaluator)
            }

            Action::Raise(amount) => {
                let paid = stacks.human.take_up_to(amount);
                self.pot.add(paid);
                self.bets.human_bet += paid;
                self.bets.current_bet = self.bets.human_bet;
                self.record(Seat::Human, ActionTaken::Raise(paid), stacks);

                self.respond_to_raise(stacks, evaluator, policy)
            }
        }
    }

    /// Закрыть улицу: ривер → шоудаун, иначе сдать карты следующей улицы.
    pub fn advance_street(
        &mut self,
        stacks: &mut Stacks,
        evaluator: &dyn HandEvaluator,
    ) -> Result<RoundStatus, EngineError> {
        match self.street.next_betting_street() {
            Some((next, count)) => {
                self.ensure_cards_for_next_street()?;
                let cards: Vec<Card> = (0..count).filter_map(|_| self.deck.draw()).collect();
                if cards.len() != count {
                    return Err(EngineError::DeckExhausted);
                }

                self.board.extend_from_slice(&cards);
                self.bets.reset_street();
                self.street = next;

                self.history.push(RoundEventKind::StreetChanged { street: next });
                self.history.push(RoundEventKind::BoardDealt {
                    street: next,
                    cards,
                });
                debug!(
                    round = self.round_index,
                    street = %next,
                    pot = self.pot.total.0,
                    "street advanced"
                );
                Ok(RoundStatus::Ongoing)
            }
            None if self.street == Street::River => Ok(self.finish_by_showdown(stacks, evaluator)),
            None => Err(EngineError::Internal("street advanced after showdown")),
        }
    }

    fn respond_to_raise(
        &mut self,
        stacks: &mut Stacks,
        evaluator: &dyn HandEvaluator,
        policy: &mut dyn OpponentPolicy,
    ) -> Result<RoundStatus, EngineError> {
        let call_gap = self.bets.to_call(Seat::Ai);
        let call_offered = call_gap <= stacks.ai;
        let legal: Vec<LegalAction> = if call_offered {
            vec![LegalAction::Fold, LegalAction::Call { amount: call_gap }]
        } else {
            vec![LegalAction::Fold]
        };

        let view = OpponentView {
            hole_cards: &self.ai_hole,
            board: &self.board,
            street: self.street,
            pot: self.pot.total,
            ai_stack: stacks.ai,
            human_stack: stacks.human,
            ai_bet: self.bets.ai_bet,
            human_bet: self.bets.human_bet,
            initial_stack: self.config.initial_stack,
        };
        let decision = policy.decide(&legal, &view);

        let ai_calls = match decision {
            Action::Call => call_offered,
            Action::Raise(amount) => {
                warn!(
                    round = self.round_index,
                    amount = amount.0,
                    "opponent policy answered with a raise; treating it as a call"
                );
                call_offered
            }
            Action::Fold => false,
        };
        if matches!(decision, Action::Call | Action::Raise(_)) && !call_offered {
            warn!(
                round = self.round_index,
                call_gap = call_gap.0,
                ai_stack = stacks.ai.0,
                "opponent policy tried to call without an offered call; folding"
            );
        }

        if ai_calls {
            self.call(Seat::Ai, stacks);
            self.advance_street(stacks, evaluator)
        } else {
            Ok(self.finish_by_fold(Seat::Ai, stacks))
        }
    }

    /// Доплатить до ставки соперника (по карману).
    fn call(&mut self, seat: Seat, stacks: &mut Stacks) {
        let gap = self.bets.to_call(seat);
        let paid = stacks.get_mut(seat).take_up_to(gap);
        self.pot.add(paid);
        *self.bets.bet_mut(seat) += paid;

        let taken = if paid.is_zero() {
            ActionTaken::Check
        } else {
            ActionTaken::Call(paid)
        };
        self.record(seat, taken, stacks);
    }

    fn record(&mut self, seat: Seat, action: ActionTaken, stacks: &Stacks) {
        debug!(
            round = self.round_index,
            street = %self.street,
            seat = %seat,
            action = %action,
            pot = self.pot.total.0,
            "action applied"
        );
        self.history.push(RoundEventKind::PlayerActed {
            seat,
            action,
            stack_after: stacks.get(seat),
            pot_after: self.pot.total,
        });
    }

    fn finish_by_fold(&mut self, folded: Seat, stacks: &mut Stacks) -> RoundStatus {
        self.record(folded, ActionTaken::Fold, stacks);

        let winner = folded.other();
        let pot_before = self.pot.total;
        let won = self.pot.take_all();
        *stacks.get_mut(winner) += won;

        let mut payouts = Stacks::default();
        *payouts.get_mut(winner) = won;

        let message = match folded {
            Seat::Human => "AI Bot won! You folded.".to_string(),
            Seat::Ai => "You won! AI folded.".to_string(),
        };

        self.history.push(RoundEventKind::PotAwarded {
            seat: winner,
            amount: won,
        });

        self.finish(RoundResult {
            winner: winner.into(),
            reason: EndReason::Fold { folded },
            pot: pot_before,
            payouts,
            showdown: None,
            message,
        })
    }

    fn finish_by_showdown(&mut self, stacks: &mut Stacks, evaluator: &dyn HandEvaluator) -> RoundStatus {
        self.street = Street::Showdown;
        self.history.push(RoundEventKind::StreetChanged {
            street: Street::Showdown,
        });

        let pot_before = self.pot.total;
        let input = ShowdownInput {
            human_hole: &self.human_hole,
            ai_hole: &self.ai_hole,
            board: &self.board,
            button: self.button,
            odd_chip: self.config.odd_chip,
        };
        let showdown = resolve_showdown(&input, &mut self.pot, stacks, evaluator);

        self.history.push(RoundEventKind::ShowdownReveal {
            seat: Seat::Human,
            hole_cards: self.human_hole.to_vec(),
            rank: showdown.human_rank,
        });
        self.history.push(RoundEventKind::ShowdownReveal {
            seat: Seat::Ai,
            hole_cards: self.ai_hole.to_vec(),
            rank: showdown.ai_rank,
        });
        for seat in [Seat::Human, Seat::Ai] {
            let amount = showdown.payouts.get(seat);
            if !amount.is_zero() {
                self.history.push(RoundEventKind::PotAwarded { seat, amount });
            }
        }

        self.finish(RoundResult {
            winner: showdown.winner,
            reason: EndReason::Showdown,
            pot: pot_before,
            payouts: showdown.payouts,
            message: showdown.message.clone(),
            showdown: Some(showdown),
        })
    }

    fn finish(&mut self, result: RoundResult) -> RoundStatus {
        self.street = Street::Ended;
        self.history.push(RoundEventKind::RoundFinished {
            round_index: self.round_index,
        });
        info!(
            round = self.round_index,
            winner = ?result.winner,
            pot = result.pot.0,
            "round finished"
        );
        self.result = Some(result.clone());
        RoundStatus::Finished(result)
    }

    /// Хватит ли колоды на следующую улицу (проверка до любых изменений).
    fn ensure_cards_for_next_street(&self) -> Result<(), EngineError> {
        let needed = self
            .street
            .next_betting_street()
            .map(|(_, count)| count)
            .unwrap_or(0);
        if self.deck.remaining() < needed {
            return Err(EngineError::DeckExhausted);
        }
        Ok(())
    }
}

fn draw_pair(deck: &mut (dyn DeckSource + Send)) -> Result<[Card; 2], EngineError> {
    let first = deck.draw().ok_or(EngineError::DeckExhausted)?;
    let second = deck.draw().ok_or(EngineError::DeckExhausted)?;
    Ok([first, second])
}
