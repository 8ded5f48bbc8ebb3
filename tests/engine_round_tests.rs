use heads_up_engine::{
    ai::{CallingPolicy, FoldingPolicy, OpponentPolicy, OpponentView},
    domain::{
        chips::Chips,
        config::GameConfig,
        hand::Street,
        player::{Seat, Stacks},
    },
    engine::{
        actions::{Action, ActionTaken, LegalAction},
        betting::BettingState,
        errors::EngineError,
        hand_history::{RoundEventKind, RoundHistory},
        round::{EndReason, Round, RoundStatus},
        showdown::RoundWinner,
        validation::validate_human_action,
    },
    eval::StandardEvaluator,
    infra::decks::StackedDeck,
};

/// Утилита: колода, где у человека пара тузов, у бота мусор.
/// Порядок: человек (2), бот (2), флоп (3), тёрн, ривер.
fn human_wins_deck() -> Box<StackedDeck> {
    Box::new(StackedDeck::parse("As Ad 2c 7d Ks Qh 9c 5d 3s").unwrap())
}

/// Утилита: колода, где борд играет за обоих (стрит до туза).
fn split_deck() -> Box<StackedDeck> {
    Box::new(StackedDeck::parse("2c 3d 2h 3s Ts Jh Qd Kc Ah").unwrap())
}

/// Утилита: раунд по дефолтному конфигу, кнопка у человека.
fn start_round(stacks: &mut Stacks, deck: Box<StackedDeck>) -> Round {
    Round::start(&GameConfig::default(), 1, Seat::Human, stacks, deck).unwrap()
}

/// Утилита: действие человека с калл-ботом.
fn act(round: &mut Round, stacks: &mut Stacks, action: Action) -> Result<RoundStatus, EngineError> {
    round.apply_action(stacks, action, &StandardEvaluator, &mut CallingPolicy)
}

/// Бот, который пытается рейзить.
struct StubbornRaiser;

impl OpponentPolicy for StubbornRaiser {
    fn decide(&mut self, _legal: &[LegalAction], _view: &OpponentView<'_>) -> Action {
        Action::Raise(Chips(1000))
    }
}

#[test]
fn blinds_are_posted_by_button_and_other_seat() {
    let mut stacks = Stacks::even(Chips(1000));
    let round = start_round(&mut stacks, human_wins_deck());

    assert_eq!(round.pot.total, Chips(30));
    assert_eq!(round.bets.human_bet, Chips(10));
    assert_eq!(round.bets.ai_bet, Chips(20));
    assert_eq!(round.street, Street::Preflop);
    assert!(round.board.is_empty());
    assert_eq!(round.human_hole.len(), 2);
    assert_eq!(stacks, Stacks::new(Chips(990), Chips(980)));
    assert!(round.waiting_for_human());
    assert!(round.revealed_ai_cards().is_none());
}

#[test]
fn ai_on_button_posts_small_blind() {
    let mut stacks = Stacks::even(Chips(1000));
    let round = Round::start(&GameConfig::default(), 2, Seat::Ai, &mut stacks, human_wins_deck()).unwrap();

    assert_eq!(round.bets.human_bet, Chips(20));
    assert_eq!(round.bets.ai_bet, Chips(10));
    assert_eq!(
        round.legal_actions(&stacks)[1],
        LegalAction::Call { amount: Chips::ZERO }
    );
}

#[test]
fn short_stack_blind_is_clamped() {
    let mut stacks = Stacks::new(Chips(1000), Chips(15));
    let round = start_round(&mut stacks, human_wins_deck());

    assert_eq!(round.bets.ai_bet, Chips(15));
    assert_eq!(stacks.ai, Chips::ZERO);
    assert_eq!(round.pot.total, Chips(25));
}

#[test]
fn preflop_legal_actions_match_house_rules() {
    let mut stacks = Stacks::even(Chips(1000));
    let round = start_round(&mut stacks, human_wins_deck());

    assert_eq!(
        round.legal_actions(&stacks),
        vec![
            LegalAction::Fold,
            LegalAction::Call { amount: Chips(10) },
            LegalAction::Raise {
                min: Chips(40),
                max: Chips(980)
            },
        ]
    );
}

#[test]
fn call_closes_preflop_and_deals_flop() {
    let mut stacks = Stacks::even(Chips(1000));
    let mut round = start_round(&mut stacks, human_wins_deck());

    let status = act(&mut round, &mut stacks, Action::Call).unwrap();

    assert_eq!(status, RoundStatus::Ongoing);
    assert_eq!(round.pot.total, Chips(40));
    assert_eq!(round.street, Street::Flop);
    assert_eq!(round.board.len(), 3);
    assert_eq!(round.bets.human_bet, Chips::ZERO);
    assert_eq!(round.bets.ai_bet, Chips::ZERO);
    assert_eq!(stacks.human, Chips(980));
}

#[test]
fn checking_down_to_a_board_split_returns_each_half() {
    let mut stacks = Stacks::even(Chips(1000));
    let mut round = start_round(&mut stacks, split_deck());

    for _ in 0..3 {
        assert_eq!(act(&mut round, &mut stacks, Action::Call).unwrap(), RoundStatus::Ongoing);
    }
    let status = act(&mut round, &mut stacks, Action::Call).unwrap();

    let RoundStatus::Finished(result) = status else {
        panic!("round should be finished after the river");
    };
    assert_eq!(result.winner, RoundWinner::Tie);
    assert_eq!(result.reason, EndReason::Showdown);
    assert_eq!(result.pot, Chips(40));
    assert_eq!(stacks, Stacks::even(Chips(1000)));
    assert_eq!(round.pot.total, Chips::ZERO);
    assert_eq!(round.street, Street::Ended);
    assert_eq!(result.message, "Split pot! Both had Straight (Ace high)");
}

#[test]
fn board_grows_monotonically_by_street() {
    let mut stacks = Stacks::even(Chips(1000));
    let mut round = start_round(&mut stacks, human_wins_deck());

    let mut sizes = vec![round.board.len()];
    while round.waiting_for_human() {
        act(&mut round, &mut stacks, Action::Call).unwrap();
        sizes.push(round.board.len());
    }

    assert_eq!(sizes, vec![0, 3, 4, 5, 5]);
    assert_eq!(round.revealed_ai_cards().map(|c| c.len()), Some(2));
}

#[test]
fn showdown_winner_takes_the_pot() {
    let mut stacks = Stacks::even(Chips(1000));
    let mut round = start_round(&mut stacks, human_wins_deck());

    let mut last = RoundStatus::Ongoing;
    while round.waiting_for_human() {
        last = act(&mut round, &mut stacks, Action::Call).unwrap();
    }

    let RoundStatus::Finished(result) = last else {
        panic!("expected finished round");
    };
    assert_eq!(result.winner, RoundWinner::Human);
    assert_eq!(stacks, Stacks::new(Chips(1020), Chips(980)));
    assert_eq!(result.message, "You won with One Pair! AI had High Card");
}

#[test]
fn human_fold_gives_pot_to_ai() {
    let mut stacks = Stacks::even(Chips(1000));
    let mut round = start_round(&mut stacks, human_wins_deck());

    let status = act(&mut round, &mut stacks, Action::Fold).unwrap();

    let RoundStatus::Finished(result) = status else {
        panic!("fold must end the round");
    };
    assert_eq!(result.winner, RoundWinner::Ai);
    assert_eq!(result.reason, EndReason::Fold { folded: Seat::Human });
    assert_eq!(result.message, "AI Bot won! You folded.");
    // Человек теряет ровно свой блайнд, бот получает весь банк.
    assert_eq!(stacks, Stacks::new(Chips(990), Chips(1010)));
    assert_eq!(round.pot.total, Chips::ZERO);
    assert!(round.legal_actions(&stacks).is_empty());
}

#[test]
fn raise_is_called_when_ai_can_afford_it() {
    let cfg = GameConfig {
        initial_stack: Chips(610),
        ..GameConfig::default()
    };
    let mut stacks = Stacks::even(cfg.initial_stack);
    let mut round = Round::start(&cfg, 1, Seat::Human, &mut stacks, human_wins_deck()).unwrap();
    assert_eq!(stacks.human, Chips(600));

    let status = act(&mut round, &mut stacks, Action::Raise(Chips(500))).unwrap();

    assert_eq!(status, RoundStatus::Ongoing);
    assert_eq!(round.street, Street::Flop);
    assert_eq!(round.pot.total, Chips(1020));
    assert_eq!(stacks, Stacks::new(Chips(100), Chips(100)));
    // Планка ставки переживает смену улицы.
    assert_eq!(round.bets.current_bet, Chips(510));
}

#[test]
fn raise_wins_the_pot_when_ai_cannot_cover() {
    let mut stacks = Stacks::new(Chips(610), Chips(300));
    let mut round = start_round(&mut stacks, human_wins_deck());

    let status = act(&mut round, &mut stacks, Action::Raise(Chips(500))).unwrap();

    let RoundStatus::Finished(result) = status else {
        panic!("AI without chips to call must fold");
    };
    assert_eq!(result.reason, EndReason::Fold { folded: Seat::Ai });
    assert_eq!(result.message, "You won! AI folded.");
    assert_eq!(result.pot, Chips(530));
    assert_eq!(stacks, Stacks::new(Chips(630), Chips(280)));
}

#[test]
fn folding_policy_gives_up_to_any_raise() {
    let mut stacks = Stacks::even(Chips(1000));
    let mut round = start_round(&mut stacks, human_wins_deck());

    let status = round
        .apply_action(&mut stacks, Action::Raise(Chips(40)), &StandardEvaluator, &mut FoldingPolicy)
        .unwrap();

    assert!(matches!(status, RoundStatus::Finished(_)));
    assert_eq!(stacks, Stacks::new(Chips(1020), Chips(980)));
}

#[test_log::test]
fn policy_reraise_is_treated_as_call() {
    let mut stacks = Stacks::even(Chips(1000));
    let mut round = start_round(&mut stacks, human_wins_deck());

    let status = round
        .apply_action(&mut stacks, Action::Raise(Chips(100)), &StandardEvaluator, &mut StubbornRaiser)
        .unwrap();

    assert_eq!(status, RoundStatus::Ongoing);
    assert_eq!(round.street, Street::Flop);
    assert_eq!(stacks, Stacks::new(Chips(890), Chips(890)));
}

#[test]
fn raise_above_stack_is_rejected_and_changes_nothing() {
    let mut stacks = Stacks::even(Chips(1000));
    let mut round = start_round(&mut stacks, human_wins_deck());
    let pot_before = round.pot.clone();
    let bets_before = round.bets.clone();

    let err = act(&mut round, &mut stacks, Action::Raise(Chips(991))).unwrap_err();

    assert_eq!(err, EngineError::RaiseTooLarge { amount: 991, stack: 990 });
    assert_eq!(round.pot, pot_before);
    assert_eq!(round.bets, bets_before);
    assert_eq!(stacks, Stacks::new(Chips(990), Chips(980)));
    assert_eq!(round.street, Street::Preflop);
}

#[test]
fn zero_and_small_raises_are_below_minimum() {
    let mut stacks = Stacks::even(Chips(1000));
    let mut round = start_round(&mut stacks, human_wins_deck());

    assert_eq!(
        act(&mut round, &mut stacks, Action::Raise(Chips::ZERO)).unwrap_err(),
        EngineError::RaiseBelowMinimum { amount: 0, min: 40 }
    );
    assert_eq!(
        act(&mut round, &mut stacks, Action::Raise(Chips(39))).unwrap_err(),
        EngineError::RaiseBelowMinimum { amount: 39, min: 40 }
    );
    assert_eq!(round.pot.total, Chips(30));
}

#[test]
fn actions_after_round_end_are_rejected() {
    let mut stacks = Stacks::even(Chips(1000));
    let mut round = start_round(&mut stacks, human_wins_deck());
    act(&mut round, &mut stacks, Action::Fold).unwrap();

    assert_eq!(
        act(&mut round, &mut stacks, Action::Call).unwrap_err(),
        EngineError::NotWaitingForAction
    );
}

#[test]
fn short_deck_fails_without_touching_stacks() {
    let mut stacks = Stacks::even(Chips(1000));
    let deck = Box::new(StackedDeck::parse("As Ad 2c").unwrap());

    let err = Round::start(&GameConfig::default(), 1, Seat::Human, &mut stacks, deck).err();

    assert_eq!(err, Some(EngineError::DeckExhausted));
    assert_eq!(stacks, Stacks::even(Chips(1000)));
}

#[test]
fn last_actions_follow_the_current_street() {
    let mut stacks = Stacks::even(Chips(1000));
    let mut round = start_round(&mut stacks, human_wins_deck());

    assert_eq!(round.history.last_action_text(Seat::Human), "Small blind $10");
    assert_eq!(round.history.last_action_text(Seat::Ai), "Big blind $20");

    act(&mut round, &mut stacks, Action::Call).unwrap();
    assert_eq!(round.history.last_action_text(Seat::Human), "-");

    act(&mut round, &mut stacks, Action::Raise(Chips(40))).unwrap();
    // Рейз и колл закрыли флоп – на тёрне ещё никто не ходил.
    assert_eq!(round.street, Street::Turn);
    assert_eq!(round.history.last_action_text(Seat::Ai), "-");
}

/// Утилита: ставки сразу после блайндов 10/20.
fn preflop_bets() -> BettingState {
    let mut betting = BettingState::new(Chips(20));
    betting.human_bet = Chips(10);
    betting.ai_bet = Chips(20);
    betting
}

#[test]
fn raise_is_omitted_when_short_stack_is_below_minimum() {
    let stacks = Stacks::new(Chips(990), Chips(30));

    assert_eq!(
        preflop_bets().legal_actions(&stacks, &GameConfig::default()),
        vec![LegalAction::Fold, LegalAction::Call { amount: Chips(10) }]
    );
}

#[test]
fn to_call_never_goes_negative() {
    let mut betting = BettingState::new(Chips(20));
    betting.human_bet = Chips(50);
    betting.ai_bet = Chips(20);

    assert_eq!(betting.to_call(Seat::Human), Chips::ZERO);
    assert_eq!(betting.to_call(Seat::Ai), Chips(30));
}

#[test]
fn min_raise_is_enforced_only_when_configured() {
    let mut cfg = GameConfig::default();
    let small = Action::Raise(Chips(25));
    assert_eq!(
        validate_human_action(&small, Chips(990), &preflop_bets(), &cfg),
        Err(EngineError::RaiseBelowMinimum { amount: 25, min: 40 })
    );

    cfg.enforce_min_raise = false;
    assert!(validate_human_action(&small, Chips(990), &preflop_bets(), &cfg).is_ok());
    // Нулевой рейз не проходит даже без минимума.
    assert!(validate_human_action(&Action::Raise(Chips::ZERO), Chips(990), &preflop_bets(), &cfg).is_err());
}

#[test]
fn history_last_action_is_scoped_to_current_street() {
    let mut history = RoundHistory::new();
    history.push(RoundEventKind::PlayerActed {
        seat: Seat::Human,
        action: ActionTaken::SmallBlind(Chips(10)),
        stack_after: Chips(990),
        pot_after: Chips(10),
    });
    assert_eq!(history.last_action_text(Seat::Human), "Small blind $10");
    assert_eq!(history.last_action_text(Seat::Ai), "-");

    history.push(RoundEventKind::StreetChanged { street: Street::Flop });
    assert_eq!(history.last_action_text(Seat::Human), "-");
}
