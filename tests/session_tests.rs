use heads_up_engine::{
    api::dto::GameStateDto,
    domain::{
        chips::Chips,
        config::{FinalTiePolicy, GameConfig},
        hand::Street,
        player::Seat,
    },
    engine::{
        actions::{Action, LegalAction},
        errors::EngineError,
        session::{GameEndReason, GameSession, GameWinner},
        showdown::RoundWinner,
    },
    infra::decks::{SeededDeckProvider, StackedDeck, StackedDeckProvider},
};

/// Утилита: колода, где у человека пара тузов, у бота мусор.
fn human_wins_deck() -> StackedDeck {
    StackedDeck::parse("As Ad 2c 7d Ks Qh 9c 5d 3s").unwrap()
}

/// Утилита: колода со сплитом по борду.
fn split_deck() -> StackedDeck {
    StackedDeck::parse("2c 3d 2h 3s Ts Jh Qd Kc Ah").unwrap()
}

/// Утилита: сессия с заранее сложенными колодами.
fn session_with(cfg: GameConfig, decks: Vec<StackedDeck>) -> GameSession {
    GameSession::new(cfg)
        .unwrap()
        .with_decks(Box::new(StackedDeckProvider::new(decks)))
}

/// Утилита: чек/колл до конца раунда.
fn check_down(session: &mut GameSession) -> GameStateDto {
    let mut state = session.state().unwrap();
    while state.waiting_for_action {
        state = session.submit_action(Action::Call).unwrap();
    }
    state
}

#[test]
fn start_game_deals_first_round() {
    let mut s = session_with(GameConfig::default(), vec![human_wins_deck()]);
    let st = s.start_game().unwrap();

    assert_eq!(st.round_index, 1);
    assert_eq!(st.max_rounds, 10);
    assert_eq!(st.street, Street::Preflop);
    assert_eq!(st.button, Seat::Human);
    assert_eq!(st.pot, Chips(30));
    assert_eq!(st.human_stack, Chips(990));
    assert_eq!(st.ai_stack, Chips(980));
    assert_eq!(st.human_cards, vec!["As".to_string(), "Ad".to_string()]);
    assert!(st.ai_cards.is_empty());
    assert!(st.board.is_empty());
    assert!(st.waiting_for_action);
    assert!(!st.game_finished);
    assert_eq!(st.last_actions.human, "Small blind $10");
    assert_eq!(st.message, "Game started! Cards dealt. Make your move!");
}

#[test]
fn calls_before_start_fail_with_no_active_round() {
    let mut s = GameSession::new(GameConfig::default()).unwrap();

    assert_eq!(s.state().unwrap_err(), EngineError::NoActiveRound);
    assert_eq!(s.submit_action(Action::Call).unwrap_err(), EngineError::NoActiveRound);
    assert_eq!(s.advance_round().unwrap_err(), EngineError::NoActiveRound);
}

#[test]
fn invalid_config_is_rejected() {
    let cfg = GameConfig {
        big_blind: Chips(5),
        ..GameConfig::default()
    };
    assert!(matches!(GameSession::new(cfg), Err(EngineError::InvalidConfig(_))));
}

#[test]
fn state_is_idempotent() {
    let mut s = session_with(GameConfig::default(), vec![human_wins_deck()]);
    s.start_game().unwrap();
    s.submit_action(Action::Call).unwrap();

    let a = s.state().unwrap();
    let b = s.state().unwrap();
    assert_eq!(a, b);
}

#[test]
fn advance_round_mid_round_is_rejected() {
    let mut s = session_with(GameConfig::default(), vec![human_wins_deck()]);
    s.start_game().unwrap();

    assert_eq!(s.advance_round().unwrap_err(), EngineError::RoundInProgress);
}

#[test]
fn round_end_reveals_ai_cards_and_result() {
    let mut s = session_with(GameConfig::default(), vec![human_wins_deck()]);
    s.start_game().unwrap();

    let st = check_down(&mut s);

    assert_eq!(st.street, Street::Ended);
    assert_eq!(st.ai_cards, vec!["2c".to_string(), "7d".to_string()]);
    assert!(st.legal_actions.is_empty());
    let result = st.round_result.expect("round result");
    assert_eq!(result.winner, RoundWinner::Human);
    assert_eq!(result.human_hand.as_deref(), Some("One Pair"));
    assert_eq!(st.human_stack, Chips(1020));
    assert_eq!(st.message, "You won with One Pair! AI had High Card");
}

#[test]
fn next_round_flips_button_and_keeps_stacks() {
    let mut s = session_with(GameConfig::default(), vec![human_wins_deck(), human_wins_deck()]);
    s.start_game().unwrap();
    s.submit_action(Action::Fold).unwrap();

    let st = s.advance_round().unwrap();

    assert_eq!(st.round_index, 2);
    assert_eq!(st.button, Seat::Ai);
    // Бот на кнопке платит SB, человек – BB.
    assert_eq!(st.human_bet, Chips(20));
    assert_eq!(st.ai_bet, Chips(10));
    assert_eq!(st.human_stack, Chips(970));
    assert_eq!(st.ai_stack, Chips(1000));
    assert_eq!(st.message, "Starting round 2. Cards dealt!");
}

#[test_log::test]
fn round_limit_finishes_with_larger_stack_winning() {
    let cfg = GameConfig {
        max_rounds: 2,
        ..GameConfig::default()
    };
    let mut s = session_with(cfg, vec![human_wins_deck()]);
    s.start_game().unwrap();
    s.submit_action(Action::Fold).unwrap();

    let st = s.advance_round().unwrap();

    assert!(st.game_finished);
    assert_eq!(st.round_index, 2);
    let over = st.game_over.expect("game over");
    assert_eq!(over.winner, GameWinner::Ai);
    assert_eq!(over.reason, GameEndReason::RoundLimit);
    assert_eq!(over.human_stack, Chips(990));
    assert_eq!(over.ai_stack, Chips(1010));
    assert_eq!(over.message, "Game finished! AI Bot won!");

    assert_eq!(s.advance_round().unwrap_err(), EngineError::GameAlreadyFinished);
    assert_eq!(s.submit_action(Action::Call).unwrap_err(), EngineError::NotWaitingForAction);
}

#[test]
fn exact_tie_at_round_limit_follows_final_tie_policy() {
    let cases = [
        (FinalTiePolicy::Draw, GameWinner::Draw, "Game finished! It's a draw!"),
        (FinalTiePolicy::Human, GameWinner::Human, "Game finished! You won!"),
        (FinalTiePolicy::Ai, GameWinner::Ai, "Game finished! AI Bot won!"),
    ];

    for (policy, winner, message) in cases {
        let cfg = GameConfig {
            max_rounds: 2,
            final_tie: policy,
            ..GameConfig::default()
        };
        let mut s = session_with(cfg, vec![split_deck()]);
        s.start_game().unwrap();
        let st = check_down(&mut s);
        assert_eq!(st.human_stack, st.ai_stack);

        let over = s.advance_round().unwrap().game_over.expect("game over");
        assert_eq!(over.winner, winner, "{policy:?}");
        assert_eq!(over.message, message);
    }
}

#[test]
fn max_rounds_one_ends_after_the_first_round() {
    let cfg = GameConfig {
        max_rounds: 1,
        ..GameConfig::default()
    };
    let mut s = session_with(cfg, vec![human_wins_deck()]);
    s.start_game().unwrap();
    check_down(&mut s);

    let st = s.advance_round().unwrap();
    assert!(st.game_finished);
    assert_eq!(st.game_over.map(|o| o.winner), Some(GameWinner::Human));
}

#[test_log::test]
fn busting_the_ai_ends_the_game_immediately() {
    let cfg = GameConfig {
        initial_stack: Chips(100),
        ..GameConfig::default()
    };
    let mut s = session_with(cfg, vec![human_wins_deck()]);
    s.start_game().unwrap();

    // Весь стек: 90 сверху малого блайнда, боту хватает ровно на колл.
    let st = s.submit_action(Action::Raise(Chips(90))).unwrap();
    assert_eq!(st.street, Street::Flop);
    assert_eq!(st.human_stack, Chips::ZERO);
    assert_eq!(st.ai_stack, Chips::ZERO);
    assert!(st
        .legal_actions
        .iter()
        .all(|a| !matches!(a, LegalAction::Raise { .. })));

    let st = check_down(&mut s);

    assert!(st.game_finished);
    let over = st.game_over.expect("game over");
    assert_eq!(over.winner, GameWinner::Human);
    assert_eq!(over.reason, GameEndReason::Busted(Seat::Ai));
    assert_eq!(over.human_stack, Chips(200));
    assert_eq!(st.message, "AI Bot ran out of chips! You win the game!");
    assert_eq!(s.advance_round().unwrap_err(), EngineError::GameAlreadyFinished);
}

#[test]
fn restart_resets_the_match() {
    let mut s = session_with(GameConfig::default(), vec![human_wins_deck(), human_wins_deck()]);
    s.start_game().unwrap();
    s.submit_action(Action::Fold).unwrap();

    let st = s.start_game().unwrap();
    assert_eq!(st.round_index, 1);
    assert_eq!(st.human_stack, Chips(990));
    assert_eq!(st.ai_stack, Chips(980));
    assert!(st.round_result.is_none());
}

/// Детерминированный выбор действия из допустимых.
fn pick_action(legal: &[LegalAction], tick: u64) -> Action {
    let raise = legal.iter().find_map(|a| match a {
        LegalAction::Raise { min, .. } => Some(*min),
        _ => None,
    });
    match (tick % 7, raise) {
        (3, _) => Action::Fold,
        (1, Some(min)) | (5, Some(min)) => Action::Raise(min),
        _ => Action::Call,
    }
}

#[test_log::test]
fn chips_are_conserved_over_many_seeded_matches() {
    let cfg = GameConfig::default();
    let total = cfg.initial_stack.0 * 2;

    for seed in 0..25u64 {
        let mut s = GameSession::new(cfg.clone())
            .unwrap()
            .with_decks(Box::new(SeededDeckProvider::new(seed)));
        let mut st = s.start_game().unwrap();
        let mut tick = seed;

        for _ in 0..500 {
            assert_eq!(
                st.pot.0 + st.human_stack.0 + st.ai_stack.0,
                total,
                "seed {seed}, round {}",
                st.round_index
            );
            if st.street != Street::Ended {
                assert_eq!(st.board.len(), st.street.board_len());
            }
            if st.game_finished {
                break;
            }

            st = if st.waiting_for_action {
                s.submit_action(pick_action(&st.legal_actions, tick)).unwrap()
            } else {
                s.advance_round().unwrap()
            };
            tick += 1;
        }

        assert!(st.game_finished, "seed {seed} did not finish");
        assert!(st.round_index <= cfg.max_rounds);
    }
}
