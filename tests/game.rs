//! Game integration tests.

use highcard::{
    Card, CollectError, DECK_SIZE, DealError, Deck, DeckError, ErrorKind, Game, GameOptions,
    GameOutcome, GameState, JoinError, PlayerError, RoundError, RoundOutcome, Suit,
};

fn seated_game(options: GameOptions, seed: u64) -> Game {
    let game = Game::new(options, seed);
    game.join("Ada", Some(36)).unwrap();
    game.join("Grace", None).unwrap();
    game
}

fn sevens_deck(count: usize) -> Deck {
    Deck::from_cards((0..count).map(|i| {
        let suit = Suit::ALL[i % Suit::ALL.len()].name();
        Card::new("7", &format!("{suit} #{i}"), 7).unwrap()
    }))
}

#[test]
fn options_builder_sets_fields() {
    let options = GameOptions::default()
        .with_hand_size(3)
        .with_rounds(2)
        .with_discard_played(false);

    assert_eq!(options.hand_size, 3);
    assert_eq!(options.rounds, 2);
    assert!(!options.discard_played);
    assert_eq!(GameOptions::default().hand_size, 5);
    assert_eq!(GameOptions::default().rounds, 5);
    assert!(GameOptions::default().discard_played);
}

#[test]
fn join_errors() {
    let game = Game::new(GameOptions::default(), 1);

    assert_eq!(
        game.join(" ", None).unwrap_err(),
        JoinError::InvalidPlayer(PlayerError::EmptyName)
    );
    assert_eq!(game.join("Ada", None).unwrap(), 0);
    assert_eq!(game.join("Grace", None).unwrap(), 1);
    assert_eq!(game.join("Linus", None).unwrap_err(), JoinError::TableFull);
    assert_eq!(game.player_count(), 2);

    game.deal().unwrap();
    assert_eq!(game.join("Linus", None).unwrap_err(), JoinError::InvalidState);
}

#[test]
fn deal_errors() {
    let game = Game::new(GameOptions::default(), 1);
    game.join("Ada", None).unwrap();
    assert_eq!(game.deal().unwrap_err(), DealError::NotEnoughPlayers);

    let small = Game::with_deck(GameOptions::default(), sevens_deck(9), 1);
    small.join("Ada", None).unwrap();
    small.join("Grace", None).unwrap();
    assert_eq!(small.deal().unwrap_err(), DealError::NotEnoughCards);
    assert_eq!(small.cards_remaining(), 9);

    let game = seated_game(GameOptions::default(), 1);
    game.deal().unwrap();
    assert_eq!(game.deal().unwrap_err(), DealError::InvalidState);
}

#[test]
fn deal_fills_each_hand() {
    let game = seated_game(GameOptions::default(), 7);
    game.deal().unwrap();

    assert_eq!(game.state(), GameState::Playing);
    assert_eq!(game.cards_remaining(), DECK_SIZE - 10);
    for player in game.players() {
        assert_eq!(player.hand().len(), 5);
    }
    assert_eq!(game.cards_in_play(), DECK_SIZE);
    assert_ne!(game.deck().cards(), &Deck::new().cards()[10..]);
}

#[test]
fn full_game_scores_rounds() {
    let game = seated_game(GameOptions::default(), 42);
    assert_eq!(game.play_round().unwrap_err(), RoundError::InvalidState);
    assert!(game.result().is_none());

    game.deal().unwrap();
    let mut wins = [0_u64; 2];
    while game.state() == GameState::Playing {
        let hands_before: Vec<_> = game.players().iter().map(|p| p.hand().clone()).collect();
        let round = game.play_round().unwrap();

        assert_eq!(round.plays.len(), 2);
        for play in &round.plays {
            assert_eq!(hands_before[play.seat].highest(), Some(&play.card));
        }

        let (a, b) = (round.plays[0].card.value(), round.plays[1].card.value());
        match round.outcome {
            RoundOutcome::Winner(0) => {
                assert!(a > b);
                wins[0] += 1;
            }
            RoundOutcome::Winner(1) => {
                assert!(b > a);
                wins[1] += 1;
            }
            RoundOutcome::Winner(seat) => panic!("unexpected seat {seat}"),
            RoundOutcome::Tie => assert_eq!(a, b),
        }
        assert_eq!(game.cards_in_play(), DECK_SIZE);
    }

    assert_eq!(game.rounds_played(), 5);
    assert_eq!(game.discard_pile().len(), 10);
    assert_eq!(game.play_round().unwrap_err(), RoundError::InvalidState);

    let result = game.result().unwrap();
    assert_eq!(result.rounds, 5);
    assert_eq!(result.scores, wins.to_vec());
    assert_eq!(result.outcome, GameOutcome::from_scores(&wins));
}

#[test]
fn same_seed_same_game() {
    let play = |seed| {
        let game = seated_game(GameOptions::default(), seed);
        game.deal().unwrap();
        let mut rounds = Vec::new();
        while game.state() == GameState::Playing {
            rounds.push(game.play_round().unwrap());
        }
        rounds
    };

    assert_eq!(play(11), play(11));
}

#[test]
fn equal_values_always_tie() {
    let game = Game::with_deck(GameOptions::default(), sevens_deck(12), 3);
    game.join("Ada", None).unwrap();
    game.join("Grace", None).unwrap();
    game.deal().unwrap();

    while game.state() == GameState::Playing {
        assert_eq!(game.play_round().unwrap().outcome, RoundOutcome::Tie);
    }

    let result = game.result().unwrap();
    assert_eq!(result.scores, vec![0, 0]);
    assert_eq!(result.outcome, GameOutcome::Tie);
}

#[test]
fn game_ends_when_hands_run_out() {
    let options = GameOptions::default().with_hand_size(2).with_rounds(5);
    let game = seated_game(options, 9);
    game.deal().unwrap();

    game.play_round().unwrap();
    assert_eq!(game.state(), GameState::Playing);
    game.play_round().unwrap();
    assert_eq!(game.state(), GameState::GameOver);
    assert_eq!(game.rounds_played(), 2);
}

#[test]
fn empty_hands_are_rejected_before_dealing() {
    let options = GameOptions::default().with_hand_size(0);
    let mut game = seated_game(options, 9);

    let err = game.deal().unwrap_err();
    assert_eq!(err, DealError::InvalidOptions);
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    assert_eq!(game.state(), GameState::WaitingForPlayers);
    assert_eq!(game.cards_remaining(), DECK_SIZE);
    assert!(game.players().iter().all(|p| p.hand().is_empty()));

    game.options = game.options.with_hand_size(2);
    game.deal().unwrap();
    while game.state() == GameState::Playing {
        game.play_round().unwrap();
    }
    assert_eq!(game.rounds_played(), 2);
    assert_eq!(game.collect_cards().unwrap(), DECK_SIZE);
}

#[test]
fn zero_rounds_are_rejected_before_dealing() {
    let options = GameOptions::default().with_rounds(0);
    let game = seated_game(options, 9);

    assert_eq!(game.deal().unwrap_err(), DealError::InvalidOptions);
    assert_eq!(game.state(), GameState::WaitingForPlayers);
    assert_eq!(game.play_round().unwrap_err(), RoundError::InvalidState);
    assert_eq!(game.rounds_played(), 0);
    assert!(game.result().is_none());
}

#[test]
fn collecting_an_empty_table_changes_nothing() {
    let game = Game::with_deck(GameOptions::default(), Deck::from_cards(Vec::new()), 4);
    game.join("Ada", None).unwrap();
    game.join("Grace", None).unwrap();

    assert_eq!(
        game.collect_cards().unwrap_err(),
        CollectError::Deck(DeckError::EmptyDeck)
    );
    assert_eq!(game.state(), GameState::WaitingForPlayers);
    assert_eq!(game.rounds_played(), 0);
    assert_eq!(game.cards_in_play(), 0);
}

#[test]
fn played_cards_leave_table_without_discard() {
    let options = GameOptions::default().with_discard_played(false);
    let game = seated_game(options, 5);
    game.deal().unwrap();

    let mut played = 0;
    while game.state() == GameState::Playing {
        played += game.play_round().unwrap().plays.len();
    }

    assert!(game.discard_pile().is_empty());
    assert_eq!(game.cards_in_play(), DECK_SIZE - played);
}

#[test]
fn collect_cards_restores_deck() {
    let options = GameOptions::default().with_rounds(3);
    let game = seated_game(options, 8);
    game.deal().unwrap();
    assert_eq!(game.collect_cards().unwrap_err(), CollectError::InvalidState);

    while game.state() == GameState::Playing {
        game.play_round().unwrap();
    }
    let scores = game.result().unwrap().scores;

    assert_eq!(game.collect_cards().unwrap(), DECK_SIZE);
    assert_eq!(game.state(), GameState::WaitingForPlayers);
    assert_eq!(game.rounds_played(), 0);
    assert!(game.discard_pile().is_empty());
    assert!(game.players().iter().all(|p| p.hand().is_empty()));

    let kept: Vec<u64> = game.players().iter().map(|p| p.points()).collect();
    assert_eq!(kept, scores);

    game.deal().unwrap();
    assert_eq!(game.cards_in_play(), DECK_SIZE);
}

#[test]
fn outcome_comparisons() {
    assert_eq!(RoundOutcome::from_values(&[14, 3]), RoundOutcome::Winner(0));
    assert_eq!(RoundOutcome::from_values(&[2, 13]), RoundOutcome::Winner(1));
    assert_eq!(RoundOutcome::from_values(&[9, 9]), RoundOutcome::Tie);
    assert_eq!(RoundOutcome::from_values(&[]), RoundOutcome::Tie);
    assert_eq!(GameOutcome::from_scores(&[1, 4]), GameOutcome::Winner(1));
    assert_eq!(GameOutcome::from_scores(&[2, 2]), GameOutcome::Tie);
}
