//! Tests for the player strategies.

use proptest::prelude::*;
use strictly_fifteen::{
    Console, Digit, GameInProgress, GameResult, GameSetup, HumanPlayer, Mark, Move, Player,
    Position, RandomPlayer, Transcript,
};

/// Builds a game with the given cells filled, alternating marks from X.
fn game_with(filled: &[usize]) -> GameInProgress {
    let mut game = GameSetup::new().start(Mark::X);
    for &index in filled {
        let action = Move::new(
            "Filler",
            game.to_move(),
            Position::from_index(index).unwrap(),
            Digit::new(1).unwrap(),
        );
        game = match game.make_move(action).unwrap() {
            GameResult::InProgress(g) => g,
            GameResult::Finished(_) => panic!("Ones never reach fifteen"),
        };
    }
    game
}

#[test]
fn test_human_and_computer_share_one_interface() {
    let console = Console::scripted("0\n0\n5\n", Transcript::new()).shared();
    let mut players: Vec<Box<dyn Player>> = vec![
        Box::new(HumanPlayer::new("Ada".to_string(), Mark::X, console)),
        Box::new(RandomPlayer::with_seed("Cpu", Mark::O, 11)),
    ];
    let game = GameSetup::new().start(Mark::X);

    for player in &mut players {
        let mov = player.choose_move(&game).unwrap();
        assert_eq!(mov.mark(), player.mark());
        assert_eq!(mov.player(), player.name());
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_random_player_only_targets_empty_cells(
        filled in prop::sample::subsequence((0usize..9).collect::<Vec<_>>(), 0..8),
        seed in any::<u64>(),
    ) {
        let game = game_with(&filled);
        let mut player = RandomPlayer::with_seed("Cpu", game.to_move(), seed);
        let mov = player.choose_move(&game).unwrap();
        prop_assert!(game.board().is_empty(mov.position()));
        prop_assert!(!filled.contains(&mov.position().index()));
    }
}
