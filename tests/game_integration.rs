use chess_movegen::feedback::{SquareFeedback, compute_feedback};
use chess_movegen::game_logic::{ChessGame, MoveError};
use chess_movegen::game_state::{Board, Color, FenError, FenLoad, Piece, Role, Square};

fn sq(name: &str) -> Square {
    name.parse().expect("valid square")
}

/// Helper: run a whitespace-separated list of moves, all expected to succeed.
fn play_all(game: &mut ChessGame, moves: &str) {
    for token in moves.split_whitespace() {
        let (from, to) = token.split_at(2);
        game.try_move(sq(from), sq(to))
            .unwrap_or_else(|e| panic!("{token} should be accepted: {e}"));
    }
}

// ---------------------------------------------------------------
// Position loading and state export
// ---------------------------------------------------------------

#[test]
fn fen_placement_matches_state_string() {
    let fen = "r3k2r/ppp2ppp/2n5/3qp3/1b1P4/2N2N2/PPP2PPP/R1BQKB1R w KQkq - 0 1";
    let board = Board::from_fen(fen).expect("valid FEN");

    let expected: String = fen
        .split(' ')
        .next()
        .unwrap()
        .split('/')
        .map(|rank| {
            rank.chars()
                .map(|c| match c.to_digit(10) {
                    Some(n) => "0".repeat(n as usize),
                    None => c.to_string(),
                })
                .collect::<String>()
        })
        .collect();

    assert_eq!(board.state_string(), expected);
    assert_eq!(board.state_string().len(), 64);
}

#[test]
fn rejected_fen_leaves_occupancy_unchanged() {
    let mut board = Board::starting_position();
    let before = board.occupied();

    for fen in ["", "8/8/8", "8/8/8/8/8/8/8/8/8", "rnbqkbnr pppppppp"] {
        assert!(matches!(
            board.load_fen(fen),
            Err(FenError::SeparatorCount { .. })
        ));
        assert_eq!(board.occupied(), before, "{fen:?} must not touch the board");
    }
}

#[test]
fn truncated_fen_keeps_partial_board() {
    let mut board = Board::starting_position();

    let outcome = board.load_fen("rnbqkbnr/pppp/8/8/8/8/PPPPPPPP/RNBQKBNR");

    assert_eq!(outcome, Ok(FenLoad::Truncated { row: 1 }));
    assert_eq!(board.occupied_by(Color::White).count(), 0);
    assert_eq!(board.occupied_by(Color::Black).count(), 12);
}

#[test]
fn state_string_import_only_clears() {
    let mut game = ChessGame::new();
    let mut exported = game.state_string();
    // Swap the kings in the text; letters are not applied on import.
    exported = exported.replace('k', "K").replace('P', "0");

    game.set_state_string(&exported);

    assert_eq!(game.board().occupied_by(Color::White).count(), 8);
    assert_eq!(
        game.piece_at(sq("e8")),
        Some(Piece::new(Color::Black, Role::King))
    );
}

// ---------------------------------------------------------------
// Move generation through the session
// ---------------------------------------------------------------

#[test]
fn start_position_has_twenty_moves() {
    let game = ChessGame::new();
    let moves = game.moves().expect("fits in the default list");

    assert_eq!(moves.len(), 20);
    assert_eq!(
        moves.iter().filter(|m| m.role == Role::King).count(),
        0,
        "king is boxed in by its own pawns"
    );
}

#[test]
fn knight_never_lands_on_own_piece() {
    let game = ChessGame::from_fen("4k3/8/8/3p1P2/2P3p1/4N3/2P3P1/3K1B2").expect("valid FEN");

    let own = game.board().occupied_by(Color::White);
    let knight_moves: Vec<_> = game
        .moves()
        .unwrap()
        .into_iter()
        .filter(|m| m.role == Role::Knight)
        .collect();

    assert!(knight_moves.iter().all(|m| !own.contains(m.to)));
    // Six of the eight targets are white; g4 and d5 hold black pawns and come
    // out lowest square first.
    let targets: Vec<Square> = knight_moves.iter().map(|m| m.to).collect();
    assert_eq!(targets, [sq("g4"), sq("d5")]);
}

#[test]
fn blocked_intermediate_square_suppresses_double_push_everywhere() {
    let game = ChessGame::from_fen("4k3/8/8/8/8/2n5/2P5/4K3").expect("valid FEN");

    assert!(!game.can_move(sq("c2"), sq("c4")));
    assert!(
        !game
            .moves()
            .unwrap()
            .iter()
            .any(|m| m.from == sq("c2") && m.to == sq("c4"))
    );
}

// ---------------------------------------------------------------
// Turn handling and feedback
// ---------------------------------------------------------------

#[test]
fn turns_alternate_and_wrong_side_is_refused() {
    let mut game = ChessGame::new();
    play_all(&mut game, "e2e4");

    assert_eq!(game.turn(), Color::Black);
    assert_eq!(
        game.try_move(sq("d2"), sq("d4")),
        Err(MoveError::NotYourTurn {
            square: sq("d2"),
            color: Color::White
        })
    );

    play_all(&mut game, "e7e5 g1f3 b8c6 f3e5 c6e5");
    assert_eq!(
        game.piece_at(sq("e5")),
        Some(Piece::new(Color::Black, Role::Knight))
    );
    assert_eq!(game.turn(), Color::White);
}

#[test]
fn selecting_piece_highlights_its_moves() {
    let mut game = ChessGame::new();
    play_all(&mut game, "e2e4 d7d5");

    let state = game.state(Some(sq("e4"))).expect("move list fits");
    let fb = compute_feedback(&state);

    assert_eq!(fb.get(sq("e4")), Some(SquareFeedback::Origin));
    assert_eq!(fb.get(sq("e5")), Some(SquareFeedback::Destination));
    assert_eq!(fb.get(sq("d5")), Some(SquareFeedback::Capture));
    assert_eq!(fb.get(sq("f5")), None);
}

#[test]
fn nothing_selected_means_no_feedback() {
    let game = ChessGame::new();
    let state = game.state(None).expect("move list fits");

    assert!(compute_feedback(&state).is_empty());
}
