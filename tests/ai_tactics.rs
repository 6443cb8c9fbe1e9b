use serde::Deserialize;

use chess_core::board::{BoardBuilder, Color, Piece, Square};
use chess_core::game::GameState;
use chess_core::search::{search_best_move, Ai, AiConfig};

#[derive(Deserialize)]
struct TacticSet {
    positions: Vec<Tactic>,
}

#[derive(Deserialize)]
struct Tactic {
    name: String,
    pieces: Vec<String>,
    depth: u32,
    best: String,
}

/// "Ke1" is a White king on e1, "rd8" a Black rook on d8.
fn game_from_pieces(pieces: &[String]) -> GameState {
    let mut builder = BoardBuilder::new();
    for entry in pieces {
        let letter = entry.chars().next().expect("empty piece entry");
        let piece = Piece::from_char(letter).expect("bad piece letter");
        let color = if letter.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        let square: Square = entry[1..].parse().expect("bad square");
        builder = builder.piece(square, color, piece);
    }
    GameState::from_board(builder.build(), Color::Black)
}

fn load() -> TacticSet {
    let data = include_str!("data/tactics.json");
    serde_json::from_str(data).expect("invalid tactics.json")
}

#[test]
fn tactic_suite() {
    for tactic in load().positions {
        let game = game_from_pieces(&tactic.pieces);
        let config = AiConfig::default().with_depth(tactic.depth);
        let outcome = search_best_move(&game, config).expect("search failed");
        let best = outcome.best_move.map(|mv| mv.to_string());
        assert_eq!(
            best.as_deref(),
            Some(tactic.best.as_str()),
            "{}: score {}",
            tactic.name,
            outcome.score
        );
    }
}

#[test]
fn ai_commits_the_mating_move() {
    let tactic = load()
        .positions
        .into_iter()
        .find(|t| t.name == "back rank mate")
        .expect("missing position");
    let mut game = game_from_pieces(&tactic.pieces);
    let before = game.board().clone();

    assert!(Ai::default().make_move(&mut game));
    assert!(game.is_game_over());
    assert_eq!(game.result().winner(), Some(Color::Black));
    assert!(game.is_in_checkmate(Color::White));
    assert_ne!(game.board(), &before);
}

#[test]
fn search_leaves_the_game_untouched() {
    let mut game = GameState::new();
    assert!(game.try_make_move("d2".parse().unwrap(), "d4".parse().unwrap()));
    let before = game.board().clone();

    let outcome = search_best_move(&game, AiConfig::default()).unwrap();
    assert!(outcome.best_move.is_some());
    assert!(outcome.stats.nodes > 20);
    assert_eq!(game.board(), &before);
    assert_eq!(game.current_turn(), Color::Black);
}

#[test]
fn chosen_move_is_always_legal() {
    let mut game = GameState::new();
    let ai = Ai::new(AiConfig::default().with_depth(2));
    let white_line = [("e2", "e4"), ("g1", "f3"), ("f1", "c4"), ("d2", "d3")];

    for (from, to) in white_line {
        if game.is_game_over() {
            break;
        }
        if !game.try_make_move(from.parse().unwrap(), to.parse().unwrap()) {
            // the AI's reply may have made this move impossible
            continue;
        }
        let legal = game.legal_moves(Color::Black);
        assert!(ai.make_move(&mut game));
        let played = game.history().last().unwrap().mv;
        assert!(legal.contains(&played), "{played} was not legal");
    }
}
