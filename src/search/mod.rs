//! Fixed-depth alpha-beta search driving the Black player.
//!
//! Features:
//! - Minimax with alpha-beta pruning over make/unmake
//! - Heuristic move ordering (captures, castling, centre, checks)
//! - Material, centre and check evaluation with mate/stalemate detection
//!
//! The search runs on a private copy of the board; the game only ever sees
//! the one move that gets committed.

mod eval;
mod minimax;
mod move_order;
mod params;

use crate::board::{Color, Move, Piece, SearchError};
use crate::game::GameState;

pub use eval::{centre_control, evaluate, material, MATE_SCORE};
pub use minimax::SearchStats;
pub use move_order::{order_moves, score_move};
pub use params::{AiConfig, Difficulty, DEFAULT_DEPTH};

/// Result of a root search.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchOutcome {
    /// `None` when Black has no legal move
    pub best_move: Option<Move>,
    pub score: i32,
    pub stats: SearchStats,
}

/// Search the game's position for Black's best move.
///
/// Moves are tried in heuristic order; among equal scores the first one
/// tried is kept.
pub fn search_best_move(game: &GameState, config: AiConfig) -> Result<SearchOutcome, SearchError> {
    let mut board = game.board().clone();
    for color in Color::BOTH {
        if board.king_square(color).is_none() {
            return Err(SearchError::MissingKing { color });
        }
    }

    let depth = config.effective_depth();
    let mut stats = SearchStats::default();
    let moves = board.legal_moves(Color::Black);
    let ordered = order_moves(&mut board, &moves);

    let mut best_move = None;
    let mut best_score = i32::MIN;
    let mut alpha = i32::MIN;
    for candidate in ordered {
        let mv = candidate.mv;
        let info = board.make_move(mv);
        let score = minimax::minimax(
            &mut board,
            depth - 1,
            alpha,
            i32::MAX,
            Color::White,
            &mut stats,
        );
        board.unmake_move(mv, info);
        log::trace!("root {mv}: {score}");

        if best_move.is_none() || score > best_score {
            best_move = Some(mv);
            best_score = score;
        }
        alpha = alpha.max(best_score);
    }

    if best_move.is_none() {
        best_score = evaluate(&mut board, Color::Black);
    }

    Ok(SearchOutcome {
        best_move,
        score: best_score,
        stats,
    })
}

/// The automated Black player.
#[derive(Clone, Debug, Default)]
pub struct Ai {
    config: AiConfig,
}

impl Ai {
    #[must_use]
    pub fn new(config: AiConfig) -> Self {
        Ai { config }
    }

    #[must_use]
    pub fn config(&self) -> AiConfig {
        self.config
    }

    pub fn set_depth(&mut self, depth: u32) {
        self.config = self.config.with_depth(depth);
    }

    /// Search and commit one move for Black.
    ///
    /// Returns `Ok(None)` without touching the game when it is over, not
    /// Black's turn, or Black has no legal move. A Black pawn reaching the
    /// last rank becomes a Queen.
    pub fn play(&self, game: &mut GameState) -> Result<Option<Move>, SearchError> {
        if game.is_game_over() || game.current_turn() != Color::Black {
            return Ok(None);
        }

        let outcome = search_best_move(game, self.config)?;
        log::debug!(
            "depth {} search: best {:?} score {} nodes {} cutoffs {}",
            self.config.effective_depth(),
            outcome.best_move.map(|mv| mv.to_string()),
            outcome.score,
            outcome.stats.nodes,
            outcome.stats.cutoffs
        );
        let Some(mv) = outcome.best_move else {
            return Ok(None);
        };

        game.make_move(mv.from, mv.to)
            .map_err(|source| SearchError::Rejected { mv, source })?;
        if game.pending_promotion() == Some(mv.to) {
            game.promote(mv.to, Piece::Queen)
                .map_err(|source| SearchError::Promotion { mv, source })?;
        }
        Ok(Some(mv))
    }

    /// Play one Black move. Returns whether a move was committed.
    ///
    /// Internal faults are logged and reported as `false`.
    pub fn make_move(&self, game: &mut GameState) -> bool {
        match self.play(game) {
            Ok(played) => played.is_some(),
            Err(err) => {
                log::error!("AI move failed: {err}");
                false
            }
        }
    }
}
