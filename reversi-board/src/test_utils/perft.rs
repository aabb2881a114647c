//! "Perft" performance test: count the number of leaves at a given depth.
//! A side with no legal move passes; two passes in a row end the game.
//! See: http://www.aartbik.com/MISC/reversi.html

use crate::{Board, Color};

pub fn run_perft(depth: u64) -> u64 {
    leaves_below(Board::new(), Color::default(), depth, false)
}

fn leaves_below(board: Board, to_move: Color, depth: u64, passed: bool) -> u64 {
    // Leaf node for this depth
    if depth == 0 {
        return 1;
    }

    let all_moves = board.legal_moves(to_move);
    if all_moves.is_empty() {
        // Both players passed: game is over
        if passed {
            return 1;
        }

        return leaves_below(board, !to_move, depth - 1, true);
    }

    all_moves
        .into_iter()
        .map(|mv| {
            let mut child = board;
            match child.apply_move(mv, to_move) {
                Ok(_) => leaves_below(child, !to_move, depth - 1, false),
                Err(_) => 0,
            }
        })
        .sum()
}

#[test]
fn perft_01() {
    assert_eq!(run_perft(1), 4);
}

#[test]
fn perft_02() {
    assert_eq!(run_perft(2), 12);
}

#[test]
fn perft_03() {
    assert_eq!(run_perft(3), 56);
}

#[test]
fn perft_04() {
    assert_eq!(run_perft(4), 244);
}

#[test]
fn perft_05() {
    assert_eq!(run_perft(5), 1396);
}
