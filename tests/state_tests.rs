//! GameState behavior through the public API.

use blockfall::config::GameConfig;
use blockfall::core::{GameState, Matrix, Piece};

fn o_piece(x: i32, y: i32) -> Piece {
    Piece::new(Matrix::from_rows(&[&[4, 4], &[4, 4]]), x, y)
}

#[test]
fn counters_only_move_forward() {
    let mut state = GameState::new(&GameConfig::default());

    let mut last_score = 0;
    let mut last_level = 1;
    let mut last_lines = 0;

    for rows in [1, 2, 4, 1, 3, 2] {
        state.update_score(rows);
        assert!(state.score() >= last_score);
        assert!(state.level() >= last_level);
        assert_eq!(state.lines(), last_lines + rows);

        last_score = state.score();
        last_level = state.level();
        last_lines = state.lines();
    }
}

#[test]
fn lines_grow_by_exactly_the_rows_cleared() {
    let mut state = GameState::new(&GameConfig::default());

    state.update_score(3);
    assert_eq!(state.lines(), 3);
    state.update_score(1);
    assert_eq!(state.lines(), 4);
}

#[test]
fn reset_produces_a_fresh_game() {
    let mut state = GameState::new(&GameConfig::default());

    state.set_cell(0, 19, 1);
    state.set_active(o_piece(4, 3));
    state.set_next(o_piece(0, 0));
    state.update_score(6);

    state.reset();

    assert!(state.arena().is_empty());
    assert!(state.active().is_none());
    assert!(state.next().is_none());
    assert_eq!(state.score(), 0);
    assert_eq!(state.level(), 1);
    assert_eq!(state.lines(), 0);
}

#[test]
fn merge_then_no_overlap_is_not_game_over() {
    let mut state = GameState::new(&GameConfig::default());

    // Lock a piece at the floor, then look at a fresh piece in open space.
    state.set_active(o_piece(0, 18));
    state.merge_active_piece();
    state.set_active(o_piece(4, 0));

    assert!(!state.is_game_over());
}

#[test]
fn spawn_cell_overlap_is_game_over() {
    let mut state = GameState::new(&GameConfig::default());

    state.set_cell(4, 0, 1);
    state.set_active(o_piece(4, 0));

    assert!(state.is_game_over());
}

#[test]
fn clear_row_is_the_only_row_mutation_surface() {
    let mut state = GameState::new(&GameConfig::default());

    for x in 0..10 {
        state.set_cell(x, 19, 2);
    }
    state.set_cell(0, 18, 3);

    state.clear_row(19);

    assert_eq!(state.arena().get(0, 19), Some(3));
    assert!(state.arena().row(18).iter().all(|&v| v == 0));
}
