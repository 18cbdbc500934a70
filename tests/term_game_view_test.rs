use tui_snake::core::{Board, GameState, SimpleRng, SnakeSeq};
use tui_snake::term::{AnchorY, GameView, HudInfo, PlayStatus, Viewport};
use tui_snake::types::{BoardInfo, Movement, Point};

const INFO: BoardInfo = BoardInfo::new(4, 5);

fn sample_state() -> GameState {
    let snake = SnakeSeq::from_cells(&[Point::new(2, 3), Point::new(2, 2), Point::new(2, 1)]).unwrap();
    GameState::from_parts(INFO, snake, Point::new(4, 5), Movement::East, SimpleRng::new(3)).unwrap()
}

fn hud(state: &GameState, status: PlayStatus) -> HudInfo {
    HudInfo::from_state(state, 3, status)
}

#[test]
fn term_view_renders_border_corners() {
    let state = sample_state();
    let board = Board::from_state(&state, INFO);
    let view = GameView::default();

    // With cell_w=2 and cell_h=1: 5*2 by 4*1 cells plus border => 12x6.
    let fb = view.render(&board, &hud(&state, PlayStatus::Running), Viewport::new(12, 6));

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(11, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 5).unwrap().ch, '└');
    assert_eq!(fb.get(11, 5).unwrap().ch, '┘');
}

#[test]
fn term_view_renders_cells_two_chars_wide() {
    let state = sample_state();
    let board = Board::from_state(&state, INFO);
    let view = GameView::default();
    let fb = view.render(&board, &hud(&state, PlayStatus::Running), Viewport::new(12, 6));

    // Inside border: (1,1) origin. Cell (row, col) starts at x = 1 + (col-1)*2, y = row.
    let head = fb.get(5, 2).unwrap();
    assert_eq!(head.ch, '█');
    assert!(head.style.bold);
    assert_eq!(fb.get(6, 2).unwrap().ch, '█');

    let body = fb.get(3, 2).unwrap();
    assert_eq!(body.ch, '█');
    assert!(!body.style.bold);

    assert_eq!(fb.get(9, 4).unwrap().ch, '●');
    assert_eq!(fb.get(10, 4).unwrap().ch, '●');
    assert_eq!(fb.get(1, 1).unwrap().ch, '·');
}

#[test]
fn term_view_centers_board_by_default_on_tall_viewports() {
    let state = sample_state();
    let board = Board::from_state(&state, INFO);
    let fb = GameView::default().render(&board, &hud(&state, PlayStatus::Running), Viewport::new(12, 10));

    // start_y = (10 - 6) / 2 = 2
    assert_eq!(fb.get(0, 2).unwrap().ch, '┌');
}

#[test]
fn term_view_can_anchor_board_to_top() {
    let state = sample_state();
    let board = Board::from_state(&state, INFO);
    let view = GameView::default().with_anchor_y(AnchorY::Top);
    let fb = view.render(&board, &hud(&state, PlayStatus::Running), Viewport::new(12, 10));

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
}

#[test]
fn term_view_draws_side_panel_when_wide_enough() {
    let state = sample_state();
    let board = Board::from_state(&state, INFO);
    let view = GameView::default();

    let text = view
        .render(&board, &hud(&state, PlayStatus::Running), Viewport::new(40, 14))
        .to_text();
    assert!(text.contains("LENGTH"));
    assert!(text.contains("HEADING"));
    assert!(text.contains("east"));

    let narrow = view
        .render(&board, &hud(&state, PlayStatus::Running), Viewport::new(12, 14))
        .to_text();
    assert!(!narrow.contains("LENGTH"));
}

#[test]
fn term_view_shows_game_over_overlay() {
    let state = sample_state();
    let board = Board::from_state(&state, INFO);
    let text = GameView::default()
        .render(&board, &hud(&state, PlayStatus::GameOver), Viewport::new(12, 6))
        .to_text();
    assert!(text.contains("GAME OVER"));
}

#[test]
fn delta_updated_board_renders_like_a_fresh_paint() {
    let state = sample_state();
    let mut board = Board::from_state(&state, INFO);
    let view = GameView::default();
    let vp = Viewport::new(30, 8);

    let tick = state.tick(INFO).unwrap();
    board.apply(tick.delta());

    let next = tick.into_state();
    let incremental = view.render(&board, &hud(&next, PlayStatus::Running), vp);
    let fresh = view.render(&Board::from_state(&next, INFO), &hud(&next, PlayStatus::Running), vp);
    assert_eq!(incremental, fresh);
}
