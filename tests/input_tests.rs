//! Input integration: key presses feeding the engine through the turn buffer

use crossterm::event::{KeyCode, KeyEvent};

use tui_snake::core::{GameState, SimpleRng, SnakeSeq, Tick};
use tui_snake::input::{handle_key_event, TurnBuffer};
use tui_snake::types::{BoardInfo, GameAction, Movement, Point};

fn press(buf: &mut TurnBuffer, code: KeyCode, current: Movement) -> bool {
    match handle_key_event(KeyEvent::from(code)) {
        Some(GameAction::Turn(m)) => buf.push(m, current),
        _ => false,
    }
}

#[test]
fn test_quick_u_turn_survives() {
    let bi = BoardInfo::new(8, 8);
    let snake = SnakeSeq::from_cells(&[Point::new(4, 4), Point::new(4, 3), Point::new(4, 2)]).unwrap();
    let mut gs = GameState::from_parts(bi, snake, Point::new(8, 8), Movement::East, SimpleRng::new(5)).unwrap();
    let mut turns = TurnBuffer::new();

    // Up then left inside a single tick.
    assert!(press(&mut turns, KeyCode::Up, gs.heading()));
    assert!(press(&mut turns, KeyCode::Left, gs.heading()));

    for expected in [Point::new(3, 4), Point::new(3, 3)] {
        let heading = turns.next_heading(gs.heading());
        let tick = gs.with_heading(heading).tick(bi).unwrap();
        assert!(matches!(tick, Tick::Alive { .. }));
        gs = tick.into_state();
        assert_eq!(gs.snake().head(), expected);
    }
}

#[test]
fn test_direct_reversal_is_filtered() {
    let mut turns = TurnBuffer::new();
    assert!(!press(&mut turns, KeyCode::Left, Movement::East));
    assert!(!press(&mut turns, KeyCode::Char('a'), Movement::East));
    assert_eq!(turns.next_heading(Movement::East), Movement::East);
}

#[test]
fn test_non_turn_keys_do_not_queue() {
    let mut turns = TurnBuffer::new();
    assert!(!press(&mut turns, KeyCode::Char('p'), Movement::East));
    assert!(turns.is_empty());
}
