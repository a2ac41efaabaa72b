//! Keyboard input feeding the engine, tick by tick.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use tui_snake::core::{GameConfig, GameEngine, Snake};
use tui_snake::input::{handle_key_event, should_quit, TickInput};
use tui_snake::types::{Direction, GameAction, GameStatus, Position};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::from(code)
}

/// What the binary does once per tick interval.
fn drain_tick(input: &mut TickInput, game: &mut GameEngine<ChaCha8Rng>) {
    if input.take_restart() {
        game.reset();
        input.clear();
        return;
    }
    if let Some(direction) = input.take_turn() {
        game.queue_direction(direction);
    }
    game.tick();
}

fn game_at(segments: Vec<Position>, direction: Direction) -> GameEngine<ChaCha8Rng> {
    let config = GameConfig::new(10, 0).unwrap();
    let snake = Snake::from_segments(&config, segments, direction).unwrap();
    GameEngine::from_parts(config, snake, Position::new(8, 8), ChaCha8Rng::seed_from_u64(2)).unwrap()
}

#[test]
fn test_all_turn_key_families() {
    let families = [
        ([KeyCode::Up, KeyCode::Char('w'), KeyCode::Char('k')], Direction::North),
        ([KeyCode::Down, KeyCode::Char('s'), KeyCode::Char('j')], Direction::South),
        ([KeyCode::Left, KeyCode::Char('a'), KeyCode::Char('h')], Direction::West),
        ([KeyCode::Right, KeyCode::Char('d'), KeyCode::Char('l')], Direction::East),
    ];
    for (codes, direction) in families {
        for code in codes {
            assert_eq!(
                handle_key_event(key(code)),
                Some(GameAction::Turn(direction)),
                "{code:?}"
            );
        }
    }
    assert_eq!(handle_key_event(key(KeyCode::Char('r'))), Some(GameAction::Restart));
    assert_eq!(handle_key_event(key(KeyCode::Char('z'))), None);
}

#[test]
fn test_quit_keys() {
    assert!(should_quit(key(KeyCode::Char('q'))));
    assert!(should_quit(key(KeyCode::Esc)));
    assert!(should_quit(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)));
    assert!(!should_quit(key(KeyCode::Char('c'))));
    assert!(!should_quit(key(KeyCode::Up)));
}

#[test]
fn test_quick_double_turn_spans_two_ticks() {
    // Heading east; up then left typed within one tick.
    let mut game = game_at(vec![Position::new(4, 3), Position::new(4, 4)], Direction::East);
    let mut input = TickInput::new();
    input.handle_key_press(key(KeyCode::Up));
    input.handle_key_press(key(KeyCode::Left));

    drain_tick(&mut input, &mut game);
    assert_eq!(game.head(), Position::new(3, 4));
    drain_tick(&mut input, &mut game);
    assert_eq!(game.head(), Position::new(3, 3));
    assert_eq!(game.status(), GameStatus::Running);
}

#[test]
fn test_reverse_key_is_harmless() {
    let mut game = game_at(vec![Position::new(4, 3), Position::new(4, 4)], Direction::East);
    let mut input = TickInput::new();
    input.handle_key_press(key(KeyCode::Char('a')));

    drain_tick(&mut input, &mut game);
    assert_eq!(game.status(), GameStatus::Running);
    assert_eq!(game.head(), Position::new(4, 5));
}

#[test]
fn test_restart_key_after_game_over() {
    let mut game = game_at(vec![Position::new(1, 4)], Direction::North);
    let mut input = TickInput::new();

    drain_tick(&mut input, &mut game);
    assert_eq!(game.status(), GameStatus::Lost);

    input.handle_key_press(key(KeyCode::Char('r')));
    drain_tick(&mut input, &mut game);
    assert_eq!(game.status(), GameStatus::Running);
    assert_eq!(game.episode_id(), 1);
    assert_eq!(game.head(), Position::new(5, 5));
}
