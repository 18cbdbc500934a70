//! Terminal snake runner (default binary).
//!
//! Owns everything the core does not: the tick timer, keyboard input, the
//! board model the renderer paints from, and the terminal itself.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use tracing::{debug, info};

use tui_snake::core::{Board, CoreError, GameState, Tick};
use tui_snake::input::{handle_key_event, should_quit, TurnBuffer};
use tui_snake::term::{FrameBuffer, GameView, HudInfo, PlayStatus, TerminalRenderer, Viewport};
use tui_snake::types::{BoardInfo, GameAction};
use tui_snake::{logging, GameConfig};

fn main() -> Result<()> {
    let config = GameConfig::from_env();
    logging::init(config.log_path.as_deref())?;

    // Reject an unusable board before taking over the terminal.
    let game = Game::new(config.board, config.seed)?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config, game);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

/// One game instance plus the loop-side state around it.
struct Game {
    info: BoardInfo,
    seed: u32,
    state: GameState,
    board: Board,
    status: PlayStatus,
    turns: TurnBuffer,
}

impl Game {
    fn new(info: BoardInfo, seed: u32) -> Result<Self, CoreError> {
        let state = GameState::new(info, seed)?;
        let board = Board::from_state(&state, info);
        Ok(Self {
            info,
            seed,
            state,
            board,
            status: PlayStatus::Running,
            turns: TurnBuffer::new(),
        })
    }

    /// New game seeded from where the generator left off.
    fn restart(&mut self) -> Result<(), CoreError> {
        let seed = self.state.rng().state();
        info!(seed, "restarting");
        *self = Self::new(self.info, seed)?;
        Ok(())
    }

    fn handle(&mut self, action: GameAction) -> Result<()> {
        match action {
            GameAction::Turn(m) => {
                if self.status == PlayStatus::Running && !self.turns.push(m, self.state.heading()) {
                    debug!(turn = m.as_str(), "turn ignored");
                }
            }
            GameAction::Pause => {
                self.status = match self.status {
                    PlayStatus::Running => PlayStatus::Paused,
                    PlayStatus::Paused => PlayStatus::Running,
                    other => other,
                };
            }
            GameAction::Restart => self.restart()?,
        }
        Ok(())
    }

    fn step(&mut self) -> Result<()> {
        if self.status != PlayStatus::Running {
            return Ok(());
        }

        let heading = self.turns.next_heading(self.state.heading());
        self.state = self.state.clone().with_heading(heading);
        match self.state.clone().tick(self.info) {
            Ok(Tick::Alive { state, delta, .. }) => {
                self.board.apply(&delta);
                self.state = state;
            }
            Ok(Tick::Collided { state, .. }) => {
                self.state = state;
                self.status = PlayStatus::GameOver;
            }
            Err(CoreError::BoardFull { len, .. }) => {
                info!(len, "snake filled the board");
                self.board.apply(&self.state.filling_delta(self.info));
                self.status = PlayStatus::BoardFull;
            }
            Err(e) => return Err(e.into()),
        }
        Ok(())
    }

    fn hud(&self) -> HudInfo {
        let mut hud = HudInfo::from_state(&self.state, self.seed, self.status);
        if self.status == PlayStatus::BoardFull {
            hud.length = self.board.snake_len();
        }
        hud
    }
}

fn run(term: &mut TerminalRenderer, config: &GameConfig, mut game: Game) -> Result<()> {
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);

    let tick_duration = Duration::from_millis(config.tick_ms as u64);
    let mut last_tick = Instant::now();

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&game.board, &game.hud(), Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        info!(len = game.state.snake().len(), "quit");
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        game.handle(action)?;
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            game.step()?;
        }
    }
}
