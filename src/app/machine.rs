use std::time::Duration;

use tracing::{debug, info};

use super::mode::{wrap_cursor, MenuItem, Mode, OptionItem};
use super::speed::TickSpeed;
use crate::game::{Direction, GameConfig, SnakeGame, StepOutcome};
use crate::metrics::GameMetrics;

/// Abstract input the state machine understands
///
/// Inputs that make no sense for the current mode are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    MoveCursor(i32),
    Confirm,
    Cancel,
    SetHeading(Direction),
    TogglePause,
    Restart,
    PointerSelect(usize),
    AdjustSpeed(i32),
}

/// Request from the state machine to whoever owns the tick source and process
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickCommand {
    /// Begin ticking at the given interval
    Start(Duration),
    /// Stop ticking
    Stop,
    /// Use a new interval from the next tick on
    SetInterval(Duration),
    /// Exit the process
    Quit,
}

/// The menu shell around the snake simulation
pub struct App {
    config: GameConfig,
    mode: Mode,
    game: SnakeGame,
    metrics: GameMetrics,
    speed: TickSpeed,
    menu_cursor: usize,
    option_cursor: usize,
}

impl App {
    /// `metrics` carries the session high score; the app updates it whenever
    /// a game ends.
    pub fn new(config: GameConfig, metrics: GameMetrics) -> Self {
        let game = SnakeGame::new(&config);
        Self::with_game(config, game, metrics)
    }

    pub fn with_game(config: GameConfig, game: SnakeGame, metrics: GameMetrics) -> Self {
        Self {
            speed: TickSpeed::from_config(&config),
            config,
            mode: Mode::Menu,
            game,
            metrics,
            menu_cursor: 0,
            option_cursor: 0,
        }
    }

    /// Apply one input event
    pub fn handle(&mut self, input: Input) -> Option<TickCommand> {
        let before = self.mode;
        let command = match self.mode {
            Mode::Menu => self.handle_menu(input),
            Mode::Options => self.handle_options(input),
            Mode::HighScoreView => self.handle_high_score(input),
            Mode::Playing => self.handle_playing(input),
            Mode::Paused => self.handle_paused(input),
            Mode::GameOver => self.handle_game_over(input),
        };

        if self.mode != before {
            debug!(from = ?before, to = ?self.mode, ?input, "Mode transition");
        }
        command
    }

    /// Advance the simulation by one tick
    pub fn on_tick(&mut self) -> Option<TickCommand> {
        if self.mode != Mode::Playing {
            return None;
        }

        match self.game.advance() {
            StepOutcome::Collision => {
                let score = self.game.current_score();
                let new_record = self.metrics.on_game_over(score);
                info!(
                    score,
                    high_score = self.metrics.high_score,
                    new_record,
                    "Game over"
                );
                self.mode = Mode::GameOver;
                Some(TickCommand::Stop)
            }
            StepOutcome::Ate => {
                debug!(score = self.game.current_score(), "Apple eaten");
                None
            }
            StepOutcome::Continue => None,
        }
    }

    fn handle_menu(&mut self, input: Input) -> Option<TickCommand> {
        match input {
            Input::MoveCursor(delta) => {
                self.menu_cursor = wrap_cursor(self.menu_cursor, delta, MenuItem::ALL.len());
                None
            }
            Input::Confirm => self.select_menu_item(),
            Input::PointerSelect(index) if index < MenuItem::ALL.len() => {
                self.menu_cursor = index;
                self.select_menu_item()
            }
            _ => None,
        }
    }

    fn select_menu_item(&mut self) -> Option<TickCommand> {
        match MenuItem::ALL[self.menu_cursor] {
            MenuItem::Play => self.start_game(),
            MenuItem::Options => {
                self.option_cursor = 0;
                self.mode = Mode::Options;
                None
            }
            MenuItem::HighScore => {
                self.mode = Mode::HighScoreView;
                None
            }
            MenuItem::Quit => {
                info!("Quit selected");
                Some(TickCommand::Quit)
            }
        }
    }

    fn handle_options(&mut self, input: Input) -> Option<TickCommand> {
        match input {
            Input::MoveCursor(delta) => {
                self.option_cursor =
                    wrap_cursor(self.option_cursor, delta, OptionItem::ALL.len());
                None
            }
            Input::AdjustSpeed(steps) if self.selected_option() == OptionItem::Speed => {
                if !self.speed.adjust(steps) {
                    return None;
                }
                info!(tick_ms = self.speed.millis(), "Speed changed");
                Some(TickCommand::SetInterval(self.speed.interval()))
            }
            Input::Confirm if self.selected_option() == OptionItem::Back => {
                self.mode = Mode::Menu;
                None
            }
            Input::PointerSelect(index) if index < OptionItem::ALL.len() => {
                self.option_cursor = index;
                if self.selected_option() == OptionItem::Back {
                    self.mode = Mode::Menu;
                }
                None
            }
            Input::Cancel => {
                self.mode = Mode::Menu;
                None
            }
            _ => None,
        }
    }

    fn handle_high_score(&mut self, input: Input) -> Option<TickCommand> {
        if input == Input::Cancel {
            self.mode = Mode::Menu;
        }
        None
    }

    fn handle_playing(&mut self, input: Input) -> Option<TickCommand> {
        match input {
            Input::SetHeading(direction) => {
                self.game.set_heading(direction);
                None
            }
            Input::TogglePause => {
                self.metrics.on_pause();
                self.mode = Mode::Paused;
                None
            }
            Input::Cancel => self.abandon_game(),
            _ => None,
        }
    }

    fn handle_paused(&mut self, input: Input) -> Option<TickCommand> {
        match input {
            Input::TogglePause => {
                self.metrics.on_resume();
                self.mode = Mode::Playing;
                None
            }
            Input::Cancel => self.abandon_game(),
            _ => None,
        }
    }

    fn handle_game_over(&mut self, input: Input) -> Option<TickCommand> {
        match input {
            Input::Restart => self.start_game(),
            Input::Cancel => {
                self.mode = Mode::Menu;
                None
            }
            _ => None,
        }
    }

    fn start_game(&mut self) -> Option<TickCommand> {
        self.game.reset(self.config.initial_snake_length);
        self.metrics.on_game_start();
        self.mode = Mode::Playing;
        info!(tick_ms = self.speed.millis(), "Game started");
        Some(TickCommand::Start(self.speed.interval()))
    }

    fn abandon_game(&mut self) -> Option<TickCommand> {
        info!(score = self.game.current_score(), "Game abandoned");
        self.metrics.on_game_abandoned();
        self.mode = Mode::Menu;
        Some(TickCommand::Stop)
    }

    fn selected_option(&self) -> OptionItem {
        OptionItem::ALL[self.option_cursor]
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn game(&self) -> &SnakeGame {
        &self.game
    }

    pub fn metrics(&self) -> &GameMetrics {
        &self.metrics
    }

    pub fn high_score(&self) -> u32 {
        self.metrics.high_score
    }

    pub fn speed(&self) -> TickSpeed {
        self.speed
    }

    pub fn menu_cursor(&self) -> usize {
        self.menu_cursor
    }

    pub fn option_cursor(&self) -> usize {
        self.option_cursor
    }

    #[cfg(test)]
    pub(crate) fn game_mut(&mut self) -> &mut SnakeGame {
        &mut self.game
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Position;

    fn app() -> App {
        let config = GameConfig::default();
        let game = SnakeGame::with_seed(&config, 42);
        App::with_game(config, game, GameMetrics::new())
    }

    fn playing_app() -> App {
        let mut app = app();
        app.handle(Input::Confirm);
        assert_eq!(app.mode(), Mode::Playing);
        // Keep the apple out of the snake's row
        app.game_mut().place_apple(Position::new(0, 0));
        app
    }

    fn crash(app: &mut App) {
        while app.mode() == Mode::Playing {
            app.on_tick();
        }
    }

    #[test]
    fn test_initial_state() {
        let app = app();
        assert_eq!(app.mode(), Mode::Menu);
        assert_eq!(app.menu_cursor(), 0);
        assert_eq!(app.high_score(), 0);
        assert_eq!(app.speed().millis(), 100);
    }

    #[test]
    fn test_menu_cursor_wraps() {
        let mut app = app();
        assert_eq!(app.handle(Input::MoveCursor(-1)), None);
        assert_eq!(app.menu_cursor(), 3);
        app.handle(Input::MoveCursor(1));
        assert_eq!(app.menu_cursor(), 0);
        app.handle(Input::MoveCursor(1));
        assert_eq!(app.menu_cursor(), 1);
    }

    #[test]
    fn test_play_starts_ticks() {
        let mut app = app();
        let command = app.handle(Input::Confirm);
        assert_eq!(command, Some(TickCommand::Start(Duration::from_millis(100))));
        assert_eq!(app.mode(), Mode::Playing);
        assert_eq!(app.game().current_score(), 0);
    }

    #[test]
    fn test_menu_navigation() {
        let mut app = app();
        app.handle(Input::MoveCursor(1));
        assert_eq!(app.handle(Input::Confirm), None);
        assert_eq!(app.mode(), Mode::Options);

        app.handle(Input::Cancel);
        assert_eq!(app.mode(), Mode::Menu);

        app.handle(Input::MoveCursor(1));
        app.handle(Input::Confirm);
        assert_eq!(app.mode(), Mode::HighScoreView);

        // Only cancel leaves the high score view
        app.handle(Input::Confirm);
        assert_eq!(app.mode(), Mode::HighScoreView);
        app.handle(Input::Cancel);
        assert_eq!(app.mode(), Mode::Menu);

        app.handle(Input::MoveCursor(1));
        assert_eq!(app.handle(Input::Confirm), Some(TickCommand::Quit));
    }

    #[test]
    fn test_pointer_select() {
        let mut app = app();
        assert_eq!(app.handle(Input::PointerSelect(9)), None);
        assert_eq!(app.mode(), Mode::Menu);

        app.handle(Input::PointerSelect(2));
        assert_eq!(app.menu_cursor(), 2);
        assert_eq!(app.mode(), Mode::HighScoreView);
    }

    #[test]
    fn test_options_speed_clamps() {
        let mut app = app();
        app.handle(Input::PointerSelect(1));
        assert_eq!(app.mode(), Mode::Options);
        assert_eq!(app.option_cursor(), 0);

        for _ in 0..10 {
            app.handle(Input::AdjustSpeed(-1));
            assert!(app.speed().millis() >= 30);
        }
        assert_eq!(app.speed().millis(), 30);
        assert_eq!(app.handle(Input::AdjustSpeed(-1)), None);

        assert_eq!(
            app.handle(Input::AdjustSpeed(1)),
            Some(TickCommand::SetInterval(Duration::from_millis(40)))
        );
    }

    #[test]
    fn test_speed_only_adjusts_on_speed_item() {
        let mut app = app();
        app.handle(Input::PointerSelect(1));
        app.handle(Input::MoveCursor(1));
        assert_eq!(app.option_cursor(), 1);

        assert_eq!(app.handle(Input::AdjustSpeed(1)), None);
        assert_eq!(app.speed().millis(), 100);

        app.handle(Input::MoveCursor(1));
        assert_eq!(app.option_cursor(), 0);
    }

    #[test]
    fn test_options_back() {
        let mut app = app();
        app.handle(Input::PointerSelect(1));

        // Confirm on the speed item does nothing
        app.handle(Input::Confirm);
        assert_eq!(app.mode(), Mode::Options);

        app.handle(Input::MoveCursor(-1));
        app.handle(Input::Confirm);
        assert_eq!(app.mode(), Mode::Menu);

        app.handle(Input::PointerSelect(1));
        app.handle(Input::PointerSelect(1));
        assert_eq!(app.mode(), Mode::Menu);
    }

    #[test]
    fn test_options_cursor_resets_on_open() {
        let mut app = app();
        app.handle(Input::PointerSelect(1));
        app.handle(Input::MoveCursor(1));
        app.handle(Input::Cancel);
        app.handle(Input::PointerSelect(1));
        assert_eq!(app.option_cursor(), 0);
    }

    #[test]
    fn test_speed_applies_to_next_game() {
        let mut app = app();
        app.handle(Input::PointerSelect(1));
        app.handle(Input::AdjustSpeed(1));
        app.handle(Input::AdjustSpeed(1));
        app.handle(Input::Cancel);

        assert_eq!(
            app.handle(Input::PointerSelect(0)),
            Some(TickCommand::Start(Duration::from_millis(120)))
        );
    }

    #[test]
    fn test_pause_toggle() {
        let mut app = playing_app();
        app.handle(Input::TogglePause);
        assert_eq!(app.mode(), Mode::Paused);

        // Ticks and steering are ignored while paused
        let head = app.game().snake().head();
        assert_eq!(app.on_tick(), None);
        app.handle(Input::SetHeading(Direction::Up));
        assert_eq!(app.game().snake().head(), head);
        assert_eq!(app.game().snake().pending_direction, None);

        app.handle(Input::TogglePause);
        assert_eq!(app.mode(), Mode::Playing);
    }

    #[test]
    fn test_pause_freezes_game_clock() {
        let mut app = playing_app();
        app.handle(Input::TogglePause);
        let paused_at = app.metrics().elapsed();
        std::thread::sleep(Duration::from_millis(30));
        assert_eq!(app.metrics().elapsed(), paused_at);

        app.handle(Input::TogglePause);
        std::thread::sleep(Duration::from_millis(30));
        assert!(app.metrics().elapsed() >= paused_at + Duration::from_millis(30));
    }

    #[test]
    fn test_abandoned_game_keeps_high_score() {
        let mut app = playing_app();
        let ahead = app.game().snake().head().moved_in_direction(Direction::Right);
        app.game_mut().place_apple(ahead);
        app.on_tick();
        assert_eq!(app.game().current_score(), 1);
        app.handle(Input::Cancel);
        assert_eq!(app.mode(), Mode::Menu);
        assert_eq!(app.high_score(), 0);
        assert_eq!(app.metrics().games_played, 0);

        // Same from the pause screen
        app.handle(Input::Confirm);
        let ahead = app.game().snake().head().moved_in_direction(Direction::Right);
        app.game_mut().place_apple(ahead);
        app.on_tick();
        assert_eq!(app.game().current_score(), 1);
        app.handle(Input::TogglePause);
        app.handle(Input::Cancel);
        assert_eq!(app.mode(), Mode::Menu);
        assert_eq!(app.high_score(), 0);
        assert_eq!(app.metrics().games_played, 0);

        // The clock stopped with the game
        let stopped_at = app.metrics().elapsed();
        std::thread::sleep(Duration::from_millis(10));
        assert_eq!(app.metrics().elapsed(), stopped_at);
    }

    #[test]
    fn test_cancel_stops_ticks() {
        let mut app = playing_app();
        assert_eq!(app.handle(Input::Cancel), Some(TickCommand::Stop));
        assert_eq!(app.mode(), Mode::Menu);

        let mut app = playing_app();
        app.handle(Input::TogglePause);
        assert_eq!(app.handle(Input::Cancel), Some(TickCommand::Stop));
        assert_eq!(app.mode(), Mode::Menu);
    }

    #[test]
    fn test_steering_while_playing() {
        let mut app = playing_app();
        app.handle(Input::SetHeading(Direction::Left));
        assert_eq!(app.game().snake().pending_direction, None);

        app.handle(Input::SetHeading(Direction::Down));
        app.on_tick();
        assert_eq!(app.game().snake().direction, Direction::Down);
    }

    #[test]
    fn test_collision_ends_game() {
        let mut app = playing_app();
        let mut last = None;
        while app.mode() == Mode::Playing {
            last = app.on_tick();
        }
        assert_eq!(last, Some(TickCommand::Stop));
        assert_eq!(app.mode(), Mode::GameOver);
        assert_eq!(app.metrics().games_played, 1);

        // Ticks after game over do nothing
        assert_eq!(app.on_tick(), None);
    }

    #[test]
    fn test_high_score_updates_on_game_over() {
        let mut app = playing_app();
        let ahead = app.game().snake().head().moved_in_direction(Direction::Right);
        app.game_mut().place_apple(ahead);
        app.on_tick();
        assert_eq!(app.game().current_score(), 1);
        // Not updated until the game ends
        assert_eq!(app.high_score(), 0);

        app.game_mut().place_apple(Position::new(0, 0));
        crash(&mut app);
        assert_eq!(app.high_score(), 1);

        // A worse game never lowers it
        app.handle(Input::Restart);
        app.game_mut().place_apple(Position::new(0, 0));
        crash(&mut app);
        assert_eq!(app.high_score(), 1);
    }

    #[test]
    fn test_game_over_transitions() {
        let mut app = playing_app();
        crash(&mut app);

        // Directional input and confirm are ignored
        assert_eq!(app.handle(Input::SetHeading(Direction::Up)), None);
        assert_eq!(app.handle(Input::Confirm), None);
        assert_eq!(app.mode(), Mode::GameOver);

        let command = app.handle(Input::Restart);
        assert_eq!(command, Some(TickCommand::Start(Duration::from_millis(100))));
        assert_eq!(app.mode(), Mode::Playing);
        assert_eq!(app.game().current_score(), 0);
        assert!(!app.game().is_game_over());

        app.game_mut().place_apple(Position::new(0, 0));
        crash(&mut app);
        app.handle(Input::Cancel);
        assert_eq!(app.mode(), Mode::Menu);
    }

    #[test]
    fn test_menu_ignores_game_inputs() {
        let mut app = app();
        for input in [
            Input::Cancel,
            Input::TogglePause,
            Input::Restart,
            Input::AdjustSpeed(1),
            Input::SetHeading(Direction::Up),
        ] {
            assert_eq!(app.handle(input), None);
            assert_eq!(app.mode(), Mode::Menu);
        }
        assert_eq!(app.on_tick(), None);
        assert_eq!(app.speed().millis(), 100);
    }
}
