use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

use crate::app::{App, MenuItem, Mode, OptionItem};
use crate::game::{Position, SnakeGame};

/// Draws the current mode of an [`App`] and remembers where the clickable
/// entries ended up so mouse clicks can be mapped back to them.
pub struct Renderer {
    targets: Vec<Rect>,
    /// Mode the targets were drawn for
    targets_mode: Option<Mode>,
}

impl Renderer {
    pub fn new() -> Self {
        Self {
            targets: Vec::new(),
            targets_mode: None,
        }
    }

    /// Screen areas of the selectable entries drawn in the last frame
    ///
    /// Empty unless that frame showed `mode`, so a click that lands before
    /// the next frame cannot pick an entry of a screen no longer shown.
    pub fn targets_for(&self, mode: Mode) -> &[Rect] {
        if self.targets_mode == Some(mode) {
            &self.targets
        } else {
            &[]
        }
    }

    pub fn render(&mut self, frame: &mut Frame, app: &App) {
        self.targets.clear();
        self.targets_mode = Some(app.mode());
        let area = frame.area();

        match app.mode() {
            Mode::Menu => self.render_menu(frame, area, app),
            Mode::Options => self.render_options(frame, area, app),
            Mode::HighScoreView => self.render_high_score(frame, area, app),
            Mode::Playing => self.render_game(frame, area, app),
            Mode::Paused => {
                self.render_game(frame, area, app);
                self.render_paused(frame, area);
            }
            Mode::GameOver => self.render_game_over(frame, area, app),
        }
    }

    fn render_menu(&mut self, frame: &mut Frame, area: Rect, app: &App) {
        render_title(frame, area, "SNAKE GAME", Color::Green, area.height / 5);

        let labels: Vec<String> = MenuItem::ALL
            .iter()
            .map(|item| item.label().to_string())
            .collect();
        self.render_items(frame, area, &labels, app.menu_cursor());

        render_help(
            frame,
            area,
            &[
                "Use UP/DOWN arrows and ENTER to select",
                "Or click on the options above",
            ],
        );
    }

    fn render_options(&mut self, frame: &mut Frame, area: Rect, app: &App) {
        render_title(frame, area, "OPTIONS", Color::Cyan, area.height / 5);

        let labels: Vec<String> = OptionItem::ALL
            .iter()
            .map(|item| match item {
                OptionItem::Speed => {
                    format!("Speed: {} ms (Lower=Faster)", app.speed().millis())
                }
                OptionItem::Back => "Back".to_string(),
            })
            .collect();
        self.render_items(frame, area, &labels, app.option_cursor());

        render_help(
            frame,
            area,
            &[
                "Use LEFT/RIGHT to change speed when selected",
                "Press ESC or Back to return to menu",
            ],
        );
    }

    fn render_high_score(&self, frame: &mut Frame, area: Rect, app: &App) {
        render_title(frame, area, "HIGH SCORE", Color::LightRed, area.height / 3);
        render_centered(
            frame,
            area,
            area.height / 2,
            Line::from(Span::styled(
                app.high_score().to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )),
        );
        render_help(frame, area, &["Press ESC to return to menu"]);
    }

    fn render_game_over(&self, frame: &mut Frame, area: Rect, app: &App) {
        render_title(frame, area, "GAME OVER", Color::Red, area.height / 3);
        render_centered(
            frame,
            area,
            area.height / 2,
            Line::from(vec![
                Span::styled("Your Score: ", Style::default().fg(Color::Yellow)),
                Span::styled(
                    app.game().current_score().to_string(),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
        );
        render_centered(
            frame,
            area,
            area.height / 2 + 2,
            Line::from(vec![
                Span::styled("Press ", Style::default().fg(Color::Gray)),
                Span::styled(
                    "R",
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(" to Restart or ", Style::default().fg(Color::Gray)),
                Span::styled(
                    "ESC",
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                ),
                Span::styled(" for Menu", Style::default().fg(Color::Gray)),
            ]),
        );
    }

    /// Draw selectable entries two rows apart from the middle of the screen
    fn render_items(&mut self, frame: &mut Frame, area: Rect, labels: &[String], cursor: usize) {
        for (i, label) in labels.iter().enumerate() {
            let style = if i == cursor {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };

            let row = area.height / 2 + (i as u16) * 2;
            let line = Line::from(Span::styled(label.clone(), style));
            if let Some(rect) = render_centered(frame, area, row, line) {
                self.targets.push(rect);
            }
        }
    }

    fn render_game(&self, frame: &mut Frame, area: Rect, app: &App) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Game area
                Constraint::Length(3), // Footer
            ])
            .split(area);

        let stats = self.render_stats(app);
        frame.render_widget(stats, chunks[0]);

        let grid = self.render_grid(app.game());
        frame.render_widget(grid, chunks[1]);

        let controls = self.render_controls();
        frame.render_widget(controls, chunks[2]);
    }

    fn render_grid(&self, game: &SnakeGame) -> Paragraph<'_> {
        let snake = game.snake();
        let mut lines = Vec::new();

        for y in 0..game.grid_height() {
            let mut spans = Vec::new();

            for x in 0..game.grid_width() {
                let pos = Position::new(x as i32, y as i32);

                let cell = if pos == snake.head() {
                    // Snake head - distinct color
                    Span::styled(
                        "■ ",
                        Style::default()
                            .fg(Color::LightGreen)
                            .add_modifier(Modifier::BOLD),
                    )
                } else if snake.occupies(pos) {
                    Span::styled("□ ", Style::default().fg(Color::Green))
                } else if game.apple() == Some(pos) {
                    Span::styled(
                        "● ",
                        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                    )
                } else {
                    Span::styled(". ", Style::default().fg(Color::DarkGray))
                };

                spans.push(cell);
            }

            lines.push(Line::from(spans));
        }

        Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Double)
                    .border_style(Style::default().fg(Color::White))
                    .title(" Snake "),
            )
            .alignment(Alignment::Center)
    }

    fn render_stats(&self, app: &App) -> Paragraph<'_> {
        let text = vec![Line::from(vec![
            Span::styled("Score: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                app.game().current_score().to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("    "),
            Span::styled("High Score: ", Style::default().fg(Color::Yellow)),
            Span::styled(app.high_score().to_string(), Style::default().fg(Color::White)),
            Span::raw("    "),
            Span::styled("Time: ", Style::default().fg(Color::Yellow)),
            Span::styled(app.metrics().format_time(), Style::default().fg(Color::White)),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }

    fn render_paused(&self, frame: &mut Frame, area: Rect) {
        let width = area.width.min(20);
        let height = area.height.min(3);
        let overlay = Rect::new(
            area.x + (area.width - width) / 2,
            area.y + (area.height - height) / 2,
            width,
            height,
        );

        let paused = Paragraph::new(Line::from(Span::styled(
            "PAUSED",
            Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::White)),
        );

        frame.render_widget(Clear, overlay);
        frame.render_widget(paused, overlay);
    }

    fn render_controls(&self) -> Paragraph<'_> {
        let text = vec![Line::from(vec![
            Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
            Span::raw(" or "),
            Span::styled("WASD", Style::default().fg(Color::Cyan)),
            Span::raw(" to move | "),
            Span::styled("P", Style::default().fg(Color::Cyan)),
            Span::raw(" to pause | "),
            Span::styled("ESC", Style::default().fg(Color::Red)),
            Span::raw(" for menu"),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

fn render_title(frame: &mut Frame, area: Rect, title: &str, color: Color, row: u16) {
    let line = Line::from(Span::styled(
        title.to_string(),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    ));
    render_centered(frame, area, row, line);
}

/// Help text on the last rows of the screen
fn render_help(frame: &mut Frame, area: Rect, lines: &[&str]) {
    let count = lines.len() as u16;
    for (i, text) in lines.iter().enumerate() {
        let row = area.height.saturating_sub(count + 1) + i as u16;
        let line = Line::from(Span::styled(
            text.to_string(),
            Style::default().fg(Color::Gray),
        ));
        render_centered(frame, area, row, line);
    }
}

/// Draw a single line horizontally centred at `row` (relative to `area`).
///
/// Returns the area actually covered by the text, or `None` if the row is
/// outside `area`.
fn render_centered(frame: &mut Frame, area: Rect, row: u16, line: Line<'static>) -> Option<Rect> {
    let rect = centered_line(area, row, line.width() as u16)?;
    frame.render_widget(Paragraph::new(line), rect);
    Some(rect)
}

fn centered_line(area: Rect, row: u16, width: u16) -> Option<Rect> {
    if row >= area.height || area.width == 0 {
        return None;
    }
    let width = width.clamp(1, area.width);
    Some(Rect::new(
        area.x + (area.width - width) / 2,
        area.y + row,
        width,
        1,
    ))
}
