use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::game::{Grid, Snapshot};
use crate::metrics::GameMetrics;

/// What occupies one drawn cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKind {
    Empty,
    Apple,
    Body,
    Head,
}

/// Classify every visible cell. Later layers win: apple, then body, then head.
pub fn cell_map(snapshot: &Snapshot<'_>, grid: &Grid) -> Vec<Vec<CellKind>> {
    let mut cells = vec![vec![CellKind::Empty; grid.visible_cols()]; grid.visible_rows()];

    if let Some((col, row)) = grid.cell_of(snapshot.apple) {
        cells[row][col] = CellKind::Apple;
    }
    // The grow sentinel and a head past the wall have no cell and are skipped.
    for &segment in &snapshot.segments[1..] {
        if let Some((col, row)) = grid.cell_of(segment) {
            cells[row][col] = CellKind::Body;
        }
    }
    if let Some((col, row)) = grid.cell_of(snapshot.head()) {
        cells[row][col] = CellKind::Head;
    }

    cells
}

pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(
        &self,
        frame: &mut Frame,
        snapshot: &Snapshot<'_>,
        grid: &Grid,
        metrics: &GameMetrics,
    ) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Game area
                Constraint::Length(3), // Footer
            ])
            .split(frame.area());

        frame.render_widget(self.render_stats(snapshot, metrics), chunks[0]);

        if snapshot.is_game_over() {
            frame.render_widget(self.render_game_over(snapshot), chunks[1]);
        } else {
            frame.render_widget(self.render_grid(snapshot, grid), chunks[1]);
        }

        frame.render_widget(self.render_controls(snapshot), chunks[2]);
    }

    /// Title card shown before the first run
    pub fn render_intro(&self, frame: &mut Frame) {
        let text = vec![
            Line::from(""),
            Line::from(vec![Span::styled(
                "S N A K E",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            )]),
            Line::from(""),
            Line::from(vec![Span::styled(
                "Eat the apples. Avoid the walls and your own tail.",
                Style::default().fg(Color::Gray),
            )]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Press ", Style::default().fg(Color::Gray)),
                Span::styled(
                    "Enter",
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(" to start", Style::default().fg(Color::Gray)),
            ]),
        ];

        let title = Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .border_style(Style::default().fg(Color::Green)),
        );
        frame.render_widget(title, frame.area());
    }

    fn render_grid(&self, snapshot: &Snapshot<'_>, grid: &Grid) -> Paragraph<'static> {
        let lines: Vec<Line> = cell_map(snapshot, grid)
            .into_iter()
            .map(|row| Line::from(row.into_iter().map(cell_span).collect::<Vec<_>>()))
            .collect();

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

    fn render_stats(&self, snapshot: &Snapshot<'_>, metrics: &GameMetrics) -> Paragraph<'static> {
        let text = vec![Line::from(vec![
            Span::styled("SCORE: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                snapshot.score.to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("    "),
            Span::styled("Ticks: ", Style::default().fg(Color::Yellow)),
            Span::styled(snapshot.ticks.to_string(), Style::default().fg(Color::White)),
            Span::raw("    "),
            Span::styled("Time: ", Style::default().fg(Color::Yellow)),
            Span::styled(metrics.format_time(), Style::default().fg(Color::White)),
            Span::raw("    "),
            Span::styled("Best: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                metrics.best_score.to_string(),
                Style::default().fg(Color::White),
            ),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }

    fn render_game_over(&self, snapshot: &Snapshot<'_>) -> Paragraph<'static> {
        let cause = snapshot
            .last_collision
            .map(|kind| kind.describe())
            .unwrap_or("crashed");

        let text = vec![
            Line::from(""),
            Line::from(vec![Span::styled(
                "GAME IS OVER!!",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )]),
            Line::from(vec![Span::styled(
                format!("The snake {}.", cause),
                Style::default().fg(Color::Gray),
            )]),
            Line::from(""),
            Line::from(vec![
                Span::styled("YOUR SCORE IS ", Style::default().fg(Color::Green)),
                Span::styled(
                    snapshot.score.to_string(),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(""),
            Line::from(vec![
                Span::styled("To PLAY Again Press ", Style::default().fg(Color::Blue)),
                Span::styled(
                    "ENTER",
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(" or To EXIT Press ", Style::default().fg(Color::Blue)),
                Span::styled(
                    "ESCAPE",
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                ),
            ]),
        ];

        Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red)),
        )
    }

    fn render_controls(&self, snapshot: &Snapshot<'_>) -> Paragraph<'static> {
        let text = if snapshot.is_game_over() {
            vec![Line::from(vec![
                Span::styled("Enter", Style::default().fg(Color::Green)),
                Span::raw(" to restart | "),
                Span::styled("Esc", Style::default().fg(Color::Red)),
                Span::raw(" to quit"),
            ])]
        } else {
            vec![Line::from(vec![
                Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
                Span::raw(" or "),
                Span::styled("WASD", Style::default().fg(Color::Cyan)),
                Span::raw(" to move | "),
                Span::styled("Esc", Style::default().fg(Color::Red)),
                Span::raw(" to quit"),
            ])]
        };

        Paragraph::new(text).alignment(Alignment::Center)
    }
}

fn cell_span(kind: CellKind) -> Span<'static> {
    match kind {
        CellKind::Head => Span::styled(
            "■ ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        CellKind::Body => Span::styled("□ ", Style::default().fg(Color::Green)),
        CellKind::Apple => Span::styled(
            "O ",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        CellKind::Empty => Span::styled(". ", Style::default().fg(Color::DarkGray)),
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{CollisionKind, Direction, Position, RunState, GROWTH_SENTINEL};
    use ratatui::{backend::TestBackend, Terminal};

    fn snapshot(segments: &[Position], run_state: RunState) -> Snapshot<'_> {
        Snapshot {
            segments,
            heading: Direction::Down,
            apple: Position::new(160, 160),
            score: segments.len() - 2,
            ticks: 4,
            run_state,
            last_collision: match run_state {
                RunState::Running => None,
                RunState::PausedGameOver => Some(CollisionKind::Wall),
            },
        }
    }

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_cell_map_layers() {
        let grid = Grid::new(1000, 500, 40);
        let segments = [Position::new(40, 80), Position::new(40, 40)];
        let snap = snapshot(&segments, RunState::Running);

        let cells = cell_map(&snap, &grid);

        assert_eq!(cells.len(), 13);
        assert_eq!(cells[0].len(), 25);
        assert_eq!(cells[2][1], CellKind::Head);
        assert_eq!(cells[1][1], CellKind::Body);
        assert_eq!(cells[4][4], CellKind::Apple);
        assert_eq!(cells[0][0], CellKind::Empty);
    }

    #[test]
    fn test_cell_map_skips_off_grid_segments() {
        let grid = Grid::new(1000, 500, 40);
        let segments = [Position::new(160, 160), Position::new(160, 120), GROWTH_SENTINEL];
        let snap = snapshot(&segments, RunState::Running);

        let cells = cell_map(&snap, &grid);

        // Head drawn over the apple it just reached
        assert_eq!(cells[4][4], CellKind::Head);
        let bodies = cells.iter().flatten().filter(|&&c| c == CellKind::Body).count();
        assert_eq!(bodies, 1);
    }

    #[test]
    fn test_render_running_frame() {
        let grid = Grid::new(1000, 500, 40);
        let segments = [Position::new(40, 80), Position::new(40, 40)];
        let snap = snapshot(&segments, RunState::Running);
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();

        terminal
            .draw(|frame| Renderer::new().render(frame, &snap, &grid, &GameMetrics::new()))
            .unwrap();

        let text = screen_text(&terminal);
        assert!(text.contains("SCORE: 0"));
        assert!(text.contains("Snake"));
        assert!(!text.contains("GAME IS OVER"));
    }

    #[test]
    fn test_render_game_over_frame() {
        let grid = Grid::new(1000, 500, 40);
        let segments = [
            Position::new(-40, 80),
            Position::new(0, 80),
            Position::new(40, 80),
        ];
        let snap = snapshot(&segments, RunState::PausedGameOver);
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();

        terminal
            .draw(|frame| Renderer::new().render(frame, &snap, &grid, &GameMetrics::new()))
            .unwrap();

        let text = screen_text(&terminal);
        assert!(text.contains("GAME IS OVER!!"));
        assert!(text.contains("YOUR SCORE IS 1"));
        assert!(text.contains("hit the wall"));
    }
}
