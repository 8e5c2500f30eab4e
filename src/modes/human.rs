use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use log::info;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{Stderr, stderr};
use tokio::time::{MissedTickBehavior, interval, sleep};

use crate::audio::{CueSink, TerminalCues};
use crate::game::{Command, CommandOutcome, GameConfig, GameController};
use crate::input::InputHandler;
use crate::metrics::GameMetrics;
use crate::render::Renderer;

/// Interactive play in the terminal
pub struct HumanMode {
    controller: GameController,
    metrics: GameMetrics,
    renderer: Renderer,
    input_handler: InputHandler,
    cues: Box<dyn CueSink>,
    in_intro: bool,
    should_quit: bool,
}

impl HumanMode {
    pub fn new(config: GameConfig) -> Self {
        let muted = !config.bell;
        Self::with_cues(config, Box::new(TerminalCues::new(stderr(), muted)))
    }

    pub fn with_cues(config: GameConfig, cues: Box<dyn CueSink>) -> Self {
        let in_intro = config.intro_ms > 0;
        Self {
            controller: GameController::new(config),
            metrics: GameMetrics::new(),
            renderer: Renderer::new(),
            input_handler: InputHandler::new(),
            cues,
            in_intro,
            should_quit: false,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        // Run game loop with cleanup
        let result = self.run_game_loop(&mut terminal).await;

        // Cleanup terminal
        self.cleanup_terminal(&mut terminal)?;

        result
    }

    async fn run_game_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        let config = self.controller.config().clone();
        let mut event_stream = EventStream::new();

        let mut tick_timer = interval(config.tick_interval());
        tick_timer.set_missed_tick_behavior(MissedTickBehavior::Delay);

        let mut render_timer = interval(config.render_interval());

        let intro = sleep(config.intro_duration());
        tokio::pin!(intro);

        info!(
            "starting {}x{} playfield, cell {}px, tick {}ms",
            config.width, config.height, config.cell_size, config.tick_ms
        );

        loop {
            tokio::select! {
                // Handle terminal events
                maybe_event = event_stream.next() => {
                    match maybe_event {
                        Some(event) => {
                            let event = event.context("Failed to read terminal event")?;
                            if self.handle_event(event) && !self.in_intro {
                                tick_timer.reset();
                            }
                        }
                        None => self.should_quit = true,
                    }
                }

                // Title card times out
                _ = &mut intro, if self.in_intro => {
                    self.end_intro();
                    tick_timer.reset();
                }

                // Game logic tick
                _ = tick_timer.tick() => {
                    if !self.in_intro {
                        self.update_game()?;
                    }
                }

                // Render frame
                _ = render_timer.tick() => {
                    self.metrics.update();
                    terminal.draw(|frame| {
                        if self.in_intro {
                            self.renderer.render_intro(frame);
                        } else {
                            let grid = self.controller.grid();
                            self.renderer.render(
                                frame,
                                &self.controller.snapshot(),
                                &grid,
                                &self.metrics,
                            );
                        }
                    }).context("Failed to draw frame")?;
                }

                // Handle Ctrl+C
                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                }
            }

            if self.should_quit {
                info!("quit requested");
                break;
            }
        }

        Ok(())
    }

    /// Returns true when the event started a new run and the tick clock should restart
    fn handle_event(&mut self, event: Event) -> bool {
        let Event::Key(key) = event else {
            return false;
        };
        let Some(command) = self.input_handler.handle_key_event(key) else {
            return false;
        };
        self.handle_command(command)
    }

    fn handle_command(&mut self, command: Command) -> bool {
        if self.in_intro {
            match command {
                Command::Quit => self.should_quit = true,
                Command::Confirm => {
                    self.end_intro();
                    return true;
                }
                Command::Move(_) => {}
            }
            return false;
        }

        match self.controller.handle(command) {
            CommandOutcome::Quit => {
                self.should_quit = true;
                false
            }
            CommandOutcome::Reset => {
                self.metrics.on_game_start();
                true
            }
            CommandOutcome::Turned(_) | CommandOutcome::Ignored => false,
        }
    }

    fn end_intro(&mut self) {
        self.in_intro = false;
        self.metrics.on_game_start();
        info!("intro finished, run started");
    }

    fn update_game(&mut self) -> Result<()> {
        let result = self.controller.tick();

        self.cues.play_all(&result.cues())?;

        if result.info.collision.is_some() {
            self.metrics.on_game_over(self.controller.score());
        }

        Ok(())
    }

    fn cleanup_terminal(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)
            .context("Failed to leave alternate screen")?;
        terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }
}
