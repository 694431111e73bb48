use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    tty::IsTty,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::time::Duration;

use crate::api::ApiClient;
use crate::config::Config;
use crate::events::EventHandler;
use crate::tea::message::{BannerMessage, Message, PostsMessage, SystemMessage};
use crate::tea::{update, CommandExecutor, Model};
use crate::theme::Theme;
use crate::ui;

pub struct App {
    model: Model,
    theme: Theme,
    event_handler: EventHandler,
    executor: CommandExecutor,
    message_rx: mpsc::UnboundedReceiver<Message>,
}

impl App {
    pub fn new(config: Config, theme: Theme) -> Result<Self> {
        let client = Arc::new(ApiClient::from_config(&config.api)?);
        let (message_tx, message_rx) = mpsc::unbounded_channel();

        Ok(Self {
            model: Model::new(&config),
            theme,
            event_handler: EventHandler::new(),
            executor: CommandExecutor::new(client, message_tx),
            message_rx,
        })
    }

    pub async fn run(&mut self) -> Result<()> {
        if !io::stdout().is_tty() {
            return Err(anyhow::anyhow!(
                "Boletim requires a proper terminal (TTY) to run. Please run this application in a terminal emulator."
            ));
        }

        // Setup terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        // Run the main loop
        let result = self.run_loop(&mut terminal).await;

        // Restore terminal
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result
    }

    async fn run_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    ) -> Result<()> {
        let tick_rate = Duration::from_millis(50);

        // Initial data loads, mirroring the mount-time fetches
        self.dispatch(PostsMessage::Load.into()).await;
        self.dispatch(BannerMessage::Load.into()).await;

        loop {
            // Apply fetch results that arrived since the last frame
            while let Ok(message) = self.message_rx.try_recv() {
                self.dispatch(message).await;
            }

            // Draw UI
            terminal.draw(|f| ui::draw(f, &self.model, &self.theme))?;

            // Handle events
            if event::poll(tick_rate)? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        if let Some(message) =
                            self.event_handler.handle_key_event(key, &self.model)
                        {
                            self.dispatch(message).await;
                        }
                    }
                    Event::Resize(width, height) => {
                        self.dispatch(SystemMessage::Resize(width, height).into())
                            .await;
                    }
                    _ => {}
                }
            }

            if self.model.should_quit() {
                break;
            }
        }

        Ok(())
    }

    /// Run one update cycle and execute the resulting commands
    async fn dispatch(&mut self, message: Message) {
        let result = update(self.model.clone(), message);
        self.model = result.model;

        for command in result.commands {
            self.executor.execute(command).await;
        }
    }
}
