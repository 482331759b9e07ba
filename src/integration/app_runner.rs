use color_eyre::eyre::Result;
use ratatui::layout::Rect;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::core::coordinator::Coordinator;
use crate::core::msg::Msg;
use crate::infrastructure::config::Config;
use crate::infrastructure::storage::KeyValueStorage;
use crate::infrastructure::tui::{Event, TuiLike};
use crate::repositories::user::UserRepository;

/// Drives the application: terminal events in, coordinator updates, frames
/// out. Runs until a quit message arrives or the event source runs dry.
pub struct AppRunner<'a, S, T> {
    coordinator: Coordinator<'a, S>,
    tui: T,
    msg_tx: UnboundedSender<Msg>,
    msg_rx: UnboundedReceiver<Msg>,
    should_quit: bool,
    should_suspend: bool,
}

impl<'a, S: KeyValueStorage, T: TuiLike> AppRunner<'a, S, T> {
    pub fn new(config: &Config, store: UserRepository<S>, tui: T) -> Self {
        let (msg_tx, msg_rx) = mpsc::unbounded_channel();
        let mut coordinator = Coordinator::new(store, config, msg_tx.clone());
        coordinator.init();
        Self {
            coordinator,
            tui,
            msg_tx,
            msg_rx,
            should_quit: false,
            should_suspend: false,
        }
    }

    pub fn coordinator(&self) -> &Coordinator<'a, S> {
        &self.coordinator
    }

    pub fn tui(&self) -> &T {
        &self.tui
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub async fn run(&mut self) -> Result<()> {
        self.tui.enter()?;
        let result = self.event_loop().await;
        // leave the terminal usable even when the loop failed
        self.tui.exit()?;
        result
    }

    async fn event_loop(&mut self) -> Result<()> {
        while let Some(event) = self.tui.next().await {
            self.handle_event(event)?;
            self.drain_messages()?;

            if self.should_suspend {
                self.should_suspend = false;
                self.tui.suspend()?;
                self.msg_tx.send(Msg::Resume)?;
                self.drain_messages()?;
            }
            if self.should_quit {
                break;
            }
        }
        Ok(())
    }

    fn handle_event(&mut self, event: Event) -> Result<()> {
        match event {
            Event::Key(key) => self.coordinator.handle_key(key)?,
            Event::Mouse(mouse) => self.coordinator.handle_mouse(mouse)?,
            Event::Paste(text) => self.coordinator.handle_paste(&text),
            Event::Tick => self.msg_tx.send(Msg::Tick)?,
            Event::Render => self.msg_tx.send(Msg::Render)?,
            Event::Resize(w, h) => self.msg_tx.send(Msg::Resize(w, h))?,
            Event::Quit => self.msg_tx.send(Msg::Quit)?,
            Event::Closed => {
                log::info!("Terminal event stream closed");
                self.msg_tx.send(Msg::Quit)?;
            }
            Event::Error => log::warn!("Terminal reported an error event"),
            Event::Init | Event::FocusGained | Event::FocusLost => {}
        }
        Ok(())
    }

    fn drain_messages(&mut self) -> Result<()> {
        while let Ok(msg) = self.msg_rx.try_recv() {
            if !msg.is_frequent() {
                log::debug!("{msg:?}");
            }
            match msg {
                Msg::Quit => self.should_quit = true,
                Msg::Suspend => self.should_suspend = true,
                Msg::Resume => {
                    self.tui.resume()?;
                    self.render()?;
                }
                Msg::Render => self.render()?,
                Msg::Resize(w, h) => {
                    self.tui.resize(Rect::new(0, 0, w, h))?;
                    self.render()?;
                }
                msg => self.coordinator.update(msg),
            }
        }
        Ok(())
    }

    fn render(&mut self) -> Result<()> {
        self.tui.draw(&mut |frame| self.coordinator.view(frame))
    }
}
