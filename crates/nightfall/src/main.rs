use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{DefaultTerminal, layout::Rect};

use nightfall_config::SceneConfig;
use nightfall_core::Viewport;
use nightfall_render::SceneRenderer;
use nightfall_sim::Scene;

mod logging;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    logging::init()?;
    let config = SceneConfig::load()?;
    let terminal = ratatui::init();
    let result = App::new(config).run(terminal);
    ratatui::restore();
    result
}

/// The main application which drives the animation loop.
#[derive(Debug)]
pub struct App {
    /// Is the application running?
    running: bool,
    /// Scene constants.
    config: SceneConfig,
    /// Seed for this run.
    seed: u64,
}

impl App {
    /// Construct a new instance of [`App`].
    pub fn new(config: SceneConfig) -> Self {
        // Capture system time as seed for randomness
        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0);

        Self {
            running: false,
            config,
            seed,
        }
    }

    /// Run the animation loop.
    ///
    /// Each frame advances the scene, draws it, then lets the spawner run, in
    /// that order. The viewport is taken from the terminal once, here.
    pub fn run(mut self, mut terminal: DefaultTerminal) -> color_eyre::Result<()> {
        let size = terminal.size()?;
        let viewport = Viewport::from_area(Rect::new(0, 0, size.width, size.height));
        let frame_interval = Duration::from_millis(self.config.frame.frame_interval_ms());

        let mut scene = Scene::new(self.config.clone(), viewport, Instant::now(), self.seed);
        let mut renderer = SceneRenderer::new(self.seed.rotate_left(32));

        self.running = true;
        while self.running {
            let frame_start = Instant::now();
            scene.advance(frame_start);
            terminal.draw(|frame| renderer.render(frame, &scene))?;
            scene.spawn_due();

            self.wait_for_next_frame(frame_start + frame_interval, poll_event)?;
        }

        log::info!(
            "stopped after {} frames with {} balls",
            scene.frame(),
            scene.balls().len()
        );
        Ok(())
    }

    /// Handle events until `deadline`, so input never shortens a frame.
    ///
    /// `next_event` waits up to the given timeout and returns the event that
    /// arrived, if any. Returns early only when a quit key is pressed.
    fn wait_for_next_frame<F>(
        &mut self,
        deadline: Instant,
        mut next_event: F,
    ) -> color_eyre::Result<()>
    where
        F: FnMut(Duration) -> color_eyre::Result<Option<Event>>,
    {
        while self.running {
            let remaining = deadline.saturating_duration_since(Instant::now());
            if remaining.is_zero() {
                break;
            }
            if let Some(event) = next_event(remaining)? {
                self.handle_event(event);
            }
        }
        Ok(())
    }

    /// Updates the state of [`App`] from a crossterm event.
    fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.on_key_event(key),
            // The viewport is fixed at startup
            Event::Resize(_, _) => {}
            _ => {}
        }
    }

    /// Only the keys that end the program are handled.
    fn on_key_event(&mut self, key: KeyEvent) {
        match (key.modifiers, key.code) {
            (_, KeyCode::Esc | KeyCode::Char('q'))
            | (KeyModifiers::CONTROL, KeyCode::Char('c') | KeyCode::Char('C')) => self.quit(),
            _ => {}
        }
    }

    /// Set running to false to quit the application.
    fn quit(&mut self) {
        self.running = false;
    }
}

/// Wait up to `timeout` for the next crossterm event.
fn poll_event(timeout: Duration) -> color_eyre::Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}
