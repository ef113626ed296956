mod form;
mod logging;
mod page;

use std::path::PathBuf;
use std::time::{Duration, Instant};

use clap::Parser;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use glyphfolio_background::{BackgroundState, current_viewport};
use glyphfolio_config::Config;
use glyphfolio_content::PROFILE;
use glyphfolio_core::Section;
use ratatui::{DefaultTerminal, Frame};

use crate::form::ContactForm;
use crate::page::PageView;

/// A personal portfolio page for the terminal.
#[derive(Parser, Debug, Default)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the config file (defaults to the platform config directory)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Start with the falling-glyph background unmounted
    #[arg(long)]
    no_background: bool,

    /// Seed the background's randomness for a reproducible animation
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();
    let _log_guard = logging::init();

    let config_path = args.config.clone().or_else(|| Config::default_path().ok());
    let config = config_path
        .as_deref()
        .map(Config::load_or_default)
        .unwrap_or_default();

    let terminal = ratatui::init();
    let result = App::new(config, config_path, &args).run(terminal);
    ratatui::restore();
    result
}

/// The main application which holds the state and logic of the application.
#[derive(Debug)]
pub struct App {
    /// Is the application running?
    running: bool,
    /// Loaded configuration, saved back when the user changes it.
    config: Config,
    /// Where the configuration is saved, if anywhere.
    config_path: Option<PathBuf>,
    /// Section currently shown.
    section: Section,
    /// Rows scrolled within the current section.
    scroll: u16,
    /// Terminal width at the last draw; card grids scroll by rows that fit it.
    width: u16,
    /// Contact form contents.
    form: ContactForm,
    /// Falling-glyph background.
    background: BackgroundState,
    /// Time origin for animation.
    started: Instant,
}

impl App {
    /// Construct a new instance of [`App`].
    fn new(config: Config, config_path: Option<PathBuf>, args: &Args) -> Self {
        let mut config = config;
        if args.no_background {
            config.background = false;
        }
        let background = match args.seed {
            Some(seed) => BackgroundState::with_seed(seed),
            None => BackgroundState::new(),
        };
        Self {
            running: false,
            config,
            config_path,
            section: Section::default(),
            scroll: 0,
            width: 0,
            form: ContactForm::new(),
            background,
            started: Instant::now(),
        }
    }

    /// Run the application's main loop.
    pub fn run(mut self, mut terminal: DefaultTerminal) -> color_eyre::Result<()> {
        self.running = true;
        self.started = Instant::now();
        if self.config.background {
            self.background.mount(current_viewport(), 0);
        }
        while self.running {
            terminal.draw(|frame| self.render(frame))?;
            self.handle_crossterm_events()?;
        }
        self.background.unmount();
        Ok(())
    }

    /// Milliseconds since the loop started.
    fn elapsed_ms(&self) -> u64 {
        self.started.elapsed().as_millis() as u64
    }

    /// Renders the user interface.
    fn render(&mut self, frame: &mut Frame) {
        let elapsed_ms = self.elapsed_ms();
        self.width = frame.area().width;
        self.scroll = self.scroll.min(self.max_scroll());
        self.background
            .render(frame, elapsed_ms, self.config.color_theme);

        let view = PageView {
            profile: &PROFILE,
            section: self.section,
            scroll: self.scroll,
            form: &self.form,
            theme: self.config.color_theme,
            background_on: self.background.is_mounted(),
        };
        page::render(frame, &view);
    }

    /// Reads the crossterm events and updates the state of [`App`].
    /// Polls with a timeout so the background keeps animating.
    fn handle_crossterm_events(&mut self) -> color_eyre::Result<()> {
        let timeout: Duration = self.config.poll_interval();
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => self.on_key_event(key),
                Event::Mouse(_) => {}
                Event::Resize(_, _) => {}
                _ => {}
            }
        }
        Ok(())
    }

    /// Handles the key events and updates the state of [`App`].
    fn on_key_event(&mut self, key: KeyEvent) {
        if self.form.handle_key(key) {
            return;
        }
        match (key.modifiers, key.code) {
            (_, KeyCode::Esc | KeyCode::Char('q'))
            | (KeyModifiers::CONTROL, KeyCode::Char('c') | KeyCode::Char('C')) => self.quit(),
            (_, KeyCode::Tab | KeyCode::Right | KeyCode::Char('l')) => {
                self.select_section(self.section.next())
            }
            (_, KeyCode::BackTab | KeyCode::Left | KeyCode::Char('h')) => {
                self.select_section(self.section.prev())
            }
            (_, KeyCode::Char(c @ '1'..='5')) => {
                let index = c as usize - '1' as usize;
                if let Some(section) = Section::from_index(index) {
                    self.select_section(section);
                }
            }
            (_, KeyCode::Down | KeyCode::Char('j')) => self.scroll_by(1),
            (_, KeyCode::Up | KeyCode::Char('k')) => self.scroll_by(-1),
            (_, KeyCode::PageDown) => self.scroll_by(5),
            (_, KeyCode::PageUp) => self.scroll_by(-5),
            (_, KeyCode::Enter) if self.section == Section::Contact => self.form.begin_editing(),
            (_, KeyCode::Char('b')) => self.toggle_background(),
            (_, KeyCode::Char('c')) => self.cycle_color_theme(),
            _ => {}
        }
    }

    /// Jump to a section, resetting the scroll position.
    fn select_section(&mut self, section: Section) {
        self.section = section;
        self.scroll = 0;
    }

    /// Largest scroll offset for the current section.
    fn max_scroll(&self) -> u16 {
        page::max_scroll(&PROFILE, self.section, self.width)
    }

    fn scroll_by(&mut self, delta: i32) {
        let next = (self.scroll as i32 + delta).clamp(0, self.max_scroll() as i32);
        self.scroll = next as u16;
    }

    /// Unmount the background if mounted, otherwise mount a fresh one.
    fn toggle_background(&mut self) {
        let now = self.elapsed_ms();
        self.background.toggle(current_viewport(), now);
        self.config.background = self.background.is_mounted();
        self.save_config();
    }

    /// Cycle through available color themes.
    fn cycle_color_theme(&mut self) {
        self.config.color_theme = self.config.color_theme.next();
        self.save_config();
    }

    fn save_config(&self) {
        let Some(path) = &self.config_path else {
            return;
        };
        if let Err(err) = self.config.save(path) {
            tracing::warn!(%err, "failed to save config");
        }
    }

    /// Set running to false to quit the application.
    fn quit(&mut self) {
        self.running = false;
    }
}
