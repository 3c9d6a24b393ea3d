use crate::screens::{
    LoadingScreen, LoginScreen, MainScreen, Screen as ScreenController, ScreenAction,
    ScreenContext, SharedStore,
};
use crate::services::AccountStore;
use crate::tui::Tui;
use crate::ui::Screen;
use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEventKind, KeyModifiers};
use ratatui::Frame;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::{Duration, Instant};
use tracing::{error, info};

/// Event poll timeout and tick rate
const TICK_RATE: Duration = Duration::from_millis(250);

/// Upper bound on chained redirects from `on_enter`
const MAX_REDIRECTS: usize = 8;

/// Main application state
pub struct App {
    store: SharedStore,
    current_screen: Screen,
    should_quit: bool,
    login_screen: LoginScreen,
    loading_screen: LoadingScreen,
    main_screen: MainScreen,
}

impl App {
    pub fn new(store: AccountStore) -> Self {
        let store = Rc::new(RefCell::new(store));
        Self {
            login_screen: LoginScreen::new(store.clone()),
            loading_screen: LoadingScreen::new(),
            main_screen: MainScreen::new(),
            store,
            current_screen: Screen::Login,
            should_quit: false,
        }
    }

    pub fn current_screen(&self) -> Screen {
        self.current_screen
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn store(&self) -> &SharedStore {
        &self.store
    }

    /// Enter the first screen. Always starts on the login screen, which
    /// redirects to the main view when somebody is already logged in.
    pub fn start(&mut self) -> Result<()> {
        self.navigate(Screen::Login)
    }

    pub fn run(&mut self, tui: &mut Tui) -> Result<()> {
        tui.enter()?;
        self.start()?;

        let mut last_tick = Instant::now();
        while !self.should_quit {
            tui.terminal_mut().draw(|frame| self.draw(frame))?;

            let timeout = TICK_RATE.saturating_sub(last_tick.elapsed());
            if let Some(event) = tui.poll_event(timeout)? {
                self.handle_event(event)?;
            }
            if last_tick.elapsed() >= TICK_RATE {
                self.tick()?;
                last_tick = Instant::now();
            }
        }

        tui.exit()?;
        Ok(())
    }

    /// Render the current screen into `frame`.
    pub fn draw(&mut self, frame: &mut Frame) {
        let area = frame.area();
        let store = Rc::clone(&self.store);
        let ctx = ScreenContext::new(&store);
        let result = self.screen_mut(self.current_screen).render(frame, area, &ctx);
        if let Err(e) = result {
            error!("Error rendering {:?}: {}", self.current_screen, e);
        }
    }

    pub fn handle_event(&mut self, event: Event) -> Result<()> {
        if let Event::Key(key) = event {
            if key.kind == KeyEventKind::Press
                && key.modifiers.contains(KeyModifiers::CONTROL)
                && key.code == KeyCode::Char('c')
            {
                self.should_quit = true;
                return Ok(());
            }
        }

        let store = Rc::clone(&self.store);
        let ctx = ScreenContext::new(&store);
        let action = self.screen_mut(self.current_screen).handle_event(event, &ctx)?;
        self.apply(action)
    }

    pub fn tick(&mut self) -> Result<()> {
        let store = Rc::clone(&self.store);
        let ctx = ScreenContext::new(&store);
        let action = self.screen_mut(self.current_screen).on_tick(&ctx)?;
        self.apply(action)
    }

    fn apply(&mut self, action: ScreenAction) -> Result<()> {
        match action {
            ScreenAction::None => Ok(()),
            ScreenAction::Quit => {
                self.should_quit = true;
                Ok(())
            }
            ScreenAction::Navigate(screen) => self.navigate(screen),
        }
    }

    fn navigate(&mut self, target: Screen) -> Result<()> {
        let store = Rc::clone(&self.store);
        let ctx = ScreenContext::new(&store);
        let outcome = follow_redirects(target, |screen| {
            self.current_screen = screen;
            self.screen_mut(screen).on_enter(&ctx)
        })?;
        if outcome == ScreenAction::Quit {
            self.should_quit = true;
        }
        Ok(())
    }

    fn screen_mut(&mut self, screen: Screen) -> &mut dyn ScreenController {
        match screen {
            Screen::Login => &mut self.login_screen,
            Screen::Loading => &mut self.loading_screen,
            Screen::Main => &mut self.main_screen,
        }
    }
}

/// Enter `target` and keep following the redirects `enter` returns.
///
/// # Returns
///
/// The first action that is not a redirect. Fails after `MAX_REDIRECTS`
/// screens in a row asked to move on.
fn follow_redirects<F>(mut target: Screen, mut enter: F) -> Result<ScreenAction>
where
    F: FnMut(Screen) -> Result<ScreenAction>,
{
    for _ in 0..MAX_REDIRECTS {
        info!("Entering {:?}", target);
        match enter(target)? {
            ScreenAction::Navigate(next) => target = next,
            other => return Ok(other),
        }
    }
    anyhow::bail!("Too many screen redirects, stopped at {:?}", target)
}
