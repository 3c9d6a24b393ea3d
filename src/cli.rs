use crate::model::Account;
use crate::navigator::ScreenNavigator;
use crate::presenter::{LoginPresenter, LoginView};
use crate::services::AccountStore;
use crate::ui::Screen;
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::cell::RefCell;
use std::io::Write;
use std::path::PathBuf;
use std::rc::Rc;
use tracing::debug;

/// Terminal TV client: pick a recent account and log in
#[derive(Parser, Debug)]
#[command(name = "tuentitv", version, about = "Terminal TV client: pick a recent account and log in", long_about = None)]
pub struct Cli {
    /// Config file to use instead of ~/.config/tuentitv/config.toml
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List recent accounts
    Accounts,
    /// Show who is logged in
    Status,
    /// Log in the account at INDEX of the `accounts` list
    Login {
        /// Position in the recent accounts list (0-based)
        index: usize,
    },
    /// Log out the current account
    Logout,
    /// Register a new account
    Add {
        /// Display name
        name: String,
        /// Email address
        email: String,
    },
}

impl Cli {
    /// Config file path, honouring `--config`
    pub fn config_path(&self) -> PathBuf {
        self.config
            .clone()
            .unwrap_or_else(crate::utils::get_config_path)
    }

    /// Execute the CLI command
    ///
    /// # Returns
    ///
    /// `false` when no subcommand was given and the TUI should start.
    pub fn execute(self) -> Result<bool> {
        let config_path = self.config_path();
        match self.command {
            Some(command) => {
                let mut store = AccountStore::open(&config_path)
                    .context("Failed to load configuration")?;
                let stdout = std::io::stdout();
                run_command(command, &mut store, &mut stdout.lock())?;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

/// Run one subcommand against `store`, writing human output to `out`
pub fn run_command<W: Write>(command: Commands, store: &mut AccountStore, out: &mut W) -> Result<()> {
    match command {
        Commands::Accounts => cmd_accounts(store, out),
        Commands::Status => cmd_status(store, out),
        Commands::Login { index } => cmd_login(store, index, out),
        Commands::Logout => cmd_logout(store, out),
        Commands::Add { name, email } => cmd_add(store, &name, &email, out),
    }
}

fn cmd_accounts<W: Write>(store: &AccountStore, out: &mut W) -> Result<()> {
    use crate::model::Accounts;

    let accounts = store.recent_logged_accounts()?;
    if accounts.is_empty() {
        writeln!(out, "No accounts yet. Add one with `tuentitv add <name> <email>`.")?;
        return Ok(());
    }

    let logged = store.logged_account();
    for (index, account) in accounts.iter().enumerate() {
        let marker = if logged.as_ref().is_some_and(|l| l.same_user(account)) {
            "*"
        } else {
            " "
        };
        writeln!(
            out,
            "{} {:>2}  {:<20} {:<32} last login: {}",
            marker,
            index,
            account.name,
            account.email,
            account.last_login_display()
        )?;
    }
    Ok(())
}

fn cmd_status<W: Write>(store: &AccountStore, out: &mut W) -> Result<()> {
    match store.logged_account() {
        Some(account) => writeln!(out, "Logged in as {} <{}>", account.name, account.email)?,
        None => writeln!(out, "Not logged in")?,
    }
    Ok(())
}

fn cmd_logout<W: Write>(store: &mut AccountStore, out: &mut W) -> Result<()> {
    if store.logout()? {
        writeln!(out, "Logged out")?;
    } else {
        writeln!(out, "Nobody was logged in")?;
    }
    Ok(())
}

fn cmd_add<W: Write>(store: &mut AccountStore, name: &str, email: &str, out: &mut W) -> Result<()> {
    let account = store.add_account(name, email)?;
    writeln!(out, "Added {} <{}>", account.name, account.email)?;
    Ok(())
}

/// View that records what the presenter asked for, so the command can
/// report it once the flow is over.
#[derive(Debug, Default)]
struct ConsoleView {
    password_requested: bool,
    closed: bool,
}

impl LoginView for ConsoleView {
    fn show_accounts(&mut self, accounts: &[Account]) {
        debug!("Console login over {} accounts", accounts.len());
    }

    fn show_password_box(&mut self) {
        self.password_requested = true;
    }

    fn close(&mut self) {
        self.closed = true;
    }
}

/// Walk the same presenter flow the login screen uses, without a terminal UI.
fn cmd_login<W: Write>(store: &mut AccountStore, index: usize, out: &mut W) -> Result<()> {
    let navigator = ScreenNavigator::new();
    let view = Rc::new(RefCell::new(ConsoleView::default()));
    let mut presenter = LoginPresenter::new(&mut *store, navigator.clone());
    presenter.set_view(&view);

    presenter.initialize()?;
    if navigator.take_pending() == Some(Screen::Main) {
        drop(presenter);
        if let Some(account) = store.logged_account() {
            writeln!(out, "Already logged in as {} <{}>", account.name, account.email)?;
        }
        return Ok(());
    }

    presenter.load_accounts()?;
    let account = presenter
        .account_at_index(index)
        .with_context(|| format!("No account at index {}", index))?
        .clone();
    presenter.on_account_clicked(account.clone())?;
    presenter.login_with_selected_user()?;

    let view = view.borrow();
    if view.password_requested && view.closed && navigator.take_pending() == Some(Screen::Loading) {
        writeln!(out, "Logged in as {} <{}>", account.name, account.email)?;
    }
    Ok(())
}
