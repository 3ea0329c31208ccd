// TUI module for the interactive portfolio terminal
mod app;
mod events;
mod layout;
mod rendering;
mod terminal;
mod timestamps;

use anyhow::Result;
pub use app::App;
use terminal::TerminalManager;

use crate::remote::{Oracle, RepoBrowser};

/// Run the interactive TUI
pub fn run_interactive<R: RepoBrowser, O: Oracle>(browser: R, oracle: O, user: &str) -> Result<()> {
    let mut manager = TerminalManager::new()?;

    let mut app = App::new(browser, oracle, user);
    app.sync();

    let res = app.run(manager.terminal_mut());

    manager.restore()?;
    res
}
