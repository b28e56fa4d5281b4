use std::io::stdout;

use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
};
use folio_config::Config;

mod app;
mod background;
mod content;
mod logging;
mod page;
mod scroll;

use app::App;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    logging::init();
    let config = Config::load()?;

    let terminal = ratatui::init();
    let result = execute!(stdout(), EnableMouseCapture)
        .map_err(color_eyre::Report::from)
        .and_then(|()| App::new(config).run(terminal));
    // Best effort; the terminal is restored either way.
    let _ = execute!(stdout(), DisableMouseCapture);
    ratatui::restore();
    result
}
