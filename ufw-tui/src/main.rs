#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use std::{io, process};

use anyhow::Context;
use ratatui::{Terminal, backend::CrosstermBackend};
use ufw_tui::{
    app::{App, AppResult},
    cli,
    config::{Config, Elevation},
    event::EventHandler,
    preflight,
    runner::{Runner, SystemRunner},
    snapshot::DataSnapshot,
    tui::Tui,
};

fn load_config<F>(lookup: F, default_elevation: Elevation) -> AppResult<Config>
where
    F: Fn(&str) -> Option<String>,
{
    Config::from_lookup(lookup, default_elevation).context("invalid configuration")
}

fn run(runner: &dyn Runner) -> AppResult<()> {
    let mut app = App::new(DataSnapshot::fetch(runner));

    let backend = CrosstermBackend::new(io::stdout());
    let terminal = Terminal::new(backend).context("unable to open the terminal")?;
    let mut tui = Tui::new(terminal, EventHandler::new());
    tui.init().context("unable to set up the terminal")?;

    let result = tui.run(&mut app, runner);

    tui.exit().context("unable to restore the terminal")?;
    result
}

fn try_main() -> AppResult<()> {
    let _ = cli::cli().get_matches();

    let config = load_config(|key| std::env::var(key).ok(), Elevation::detect())?;
    preflight::check(&config).context("preflight check failed")?;

    run(&SystemRunner::new(config))
}

fn main() {
    env_logger::init();

    if let Err(e) = try_main() {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}
