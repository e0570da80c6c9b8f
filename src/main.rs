mod budget;
mod config;
mod ledger;
mod models;
mod run;
mod search;
mod store;
mod ui;

use anyhow::Result;
use log::debug;

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    let config = config::Config::from_env()?;
    config.ensure_logs()?;
    debug!(
        "Using logs {} and {}",
        config.expenses_path.display(),
        config.budget_path.display()
    );

    match args.len() {
        0 | 1 => run::as_menu(&config),
        _ => run::as_cli(&args, &config, &mut std::io::stdout().lock()),
    }
}
