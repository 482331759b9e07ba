use clap::Parser;
use color_eyre::eyre::Result;

use userdeck::{
    infrastructure::{
        cli::Cli, config::Config, storage::FileStorage, tui::real::RealTui,
    },
    integration::app_runner::AppRunner,
    repositories::user::UserRepository,
    trace_dbg,
    utils::{get_data_dir, initialize_logging, initialize_panic_handler},
};

async fn tokio_main() -> Result<()> {
    let data_dir = get_data_dir();
    initialize_logging(&data_dir)?;

    initialize_panic_handler()?;

    let args = Cli::parse();
    let config = Config::new()?;

    let storage_dir = trace_dbg!(data_dir.join("storage"));
    let storage = FileStorage::new(storage_dir, config.storage.quota_bytes)?;
    let mut store = UserRepository::new(storage, config.storage.key.clone());
    if args.reset {
        log::info!("Clearing stored users");
        store.clear_all();
    }

    let tui = RealTui::new()?
        .tick_rate(args.tick_rate)
        .frame_rate(args.frame_rate);
    let mut runner = AppRunner::new(&config, store, tui);
    runner.run().await?;

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    if let Err(e) = tokio_main().await {
        eprintln!("{} error: Something went wrong", env!("CARGO_PKG_NAME"));
        Err(e)
    } else {
        Ok(())
    }
}
