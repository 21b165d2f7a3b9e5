use clap::Parser;
use parsort::{
    harness::{self, Cli, Menu},
    Result,
};
use std::{io, num::NonZeroUsize, process, thread};

fn main() {
    env_logger::init();

    if let Err(err) = run() {
        log::error!("{}", err);
        eprintln!("{}", err);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let available = thread::available_parallelism().map_or(1, NonZeroUsize::get);

    let config = match cli.mode {
        Some(mode) => cli.into_config(mode, available),
        None => Menu::new(io::stdin().lock(), io::stdout()).configure(cli, available)?,
    };
    let config = config.validate(available)?;

    let runtime = tokio::runtime::Runtime::new()?;
    let tally = runtime.block_on(harness::run(&config))?;

    println!("{}", harness::summary(&tally, &config));
    Ok(())
}
