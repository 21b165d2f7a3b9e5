//! Timed throughput loop around the sorter: a background generator feeds
//! random arrays and the sampler counts how many come back sorted before the
//! deadline.

mod config;
mod generator;
mod menu;
mod sampler;

pub use config::{Cli, Config, Mode, DEFAULT_LEN, DEFAULT_SECONDS};
pub use generator::{random_array, spawn_generator};
pub use menu::Menu;
pub use sampler::{run_timed, Tally};

use crate::error::{Error, Result};
use std::sync::Arc;

const QUEUED_ARRAYS: usize = 1;

/// Runs one timed session for `config`.
pub async fn run(config: &Config) -> Result<Tally> {
    let sorter = Arc::new(config.sorter()?);
    log::info!(
        "{:?} run: {} element arrays, {} cpus, {} branches, {:?}",
        config.mode,
        config.len,
        config.cpus,
        config.max_branches,
        config.duration
    );

    let (arrays, generator) = spawn_generator(config.len, config.seed, QUEUED_ARRAYS);
    let tally = run_timed(sorter, arrays, config.duration).await?;

    generator
        .await
        .map_err(|err| Error::Runtime(err.to_string()))?;
    Ok(tally)
}

pub fn summary(tally: &Tally, config: &Config) -> String {
    format!(
        "{} arrays of size {} were sorted in {} seconds",
        tally.completed,
        config.len,
        config.duration.as_secs()
    )
}

#[cfg(test)]
mod tests {
    use super::{run, summary, Config, Mode, Tally};
    use std::time::Duration;

    fn config(mode: Mode, cpus: usize, max_branches: usize) -> Config {
        Config {
            mode,
            cpus,
            max_branches,
            len: 2_000,
            duration: Duration::from_millis(50),
            seed: Some(3),
        }
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn parallel_session_sorts_arrays() {
        let tally = run(&config(Mode::Parallel, 2, 3)).await.unwrap();
        assert!(tally.attempted > 0);
        assert_eq!(tally.completed, tally.attempted);
    }

    #[tokio::test]
    async fn sequential_session_sorts_arrays() {
        let tally = run(&config(Mode::Sequential, 1, 1)).await.unwrap();
        assert!(tally.attempted > 0);
        assert_eq!(tally.completed, tally.attempted);
    }

    #[test]
    fn summary_matches_the_classic_report() {
        let mut config = config(Mode::Parallel, 2, 2);
        config.len = 4_194_304;
        config.duration = Duration::from_secs(10);
        let tally = Tally {
            attempted: 13,
            completed: 12,
            elapsed: Duration::from_secs(10),
        };
        assert_eq!(
            summary(&tally, &config),
            "12 arrays of size 4194304 were sorted in 10 seconds"
        );
    }
}
