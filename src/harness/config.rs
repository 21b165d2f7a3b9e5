use crate::{
    builder::Builder,
    driver::Sorter,
    error::{Error, Result},
};
use clap::{Parser, ValueEnum};
use std::{num::NonZeroUsize, time::Duration};

pub const DEFAULT_LEN: usize = 1 << 22;
pub const DEFAULT_SECONDS: u64 = 10;

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
pub enum Mode {
    Parallel,
    Sequential,
}

#[derive(Debug, Parser)]
#[command(name = "parsort")]
#[command(about = "Counts how many random arrays a budgeted parallel quicksort sorts in a fixed time")]
#[command(version)]
pub struct Cli {
    /// Sort mode; shows the interactive menu when omitted
    #[arg(long, value_enum)]
    pub mode: Option<Mode>,

    /// Threads used to run forked branches (defaults to every available CPU)
    #[arg(long)]
    pub cpus: Option<usize>,

    /// Branches of one sort call allowed to run at once (defaults to --cpus)
    #[arg(long)]
    pub max_branches: Option<usize>,

    /// Length of every generated array
    #[arg(long, default_value_t = DEFAULT_LEN)]
    pub len: usize,

    /// How long to keep submitting new arrays
    #[arg(long, default_value_t = DEFAULT_SECONDS)]
    pub seconds: u64,

    /// Seed for the array generator
    #[arg(long)]
    pub seed: Option<u64>,
}

impl Cli {
    pub fn into_config(self, mode: Mode, available: usize) -> Config {
        let (cpus, max_branches) = match mode {
            Mode::Sequential => (1, 1),
            Mode::Parallel => {
                let cpus = self.cpus.unwrap_or(available);
                (cpus, self.max_branches.unwrap_or(cpus))
            }
        };

        Config {
            mode,
            cpus,
            max_branches,
            len: self.len,
            duration: Duration::from_secs(self.seconds),
            seed: self.seed,
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    pub mode: Mode,
    pub cpus: usize,
    pub max_branches: usize,
    pub len: usize,
    pub duration: Duration,
    pub seed: Option<u64>,
}

impl Config {
    pub fn validate(self, available: usize) -> Result<Self> {
        if self.len == 0 {
            return Err(Error::EmptyArray);
        }

        if self.cpus == 0 || self.cpus > available {
            return Err(Error::InvalidParallelism {
                value: self.cpus,
                max: available,
            });
        }

        if self.max_branches == 0 {
            return Err(Error::InvalidOption(String::from(
                "at least one parallel branch is required",
            )));
        }

        if self.mode == Mode::Sequential && (self.cpus, self.max_branches) != (1, 1) {
            return Err(Error::InvalidOption(String::from(
                "sequential mode runs on one cpu with one branch",
            )));
        }

        Ok(self)
    }

    pub fn sorter(&self) -> Result<Sorter> {
        match (
            self.mode,
            NonZeroUsize::new(self.cpus),
            NonZeroUsize::new(self.max_branches),
        ) {
            (Mode::Sequential, _, _) => Ok(Sorter::new(1)),
            (Mode::Parallel, Some(cpus), Some(max_branches)) => Builder::new()
                .cpus(cpus)
                .max_branches(max_branches)
                .build(),
            (Mode::Parallel, _, _) => Err(Error::InvalidOption(String::from(
                "parallel mode needs at least one cpu and one branch",
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Cli, Config, Mode, DEFAULT_LEN, DEFAULT_SECONDS};
    use crate::error::Error;
    use clap::Parser;
    use std::time::Duration;

    fn config(mode: Mode, cpus: usize, max_branches: usize) -> Config {
        Config {
            mode,
            cpus,
            max_branches,
            len: 16,
            duration: Duration::from_millis(10),
            seed: Some(7),
        }
    }

    #[test]
    fn cli_defaults() {
        let cli = Cli::parse_from(["parsort"]);
        assert_eq!(cli.mode, None);
        assert_eq!(cli.len, DEFAULT_LEN);
        assert_eq!(cli.seconds, DEFAULT_SECONDS);
    }

    #[test]
    fn parallel_branches_default_to_cpus() {
        let cli = Cli::parse_from(["parsort", "--mode", "parallel", "--cpus", "3"]);
        let config = cli.into_config(Mode::Parallel, 8);
        assert_eq!(config.cpus, 3);
        assert_eq!(config.max_branches, 3);
    }

    #[test]
    fn sequential_pins_one_cpu() {
        let cli = Cli::parse_from(["parsort", "--cpus", "4", "--max-branches", "9", "--seconds", "2"]);
        let config = cli.into_config(Mode::Sequential, 8);
        assert_eq!((config.cpus, config.max_branches), (1, 1));
        assert_eq!(config.duration, Duration::from_secs(2));
    }

    #[test]
    fn rejects_out_of_range_cpus() {
        assert!(matches!(
            config(Mode::Parallel, 0, 2).validate(4),
            Err(Error::InvalidParallelism { value: 0, max: 4 })
        ));
        assert!(matches!(
            config(Mode::Parallel, 5, 2).validate(4),
            Err(Error::InvalidParallelism { value: 5, max: 4 })
        ));
    }

    #[test]
    fn rejects_zero_branches_and_empty_arrays() {
        assert!(matches!(
            config(Mode::Parallel, 2, 0).validate(4),
            Err(Error::InvalidOption(_))
        ));

        let mut empty = config(Mode::Parallel, 2, 2);
        empty.len = 0;
        assert!(matches!(empty.validate(4), Err(Error::EmptyArray)));
    }

    #[test]
    fn builds_matching_sorter() {
        let parallel = config(Mode::Parallel, 2, 5).validate(4).unwrap();
        let sorter = parallel.sorter().unwrap();
        assert!(sorter.uses_pool());
        assert_eq!(sorter.max_branches(), 5);

        let sequential = config(Mode::Sequential, 1, 1).validate(4).unwrap();
        let sorter = sequential.sorter().unwrap();
        assert!(!sorter.uses_pool());
        assert_eq!(sorter.max_branches(), 1);
    }
}
