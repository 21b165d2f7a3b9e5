use super::config::{Cli, Config, Mode};
use crate::error::{Error, Result};
use std::io::{BufRead, Write};

/// Interactive prompt used when no mode was given on the command line.
pub struct Menu<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    #[cfg(test)]
    pub(crate) fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }

    /// Asks for everything `cli` left unspecified.
    pub fn configure(&mut self, cli: Cli, available: usize) -> Result<Config> {
        let mode = match cli.mode {
            Some(mode) => mode,
            None => self.choose_mode(cli.seconds)?,
        };

        if mode == Mode::Sequential {
            return Ok(cli.into_config(mode, available));
        }

        let cpus = match cli.cpus {
            Some(cpus) => cpus,
            None => self.ask_cpus(available)?,
        };
        let max_branches = match cli.max_branches {
            Some(max_branches) => max_branches,
            None => self.ask_max_branches()?,
        };

        Ok(Cli {
            cpus: Some(cpus),
            max_branches: Some(max_branches),
            ..cli
        }
        .into_config(mode, available))
    }

    pub fn choose_mode(&mut self, seconds: u64) -> Result<Mode> {
        writeln!(self.output, "1. Run Parallel QuickSort for {} Seconds", seconds)?;
        writeln!(self.output, "2. Run Synchronous QuickSort for {} Seconds", seconds)?;
        self.output.flush()?;

        match self.read_number()? {
            1 => Ok(Mode::Parallel),
            2 => Ok(Mode::Sequential),
            other => Err(Error::InvalidOption(format!(
                "option {} not listed, please select from the available options",
                other
            ))),
        }
    }

    pub fn ask_cpus(&mut self, available: usize) -> Result<usize> {
        write!(
            self.output,
            "This machine has {} CPUs available\nEnter number of CPUs to use (1 - {}): ",
            available, available
        )?;
        self.output.flush()?;
        self.read_number()
    }

    pub fn ask_max_branches(&mut self) -> Result<usize> {
        write!(self.output, "Enter the maximum number of parallel branches: ")?;
        self.output.flush()?;
        self.read_number()
    }

    fn read_number(&mut self) -> Result<usize> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(Error::InvalidOption(String::from("unexpected end of input")));
        }

        let line = line.trim();
        line.parse()
            .map_err(|_| Error::InvalidOption(format!("expected a number, got {:?}", line)))
    }
}
