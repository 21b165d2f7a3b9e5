use crate::{
    driver::Sorter,
    error::{Error, Result},
};
use std::{
    sync::Arc,
    time::{Duration, Instant},
};
use tokio::sync::mpsc;

/// Counts of one timed run.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct Tally {
    /// Arrays handed to the sorter.
    pub attempted: usize,
    /// Arrays that came back verified as sorted.
    pub completed: usize,
    pub elapsed: Duration,
}

/// Sorts arrays from `arrays` until `duration` has passed.
///
/// The deadline only stops new arrays from being taken; a sort that is
/// already running is allowed to finish and is counted.
pub async fn run_timed(
    sorter: Arc<Sorter>,
    mut arrays: mpsc::Receiver<Vec<f64>>,
    duration: Duration,
) -> Result<Tally> {
    let start = Instant::now();
    let deadline = tokio::time::sleep(duration);
    tokio::pin!(deadline);

    let mut tally = Tally::default();
    loop {
        let mut arr = tokio::select! {
            biased;
            _ = &mut deadline => break,
            arr = arrays.recv() => match arr {
                Some(arr) => arr,
                None => break,
            },
        };

        let sorter = Arc::clone(&sorter);
        let report = tokio::task::spawn_blocking(move || sorter.sort(&mut arr))
            .await
            .map_err(|err| Error::Runtime(err.to_string()))?;

        tally.attempted += 1;
        if report.sorted {
            tally.completed += 1;
        } else {
            log::warn!("array of {} elements failed verification", report.len);
        }
    }

    tally.elapsed = start.elapsed();
    log::info!(
        "sorted {}/{} arrays in {:?}",
        tally.completed,
        tally.attempted,
        tally.elapsed
    );
    Ok(tally)
}

#[cfg(test)]
mod tests {
    use super::run_timed;
    use crate::driver::Sorter;
    use std::{sync::Arc, time::Duration};
    use tokio::sync::mpsc;

    #[tokio::test]
    async fn counts_every_verified_sort() {
        let (sender, receiver) = mpsc::channel(4);
        for arr in [vec![3.0, 1.0, 2.0], vec![], vec![0.5]] {
            sender.send(arr).await.unwrap();
        }
        drop(sender);

        let tally = run_timed(Arc::new(Sorter::new(2)), receiver, Duration::from_secs(30))
            .await
            .unwrap();
        assert_eq!(tally.attempted, 3);
        assert_eq!(tally.completed, 3);
        assert!(tally.elapsed < Duration::from_secs(30));
    }

    #[tokio::test]
    async fn stops_taking_work_at_the_deadline() {
        let (_sender, receiver) = mpsc::channel::<Vec<f64>>(1);
        let tally = run_timed(Arc::new(Sorter::new(1)), receiver, Duration::from_millis(20))
            .await
            .unwrap();
        assert_eq!(tally.attempted, 0);
        assert!(tally.elapsed >= Duration::from_millis(20));
    }
}
