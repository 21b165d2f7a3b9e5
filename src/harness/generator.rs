use rand::{rngs::StdRng, Rng, SeedableRng};
use tokio::{sync::mpsc, task::JoinHandle};

/// An array of `len` values drawn uniformly from `[0, 1)`.
pub fn random_array<G: Rng>(rng: &mut G, len: usize) -> Vec<f64> {
    (0..len).map(|_| rng.gen::<f64>()).collect()
}

/// Keeps `capacity` freshly generated arrays queued on a blocking thread until
/// the receiver is dropped. Returns the number of arrays handed out.
///
/// Must be called from within a tokio runtime.
pub fn spawn_generator(
    len: usize,
    seed: Option<u64>,
    capacity: usize,
) -> (mpsc::Receiver<Vec<f64>>, JoinHandle<usize>) {
    let (sender, receiver) = mpsc::channel(capacity.max(1));

    let handle = tokio::task::spawn_blocking(move || {
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let mut generated = 0;
        while sender.blocking_send(random_array(&mut rng, len)).is_ok() {
            generated += 1;
        }

        log::debug!("generator stopped after {} arrays", generated);
        generated
    });

    (receiver, handle)
}
