//! Smart assign: a random free seat.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::types::Seat;

/// Pick one available seat uniformly at random.
///
/// Candidates keep the order of `seats`, so a seeded `rng` over the same
/// snapshot always lands on the same seat. Returns `None` when nothing is free.
pub fn pick_random<'a, I, R>(seats: I, rng: &mut R) -> Option<&'a Seat>
where
    I: IntoIterator<Item = &'a Seat>,
    R: Rng + ?Sized,
{
    let candidates: Vec<&Seat> = seats.into_iter().filter(|s| s.is_available()).collect();
    candidates.choose(rng).copied()
}
