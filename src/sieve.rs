//! Bounded sieve of Eratosthenes over `[0, n]`.
//!
//! The table is stored 0-based with length `n + 1`; indices 0 and 1 are never
//! prime. [`PrimalityTable::values`] exposes the 1-based view (`1..=n`) that the
//! grid folder consumes, so the cell at flat position `k` describes `k + 1`.
//!
//! Even candidates above 2 are never set, and only odd `i` are used as sieving
//! primes. The upper limit on `i` is selected by [`SieveBound`].

use log::debug;
use serde::{Deserialize, Serialize};

/// Stopping rule for the outer sieving loop.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SieveBound {
    /// Sieve while `i * i <= n`. Every composite in `[2, n]` is cleared.
    #[default]
    Inclusive,
    /// Sieve while `i * i < n`. Matches the historical renderer: when `n` is
    /// the square of an odd prime (25, 49, 121, ...) that square stays marked
    /// prime.
    Strict,
}

impl SieveBound {
    #[inline]
    fn admits(self, square: usize, n: usize) -> bool {
        match self {
            SieveBound::Inclusive => square <= n,
            SieveBound::Strict => square < n,
        }
    }
}

/// Primality flags for every integer in `[0, n]`.
///
/// Computed once by [`sieve`] and read-only afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PrimalityTable {
    flags: Vec<bool>,
}

impl PrimalityTable {
    /// Upper end `n` of the sieved range.
    pub fn bound(&self) -> usize {
        self.flags.len() - 1
    }

    /// Whether `k` is marked prime. Values above the bound are not prime.
    #[inline]
    pub fn is_prime(&self, k: usize) -> bool {
        self.flags.get(k).copied().unwrap_or(false)
    }

    /// Full 0-based table, length `n + 1`.
    pub fn as_slice(&self) -> &[bool] {
        &self.flags
    }

    /// 1-based view: entry `k` describes the integer `k + 1`. Length `n`.
    pub fn values(&self) -> &[bool] {
        &self.flags[1..]
    }

    /// Iterates the integers marked prime, ascending.
    pub fn primes(&self) -> impl Iterator<Item = usize> + '_ {
        self.flags
            .iter()
            .enumerate()
            .filter_map(|(k, &p)| p.then_some(k))
    }

    /// Number of integers marked prime.
    pub fn count(&self) -> usize {
        self.flags.iter().filter(|&&p| p).count()
    }
}

/// Sieves `[0, n]` with the given outer-loop bound.
///
/// Total for every `n`: `n = 0` and `n = 1` yield tables with nothing marked.
pub fn sieve(n: usize, bound: SieveBound) -> PrimalityTable {
    let mut flags = vec![false; n + 1];
    if n >= 2 {
        flags[2] = true;
        for k in (3..=n).step_by(2) {
            flags[k] = true;
        }
    }

    let mut i = 3usize;
    // An overflowing square is necessarily past `n`.
    while i.checked_mul(i).is_some_and(|sq| bound.admits(sq, n)) {
        if flags[i] {
            for multiple in (i + i..=n).step_by(i) {
                flags[multiple] = false;
            }
        }
        i += 2;
    }

    debug!("sieve: n={n} bound={bound:?} stopped at i={i}");
    PrimalityTable { flags }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn primes_of(n: usize, bound: SieveBound) -> Vec<usize> {
        sieve(n, bound).primes().collect()
    }

    #[test]
    fn degenerate_ranges_have_no_primes() {
        for n in 0..=1 {
            let table = sieve(n, SieveBound::Inclusive);
            assert_eq!(table.as_slice().len(), n + 1);
            assert_eq!(table.count(), 0);
            assert_eq!(table.values().len(), n);
        }
    }

    #[test]
    fn two_is_prime_at_its_own_bound() {
        assert_eq!(primes_of(2, SieveBound::Inclusive), vec![2]);
        assert_eq!(primes_of(2, SieveBound::Strict), vec![2]);
    }

    #[test]
    fn primes_up_to_ten() {
        assert_eq!(primes_of(10, SieveBound::Inclusive), vec![2, 3, 5, 7]);
        assert_eq!(primes_of(10, SieveBound::Strict), vec![2, 3, 5, 7]);
    }

    #[test]
    fn inclusive_bound_clears_prime_squares() {
        for n in [9usize, 25, 49, 121, 169] {
            let table = sieve(n, SieveBound::Inclusive);
            assert!(!table.is_prime(n), "{n} must be composite");
        }
    }

    #[test]
    fn strict_bound_keeps_odd_prime_squares_at_the_bound() {
        // 9 = 3*3 is also left marked: no pass with i < 3 clears it.
        for n in [9usize, 25, 49, 121] {
            let table = sieve(n, SieveBound::Strict);
            assert!(table.is_prime(n), "strict bound should leave {n} marked");
        }
        // Below the bound the square is cleared by its own pass.
        assert!(!sieve(26, SieveBound::Strict).is_prime(25));
    }

    #[test]
    fn values_view_is_offset_by_one() {
        let table = sieve(9, SieveBound::Inclusive);
        assert_eq!(
            table.values(),
            &[false, true, true, false, true, false, true, false, false]
        );
        assert!(!table.is_prime(100));
        assert_eq!(table.bound(), 9);
    }

    #[test]
    fn counts_primes_below_one_thousand() {
        assert_eq!(sieve(1000, SieveBound::Inclusive).count(), 168);
    }
}
