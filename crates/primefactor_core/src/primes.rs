//! Trial-division prime counting.
//!
//! This is deliberately the simplest correct algorithm: odd candidates, odd divisors from 3, and a
//! stop at the first divisor whose square exceeds the candidate. It exists as a benchmark payload,
//! so there is no sieve, no memoization and no parallelism.

/// Largest limit accepted by [`count_primes`] (2³²).
///
/// Larger limits are clamped to this value. Within it, `divisor * divisor` cannot overflow `u64`.
pub const MAX_LIMIT: u64 = 1 << 32;

/// Clamp a requested limit to [`MAX_LIMIT`].
///
/// ## Examples
/// ```rust
/// use primefactor_core::{clamp_limit, MAX_LIMIT};
/// assert_eq!(clamp_limit(100), 100);
/// assert_eq!(clamp_limit(u64::MAX), MAX_LIMIT);
/// ```
#[inline]
pub fn clamp_limit(limit: u64) -> u64 {
    limit.min(MAX_LIMIT)
}

/// Count the primes in `[1, limit)`.
///
/// ## Parameters
/// - `limit`: exclusive upper bound of the scanned range; clamped to [`MAX_LIMIT`].
///
/// ## Returns
/// - (`u64`): `0` when `limit < 2`, otherwise `1` (for the prime 2) plus the number of odd candidates in
///   `[3, limit)` that have no odd divisor `d` with `3 <= d` and `d * d <= candidate`.
///
/// ## Notes
/// - Cost is `O(limit · √limit)`. There are no side effects and no hidden state, so repeated calls with
///   the same limit return the same count.
///
/// ## Examples
/// ```rust
/// use primefactor_core::count_primes;
/// assert_eq!(count_primes(10), 4);
/// assert_eq!(count_primes(100), 25);
/// ```
#[tracing::instrument(level = "debug", skip_all, fields(limit = limit))]
pub fn count_primes(limit: u64) -> u64 {
    let limit = clamp_limit(limit);
    if limit < 2 {
        return 0;
    }

    let odd_primes = (3..limit).step_by(2).filter(|&candidate| !has_odd_divisor(candidate)).count();

    // +1 for the prime 2
    odd_primes as u64 + 1
}

/// Check whether an odd candidate (>= 3, <= `MAX_LIMIT`) has an odd divisor no larger than its square root.
#[inline]
fn has_odd_divisor(candidate: u64) -> bool {
    debug_assert!(candidate >= 3 && candidate % 2 == 1 && candidate <= MAX_LIMIT);

    let mut divisor = 3;
    while divisor * divisor <= candidate {
        if candidate % divisor == 0 {
            return true;
        }
        divisor += 2;
    }
    false
}

/// Primality test for a single value.
///
/// Accepts the full `u64` range. The loop bound is written as `divisor <= n / divisor` so it cannot
/// overflow for values above [`MAX_LIMIT`].
pub fn is_prime(n: u64) -> bool {
    if n <= 1 {
        return false;
    }
    if n == 2 {
        return true;
    }
    if n % 2 == 0 {
        return false;
    }

    let mut divisor = 3;
    while divisor <= n / divisor {
        if n % divisor == 0 {
            return false;
        }
        divisor += 2;
    }
    true
}
