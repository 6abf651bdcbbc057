/// Trial-division primality, used as ground truth for the sieve.
pub fn is_prime(n: usize) -> bool {
    if n < 2 {
        return false;
    }
    let mut d = 2usize;
    while d * d <= n {
        if n % d == 0 {
            return false;
        }
        d += 1;
    }
    true
}

/// Whether `n` is the square of an odd prime.
#[allow(dead_code)]
pub fn is_odd_prime_square(n: usize) -> bool {
    let r = (n as f64).sqrt().round() as usize;
    r * r == n && r % 2 == 1 && is_prime(r)
}
