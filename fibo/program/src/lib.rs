//! Iterative Fibonacci over 32-bit signed integers.
//!
//! Every addition wraps, so terms past the 46th are the two's-complement
//! remainder of the true value rather than the value itself.
#![cfg_attr(not(test), no_std)]

/// Iterations run by the `fibo` binary.
pub const N: u32 = 127;

/// Two consecutive terms of the sequence, `t1` before `t2`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Fibo {
    pub t1: i32,
    pub t2: i32,
}

impl Default for Fibo {
    fn default() -> Self {
        Self::SEED
    }
}

impl Fibo {
    pub const SEED: Self = Self { t1: 0, t2: 1 };

    /// Advances the pair by one term. Naturally overflows at 32 bits.
    #[must_use]
    pub const fn step(self) -> Self {
        Self {
            t1: self.t2,
            t2: self.t1.wrapping_add(self.t2),
        }
    }

    /// Applies [`Fibo::step`] exactly `n` times to the seed.
    #[must_use]
    pub const fn run(n: u32) -> Self {
        let mut fibo = Self::SEED;
        let mut i = 0;
        while i < n {
            fibo = fibo.step();
            i += 1;
        }
        fibo
    }
}

/// The `n`'th term, wrapped to `i32`.
#[must_use]
pub const fn fib(n: u32) -> i32 {
    Fibo::run(n).t1
}

/// Infinite iterator over the (wrapping) terms, starting at `fib(0)`.
pub fn terms() -> impl Iterator<Item = i32> {
    core::iter::successors(Some(Fibo::SEED), |fibo| Some(fibo.step())).map(|fibo| fibo.t1)
}

/// Low byte of `value`, i.e. what a process exit status keeps of it.
#[must_use]
pub const fn exit_status(value: i32) -> u8 {
    value.to_le_bytes()[0]
}
