use lazy_static::lazy_static;
use rustc_hash::FxHashMap;
use std::cell::{Cell, RefCell};
use std::sync::Mutex;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FactorialError {
    #[error("factorial is undefined for negative input ({n})")]
    NegativeInput { n: i64 },

    #[error("factorial of {n} exceeds the 128-bit result range")]
    Overflow { n: u64 },
}

/// Memoizing factorial calculator.
///
/// A value is computed once per key and served from the memo table on
/// every later request, so results for a key are identical across calls
/// and a query for `n` fills in every smaller key along the way. The
/// table is never invalidated: it lives as long as the instance does.
///
/// Construct one instance per test with [`FactorialCache::new`]; demos
/// that want a single process-wide calculator use [`shared`].
#[derive(Debug, Default)]
pub struct FactorialCache {
    values: RefCell<FxHashMap<u64, u128>>,
    computations: Cell<usize>,
}

impl FactorialCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// How many values were actually computed, as opposed to served
    /// from the memo table. Tests use this to prove a hit.
    pub fn computations(&self) -> usize {
        self.computations.get()
    }

    pub fn cached_len(&self) -> usize {
        self.values.borrow().len()
    }

    /// The factorial of `n`, memoized. Negative input is a domain
    /// error; a result that no longer fits the 128-bit value type is an
    /// overflow error rather than a crash.
    pub fn value_for(&self, n: i64) -> Result<u128, FactorialError> {
        if n < 0 {
            return Err(FactorialError::NegativeInput { n });
        }
        self.factorial(n as u64)
    }

    fn factorial(&self, n: u64) -> Result<u128, FactorialError> {
        if let Some(&cached) = self.values.borrow().get(&n) {
            return Ok(cached);
        }

        let value = if n <= 1 {
            self.computations.set(self.computations.get() + 1);
            1
        } else {
            let previous = self.factorial(n - 1)?;
            self.computations.set(self.computations.get() + 1);
            previous
                .checked_mul(u128::from(n))
                .ok_or(FactorialError::Overflow { n })?
        };

        self.values.borrow_mut().insert(n, value);
        Ok(value)
    }
}

lazy_static! {
    static ref SHARED: Mutex<FactorialCache> = Mutex::new(FactorialCache::new());
}

/// The process-wide calculator: created on first use, dropped at exit,
/// its memo table shared by every caller in the process. Lock it, run
/// the query, drop the guard.
pub fn shared() -> &'static Mutex<FactorialCache> {
    &SHARED
}
