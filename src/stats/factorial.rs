use std::sync::{PoisonError, RwLock};

/// Memoized factorial table.
///
/// Entries are appended in order, each one computed from its predecessor, so
/// `get(n) == n * get(n - 1)` holds exactly. The natural log of every entry is
/// kept alongside for ratios whose direct products overflow `f64`.
#[derive(Debug)]
pub struct Factorials {
    table: RwLock<Table>,
}

#[derive(Debug)]
struct Table {
    exact: Vec<f64>,
    ln: Vec<f64>,
}

impl Factorials {
    pub fn new() -> Self {
        Factorials {
            table: RwLock::new(Table {
                exact: vec![1.0, 1.0],
                ln: vec![0.0, 0.0],
            }),
        }
    }

    /// n! for n >= 0, NaN for negative n.
    pub fn get(&self, n: i64) -> f64 {
        if n < 0 {
            return f64::NAN;
        }
        if n < 2 {
            return 1.0;
        }
        self.lookup(n as usize, |t, i| t.exact[i])
    }

    /// ln(n!) for n >= 0, NaN for negative n.
    pub fn ln(&self, n: i64) -> f64 {
        if n < 0 {
            return f64::NAN;
        }
        if n < 2 {
            return 0.0;
        }
        self.lookup(n as usize, |t, i| t.ln[i])
    }

    /// Extend the table through `n` so later lookups only take read locks.
    pub fn warm(&self, n: i64) {
        if n >= 2 {
            self.grow(n as usize);
        }
    }

    /// Number of entries memoized so far.
    pub fn cached(&self) -> usize {
        self.table
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .exact
            .len()
    }

    fn lookup(&self, n: usize, read: impl Fn(&Table, usize) -> f64) -> f64 {
        {
            let table = self.table.read().unwrap_or_else(PoisonError::into_inner);
            if n < table.exact.len() {
                return read(&table, n);
            }
        }
        self.grow(n);
        let table = self.table.read().unwrap_or_else(PoisonError::into_inner);
        read(&table, n)
    }

    fn grow(&self, n: usize) {
        // a racing writer may have grown the table already; every entry is
        // a pure function of its index so re-checking under the lock suffices
        let mut table = self.table.write().unwrap_or_else(PoisonError::into_inner);
        while table.exact.len() <= n {
            let i = table.exact.len();
            let exact = i as f64 * table.exact[i - 1];
            let ln = table.ln[i - 1] + (i as f64).ln();
            table.exact.push(exact);
            table.ln.push(ln);
        }
    }
}

impl Default for Factorials {
    fn default() -> Self {
        Self::new()
    }
}
