use tsp_core::{City, Error, Result, VisitedSet};

/// Default ceiling on N: 2^20 * 20 entries, a few hundred MiB across both tables.
pub const DEFAULT_MAX_CITIES: usize = 20;

/// Hard ceiling regardless of configuration; parents are stored as `u8` and
/// anything larger cannot be allocated anyway.
pub const MAX_SUPPORTED_CITIES: usize = 30;

pub(crate) const NO_PARENT: u8 = u8::MAX;

/// Number of `(mask, last)` entries a solve over `n` cities needs.
///
/// Fails with [`Error::ResourceExhausted`] when `n` is above `max_cities`
/// (clamped to [`MAX_SUPPORTED_CITIES`]) or the count overflows.
pub fn check_capacity(n: usize, max_cities: usize) -> Result<usize> {
    let limit = max_cities.min(MAX_SUPPORTED_CITIES);
    let exhausted = || Error::ResourceExhausted { cities: n, limit };
    if n > limit {
        return Err(exhausted());
    }
    1usize
        .checked_shl(n as u32)
        .and_then(|rows| rows.checked_mul(n))
        .ok_or_else(exhausted)
}

/// Allocates `entries` copies of `fill`, reporting allocation failure instead of aborting.
pub(crate) fn allocate<T: Clone>(n: usize, limit: usize, entries: usize, fill: T) -> Result<Vec<T>> {
    let mut table = Vec::new();
    table
        .try_reserve_exact(entries)
        .map_err(|_| Error::ResourceExhausted {
            cities: n,
            limit: limit.min(MAX_SUPPORTED_CITIES),
        })?;
    table.resize(entries, fill);
    Ok(table)
}

/// Dense `2^n × n` cost and predecessor tables, flattened to `mask * n + last`.
pub(crate) struct Table {
    n: usize,
    cost: Vec<f64>,
    parent: Vec<u8>,
}

impl Table {
    pub(crate) fn new(n: usize, max_cities: usize) -> Result<Self> {
        let entries = check_capacity(n, max_cities)?;
        Ok(Self {
            n,
            cost: allocate(n, max_cities, entries, f64::INFINITY)?,
            parent: allocate(n, max_cities, entries, NO_PARENT)?,
        })
    }

    pub(crate) fn len(&self) -> usize {
        self.cost.len()
    }

    #[inline(always)]
    fn slot(&self, mask: VisitedSet, last: City) -> usize {
        mask.index() * self.n + last
    }

    #[inline(always)]
    pub(crate) fn cost(&self, mask: VisitedSet, last: City) -> f64 {
        self.cost[self.slot(mask, last)]
    }

    #[inline(always)]
    pub(crate) fn parent(&self, mask: VisitedSet, last: City) -> u8 {
        self.parent[self.slot(mask, last)]
    }

    #[inline(always)]
    pub(crate) fn set(&mut self, mask: VisitedSet, last: City, cost: f64, parent: u8) {
        let slot = self.slot(mask, last);
        self.cost[slot] = cost;
        self.parent[slot] = parent;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capacity_is_mask_rows_times_cities() {
        assert_eq!(check_capacity(4, DEFAULT_MAX_CITIES).unwrap(), 64);
        assert_eq!(check_capacity(20, DEFAULT_MAX_CITIES).unwrap(), 20 << 20);
    }

    #[test]
    fn capacity_rejects_before_allocating() {
        assert!(matches!(
            check_capacity(21, DEFAULT_MAX_CITIES),
            Err(Error::ResourceExhausted {
                cities: 21,
                limit: 20
            })
        ));
        assert!(matches!(
            check_capacity(40, 64),
            Err(Error::ResourceExhausted {
                cities: 40,
                limit: MAX_SUPPORTED_CITIES
            })
        ));
    }

    #[test]
    fn table_starts_unreached() {
        let table = Table::new(3, DEFAULT_MAX_CITIES).unwrap();
        assert_eq!(table.len(), 24);
        let mask = VisitedSet::single(0).with(2);
        assert_eq!(table.cost(mask, 2), f64::INFINITY);
        assert_eq!(table.parent(mask, 2), NO_PARENT);
    }
}
