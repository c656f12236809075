use crate::City;

/// Set of cities packed into a bitmask; bit `i` is city `i`.
///
/// Held-Karp indexes its tables with the raw bits, so the mask doubles as a
/// table row number.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VisitedSet(u64);

impl VisitedSet {
    /// Largest city count a mask can describe.
    pub const MAX_CITIES: usize = u64::BITS as usize;

    pub const EMPTY: VisitedSet = VisitedSet(0);

    pub fn from_bits(bits: u64) -> Self {
        Self(bits)
    }

    pub fn single(city: City) -> Self {
        Self(1 << city)
    }

    /// Every city in `0..n`.
    pub fn full(n: usize) -> Self {
        debug_assert!(n <= Self::MAX_CITIES);
        if n == Self::MAX_CITIES {
            Self(u64::MAX)
        } else {
            Self((1u64 << n) - 1)
        }
    }

    #[inline(always)]
    pub fn bits(self) -> u64 {
        self.0
    }

    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    #[inline(always)]
    pub fn contains(self, city: City) -> bool {
        self.0 & (1 << city) != 0
    }

    #[inline(always)]
    pub fn with(self, city: City) -> Self {
        Self(self.0 | (1 << city))
    }

    #[inline(always)]
    pub fn without(self, city: City) -> Self {
        Self(self.0 & !(1 << city))
    }

    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn iter(self) -> impl Iterator<Item = City> {
        let mut rest = self.0;
        std::iter::from_fn(move || {
            if rest == 0 {
                return None;
            }
            let city = rest.trailing_zeros() as City;
            rest &= rest - 1;
            Some(city)
        })
    }
}
