use crate::SyntaxKind;

const SLOTS: usize = 2;

/// Compact bit set of [`SyntaxKind`]s, usable in `const` context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SyntaxSet {
    bits: [u64; SLOTS],
}

/// Slot index and bit mask of `kind`.
const fn locate(kind: SyntaxKind) -> (usize, u64) {
    let kind = kind as u16 as u32;
    let slot = (kind / u64::BITS) as usize;
    assert!(slot < SLOTS, "SyntaxSet is too small for this kind");
    (slot, 1 << (kind % u64::BITS))
}

impl SyntaxSet {
    pub const EMPTY: Self = Self { bits: [0; SLOTS] };

    pub const fn new<const N: usize>(kinds: [SyntaxKind; N]) -> Self {
        let mut bits = [0; SLOTS];
        let mut i = 0;
        while i < N {
            let (slot, mask) = locate(kinds[i]);
            bits[slot] |= mask;
            i += 1;
        }
        Self { bits }
    }

    pub const fn union(mut self, other: &Self) -> Self {
        let mut slot = 0;
        while slot < SLOTS {
            self.bits[slot] |= other.bits[slot];
            slot += 1;
        }
        self
    }

    #[inline]
    pub const fn contains(&self, kind: SyntaxKind) -> bool {
        let (slot, mask) = locate(kind);
        self.bits[slot] & mask != 0
    }
}
