#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Id(pub u64);

impl Id {
    pub const fn raw(v: u64) -> Self {
        Self(v)
    }
}

/// A stable (build-independent) id builder based on FNV-1a 64-bit hashing.
///
/// `std` hashers are avoided because their output is not guaranteed to be
/// stable across Rust versions/platforms.
#[derive(Clone, Copy, Debug)]
pub struct IdPath {
    h: u64,
}

const FNV_OFFSET_BASIS_64: u64 = 0xcbf29ce484222325;
const FNV_PRIME_64: u64 = 0x100000001b3;

impl IdPath {
    pub fn root(ns: &'static str) -> Self {
        Self {
            h: FNV_OFFSET_BASIS_64,
        }
        .feed(ns.as_bytes())
    }

    pub fn push_str(self, s: &str) -> Self {
        // Separator byte reduces accidental concatenation collisions.
        self.feed(s.as_bytes()).feed(&[0xff])
    }

    pub fn push_u64(self, v: u64) -> Self {
        self.feed(&v.to_le_bytes()).feed(&[0xff])
    }

    pub fn finish(self) -> Id {
        Id(self.h)
    }

    fn feed(mut self, bytes: &[u8]) -> Self {
        for &b in bytes {
            self.h ^= b as u64;
            self.h = self.h.wrapping_mul(FNV_PRIME_64);
        }
        self
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/core/id.rs"]
mod tests;
