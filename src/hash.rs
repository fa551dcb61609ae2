use rand::Rng;

/// Per-position salted hash: h(key) = Σ key[i]·salt[i], reduced mod m.
///
/// Salt coefficients live in `[0, m)` and are drawn lazily the first time a
/// key position is seen, so after construction the salt covers exactly the
/// longest key hashed. Two independent instances (h₁, h₂) share the caller's
/// RNG but own their state.
#[derive(Debug, Clone)]
pub(crate) struct SaltHash {
    salt: Vec<u32>,
    m: u32,
}

impl SaltHash {
    pub fn new() -> Self {
        Self { salt: Vec::new(), m: 1 }
    }

    /// Start a fresh trial at modulus `m`: every salt entry is dropped (the
    /// buffer is kept) and will be redrawn on demand. Salts are reduced into
    /// `[0, m)` when drawn, so a modulus change always means a full redraw.
    pub fn reset(&mut self, m: u32) {
        debug_assert!(m > 0);
        self.salt.clear();
        self.m = m;
    }

    /// Number of key positions with a defined salt.
    #[inline]
    pub fn trained_len(&self) -> usize {
        self.salt.len()
    }

    /// Construction-mode hash: extends the salt to cover `key`, one uniform
    /// draw in `[0, m)` per new position.
    pub fn hash_grow<R: Rng>(&mut self, key: &[u8], rng: &mut R) -> u32 {
        while self.salt.len() < key.len() {
            self.salt.push(rng.gen_range(0..self.m));
        }
        self.fold(key)
    }

    /// Lookup-mode hash against the frozen salt. Keys longer than anything
    /// seen during construction hash to `None`; nothing is ever drawn here.
    #[inline]
    pub fn hash(&self, key: &[u8]) -> Option<u32> {
        if key.len() > self.salt.len() {
            return None;
        }
        Some(self.fold(key))
    }

    // Single reduction at the end; each term is < 2^40, so the accumulator
    // holds any key length at m ≤ u32::MAX.
    #[inline]
    fn fold(&self, key: &[u8]) -> u32 {
        let sum: u128 = key
            .iter()
            .zip(&self.salt)
            .map(|(&b, &s)| b as u128 * s as u128)
            .sum();
        (sum % self.m as u128) as u32
    }
}
