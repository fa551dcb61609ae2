use crate::hash::SaltHash;
use crate::inputs::{Entry, Inputs};
use crate::stats::BuildStats;

/// The built minimal perfect hash table: every key it was constructed from
/// maps to a unique index in `[0..n)`, and lookups byte-verify the stored key
/// before answering.
///
/// Entries sit at their assigned index, which equals insertion order in the
/// original [`Inputs`]. Borrowed lookup results stay valid for the life of
/// the table.
#[derive(Debug)]
pub struct HashTable<P> {
    entries: Vec<Entry<P>>,
    h1: SaltHash,
    h2: SaltHash,
    g: Vec<u32>,
    m: u32,
    stats: BuildStats,
}

impl<P> HashTable<P> {
    pub(crate) fn from_parts(
        entries: Vec<Entry<P>>,
        h1: SaltHash,
        h2: SaltHash,
        g: Vec<u32>,
        m: u32,
        stats: BuildStats,
    ) -> Self {
        debug_assert_eq!(g.len(), m as usize);
        debug_assert!(m as usize > entries.len());
        Self { entries, h1, h2, g, m, stats }
    }

    /// O(length) point lookup.
    ///
    /// Probes longer than any inserted key are rejected before hashing (the
    /// salt has no entry for them, and drawing one here would perturb the
    /// randomness stream). A probe whose index arithmetic lands on a valid
    /// slot is still compared byte-for-byte against the stored key.
    pub fn lookup(&self, key: &[u8]) -> Option<&Entry<P>> {
        let r1 = self.h1.hash(key)?;
        let r2 = self.h2.hash(key)?;
        // Safety: r1, r2 < m and g.len() == m.
        let (ga, gb) = unsafe {
            (
                *self.g.get_unchecked(r1 as usize),
                *self.g.get_unchecked(r2 as usize),
            )
        };
        let i = ((ga as u64 + gb as u64) % self.m as u64) as usize;
        let entry = self.entries.get(i)?;
        if entry.key() == key {
            Some(entry)
        } else {
            None
        }
    }

    #[inline]
    pub fn lookup_str(&self, key: &str) -> Option<&Entry<P>> {
        self.lookup(key.as_bytes())
    }

    /// Visit every key in assigned-index order; the payload is mutable.
    pub fn apply<F>(&mut self, mut f: F)
    where
        F: FnMut(&[u8], &mut P),
    {
        for e in &mut self.entries {
            let (key, payload) = e.parts_mut();
            f(key, payload);
        }
    }

    /// The stored entries, indexed by assigned index.
    pub fn entries(&self) -> &[Entry<P>] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Entry<P>> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Counters from the construction run; zeroed unless the crate was built
    /// with the `stats` feature.
    pub fn statistics(&self) -> BuildStats {
        self.stats
    }

    /// Destroy the table and hand the keys back as a fresh collector, in
    /// their original insertion order, for modification and reuse.
    pub fn into_inputs(self) -> Inputs<P> {
        Inputs::from_entries(self.entries)
    }

    /// A new collector holding a copy of every stored key and payload.
    pub fn to_inputs(&self) -> Inputs<P>
    where
        P: Clone,
    {
        Inputs::from_entries(self.entries.clone())
    }
}

#[cfg(test)]
mod tests {
    use crate::{Builder, Inputs};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn sample_table() -> crate::HashTable<usize> {
        let mut inputs = Inputs::new();
        for (i, key) in ["foo", "bar", "donkey", "mineral"].iter().enumerate() {
            inputs.add(key.as_bytes(), i);
        }
        let mut rng = StdRng::seed_from_u64(2);
        Builder::new().build(&mut inputs, &mut rng).unwrap()
    }

    #[test]
    fn entries_sit_at_their_assigned_index() {
        let table = sample_table();
        for (i, e) in table.entries().iter().enumerate() {
            assert_eq!(*e.payload(), i);
            assert_eq!(table.lookup(e.key()).unwrap().key(), e.key());
        }
    }

    #[test]
    fn same_length_probe_is_byte_verified() {
        let table = sample_table();
        assert!(table.lookup(b"fop").is_none());
        assert!(table.lookup(b"mineral").is_some());
        assert!(table.lookup(b"minerax").is_none());
    }

    #[test]
    fn apply_visits_every_key_once_in_order() {
        let mut table = sample_table();
        let mut seen = Vec::new();
        table.apply(|key, p| {
            seen.push(key.to_vec());
            *p += 100;
        });
        assert_eq!(seen.len(), 4);
        assert_eq!(seen[0], b"foo");
        assert_eq!(*table.lookup(b"foo").unwrap().payload(), 100);
    }

    #[test]
    fn into_inputs_returns_keys_in_insertion_order() {
        let table = sample_table();
        let inputs = table.into_inputs();
        let keys: Vec<&[u8]> = inputs.iter().map(|e| e.key()).collect();
        assert_eq!(keys, [&b"foo"[..], b"bar", b"donkey", b"mineral"]);
    }

    #[test]
    fn to_inputs_copies_without_consuming() {
        let table = sample_table();
        let copy = table.to_inputs();
        assert_eq!(copy.len(), table.len());
        assert!(table.lookup(b"bar").is_some());
    }
}
