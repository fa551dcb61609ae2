use chm_hash::{Builder, HashTable, Inputs};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashSet;

fn key_set() -> impl Strategy<Value = HashSet<Vec<u8>>> {
    prop::collection::hash_set(prop::collection::vec(any::<u8>(), 1..24), 1..64)
}

fn build_indexed(keys: &[Vec<u8>], seed: u64) -> HashTable<usize> {
    let mut inputs = Inputs::with_capacity(keys.len());
    for (i, key) in keys.iter().enumerate() {
        inputs.add(key, i);
    }
    let mut rng = StdRng::seed_from_u64(seed);
    Builder::new()
        .build(&mut inputs, &mut rng)
        .expect("construction over a unique key set should succeed")
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    // Every inserted key maps to its own record, at its insertion index.
    #[test]
    fn every_key_finds_its_own_record(keys in key_set(), seed in any::<u64>()) {
        let keys: Vec<Vec<u8>> = keys.into_iter().collect();
        let table = build_indexed(&keys, seed);
        prop_assert_eq!(table.len(), keys.len());
        for (i, key) in keys.iter().enumerate() {
            let entry = table.lookup(key).expect("inserted key must be found");
            prop_assert_eq!(entry.key(), &key[..]);
            prop_assert_eq!(*entry.payload(), i);
        }
    }

    // A probe outside the set never comes back found, whatever its hash
    // arithmetic lands on.
    #[test]
    fn absent_probes_are_rejected(
        keys in key_set(),
        probe in prop::collection::vec(any::<u8>(), 1..24),
        seed in any::<u64>(),
    ) {
        prop_assume!(!keys.contains(&probe));
        let keys: Vec<Vec<u8>> = keys.into_iter().collect();
        let table = build_indexed(&keys, seed);
        prop_assert!(table.lookup(&probe).is_none());
    }

    // Same seed, same insertion order: the two tables agree on every probe.
    #[test]
    fn construction_is_deterministic(
        keys in key_set(),
        probes in prop::collection::vec(prop::collection::vec(any::<u8>(), 0..32), 0..16),
        seed in any::<u64>(),
    ) {
        let keys: Vec<Vec<u8>> = keys.into_iter().collect();
        let a = build_indexed(&keys, seed);
        let b = build_indexed(&keys, seed);
        for probe in keys.iter().chain(probes.iter()) {
            let ra = a.lookup(probe).map(|e| *e.payload());
            let rb = b.lookup(probe).map(|e| *e.payload());
            prop_assert_eq!(ra, rb);
        }
    }

    // Recycling hands back the original keys, byte-identical, in insertion
    // order.
    #[test]
    fn recycled_inputs_round_trip(keys in key_set(), seed in any::<u64>()) {
        let keys: Vec<Vec<u8>> = keys.into_iter().collect();
        let table = build_indexed(&keys, seed);
        let inputs = table.into_inputs();
        let returned: Vec<&[u8]> = inputs.iter().map(|e| e.key()).collect();
        let original: Vec<&[u8]> = keys.iter().map(|k| &k[..]).collect();
        prop_assert_eq!(returned, original);
    }
}
