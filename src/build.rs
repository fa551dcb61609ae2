use crate::graph::Graph;
use crate::hash::SaltHash;
use crate::inputs::Inputs;
use crate::stats::BuildStats;
use crate::table::HashTable;
use log::warn;
use rand::Rng;
use thiserror::Error;

/// Build parameters. The defaults bound the search well past the point where
/// a random trial graph at ratio m/n ≈ 2 is expected to go acyclic.
#[derive(Debug, Clone)]
pub struct BuildConfig {
    /// Give up once the graph reaches `max_graph_scale * (n + 1)` vertices.
    pub max_graph_scale: u64,
    /// Consider growing the graph after every this many failed trials.
    pub grow_interval: u64,
    /// Multiplicative growth numerator: m ← m · growth_num / growth_den.
    pub growth_num: u64,
    /// Multiplicative growth denominator; also the fixed-point scale the
    /// running graph size is tracked in.
    pub growth_den: u64,
    /// Edge slots reserved per vertex on each trial; 0 leaves growth to the
    /// edge lists themselves.
    pub edge_capacity_hint: usize,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            max_graph_scale: 650,
            grow_interval: 5,
            growth_num: 1075,
            growth_den: 1024,
            edge_capacity_hint: 0,
        }
    }
}

#[derive(Debug, Error)]
pub enum BuildError {
    #[error("cannot build over an empty key set")]
    EmptyInputs,
    #[error("graph grew past the search cap without going acyclic")]
    Exhausted,
}

/// Drives CHM construction: repeated trials with fresh salts, growing the
/// graph when trials keep failing.
pub struct Builder {
    cfg: BuildConfig,
}

impl Builder {
    pub fn new() -> Self {
        Self { cfg: BuildConfig::default() }
    }

    pub fn with_config(mut self, cfg: BuildConfig) -> Self {
        self.cfg = cfg;
        self
    }

    /// Build a table over every key in `inputs`, drawing salts from `rng`.
    ///
    /// On success the keys move into the returned table and `inputs` is left
    /// empty (but valid). On failure `inputs` is untouched. For a fixed seed
    /// and insertion order the result is fully deterministic.
    pub fn build<P, R: Rng>(
        &self,
        inputs: &mut Inputs<P>,
        rng: &mut R,
    ) -> Result<HashTable<P>, BuildError> {
        let n = inputs.len() as u64;
        if n == 0 {
            return Err(BuildError::EmptyInputs);
        }
        // Vertex ids and edge labels are u32.
        assert!(n < u32::MAX as u64, "key set exceeds u32 vertex space");

        let cap = self.cfg.max_graph_scale.saturating_mul(n + 1);
        let mut m = n + 1;
        // Graph size in fixed-point (units of 1/growth_den), so sub-vertex
        // growth accumulates across rounds instead of truncating to zero.
        let mut scaled = m * self.cfg.growth_den;
        let mut iteration: u64 = 0;

        let mut graph = Graph::new();
        graph.ensure_vertices(m as u32);
        let mut h1 = SaltHash::new();
        let mut h2 = SaltHash::new();
        #[cfg_attr(not(feature = "stats"), allow(unused_mut))]
        let mut stats = BuildStats::default();

        loop {
            if iteration > 0 && iteration % self.cfg.grow_interval == 0 {
                scaled = scaled * self.cfg.growth_num / self.cfg.growth_den;
                let m_next = scaled / self.cfg.growth_den;
                if m_next > m {
                    m = m_next;
                    if m <= u32::MAX as u64 {
                        graph.ensure_vertices(m as u32);
                    }
                }
                if m >= cap || m > u32::MAX as u64 {
                    warn!(
                        "giving up on {n} keys: graph reached {m} vertices after {iteration} trials"
                    );
                    return Err(BuildError::Exhausted);
                }
            }
            iteration += 1;

            graph.wipe(self.cfg.edge_capacity_hint);
            h1.reset(m as u32);
            h2.reset(m as u32);
            for (i, entry) in inputs.iter().enumerate() {
                let a = h1.hash_grow(entry.key(), rng);
                let b = h2.hash_grow(entry.key(), rng);
                graph.biconnect(a, b, i as u32);
            }
            #[cfg(feature = "stats")]
            {
                stats.hashes_calculated += 2 * n as usize;
                stats.rand_calls += h1.trained_len() + h2.trained_len();
            }

            let resolved = graph.resolve();
            #[cfg(feature = "stats")]
            {
                stats.nodes_explored += graph.explored();
            }
            if resolved {
                break;
            }
        }

        #[cfg(feature = "stats")]
        {
            stats.iterations = iteration as usize;
            stats.graph_size = m as usize;
            stats.key_length_max = h1.trained_len();
            let (lo, hi) = graph.edge_capacity_range();
            stats.edge_capacity_min = lo;
            stats.edge_capacity_max = hi;
            stats.vertex_stack_capacity = graph.stack_capacity();
        }

        let entries = inputs.take_entries();
        Ok(HashTable::from_parts(entries, h1, h2, graph.values(), m as u32, stats))
    }
}
