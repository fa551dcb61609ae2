/// Counters describing one construction run.
///
/// Collected only when the crate is compiled with the `stats` feature;
/// without it every field reads zero.
#[derive(Debug, Default, Clone, Copy)]
pub struct BuildStats {
    /// Construction trials, counting the successful one.
    pub iterations: usize,
    /// Vertices marked visited across all trials.
    pub nodes_explored: usize,
    /// Uniform draws taken from the caller's RNG (one per new salt position).
    pub rand_calls: usize,
    /// Key hashes computed across all trials.
    pub hashes_calculated: usize,
    /// Final graph size m, also the length of the value table.
    pub graph_size: usize,
    /// Length of the longest key, equal to the trained salt length.
    pub key_length_max: usize,
    /// Smallest edge-list capacity across vertices after the final trial.
    pub edge_capacity_min: usize,
    /// Largest edge-list capacity across vertices after the final trial.
    pub edge_capacity_max: usize,
    /// Slots allocated for the traversal work stack.
    pub vertex_stack_capacity: usize,
}

/// Counters describing an [`Inputs`](crate::Inputs) collector.
///
/// `capacity` is always live; the rest require the `stats` feature.
#[derive(Debug, Default, Clone, Copy)]
pub struct InputsStats {
    /// Times the entry pool grew, whether from an add or an explicit hint.
    pub n_growths: usize,
    /// Current capacity of the entry pool.
    pub capacity: usize,
    /// Safe adds that found no existing entry and appended.
    pub n_safe_adds_were_safe: usize,
    /// Safe adds that hit an existing entry and did nothing.
    pub n_safe_adds_were_unsafe: usize,
}
