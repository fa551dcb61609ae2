/// Vertex value before `resolve` labels it.
pub(crate) const UNASSIGNED: u32 = u32::MAX;

const NO_PARENT: u32 = u32::MAX;

#[derive(Debug, Clone, Copy)]
struct Edge {
    to: u32,
    label: u32,
}

#[derive(Debug, Default, Clone)]
struct Vertex {
    value: u32,
    visited: bool,
    edges: Vec<Edge>,
}

/// Undirected multigraph over m vertices used by one construction trial.
///
/// Each key becomes a pair of symmetric edges between its two hash values,
/// labeled with the key's assigned index. Vertices, edge lists and the
/// traversal stack keep their allocations across trials; `wipe` only resets
/// the contents.
#[derive(Debug, Default)]
pub(crate) struct Graph {
    vertices: Vec<Vertex>,
    // (vertex, parent) work stack; explicit so resolution never recurses
    // over m host-stack frames.
    stack: Vec<(u32, u32)>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Grow to at least `m` vertices; never shrinks. New vertices are zeroed.
    pub fn ensure_vertices(&mut self, m: u32) {
        if self.vertices.len() < m as usize {
            self.vertices.resize_with(m as usize, Vertex::default);
        }
    }

    /// Reset every vertex for a fresh trial, keeping edge-list capacity.
    /// A non-zero `edge_capacity_hint` pre-reserves that many slots per
    /// vertex to trade memory for fewer regrows.
    pub fn wipe(&mut self, edge_capacity_hint: usize) {
        for v in &mut self.vertices {
            v.value = UNASSIGNED;
            v.visited = false;
            v.edges.clear();
            if v.edges.capacity() < edge_capacity_hint {
                v.edges.reserve(edge_capacity_hint);
            }
        }
    }

    pub fn connect(&mut self, from: u32, to: u32, label: u32) {
        self.vertices[from as usize].edges.push(Edge { to, label });
    }

    /// Insert an undirected edge as two directed edges carrying `label`.
    pub fn biconnect(&mut self, a: u32, b: u32, label: u32) {
        self.connect(a, b, label);
        self.connect(b, a, label);
    }

    /// Acyclicity check with simultaneous vertex labeling.
    ///
    /// Walks every component from its lowest-numbered vertex (value 0),
    /// assigning each newly reached vertex `(label - value[u]) mod m` so that
    /// the two endpoint values of an edge sum to its label. Exactly one
    /// incidence equal to the parent is skipped per pop; any other edge to an
    /// already-visited vertex is a cycle and fails the trial immediately.
    /// Parallel edges and self-loops fall out of that rule as 2- and
    /// 1-cycles.
    pub fn resolve(&mut self) -> bool {
        let m = self.vertices.len() as u64;
        self.stack.clear();
        for r in 0..self.vertices.len() {
            if self.vertices[r].visited {
                continue;
            }
            self.vertices[r].value = 0;
            self.stack.push((r as u32, NO_PARENT));
            while let Some((u, parent)) = self.stack.pop() {
                let u = u as usize;
                self.vertices[u].visited = true;
                let base = self.vertices[u].value as u64;
                let mut parent_pending = parent != NO_PARENT;
                for i in 0..self.vertices[u].edges.len() {
                    let Edge { to: w, label } = self.vertices[u].edges[i];
                    if parent_pending && w == parent {
                        parent_pending = false;
                        continue;
                    }
                    if self.vertices[w as usize].visited {
                        return false;
                    }
                    self.vertices[w as usize].value = ((label as u64 + m - base) % m) as u32;
                    self.stack.push((w, u as u32));
                }
            }
        }
        true
    }

    /// The value table after a successful `resolve`.
    pub fn values(&self) -> Vec<u32> {
        self.vertices.iter().map(|v| v.value).collect()
    }

    #[cfg(feature = "stats")]
    pub fn explored(&self) -> usize {
        self.vertices.iter().filter(|v| v.visited).count()
    }

    #[cfg(feature = "stats")]
    pub fn edge_capacity_range(&self) -> (usize, usize) {
        let caps = self.vertices.iter().map(|v| v.edges.capacity());
        (caps.clone().min().unwrap_or(0), caps.max().unwrap_or(0))
    }

    #[cfg(feature = "stats")]
    pub fn stack_capacity(&self) -> usize {
        self.stack.capacity()
    }
}
