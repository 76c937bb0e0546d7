/// A Disjoint Set Union (DSU) with path compression and union by size.
///
/// Also tracks how many disjoint sets are currently alive, so callers can tell
/// the moment everything collapses into a single circuit.
#[derive(Debug, Clone)]
pub struct Dsu {
    parent: Vec<usize>,
    sizes: Vec<usize>,
    num_components: usize,
}

impl Dsu {
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            sizes: vec![1; n],
            num_components: n,
        }
    }

    /// Number of disjoint sets currently alive.
    pub fn components(&self) -> usize {
        self.num_components
    }

    /// Returns the root of `i`, pointing every node on the way directly at it.
    pub fn find(&mut self, i: usize) -> usize {
        let mut root = i;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        let mut node = i;
        while self.parent[node] != root {
            let next = self.parent[node];
            self.parent[node] = root;
            node = next;
        }

        root
    }

    /// Unifies sets. Returns `true` if a merge actually occurred (sets were disjoint).
    ///
    /// On equal sizes the root of `j` is attached under the root of `i`.
    pub fn union(&mut self, i: usize, j: usize) -> bool {
        let root_i = self.find(i);
        let root_j = self.find(j);

        if root_i == root_j {
            return false;
        }

        if self.sizes[root_i] < self.sizes[root_j] {
            self.parent[root_i] = root_j;
            self.sizes[root_j] += self.sizes[root_i];
        } else {
            self.parent[root_j] = root_i;
            self.sizes[root_i] += self.sizes[root_j];
        }
        self.num_components -= 1;

        true
    }

    /// One entry per root, in index order.
    pub fn component_sizes(&self) -> Vec<usize> {
        self.parent
            .iter()
            .enumerate()
            .filter(|&(i, &p)| i == p)
            .map(|(i, _)| self.sizes[i])
            .collect()
    }
}
