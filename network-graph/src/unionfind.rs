//! Disjoint-set forest over dense indices `0..n`.

/// Union-find with path halving and union by rank.
#[derive(Debug, Clone)]
pub struct UnionFind {
    parent: Vec<usize>,
    rank: Vec<u8>,
}

impl UnionFind {
    /// `n` singleton sets.
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![0; n],
        }
    }

    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Representative of the set holding `x`.
    ///
    /// **Panics** if `x` is out of bounds.
    pub fn find(&mut self, mut x: usize) -> usize {
        while self.parent[x] != x {
            let grandparent = self.parent[self.parent[x]];
            self.parent[x] = grandparent;
            x = grandparent;
        }
        x
    }

    /// Merge the sets holding `a` and `b`.
    ///
    /// Returns `false` when they were already in the same set, i.e. an edge
    /// between them would close a cycle.
    pub fn union(&mut self, a: usize, b: usize) -> bool {
        let root_a = self.find(a);
        let root_b = self.find(b);
        if root_a == root_b {
            return false;
        }
        match self.rank[root_a].cmp(&self.rank[root_b]) {
            std::cmp::Ordering::Less => self.parent[root_a] = root_b,
            std::cmp::Ordering::Greater => self.parent[root_b] = root_a,
            std::cmp::Ordering::Equal => {
                self.parent[root_b] = root_a;
                self.rank[root_a] += 1;
            }
        }
        true
    }

    /// True if `a` and `b` are in the same set.
    pub fn equiv(&mut self, a: usize, b: usize) -> bool {
        self.find(a) == self.find(b)
    }

    /// Representative of every element, by index.
    pub fn into_labeling(mut self) -> Vec<usize> {
        (0..self.parent.len()).map(|x| self.find(x)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_singletons() {
        let mut sets = UnionFind::new(4);
        assert_eq!(sets.len(), 4);
        for x in 0..4 {
            assert_eq!(sets.find(x), x);
        }
    }

    #[test]
    fn test_union_reports_merge() {
        let mut sets = UnionFind::new(5);
        assert!(sets.union(0, 1));
        assert!(sets.union(2, 3));
        assert!(sets.union(1, 3));
        assert!(!sets.union(0, 2));
        assert!(sets.equiv(0, 3));
        assert!(!sets.equiv(0, 4));
    }

    #[test]
    fn test_long_chain_compresses() {
        let n = 10_000;
        let mut sets = UnionFind::new(n);
        for x in 1..n {
            sets.union(x - 1, x);
        }
        let root = sets.find(n - 1);
        assert!((0..n).all(|x| sets.find(x) == root));
    }

    #[test]
    fn test_into_labeling() {
        let mut sets = UnionFind::new(4);
        sets.union(0, 2);
        let mut labels = sets.into_labeling();
        labels.sort_unstable();
        labels.dedup();
        assert_eq!(labels.len(), 3);
    }
}
