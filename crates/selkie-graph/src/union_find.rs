//! Union-find structures used by Kruskal's algorithm and single-link clustering.
//!
//! [`UnionFind`] is the eager variant: every object stores its leader directly, so `find` is
//! O(1), and `union` relabels the members of the smaller group. An object changes leader only
//! when its group at least doubles, so it is relabelled O(log n) times over its lifetime.
//!
//! [`LazyUnionFind`] works over dense indices with union by rank and path compression.

use rustc_hash::FxBuildHasher;
use std::fmt::Debug;
use std::hash::Hash;

type HashMap<K, V> = hashbrown::HashMap<K, V, FxBuildHasher>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UnionFindError {
    /// The name is not the leader of any current group, either because it was never added or
    /// because its group has already been merged into another one.
    #[error("no group is led by {name}")]
    UnknownGroup { name: String },
}

#[derive(Debug, Clone)]
pub struct UnionFind<K> {
    leaders: HashMap<K, K>,
    groups: HashMap<K, Vec<K>>,
}

impl<K> UnionFind<K>
where
    K: Eq + Hash + Clone + Debug,
{
    /// Starts with one singleton group per distinct object. Duplicates are ignored.
    pub fn new(objects: impl IntoIterator<Item = K>) -> Self {
        let mut leaders: HashMap<K, K> = HashMap::default();
        let mut groups: HashMap<K, Vec<K>> = HashMap::default();
        for obj in objects {
            if leaders.contains_key(&obj) {
                continue;
            }
            leaders.insert(obj.clone(), obj.clone());
            groups.insert(obj.clone(), vec![obj]);
        }
        Self { leaders, groups }
    }

    pub fn len(&self) -> usize {
        self.leaders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.leaders.is_empty()
    }

    pub fn num_groups(&self) -> usize {
        self.groups.len()
    }

    /// Name of the group `obj` belongs to, i.e. its leader.
    pub fn find(&self, obj: &K) -> Option<&K> {
        self.leaders.get(obj)
    }

    pub fn group(&self, leader: &K) -> Option<&[K]> {
        self.groups.get(leader).map(Vec::as_slice)
    }

    pub fn same_group(&self, a: &K, b: &K) -> bool {
        match (self.find(a), self.find(b)) {
            (Some(la), Some(lb)) => la == lb,
            _ => false,
        }
    }

    /// Merges the groups named `group_a` and `group_b` and returns the surviving name.
    ///
    /// The smaller group takes the larger group's leader; on a size tie `group_a` survives.
    /// Both names must lead a current group, so naming a group that was already merged away is
    /// an [`UnionFindError::UnknownGroup`] error. Uniting a group with itself is a no-op.
    pub fn union(&mut self, group_a: &K, group_b: &K) -> Result<K, UnionFindError> {
        for name in [group_a, group_b] {
            if !self.groups.contains_key(name) {
                return Err(UnionFindError::UnknownGroup {
                    name: format!("{name:?}"),
                });
            }
        }
        if group_a == group_b {
            return Ok(group_a.clone());
        }

        let len_a = self.groups.get(group_a).map_or(0, Vec::len);
        let len_b = self.groups.get(group_b).map_or(0, Vec::len);
        let (larger, smaller) = if len_a >= len_b {
            (group_a.clone(), group_b.clone())
        } else {
            (group_b.clone(), group_a.clone())
        };

        let moved = self.groups.remove(&smaller).unwrap_or_default();
        for member in &moved {
            self.leaders.insert(member.clone(), larger.clone());
        }
        self.groups.entry(larger.clone()).or_default().extend(moved);
        Ok(larger)
    }

    /// Unites the groups containing `x` and `y`. Returns `Ok(false)` when they already share a
    /// group.
    pub fn union_members(&mut self, x: &K, y: &K) -> Result<bool, UnionFindError> {
        let lx = self.leader_of(x)?;
        let ly = self.leader_of(y)?;
        if lx == ly {
            return Ok(false);
        }
        self.union(&lx, &ly)?;
        Ok(true)
    }

    fn leader_of(&self, obj: &K) -> Result<K, UnionFindError> {
        self.find(obj)
            .cloned()
            .ok_or_else(|| UnionFindError::UnknownGroup {
                name: format!("{obj:?}"),
            })
    }
}

#[derive(Debug, Clone)]
pub struct LazyUnionFind {
    parent: Vec<usize>,
    rank: Vec<u8>,
    groups: usize,
}

impl LazyUnionFind {
    pub fn new(len: usize) -> Self {
        Self {
            parent: (0..len).collect(),
            rank: vec![0; len],
            groups: len,
        }
    }

    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    pub fn num_groups(&self) -> usize {
        self.groups
    }

    /// Root of `x`, compressing the path on the way.
    ///
    /// # Panics
    ///
    /// Panics if `x >= self.len()`.
    pub fn find(&mut self, x: usize) -> usize {
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        let mut cur = x;
        while self.parent[cur] != root {
            let next = self.parent[cur];
            self.parent[cur] = root;
            cur = next;
        }
        root
    }

    /// Unites the groups of `a` and `b`; returns `false` if they were already together.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of range.
    pub fn union(&mut self, a: usize, b: usize) -> bool {
        let ra = self.find(a);
        let rb = self.find(b);
        if ra == rb {
            return false;
        }
        match self.rank[ra].cmp(&self.rank[rb]) {
            std::cmp::Ordering::Less => self.parent[ra] = rb,
            std::cmp::Ordering::Greater => self.parent[rb] = ra,
            std::cmp::Ordering::Equal => {
                self.parent[rb] = ra;
                self.rank[ra] = self.rank[ra].saturating_add(1);
            }
        }
        self.groups -= 1;
        true
    }

    pub fn same_group(&mut self, a: usize, b: usize) -> bool {
        self.find(a) == self.find(b)
    }
}
