/// Watcher lists with blocker literals and lazy deletion.
use {
    super::arena::{CRef, ClauseAllocator},
    crate::types::*,
    std::ops::{Index, IndexMut},
};

/// An entry in a watch list. The blocker is a cached literal from the
/// clause; when it is already true the clause is satisfied without
/// touching the arena.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Watcher {
    pub cr: CRef,
    pub blocker: Lit,
}

/// Per-literal watcher lists. A clause watching `c[0]` and `c[1]` appears
/// in the lists of `!c[0]` and `!c[1]`. Deletion is lazy: a removed
/// clause leaves its entries behind bearing the clause's mark, and
/// `clean_all` sweeps smudged lists before their next use.
#[derive(Clone, Debug, Default)]
pub struct WatcherLists {
    pub(crate) lists: Vec<Vec<Watcher>>,
    dirty: Vec<bool>,
    dirties: Vec<Lit>,
}

impl Index<Lit> for WatcherLists {
    type Output = Vec<Watcher>;
    #[inline]
    fn index(&self, l: Lit) -> &Self::Output {
        &self.lists[usize::from(l)]
    }
}

impl IndexMut<Lit> for WatcherLists {
    #[inline]
    fn index_mut(&mut self, l: Lit) -> &mut Self::Output {
        &mut self.lists[usize::from(l)]
    }
}

impl WatcherLists {
    pub fn new(num_vars: usize) -> Self {
        WatcherLists {
            lists: vec![Vec::new(); 2 * num_vars],
            dirty: vec![false; 2 * num_vars],
            dirties: Vec::new(),
        }
    }
    /// make room for one more variable.
    pub fn expand(&mut self) {
        self.lists.push(Vec::new());
        self.lists.push(Vec::new());
        self.dirty.push(false);
        self.dirty.push(false);
    }
    #[inline]
    pub fn register(&mut self, l: Lit, w: Watcher) {
        self.lists[usize::from(l)].push(w);
    }
    /// flag the list of `l` as holding stale entries.
    pub fn smudge(&mut self, l: Lit) {
        if !self.dirty[usize::from(l)] {
            self.dirty[usize::from(l)] = true;
            self.dirties.push(l);
        }
    }
    /// drop the entries of marked clauses from every smudged list.
    pub fn clean_all(&mut self, ca: &ClauseAllocator) {
        for l in self.dirties.drain(..) {
            self.lists[usize::from(l)].retain(|w| !ca.is_marked(w.cr));
            self.dirty[usize::from(l)] = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lazy_deletion() {
        let mut ca = ClauseAllocator::with_capacity(16);
        let lits: Vec<Lit> = [1, 2, 3].iter().map(|i| Lit::from(*i)).collect();
        let live = ca.alloc(&lits, false);
        let dead = ca.alloc(&lits, false);
        let mut ws = WatcherLists::new(3);
        let p = Lit::from(-1);
        ws.register(p, Watcher { cr: live, blocker: lits[1] });
        ws.register(p, Watcher { cr: dead, blocker: lits[2] });
        ca.mark(dead);
        ws.smudge(p);
        ws.smudge(p);
        ws.clean_all(&ca);
        assert_eq!(ws[p].len(), 1);
        assert_eq!(ws[p][0].cr, live);
    }
}
