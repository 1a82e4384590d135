/// Heap struct for selecting decision vars
use {super::AssignStack, crate::types::*, std::fmt};

const OUT_OF_HEAP: usize = usize::MAX;

/// A binary max-heap of var indices keyed by activity, with a reverse
/// index for decrease-key.
#[derive(Clone, Debug, Default)]
pub struct VarIdHeap {
    /// order by activity
    pub(super) heap: Vec<VarId>,
    /// var-to-position, `OUT_OF_HEAP` when absent
    pub(super) idxs: Vec<usize>,
}

impl fmt::Display for VarIdHeap {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Heap({:?})", self.heap)
    }
}

impl VarIdHeap {
    pub fn contains(&self, vi: VarId) -> bool {
        self.idxs[vi] != OUT_OF_HEAP
    }
    pub fn len(&self) -> usize {
        self.heap.len()
    }
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
    /// make room for one more var.
    pub(super) fn expand(&mut self) {
        self.idxs.push(OUT_OF_HEAP);
    }
}

/// Internal heap manipulation API
pub trait VarHeapIF {
    fn insert_heap(&mut self, vi: VarId);
    fn update_heap(&mut self, vi: VarId);
    fn get_heap_root(&mut self) -> VarId;
    fn percolate_up(&mut self, start: usize);
    fn percolate_down(&mut self, start: usize);
}

impl VarHeapIF for AssignStack {
    fn insert_heap(&mut self, vi: VarId) {
        if self.var_order.contains(vi) {
            return;
        }
        let i = self.var_order.heap.len();
        self.var_order.idxs[vi] = i;
        self.var_order.heap.push(vi);
        self.percolate_up(i);
    }
    fn update_heap(&mut self, vi: VarId) {
        debug_assert!(vi < self.num_vars, "invalid VarId");
        if self.var_order.contains(vi) {
            let start = self.var_order.idxs[vi];
            self.percolate_up(start);
        }
    }
    fn get_heap_root(&mut self) -> VarId {
        debug_assert!(!self.var_order.is_empty());
        let n = self.var_order.heap.len();
        let vs = self.var_order.heap[0];
        self.var_order.heap.swap(0, n - 1);
        self.var_order.heap.pop();
        self.var_order.idxs[vs] = OUT_OF_HEAP;
        if !self.var_order.heap.is_empty() {
            let vn = self.var_order.heap[0];
            self.var_order.idxs[vn] = 0;
            self.percolate_down(0);
        }
        vs
    }
    fn percolate_up(&mut self, start: usize) {
        let mut q = start;
        let vq = self.var_order.heap[q];
        loop {
            if q == 0 {
                self.var_order.heap[q] = vq;
                self.var_order.idxs[vq] = q;
                return;
            }
            let p = (q - 1) / 2;
            let vp = self.var_order.heap[p];
            if self.order_gt(vq, vp) {
                // move down the current parent, and make its slot empty
                self.var_order.heap[q] = vp;
                self.var_order.idxs[vp] = q;
                q = p;
            } else {
                self.var_order.heap[q] = vq;
                self.var_order.idxs[vq] = q;
                return;
            }
        }
    }
    fn percolate_down(&mut self, start: usize) {
        let n = self.var_order.heap.len();
        let mut i = start;
        let vi = self.var_order.heap[i];
        loop {
            let l = 2 * i + 1;
            if n <= l {
                self.var_order.heap[i] = vi;
                self.var_order.idxs[vi] = i;
                return;
            }
            let r = l + 1;
            let mut target = l;
            let mut vc = self.var_order.heap[l];
            if r < n {
                let vr = self.var_order.heap[r];
                if self.order_gt(vr, vc) {
                    target = r;
                    vc = vr;
                }
            }
            if self.order_gt(vc, vi) {
                self.var_order.heap[i] = vc;
                self.var_order.idxs[vc] = i;
                i = target;
            } else {
                self.var_order.heap[i] = vi;
                self.var_order.idxs[vi] = i;
                return;
            }
        }
    }
}

impl AssignStack {
    /// the heap order: greater activity wins, var index as a total-order
    /// tie breaker.
    #[inline]
    fn order_gt(&self, a: VarId, b: VarId) -> bool {
        let aa = self.activity[a];
        let ab = self.activity[b];
        aa > ab || (aa == ab && a < b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heap_order() {
        let config = Config::default();
        let cnf = CNFDescription {
            num_of_variables: 4,
            ..CNFDescription::default()
        };
        let mut asg = AssignStack::instantiate(&config, &cnf);
        for (vi, act) in [0.1, 0.9, 0.5, 0.7].iter().enumerate() {
            asg.activity[vi] = *act;
            asg.update_heap(vi);
        }
        assert_eq!(asg.get_heap_root(), 1);
        assert_eq!(asg.get_heap_root(), 3);
        assert_eq!(asg.get_heap_root(), 2);
        assert_eq!(asg.get_heap_root(), 0);
        assert!(asg.var_order.is_empty());
    }
    #[test]
    fn test_heap_tie_break_by_index() {
        let config = Config::default();
        let cnf = CNFDescription {
            num_of_variables: 3,
            ..CNFDescription::default()
        };
        let mut asg = AssignStack::instantiate(&config, &cnf);
        assert_eq!(asg.get_heap_root(), 0);
        assert_eq!(asg.get_heap_root(), 1);
        assert_eq!(asg.get_heap_root(), 2);
    }
}
