/// Var activity management (VSIDS)
use {
    super::{AssignStack, VarHeapIF},
    crate::types::*,
};

const ACTIVITY_MAX: f64 = 1e100;
const ACTIVITY_SCALE: f64 = 1e-100;

impl ActivityIF<VarId> for AssignStack {
    fn activity(&self, vi: VarId) -> f64 {
        self.activity[vi]
    }
    fn reward_at_analysis(&mut self, vi: VarId) {
        self.activity[vi] += self.var_inc;
        if ACTIVITY_MAX < self.activity[vi] {
            // rescaling is monotone, so the heap order is preserved
            for a in self.activity.iter_mut() {
                *a *= ACTIVITY_SCALE;
            }
            self.var_inc *= ACTIVITY_SCALE;
        }
        self.update_heap(vi);
    }
    fn decay_activity(&mut self) {
        self.var_inc *= 1.0 / self.var_decay;
    }
}
