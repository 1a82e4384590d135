/// Decision var selection
use {
    super::{AssignStack, VarHeapIF},
    crate::types::*,
};

/// API for var selection.
pub trait VarSelectIF {
    /// remove the top of the var order until an unassigned var is found and
    /// return it as a literal with its saved phase.
    fn select_decision_literal(&mut self) -> Option<Lit>;
}

impl VarSelectIF for AssignStack {
    fn select_decision_literal(&mut self) -> Option<Lit> {
        while !self.var_order.is_empty() {
            let vi = self.get_heap_root();
            if self.assign[vi].is_none() {
                return Some(Lit::from((vi, self.flags[vi].contains(FlagVar::PHASE))));
            }
        }
        None
    }
}
