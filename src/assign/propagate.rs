/// implement boolean constraint propagation, backjump
use {
    super::{AssignIF, AssignStack, VarHeapIF},
    crate::{
        cdb::{CRef, ClauseDB, Watcher},
        types::*,
    },
};

/// API for Boolean Constraint Propagation like
/// [`propagate`](`crate::assign::PropagateIF::propagate`),
/// [`assign_by_decision`](`crate::assign::PropagateIF::assign_by_decision`),
/// [`cancel_until`](`crate::assign::PropagateIF::cancel_until`), and so on.
pub trait PropagateIF {
    /// add an assignment at root level as a precondition.
    ///
    /// # Errors
    ///
    /// emit `SolverError::Inconsistent` if the literal is already false.
    fn assign_at_root_level(&mut self, l: Lit) -> MaybeInconsistent;
    /// unsafe enqueue (assign by implication); doesn't emit an exception.
    ///
    /// ## Warning
    /// Callers must assure the consistency after this assignment.
    fn assign_by_implication(&mut self, l: Lit, reason: Option<CRef>);
    /// unsafe assume (assign by decision); doesn't emit an exception.
    /// ## Caveat
    /// Callers have to assure the consistency after this assignment.
    fn assign_by_decision(&mut self, l: Lit);
    /// execute *backjump*.
    fn cancel_until(&mut self, lv: DecisionLevel);
    /// execute *boolean constraint propagation* or *unit propagation*
    /// until fixpoint or conflict, returning the conflicting clause.
    fn propagate(&mut self, cdb: &mut ClauseDB) -> Option<CRef>;
}

impl PropagateIF for AssignStack {
    fn assign_at_root_level(&mut self, l: Lit) -> MaybeInconsistent {
        debug_assert_eq!(self.decision_level(), 0);
        let vi = l.vi();
        debug_assert!(vi < self.num_vars);
        match self.assigned(l) {
            None => {
                self.assign[vi] = Some(bool::from(l));
                self.level[vi] = 0;
                self.reason[vi] = None;
                self.trail.push(l);
                Ok(())
            }
            Some(true) => Ok(()),
            Some(false) => Err(SolverError::Inconsistent),
        }
    }
    fn assign_by_implication(&mut self, l: Lit, reason: Option<CRef>) {
        debug_assert!(self.assigned(l).is_none());
        let vi = l.vi();
        self.assign[vi] = Some(bool::from(l));
        self.level[vi] = self.decision_level();
        self.reason[vi] = reason;
        self.trail.push(l);
    }
    fn assign_by_decision(&mut self, l: Lit) {
        debug_assert!(self.assigned(l).is_none());
        debug_assert!(!self.trail.contains(&!l));
        self.trail_lim.push(self.trail.len());
        let vi = l.vi();
        self.assign[vi] = Some(bool::from(l));
        self.level[vi] = self.decision_level();
        self.reason[vi] = None;
        self.trail.push(l);
        self.num_decision += 1;
    }
    fn cancel_until(&mut self, lv: DecisionLevel) {
        if self.trail_lim.len() as DecisionLevel <= lv {
            return;
        }
        let lim = self.trail_lim[lv as usize];
        for i in lim..self.trail.len() {
            let l = self.trail[i];
            let vi = l.vi();
            debug_assert!(
                self.assign[vi].is_some(),
                "cancel_until found an unassigned var in trail {}",
                vi,
            );
            self.flags[vi].set(FlagVar::PHASE, self.assign[vi].unwrap());
            self.assign[vi] = None;
            self.reason[vi] = None;
            self.insert_heap(vi);
        }
        self.trail.truncate(lim);
        self.trail_lim.truncate(lv as usize);
        self.q_head = lim;
    }
    fn propagate(&mut self, cdb: &mut ClauseDB) -> Option<CRef> {
        cdb.clean_watches();
        let mut confl = None;
        'queue: while self.q_head < self.trail.len() {
            let p = self.trail[self.q_head];
            self.q_head += 1;
            self.num_propagation += 1;
            let false_lit = !p;
            let ClauseDB {
                ref mut ca,
                ref mut watches,
                ..
            } = *cdb;
            let mut ws = std::mem::take(&mut watches.lists[usize::from(p)]);
            let mut i = 0;
            let mut j = 0;
            'watchers: while i < ws.len() {
                let Watcher { cr, blocker } = ws[i];
                // the blocker short-circuits satisfied clauses without
                // touching the arena
                if self.assigned(blocker) == Some(true) {
                    ws[j] = ws[i];
                    j += 1;
                    i += 1;
                    continue 'watchers;
                }
                // make sure the false literal is at the second position
                if ca.lit(cr, 0) == false_lit {
                    ca.swap_lits(cr, 0, 1);
                }
                debug_assert_eq!(ca.lit(cr, 1), false_lit);
                i += 1;
                let first = ca.lit(cr, 0);
                let w = Watcher { cr, blocker: first };
                if first != blocker && self.assigned(first) == Some(true) {
                    ws[j] = w;
                    j += 1;
                    continue 'watchers;
                }
                // look for a new literal to watch
                for k in 2..ca.len(cr) {
                    if self.assigned(ca.lit(cr, k)) != Some(false) {
                        ca.set_lit(cr, 1, ca.lit(cr, k));
                        ca.set_lit(cr, k, false_lit);
                        watches.lists[usize::from(!ca.lit(cr, 1))].push(w);
                        continue 'watchers;
                    }
                }
                // no new watch: the clause is unit under the assignment
                ws[j] = w;
                j += 1;
                if self.assigned(first) == Some(false) {
                    confl = Some(cr);
                    self.q_head = self.trail.len();
                    while i < ws.len() {
                        ws[j] = ws[i];
                        j += 1;
                        i += 1;
                    }
                } else {
                    self.assign_by_implication(first, Some(cr));
                }
            }
            ws.truncate(j);
            watches.lists[usize::from(p)] = ws;
            if confl.is_some() {
                break 'queue;
            }
        }
        confl
    }
}
