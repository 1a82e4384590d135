//! main struct AssignStack
use {
    super::{heap::VarIdHeap, AssignIF, VarHeapIF, VarManipulateIF},
    crate::{cdb::CRef, types::*},
    std::{fmt, slice::Iter},
};

/// A record of assignments. It's called 'trail' in Glucose.
#[derive(Clone, Debug)]
pub struct AssignStack {
    /// record of assignment
    pub(super) trail: Vec<Lit>,
    /// the start of each decision level in `trail`
    pub(super) trail_lim: Vec<usize>,
    /// the-number-of-propagated-vars, as an index into `trail`
    pub(super) q_head: usize,
    /// the current assignment of each var
    pub(super) assign: Vec<Option<bool>>,
    /// the decision level of each assigned var
    pub(super) level: Vec<DecisionLevel>,
    /// the reason clause of each assigned var
    pub(super) reason: Vec<Option<CRef>>,
    /// saved phase and analyze-seen bits
    pub(super) flags: Vec<FlagVar>,
    /// var activities
    pub(super) activity: Vec<f64>,
    /// amount to bump a var with
    pub(super) var_inc: f64,
    pub(super) var_decay: f64,
    /// var order by activity
    pub(super) var_order: VarIdHeap,

    //
    //## Statistics
    //
    /// the number of vars.
    pub num_vars: usize,
    pub num_conflict: usize,
    pub num_decision: usize,
    pub num_propagation: usize,
}

impl Default for AssignStack {
    fn default() -> AssignStack {
        AssignStack {
            trail: Vec::new(),
            trail_lim: Vec::new(),
            q_head: 0,
            assign: Vec::new(),
            level: Vec::new(),
            reason: Vec::new(),
            flags: Vec::new(),
            activity: Vec::new(),
            var_inc: 1.0,
            var_decay: 0.95,
            var_order: VarIdHeap::default(),
            num_vars: 0,
            num_conflict: 0,
            num_decision: 0,
            num_propagation: 0,
        }
    }
}

impl Instantiate for AssignStack {
    fn instantiate(config: &Config, cnf: &CNFDescription) -> AssignStack {
        let mut asg = AssignStack {
            trail: Vec::with_capacity(cnf.num_of_variables),
            var_decay: config.var_decay,
            ..AssignStack::default()
        };
        for _ in 0..cnf.num_of_variables {
            asg.new_var();
        }
        asg
    }
}

impl AssignStack {
    /// add a new var, saving a positive default phase and entering it into
    /// the var order.
    pub fn new_var(&mut self) {
        let vi = self.num_vars;
        self.assign.push(None);
        self.level.push(0);
        self.reason.push(None);
        self.flags.push(FlagVar::PHASE);
        self.activity.push(0.0);
        self.var_order.expand();
        self.num_vars += 1;
        self.insert_heap(vi);
    }
    pub(crate) fn set_reason(&mut self, vi: VarId, r: Option<CRef>) {
        self.reason[vi] = r;
    }
}

impl AssignIF for AssignStack {
    #[inline]
    fn assigned(&self, l: Lit) -> Option<bool> {
        self.assign[l.vi()].map(|b| if bool::from(l) { b } else { !b })
    }
    #[inline]
    fn assign(&self, vi: VarId) -> Option<bool> {
        self.assign[vi]
    }
    #[inline]
    fn level(&self, vi: VarId) -> DecisionLevel {
        self.level[vi]
    }
    #[inline]
    fn reason(&self, vi: VarId) -> Option<CRef> {
        self.reason[vi]
    }
    #[inline]
    fn decision_level(&self) -> DecisionLevel {
        self.trail_lim.len() as DecisionLevel
    }
    #[inline]
    fn stack(&self, i: usize) -> Lit {
        self.trail[i]
    }
    #[inline]
    fn stack_len(&self) -> usize {
        self.trail.len()
    }
    fn len_upto(&self, n: DecisionLevel) -> usize {
        self.trail_lim.get(n as usize).map_or(self.trail.len(), |n| *n)
    }
    fn stack_iter(&self) -> Iter<'_, Lit> {
        self.trail.iter()
    }
    fn remains(&self) -> bool {
        self.q_head < self.trail.len()
    }
    fn progress_estimate(&self) -> f64 {
        if self.num_vars == 0 {
            return 1.0;
        }
        let f = 1.0 / self.num_vars as f64;
        let mut progress = 0.0;
        for i in 0..=self.decision_level() {
            let beg = if i == 0 { 0 } else { self.trail_lim[i as usize - 1] };
            let end = if i == self.decision_level() {
                self.trail.len()
            } else {
                self.trail_lim[i as usize]
            };
            progress += f.powi(i as i32) * (end - beg) as f64;
        }
        progress * f
    }
}

impl VarManipulateIF for AssignStack {
    #[inline]
    fn var_is(&self, vi: VarId, flag: FlagVar) -> bool {
        self.flags[vi].contains(flag)
    }
    #[inline]
    fn var_set(&mut self, vi: VarId, flag: FlagVar, b: bool) {
        self.flags[vi].set(flag, b);
    }
}

impl fmt::Display for AssignStack {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let v = self.trail.iter().map(|l| i32::from(*l)).collect::<Vec<_>>();
        write!(
            f,
            "ASG:: trail({}):{:?}, level: {}",
            self.trail.len(),
            v,
            self.decision_level(),
        )
    }
}

pub mod property {
    use super::AssignStack;
    use crate::types::*;

    #[derive(Clone, Copy, Debug, Eq, PartialEq)]
    pub enum Tusize {
        NumVar,
        NumAssign,
        NumConflict,
        NumDecision,
        NumPropagation,
    }

    pub const USIZES: [Tusize; 5] = [
        Tusize::NumVar,
        Tusize::NumAssign,
        Tusize::NumConflict,
        Tusize::NumDecision,
        Tusize::NumPropagation,
    ];

    impl PropertyDereference<Tusize, usize> for AssignStack {
        #[inline]
        fn derefer(&self, k: Tusize) -> usize {
            match k {
                Tusize::NumVar => self.num_vars,
                Tusize::NumAssign => self.trail.len(),
                Tusize::NumConflict => self.num_conflict,
                Tusize::NumDecision => self.num_decision,
                Tusize::NumPropagation => self.num_propagation,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assign::PropagateIF;

    fn lit(i: i32) -> Lit {
        Lit::from(i)
    }

    #[test]
    fn test_assignment_levels() {
        let config = Config::default();
        let cnf = CNFDescription {
            num_of_variables: 4,
            ..CNFDescription::default()
        };
        let mut asg = AssignStack::instantiate(&config, &cnf);
        assert!(asg.assign_at_root_level(lit(1)).is_ok());
        assert_eq!(asg.trail, vec![lit(1)]);
        assert_eq!(asg.decision_level(), 0);
        asg.assign_by_decision(lit(2));
        assert_eq!(asg.decision_level(), 1);
        assert_eq!(asg.level(1), 1);
        asg.assign_by_implication(lit(-3), None);
        assert_eq!(asg.level(2), 1);
        assert_eq!(asg.assigned(lit(-3)), Some(true));
        assert_eq!(asg.assigned(lit(3)), Some(false));
        assert_eq!(asg.stack_len(), 3);
        assert_eq!(asg.len_upto(0), 1);
    }
    #[test]
    fn test_cancel_until_saves_phase() {
        let config = Config::default();
        let cnf = CNFDescription {
            num_of_variables: 4,
            ..CNFDescription::default()
        };
        let mut asg = AssignStack::instantiate(&config, &cnf);
        asg.assign_by_decision(lit(2));
        asg.assign_by_implication(lit(-3), None);
        asg.assign_by_decision(lit(4));
        assert_eq!(asg.decision_level(), 2);
        asg.cancel_until(0);
        assert_eq!(asg.decision_level(), 0);
        assert_eq!(asg.stack_len(), 0);
        assert_eq!(asg.assign(1), None);
        assert_eq!(asg.assign(2), None);
        assert!(asg.var_is(1, FlagVar::PHASE));
        assert!(!asg.var_is(2, FlagVar::PHASE));
        assert!(asg.var_is(3, FlagVar::PHASE));
    }
}
