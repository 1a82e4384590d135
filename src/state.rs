/// Crate `state` is a collection of internal data, the resource budgets and
/// the progress reporter.
use {
    crate::{
        assign::{AssignIF, AssignStack},
        cdb::ClauseDB,
        config::Config,
        types::*,
    },
    std::{
        sync::{
            atomic::{AtomicBool, Ordering},
            Arc,
        },
        time::Instant,
    },
};

/// Miscellaneous data holder: the latched consistency flag, resource
/// budgets, the interruption flag and the progress reporter.
#[derive(Clone, Debug)]
pub struct State {
    pub config: Config,
    /// `false` latches a trivially unsatisfiable problem; no further
    /// operation may change the solver state.
    pub ok: bool,
    /// the problem description
    pub target: CNFDescription,
    /// the model found by the last satisfiable run
    pub model: Vec<Option<bool>>,
    /// the number of restart cycles
    pub num_start: usize,
    /// the number of resolutions in conflict analysis
    pub num_resolution: usize,
    /// -1 means no budget
    pub conflict_budget: i64,
    /// -1 means no budget
    pub propagation_budget: i64,
    asynch_interrupt: Arc<AtomicBool>,
    start: Instant,
}

impl Default for State {
    fn default() -> State {
        State {
            config: Config::default(),
            ok: true,
            target: CNFDescription::default(),
            model: Vec::new(),
            num_start: 0,
            num_resolution: 0,
            conflict_budget: -1,
            propagation_budget: -1,
            asynch_interrupt: Arc::new(AtomicBool::new(false)),
            start: Instant::now(),
        }
    }
}

impl Instantiate for State {
    fn instantiate(config: &Config, cnf: &CNFDescription) -> State {
        State {
            config: config.clone(),
            target: cnf.clone(),
            ..State::default()
        }
    }
}

impl State {
    /// return a handle to the interruption flag, settable from any thread
    /// or a signal handler.
    pub fn interrupter(&self) -> Arc<AtomicBool> {
        self.asynch_interrupt.clone()
    }
    pub fn is_interrupted(&self) -> bool {
        self.asynch_interrupt.load(Ordering::Relaxed)
    }
    /// check the interruption flag and the resource budgets.
    ///
    /// # Errors
    ///
    /// `Interrupted`, `OutOfBudget` or `TimeOut` when the corresponding
    /// limit has been reached.
    pub fn check_budget(&self, asg: &AssignStack) -> MaybeInconsistent {
        if self.is_interrupted() {
            return Err(SolverError::Interrupted);
        }
        if 0 <= self.conflict_budget && self.conflict_budget <= asg.num_conflict as i64 {
            return Err(SolverError::OutOfBudget);
        }
        if 0 <= self.propagation_budget && self.propagation_budget <= asg.num_propagation as i64 {
            return Err(SolverError::OutOfBudget);
        }
        if 0.0 < self.config.cpu_lim && self.config.cpu_lim < self.start.elapsed().as_secs_f64() {
            return Err(SolverError::TimeOut);
        }
        Ok(())
    }
    pub fn elapsed(&self) -> f64 {
        self.start.elapsed().as_secs_f64()
    }
    pub fn progress_header(&self) {
        if self.config.verbose == 0 {
            return;
        }
        println!(
            "c {:>9} {:>10} {:>10} {:>8} {:>8} {:>10} {:>8} {:>9}",
            "restarts", "conflicts", "decisions", "avg-res", "reduceDB", "avg-learnt", "removed", "progress",
        );
    }
    /// print a one-line summary of the current search state.
    pub fn progress(&mut self, asg: &AssignStack, cdb: &ClauseDB) {
        if self.config.verbose == 0 {
            return;
        }
        let num_conflict = asg.derefer(crate::assign::property::Tusize::NumConflict);
        let num_decision = asg.derefer(crate::assign::property::Tusize::NumDecision);
        let num_learnt = cdb.derefer(crate::cdb::property::Tusize::NumLearnt);
        let num_lits = cdb.derefer(crate::cdb::property::Tusize::NumLitsLearnt);
        println!(
            "c {:>9} {:>10} {:>10} {:>8} {:>8} {:>10} {:>8} {:>8.2}%",
            self.num_start,
            num_conflict,
            num_decision,
            self.num_resolution / num_conflict.max(1),
            cdb.derefer(crate::cdb::property::Tusize::NumReduction),
            num_lits / num_learnt.max(1),
            cdb.derefer(crate::cdb::property::Tusize::NumRemovedClause),
            asg.progress_estimate() * 100.0,
        );
    }
    /// print the final statistics.
    pub fn final_report(&mut self, asg: &AssignStack, cdb: &ClauseDB) {
        if self.config.verbose == 0 {
            return;
        }
        let elapsed = self.elapsed();
        let num_conflict = asg.derefer(crate::assign::property::Tusize::NumConflict);
        let num_decision = asg.derefer(crate::assign::property::Tusize::NumDecision);
        let num_propagation = asg.derefer(crate::assign::property::Tusize::NumPropagation);
        println!("c");
        println!("c restarts              : {}", self.num_start);
        println!(
            "c conflicts             : {:<12} ({:.0} /sec)",
            num_conflict,
            num_conflict as f64 / elapsed,
        );
        println!(
            "c decisions             : {:<12} ({:.0} /sec)",
            num_decision,
            num_decision as f64 / elapsed,
        );
        println!(
            "c propagations          : {:<12} ({:.0} /sec)",
            num_propagation,
            num_propagation as f64 / elapsed,
        );
        println!(
            "c nb reduce DB          : {}",
            cdb.derefer(crate::cdb::property::Tusize::NumReduction),
        );
        println!(
            "c removed clauses       : {}",
            cdb.derefer(crate::cdb::property::Tusize::NumRemovedClause),
        );
        println!("c CPU time              : {elapsed:.3} s");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_budget_checks() {
        let config = Config::default();
        let cnf = CNFDescription {
            num_of_variables: 2,
            ..CNFDescription::default()
        };
        let asg = AssignStack::instantiate(&config, &cnf);
        let mut state = State::instantiate(&config, &cnf);
        assert_eq!(state.check_budget(&asg), Ok(()));
        state.conflict_budget = 0;
        assert_eq!(state.check_budget(&asg), Err(SolverError::OutOfBudget));
        state.conflict_budget = -1;
        state.interrupter().store(true, std::sync::atomic::Ordering::Relaxed);
        assert_eq!(state.check_budget(&asg), Err(SolverError::Interrupted));
    }
}
