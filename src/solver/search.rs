/// Conflict-Driven Clause Learning search engine
use {
    super::{
        conflict::handle_conflict,
        restart::{RestartIF, Restarter},
        Certificate, Solver, SolverResult,
    },
    crate::{
        assign::{AssignIF, AssignStack, PropagateIF, VarSelectIF},
        cdb::{ClauseDB, ClauseDBIF},
        state::State,
        types::*,
    },
};

/// API for SAT solving like [`solve`](`crate::solver::SatSolverSearchIF::solve`).
pub trait SatSolverSearchIF {
    /// search an assignment.
    ///
    /// # Errors
    ///
    /// `Interrupted`, `OutOfBudget`, `TimeOut` or `OutOfMemory` when a
    /// resource limit ended the search; the state stays consistent.
    fn solve(&mut self) -> SolverResult;
}

impl SatSolverSearchIF for Solver {
    fn solve(&mut self) -> SolverResult {
        let Solver {
            ref mut asg,
            ref mut cdb,
            ref mut rst,
            ref mut state,
        } = self;
        if !state.ok {
            return Ok(Certificate::UNSAT);
        }
        cdb.check_size()?;
        state.progress_header();
        let answer = loop {
            state.num_start += 1;
            let nof_conflicts = rst.next_restart_budget();
            match search(asg, cdb, rst, state, nof_conflicts) {
                Ok(Some(sat)) => break Ok(sat),
                Ok(None) => continue,
                Err(e) => break Err(e),
            }
        };
        state.final_report(asg, cdb);
        match answer {
            Ok(true) => {
                state.model = (0..asg.num_vars).map(|vi| asg.assign(vi)).collect();
                if cdb.validate(&state.model, false).is_some() {
                    return Err(SolverError::SolverBug);
                }
                let vals = (0..asg.num_vars)
                    .map(|vi| i32::from(Lit::from((vi, asg.assign(vi) != Some(false)))))
                    .collect::<Vec<i32>>();
                asg.cancel_until(0);
                Ok(Certificate::SAT(vals))
            }
            Ok(false) => {
                asg.cancel_until(0);
                Ok(Certificate::UNSAT)
            }
            Err(e) => {
                asg.cancel_until(0);
                Err(e)
            }
        }
    }
}

/// One restart cycle; returns `Ok(None)` when a forced restart ends it.
///
/// The cycle budget scales with the Luby or geometric series, while the
/// restarts themselves fire on degraded short-term LBD evidence.
fn search(
    asg: &mut AssignStack,
    cdb: &mut ClauseDB,
    rst: &mut Restarter,
    state: &mut State,
    _nof_conflicts: usize,
) -> Result<Option<bool>, SolverError> {
    loop {
        if let Some(cc) = asg.propagate(cdb) {
            if asg.decision_level() == 0 {
                return Ok(Some(false));
            }
            handle_conflict(asg, cdb, rst, state, cc);
        } else {
            state.check_budget(asg)?;
            cdb.check_size()?;
            if rst.restart_needed(asg) {
                asg.cancel_until(0);
                return Ok(None);
            }
            if cdb.next_reduction <= asg.num_conflict {
                cdb.reduce(asg);
                cdb.next_reduction = asg.num_conflict + 2000 + 1000 * cdb.num_reduction;
            }
            match asg.select_decision_literal() {
                Some(lit) => asg.assign_by_decision(lit),
                None => return Ok(Some(true)),
            }
        }
    }
}
