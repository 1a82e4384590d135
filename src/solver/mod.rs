/// Crate `solver` provides the top-level API as a SAT solver.
mod build;
mod conflict;
mod restart;
mod search;

pub use self::{
    build::SatSolverBuildIF,
    restart::{RestartIF, Restarter},
    search::SatSolverSearchIF,
};

use {
    crate::{assign::AssignStack, cdb::ClauseDB, state::State, types::*},
    std::sync::{atomic::AtomicBool, Arc},
};

/// API for SAT solver like `build`, `solve` and so on.
pub trait SatSolverIF: SatSolverBuildIF + SatSolverSearchIF {
    /// add a vector of `Lit` as a clause to the solver.
    ///
    /// # Errors
    ///
    /// `EmptyClause` or `Inconsistent` when the formula became trivially
    /// unsatisfiable; the solver is latched.
    fn add_unchecked_clause(&mut self, lits: &mut Vec<Lit>) -> MaybeInconsistent;
    /// make a solver and load a CNF into it.
    ///
    /// # Errors
    ///
    /// IO error by failing to load a CNF file.
    fn build(config: &Config) -> Result<Solver, SolverError>;
    /// search an assignment.
    ///
    /// # Errors
    ///
    /// if a resource limit ended the search before a result was reached.
    fn solve(&mut self) -> SolverResult;
}

impl SatSolverIF for Solver {
    fn add_unchecked_clause(&mut self, lits: &mut Vec<Lit>) -> MaybeInconsistent {
        self.solver_add_unchecked_clause(lits)
    }
    fn build(config: &Config) -> Result<Solver, SolverError> {
        <Solver as SatSolverBuildIF>::solver_build(config)
    }
    fn solve(&mut self) -> SolverResult {
        <Solver as SatSolverSearchIF>::solve(self)
    }
}

/// Normal results returned by Solver.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Certificate {
    SAT(Vec<i32>),
    UNSAT,
}

/// The return type of `Solver::solve`.
/// This captures the following three cases:
/// * `Certificate::SAT` -- solved with a satisfiable assignment,
/// * `Certificate::UNSAT` -- proved unsatisfiability, and
/// * `Err(SolverError)` -- interrupted or out of a resource budget.
pub type SolverResult = Result<Certificate, SolverError>;

/// The SAT solver object consisting of 4 sub modules.
#[derive(Clone, Debug)]
pub struct Solver {
    /// assignment management
    pub asg: AssignStack,
    /// clause container
    pub cdb: ClauseDB,
    /// restart management
    pub rst: Restarter,
    /// misc data holder
    pub state: State,
}

impl Solver {
    /// return a handle to the interruption flag; storing `true` makes the
    /// current restart cycle the last one.
    pub fn interrupter(&self) -> Arc<AtomicBool> {
        self.state.interrupter()
    }
    /// allow `x` more conflicts before `solve` returns with `OutOfBudget`.
    pub fn set_conf_budget(&mut self, x: i64) {
        self.state.conflict_budget = if x < 0 {
            -1
        } else {
            self.asg.num_conflict as i64 + x
        };
    }
    /// allow `x` more propagations before `solve` returns with `OutOfBudget`.
    pub fn set_prop_budget(&mut self, x: i64) {
        self.state.propagation_budget = if x < 0 {
            -1
        } else {
            self.asg.num_propagation as i64 + x
        };
    }
    pub fn budget_off(&mut self) {
        self.state.conflict_budget = -1;
        self.state.propagation_budget = -1;
    }
    /// check the model of the last satisfiable run against the original
    /// clauses, returning a falsified clause if any. There is nothing to
    /// check before a satisfiable run.
    pub fn validate(&self) -> Option<Vec<i32>> {
        use crate::cdb::ClauseDBIF;
        if self.state.model.len() < self.asg.num_vars {
            return None;
        }
        self.cdb
            .validate(&self.state.model, false)
            .map(|cr| self.cdb.iter_lits(cr).map(i32::from).collect())
    }
}
