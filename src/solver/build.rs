/// Solver Builder
use {
    super::{restart::Restarter, SatSolverIF, Solver},
    crate::{
        assign::{AssignIF, AssignStack, PropagateIF},
        cdb::{ClauseDB, ClauseDBIF},
        state::State,
        types::*,
    },
    std::{
        fs::File,
        io::{BufRead, BufReader},
    },
};

/// API for building a solver.
pub trait SatSolverBuildIF {
    /// make a solver and load a CNF file into it.
    ///
    /// # Errors
    ///
    /// IO error by failing to load a CNF file.
    fn solver_build(config: &Config) -> Result<Solver, SolverError>;
    /// add a vector of `Lit` as a clause to the solver, growing the
    /// variable space on demand.
    ///
    /// # Errors
    ///
    /// `EmptyClause` or `Inconsistent` latch the solver unsatisfiable.
    fn solver_add_unchecked_clause(&mut self, lits: &mut Vec<Lit>) -> MaybeInconsistent;
}

impl Default for Solver {
    fn default() -> Solver {
        Solver::instantiate(&Config::default(), &CNFDescription::default())
    }
}

impl Instantiate for Solver {
    fn instantiate(config: &Config, cnf: &CNFDescription) -> Solver {
        Solver {
            asg: AssignStack::instantiate(config, cnf),
            cdb: ClauseDB::instantiate(config, cnf),
            rst: Restarter::instantiate(config, cnf),
            state: State::instantiate(config, cnf),
        }
    }
}

impl TryFrom<&str> for Solver {
    type Error = SolverError;
    /// return a new solver built for a CNF file.
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let config = Config::from(s);
        Solver::build(&config)
    }
}

impl TryFrom<Vec<Vec<i32>>> for Solver {
    type Error = SolverError;
    /// return a new solver built for an in-memory CNF; a trivially
    /// unsatisfiable input is latched, not an error.
    fn try_from(vec: Vec<Vec<i32>>) -> Result<Self, Self::Error> {
        let cnf = CNFDescription::from(&vec[..]);
        let mut solver = Solver::instantiate(&Config::default(), &cnf);
        for clause in vec.iter() {
            let mut lits = clause.iter().map(|i| Lit::from(*i)).collect::<Vec<_>>();
            if solver.add_unchecked_clause(&mut lits).is_err() {
                break;
            }
        }
        Ok(solver)
    }
}

impl SatSolverBuildIF for Solver {
    fn solver_build(config: &Config) -> Result<Solver, SolverError> {
        let CNFReader { cnf, reader } = CNFReader::try_from(config.cnf_file.as_path())?;
        Solver::instantiate(config, &cnf).inject(reader)
    }
    fn solver_add_unchecked_clause(&mut self, lits: &mut Vec<Lit>) -> MaybeInconsistent {
        let Solver {
            ref mut asg,
            ref mut cdb,
            ref mut state,
            ..
        } = self;
        if !state.ok {
            return Err(SolverError::Inconsistent);
        }
        debug_assert_eq!(asg.decision_level(), 0);
        for l in lits.iter() {
            while asg.num_vars <= l.vi() {
                asg.new_var();
                cdb.new_var();
            }
        }
        // sort the literals; drop satisfied clauses, false and duplicated
        // literals, and tautologies
        lits.sort_unstable();
        let mut j = 0;
        let mut l_prev: Option<Lit> = None;
        for i in 0..lits.len() {
            let li = lits[i];
            match asg.assigned(li) {
                Some(true) => return Ok(()),
                Some(false) => continue,
                None if Some(!li) == l_prev => return Ok(()),
                None if Some(li) == l_prev => continue,
                None => {
                    lits[j] = li;
                    j += 1;
                    l_prev = Some(li);
                }
            }
        }
        lits.truncate(j);
        match lits.len() {
            0 => {
                state.ok = false;
                Err(SolverError::EmptyClause)
            }
            1 => {
                asg.assign_at_root_level(lits[0])?;
                if asg.propagate(cdb).is_some() {
                    state.ok = false;
                    return Err(SolverError::Inconsistent);
                }
                Ok(())
            }
            _ => {
                cdb.new_clause(lits, false);
                Ok(())
            }
        }
    }
}

impl Solver {
    /// load a clause stream in DIMACS format.
    fn inject(mut self, mut reader: BufReader<File>) -> Result<Solver, SolverError> {
        let mut buf = String::new();
        loop {
            buf.clear();
            match reader.read_line(&mut buf) {
                Ok(0) => break,
                Ok(_) if buf.starts_with('c') || buf.starts_with('p') => continue,
                Ok(_) => {
                    let mut v: Vec<Lit> = Vec::new();
                    for s in buf.split_whitespace() {
                        match s.parse::<i32>() {
                            Ok(0) => break,
                            Ok(val) => v.push(Lit::from(val)),
                            Err(_) => (),
                        }
                    }
                    // a latched inconsistency is the solver's answer, not
                    // a loading failure
                    if !v.is_empty() {
                        let _ = self.add_unchecked_clause(&mut v);
                    }
                }
                Err(_) => return Err(SolverError::IOError),
            }
        }
        Ok(self)
    }
    /// make room for a new var.
    pub fn new_var(&mut self) -> VarId {
        self.asg.new_var();
        self.cdb.new_var();
        self.asg.num_vars - 1
    }
    /// add a clause given as a DIMACS-style `i32` vector.
    ///
    /// # Errors
    ///
    /// `EmptyClause` or `Inconsistent` when the formula became trivially
    /// unsatisfiable.
    pub fn add_clause(&mut self, clause: Vec<i32>) -> MaybeInconsistent {
        let mut lits = clause.iter().map(|i| Lit::from(*i)).collect::<Vec<_>>();
        self.add_unchecked_clause(&mut lits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cdb::property::Tusize;

    #[test]
    fn test_tautology_and_duplication() {
        let mut s = Solver::default();
        assert!(s.add_clause(vec![1, -1, 2]).is_ok());
        assert_eq!(s.cdb.derefer(Tusize::NumClause), 0);
        assert!(s.add_clause(vec![1, 1, 2]).is_ok());
        assert_eq!(s.cdb.derefer(Tusize::NumClause), 1);
        assert_eq!(s.cdb.len(), 1);
    }
    #[test]
    fn test_unit_clause_propagates() {
        let mut s = Solver::default();
        assert!(s.add_clause(vec![1]).is_ok());
        assert_eq!(s.asg.assigned(Lit::from(1)), Some(true));
        assert!(s.add_clause(vec![-1, 2]).is_ok());
        assert_eq!(s.asg.assigned(Lit::from(2)), Some(true));
    }
    #[test]
    fn test_contradictory_units_latch() {
        let mut s = Solver::default();
        assert!(s.add_clause(vec![1]).is_ok());
        assert!(s.add_clause(vec![-1]).is_err());
        assert!(!s.state.ok);
        assert!(s.add_clause(vec![2]).is_err());
    }
    #[test]
    fn test_empty_clause_latches() {
        let mut s = Solver::default();
        assert_eq!(s.add_clause(vec![]), Err(SolverError::EmptyClause));
        assert!(!s.state.ok);
    }
}
