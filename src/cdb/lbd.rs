/// Literal Block Distance
use {
    super::ClauseDB,
    crate::{
        assign::{AssignIF, AssignStack},
        types::*,
    },
};

impl ClauseDB {
    /// count the distinct decision levels among `lits`, using
    /// generation-stamped level tags to avoid clearing between calls.
    pub fn compute_lbd(&mut self, asg: &AssignStack, lits: &[Lit]) -> usize {
        self.lbd_key += 1;
        let key = self.lbd_key;
        let mut cnt = 0;
        for l in lits {
            let lv = asg.level(l.vi()) as usize;
            if self.lbd_temp[lv] != key {
                self.lbd_temp[lv] = key;
                cnt += 1;
            }
        }
        cnt
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assign::PropagateIF;

    #[test]
    fn test_lbd_counts_distinct_levels() {
        let config = Config::default();
        let cnf = CNFDescription {
            num_of_variables: 4,
            ..CNFDescription::default()
        };
        let mut asg = AssignStack::instantiate(&config, &cnf);
        let mut cdb = ClauseDB::instantiate(&config, &cnf);
        asg.assign_by_decision(Lit::from(1));
        asg.assign_by_decision(Lit::from(2));
        asg.assign_by_implication(Lit::from(3), None);
        let distinct = [Lit::from(1), Lit::from(2)];
        assert_eq!(cdb.compute_lbd(&asg, &distinct), 2);
        let shared = [Lit::from(2), Lit::from(3)];
        assert_eq!(cdb.compute_lbd(&asg, &shared), 1);
    }
}
