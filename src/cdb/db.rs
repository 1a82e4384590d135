/// Learnt-clause reduction and arena garbage collection.
use {
    super::{arena::ClauseAllocator, ClauseDB, ClauseDBIF},
    crate::assign::{AssignIF, AssignStack},
    std::cmp::Ordering,
};

impl ClauseDB {
    /// Remove half of the learnt clauses, keeping binary and locked ones.
    ///
    /// The ranking drops non-binary clauses with high LBD first, breaking
    /// ties towards lower activity.
    pub(super) fn reduce_db(&mut self, asg: &mut AssignStack) {
        self.num_reduction += 1;
        {
            let ClauseDB {
                ref ca,
                ref mut learnts,
                ..
            } = *self;
            learnts.sort_by(|&x, &y| {
                match (2 < ca.len(x), 2 < ca.len(y)) {
                    (true, false) => Ordering::Less,
                    (false, true) => Ordering::Greater,
                    (false, false) => Ordering::Equal,
                    (true, true) => ca
                        .lbd(y)
                        .cmp(&ca.lbd(x))
                        .then_with(|| {
                            ca.activity(x)
                                .partial_cmp(&ca.activity(y))
                                .unwrap_or(Ordering::Equal)
                        }),
                }
            });
        }
        let perm = std::mem::take(&mut self.learnts);
        let limit = perm.len() / 2;
        for (i, cr) in perm.into_iter().enumerate() {
            if 2 < self.ca.len(cr) && !self.locked(asg, cr) && i < limit {
                self.remove_clause(asg, cr);
            } else {
                self.learnts.push(cr);
            }
        }
        self.check_garbage(asg);
    }
    /// Relocate every live clause into a fresh arena and rewrite all
    /// references: the watcher lists first, then the reasons on the trail,
    /// then the learnt and original lists.
    pub(super) fn reloc_all(&mut self, asg: &mut AssignStack) {
        let ClauseDB {
            ref mut ca,
            ref mut watches,
            ref mut clauses,
            ref mut learnts,
            ..
        } = *self;
        let mut to = ClauseAllocator::with_capacity(ca.size() - ca.wasted());
        watches.clean_all(ca);
        for ws in watches.lists.iter_mut() {
            for w in ws.iter_mut() {
                w.cr = ca.reloc(w.cr, &mut to);
            }
        }
        for i in 0..asg.stack_len() {
            let vi = asg.stack(i).vi();
            if let Some(cr) = asg.reason(vi) {
                let reloced = ca.is_reloced(cr);
                let locked = !reloced && {
                    let l0 = ca.lit(cr, 0);
                    asg.assigned(l0) == Some(true) && asg.reason(l0.vi()) == Some(cr)
                };
                if reloced || locked {
                    asg.set_reason(vi, Some(ca.reloc(cr, &mut to)));
                }
            }
        }
        for cr in learnts.iter_mut() {
            *cr = ca.reloc(*cr, &mut to);
        }
        for cr in clauses.iter_mut() {
            *cr = ca.reloc(*cr, &mut to);
        }
        *ca = to;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::*;

    fn lits(v: &[i32]) -> Vec<Lit> {
        v.iter().map(|i| Lit::from(*i)).collect()
    }

    #[test]
    fn test_reduce_keeps_binary_and_good_clauses() {
        let config = Config::default();
        let cnf = CNFDescription {
            num_of_variables: 8,
            ..CNFDescription::default()
        };
        let mut asg = AssignStack::instantiate(&config, &cnf);
        let mut cdb = ClauseDB::instantiate(&config, &cnf);
        let bin = cdb.new_clause(&lits(&[1, 2]), true);
        let worst = cdb.new_clause(&lits(&[1, 2, 3]), true);
        cdb.ca.set_lbd(worst, 5);
        let worse = cdb.new_clause(&lits(&[2, 3, 4]), true);
        cdb.ca.set_lbd(worse, 4);
        let kept1 = cdb.new_clause(&lits(&[3, 4, 5]), true);
        cdb.ca.set_lbd(kept1, 2);
        let kept2 = cdb.new_clause(&lits(&[4, 5, 6]), true);
        cdb.ca.set_lbd(kept2, 3);
        cdb.reduce(&mut asg);
        // 5 learnts, limit 2: the two worst-LBD non-binary clauses go.
        assert_eq!(cdb.learnts.len(), 3);
        assert!(cdb.learnts.contains(&bin));
        assert!(cdb.learnts.contains(&kept1));
        assert!(cdb.learnts.contains(&kept2));
        assert!(cdb.ca.is_marked(worst));
        assert!(cdb.ca.is_marked(worse));
        assert_eq!(cdb.num_removed, 2);
        assert_eq!(cdb.num_reduction, 1);
    }
    #[test]
    fn test_garbage_collect_rewrites_references() {
        let config = Config::default();
        let cnf = CNFDescription {
            num_of_variables: 6,
            ..CNFDescription::default()
        };
        let mut asg = AssignStack::instantiate(&config, &cnf);
        let mut cdb = ClauseDB::instantiate(&config, &cnf);
        let doomed = cdb.new_clause(&lits(&[1, 2, 3, 4]), false);
        let live = cdb.new_clause(&lits(&[-1, -2, -3]), false);
        cdb.clauses.retain(|cr| *cr != doomed);
        cdb.remove_clause(&mut asg, doomed);
        let size_before = cdb.ca.size();
        cdb.garbage_collect(&mut asg);
        assert!(cdb.ca.size() < size_before);
        assert_eq!(cdb.ca.wasted(), 0);
        assert_eq!(cdb.clauses.len(), 1);
        let moved = cdb.clauses[0];
        assert_ne!(moved, live);
        assert_eq!(
            cdb.iter_lits(moved).collect::<Vec<_>>(),
            lits(&[-1, -2, -3])
        );
        for w in cdb.watches[!Lit::from(-1)].iter() {
            assert_eq!(w.cr, moved);
        }
    }
}
