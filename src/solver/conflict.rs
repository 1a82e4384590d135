//! Conflict handling: First-UIP analysis, clause learning and backjumping.
use {
    super::restart::{RestartIF, Restarter},
    crate::{
        assign::{AssignIF, AssignStack, PropagateIF, VarManipulateIF},
        cdb::{CRef, ClauseDB, ClauseDBIF},
        state::State,
        types::*,
    },
};

/// Resolve a conflict: learn an asserting clause, backjump and enqueue the
/// asserting literal with the fresh clause as its reason.
pub fn handle_conflict(
    asg: &mut AssignStack,
    cdb: &mut ClauseDB,
    rst: &mut Restarter,
    state: &mut State,
    ci: CRef,
) {
    asg.num_conflict += 1;
    rst.block_restart(asg);
    let mut new_learnt: Vec<Lit> = Vec::new();
    let bt_level = conflict_analyze(asg, cdb, state, ci, &mut new_learnt);
    let lbd = cdb.compute_lbd(asg, &new_learnt);
    rst.update_lbd(lbd);
    asg.cancel_until(bt_level);
    if new_learnt.len() == 1 {
        // an assertion; it has no reason clause
        asg.assign_by_implication(new_learnt[0], None);
    } else {
        let cr = cdb.new_clause(&new_learnt, true);
        cdb.reward_at_analysis(cr);
        asg.assign_by_implication(new_learnt[0], Some(cr));
        cdb.set_lbd(cr, lbd);
    }
    asg.decay_activity();
    cdb.decay_activity();
    if asg.num_conflict % 1000 == 0 {
        state.progress(asg, cdb);
    }
}

/// Walk the trail backwards from the conflict, resolving on
/// current-level literals until a single one remains: the first unique
/// implication point. Its negation asserts at position 0; a literal of the
/// second-highest level is swapped into position 1.
fn conflict_analyze(
    asg: &mut AssignStack,
    cdb: &mut ClauseDB,
    state: &mut State,
    ci: CRef,
    out_learnt: &mut Vec<Lit>,
) -> DecisionLevel {
    out_learnt.clear();
    // leave room for the asserting literal
    out_learnt.push(Lit::from(0u32));
    let dl = asg.decision_level();
    let mut path_cnt = 0;
    let mut first_round = true;
    let mut confl = ci;
    let mut index = asg.stack_len() - 1;
    let uip = loop {
        state.num_resolution += 1;
        if cdb.is_learnt(confl) {
            cdb.reward_at_analysis(confl);
        }
        let skip = usize::from(!first_round);
        for j in skip..cdb.clause_len(confl) {
            let q = cdb.lit(confl, j);
            let vi = q.vi();
            if !asg.var_is(vi, FlagVar::CA_SEEN) && 0 < asg.level(vi) {
                asg.reward_at_analysis(vi);
                asg.var_set(vi, FlagVar::CA_SEEN, true);
                if dl <= asg.level(vi) {
                    path_cnt += 1;
                } else {
                    out_learnt.push(q);
                }
            }
        }
        // select the next marked literal on the trail
        while !asg.var_is(asg.stack(index).vi(), FlagVar::CA_SEEN) {
            index -= 1;
        }
        let p = asg.stack(index);
        asg.var_set(p.vi(), FlagVar::CA_SEEN, false);
        path_cnt -= 1;
        if path_cnt == 0 {
            break p;
        }
        index -= 1;
        confl = match asg.reason(p.vi()) {
            Some(cr) => cr,
            None => unreachable!("found a decision below the first UIP"),
        };
        first_round = false;
    };
    out_learnt[0] = !uip;
    let bt_level = if out_learnt.len() == 1 {
        0
    } else {
        // swap a literal of the second-highest level into position 1
        let mut max_i = 1;
        for i in 2..out_learnt.len() {
            if asg.level(out_learnt[max_i].vi()) < asg.level(out_learnt[i].vi()) {
                max_i = i;
            }
        }
        out_learnt.swap(1, max_i);
        asg.level(out_learnt[1].vi())
    };
    for l in out_learnt.iter() {
        asg.var_set(l.vi(), FlagVar::CA_SEEN, false);
    }
    bt_level
}
