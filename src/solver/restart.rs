/// Glucose-style restart management
use crate::{
    assign::{AssignIF, AssignStack},
    types::*,
};

const LBD_QUEUE_LEN: usize = 50;
const TRAIL_QUEUE_LEN: usize = 5000;
/// blocking restarts start once this many conflicts have been seen
const BLOCK_AFTER_CONFLICT: usize = 10_000;
/// Glucose's R: block when the trail outgrows its recent average
const BLOCK_THRESHOLD: f64 = 1.4;
/// Glucose's K: force when the recent LBD average degrades
const FORCE_THRESHOLD: f64 = 0.8;
/// conflicts per restart cycle, scaled by the Luby or geometric series
const RESTART_UNIT: f64 = 32.0;
const GEOMETRIC_RATIO: f64 = 1.5;

/// API for restart heuristics like
/// [`restart_needed`](`crate::solver::RestartIF::restart_needed`).
pub trait RestartIF {
    /// feed the trail size at a conflict; a long trail blocks the next
    /// restart by clearing the short-term LBD evidence.
    fn block_restart(&mut self, asg: &AssignStack);
    /// feed the LBD of a fresh learnt clause.
    fn update_lbd(&mut self, lbd: usize);
    /// return `true` iff the short-term LBD average has degraded enough
    /// to force a restart; clears the short-term evidence as a side effect.
    fn restart_needed(&mut self, asg: &AssignStack) -> bool;
    /// return the conflict budget of the next restart cycle.
    fn next_restart_budget(&mut self) -> usize;
}

/// The restart manager: short-term evidence queues and their long-term
/// counterparts.
#[derive(Clone, Debug, Default)]
pub struct Restarter {
    lbd_queue: BoundedQueue,
    trail_queue: BoundedQueue,
    pub sum_lbd: usize,
    pub num_restart: usize,
    pub num_block: usize,
    luby: LubySeries,
    luby_restart: bool,
    cur_restart: usize,
}

impl Instantiate for Restarter {
    fn instantiate(config: &Config, _cnf: &CNFDescription) -> Restarter {
        Restarter {
            lbd_queue: BoundedQueue::new(LBD_QUEUE_LEN),
            trail_queue: BoundedQueue::new(TRAIL_QUEUE_LEN),
            luby_restart: config.use_luby(),
            ..Restarter::default()
        }
    }
}

impl RestartIF for Restarter {
    fn block_restart(&mut self, asg: &AssignStack) {
        self.trail_queue.push(asg.stack_len() as u64);
        if BLOCK_AFTER_CONFLICT < asg.num_conflict
            && self.lbd_queue.is_full()
            && BLOCK_THRESHOLD * self.trail_queue.avg() < asg.stack_len() as f64
        {
            self.lbd_queue.fast_clear();
            self.num_block += 1;
        }
    }
    fn update_lbd(&mut self, lbd: usize) {
        self.lbd_queue.push(lbd as u64);
        self.sum_lbd += lbd;
    }
    fn restart_needed(&mut self, asg: &AssignStack) -> bool {
        if self.lbd_queue.is_full()
            && (self.sum_lbd as f64 / asg.num_conflict as f64)
                < self.lbd_queue.avg() * FORCE_THRESHOLD
        {
            self.lbd_queue.fast_clear();
            self.num_restart += 1;
            return true;
        }
        false
    }
    fn next_restart_budget(&mut self) -> usize {
        let scale = if self.luby_restart {
            self.luby.next_unchecked() as f64
        } else {
            GEOMETRIC_RATIO.powi(self.cur_restart as i32)
        };
        self.cur_restart += 1;
        (RESTART_UNIT * scale) as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_luby_budgets() {
        let config = Config::default();
        let cnf = CNFDescription::default();
        let mut rst = Restarter::instantiate(&config, &cnf);
        assert_eq!(rst.next_restart_budget(), 32);
        assert_eq!(rst.next_restart_budget(), 32);
        assert_eq!(rst.next_restart_budget(), 64);
        assert_eq!(rst.next_restart_budget(), 32);
    }
    #[test]
    fn test_forcing_fires_on_degraded_lbd() {
        let config = Config::default();
        let cnf = CNFDescription {
            num_of_variables: 4,
            ..CNFDescription::default()
        };
        let mut asg = AssignStack::instantiate(&config, &cnf);
        let mut rst = Restarter::instantiate(&config, &cnf);
        asg.num_conflict = LBD_QUEUE_LEN;
        // a long run of low-LBD clauses, then a full window of bad ones
        for _ in 0..LBD_QUEUE_LEN {
            rst.update_lbd(1);
        }
        assert!(!rst.restart_needed(&asg));
        for _ in 0..LBD_QUEUE_LEN {
            rst.update_lbd(10);
        }
        asg.num_conflict = 2 * LBD_QUEUE_LEN;
        assert!(rst.restart_needed(&asg));
        // the evidence is consumed by the firing
        assert!(!rst.restart_needed(&asg));
        assert_eq!(rst.num_restart, 1);
    }
}
