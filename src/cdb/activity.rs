/// Clause activity management
use {
    super::{CRef, ClauseDB},
    crate::types::*,
};

const ACTIVITY_MAX: f32 = 1e20;
const ACTIVITY_SCALE: f32 = 1e-20;

impl ActivityIF<CRef> for ClauseDB {
    fn activity(&self, cr: CRef) -> f64 {
        self.ca.activity(cr) as f64
    }
    fn reward_at_analysis(&mut self, cr: CRef) {
        let act = self.ca.activity(cr) + self.cla_inc as f32;
        self.ca.set_activity(cr, act);
        if ACTIVITY_MAX < act {
            let ClauseDB {
                ref mut ca,
                ref learnts,
                ..
            } = *self;
            for c in learnts.iter() {
                let a = ca.activity(*c);
                ca.set_activity(*c, a * ACTIVITY_SCALE);
            }
            self.cla_inc *= ACTIVITY_SCALE as f64;
        }
    }
    fn decay_activity(&mut self) {
        self.cla_inc *= 1.0 / self.cla_decay;
    }
}
