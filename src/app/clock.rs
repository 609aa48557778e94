//! Fixed-step accumulator
//!
//! Turns variable frame times into a whole number of fixed simulation steps.

use crate::consts::{MAX_FRAME_DT, MAX_SUBSTEPS};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedStep {
    dt: f32,
    accumulator: f32,
    max_substeps: u32,
}

impl FixedStep {
    pub fn new(dt: f32) -> Self {
        Self {
            dt,
            accumulator: 0.0,
            max_substeps: MAX_SUBSTEPS,
        }
    }

    /// Step length in seconds
    pub fn dt(&self) -> f32 {
        self.dt
    }

    /// Add a frame's elapsed time, returning how many steps to run now
    pub fn advance(&mut self, frame_dt: f32) -> u32 {
        self.accumulator += frame_dt.clamp(0.0, MAX_FRAME_DT);

        let mut steps = 0;
        while self.accumulator >= self.dt && steps < self.max_substeps {
            self.accumulator -= self.dt;
            steps += 1;
        }

        // Hit the substep cap: drop the backlog rather than spiral
        if self.accumulator >= self.dt {
            log::debug!("Dropping {:.3}s of simulation backlog", self.accumulator);
            self.accumulator = 0.0;
        }

        steps
    }

    pub fn reset(&mut self) {
        self.accumulator = 0.0;
    }
}
