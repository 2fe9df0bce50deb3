use crate::config::SimulationConfig;

/// Converts wall-clock time into a bounded number of integration steps per frame.
///
/// Timestamps are milliseconds from any monotonic source (`performance.now()`, or an
/// `Instant` measured against a fixed origin). Only whole steps run; the leftover
/// fraction of a step carries into the next frame, so the step rate does not depend on
/// the render rate. When more steps are due than the per-frame budget allows, the
/// surplus is dropped and the simulation runs slower than wall time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameScheduler {
    steps_per_second: f64,
    max_steps_per_frame: u32,
    last_step_ms: Option<f64>,
}

impl FrameScheduler {
    pub fn new(steps_per_second: f64, max_steps_per_frame: u32) -> Self {
        Self {
            steps_per_second,
            max_steps_per_frame,
            last_step_ms: None,
        }
    }

    pub fn from_config(config: &SimulationConfig) -> Self {
        Self::new(config.steps_per_second, config.max_steps_per_frame)
    }

    pub fn steps_per_second(&self) -> f64 {
        self.steps_per_second
    }

    pub fn max_steps_per_frame(&self) -> u32 {
        self.max_steps_per_frame
    }

    pub fn last_step_ms(&self) -> Option<f64> {
        self.last_step_ms
    }

    /// Forgets the last step time; the next frame only records a new baseline.
    pub fn restart(&mut self) {
        self.last_step_ms = None;
    }

    /// Number of steps owed at `now_ms`, after clamping to the per-frame budget.
    pub fn steps_due(&self, now_ms: f64) -> u32 {
        let Some(last) = self.last_step_ms else {
            return 0;
        };

        let elapsed_ms = now_ms - last;
        if !(elapsed_ms > 0.0) {
            return 0;
        }

        let owed = (elapsed_ms * self.steps_per_second / 1000.0).floor();
        if owed >= f64::from(self.max_steps_per_frame) {
            self.max_steps_per_frame
        } else {
            owed as u32
        }
    }

    /// Runs `step` for every step due at `now_ms`, stopping early once it reports that
    /// nothing is left to simulate. Returns the number of steps run.
    pub fn run_frame<E>(
        &mut self,
        now_ms: f64,
        mut step: impl FnMut() -> Result<bool, E>,
    ) -> Result<u32, E> {
        let last = match self.last_step_ms {
            Some(last) if now_ms >= last => last,
            _ => {
                self.last_step_ms = Some(now_ms);
                return Ok(0);
            }
        };

        let due = self.steps_due(now_ms);
        let mut ran = 0;
        while ran < due {
            ran += 1;
            if !step()? {
                break;
            }
        }

        if due >= self.max_steps_per_frame {
            self.last_step_ms = Some(now_ms);
        } else if due > 0 {
            self.last_step_ms = Some(last + f64::from(due) * 1000.0 / self.steps_per_second);
        }

        log::trace!(
            "frame at {now_ms:.1}ms: {ran}/{due} steps, {:.1}ms since last step",
            now_ms - last
        );
        Ok(ran)
    }
}

impl Default for FrameScheduler {
    fn default() -> Self {
        Self::from_config(&SimulationConfig::default())
    }
}
