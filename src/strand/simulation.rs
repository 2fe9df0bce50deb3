use crate::config::SimulationConfig;
use crate::dynamics::{FrameScheduler, StepOutcome, TensionIntegrator};
use crate::error::Result;
use crate::geometry::remove_consecutive_duplicates_with_tolerance;
use crate::math::Point;
use crate::transition::{Plan, SimulationState, TransitionPlanner};

/// One polyline that morphs toward whatever target it was last given.
#[derive(Debug, Clone)]
pub struct StrandSimulation {
    config: SimulationConfig,
    planner: TransitionPlanner,
    integrator: TensionIntegrator,
    scheduler: FrameScheduler,
    state: SimulationState,
    steps_taken: u64,
}

impl StrandSimulation {
    pub fn new(config: SimulationConfig) -> Self {
        Self {
            planner: TransitionPlanner::new(config.resolution),
            integrator: TensionIntegrator::new(config.integrator),
            scheduler: FrameScheduler::from_config(&config),
            state: SimulationState::at_rest(Vec::new()),
            steps_taken: 0,
            config,
        }
    }

    pub fn with_vertices(vertices: &[Point], config: SimulationConfig) -> Self {
        let mut strand = Self::new(config);
        strand.snap_to(vertices);
        strand
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// The live chain to draw this frame.
    pub fn vertices(&self) -> &[Point] {
        self.state.mesh()
    }

    pub fn target(&self) -> &[Point] {
        self.state.target()
    }

    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    pub fn in_motion(&self) -> bool {
        self.state.in_motion()
    }

    pub fn fixed_movement_proportion(&self) -> f32 {
        self.state.fixed_movement_proportion()
    }

    pub fn set_fixed_movement_proportion(&mut self, proportion: f32) {
        self.state.set_fixed_movement_proportion(proportion);
    }

    #[cfg(test)]
    pub(crate) fn state_mut(&mut self) -> &mut SimulationState {
        &mut self.state
    }

    /// Integration steps run since the current transition started.
    pub fn steps_taken(&self) -> u64 {
        self.steps_taken
    }

    /// Replaces the chain immediately, abandoning any transition in flight.
    pub fn snap_to(&mut self, vertices: &[Point]) {
        let vertices = self.dedup(vertices);
        log::debug!("strand snapped to {} vertices", vertices.len());
        self.state = SimulationState::at_rest(vertices);
        self.steps_taken = 0;
    }

    /// Starts morphing from the current chain toward `vertices`.
    ///
    /// Any transition in flight is replaced, starting from wherever its mesh currently
    /// is. Without a current shape to morph along, the strand snaps instead.
    pub fn transition_to(&mut self, vertices: &[Point]) -> Result<()> {
        let target = self.dedup(vertices);
        match self.planner.plan(self.state.mesh(), &target)? {
            Plan::Snap => {
                log::debug!("no shape to morph from, snapping to {} vertices", target.len());
                self.state = SimulationState::at_rest(target);
            }
            Plan::Simulate(state) => {
                self.state = state;
                self.scheduler.restart();
            }
        }
        self.steps_taken = 0;
        Ok(())
    }

    pub fn set_target(&mut self, vertices: &[Point], animate: bool) -> Result<()> {
        if animate {
            self.transition_to(vertices)
        } else {
            self.snap_to(vertices);
            Ok(())
        }
    }

    /// Runs a single integration step regardless of wall-clock time.
    pub fn step(&mut self) -> Result<StepOutcome> {
        let outcome = self.integrator.step(&mut self.state)?;
        record(&mut self.steps_taken, outcome);
        Ok(outcome)
    }

    /// Runs the integration steps owed at `now_ms` and returns how many ran.
    pub fn frame(&mut self, now_ms: f64) -> Result<u32> {
        if !self.state.in_motion() {
            self.scheduler.restart();
            return Ok(0);
        }

        let Self {
            integrator,
            scheduler,
            state,
            steps_taken,
            ..
        } = self;

        scheduler.run_frame(now_ms, || {
            let outcome = integrator.step(state)?;
            record(steps_taken, outcome);
            Ok(outcome.is_moving())
        })
    }

    fn dedup(&self, vertices: &[Point]) -> Vec<Point> {
        remove_consecutive_duplicates_with_tolerance(vertices, self.config.duplicate_tolerance)
    }
}

fn record(steps_taken: &mut u64, outcome: StepOutcome) {
    match outcome {
        StepOutcome::Idle => {}
        StepOutcome::Moving => *steps_taken += 1,
        StepOutcome::Settled => {
            *steps_taken += 1;
            log::debug!("strand settled after {steps_taken} steps");
        }
    }
}

impl Default for StrandSimulation {
    fn default() -> Self {
        Self::new(SimulationConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn run_to_rest(strand: &mut StrandSimulation) -> usize {
        for steps in 1..=100_000 {
            if !strand.step().unwrap().is_moving() {
                return steps;
            }
        }
        panic!("strand never came to rest");
    }

    #[test]
    fn test_new_strand_is_empty_and_still() {
        let strand = StrandSimulation::default();
        assert!(strand.vertices().is_empty());
        assert!(!strand.in_motion());
    }

    #[test]
    fn test_first_target_snaps() {
        let mut strand = StrandSimulation::default();
        let target = [Vec2::ZERO, Vec2::new(0.0, 10.0)];
        strand.transition_to(&target).unwrap();
        assert!(!strand.in_motion());
        assert_eq!(strand.vertices(), &target);
    }

    #[test]
    fn test_snap_removes_duplicates() {
        let mut strand = StrandSimulation::default();
        strand.snap_to(&[Vec2::ZERO, Vec2::ZERO, Vec2::ONE]);
        assert_eq!(strand.vertices(), &[Vec2::ZERO, Vec2::ONE]);
    }

    #[test]
    fn test_transition_moves_then_settles() {
        let mut strand = StrandSimulation::with_vertices(
            &[Vec2::ZERO, Vec2::new(100.0, 0.0)],
            SimulationConfig::default(),
        );
        let target = [Vec2::ZERO, Vec2::new(50.0, 40.0), Vec2::new(100.0, 0.0)];
        strand.transition_to(&target).unwrap();
        assert!(strand.in_motion());
        assert!(strand.vertices().len() > target.len());

        let steps = run_to_rest(&mut strand);
        assert!(steps > 1);
        assert!(!strand.in_motion());
        assert_eq!(strand.vertices(), &target);
        assert_eq!(strand.steps_taken(), steps as u64);
    }

    #[test]
    fn test_retarget_mid_flight_replans_from_live_mesh() {
        let mut strand = StrandSimulation::with_vertices(
            &[Vec2::ZERO, Vec2::new(100.0, 0.0)],
            SimulationConfig::default(),
        );
        strand
            .transition_to(&[Vec2::ZERO, Vec2::new(50.0, 40.0), Vec2::new(100.0, 0.0)])
            .unwrap();
        for _ in 0..30 {
            strand.step().unwrap();
        }
        let live_start = strand.vertices()[0];

        let second = [Vec2::new(0.0, 100.0), Vec2::new(100.0, 100.0)];
        strand.transition_to(&second).unwrap();
        assert!(strand.in_motion());
        assert_eq!(strand.steps_taken(), 0);
        assert_eq!(strand.vertices()[0], live_start);
        assert!(strand.state().velocities().iter().all(|v| *v == Vec2::ZERO));

        run_to_rest(&mut strand);
        assert_eq!(strand.vertices(), &second);
    }

    #[test]
    fn test_set_target_without_animation_snaps() {
        let mut strand = StrandSimulation::with_vertices(
            &[Vec2::ZERO, Vec2::new(100.0, 0.0)],
            SimulationConfig::default(),
        );
        let target = [Vec2::ZERO, Vec2::new(0.0, 100.0)];
        strand.set_target(&target, false).unwrap();
        assert!(!strand.in_motion());
        assert_eq!(strand.vertices(), &target);
    }

    #[test]
    fn test_frame_paces_steps_by_time() {
        let mut strand = StrandSimulation::with_vertices(
            &[Vec2::ZERO, Vec2::new(100.0, 0.0)],
            SimulationConfig::default(),
        );
        strand
            .transition_to(&[Vec2::ZERO, Vec2::new(50.0, 40.0), Vec2::new(100.0, 0.0)])
            .unwrap();

        assert_eq!(strand.frame(1_000.0).unwrap(), 0);
        assert_eq!(strand.frame(1_016.0).unwrap(), 16);
        assert_eq!(strand.frame(3_000.0).unwrap(), 100);
        assert_eq!(strand.steps_taken(), 116);
    }

    #[test]
    fn test_frames_and_steps_count_alike() {
        let mut stepped = StrandSimulation::with_vertices(
            &[Vec2::ZERO, Vec2::new(100.0, 0.0)],
            SimulationConfig::default(),
        );
        stepped
            .transition_to(&[Vec2::ZERO, Vec2::new(50.0, 40.0), Vec2::new(100.0, 0.0)])
            .unwrap();
        let mut framed = stepped.clone();

        let stepped_total = run_to_rest(&mut stepped);
        let mut now = 0.0;
        let mut framed_total = 0;
        while framed.in_motion() {
            framed_total += framed.frame(now).unwrap();
            now += 16.0;
        }

        assert_eq!(framed_total as usize, stepped_total);
        assert_eq!(framed.steps_taken(), stepped.steps_taken());
        assert_eq!(framed.vertices(), stepped.vertices());
    }

    #[test]
    fn test_frame_when_still_does_nothing() {
        let mut strand =
            StrandSimulation::with_vertices(&[Vec2::ZERO, Vec2::X], SimulationConfig::default());
        assert_eq!(strand.frame(0.0).unwrap(), 0);
        assert_eq!(strand.frame(1_000.0).unwrap(), 0);
    }

    #[test]
    fn test_frames_reach_rest() {
        let mut strand = StrandSimulation::with_vertices(
            &[Vec2::ZERO, Vec2::new(100.0, 0.0)],
            SimulationConfig::default(),
        );
        let target = [Vec2::new(0.0, 20.0), Vec2::new(100.0, -20.0)];
        strand.transition_to(&target).unwrap();

        let mut now = 0.0;
        while strand.in_motion() && now < 1_000_000.0 {
            strand.frame(now).unwrap();
            now += 16.0;
        }
        assert!(!strand.in_motion());
        assert_eq!(strand.vertices(), &target);
    }
}
