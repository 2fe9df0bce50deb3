use super::simulation::StrandSimulation;
use crate::config::SimulationConfig;
use crate::error::Result;
use crate::math::Point;

/// Several independent strands animated in the same loop, such as the strings of a
/// strand diagram.
#[derive(Debug, Clone, Default)]
pub struct StrandBundle {
    config: SimulationConfig,
    strands: Vec<StrandSimulation>,
}

impl StrandBundle {
    pub fn new(config: SimulationConfig) -> Self {
        Self {
            config,
            strands: Vec::new(),
        }
    }

    pub fn strands(&self) -> &[StrandSimulation] {
        &self.strands
    }

    pub fn strand(&self, index: usize) -> Option<&StrandSimulation> {
        self.strands.get(index)
    }

    pub fn len(&self) -> usize {
        self.strands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strands.is_empty()
    }

    /// Gives every strand a new target, in order.
    ///
    /// When the number of chains differs from the number of strands, all strands are
    /// rebuilt; fresh strands have no shape yet, so they take their targets immediately.
    pub fn set_targets(&mut self, chains: &[Vec<Point>], animate: bool) -> Result<()> {
        if chains.len() != self.strands.len() {
            log::debug!(
                "rebuilding bundle: {} -> {} strands",
                self.strands.len(),
                chains.len()
            );
            self.strands = (0..chains.len())
                .map(|_| StrandSimulation::new(self.config))
                .collect();
        }

        for (strand, chain) in self.strands.iter_mut().zip(chains) {
            strand.set_target(chain, animate)?;
        }
        Ok(())
    }

    /// Advances every strand to `now_ms`; returns the total number of steps run.
    ///
    /// A failing strand does not hold back the others: every strand gets its frame, and
    /// the first error encountered is returned afterwards.
    pub fn frame(&mut self, now_ms: f64) -> Result<u32> {
        let mut total = 0;
        let mut first_error = None;
        for (index, strand) in self.strands.iter_mut().enumerate() {
            match strand.frame(now_ms) {
                Ok(steps) => total += steps,
                Err(e) => {
                    log::warn!("strand {index} failed to advance: {e}");
                    first_error.get_or_insert(e);
                }
            }
        }
        match first_error {
            Some(e) => Err(e),
            None => Ok(total),
        }
    }

    pub fn in_motion(&self) -> bool {
        self.strands.iter().any(StrandSimulation::in_motion)
    }

    /// Current vertices of each strand, in order.
    pub fn vertices(&self) -> impl Iterator<Item = &[Point]> + '_ {
        self.strands.iter().map(StrandSimulation::vertices)
    }
}
