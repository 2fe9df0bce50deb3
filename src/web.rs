//! WASM entry point - a strand exposed to JavaScript renderers
//!
//! Coordinates cross the boundary as flat `[x0, y0, x1, y1, ...]` arrays.

use crate::config::SimulationConfig;
use crate::math::Vec2;
use crate::strand::StrandSimulation;
use wasm_bindgen::prelude::*;

fn to_points(coords: &[f32]) -> Vec<Vec2> {
    coords
        .chunks_exact(2)
        .map(|xy| Vec2::new(xy[0], xy[1]))
        .collect()
}

fn now_ms() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or(0.0)
}

#[wasm_bindgen]
pub struct WebStrand {
    strand: StrandSimulation,
}

#[wasm_bindgen]
impl WebStrand {
    #[wasm_bindgen(constructor)]
    pub fn new() -> WebStrand {
        WebStrand {
            strand: StrandSimulation::new(SimulationConfig::default()),
        }
    }

    /// Sets a new target; odd trailing coordinates are ignored.
    #[wasm_bindgen(js_name = setTarget)]
    pub fn set_target(&mut self, coords: &[f32], animate: bool) -> Result<(), JsError> {
        self.strand.set_target(&to_points(coords), animate)?;
        Ok(())
    }

    /// Runs the steps owed since the last frame, using `performance.now()`.
    pub fn frame(&mut self) -> Result<u32, JsError> {
        Ok(self.strand.frame(now_ms())?)
    }

    /// Same as `frame`, with a caller-supplied timestamp in milliseconds.
    #[wasm_bindgen(js_name = frameAt)]
    pub fn frame_at(&mut self, now_ms: f64) -> Result<u32, JsError> {
        Ok(self.strand.frame(now_ms)?)
    }

    pub fn points(&self) -> Vec<f32> {
        self.strand
            .vertices()
            .iter()
            .flat_map(|p| [p.x, p.y])
            .collect()
    }

    /// SVG `points` attribute for the current chain.
    #[wasm_bindgen(js_name = svgPoints)]
    pub fn svg_points(&self) -> String {
        self.strand
            .vertices()
            .iter()
            .map(|p| format!("{},{}", p.x, p.y))
            .collect::<Vec<_>>()
            .join(" ")
    }

    #[wasm_bindgen(js_name = inMotion)]
    pub fn in_motion(&self) -> bool {
        self.strand.in_motion()
    }
}

impl Default for WebStrand {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Warn).expect("Failed to init logger");
}
