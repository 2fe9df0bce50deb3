use glam::Vec2;
use std::thread;
use std::time::{Duration, Instant};
use strand_morph::{SimulationConfig, StrandBundle};

const FRAME: Duration = Duration::from_millis(16);
const COLUMN_WIDTH: f32 = 100.0;
const ROW_HEIGHT: f32 = 150.0;

/// Two-row strand layout: each strand drops from column `i` to column `ends[i]`.
fn layout(ends: &[usize]) -> Vec<Vec<Vec2>> {
    ends.iter()
        .enumerate()
        .map(|(start, &end)| {
            vec![
                Vec2::new(start as f32 * COLUMN_WIDTH, 0.0),
                Vec2::new(end as f32 * COLUMN_WIDTH, ROW_HEIGHT),
                Vec2::new(end as f32 * COLUMN_WIDTH, 2.0 * ROW_HEIGHT),
            ]
        })
        .collect()
}

/// Middle vertex of each strand, skipping empty ones.
fn midpoints<'a>(strands: impl Iterator<Item = &'a [Vec2]>) -> String {
    strands
        .filter_map(|v| v.get(v.len() / 2))
        .map(|mid| format!("({:.1}, {:.1})", mid.x, mid.y))
        .collect::<Vec<_>>()
        .join(" ")
}

fn run(bundle: &mut StrandBundle, origin: Instant) -> Result<(), strand_morph::GeometryError> {
    let started = Instant::now();
    let mut frames = 0u32;
    let mut steps = 0u32;

    while bundle.in_motion() {
        let now_ms = origin.elapsed().as_secs_f64() * 1000.0;
        steps += bundle.frame(now_ms)?;
        frames += 1;

        if frames % 30 == 0 {
            log::info!("frame {frames}: midpoints {}", midpoints(bundle.vertices()));
        }

        thread::sleep(FRAME);
    }

    log::info!(
        "settled after {frames} frames, {steps} steps, {:.2}s",
        started.elapsed().as_secs_f64()
    );
    Ok(())
}

fn main() {
    env_logger::init();

    let config = match SimulationConfig::builder().build() {
        Ok(config) => config,
        Err(e) => {
            log::error!("{e}");
            return;
        }
    };

    let origin = Instant::now();
    let mut bundle = StrandBundle::new(config);

    let sequence: [&[usize]; 3] = [&[0, 1, 2], &[1, 2, 0], &[2, 0, 1]];
    for ends in sequence {
        log::info!("morphing strands toward {ends:?}");
        if let Err(e) = bundle.set_targets(&layout(ends), true) {
            log::error!("could not plan transition: {e}");
            return;
        }
        if let Err(e) = run(&mut bundle, origin) {
            log::error!("simulation failed: {e}");
            return;
        }
    }

    for (i, vertices) in bundle.vertices().enumerate() {
        println!("strand {i}: {vertices:?}");
    }
}
