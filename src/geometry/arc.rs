use crate::math::Point;

/// Total length of the polyline. Zero for chains with fewer than two vertices.
pub fn length(chain: &[Point]) -> f32 {
    chain.windows(2).map(|w| w[0].distance(w[1])).sum()
}

/// Cumulative arc-length fraction at each vertex.
///
/// Non-decreasing, starting at 0 and ending at exactly 1 for chains of two or more
/// vertices. A single vertex yields `[0]` and an empty chain yields `[]`. When every
/// vertex coincides the chain has no length to divide by, so all interior vertices
/// report 0 and the last reports 1.
pub fn arc_length_proportions(chain: &[Point]) -> Vec<f32> {
    match chain.len() {
        0 => return Vec::new(),
        1 => return vec![0.0],
        _ => {}
    }

    let mut proportions = Vec::with_capacity(chain.len());
    let mut traversed = 0.0;
    proportions.push(0.0);
    for w in chain.windows(2) {
        traversed += w[0].distance(w[1]);
        proportions.push(traversed);
    }

    if traversed > 0.0 {
        for p in &mut proportions {
            *p /= traversed;
        }
    }

    if let Some(last) = proportions.last_mut() {
        *last = 1.0;
    }

    proportions
}

/// `count` evenly spaced values from `start` to `end`, both inclusive.
pub fn even_spacing(start: f32, end: f32, count: usize) -> Vec<f32> {
    match count {
        0 => return Vec::new(),
        1 => return vec![start],
        _ => {}
    }

    let divisions = (count - 1) as f32;
    let mut values: Vec<f32> = (0..count - 1)
        .map(|i| start + (end - start) * i as f32 / divisions)
        .collect();
    values.push(end);
    values
}
