use super::arc::length;
use crate::error::{GeometryError, Result};
use crate::math::{points_eq, Point, DEFAULT_POINT_TOLERANCE};

/// Samples `chain` at each arc-length proportion.
///
/// The proportions must be sorted ascending and lie in `[0, 1]`. The chain's segments are
/// walked once; each proportion is placed by linear interpolation inside the segment that
/// encloses it. A proportion of exactly 1 maps to the final vertex, and repeated
/// proportions each produce their own point.
pub fn resample(chain: &[Point], proportions: &[f32]) -> Result<Vec<Point>> {
    validate_proportions(proportions)?;

    let (first, last) = match (chain.first(), chain.last()) {
        (Some(first), Some(last)) => (*first, *last),
        _ if proportions.is_empty() => return Ok(Vec::new()),
        _ => {
            return Err(GeometryError::EmptyChain {
                requested: proportions.len(),
            })
        }
    };

    if chain.len() == 1 {
        return Ok(vec![first; proportions.len()]);
    }

    let total = length(chain);
    let mut samples = Vec::with_capacity(proportions.len());
    let mut traversed = 0.0;
    let mut index = 0;

    'segments: for w in chain.windows(2) {
        let (start, end) = (w[0], w[1]);
        let segment = start.distance(end);

        while let Some(&proportion) = proportions.get(index) {
            if proportion >= 1.0 {
                break 'segments;
            }

            let needed = proportion * total;
            if needed <= traversed {
                samples.push(start);
            } else if needed <= traversed + segment {
                samples.push(start.lerp(end, (needed - traversed) / segment));
            } else {
                break;
            }
            index += 1;
        }

        traversed += segment;
    }

    samples.resize(proportions.len(), last);
    Ok(samples)
}

fn validate_proportions(proportions: &[f32]) -> Result<()> {
    for (index, &value) in proportions.iter().enumerate() {
        if !(0.0..=1.0).contains(&value) {
            return Err(GeometryError::ProportionOutOfRange { index, value });
        }
        if index > 0 && proportions[index - 1] > value {
            return Err(GeometryError::UnsortedProportions {
                index,
                previous: proportions[index - 1],
                current: value,
            });
        }
    }
    Ok(())
}

/// Elementwise interpolation between two chains of equal length.
///
/// `t == 0` returns an exact copy of `a` and `t == 1` an exact copy of `b`.
pub fn lerp(a: &[Point], b: &[Point], t: f32) -> Result<Vec<Point>> {
    if a.len() != b.len() {
        return Err(GeometryError::LengthMismatch {
            left: a.len(),
            right: b.len(),
        });
    }
    if !t.is_finite() {
        return Err(GeometryError::NonFiniteFactor(t));
    }

    if t == 0.0 {
        return Ok(a.to_vec());
    }
    if t == 1.0 {
        return Ok(b.to_vec());
    }

    Ok(a.iter().zip(b).map(|(o, p)| o.lerp(*p, t)).collect())
}

/// Drops every vertex equal to its predecessor within [`DEFAULT_POINT_TOLERANCE`].
pub fn remove_consecutive_duplicates(chain: &[Point]) -> Vec<Point> {
    remove_consecutive_duplicates_with_tolerance(chain, DEFAULT_POINT_TOLERANCE)
}

/// Drops every vertex equal to its immediate predecessor within `tolerance` per axis.
/// The first vertex is always kept.
pub fn remove_consecutive_duplicates_with_tolerance(chain: &[Point], tolerance: f32) -> Vec<Point> {
    let mut kept: Vec<Point> = Vec::with_capacity(chain.len());
    let mut previous: Option<Point> = None;

    for &vertex in chain {
        if !previous.is_some_and(|p| points_eq(p, vertex, tolerance)) {
            kept.push(vertex);
        }
        previous = Some(vertex);
    }

    kept
}
