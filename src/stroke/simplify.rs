use crate::foundation::core::Point;

/// Euclidean distance from `p` to the closed segment `a`-`b`.
///
/// A zero-length segment degenerates to the point-to-point distance `|p - a|`.
pub fn point_segment_distance(p: Point, a: Point, b: Point) -> f64 {
    let ab = b - a;
    let len_sq = ab.hypot2();
    if len_sq == 0.0 {
        return (p - a).hypot();
    }
    let t = ((p - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    (p - (a + ab * t)).hypot()
}

/// Ramer–Douglas–Peucker over `points`, returning a mask parallel to `points` where `true`
/// marks a point retained in the simplified polyline.
///
/// Both endpoints of every visited interval are kept. An interval stops splitting when it has
/// no interior points or when its farthest interior point lies closer than `epsilon` to the
/// chord; otherwise it splits at that point (first index wins on ties). The pass is a pure
/// function of its inputs, so re-running it is idempotent.
///
/// Worst case is O(N²) for inputs where every split peels a single point.
pub fn rdp_kept_mask(points: &[Point], epsilon: f64) -> Vec<bool> {
    let mut kept = vec![false; points.len()];
    let Some(last) = points.len().checked_sub(1) else {
        return kept;
    };

    // Intervals still to split. Depth can reach N for input that peels one point per split.
    let mut pending = vec![(0usize, last)];
    while let Some((left, right)) = pending.pop() {
        kept[left] = true;
        kept[right] = true;

        if left + 1 >= right {
            continue;
        }

        let (a, b) = (points[left], points[right]);
        let mut max_dist = -1.0f64;
        let mut max_pos = left;
        for (i, &p) in points.iter().enumerate().take(right).skip(left + 1) {
            let dist = point_segment_distance(p, a, b);
            if dist > max_dist {
                max_dist = dist;
                max_pos = i;
            }
        }

        if max_dist < epsilon {
            continue;
        }

        pending.push((max_pos, right));
        pending.push((left, max_pos));
    }

    kept
}

#[cfg(test)]
#[path = "../../tests/unit/stroke/simplify.rs"]
mod tests;
