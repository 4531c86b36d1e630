use crate::foundation::core::Point;
use crate::foundation::error::{InklingError, InklingResult};
use crate::stroke::simplify::rdp_kept_mask;

/// Wire form of one stroke: `[xs, ys]`, equal-length integer arrays of kept points.
pub type StrokeArrays = [Vec<i64>; 2];

/// One continuous pointer-down to pointer-up sample sequence.
///
/// Points are immutable once appended. Which of them survive export is decided by a kept-mask
/// parallel to the points: every point starts kept, and [`Stroke::simplify`] replaces the whole
/// mask with the result of a fresh simplification pass.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Stroke {
    points: Vec<Point>,
    kept: Vec<bool>,
}

impl Stroke {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_points(points: impl IntoIterator<Item = Point>) -> Self {
        let points: Vec<Point> = points.into_iter().collect();
        let kept = vec![true; points.len()];
        Self { points, kept }
    }

    pub fn add_point(&mut self, point: Point) {
        self.points.push(point);
        self.kept.push(true);
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn is_kept(&self, index: usize) -> bool {
        self.kept.get(index).copied().unwrap_or(false)
    }

    pub fn kept_len(&self) -> usize {
        self.kept.iter().filter(|&&k| k).count()
    }

    /// Kept points in capture order.
    pub fn kept_points(&self) -> impl Iterator<Item = Point> + '_ {
        self.points
            .iter()
            .zip(&self.kept)
            .filter_map(|(&p, &k)| k.then_some(p))
    }

    pub fn simplify(&mut self, epsilon: f64) {
        self.kept = rdp_kept_mask(&self.points, epsilon);
    }

    /// Kept points as floored integer `[xs, ys]` arrays.
    pub fn to_arrays(&self) -> StrokeArrays {
        let (xs, ys) = self
            .kept_points()
            .map(|p| (p.x.floor() as i64, p.y.floor() as i64))
            .unzip();
        [xs, ys]
    }

    /// `[[x0,x1,...],[y0,y1,...]]` for the kept points.
    pub fn serialize(&self) -> InklingResult<String> {
        serde_json::to_string(&self.to_arrays()).map_err(|e| InklingError::serde(e.to_string()))
    }
}

/// Every stroke captured during one round, in capture order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Painting {
    strokes: Vec<Stroke>,
}

impl Painting {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `stroke` unless it has no points. Returns whether it was appended.
    pub fn add_stroke(&mut self, stroke: Stroke) -> bool {
        if stroke.is_empty() {
            return false;
        }
        self.strokes.push(stroke);
        true
    }

    pub fn strokes(&self) -> &[Stroke] {
        &self.strokes
    }

    pub fn len(&self) -> usize {
        self.strokes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strokes.is_empty()
    }

    pub fn point_count(&self) -> usize {
        self.strokes.iter().map(Stroke::len).sum()
    }

    pub fn kept_point_count(&self) -> usize {
        self.strokes.iter().map(Stroke::kept_len).sum()
    }

    /// Simplifies every stroke with the same tolerance. Must run before export, otherwise the
    /// raw per-frame samples go out unchanged.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn simplify(&mut self, epsilon: f64) {
        for stroke in &mut self.strokes {
            stroke.simplify(epsilon);
        }
        tracing::debug!(
            strokes = self.strokes.len(),
            points = self.point_count(),
            kept = self.kept_point_count(),
            "painting simplified"
        );
    }

    pub fn to_arrays(&self) -> Vec<StrokeArrays> {
        self.strokes.iter().map(Stroke::to_arrays).collect()
    }

    /// JSON array of per-stroke `[xs, ys]` pairs; `[]` for an empty painting.
    pub fn serialize(&self) -> InklingResult<String> {
        serde_json::to_string(&self.to_arrays()).map_err(|e| InklingError::serde(e.to_string()))
    }

    /// Rebuilds a painting from exported stroke arrays. Every point is kept.
    pub fn from_arrays(drawing: &[StrokeArrays]) -> InklingResult<Self> {
        let mut painting = Self::new();
        for (i, [xs, ys]) in drawing.iter().enumerate() {
            if xs.len() != ys.len() {
                return Err(InklingError::validation(format!(
                    "stroke {i} has {} x coordinates but {} y coordinates",
                    xs.len(),
                    ys.len()
                )));
            }
            let points = xs
                .iter()
                .zip(ys)
                .map(|(&x, &y)| Point::new(x as f64, y as f64));
            painting.add_stroke(Stroke::from_points(points));
        }
        Ok(painting)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/stroke/model.rs"]
mod tests;
