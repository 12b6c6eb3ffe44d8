//! Normalized landmark types produced by the detection provider

use serde::{Deserialize, Serialize};

/// A single keypoint in image-relative coordinates (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LandmarkPoint {
    pub x: f64,
    pub y: f64,
    #[serde(default)]
    pub z: f64,
    /// Detection confidence, may slightly exceed 1.0
    #[serde(default)]
    pub visibility: f64,
}

impl LandmarkPoint {
    pub fn new(x: f64, y: f64, z: f64, visibility: f64) -> Self {
        Self { x, y, z, visibility }
    }

    /// Point with full visibility and no depth
    pub fn at(x: f64, y: f64) -> Self {
        Self::new(x, y, 0.0, 1.0)
    }

    /// Midpoint of two points (visibility is the lower of the two)
    pub fn midpoint(&self, other: &LandmarkPoint) -> LandmarkPoint {
        LandmarkPoint {
            x: (self.x + other.x) / 2.0,
            y: (self.y + other.y) / 2.0,
            z: (self.z + other.z) / 2.0,
            visibility: self.visibility.min(other.visibility),
        }
    }
}

/// Ordered, fixed-length landmark set for one frame
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LandmarkFrame {
    points: Vec<LandmarkPoint>,
}

impl LandmarkFrame {
    pub fn new(points: Vec<LandmarkPoint>) -> Self {
        Self { points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Get the point at a semantic index
    pub fn get(&self, index: usize) -> Option<&LandmarkPoint> {
        self.points.get(index)
    }

    /// Replace a single point, returning false if the index is out of range
    pub fn set(&mut self, index: usize, point: LandmarkPoint) -> bool {
        match self.points.get_mut(index) {
            Some(slot) => {
                *slot = point;
                true
            }
            None => false,
        }
    }

    /// Fraction of points whose visibility is strictly above `threshold`
    pub fn visible_fraction(&self, threshold: f64) -> f64 {
        if self.points.is_empty() {
            return 0.0;
        }
        let visible = self
            .points
            .iter()
            .filter(|p| p.visibility > threshold)
            .count();
        visible as f64 / self.points.len() as f64
    }
}

impl From<Vec<LandmarkPoint>> for LandmarkFrame {
    fn from(points: Vec<LandmarkPoint>) -> Self {
        Self::new(points)
    }
}
