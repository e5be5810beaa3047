use crate::vector::Vector;

/// A single supervised example: a feature vector and its target.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    pub x: Vector,
    pub y: f64,
}

impl Sample {
    pub fn new(x: impl Into<Vector>, y: f64) -> Self {
        Self { x: x.into(), y }
    }

    #[inline]
    pub fn feature_size(&self) -> usize {
        self.x.len()
    }
}
