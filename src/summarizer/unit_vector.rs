//! Sparse unit vectors for sentence similarity
//!
//! Vectors are L2-normalized on construction, so cosine similarity reduces
//! to a dot product over the shared dimensions.

use rustc_hash::FxHashMap;

/// A sparse L2-normalized term vector
#[derive(Debug, Clone, Default)]
pub struct UnitVector {
    /// Non-zero dimensions: term -> normalized weight
    pub dimensions: FxHashMap<String, f64>,
    /// L2 norm of the vector before normalization
    pub norm: f64,
}

impl UnitVector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Normalize raw term weights into a unit vector
    ///
    /// Non-positive weights are dropped.
    pub fn from_dimensions(mut dimensions: FxHashMap<String, f64>) -> Self {
        dimensions.retain(|_, w| *w > 0.0);
        let norm = dimensions.values().map(|v| v * v).sum::<f64>().sqrt();
        if norm > 0.0 {
            for value in dimensions.values_mut() {
                *value /= norm;
            }
        }
        Self { dimensions, norm }
    }

    /// Cosine similarity in `[0, 1]`
    ///
    /// Zero when either vector has zero norm. Iterates the smaller vector so
    /// the result does not depend on argument order beyond float rounding.
    pub fn cosine_similarity(&self, other: &UnitVector) -> f64 {
        if self.norm == 0.0 || other.norm == 0.0 {
            return 0.0;
        }
        let (small, large) = if self.dimensions.len() <= other.dimensions.len() {
            (self, other)
        } else {
            (other, self)
        };
        let dot: f64 = small
            .dimensions
            .iter()
            .filter_map(|(term, w)| large.dimensions.get(term).map(|o| w * o))
            .sum();
        dot.clamp(0.0, 1.0)
    }

    pub fn is_empty(&self) -> bool {
        self.dimensions.is_empty()
    }

    pub fn len(&self) -> usize {
        self.dimensions.len()
    }
}
