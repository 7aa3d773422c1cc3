//! Rössler system:
//!
//!   dx/dt = −y − z
//!   dy/dt = x + ay
//!   dz/dt = b + z(x − c)
//!
//! The default parameter set (a=0.2, b=0.2, c=5.7) produces the familiar
//! single-scroll chaotic attractor.

use serde::{Deserialize, Serialize};

/// Parameters of the Rössler vector field.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RosslerParams {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl Default for RosslerParams {
    fn default() -> Self {
        Self {
            a: 0.2,
            b: 0.2,
            c: 5.7,
        }
    }
}

impl RosslerParams {
    /// Evaluates the vector field at `state = [x, y, z]`.
    pub fn vector_field(&self, _t: f64, state: &[f64], deriv: &mut [f64]) {
        let (x, y, z) = (state[0], state[1], state[2]);
        deriv[0] = -y - z;
        deriv[1] = x + self.a * y;
        deriv[2] = self.b + z * (x - self.c);
    }
}
