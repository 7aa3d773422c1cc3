//! Lorenz system:
//!
//!   dx/dt = σ(y − x)
//!   dy/dt = x(ρ − z) − y
//!   dz/dt = xy − βz
//!
//! The classical parameter set (σ=10, ρ=28, β=8/3) produces the chaotic
//! butterfly attractor.

use serde::{Deserialize, Serialize};

/// Parameters of the Lorenz vector field.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LorenzParams {
    pub sigma: f64,
    pub rho: f64,
    pub beta: f64,
}

impl Default for LorenzParams {
    fn default() -> Self {
        Self {
            sigma: 10.0,
            rho: 28.0,
            beta: 8.0 / 3.0,
        }
    }
}

impl LorenzParams {
    /// Evaluates the vector field at `state = [x, y, z]`.
    pub fn vector_field(&self, _t: f64, state: &[f64], deriv: &mut [f64]) {
        let (x, y, z) = (state[0], state[1], state[2]);
        deriv[0] = self.sigma * (y - x);
        deriv[1] = x * (self.rho - z) - y;
        deriv[2] = x * y - self.beta * z;
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::LorenzParams;

    #[test]
    fn origin_is_a_fixed_point() {
        let params = LorenzParams::default();
        let mut deriv = [1.0; 3];
        params.vector_field(0.0, &[0.0, 0.0, 0.0], &mut deriv);
        assert_eq!(deriv, [0.0; 3]);
    }

    #[test]
    fn nontrivial_fixed_point_vanishes() {
        // C+ = (√(β(ρ−1)), √(β(ρ−1)), ρ−1) is stationary.
        let params = LorenzParams::default();
        let r = (params.beta * (params.rho - 1.0)).sqrt();
        let mut deriv = [0.0; 3];
        params.vector_field(0.0, &[r, r, params.rho - 1.0], &mut deriv);
        for value in deriv {
            assert_relative_eq!(value, 0.0, epsilon = 1e-12);
        }
    }
}
