//! Fixed-point inversion of near-identity geodetic perturbations.
//!
//! Given a forward map `f` and a target `t`, searches `x` with `f(x) = t`
//! starting from `x₀ = t`. Works well when `f` is a small perturbation of the
//! identity, as GCJ-02 is (a few hundred metres over thousands of km).
//!
//! Two phases run back to back, each with its own iteration budget:
//!   Subtractive: x ← x − (f(x) − t)
//!   Additive:    x ← x + (t − f(x))
//! The additive phase only starts when the subtractive one used its whole
//! budget, and resumes from where it stopped. If neither reaches the
//! threshold, the last estimate is returned as a best effort.

use crate::point::GeoPoint;

/// Correction direction used by a solver phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Subtractive,
    Additive,
}

impl Phase {
    fn step(self, current: GeoPoint, projected: GeoPoint, target: GeoPoint) -> GeoPoint {
        match self {
            Phase::Subtractive => current - (projected - target),
            Phase::Additive => current + (target - projected),
        }
    }
}

/// Result of an inverse search, with enough detail to judge its quality.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InverseSolution {
    /// Best estimate of the preimage.
    pub point: GeoPoint,
    /// Phase that produced `point`.
    pub phase: Phase,
    /// Forward evaluations spent across both phases.
    pub iterations: usize,
    /// Whether the last step moved less than the threshold.
    pub converged: bool,
}

/// Two-phase fixed-point solver.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FixedPointSolver {
    /// Iteration budget of each phase. Default: 30.
    pub max_iterations: usize,
    /// Convergence threshold on the per-axis step, in degrees. Default: 1e-6
    /// (~0.1 m in latitude).
    pub threshold: f64,
}

impl Default for FixedPointSolver {
    fn default() -> Self {
        Self {
            max_iterations: 30,
            threshold: 1e-6,
        }
    }
}

struct PhaseOutcome {
    point: GeoPoint,
    iterations: usize,
    converged: bool,
}

impl FixedPointSolver {
    pub fn new(max_iterations: usize, threshold: f64) -> Self {
        Self {
            max_iterations,
            threshold,
        }
    }

    /// Find `x` such that `forward(x) ≈ target`.
    pub fn solve<F>(&self, forward: F, target: GeoPoint) -> InverseSolution
    where
        F: Fn(GeoPoint) -> GeoPoint,
    {
        let subtractive = self.run_phase(&forward, target, target, Phase::Subtractive);
        if subtractive.converged {
            return InverseSolution {
                point: subtractive.point,
                phase: Phase::Subtractive,
                iterations: subtractive.iterations,
                converged: true,
            };
        }

        let additive = self.run_phase(&forward, target, subtractive.point, Phase::Additive);
        let iterations = subtractive.iterations + additive.iterations;

        if additive.converged {
            log::debug!(
                "inverse of ({}, {}) converged in additive phase after {} iterations",
                target.lat,
                target.lng,
                iterations
            );
        } else {
            log::warn!(
                "inverse of ({}, {}) did not converge after {} iterations, returning best estimate ({}, {})",
                target.lat,
                target.lng,
                iterations,
                additive.point.lat,
                additive.point.lng
            );
        }

        InverseSolution {
            point: additive.point,
            phase: Phase::Additive,
            iterations,
            converged: additive.converged,
        }
    }

    fn run_phase<F>(
        &self,
        forward: &F,
        target: GeoPoint,
        start: GeoPoint,
        phase: Phase,
    ) -> PhaseOutcome
    where
        F: Fn(GeoPoint) -> GeoPoint,
    {
        let mut current = start;
        for i in 0..self.max_iterations {
            let next = phase.step(current, forward(current), target);
            if next.max_abs_diff(&current) < self.threshold {
                return PhaseOutcome {
                    point: next,
                    iterations: i + 1,
                    converged: true,
                };
            }
            current = next;
        }
        PhaseOutcome {
            point: current,
            iterations: self.max_iterations,
            converged: false,
        }
    }
}
