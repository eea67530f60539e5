/// Shared quadrature types and parameter validation.
///
/// Defines the result pair returned by both rules and the precondition
/// checks that run before any grid is built.
pub mod core;

/// Sample grid construction.
///
/// Builds the evenly spaced grids both rules integrate over, with exact
/// endpoints.
pub mod grid;

/// The composite trapezoidal rule.
///
/// Approximates the integral by summing trapezoid areas between consecutive
/// sample points; exact for linear integrands.
pub mod trapezoid;

/// The composite Simpson's 1/3 rule.
///
/// Approximates the integral with parabolic interpolation over pairs of
/// segments; exact for cubics, and requires an even segment count.
pub mod simpson;

pub use self::core::QuadratureResult;
pub use self::simpson::integrate_simpson;
pub use self::trapezoid::integrate_trapezoid;
