//! Property-based tests for partition validation and the quadrature rules.
