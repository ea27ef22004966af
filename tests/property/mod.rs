//! Property-based tests for generation guarantees
