/// Row-major grid filling with a bounded retry budget
pub mod assembler;
/// Border compatibility testing
pub mod matcher;
/// Seeded random source for reproducible runs
pub mod random;
