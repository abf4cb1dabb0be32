//! Border compatibility with `Blank` as a wildcard

use crate::spatial::symbol::Symbol;
use crate::spatial::tiles::Border;

/// Whether two cells may touch
///
/// Either cell being `Blank` is enough; otherwise the symbols must be equal.
pub fn symbols_compatible(a: Symbol, b: Symbol) -> bool {
    a.is_blank() || b.is_blank() || a == b
}

/// Whether two borders may touch
///
/// Compares cells at corresponding positions. Borders of different shapes
/// never match. The relation is symmetric and reflexive but not transitive,
/// since `Blank` bridges otherwise incompatible pairs.
pub fn compatible(a: &Border, b: &Border) -> bool {
    a.dim() == b.dim()
        && a.cells()
            .iter()
            .zip(b.cells().iter())
            .all(|(&x, &y)| symbols_compatible(x, y))
}
