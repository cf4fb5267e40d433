use crate::atoms::Atoms;
use crate::errors::KpointError;
use crate::utils;

/// The k-point grid with at most `spacing` between k-points along each
/// reciprocal lattice vector of the structure.
///
/// The spacing is in the units of [Lattice::reciprocal](crate::atoms::Lattice::reciprocal),
/// inverse length without a factor of 2 pi. Axes that aren't periodic get a
/// single k-point.
pub fn grid_from_spacing(atoms: &Atoms,
                         spacing: f64)
                         -> Result<[usize; 3], KpointError> {
    grid_from_reciprocal(atoms.lattice.reciprocal(), atoms.pbc, spacing)
}

/// As [grid_from_spacing] but for a bare reciprocal basis, stored as rows.
pub fn grid_from_reciprocal(reciprocal: [[f64; 3]; 3],
                            pbc: [bool; 3],
                            spacing: f64)
                            -> Result<[usize; 3], KpointError> {
    if !(spacing.is_finite() && spacing > 0.) {
        return Err(KpointError::NonPositiveSpacing(spacing));
    }
    let mut grid = [1usize; 3];
    for (i, n) in grid.iter_mut().enumerate() {
        if pbc[i] {
            let divisions = (utils::norm(reciprocal[i]) / spacing).ceil();
            // the cast saturates rather than failing
            if !divisions.is_finite() || divisions >= usize::MAX as f64 {
                return Err(KpointError::SpacingTooFine(spacing));
            }
            *n = (divisions as usize).max(1);
        }
    }
    Ok(grid)
}
