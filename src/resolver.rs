use crate::errors::KpointError;
use crate::policy::{KpointPolicy, PolicyValue, KPPA, KPPVOL, LENGTH_DENSITIES,
                    LINE_DENSITY};
use crate::scheme::{CandidateGrid, DensitySchemeLibrary, PathType,
                    StructureAdapter};
use log::debug;

/// The k-points a [KpointPolicy] resolves to.
#[derive(Clone, Debug, PartialEq)]
pub enum ResolvedKpoints {
    /// Cartesian k-points along a high symmetry path.
    Line(Vec<[f64; 3]>),
    /// An automatic mesh and whether it is gamma centred.
    Mesh { grid: [usize; 3], gamma: bool },
}

impl ResolvedKpoints {
    /// Line mode is never gamma centred.
    pub fn is_gamma(&self) -> bool {
        match self {
            Self::Line(_) => false,
            Self::Mesh { gamma, .. } => *gamma,
        }
    }

    pub fn grid(&self) -> Option<[usize; 3]> {
        match self {
            Self::Line(_) => None,
            Self::Mesh { grid, .. } => Some(*grid),
        }
    }

    pub fn kpoints(&self) -> Option<&[[f64; 3]]> {
        match self {
            Self::Line(kpoints) => Some(kpoints),
            Self::Mesh { .. } => None,
        }
    }
}

/// Resolves a [KpointPolicy] into k-points for the structure built from `source`.
///
/// A `line_density` scheme wins outright and produces a Latimer-Munro band path.
/// Otherwise every scheme is evaluated in insertion order and the densest grid is
/// kept, the later scheme winning a tie.
pub fn resolve<A, L>(policy: &KpointPolicy,
                     source: &A::Source,
                     adapter: &A,
                     library: &L,
                     force_gamma: bool)
                     -> Result<ResolvedKpoints, KpointError>
    where A: StructureAdapter + ?Sized,
          L: DensitySchemeLibrary + ?Sized
{
    if policy.is_empty() {
        return Err(KpointError::EmptyPolicy);
    }
    let atoms = adapter.to_structure(source)?;

    if let Some(value) = policy.get(LINE_DENSITY) {
        let line_density = scalar(LINE_DENSITY, value)?;
        let has_magmoms = atoms.has_magnetic_moments();
        debug!("Generating {} path with line density {} (magnetic: {})",
               PathType::LatimerMunro.name(),
               line_density,
               has_magmoms);
        let kpoints = library.high_symmetry_kpoints(&atoms,
                                                    PathType::LatimerMunro,
                                                    has_magmoms,
                                                    line_density)?;
        return Ok(ResolvedKpoints::Line(kpoints));
    }

    let mut max_grid: Option<CandidateGrid> = None;
    for (key, value) in policy.iter() {
        let grid = match key {
            KPPVOL => library.density_by_volume(&atoms,
                                                scalar(key, value)?,
                                                force_gamma)?,
            KPPA => library.density_by_atoms(&atoms,
                                             scalar(key, value)?,
                                             force_gamma)?,
            LENGTH_DENSITIES => {
                let densities =
                    value.as_triple()
                         .ok_or_else(|| KpointError::InvalidValue {
                             key: key.to_string(),
                             expected: "three numbers",
                         })?;
                library.density_by_lengths(&atoms, densities, force_gamma)?
            }
            _ => return Err(KpointError::UnsupportedScheme(key.to_string())),
        };
        debug!("Scheme {} gives a {:?} {} grid ({} k-points)",
               key,
               grid.kpts,
               grid.style.name(),
               grid.n_kpts());
        max_grid = match max_grid {
            Some(max) if grid.n_kpts() < max.n_kpts() => Some(max),
            _ => Some(grid),
        };
    }

    let max_grid = max_grid.ok_or(KpointError::EmptyPolicy)?;
    debug!("Chose a {:?} {} grid", max_grid.kpts, max_grid.style.name());
    Ok(ResolvedKpoints::Mesh { grid: max_grid.kpts,
                               gamma: max_grid.style.is_gamma() })
}

fn scalar(key: &str, value: &PolicyValue) -> Result<f64, KpointError> {
    value.as_scalar()
         .ok_or_else(|| KpointError::InvalidValue { key: key.to_string(),
                                                    expected: "a single number" })
}
