use crate::atoms::Atoms;
use crate::errors::{KpointError, StructureError};

/// Converts an atomistic representation into a crystallographic [Atoms].
pub trait StructureAdapter {
    /// The representation the adapter reads from.
    type Source: ?Sized;

    fn to_structure(&self,
                    source: &Self::Source)
                    -> Result<Atoms, StructureError>;
}

/// Adapter for callers that already hold an [Atoms].
pub struct Passthrough;

impl StructureAdapter for Passthrough {
    type Source = Atoms;

    fn to_structure(&self, source: &Atoms) -> Result<Atoms, StructureError> {
        Ok(source.clone())
    }
}

/// How a mesh sits in reciprocal space.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MeshStyle {
    /// The mesh contains the origin.
    Gamma,
    /// The mesh is the Monkhorst-Pack one, shifted off the origin for even sizes.
    Monkhorst,
}

impl MeshStyle {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Gamma => "Gamma",
            Self::Monkhorst => "Monkhorst",
        }
    }

    /// true if the style is gamma centred
    pub fn is_gamma(&self) -> bool {
        self.name().eq_ignore_ascii_case("gamma")
    }
}

/// Conventions for choosing the high symmetry path through the Brillouin zone.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PathType {
    SetyawanCurtarolo,
    Hinuma,
    LatimerMunro,
}

impl PathType {
    pub fn name(&self) -> &'static str {
        match self {
            Self::SetyawanCurtarolo => "setyawan_curtarolo",
            Self::Hinuma => "hinuma",
            Self::LatimerMunro => "latimer_munro",
        }
    }
}

/// A mesh produced by a single density scheme.
///
/// > kpts: [usize; 3] - number of divisions along each reciprocal lattice vector
/// > style: MeshStyle - where the mesh sits
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CandidateGrid {
    pub kpts: [usize; 3],
    pub style: MeshStyle,
}

impl CandidateGrid {
    pub fn new(kpts: [usize; 3], style: MeshStyle) -> Self {
        Self { kpts, style }
    }

    /// total number of k-points in the mesh, used to compare densities
    pub fn n_kpts(&self) -> usize {
        self.kpts.iter().product()
    }
}

/// The density based grid generators and the band path generator that a
/// [KpointPolicy](crate::policy::KpointPolicy) is resolved against.
pub trait DensitySchemeLibrary {
    /// A grid with roughly `kppvol` k-points per unit reciprocal volume.
    fn density_by_volume(&self,
                         atoms: &Atoms,
                         kppvol: f64,
                         force_gamma: bool)
                         -> Result<CandidateGrid, KpointError>;

    /// A grid with roughly `kppa` k-points per atom.
    fn density_by_atoms(&self,
                        atoms: &Atoms,
                        kppa: f64,
                        force_gamma: bool)
                        -> Result<CandidateGrid, KpointError>;

    /// A grid with a k-point density per unit length along each reciprocal axis.
    fn density_by_lengths(&self,
                          atoms: &Atoms,
                          length_densities: [f64; 3],
                          force_gamma: bool)
                          -> Result<CandidateGrid, KpointError>;

    /// Cartesian k-points along the high symmetry path of the structure.
    fn high_symmetry_kpoints(&self,
                             atoms: &Atoms,
                             path_type: PathType,
                             has_magmoms: bool,
                             line_density: f64)
                             -> Result<Vec<[f64; 3]>, KpointError>;
}
