//! Turns k-point policies and k-point spacings into the k-point grids used by
//! plane-wave electronic structure codes.
//!
//! ## Policies
//! A [KpointPolicy](policy::KpointPolicy) names one or more generation schemes:
//! - `line_density`: a band-structure path along the high symmetry lines of the
//!   Brillouin zone, following the Latimer-Munro convention.
//! - `kppvol`: k-points per unit of reciprocal volume.
//! - `kppa`: k-points per atom.
//! - `length_densities`: k-point density along each reciprocal lattice vector.
//!
//! If `line_density` is present every other scheme is ignored. Otherwise each
//! scheme is evaluated and the grid with the most k-points is used, a later
//! scheme winning a tie. The grids themselves are produced by a
//! [DensitySchemeLibrary](scheme::DensitySchemeLibrary) supplied by the caller.
//! ```ignore
//! let policy = KpointPolicy::new().with("kppa", 1000.).with("kppvol", 50.);
//! let kpoints = resolver::resolve(&policy, poscar_text, &Poscar {}, &library, false)?;
//! ```
//!
//! ## Spacing
//! [grid_from_spacing](spacing::grid_from_spacing) picks the smallest grid with
//! no more than the given spacing between k-points, leaving a single k-point
//! along any lattice vector that isn't periodic.
//! ```sh
//! $ kgrid POSCAR --spacing 0.2 -n c -o KPOINTS
//! ```
//! ## License
//! MIT

/// For parsing command-line arguments.
pub mod arguments;
/// Contains [Atoms](atoms::Atoms) for storing the structure the k-points are for.
/// Also contains [Lattice](atoms::Lattice) for the cell and its reciprocal.
pub mod atoms;
/// Provides custom errors types.
pub mod errors;
/// Reading of structure files and writing of KPOINTS files.
pub mod io;
/// The ordered [KpointPolicy](policy::KpointPolicy) mapping of scheme names to values.
pub mod policy;
/// Resolves a policy into a band path or the densest grid.
pub mod resolver;
/// Collaborator traits for structure conversion and k-point generation.
pub mod scheme;
/// Converts a k-point spacing into a grid.
pub mod spacing;
/// Misc functions mainly for vector and matrix manipulation.
pub mod utils;
