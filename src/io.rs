/// Writing of resolved k-points as a VASP KPOINTS file.
pub mod kpoints;
/// Reading of VASP POSCAR/CONTCAR structures.
pub mod vasp;

/// What is the coordinated system of the file
#[derive(Clone, Copy, Debug, PartialEq)]
enum Coord {
    Fractional,
    Cartesian,
}
