use crate::errors::StructureError;
use crate::utils;

/// struct for containing the information about the atoms
///
/// > lattice: Lattice - the lattice of the structure
/// > positions: Vec<[f64; 3]> - the positions of the atoms in cartesian coordinates
/// > species: Vec<String> - the label of each atom
/// > pbc: [bool; 3] - whether the structure is periodic along each lattice vector
/// > magnetic_moments: Option<Vec<f64>> - the initial moment of each atom, if known
/// > text: String - the input file, its first line titles written KPOINTS
#[derive(Clone, Debug)]
pub struct Atoms {
    pub lattice: Lattice,
    pub positions: Vec<[f64; 3]>,
    pub species: Vec<String>,
    pub pbc: [bool; 3],
    pub magnetic_moments: Option<Vec<f64>>,
    pub text: String,
}

impl Atoms {
    /// initialises a fully periodic structure with no magnetic moments
    pub fn new(lattice: Lattice,
               positions: Vec<[f64; 3]>,
               species: Vec<String>,
               text: String)
               -> Self {
        Self { lattice,
               positions,
               species,
               pbc: [true; 3],
               magnetic_moments: None,
               text }
    }

    /// sets the periodicity along each lattice vector
    pub fn with_pbc(mut self, pbc: [bool; 3]) -> Self {
        self.pbc = pbc;
        self
    }

    /// attaches an initial magnetic moment to each atom
    pub fn with_magnetic_moments(mut self, moments: Vec<f64>) -> Self {
        self.magnetic_moments = Some(moments);
        self
    }

    /// the first line of the source text, the title of a POSCAR
    pub fn title(&self) -> &str {
        self.text.lines().next().unwrap_or("").trim()
    }

    /// number of atoms in the structure
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// true if the structure holds no atoms
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// true if any atom carries a nonzero magnetic moment
    pub fn has_magnetic_moments(&self) -> bool {
        match &self.magnetic_moments {
            Some(moments) => moments.iter().any(|m| *m != 0.),
            None => false,
        }
    }

    /// positions of the atoms in fractional coordinates
    pub fn fractional_positions(&self) -> Vec<[f64; 3]> {
        self.positions
            .iter()
            .map(|p| utils::dot(*p, self.lattice.to_fractional))
            .collect()
    }
}

/// Lattice - structure for containing information on the cell
///
/// > a: f64 - length of the a-vector
/// > b: f64 - length of the b-vector
/// > c: f64 - length of the c-vector
/// > to_fractional: [[f64; 3]; 3] - transformation matrix for converting to fractional
/// >                                coordinates
/// > to_cartesian: [[f64; 3]; 3] - transformation matrix for converting to cartesian
/// >                               coordinates
/// > volume: f64 - the volume of the cell
#[derive(Clone, Debug, PartialEq)]
pub struct Lattice {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub to_fractional: [[f64; 3]; 3],
    pub to_cartesian: [[f64; 3]; 3],
    pub volume: f64,
}

impl Lattice {
    /// Initialises the structure. Builds all the fields of the lattice structure
    /// from a 2d vector in the form:
    ///
    /// > [
    /// >     [ax, ay, az],
    /// >     [bx, by, bz],
    /// >     [cx, cy, cz],
    /// >  ]
    pub fn new(lattice: [[f64; 3]; 3]) -> Result<Self, StructureError> {
        let to_fractional = utils::invert_lattice(&lattice)
            .ok_or(StructureError::SingularLattice)?;
        let volume =
            utils::vdot(utils::cross(lattice[0], lattice[1]), lattice[2]).abs();
        Ok(Self { a: utils::norm(lattice[0]),
                  b: utils::norm(lattice[1]),
                  c: utils::norm(lattice[2]),
                  to_fractional,
                  to_cartesian: lattice,
                  volume })
    }

    /// The crystallographic reciprocal lattice, rows b_i with a_i . b_j = delta_ij.
    ///
    /// There is no factor of 2 pi so the units are inverse length, the same as a
    /// k-point spacing.
    pub fn reciprocal(&self) -> [[f64; 3]; 3] {
        utils::transpose(self.to_fractional)
    }

    /// lengths of the reciprocal lattice vectors
    pub fn reciprocal_lengths(&self) -> [f64; 3] {
        let reciprocal = self.reciprocal();
        [utils::norm(reciprocal[0]),
         utils::norm(reciprocal[1]),
         utils::norm(reciprocal[2])]
    }
}
