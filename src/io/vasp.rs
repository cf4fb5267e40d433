use crate::atoms::{Atoms, Lattice};
use crate::errors::StructureError;
use crate::io::Coord;
use crate::scheme::StructureAdapter;
use crate::utils;
use regex::Regex;
use std::path::Path;
use std::sync::OnceLock;

/// matches a line of element symbols rather than atom counts
fn species_regex() -> &'static Regex {
    static SPECIES: OnceLock<Regex> = OnceLock::new();
    SPECIES.get_or_init(|| {
        Regex::new(r"^\s*[A-Za-z]").expect("species regex is valid")
    })
}

/// The VASP POSCAR format, also used by CONTCAR.
pub struct Poscar {}

impl Poscar {
    /// Read a POSCAR from file.
    pub fn read(&self, path: impl AsRef<Path>) -> Result<Atoms, StructureError> {
        let text = std::fs::read_to_string(path)?;
        self.to_atoms(text)
    }

    /// Read atom information.
    pub fn to_atoms(&self, text: String) -> Result<Atoms, StructureError> {
        let mut lines = Lines::new(&text);
        // skip the comment line and then read the lattice information
        let _ = lines.next()?;
        let (n, line) = lines.next()?;
        let scale = parse_floats(n, line)?;
        let mut rows = [[0f64; 3]; 3];
        for row in rows.iter_mut() {
            let (n, line) = lines.next()?;
            *row = parse_vector(n, line)?;
        }
        // the scale can be negative and this means that it is the volume of the cell
        // it can also be 3 values which is a multiplier for each cartesian axis
        let scale = match scale.as_slice() {
            [s] if *s < 0. => {
                let volume =
                    utils::vdot(utils::cross(rows[0], rows[1]), rows[2]).abs();
                [(-s / volume).cbrt(); 3]
            }
            [s] => [*s; 3],
            [x, y, z] => [*x, *y, *z],
            _ => {
                return Err(StructureError::parse(2,
                                                 "expected 1 or 3 scale factors"))
            }
        };
        for row in rows.iter_mut() {
            for (x, s) in row.iter_mut().zip(scale.iter()) {
                *x *= s;
            }
        }
        let lattice = Lattice::new(rows)?;
        // VASP 5 adds a line of species before the counts
        let (n, line) = lines.next()?;
        let (symbols, (n, line)) = if species_regex().is_match(line) {
            (Some(line.split_whitespace()
                      .map(String::from)
                      .collect::<Vec<String>>()),
             lines.next()?)
        } else {
            (None, (n, line))
        };
        let counts = line.split_whitespace()
                         .map(|x| {
                             x.parse::<usize>().map_err(|_| {
                                 let msg = format!("\"{}\" is not a count", x);
                                 StructureError::parse(n, msg)
                             })
                         })
                         .collect::<Result<Vec<usize>, StructureError>>()?;
        let species = match symbols {
            Some(symbols) if symbols.len() != counts.len() => {
                let msg = "number of species and counts differ";
                return Err(StructureError::parse(n, msg));
            }
            Some(symbols) => symbols,
            None => vec![String::from("X"); counts.len()],
        };
        let species = species.iter()
                             .zip(counts.iter())
                             .flat_map(|(s, c)| {
                                 std::iter::repeat(s.clone()).take(*c)
                             })
                             .collect::<Vec<String>>();
        let (mut n, mut line) = lines.next()?;
        if line.trim_start().to_lowercase().starts_with('s') {
            let next = lines.next()?;
            n = next.0;
            line = next.1;
        }
        let coord = match line.trim_start().chars().next() {
            Some('d') | Some('D') => Coord::Fractional,
            Some('c') | Some('C') | Some('k') | Some('K') => Coord::Cartesian,
            _ => {
                return Err(StructureError::parse(n,
                                                 "expected Direct or Cartesian"))
            }
        };
        let positions = (0..species.len())
            .map(|_| {
                let (n, line) = lines.next()?;
                let p = parse_vector(n, line)?;
                // make the positions fractional and wrap them into the cell
                let frac = match coord {
                    Coord::Fractional => p,
                    Coord::Cartesian => {
                        let p = [p[0] * scale[0], p[1] * scale[1], p[2] * scale[2]];
                        utils::dot(p, lattice.to_fractional)
                    }
                };
                Ok(utils::dot([frac[0].rem_euclid(1f64),
                               frac[1].rem_euclid(1f64),
                               frac[2].rem_euclid(1f64)],
                              lattice.to_cartesian))
            })
            .collect::<Result<Vec<[f64; 3]>, StructureError>>()?;
        Ok(Atoms::new(lattice, positions, species, text))
    }
}

impl StructureAdapter for Poscar {
    type Source = str;

    fn to_structure(&self, source: &str) -> Result<Atoms, StructureError> {
        self.to_atoms(source.to_string())
    }
}

/// Numbered lines of the file, running out of lines is a parse error.
struct Lines<'a> {
    lines: std::iter::Enumerate<std::str::Lines<'a>>,
    last: usize,
}

impl<'a> Lines<'a> {
    fn new(text: &'a str) -> Self {
        Self { lines: text.lines().enumerate(),
               last: 0 }
    }

    fn next(&mut self) -> Result<(usize, &'a str), StructureError> {
        match self.lines.next() {
            Some((i, line)) => {
                self.last = i + 1;
                Ok((i + 1, line))
            }
            None => Err(StructureError::parse(self.last + 1,
                                              "unexpected end of file")),
        }
    }
}

fn parse_floats(n: usize, line: &str) -> Result<Vec<f64>, StructureError> {
    line.split_whitespace()
        .map(|x| {
            x.parse::<f64>().map_err(|_| {
                let msg = format!("\"{}\" is not a number", x);
                StructureError::parse(n, msg)
            })
        })
        .collect()
}

fn parse_vector(n: usize, line: &str) -> Result<[f64; 3], StructureError> {
    let mut v = [0f64; 3];
    let mut values = line.split_whitespace();
    for x in v.iter_mut() {
        let value = values.next().ok_or_else(|| {
            StructureError::parse(n, "expected 3 numbers")
        })?;
        *x = value.parse::<f64>().map_err(|_| {
            let msg = format!("\"{}\" is not a number", value);
            StructureError::parse(n, msg)
        })?;
    }
    Ok(v)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SI: &str = "Si bulk
5.43
0.0 0.5 0.5
0.5 0.0 0.5
0.5 0.5 0.0
Si
2
Direct
0.00 0.00 0.00
0.25 0.25 0.25
";

    #[test]
    fn poscar_species_direct() {
        let atoms = Poscar {}.to_atoms(String::from(SI)).unwrap();
        assert_eq!(atoms.species, vec!["Si", "Si"]);
        assert_eq!(atoms.lattice.to_cartesian[0], [0., 2.715, 2.715]);
        assert_eq!(atoms.positions[0], [0., 0., 0.]);
        assert!((atoms.positions[1][0] - 1.3575).abs() < 1e-12);
        assert_eq!(atoms.pbc, [true; 3]);
        assert_eq!(atoms.text, SI);
        assert_eq!(atoms.title(), "Si bulk");
    }

    #[test]
    fn poscar_no_species() {
        let text = "H2
1.0
5.0 0.0 0.0
0.0 5.0 0.0
0.0 0.0 5.0
2
Cartesian
0.0 0.0 0.0
0.0 0.0 0.74
";
        let atoms = Poscar {}.to_atoms(String::from(text)).unwrap();
        assert_eq!(atoms.species, vec!["X", "X"]);
        assert!((atoms.positions[1][2] - 0.74).abs() < 1e-12);
    }

    #[test]
    fn poscar_negative_scale_is_volume() {
        let text = "cube
-8.0
1.0 0.0 0.0
0.0 1.0 0.0
0.0 0.0 1.0
Na
1
Direct
0.0 0.0 0.0
";
        let atoms = Poscar {}.to_atoms(String::from(text)).unwrap();
        assert!((atoms.lattice.volume - 8.).abs() < 1e-12);
        assert!((atoms.lattice.a - 2.).abs() < 1e-12);
    }

    #[test]
    fn poscar_three_scale_factors() {
        let text = "orthorhombic
1.0 2.0 3.0
1.0 0.0 0.0
0.0 1.0 0.0
0.0 0.0 1.0
Na
1
Direct
0.0 0.0 0.0
";
        let atoms = Poscar {}.to_atoms(String::from(text)).unwrap();
        assert_eq!([atoms.lattice.a, atoms.lattice.b, atoms.lattice.c],
                   [1., 2., 3.]);
    }

    #[test]
    fn poscar_selective_dynamics() {
        let text = "slab
1.0
3.0 0.0 0.0
0.0 3.0 0.0
0.0 0.0 20.0
Cu O
1 1
Selective dynamics
Direct
0.0 0.0 0.0 F F F
0.5 0.5 1.1 T T T
";
        let atoms = Poscar {}.to_atoms(String::from(text)).unwrap();
        assert_eq!(atoms.species, vec!["Cu", "O"]);
        assert_eq!(atoms.len(), 2);
        assert!((atoms.positions[1][2] - 2.).abs() < 1e-9);
    }

    #[test]
    fn poscar_bad_count() {
        let text = "bad
1.0
3.0 0.0 0.0
0.0 3.0 0.0
0.0 0.0 3.0
Cu
one
Direct
0.0 0.0 0.0
";
        let err = Poscar {}.to_atoms(String::from(text)).unwrap_err();
        assert!(matches!(err, StructureError::Parse { line: 7, .. }))
    }

    #[test]
    fn poscar_truncated() {
        let text = "short
1.0
3.0 0.0 0.0
0.0 3.0 0.0
0.0 0.0 3.0
Cu
2
Direct
0.0 0.0 0.0
";
        let err = Poscar {}.to_atoms(String::from(text)).unwrap_err();
        assert!(matches!(err, StructureError::Parse { line: 10, .. }))
    }

    #[test]
    fn poscar_singular_lattice() {
        let text = "flat
1.0
1.0 0.0 0.0
0.0 1.0 0.0
1.0 1.0 0.0
Cu
1
Direct
0.0 0.0 0.0
";
        let err = Poscar {}.to_atoms(String::from(text)).unwrap_err();
        assert!(matches!(err, StructureError::SingularLattice))
    }

    #[test]
    fn poscar_structure_adapter() {
        let atoms = Poscar {}.to_structure(SI).unwrap();
        assert_eq!(atoms.len(), 2)
    }
}
