use clap::{crate_authors, crate_version, Arg, ArgMatches, Command};

/// Create a container for dealing with clap and being able to test arg parsing
pub enum ClapApp {
    App,
}

impl ClapApp {
    /// Create and return the clap::Command
    pub fn get(&self) -> Command<'static> {
        Command::new("K-point Grid Generator")
            .author(crate_authors!())
            .version(crate_version!())
            .arg(Arg::new("file")
                .required(true)
                .index(1)
                .help("The POSCAR to read the structure from."))
            .arg(Arg::new("spacing")
                .short('s')
                .long("spacing")
                .takes_value(true)
                .required(true)
                .help("Largest distance between k-points, in inverse Angstrom.")
                .long_help(
"The largest allowed distance between neighbouring k-points along each
reciprocal lattice vector. The reciprocal lattice is taken without the factor
of 2 pi, so a spacing of 0.25 on a 4 Angstrom cubic cell gives 1 k-point per
axis while 0.1 gives 3."))
            .arg(Arg::new("non periodic")
                .short('n')
                .long("non-periodic")
                .takes_value(true)
                .multiple_occurrences(true)
                .possible_values(["a", "b", "c"])
                .help("A lattice vector along which the structure isn't periodic.")
                .long_help(
"Marks the lattice vector as non-periodic, a slab would pass -n c. The grid
always has a single k-point along non-periodic lattice vectors. The flag can be
repeated (kgrid POSCAR -s 0.2 -n b -n c)."))
            .arg(Arg::new("gamma")
                .short('g')
                .long("gamma")
                .takes_value(false)
                .help("Write a gamma centred grid instead of Monkhorst-Pack."))
            .arg(Arg::new("output")
                .short('o')
                .long("output")
                .takes_value(true)
                .help("Write the grid to a KPOINTS file at this path."))
    }
}

/// Holds the arguments passed to the program from the command-line
pub struct Args {
    pub file: String,
    pub spacing: f64,
    pub pbc: [bool; 3],
    pub gamma: bool,
    pub output: Option<String>,
}

impl Args {
    /// Initialises the structure from the command-line arguments.
    pub fn new(arguments: ArgMatches) -> Result<Self, clap::Error> {
        let file = match arguments.value_of("file") {
            Some(f) => String::from(f),
            None => String::new(),
        };
        let spacing = arguments.value_of_t::<f64>("spacing")?;
        let mut pbc = [true; 3];
        if let Some(axes) = arguments.values_of("non periodic") {
            for axis in axes {
                match axis {
                    "a" => pbc[0] = false,
                    "b" => pbc[1] = false,
                    "c" => pbc[2] = false,
                    _ => (),
                }
            }
        }
        let gamma = arguments.is_present("gamma");
        let output = arguments.value_of("output").map(String::from);
        Ok(Self { file,
                  spacing,
                  pbc,
                  gamma,
                  output })
    }
}
