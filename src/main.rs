use kgrid::arguments::{Args, ClapApp};
use kgrid::io::{kpoints, vasp::Poscar};
use kgrid::resolver::ResolvedKpoints;
use kgrid::spacing;
use log::{error, info};

fn main() {
    let env = env_logger::Env::default().default_filter_or("info");
    env_logger::Builder::from_env(env).init();

    let app = ClapApp::App;
    let args = match Args::new(app.get().get_matches()) {
        Ok(args) => args,
        Err(e) => e.exit(),
    };

    let poscar = Poscar {};
    let atoms = match poscar.read(&args.file) {
        Ok(atoms) => atoms.with_pbc(args.pbc),
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    };
    info!("Read {} atoms from {}", atoms.len(), args.file);

    let grid = match spacing::grid_from_spacing(&atoms, args.spacing) {
        Ok(grid) => grid,
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    };
    println!("{} {} {}", grid[0], grid[1], grid[2]);

    if let Some(output) = args.output {
        let kpts = ResolvedKpoints::Mesh { grid,
                                           gamma: args.gamma };
        let comment = format!("{} (k-point spacing {})",
                              atoms.title(),
                              args.spacing);
        match kpoints::write(&output, &kpts, &comment) {
            Ok(_) => info!("Wrote {}", output),
            Err(e) => {
                error!("Unable to write {}: {}", output, e);
                std::process::exit(1);
            }
        }
    }
}
