use clap::{ Parser, ValueEnum };
use fdbox::{
    analytic::Well,
    params::{ Origin, Params },
    potential::{ Barrier, Free, Harmonic, Potential, Step },
    solve::{ self, System },
};
use tracing::info;
use tracing_subscriber::EnvFilter;

// eigenstates of a particle in a box by finite-difference diagonalization

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Pot {
    /// V = 0
    Free,
    /// V = k (x - x0)² / 2
    Harmonic,
    /// V = height for x ≥ x0
    Step,
    /// V = height for |x - x0| ≤ width / 2
    Barrier,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Placement {
    /// [-L/2, L/2]
    Centered,
    /// [0, L]
    Left,
}

impl From<Placement> for Origin {
    fn from(placement: Placement) -> Self {
        match placement {
            Placement::Centered => Origin::Centered,
            Placement::Left => Origin::Left,
        }
    }
}

/// Solve for the lowest eigenstates of a discretized particle in a box.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Number of grid points.
    #[arg(long, default_value_t = 100)]
    n: usize,

    /// Interval length.
    #[arg(long, default_value_t = 100.0)]
    length: f64,

    /// Particle mass.
    #[arg(long, default_value_t = 1.0)]
    mass: f64,

    /// Coupling applied to the potential.
    #[arg(long, default_value_t = 1.0, allow_negative_numbers = true)]
    charge: f64,

    /// Interval placement.
    #[arg(long, value_enum, default_value_t = Placement::Centered)]
    origin: Placement,

    /// Potential inside the box.
    #[arg(long, value_enum, default_value_t = Pot::Free)]
    potential: Pot,

    /// Spring constant for the harmonic potential.
    #[arg(long, default_value_t = 1e-3)]
    k: f64,

    /// Center (harmonic, barrier) or edge (step) of the potential.
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    x0: f64,

    /// Height of the step or barrier.
    #[arg(long, default_value_t = 1e-3, allow_negative_numbers = true)]
    height: f64,

    /// Width of the barrier.
    #[arg(long, default_value_t = 10.0)]
    width: f64,

    /// Number of levels to report.
    #[arg(long, default_value_t = 5)]
    levels: usize,

    /// Print a tab-separated table of x and the reported densities.
    #[arg(long)]
    densities: bool,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn params(&self) -> Params {
        Params::default()
            .with_n(self.n)
            .with_length(self.length)
            .with_mass(self.mass)
            .with_charge(self.charge)
            .with_origin(self.origin.into())
    }

    fn potential(&self) -> Box<dyn Potential> {
        match self.potential {
            Pot::Free => Box::new(Free),
            Pot::Harmonic => Box::new(Harmonic { k: self.k, x0: self.x0 }),
            Pot::Step => Box::new(Step { x0: self.x0, height: self.height }),
            Pot::Barrier => Box::new(Barrier {
                x0: self.x0,
                width: self.width,
                height: self.height,
            }),
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let params = cli.params();
    let pot = cli.potential();
    info!(?params, potential = ?cli.potential, "building system");
    let sys = System::new(&params, &*pot)?;
    let dx = sys.get_dx();
    let sols = sys.solve_levels(cli.levels, true)?;

    // the continuum limit of the discretized free box, for comparison
    let well = (cli.potential == Pot::Free)
        .then(|| Well::dirichlet(sys.grid(), params.mass))
        .transpose()?;

    println!("# N = {}, L = {}, m = {}, q = {}, dx = {:.6e}",
        params.n, params.length, params.mass, params.charge, dx);
    println!("{:>4} {:>14} {:>14} {:>10} {:>6} {:>10} {:>12}",
        "k", "energy", "analytic", "rel.err", "nodes", "sum(p dx)", "<x>");
    for (k, sol) in sols.iter().enumerate() {
        let exact = well.map(|w| w.energy(k + 1)).transpose()?;
        let relerr = exact.map(|ex| (sol.e - ex) / ex);
        let nodes = sol.node_count(sys.get_V()).unwrap_or(0);
        let total = sol.probability_mass(dx).map(|p| p.sum()).unwrap_or(0.0);
        let xbar = sol.expect_x(sys.get_x(), dx).unwrap_or(f64::NAN);
        println!("{:>4} {:>14.6e} {:>14} {:>10} {:>6} {:>10.6} {:>12.4e}",
            k,
            sol.e,
            exact.map(|ex| format!("{ex:.6e}")).unwrap_or_else(|| "-".into()),
            relerr.map(|r| format!("{r:.3e}")).unwrap_or_else(|| "-".into()),
            nodes,
            total,
            xbar,
        );
    }

    if cli.densities {
        let p = solve::densities(&sols)
            .ok_or_else(|| anyhow::anyhow!("missing wavefunctions"))?;
        println!();
        let header: Vec<String>
            = (0..p.nrows()).map(|k| format!("p_{k}")).collect();
        println!("x\t{}", header.join("\t"));
        for (i, x) in sys.get_x().iter().enumerate() {
            let row: Vec<String>
                = p.column(i).iter().map(|pk| format!("{pk:.8e}")).collect();
            println!("{x:.8e}\t{}", row.join("\t"));
        }
    }

    Ok(())
}
