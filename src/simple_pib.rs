use std::f64::consts::PI;
use clap::Parser;
use fdbox::{
    analytic::Well,
    params::{ Origin, Params },
    potential::Free,
    solve::System,
    units::{ self, Units },
    utils,
};
use ndarray as nd;
use tracing::{ debug, info };
use tracing_subscriber::EnvFilter;

// analytic wavefunction and probability density for an electron in a box, with
// a finite-difference cross-check

/// Tabulate the analytic wavefunction of an electron in an infinite square
/// well.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Level (1 = ground state).
    #[arg(long, default_value_t = 2)]
    n: usize,

    /// Box width (m).
    #[arg(long, default_value_t = 5e-9)]
    length: f64,

    /// Number of positions at which to sample the wavefunction.
    #[arg(long, default_value_t = 1000)]
    samples: usize,

    /// Number of table rows to print.
    #[arg(long, default_value_t = 21)]
    rows: usize,

    /// Grid size for the finite-difference cross-check.
    #[arg(long, default_value_t = 500)]
    grid: usize,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
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

    // measure lengths in units of the box width, so that the box is [0, 1] and
    // the particle has unit mass
    let uu = Units::try_from_mks(units::me, cli.length)?;
    info!(?uu, "natural units");
    let well = Well::new(0.0, 1.0, 1.0)?;

    let e_nat = well.energy(cli.n)?;
    let e_si = uu.from_nat_energy(e_nat);
    let e_expected
        = (cli.n as f64 * PI * units::hbar / cli.length).powi(2)
        / (2.0 * units::me);
    debug!(e_si, e_expected, "level energy");
    println!("# electron, n = {}, L = {:.3e} m", cli.n, cli.length);
    println!("# E = {:.6e} J = {:.6e} eV", e_si, e_si / units::e);

    let x: nd::Array1<f64> = nd::Array1::linspace(0.0, 1.0, cli.samples.max(2));
    let dx = x[1] - x[0];
    let psi = well.sample_wf(cli.n, &x)?;
    let prob = well.sample_density(cli.n, &x)?;
    println!("# trapz(|psi|^2) = {:.8}", utils::trapz(&prob, dx));

    println!("{:>14} {:>14} {:>14}", "x (m)", "psi (m^-1/2)", "|psi|^2 (m^-1)");
    let rows = cli.rows.clamp(2, x.len());
    let stride = (x.len() - 1) as f64 / (rows - 1) as f64;
    for r in 0..rows {
        let i = (r as f64 * stride).round() as usize;
        println!("{:>14.6e} {:>14.6e} {:>14.6e}",
            uu.from_nat_length(x[i]),
            uu.from_nat_amplitude(psi[i]),
            uu.from_nat_density(prob[i]),
        );
    }

    // same box by finite differences: place the grid so that its Dirichlet
    // walls coincide with the box walls
    let n = cli.grid.max(cli.n);
    let spacing = 1.0 / (n as f64 + 1.0);
    let params = Params::default()
        .with_n(n)
        .with_length(1.0 - 2.0 * spacing)
        .with_origin(Origin::Centered);
    let sys = System::new(&params, &Free)?;
    let sols = sys.solve(false)?;
    let e_fd = sols[cli.n - 1].e;
    println!(
        "# finite-difference (N = {}): E = {:.6e} eV (rel. err. {:.3e})",
        n,
        uu.from_nat_energy(e_fd) / units::e,
        (e_fd - e_nat) / e_nat,
    );

    Ok(())
}
