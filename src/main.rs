use clap::Parser;
use log::info;
use primewp::config::{Cli, RenderConfig};
use primewp::io::{save_png, write_json_file};
use primewp::render::render;
use primewp::PrimeGrid;

fn main() {
    env_logger::init();
    let cli = Cli::parse();
    if let Err(err) = run(&cli) {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), String> {
    let config = RenderConfig::from_cli(cli)?;
    info!(
        "rendering {}x{} fg={} bg={} bound={:?}",
        config.width,
        config.height,
        config.palette.foreground,
        config.palette.background,
        config.bound
    );

    let grid = PrimeGrid::generate(config.width, config.height, config.bound)
        .map_err(|e| e.to_string())?;
    let image = render(&grid.matrix, &config.palette);
    save_png(&image, &config.image_out)?;
    info!("wrote {}", config.image_out.display());

    if let Some(path) = &config.summary_out {
        let summary = grid.summary();
        write_json_file(path, &summary)?;
        println!(
            "{} primes in 1..={} ({:.2}%), summary written to {}",
            summary.prime_count,
            summary.sieve_bound,
            summary.density * 100.0,
            path.display()
        );
    }

    Ok(())
}
