use anyhow::Result;
use clap::Parser;
use skewer::{find_interceptions, first_interception, logger, read_rays, write_sums, Cli};

fn main() -> Result<()> {
    let cli = Cli::parse();
    logger::init_cli_logger(cli.verbose);
    tracing::debug!("CLI config: {:?}", cli);

    let rays = read_rays(&cli.input)?;
    let config = cli.solve_config();

    let lines = if cli.all {
        let lines = find_interceptions(&rays, &config)?;
        tracing::info!(solutions = lines.len(), "found interceptions");
        lines
    } else {
        let line = first_interception(&rays, &config)?;
        tracing::info!("interception: {}", line);
        vec![line]
    };

    write_sums(&mut std::io::stdout().lock(), &lines)?;
    Ok(())
}
