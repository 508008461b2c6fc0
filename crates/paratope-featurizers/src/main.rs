use clap::Parser;
use paratope_featurizers::cli::Cli;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    cli.execute()?;
    Ok(())
}
