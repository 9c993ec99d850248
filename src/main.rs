use clap::Parser;

use dog_gallery::cli::Cli;
use dog_gallery::config::Config;
use dog_gallery::logging::init_tracing;
use dog_gallery::ui;

fn main() {
    init_tracing();
    let cli = Cli::parse();

    if let Err(err) = run(&cli) {
        tracing::error!(error = %err, "fatal");
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let mut config = Config::load_from(&cli.config_path())?;
    cli.apply_to(&mut config);
    config.validate()?;
    ui::runtime::run(&config, cli.breed.clone())
}
