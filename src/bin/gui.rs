use clap::Parser;
use mandelbrot_explorer::{PixelsPresenterFactory, RunGuiCommand, ViewArgs};

/// Interactive Mandelbrot explorer. Hold the left button to zoom in towards the
/// pointer and the right button to zoom out.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    #[command(flatten)]
    view: ViewArgs,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = cli.view.to_render_config().validate()?;

    let command = RunGuiCommand::new(PixelsPresenterFactory::new(), config);

    command.execute()
}
