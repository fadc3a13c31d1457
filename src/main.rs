use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use mandelbrot_explorer::{
    ButtonState, CliController, FrameInput, GestureScript, PointerPosition, PpmFilePresenter,
    ViewArgs,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
enum Gesture {
    #[default]
    None,
    ZoomIn,
    ZoomOut,
}

impl Gesture {
    fn buttons(self) -> ButtonState {
        ButtonState {
            primary: self == Self::ZoomIn,
            secondary: self == Self::ZoomOut,
        }
    }
}

/// Renders a Mandelbrot frame to a PPM file, optionally after replaying a
/// held zoom gesture.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    #[command(flatten)]
    view: ViewArgs,

    /// Button held during the scripted frames
    #[arg(long, value_enum, default_value_t = Gesture::None)]
    gesture: Gesture,

    /// Pointer x in pixels; defaults to the horizontal center
    #[arg(long)]
    pointer_x: Option<f64>,

    /// Pointer y in pixels; defaults to the vertical center
    #[arg(long)]
    pointer_y: Option<f64>,

    /// Number of frames to hold the gesture for
    #[arg(long, default_value_t = 0)]
    frames: u32,

    /// Output image path
    #[arg(short, long, default_value = "output/mandelbrot.ppm")]
    output: PathBuf,
}

impl Cli {
    fn script(&self) -> GestureScript {
        let pointer = PointerPosition {
            x: self
                .pointer_x
                .unwrap_or(f64::from(self.view.width) / 2.0),
            y: self
                .pointer_y
                .unwrap_or(f64::from(self.view.height) / 2.0),
        };

        GestureScript {
            input: FrameInput {
                pointer,
                buttons: self.gesture.buttons(),
            },
            frames: self.frames,
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = cli.view.to_render_config().validate()?;

    let mut controller = CliController::new(PpmFilePresenter::new(), config);
    controller.run(cli.script())?;
    controller.write(&cli.output)?;

    Ok(())
}
