use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use log::{error, info};

use rasterizer::cli::{Cli, Command};
use rasterizer::core::{self, LineMode};
use rasterizer::demo;
use rasterizer::scene::SceneFile;

fn main() -> ExitCode {
    let cli = Cli::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(cli.log_level()))
        .format_timestamp(None)
        .init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{:#}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Demo { out_dir, size, line_mode } => {
            let written = demo::render_all(&out_dir, size, line_mode.into())?;
            info!("wrote {} demo images to {}", written.len(), out_dir.display());
        }

        Command::Render { scene, output, line_mode } => {
            let mut scene = SceneFile::load(&scene)?;
            if let Some(mode) = line_mode {
                scene.draw_list.line_mode = LineMode::from(mode);
            }

            let buffer = scene.render()?;
            core::save(&buffer, &output)
                .with_context(|| format!("could not save file {}", output.display()))?;
        }

        Command::Info { image } => {
            let decoded = core::load(&image)?;
            info!(
                "{}: {}x{} pixels, {} bytes of RGB data",
                image.display(),
                decoded.width,
                decoded.height,
                decoded.rgb.len()
            );
        }
    }

    Ok(())
}
