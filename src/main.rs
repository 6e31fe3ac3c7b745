use anyhow::Context;
use clap::Parser;
use sketchpad::config::Config;
use sketchpad::export::ExportManager;
use sketchpad::input::InputState;
use sketchpad::script::GestureScript;
use sketchpad::util;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "sketchpad")]
#[command(version, about = "Freehand color drawing canvas with PNG export")]
struct Cli {
    /// Gesture script (TOML) to replay against a fresh canvas
    #[arg(long, short = 's', value_name = "FILE")]
    script: Option<PathBuf>,

    /// Directory to write exports to (overrides the config file)
    #[arg(long, short = 'o', value_name = "DIR")]
    output_dir: Option<PathBuf>,

    /// Config file to load instead of ~/.config/sketchpad/config.toml
    #[arg(long, short = 'c', value_name = "FILE")]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let Some(script_path) = cli.script else {
        println!("sketchpad: Freehand color drawing canvas with PNG export");
        println!();
        println!("Usage:");
        println!("  sketchpad --script <FILE>                  Replay a gesture script");
        println!("  sketchpad --script <FILE> --output-dir D   Write exports to D");
        println!("  sketchpad --help                           Show help");
        println!();
        println!("Script steps:");
        println!("  set-channel (channel, value), set-width (width),");
        println!("  drag (points), clear, export");
        return Ok(());
    };

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    let script = GestureScript::load(&script_path)?;

    let mut settings = config.export.to_settings();
    if let Some(dir) = cli.output_dir {
        settings.directory = dir;
    }
    log::info!(
        "Exporting {}x{} drawings to {}",
        settings.width,
        settings.height,
        settings.directory.display()
    );

    let runtime = tokio::runtime::Runtime::new().context("Failed to start export runtime")?;
    let manager = ExportManager::new(runtime.handle(), settings);
    let mut state = InputState::from_config(&config);

    let mut failures = 0usize;
    let exports = script.replay(&mut state, |state| {
        // Export failures are logged by the export layer and do not stop the replay.
        match runtime.block_on(state.export_now(&manager)) {
            Ok(result) => println!("Saved {}", result.saved_path.display()),
            Err(_) => failures += 1,
        }
        Ok(())
    })?;

    log::info!(
        "Replayed {} steps: {} strokes on canvas, current color {}, width {:.1}",
        script.steps.len(),
        state.canvas.strokes().len(),
        util::color_to_hex(state.mixer.current_color()),
        state.current_width
    );

    if failures > 0 {
        anyhow::bail!("{} of {} exports failed", failures, exports);
    }

    Ok(())
}
