use anyhow::Context as _;
use clap::Parser;
use std::fs;
use std::io::BufWriter;
use std::path::PathBuf;

use sketchify::config::Config;
use sketchify::draw::Canvas;
use sketchify::input::{Controller, InputEvent};
use sketchify::replay;

#[derive(Parser, Debug)]
#[command(name = "sketchify")]
#[command(version, about = "Freehand and shape drawing engine with PNG export")]
struct Cli {
    /// Replay a JSON event trace onto the canvas
    #[arg(long, short = 't', value_name = "FILE")]
    trace: Option<PathBuf>,

    /// Canvas width in pixels (overrides config)
    #[arg(long, value_name = "PIXELS")]
    width: Option<i32>,

    /// Canvas height in pixels (overrides config)
    #[arg(long, value_name = "PIXELS")]
    height: Option<i32>,

    /// Write the final canvas to this file after the replay
    #[arg(long, short = 'o', value_name = "FILE")]
    output: Option<PathBuf>,

    /// Directory for save-triggered exports (overrides config)
    #[arg(long, value_name = "DIR")]
    export_dir: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let Some(trace_path) = cli.trace else {
        // No trace: show usage
        println!("sketchify: freehand and shape drawing engine");
        println!();
        println!("Usage:");
        println!("  sketchify --trace events.json             Replay a trace; save events");
        println!("                                            export timestamped PNGs");
        println!("  sketchify --trace events.json -o out.png  Also write the final canvas");
        println!("  sketchify --help                          Show all options");
        println!();
        println!("Trace format: a JSON array of input events, e.g.");
        println!(r#"  [{{"event": "pointer_down", "x": 10, "y": 10}},"#);
        println!(r#"   {{"event": "pointer_move", "x": 90, "y": 60}},"#);
        println!(r#"   {{"event": "pointer_up"}},"#);
        println!(r#"   {{"event": "control", "control": "save"}}]"#);
        return Ok(());
    };

    let mut config = Config::load()?;
    if let Some(width) = cli.width {
        config.canvas.width = width;
    }
    if let Some(height) = cli.height {
        config.canvas.height = height;
    }
    if let Some(dir) = cli.export_dir {
        config.export.directory = dir;
    }

    let trace_str = fs::read_to_string(&trace_path)
        .with_context(|| format!("Failed to read trace from {}", trace_path.display()))?;
    let events: Vec<InputEvent> = serde_json::from_str(&trace_str)
        .with_context(|| format!("Failed to parse trace from {}", trace_path.display()))?;

    let mut controller = Controller::from_config(&config);
    let mut canvas = Canvas::new(
        config.canvas.width,
        config.canvas.height,
        config.drawing.background_color.to_color(),
    )
    .context("Failed to create canvas")?;

    let summary = replay::replay(&mut controller, &mut canvas, &events, &config.export)
        .context("Trace replay failed")?;

    for path in &summary.saved {
        println!("Saved {}", path.display());
    }

    if let Some(output) = cli.output {
        let file = fs::File::create(&output)
            .with_context(|| format!("Failed to create {}", output.display()))?;
        let mut writer = BufWriter::new(file);
        canvas
            .write_png(&mut writer)
            .with_context(|| format!("Failed to encode {}", output.display()))?;
        println!("Wrote {}", output.display());
    }

    log::info!("Done: {} events replayed", summary.events);

    Ok(())
}
