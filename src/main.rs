use anyhow::{Context, Result};
use clap::Parser;
use scribblepad::config::Config;
use scribblepad::draw::DrawingSurface;
use scribblepad::export::{self, ExportError};
use scribblepad::input::InputState;
use scribblepad::script::{self, Step};
use scribblepad::util;
use std::cell::RefCell;
use std::fs::{self, File};
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::rc::Rc;

#[derive(Parser, Debug)]
#[command(name = "scribblepad")]
#[command(version, about = "Freehand sketchpad with stamps, undo/redo and PNG export")]
struct Cli {
    /// Gesture script to replay (reads stdin when omitted or "-")
    #[arg(long, short = 's', value_name = "FILE")]
    script: Option<PathBuf>,

    /// Export the finalized sketch to this PNG once the script has run
    #[arg(long, short = 'o', value_name = "FILE")]
    output: Option<PathBuf>,

    /// Config file to use instead of ~/.config/scribblepad/config.toml
    #[arg(long, short = 'c', value_name = "FILE")]
    config: Option<PathBuf>,

    /// Write the on-screen surface (in-progress stroke and hover preview included) to this PNG
    #[arg(long, value_name = "FILE")]
    preview: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load().unwrap_or_else(|err| {
            log::warn!("Failed to load config: {err:#}; using defaults");
            Config::default()
        }),
    };

    let source = read_script(cli.script.as_deref())?;
    let commands = script::parse_script(&source).context("Invalid gesture script")?;
    log::info!("Replaying {} script commands", commands.len());

    let mut state = InputState::new(config.tool_settings());

    // Render loop: the surface is redrawn synchronously after every change.
    let surface = Rc::new(RefCell::new(
        DrawingSurface::new(config.canvas.width, config.canvas.height)
            .with_background(Some(config.canvas.background.to_color())),
    ));
    surface.borrow_mut().redraw(&state);
    let listener_surface = Rc::clone(&surface);
    state.on_change(move |_, session| listener_surface.borrow_mut().redraw(session));

    for command in &commands {
        if let Step::Export(path) = command.apply(&mut state) {
            match export_sketch(&state, &config, path.as_deref()) {
                Ok(saved) => log::info!("Sketch exported to {}", saved.display()),
                Err(err) => log::error!("Export failed: {err}"),
            }
        }
    }

    if let Some(path) = &cli.preview {
        let mut file = File::create(path)
            .with_context(|| format!("Failed to create preview {}", path.display()))?;
        surface
            .borrow()
            .write_png(&mut file)
            .with_context(|| format!("Failed to write preview {}", path.display()))?;
        log::info!("Preview written to {}", path.display());
    }

    if let Some(path) = &cli.output {
        let saved = export_sketch(&state, &config, Some(path))
            .with_context(|| format!("Failed to export sketch to {}", path.display()))?;
        println!("{}", saved.display());
    }

    log::info!(
        "Done: {} marks, {} redoable, tool {:?} ({}, {:.1}px)",
        state.scene().len(),
        state.scene().redo_marks().len(),
        state.tool().tool,
        util::color_to_name(&state.tool().color),
        state.tool().thickness
    );

    Ok(())
}

fn read_script(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) if path != Path::new("-") => fs::read_to_string(path)
            .with_context(|| format!("Failed to read script {}", path.display())),
        _ => {
            let mut source = String::new();
            io::stdin()
                .read_to_string(&mut source)
                .context("Failed to read script from stdin")?;
            Ok(source)
        }
    }
}

fn export_sketch(
    state: &InputState,
    config: &Config,
    path: Option<&Path>,
) -> Result<PathBuf, ExportError> {
    let bytes = state.export_image(&config.export_options())?;
    match path {
        Some(path) => {
            export::save_image_to(&bytes, path)?;
            Ok(path.to_path_buf())
        }
        None => export::save_image(&bytes, &config.export_file_config()),
    }
}
