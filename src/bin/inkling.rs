use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "inkling", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Simplify raw strokes and write them as an ndjson drawing record.
    Export(ExportArgs),
    /// Replay ndjson drawings through the brush and save a PNG.
    Render(RenderArgs),
    /// Run the classifier on an ndjson file and print its guess.
    Classify(ClassifyArgs),
}

#[derive(Parser, Debug)]
struct ExportArgs {
    /// Input strokes JSON: `[[[x, y], ...], ...]`.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Word the drawing is labelled with.
    #[arg(long)]
    word: String,

    /// Output ndjson path.
    #[arg(long)]
    out: PathBuf,

    /// Simplification tolerance in pixels.
    #[arg(long, default_value_t = inkling::config::DEFAULT_SIMPLIFY_EPSILON)]
    epsilon: f64,
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Input ndjson path.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    #[arg(long, default_value_t = inkling::config::DEFAULT_CANVAS_SIZE)]
    width: u32,

    #[arg(long, default_value_t = inkling::config::DEFAULT_CANVAS_SIZE)]
    height: u32,

    /// Brush radius in pixels.
    #[arg(long, default_value_t = inkling::DEFAULT_BRUSH_RADIUS)]
    radius: u32,
}

#[derive(Parser, Debug)]
struct ClassifyArgs {
    /// Input ndjson path.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Game config JSON; only the `classifier` section is used.
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Export(args) => cmd_export(args),
        Command::Render(args) => cmd_render(args),
        Command::Classify(args) => cmd_classify(args),
    }
}

fn read_strokes_json(path: &Path) -> anyhow::Result<Vec<Vec<[f64; 2]>>> {
    let f = File::open(path).with_context(|| format!("open strokes '{}'", path.display()))?;
    let strokes = serde_json::from_reader(BufReader::new(f))
        .with_context(|| format!("parse strokes JSON '{}'", path.display()))?;
    Ok(strokes)
}

fn cmd_export(args: ExportArgs) -> anyhow::Result<()> {
    if !args.epsilon.is_finite() || args.epsilon < 0.0 {
        anyhow::bail!("--epsilon must be finite and >= 0");
    }
    let raw = read_strokes_json(&args.in_path)?;

    let mut painting = inkling::Painting::new();
    for points in raw {
        let stroke =
            inkling::Stroke::from_points(points.into_iter().map(|[x, y]| inkling::Point::new(x, y)));
        painting.add_stroke(stroke);
    }
    painting.simplify(args.epsilon);

    let wrote = inkling::export_painting(&args.out, &args.word, &painting)?;
    if wrote {
        eprintln!(
            "wrote {} ({} strokes, {} of {} points kept)",
            args.out.display(),
            painting.len(),
            painting.kept_point_count(),
            painting.point_count()
        );
    } else {
        eprintln!("wrote {} (empty drawing, no record)", args.out.display());
    }
    Ok(())
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let records = inkling::read_ndjson(&args.in_path)?;

    let mut canvas = inkling::RasterCanvas::new(args.width, args.height, inkling::NullSurface)?;
    canvas.initialize_brush(args.radius)?;
    for record in &records {
        let painting = record.to_painting()?;
        for stroke in painting.strokes() {
            canvas.start_drawing();
            for p in stroke.points() {
                canvas.draw(inkling::PixelCoord::from_point_trunc(*p))?;
            }
            canvas.stop_drawing();
        }
    }

    canvas.save_png(&args.out)?;
    eprintln!(
        "wrote {} ({} records)",
        args.out.display(),
        records.len()
    );
    Ok(())
}

fn cmd_classify(args: ClassifyArgs) -> anyhow::Result<()> {
    let config = match &args.config {
        Some(path) => inkling::GameConfig::from_path(path)?,
        None => inkling::GameConfig::default(),
    };
    let output = config.classifier.run(&args.in_path)?;
    if !output.stderr.trim().is_empty() {
        tracing::debug!(stderr = %output.stderr.trim(), "classifier stderr");
    }
    let label = output.into_label()?;
    println!("{label}");
    Ok(())
}
