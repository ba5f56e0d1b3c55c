use anyhow::Context;
use clap::{Parser, ValueEnum};
use drip::{export, replay, BrushConfig, Color, Painting, StrokeRenderer, Surface};
use std::path::PathBuf;

/// Largest accepted surface side, in pixels.
const MAX_DIMENSION: i64 = 8192;

fn configure_tracing() -> anyhow::Result<()> {
	let max_level = if cfg!(debug_assertions) {
		tracing::Level::TRACE
	} else {
		tracing::Level::INFO
	};
	tracing::subscriber::set_global_default(
		tracing_subscriber::FmtSubscriber::builder()
			.with_max_level(max_level)
			.with_writer(std::io::stderr)
			.finish(),
	)?;
	Ok(())
}

fn configure_logging() -> anyhow::Result<()> {
	configure_tracing()?;

	// Forward `log` records from dependencies into `tracing`.
	#[cfg(feature = "log")]
	tracing_log::LogTracer::init()?;

	Ok(())
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Preset {
	/// 5-40px brush, averaged widths, splatter on sharp turns
	Default,
	/// 5-50px brush, heavily damped widths, no turn splatter
	Broad,
}

/// Replays a gesture script with a drip-painting brush and writes the result as a PNG.
#[derive(Parser, Debug)]
#[clap(version, about)]
struct Cli {
	/// gesture script to replay; read from stdin when omitted
	script: Option<PathBuf>,

	/// where to write the painting
	#[clap(short, long)]
	output: PathBuf,

	#[clap(
		long,
		default_value_t = 800,
		value_parser = clap::value_parser!(u32).range(1..=MAX_DIMENSION)
	)]
	width: u32,

	#[clap(
		long,
		default_value_t = 600,
		value_parser = clap::value_parser!(u32).range(1..=MAX_DIMENSION)
	)]
	height: u32,

	/// seed for the splatter randomness; random when omitted
	#[clap(long)]
	seed: Option<u64>,

	#[clap(long, value_enum, default_value_t = Preset::Default)]
	preset: Preset,

	/// initial paint color, any CSS color
	#[clap(long)]
	color: Option<Color>,

	/// background fill, any CSS color; transparent when omitted
	#[clap(long)]
	background: Option<Color>,

	#[clap(long)]
	max_width: Option<f32>,

	#[clap(long)]
	min_width: Option<f32>,

	#[clap(long)]
	initial_width: Option<f32>,
}

impl Cli {
	fn brush_config(&self) -> anyhow::Result<BrushConfig> {
		let mut config = match self.preset {
			Preset::Default => BrushConfig::default(),
			Preset::Broad => BrushConfig::broad(),
		};
		if let Some(max_width) = self.max_width {
			config.max_width = max_width;
		}
		if let Some(min_width) = self.min_width {
			config.min_width = min_width;
		}
		if let Some(initial_width) = self.initial_width {
			config.initial_width = initial_width;
		}
		config.validate()?;
		Ok(config)
	}

	fn read_script(&self) -> anyhow::Result<String> {
		match &self.script {
			Some(path) => std::fs::read_to_string(path)
				.with_context(|| format!("reading script {}", path.display())),
			None => std::io::read_to_string(std::io::stdin()).context("reading script from stdin"),
		}
	}
}

fn run(cli: Cli) -> anyhow::Result<()> {
	let config = cli.brush_config()?;
	let commands = replay::parse_script(&cli.read_script()?)?;

	let surface = match cli.background {
		Some(background) => Surface::filled(cli.width, cli.height, background),
		None => Surface::new(cli.width, cli.height),
	};
	let renderer = match cli.seed {
		Some(seed) => StrokeRenderer::with_seed(config, seed)?,
		None => StrokeRenderer::new(config)?,
	};
	let mut painting = Painting::with_renderer(surface, renderer);
	if let Some(color) = cli.color {
		painting.set_color(color);
	}

	let summary = replay::replay(&mut painting, &commands);
	tracing::info!(?summary, commands = commands.len(), "replayed");

	let file = std::fs::File::create(&cli.output)
		.with_context(|| format!("creating {}", cli.output.display()))?;
	export::write_png(painting.surface(), std::io::BufWriter::new(file))?;
	tracing::info!(output = %cli.output.display(), "wrote painting");
	Ok(())
}

fn main() -> anyhow::Result<()> {
	if let Err(error) = configure_logging() {
		// We can technically continue without logging.
		tracing::error!(error = error.to_string());
	}

	run(Cli::parse())
}
