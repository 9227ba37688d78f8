use anyhow::Context;
use clap::Parser;
use output::export::{render, Format};
use output::model::TraceModel;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use workflow::config::{ConfigOverrides, TraceConfig};
use workflow::runner::Runner;

mod output;
mod workflow;

#[derive(Parser)]
#[command(author, version, about = "Trace the tapered waveform into a drawing area")]
struct Args {
    /// Load a trace profile from YAML
    #[arg(long)]
    profile: Option<PathBuf>,
    /// Amplitude A, control range [0, 2]
    #[arg(long, allow_hyphen_values = true)]
    amplitude: Option<f64>,
    /// Frequency k, control range [1, 20]
    #[arg(long, allow_hyphen_values = true)]
    frequency: Option<f64>,
    /// Phase t, control range [0, 40π]
    #[arg(long, allow_hyphen_values = true)]
    phase: Option<f64>,
    /// Number of samples across the domain
    #[arg(long)]
    steps: Option<usize>,
    #[arg(long)]
    width: Option<f64>,
    #[arg(long)]
    height: Option<f64>,
    #[arg(long, value_enum, default_value_t = Format::Json)]
    format: Format,
    /// Write the trace here instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,
    /// Emit the raw samples instead of area coordinates
    #[arg(long, default_value_t = false)]
    raw: bool,
}

impl Args {
    fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            amplitude: self.amplitude,
            frequency: self.frequency,
            phase: self.phase,
            steps: self.steps,
            width: self.width,
            height: self.height,
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let base = if let Some(path) = &args.profile {
        TraceConfig::load(path)?
    } else {
        TraceConfig::default()
    };
    let config = base.apply(&args.overrides());
    log::debug!("trace config: {:?}", config);

    let result = Runner::new(config).execute()?;
    let model = if args.raw {
        TraceModel::raw(result.params, result.samples)
    } else {
        TraceModel::normalized(result.params, result.area, result.points)
    };
    let rendered = render(&model, args.format)?;

    let (min, max) = result.extent.unwrap_or_default();
    let summary = format!(
        "Traced {} points (A={}, k={}, t={}) -> rms {:.4}, peak {:.4}, y in [{:.4}, {:.4}]",
        model.points.len(),
        result.params.amplitude,
        result.params.frequency,
        result.params.phase,
        result.rms,
        result.peak,
        min,
        max
    );

    emit(
        &rendered,
        &summary,
        args.output.as_deref(),
        &mut io::stdout(),
        &mut io::stderr(),
    )
}

/// Writes the trace to `output` (summary on `out`) or, without a path, the
/// trace to `out` and the summary to `err`.
fn emit(
    rendered: &str,
    summary: &str,
    output: Option<&Path>,
    out: &mut impl Write,
    err: &mut impl Write,
) -> anyhow::Result<()> {
    match output {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    fs::create_dir_all(parent)
                        .with_context(|| format!("creating {}", parent.display()))?;
                }
            }
            fs::write(path, rendered)
                .with_context(|| format!("writing trace to {}", path.display()))?;
            writeln!(out, "{summary}").context("writing summary")?;
        }
        None => {
            out.write_all(rendered.as_bytes())
                .context("writing trace to stdout")?;
            writeln!(err, "{summary}").context("writing summary")?;
        }
    }
    Ok(())
}
