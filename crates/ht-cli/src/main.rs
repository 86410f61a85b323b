//! HypTest CLI

use anyhow::{Result, bail};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::PathBuf;

use ht_prob::{Family, Tail, curve, tail};

#[derive(Parser)]
#[command(name = "hyptest")]
#[command(about = "HypTest - interactive hypothesis-test distribution explorer")]
#[command(version)]
struct Cli {
    /// Log verbosity level (trace, debug, info, warn, error)
    #[arg(long, global = true, default_value = "warn")]
    log_level: tracing::Level,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate a probability density
    #[command(allow_negative_numbers = true)]
    Pdf {
        /// Distribution family: chi, t, or normal
        #[arg(long)]
        family: String,

        /// Degrees of freedom (ignored for normal)
        #[arg(long, default_value = "1")]
        df: f64,

        /// Evaluation point
        #[arg(long)]
        x: f64,

        /// Output file for results (pretty JSON). Defaults to stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Evaluate a cumulative probability
    #[command(allow_negative_numbers = true)]
    Cdf {
        /// Distribution family: chi, t, or normal
        #[arg(long)]
        family: String,

        /// Degrees of freedom (ignored for normal)
        #[arg(long, default_value = "1")]
        df: f64,

        /// Evaluation point
        #[arg(long)]
        x: f64,

        /// Output file for results (pretty JSON). Defaults to stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Invert the cumulative distribution (percent point / critical value)
    #[command(allow_negative_numbers = true)]
    Ppf {
        /// Distribution family: chi, t, or normal
        #[arg(long)]
        family: String,

        /// Degrees of freedom (ignored for normal)
        #[arg(long, default_value = "1")]
        df: f64,

        /// Target cumulative probability in [0, 1]
        #[arg(long)]
        p: f64,

        /// Output file for results (pretty JSON). Defaults to stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// P-value of an observed test statistic
    #[command(allow_negative_numbers = true)]
    Pvalue {
        /// Distribution family: chi, t, or normal
        #[arg(long)]
        family: String,

        /// Degrees of freedom (ignored for normal)
        #[arg(long, default_value = "1")]
        df: f64,

        /// Observed statistic
        #[arg(long)]
        stat: f64,

        /// Tail convention: left, right, or two-sided
        #[arg(long, default_value = "right")]
        tail: String,

        /// Output file for results (pretty JSON). Defaults to stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Critical value at a significance level
    #[command(allow_negative_numbers = true)]
    Critical {
        /// Distribution family: chi, t, or normal
        #[arg(long)]
        family: String,

        /// Degrees of freedom (ignored for normal)
        #[arg(long, default_value = "1")]
        df: f64,

        /// Significance level in (0, 1)
        #[arg(long, default_value = "0.05")]
        alpha: f64,

        /// Tail convention: left, right, or two-sided
        #[arg(long, default_value = "right")]
        tail: String,

        /// Output file for results (pretty JSON). Defaults to stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Sample a density curve for plotting
    #[command(allow_negative_numbers = true)]
    Curve {
        /// Distribution family: chi, t, or normal
        #[arg(long)]
        family: String,

        /// Degrees of freedom (ignored for normal)
        #[arg(long, default_value = "1")]
        df: f64,

        /// Window start (defaults to the family's support window)
        #[arg(long)]
        lo: Option<f64>,

        /// Window end (defaults to the family's support window)
        #[arg(long)]
        hi: Option<f64>,

        /// Number of samples
        #[arg(long, default_value = "200")]
        points: usize,

        /// Output file for results (pretty JSON). Defaults to stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Debug, Serialize)]
struct PdfArtifact {
    family: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    df: Option<f64>,
    x: f64,
    density: f64,
}

#[derive(Debug, Serialize)]
struct CdfArtifact {
    family: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    df: Option<f64>,
    x: f64,
    probability: f64,
}

#[derive(Debug, Serialize)]
struct PpfArtifact {
    family: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    df: Option<f64>,
    p: f64,
    quantile: f64,
}

#[derive(Debug, Serialize)]
struct PvalueArtifact {
    family: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    df: Option<f64>,
    stat: f64,
    tail: String,
    p_value: f64,
}

#[derive(Debug, Serialize)]
struct CriticalArtifact {
    family: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    df: Option<f64>,
    alpha: f64,
    tail: String,
    critical_value: f64,
}

#[derive(Debug, Serialize)]
struct CurveArtifact {
    family: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    df: Option<f64>,
    lo: f64,
    hi: f64,
    curve: curve::Curve,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt().with_max_level(cli.log_level).with_target(false).init();

    match cli.command {
        Commands::Pdf { family, df, x, output } => cmd_pdf(&family, df, x, output.as_ref()),
        Commands::Cdf { family, df, x, output } => cmd_cdf(&family, df, x, output.as_ref()),
        Commands::Ppf { family, df, p, output } => cmd_ppf(&family, df, p, output.as_ref()),
        Commands::Pvalue { family, df, stat, tail, output } => {
            cmd_pvalue(&family, df, stat, &tail, output.as_ref())
        }
        Commands::Critical { family, df, alpha, tail, output } => {
            cmd_critical(&family, df, alpha, &tail, output.as_ref())
        }
        Commands::Curve { family, df, lo, hi, points, output } => {
            cmd_curve(&family, df, lo, hi, points, output.as_ref())
        }
    }
}

fn cmd_pdf(tag: &str, df: f64, x: f64, output: Option<&PathBuf>) -> Result<()> {
    let family = Family::from_tag(tag, df)?;
    let density = family.pdf(x);
    tracing::info!(family = family.tag(), x, density, "pdf evaluated");
    let artifact =
        PdfArtifact { family: family.tag().to_string(), df: family.df(), x, density };
    write_json(output, serde_json::to_value(artifact)?)
}

fn cmd_cdf(tag: &str, df: f64, x: f64, output: Option<&PathBuf>) -> Result<()> {
    let family = Family::from_tag(tag, df)?;
    let probability = family.cdf(x);
    tracing::info!(family = family.tag(), x, probability, "cdf evaluated");
    let artifact =
        CdfArtifact { family: family.tag().to_string(), df: family.df(), x, probability };
    write_json(output, serde_json::to_value(artifact)?)
}

fn cmd_ppf(tag: &str, df: f64, p: f64, output: Option<&PathBuf>) -> Result<()> {
    let family = Family::from_tag(tag, df)?;
    if !(0.0..=1.0).contains(&p) {
        bail!("p must be in [0, 1], got {}", p);
    }
    let quantile = family.ppf(p);
    tracing::info!(family = family.tag(), p, quantile, "quantile solved");
    let artifact =
        PpfArtifact { family: family.tag().to_string(), df: family.df(), p, quantile };
    write_json(output, serde_json::to_value(artifact)?)
}

fn cmd_pvalue(
    tag: &str,
    df: f64,
    stat: f64,
    tail_tag: &str,
    output: Option<&PathBuf>,
) -> Result<()> {
    let family = Family::from_tag(tag, df)?;
    let tail_kind = Tail::from_tag(tail_tag)?;
    let p_value = tail::p_value(stat, family, tail_kind);
    tracing::info!(family = family.tag(), stat, tail = tail_kind.tag(), p_value, "p-value computed");
    let artifact = PvalueArtifact {
        family: family.tag().to_string(),
        df: family.df(),
        stat,
        tail: tail_kind.tag().to_string(),
        p_value,
    };
    write_json(output, serde_json::to_value(artifact)?)
}

fn cmd_critical(
    tag: &str,
    df: f64,
    alpha: f64,
    tail_tag: &str,
    output: Option<&PathBuf>,
) -> Result<()> {
    let family = Family::from_tag(tag, df)?;
    let tail_kind = Tail::from_tag(tail_tag)?;
    if !(alpha > 0.0 && alpha < 1.0) {
        bail!("alpha must be in (0, 1), got {}", alpha);
    }
    let critical_value = tail::critical_value(alpha, family, tail_kind);
    tracing::info!(
        family = family.tag(),
        alpha,
        tail = tail_kind.tag(),
        critical_value,
        "critical value solved"
    );
    let artifact = CriticalArtifact {
        family: family.tag().to_string(),
        df: family.df(),
        alpha,
        tail: tail_kind.tag().to_string(),
        critical_value,
    };
    write_json(output, serde_json::to_value(artifact)?)
}

fn cmd_curve(
    tag: &str,
    df: f64,
    lo: Option<f64>,
    hi: Option<f64>,
    points: usize,
    output: Option<&PathBuf>,
) -> Result<()> {
    let family = Family::from_tag(tag, df)?;
    let (window_lo, window_hi) = curve::support_window(family);
    let lo = lo.unwrap_or(window_lo);
    let hi = hi.unwrap_or(window_hi);
    if !(hi > lo) {
        bail!("curve window must satisfy lo < hi, got [{}, {}]", lo, hi);
    }
    let sampled = curve::sample(family, lo, hi, points);
    tracing::info!(family = family.tag(), points = sampled.xs.len(), "curve sampled");
    let artifact = CurveArtifact {
        family: family.tag().to_string(),
        df: family.df(),
        lo,
        hi,
        curve: sampled,
    };
    write_json(output, serde_json::to_value(artifact)?)
}

fn write_json(output: Option<&PathBuf>, value: serde_json::Value) -> Result<()> {
    if let Some(path) = output {
        std::fs::write(path, serde_json::to_string_pretty(&value)?)?;
    } else {
        println!("{}", serde_json::to_string_pretty(&value)?);
    }
    Ok(())
}
