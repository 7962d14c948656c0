/*!
ggspec Command Line Interface

Builds plot specifications from the command line and prints them as JSON.
*/

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use ggspec::config::Config;
use ggspec::plot::labels::template::{parse_line, FieldRef, FormatKind, TemplatePart};
use ggspec::plot::{
    gggrid, lets_plot, GeomKind, GeomOptions, GridOptions, LayerLabels, ScaleShare,
};
use ggspec::VERSION;

#[derive(Parser)]
#[command(name = "ggspec")]
#[command(about = "Declarative plot specification builder")]
#[command(version = VERSION)]
pub struct Cli {
    /// Configuration file (TOML)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List geometry kinds and the aesthetics they accept
    Geoms {
        /// Show a single geometry
        name: Option<String>,
    },

    /// Build a grid of placeholder plots and print its spec
    Grid {
        /// Number of cells holding a plot
        count: usize,

        /// Number of columns
        #[arg(long)]
        ncol: Option<usize>,

        /// X scale sharing: true, false, all, none, row or col
        #[arg(long)]
        sharex: Option<String>,

        /// Y scale sharing: true, false, all, none, row or col
        #[arg(long)]
        sharey: Option<String>,

        /// Cell horizontal spacing in px
        #[arg(long)]
        hspace: Option<f64>,

        /// Cell vertical spacing in px
        #[arg(long)]
        vspace: Option<f64>,

        /// Preserve the aspect ratio of plots instead of fitting cells
        #[arg(long)]
        no_fit: bool,

        /// Align inner areas of plots
        #[arg(long)]
        align: bool,
    },

    /// Build layer labels and print their options
    Labels {
        /// Variables shown with default formatting
        variables: Vec<String>,

        /// Line template (repeatable)
        #[arg(long = "line")]
        lines: Vec<String>,

        /// FIELD=FORMAT pair (repeatable)
        #[arg(long = "format")]
        formats: Vec<String>,

        /// Annotation text size
        #[arg(long)]
        size: Option<f64>,

        /// Use the layer color for the text
        #[arg(long)]
        inherit_color: bool,
    },

    /// Show the parts of a line template
    Template {
        /// The line template, e.g. "^color: @{engine size}"
        template: String,

        /// Also classify a format string
        #[arg(long)]
        format: Option<String>,

        /// Also classify a format field
        #[arg(long)]
        field: Option<String>,
    },
}

#[derive(Serialize)]
struct GeomEntry {
    geom: &'static str,
    aesthetics: &'static [&'static str],
}

#[derive(Serialize)]
struct TemplateReport {
    parts: Vec<TemplatePart>,
    #[serde(skip_serializing_if = "Option::is_none")]
    field: Option<FieldRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    format: Option<FormatKind>,
}

fn print_json<T: Serialize>(value: &T, pretty: bool) -> anyhow::Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{}", json);
    Ok(())
}

fn scale_share(raw: &str) -> ScaleShare {
    match raw {
        "true" => ScaleShare::Flag(true),
        "false" => ScaleShare::Flag(false),
        mode => ScaleShare::from(mode),
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ggspec=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load(path)
            .with_context(|| format!("Failed to load configuration from {}", path.display()))?,
        None => Config::default(),
    };
    config.apply();
    let pretty = cli.pretty || config.pretty;

    match cli.command {
        Commands::Geoms { name } => {
            let kinds: Vec<GeomKind> = match name {
                Some(name) => vec![name.parse::<GeomKind>().map_err(anyhow::Error::msg)?],
                None => GeomKind::ALL.to_vec(),
            };
            let entries: Vec<GeomEntry> = kinds
                .into_iter()
                .map(|kind| GeomEntry {
                    geom: kind.name(),
                    aesthetics: kind.aesthetics(),
                })
                .collect();
            print_json(&entries, pretty)?;
        }

        Commands::Grid {
            count,
            ncol,
            sharex,
            sharey,
            hspace,
            vspace,
            no_fit,
            align,
        } => {
            let mut options = GridOptions::default().fit(!no_fit).align(align);
            options.ncol = ncol;
            options.hspace = hspace;
            options.vspace = vspace;
            options.sharex = sharex.as_deref().map(scale_share);
            options.sharey = sharey.as_deref().map(scale_share);

            let plots = (0..count).map(|_| Some(lets_plot() + GeomOptions::blank()));
            let grid = gggrid(plots, options)?;
            info!(cells = grid.figures().len(), "Built grid");
            print_json(&grid.to_spec(), pretty)?;
        }

        Commands::Labels {
            variables,
            lines,
            formats,
            size,
            inherit_color,
        } => {
            let mut labels = LayerLabels::new(variables);
            for pair in &formats {
                let Some((field, format)) = pair.split_once('=') else {
                    bail!("Expected FIELD=FORMAT, got '{}'", pair);
                };
                labels = labels.format(field, format);
            }
            for line in &lines {
                labels = labels.line(line);
            }
            if let Some(size) = size {
                labels = labels.size(size);
            }
            if inherit_color {
                labels = labels.inherit_color();
            }
            print_json(labels.options(), pretty)?;
        }

        Commands::Template {
            template,
            format,
            field,
        } => {
            let report = TemplateReport {
                parts: parse_line(&template),
                field: field.as_deref().map(FieldRef::parse),
                format: format.as_deref().map(FormatKind::of),
            };
            print_json(&report, pretty)?;
        }
    }

    Ok(())
}
