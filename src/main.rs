use anyhow::{Context, Result};
use api_diff::{DumpFormat, OrderMode, ParseOptions, ParserRegistry, RenderOptions};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Renders the public API surface of a compiled-library dump as diff-stable text
#[derive(Parser)]
#[command(name = "api-diff", version, about)]
struct Cli {
    /// Dump grammar of the input file
    #[arg(short, long, value_enum)]
    format: FormatArg,

    /// Use short instead of fully qualified names
    #[arg(short, long)]
    short_names: bool,

    /// Rewrite binary-compatibility output into the declarative keyword style
    #[arg(short, long)]
    normalize: bool,

    /// Top-level declaration ordering
    #[arg(short, long, value_enum, default_value = "grouped")]
    order: OrderArg,

    /// Input dump file
    input: PathBuf,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum FormatArg {
    SwiftInterface,
    KotlinBcv,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OrderArg {
    Grouped,
    Global,
    Fqn,
}

impl From<FormatArg> for DumpFormat {
    fn from(format: FormatArg) -> Self {
        match format {
            FormatArg::SwiftInterface => DumpFormat::SwiftInterface,
            FormatArg::KotlinBcv => DumpFormat::KotlinBcv,
        }
    }
}

impl From<OrderArg> for OrderMode {
    fn from(order: OrderArg) -> Self {
        match order {
            OrderArg::Grouped => OrderMode::Grouped,
            OrderArg::Global => OrderMode::Global,
            OrderArg::Fqn => OrderMode::QualifiedPath,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let content = std::fs::read_to_string(&cli.input)
        .with_context(|| format!("Input file not found: {}", cli.input.display()))?;

    let options = ParseOptions {
        strip_packages: cli.short_names,
        normalize: cli.normalize,
    };
    let registry = ParserRegistry::new(options);
    let parser = registry
        .select(cli.format.into())
        .context("no parser registered for the requested format")?;

    let api = parser.parse(&content)?;
    let rendered = api.render(&RenderOptions {
        fully_qualified_names: !cli.short_names,
        order: cli.order.into(),
    });
    println!("{rendered}");

    Ok(())
}
