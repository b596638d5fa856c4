use std::fs;
use std::path::PathBuf;

use scatter_rs::api::{ScatterChart, ScatterChartConfig};
use scatter_rs::core::{AxisSelection, Field};
use scatter_rs::render::SvgRenderer;
use scatter_rs::telemetry::init_default_tracing;

const USAGE: &str = "usage: render_scatter_svg --input <csv> --output <svg> [--x <field>] [--y <field>] [--config <json>] [--basic] [--hover <abbr>]";

#[derive(Debug, Default)]
struct CliArgs {
    input: PathBuf,
    output: PathBuf,
    x: Option<Field>,
    y: Option<Field>,
    config: Option<PathBuf>,
    basic: bool,
    hover: Option<String>,
}

fn parse_args() -> Result<CliArgs, String> {
    let mut args = std::env::args().skip(1);
    let mut input = None::<PathBuf>;
    let mut output = None::<PathBuf>;
    let mut parsed = CliArgs::default();

    while let Some(flag) = args.next() {
        let mut value = |name: &str| {
            args.next()
                .ok_or_else(|| format!("missing value for {name}"))
        };
        match flag.as_str() {
            "--input" => input = Some(PathBuf::from(value("--input")?)),
            "--output" => output = Some(PathBuf::from(value("--output")?)),
            "--x" => parsed.x = Some(value("--x")?.parse().map_err(|e| format!("{e}"))?),
            "--y" => parsed.y = Some(value("--y")?.parse().map_err(|e| format!("{e}"))?),
            "--config" => parsed.config = Some(PathBuf::from(value("--config")?)),
            "--hover" => parsed.hover = Some(value("--hover")?),
            "--basic" => parsed.basic = true,
            "--help" | "-h" => return Err(USAGE.to_owned()),
            _ => return Err(format!("unknown argument `{flag}`\n{USAGE}")),
        }
    }

    parsed.input = input.ok_or_else(|| format!("missing --input\n{USAGE}"))?;
    parsed.output = output.ok_or_else(|| format!("missing --output\n{USAGE}"))?;
    Ok(parsed)
}

fn load_config(args: &CliArgs) -> Result<ScatterChartConfig, String> {
    let mut config = match &args.config {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .map_err(|err| format!("failed to read `{}`: {err}", path.display()))?;
            ScatterChartConfig::from_json_str(&raw).map_err(|err| err.to_string())?
        }
        None if args.basic => ScatterChartConfig::basic(),
        None => ScatterChartConfig::default(),
    };

    if args.x.is_some() || args.y.is_some() {
        let current = config.initial_selection;
        let selection = AxisSelection::new(
            args.x.unwrap_or(current.x()),
            args.y.unwrap_or(current.y()),
        )
        .map_err(|err| err.to_string())?;
        config = config.with_initial_selection(selection);
    }
    Ok(config)
}

fn main() {
    let _ = init_default_tracing();
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let args = parse_args()?;
    let config = load_config(&args)?;

    let Some(mut chart) = ScatterChart::try_from_csv_path(SvgRenderer::new(), config, &args.input)
    else {
        return Err(format!("no chart drawn from `{}`", args.input.display()));
    };

    if let Some(abbr) = &args.hover {
        let index = chart
            .records()
            .position_of_abbr(abbr)
            .ok_or_else(|| format!("no record with abbreviation `{abbr}`"))?;
        chart.hover_record(index).map_err(|err| err.to_string())?;
    }

    chart.render().map_err(|err| err.to_string())?;
    chart
        .renderer()
        .write_to_path(&args.output)
        .map_err(|err| err.to_string())?;

    let stats = chart.renderer().last_stats();
    println!(
        "wrote {} ({} markers, {} texts)",
        args.output.display(),
        stats.circles_drawn,
        stats.texts_drawn
    );
    Ok(())
}
