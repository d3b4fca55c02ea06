#[cfg(feature = "cairo-backend")]
use chart_axis::YAxisRenderer;
#[cfg(feature = "cairo-backend")]
use chart_axis::axis::{AxisConfig, YAxis};
#[cfg(feature = "cairo-backend")]
use chart_axis::core::ViewPortHandler;
#[cfg(feature = "cairo-backend")]
use chart_axis::render::{CairoContext, Color};
#[cfg(feature = "cairo-backend")]
use std::fs::{self, File};
#[cfg(feature = "cairo-backend")]
use std::path::PathBuf;

#[cfg(feature = "cairo-backend")]
const DEFAULT_OUTPUT_PATH: &str = "target/y_axis.png";

#[cfg(feature = "cairo-backend")]
#[derive(Debug)]
struct CliArgs {
    config_path: Option<PathBuf>,
    output_path: PathBuf,
    width: i32,
    height: i32,
    value_range: (f64, f64),
    margins: [f64; 4],
}

#[cfg(feature = "cairo-backend")]
fn main() {
    let _ = chart_axis::telemetry::init_default_tracing();
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

#[cfg(not(feature = "cairo-backend"))]
fn main() {
    eprintln!("this tool requires feature `cairo-backend`");
    std::process::exit(1);
}

#[cfg(feature = "cairo-backend")]
fn run() -> Result<(), String> {
    let args = parse_args()?;

    let config = match &args.config_path {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .map_err(|err| format!("failed to read config `{}`: {err}", path.display()))?;
            AxisConfig::from_json_compat_str(&raw)
                .map_err(|err| format!("invalid config `{}`: {err}", path.display()))?
        }
        None => AxisConfig::default(),
    };

    let [left, top, right, bottom] = args.margins;
    let view_port = ViewPortHandler::new(f64::from(args.width), f64::from(args.height))
        .and_then(|h| h.with_offsets(left, top, right, bottom))
        .map_err(|err| format!("viewport setup failed: {err}"))?;

    let mut axis = YAxis::new(config).map_err(|err| format!("axis setup failed: {err}"))?;
    axis.compute_axis(args.value_range.0, args.value_range.1)
        .map_err(|err| format!("axis range rejected: {err}"))?;
    let transformer = axis
        .transformer(&view_port, 0.0, 1.0)
        .map_err(|err| format!("transformer setup failed: {err}"))?;

    let mut context = CairoContext::offscreen(args.width, args.height)
        .map_err(|err| format!("cairo init failed: {err}"))?;
    context
        .clear(Color::WHITE)
        .map_err(|err| format!("clear failed: {err}"))?;
    YAxisRenderer::from_parts(&view_port, &axis, &transformer).render_all(&mut context);
    if let Some(err) = context.take_error() {
        return Err(format!("render failed: {err}"));
    }

    if let Some(parent) = args.output_path.parent() {
        fs::create_dir_all(parent)
            .map_err(|err| format!("failed to create output dir `{}`: {err}", parent.display()))?;
    }
    let mut file = File::create(&args.output_path).map_err(|err| {
        format!(
            "failed to create png `{}`: {err}",
            args.output_path.display()
        )
    })?;
    let surface = context
        .surface()
        .ok_or_else(|| "offscreen context has no surface".to_owned())?;
    surface
        .write_to_png(&mut file)
        .map_err(|err| format!("failed to write png `{}`: {err}", args.output_path.display()))?;

    let stats = context.stats();
    println!(
        "rendered {} path(s), {} label(s) -> {}",
        stats.paths_drawn,
        stats.texts_drawn,
        args.output_path.display()
    );
    Ok(())
}

#[cfg(feature = "cairo-backend")]
fn parse_args() -> Result<CliArgs, String> {
    let mut config_path = None;
    let mut output_path = PathBuf::from(DEFAULT_OUTPUT_PATH);
    let mut width = 480;
    let mut height = 320;
    let mut value_range = (0.0, 100.0);
    let mut margins = [48.0, 16.0, 48.0, 24.0];

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --config".to_owned())?;
                config_path = Some(PathBuf::from(value));
            }
            "--output" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --output".to_owned())?;
                output_path = PathBuf::from(value);
            }
            "--size" => {
                width = parse_next(&mut args, "--size")?;
                height = parse_next(&mut args, "--size")?;
            }
            "--range" => {
                value_range = (
                    parse_next(&mut args, "--range")?,
                    parse_next(&mut args, "--range")?,
                );
            }
            "--margins" => {
                for margin in &mut margins {
                    *margin = parse_next(&mut args, "--margins")?;
                }
            }
            "--help" | "-h" => {
                println!("{}", usage_message());
                std::process::exit(0);
            }
            _ => {
                return Err(format!("unknown argument `{arg}`\n\n{}", usage_message()));
            }
        }
    }

    Ok(CliArgs {
        config_path,
        output_path,
        width,
        height,
        value_range,
        margins,
    })
}

#[cfg(feature = "cairo-backend")]
fn parse_next<T: std::str::FromStr>(
    args: &mut impl Iterator<Item = String>,
    flag: &str,
) -> Result<T, String> {
    let value = args
        .next()
        .ok_or_else(|| format!("missing value for {flag}"))?;
    value
        .parse()
        .map_err(|_| format!("invalid value `{value}` for {flag}"))
}

#[cfg(feature = "cairo-backend")]
fn usage_message() -> &'static str {
    "usage: render_axis_png [--config <axis.json>] [--output <file.png>] \
     [--size <width> <height>] [--range <min> <max>] \
     [--margins <left> <top> <right> <bottom>]"
}
