use remora::render::{HeuristicTextMeasurer, compose_scene, render_scene_svg};
use remora::{SvgRenderOptions, parse_workflow, sanitize_svg_id};
use std::io::Read;

#[derive(Debug)]
enum CliError {
    Usage(&'static str),
    Io(std::io::Error),
    Workflow(remora::Error),
    Json(serde_json::Error),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Usage(msg) => write!(f, "{msg}"),
            CliError::Io(err) => write!(f, "I/O error: {err}"),
            CliError::Workflow(err) => write!(f, "{err}"),
            CliError::Json(err) => write!(f, "JSON error: {err}"),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<remora::Error> for CliError {
    fn from(value: remora::Error) -> Self {
        Self::Workflow(value)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

#[derive(Debug, Clone, Copy, Default)]
enum Command {
    #[default]
    Render,
    Parse,
    Scene,
}

#[derive(Debug, Default)]
struct Args {
    command: Command,
    input: Option<String>,
    pretty: bool,
    no_edge_labels: bool,
    diagram_id: Option<String>,
    out: Option<String>,
}

fn usage() -> &'static str {
    "remora-cli\n\
\n\
USAGE:\n\
  remora-cli [render] [--id <diagram-id>] [--no-edge-labels] [--out <path>] [<path>|-]\n\
  remora-cli parse [--pretty] [<path>|-]\n\
  remora-cli scene [--pretty] [<path>|-]\n\
\n\
NOTES:\n\
  - If <path> is omitted or '-', workflow JSON is read from stdin.\n\
  - render prints SVG to stdout by default; use --out to write a file.\n\
  - parse prints the validated workflow model as JSON.\n\
  - scene prints the composed scene (shapes, wrapped labels, routed edges) as JSON.\n\
"
}

fn parse_args(argv: &[String]) -> Result<Args, CliError> {
    let mut args = Args::default();
    let mut it = argv.iter().skip(1).peekable();

    if let Some(first) = it.peek() {
        match first.as_str() {
            "render" => {
                args.command = Command::Render;
                it.next();
            }
            "parse" => {
                args.command = Command::Parse;
                it.next();
            }
            "scene" => {
                args.command = Command::Scene;
                it.next();
            }
            _ => {}
        }
    }

    while let Some(arg) = it.next() {
        match arg.as_str() {
            "--help" | "-h" => return Err(CliError::Usage(usage())),
            "--pretty" => args.pretty = true,
            "--no-edge-labels" => args.no_edge_labels = true,
            "--id" => {
                let Some(value) = it.next() else {
                    return Err(CliError::Usage("--id requires a value"));
                };
                args.diagram_id = Some(value.clone());
            }
            "--out" => {
                let Some(value) = it.next() else {
                    return Err(CliError::Usage("--out requires a value"));
                };
                args.out = Some(value.clone());
            }
            other if other.starts_with("--") => {
                return Err(CliError::Usage("unknown flag; see --help"));
            }
            _ => {
                if args.input.is_some() {
                    return Err(CliError::Usage("multiple input paths given"));
                }
                args.input = Some(arg.clone());
            }
        }
    }

    Ok(args)
}

fn read_input(input: Option<&str>) -> Result<String, CliError> {
    match input {
        None | Some("-") => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
        Some(path) => Ok(std::fs::read_to_string(path)?),
    }
}

fn emit(args: &Args, text: &str) -> Result<(), CliError> {
    match args.out.as_deref() {
        Some(path) => std::fs::write(path, text)?,
        None => print!("{text}"),
    }
    Ok(())
}

fn run(args: &Args) -> Result<(), CliError> {
    let text = read_input(args.input.as_deref())?;
    let data = parse_workflow(&text)?;

    match args.command {
        Command::Parse => {
            let json = if args.pretty {
                serde_json::to_string_pretty(&data)?
            } else {
                serde_json::to_string(&data)?
            };
            emit(args, &format!("{json}\n"))
        }
        Command::Scene => {
            let scene = compose_scene(&data, &HeuristicTextMeasurer::default());
            let json = if args.pretty {
                serde_json::to_string_pretty(&scene)?
            } else {
                serde_json::to_string(&scene)?
            };
            emit(args, &format!("{json}\n"))
        }
        Command::Render => {
            let options = SvgRenderOptions {
                diagram_id: args.diagram_id.as_deref().map(sanitize_svg_id),
                include_edge_labels: !args.no_edge_labels,
            };
            let scene = compose_scene(&data, &HeuristicTextMeasurer::default());
            emit(args, &render_scene_svg(&scene, &options))
        }
    }
}

fn main() {
    let argv: Vec<String> = std::env::args().collect();
    let args = match parse_args(&argv) {
        Ok(args) => args,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    };

    if let Err(err) = run(&args) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}
