use chart_bootstrap::fuel::{FuelReport, FuelStore};
use chart_bootstrap::render::NullRenderer;
use chart_bootstrap::telemetry::init_default_tracing;
use chart_bootstrap::{BootstrapConfig, ChartBootstrap};
use std::fs;
use std::path::PathBuf;

const USAGE: &str = concat!(
    "usage: chart_config_tool <cars|summary|config> --data-dir <path> ",
    "[--car <id>] [--bootstrap <path>] [--output <path>]"
);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CommandKind {
    Cars,
    Summary,
    Config,
}

#[derive(Debug)]
struct CliArgs {
    command: CommandKind,
    data_dir: PathBuf,
    car: Option<String>,
    bootstrap: Option<PathBuf>,
    output: Option<PathBuf>,
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
    let store = FuelStore::new(&args.data_dir);
    match args.command {
        CommandKind::Cars => {
            for id in store.car_ids().map_err(|err| err.to_string())? {
                println!("{id}");
            }
            Ok(())
        }
        CommandKind::Summary => {
            let report = load_report(&store, &args)?;
            let body = serde_json::to_string_pretty(&report.summary)
                .map_err(|err| format!("failed to serialize summary: {err}"))?;
            emit(args.output.as_ref(), &body)
        }
        CommandKind::Config => {
            let report = load_report(&store, &args)?;
            let bootstrap = match &args.bootstrap {
                Some(path) => {
                    let raw = fs::read_to_string(path)
                        .map_err(|err| format!("failed to read `{}`: {err}", path.display()))?;
                    BootstrapConfig::from_json_str(&raw).map_err(|err| err.to_string())?
                }
                None => BootstrapConfig::default(),
            };
            let bootstrap = ChartBootstrap::new(bootstrap).map_err(|err| err.to_string())?;
            let doc = report
                .chart_inputs()
                .and_then(|inputs| inputs.into_document_for(bootstrap.config()))
                .map_err(|err| err.to_string())?;
            let mut renderer = NullRenderer::default();
            let config = bootstrap
                .run(&doc, &mut renderer)
                .map_err(|err| err.to_string())?;
            let body = config
                .to_json_contract_v1_pretty()
                .map_err(|err| err.to_string())?;
            emit(args.output.as_ref(), &body)
        }
    }
}

fn load_report(store: &FuelStore, args: &CliArgs) -> Result<FuelReport, String> {
    let car = args
        .car
        .as_deref()
        .ok_or_else(|| format!("missing --car\n{USAGE}"))?;
    store.load_report(car).map_err(|err| err.to_string())
}

fn emit(output: Option<&PathBuf>, body: &str) -> Result<(), String> {
    match output {
        Some(path) => fs::write(path, format!("{body}\n"))
            .map_err(|err| format!("failed to write `{}`: {err}", path.display())),
        None => {
            println!("{body}");
            Ok(())
        }
    }
}

fn parse_args() -> Result<CliArgs, String> {
    let mut args = std::env::args().skip(1);
    let command = match args.next().as_deref() {
        Some("cars") => CommandKind::Cars,
        Some("summary") => CommandKind::Summary,
        Some("config") => CommandKind::Config,
        _ => return Err(USAGE.to_owned()),
    };

    let mut data_dir = None::<PathBuf>;
    let mut car = None::<String>;
    let mut bootstrap = None::<PathBuf>;
    let mut output = None::<PathBuf>;

    while let Some(flag) = args.next() {
        match flag.as_str() {
            "--data-dir" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --data-dir".to_owned())?;
                data_dir = Some(PathBuf::from(value));
            }
            "--car" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --car".to_owned())?;
                car = Some(value);
            }
            "--bootstrap" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --bootstrap".to_owned())?;
                bootstrap = Some(PathBuf::from(value));
            }
            "--output" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --output".to_owned())?;
                output = Some(PathBuf::from(value));
            }
            "--help" | "-h" => return Err(USAGE.to_owned()),
            other => return Err(format!("unknown flag `{other}`\n{USAGE}")),
        }
    }

    Ok(CliArgs {
        command,
        data_dir: data_dir.ok_or_else(|| format!("missing --data-dir\n{USAGE}"))?,
        car,
        bootstrap,
        output,
    })
}
