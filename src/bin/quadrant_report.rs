use std::fs;
use std::path::PathBuf;

use quadrant_chart::api::{
    IssueDetailsConfig, IssueDetailsWidget, QuadrantChartConfig, QuadrantChartWidget,
};
use quadrant_chart::data::{HttpListTransport, ListDataFetcher, item_id_from_page_url};
use quadrant_chart::telemetry::init_default_tracing;

const USAGE: &str = "usage: quadrant_report <chart|issues|lists|measures> --site <web-url> \
     [--config <path>] [--list <title>] [--page-url <url>] [--token-env <VAR>] [--output <path>]";
const DEFAULT_TOKEN_ENV: &str = "SHAREPOINT_TOKEN";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CommandKind {
    Chart,
    Issues,
    Lists,
    Measures,
}

#[derive(Debug)]
struct CliArgs {
    command: CommandKind,
    site: String,
    config: Option<PathBuf>,
    list: Option<String>,
    page_url: Option<String>,
    token_env: String,
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
    let mut transport = HttpListTransport::new().map_err(|e| e.to_string())?;
    if let Ok(token) = std::env::var(&args.token_env) {
        transport = transport.with_bearer_token(token);
    }
    let fetcher = ListDataFetcher::new(transport, &args.site).map_err(|e| e.to_string())?;
    let page_item_id = args.page_url.as_deref().and_then(item_id_from_page_url);

    let payload = match args.command {
        CommandKind::Chart => {
            let mut config = match &args.config {
                Some(path) => QuadrantChartConfig::from_path(path).map_err(|e| e.to_string())?,
                None => QuadrantChartConfig::default(),
            };
            if let Some(list) = &args.list {
                config.list_name = list.clone();
            }
            if page_item_id.is_some() {
                config.item_id = page_item_id;
            }
            let mut widget = QuadrantChartWidget::new(config, fetcher);
            if let Err(err) = widget.load_measure_catalog() {
                tracing::warn!(%err, "numeric columns unavailable; using internal names");
            }
            widget.refresh();
            widget
                .view()
                .to_json_contract_v1_pretty()
                .map_err(|e| e.to_string())?
        }
        CommandKind::Issues => {
            let mut config = match &args.config {
                Some(path) => IssueDetailsConfig::from_path(path).map_err(|e| e.to_string())?,
                None => IssueDetailsConfig::default(),
            };
            if let Some(list) = &args.list {
                config.list_name = list.clone();
            }
            if page_item_id.is_some() {
                config.item_id = page_item_id;
            }
            let mut widget = IssueDetailsWidget::new(config, fetcher);
            widget.refresh();
            widget
                .view()
                .to_json_contract_v1_pretty()
                .map_err(|e| e.to_string())?
        }
        CommandKind::Lists => {
            let lists = fetcher.fetch_available_lists().map_err(|e| e.to_string())?;
            to_pretty_json(&lists)?
        }
        CommandKind::Measures => {
            let list = args
                .list
                .as_deref()
                .ok_or_else(|| "`measures` requires --list".to_owned())?;
            let catalog = fetcher
                .fetch_measure_catalog(list)
                .map_err(|e| e.to_string())?;
            to_pretty_json(&catalog)?
        }
    };

    match &args.output {
        Some(path) => fs::write(path, payload)
            .map_err(|err| format!("failed to write `{}`: {err}", path.display())),
        None => {
            println!("{payload}");
            Ok(())
        }
    }
}

fn to_pretty_json<T: serde::Serialize>(value: &T) -> Result<String, String> {
    serde_json::to_string_pretty(value).map_err(|err| format!("failed to serialize json: {err}"))
}

fn parse_args() -> Result<CliArgs, String> {
    let mut args = std::env::args().skip(1);
    let command = match args.next().as_deref() {
        Some("chart") => CommandKind::Chart,
        Some("issues") => CommandKind::Issues,
        Some("lists") => CommandKind::Lists,
        Some("measures") => CommandKind::Measures,
        _ => return Err(USAGE.to_owned()),
    };

    let mut site = None::<String>;
    let mut config = None::<PathBuf>;
    let mut list = None::<String>;
    let mut page_url = None::<String>;
    let mut token_env = DEFAULT_TOKEN_ENV.to_owned();
    let mut output = None::<PathBuf>;

    while let Some(flag) = args.next() {
        let mut value = |name: &str| {
            args.next()
                .ok_or_else(|| format!("missing value for {name}"))
        };
        match flag.as_str() {
            "--site" => site = Some(value("--site")?),
            "--config" => config = Some(PathBuf::from(value("--config")?)),
            "--list" => list = Some(value("--list")?),
            "--page-url" => page_url = Some(value("--page-url")?),
            "--token-env" => token_env = value("--token-env")?,
            "--output" => output = Some(PathBuf::from(value("--output")?)),
            "--help" | "-h" => return Err(USAGE.to_owned()),
            _ => return Err(format!("unknown argument `{flag}`")),
        }
    }

    Ok(CliArgs {
        command,
        site: site.ok_or_else(|| format!("missing --site\n{USAGE}"))?,
        config,
        list,
        page_url,
        token_env,
        output,
    })
}
