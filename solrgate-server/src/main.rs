use clap::{parser::ValueSource, ArgMatches, CommandFactory, FromArgMatches, Parser};
use solrgate::SolrConfig;
use solrgate_http::{serve, ServerConfig};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "solrgate", version, about = "HTTP search API in front of a Solr collection")]
struct Cli {
    #[arg(long, env = "SOLRGATE_BIND_ADDR")]
    bind_addr: Option<String>,
    #[arg(long, env = "SOLRGATE_PORT")]
    port: Option<u16>,

    /// JSON file with backend settings (base_url, collection, timeout_secs, suggest_rows)
    #[arg(long, env = "SOLRGATE_CONFIG")]
    config: Option<PathBuf>,

    /// Solr root URL, e.g. http://localhost:8983/solr
    #[arg(long, env = "SOLRGATE_SOLR_URL")]
    solr_url: Option<String>,
    #[arg(long, env = "SOLRGATE_COLLECTION")]
    collection: Option<String>,
    /// Per-request timeout for backend calls
    #[arg(long, env = "SOLRGATE_TIMEOUT_SECS")]
    timeout_secs: Option<u64>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cmd = Cli::command();
    let matches = cmd.get_matches();
    let cli = Cli::from_arg_matches(&matches)?;

    let config = resolve_server_config(&cli, &matches)
        .map_err(|msg| std::io::Error::new(std::io::ErrorKind::InvalidInput, msg))?;
    serve(config).await
}

fn resolve_server_config(cli: &Cli, matches: &ArgMatches) -> Result<ServerConfig, String> {
    let bind_addr = resolve_bind_addr(cli, matches)?;
    let solr = resolve_solr_config(cli)?;
    Ok(ServerConfig { bind_addr, solr })
}

/// Defaults, then the config file, then flags/env.
fn resolve_solr_config(cli: &Cli) -> Result<SolrConfig, String> {
    let mut solr = match &cli.config {
        Some(path) => SolrConfig::load(path).map_err(|e| e.to_string())?,
        None => SolrConfig::default(),
    };

    if let Some(url) = &cli.solr_url {
        solr.base_url = url.clone();
    }
    if let Some(collection) = &cli.collection {
        solr.collection = collection.clone();
    }
    if let Some(timeout) = cli.timeout_secs {
        solr.timeout_secs = timeout;
    }

    solr.validate().map_err(|e| e.to_string())?;
    Ok(solr)
}

fn resolve_bind_addr(cli: &Cli, matches: &ArgMatches) -> Result<String, String> {
    if is_set_on_command_line(matches, "bind_addr") && is_set_on_command_line(matches, "port") {
        return Err("--bind-addr cannot be used with --port".to_string());
    }

    if is_set_on_command_line(matches, "port") {
        if let Some(port) = cli.port {
            return Ok(format!("0.0.0.0:{port}"));
        }
    }

    if let Some(bind_addr) = &cli.bind_addr {
        return Ok(bind_addr.clone());
    }

    if let Some(port) = cli.port {
        return Ok(format!("0.0.0.0:{port}"));
    }

    Ok(solrgate_http::server::DEFAULT_BIND_ADDR.to_string())
}

fn is_set_on_command_line(matches: &ArgMatches, arg: &str) -> bool {
    matches.value_source(arg) == Some(ValueSource::CommandLine)
}
