// src/cli.rs
use crate::config::Config;
use crate::elasticsearch::{ClusterHealthProbe, DEFAULT_PORT};
use crate::health::RouteThresholds;
use crate::probe::{Credentials, Probe, ProbeError};
use crate::retry::RetryStrategy;
use crate::routes::{OspfRouteProbe, SshRouteTable, Vendor};
use crate::unity::{ComponentType, StorageHealthProbe, UnityClient};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "nagios-probes")]
#[command(about = "Nagios checks for Unity storage, Elasticsearch clusters and firewall OSPF routes")]
#[command(version)]
pub struct Cli {
    /// Configuration file (YAML, JSON or TOML)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Health of one component category of a Dell EMC Unity array
    Unity(UnityArgs),
    /// Elasticsearch cluster health status
    Elasticsearch(ElasticsearchArgs),
    /// Number of active OSPF routes on a Palo Alto or Fortinet firewall
    Ospf(OspfArgs),
}

#[derive(Args, Debug)]
pub struct UnityArgs {
    /// Management address of the array
    #[arg(short = 'H', long)]
    pub hostaddress: String,

    /// Username for system login
    #[arg(short, long)]
    pub user: String,

    /// Password for system login
    #[arg(short, long, env = "UNITY_PASSWORD", hide_env_values = true)]
    pub password: String,

    /// Component category to report on
    #[arg(short, long, value_enum, ignore_case = true)]
    pub module: ComponentType,

    /// Append the raw health value as perfdata
    #[arg(long)]
    pub perfdata: bool,

    /// Do not validate the array's TLS certificate
    #[arg(long)]
    pub insecure: bool,
}

#[derive(Args, Debug)]
pub struct ElasticsearchArgs {
    /// Elasticsearch hostname or IP address
    #[arg(short = 'H', long)]
    pub hostname: String,

    #[arg(short = 'U', long)]
    pub username: String,

    #[arg(short = 'P', long, env = "ELASTICSEARCH_PASSWORD", hide_env_values = true)]
    pub password: String,

    /// HTTP port
    #[arg(short, long, default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Use HTTPS
    #[arg(short, long)]
    pub ssl: bool,

    /// Append shard counts as perfdata
    #[arg(short = 'd', long)]
    pub perfdata: bool,

    /// Do not validate the cluster's TLS certificate
    #[arg(long)]
    pub insecure: bool,
}

#[derive(Args, Debug)]
pub struct OspfArgs {
    /// Firewall hostname or IP address
    #[arg(short = 'H', long)]
    pub hostname: String,

    #[arg(short = 'U', long)]
    pub username: String,

    #[arg(short = 'P', long, env = "FIREWALL_PASSWORD", hide_env_values = true)]
    pub password: String,

    /// Firewall vendor
    #[arg(short = 't', long = "type", value_enum)]
    pub vendor: Vendor,

    /// Append the route count as perfdata
    #[arg(short, long)]
    pub perfdata: bool,

    /// WARNING when the route count is at or below this value
    #[arg(short, long)]
    pub warning: Option<usize>,

    /// CRITICAL when the route count is at or below this value
    #[arg(short, long)]
    pub critical: Option<usize>,

    /// SSH port
    #[arg(long)]
    pub port: Option<u16>,
}

impl Command {
    /// Build the probe for this subcommand; flags take precedence over `config`.
    pub fn build_probe(self, config: &Config) -> Result<Box<dyn Probe>, ProbeError> {
        match self {
            Command::Unity(args) => {
                let mut http = config.http.clone();
                http.accept_invalid_certs |= args.insecure;

                let client = UnityClient::new(
                    UnityClient::base_url_for_host(&args.hostaddress)?,
                    Credentials::new(args.user, args.password),
                    &http,
                )?;
                let probe = StorageHealthProbe::new(
                    client,
                    args.module,
                    RetryStrategy::new(config.retry.clone()),
                )
                .with_perfdata(args.perfdata);

                Ok(Box::new(probe))
            }
            Command::Elasticsearch(args) => {
                let mut http = config.http.clone();
                http.accept_invalid_certs |= args.insecure;

                let probe = ClusterHealthProbe::new(
                    ClusterHealthProbe::base_url_for_host(&args.hostname, args.port, args.ssl)?,
                    Credentials::new(args.username, args.password),
                    &http,
                )?
                .with_perfdata(args.perfdata);

                Ok(Box::new(probe))
            }
            Command::Ospf(args) => {
                let thresholds = RouteThresholds::new(
                    args.warning.unwrap_or(config.routes.warning),
                    args.critical.unwrap_or(config.routes.critical),
                );
                let table = SshRouteTable::new(
                    args.hostname,
                    args.port.unwrap_or(config.ssh.port),
                    Credentials::new(args.username, args.password),
                    args.vendor,
                    config.ssh.timeout(),
                );

                Ok(Box::new(
                    OspfRouteProbe::new(table, thresholds).with_perfdata(args.perfdata),
                ))
            }
        }
    }
}
