// src/routes/parser.rs
use super::vendor::Vendor;
use chrono::Duration;
use regex::{Captures, Regex};
use std::sync::OnceLock;

/// One OSPF route as listed by the firewall.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub destination: String,
    pub gateway: String,
    pub metric: u32,
    pub flags: Vec<String>,
    pub age: Duration,
    pub interface: String,
}

// destination  nexthop  metric  flags  age  interface
const PALO_ALTO_ROUTE: &str = r"^(?P<dest>[0-9./]+)\s+(?P<hop>[0-9.]+)\s+(?P<metric>\d+)\s+(?P<flags>[?ACHS~ROBio12EM ]+)\s(?P<age>\d+)\s+(?P<interface>[\w./]+)\s*$";

// O[*] [IA|N1|N2|E1|E2] destination [distance/metric] via gateway, interface, age
const FORTINET_ROUTE: &str = r"^O(?:\*|\s)(?P<flags>IA|N1|N2|E1|E2)?\s+(?P<dest>[0-9./]+)\s+(?:\[\d+/(?P<metric>\d+)\]\s+)?.*?via\s(?P<hop>[0-9.]+),\s+(?P<interface>.+),\s+(?:(?P<clock_h>\d+):(?P<clock_m>\d{2}):(?P<clock_s>\d{2})|(?:(?P<weeks>\d+)w)?(?:(?P<days>\d+)d)?(?:(?P<hours>\d+)h)?(?:(?P<minutes>\d+)m)?)\s*$";

fn palo_alto_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(PALO_ALTO_ROUTE).expect("valid Palo Alto route pattern"))
}

fn fortinet_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(FORTINET_ROUTE).expect("valid Fortinet route pattern"))
}

/// Extract routes from the raw CLI output, skipping lines that are not
/// route entries (banners, headers, prompts, ECMP continuation lines).
pub fn parse_routes<S: AsRef<str>>(vendor: Vendor, lines: &[S]) -> Vec<Route> {
    lines
        .iter()
        .filter_map(|line| parse_line(vendor, line.as_ref()))
        .collect()
}

pub fn parse_line(vendor: Vendor, line: &str) -> Option<Route> {
    match vendor {
        Vendor::PaloAlto => parse_palo_alto(line),
        Vendor::Fortinet => parse_fortinet(line),
    }
}

fn parse_palo_alto(line: &str) -> Option<Route> {
    let caps = palo_alto_pattern().captures(line)?;

    Some(Route {
        destination: caps["dest"].to_string(),
        gateway: caps["hop"].to_string(),
        metric: caps["metric"].parse().ok()?,
        flags: caps["flags"].split_whitespace().map(str::to_string).collect(),
        age: Duration::try_seconds(caps["age"].parse().ok()?)?,
        interface: caps["interface"].to_string(),
    })
}

fn parse_fortinet(line: &str) -> Option<Route> {
    let caps = fortinet_pattern().captures(line)?;

    let metric = match caps.name("metric") {
        Some(m) => m.as_str().parse().ok()?,
        None => 0,
    };

    Some(Route {
        destination: caps["dest"].to_string(),
        gateway: caps["hop"].to_string(),
        metric,
        flags: caps
            .name("flags")
            .map(|m| vec![m.as_str().to_string()])
            .unwrap_or_default(),
        age: fortinet_age(&caps)?,
        interface: caps["interface"].trim().to_string(),
    })
}

/// Age is either `hh:mm:ss` (under a day) or a `1w2d3h4m` style duration.
/// Ages that overflow are rejected along with the line.
fn fortinet_age(caps: &Captures<'_>) -> Option<Duration> {
    let units: &[(&str, i64)] = if caps.name("clock_h").is_some() {
        &[("clock_h", 3600), ("clock_m", 60), ("clock_s", 1)]
    } else {
        &[("weeks", 7 * 86_400), ("days", 86_400), ("hours", 3600), ("minutes", 60)]
    };

    let mut seconds: i64 = 0;
    for &(name, scale) in units {
        if let Some(m) = caps.name(name) {
            let value: i64 = m.as_str().parse().ok()?;
            seconds = seconds.checked_add(value.checked_mul(scale)?)?;
        }
    }

    Duration::try_seconds(seconds)
}
