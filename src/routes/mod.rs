// src/routes/mod.rs
mod parser;
mod probe;
mod ssh;
mod vendor;

pub use parser::{parse_line, parse_routes, Route};
pub use probe::OspfRouteProbe;
pub use ssh::{read_until_terminator, RouteSource, SshRouteTable};
pub use vendor::{CommandMode, Vendor};
