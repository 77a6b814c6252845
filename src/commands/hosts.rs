//! Hosts command handler
//!
//! Lists the host inventory with the address each host resolves to.

use anyhow::Result;

use droid::Host;

use super::{system_host, Workspace};

pub fn cmd_hosts(ws: &Workspace, json: bool) -> Result<()> {
    let options = ws.transport_options();
    let hosts: Vec<_> = ws
        .config
        .hosts
        .iter()
        .map(|h| (h, system_host(h, &options)))
        .collect();

    if json {
        #[derive(serde::Serialize)]
        struct JsonHost<'a> {
            name: &'a str,
            destination: String,
            port: Option<u16>,
        }

        let items: Vec<JsonHost> = hosts
            .iter()
            .map(|(config, host)| JsonHost {
                name: host.name(),
                destination: host.destination(),
                port: config.port,
            })
            .collect();
        println!("{}", serde_json::to_string(&items)?);
        return Ok(());
    }

    if hosts.is_empty() {
        println!("No hosts configured.");
        return Ok(());
    }

    let width = hosts.iter().map(|(_, h)| h.name().len()).max().unwrap_or(0);
    for (config, host) in &hosts {
        match config.port {
            Some(port) => println!("{:width$}  {} (port {})", host.name(), host.destination(), port),
            None => println!("{:width$}  {}", host.name(), host.destination()),
        }
    }
    Ok(())
}
