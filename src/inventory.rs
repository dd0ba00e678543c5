// ABOUTME: Joins raw SCM API records into display-ready appliance entries.
// ABOUTME: Handles uplink dedupe, HA decoration, filtering, and sorting.

use crate::scm::models;
use crate::scm::types::{ActiveTunnel, NodeRecord, NodeStatus, Org, Site, UplinkStatus};

/// One selectable appliance, joined from node, site, org, and uplink records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Appliance {
    pub org: String,
    pub site_name: String,
    pub site_id: String,
    pub node_id: String,
    pub model: String,
    pub serial: String,
    /// Reachable uplink addresses, internal IP before external, deduped.
    pub uplinks: Vec<String>,
    /// Whether SCM already has an SSH tunnel up for this node.
    pub tunnel_active: bool,
}

#[derive(Debug, Clone, Default)]
pub struct Inventory {
    appliances: Vec<Appliance>,
}

impl Inventory {
    /// Join the raw API responses into a sorted appliance list.
    ///
    /// Shadow nodes (no serial yet) and Xirrus access points are skipped:
    /// neither accepts an SSH session.
    pub fn build(
        orgs: &[Org],
        sites: &[Site],
        nodes: &[NodeRecord],
        uplinks: &[UplinkStatus],
        nodes_status: &[NodeStatus],
        tunnels: &[ActiveTunnel],
    ) -> Self {
        let mut appliances = Vec::new();

        for site in sites {
            for node in nodes.iter().filter(|n| n.site.as_deref() == Some(&site.id)) {
                let serial = match node.serial.as_deref() {
                    Some(s) if !s.is_empty() => s.to_string(),
                    _ => continue, // shadow node
                };

                let model = models::model_name(&node.model);
                if model.contains("Xirrus") {
                    continue;
                }

                let org = orgs
                    .iter()
                    .find(|o| o.id == node.org)
                    .map(|o| o.name.clone())
                    .unwrap_or_default();

                appliances.push(Appliance {
                    org,
                    site_name: decorate_ha(&site.name, &node.id, nodes_status),
                    site_id: site.id.clone(),
                    node_id: node.id.clone(),
                    model,
                    serial,
                    uplinks: uplink_addresses(&node.id, uplinks),
                    tunnel_active: tunnels.iter().any(|t| t.node_id == node.id),
                });
            }
        }

        appliances.sort_by(|a, b| {
            (a.org.to_lowercase(), a.site_name.to_lowercase())
                .cmp(&(b.org.to_lowercase(), b.site_name.to_lowercase()))
        });

        Self { appliances }
    }

    pub fn appliances(&self) -> &[Appliance] {
        &self.appliances
    }

    pub fn len(&self) -> usize {
        self.appliances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.appliances.is_empty()
    }
}

/// Collect reachable addresses for a node. An uplink only counts when its
/// external IP is present; internal and external may be equal, hence the
/// order-preserving dedupe.
fn uplink_addresses(node_id: &str, uplinks: &[UplinkStatus]) -> Vec<String> {
    let mut addrs: Vec<String> = Vec::new();

    for uplink in uplinks.iter().filter(|u| u.node == node_id) {
        let Some(ext) = uplink.v4ip_ext.as_deref().filter(|s| !s.is_empty()) else {
            continue;
        };
        if let Some(ip) = uplink.v4ip.as_deref().filter(|s| !s.is_empty()) {
            if !addrs.iter().any(|a| a == ip) {
                addrs.push(ip.to_string());
            }
        }
        if !addrs.iter().any(|a| a == ext) {
            addrs.push(ext.to_string());
        }
    }

    addrs
}

/// Append the HA role to the site name for master/backup members.
fn decorate_ha(site_name: &str, node_id: &str, statuses: &[NodeStatus]) -> String {
    for status in statuses.iter().filter(|s| s.id == node_id) {
        match status.ha_state.as_deref() {
            Some("master") => return format!("{site_name} [HA Master]"),
            Some("backup") => return format!("{site_name} [HA Backup]"),
            _ => {}
        }
    }
    site_name.to_string()
}
