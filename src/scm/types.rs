// ABOUTME: Raw response records from the SCM REST API.
// ABOUTME: Only the fields this tool reads are typed; the vendor owns the schema.

use serde::Deserialize;

/// List endpoints wrap their payload in an `items` array.
#[derive(Debug, Clone, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct ItemsEnvelope<T> {
    #[serde(default)]
    pub items: Vec<T>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Org {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub longname: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Site {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NodeRecord {
    pub id: String,
    pub org: String,
    /// Null for nodes not yet assigned to a site.
    #[serde(default)]
    pub site: Option<String>,
    /// Null or empty for shadow (not yet registered) nodes.
    #[serde(default)]
    pub serial: Option<String>,
    pub model: String,
}

/// Reporting API record for a single uplink.
#[derive(Debug, Clone, Deserialize)]
pub struct UplinkStatus {
    pub node: String,
    #[serde(default)]
    pub v4ip: Option<String>,
    #[serde(default)]
    pub v4ip_ext: Option<String>,
}

/// Reporting API record for a node's runtime state.
#[derive(Debug, Clone, Deserialize)]
pub struct NodeStatus {
    pub id: String,
    #[serde(default)]
    pub ha_state: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ActiveTunnel {
    pub node_id: String,
}

/// Status of an SSH tunnel for one node. `ssh_help` is the complete
/// OpenSSH command line SCM hands out for connecting through the relay.
#[derive(Debug, Clone, Deserialize)]
pub struct TunnelStatus {
    pub ssh_help: String,
}
