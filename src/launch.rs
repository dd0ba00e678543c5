// ABOUTME: Builds and runs OpenSSH client invocations.
// ABOUTME: Covers direct-to-uplink sessions and SCM-provided tunnel command lines.

use crate::config::SshOptions;
use std::process::Stdio;
use thiserror::Error;
use tokio::process::Command;

#[derive(Debug, Error)]
pub enum Error {
    #[error("SCM returned an unusable tunnel command: {0:?}")]
    InvalidTunnelCommand(String),

    #[error("failed to run ssh: {0}")]
    Spawn(#[source] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

/// An OpenSSH invocation ready to run with inherited stdio.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SshCommand {
    program: String,
    args: Vec<String>,
}

impl SshCommand {
    /// Direct session to an uplink address.
    pub fn direct(addr: &str, options: &SshOptions) -> Self {
        Self {
            program: "ssh".to_string(),
            args: vec![
                "-tt".to_string(),
                "-o".to_string(),
                format!("ConnectTimeout={}", options.connect_timeout.as_secs()),
                "-o".to_string(),
                format!("ServerAliveInterval={}", options.keepalive.as_secs()),
                format!("{}@{}", options.user, addr),
            ],
        }
    }

    /// Build from the `ssh_help` command line SCM returns for a tunnel.
    ///
    /// SCM hardcodes ServerAliveInterval=60; rewrite it to the configured
    /// keepalive for better session stability. The command carries a quoted
    /// ProxyCommand, so it runs through `sh -c` rather than being re-parsed.
    pub fn from_tunnel_help(ssh_help: &str, options: &SshOptions) -> Result<Self> {
        let trimmed = ssh_help.trim();
        if trimmed != "ssh" && !trimmed.starts_with("ssh ") {
            return Err(Error::InvalidTunnelCommand(ssh_help.to_string()));
        }

        let command = trimmed.replace(
            "ServerAliveInterval=60",
            &format!("ServerAliveInterval={}", options.keepalive.as_secs()),
        );

        Ok(Self {
            program: "sh".to_string(),
            args: vec!["-c".to_string(), command],
        })
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Run the SSH client with inherited stdio and return its exit code.
    /// Termination by signal maps to 1.
    pub async fn run(&self) -> Result<i32> {
        tracing::debug!(program = %self.program, args = ?self.args, "launching SSH client");

        let status = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .await
            .map_err(Error::Spawn)?;

        Ok(status.code().unwrap_or(1))
    }
}
