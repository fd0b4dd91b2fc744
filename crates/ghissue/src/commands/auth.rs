use crate::host::LocalHost;
use anyhow::{Context, Result};
use plugin_core::{Credential, CredentialStore, IssuePlugin, UserId};

pub fn handle_login(
    plugin: &dyn IssuePlugin,
    host: &LocalHost,
    user: &UserId,
    token: &str,
) -> Result<()> {
    let token = token.trim();
    anyhow::ensure!(!token.is_empty(), "Token must not be empty");

    let provider = &plugin.metadata().auth_provider;
    host.store
        .associate(user, Credential::new(provider.as_str(), token))
        .context("Failed to store credential")?;
    host.persist()?;

    eprintln!("Associated {} with {}", user, plugin.metadata().title);
    Ok(())
}

pub fn handle_logout(plugin: &dyn IssuePlugin, host: &LocalHost, user: &UserId) -> Result<()> {
    let removed = host
        .store
        .disassociate(user, &plugin.metadata().auth_provider)
        .context("Failed to remove credential")?;
    host.persist()?;

    if removed {
        eprintln!("Removed {} credential for {}", plugin.metadata().title, user);
    } else {
        eprintln!("No {} credential stored for {}", plugin.metadata().title, user);
    }
    Ok(())
}
