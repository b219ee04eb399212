pub mod cli;
pub mod core;

use crate::core::model::Role;
use crate::core::{Dashboard, DashboardOptions, MarketSnapshot, Session};
use anyhow::{bail, Result};
use tracing::{debug, info};

/// A dashboard request, as expressed on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppCommand {
    Portfolio {
        investor: String,
        months: Option<usize>,
        with_returns: bool,
    },
    Business {
        owner: String,
    },
    Platform,
}

/// Loads the snapshot, resolves the session, builds the role-scoped
/// dashboard, and renders it (tables by default, JSON when asked).
///
/// Bad session input (unknown user, wrong role) fails here; the metrics
/// functions themselves accept whatever rows they are given.
pub fn run_command(command: AppCommand, snapshot_path: Option<&str>, json: bool) -> Result<()> {
    info!("Marketplace analytics starting...");

    let snapshot = match snapshot_path {
        Some(path) => MarketSnapshot::load_from_path(path)?,
        None => MarketSnapshot::load()?,
    };

    let (session, options) = resolve_session(&command, &snapshot)?;
    debug!(user = %session.user_id, role = session.role.as_str(), "Building dashboard");

    let dashboard = Dashboard::build(&session, &snapshot, &options);

    if json {
        println!("{}", serde_json::to_string_pretty(&dashboard)?);
        return Ok(());
    }

    let display_name = snapshot
        .user(&session.user_id)
        .map(|u| u.name.as_str())
        .unwrap_or(session.user_id.as_str());

    match &dashboard {
        Dashboard::Investor(view) => cli::portfolio::render(display_name, view),
        Dashboard::BusinessOwner(view) => cli::business::render(display_name, view),
        Dashboard::Administrator(metrics) => cli::platform::render(metrics),
    }

    Ok(())
}

fn resolve_session(
    command: &AppCommand,
    snapshot: &MarketSnapshot,
) -> Result<(Session, DashboardOptions)> {
    let mut options = DashboardOptions {
        months: snapshot.default_months,
        ..DashboardOptions::default()
    };

    let session = match command {
        AppCommand::Portfolio {
            investor,
            months,
            with_returns,
        } => {
            if let Some(months) = months {
                options.months = *months;
            }
            options.include_returns = *with_returns;
            Session {
                user_id: require_user(snapshot, investor, Role::Investor)?,
                role: Role::Investor,
            }
        }
        AppCommand::Business { owner } => Session {
            user_id: require_user(snapshot, owner, Role::BusinessOwner)?,
            role: Role::BusinessOwner,
        },
        // The CLI is the marketplace operator's console; the platform view
        // needs no particular user row.
        AppCommand::Platform => Session {
            user_id: "operator".to_string(),
            role: Role::Administrator,
        },
    };

    Ok((session, options))
}

fn require_user(snapshot: &MarketSnapshot, id: &str, role: Role) -> Result<String> {
    match snapshot.user(id) {
        None => bail!("No user with id '{id}' in the snapshot"),
        Some(user) if user.role != role => bail!(
            "User '{id}' has role {}, expected {}",
            user.role.as_str(),
            role.as_str()
        ),
        Some(user) => Ok(user.id.clone()),
    }
}
