use std::time::Duration;

use clap::{Parser, Subcommand};
use url::Url;

use crate::controller::DemoAction;

pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:3000/api/graphql";

#[derive(Debug, Clone, Parser)]
#[command(name = "graphql-demo", about = "Runs the GraphQL user demo against an endpoint")]
pub struct ClientConfig {
    /// GraphQL endpoint that receives the POST requests.
    #[arg(long, env = "GRAPHQL_DEMO_ENDPOINT", default_value = DEFAULT_ENDPOINT)]
    pub endpoint: Url,

    /// Per-request timeout in milliseconds. Requests never time out when unset.
    #[arg(long, env = "GRAPHQL_DEMO_TIMEOUT_MS")]
    pub timeout_ms: Option<u64>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Query one user by id.
    GetUser {
        #[arg(long, default_value = "1")]
        id: String,
    },
    /// Create a user with a random numeric suffix.
    CreateUser,
    /// Fetch users 1 and 2 concurrently.
    GetAll,
    /// Read actions from stdin and print every state change.
    Interactive,
}

impl ClientConfig {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_ms.map(Duration::from_millis)
    }
}

impl Command {
    /// The single action this command runs, `None` for interactive mode.
    pub fn action(&self) -> Option<DemoAction> {
        match self {
            Self::GetUser { id } => Some(DemoAction::GetUser { id: id.clone() }),
            Self::CreateUser => Some(DemoAction::CreateUser),
            Self::GetAll => Some(DemoAction::GetAllUsers),
            Self::Interactive => None,
        }
    }
}

/// Maps an interactive input line to an action.
pub fn parse_button(line: &str) -> Option<DemoAction> {
    match line.trim() {
        "1" => Some(DemoAction::GetUser { id: "1".to_owned() }),
        "2" => Some(DemoAction::CreateUser),
        "3" => Some(DemoAction::GetAllUsers),
        _ => None,
    }
}
