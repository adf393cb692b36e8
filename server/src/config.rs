use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(
    name = "graphql-demo-server",
    about = "GraphQL demo endpoint backed by an in-memory user store"
)]
pub struct ServerConfig {
    /// Interface to bind.
    #[arg(long, env = "GRAPHQL_DEMO_HOST", default_value = "127.0.0.1")]
    pub host: String,

    #[arg(long, env = "GRAPHQL_DEMO_PORT", default_value_t = 3000)]
    pub port: u16,
}

impl ServerConfig {
    pub fn bind_addr(&self) -> (&str, u16) {
        (self.host.as_str(), self.port)
    }
}
