pub mod config;
pub mod controller;
pub mod render;
pub mod transport;

pub use controller::{DemoAction, InteractionController, InteractionState};
pub use transport::{GraphqlClient, GraphqlResponse, Transport, TransportError};
