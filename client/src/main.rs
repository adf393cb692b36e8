use std::{process::ExitCode, sync::Arc};

use anyhow::Context;
use clap::Parser;
use graphql_demo_client::{
    config::{parse_button, ClientConfig},
    render::render,
    GraphqlClient, InteractionController, InteractionState,
};
use tokio::io::{AsyncBufReadExt, BufReader};

const MENU: &str = "[1] Get User  [2] Create User  [3] Get All Users  [q] Quit";

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = ClientConfig::parse();
    let client = GraphqlClient::with_timeout(config.endpoint.clone(), config.timeout())
        .context("building HTTP client")?;
    log::info!("using endpoint {}", client.endpoint());
    let controller = Arc::new(InteractionController::new(Arc::new(client)));

    match config.command.action() {
        Some(action) => {
            controller.perform(action).await;
            let state = controller.state();
            println!("{}", render(&state));
            Ok(match state {
                InteractionState::Failed { .. } => ExitCode::FAILURE,
                _ => ExitCode::SUCCESS,
            })
        }
        None => {
            interactive(controller).await?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

async fn interactive(controller: Arc<InteractionController<GraphqlClient>>) -> anyhow::Result<()> {
    let mut states = controller.subscribe();
    println!("{MENU}");
    println!("{}", render(&states.borrow_and_update()));

    let printer = tokio::spawn(async move {
        while states.changed().await.is_ok() {
            let text = render(&states.borrow_and_update());
            println!("{text}");
        }
    });

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await.context("reading stdin")? {
        if line.trim().eq_ignore_ascii_case("q") {
            break;
        }
        match parse_button(&line) {
            Some(action) => {
                controller.trigger(action);
            }
            None => println!("{MENU}"),
        }
    }

    printer.abort();
    Ok(())
}
