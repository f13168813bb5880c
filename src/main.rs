use std::{process, sync::Arc};

use postboard::{
    application::{board::PostBoardService, error::AppError, repos::PostsRepo},
    config,
    infra::{
        error::InfraError,
        http::{self, WebState},
        remote::RemotePostsRepo,
        telemetry,
    },
    presentation::board::ShellChrome,
};
use tracing::{Dispatch, Level, dispatcher, error, info, warn};
use tracing_subscriber::fmt as tracing_fmt;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        report_application_error(&error);
        process::exit(1);
    }
}

fn report_application_error(error: &AppError) {
    if dispatcher::has_been_set() {
        error!(error = %error, "application error");
        return;
    }

    let subscriber = tracing_fmt().with_max_level(Level::ERROR).finish();
    let dispatch = Dispatch::new(subscriber);
    dispatcher::with_default(&dispatch, || {
        error!(error = %error, "application error");
    });
}

async fn run() -> Result<(), AppError> {
    let (cli_args, settings) = config::load_with_cli()
        .map_err(|err| AppError::from(InfraError::configuration(err.to_string())))?;

    let command = cli_args
        .command
        .unwrap_or(config::Command::Serve(Box::<config::ServeArgs>::default()));

    telemetry::init(&settings.logging).map_err(AppError::from)?;

    match command {
        config::Command::Serve(_) => run_serve(settings).await,
    }
}

async fn run_serve(settings: config::Settings) -> Result<(), AppError> {
    let remote = RemotePostsRepo::new(settings.remote.base_url.as_str(), settings.remote.timeout)
        .map_err(|err| AppError::from(InfraError::from(err)))?;
    info!(
        target = "postboard::serve",
        remote = %remote.base(),
        "remote posts service configured"
    );

    let repo: Arc<dyn PostsRepo> = Arc::new(remote);
    let board = Arc::new(PostBoardService::new(repo));
    let state = WebState::new(board, ShellChrome::new(settings.board.heading.clone()));
    let router = http::build_router(state);

    let listener = tokio::net::TcpListener::bind(settings.server.addr)
        .await
        .map_err(|err| AppError::from(InfraError::from(err)))?;
    info!(
        target = "postboard::serve",
        addr = %settings.server.addr,
        "listening"
    );

    axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|err| AppError::unexpected(format!("server error: {err}")))
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!(
            target = "postboard::serve",
            error = %err,
            "failed to listen for shutdown signal"
        );
        std::future::pending::<()>().await;
    }
    info!(target = "postboard::serve", "shutdown requested");
}
