use std::{path::PathBuf, process::ExitCode, sync::Arc};

use anyhow::Context;
use clap::{Parser, Subcommand};
use client_core::DecomposeClient;
use shared::domain::{TaskId, TaskItem};
use ui_controller::{
    BreakdownOutcome, ControllerContext, FileStash, PageView, Stash, SubmitOutcome, UiController,
};

mod config;
mod page;

use config::load_settings;
use page::TerminalPage;

#[derive(Parser, Debug)]
#[command(name = "decomposer", about = "Break an objective into small steps")]
struct Args {
    /// Config file (defaults to ./decomposer.toml when present).
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[arg(long, global = true)]
    server_url: Option<String>,
    /// Session cookie, e.g. `session=...`; without one the user counts as signed out.
    #[arg(long, global = true)]
    session_cookie: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Decompose a task. Without `--task`, a title stashed by `breakdown` fills the input.
    Submit {
        #[arg(long)]
        task: Option<String>,
    },
    /// Mark a task done.
    Done {
        #[arg(long)]
        id: Option<String>,
        #[arg(long)]
        title: Option<String>,
    },
    /// Stash a task title for the next `submit`.
    Breakdown {
        #[arg(long)]
        id: Option<String>,
        #[arg(long)]
        title: Option<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()))
        .with_writer(std::io::stderr)
        .init();
    let args = Args::parse();

    let mut settings = load_settings(args.config.as_deref())?;
    if let Some(server_url) = args.server_url {
        settings.server_url = server_url;
    }
    if let Some(cookie) = args.session_cookie {
        settings.session_cookie = Some(cookie);
    }

    let mut client = DecomposeClient::builder(settings.server_url.clone());
    if let Some(cookie) = settings.session_cookie.as_deref() {
        client = client.session_cookie(cookie);
    }
    if let Some(timeout) = settings.request_timeout {
        client = client.timeout(timeout);
    }
    let client = client
        .build()
        .with_context(|| format!("failed to set up client for '{}'", settings.server_url))?;

    let input = match &args.command {
        Command::Submit { task } => Some(task.clone().unwrap_or_default()),
        _ => None,
    };
    let page = TerminalPage::new(std::io::stdout(), settings.session_cookie.is_some(), input);
    let mut controller = UiController::new(ControllerContext {
        page,
        stash: FileStash::new(&settings.stash_path),
        api: Arc::new(client),
        presentation: settings.presentation,
    });

    let ok = match args.command {
        Command::Submit { task } => {
            submit(&mut controller, task.is_some()).await == SubmitOutcome::Rendered
        }
        Command::Done { id, title } => {
            let mut item = TaskItem::new(id.map(TaskId), title);
            controller.mark_task_done(&mut item);
            true
        }
        Command::Breakdown { id, title } => {
            let id = id.map(TaskId);
            controller.start_breakdown(id.as_ref(), title.as_deref()) == BreakdownOutcome::Navigated
        }
    };

    Ok(if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}

/// A title stashed by `breakdown` only fills the input when `--task` was not given.
async fn submit<P: PageView, S: Stash>(
    controller: &mut UiController<P, S>,
    explicit_task: bool,
) -> SubmitOutcome {
    if !explicit_task {
        controller.on_load();
    }
    controller.submit_task().await
}
