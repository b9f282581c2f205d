mod input;
mod render;
mod runtime;
mod ui;

use anyhow::Result;
use clap::Parser;
use quizboard_core::config::CoreConfig;
use quizboard_core::session::{FileSession, SessionContext, StaticSession};
use quizboard_core::{Orchestrator, QuizApiClient};
use std::sync::Arc;

use crate::runtime::run_app;
use crate::ui::{App, View};

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
enum ViewArg {
    Board,
    Profiles,
}

impl From<ViewArg> for View {
    fn from(arg: ViewArg) -> Self {
        match arg {
            ViewArg::Board => View::Board,
            ViewArg::Profiles => View::Profiles,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "quizboard-tui", about = "Quiz leaderboard terminal client")]
struct Args {
    /// Base origin of the quiz API
    #[arg(long, default_value = quizboard_core::constants::DEFAULT_API_BASE)]
    base_url: String,

    /// Initial view variant
    #[arg(long, value_enum, default_value = "board")]
    view: ViewArg,

    /// Drop fetch cycles that were superseded by a newer filter change
    /// instead of applying whichever resolves last
    #[arg(long)]
    discard_superseded: bool,

    /// Session user id override (skips the session file lookup)
    #[arg(long)]
    user_id: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    quizboard_core::tracing_setup::init_tracing()?;

    // Restore the terminal before the panic message is printed.
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = ui::restore_terminal();
        original_hook(panic_info);
    }));

    let config = CoreConfig::new(args.base_url.as_str());
    let api = QuizApiClient::new(&config);
    let session: Box<dyn SessionContext> = match args.user_id {
        Some(user_id) => Box::new(StaticSession(Some(user_id))),
        None => Box::new(FileSession::from_data_dir()),
    };
    let orchestrator = Arc::new(Orchestrator::new(api, session));

    let mut app = App::new(args.view.into(), args.discard_superseded);
    let mut terminal = ui::init_terminal()?;
    let result = run_app(&mut terminal, &mut app, orchestrator).await;
    ui::restore_terminal()?;
    result
}
