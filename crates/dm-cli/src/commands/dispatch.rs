use dm_core::enums::ReportKind;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(command: Commands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::MarketAnalysis(args) => {
            commands::report::handle(ReportKind::MarketAnalysis, &args, ctx, flags)
        }
        Commands::MarketSummary(args) => {
            commands::report::handle(ReportKind::MarketSummary, &args, ctx, flags)
        }
        Commands::DailySummary(args) => {
            commands::report::handle(ReportKind::DailySummary, &args, ctx, flags)
        }
        Commands::Papp(args) => commands::papp::handle(&args, ctx, flags).await,
        Commands::Sentiment { action } => commands::sentiment::handle(&action, ctx, flags).await,
        Commands::Keywords(args) => commands::keywords::handle(&args, ctx, flags),
        Commands::Schema(args) => commands::schema::handle(&args, flags),
        Commands::Validate(args) => commands::validate::handle(&args, flags),
    }
}
