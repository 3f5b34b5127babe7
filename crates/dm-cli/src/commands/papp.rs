use std::path::PathBuf;

use anyhow::Context;
use dm_core::entities::{DEFAULT_GOAL, ProfileInput, ResearchDigest};
use dm_core::responses::PlanOutcome;
use dm_llm::PappPlanner;
use dm_llm::papp::simulated_reply;
use dm_report::{load_document, write_json};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::PappArgs;
use crate::commands::shared::llm::build_generator;
use crate::context::AppContext;
use crate::output::output;
use crate::progress::Progress;

#[derive(Debug, Serialize)]
struct PappResponse {
    result: PlanOutcome,
    saved_to: Option<PathBuf>,
}

/// Handle `dialoga papp`.
pub async fn handle(args: &PappArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let profile = resolve_profile(args)?;
    profile.validate().context("invalid VAK profile")?;

    let trend_keywords = match &args.trends {
        Some(path) => load_document::<ResearchDigest>(path)
            .context("failed to read research digest")?
            .trend_keywords(),
        None => Vec::new(),
    };

    let generator = build_generator(ctx, || simulated_reply(&profile))?;
    let planner = PappPlanner::new(generator, ctx.config.llm.papp_model.clone())
        .with_retry(ctx.retry_policy())
        .with_trend_keywords(trend_keywords);

    let progress = Progress::spinner("Gerando Plano de Ação (PAPP)...");
    let result = planner.generate(&profile).await;
    match &result {
        PlanOutcome::Planned(_) => progress.finish_clear(),
        PlanOutcome::Failed(failure) => progress.finish_err(&failure.error),
    }

    let saved_to = match &args.output {
        Some(path) => Some(write_json(path, &result).context("failed to save PAPP")?),
        None => None,
    };

    output(&PappResponse { result, saved_to }, flags.format)
}

fn resolve_profile(args: &PappArgs) -> anyhow::Result<ProfileInput> {
    if let Some(path) = &args.profile {
        return load_document(path).context("failed to read profile");
    }
    Ok(ProfileInput {
        visual: args.visual.unwrap_or_default(),
        auditory: args.auditory.unwrap_or_default(),
        kinesthetic: args.kinesthetic.unwrap_or_default(),
        goal: args
            .goal
            .clone()
            .unwrap_or_else(|| DEFAULT_GOAL.to_string()),
    })
}
