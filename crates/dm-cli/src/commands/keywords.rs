use anyhow::Context;
use dm_core::entities::ResearchDigest;
use dm_core::responses::KeywordsResponse;
use dm_report::load_document;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::KeywordsArgs;
use crate::context::AppContext;
use crate::output::output;

pub const DEFAULT_DIGEST_FILE: &str = "research_digest.json";

/// Handle `dialoga keywords`.
pub fn handle(args: &KeywordsArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let path = ctx.data_file(args.input.as_deref(), DEFAULT_DIGEST_FILE);
    let digest: ResearchDigest =
        load_document(&path).context("failed to read research digest")?;

    output(
        &KeywordsResponse {
            keywords: digest.trend_keywords(),
            last_updated: digest.last_updated,
        },
        flags.format,
    )
}
