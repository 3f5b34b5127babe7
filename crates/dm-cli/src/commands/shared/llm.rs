use anyhow::Context;
use dm_llm::Generator;

use crate::context::AppContext;

/// Build the configured generator, turning configuration problems into a
/// CLI error. Generation failures are reported as command output instead.
pub fn build_generator(
    ctx: &AppContext,
    default_reply: impl FnOnce() -> String,
) -> anyhow::Result<Generator> {
    ctx.generator(default_reply)
        .context("text generator is not usable; set llm.api_key (or OPENAI_API_KEY), or llm.backend = \"fixture\"")
}
