use anyhow::Context;
use dm_core::enums::ReportKind;
use dm_report::{default_input_file, default_output_file};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ReportArgs;
use crate::context::AppContext;
use crate::output::output;

/// Handle `dialoga market-analysis | market-summary | daily-summary`.
pub fn handle(
    kind: ReportKind,
    args: &ReportArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let input = ctx.data_file(args.input.as_deref(), default_input_file(kind));
    let output_path = args.output.clone().unwrap_or_else(|| {
        ctx.research_findings_dir()
            .join(default_output_file(kind, ctx.today))
    });

    let generated = dm_report::generate(kind, &input, &output_path, ctx.today)
        .with_context(|| format!("failed to generate {kind} report"))?;

    output(&generated, flags.format)
}
