//! `recast preview` — run a fixed sample through a model and show the result.
//!
//! Failures are printed, not returned: the command always exits successfully.

use anyhow::Result;
use colored::Colorize;
use tracing::info;

use recast_core::config::Config;
use recast_providers::registry;

pub const EXAMPLE_SOURCE: &str = "
// Calculate the sum of all even numbers in an array
function sumEvens(arr) {
  let total = 0;
  for (let i = 0; i < arr.length; i++) {
    if (arr[i] % 2 === 0) {
      total += arr[i];
    }
  }
  return total;
}
";

pub const EXAMPLE_INSTRUCTION: &str = "Refactor this to use array methods (filter + reduce)";

/// Run the preview command.
pub async fn run(config: &Config, model: &str) -> Result<()> {
    if !registry::is_supported_model(model) {
        eprintln!(
            "{} Unsupported model provided of '{}'",
            "✗".red(),
            model
        );
        eprintln!("  Run {} to see supported models.", "recast models".bold());
        return Ok(());
    }

    let llm = crate::build_llm_config(config, model, None);
    info!(model = %model, "running preview");

    crate::helpers::print_section("Original source", EXAMPLE_SOURCE);

    match recast_providers::transform(EXAMPLE_SOURCE, EXAMPLE_INSTRUCTION, &llm).await {
        Ok(code) => crate::helpers::print_section("Transformed source", &code),
        Err(e) => crate::helpers::print_error("Error during transformation", &e),
    }

    Ok(())
}
