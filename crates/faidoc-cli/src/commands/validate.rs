//! Validate command - check one value against a template field.

use clap::Args;
use console::style;

use faidoc_core::{get_template_by_id, validate_field};

/// Arguments for the validate command.
#[derive(Args)]
pub struct ValidateArgs {
    /// Template id (e.g. fafsa)
    #[arg(short, long)]
    template: String,

    /// Field name within the template (e.g. ssn)
    #[arg(short, long)]
    field: String,

    /// Value to check; an empty value tests the required rule
    #[arg(default_value = "")]
    value: String,
}

pub fn run(args: ValidateArgs) -> anyhow::Result<()> {
    let template = get_template_by_id(&args.template)
        .ok_or_else(|| anyhow::anyhow!("Unknown template: {}", args.template))?;

    let field = template.field(&args.field).ok_or_else(|| {
        anyhow::anyhow!(
            "Unknown field '{}' in template '{}'",
            args.field,
            args.template
        )
    })?;

    let result = validate_field(field, &args.value);

    if result.valid {
        println!(
            "{} '{}' is a valid {}",
            style("✓").green(),
            args.value,
            field.label
        );
        Ok(())
    } else {
        println!(
            "{} {}",
            style("✗").red(),
            result.error.unwrap_or_else(|| "invalid value".to_string())
        );
        std::process::exit(1);
    }
}
