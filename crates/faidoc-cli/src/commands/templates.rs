//! Templates command - inspect the registered document templates.

use clap::Args;
use console::style;

use faidoc_core::{get_template_by_id, DocumentTemplate, TemplateRegistry};

/// Arguments for the templates command.
#[derive(Args)]
pub struct TemplatesArgs {
    /// Show a single template by id (e.g. fafsa)
    id: Option<String>,

    /// Emit JSON instead of a table
    #[arg(long)]
    json: bool,
}

pub fn run(args: TemplatesArgs) -> anyhow::Result<()> {
    match args.id {
        Some(id) => {
            let template = get_template_by_id(&id)
                .ok_or_else(|| anyhow::anyhow!("Unknown template: {}", id))?;

            if args.json {
                println!("{}", serde_json::to_string_pretty(template)?);
            } else {
                print_template(template);
            }
        }
        None => {
            let registry = TemplateRegistry::builtin();

            if args.json {
                let templates: Vec<&DocumentTemplate> = registry.iter().collect();
                println!("{}", serde_json::to_string_pretty(&templates)?);
            } else {
                for template in registry.iter() {
                    println!(
                        "{}  {} ({} fields)",
                        style(&template.id).cyan(),
                        template.name,
                        template.fields.len()
                    );
                    println!("    {}", template.description);
                    println!("    keywords: {}", template.keywords.join(", "));
                }
            }
        }
    }

    Ok(())
}

fn print_template(template: &DocumentTemplate) {
    println!("{} ({})", style(&template.name).cyan(), template.id);
    println!("{}", template.description);
    println!("keywords: {}", template.keywords.join(", "));
    println!();

    for field in &template.fields {
        let requirement = if field.required { "required" } else { "optional" };
        println!(
            "  {:<28} {:<10} {:<10} {}",
            field.name,
            field.field_type.as_str(),
            requirement,
            field.description
        );
    }
}
