//! Implementation of the `stencil list` command.

use stencil_core::application::{ScaffoldService, TemplateInfo};

use crate::{
    cli::{ListArgs, ListFormat, OutputFormat},
    error::CliResult,
    output::OutputManager,
};

pub fn execute(args: ListArgs, output: OutputManager) -> CliResult<()> {
    let templates = ScaffoldService::list_templates();

    let format = match output.format() {
        OutputFormat::Json => ListFormat::Json,
        _ => args.format,
    };

    match format {
        ListFormat::Table => {
            output.header("Available Templates:")?;
            for template in &templates {
                output.print(&table_row(template))?;
            }
        }
        ListFormat::List => {
            for template in &templates {
                output.print(template.name.as_str())?;
            }
        }
        ListFormat::Json => output.json(&templates)?,
    }

    Ok(())
}

fn table_row(template: &TemplateInfo) -> String {
    let directory = if template.default_directory.is_empty() {
        "."
    } else {
        template.default_directory
    };
    format!(
        "  {:<12}{:<20}{:<14}{}",
        template.name.as_str(),
        template.description,
        template.default_class,
        directory
    )
}
