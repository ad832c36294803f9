//! Context output formatter

use comfy_table::{presets::NOTHING, Table};
use serde::Serialize;

use super::common::{format_timestamp, print_json, print_yaml};
use crate::circle::{Context, EnvironmentVariable};
use crate::cli::OutputFormat;

/// Serializable context for structured output (JSON/YAML)
#[derive(Serialize)]
struct SerializableContext {
    id: String,
    name: String,
    created_at: String,
}

impl From<&Context> for SerializableContext {
    fn from(ctx: &Context) -> Self {
        Self {
            id: ctx.id.clone(),
            name: ctx.name.clone(),
            created_at: ctx.created_at.to_rfc3339(),
        }
    }
}

/// Serializable variable for structured output (JSON/YAML)
#[derive(Serialize)]
struct SerializableVariable {
    variable: String,
    created_at: String,
}

impl From<&EnvironmentVariable> for SerializableVariable {
    fn from(var: &EnvironmentVariable) -> Self {
        Self {
            variable: var.variable.clone(),
            created_at: var.created_at.to_rfc3339(),
        }
    }
}

/// Context together with its variable names
#[derive(Serialize)]
struct SerializableContextDetails {
    #[serde(flatten)]
    context: SerializableContext,
    environment_variables: Vec<SerializableVariable>,
}

/// Output a list of contexts in the specified format
pub fn output_contexts(contexts: &[Context], format: OutputFormat) {
    match format {
        OutputFormat::Table => println!("{}", contexts_table(contexts)),
        OutputFormat::Json => print_json(&serializable_contexts(contexts)),
        OutputFormat::Yaml => print_yaml(&serializable_contexts(contexts)),
    }
}

/// Output a single context with the names of its environment variables
pub fn output_context_details(
    context: &Context,
    variables: &[EnvironmentVariable],
    format: OutputFormat,
) {
    match format {
        OutputFormat::Table => {
            println!("Context: {} ({})", context.name, context.id);
            println!("{}", variables_table(variables));
        }
        OutputFormat::Json => print_json(&details(context, variables)),
        OutputFormat::Yaml => print_yaml(&details(context, variables)),
    }
}

fn serializable_contexts(contexts: &[Context]) -> Vec<SerializableContext> {
    contexts.iter().map(SerializableContext::from).collect()
}

fn details(context: &Context, variables: &[EnvironmentVariable]) -> SerializableContextDetails {
    SerializableContextDetails {
        context: SerializableContext::from(context),
        environment_variables: variables.iter().map(SerializableVariable::from).collect(),
    }
}

fn contexts_table(contexts: &[Context]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(NOTHING)
        .set_header(vec!["ID", "NAME", "CREATED AT"]);

    for ctx in contexts {
        table.add_row(vec![
            ctx.id.as_str(),
            ctx.name.as_str(),
            &format_timestamp(&ctx.created_at),
        ]);
    }
    table
}

fn variables_table(variables: &[EnvironmentVariable]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(NOTHING)
        .set_header(vec!["ENVIRONMENT VARIABLE", "VALUE", "CREATED AT"]);

    for var in variables {
        table.add_row(vec![
            var.variable.as_str(),
            "••••",
            &format_timestamp(&var.created_at),
        ]);
    }
    table
}
