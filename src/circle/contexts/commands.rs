//! Context command handlers

use log::debug;
use std::io::IsTerminal;

use crate::circle::CircleClient;
use crate::cli::{
    Cli, Command, ContextAction, CreateContextArgs, DeleteContextArgs, ListContextsArgs,
    RemoveSecretArgs, ShowContextArgs, StoreSecretArgs,
};
use crate::output::{output_context_details, output_contexts};
use crate::ui::{confirm_action, create_spinner, finish_spinner, prompt_secret};

type CommandResult = std::result::Result<(), Box<dyn std::error::Error>>;

/// Run a `context` subcommand
pub async fn run_context_command(client: &CircleClient, cli: &Cli) -> CommandResult {
    let Command::Context { action } = &cli.command;

    match action {
        ContextAction::List(args) => list(client, cli, args).await,
        ContextAction::Show(args) => show(client, cli, args).await,
        ContextAction::Create(args) => create(client, cli, args).await,
        ContextAction::Delete(args) => delete(client, cli, args).await,
        ContextAction::StoreSecret(args) => store_secret(client, cli, args).await,
        ContextAction::RemoveSecret(args) => remove_secret(client, cli, args).await,
    }
}

async fn list(client: &CircleClient, cli: &Cli, args: &ListContextsArgs) -> CommandResult {
    let owner = &args.owner;
    let spinner = create_spinner(
        &format!("Fetching contexts for '{}/{}'...", owner.vcs, owner.org),
        cli.batch,
    );
    let result = client.list_contexts(&owner.org, &owner.vcs).await;
    finish_spinner(spinner);

    let contexts = result?;
    debug!("Found {} contexts", contexts.len());

    if contexts.is_empty() {
        eprintln!(
            "No contexts found for organization '{}/{}'",
            owner.vcs, owner.org
        );
        return Ok(());
    }

    output_contexts(&contexts, args.output);
    Ok(())
}

async fn show(client: &CircleClient, cli: &Cli, args: &ShowContextArgs) -> CommandResult {
    let owner = &args.owner;
    let spinner = create_spinner(&format!("Fetching context '{}'...", args.name), cli.batch);
    let result = async {
        let context = client
            .get_context_by_name(&owner.org, &owner.vcs, &args.name)
            .await?;
        let variables = client.list_environment_variables(&context.id).await?;
        Ok::<_, crate::error::CircleError>((context, variables))
    }
    .await;
    finish_spinner(spinner);

    let (context, variables) = result?;
    output_context_details(&context, &variables, args.output);
    Ok(())
}

async fn create(client: &CircleClient, cli: &Cli, args: &CreateContextArgs) -> CommandResult {
    let owner = &args.owner;
    let spinner = create_spinner(&format!("Creating context '{}'...", args.name), cli.batch);
    let result = client
        .create_context(&owner.org, &owner.vcs, &args.name)
        .await;
    finish_spinner(spinner);

    let context = result?;
    output_context_details(&context, &[], args.output);
    Ok(())
}

async fn delete(client: &CircleClient, cli: &Cli, args: &DeleteContextArgs) -> CommandResult {
    let owner = &args.owner;
    let context = client
        .get_context_by_name(&owner.org, &owner.vcs, &args.name)
        .await?;

    if !args.yes {
        if cli.batch {
            return Err(format!(
                "Refusing to delete context '{}' in batch mode without --yes",
                context.name
            )
            .into());
        }
        let prompt = format!(
            "Delete context '{}' ({}) and all of its environment variables?",
            context.name, context.id
        );
        if !confirm_action(&prompt) {
            eprintln!("Aborted");
            return Ok(());
        }
    }

    client.delete_context(&context.id).await?;
    eprintln!("Deleted context '{}'", context.name);
    Ok(())
}

async fn store_secret(client: &CircleClient, cli: &Cli, args: &StoreSecretArgs) -> CommandResult {
    let owner = &args.owner;
    let context = client
        .get_context_by_name(&owner.org, &owner.vcs, &args.context)
        .await?;

    let value = match &args.value {
        Some(value) => value.clone(),
        None if cli.batch && std::io::stdin().is_terminal() => {
            return Err("Secret value required (--value or stdin) in batch mode".into());
        }
        None => prompt_secret(&format!("Value for {}", args.name))?,
    };

    let variable = client
        .create_environment_variable(&context.id, &args.name, &value)
        .await?;
    eprintln!(
        "Stored environment variable '{}' in context '{}'",
        variable.variable, context.name
    );
    Ok(())
}

async fn remove_secret(client: &CircleClient, _cli: &Cli, args: &RemoveSecretArgs) -> CommandResult {
    let owner = &args.owner;
    let context = client
        .get_context_by_name(&owner.org, &owner.vcs, &args.context)
        .await?;

    client
        .delete_environment_variable(&context.id, &args.name)
        .await?;
    eprintln!(
        "Removed environment variable '{}' from context '{}'",
        args.name, context.name
    );
    Ok(())
}
