mod input;
mod logging;
mod workspace;

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Instant;

use clap::{Args, Parser, Subcommand};
use docforge_core::{
    CONTRACT_VERSION, Document, DocumentId, NewTemplate, OwnerId, Template, TemplateId,
};
use docforge_engine::{DocumentEngine, EngineError, ErrorKind, seed_catalog};
use docforge_store::{FileStore, MemoryStore, PostgresStore, Store, StoreError};
use schemars::schema_for;
use serde::Serialize;
use thiserror::Error;
use workspace::{StoreBackend, WorkspaceError, WorkspacePaths, WorkspaceSettings};

#[derive(Debug, Error)]
enum CliError {
    #[error("workspace error: {0}")]
    Workspace(#[from] WorkspaceError),
    #[error("{0}")]
    Engine(#[from] EngineError),
    #[error("store error: {0}")]
    Store(#[from] StoreError),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl CliError {
    /// Error class recorded in the run log.
    fn kind_label(&self) -> &'static str {
        match self {
            CliError::Engine(err) => err.kind().as_str(),
            CliError::InvalidArgument(_) | CliError::InvalidConfig(_) => "invalid_invocation",
            _ => "infrastructure",
        }
    }

    /// Distinct exit codes for the caller-facing error classes.
    fn exit_code(&self) -> u8 {
        match self {
            CliError::Engine(err) => match err.kind() {
                ErrorKind::InvalidTemplate => 2,
                ErrorKind::IncompleteSubmission => 3,
                ErrorKind::NotFound => 4,
                ErrorKind::Infrastructure => 1,
            },
            _ => 1,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "docforge", version, about = "Generate legal documents from templates")]
struct Cli {
    /// Workspace directory holding config, data and logs.
    #[arg(long, global = true, default_value = ".docforge")]
    workspace: PathBuf,
    /// Override the persistence backend from settings.toml.
    #[arg(long, global = true, value_enum)]
    store: Option<StoreBackend>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Manage document templates.
    #[command(subcommand)]
    Templates(TemplateCommand),
    /// Generate and read documents.
    #[command(subcommand)]
    Documents(DocumentCommand),
    /// Print the JSON Schema of the template and document contracts.
    Schema,
}

#[derive(Subcommand, Debug)]
enum TemplateCommand {
    /// Register a new template.
    Register(RegisterArgs),
    /// Show one template.
    Get { id: TemplateId },
    /// List templates, newest first.
    List,
    /// Register the built-in templates if none exist.
    Seed,
    /// Render a template without saving a document.
    Preview {
        id: TemplateId,
        #[command(flatten)]
        values: ValueArgs,
    },
}

#[derive(Subcommand, Debug)]
enum DocumentCommand {
    /// Render a template and save the document.
    Generate {
        template_id: TemplateId,
        #[command(flatten)]
        owner: OwnerArgs,
        /// Document title; defaults to the template name.
        #[arg(long)]
        title: Option<String>,
        #[command(flatten)]
        values: ValueArgs,
    },
    /// Show one of the owner's documents.
    Get {
        id: DocumentId,
        #[command(flatten)]
        owner: OwnerArgs,
    },
    /// List the owner's documents, newest first.
    List {
        #[command(flatten)]
        owner: OwnerArgs,
    },
}

#[derive(Args, Debug)]
struct RegisterArgs {
    /// Display name.
    #[arg(long)]
    name: String,
    #[arg(long)]
    description: Option<String>,
    /// Category tag, e.g. `labor_arbitration`.
    #[arg(long)]
    category: Option<String>,
    /// Template body (inline).
    #[arg(long, conflicts_with = "body_file", required_unless_present = "body_file")]
    body: Option<String>,
    /// Read the template body from a file.
    #[arg(long, value_name = "PATH")]
    body_file: Option<PathBuf>,
    /// Declared field names; checked against the body's placeholders.
    #[arg(long, value_delimiter = ',', value_name = "NAME,...")]
    fields: Option<Vec<String>>,
}

#[derive(Args, Debug)]
struct ValueArgs {
    /// Field value as NAME=VALUE (repeatable).
    #[arg(long = "field", value_name = "NAME=VALUE", value_parser = input::parse_field)]
    fields: Vec<(String, String)>,
    /// JSON object file of field values.
    #[arg(long, value_name = "PATH")]
    values: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct OwnerArgs {
    /// Authenticated owner identity.
    #[arg(long, env = "DOCFORGE_OWNER")]
    owner: String,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(event = "command_failed", kind = err.kind_label(), error = %err);
            eprintln!("error: {err}");
            ExitCode::from(err.exit_code())
        }
    }
}

async fn run(cli: Cli) -> Result<(), CliError> {
    if let Command::Schema = cli.command {
        return print_schema();
    }

    let paths = WorkspacePaths::new(cli.workspace);
    paths.ensure_dirs()?;
    logging::init_logging(&paths.log_path())?;

    let loaded = workspace::load_or_create_settings(&paths)?;
    let mut settings = loaded.settings;
    if let Some(store) = cli.store {
        settings.store = store;
    }

    let timer = Instant::now();
    tracing::info!(event = "command_started", store = ?settings.store);

    let store = open_store(&settings, &paths).await?;
    let engine = DocumentEngine::new(store);
    if loaded.created && settings.seed_catalog {
        seed_catalog(engine.registry()).await?;
    }

    match cli.command {
        Command::Templates(command) => run_templates(&engine, command).await?,
        Command::Documents(command) => run_documents(&engine, command).await?,
        Command::Schema => print_schema()?,
    }

    let duration_ms = timer.elapsed().as_millis();
    tracing::info!(event = "command_finished", status = "success", duration_ms = duration_ms);
    Ok(())
}

async fn open_store(
    settings: &WorkspaceSettings,
    paths: &WorkspacePaths,
) -> Result<Arc<dyn Store>, CliError> {
    match settings.store {
        StoreBackend::Memory => Ok(Arc::new(MemoryStore::new())),
        StoreBackend::File => Ok(Arc::new(FileStore::new(paths.data_dir.clone()))),
        StoreBackend::Postgres => {
            let url = std::env::var("DATABASE_URL")
                .ok()
                .or_else(|| settings.database_url.clone())
                .ok_or_else(|| {
                    CliError::InvalidConfig(
                        "postgres store needs DATABASE_URL or database_url in settings.toml"
                            .to_string(),
                    )
                })?;
            let store = PostgresStore::connect(&url, settings.max_connections).await?;
            store.migrate().await?;
            Ok(Arc::new(store))
        }
    }
}

async fn run_templates(engine: &DocumentEngine, command: TemplateCommand) -> Result<(), CliError> {
    match command {
        TemplateCommand::Register(args) => {
            let body = match (args.body, args.body_file) {
                (Some(body), None) => body,
                (None, Some(path)) => std::fs::read_to_string(path)?,
                _ => {
                    return Err(CliError::InvalidArgument(
                        "use either --body or --body-file".to_string(),
                    ));
                }
            };
            let new = NewTemplate {
                name: args.name,
                description: args.description,
                category: args.category,
                body,
                fields: args.fields,
            };
            print_json(&engine.register_template(new).await?)
        }
        TemplateCommand::Get { id } => print_json(&engine.get_template(id).await?),
        TemplateCommand::List => print_json(&engine.list_templates().await?),
        TemplateCommand::Seed => print_json(&seed_catalog(engine.registry()).await?),
        TemplateCommand::Preview { id, values } => {
            let values = input::collect_values(values.values.as_deref(), values.fields)?;
            println!("{}", engine.preview(id, &values).await?);
            Ok(())
        }
    }
}

async fn run_documents(engine: &DocumentEngine, command: DocumentCommand) -> Result<(), CliError> {
    match command {
        DocumentCommand::Generate {
            template_id,
            owner,
            title,
            values,
        } => {
            let values = input::collect_values(values.values.as_deref(), values.fields)?;
            let document = engine
                .generate_document(OwnerId::new(owner.owner), template_id, &values, title)
                .await?;
            print_json(&document)
        }
        DocumentCommand::Get { id, owner } => {
            print_json(&engine.get_document(id, &OwnerId::new(owner.owner)).await?)
        }
        DocumentCommand::List { owner } => print_json(
            &engine
                .list_documents_for_owner(&OwnerId::new(owner.owner))
                .await?,
        ),
    }
}

fn print_schema() -> Result<(), CliError> {
    let contracts = serde_json::json!({
        "contract_version": CONTRACT_VERSION,
        "template": schema_for!(Template),
        "new_template": schema_for!(NewTemplate),
        "document": schema_for!(Document),
    });
    print_json(&contracts)
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), CliError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn run_log_labels_follow_the_error_class() {
        let missing = CliError::Engine(EngineError::MissingFields {
            fields: vec!["amount".to_string()],
        });
        assert_eq!(missing.kind_label(), "incomplete_submission");
        assert_eq!(missing.exit_code(), 3);

        let bad_arg = CliError::InvalidArgument("--field".to_string());
        assert_eq!(bad_arg.kind_label(), "invalid_invocation");

        let store = CliError::Store(StoreError::Corrupt("bad".to_string()));
        assert_eq!(store.kind_label(), "infrastructure");
        assert_eq!(store.exit_code(), 1);
    }
}
