mod atomic;
mod logging;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use formsmith_ai::{AiError, ChatModel, OpenAiCompatModel, SchemaGenerator};
use formsmith_core::validate_form_schema;
use formsmith_service::{FormService, ServiceError, StaticAuthenticator};
use formsmith_store::{PostgresStore, StoreError};
use logging::init_logging;
use serde_json::Value;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
enum CliError {
    #[error("service error: {0}")]
    Service(#[from] ServiceError),
    #[error("store error: {0}")]
    Store(#[from] StoreError),
    #[error("model error: {0}")]
    Ai(#[from] AiError),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("schema failed validation with {0} issue(s)")]
    SchemaInvalid(usize),
}

#[derive(Parser, Debug)]
#[command(name = "formsmith", version, about = "Formsmith CLI")]
struct Cli {
    /// Postgres connection string; falls back to DATABASE_URL.
    #[arg(long, global = true, value_name = "CONNECTION_STRING")]
    database_url: Option<String>,
    /// Acting user id; falls back to FORMSMITH_USER.
    #[arg(long, global = true, value_name = "USER_ID")]
    user: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a form from a prompt and persist it.
    Generate(GenerateArgs),
    /// Validate a schema file and persist it.
    Create(CreateArgs),
    /// Validate a schema file without touching the database.
    Validate(ValidateArgs),
    /// Show one form by id or slug.
    Show(ShowArgs),
    /// List the acting user's forms with response counts.
    List,
    /// Set a form's published flag.
    Publish(PublishArgs),
    /// Submit a response against a form.
    Submit(SubmitArgs),
    /// List a form's responses, newest first.
    Responses(ResponsesArgs),
    /// Export a form's responses as a downloadable artifact.
    Export(ExportArgs),
}

#[derive(Args, Debug)]
struct GenerateArgs {
    /// Natural-language description of the form.
    prompt: String,
    /// Model id served by the configured endpoint.
    #[arg(long)]
    model: Option<String>,
}

#[derive(Args, Debug)]
struct CreateArgs {
    /// Path to a form schema JSON file.
    schema: PathBuf,
}

#[derive(Args, Debug)]
struct ValidateArgs {
    /// Path to a form schema JSON file.
    schema: PathBuf,
}

#[derive(Args, Debug)]
struct ShowArgs {
    /// Form id or slug.
    form: String,
}

#[derive(Args, Debug)]
struct PublishArgs {
    /// Form id.
    form_id: Uuid,
    /// Unpublish instead of publish.
    #[arg(long, default_value_t = false)]
    unpublish: bool,
}

#[derive(Args, Debug)]
struct SubmitArgs {
    /// Form id or slug.
    form: String,
    /// Response data as inline JSON.
    #[arg(long, value_name = "JSON", conflicts_with = "file")]
    data: Option<String>,
    /// Response data from a JSON file.
    #[arg(long, value_name = "PATH", required_unless_present = "data")]
    file: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct ResponsesArgs {
    /// Form id or slug.
    form: String,
}

#[derive(Args, Debug)]
struct ExportArgs {
    /// Form id or slug.
    form: String,
    /// Export format selector.
    #[arg(long, default_value = "csv")]
    format: String,
    /// Directory the artifact is written into.
    #[arg(long, default_value = ".")]
    out: PathBuf,
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    init_logging();
    let cli = Cli::parse();
    run(cli).await
}

async fn run(cli: Cli) -> Result<(), CliError> {
    match &cli.command {
        Command::Validate(args) => run_validate(args),
        Command::Generate(args) => {
            let service = build_service(&cli).await?.with_generator(build_generator(args)?);
            let created = service.generate_form(&args.prompt).await?;
            print_json(&created)
        }
        Command::Create(args) => {
            let value: Value = serde_json::from_str(&std::fs::read_to_string(&args.schema)?)?;
            let created = build_service(&cli).await?.create_form(&value).await?;
            print_json(&created)
        }
        Command::Show(args) => {
            let form = build_service(&cli).await?.get_form(&args.form).await?;
            print_json(&form)
        }
        Command::List => {
            let forms = build_service(&cli).await?.list_forms().await?;
            print_json(&forms)
        }
        Command::Publish(args) => {
            let form = build_service(&cli)
                .await?
                .publish_form(args.form_id, !args.unpublish)
                .await?;
            print_json(&form)
        }
        Command::Submit(args) => {
            let data = submit_data(args)?;
            let record = build_service(&cli)
                .await?
                .submit_response(&args.form, data)
                .await?;
            print_json(&record)
        }
        Command::Responses(args) => {
            let responses = build_service(&cli)
                .await?
                .list_responses(&args.form)
                .await?;
            print_json(&responses)
        }
        Command::Export(args) => run_export(&cli, args).await,
    }
}

fn run_validate(args: &ValidateArgs) -> Result<(), CliError> {
    let value: Value = serde_json::from_str(&std::fs::read_to_string(&args.schema)?)?;

    match validate_form_schema(&value) {
        Ok(form) => {
            println!(
                "schema is valid: \"{}\" with {} field(s)",
                form.title,
                form.fields.len()
            );
            Ok(())
        }
        Err(report) => {
            for issue in &report.issues {
                println!("{issue}");
            }
            Err(CliError::SchemaInvalid(report.issues.len()))
        }
    }
}

async fn run_export(cli: &Cli, args: &ExportArgs) -> Result<(), CliError> {
    let artifact = build_service(cli)
        .await?
        .export_responses(&args.form, Some(&args.format))
        .await?;

    let path = args.out.join(&artifact.file_name);
    atomic::write_bytes_atomic(&path, &artifact.content)?;
    tracing::info!(event = "export_written", path = %path.display());

    println!("{} ({})", path.display(), artifact.mime_type);
    Ok(())
}

async fn build_service(cli: &Cli) -> Result<FormService<PostgresStore>, CliError> {
    let database_url = cli
        .database_url
        .clone()
        .or_else(|| std::env::var("DATABASE_URL").ok())
        .ok_or_else(|| {
            CliError::InvalidConfig(
                "database url is required (--database-url or DATABASE_URL)".to_string(),
            )
        })?;

    let store = PostgresStore::connect(&database_url).await?;
    store.ensure_schema().await?;

    let auth = match cli.user.clone().or_else(|| std::env::var("FORMSMITH_USER").ok()) {
        Some(user) => StaticAuthenticator::user(user),
        None => StaticAuthenticator::anonymous(),
    };

    Ok(FormService::new(store, auth))
}

fn build_generator(args: &GenerateArgs) -> Result<SchemaGenerator<Box<dyn ChatModel>>, CliError> {
    let api_key = std::env::var("GROQ_API_KEY").map_err(|_| {
        CliError::InvalidConfig("GROQ_API_KEY is required for generation".to_string())
    })?;

    let mut builder = OpenAiCompatModel::builder().api_key(api_key);
    if let Some(model) = &args.model {
        builder = builder.model(model);
    }
    let model = builder.build()?;

    Ok(SchemaGenerator::new(Box::new(model) as Box<dyn ChatModel>)?)
}

fn submit_data(args: &SubmitArgs) -> Result<Value, CliError> {
    let text = match (&args.data, &args.file) {
        (Some(inline), None) => inline.clone(),
        (None, Some(path)) => std::fs::read_to_string(path)?,
        _ => {
            return Err(CliError::InvalidConfig(
                "use either --data or --file".to_string(),
            ))
        }
    };
    Ok(serde_json::from_str(&text)?)
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<(), CliError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
