use std::collections::HashMap;
use std::future::Future;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use colored::Colorize;

use cribl_core::differ::{create_plan, find_changed_attributes};
use cribl_core::document::Document;
use cribl_core::effect::Effect;
use cribl_core::interpreter::{ApplyResult, EffectOutcome, Interpreter};
use cribl_core::plan::Plan;
use cribl_core::provider::Provider;
use cribl_core::resource::{Resource, ResourceId, State, Value};
use cribl_core::schema::ResourceSchema;
use cribl_provider::resources::{find_resource_type, resource_types};
use cribl_provider::{CriblProvider, ProviderConfig};
use cribl_state::{LocalBackend, StateBackend, StateFile};

const SENSITIVE: &str = "(sensitive)";

#[derive(Parser)]
#[command(name = "cribl")]
#[command(about = "Declarative configuration management for Cribl Stream", long_about = None)]
struct Cli {
    /// Path to the desired-state document
    #[arg(short, long, global = true, default_value = "cribl.json")]
    file: PathBuf,

    /// Path to the state file
    #[arg(long, global = true, default_value = "cribl.state.json")]
    state: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate the document against the resource schemas
    Validate,
    /// Show execution plan without applying changes
    Plan,
    /// Apply changes to reach the desired state
    Apply,
    /// Re-read every resource recorded in state
    Refresh,
    /// Destroy all resources recorded in state
    Destroy {
        /// Skip confirmation prompt (auto-approve)
        #[arg(long)]
        auto_approve: bool,
    },
    /// Bring an existing Cribl object under management
    Import {
        /// Resource type (e.g., pipeline, output_s3, input_datagen)
        resource_type: String,
        /// Resource name to record in state
        name: String,
        /// Id of the object on the Cribl leader
        identifier: String,
    },
    /// Read declared data sources and print their attributes
    Info {
        /// Print attributes as JSON
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let backend = LocalBackend::with_path(cli.state.clone());

    let result = match cli.command {
        Commands::Validate => run_validate(&cli.file),
        Commands::Plan => run_plan(&cli.file, &backend).await,
        Commands::Apply => run_apply(&cli.file, &backend).await,
        Commands::Refresh => run_refresh(&cli.file, &backend).await,
        Commands::Destroy { auto_approve } => run_destroy(&cli.file, &backend, auto_approve).await,
        Commands::Import {
            resource_type,
            name,
            identifier,
        } => run_import(&cli.file, &backend, resource_type, name, &identifier).await,
        Commands::Info { json } => run_info(&cli.file, json).await,
    };

    if let Err(e) = result {
        eprintln!("{} {}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}

fn get_schemas() -> HashMap<String, ResourceSchema> {
    resource_types()
        .into_iter()
        .map(|t| (t.name().to_string(), t.schema()))
        .collect()
}

fn load_document(file: &Path) -> Result<Document, String> {
    Document::load(file).map_err(|e| e.to_string())
}

/// Check every declaration against its type and normalize managed
/// resources so they compare equal to what the provider reads back
fn prepare_resources(document: &Document) -> Result<Vec<Resource>, String> {
    let mut all_errors = Vec::new();
    let mut resources = Vec::new();

    for declared in &document.resources {
        let id = &declared.id;
        let Some(resource_type) = find_resource_type(&id.resource_type) else {
            all_errors.push(format!("{}: unknown resource type '{}'", id, id.resource_type));
            continue;
        };
        if resource_type.is_data_source() != declared.is_data_source() {
            let section = if resource_type.is_data_source() {
                "data_sources"
            } else {
                "resources"
            };
            all_errors.push(format!(
                "{}: '{}' must be declared under {}",
                id, id.resource_type, section
            ));
            continue;
        }

        let mut resource = declared.clone();
        if !resource.is_data_source() {
            let schema = resource_type.schema();
            schema.normalize(&mut resource.attributes);
            if let Err(errors) = schema.validate(&resource.attributes) {
                all_errors.extend(errors.iter().map(|e| format!("{}: {}", id, e)));
                continue;
            }
        }
        resources.push(resource);
    }

    if all_errors.is_empty() {
        Ok(resources)
    } else {
        Err(all_errors.join("\n"))
    }
}

async fn get_provider(document: &Document) -> Result<CriblProvider, String> {
    let config = ProviderConfig::from_attributes(&document.provider)
        .map_err(|e| format!("Invalid provider configuration: {}", e))?;
    CriblProvider::configure(&config)
        .await
        .map_err(|e| format!("Failed to configure provider: {}", e))
}

async fn read_state_file(backend: &LocalBackend) -> Result<StateFile, String> {
    backend
        .read_state()
        .await
        .map(Option::unwrap_or_default)
        .map_err(|e| format!("Failed to read state: {}", e))
}

async fn write_state_file(backend: &LocalBackend, state_file: &mut StateFile) -> Result<(), String> {
    state_file.increment_serial();
    backend
        .write_state(state_file)
        .await
        .map_err(|e| format!("Failed to write state: {}", e))
}

/// Run `work` while holding the state lock
async fn locked<T>(
    backend: &LocalBackend,
    operation: &str,
    work: impl Future<Output = Result<T, String>>,
) -> Result<T, String> {
    let lock = backend
        .acquire_lock(operation)
        .await
        .map_err(|e| format!("Failed to acquire state lock: {}", e))?;
    log::debug!("Acquired state lock {} for {}", lock.id, operation);

    let result = work.await;

    if let Err(e) = backend.release_lock(&lock).await {
        log::warn!("Failed to release state lock {}: {}", lock.id, e);
    }
    result
}

/// Read every recorded resource with its stored state as prior, recording
/// the result; resources that are gone drop out of `state_file`
async fn refresh(
    provider: &impl Provider,
    state_file: &mut StateFile,
) -> Result<HashMap<ResourceId, State>, String> {
    let mut current_states = HashMap::new();
    for prior in state_file.states().into_values() {
        let state = provider
            .read(&prior.id, prior.identifier.as_deref(), Some(&prior))
            .await
            .map_err(|e| format!("Failed to refresh state: {}", e))?;
        current_states.insert(state.id.clone(), state);
    }
    for state in current_states.values() {
        state_file.record(provider.name(), state);
    }
    Ok(current_states)
}

fn run_validate(file: &Path) -> Result<(), String> {
    let document = load_document(file)?;

    println!("{}", "Validating...".cyan());

    ProviderConfig::from_attributes(&document.provider)
        .map_err(|e| format!("Invalid provider configuration: {}", e))?;
    let resources = prepare_resources(&document)?;

    println!(
        "{}",
        format!("✓ {} resources validated successfully.", resources.len())
            .green()
            .bold()
    );

    for resource in &resources {
        let kind = if resource.is_data_source() {
            " (data source)"
        } else {
            ""
        };
        println!("  • {}{}", resource.id, kind);
    }

    Ok(())
}

async fn run_plan(file: &Path, backend: &LocalBackend) -> Result<(), String> {
    let document = load_document(file)?;
    let resources = prepare_resources(&document)?;
    let provider = get_provider(&document).await?;

    let mut state_file = read_state_file(backend).await?;
    let current_states = refresh(&provider, &mut state_file).await?;

    let plan = create_plan(&resources, &current_states, &get_schemas());
    print_plan(&plan);
    Ok(())
}

async fn run_apply(file: &Path, backend: &LocalBackend) -> Result<(), String> {
    let document = load_document(file)?;
    let resources = prepare_resources(&document)?;
    let provider = get_provider(&document).await?;

    locked(backend, "apply", apply_plan(provider, &resources, backend)).await
}

async fn apply_plan(
    provider: CriblProvider,
    resources: &[Resource],
    backend: &LocalBackend,
) -> Result<(), String> {
    let mut state_file = read_state_file(backend).await?;
    let current_states = refresh(&provider, &mut state_file).await?;
    let plan = create_plan(resources, &current_states, &get_schemas());

    if plan.mutation_count() == 0 {
        write_state_file(backend, &mut state_file).await?;
        println!("{}", "No changes needed.".green());
        return Ok(());
    }

    print_plan(&plan);
    println!();

    println!("{}", "Applying changes...".cyan().bold());
    println!();

    let provider_name = provider.name();
    let result = Interpreter::new(provider).apply(&plan).await;
    print_outcomes(&plan, &result);

    record_outcomes(&mut state_file, provider_name, &result);
    write_state_file(backend, &mut state_file).await?;

    let applied = result
        .outcomes
        .iter()
        .flatten()
        .filter(|o| !matches!(o, EffectOutcome::Read { .. } | EffectOutcome::Skipped { .. }))
        .count();

    println!();
    if result.is_success() {
        println!(
            "{}",
            format!("Apply complete! {} changes applied.", applied)
                .green()
                .bold()
        );
        Ok(())
    } else {
        Err(format!(
            "Apply failed. {} succeeded, {} failed.",
            applied, result.failure_count
        ))
    }
}

/// Fold interpreter outcomes into the state file
fn record_outcomes(state_file: &mut StateFile, provider: &str, result: &ApplyResult) {
    for outcome in result.outcomes.iter().flatten() {
        match outcome {
            EffectOutcome::Created { state } | EffectOutcome::Updated { state } => {
                state_file.record(provider, state)
            }
            EffectOutcome::Deleted { id } => {
                state_file.remove_resource(id);
            }
            EffectOutcome::Read { .. } | EffectOutcome::Skipped { .. } => {}
        }
    }
}

fn print_outcomes(plan: &Plan, result: &ApplyResult) {
    for (effect, outcome) in plan.effects().iter().zip(&result.outcomes) {
        match outcome {
            Ok(_) => println!("  {} {}", "✓".green(), format_effect(effect)),
            Err(e) => println!("  {} {} - {}", "✗".red(), format_effect(effect), e),
        }
    }
    for effect in plan.effects().iter().skip(result.outcomes.len()) {
        println!("  {} {} - skipped", "·".yellow(), format_effect(effect));
    }
}

async fn run_refresh(file: &Path, backend: &LocalBackend) -> Result<(), String> {
    let document = load_document(file)?;
    let provider = get_provider(&document).await?;

    locked(backend, "refresh", refresh_state(&provider, backend)).await
}

async fn refresh_state(provider: &CriblProvider, backend: &LocalBackend) -> Result<(), String> {
    let mut state_file = read_state_file(backend).await?;
    if state_file.resources.is_empty() {
        println!("{}", "No resources in state.".yellow());
        return Ok(());
    }

    println!("{}", "Refreshing state...".cyan());

    let current_states = refresh(provider, &mut state_file).await?;
    let mut states: Vec<&State> = current_states.values().collect();
    states.sort_by_key(|s| s.id.to_string());

    let mut removed = 0;
    for state in states {
        if state.exists {
            println!("  {} {}", "✓".green(), state.id);
        } else {
            println!("  {} {} - not found, removed from state", "-".red(), state.id);
            removed += 1;
        }
    }

    write_state_file(backend, &mut state_file).await?;

    println!();
    println!(
        "{}",
        format!(
            "Refresh complete! {} resources tracked, {} removed.",
            state_file.resources.len(),
            removed
        )
        .green()
        .bold()
    );
    Ok(())
}

async fn run_destroy(file: &Path, backend: &LocalBackend, auto_approve: bool) -> Result<(), String> {
    let document = load_document(file)?;
    let provider = get_provider(&document).await?;

    locked(backend, "destroy", destroy_all(&provider, backend, auto_approve)).await
}

async fn destroy_all(
    provider: &CriblProvider,
    backend: &LocalBackend,
    auto_approve: bool,
) -> Result<(), String> {
    let mut state_file = read_state_file(backend).await?;

    // Newest first
    let targets: Vec<(ResourceId, Option<String>)> = state_file
        .resources
        .iter()
        .rev()
        .map(|r| (r.id(), r.identifier.clone()))
        .collect();

    if targets.is_empty() {
        println!("{}", "No resources to destroy.".green());
        return Ok(());
    }

    println!("{}", "Destroy Plan:".red().bold());
    println!();
    for (id, _) in &targets {
        println!("  {} {}", "-".red().bold(), id);
    }
    println!();
    println!("Plan: {} to destroy.", targets.len().to_string().red());
    println!();

    if !auto_approve && !confirm("Do you really want to destroy all resources?")? {
        println!("{}", "Destroy cancelled.".yellow());
        return Ok(());
    }

    println!("{}", "Destroying resources...".red().bold());
    println!();

    let mut success_count = 0;
    let mut failure_count = 0;

    for (id, identifier) in targets {
        let Some(identifier) = identifier else {
            println!("  {} {} - no remote id recorded, dropped from state", "-".yellow(), id);
            state_file.remove_resource(&id);
            continue;
        };

        match provider.delete(&id, &identifier).await {
            Ok(()) => {
                let effect = Effect::Delete {
                    id: id.clone(),
                    identifier,
                };
                println!("  {} {}", "✓".green(), format_effect(&effect));
                state_file.remove_resource(&id);
                success_count += 1;
            }
            Err(e) => {
                println!("  {} Delete {} - {}", "✗".red(), id, e);
                failure_count += 1;
            }
        }
    }

    write_state_file(backend, &mut state_file).await?;

    println!();
    if failure_count == 0 {
        println!(
            "{}",
            format!("Destroy complete! {} resources destroyed.", success_count)
                .green()
                .bold()
        );
        Ok(())
    } else {
        Err(format!(
            "Destroy failed. {} succeeded, {} failed.",
            success_count, failure_count
        ))
    }
}

fn confirm(question: &str) -> Result<bool, String> {
    println!("{}", question.yellow().bold());
    println!(
        "  {}",
        "This action cannot be undone. Type 'yes' to confirm.".yellow()
    );
    print!("\n  Enter a value: ");
    std::io::Write::flush(&mut std::io::stdout()).map_err(|e| e.to_string())?;

    let mut input = String::new();
    std::io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;
    println!();

    Ok(input.trim() == "yes")
}

async fn run_import(
    file: &Path,
    backend: &LocalBackend,
    resource_type: String,
    name: String,
    identifier: &str,
) -> Result<(), String> {
    let definition = find_resource_type(&resource_type)
        .ok_or_else(|| format!("Unknown resource type '{}'", resource_type))?;
    if definition.is_data_source() {
        return Err(format!(
            "'{}' is a data source and cannot be imported",
            resource_type
        ));
    }

    let document = load_document(file)?;
    let provider = get_provider(&document).await?;
    let id = ResourceId::new(resource_type, name);

    locked(
        backend,
        "import",
        import_resource(&provider, backend, &id, identifier),
    )
    .await
}

async fn import_resource(
    provider: &CriblProvider,
    backend: &LocalBackend,
    id: &ResourceId,
    identifier: &str,
) -> Result<(), String> {
    let mut state_file = read_state_file(backend).await?;
    if let Some(existing) = state_file.find_resource(id) {
        return Err(format!(
            "{} is already managed (id '{}')",
            id,
            existing.identifier.as_deref().unwrap_or_default()
        ));
    }

    let state = provider
        .import(id, identifier)
        .await
        .map_err(|e| format!("Import failed: {}", e))?;
    state_file.record(provider.name(), &state);
    write_state_file(backend, &mut state_file).await?;

    println!(
        "{}",
        format!("✓ Imported {} from '{}'.", id, identifier)
            .green()
            .bold()
    );
    let schemas = get_schemas();
    print_attributes(&state.attributes, schemas.get(&id.resource_type), "  ");
    Ok(())
}

async fn run_info(file: &Path, json: bool) -> Result<(), String> {
    let document = load_document(file)?;
    let data_sources: Vec<Resource> = prepare_resources(&document)?
        .into_iter()
        .filter(Resource::is_data_source)
        .collect();

    if data_sources.is_empty() {
        println!("{}", "No data sources declared.".yellow());
        return Ok(());
    }

    let provider = get_provider(&document).await?;
    let schemas = get_schemas();
    let mut output = serde_json::Map::new();

    for resource in &data_sources {
        let state = provider
            .read(&resource.id, None, None)
            .await
            .map_err(|e| format!("Failed to read data source: {}", e))?;
        let schema = schemas.get(&resource.id.resource_type);

        if json {
            output.insert(
                resource.id.to_string(),
                masked_json(&state.attributes, schema),
            );
        } else {
            println!("{}", resource.id.to_string().cyan().bold());
            print_attributes(&state.attributes, schema, "  ");
            println!();
        }
    }

    if json {
        let rendered = serde_json::to_string_pretty(&serde_json::Value::Object(output))
            .map_err(|e| e.to_string())?;
        println!("{}", rendered);
    }
    Ok(())
}

fn print_plan(plan: &Plan) {
    if plan.mutation_count() == 0 {
        println!("{}", "No changes. Cribl configuration is up-to-date.".green());
        return;
    }

    let schemas = get_schemas();

    println!("{}", "Execution Plan:".cyan().bold());
    println!();

    for effect in plan.effects() {
        match effect {
            Effect::Read { resource } => {
                println!("  {} {}", "?".normal(), resource.id.to_string().cyan());
            }
            Effect::Create(resource) => {
                println!("  {} {}", "+".green().bold(), resource.id.to_string().cyan().bold());
                let schema = schemas.get(&resource.id.resource_type);
                for key in sorted_keys(&resource.attributes) {
                    let value = display_value(schema, key, &resource.attributes[key]);
                    println!("    {}: {}", key, value.green());
                }
            }
            Effect::Update { id, from, to } => {
                println!("  {} {}", "~".yellow().bold(), id.to_string().cyan().bold());
                let schema = schemas.get(&id.resource_type);
                for key in find_changed_attributes(&to.attributes, &from.attributes, schema) {
                    let old = from
                        .attributes
                        .get(&key)
                        .map(|v| display_value(schema, &key, v))
                        .unwrap_or_else(|| "(none)".to_string());
                    let new = to
                        .attributes
                        .get(&key)
                        .map(|v| display_value(schema, &key, v))
                        .unwrap_or_else(|| "(none)".to_string());
                    println!("    {}: {} → {}", key, old.red(), new.green());
                }
            }
            Effect::Delete { id, identifier } => {
                println!("  {} {}", "-".red().bold(), id.to_string().cyan().bold());
                println!("    {}: {}", "id".bold(), identifier.red().bold());
            }
        }
    }

    println!();
    println!("{}", plan.summary().to_string().bold());
}

fn print_attributes(
    attributes: &HashMap<String, Value>,
    schema: Option<&ResourceSchema>,
    indent: &str,
) {
    for key in sorted_keys(attributes) {
        println!(
            "{}{}: {}",
            indent,
            key,
            display_value(schema, key, &attributes[key])
        );
    }
}

fn sorted_keys(attributes: &HashMap<String, Value>) -> Vec<&String> {
    let mut keys: Vec<_> = attributes.keys().collect();
    keys.sort_by(|a, b| match (a.as_str(), b.as_str()) {
        ("id", _) => std::cmp::Ordering::Less,
        (_, "id") => std::cmp::Ordering::Greater,
        _ => a.cmp(b),
    });
    keys
}

fn format_effect(effect: &Effect) -> String {
    match effect {
        Effect::Create(r) => format!("Create {}", r.id),
        Effect::Update { id, .. } => format!("Update {}", id),
        Effect::Delete { id, .. } => format!("Delete {}", id),
        Effect::Read { resource } => format!("Read {}", resource.id),
    }
}

fn display_value(schema: Option<&ResourceSchema>, key: &str, value: &Value) -> String {
    if schema.is_some_and(|s| s.is_sensitive(key)) {
        SENSITIVE.to_string()
    } else {
        format_value(value)
    }
}

fn masked_json(
    attributes: &HashMap<String, Value>,
    schema: Option<&ResourceSchema>,
) -> serde_json::Value {
    attributes
        .iter()
        .map(|(key, value)| {
            let json = if schema.is_some_and(|s| s.is_sensitive(key)) {
                serde_json::Value::String(SENSITIVE.to_string())
            } else {
                value.to_json()
            };
            (key.clone(), json)
        })
        .collect::<serde_json::Map<_, _>>()
        .into()
}

fn format_value(value: &Value) -> String {
    match value {
        Value::String(s) => format!("\"{}\"", s),
        Value::Int(n) => n.to_string(),
        Value::Float(f) => f.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::List(items) => {
            let strs: Vec<_> = items.iter().map(format_value).collect();
            format!("[{}]", strs.join(", "))
        }
        Value::Map(map) => {
            let mut keys: Vec<_> = map.keys().collect();
            keys.sort();
            let strs: Vec<_> = keys
                .into_iter()
                .map(|k| format!("{}: {}", k, format_value(&map[k])))
                .collect();
            format!("{{{}}}", strs.join(", "))
        }
    }
}
