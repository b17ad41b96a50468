//! MediChat: terminal symptom checker.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use medichat_assistant::replies;
use medichat_assistant::{
    AssistantConfig, ChatSession, Completion, Intent, PredictionProgress, PredictionWorker,
    SessionError,
};
use medichat_core::models::{ChatMessage, PredictionResponse, Role, SelectedSymptoms, Symptom};
use medichat_core::{Catalog, Predictor};

const MAX_SUGGESTIONS: usize = 3;
const POLL_INTERVAL: Duration = Duration::from_millis(250);

#[derive(Debug, Parser)]
#[command(
    name = "medichat",
    version,
    about = "Chat-style symptom checker over a fixed local disease catalog",
    long_about = "medichat ranks a small set of candidate conditions for the symptoms you pick.\n\n\
        Results come from a simple keyword-overlap heuristic and are NOT a diagnosis.\n\n\
        EXAMPLES:\n\
        \n  medichat                                   Start an interactive chat\n\
        \n  medichat predict \"Runny nose\" Cough        One-shot prediction\n\
        \n  medichat predict --json Fever              Prediction as JSON\n\
        \n  medichat symptoms --search pain            Search the symptom list"
)]
struct Cli {
    /// Increase verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// JSON configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// JSON catalog file (defaults to the built-in catalog)
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Skip simulated typing and analysis delays
    #[arg(long, global = true)]
    no_delay: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Interactive chat (default)
    Chat,
    /// Rank conditions for the given symptom names or ids
    Predict {
        #[arg(required = true)]
        symptoms: Vec<String>,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// List pickable symptoms
    Symptoms {
        /// Only symptoms whose name contains this text
        #[arg(long)]
        search: Option<String>,
    },
    /// List catalog diseases
    Diseases,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = load_config(&cli)?;
    let catalog = config.load_catalog().context("failed to load catalog")?;
    let predictor = Arc::new(Predictor::new(catalog, config.scoring.clone()));

    match cli.command.unwrap_or(Command::Chat) {
        Command::Chat => run_chat(predictor, &config),
        Command::Predict { symptoms, json } => run_predict(&predictor, &symptoms, json),
        Command::Symptoms { search } => {
            list_symptoms(predictor.catalog(), search.as_deref().unwrap_or(""));
            Ok(())
        }
        Command::Diseases => {
            list_diseases(predictor.catalog());
            Ok(())
        }
    }
}

/// Logs go to stderr so the transcript on stdout stays readable.
fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn load_config(cli: &Cli) -> Result<AssistantConfig> {
    let base = match &cli.config {
        Some(path) => AssistantConfig::from_json_file(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => AssistantConfig::default(),
    };

    let mut config = base
        .with_env(|key| std::env::var(key).ok())
        .context("invalid MEDICHAT_* environment")?;

    if let Some(path) = &cli.catalog {
        config.catalog_path = Some(path.clone());
    }
    if cli.no_delay {
        config = config.without_delays();
    }

    tracing::debug!(?config, "Resolved configuration");
    Ok(config)
}

// =========================================================================
// One-shot commands
// =========================================================================

fn run_predict(predictor: &Predictor, inputs: &[String], json: bool) -> Result<()> {
    let selected = selection_from_args(predictor.catalog(), inputs);
    let response = predictor.predict(selected.as_slice())?;

    if json {
        println!("{}", serde_json::to_string_pretty(&response)?);
    } else {
        print_results(&response);
    }
    Ok(())
}

/// Names and ids may point at the same symptom; it counts once.
fn selection_from_args(catalog: &Catalog, inputs: &[String]) -> SelectedSymptoms {
    inputs
        .iter()
        .enumerate()
        .map(|(i, input)| match resolve_symptom(catalog, input) {
            Some(symptom) => symptom.clone(),
            None => {
                // Free-form names are still scored, they just are not picker entries
                print_suggestions(catalog, input);
                Symptom::new(format!("custom-{}", i + 1), input.trim())
            }
        })
        .collect()
}

fn list_symptoms(catalog: &Catalog, query: &str) {
    let matches = catalog.search_symptoms(query, &SelectedSymptoms::new());
    if matches.is_empty() {
        println!("No symptoms match {:?}.", query);
        return;
    }
    for symptom in matches {
        match &symptom.description {
            Some(description) => println!("  {:>4}  {} ({})", symptom.id, symptom.name, description),
            None => println!("  {:>4}  {}", symptom.id, symptom.name),
        }
    }
}

fn list_diseases(catalog: &Catalog) {
    for disease in catalog.diseases() {
        println!("  {:>4}  {} [{}]", disease.id, disease.name, disease.severity);
    }
}

// =========================================================================
// Interactive chat
// =========================================================================

fn run_chat(predictor: Arc<Predictor>, config: &AssistantConfig) -> Result<()> {
    let mut session = ChatSession::new();

    println!("MediChat - type how you feel, :help for commands, :q to quit\n");
    let mut shown = print_new_messages(&session, 0);

    let stdin = io::stdin();
    let mut input = String::new();
    loop {
        print!("> ");
        io::stdout().flush()?;
        input.clear();
        if stdin.lock().read_line(&mut input)? == 0 {
            break; // EOF
        }
        let line = input.trim();
        let (command, arg) = line.split_once(' ').unwrap_or((line, ""));
        let arg = arg.trim();

        match command {
            "" => continue,
            ":q" | ":quit" => break,
            ":help" => print_help(),
            ":pick" => {
                let matches = predictor
                    .catalog()
                    .search_symptoms(arg, session.selected_symptoms());
                print_picker(&session, &matches);
            }
            ":add" => add_symptom(&mut session, predictor.catalog(), arg),
            ":remove" => match session.remove_symptom(arg) {
                Some(symptom) => println!("  Removed {}.", symptom.name),
                None => println!("  {:?} is not selected.", arg),
            },
            ":submit" => {
                let completion = submit(&mut session, &predictor, config)?;
                shown = print_new_messages(&session, shown);
                if completion == Some(Completion::Applied) {
                    print_results(session.predictions());
                }
                continue;
            }
            ":reset" => {
                session.reset();
                shown = 0;
            }
            ":emergency" => print_emergency(),
            _ => {
                typing_pause(config.reply_delay())?;
                match session.send_message(line) {
                    Ok(Intent::DescribesSymptoms) => {
                        shown = print_new_messages(&session, shown);
                        let matches = predictor
                            .catalog()
                            .search_symptoms("", session.selected_symptoms());
                        print_picker(&session, &matches);
                        println!("  Use :add <name or id>, then :submit.");
                        continue;
                    }
                    Ok(Intent::Other) => {}
                    Err(e) => println!("  {}", e),
                }
            }
        }

        shown = print_new_messages(&session, shown);
    }

    Ok(())
}

fn add_symptom(session: &mut ChatSession, catalog: &Catalog, input: &str) {
    if input.is_empty() {
        println!("  Usage: :add <symptom name or id>");
        return;
    }
    match resolve_symptom(catalog, input) {
        Some(symptom) => {
            if session.select_symptom(symptom.clone()) {
                println!("  Selected: {}", session.selected_symptoms().names().join(", "));
            } else {
                println!("  {} is already selected.", symptom.name);
            }
        }
        None => print_suggestions(catalog, input),
    }
}

/// Run the prediction on the background worker, showing a progress indicator.
///
/// Returns `None` when the session refused the submission.
fn submit(
    session: &mut ChatSession,
    predictor: &Arc<Predictor>,
    config: &AssistantConfig,
) -> Result<Option<Completion>> {
    let submission = match session.begin_submission() {
        Ok(submission) => submission,
        Err(SessionError::NoSymptomsSelected) => {
            println!("  Select at least one symptom first (:pick, :add).");
            return Ok(None);
        }
        Err(e) => {
            println!("  {}", e);
            return Ok(None);
        }
    };

    let handle = PredictionWorker::spawn(Arc::clone(predictor), submission, config.prediction_delay());

    let mut stdout = io::stdout();
    let mut analyzing = false;
    loop {
        let update = handle
            .try_recv()
            .context("prediction worker exited without a result")?;
        match update {
            Some(PredictionProgress::Analyzing(_)) => {
                analyzing = true;
                print!("  MediChat is analyzing your symptoms");
                stdout.flush()?;
            }
            Some(update) => {
                println!();
                let completion = update
                    .into_outcome()
                    .map(|(ticket, outcome)| session.complete_submission(ticket, outcome));
                return Ok(completion);
            }
            None => {
                thread::sleep(POLL_INTERVAL);
                if analyzing {
                    print!(".");
                    stdout.flush()?;
                }
            }
        }
    }
}

fn typing_pause(delay: Duration) -> io::Result<()> {
    if delay.is_zero() {
        return Ok(());
    }
    print!("  MediChat is typing...");
    io::stdout().flush()?;
    thread::sleep(delay);
    println!();
    Ok(())
}

/// Print messages appended since `shown`; returns the new count.
fn print_new_messages(session: &ChatSession, shown: usize) -> usize {
    let messages = session.messages();
    for message in messages.iter().skip(shown) {
        print_message(message);
    }
    messages.len()
}

fn print_message(message: &ChatMessage) {
    match message.role {
        Role::Assistant => println!("MediChat: {}\n", message.content),
        Role::User => println!("You: {}\n", message.content),
    }
}

fn print_results(response: &PredictionResponse) {
    if response.is_empty() {
        println!("  {}\n", replies::NO_MATCHES);
    }

    for (rank, disease) in response.diseases.iter().enumerate() {
        let percent = disease.confidence_percent().unwrap_or(0);
        let marker = if disease.severity.is_urgent() { "[!] " } else { "" };
        println!(
            "  {}{}. {} - {}% match ({} severity)",
            marker,
            rank + 1,
            disease.name,
            percent,
            disease.severity
        );
        println!("     {}", disease.description);
        if disease.severity.is_urgent() {
            println!("     {}", replies::URGENT_RESULT);
        }
        println!("     Symptoms:   {}", disease.symptoms.join(", "));
        println!("     Treatments: {}", disease.treatments.join(", "));
        println!("     Prevention: {}", disease.prevention.join(", "));
        println!();
    }

    if let Some(advice) = &response.emergency_advice {
        println!("  !! {}\n", advice);
    }
    if !response.additional_questions.is_empty() {
        println!("  To narrow this down:");
        for question in &response.additional_questions {
            println!("    - {}", question);
        }
        println!();
    }
    println!("  {}\n", replies::DISCLAIMER);
}

fn print_picker(session: &ChatSession, matches: &[&Symptom]) {
    let selected = session.selected_symptoms();
    if selected.is_empty() {
        println!("  Selected symptoms: none yet");
    } else {
        println!("  Selected symptoms: {}", selected.names().join(", "));
    }
    if matches.is_empty() {
        println!("  No symptoms found");
        return;
    }
    for symptom in matches {
        println!("    {:>4}  {}", symptom.id, symptom.name);
    }
}

fn print_suggestions(catalog: &Catalog, input: &str) {
    let suggestions = catalog.suggest_symptoms(input, MAX_SUGGESTIONS);
    if suggestions.is_empty() {
        eprintln!("  {:?} is not in the symptom list.", input.trim());
    } else {
        let names: Vec<&str> = suggestions.iter().map(|s| s.name.as_str()).collect();
        eprintln!(
            "  {:?} is not in the symptom list. Did you mean: {}?",
            input.trim(),
            names.join(", ")
        );
    }
}

fn print_emergency() {
    println!("  {}\n", replies::EMERGENCY_NOTICE);
    for contact in replies::EMERGENCY_CONTACTS {
        println!("  {:<30} {:<16} {}", contact.service, contact.number, contact.region);
    }
    println!("\n  Seek immediate help for:");
    for sign in replies::WARNING_SIGNS {
        println!("    ! {}", sign);
    }
    println!();
}

fn print_help() {
    println!(
        "  Describe how you feel in plain words, or use:\n\
         \x20   :pick [text]      list symptoms (optionally filtered)\n\
         \x20   :add <name|id>    select a symptom\n\
         \x20   :remove <id>      deselect a symptom\n\
         \x20   :submit           analyse the selected symptoms\n\
         \x20   :reset            start a new assessment\n\
         \x20   :emergency        emergency numbers and warning signs\n\
         \x20   :q                quit\n"
    );
}

/// Catalog symptom by id, or by case-insensitive name.
fn resolve_symptom<'a>(catalog: &'a Catalog, input: &str) -> Option<&'a Symptom> {
    let input = input.trim();
    catalog
        .symptom(input)
        .or_else(|| catalog.symptom_by_name(input))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typing_pause_without_delay() {
        assert!(typing_pause(Duration::ZERO).is_ok());
    }

    #[test]
    fn test_resolve_symptom_by_id_or_name() {
        let catalog = Catalog::reference();
        assert_eq!(resolve_symptom(&catalog, "s1").map(|s| s.name.as_str()), Some("Fever"));
        assert_eq!(resolve_symptom(&catalog, " fever ").map(|s| s.id.as_str()), Some("s1"));
        assert!(resolve_symptom(&catalog, "fevr").is_none());
    }

    #[test]
    fn test_name_and_id_select_once() {
        let catalog = Catalog::reference();
        let args = |items: &[&str]| -> Vec<String> { items.iter().map(|s| s.to_string()).collect() };

        let selected = selection_from_args(&catalog, &args(&["Fever", "s1", "FEVER"]));
        assert_eq!(selected.names(), vec!["Fever"]);

        let predictor = Predictor::reference();
        assert_eq!(
            predictor.predict(selected.as_slice()).unwrap(),
            predictor
                .predict(selection_from_args(&catalog, &args(&["Fever"])).as_slice())
                .unwrap()
        );
    }

    #[test]
    fn test_unknown_args_become_free_form_symptoms() {
        let catalog = Catalog::reference();
        let selected = selection_from_args(&catalog, &["Itching".to_string()]);
        assert_eq!(selected.as_slice()[0].id, "custom-1");
        assert_eq!(selected.names(), vec!["Itching"]);
    }
}
