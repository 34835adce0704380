//! Ashley application binary - composition root.
//!
//! Ties the workspace crates into a single executable:
//! 1. Parse CLI arguments and load configuration from TOML
//! 2. Initialize tracing
//! 3. Build the inference client (API key comes from the environment)
//! 4. Run the interactive chat loop wiring the controller to the client

use std::io::Write;

use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};

use ashley_chat::{
    ChatError, InteractionController, QuickStartOutcome, SessionStore, TurnRenderer,
};
use ashley_core::{AshleyConfig, Role};
use ashley_llm::InferenceClient;

mod cli;

use cli::CliArgs;

/// Console renderer: one block per turn with a role label.
struct ConsoleRenderer {
    assistant_name: String,
}

impl TurnRenderer for ConsoleRenderer {
    fn render(&self, role: Role, content: &str) {
        match role {
            Role::User => println!("You: {}", content),
            Role::Assistant => println!("{}: {}", self.assistant_name, content),
        }
    }
}

/// Print the startup banner with the quick-start questions.
fn print_banner(config: &AshleyConfig) {
    println!("{} - Your AI Cloud Assistant", config.general.assistant_name);
    println!("Type a question, or pick a quick-start question:");
    for (idx, question) in config.chat.quick_start_prompts.iter().enumerate() {
        println!("  /q {}  {}", idx + 1, question);
    }
    println!("Commands: /q <n>, /history, /reset, /help, /quit");
}

/// Print the notice shown when input fails admission checks.
///
/// Rejected input is displayed only; it is never appended to the
/// conversation history.
fn print_validation_notice(err: &ChatError) {
    println!("Invalid input. Please provide a valid query. ({})", err);
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = CliArgs::parse();

    // Config. Load happens before tracing init so the effective log level
    // can come from the file; load diagnostics are re-emitted below.
    let config_file = args.resolve_config_path();
    let mut config = AshleyConfig::load_or_default(&config_file);
    if let Some(url) = args.base_url.clone() {
        config.llm.base_url = url;
    }
    if let Some(model) = args.model.clone() {
        config.llm.model = model;
    }

    // Tracing.
    let log_level = args.resolve_log_level(&config.general.log_level);
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .init();

    tracing::info!("Starting Ashley v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!(path = %config_file.display(), "Configuration resolved");

    // Inference client.
    let client = match InferenceClient::from_config(&config.llm) {
        Ok(c) => c,
        Err(e) => {
            tracing::error!(error = %e, "Failed to build the inference client");
            eprintln!(
                "Set the {} environment variable with your inference API key.",
                config.llm.api_key_env
            );
            return Err(e.into());
        }
    };
    tracing::info!(endpoint = %client.endpoint(), model = %config.llm.model, "Inference client ready");

    // Chat core.
    let renderer = ConsoleRenderer {
        assistant_name: config.general.assistant_name.clone(),
    };
    let controller = InteractionController::new(&config.chat, client, renderer);
    let mut store = SessionStore::new();
    store.initialize();

    print_banner(&config);

    // Chat loop. One turn cycle runs to completion before the next line is
    // read, so session turn cycles never interleave.
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("\n> ");
        std::io::stdout().flush()?;

        let line = match lines.next_line().await? {
            Some(l) => l,
            None => break,
        };
        let input = line.as_str();

        if input == "/quit" || input == "/exit" {
            break;
        } else if input == "/help" {
            print_banner(&config);
        } else if input == "/history" {
            if let Some(session) = store.session() {
                controller.replay(session);
            }
        } else if input == "/reset" {
            store.reset();
            store.initialize();
            println!("Session cleared.");
        } else if let Some(rest) = input.strip_prefix("/q") {
            let count = config.chat.quick_start_prompts.len();
            match rest.trim().parse::<usize>() {
                Ok(n) if (1..=count).contains(&n) => {
                    let prompt = config.chat.quick_start_prompts[n - 1].clone();
                    let session = store.initialize();
                    match controller.process_quick_start(session, &prompt).await {
                        Ok(QuickStartOutcome::Dispatched) => {}
                        Ok(QuickStartOutcome::DuplicateIgnored) => {
                            println!("Already asked. Pick another question or type your own.");
                        }
                        Err(e) => print_validation_notice(&e),
                    }
                }
                _ => println!("Usage: /q <1-{}>", count),
            }
        } else {
            let session = store.initialize();
            if let Err(e) = controller.process_input(session, input).await {
                print_validation_notice(&e);
            }
        }
    }

    tracing::info!("Session ended");
    Ok(())
}
