use clap::Parser;
use clap::Subcommand;
use ragchat::config::AppConfig;
use ragchat::memory::ConversationMemory;
use ragchat::rag::ChatBot;
use ragchat::rag::ChatReply;
use ragchat::Result;
use tokio::io::AsyncBufReadExt;
use tokio::io::BufReader;
use tracing::info;

#[derive(Parser)]
#[command(name = "ragchat")]
#[command(about = "Retrieval-augmented chat over a Vectara corpus and Claude")]
#[command(version)]
struct Cli {
    /// Enable verbose debug logging
    #[arg(short, long)]
    verbose: bool,

    /// Configuration file (optional; environment variables also apply)
    #[arg(short, long, default_value = "config.toml")]
    config: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the chat page and JSON API
    Serve {
        /// Host to bind to
        #[arg(long)]
        host: Option<String>,
        /// Port to listen on
        #[arg(short, long)]
        port: Option<u16>,
        /// Allow cross-origin requests
        #[arg(long)]
        cors: bool,
    },
    /// Ask a single question and print the answer
    Ask {
        /// The question
        query: String,
    },
    /// Chat on the terminal, one question per line, keeping conversation memory
    Chat,
    /// Show current configuration
    Config,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let mut config = AppConfig::load(&cli.config)?;

    // Initialize logging
    let _guard = ragchat::logging::init_logging(&config.logging, cli.verbose)?;
    info!("Configuration loaded successfully");

    // Execute the requested command
    match cli.command {
        Commands::Serve { host, port, cors } => {
            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(port) = port {
                config.server.port = port;
            }
            config.server.enable_cors |= cors;
            ragchat::api::serve_chat(&config).await?;
        }
        Commands::Ask { query } => {
            handle_ask_command(&config, &query).await?;
        }
        Commands::Chat => {
            handle_chat_command(&config).await?;
        }
        Commands::Config => {
            handle_config_command(&config);
        }
    }

    Ok(())
}

fn print_reply(reply: &ChatReply) {
    if let Some(notice) = &reply.notice {
        eprintln!("⚠️  {notice}");
    }
    println!("Bot: {}", reply.answer);
    if !reply.sources.is_empty() {
        println!();
        println!("📚 Retrieved {} passage(s):", reply.sources.len());
        for (idx, passage) in reply.sources.iter().enumerate() {
            println!("  {}. {}", idx + 1, passage.source);
        }
    }
}

async fn handle_ask_command(config: &AppConfig, query: &str) -> Result<()> {
    let bot = ChatBot::new(config)?;
    let mut memory = ConversationMemory::new();
    let reply = bot.chat(query, &mut memory).await?;
    print_reply(&reply);
    Ok(())
}

async fn handle_chat_command(config: &AppConfig) -> Result<()> {
    let bot = ChatBot::new(config)?;
    let mut memory = ConversationMemory::new();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    println!("💬 RAG Chatbot - type a question, Ctrl-D to quit");
    while let Some(line) = lines.next_line().await? {
        if line.is_empty() {
            continue;
        }
        match bot.chat(&line, &mut memory).await {
            Ok(reply) => print_reply(&reply),
            Err(e) => eprintln!("❌ {e}"),
        }
        println!();
    }

    info!("Chat ended after {} turns", memory.len());
    Ok(())
}

fn handle_config_command(config: &AppConfig) {
    let config = config.redacted();
    println!("📋 ragchat Configuration:");
    println!();

    println!("🌐 Server:");
    println!("  Address: {}", config.bind_address());
    println!("  CORS: {}", config.server.enable_cors);
    println!();

    println!("📝 Logging:");
    println!("  Level: {}", config.logging.level);
    println!("  File output: {}", config.logging.file_output);
    println!();

    println!("🔎 Vectara:");
    println!("  Endpoint: {}", config.vectara.endpoint);
    println!("  Customer ID: {}", config.vectara.customer_id);
    println!("  Corpus ID: {}", config.vectara.corpus_id);
    println!("  API key: {}", config.vectara.api_key);
    println!("  Results per query: {}", config.vectara.num_results);
    println!("  Timeout: {}", describe_timeout(config.vectara.timeout_secs));
    println!();

    println!("🤖 Anthropic:");
    println!("  Endpoint: {}", config.anthropic.endpoint);
    println!("  Model: {}", config.anthropic.model);
    println!("  Max tokens: {}", config.anthropic.max_tokens);
    println!("  API version: {}", config.anthropic.api_version);
    println!("  API key: {}", config.anthropic.api_key);
    println!("  Timeout: {}", describe_timeout(config.anthropic.timeout_secs));
}

fn describe_timeout(timeout_secs: Option<u64>) -> String {
    timeout_secs.map_or_else(|| "none".to_string(), |secs| format!("{secs}s"))
}
