use std::io;
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::Context;
use clap::{Arg, Command};
use rustyline::{DefaultEditor, Result as RustyResult};
use tokio::runtime::Runtime;

use legistar::{
    ColorHelper, ColorMode, LegistarClient, LegistarConfig, TOKEN_ENV_VAR,
};

/// Global color helper - will be set at startup
use std::sync::OnceLock;
static COLOR_HELPER: OnceLock<ColorHelper> = OnceLock::new();

/// Helper functions for color formatting
fn color_red_bold(text: &str) -> String {
    COLOR_HELPER.get().map(|h| h.red_bold(text)).unwrap_or_else(|| text.to_string())
}

fn color_green_bold(text: &str) -> String {
    COLOR_HELPER.get().map(|h| h.green_bold(text)).unwrap_or_else(|| text.to_string())
}

fn color_blue_bold(text: &str) -> String {
    COLOR_HELPER.get().map(|h| h.blue_bold(text)).unwrap_or_else(|| text.to_string())
}

fn color_yellow_bold(text: &str) -> String {
    COLOR_HELPER.get().map(|h| h.yellow_bold(text)).unwrap_or_else(|| text.to_string())
}

fn color_cyan(text: &str) -> String {
    COLOR_HELPER.get().map(|h| h.cyan(text)).unwrap_or_else(|| text.to_string())
}

fn color_blue(text: &str) -> String {
    COLOR_HELPER.get().map(|h| h.blue(text)).unwrap_or_else(|| text.to_string())
}

fn color_dimmed(text: &str) -> String {
    COLOR_HELPER.get().map(|h| h.dimmed(text)).unwrap_or_else(|| text.to_string())
}

/// REPL Commands
#[derive(Debug, Clone)]
enum ReplCommand {
    Headers { query: String, save: bool },
    Fetch { query: String },
    Cache { query: String },
    Load { query: String },
    Info,
    Help,
    Quit,
}

impl FromStr for ReplCommand {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.trim().split_whitespace().collect();

        if parts.is_empty() {
            return Err("Empty command".to_string());
        }

        match parts[0].to_lowercase().as_str() {
            "headers" | "columns" | "h" => {
                if parts.len() < 2 {
                    return Err("Usage: headers <query> [--save]".to_string());
                }
                let save = parts.contains(&"--save");
                let query = parts[1..]
                    .iter()
                    .find(|p| !p.starts_with("--"))
                    .ok_or_else(|| "Usage: headers <query> [--save]".to_string())?
                    .to_string();
                Ok(ReplCommand::Headers { query, save })
            }
            "fetch" | "f" => {
                if parts.len() != 2 {
                    return Err("Usage: fetch <query>".to_string());
                }
                Ok(ReplCommand::Fetch {
                    query: parts[1].to_string(),
                })
            }
            "cache" | "save" => {
                if parts.len() != 2 {
                    return Err("Usage: cache <query>".to_string());
                }
                Ok(ReplCommand::Cache {
                    query: parts[1].to_string(),
                })
            }
            "load" | "l" => {
                if parts.len() != 2 {
                    return Err("Usage: load <query>".to_string());
                }
                Ok(ReplCommand::Load {
                    query: parts[1].to_string(),
                })
            }
            "info" | "status" => Ok(ReplCommand::Info),
            "help" | "?" => Ok(ReplCommand::Help),
            "quit" | "exit" | "q" => Ok(ReplCommand::Quit),
            // A bare resource name is the original workflow: ask for a
            // query, answer with its column names
            _ if parts.len() == 1 => Ok(ReplCommand::Headers {
                query: parts[0].to_string(),
                save: false,
            }),
            _ => Err(format!("Unknown command: {}", parts[0])),
        }
    }
}

/// REPL state and logic
struct LegistarRepl {
    client: LegistarClient,
    rt: Runtime,
}

impl LegistarRepl {
    fn new(client: LegistarClient) -> io::Result<Self> {
        let rt = Runtime::new()?;
        Ok(Self { client, rt })
    }

    fn run(&mut self) -> RustyResult<()> {
        println!("{}", color_blue_bold("Legistar dataset explorer"));
        println!(
            "{}",
            color_dimmed("Enter a query (e.g. 'events') to list its columns, 'help' for commands, 'quit' to exit")
        );
        println!();

        let mut rl = DefaultEditor::new()?;

        loop {
            let readline = rl.readline(&format!("{} ", color_green_bold("legistar>")));

            match readline {
                Ok(line) => {
                    let trimmed = line.trim();

                    // Skip empty lines and comments
                    if trimmed.is_empty() || trimmed.starts_with('#') {
                        continue;
                    }

                    rl.add_history_entry(line.as_str())?;

                    match ReplCommand::from_str(&line) {
                        Ok(command) => {
                            if let ReplCommand::Quit = command {
                                println!("Goodbye!");
                                break;
                            }

                            if let Err(e) = self.handle_command(command) {
                                eprintln!("{} {}", color_red_bold("Error:"), e);
                            }
                        }
                        Err(e) => {
                            eprintln!("{} {}", color_red_bold("Invalid command:"), e);
                        }
                    }
                }
                Err(rustyline::error::ReadlineError::Interrupted) => {
                    println!("CTRL-C");
                    break;
                }
                Err(rustyline::error::ReadlineError::Eof) => {
                    println!("CTRL-D");
                    break;
                }
                Err(err) => {
                    eprintln!("Error: {:?}", err);
                    break;
                }
            }
        }

        Ok(())
    }

    fn handle_command(&mut self, command: ReplCommand) -> Result<(), Box<dyn std::error::Error>> {
        if let ReplCommand::Help = command {
            print_repl_help();
            return Ok(());
        }

        execute_command(&self.client, &self.rt, command)?;
        Ok(())
    }
}

fn print_repl_help() {
    println!("\n{}", color_blue_bold("Available Commands"));
    println!();

    let commands = vec![
        ("headers <query> [--save]", "List a dataset's column names", "headers events"),
        ("fetch <query>", "Fetch a dataset and print its JSON", "fetch bodies"),
        ("cache <query>", "Fetch and persist a dataset to <query>.txt", "cache events"),
        ("load <query>", "List columns of a cached <query>.txt", "load events"),
        ("info", "Show session information", "info"),
        ("help", "Show this help message", "help"),
        ("quit", "Exit the prompt", "quit"),
    ];

    for (cmd, desc, example) in commands {
        println!("{:28} {}", color_green_bold(cmd), desc);
        println!("{:28} {}: {}", "", color_dimmed("Example"), color_blue(example));
        println!();
    }

    println!("{}", color_yellow_bold("Tips:"));
    println!("  - A bare resource name is shorthand for 'headers <name>'");
    println!("  - Nested segments work too: {}", color_blue("headers events/1234/eventitems"));
    println!("  - 'headers --save' keeps the fetched JSON in <query>.txt");
    println!();
}

fn main() -> anyhow::Result<()> {
    let app = Command::new("legistar")
        .about("Fetch Legistar legislative datasets and inspect their columns")
        .version("0.1")
        .arg(
            Arg::new("site")
                .long("site")
                .short('s')
                .value_name("SITE")
                .help("Legistar site identifier (the {client} path segment)")
                .default_value("nyc"),
        )
        .arg(
            Arg::new("token")
                .long("token")
                .value_name("TOKEN")
                .help(format!(
                    "API access token (falls back to the {} environment variable)",
                    TOKEN_ENV_VAR
                )),
        )
        .arg(
            Arg::new("cache-dir")
                .long("cache-dir")
                .short('d')
                .value_name("DIR")
                .help("Directory for cached <query>.txt files")
                .default_value("."),
        )
        .arg(
            Arg::new("color")
                .long("color")
                .value_name("WHEN")
                .help("Control color output")
                .value_parser(["auto", "always", "never"])
                .default_value("auto"),
        )
        .arg(
            Arg::new("command")
                .help("Command to execute (if omitted, starts an interactive prompt)")
                .value_name("COMMAND")
                .index(1),
        )
        .arg(
            Arg::new("args")
                .help("Arguments for the command")
                .value_name("ARGS")
                .num_args(0..)
                .allow_hyphen_values(true)
                .index(2),
        )
        .after_help(
            "EXAMPLES:\n\
             Interactive prompt:\n\
             \x20 legistar\n\n\
             CLI mode:\n\
             \x20 legistar headers events\n\
             \x20 legistar fetch bodies\n\
             \x20 legistar cache events\n\
             \x20 legistar load events\n\
             \x20 legistar --site seattle headers matters\n\n\
             Available commands:\n\
             \x20 headers <query> [--save]  List a dataset's column names\n\
             \x20 fetch <query>             Fetch a dataset and print its JSON\n\
             \x20 cache <query>             Fetch and persist to <query>.txt\n\
             \x20 load <query>              List columns of a cached file\n\
             \x20 info                      Show client info",
        );

    let matches = app.get_matches();

    // Build configuration
    let mut config = LegistarConfig::default();

    if let Some(site) = matches.get_one::<String>("site") {
        config = config.with_site(site);
    }

    let token = matches
        .get_one::<String>("token")
        .cloned()
        .or_else(|| std::env::var(TOKEN_ENV_VAR).ok());
    if let Some(token) = token {
        config = config.with_token(token);
    }

    if let Some(cache_dir) = matches.get_one::<String>("cache-dir") {
        config = config.with_cache_dir(PathBuf::from(cache_dir));
    }

    // Parse color mode
    if let Some(color_str) = matches.get_one::<String>("color") {
        if let Ok(color_mode) = color_str.parse::<ColorMode>() {
            config = config.with_color_mode(color_mode);
        } else {
            eprintln!("Warning: Invalid color mode '{}', using 'auto'", color_str);
        }
    }

    // Set global color helper
    let color_helper = ColorHelper::new(config.color_mode);
    COLOR_HELPER
        .set(color_helper)
        .map_err(|_| anyhow::anyhow!("Failed to set color helper"))?;

    let client = LegistarClient::with_config(config).context("failed to create client")?;

    if let Some(command) = matches.get_one::<String>("command") {
        // CLI mode - execute single command and exit
        run_cli_mode(client, command, &matches)?;
    } else {
        // Interactive prompt
        let mut repl = LegistarRepl::new(client)?;
        repl.run()?;
    }

    Ok(())
}

/// Run a single command in CLI mode
fn run_cli_mode(
    client: LegistarClient,
    command: &str,
    matches: &clap::ArgMatches,
) -> anyhow::Result<()> {
    let rt = Runtime::new()?;

    // Collect additional arguments
    let args: Vec<&String> = matches.get_many::<String>("args").unwrap_or_default().collect();

    // Build command string
    let mut cmd_parts = vec![command];
    cmd_parts.extend(args.iter().map(|s| s.as_str()));
    let full_command = cmd_parts.join(" ");

    // Parse the command
    let repl_command = match ReplCommand::from_str(&full_command) {
        Ok(cmd) => cmd,
        Err(e) => {
            eprintln!("{} {}", color_red_bold("Error:"), e);
            eprintln!("Use --help to see available commands and examples");
            std::process::exit(1);
        }
    };

    // Execute the command using the same logic as the prompt
    if let Err(e) = execute_command(&client, &rt, repl_command) {
        eprintln!("{} {}", color_red_bold("Error:"), e);
        std::process::exit(1);
    }

    Ok(())
}

/// Report a rejected query the way the original tool did, then pass the
/// error along for exit-code handling
fn report_rejected_query(error: legistar::LegistarError) -> legistar::LegistarError {
    if error.is_rejected_query() {
        eprintln!("{}", color_red_bold("Invalid query. Not accessible."));
    }
    error
}

/// Execute a command (shared between prompt and CLI modes)
fn execute_command(
    client: &LegistarClient,
    rt: &Runtime,
    command: ReplCommand,
) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        ReplCommand::Headers { query, save } => {
            let columns = if save {
                rt.block_on(client.cached_headers(&query))
                    .map_err(report_rejected_query)?
            } else {
                rt.block_on(client.headers(&query))
                    .map_err(report_rejected_query)?
            };

            if columns.is_empty() {
                eprintln!("{} '{}' returned no records", color_dimmed("note:"), query);
            }
            for column in columns {
                println!("{}", column);
            }
        }

        ReplCommand::Fetch { query } => {
            let value = rt
                .block_on(client.fetch(&query))
                .map_err(report_rejected_query)?;
            println!("{}", serde_json::to_string_pretty(&value)?);
        }

        ReplCommand::Cache { query } => {
            let (value, path) = rt
                .block_on(client.cache(&query))
                .map_err(report_rejected_query)?;

            let records = value.as_array().map(|a| a.len());
            match records {
                Some(n) => println!(
                    "{} Cached {} records to {}",
                    color_green_bold("Success!"),
                    n,
                    color_blue(&path.display().to_string())
                ),
                None => println!(
                    "{} Cached payload to {}",
                    color_green_bold("Success!"),
                    color_blue(&path.display().to_string())
                ),
            }
        }

        ReplCommand::Load { query } => {
            let frame = rt.block_on(client.load_cached(&query))?;

            eprintln!(
                "{} {} rows, {} columns",
                color_cyan("Loaded"),
                frame.len(),
                frame.columns().len()
            );
            for column in frame.columns() {
                println!("{}", column);
            }
        }

        ReplCommand::Info => {
            println!("\n{}", color_blue_bold("Client Information"));
            println!("Endpoint:  {}", color_blue(client.base_url()));
            println!("Site:      {}", color_blue(client.site()));
            println!("Token:     {}", if client.has_token() { "configured" } else { "none" });
            println!("Cache dir: {}", color_blue(&client.cache_dir().display().to_string()));
        }

        ReplCommand::Help => {
            print_repl_help();
        }

        ReplCommand::Quit => {
            // Not applicable in CLI mode
        }
    }

    Ok(())
}
