use clap::{CommandFactory, Parser};
use colored::*;
use console::Term;
use std::path::{Path, PathBuf};
use wordbook::api::WordbookApi;
use wordbook::commands::learn::Interaction;
use wordbook::commands::{CmdMessage, MessageLevel};
use wordbook::config::WordbookConfig;
use wordbook::error::{Result, WordbookError};
use wordbook::git::GitSink;
use wordbook::model::Explanation;
use wordbook::notebook::Notebook;
use wordbook::provider::gemini::GeminiClient;

mod args;
use args::{Cli, Commands};

const INFO: &str = "\
Wordbook - English Word Learning Tool

Features:
• AI-generated word explanations using Google Gemini
• Chinese translations and phonetic symbols
• Example sentences in both English and Chinese
• Automatic git commit (and optional push) for every saved word
• Markdown-formatted word book

Usage:
  wordbook <word>           Learn a new word
  wordbook <word> --raw     Print the explanation and exit
  wordbook save <content>   Save content without querying the API
  wordbook test             Test the API connection
  wordbook init             Configure API key, notebook and remote
  wordbook info             Show this information";

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {}", "Error:".red(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Test) => handle_test(),
        Some(Commands::Info) => handle_info(),
        Some(Commands::Init) => handle_init(),
        Some(Commands::Save { content }) => handle_save(&content),
        None => match cli.word {
            Some(word) => handle_learn(&word, cli.raw),
            None => {
                Cli::command().print_help()?;
                Ok(())
            }
        },
    }
}

fn handle_learn(word: &str, raw: bool) -> Result<()> {
    let term = Term::stdout();
    let config = load_config_or_setup(&term)?;
    let api = build_api(&config)?;

    if raw {
        let explanation = api.explain_raw(word)?;
        println!("{}", explanation.as_str());
        return Ok(());
    }

    let mut ui = TermInteraction { term };
    api.learn(&mut ui, word)?;
    Ok(())
}

fn handle_save(content: &str) -> Result<()> {
    let term = Term::stdout();
    let config = load_config_or_setup(&term)?;
    let api = build_api(&config)?;
    let mut ui = TermInteraction { term };
    api.save_entry(&mut ui, content)
}

fn handle_test() -> Result<()> {
    let term = Term::stdout();
    let config = load_config_or_setup(&term)?;
    let api = build_api(&config)?;

    println!("Testing Gemini API connection...");
    if api.test_connection()? {
        println!("{}", "Gemini API connection successful".green());
        Ok(())
    } else {
        Err(WordbookError::Provider(
            "Gemini API connection failed".to_string(),
        ))
    }
}

fn handle_info() -> Result<()> {
    println!("{}", INFO.cyan());
    let config = WordbookConfig::load_lenient()?;
    println!();
    println!("Notebook file: {}", config.notebook_file.display());
    println!(
        "Config file:   {}",
        WordbookConfig::env_file_path()?.display()
    );
    Ok(())
}

fn handle_init() -> Result<()> {
    let term = Term::stdout();
    run_setup(&term)
}

fn build_api(config: &WordbookConfig) -> Result<WordbookApi<GeminiClient, GitSink>> {
    let provider = GeminiClient::new(config.gemini_api_key.clone(), &config.gemini_model)?;
    let notebook = Notebook::new(config.notebook_file.clone());
    let repo_dir = config
        .notebook_file
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."));
    let vcs = GitSink::new(repo_dir, config.git_remote_url.clone());
    Ok(WordbookApi::new(provider, notebook, vcs))
}

/// Load the configuration; when the API key is missing and we are on a real
/// terminal, offer to run setup and retry once.
fn load_config_or_setup(term: &Term) -> Result<WordbookConfig> {
    match WordbookConfig::load() {
        Err(WordbookError::Config(reason)) if term.is_term() => {
            println!("{}", reason.yellow());
            let answer = prompt_with_default(term, "Run setup now? (y/n)", "y")?;
            if !answer.to_ascii_lowercase().starts_with('y') {
                return Err(WordbookError::Config(reason));
            }
            run_setup(term)?;
            WordbookConfig::load()
        }
        other => other,
    }
}

fn run_setup(term: &Term) -> Result<()> {
    let current = WordbookConfig::load_lenient()?;

    println!("{}", "Wordbook configuration".cyan().bold());
    println!("Get a Gemini API key at: https://aistudio.google.com/app/apikey");
    println!();

    let api_key = if current.gemini_api_key.is_empty() {
        prompt_secret(term, "Gemini API key")?
    } else {
        let shown: String = current.gemini_api_key.chars().take(4).collect();
        println!("An API key is already configured ({}...).", shown);
        let replacement = prompt_secret(term, "New Gemini API key (leave empty to keep)")?;
        if replacement.is_empty() {
            current.gemini_api_key.clone()
        } else {
            replacement
        }
    };
    if api_key.is_empty() {
        return Err(WordbookError::Config(
            "an API key is required; setup aborted".to_string(),
        ));
    }

    let model = prompt_with_default(term, "Gemini model", &current.gemini_model)?;
    let notebook = prompt_with_default(
        term,
        "Notebook file",
        &current.notebook_file.display().to_string(),
    )?;
    let remote = prompt_with_default(
        term,
        "Git remote URL (leave empty to disable push)",
        current.git_remote_url.as_deref().unwrap_or(""),
    )?;

    let config = WordbookConfig {
        gemini_api_key: api_key,
        gemini_model: model,
        notebook_file: PathBuf::from(notebook),
        git_remote_url: if remote.is_empty() { None } else { Some(remote) },
    };
    config.save()?;
    println!(
        "{} {}",
        "Configuration saved to".green(),
        WordbookConfig::env_file_path()?.display()
    );
    Ok(())
}

fn prompt_with_default(term: &Term, label: &str, default: &str) -> Result<String> {
    if default.is_empty() {
        term.write_str(&format!("{}: ", label))?;
    } else {
        term.write_str(&format!("{} [{}]: ", label, default))?;
    }
    let input = term.read_line()?;
    let trimmed = input.trim();
    Ok(if trimmed.is_empty() {
        default.to_string()
    } else {
        trimmed.to_string()
    })
}

fn prompt_secret(term: &Term, label: &str) -> Result<String> {
    term.write_str(&format!("{}: ", label))?;
    Ok(term.read_secure_line()?.trim().to_string())
}

struct TermInteraction {
    term: Term,
}

impl Interaction for TermInteraction {
    fn present(&mut self, explanation: &Explanation) {
        let rule = "=".repeat(50);
        println!();
        println!("{}", "Word explanation:".bold());
        println!("{}", rule.blue());
        println!("{}", explanation.as_str());
        println!("{}", rule.blue());
    }

    fn preview(&mut self, shown: &[&str], hidden: usize) {
        let rule = "=".repeat(50);
        println!();
        println!("{}", "Preview of what will be saved:".bold());
        println!("{}", rule.blue());
        for line in shown {
            println!("{}", line);
        }
        if hidden > 0 {
            println!("{}", format!("... and {} more lines", hidden).dimmed());
        }
        println!("{}", rule.blue());
    }

    fn prompt_action(&mut self) -> Result<String> {
        println!();
        println!("Choose an action:");
        println!("  {} - save to the notebook", "s".green());
        println!("  {} - regenerate the explanation", "r".yellow());
        println!("  {} - preview what will be saved", "p".blue());
        println!("  {} - skip this word", "k".red());
        self.term.write_str("> ")?;
        Ok(self.term.read_line()?)
    }

    fn message(&mut self, message: CmdMessage) {
        print_message(&message);
    }
}

fn print_message(message: &CmdMessage) {
    match message.level {
        MessageLevel::Info => println!("{}", message.content.dimmed()),
        MessageLevel::Success => println!("{}", message.content.green()),
        MessageLevel::Warning => println!("{}", message.content.yellow()),
        MessageLevel::Error => eprintln!("{}", message.content.red()),
    }
}
