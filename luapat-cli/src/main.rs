use clap::{Parser, Subcommand};
use colored::Colorize;
use luapat::Pattern;

#[derive(Parser)]
#[command(name = "luapat")]
#[command(about = "Lua-style pattern matching for byte strings")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check if a pattern matches
    Match {
        /// The pattern
        pattern: String,
        /// The input string
        input: String,
    },
    /// Find the first match and its captures
    Find {
        /// The pattern
        pattern: String,
        /// The input string
        input: String,
        /// Show capture details
        #[arg(short, long)]
        verbose: bool,
    },
    /// Find all non-overlapping matches
    All {
        /// The pattern
        pattern: String,
        /// The input string
        input: String,
    },
    /// Replace matches using a %n template
    Replace {
        /// The pattern
        pattern: String,
        /// The input string
        input: String,
        /// The replacement template (%0..%9, %%)
        template: String,
        /// Maximum number of substitutions
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Match { pattern, input } => cmd_match(&pattern, &input),
        Commands::Find {
            pattern,
            input,
            verbose,
        } => cmd_find(&pattern, &input, verbose),
        Commands::All { pattern, input } => cmd_all(&pattern, &input),
        Commands::Replace {
            pattern,
            input,
            template,
            limit,
        } => cmd_replace(&pattern, &input, &template, limit),
    }
}

fn compile(pattern: &str) -> Pattern {
    match Pattern::new(pattern) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            std::process::exit(1);
        }
    }
}

fn show(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

fn cmd_match(pattern: &str, input: &str) {
    let pat = compile(pattern);
    match pat.is_match(input.as_bytes()) {
        Ok(true) => {
            println!("{}", "true".green());
        }
        Ok(false) => {
            println!("{}", "false".red());
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            std::process::exit(1);
        }
    }
}

fn cmd_find(pattern: &str, input: &str, verbose: bool) {
    let pat = compile(pattern);
    match pat.find(input.as_bytes()) {
        Ok(Some(m)) => {
            println!("{}", "Match found".green().bold());
            println!("  Position: {}..{}", m.start(), m.end());
            println!("  Match:    {}", show(m.as_bytes()).green());
            if verbose {
                println!();
                println!("{}", "Captures:".bold());
                for (i, cap) in m.captures().enumerate() {
                    if cap.is_position() {
                        println!("  [{}] position {}", i, cap.start() + 1);
                    } else {
                        println!(
                            "  [{}] {}..{} = {}",
                            i,
                            cap.start(),
                            cap.start() + cap.len(),
                            show(cap.as_bytes()).green()
                        );
                    }
                }
            }
        }
        Ok(None) => {
            println!("{}", "No match".red());
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            std::process::exit(1);
        }
    }
}

fn cmd_all(pattern: &str, input: &str) {
    let pat = compile(pattern);
    let mut count = 0usize;
    for m in pat.gmatch(input.as_bytes()) {
        match m {
            Ok(m) => {
                count += 1;
                println!(
                    "  [{}] {}..{} = {}",
                    count,
                    m.start(),
                    m.end(),
                    show(m.as_bytes()).green()
                );
            }
            Err(e) => {
                eprintln!("{} {}", "Error:".red().bold(), e);
                std::process::exit(1);
            }
        }
    }
    if count == 0 {
        println!("{}", "No matches found".red());
    } else {
        println!("{} {}", "Total:".bold(), format!("{count} match(es)").green());
    }
}

fn cmd_replace(pattern: &str, input: &str, template: &str, limit: Option<usize>) {
    let pat = compile(pattern);
    match pat.gsub(input.as_bytes(), template.as_bytes(), limit) {
        Ok(out) => println!("{}", show(&out)),
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            std::process::exit(1);
        }
    }
}
