use markup_fragments::{render_document, FragmentError};
use std::env;
use std::fs;
use std::io;
use std::process;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: fragment-render <file.yaml>...");
        eprintln!();
        eprintln!("Examples:");
        eprintln!("  fragment-render profile-form.yaml");
        eprintln!("  RUST_LOG=debug fragment-render *.yaml");
        process::exit(1);
    }

    let mut exit_code = 0;

    for file_path in &args[1..] {
        match render_file(file_path) {
            Ok(fragments) => {
                for fragment in fragments {
                    println!("{}", fragment);
                }
            }
            Err(e) => {
                eprintln!("✗ {} could not be rendered:", file_path);
                print_error(&e);
                exit_code = 1;
            }
        }
    }

    process::exit(exit_code);
}

fn render_file(path: &str) -> Result<Vec<String>, FragmentError> {
    let content = fs::read_to_string(path)
        .map_err(|e| FragmentError::DeserializationError(format!("Failed to read file: {}", e)))?;
    tracing::debug!(path, bytes = content.len(), "Read fragment document");
    render_document(&content)
}

fn print_error(error: &FragmentError) {
    match error {
        FragmentError::ValidationError { value, reason } => {
            eprintln!("  Validation error:");
            eprintln!("    value '{}' {}", value, reason);
        }
        FragmentError::InvalidDescription { kind, reason } => {
            eprintln!("  Invalid '{}' fragment:", kind);
            eprintln!("    {}", reason);
        }
        FragmentError::DeserializationError(msg) => {
            eprintln!("  Could not read document:");
            eprintln!("    {}", msg);
        }
        FragmentError::EmptyDocument => {
            eprintln!("  Document has no fragments");
        }
    }
}
