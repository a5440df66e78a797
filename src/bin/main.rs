use autocomplete_core::fixture::{self, OutputFormat};
use autocomplete_core::AutocompleteProvider;
use std::fs::File;
use std::io::{self, BufReader};

const DEFAULT_FIXTURE: &str = "fixtures/keyboard-input00.txt";

/// Runs a fixture file through the autocomplete provider and prints the
/// transcript. Usage: `autocomplete_demo [--json] [fixture-path]`.
fn main() -> io::Result<()> {
    let mut format = OutputFormat::Plain;
    let mut path = DEFAULT_FIXTURE.to_string();
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--json" => format = OutputFormat::Json,
            other => path = other.to_string(),
        }
    }

    let file = File::open(&path)?;
    let mut provider = AutocompleteProvider::new();
    let mut stdout = io::stdout();
    fixture::run(&mut provider, BufReader::new(file), &mut stdout, format)
}
