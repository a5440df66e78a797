// Interactive autocomplete simulator.
// Run with: cargo run --bin simulator
use autocomplete_core::AutocompleteProvider;
use crossterm::style::Stylize;
use std::io::{stdin, stdout, Write};

fn main() {
    let mut provider = AutocompleteProvider::new();

    println!("{}", "Autocomplete Simulator".bold());
    println!("---------------------------------------------------------------");
    println!("Type a passage to train on it.");
    println!("Type '?frag' to see completions for a fragment. 'exit' to quit.\n");

    loop {
        print!("{} ", ">".green());
        if stdout().flush().is_err() {
            break;
        }
        let mut input = String::new();
        if stdin().read_line(&mut input).is_err() {
            break;
        }
        let line = input.trim();

        match line {
            "exit" => break,
            "" => continue,
            fragment if fragment.starts_with('?') => {
                let completions = provider.query(&fragment[1..]);
                if completions.is_empty() {
                    println!("{}", "(no completions)".dark_grey());
                } else {
                    for (i, c) in completions.iter().enumerate() {
                        println!("  {}: {} ({})", i + 1, c.word.clone().bold(), c.occurrence_count);
                    }
                }
            }
            passage => {
                provider.train(passage);
                println!(
                    "{} {} distinct tokens known",
                    "trained.".dark_grey(),
                    provider.token_count()
                );
            }
        }
    }
}
