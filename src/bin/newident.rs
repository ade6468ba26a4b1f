use std::io::{self, Write};

use clap::Parser;
use identrs::ident;

#[derive(Parser)]
#[command(name = "newident")]
#[command(about = "Prompt for a string and print its compressed hex blob for embedding as b_ident")]
struct Cli {}

fn main() {
    let _cli = Cli::parse();

    print!("Enter the string to encode for b_ident: ");
    if let Err(e) = io::stdout().flush() {
        eprintln!("Error writing prompt: {}", e);
        return;
    }

    // One line of input; EOF before any newline reads as the empty string,
    // which is a valid ident.
    let mut line = String::new();
    if let Err(e) = io::stdin().read_line(&mut line) {
        eprintln!("Error reading input: {}", e);
        return;
    }
    let plaintext = line.trim_end_matches(['\r', '\n']);

    match ident::encode(plaintext) {
        Ok(blob) => println!("Encoded string to replace b_ident: {}", blob),
        Err(e) => eprintln!("Error encoding ident: {}", e),
    }
}
