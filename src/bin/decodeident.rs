use clap::Parser;
use identrs::ident;

#[derive(Parser)]
#[command(name = "decodeident")]
#[command(about = "Decode the embedded b_ident blob and print the plaintext")]
struct Cli {}

fn main() {
    let _cli = Cli::parse();

    // Failures surface as the printed message, not the exit code.
    println!("{}", ident::decode_or_message(ident::B_IDENT));
}
