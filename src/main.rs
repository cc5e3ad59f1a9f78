use clap::Parser;

use crate::cli::Cli;
use emoji_app_icon::error::Error;
use emoji_app_icon::run;

mod cli;

fn main() {
    let cli = Cli::parse();

    if let Err(error) = run(cli.into()) {
        match error.downcast_ref::<Error>() {
            Some(Error::MissingArgument) => {
                println!("Please provide the emoji filename as an argument");
                println!("Example: emoji_app_icon reshot-icon-cat-BZV4EQRNPJ");
            }
            Some(Error::InputNotFound { name, .. }) => {
                println!("Error: Could not find emoji '{name}' in the Resources directory");
                println!("Please provide the emoji filename (e.g. reshot-icon-cat-BZV4EQRNPJ)");
            }
            _ => println!("Error processing image: {error:#}"),
        }
        std::process::exit(1);
    }
}
