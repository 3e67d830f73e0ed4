//! Interactive bootstrapper for the application's `.env` files.
//!
//! Exit codes: 0 on success or a cancelled run, 1 on any caught error.

use bubbletea_rs::Program;
use stagehand::setup::{Model, Outcome};

#[tokio::main]
async fn main() {
    let program = match Program::<Model>::builder().build() {
        Ok(p) => p,
        Err(e) => {
            eprintln!("setup-env: {e}");
            std::process::exit(1);
        }
    };

    match program.run().await {
        Ok(model) => match model.outcome() {
            Some(Outcome::Completed) => {
                println!(
                    "Wrote {} and {}.",
                    model.backend_env().display(),
                    model.frontend_env().display()
                );
            }
            Some(Outcome::Cancelled) | None => {
                println!("Cancelled, nothing written.");
            }
            Some(Outcome::Failed(e)) => {
                eprintln!("setup-env: {e}");
                std::process::exit(1);
            }
        },
        Err(e) => {
            eprintln!("setup-env: {e}");
            std::process::exit(1);
        }
    }
}
