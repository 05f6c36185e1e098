use clap::Parser;

mod cli;
mod commands;
mod domain;
mod services;

use cli::Cli;

fn main() {
    let cli = Cli::parse();
    match commands::run_audit(&cli) {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            if cli.json {
                let out = serde_json::json!({
                    "ok": false,
                    "error": { "code": "AUDIT_ERROR", "message": format!("{err:#}") }
                });
                println!("{out:#}");
            } else {
                eprintln!("error: {err:#}");
            }
            std::process::exit(1);
        }
    }
}
