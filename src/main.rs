use clap::Parser;

mod cli;
mod commands;
mod domain;
mod services;

use cli::Cli;
use services::emitter::EmitError;

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        report_error(cli.json, &e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let config = services::settings::load_config()?;
    commands::handle_runtime_commands(cli, &config)
}

fn error_code(e: &anyhow::Error) -> &'static str {
    if e.downcast_ref::<EmitError>().is_some() {
        "EMIT_FAILED"
    } else if e.downcast_ref::<toml::de::Error>().is_some() {
        "CONFIG_INVALID"
    } else {
        "ERROR"
    }
}

fn report_error(json: bool, e: &anyhow::Error) {
    if json {
        let payload = serde_json::json!({
            "ok": false,
            "error": {
                "code": error_code(e),
                "message": format!("{:#}", e),
            }
        });
        println!("{}", payload);
    } else {
        eprintln!("error: {:#}", e);
    }
}
