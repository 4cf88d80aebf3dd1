use crate::cli::{Cli, Commands};
use crate::domain::models::{ConfigFile, EmitReport, JsonOut};
use crate::services::emitter;
use crate::services::inspect;
use crate::services::output::print_one;
use crate::services::settings::resolve_maintainer;

pub fn handle_runtime_commands(cli: &Cli, config: &ConfigFile) -> anyhow::Result<()> {
    match &cli.command {
        Commands::Emit { maintainer } => {
            let value = resolve_maintainer(maintainer.as_deref(), config);
            emitter::emit(value, &cli.base_dir)?;
            let report = EmitReport {
                path: emitter::marker_path(&cli.base_dir)
                    .to_string_lossy()
                    .to_string(),
                maintainer: value.unwrap_or("").to_string(),
                status: "written".to_string(),
            };
            print_one(cli.json, report, |r| format!("wrote {}", r.path))?;
        }
        Commands::Show => {
            let info = inspect::read_marker(&cli.base_dir)?;
            if cli.json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&JsonOut {
                        ok: true,
                        data: info
                    })?
                );
            } else {
                println!("path: {}", info.path);
                println!("content: {}", info.content);
            }
        }
        Commands::Check { maintainer } => {
            let value = resolve_maintainer(maintainer.as_deref(), config);
            let report = inspect::check_marker(&cli.base_dir, value);
            let ok = report.status == "ok";
            if cli.json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&JsonOut { ok, data: report })?
                );
            } else {
                println!("{}\t{}", report.path, report.status);
            }
            if !ok {
                std::process::exit(1);
            }
        }
    }
    Ok(())
}
