use clap::Parser;
use miette::{IntoDiagnostic, Result, WrapErr};
use sln2cc_solution::{compile_commands, Solution};
use sln2cc_vcxproj::{MsvcSanitizer, VcxProject};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "sln2cc")]
#[command(author, version, about = "Generate compile_commands.json from a Visual Studio solution")]
struct Cli {
    /// Path to the .sln file
    solution: PathBuf,

    /// Solution configuration to generate for, e.g. "Debug|x64"
    #[arg(short, long)]
    config: String,

    /// Output file path; prints to stdout when omitted
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let solution = Solution::load(&cli.solution, |path| {
        VcxProject::load(path).map_err(Into::into)
    })
    .into_diagnostic()
    .wrap_err_with(|| format!("Failed to load solution {}", cli.solution.display()))?;

    let commands = compile_commands(&solution, &cli.config, &MsvcSanitizer).into_diagnostic()?;

    let json = serde_json::to_string_pretty(&commands).into_diagnostic()?;
    match &cli.output {
        Some(path) => {
            std::fs::write(path, json)
                .into_diagnostic()
                .wrap_err_with(|| format!("Failed to write {}", path.display()))?;
            eprintln!(
                "Wrote {} compile commands to {}",
                commands.len(),
                path.display()
            );
        }
        None => println!("{json}"),
    }

    Ok(())
}
