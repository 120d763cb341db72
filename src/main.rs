mod cli;
mod installer;
mod sketch;

use anyhow::Result;
use clap::Parser;
use colored::*;
use cli::Cli;
use installer::Installer;

fn real_main(cli: Cli) -> Result<()> {
    let installer = Installer::new(&cli.base_dir);
    if cli.list {
        let sketches = installer.list_sketches()?;
        if sketches.is_empty() {
            println!("{}", "No example sketches found.".yellow());
            return Ok(());
        }
        println!("{}", "Available examples".bold().underline().yellow());
        for sketch in &sketches {
            println!(
                "  {}  {}",
                sketch.name.green(),
                sketch.path.display().to_string().cyan()
            );
        }
        return Ok(());
    }
    let Some(name) = cli.example.as_deref() else {
        unreachable!("clap requires the example name whenever --list is absent");
    };
    installer.install(name)?;
    println!("{}", "Success.".green());
    Ok(())
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            std::process::exit(if err.use_stderr() { 1 } else { 0 });
        }
    };
    match real_main(cli) {
        Ok(()) => {}
        Err(e) => {
            eprintln!("{} {}", "Error:".red(), e);
            std::process::exit(1);
        }
    }
}
