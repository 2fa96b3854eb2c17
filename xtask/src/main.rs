use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use std::process::{Command, Stdio};

#[derive(Parser)]
#[command(author, version, about = "Workspace automation tasks", long_about = None)]
struct Cli {
    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Subcommand)]
enum Cmd {
    /// fmt + clippy -D warnings + tests (workspace)
    Ci,
    /// Validate shipped config data against the serde models
    SchemaCheck,
}

fn run(cmd: &mut Command) -> Result<()> {
    let status = cmd.status().context("spawn")?;
    if !status.success() {
        bail!("command failed: {:?}", cmd);
    }
    Ok(())
}

fn cargo(args: &[&str]) -> Result<()> {
    let mut c = Command::new("cargo");
    c.args(args)
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit());
    run(&mut c)
}

fn ci() -> Result<()> {
    cargo(&["fmt", "--all"])?;
    cargo(&["clippy", "--all-targets", "--", "-D", "warnings"])?;
    cargo(&["test"])?;
    schema_check()?;
    Ok(())
}

fn schema_check() -> Result<()> {
    let weapons =
        data_runtime::weapons::WeaponCatalog::load_default().context("validate weapons config")?;
    let arena = data_runtime::arena::ArenaCfg::load_default().context("validate arena config")?;
    data_runtime::rules::MatchRules::load_default().context("validate match rules config")?;
    data_runtime::input::InputCfg::load_default().context("validate input config")?;
    println!(
        "xtask: configs ok ({} weapons, {} walls, {} climb volumes)",
        weapons.weapons.len(),
        arena.walls.len(),
        arena.climbs.len()
    );
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Cmd::Ci => ci(),
        Cmd::SchemaCheck => schema_check(),
    }
}
