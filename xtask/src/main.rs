//! Build automation tasks for the shift-clock project.
//!
//! Run with: `cargo xtask <command>`

use clap::{Parser, Subcommand};
use owo_colors::OwoColorize;
use std::process::{Command, ExitCode};

/// The words the demo must print for 12:34.
const REFERENCE_12_34: &str = "\
0010111011101010
0010001000101010
0010111011101110
0010100000100010
0010111011100010
";

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Build automation for shift-clock project", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run all checks: host tests, no_std build, docs, demo output
    CheckAll,
    /// Build the library for a bare-metal target
    Build {
        #[arg(long, default_value = "arm")]
        arch: Arch,
        /// Enable defmt logging
        #[arg(long)]
        defmt: bool,
    },
    /// Run the demo for a time
    Demo {
        #[arg(long, default_value_t = 12)]
        hours: u8,
        #[arg(long, default_value_t = 34)]
        minutes: u8,
        /// Also draw the lit LEDs
        #[arg(long)]
        preview: bool,
    },
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum Arch {
    Arm,
    Riscv,
}

impl std::fmt::Display for Arch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Arch::Arm => write!(f, "arm"),
            Arch::Riscv => write!(f, "riscv"),
        }
    }
}

impl Arch {
    fn target(self) -> &'static str {
        match self {
            Arch::Arm => "thumbv6m-none-eabi",
            Arch::Riscv => "riscv32imac-unknown-none-elf",
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command {
        Commands::CheckAll => check_all(),
        Commands::Build { arch, defmt } => build_lib(arch, defmt),
        Commands::Demo {
            hours,
            minutes,
            preview,
        } => run_demo(hours, minutes, preview),
    }
}

fn check_all() -> ExitCode {
    let workspace_root = workspace_root();

    println!("{}", "==> Running host tests...".cyan());
    if !run_command(
        Command::new("cargo")
            .current_dir(&workspace_root)
            .args(["test", "--package", "shift-clock"]),
    ) {
        return ExitCode::FAILURE;
    }

    for arch in [Arch::Arm, Arch::Riscv] {
        println!(
            "\n{}",
            format!("==> Building no_std library ({arch}, defmt)...").cyan()
        );
        if !cross_build(arch, true) {
            return ExitCode::FAILURE;
        }
    }

    println!("\n{}", "==> Checking demo output against reference...".cyan());
    let output = Command::new("cargo")
        .current_dir(&workspace_root)
        .env("DEMO_HOURS", "12")
        .env("DEMO_MINUTES", "34")
        .args([
            "run",
            "--quiet",
            "--example",
            "clock_words",
            "--features",
            "host",
        ])
        .output();
    match output {
        Ok(output) if output.status.success() => {
            let stdout = String::from_utf8_lossy(&output.stdout);
            if stdout != REFERENCE_12_34 {
                eprintln!("{}", "Demo output differs from reference:".red());
                eprintln!("{stdout}");
                return ExitCode::FAILURE;
            }
        }
        Ok(output) => {
            eprintln!("{}", String::from_utf8_lossy(&output.stderr).red());
            return ExitCode::FAILURE;
        }
        Err(e) => {
            eprintln!("{}", format!("Failed to execute command: {e}").red());
            return ExitCode::FAILURE;
        }
    }

    println!("\n{}", "==> Building documentation...".cyan());
    if !run_command(Command::new("cargo").current_dir(&workspace_root).args([
        "doc",
        "--package",
        "shift-clock",
        "--no-deps",
    ])) {
        return ExitCode::FAILURE;
    }

    println!("\n{}", "==> All checks passed!".green().bold());
    ExitCode::SUCCESS
}

fn build_lib(arch: Arch, defmt: bool) -> ExitCode {
    if cross_build(arch, defmt) {
        println!("{}", "Build successful!".green());
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn cross_build(arch: Arch, defmt: bool) -> bool {
    let workspace_root = workspace_root();
    let target = arch.target();
    println!(
        "{}",
        format!("Building library for {target} (defmt: {defmt})").cyan()
    );

    let mut cmd = Command::new("cargo");
    cmd.current_dir(&workspace_root).args([
        "build",
        "--package",
        "shift-clock",
        "--lib",
        "--target",
        target,
    ]);
    if defmt {
        cmd.args(["--features", "defmt"]);
    }
    run_command(&mut cmd)
}

fn run_demo(hours: u8, minutes: u8, preview: bool) -> ExitCode {
    let workspace_root = workspace_root();
    let hours = hours.to_string();
    let minutes = minutes.to_string();

    let mut cmd = Command::new("cargo");
    cmd.current_dir(&workspace_root).args([
        "run",
        "--quiet",
        "--example",
        "clock_words",
        "--features",
        "host",
        "--",
        "--hours",
        hours.as_str(),
        "--minutes",
        minutes.as_str(),
    ]);
    if preview {
        cmd.arg("--preview");
    }

    if run_command(&mut cmd) {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn workspace_root() -> std::path::PathBuf {
    // `cargo xtask` runs from the workspace root
    std::env::current_dir().expect("Failed to get current directory")
}

fn run_command(cmd: &mut Command) -> bool {
    match cmd.status() {
        Ok(status) => status.success(),
        Err(e) => {
            eprintln!("{}", format!("Failed to execute command: {e}").red());
            false
        }
    }
}
