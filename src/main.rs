use anyhow::Result;
use clap::Parser;
use colored::control as color_control;
use confgen::cli::commands::check::{CheckCommand, CheckCommandHandler};
use confgen::cli::commands::generate::{GenerateCommand, GenerateCommandHandler};
use confgen::cli::commands::init::{InitCommand, InitCommandHandler};
use confgen::cli::{Cli, Commands};
use std::env;
use std::process;

fn main() {
    // CLIをパースして実行
    let cli = Cli::parse();

    let result = run_command(cli);

    match result {
        Ok(output) => {
            if !output.is_empty() {
                println!("{}", output);
            }
        }
        Err(e) => {
            eprintln!("Error: {:#}", e);
            process::exit(1);
        }
    }
}

/// コマンドを実行する
fn run_command(cli: Cli) -> Result<String> {
    // --no-color フラグの処理
    if cli.no_color {
        color_control::set_override(false);
    }

    // プロジェクトのルートパスを取得
    let project_path = env::current_dir()?;

    match cli.command {
        Commands::Generate { config, output } => {
            let handler = GenerateCommandHandler::new();
            let command = GenerateCommand {
                project_path,
                config_path: config,
                output_path: output,
            };
            handler.execute(&command)
        }

        Commands::Init { force } => {
            let handler = InitCommandHandler::new();
            let command = InitCommand {
                project_path,
                force,
            };
            handler.execute(&command)?;
            Ok("Created default config file. Please edit it with your settings.".to_string())
        }

        Commands::Check { config } => {
            let handler = CheckCommandHandler::new();
            let command = CheckCommand {
                project_path,
                config_path: config,
            };
            handler.execute(&command)
        }
    }
}
