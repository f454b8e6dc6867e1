//! CLI 명령 파싱 모듈.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::domain::params::{LaunchParams, RunOptions};

#[derive(Debug, Parser)]
#[command(name = "launchset", version)]
#[command(about = "Generate or update the editor debugger launch configuration")]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Module to launch (dotted path); use `--module` for a module named `show` or `config`
    module: Option<String>,

    /// Module to launch, same as the positional MODULE
    #[arg(long = "module", value_name = "MODULE", conflicts_with = "module")]
    module_flag: Option<String>,

    /// Directory that holds the virtual environment (`~` is expanded)
    #[arg(long)]
    env_root: Option<String>,

    /// Virtual environment name; resolved as `<env-root>/.<env-name>`
    #[arg(long)]
    env_name: Option<String>,

    /// Python executable name inside the environment
    #[arg(long)]
    python: Option<String>,

    /// launch.json path to create or update
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Ignore settings files and built-in defaults (except the launch.json path)
    #[arg(short = 'D', long = "disable-user-defaults", global = true)]
    disable_user_defaults: bool,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Print the current launch.json
    Show,
    /// Show effective settings, their sources and the searched settings files
    Config,
}

pub enum CliAction {
    Set(RunOptions),
    Show(RunOptions),
    InspectConfig,
}

impl Cli {
    pub fn parse_action() -> CliAction {
        Cli::parse().into_action()
    }

    fn into_action(self) -> CliAction {
        let options = RunOptions {
            launch_json: self.config,
            params: LaunchParams {
                module: self.module_flag.or(self.module),
                env_root: self.env_root,
                env_name: self.env_name,
                interpreter: self.python,
            },
            use_defaults: !self.disable_user_defaults,
        };

        match self.command {
            Some(Commands::Config) => CliAction::InspectConfig,
            Some(Commands::Show) => CliAction::Show(options),
            None => CliAction::Set(options),
        }
    }
}
