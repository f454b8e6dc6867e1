//! `launchset` 바이너리 진입점.

use launchset::interface::cli::{Cli, CliAction};
use launchset::interface::composition::AppComposition;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let action = Cli::parse_action();
    let composition = AppComposition::default();

    let result = match action {
        CliAction::InspectConfig => composition
            .inspect_config_usecase()
            .execute()
            .map(|json| println!("{json}")),
        CliAction::Show(options) => composition
            .show_launch_usecase()
            .execute(options)
            .map(|rendered| println!("{rendered}")),
        CliAction::Set(options) => composition
            .set_launch_usecase()
            .execute(options)
            .map(|_| ()),
    };

    if let Err(err) = result {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}
