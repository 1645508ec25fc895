//! `textpilot` 바이너리 진입점.

use textpilot::interface::cli::{AppComposition, Cli, execute};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let invocation = Cli::parse_invocation();
    let composition = AppComposition::new(invocation.settings_path);

    match execute(&composition, invocation.action) {
        Ok(json) => println!("{json}"),
        Err(err) => {
            eprintln!("error: {err:#}");
            std::process::exit(1);
        }
    }
}
