use clap::{ArgAction, Parser};

use deskcalc::{Calculator, Config, repl, ui};

#[derive(Parser, Debug)]
#[command(name = "deskcalc")]
#[command(version, about = "Four-function desk calculator for the terminal")]
struct Cli {
    /// Evaluate a key sequence (e.g. "52+3=") and print the final display
    #[arg(long, short = 'e', value_name = "KEYS")]
    expr: Option<String>,

    /// Write the documented default config file and exit
    #[arg(long, action = ArgAction::SetTrue)]
    init_config: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    log::debug!(
        "deskcalc {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("DESKCALC_GIT_HASH")
    );

    if cli.init_config {
        let path = Config::create_default_file()?;
        println!("Created {}", path.display());
        return Ok(());
    }

    let config = Config::load()?;
    let mut calculator = Calculator::with_defaults(config.display.group_separator);

    if let Some(keys) = cli.expr.as_deref() {
        repl::run_script(&mut calculator, keys)?;
        println!("{}", ui::render_display(&calculator, &config.display));
    } else {
        let stdin = std::io::stdin();
        let stdout = std::io::stdout();
        repl::run_interactive(&mut calculator, &config, stdin.lock(), stdout.lock())?;
    }

    Ok(())
}
