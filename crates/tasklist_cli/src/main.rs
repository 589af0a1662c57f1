use clap::{CommandFactory, Parser};
use std::io::{self, BufRead, Write};
use tasklist_cli::cli::{Cli, ConfigOverrideTarget, SessionLine, parse_config_override};
use tasklist_cli::session::{Session, normalize_parse_error};
use tasklist_core::config::{
    Config, ConfigOverrides, Language, Theme, load_config_with_fallback, merge_overrides,
};
use tasklist_core::error::AppError;

fn print_help() {
    let mut cmd = SessionLine::command();
    let help = cmd.render_help();
    println!("{help}");
}

fn collect_overrides(cli: &Cli) -> Result<ConfigOverrides, AppError> {
    let mut overrides = ConfigOverrides::default();
    for raw in &cli.config_override {
        let parsed = parse_config_override(raw).map_err(AppError::invalid_input)?;
        match parsed.target {
            ConfigOverrideTarget::Theme => overrides.theme = Some(parsed.value),
            ConfigOverrideTarget::Language => overrides.language = Some(parsed.value),
            ConfigOverrideTarget::Alias(name) => {
                overrides.aliases.insert(name, parsed.value);
            }
        }
    }

    // Dedicated flags win over generic overrides.
    if let Some(theme) = cli.theme.as_deref() {
        overrides.theme = Some(Theme::from_name(theme)?.as_str().to_string());
    }
    if let Some(language) = cli.language.as_deref() {
        overrides.language = Some(Language::from_name(language)?.as_str().to_string());
    }

    Ok(overrides)
}

fn resolve_config(cli: &Cli) -> Result<Config, AppError> {
    let loaded = load_config_with_fallback();
    if let Some(err) = loaded.error {
        log::warn!("ignoring configuration: {err}");
    }

    let overrides = collect_overrides(cli)?;
    Ok(merge_overrides(&loaded.config, &overrides))
}

fn run_interactive(session: &mut Session) -> Result<(), AppError> {
    let mut input = String::new();
    let stdin = io::stdin();
    let mut stdin_lock = stdin.lock();
    let mut stdout = io::stdout();

    writeln!(stdout, "{}", session.view())?;

    loop {
        input.clear();
        let bytes = stdin_lock.read_line(&mut input)?;

        if bytes == 0 {
            break;
        }

        let line = input.trim();
        if line.is_empty() {
            continue;
        }

        if line.eq_ignore_ascii_case("exit") || line.eq_ignore_ascii_case("quit") {
            break;
        }

        if line == "help" || line == "?" {
            print_help();
            continue;
        }

        match session.handle_line(line) {
            Ok(Some(output)) => writeln!(stdout, "{output}")?,
            Ok(None) => {}
            Err(err) => eprintln!("ERROR: {}", err),
        }
    }

    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if !err.use_stderr() => {
            // --help / --version
            print!("{err}");
            return;
        }
        Err(err) => {
            eprintln!("ERROR: {}", normalize_parse_error(err));
            std::process::exit(1);
        }
    };

    let config = match resolve_config(&cli) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("ERROR: {}", err);
            std::process::exit(1);
        }
    };

    let mut session = Session::new(&config, cli.json);
    if let Err(err) = run_interactive(&mut session) {
        eprintln!("ERROR: {}", err);
        std::process::exit(1);
    }
}
