use std::process::ExitCode;

fn main() -> ExitCode {
    use cssh::config::{Config, ConfigLoader};
    use cssh::executor::ForkExecutor;
    use cssh::prompt::ShellPrompt;
    use cssh::repl::Repl;

    let config = match std::env::var_os("CSSH_CONFIG") {
        Some(path) => ConfigLoader::load_from_file(&path).unwrap_or_else(|e| {
            eprintln!("cssh: {}: {}", path.to_string_lossy(), e);
            ConfigLoader::default_config()
        }),
        None => ConfigLoader::default_config(),
    };
    let Config { prompt, exit_keyword, log_level } = config;

    if let Err(e) = cssh::logger::init(log_level) {
        eprintln!("cssh: {}", e);
    }

    let mut repl = Repl::with_prompt(ShellPrompt::stdio(&prompt), &exit_keyword);
    match repl.run(&mut ForkExecutor) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
