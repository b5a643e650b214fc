use std::env;

use zstash::completion::{self, CompletionOutcome};
use zstash::error::ZError;
use zstash::exec::{self, ExecError, ExecutionMode};
use zstash::flags::Flags;
use zstash::highlight::MessageStyler;
use zstash::store::{CommandStore, StorePaths};

fn main() {
    let styler = MessageStyler::new();
    match run(&styler) {
        Ok(0) => {}
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("{}", styler.error(&e.to_string()));
            std::process::exit(1);
        }
    }
}

fn run(styler: &MessageStyler) -> Result<i32, ZError> {
    let mut flags = Flags::new();
    let args: Vec<String> = env::args().skip(1).collect();
    flags.parse(&args);

    if flags.is_set("help") {
        flags.print_help();
        return Ok(0);
    }

    if flags.is_set("version") {
        println!("z {}", env!("CARGO_PKG_VERSION"));
        return Ok(0);
    }

    if flags.is_set("install-completion") {
        install_completion(styler)?;
        return Ok(0);
    }

    let positionals: Vec<String> = args
        .iter()
        .filter(|arg| !arg.starts_with('-'))
        .cloned()
        .collect();

    let Some(subcommand) = positionals.first() else {
        flags.print_help();
        return Ok(0);
    };
    let rest = &positionals[1..];

    let home = dirs::home_dir().ok_or(ZError::HomeDirNotFound)?;
    let mut store = CommandStore::open(StorePaths::under(&home));

    let quiet = flags.is_set("quiet");
    let mode = if flags.is_set("print-cd") {
        ExecutionMode::EmitForShellEvaluation
    } else {
        ExecutionMode::InProcessChangeDirectory
    };

    match subcommand.as_str() {
        "add" => add_command(&mut store, rest, styler, quiet),
        "attach" => add_command(&mut store, rest, styler, true),
        "list" | "ls" => {
            list_commands(&store, styler);
            Ok(0)
        }
        "delete" => delete_command(&mut store, rest, styler),
        "clear" => clear_commands(&mut store, styler),
        "search" => search_commands(&store, rest, styler),
        "alias" => alias_command(&mut store, rest, styler),
        "stats" => {
            show_stats(&store, styler);
            Ok(0)
        }
        "help" => {
            flags.print_help();
            Ok(0)
        }
        key => execute_key(key, &mut store, mode, quiet, styler),
    }
}

fn add_command(
    store: &mut CommandStore,
    rest: &[String],
    styler: &MessageStyler,
    silent: bool,
) -> Result<i32, ZError> {
    let Some(command) = rest.first() else {
        eprintln!("{}", styler.error("Usage: z add \"command\""));
        return Ok(1);
    };

    let position = store.add(command)?;
    if !silent {
        println!(
            "{}",
            styler.success(&format!("Stored command #{}: {}", position, command.trim()))
        );
    }
    Ok(0)
}

fn list_commands(store: &CommandStore, styler: &MessageStyler) {
    if store.is_empty() {
        println!(
            "{}",
            styler.warning("No commands stored yet. Use 'z add \"<command>\"' to add one.")
        );
        return;
    }

    println!("{}", styler.info("Stored commands:"));
    for (index, command) in store.commands().iter().enumerate() {
        println!("{:3}: {}", index + 1, command);
    }
}

fn delete_command(
    store: &mut CommandStore,
    rest: &[String],
    styler: &MessageStyler,
) -> Result<i32, ZError> {
    let Some(position) = rest.first().and_then(|arg| arg.parse::<usize>().ok()) else {
        eprintln!("{}", styler.error("Usage: z delete <number>"));
        return Ok(1);
    };

    let removed = store.delete(position)?;
    println!(
        "{}",
        styler.success(&format!("Deleted command #{}: {}", position, removed))
    );
    Ok(0)
}

fn clear_commands(store: &mut CommandStore, styler: &MessageStyler) -> Result<i32, ZError> {
    let count = store.preview_clear();
    if count == 0 {
        println!("{}", styler.warning("No commands to clear."));
        return Ok(0);
    }

    let mut editor = rustyline::DefaultEditor::new()?;
    let prompt = format!(
        "Are you sure you want to clear all {} commands? (y/N): ",
        count
    );

    match editor.readline(&prompt) {
        Ok(line) if matches!(line.trim().to_lowercase().as_str(), "y" | "yes") => {
            store.clear_confirmed()?;
            println!("{}", styler.success("All commands cleared."));
        }
        Ok(_) => {
            println!("{}", styler.info("Operation cancelled."));
        }
        Err(rustyline::error::ReadlineError::Interrupted)
        | Err(rustyline::error::ReadlineError::Eof) => {
            println!();
            println!("{}", styler.info("Operation cancelled."));
        }
        Err(e) => return Err(e.into()),
    }
    Ok(0)
}

fn search_commands(
    store: &CommandStore,
    rest: &[String],
    styler: &MessageStyler,
) -> Result<i32, ZError> {
    let Some(pattern) = rest.first() else {
        eprintln!("{}", styler.error("Usage: z search \"pattern\""));
        return Ok(1);
    };

    let matches = store.search(pattern)?;
    if matches.is_empty() {
        println!(
            "{}",
            styler.warning(&format!("No commands found containing '{}'", pattern))
        );
        return Ok(0);
    }

    for (position, command) in matches {
        println!("{:3}: {}", position, command);
    }
    Ok(0)
}

fn alias_command(
    store: &mut CommandStore,
    rest: &[String],
    styler: &MessageStyler,
) -> Result<i32, ZError> {
    match rest {
        [] => {
            if store.aliases().next().is_none() {
                println!("{}", styler.warning("No aliases defined."));
                return Ok(0);
            }
            for (name, position) in store.aliases() {
                let command = store.get(position).unwrap_or("?");
                println!("{} -> #{}: {}", name, position, command);
            }
            Ok(0)
        }
        [name, position] => {
            let Ok(position) = position.parse::<usize>() else {
                eprintln!("{}", styler.error("Usage: z alias <name> <number>"));
                return Ok(1);
            };

            store.set_alias(name, position)?;
            println!(
                "{}",
                styler.success(&format!("Aliased '{}' to command #{}", name, position))
            );
            Ok(0)
        }
        _ => {
            eprintln!("{}", styler.error("Usage: z alias <name> <number>"));
            Ok(1)
        }
    }
}

fn show_stats(store: &CommandStore, styler: &MessageStyler) {
    if store.is_empty() {
        println!("{}", styler.warning("No commands stored yet."));
        return;
    }

    let summary = store.stats();
    println!(
        "{}",
        styler.info(&format!("Total commands: {}", summary.total_commands))
    );
    println!(
        "{}",
        styler.info(&format!("Unique commands: {}", summary.unique_commands))
    );
    println!(
        "{}",
        styler.info(&format!("Total executions: {}", summary.total_executions))
    );
    if let Some((command, count)) = summary.most_used {
        println!(
            "{}",
            styler.info(&format!("Most used: {} ({} times)", command, count))
        );
    }
}

fn execute_key(
    key: &str,
    store: &mut CommandStore,
    mode: ExecutionMode,
    quiet: bool,
    styler: &MessageStyler,
) -> Result<i32, ZError> {
    match exec::resolve_and_execute(key, store, mode) {
        Ok((command, result)) => {
            if !quiet {
                let line = styler.info(&format!("Executing: {}", command));
                // In emit mode stdout is reserved for the shell to eval
                if mode == ExecutionMode::EmitForShellEvaluation {
                    eprintln!("{}", line);
                } else {
                    println!("{}", line);
                }
            }

            print!("{}", result.stdout);
            eprint!("{}", result.stderr);
            Ok(result.exit_code)
        }
        Err(ExecError::NotFound(_)) if key.trim().parse::<usize>().is_ok() => {
            eprintln!(
                "{}",
                styler.error(&format!("No command found at line {}", key.trim()))
            );
            Ok(1)
        }
        Err(ExecError::NotFound(_)) => {
            eprintln!("{}", styler.error(&format!("Unknown command: {}", key)));
            eprintln!("{}", styler.info("Use 'z help' for usage information."));
            Ok(1)
        }
        Err(e) => Err(e.into()),
    }
}

fn install_completion(styler: &MessageStyler) -> Result<(), ZError> {
    match completion::install_completion()? {
        CompletionOutcome::Installed(path) => {
            println!(
                "{}",
                styler.success(&format!("Shell completion installed to {}", path.display()))
            );
            println!(
                "{}",
                styler.info(&format!(
                    "Restart your terminal or run: source {}",
                    path.display()
                ))
            );
        }
        CompletionOutcome::AlreadyInstalled(path) => {
            println!(
                "{}",
                styler.info(&format!(
                    "Completion already installed in {}",
                    path.display()
                ))
            );
        }
        CompletionOutcome::UnsupportedShell(shell) => {
            println!(
                "{}",
                styler.warning(&format!("Shell completion not supported for '{}'", shell))
            );
            println!("{}", styler.info("Supported shells: bash, zsh"));
        }
    }
    Ok(())
}
