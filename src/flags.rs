use std::collections::HashMap;

#[derive(Debug, Clone)]
pub struct Flags {
    flags: HashMap<String, Flag>,
}

#[derive(Debug, Clone)]
pub struct Flag {
    pub short: String,
    pub long: String,
    pub description: String,
    pub value: Option<String>,
}

impl Default for Flags {
    fn default() -> Self {
        Self::new()
    }
}

impl Flags {
    pub fn new() -> Self {
        let mut flags = HashMap::new();

        flags.insert(
            "help".to_string(),
            Flag {
                short: "-h".to_string(),
                long: "--help".to_string(),
                description: "Print this help message".to_string(),
                value: None,
            },
        );

        flags.insert(
            "version".to_string(),
            Flag {
                short: "-v".to_string(),
                long: "--version".to_string(),
                description: "Show version information".to_string(),
                value: None,
            },
        );

        flags.insert(
            "quiet".to_string(),
            Flag {
                short: "-q".to_string(),
                long: "--quiet".to_string(),
                description: "Suppress informational output".to_string(),
                value: None,
            },
        );

        flags.insert(
            "print-cd".to_string(),
            Flag {
                short: "-p".to_string(),
                long: "--print-cd".to_string(),
                description: "Print cd commands for the shell to eval instead of changing directory"
                    .to_string(),
                value: None,
            },
        );

        flags.insert(
            "install-completion".to_string(),
            Flag {
                short: "-i".to_string(),
                long: "--install-completion".to_string(),
                description: "Install shell completion for bash or zsh".to_string(),
                value: None,
            },
        );

        Flags { flags }
    }

    /// Arguments that are not registered flags are left for the subcommand
    /// dispatcher.
    pub fn parse(&mut self, args: &[String]) {
        for arg in args {
            for flag in self.flags.values_mut() {
                if arg == &flag.short || arg == &flag.long {
                    flag.value = Some("true".to_string());
                }
            }
        }
    }

    pub fn is_set(&self, name: &str) -> bool {
        self.flags
            .get(name)
            .and_then(|f| f.value.as_ref())
            .is_some()
    }

    pub fn print_help(&self) {
        println!("z - command storage and execution tool");
        println!();
        println!("Usage:");
        println!("  z add \"command\"        Store a new command");
        println!("  z attach \"command\"     Store a command silently");
        println!("  z <number|alias>       Execute a stored command");
        println!("  z list | z ls          List all stored commands");
        println!("  z delete <number>      Delete a command by number");
        println!("  z clear                Clear all commands (asks first)");
        println!("  z search \"pattern\"     Search stored commands");
        println!("  z alias <name> <n>     Alias a command number");
        println!("  z stats                Show usage statistics");
        println!("  z help                 Show this help message");
        println!();
        println!("Options:");
        for flag in self.flags.values() {
            println!("  {}, {:<22} {}", flag.short, flag.long, flag.description);
        }
    }
}
