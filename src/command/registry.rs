//! Command registry
//! Manages command definitions and provides matching with aliases and prefixes

/// Result of matching a command input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchResult {
    /// Exact match found (command name or explicit alias)
    Exact(String),
    /// Unambiguous prefix match
    Prefix(String),
    /// Ambiguous - multiple commands match
    Ambiguous { prefix: String, matches: Vec<String> },
    /// No match found
    Unknown(String),
}

/// Command definition
#[derive(Debug, Clone)]
pub struct CommandDef {
    /// Canonical command name
    pub name: String,
    /// Explicit aliases for this command
    pub aliases: Vec<String>,
}

impl CommandDef {
    pub fn new(name: impl Into<String>) -> Self {
        CommandDef {
            name: name.into(),
            aliases: Vec::new(),
        }
    }

    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.aliases.push(alias.into());
        self
    }
}

/// Case-insensitive name registry
#[derive(Debug, Clone, Default)]
pub struct CommandRegistry {
    commands: Vec<CommandDef>,
}

impl CommandRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn register(mut self, cmd: CommandDef) -> Self {
        self.commands.push(cmd);
        self
    }

    /// Match an input string to a command
    ///
    /// Matching order:
    /// 1. Exact match against command name or explicit alias
    /// 2. Unique prefix of a name or alias
    /// 3. Ambiguous if several commands share the prefix
    /// 4. Unknown otherwise
    #[must_use]
    pub fn match_command(&self, input: &str) -> MatchResult {
        let input = input.trim().to_lowercase();

        if input.is_empty() {
            return MatchResult::Unknown(input);
        }

        let is_exact = |cmd: &CommandDef| {
            cmd.name.to_lowercase() == input
                || cmd.aliases.iter().any(|alias| alias.to_lowercase() == input)
        };
        if let Some(cmd) = self.commands.iter().find(|cmd| is_exact(cmd)) {
            return MatchResult::Exact(cmd.name.clone());
        }

        let matches: Vec<String> = self
            .commands
            .iter()
            .filter(|cmd| {
                cmd.name.to_lowercase().starts_with(&input)
                    || cmd
                        .aliases
                        .iter()
                        .any(|alias| alias.to_lowercase().starts_with(&input))
            })
            .map(|cmd| cmd.name.clone())
            .collect();

        match matches.len() {
            0 => MatchResult::Unknown(input),
            1 => MatchResult::Prefix(matches[0].clone()),
            _ => MatchResult::Ambiguous {
                prefix: input,
                matches,
            },
        }
    }

    /// All registered command names
    #[must_use]
    pub fn command_names(&self) -> Vec<&str> {
        self.commands.iter().map(|c| c.name.as_str()).collect()
    }
}
