use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "scribble", bin_name = "scribble", version)]
#[command(about = "Quick notes with a trash that empties itself", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Data directory (defaults to $SCRIBBLE_HOME, then the OS data dir)
    #[arg(long, global = true, value_name = "DIR", help_heading = "Options")]
    pub data: Option<PathBuf>,

    /// Verbose output (debug logs on stderr)
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ThemeMode {
    /// Dark theme
    On,
    /// Light theme
    Off,
    /// Switch to the other theme
    Toggle,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a new note
    #[command(alias = "n")]
    Create {
        /// Title words (joined with spaces)
        title: Vec<String>,

        /// Note body
        #[arg(short, long)]
        content: Option<String>,
    },

    /// Type a note on stdin; it is saved once you stop typing
    Compose,

    /// List notes
    #[command(alias = "ls")]
    List {
        /// Show the trash instead
        #[arg(short, long, conflicts_with = "all")]
        deleted: bool,

        /// Show active notes and the trash
        #[arg(short, long)]
        all: bool,

        /// Only notes whose title or body contains this term
        #[arg(short, long)]
        search: Option<String>,
    },

    /// View one or more notes in full
    View {
        /// Indexes of the notes (e.g. 1 3 d2 1-3)
        #[arg(required = true, num_args = 1..)]
        indexes: Vec<String>,
    },

    /// Edit an active note in place
    Edit {
        /// Index of the note
        index: String,

        /// New title
        #[arg(short, long)]
        title: Option<String>,

        /// New body
        #[arg(short, long)]
        content: Option<String>,
    },

    /// Move notes to the trash
    #[command(alias = "rm")]
    Delete {
        /// Indexes of the notes (e.g. 1 3 1-3)
        #[arg(required = true, num_args = 1..)]
        indexes: Vec<String>,
    },

    /// Bring notes back from the trash
    Restore {
        /// Trash indexes (e.g. 1 or d1; bare numbers mean trash)
        #[arg(required = true, num_args = 1..)]
        indexes: Vec<String>,
    },

    /// Permanently delete trashed notes (all of them if no index is given)
    Purge {
        /// Trash indexes (e.g. 1 or d1; bare numbers mean trash)
        indexes: Vec<String>,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// List the trash (same as `list --deleted`)
    Trash,

    /// Show or change the color theme
    Theme {
        /// on = dark, off = light, toggle = switch
        #[arg(value_enum)]
        mode: Option<ThemeMode>,
    },

    /// Show or set configuration
    Config {
        /// Config key (autosave_delay_ms, trash_retention_days)
        key: Option<String>,

        /// Value to set
        value: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_subcommand_parses() {
        let cli = Cli::try_parse_from(["scribble"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn create_collects_title_words() {
        let cli = Cli::try_parse_from(["scribble", "create", "Buy", "milk", "-c", "2L"]).unwrap();
        match cli.command {
            Some(Commands::Create { title, content }) => {
                assert_eq!(title, vec!["Buy", "milk"]);
                assert_eq!(content.as_deref(), Some("2L"));
            }
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["scribble", "list", "--data", "/tmp/x", "-v"]).unwrap();
        assert_eq!(cli.data, Some(PathBuf::from("/tmp/x")));
        assert!(cli.verbose);
    }

    #[test]
    fn deleted_conflicts_with_all() {
        assert!(Cli::try_parse_from(["scribble", "list", "--deleted", "--all"]).is_err());
    }

    #[test]
    fn theme_mode_values() {
        let cli = Cli::try_parse_from(["scribble", "theme", "toggle"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Theme {
                mode: Some(ThemeMode::Toggle)
            })
        ));
        assert!(Cli::try_parse_from(["scribble", "theme", "purple"]).is_err());
    }

    #[test]
    fn delete_requires_an_index() {
        assert!(Cli::try_parse_from(["scribble", "delete"]).is_err());
    }
}
