use clap::Parser; // Import the `Parser` derive macro from the `clap` crate.

/// Command-line interface for the `junksweep` utility.
///
/// With no argument every data volume is scanned. A single positional path
/// restricts the scan to that folder.
#[derive(Parser, Debug)] // Generates the argument parsing code from the struct fields.
#[command(
    name = "junksweep", // Sets the name of the executable, which appears in help messages.
    about = "Find and delete OS and application junk files on every volume", // Short description.
    version, // Automatically generates the version string from the Cargo.toml file.
    disable_help_subcommand = true
)]
pub struct Cli {
    /// Folder to scan instead of every data volume
    ///
    /// Relative paths are resolved against the current directory.
    pub path: Option<String>,

    /// Print debug messages (skipped entries, compiled matchers, ...)
    #[arg(long)]
    pub debug: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_zero_or_one_path() {
        let cli = Cli::try_parse_from(["junksweep"]).unwrap();
        assert!(cli.path.is_none());
        assert!(!cli.debug);

        let cli = Cli::try_parse_from(["junksweep", "--debug", "D:/photos"]).unwrap();
        assert_eq!(cli.path.as_deref(), Some("D:/photos"));
        assert!(cli.debug);

        assert!(Cli::try_parse_from(["junksweep", "a", "b"]).is_err());
    }
}
