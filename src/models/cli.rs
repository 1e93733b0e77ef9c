use clap::CommandFactory;
use std::path::PathBuf;

/// Find the puzzle urls in an Apache log and download the images.
#[derive(clap::Parser, Debug)]
#[command(version, about)]
pub struct Cli {
    /// Destination directory for downloaded images
    #[arg(short = 'd', long)]
    pub todir: Option<PathBuf>,

    /// Settings file, any format the config crate reads
    #[arg(short, long, default_value = "logpuzzle")]
    pub config_file: String,

    /// Apache logfile to extract urls from
    pub logfile: PathBuf,
}

impl Cli {
    pub fn usage() -> String {
        Cli::command().render_usage().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn clap_test() {
        Cli::command().debug_assert()
    }

    #[test]
    fn parses_todir_and_logfile() {
        let cli = Cli::try_parse_from(["logpuzzle", "-d", "out", "animal_code.google.com"]).unwrap();
        assert_eq!(Some(PathBuf::from("out")), cli.todir);
        assert_eq!(PathBuf::from("animal_code.google.com"), cli.logfile);
        assert_eq!("logpuzzle", cli.config_file);

        let cli = Cli::try_parse_from(["logpuzzle", "--todir", "out", "access.log"]).unwrap();
        assert_eq!(Some(PathBuf::from("out")), cli.todir);
    }

    #[test]
    fn logfile_is_required() {
        assert!(Cli::try_parse_from(["logpuzzle", "-d", "out"]).is_err());
    }

    #[test]
    fn usage_names_arguments() {
        let usage = Cli::usage();
        assert!(usage.contains("[OPTIONS]"));
        assert!(usage.contains("<LOGFILE>"));
    }
}
