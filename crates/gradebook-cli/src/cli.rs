//! CLI argument definitions for gradebook.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "gradebook")]
#[command(about = "Student grade management with curve-based grading", version)]
pub struct Args {
    /// Path to config file
    #[arg(short, long, env = "GRADEBOOK_CONFIG", default_value = "gradebook.toml")]
    pub config: PathBuf,

    /// Path to the JSON data file (overrides the config file)
    #[arg(long, env = "GRADEBOOK_DATA_FILE", value_name = "FILE")]
    pub data_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the web application
    Serve {
        /// Listen address (overrides the config file)
        #[arg(long, env = "GRADEBOOK_BIND")]
        bind: Option<String>,
    },
    /// Create the data file with the default admin account
    Init,
    /// Create a student account
    AddStudent {
        username: String,
        password: String,
    },
    /// List students and their overall grades
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Grade six subject scores without saving them
    Grade {
        /// Subject scores in order
        #[arg(required = true, allow_negative_numbers = true)]
        scores: Vec<f64>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_serve_defaults() {
        let args = Args::try_parse_from(["gradebook", "serve"]).unwrap();
        assert_eq!(args.config, PathBuf::from("gradebook.toml"));
        assert!(args.data_file.is_none());
        match args.command {
            Command::Serve { bind } => assert!(bind.is_none()),
            _ => panic!("Expected Serve command"),
        }
    }

    #[test]
    fn test_parse_global_options() {
        let args = Args::try_parse_from([
            "gradebook",
            "--config",
            "custom.toml",
            "--data-file",
            "/tmp/students.json",
            "serve",
            "--bind",
            "0.0.0.0:8080",
        ])
        .unwrap();
        assert_eq!(args.config, PathBuf::from("custom.toml"));
        assert_eq!(args.data_file, Some(PathBuf::from("/tmp/students.json")));
        match args.command {
            Command::Serve { bind } => assert_eq!(bind.as_deref(), Some("0.0.0.0:8080")),
            _ => panic!("Expected Serve command"),
        }
    }

    #[test]
    fn test_parse_add_student() {
        let args = Args::try_parse_from(["gradebook", "add-student", "alice", "pw"]).unwrap();
        match args.command {
            Command::AddStudent { username, password } => {
                assert_eq!(username, "alice");
                assert_eq!(password, "pw");
            }
            _ => panic!("Expected AddStudent command"),
        }
    }

    #[test]
    fn test_parse_add_student_missing_password() {
        assert!(Args::try_parse_from(["gradebook", "add-student", "alice"]).is_err());
    }

    #[test]
    fn test_parse_grade_with_negative_scores() {
        let args = Args::try_parse_from([
            "gradebook", "grade", "90", "-5", "70.5", "60", "50", "40", "--json",
        ])
        .unwrap();
        match args.command {
            Command::Grade { scores, json } => {
                assert_eq!(scores, vec![90.0, -5.0, 70.5, 60.0, 50.0, 40.0]);
                assert!(json);
            }
            _ => panic!("Expected Grade command"),
        }
    }

    #[test]
    fn test_parse_grade_rejects_non_numbers() {
        assert!(Args::try_parse_from(["gradebook", "grade", "ninety"]).is_err());
        assert!(Args::try_parse_from(["gradebook", "grade"]).is_err());
    }

    #[test]
    fn test_parse_requires_command() {
        assert!(Args::try_parse_from(["gradebook"]).is_err());
    }
}
