//! External converter invocation
//!
//! Runs the configured converter program once per candidate and turns its exit
//! status into a conversion outcome.

use std::path::{self, MAIN_SEPARATOR, Path};
use std::process::{Command, Output};

use log::trace;

use crate::config::Settings;
use crate::constants::{OUTPUT_FLAG, STANDALONE_FLAG};
use crate::discovery::Candidate;
use crate::errors::{Result, conversion_failed_error};

use super::Converter;

/// Converter backed by an external program such as pandoc
#[derive(Debug, Clone)]
pub struct CommandConverter {
    program: String,
    extra_args: Vec<String>,
    standalone: bool,
}

impl CommandConverter {
    /// Creates a converter from the run settings
    pub fn new(settings: &Settings) -> Self {
        CommandConverter {
            program: resolve_program(&settings.converter),
            extra_args: settings.extra_args.clone(),
            standalone: settings.standalone,
        }
    }

    /// Builds the argument list for one candidate
    ///
    /// The order is `[extra_args...] [-s] ./<source> -o ./<output>`. The `./`
    /// prefix keeps a file named like `-o.md` from being read as an option.
    pub fn arguments(&self, candidate: &Candidate) -> Vec<String> {
        let mut args = self.extra_args.clone();
        if self.standalone {
            args.push(STANDALONE_FLAG.to_string());
        }
        args.push(dot_relative(&candidate.source));
        args.push(OUTPUT_FLAG.to_string());
        args.push(dot_relative(&candidate.output));
        args
    }
}

/// Anchors a program given as a relative path to the current directory
///
/// The converter runs inside the scanned directory, so `./tools/pandoc` would
/// otherwise be looked up there. Bare names are left for `PATH` lookup.
fn resolve_program(program: &str) -> String {
    if !program.contains(['/', MAIN_SEPARATOR]) {
        return program.to_string();
    }

    path::absolute(program)
        .ok()
        .and_then(|absolute| absolute.to_str().map(str::to_string))
        .unwrap_or_else(|| program.to_string())
}

fn dot_relative(file_name: &str) -> String {
    format!(".{MAIN_SEPARATOR}{file_name}")
}

impl Converter for CommandConverter {
    fn convert(&self, directory: &Path, candidate: &Candidate) -> Result<()> {
        let args = self.arguments(candidate);
        trace!(
            "Running `{} {}` in {}",
            self.program,
            args.join(" "),
            directory.display()
        );

        let output = Command::new(&self.program)
            .args(&args)
            .current_dir(directory)
            .output()
            .map_err(|e| {
                conversion_failed_error(
                    &candidate.source,
                    &format!("could not run '{}': {e}", self.program),
                )
            })?;

        if output.status.success() {
            Ok(())
        } else {
            Err(conversion_failed_error(
                &candidate.source,
                &failure_detail(&self.program, &output),
            ))
        }
    }
}

/// Describes a non-zero exit, including whatever the program wrote to stderr
fn failure_detail(program: &str, output: &Output) -> String {
    let stderr = String::from_utf8_lossy(&output.stderr);
    let stderr = stderr.trim();

    if stderr.is_empty() {
        format!("'{program}' exited with {}", output.status)
    } else {
        format!("'{program}' exited with {}: {stderr}", output.status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::Error;
    use tempfile::tempdir;

    fn candidate(source: &str, output: &str) -> Candidate {
        Candidate {
            source: source.to_string(),
            output: output.to_string(),
        }
    }

    #[test]
    fn test_default_arguments() {
        let converter = CommandConverter::new(&Settings::default());

        assert_eq!(converter.program, "pandoc");
        assert_eq!(
            converter.arguments(&candidate("notes.md", "notes.docx")),
            vec![
                "-s".to_string(),
                dot_relative("notes.md"),
                "-o".to_string(),
                dot_relative("notes.docx"),
            ]
        );
    }

    #[test]
    fn test_extra_arguments_without_standalone() {
        let settings = Settings {
            extra_args: vec!["--toc".to_string()],
            standalone: false,
            ..Settings::default()
        };
        let converter = CommandConverter::new(&settings);

        assert_eq!(
            converter.arguments(&candidate("a.md", "a.docx")),
            vec![
                "--toc".to_string(),
                dot_relative("a.md"),
                "-o".to_string(),
                dot_relative("a.docx"),
            ]
        );
    }

    #[test]
    fn test_dash_prefixed_names_are_not_options() {
        let converter = CommandConverter::new(&Settings::default());

        let args = converter.arguments(&candidate("-o.md", "-o.docx"));

        assert_eq!(args.len(), 4);
        assert_eq!(args[1], format!(".{MAIN_SEPARATOR}-o.md"));
        assert_eq!(args[3], format!(".{MAIN_SEPARATOR}-o.docx"));
        assert!(args.iter().skip(1).all(|arg| arg == "-o" || !arg.starts_with('-')));
    }

    #[test]
    fn test_relative_program_is_made_absolute() {
        let settings = Settings {
            converter: "./tools/pandoc".to_string(),
            ..Settings::default()
        };
        let converter = CommandConverter::new(&settings);

        assert!(Path::new(&converter.program).is_absolute());
        assert!(converter.program.ends_with("pandoc"));
    }

    #[test]
    fn test_bare_program_is_left_for_path_lookup() {
        assert_eq!(resolve_program("pandoc"), "pandoc");
    }

    #[cfg(unix)]
    #[test]
    fn test_absolute_program_is_unchanged() {
        assert_eq!(resolve_program("/usr/bin/pandoc"), "/usr/bin/pandoc");
    }

    #[test]
    fn test_missing_program_is_a_conversion_failure() {
        let temp_dir = tempdir().unwrap();
        let settings = Settings {
            converter: "md2docx-test-no-such-converter".to_string(),
            ..Settings::default()
        };
        let converter = CommandConverter::new(&settings);

        let error = converter
            .convert(temp_dir.path(), &candidate("a.md", "a.docx"))
            .unwrap_err();

        match error {
            Error::ConversionFailed { file, detail } => {
                assert_eq!(file, "a.md");
                assert!(detail.contains("md2docx-test-no-such-converter"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_non_zero_exit_is_a_conversion_failure() {
        let temp_dir = tempdir().unwrap();
        let settings = Settings {
            converter: "false".to_string(),
            ..Settings::default()
        };
        let converter = CommandConverter::new(&settings);

        let error = converter
            .convert(temp_dir.path(), &candidate("a.md", "a.docx"))
            .unwrap_err();

        let message = error.to_string();
        assert!(message.starts_with("Failed to convert a.md:"));
        assert!(message.contains("exit status: 1"));
    }

    #[cfg(unix)]
    #[test]
    fn test_zero_exit_is_success() {
        let temp_dir = tempdir().unwrap();
        let settings = Settings {
            converter: "true".to_string(),
            ..Settings::default()
        };
        let converter = CommandConverter::new(&settings);

        assert!(
            converter
                .convert(temp_dir.path(), &candidate("a.md", "a.docx"))
                .is_ok()
        );
    }
}
