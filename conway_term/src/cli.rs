//! Command-line parsing: a single positional board dimension.

use thiserror::Error;

use crate::config::{Config, MAX_DIMENSION};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CliError {
    #[error("Usage: {program} <board dimension>")]
    Usage { program: String },
    #[error("Board dimensions should be (0, 40]")]
    Dimension { given: String },
}

/// Parses `args` (including the program name) into a [`Config`].
pub fn parse_args(args: &[String]) -> Result<Config, CliError> {
    let program = args.first().map(String::as_str).unwrap_or("life");

    let [_, dimension] = args else {
        return Err(CliError::Usage {
            program: program.to_string(),
        });
    };

    let invalid = || CliError::Dimension {
        given: dimension.clone(),
    };
    let dimension: usize = dimension.trim().parse().map_err(|_| invalid())?;
    if dimension == 0 || dimension > MAX_DIMENSION {
        return Err(invalid());
    }

    Ok(Config::new(dimension))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn accepts_the_full_range() {
        assert_eq!(parse_args(&args(&["life", "1"])).unwrap().dimension, 1);
        assert_eq!(parse_args(&args(&["life", "25"])).unwrap().dimension, 25);
        assert_eq!(parse_args(&args(&["life", "40"])).unwrap().dimension, 40);
    }

    #[test]
    fn missing_or_extra_arguments_print_usage() {
        for list in [&["./life"][..], &["./life", "10", "20"][..]] {
            let err = parse_args(&args(list)).unwrap_err();
            assert_eq!(err.to_string(), "Usage: ./life <board dimension>");
        }
        assert!(matches!(parse_args(&[]), Err(CliError::Usage { .. })));
    }

    #[test]
    fn rejects_out_of_range_and_garbage() {
        for bad in ["0", "41", "-3", "ten", "", "4.5"] {
            let err = parse_args(&args(&["life", bad])).unwrap_err();
            assert_eq!(err, CliError::Dimension { given: bad.to_string() });
            assert_eq!(err.to_string(), "Board dimensions should be (0, 40]");
        }
    }
}
