//! Command-line argument parsing.

use purgevol_core::PurgeError;

pub const USAGE: &str = "\
usage: purgevol [demo]
       purgevol pair <from> <to> [--json]
       purgevol matrix <color,color,...> [--json]

colors are hex: #RRGGBB, RRGGBB, #RGB or RGB

environment:
  PURGEVOL_CONFIG      JSON file with min_flush_vol, max_flush_vol, multiplier
  PURGEVOL_MIN         minimum flush volume (default 0)
  PURGEVOL_MAX         maximum flush volume (default 800)
  PURGEVOL_MULTIPLIER  flush multiplier (default 1.0)
  PURGEVOL_LOG         log filter (default warn)";

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("unknown command {0:?}")]
    UnknownCommand(String),
    #[error("{command}: expected {expected}")]
    MissingArgument {
        command: &'static str,
        expected: &'static str,
    },
    #[error("unexpected argument {0:?}")]
    UnexpectedArgument(String),
    #[error(transparent)]
    Purge(#[from] PurgeError),
    #[error("failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Output format for `pair` and `matrix`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Output {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Print the reference transitions and matrix.
    Demo,
    Pair {
        from: String,
        to: String,
        output: Output,
    },
    Matrix {
        colors: String,
        output: Output,
    },
    Help,
}

impl Command {
    /// Parse arguments, excluding the program name.
    pub fn parse<I>(args: I) -> Result<Self, CliError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut output = Output::Text;
        let mut positional = Vec::new();
        for arg in args {
            match arg.as_str() {
                "--json" => output = Output::Json,
                "-h" | "--help" => return Ok(Self::Help),
                _ => positional.push(arg),
            }
        }

        let mut positional = positional.into_iter();
        let command = match positional.next().as_deref() {
            None | Some("demo") => Self::Demo,
            Some("help") => Self::Help,
            Some("pair") => {
                let (Some(from), Some(to)) = (positional.next(), positional.next()) else {
                    return Err(CliError::MissingArgument {
                        command: "pair",
                        expected: "<from> <to>",
                    });
                };
                Self::Pair { from, to, output }
            }
            Some("matrix") => {
                let Some(colors) = positional.next() else {
                    return Err(CliError::MissingArgument {
                        command: "matrix",
                        expected: "<color,color,...>",
                    });
                };
                Self::Matrix { colors, output }
            }
            Some(other) => return Err(CliError::UnknownCommand(other.to_string())),
        };

        if let Some(extra) = positional.next() {
            return Err(CliError::UnexpectedArgument(extra));
        }
        Ok(command)
    }
}
