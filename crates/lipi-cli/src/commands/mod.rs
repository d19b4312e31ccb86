pub mod annotate_ops;
pub mod config_ops;
pub mod text_ops;

use std::io::{self, Read};

use lipi_engine::settings::SettingsError;

/// Unwrap a result or print the message (with the error as its last `{}`)
/// and exit with status 1.
macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            std::process::exit(1);
        })
    };
}

pub(crate) use die;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("{path}: {source}")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("stdin: {0}")]
    Stdin(#[source] io::Error),
    #[error(transparent)]
    Settings(#[from] SettingsError),
    #[error("JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// The text argument, or all of stdin without its trailing newline.
pub fn read_text(arg: Option<String>) -> Result<String, CliError> {
    if let Some(text) = arg {
        return Ok(text);
    }
    let mut buf = String::new();
    io::stdin().read_to_string(&mut buf).map_err(CliError::Stdin)?;
    let trimmed = buf.trim_end_matches(['\n', '\r']).len();
    buf.truncate(trimmed);
    Ok(buf)
}

pub fn read_file(path: &str) -> Result<String, CliError> {
    std::fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn argument_wins_over_stdin() {
        assert_eq!(read_text(Some("rāma".into())).unwrap(), "rāma");
    }

    #[test]
    fn missing_file_names_the_path() {
        let err = read_file("/nonexistent/lipi.toml").unwrap_err();
        assert!(err.to_string().starts_with("/nonexistent/lipi.toml: "));
    }
}
