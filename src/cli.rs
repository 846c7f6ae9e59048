use std::env;
use std::path::{Path, PathBuf};

use clap::{Parser, ValueEnum};
use obe_tiled::core::paths::{PathError, unify_separators};
use obe_tiled::pipeline::{ConvertRequest, OutputFormat};

#[derive(Parser, Debug)]
#[command(name = "obe-tiled", version)]
#[command(about = "Convert a Tiled JSON map into an ObEngine scene")]
pub struct Args {
    /// Tiled map exported as JSON
    pub input_file: String,

    /// Scene file to write
    pub output_file: String,

    /// Directory image paths are made relative to (defaults to the working directory)
    pub current_working_directory: Option<String>,

    /// Output format, inferred from the output file extension when omitted
    #[arg(short, long, value_enum)]
    pub format: Option<FormatArg>,

    /// File receiving a copy of the log
    #[arg(long, default_value = "debug.log")]
    pub log_file: PathBuf,

    /// Only log to stdout
    #[arg(long)]
    pub no_log_file: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Vili,
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(format: FormatArg) -> Self {
        match format {
            FormatArg::Vili => OutputFormat::Vili,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

impl Args {
    /// Separator-normalized paths, with the working directory filled in.
    pub fn to_request(&self) -> Result<ConvertRequest, PathError> {
        let base_dir = match &self.current_working_directory {
            Some(dir) if !dir.is_empty() => PathBuf::from(unify_separators(dir)),
            _ => env::current_dir().map_err(PathError::CurrentDir)?,
        };

        let mut request = ConvertRequest::new(
            unify_separators(&self.input_file),
            unify_separators(&self.output_file),
            base_dir,
        );
        request.format = self.format.map(OutputFormat::from);
        Ok(request)
    }

    pub fn log_file(&self) -> Option<&Path> {
        (!self.no_log_file).then_some(self.log_file.as_path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn test_positional_arguments() {
        let args = Args::try_parse_from([
            "obe-tiled",
            "maps\\level1.json",
            "scenes\\level1.map.vili",
            "D:\\game",
        ])
        .unwrap();
        let request = args.to_request().unwrap();

        assert_eq!(request.input_file, Path::new("maps/level1.json"));
        assert_eq!(request.output_file, Path::new("scenes/level1.map.vili"));
        assert_eq!(request.base_dir, Path::new("D:/game"));
        assert_eq!(request.format, None);
        assert_eq!(args.log_file(), Some(Path::new("debug.log")));
    }

    #[test]
    fn test_working_directory_defaults_to_process_cwd() {
        let args = Args::try_parse_from(["obe-tiled", "in.json", "out.vili"]).unwrap();
        let request = args.to_request().unwrap();
        assert_eq!(request.base_dir, env::current_dir().unwrap());
    }

    #[test]
    fn test_options() {
        let args = Args::try_parse_from([
            "obe-tiled",
            "in.json",
            "out.txt",
            "--format",
            "json",
            "--no-log-file",
        ])
        .unwrap();

        let request = args.to_request().unwrap();
        assert_eq!(request.output_format(), OutputFormat::Json);
        assert_eq!(args.log_file(), None);
    }

    #[test]
    fn test_missing_output_is_an_error() {
        let err = Args::try_parse_from(["obe-tiled", "in.json"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }
}
