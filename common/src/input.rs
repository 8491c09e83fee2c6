use clap::Parser;
use miette::*;
use std::{
    fs::File,
    io::{self, Read},
    path::PathBuf,
};

/// Command line shared by every day's `part1`/`part2` binaries.
#[derive(Debug, Parser)]
#[command(version, about = "Solve one part of an Advent of Code 2022 puzzle")]
pub struct Args {
    /// Puzzle input file. Standard input is read when omitted.
    pub input: Option<PathBuf>,

    /// Print the day's visualization (if it has one) before the result.
    #[arg(short, long)]
    pub visualize: bool,
}

impl Args {
    pub fn from_cli() -> Self {
        Self::parse()
    }

    /// Reads the whole puzzle input from the file argument or from stdin.
    #[tracing::instrument]
    pub fn read_input(&self) -> Result<String> {
        match &self.input {
            Some(path) => {
                let file = File::open(path)
                    .into_diagnostic()
                    .wrap_err_with(|| format!("Failed to open input file {}", path.display()))?;
                read_from(file).wrap_err_with(|| format!("While reading {}", path.display()))
            }
            None => {
                tracing::debug!("no input file given, reading stdin");
                read_from(io::stdin().lock())
            }
        }
    }
}

/// Reads everything from `reader`, turning CRLF line endings into LF.
pub fn read_from(mut reader: impl Read) -> Result<String> {
    let mut raw = String::new();
    reader
        .read_to_string(&mut raw)
        .into_diagnostic()
        .wrap_err("Failed to read puzzle input")?;

    if raw.contains('\r') {
        Ok(raw.replace("\r\n", "\n"))
    } else {
        Ok(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_line_endings() -> Result<()> {
        let input = read_from(&b"1000\r\n2000\r\n\r\n3000\r\n"[..])?;
        assert_eq!("1000\n2000\n\n3000\n", input);
        Ok(())
    }

    #[test]
    fn keeps_unix_input_untouched() -> Result<()> {
        let input = read_from(&b"    [D]    \n[N] [C]    \n"[..])?;
        assert_eq!("    [D]    \n[N] [C]    \n", input);
        Ok(())
    }

    #[test]
    fn rejects_invalid_utf8() {
        assert!(read_from(&[0xff, 0xfe, 0x00][..]).is_err());
    }

    #[test]
    fn parses_arguments() {
        let args = Args::try_parse_from(["part1", "input1.txt", "--visualize"]).unwrap();
        assert_eq!(Some(PathBuf::from("input1.txt")), args.input);
        assert!(args.visualize);

        let args = Args::try_parse_from(["part2"]).unwrap();
        assert_eq!(None, args.input);
        assert!(!args.visualize);
    }

    #[test]
    fn missing_file_is_an_error() {
        let args = Args {
            input: Some(PathBuf::from("this/file/does/not/exist.txt")),
            visualize: false,
        };
        assert!(args.read_input().is_err());
    }
}
