use std::{
    fs::File,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use caatinguage::{SymbolTable, report, scan, source};
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Static checker front end: writes the token listing (`.LEX`) and the
/// symbol table (`.TAB`) for a Caatinguage source file.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Source file to scan.
    source: PathBuf,

    /// Directory for the generated reports.
    #[arg(long, short, default_value = ".")]
    out_dir: PathBuf,
}

impl Cli {
    fn run(self) -> Result<()> {
        let file = File::open(&self.source)
            .with_context(|| format!("{}: cannot open source file", self.source.display()))?;
        let text = source::read_source(file)
            .with_context(|| format!("{}: cannot read source file", self.source.display()))?;

        let mut table = SymbolTable::new();
        let tokens = scan(&text, &mut table);

        let stem = self
            .source
            .file_stem()
            .with_context(|| format!("{}: not a file name", self.source.display()))?;
        let report_path = |extension: &str| {
            let mut name = stem.to_os_string();
            name.push(extension);
            self.out_dir.join(name)
        };
        let lex_path = report_path(".LEX");
        let tab_path = report_path(".TAB");

        write_report(&lex_path, |writer| report::write_tokens(writer, &tokens))?;
        write_report(&tab_path, |writer| report::write_symbols(writer, &table))?;

        println!("{}", lex_path.display());
        println!("{}", tab_path.display());
        Ok(())
    }
}

fn write_report<F>(path: &Path, body: F) -> Result<()>
where
    F: FnOnce(&mut BufWriter<File>) -> Result<(), caatinguage::ScanError>,
{
    let file = File::create(path).with_context(|| format!("{}: cannot create report", path.display()))?;
    let mut writer = BufWriter::new(file);
    body(&mut writer).with_context(|| format!("{}: cannot write report", path.display()))?;
    writer.flush()?;
    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
        .with(filter)
        .init();
}

fn main() -> Result<()> {
    init_tracing();
    Cli::parse().run()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn test_source_argument_is_required() {
        let err = Cli::try_parse_from(["caatinguage"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);

        let cli = Cli::try_parse_from(["caatinguage", "media.cat", "-o", "out"]).unwrap();
        assert_eq!(cli.source, PathBuf::from("media.cat"));
        assert_eq!(cli.out_dir, PathBuf::from("out"));
    }
}
