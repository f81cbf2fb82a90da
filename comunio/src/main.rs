use clap::{Parser, ValueEnum};
use comuniolib::{
    error::{ComunioError, Result},
    process::process,
    report::{csv::CsvReport, text::TextReport, xml::SimpleXml},
    traits::WriteReport,
};
use std::fs::File;
use std::io::{self, BufReader, Write};

#[derive(Copy, Clone, Debug, ValueEnum)]
enum Fmt {
    Text,
    Csv,
    Xml,
}

#[derive(Parser, Debug)]
#[command(name="comunio", version, about="Расчёт квот сообщества собственников")]
struct Cli {
    /// Файл сообщества
    community: String,

    /// Файл расходов
    expenses: String,

    /// Выходной файл (по умолчанию stdout)
    #[arg(short='o', long="output")]
    output: Option<String>,

    /// Формат отчёта
    #[arg(long="format", value_enum, default_value="text")]
    format: Fmt,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let community_src = BufReader::new(File::open(cli.community)?);
    let expenses_src = BufReader::new(File::open(cli.expenses)?);
    let community = process(community_src, expenses_src)?;

    let mut writer: Box<dyn Write> = match cli.output {
        Some(path) => Box::new(File::create(path)?),
        None => Box::new(io::stdout()),
    };

    match cli.format {
        Fmt::Text => TextReport::write(&mut writer, &community),
        Fmt::Csv => CsvReport::write(&mut writer, &community),
        Fmt::Xml => SimpleXml::write(&mut writer, &community),
    }?;

    writer.flush().map_err(ComunioError::from)
}
