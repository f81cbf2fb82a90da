use comuniolib::{process::process, report::text::TextReport, traits::WriteReport};
use std::fs::File;
use std::io::BufReader;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Пример: comunidad.txt + gastos.txt, текстовый отчёт в stdout
    let mut args = std::env::args().skip(1);
    let community_path = args.next().expect("usage: process <community> <expenses>");
    let expenses_path = args.next().expect("usage: process <community> <expenses>");

    let community = process(
        BufReader::new(File::open(community_path)?),
        BufReader::new(File::open(expenses_path)?),
    )?;
    TextReport::write(std::io::stdout(), &community)?;
    Ok(())
}
