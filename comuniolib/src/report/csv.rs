//! CSV-отчёт: строка на каждую пару собственник/зона.
//! Заголовки: owner_code,owner_name,zone_id,zone_name,fee

use crate::{engine, error::Result, model::Community, traits::WriteReport};
use csv::WriterBuilder;
use std::io::Write;

#[derive(serde::Serialize)]
struct CsvFeeRow<'a> {
    owner_code: &'a str,
    owner_name: &'a str,
    zone_id: &'a str,
    zone_name: &'a str,
    fee: String,
}

pub struct CsvReport;

impl WriteReport for CsvReport {
    fn write<W: Write>(mut w: W, community: &Community) -> Result<()> {
        let mut wrt = WriterBuilder::new().from_writer(&mut w);

        for (owner_code, owner_fees) in &engine::fees_by_owner(community) {
            let owner_name = community
                .owner(owner_code)
                .map(|o| o.name.as_str())
                .unwrap_or("");
            for (zone_id, fee) in owner_fees {
                let zone_name = community
                    .zone(zone_id)
                    .map(|z| z.name.as_str())
                    .unwrap_or("");
                wrt.serialize(CsvFeeRow {
                    owner_code: owner_code.as_str(),
                    owner_name,
                    zone_id: zone_id.as_str(),
                    zone_name,
                    fee: format!("{fee:.2}"),
                })?;
            }
        }
        wrt.flush()?;
        Ok(())
    }
}
