//! Упрощённый XML-отчёт: <XmlReport> с итогами зон и квотами собственников.

use crate::{
    engine,
    error::{ComunioError, Result},
    model::Community,
    traits::WriteReport,
};
use quick_xml::se::to_string;
use rust_decimal::Decimal;
use serde::Serialize;
use std::io::Write;

#[derive(Serialize)]
struct XmlZoneTotal {
    id: String,
    name: String,
    #[serde(with = "rust_decimal::serde::str")]
    total: Decimal,
}

#[derive(Serialize)]
struct XmlFee {
    zone: String,
    #[serde(with = "rust_decimal::serde::str")]
    amount: Decimal,
}

#[derive(Serialize)]
struct XmlOwner {
    code: String,
    name: String,
    fees: Vec<XmlFee>,
}

#[derive(Serialize)]
struct XmlReport {
    community_id: String,
    community_name: String,
    locality: String,
    zone_totals: Vec<XmlZoneTotal>,
    #[serde(with = "rust_decimal::serde::str")]
    grand_total: Decimal,
    owners: Vec<XmlOwner>,
}

pub struct SimpleXml;

impl WriteReport for SimpleXml {
    fn write<W: Write>(mut w: W, community: &Community) -> Result<()> {
        let zone_totals = community
            .zone_totals
            .iter()
            .map(|(id, total)| XmlZoneTotal {
                id: id.clone(),
                name: community
                    .zone(id)
                    .map(|z| z.name.clone())
                    .unwrap_or_default(),
                total: *total,
            })
            .collect();

        let owners = engine::fees_by_owner(community)
            .into_iter()
            .map(|(code, fees)| XmlOwner {
                name: community
                    .owner(&code)
                    .map(|o| o.name.clone())
                    .unwrap_or_default(),
                code,
                fees: fees
                    .into_iter()
                    .map(|(zone, amount)| XmlFee { zone, amount })
                    .collect(),
            })
            .collect();

        let report = XmlReport {
            community_id: community.id.clone(),
            community_name: community.name.clone(),
            locality: community.locality.clone(),
            zone_totals,
            grand_total: community.grand_total,
            owners,
        };

        let s = to_string(&report).map_err(|e| ComunioError::Xml(format!("{e}")))?;
        w.write_all(s.as_bytes())?;
        Ok(())
    }
}
