//! Текстовый отчёт: сводка по зонам и квоты собственников.

use crate::{engine, error::Result, model::Community, traits::WriteReport};
use std::io::Write;

pub struct TextReport;

impl WriteReport for TextReport {
    fn write<W: Write>(mut w: W, community: &Community) -> Result<()> {
        writeln!(
            w,
            "Community {}: {} ({})",
            community.id, community.name, community.locality
        )?;
        writeln!(w)?;

        writeln!(w, "Zone totals:")?;
        for (zone_id, total) in &community.zone_totals {
            let name = community
                .zone(zone_id)
                .map(|z| z.name.as_str())
                .unwrap_or(zone_id);
            writeln!(w, "  {zone_id} {name}: {total:.2}")?;
        }
        writeln!(w, "Grand total: {:.2}", community.grand_total)?;
        writeln!(w)?;

        writeln!(w, "Fees by owner:")?;
        for (owner_code, owner_fees) in &engine::fees_by_owner(community) {
            let name = community
                .owner(owner_code)
                .map(|o| o.name.as_str())
                .unwrap_or("");
            writeln!(w, "  {owner_code} {name}")?;
            for (zone_id, fee) in owner_fees {
                writeln!(w, "    {zone_id}: {fee:.2}")?;
            }
        }
        Ok(())
    }
}
