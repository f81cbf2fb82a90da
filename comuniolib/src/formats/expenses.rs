//! Файл расходов: маркер #Pressupost/#Presupuesto, строки id;описание;сумма;зона.

use crate::{
    error::{ComunioError, Result},
    model::{Community, Expense},
};
use rust_decimal::Decimal;
use std::collections::BTreeSet;
use std::io::BufRead;

pub struct ExpensesFile;

impl ExpensesFile {
    /// Зоны берутся из уже разобранного сообщества; ссылка на неизвестную
    /// зону, в отличие от долей объектов, жёсткая ошибка.
    pub fn read<R: BufRead>(r: R, community: &Community) -> Result<Vec<Expense>> {
        let zone_ids: BTreeSet<&str> = community.zones.iter().map(|z| z.id.as_str()).collect();
        let mut expenses = Vec::new();
        let mut format_valid = false;

        for line in r.lines() {
            let line = line?;
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            if line.starts_with('#') {
                if line.starts_with("#Pressupost") || line.starts_with("#Presupuesto") {
                    format_valid = true;
                }
                continue;
            }

            let parts: Vec<&str> = line.split(';').collect();
            if parts.len() < 4 {
                continue;
            }
            let amount = parts[2].parse::<Decimal>().map_err(|_| {
                ComunioError::Format(format!("bad amount format for expense {}", parts[0]))
            })?;
            if !zone_ids.contains(parts[3]) {
                return Err(ComunioError::Format(format!(
                    "zone {} does not exist for expense {}",
                    parts[3], parts[0]
                )));
            }
            expenses.push(Expense {
                id: parts[0].to_string(),
                description: parts[1].to_string(),
                amount,
                zone: parts[3].to_string(),
            });
        }

        // файл без маркера, но хотя бы с одной корректной строкой допустим
        if !format_valid && expenses.is_empty() {
            return Err(ComunioError::Format("invalid expenses file format".into()));
        }
        Ok(expenses)
    }
}
