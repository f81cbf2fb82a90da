//! Полный цикл обработки: файл сообщества, файл расходов, расчёт квот.

use crate::{
    engine,
    error::Result,
    formats::{community::CommunityFile, expenses::ExpensesFile},
    model::Community,
    traits::ReadFormat,
};
use std::io::BufRead;

/// Одна партия "разобрать и посчитать"; состояние между вызовами не хранится,
/// каждый вызов строит собственное сообщество.
pub fn process<C: BufRead, E: BufRead>(community_src: C, expenses_src: E) -> Result<Community> {
    let mut community = CommunityFile::read(community_src)?;
    let expenses = ExpensesFile::read(expenses_src, &community)?;
    engine::compute_fees(&mut community, &expenses);
    community.expenses = expenses;
    Ok(community)
}
