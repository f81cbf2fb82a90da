//! Распределение расходов по зонам и агрегация квот.

use crate::model::{Community, DistributionRule, Expense, Property};
use rust_decimal::{Decimal, RoundingStrategy};
use std::collections::BTreeMap;

/// Округление квоты до цента всегда в большую сторону (от нуля).
/// Сумма квот зоны может превышать её итог до цента на объект;
/// перебор не перераспределяется.
fn ceil_cents(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::AwayFromZero)
}

/// Считает квоты объектов по каждой зоне и итоги сообщества.
/// Структурно некорректные расходы сюда не попадают, поэтому вырожденные
/// случаи не ошибки: квоты просто остаются неназначенными.
pub fn compute_fees(community: &mut Community, expenses: &[Expense]) {
    // 1. итог расходов по каждой зоне
    let mut totals: BTreeMap<String, Decimal> = BTreeMap::new();
    for expense in expenses {
        *totals.entry(expense.zone.clone()).or_insert(Decimal::ZERO) += expense.amount;
    }

    // 2. распределение по правилу зоны
    for (zone_id, total) in &totals {
        let Some(rule) = community.zone(zone_id).map(|z| z.rule) else {
            continue;
        };
        match rule {
            DistributionRule::Proportional => {
                apportion_proportional(&mut community.properties, zone_id, *total)
            }
            DistributionRule::Equal => {
                apportion_equal(&mut community.properties, zone_id, *total)
            }
        }
    }

    // 3. сводка сообщества; при пустом списке расходов остаются
    // пустая карта и нулевой итог
    community.grand_total = totals.values().copied().sum();
    community.zone_totals = totals;
}

/// Пропорциональное распределение по целым долям участвующих объектов.
fn apportion_proportional(properties: &mut [Property], zone_id: &str, total: Decimal) {
    let share_sum: u32 = properties
        .iter()
        .filter_map(|p| p.shares.get(zone_id))
        .sum();
    if share_sum == 0 {
        return;
    }
    for property in properties.iter_mut() {
        if let Some(&share) = property.shares.get(zone_id) {
            let fee = ceil_cents(total * Decimal::from(share) / Decimal::from(share_sum));
            property.fees.insert(zone_id.to_string(), fee);
        }
    }
}

/// Равное распределение: важно само участие в зоне, размер доли не важен.
fn apportion_equal(properties: &mut [Property], zone_id: &str, total: Decimal) {
    let count = properties
        .iter()
        .filter(|p| p.shares.contains_key(zone_id))
        .count();
    if count == 0 {
        return;
    }
    let fee = ceil_cents(total / Decimal::from(count));
    for property in properties.iter_mut() {
        if property.shares.contains_key(zone_id) {
            property.fees.insert(zone_id.to_string(), fee);
        }
    }
}

/// Квоты по собственникам: сумма квот всех их объектов, зона за зоной.
/// Пересчитывается из состояния объектов при каждом вызове; собственник
/// без объектов получает пустую карту, а не отсутствие записи.
pub fn fees_by_owner(community: &Community) -> BTreeMap<String, BTreeMap<String, Decimal>> {
    let mut result = BTreeMap::new();
    for owner in &community.owners {
        let mut owner_fees: BTreeMap<String, Decimal> = BTreeMap::new();
        for property in community.properties_of(&owner.code) {
            for (zone_id, fee) in &property.fees {
                *owner_fees.entry(zone_id.clone()).or_insert(Decimal::ZERO) += *fee;
            }
        }
        result.insert(owner.code.clone(), owner_fees);
    }
    result
}
