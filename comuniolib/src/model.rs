//! Доменные модели: сообщество, зоны, собственники, объекты, расходы.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum DistributionRule {
    Proportional,
    Equal,
}

impl DistributionRule {
    /// Первый символ третьего поля строки зоны: 'P' значит пропорциональное,
    /// всё остальное читается как равное.
    pub fn from_code(code: char) -> Self {
        if code == 'P' {
            DistributionRule::Proportional
        } else {
            DistributionRule::Equal
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum PropertyKind {
    Flat,
    CommercialUnit,
    Parking,
}

impl PropertyKind {
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "P" => Some(PropertyKind::Flat),
            "L" => Some(PropertyKind::CommercialUnit),
            "G" => Some(PropertyKind::Parking),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Zone {
    pub id: String,
    pub name: String,
    pub rule: DistributionRule,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Owner {
    pub code: String,
    pub name: String,
    pub address: String,
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Property {
    pub code: String,
    pub kind: PropertyKind,
    pub area: u32,
    /// Код собственника; None, если ссылка из файла не разрешилась.
    pub owner: Option<String>,
    /// Зона → целая доля участия (по соглашению 1–100).
    pub shares: BTreeMap<String, u32>,
    /// Расшифрованная дополнительная информация.
    pub info: String,
    /// Зона → рассчитанная квота; пусто до запуска движка.
    pub fees: BTreeMap<String, Decimal>,
}

// идентичность объекта: только код, собственник в сравнении не участвует
impl PartialEq for Property {
    fn eq(&self, other: &Self) -> bool {
        self.code == other.code
    }
}

impl Eq for Property {}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Expense {
    pub id: String,
    pub description: String,
    pub amount: Decimal,
    /// Идентификатор зоны, проверен парсером расходов.
    pub zone: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Community {
    pub id: String,
    pub name: String,
    pub locality: String,
    /// Отсортированы по идентификатору.
    pub zones: Vec<Zone>,
    /// Отсортированы по коду.
    pub owners: Vec<Owner>,
    pub properties: Vec<Property>,
    pub expenses: Vec<Expense>,
    /// Зона → сумма расходов; заполняется движком, по умолчанию пусто.
    pub zone_totals: BTreeMap<String, Decimal>,
    pub grand_total: Decimal,
}

impl Community {
    pub fn zone(&self, id: &str) -> Option<&Zone> {
        self.zones.iter().find(|z| z.id == id)
    }

    pub fn owner(&self, code: &str) -> Option<&Owner> {
        self.owners.iter().find(|o| o.code == code)
    }

    /// Объекты, чья ссылка на собственника разрешается в данный код.
    pub fn properties_of<'a>(&'a self, owner_code: &'a str) -> impl Iterator<Item = &'a Property> {
        self.properties
            .iter()
            .filter(move |p| p.owner.as_deref() == Some(owner_code))
    }
}
