//! Файл сообщества: секции #Comunitat/#Comunidad, #Zona,
//! #Propietari/#Propietario, #Propietat/#Propiedad.

use crate::{
    error::{ComunioError, Result},
    model::{Community, DistributionRule, Owner, Property, PropertyKind, Zone},
};
use regex::Regex;
use std::collections::BTreeMap;
use std::io::BufRead;

/// Активная секция файла; переключается строкой-маркером.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    None,
    Community,
    Zones,
    Owners,
    Properties,
}

impl Section {
    /// Маркеры сравниваются целиком; у каждой секции два варианта написания.
    /// Нераспознанный маркер выключает разбор до следующего известного.
    fn from_marker(line: &str) -> Section {
        match line {
            "#Comunitat" | "#Comunidad" => Section::Community,
            "#Zona" => Section::Zones,
            "#Propietari" | "#Propietario" => Section::Owners,
            "#Propietat" | "#Propiedad" => Section::Properties,
            _ => Section::None,
        }
    }
}

pub struct CommunityFile;

impl crate::traits::ReadFormat for CommunityFile {
    fn read<R: BufRead>(r: R) -> Result<Community> {
        let mut community = Community::default();
        let mut zones: BTreeMap<String, Zone> = BTreeMap::new();
        let mut owners: BTreeMap<String, Owner> = BTreeMap::new();
        let mut property_lines: Vec<String> = Vec::new();
        let mut section = Section::None;
        let mut format_valid = false;

        // пара "зона-доля": ровно один дефис, доля из цифр
        let re_share = Regex::new(r"^(?P<zone>[^-]+)-(?P<pct>\d+)$")
            .map_err(|e| ComunioError::Format(e.to_string()))?;

        for line in r.lines() {
            let line = line?;
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            if line.starts_with('#') {
                section = Section::from_marker(line);
                if section == Section::Community {
                    format_valid = true;
                }
                continue;
            }
            match section {
                Section::Community => parse_community_line(line, &mut community),
                Section::Zones => parse_zone_line(line, &mut zones),
                Section::Owners => parse_owner_line(line, &mut owners),
                // объекты ссылаются на зоны и собственников вперёд,
                // поэтому разбираются после конца потока
                Section::Properties => property_lines.push(line.to_string()),
                Section::None => {}
            }
        }

        if !format_valid {
            return Err(ComunioError::Format("invalid community file format".into()));
        }

        for line in &property_lines {
            if let Some(property) = parse_property_line(line, &zones, &owners, &re_share) {
                community.properties.push(property);
            }
        }

        community.zones = zones.into_values().collect();
        community.owners = owners.into_values().collect();
        Ok(community)
    }
}

/// id;название;населённый пункт. Повторная корректная строка перезаписывает.
fn parse_community_line(line: &str, community: &mut Community) {
    let parts: Vec<&str> = line.split(';').collect();
    if parts.len() >= 3 {
        community.id = parts[0].to_string();
        community.name = parts[1].to_string();
        community.locality = parts[2].to_string();
    }
}

/// id;название;тип распределения (берётся первый символ).
fn parse_zone_line(line: &str, zones: &mut BTreeMap<String, Zone>) {
    let parts: Vec<&str> = line.split(';').collect();
    if parts.len() < 3 {
        return;
    }
    let Some(rule_code) = parts[2].chars().next() else {
        return;
    };
    zones.insert(
        parts[0].to_string(),
        Zone {
            id: parts[0].to_string(),
            name: parts[1].to_string(),
            rule: DistributionRule::from_code(rule_code),
        },
    );
}

/// код;имя;адрес;email. Дубликат кода перезаписывает предыдущего.
fn parse_owner_line(line: &str, owners: &mut BTreeMap<String, Owner>) {
    let parts: Vec<&str> = line.split(';').collect();
    if parts.len() < 4 {
        return;
    }
    owners.insert(
        parts[0].to_string(),
        Owner {
            code: parts[0].to_string(),
            name: parts[1].to_string(),
            address: parts[2].to_string(),
            email: parts[3].to_string(),
        },
    );
}

/// тип;код;площадь;собственник;доли;код информации;дополнение.
/// Неизвестный тип или нечисловая площадь делают строку некорректной.
fn parse_property_line(
    line: &str,
    zones: &BTreeMap<String, Zone>,
    owners: &BTreeMap<String, Owner>,
    re_share: &Regex,
) -> Option<Property> {
    let parts: Vec<&str> = line.split(';').collect();
    if parts.len() < 7 {
        return None;
    }
    let kind = PropertyKind::from_code(parts[0])?;
    let area = parts[2].parse::<u32>().ok()?;

    // нет такого собственника: объект остаётся без ссылки, это не ошибка
    let owner = owners.contains_key(parts[3]).then(|| parts[3].to_string());

    let shares = parse_shares(parts[4], zones, re_share);
    let info = translate_info(kind, parts[5], parts.get(6).copied());

    Some(Property {
        code: parts[1].to_string(),
        kind,
        area,
        owner,
        shares,
        info,
        fees: BTreeMap::new(),
    })
}

/// Список пар "зона-доля" через запятую. Пара с неизвестной зоной,
/// лишними дефисами или нечисловой долей молча отбрасывается.
fn parse_shares(
    field: &str,
    zones: &BTreeMap<String, Zone>,
    re_share: &Regex,
) -> BTreeMap<String, u32> {
    let mut shares = BTreeMap::new();
    for pair in field.split(',') {
        let Some(caps) = re_share.captures(pair) else {
            continue;
        };
        let zone_id = &caps["zone"];
        if !zones.contains_key(zone_id) {
            continue;
        }
        let Ok(pct) = caps["pct"].parse::<u32>() else {
            continue;
        };
        shares.insert(zone_id.to_string(), pct);
    }
    shares
}

/// Расшифровка кода дополнительной информации. Коды жилья действуют для
/// любого типа, коды A/C только для паркинга; расшифрованная форма всегда
/// несёт разделитель перед дополнением, как в исходном формате.
fn translate_info(kind: PropertyKind, code: &str, extra: Option<&str>) -> String {
    let extra = extra.unwrap_or("");
    match code {
        "HH" => format!("Habitual dwelling;{extra}"),
        "HNH" => format!("Non-habitual dwelling;{extra}"),
        "A" if kind == PropertyKind::Parking => format!("Open;{extra}"),
        "C" if kind == PropertyKind::Parking => format!("Closed;{extra}"),
        _ if extra.is_empty() => code.to_string(),
        _ => format!("{code};{extra}"),
    }
}
