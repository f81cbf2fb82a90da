use comuniolib::{
    formats::{community::CommunityFile, expenses::ExpensesFile},
    model::Community,
    traits::ReadFormat,
};
use rust_decimal::Decimal;
use std::io::Cursor;

fn community() -> Community {
    let input = "#Comunidad
C1;Les Oliveres;Barcelona
#Zona
Z1;Ascensor;P
Z2;Jardin;I
";
    CommunityFile::read(Cursor::new(input)).expect("read community")
}

#[test]
fn expenses_read_minimal() {
    let input = "#Presupuesto
E1;Mantenimiento ascensor;120.50;Z1
E2;Poda;80.00;Z2
";
    let expenses = ExpensesFile::read(Cursor::new(input), &community()).expect("read expenses");
    assert_eq!(expenses.len(), 2);
    assert_eq!(expenses[0].id, "E1");
    assert_eq!(expenses[0].description, "Mantenimiento ascensor");
    assert_eq!(expenses[0].amount, Decimal::from_str_exact("120.50").unwrap());
    assert_eq!(expenses[0].zone, "Z1");
    assert_eq!(expenses[1].amount, Decimal::new(8000, 2));
}

#[test]
fn bad_amount_names_expense() {
    let input = "#Presupuesto
E1;Luz;abc;Z1
";
    let err = ExpensesFile::read(Cursor::new(input), &community()).unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("amount"));
    assert!(msg.contains("E1"));
}

#[test]
fn unknown_zone_names_zone_and_expense() {
    let input = "#Presupuesto
E1;Luz;10.00;Z1
E2;Agua;20.00;Z9
";
    let err = ExpensesFile::read(Cursor::new(input), &community()).unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("Z9"));
    assert!(msg.contains("E2"));
}

#[test]
fn missing_marker_with_valid_line_is_accepted() {
    let input = "E1;Luz;10.00;Z1\n";
    let expenses = ExpensesFile::read(Cursor::new(input), &community()).expect("read expenses");
    assert_eq!(expenses.len(), 1);
}

#[test]
fn missing_marker_without_lines_is_rejected() {
    let input = "algo;corto\n";
    let err = ExpensesFile::read(Cursor::new(input), &community()).unwrap_err();
    assert!(err.to_string().contains("invalid expenses file format"));
}

#[test]
fn marker_only_file_yields_empty_list() {
    let input = "#Pressupost\n";
    let expenses = ExpensesFile::read(Cursor::new(input), &community()).expect("read expenses");
    assert!(expenses.is_empty());
}

#[test]
fn short_lines_are_skipped() {
    let input = "#Presupuesto
E1;Luz;10.00;Z1
demasiado;corto
";
    let expenses = ExpensesFile::read(Cursor::new(input), &community()).expect("read expenses");
    assert_eq!(expenses.len(), 1);
}
