//! comuniolib: расчёт квот сообщества собственников (разбор файлов сообщества
//! и расходов, распределение по зонам, отчёты в text/CSV/XML)

pub mod engine;
pub mod error;
pub mod model;
pub mod process;
pub mod traits;

pub mod formats {
    pub mod community;
    pub mod expenses;
}

pub mod report {
    pub mod csv;
    pub mod text;
    pub mod xml;
}
