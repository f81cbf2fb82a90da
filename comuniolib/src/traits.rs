//! Унифицированные трэйты чтения/записи на основе std::io::{BufRead, Write}.

use crate::{error::Result, model::Community};
use std::io::{BufRead, Write};

/// Чтение файла сообщества из потока.
pub trait ReadFormat {
    fn read<R: BufRead>(r: R) -> Result<Community>;
}

/// Запись отчёта по уже рассчитанному сообществу.
pub trait WriteReport {
    fn write<W: Write>(w: W, community: &Community) -> Result<()>;
}
