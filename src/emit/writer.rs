// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Table writers.
//!
//! A [`TableWriter`] is handed each table of a family in ascending `k`, then
//! gets one [`TableWriter::finish`] call for anything that needs the whole
//! family. Two formats are provided:
//!
//! - [`CDeclarations`]: C array initializers, optionally followed by pointer
//!   tables indexed by `k`.
//! - [`JsonLines`]: one JSON object per table.
//!
//! Writers format into any `io::Write`. The binary hands them an in-memory
//! buffer so nothing reaches stdout unless the whole family was produced.

use std::fmt::Display;
use std::io::Write;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::emit::{CodeFamily, EmittedCodeTable};
use crate::error::GoldilocksError;

/// Receives the tables of a family in order.
pub trait TableWriter {
    fn write_table(
        &mut self,
        table: &EmittedCodeTable,
        out: &mut dyn Write,
    ) -> Result<(), GoldilocksError>;

    /// Called once after the last table.
    fn finish(&mut self, _family: &CodeFamily, _out: &mut dyn Write) -> Result<(), GoldilocksError> {
        Ok(())
    }
}

/// Stream every table of `family` through `writer`.
pub fn write_family<W: TableWriter + ?Sized>(
    writer: &mut W,
    family: &CodeFamily,
    out: &mut dyn Write,
) -> Result<(), GoldilocksError> {
    for table in family.tables() {
        debug!(
            table = %table.name(),
            data_per_parity = ?table.data_per_parity(),
            "emit table"
        );
        writer.write_table(&table, out)?;
    }
    writer.finish(family, out)
}

/// C type used for the table arrays.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Declaration {
    /// `int`, as printed by the standalone generator.
    #[default]
    Plain,
    /// `static unsigned int`, as used inside a header.
    Static,
}

impl Declaration {
    fn keyword(self) -> &'static str {
        match self {
            Declaration::Plain => "int",
            Declaration::Static => "static unsigned int",
        }
    }
}

/// Writes each table as a pair of C array definitions.
#[derive(Debug, Clone, Default)]
pub struct CDeclarations {
    declaration: Declaration,
    index: bool,
}

impl CDeclarations {
    pub fn new(declaration: Declaration, index: bool) -> Self {
        Self { declaration, index }
    }

    fn write_index(
        &self,
        family: &CodeFamily,
        kind: &str,
        out: &mut dyn Write,
    ) -> Result<(), GoldilocksError> {
        let params = family.params();
        let hd = params.hamming_distance();
        let slots = (0..=family.last_k()).map(|k| {
            if k < family.first_k() {
                "0".to_string()
            } else {
                format!("g_{}_{}_{}_hd_code_{}_bms", k, params.parities(), hd, kind)
            }
        });
        writeln!(
            out,
            "static unsigned int * hd{}_m{}_{}[{}] = {};",
            hd,
            params.parities(),
            kind,
            family.last_k() + 1,
            braced(slots)
        )?;
        Ok(())
    }
}

impl TableWriter for CDeclarations {
    fn write_table(
        &mut self,
        table: &EmittedCodeTable,
        out: &mut dyn Write,
    ) -> Result<(), GoldilocksError> {
        let keyword = self.declaration.keyword();
        let name = table.name();
        writeln!(
            out,
            "{} g_{}_hd_code_parity_bms[] = {};",
            keyword,
            name,
            braced(table.parity_bms().iter())
        )?;
        writeln!(
            out,
            "{} g_{}_hd_code_data_bms[] = {};",
            keyword,
            name,
            braced(table.data_bms().iter().map(|c| c.bits()))
        )?;
        Ok(())
    }

    fn finish(&mut self, family: &CodeFamily, out: &mut dyn Write) -> Result<(), GoldilocksError> {
        if self.index {
            self.write_index(family, "parity", out)?;
            self.write_index(family, "data", out)?;
        }
        Ok(())
    }
}

/// `{ a, b, c }`; an empty list gives `{  }`.
fn braced<I>(items: I) -> String
where
    I: IntoIterator,
    I::Item: Display,
{
    let body: Vec<String> = items.into_iter().map(|item| item.to_string()).collect();
    format!("{{ {} }}", body.join(", "))
}

/// One line of JSON-lines output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableRecord {
    pub name: String,
    pub k: usize,
    pub m: usize,
    pub hd: usize,
    pub data_bms: Vec<u64>,
    /// Decimal strings; entries can exceed 64 bits.
    pub parity_bms: Vec<String>,
}

impl From<&EmittedCodeTable> for TableRecord {
    fn from(table: &EmittedCodeTable) -> Self {
        let params = table.params();
        Self {
            name: table.name(),
            k: table.k(),
            m: params.parities(),
            hd: params.hamming_distance(),
            data_bms: table.data_bms().iter().map(|c| c.bits()).collect(),
            parity_bms: table.parity_bms().iter().map(|row| row.to_decimal()).collect(),
        }
    }
}

/// Writes each table as a single-line JSON object.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonLines;

impl TableWriter for JsonLines {
    fn write_table(
        &mut self,
        table: &EmittedCodeTable,
        out: &mut dyn Write,
    ) -> Result<(), GoldilocksError> {
        serde_json::to_writer(&mut *out, &TableRecord::from(table))?;
        writeln!(out)?;
        Ok(())
    }
}
