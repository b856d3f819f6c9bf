//! Bordered ASCII-table rendering of the dense containers.
//!
//! The renderer consumes a container through its shape and element accessors
//! only, and writes to an explicit sink such as a
//! [`PrintTarget`](crate::io::PrintTarget).

use crate::algebra::{checks, ArrayError, DenseArray, ErrorKind, ScalarT};
use derive_builder::Builder;
use itertools::Itertools;
use std::io::Write;
use thiserror::Error;

/// Error type returned by the table renderer.
#[derive(Error, Debug)]
pub enum RenderError {
    /// Header or settings validation failed
    #[error(transparent)]
    Invalid(#[from] ArrayError),
    /// The output sink failed
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Cell formatting options for [`render_table`].
#[derive(Builder, Debug, Clone)]
#[builder(build_fn(validate = "Self::validate"))]
pub struct FormatSettings {
    /// decimal places for floating point cells
    #[builder(default = "4")]
    pub precision: usize,

    /// blank columns left and right of each cell
    #[builder(default = "1")]
    pub padding: usize,
}

impl FormatSettingsBuilder {
    fn validate(&self) -> std::result::Result<(), String> {
        if let Some(precision) = self.precision {
            if precision > 17 {
                return Err(format!("precision {precision} exceeds supported maximum of 17"));
            }
        }
        Ok(())
    }
}

impl Default for FormatSettings {
    fn default() -> Self {
        FormatSettingsBuilder::default().build().unwrap()
    }
}

/// Renders the container as a bordered grid, one rule line between rows.
///
/// Column widths follow the widest cell in each column.
pub fn render_table<A>(
    out: &mut impl Write,
    array: &A,
    settings: &FormatSettings,
) -> Result<(), RenderError>
where
    A: DenseArray,
    A::T: ScalarT,
{
    write_grid(out, None, array, settings)
}

/// Renders the container with a leading header row.
///
/// Headers must be non-empty and match the container's column count.
pub fn render_table_with_headers<A>(
    out: &mut impl Write,
    headers: &[&str],
    array: &A,
    settings: &FormatSettings,
) -> Result<(), RenderError>
where
    A: DenseArray,
    A::T: ScalarT,
{
    checks::non_empty(headers, ErrorKind::InvalidArgument, "headers cannot be empty")?;
    checks::equal_dims(
        headers.len(),
        array.ncols(),
        ErrorKind::ShapeMismatch,
        "header count does not match column count",
    )?;
    write_grid(out, Some(headers), array, settings)
}

fn write_grid<A>(
    out: &mut impl Write,
    headers: Option<&[&str]>,
    array: &A,
    settings: &FormatSettings,
) -> Result<(), RenderError>
where
    A: DenseArray,
    A::T: ScalarT,
{
    let (nrows, ncols) = array.size();

    let cells: Vec<Vec<String>> = (0..nrows)
        .map(|i| {
            (0..ncols)
                .map(|j| format!("{:.prec$}", array[(i, j)], prec = settings.precision))
                .collect()
        })
        .collect();

    // column width = longest cell (header included when present)
    let mut widths = vec![0usize; ncols];
    if let Some(headers) = headers {
        for (w, h) in widths.iter_mut().zip(headers) {
            *w = h.len();
        }
    }
    for row in &cells {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(cell.len());
        }
    }

    let pad = " ".repeat(settings.padding);
    let rule = format!(
        "+{}+",
        widths
            .iter()
            .map(|w| "-".repeat(w + 2 * settings.padding))
            .join("+")
    );

    writeln!(out, "{rule}")?;
    if let Some(headers) = headers {
        let line = headers
            .iter()
            .zip(&widths)
            .map(|(h, w)| format!("{pad}{h:>width$}{pad}", width = *w))
            .join("|");
        writeln!(out, "|{line}|")?;
        writeln!(out, "{rule}")?;
    }
    for row in &cells {
        let line = row
            .iter()
            .zip(&widths)
            .map(|(cell, w)| format!("{pad}{cell:>width$}{pad}", width = *w))
            .join("|");
        writeln!(out, "|{line}|")?;
        writeln!(out, "{rule}")?;
    }
    Ok(())
}
