use std::fs::File;
use std::io;

use driftwatch_core::frame::{Column, Frame};

/// Load a delimited file into a [`Frame`], columns in header order.
pub fn read_frame(path: &str) -> Result<Frame, Box<dyn std::error::Error>> {
    let file = File::open(path).map_err(|e| format!("Failed to read '{}': {}", path, e))?;
    frame_from_reader(csv::Reader::from_reader(file))
        .map_err(|e| format!("Failed to parse '{}': {}", path, e).into())
}

/// Build a [`Frame`] from any CSV source.
///
/// A column comes out numeric when every non-empty cell parses as a finite
/// f64; empty cells count as missing values and are dropped from it.
/// Anything else stays a text column and is left out of drift scoring.
pub fn frame_from_reader<R: io::Read>(mut reader: csv::Reader<R>) -> Result<Frame, csv::Error> {
    let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();

    let mut cells: Vec<Vec<String>> = vec![Vec::new(); headers.len()];
    for record in reader.records() {
        let record = record?;
        for (i, cell) in record.iter().enumerate() {
            if i < cells.len() {
                cells[i].push(cell.to_string());
            }
        }
    }

    let mut frame = Frame::new();
    for (name, raw) in headers.into_iter().zip(cells) {
        frame.insert(name, infer_column(raw));
    }
    Ok(frame)
}

fn infer_column(raw: Vec<String>) -> Column {
    let mut numeric = Vec::with_capacity(raw.len());
    let mut all_numeric = true;
    for cell in &raw {
        let cell = cell.trim();
        if cell.is_empty() {
            continue;
        }
        match cell.parse::<f64>() {
            Ok(value) if value.is_finite() => numeric.push(value),
            _ => {
                all_numeric = false;
                break;
            }
        }
    }
    if all_numeric && !numeric.is_empty() {
        Column::Numeric(numeric)
    } else {
        Column::Text(raw)
    }
}
