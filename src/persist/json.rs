//! JSON reading and writing.

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use crate::repr::ModelState;

use super::error::{ReadError, WriteError};
use super::schema::ModelRecord;

/// Options for JSON output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct JsonWriteOptions {
    /// Indent output for human reading.
    pub pretty: bool,
}

impl JsonWriteOptions {
    /// Single-line output.
    pub fn compact() -> Self {
        Self { pretty: false }
    }

    /// Indented output.
    pub fn pretty() -> Self {
        Self { pretty: true }
    }
}

fn checked_record(model: &ModelState) -> Result<ModelRecord, WriteError> {
    let record = ModelRecord::from(model);
    if !record.is_finite() {
        return Err(WriteError::NonFinite);
    }
    Ok(record)
}

/// Serialize a model to a JSON string.
///
/// # Errors
///
/// [`WriteError::NonFinite`] if any parameter is NaN or infinite.
pub fn to_json_string(model: &ModelState, options: JsonWriteOptions) -> Result<String, WriteError> {
    let record = checked_record(model)?;
    let json = if options.pretty {
        serde_json::to_string_pretty(&record)?
    } else {
        serde_json::to_string(&record)?
    };
    Ok(json)
}

/// Serialize a model as JSON into `writer`.
pub fn to_json_writer<W: Write>(
    model: &ModelState,
    writer: W,
    options: JsonWriteOptions,
) -> Result<(), WriteError> {
    let record = checked_record(model)?;
    if options.pretty {
        serde_json::to_writer_pretty(writer, &record)?;
    } else {
        serde_json::to_writer(writer, &record)?;
    }
    Ok(())
}

/// Parse a model from a JSON string.
pub fn from_json_str(json: &str) -> Result<ModelState, ReadError> {
    let record: ModelRecord = serde_json::from_str(json)?;
    Ok(record.into())
}

/// Parse a model from a JSON reader.
pub fn from_json_reader<R: Read>(reader: R) -> Result<ModelState, ReadError> {
    let record: ModelRecord = serde_json::from_reader(reader)?;
    Ok(record.into())
}

/// Write a model to a JSON file, replacing any existing file.
pub fn save_json(
    model: &ModelState,
    path: impl AsRef<Path>,
    options: JsonWriteOptions,
) -> Result<(), WriteError> {
    // Validate before touching the filesystem.
    let record = checked_record(model)?;
    let mut writer = BufWriter::new(File::create(path)?);
    if options.pretty {
        serde_json::to_writer_pretty(&mut writer, &record)?;
    } else {
        serde_json::to_writer(&mut writer, &record)?;
    }
    writer.flush()?;
    Ok(())
}

/// Read a model from a JSON file.
pub fn load_json(path: impl AsRef<Path>) -> Result<ModelState, ReadError> {
    let reader = BufReader::new(File::open(path)?);
    from_json_reader(reader)
}
