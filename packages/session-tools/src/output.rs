//! Session directories on disk: `rounds.csv`, `standings.csv` and
//! `metadata.json`, CSVs optionally gzip-compressed.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;
use scorekeeper::SessionExport;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::ToolError;

pub const ROUNDS_FILE: &str = "rounds.csv";
pub const STANDINGS_FILE: &str = "standings.csv";
pub const METADATA_FILE: &str = "metadata.json";

#[derive(Debug, Clone)]
pub struct SessionPaths {
    pub dir: PathBuf,
    pub rounds: PathBuf,
    pub standings: PathBuf,
    pub metadata: PathBuf,
}

/// Write one exported session into `dir`, creating it if needed.
pub fn write_session(
    dir: &Path,
    export: &SessionExport,
    compress: bool,
) -> Result<SessionPaths, ToolError> {
    fs::create_dir_all(dir)?;

    let rounds = write_csv(&dir.join(ROUNDS_FILE), &export.rounds, compress)?;
    let standings = write_csv(&dir.join(STANDINGS_FILE), &export.standings, compress)?;

    let metadata = dir.join(METADATA_FILE);
    let mut writer = BufWriter::new(File::create(&metadata)?);
    serde_json::to_writer_pretty(&mut writer, &export.metadata)?;
    writer.flush()?;

    Ok(SessionPaths {
        dir: dir.to_path_buf(),
        rounds,
        standings,
        metadata,
    })
}

/// Read a session directory written by [`write_session`].
pub fn read_session(dir: &Path) -> Result<SessionExport, ToolError> {
    let metadata_path = dir.join(METADATA_FILE);
    if !metadata_path.is_file() {
        return Err(ToolError::IncompleteSession {
            path: dir.to_path_buf(),
            detail: format!("missing {METADATA_FILE}"),
        });
    }
    let metadata = serde_json::from_reader(BufReader::new(File::open(metadata_path)?))?;

    Ok(SessionExport {
        metadata,
        rounds: read_csv(dir, ROUNDS_FILE)?,
        standings: read_csv(dir, STANDINGS_FILE)?,
    })
}

/// Serialize `rows` with a header line. With `compress` the file gets a
/// `.gz` suffix. Returns the path actually written.
pub fn write_csv<T: Serialize>(
    path: &Path,
    rows: &[T],
    compress: bool,
) -> Result<PathBuf, ToolError> {
    if compress {
        let gz_path = gz_path(path);
        let file = BufWriter::new(File::create(&gz_path)?);
        let encoder = serialize_rows(GzEncoder::new(file, Compression::default()), rows)?;
        encoder.finish()?.flush()?;
        Ok(gz_path)
    } else {
        let writer = BufWriter::new(File::create(path)?);
        serialize_rows(writer, rows)?.flush()?;
        Ok(path.to_path_buf())
    }
}

fn serialize_rows<W: Write, T: Serialize>(writer: W, rows: &[T]) -> Result<W, ToolError> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for row in rows {
        csv_writer.serialize(row)?;
    }
    csv_writer.into_inner().map_err(|e| ToolError::Io(e.into_error()))
}

/// Read `name` from `dir`, falling back to `name.gz`.
fn read_csv<T: DeserializeOwned>(dir: &Path, name: &str) -> Result<Vec<T>, ToolError> {
    let plain = dir.join(name);
    let compressed = gz_path(&plain);
    let reader: Box<dyn Read> = if plain.is_file() {
        Box::new(BufReader::new(File::open(&plain)?))
    } else if compressed.is_file() {
        Box::new(GzDecoder::new(BufReader::new(File::open(&compressed)?)))
    } else {
        return Err(ToolError::IncompleteSession {
            path: dir.to_path_buf(),
            detail: format!("missing {name}"),
        });
    };

    let rows = csv::Reader::from_reader(reader)
        .deserialize()
        .collect::<Result<Vec<T>, _>>()?;
    Ok(rows)
}

fn gz_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_os_string();
    name.push(".gz");
    PathBuf::from(name)
}
