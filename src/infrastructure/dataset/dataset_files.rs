use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::domain::{FdaDataset, SIMPLIFIED_COLUMNS, SimplifiedDrugRecord};

#[derive(Debug, thiserror::Error)]
pub enum DatasetFileError {
    #[error("io error on {path}: {source}", path = path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("malformed JSON in {path}: {source}", path = path.display())]
    MalformedJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("csv write to {path} failed: {source}", path = path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

fn io_error(path: &Path) -> impl FnOnce(io::Error) -> DatasetFileError + '_ {
    move |source| DatasetFileError::Io {
        path: path.to_path_buf(),
        source,
    }
}

pub fn read_dataset(path: &Path) -> Result<FdaDataset, DatasetFileError> {
    let file = File::open(path).map_err(io_error(path))?;
    serde_json::from_reader(BufReader::new(file)).map_err(|source| {
        DatasetFileError::MalformedJson {
            path: path.to_path_buf(),
            source,
        }
    })
}

/// Pretty-printed JSON array, two-space indent.
pub fn write_json(path: &Path, records: &[SimplifiedDrugRecord]) -> Result<(), DatasetFileError> {
    let file = File::create(path).map_err(io_error(path))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, records).map_err(|source| {
        DatasetFileError::MalformedJson {
            path: path.to_path_buf(),
            source,
        }
    })?;
    writer.flush().map_err(io_error(path))
}

/// Header row followed by one row per record, columns in `SIMPLIFIED_COLUMNS` order.
pub fn write_csv(path: &Path, records: &[SimplifiedDrugRecord]) -> Result<(), DatasetFileError> {
    let csv_error = |source| DatasetFileError::Csv {
        path: path.to_path_buf(),
        source,
    };

    let mut writer = csv::Writer::from_path(path).map_err(csv_error)?;
    writer.write_record(SIMPLIFIED_COLUMNS).map_err(csv_error)?;
    for record in records {
        writer.write_record(record.csv_row()).map_err(csv_error)?;
    }
    writer.flush().map_err(io_error(path))
}
