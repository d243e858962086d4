//! Triangle classification.
//!
//! [`classify`] takes three side lengths of any type and returns one of the
//! [`Classification`] labels. It never fails: invalid input is itself a label.
//! Use [`Triangle::try_new`] to find out why a triple was rejected.

use std::{env::VarError, io, path::PathBuf};

pub mod batch;
pub mod classification;
pub mod side;
pub mod triangle;


pub use crate::{
    classification::Classification,
    side::{Bounds, InvalidSide, RawSide, Side},
    triangle::{classify, classify_sides, classify_with, Position, Rejection, Triangle},
};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{0}")]
    Io(#[from] io::Error),
    #[error("unicode error env var {0}")]
    EnvVarUnicode(&'static str),
    #[error("invalid value for env var {0}: '{1}'")]
    EnvVarFormat(&'static str, String),
    #[error("invalid side bounds {min}..={max}")]
    Bounds { min: u32, max: u32 },
    #[error("failed to read csv: {0}")]
    Csv(#[from] csv::Error),
    #[error("failed to read csv file {0}: {1}")]
    CsvFile(PathBuf, csv::Error),
    #[error("expected csv header 'a,b,c', found '{0}'")]
    InputHeader(String),
}
impl Error {
    pub fn in_csv_file(self, f: impl Into<PathBuf>) -> Self {
        match self {
            Self::Csv(e) => Self::CsvFile(f.into(), e),
            s => s,
        }
    }
}

pub fn get_env_var_option(var_name: &'static str) -> Result<Option<String>, Error> {
    match std::env::var(var_name) {
        Ok(s) => Ok(Some(s)),
        Err(VarError::NotPresent) => Ok(None),
        Err(VarError::NotUnicode(_)) => Err(Error::EnvVarUnicode(var_name)),
    }
}
