//! Reference data loading.
//!
//! The widget needs three static JSON documents before it can render:
//! `cities.json`, `currencies.json` and `rates.json`. They are read in
//! parallel, one thread per file, and the results are collected over a
//! `crossbeam_channel`. Loading is all-or-nothing: the first failure is
//! reported as `FxError::DataLoad` and no partial data is returned.
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};
use std::thread;

use crossbeam_channel::unbounded;
use log::{debug, error, info};

use crate::error::FxError;
use crate::model::{City, Currency, RatesTable, ReferenceData};
use crate::Result;

/// File name of the city list inside the data directory.
pub const CITIES_FILE: &str = "cities.json";
/// File name of the currency list inside the data directory.
pub const CURRENCIES_FILE: &str = "currencies.json";
/// File name of the rate list inside the data directory.
pub const RATES_FILE: &str = "rates.json";

/// Trait providing JSON parsing for a reference table.
pub trait TableParser: Sized {
    /// File name of the table inside the data directory.
    const FILE_NAME: &'static str;

    /// Parses the table from a reader holding the JSON document.
    fn parse_from_reader<R: Read>(reader: R) -> Result<Self>;

    /// Opens `dir/FILE_NAME` and parses it.
    fn load_from_dir(dir: &Path) -> Result<Self> {
        let path = dir.join(Self::FILE_NAME);
        let file = File::open(&path)
            .map_err(|e| FxError::DataLoad(format!("{}: {}", path.display(), e)))?;
        Self::parse_from_reader(BufReader::new(file))
            .map_err(|e| FxError::DataLoad(format!("{}: {}", path.display(), e)))
    }
}

impl TableParser for Vec<City> {
    const FILE_NAME: &'static str = CITIES_FILE;

    fn parse_from_reader<R: Read>(reader: R) -> Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }
}

impl TableParser for Vec<Currency> {
    const FILE_NAME: &'static str = CURRENCIES_FILE;

    fn parse_from_reader<R: Read>(reader: R) -> Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }
}

impl TableParser for RatesTable {
    const FILE_NAME: &'static str = RATES_FILE;

    fn parse_from_reader<R: Read>(mut reader: R) -> Result<Self> {
        let mut buf = Vec::new();
        reader.read_to_end(&mut buf)?;
        RatesTable::from_json_slice(&buf)
    }
}

enum Loaded {
    Cities(Vec<City>),
    Currencies(Vec<Currency>),
    Rates(RatesTable),
}

impl ReferenceData {
    /// Load all three tables from `dir` in parallel.
    pub fn load_dir(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        info!("Loading reference data from {}", dir.display());

        let (tx, rx) = unbounded::<Result<Loaded>>();
        {
            let (tx, dir) = (tx.clone(), dir.clone());
            thread::spawn(move || {
                let _ = tx.send(Vec::<City>::load_from_dir(&dir).map(Loaded::Cities));
            });
        }
        {
            let (tx, dir) = (tx.clone(), dir.clone());
            thread::spawn(move || {
                let _ = tx.send(Vec::<Currency>::load_from_dir(&dir).map(Loaded::Currencies));
            });
        }
        {
            let dir = dir.clone();
            thread::spawn(move || {
                let _ = tx.send(RatesTable::load_from_dir(&dir).map(Loaded::Rates));
            });
        }

        let mut data = ReferenceData::default();
        for _ in 0..3 {
            match rx.recv()? {
                Ok(Loaded::Cities(cities)) => data.cities = cities,
                Ok(Loaded::Currencies(currencies)) => data.currencies = currencies,
                Ok(Loaded::Rates(rates)) => data.rates = rates,
                Err(e) => {
                    error!("Reference data load failed: {}", e);
                    return Err(e);
                }
            }
        }

        debug!(
            "Loaded {} cities, {} currencies, {} rates",
            data.cities.len(),
            data.currencies.len(),
            data.rates.len()
        );
        Ok(data)
    }
}
