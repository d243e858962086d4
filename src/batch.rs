//! Classify many triples at once, read from csv.
//!
//! Input files must start with the header `a,b,c`. Every cell is interpreted with
//! [`RawSide::parse_arg`], so an empty cell counts as a missing value. The
//! report has one line per input row with the header `a,b,c,classification`.

use std::{collections::BTreeMap, fs::File, io, path::Path};

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

use crate::{side::Bounds, triangle::Triangle, Classification, Error, RawSide};

pub const INPUT_HEADER: &str = "a,b,c";
pub const REPORT_HEADER: &str = "a,b,c,classification";

#[derive(Debug, Deserialize)]
struct InputLine {
    a: String,
    b: String,
    c: String,
}

#[derive(Debug, Serialize)]
struct ReportLine {
    a: String,
    b: String,
    c: String,
    classification: Classification,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchRow {
    pub a: RawSide,
    pub b: RawSide,
    pub c: RawSide,
    pub classification: Classification,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BatchReport {
    pub rows: Vec<BatchRow>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BatchSummary {
    pub total: usize,
    pub counts: BTreeMap<Classification, usize>,
}

pub fn classify_reader(reader: impl io::Read, bounds: Bounds) -> Result<BatchReport, Error> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = reader.headers()?;
    if !headers.iter().eq(INPUT_HEADER.split(',')) {
        return Err(Error::InputHeader(
            headers.iter().collect::<Vec<_>>().join(","),
        ));
    }

    let mut rows = vec![];
    for (i, line) in reader.deserialize::<InputLine>().enumerate() {
        let InputLine { a, b, c } = line?;
        let (a, b, c) = (
            RawSide::parse_arg(&a),
            RawSide::parse_arg(&b),
            RawSide::parse_arg(&c),
        );
        let classification =
            match Triangle::try_new_with(bounds, a.clone(), b.clone(), c.clone()) {
                Ok(t) => t.shape(),
                Err(rejection) => {
                    log::debug!("row {}: {rejection}", i + 1);
                    rejection.into()
                }
            };
        rows.push(BatchRow {
            a,
            b,
            c,
            classification,
        });
    }
    log::info!("classified {} rows", rows.len());
    Ok(BatchReport { rows })
}

pub fn classify_path(path: impl AsRef<Path>, bounds: Bounds) -> Result<BatchReport, Error> {
    let path = path.as_ref();
    let file = File::open(path)?;
    classify_reader(file, bounds).map_err(|e| e.in_csv_file(path))
}

impl BatchReport {
    pub fn summary(&self) -> BatchSummary {
        let mut counts = Classification::iter()
            .map(|c| (c, 0))
            .collect::<BTreeMap<_, _>>();
        for row in &self.rows {
            *counts.entry(row.classification).or_default() += 1;
        }
        BatchSummary {
            total: self.rows.len(),
            counts,
        }
    }

    pub fn write_csv(&self, writer: impl io::Write) -> Result<(), Error> {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(writer);
        writer.write_record(REPORT_HEADER.split(','))?;
        for row in &self.rows {
            writer.serialize(ReportLine {
                a: row.a.to_string(),
                b: row.b.to_string(),
                c: row.c.to_string(),
                classification: row.classification,
            })?;
        }
        writer.flush()?;
        Ok(())
    }
}

impl BatchSummary {
    pub fn count(&self, classification: Classification) -> usize {
        self.counts.get(&classification).copied().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_in_order() {
        let input = "a,b,c\n3,4,5\n1,1,2\n1.5,1,1\n";
        let report = classify_reader(input.as_bytes(), Bounds::DEFAULT).unwrap();
        let labels = report
            .rows
            .iter()
            .map(|r| r.classification)
            .collect::<Vec<_>>();
        assert_eq!(
            labels,
            [
                Classification::Right,
                Classification::NotATriangle,
                Classification::InvalidInput
            ]
        );
        assert_eq!(report.rows[2].a, RawSide::Float(1.5));
    }

    #[test]
    fn empty_cell_is_missing() {
        let report = classify_reader("a,b,c\n1, ,1\n".as_bytes(), Bounds::DEFAULT).unwrap();
        assert_eq!(report.rows[0].b, RawSide::Missing);
        assert_eq!(report.rows[0].classification, Classification::InvalidInput);
    }

    #[test]
    fn short_row_is_error() {
        let res = classify_reader("a,b,c\n1,2\n".as_bytes(), Bounds::DEFAULT);
        assert!(matches!(res, Err(Error::Csv(_))));
    }

    #[test]
    fn wrong_header() {
        let res = classify_reader("c,b,a\n3,4,5\n".as_bytes(), Bounds::DEFAULT);
        assert!(matches!(res, Err(Error::InputHeader(h)) if h == "c,b,a"));
        let res = classify_reader("".as_bytes(), Bounds::DEFAULT);
        assert!(matches!(res, Err(Error::InputHeader(h)) if h.is_empty()));
        let res = classify_reader(" a , b , c \n3,4,5\n".as_bytes(), Bounds::DEFAULT);
        assert_eq!(res.unwrap().rows[0].classification, Classification::Right);
    }

    #[test]
    fn summary_has_all_labels() {
        let report = classify_reader("a,b,c\n2,2,2\n2,2,3\n".as_bytes(), Bounds::DEFAULT).unwrap();
        let summary = report.summary();
        assert_eq!(summary.total, 2);
        assert_eq!(summary.counts.len(), 6);
        assert_eq!(summary.count(Classification::Equilateral), 1);
        assert_eq!(summary.count(Classification::Isoceles), 1);
        assert_eq!(summary.count(Classification::Right), 0);
    }

    #[test]
    fn write_report() {
        let report = classify_reader("a,b,c\n2,4,3\nx,,1\n".as_bytes(), Bounds::DEFAULT).unwrap();
        let mut out = vec![];
        report.write_csv(&mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "a,b,c,classification\n2,4,3,Scalene\nx,,1,InvalidInput\n"
        );
    }

    #[test]
    fn write_empty_report() {
        let mut out = vec![];
        BatchReport::default().write_csv(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), format!("{REPORT_HEADER}\n"));
    }
}
