//! Delimited-file implementation of the SurveyDataset port.
//!
//! The header row must name all five attribute columns; their order does
//! not matter and extra columns are ignored. Empty cells are missing answers.

use csv::{ReaderBuilder, StringRecord, Trim};
use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::{Path, PathBuf};

use crate::domain::survey::{SurveyAnswers, SurveyAttribute};
use crate::ports::{DatasetError, SurveyDataset};

/// Survey rows read from a `;`-delimited file by default.
#[derive(Debug, Clone)]
pub struct CsvSurveyDataset {
    path: PathBuf,
    delimiter: u8,
}

impl CsvSurveyDataset {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            delimiter: b';',
        }
    }

    /// Sets the field delimiter.
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Parses rows from any reader using this dataset's settings.
    fn parse<R: Read>(&self, source: R) -> Result<Vec<SurveyAnswers>, DatasetError> {
        let mut reader = ReaderBuilder::new()
            .delimiter(self.delimiter)
            .has_headers(true)
            .flexible(true)
            .trim(Trim::All)
            .from_reader(source);

        let headers = reader.headers().map_err(malformed)?.clone();
        let columns = column_positions(&headers)?;

        let mut rows = Vec::new();
        for result in reader.records() {
            let record = result.map_err(malformed)?;
            let answers = columns
                .iter()
                .fold(SurveyAnswers::default(), |answers, (attribute, idx)| {
                    match record.get(*idx).filter(|cell| !cell.is_empty()) {
                        Some(cell) => answers.with(*attribute, cell),
                        None => answers,
                    }
                });
            rows.push(answers);
        }
        Ok(rows)
    }
}

impl SurveyDataset for CsvSurveyDataset {
    fn read_all(&self) -> Result<Vec<SurveyAnswers>, DatasetError> {
        let file = File::open(&self.path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => DatasetError::NotFound(self.path.display().to_string()),
            _ => DatasetError::Io(format!("{}: {}", self.path.display(), e)),
        })?;

        let rows = self.parse(file)?;
        tracing::info!(rows = rows.len(), path = %self.path.display(), "Survey dataset read");
        Ok(rows)
    }
}

/// Column index of every attribute in the header row.
fn column_positions(
    headers: &StringRecord,
) -> Result<Vec<(SurveyAttribute, usize)>, DatasetError> {
    SurveyAttribute::all()
        .iter()
        .map(|attribute| {
            headers
                .iter()
                .position(|h| h == attribute.name())
                .map(|idx| (*attribute, idx))
                .ok_or_else(|| DatasetError::MissingColumn(attribute.name().to_string()))
        })
        .collect()
}

fn malformed(err: csv::Error) -> DatasetError {
    let line = err.position().map(|p| p.line()).unwrap_or(0);
    DatasetError::Malformed {
        line,
        reason: err.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const SAMPLE: &str = "\
id;gender;age;edu_level;fav_animals;fav_place;hobby
1;Kobieta;25-34;Wyższe;Psy;W górach;Sztuka
2;Mężczyzna;<18;Podstawowe;Koty;;Gry
3;;unknown;Średnie;Brak ulubionych;Nad wodą;
";

    fn dataset_with(content: &str) -> (TempDir, CsvSurveyDataset) {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("survey.csv");
        fs::write(&path, content).unwrap();
        (dir, CsvSurveyDataset::new(path))
    }

    #[test]
    fn reads_rows_by_header_name() {
        let (_dir, dataset) = dataset_with(SAMPLE);
        let rows = dataset.read_all().unwrap();

        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].get(SurveyAttribute::Gender), Some("Kobieta"));
        assert_eq!(rows[0].get(SurveyAttribute::FavPlace), Some("W górach"));
        assert_eq!(rows[1].get(SurveyAttribute::Age), Some("<18"));
    }

    #[test]
    fn empty_cells_are_missing() {
        let (_dir, dataset) = dataset_with(SAMPLE);
        let rows = dataset.read_all().unwrap();

        assert_eq!(rows[1].missing(), vec![SurveyAttribute::FavPlace]);
        assert_eq!(rows[2].missing(), vec![SurveyAttribute::Gender]);
    }

    #[test]
    fn short_rows_leave_trailing_answers_missing() {
        let (_dir, dataset) = dataset_with("age;edu_level;fav_animals;fav_place;gender\n18-24;Wyższe\n");
        let rows = dataset.read_all().unwrap();

        assert_eq!(rows[0].missing().len(), 3);
    }

    #[test]
    fn custom_delimiter_is_honoured() {
        let (_dir, dataset) =
            dataset_with("age,edu_level,fav_animals,fav_place,gender\n>=65,Wyższe,Inne,Inne,Kobieta\n");
        let rows = dataset.with_delimiter(b',').read_all().unwrap();

        assert_eq!(rows[0].get(SurveyAttribute::Age), Some(">=65"));
        assert!(rows[0].missing().is_empty());
    }

    #[test]
    fn missing_column_is_reported() {
        let (_dir, dataset) = dataset_with("age;edu_level;fav_animals;gender\n");
        assert!(matches!(
            dataset.read_all(),
            Err(DatasetError::MissingColumn(ref c)) if c == "fav_place"
        ));
    }

    #[test]
    fn missing_file_is_not_found() {
        let dataset = CsvSurveyDataset::new("/nonexistent/survey.csv");
        assert!(matches!(dataset.read_all(), Err(DatasetError::NotFound(_))));
    }

    #[test]
    fn header_only_file_has_no_rows() {
        let (_dir, dataset) = dataset_with("age;edu_level;fav_animals;fav_place;gender\n");
        assert!(dataset.read_all().unwrap().is_empty());
    }
}
