use std::path::{Path, PathBuf};

use tracing::info;

use super::provider::{collect_category, RosterProvider};
use super::record::RawPlayerRecord;
use super::RosterError;
use crate::models::Player;

/// Roster export in CSV form, one row per `players` table record.
///
/// Expected header: `id,name,identification,category,position,image_url,status`.
/// `position` and `image_url` may be empty.
#[derive(Debug, Clone)]
pub struct CsvRoster {
    path: PathBuf,
}

impl CsvRoster {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn read_records(&self) -> Result<Vec<RawPlayerRecord>, RosterError> {
        let mut reader = csv::ReaderBuilder::new().has_headers(true).trim(csv::Trim::All).from_path(&self.path)?;

        let mut records = Vec::new();
        for row in reader.deserialize::<RawPlayerRecord>() {
            records.push(row?);
        }

        info!("Read {} roster rows from {}", records.len(), self.path.display());
        Ok(records)
    }
}

impl RosterProvider for CsvRoster {
    fn players_for_category(&self, category: &str) -> Result<Vec<Player>, RosterError> {
        collect_category(self.read_records()?, category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_csv_roster_reads_category() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "id,name,identification,category,position,image_url,status").unwrap();
        writeln!(file, "p1,Santiago Ruiz,1001,Sub-12,POR,,active").unwrap();
        writeln!(file, "p2,Tomás Vélez,1002,Sub-12,,,inactive").unwrap();
        writeln!(file, "p3,Emilio Arango,1003,Sub-14,DEL,,active").unwrap();
        file.flush().unwrap();

        let roster = CsvRoster::new(file.path());
        let players = roster.players_for_category("Sub-12").unwrap();

        assert_eq!(players.len(), 1);
        assert_eq!(players[0].name, "Santiago Ruiz");
        assert_eq!(players[0].position.as_deref(), Some("POR"));
        assert_eq!(players[0].image, None);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let roster = CsvRoster::new("/definitely/not/here.csv");
        assert!(roster.players_for_category("Sub-12").is_err());
    }
}
