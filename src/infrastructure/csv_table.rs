//! Variable table loading and report sheet writing (CSV)

use std::path::Path;

use csv::{ReaderBuilder, Trim, WriterBuilder};

use crate::domain::entities::{ReportRow, VariableTable};

#[derive(Debug, thiserror::Error)]
pub enum TableError {
    #[error("CSV error in {path}: {source}")]
    Csv {
        path: String,
        #[source]
        source: csv::Error,
    },
    #[error("{path} is missing required columns: {}", .columns.join(", "))]
    MissingColumns { path: String, columns: Vec<String> },
}

/// Read the variable table and check it has every slot column
pub fn load_variable_table(path: &Path) -> Result<VariableTable, TableError> {
    let csv_error = |source: csv::Error| TableError::Csv {
        path: path.display().to_string(),
        source,
    };

    let mut reader = ReaderBuilder::new()
        .flexible(true)
        .trim(Trim::All)
        .from_path(path)
        .map_err(csv_error)?;

    let headers: Vec<String> = reader
        .headers()
        .map_err(csv_error)?
        .iter()
        .map(str::to_string)
        .collect();

    let mut records: Vec<Vec<String>> = Vec::new();
    for record in reader.records() {
        let record = record.map_err(csv_error)?;
        records.push(record.iter().map(str::to_string).collect());
    }

    let table = VariableTable::new(headers, records);
    let missing = table.missing_columns();
    if !missing.is_empty() {
        return Err(TableError::MissingColumns {
            path: path.display().to_string(),
            columns: missing,
        });
    }
    Ok(table)
}

/// Write the report sheet: header row, then one record per report row
pub fn write_report(path: &Path, rows: &[ReportRow]) -> Result<(), TableError> {
    let csv_error = |source: csv::Error| TableError::Csv {
        path: path.display().to_string(),
        source,
    };

    let mut writer = WriterBuilder::new().from_path(path).map_err(csv_error)?;
    writer.write_record(ReportRow::header()).map_err(csv_error)?;
    for row in rows {
        writer.write_record(row.to_record()).map_err(csv_error)?;
    }
    writer
        .flush()
        .map_err(|e| csv_error(csv::Error::from(e)))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::SlotReport;
    use crate::domain::value_objects::{MainStats, SlotIndex};

    fn header_line() -> String {
        (1..=4)
            .flat_map(|k| {
                [
                    "name",
                    "weapon",
                    "refinement",
                    "artifact1",
                    "artifact2",
                    "sands",
                    "goblet",
                    "circlet",
                ]
                .map(|f| format!("$char{k}_{f}"))
            })
            .collect::<Vec<_>>()
            .join(",")
    }

    #[test]
    fn test_load_quoted_and_short_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("vars.csv");
        let content = format!(
            "{}\n\
             xiao,pjws,1,\"Gladiator's Finale\",,atk%,anemo%,cr\n\
             \" bennett \",aquilafavonia,1,\"Emblem, Severed\",Noblesse Oblige,er,hp%,heal,,,,,,,,,,,,,,,,,,,,,,,,\n",
            header_line()
        );
        std::fs::write(&path, content).unwrap();

        let table = load_variable_table(&path).unwrap();
        assert_eq!(table.len(), 2);

        let first = &table.rows()[0];
        assert_eq!(first.get("$char1_artifact1"), Some("Gladiator's Finale"));
        assert_eq!(first.get("$char4_circlet"), Some(""));

        let second = table.rows()[1].slot(SlotIndex::new(1).unwrap()).unwrap();
        assert_eq!(second.name, "bennett");
        assert_eq!(second.main_stats.circlet, "heal");
    }

    #[test]
    fn test_missing_columns_fail_at_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("vars.csv");
        std::fs::write(&path, "$char1_name,$char1_weapon\nxiao,pjws\n").unwrap();

        let err = load_variable_table(&path).unwrap_err();
        match err {
            TableError::MissingColumns { columns, .. } => {
                assert_eq!(columns.len(), 30);
                assert!(columns.contains(&"$char1_refinement".to_string()));
            }
            other => panic!("expected missing columns, got {other}"),
        }
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_variable_table(&dir.path().join("nope.csv")).is_err());
    }

    #[test]
    fn test_write_report() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sheet_team.csv");

        let mut row = ReportRow::new("team_1", 1234.5);
        row.set_slot(
            SlotIndex::new(2).unwrap(),
            SlotReport {
                name: "Bennett".to_string(),
                weapon: "Aquila Favonia".to_string(),
                refinement: 1,
                sets: "2p Emblem, Severed/2p Noblesse".to_string(),
                main_stats: MainStats {
                    sands: "er".to_string(),
                    goblet: "hp%".to_string(),
                    circlet: "heal".to_string(),
                },
                dps: 321.0,
            },
        );
        write_report(&path, &[row, ReportRow::new("team_3", 99.0)]).unwrap();

        let mut reader = csv::Reader::from_path(&path).unwrap();
        assert_eq!(reader.headers().unwrap().len(), 34);
        let records: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(records.len(), 2);
        assert_eq!(&records[0][0], "team_1");
        assert_eq!(&records[0][10], "Bennett");
        assert_eq!(&records[0][13], "2p Emblem, Severed/2p Noblesse");
        assert_eq!(&records[0][17], "321");
        assert_eq!(&records[1][0], "team_3");
        assert_eq!(&records[1][1], "99");
    }
}
