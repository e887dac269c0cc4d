//! Synthetic student/internship dataset and its flat CSV snapshot.

mod domain;
mod generator;
mod snapshot;

pub use domain::{available_sectors, InternshipRecord, Skill, SkillLevels};
pub use generator::{DatasetGenerator, MAJORS, SECTORS};
pub use snapshot::InternshipSnapshot;

#[derive(Debug)]
pub enum DatasetError {
    Io(std::io::Error),
    Csv(csv::Error),
}

impl std::fmt::Display for DatasetError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DatasetError::Io(err) => write!(f, "failed to access dataset snapshot: {}", err),
            DatasetError::Csv(err) => write!(f, "invalid dataset CSV data: {}", err),
        }
    }
}

impl std::error::Error for DatasetError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DatasetError::Io(err) => Some(err),
            DatasetError::Csv(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for DatasetError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for DatasetError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const HEADER: &str = "StudentID,Major_Course,CGPA,Pref_Sector,req_Sector,Req_CGPA,\
Skill_Python_Level,Req_Skill_Python_Level,Skill_MATLAB_Level,Req_Skill_MATLAB_Level,\
Skill_Leadership_Level,Req_Skill_Leadership_Level,Skill_Teamwork_Level,Req_Skill_Teamwork_Level,\
Skill_AutoCAD_Level,Req_Skill_AutoCAD_Level";

    #[test]
    fn snapshot_header_follows_the_column_contract() {
        let records = DatasetGenerator::new(2).with_seed(1).generate();
        let mut buffer = Vec::new();
        InternshipSnapshot::to_writer(&mut buffer, &records).expect("write succeeds");

        let text = String::from_utf8(buffer).expect("utf8");
        let header = text.lines().next().expect("header row");
        assert_eq!(header, HEADER);
        assert_eq!(text.lines().count(), 3);
    }

    #[test]
    fn loader_lowercases_sector_columns() {
        let csv = format!(
            "{HEADER}\nS0001,computer science,3.45,Oil & Gas, Tech & Software ,3.1,80,70,60,65,55,50,90,85,40,60\n"
        );

        let records = InternshipSnapshot::from_reader(Cursor::new(csv)).expect("parse");

        assert_eq!(records.len(), 1);
        let record = &records[0];
        assert_eq!(record.pref_sector, "oil & gas");
        assert_eq!(record.req_sector, "tech & software");
        assert_eq!(record.cgpa, 3.45);
        assert_eq!(record.student_skills().sum(), 325.0);
        assert_eq!(record.required_skills().sum(), 330.0);
        assert_eq!(record.required_skills().level(Skill::AutoCad), 60.0);
    }

    #[test]
    fn malformed_rows_surface_csv_errors() {
        let csv = format!("{HEADER}\nS0001,cs,not-a-number,a,b,3.0,1,2,3,4,5,6,7,8,9,10\n");

        match InternshipSnapshot::from_reader(Cursor::new(csv)) {
            Err(DatasetError::Csv(_)) => {}
            other => panic!("expected csv error, got {other:?}"),
        }
    }

    #[test]
    fn missing_snapshot_surfaces_io_errors() {
        match InternshipSnapshot::from_path("./does-not-exist.csv") {
            Err(DatasetError::Io(_)) => {}
            other => panic!("expected io error, got {other:?}"),
        }
    }

    #[test]
    fn available_sectors_keep_first_seen_order() {
        let mut records = DatasetGenerator::new(3).with_seed(5).generate();
        records[0].req_sector = "manufacturing".to_string();
        records[1].req_sector = "oil & gas".to_string();
        records[2].req_sector = "manufacturing".to_string();

        assert_eq!(
            available_sectors(&records),
            vec!["manufacturing".to_string(), "oil & gas".to_string()]
        );
    }
}
