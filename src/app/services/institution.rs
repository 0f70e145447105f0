//! Education-facility record normalizer
//!
//! Maps the loosely-typed rows persisted in the managed database into the
//! domain model: the free-form `type` label is coerced into the closed
//! [`InstitutionKind`] enumeration and transport-layer field names are
//! renamed. Normalization is total — a dirty row never fails, it degrades.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use tracing::debug;

use crate::app::models::{EducationalInstitution, InstitutionKind};

/// A facility row as persisted in the managed database
///
/// Every optional field may be absent upstream; `type` is a free-form
/// Korean label.
#[derive(Debug, Clone, Deserialize)]
pub struct InstitutionRow {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub contact: Option<String>,
    #[serde(default)]
    pub is_closed: bool,
    #[serde(default)]
    pub is_online_class: bool,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub note: Option<String>,
}

/// Normalize one persisted row into a domain record
///
/// `seq` disambiguates placeholder ids for rows persisted without one.
pub fn normalize_record(row: InstitutionRow, seq: usize) -> EducationalInstitution {
    let kind = InstitutionKind::from_label(row.kind.as_deref().unwrap_or_default());

    EducationalInstitution {
        id: row.id.unwrap_or_else(|| format!("temp-{}", seq)),
        name: row.name,
        kind,
        latitude: row.latitude,
        longitude: row.longitude,
        address: row.address.unwrap_or_default(),
        contact: row.contact,
        is_closed: row.is_closed,
        is_online_class: row.is_online_class,
        created_at: parse_timestamp(row.created_at.as_deref()),
        updated_at: parse_timestamp(row.updated_at.as_deref()),
        note: row.note,
    }
}

/// Normalize a batch of persisted rows
pub fn normalize_records(rows: Vec<InstitutionRow>) -> Vec<EducationalInstitution> {
    let count = rows.len();
    let records = rows
        .into_iter()
        .enumerate()
        .map(|(seq, row)| normalize_record(row, seq))
        .collect();
    debug!("normalized {} institution records", count);
    records
}

/// Parse an RFC 3339 timestamp, degrading to `None` on dirty input
fn parse_timestamp(raw: Option<&str>) -> Option<DateTime<Utc>> {
    raw.and_then(|value| DateTime::parse_from_rfc3339(value.trim()).ok())
        .map(|value| value.with_timezone(&Utc))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_row() -> InstitutionRow {
        InstitutionRow {
            id: Some("a1b2".to_string()),
            name: "안동중학교".to_string(),
            kind: Some("중학교".to_string()),
            latitude: 36.57,
            longitude: 128.72,
            address: Some("경북 안동시".to_string()),
            contact: Some("054-000-0000".to_string()),
            is_closed: false,
            is_online_class: true,
            created_at: Some("2024-01-01T09:00:00+09:00".to_string()),
            updated_at: None,
            note: None,
        }
    }

    #[test]
    fn test_normalize_maps_fields() {
        let record = normalize_record(sample_row(), 0);

        assert_eq!(record.id, "a1b2");
        assert_eq!(record.name, "안동중학교");
        assert_eq!(record.kind, InstitutionKind::MiddleSchool);
        assert_eq!(record.address, "경북 안동시");
        assert!(record.is_online_class);
        assert!(!record.is_closed);
        assert!(record.note.is_none());
    }

    #[test]
    fn test_unrecognized_kind_defaults_to_elementary() {
        let mut row = sample_row();
        row.kind = Some("모름".to_string());
        assert_eq!(
            normalize_record(row, 0).kind,
            InstitutionKind::ElementarySchool
        );

        let mut row = sample_row();
        row.kind = None;
        assert_eq!(
            normalize_record(row, 0).kind,
            InstitutionKind::ElementarySchool
        );
    }

    #[test]
    fn test_missing_id_gets_placeholder() {
        let mut row = sample_row();
        row.id = None;
        assert_eq!(normalize_record(row, 7).id, "temp-7");
    }

    #[test]
    fn test_timestamps_parse_or_degrade() {
        let record = normalize_record(sample_row(), 0);
        let created = record.created_at.unwrap();
        // 09:00 KST is midnight UTC
        assert_eq!(created.to_rfc3339(), "2024-01-01T00:00:00+00:00");
        assert!(record.updated_at.is_none());

        let mut row = sample_row();
        row.created_at = Some("last week".to_string());
        assert!(normalize_record(row, 0).created_at.is_none());
    }

    #[test]
    fn test_normalize_batch_from_json() {
        let payload = r#"[
            {"id": "s1", "name": "안동초등학교", "type": "초등학교",
             "latitude": 36.56, "longitude": 128.71, "address": "경북 안동시",
             "is_closed": true, "is_online_class": false},
            {"name": "경북대학교", "type": "대학교",
             "latitude": 35.89, "longitude": 128.61}
        ]"#;

        let rows: Vec<InstitutionRow> = serde_json::from_str(payload).unwrap();
        let records = normalize_records(rows);

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].kind, InstitutionKind::ElementarySchool);
        assert!(records[0].is_closed);
        assert_eq!(records[1].id, "temp-1");
        assert_eq!(records[1].kind, InstitutionKind::University);
        assert_eq!(records[1].address, "");
    }
}
