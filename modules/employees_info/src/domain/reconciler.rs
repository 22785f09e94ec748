//! Translates a validated mutation request plus resolved catalog records into
//! a persisted employee record.
//!
//! All mapping is explicit and field-by-field; the null-skip rule for name
//! fields on update is visible here rather than hidden in a generic copier.

use chrono::{DateTime, NaiveDate, Utc};

use crate::contract::model::{Employee, EmployeeDraft, JobPosition, Sex};
use crate::domain::error::DomainError;

/// Fixed wire format for birth dates.
pub const BIRTH_DAY_FORMAT: &str = "%d/%m/%Y";

/// Parse a `dd/MM/yyyy` birth date string. Absent or malformed input is an
/// [`DomainError::InvalidBirthDate`] carrying the raw value.
pub fn parse_birth_day(raw: Option<&str>) -> Result<NaiveDate, DomainError> {
    let raw = raw.unwrap_or_default();
    NaiveDate::parse_from_str(raw, BIRTH_DAY_FORMAT)
        .map_err(|_| DomainError::invalid_birth_date(raw))
}

/// Build a fresh employee record from a create request.
///
/// Scalar fields are copied from the draft, the birth date is parsed, the
/// resolved catalog records are attached, and the caller-supplied identifier
/// and timestamp are assigned.
pub fn build_new(
    draft: &EmployeeDraft,
    sex: Sex,
    job_position: JobPosition,
    id: String,
    now: DateTime<Utc>,
) -> Result<Employee, DomainError> {
    Ok(Employee {
        id,
        first_name: draft.first_name.clone(),
        middle_name: draft.middle_name.clone(),
        paternal_surname: draft.paternal_surname.clone(),
        maternal_surname: draft.maternal_surname.clone(),
        sex,
        job_position,
        birth_day: parse_birth_day(draft.birth_day.as_deref())?,
        status: draft.status,
        ts: now,
    })
}

/// Apply an update request to an existing employee record, in place.
///
/// Name fields are overwritten only when present in the draft (`None` means
/// "leave unchanged"; an empty string overwrites). Birth date and status are
/// always overwritten, and the catalog references are always replaced with
/// the freshly resolved records. Identifier and timestamp are not touched.
pub fn apply_update(
    existing: &mut Employee,
    draft: &EmployeeDraft,
    sex: Sex,
    job_position: JobPosition,
) -> Result<(), DomainError> {
    if let Some(first_name) = &draft.first_name {
        existing.first_name = Some(first_name.clone());
    }
    if let Some(middle_name) = &draft.middle_name {
        existing.middle_name = Some(middle_name.clone());
    }
    if let Some(paternal_surname) = &draft.paternal_surname {
        existing.paternal_surname = Some(paternal_surname.clone());
    }
    if let Some(maternal_surname) = &draft.maternal_surname {
        existing.maternal_surname = Some(maternal_surname.clone());
    }
    existing.birth_day = parse_birth_day(draft.birth_day.as_deref())?;
    existing.status = draft.status;
    existing.sex = sex;
    existing.job_position = job_position;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sex() -> Sex {
        Sex {
            id: "11111111-1111-1111-1111-111111111111".into(),
            code: "M".into(),
            description: "Male".into(),
        }
    }

    fn other_sex() -> Sex {
        Sex {
            id: "22222222-2222-2222-2222-222222222222".into(),
            code: "F".into(),
            description: "Female".into(),
        }
    }

    fn job() -> JobPosition {
        JobPosition {
            id: "33333333-3333-3333-3333-333333333333".into(),
            code: "DEV".into(),
            description: "Developer".into(),
        }
    }

    fn other_job() -> JobPosition {
        JobPosition {
            id: "44444444-4444-4444-4444-444444444444".into(),
            code: "MGR".into(),
            description: "Manager".into(),
        }
    }

    fn draft() -> EmployeeDraft {
        EmployeeDraft {
            id: None,
            first_name: Some("Jorge".into()),
            middle_name: None,
            paternal_surname: Some("Santos".into()),
            maternal_surname: None,
            id_sex: Some(sex().id),
            id_job_position: Some(job().id),
            birth_day: Some("15/05/1990".into()),
            status: 1,
        }
    }

    fn existing() -> Employee {
        let ts = Utc.with_ymd_and_hms(2025, 11, 14, 9, 30, 0).unwrap();
        Employee {
            id: "aaaaaaaa-aaaa-aaaa-aaaa-aaaaaaaaaaaa".into(),
            first_name: Some("Maria".into()),
            middle_name: Some("Luisa".into()),
            paternal_surname: Some("Lopez".into()),
            maternal_surname: Some("Diaz".into()),
            sex: other_sex(),
            job_position: other_job(),
            birth_day: NaiveDate::from_ymd_opt(1985, 1, 2).unwrap(),
            status: 0,
            ts,
        }
    }

    #[test]
    fn parse_birth_day_accepts_fixed_pattern() {
        assert_eq!(
            parse_birth_day(Some("25/12/1990")).unwrap(),
            NaiveDate::from_ymd_opt(1990, 12, 25).unwrap()
        );
    }

    #[test]
    fn parse_birth_day_rejects_other_patterns() {
        for raw in ["1990-12-25", "25-12-1990", "12/25/1990", "", "yesterday"] {
            let err = parse_birth_day(Some(raw)).unwrap_err();
            match err {
                DomainError::InvalidBirthDate { value } => assert_eq!(value, raw),
                other => panic!("unexpected error: {other}"),
            }
        }
        assert!(parse_birth_day(None).is_err());
    }

    #[test]
    fn build_new_copies_scalars_and_assigns_identity() {
        let now = Utc.with_ymd_and_hms(2026, 1, 1, 12, 0, 0).unwrap();
        let e = build_new(&draft(), sex(), job(), "id-123".into(), now).unwrap();

        assert_eq!(e.id, "id-123");
        assert_eq!(e.first_name.as_deref(), Some("Jorge"));
        assert_eq!(e.middle_name, None);
        assert_eq!(e.paternal_surname.as_deref(), Some("Santos"));
        assert_eq!(e.birth_day, NaiveDate::from_ymd_opt(1990, 5, 15).unwrap());
        assert_eq!(e.status, 1);
        assert_eq!(e.sex, sex());
        assert_eq!(e.job_position, job());
        assert_eq!(e.ts, now);
    }

    #[test]
    fn build_new_fails_on_bad_date() {
        let mut d = draft();
        d.birth_day = Some("31/02/1990".into());
        assert!(matches!(
            build_new(&d, sex(), job(), "x".into(), Utc::now()),
            Err(DomainError::InvalidBirthDate { .. })
        ));
    }

    #[test]
    fn apply_update_none_leaves_names_unchanged() {
        let mut e = existing();
        let mut d = draft();
        d.first_name = None;
        d.middle_name = None;
        d.paternal_surname = None;
        d.maternal_surname = None;

        apply_update(&mut e, &d, sex(), job()).unwrap();

        assert_eq!(e.first_name.as_deref(), Some("Maria"));
        assert_eq!(e.middle_name.as_deref(), Some("Luisa"));
        assert_eq!(e.paternal_surname.as_deref(), Some("Lopez"));
        assert_eq!(e.maternal_surname.as_deref(), Some("Diaz"));
    }

    #[test]
    fn apply_update_empty_string_overwrites_name() {
        let mut e = existing();
        let mut d = draft();
        d.first_name = Some(String::new());

        apply_update(&mut e, &d, sex(), job()).unwrap();

        assert_eq!(e.first_name.as_deref(), Some(""));
    }

    #[test]
    fn apply_update_always_overwrites_date_status_and_references() {
        let mut e = existing();
        let d = draft();

        apply_update(&mut e, &d, sex(), job()).unwrap();

        assert_eq!(e.birth_day, NaiveDate::from_ymd_opt(1990, 5, 15).unwrap());
        assert_eq!(e.status, 1);
        assert_eq!(e.sex, sex());
        assert_eq!(e.job_position, job());
    }

    #[test]
    fn apply_update_leaves_id_and_ts_untouched() {
        let mut e = existing();
        let before_id = e.id.clone();
        let before_ts = e.ts;

        apply_update(&mut e, &draft(), sex(), job()).unwrap();

        assert_eq!(e.id, before_id);
        assert_eq!(e.ts, before_ts);
    }

    #[test]
    fn apply_update_fails_on_missing_birth_day() {
        let mut e = existing();
        let mut d = draft();
        d.birth_day = None;

        let err = apply_update(&mut e, &d, sex(), job()).unwrap_err();
        assert!(matches!(err, DomainError::InvalidBirthDate { .. }));
    }
}
