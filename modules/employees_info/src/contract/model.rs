use chrono::{DateTime, Datelike, NaiveDate, Utc};

/// A sex catalog entry. Read-only reference data from this module's
/// perspective: resolved, never written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sex {
    pub id: String,
    pub code: String,
    pub description: String,
}

/// A job position catalog entry. Read-only reference data, same as [`Sex`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobPosition {
    pub id: String,
    pub code: String,
    pub description: String,
}

/// A persisted employee record.
///
/// Every employee carries exactly one resolved [`Sex`] and one resolved
/// [`JobPosition`]; the references are attached before persistence, so a
/// loaded `Employee` is always complete.
#[derive(Debug, Clone, PartialEq)]
pub struct Employee {
    /// Opaque 36-character identifier, generated at create time.
    pub id: String,
    pub first_name: Option<String>,
    pub middle_name: Option<String>,
    pub paternal_surname: Option<String>,
    pub maternal_surname: Option<String>,
    pub sex: Sex,
    pub job_position: JobPosition,
    pub birth_day: NaiveDate,
    /// Stored as an integer, semantically boolean: 0 inactive, nonzero active.
    pub status: i32,
    /// Last-modified timestamp. Set at create, retained on update.
    pub ts: DateTime<Utc>,
}

impl Employee {
    /// Age in whole years as of today. Derived on read, never persisted.
    pub fn age(&self) -> i32 {
        age_at(self.birth_day, Utc::now().date_naive())
    }

    pub fn is_active(&self) -> bool {
        self.status != 0
    }
}

/// A mutation request in domain terms: raw field values as sent by the
/// client, before catalog resolution and date parsing. `None` name fields
/// mean "leave unchanged" on update.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EmployeeDraft {
    pub id: Option<String>,
    pub first_name: Option<String>,
    pub middle_name: Option<String>,
    pub paternal_surname: Option<String>,
    pub maternal_surname: Option<String>,
    pub id_sex: Option<String>,
    pub id_job_position: Option<String>,
    /// Raw `dd/MM/yyyy` string; parsed by the reconciler.
    pub birth_day: Option<String>,
    pub status: i32,
}

/// Whole years elapsed between `birth_day` and `today`.
///
/// A birth date in the future yields a negative age; callers do not clamp.
pub fn age_at(birth_day: NaiveDate, today: NaiveDate) -> i32 {
    if today >= birth_day {
        let mut years = today.year() - birth_day.year();
        if (today.month(), today.day()) < (birth_day.month(), birth_day.day()) {
            years -= 1;
        }
        years
    } else {
        -age_at(today, birth_day)
    }
}
