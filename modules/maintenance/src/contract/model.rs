//! Contract models - pure domain types without serialization concerns

use chrono::{DateTime, Days, Months, Utc};
use rust_decimal::Decimal;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// How often a schedule expects its work to be performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Frequency {
    Daily,
    Weekly,
    Monthly,
    Quarterly,
    Semiannually,
    Annually,
}

impl Frequency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Frequency::Daily => "daily",
            Frequency::Weekly => "weekly",
            Frequency::Monthly => "monthly",
            Frequency::Quarterly => "quarterly",
            Frequency::Semiannually => "semiannually",
            Frequency::Annually => "annually",
        }
    }

    /// One period later than `from`.
    ///
    /// Month-based periods clamp to the destination month's last day
    /// (Jan 31 + 1 month lands on Feb 28/29).
    pub fn advance(&self, from: DateTime<Utc>) -> DateTime<Utc> {
        let next = match self {
            Frequency::Daily => from.checked_add_days(Days::new(1)),
            Frequency::Weekly => from.checked_add_days(Days::new(7)),
            Frequency::Monthly => from.checked_add_months(Months::new(1)),
            Frequency::Quarterly => from.checked_add_months(Months::new(3)),
            Frequency::Semiannually => from.checked_add_months(Months::new(6)),
            Frequency::Annually => from.checked_add_months(Months::new(12)),
        };
        next.unwrap_or(from)
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Frequency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "daily" => Ok(Frequency::Daily),
            "weekly" => Ok(Frequency::Weekly),
            "monthly" => Ok(Frequency::Monthly),
            "quarterly" => Ok(Frequency::Quarterly),
            "semiannually" => Ok(Frequency::Semiannually),
            "annually" => Ok(Frequency::Annually),
            other => Err(format!("unknown frequency '{other}'")),
        }
    }
}

/// Planned recurring maintenance for one asset.
#[derive(Debug, Clone, PartialEq)]
pub struct MaintenanceSchedule {
    pub id: Uuid,
    pub asset_id: Uuid,
    pub title: String,
    pub frequency: Frequency,
    pub next_due_at: DateTime<Utc>,
    pub last_performed_at: Option<DateTime<Utc>>,
    pub active: bool,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl MaintenanceSchedule {
    /// A schedule is overdue when it is active and its due date has passed.
    pub fn is_overdue(&self, as_of: DateTime<Utc>) -> bool {
        self.active && self.next_due_at < as_of
    }
}

/// One performed maintenance event, optionally tied to the schedule that
/// planned it.
#[derive(Debug, Clone, PartialEq)]
pub struct MaintenanceLog {
    pub id: Uuid,
    pub asset_id: Uuid,
    pub schedule_id: Option<Uuid>,
    pub performed_at: DateTime<Utc>,
    pub performed_by: Option<Uuid>,
    pub summary: String,
    pub notes: Option<String>,
    pub cost: Option<Decimal>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

/// Input for creating a schedule
#[derive(Debug, Clone)]
pub struct NewSchedule {
    pub asset_id: Uuid,
    pub title: String,
    pub frequency: Frequency,
    pub next_due_at: DateTime<Utc>,
    pub active: bool,
    pub notes: Option<String>,
}

/// Input for updating a schedule; the owning asset never changes.
#[derive(Debug, Clone)]
pub struct UpdateSchedule {
    pub title: String,
    pub frequency: Frequency,
    pub next_due_at: DateTime<Utc>,
    pub active: bool,
    pub notes: Option<String>,
}

/// Input for recording a performed maintenance event
#[derive(Debug, Clone)]
pub struct NewLog {
    pub asset_id: Uuid,
    pub schedule_id: Option<Uuid>,
    pub performed_at: DateTime<Utc>,
    pub performed_by: Option<Uuid>,
    pub summary: String,
    pub notes: Option<String>,
    pub cost: Option<Decimal>,
}

/// Input for correcting a recorded log; asset and schedule stay fixed and the
/// create-time cascades are not replayed.
#[derive(Debug, Clone)]
pub struct UpdateLog {
    pub performed_at: DateTime<Utc>,
    pub performed_by: Option<Uuid>,
    pub summary: String,
    pub notes: Option<String>,
    pub cost: Option<Decimal>,
}

/// Filters for listing schedules
#[derive(Debug, Clone, Default)]
pub struct ScheduleListFilter {
    pub asset_id: Option<Uuid>,
    pub active: Option<bool>,
    /// Schedules whose next due date falls strictly before this instant
    pub due_before: Option<DateTime<Utc>>,
}

/// Filters for listing logs
#[derive(Debug, Clone, Default)]
pub struct LogListFilter {
    pub asset_id: Option<Uuid>,
    pub schedule_id: Option<Uuid>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_frequency_round_trip() {
        let all = [
            Frequency::Daily,
            Frequency::Weekly,
            Frequency::Monthly,
            Frequency::Quarterly,
            Frequency::Semiannually,
            Frequency::Annually,
        ];
        for frequency in all {
            let parsed: Frequency = frequency.as_str().parse().expect("parse");
            assert_eq!(parsed, frequency);
        }
        assert!("fortnightly".parse::<Frequency>().is_err());
    }

    #[test]
    fn test_advance_clamps_to_month_end() {
        let jan31 = Utc.with_ymd_and_hms(2024, 1, 31, 9, 0, 0).unwrap();
        let feb29 = Utc.with_ymd_and_hms(2024, 2, 29, 9, 0, 0).unwrap();
        assert_eq!(Frequency::Monthly.advance(jan31), feb29);
    }

    #[test]
    fn test_advance_periods() {
        let base = Utc.with_ymd_and_hms(2024, 3, 15, 12, 0, 0).unwrap();
        assert_eq!(
            Frequency::Daily.advance(base),
            Utc.with_ymd_and_hms(2024, 3, 16, 12, 0, 0).unwrap()
        );
        assert_eq!(
            Frequency::Weekly.advance(base),
            Utc.with_ymd_and_hms(2024, 3, 22, 12, 0, 0).unwrap()
        );
        assert_eq!(
            Frequency::Quarterly.advance(base),
            Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap()
        );
        assert_eq!(
            Frequency::Semiannually.advance(base),
            Utc.with_ymd_and_hms(2024, 9, 15, 12, 0, 0).unwrap()
        );
        assert_eq!(
            Frequency::Annually.advance(base),
            Utc.with_ymd_and_hms(2025, 3, 15, 12, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_overdue_requires_active() {
        let now = Utc::now();
        let schedule = MaintenanceSchedule {
            id: Uuid::new_v4(),
            asset_id: Uuid::new_v4(),
            title: "Filter swap".to_string(),
            frequency: Frequency::Monthly,
            next_due_at: now - chrono::Duration::days(3),
            last_performed_at: None,
            active: true,
            notes: None,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        };
        assert!(schedule.is_overdue(now));

        let paused = MaintenanceSchedule {
            active: false,
            ..schedule.clone()
        };
        assert!(!paused.is_overdue(now));

        let not_yet = MaintenanceSchedule {
            next_due_at: now + chrono::Duration::days(3),
            ..schedule
        };
        assert!(!not_yet.is_overdue(now));
    }
}
