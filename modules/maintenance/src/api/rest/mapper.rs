//! Mapper implementations for converting between DTOs and contract models

use super::dto::*;
use crate::contract::{self, Frequency};
use sitekit::Problem;
use std::str::FromStr;

// ===== Schedule conversions =====

impl From<contract::MaintenanceSchedule> for ScheduleDto {
    fn from(schedule: contract::MaintenanceSchedule) -> Self {
        Self {
            id: schedule.id,
            asset_id: schedule.asset_id,
            title: schedule.title,
            frequency: schedule.frequency.as_str().to_string(),
            next_due_at: schedule.next_due_at,
            last_performed_at: schedule.last_performed_at,
            active: schedule.active,
            notes: schedule.notes,
            created_at: schedule.created_at,
            updated_at: schedule.updated_at,
        }
    }
}

impl TryFrom<CreateScheduleRequest> for contract::NewSchedule {
    type Error = Problem;

    fn try_from(req: CreateScheduleRequest) -> Result<Self, Self::Error> {
        let frequency = parse_frequency(&req.frequency)?;
        Ok(Self {
            asset_id: req.asset_id,
            title: req.title,
            frequency,
            next_due_at: req.next_due_at,
            active: req.active,
            notes: req.notes,
        })
    }
}

impl TryFrom<UpdateScheduleRequest> for contract::UpdateSchedule {
    type Error = Problem;

    fn try_from(req: UpdateScheduleRequest) -> Result<Self, Self::Error> {
        let frequency = parse_frequency(&req.frequency)?;
        Ok(Self {
            title: req.title,
            frequency,
            next_due_at: req.next_due_at,
            active: req.active,
            notes: req.notes,
        })
    }
}

impl From<ScheduleFilterQuery> for contract::ScheduleListFilter {
    fn from(query: ScheduleFilterQuery) -> Self {
        Self {
            asset_id: query.asset_id,
            active: query.active,
            due_before: query.due_before,
        }
    }
}

// ===== Log conversions =====

impl From<contract::MaintenanceLog> for LogDto {
    fn from(log: contract::MaintenanceLog) -> Self {
        Self {
            id: log.id,
            asset_id: log.asset_id,
            schedule_id: log.schedule_id,
            performed_at: log.performed_at,
            performed_by: log.performed_by,
            summary: log.summary,
            notes: log.notes,
            cost: log.cost,
            created_at: log.created_at,
            updated_at: log.updated_at,
        }
    }
}

impl From<CreateLogRequest> for contract::NewLog {
    fn from(req: CreateLogRequest) -> Self {
        Self {
            asset_id: req.asset_id,
            schedule_id: req.schedule_id,
            performed_at: req.performed_at,
            performed_by: req.performed_by,
            summary: req.summary,
            notes: req.notes,
            cost: req.cost,
        }
    }
}

impl From<UpdateLogRequest> for contract::UpdateLog {
    fn from(req: UpdateLogRequest) -> Self {
        Self {
            performed_at: req.performed_at,
            performed_by: req.performed_by,
            summary: req.summary,
            notes: req.notes,
            cost: req.cost,
        }
    }
}

impl From<LogFilterQuery> for contract::LogListFilter {
    fn from(query: LogFilterQuery) -> Self {
        Self {
            asset_id: query.asset_id,
            schedule_id: query.schedule_id,
        }
    }
}

// Unknown enum strings are a validation problem, not a parse panic
pub fn parse_frequency(raw: &str) -> Result<Frequency, Problem> {
    Frequency::from_str(raw).map_err(|message| Problem::invalid_field("frequency", message))
}
