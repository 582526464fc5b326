use crate::domain::ApplicationStatus;

/// Custom actions for JobApplication entities.
#[derive(Debug, Clone)]
pub enum ApplicationAction {
    SetStatus(ApplicationStatus),
}

#[derive(Debug, Clone, PartialEq)]
pub enum ApplicationActionResult {
    SetStatus {
        previous: ApplicationStatus,
        current: ApplicationStatus,
    },
}
