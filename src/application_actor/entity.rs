use chrono::Utc;

use super::actions::{ApplicationAction, ApplicationActionResult};
use crate::actor_framework::Entity;
use crate::domain::{ApplicationCreate, ApplicationStatus, JobApplication};

/// Storage key the application list lives under.
pub const APPLICATIONS_KEY: &str = "midnightMunchiesApplications";

impl Entity for JobApplication {
    type Id = String;
    type CreatePayload = ApplicationCreate;
    type Action = ApplicationAction;
    type ActionResult = ApplicationActionResult;

    const COLLECTION_KEY: &'static str = APPLICATIONS_KEY;

    fn id(&self) -> &String {
        &self.id
    }

    fn from_create(id: String, payload: ApplicationCreate) -> Result<Self, String> {
        Ok(Self {
            id,
            job_id: payload.job_id,
            job_title: payload.job_title,
            applicant_info: payload.applicant_info,
            submitted_at: Utc::now(),
            status: ApplicationStatus::Pending,
        })
    }

    fn handle_action(
        &mut self,
        action: ApplicationAction,
    ) -> Result<ApplicationActionResult, String> {
        match action {
            ApplicationAction::SetStatus(status) => {
                let previous = self.status;
                self.status = status;
                Ok(ApplicationActionResult::SetStatus {
                    previous,
                    current: status,
                })
            }
        }
    }
}
