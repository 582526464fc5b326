use std::sync::Arc;

use tracing::{debug, info, instrument, warn};

use crate::actor_framework::ResourceClient;
use crate::application_actor::{ApplicationAction, ApplicationActionResult, ApplicationError};
use crate::catalog::Catalog;
use crate::domain::{ApplicantInfo, ApplicationCreate, ApplicationStatus, JobApplication};

#[derive(Clone)]
pub struct ApplicationClient {
    inner: ResourceClient<JobApplication>,
    catalog: Arc<Catalog>,
}

impl ApplicationClient {
    pub fn new(inner: ResourceClient<JobApplication>, catalog: Arc<Catalog>) -> Self {
        Self { inner, catalog }
    }

    /// Validate the form against the listing and store a pending application.
    #[instrument(skip(self, applicant_info))]
    pub async fn submit_application(
        &self,
        job_id: String,
        applicant_info: ApplicantInfo,
    ) -> Result<String, ApplicationError> {
        debug!("Processing application");

        let job = self
            .catalog
            .job(&job_id)
            .ok_or_else(|| ApplicationError::UnknownJob(job_id.clone()))?;

        let missing = applicant_info.missing_fields();
        if !missing.is_empty() {
            warn!(?missing, "Application rejected");
            return Err(ApplicationError::MissingFields(missing));
        }
        if applicant_info.lacks_license_for(job) {
            warn!("Application rejected: driver's license required");
            return Err(ApplicationError::DriversLicenseRequired(job.title.clone()));
        }

        let payload = ApplicationCreate {
            job_id,
            job_title: job.title.clone(),
            applicant_info,
        };
        let id = self.inner.create(payload).await?;
        info!(application_id = %id, "Application submitted");
        Ok(id)
    }

    #[instrument(skip(self))]
    pub async fn update_status(
        &self,
        id: String,
        status: ApplicationStatus,
    ) -> Result<ApplicationStatus, ApplicationError> {
        debug!("Sending request");
        let ApplicationActionResult::SetStatus { previous, current } = self
            .inner
            .perform_action(id, ApplicationAction::SetStatus(status))
            .await?;
        info!(%previous, %current, "Application status changed");
        Ok(previous)
    }
}

impl_client_methods!(ApplicationClient, JobApplication, ApplicationError, application);
