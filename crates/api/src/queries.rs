// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Read-side API operations: work queues, status lookups, search and the
//! admin dashboard.
//!
//! Nothing in this module writes to the store.

use std::collections::HashSet;

use cert_track_audit::AuditEvent;
use cert_track_domain::{
    Application, ApplicationNumber, Stage, StageView, build_timeline, current_stage,
    progress_percentage,
};
use cert_track_persistence::RecordStore;
use tracing::debug;

use crate::error::{ApiError, translate_persistence_error};
use crate::request_response::{
    ApplicationFilter, ApplicationInfo, ApplicationStatusResponse, AuditTrailResponse,
    DashboardSummaryResponse, RecordSource, SearchResponse, SearchResult, StageQueueResponse,
    VerifiedListResponse,
};

fn application_not_found(application_number: &str) -> ApiError {
    ApiError::ResourceNotFound {
        resource_type: String::from("Application"),
        message: format!("Application {application_number} does not exist"),
    }
}

fn require_hall_ticket(hall_ticket: &str) -> Result<(), ApiError> {
    if hall_ticket.trim().is_empty() {
        return Err(ApiError::InvalidInput {
            field: String::from("hall_ticket"),
            message: String::from("hall_ticket is required"),
        });
    }
    Ok(())
}

/// Applies `filter` and orders the survivors newest first.
fn filter_newest_first<'a, I>(applications: I, filter: &ApplicationFilter) -> Vec<ApplicationInfo>
where
    I: IntoIterator<Item = &'a Application>,
{
    let mut matching: Vec<&Application> = applications
        .into_iter()
        .filter(|application| filter.matches(application))
        .collect();
    matching.sort_by(|a, b| b.submitted_at.cmp(&a.submitted_at));
    matching.into_iter().map(ApplicationInfo::from).collect()
}

/// Returns true if `application` is waiting on `stage`.
///
/// The previous stage (if any) must have recorded its success literal and
/// `stage` itself must still be unset.
#[must_use]
pub fn is_awaiting(application: &Application, stage: Stage) -> bool {
    !application.is_stage_recorded(stage)
        && stage
            .previous()
            .is_none_or(|previous| application.is_stage_complete(previous))
}

/// Builds the full status projection of an application.
#[must_use]
pub fn status_view(application: &Application) -> ApplicationStatusResponse {
    let timeline: Vec<StageView> = build_timeline(application);
    ApplicationStatusResponse {
        application: ApplicationInfo::from(application),
        progress_percentage: progress_percentage(&timeline),
        timeline,
        current_stage: current_stage(application).to_string(),
    }
}

/// Lists the applications waiting on `stage`.
///
/// # Errors
///
/// Returns an error if the store cannot be read.
pub fn list_stage_queue<S: RecordStore>(
    store: &mut S,
    stage: Stage,
    filter: &ApplicationFilter,
) -> Result<StageQueueResponse, ApiError> {
    let applications: Vec<Application> = store
        .list_applications()
        .map_err(translate_persistence_error)?;
    let queue: Vec<ApplicationInfo> = filter_newest_first(
        applications
            .iter()
            .filter(|application| is_awaiting(application, stage)),
        filter,
    );
    debug!(stage = stage.slug(), count = queue.len(), "Listed stage queue");
    Ok(StageQueueResponse {
        stage: stage.slug().to_string(),
        display_name: stage.display_name().to_string(),
        applications: queue,
    })
}

/// Looks up an applicant's status by hall ticket.
///
/// Returns the first match in the application store, falling back to the
/// verified store.
///
/// # Errors
///
/// Returns an error if the hall ticket is empty, nothing matches, or the
/// store cannot be read.
pub fn find_status_by_identity<S: RecordStore>(
    store: &mut S,
    hall_ticket: &str,
) -> Result<ApplicationStatusResponse, ApiError> {
    require_hall_ticket(hall_ticket)?;

    let applications: Vec<Application> = store
        .list_applications()
        .map_err(translate_persistence_error)?;
    if let Some(application) = applications
        .iter()
        .find(|application| application.identity_number().value() == hall_ticket)
    {
        return Ok(status_view(application));
    }

    let verified: Vec<Application> = store.list_verified().map_err(translate_persistence_error)?;
    verified
        .iter()
        .find(|application| application.identity_number().value() == hall_ticket)
        .map(status_view)
        .ok_or_else(|| ApiError::ResourceNotFound {
            resource_type: String::from("Application"),
            message: format!("No application found for hall ticket {hall_ticket}"),
        })
}

/// Looks up an application by number, checking the application store first
/// and then the verified store.
///
/// # Errors
///
/// Returns an error if no application has the given number or the store
/// cannot be read.
pub fn get_application_status<S: RecordStore>(
    store: &mut S,
    application_number: &str,
) -> Result<ApplicationStatusResponse, ApiError> {
    let number: ApplicationNumber = ApplicationNumber::new(application_number);
    if let Some(application) = store
        .get_application(&number)
        .map_err(translate_persistence_error)?
    {
        return Ok(status_view(&application));
    }
    store
        .get_verified(&number)
        .map_err(translate_persistence_error)?
        .as_ref()
        .map(status_view)
        .ok_or_else(|| application_not_found(application_number))
}

/// Returns every record for a hall ticket across both stores.
///
/// A verified certificate appears twice: once from each store.
///
/// # Errors
///
/// Returns an error if the hall ticket is empty or the store cannot be read.
pub fn search_by_identity<S: RecordStore>(
    store: &mut S,
    hall_ticket: &str,
) -> Result<SearchResponse, ApiError> {
    require_hall_ticket(hall_ticket)?;

    let applications: Vec<Application> = store
        .list_applications()
        .map_err(translate_persistence_error)?;
    let verified: Vec<Application> = store.list_verified().map_err(translate_persistence_error)?;

    let tagged = applications
        .iter()
        .map(|application| (RecordSource::Applications, application))
        .chain(
            verified
                .iter()
                .map(|application| (RecordSource::Verified, application)),
        );
    let results: Vec<SearchResult> = tagged
        .filter(|(_, application)| application.identity_number().value() == hall_ticket)
        .map(|(source, application)| SearchResult {
            source,
            application: ApplicationInfo::from(application),
        })
        .collect();

    debug!(hall_ticket, count = results.len(), "Searched by hall ticket");
    Ok(SearchResponse {
        hall_ticket: hall_ticket.to_string(),
        results,
    })
}

/// Lists verified certificates, one per application number.
///
/// # Errors
///
/// Returns an error if the store cannot be read.
pub fn list_verified_certificates<S: RecordStore>(
    store: &mut S,
    filter: &ApplicationFilter,
) -> Result<VerifiedListResponse, ApiError> {
    let verified: Vec<Application> = store.list_verified().map_err(translate_persistence_error)?;
    let mut seen: HashSet<&ApplicationNumber> = HashSet::new();
    let unique = verified
        .iter()
        .filter(|application| seen.insert(&application.application_number));
    Ok(VerifiedListResponse {
        certificates: filter_newest_first(unique, filter),
    })
}

/// Returns a single verified certificate.
///
/// # Errors
///
/// Returns an error if the certificate does not exist or the store cannot
/// be read.
pub fn get_verified_certificate<S: RecordStore>(
    store: &mut S,
    application_number: &str,
) -> Result<ApplicationStatusResponse, ApiError> {
    store
        .get_verified(&ApplicationNumber::new(application_number))
        .map_err(translate_persistence_error)?
        .as_ref()
        .map(status_view)
        .ok_or_else(|| ApiError::ResourceNotFound {
            resource_type: String::from("Verified certificate"),
            message: format!("No verified certificate for application {application_number}"),
        })
}

/// Summarises the stores for the admin dashboard.
///
/// Counts cover the whole store; `filter` narrows only the pending list.
///
/// # Errors
///
/// Returns an error if the store cannot be read.
pub fn dashboard_summary<S: RecordStore>(
    store: &mut S,
    filter: &ApplicationFilter,
) -> Result<DashboardSummaryResponse, ApiError> {
    let applications: Vec<Application> = store
        .list_applications()
        .map_err(translate_persistence_error)?;
    let verified: Vec<Application> = store.list_verified().map_err(translate_persistence_error)?;

    let pending: Vec<&Application> = applications
        .iter()
        .filter(|application| !application.is_verified())
        .collect();

    Ok(DashboardSummaryResponse {
        total_applications: applications.len(),
        pending_applications: pending.len(),
        verified_applications: verified.len(),
        pending: filter_newest_first(pending, filter),
    })
}

/// Returns the audit trail of an application.
///
/// # Errors
///
/// Returns an error if the application does not exist or the store cannot
/// be read.
pub fn list_audit_events<S: RecordStore>(
    store: &mut S,
    application_number: &str,
) -> Result<AuditTrailResponse, ApiError> {
    let number: ApplicationNumber = ApplicationNumber::new(application_number);
    if store
        .get_application(&number)
        .map_err(translate_persistence_error)?
        .is_none()
    {
        return Err(application_not_found(application_number));
    }
    let events: Vec<AuditEvent> = store
        .list_audit_events(&number)
        .map_err(translate_persistence_error)?;
    Ok(AuditTrailResponse {
        application_number: number.value().to_string(),
        events,
    })
}
