use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

use reqwest::multipart::Form;
use tokio::sync::watch;
use tracing::{info, warn};
use validator::Validate;

use crate::dto::application_dto::{InterviewLinkResponse, JobApplicationDetail, JobApplicationListItem};
use crate::dto::auth_dto::{LoginPayload, RegisterPayload, TokenResponse};
use crate::dto::vacancy_dto::{
    ApplicantVacancy, HrVacancyDetail, HrVacancySummary, VacancyStatusUpdateRequest,
    VacancyStatusUpdateResponse,
};
use crate::error::{Error, Result};
use crate::models::applicant::ApplicantReview;
use crate::models::application::JobApplication;
use crate::models::resume::ResumeFile;
use crate::models::toast::{Toast, ToastVariant, DEFAULT_TOAST_DURATION_MS};
use crate::models::user::{Role, User};
use crate::models::vacancy::{Vacancy, VacancyStatus};
use crate::services::api_client::{file_part, ApiClient};
use crate::storage::{Storage, ACCESS_TOKEN_KEY, USER_KEY};
use crate::utils::ids::generate_toast_id;
use crate::utils::validation::validate_resume_file;

/// Uniform shape every async store action resolves to. `success` with no
/// `data` means the resource does not exist (rendered as an empty view, not
/// as an error).
#[derive(Debug, Clone)]
pub struct ActionResult<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}

impl<T> ActionResult<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn none() -> Self {
        Self {
            success: true,
            data: None,
            error: None,
        }
    }

    pub fn err(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}

/// Everything the UI renders from. Snapshots are cheap clones; subscribers
/// observe every transition through the watch channel.
#[derive(Debug, Clone, Default)]
pub struct StoreState {
    pub user: Option<User>,
    pub vacancies: Vec<Vacancy>,
    pub applications: Vec<JobApplication>,
    pub toasts: Vec<Toast>,
}

/// The application store: single source of truth for the session, the
/// vacancy and application collections, and the toast queue. All network
/// traffic goes through the injected [`ApiClient`]; state is only reduced
/// after a response resolves (no optimistic updates anywhere).
#[derive(Clone)]
pub struct Store {
    api: ApiClient,
    storage: Arc<dyn Storage>,
    state: Arc<watch::Sender<StoreState>>,
}

impl Store {
    pub fn new(api: ApiClient, storage: Arc<dyn Storage>) -> Self {
        let user = restore_session(storage.as_ref());
        let (tx, _) = watch::channel(StoreState {
            user,
            ..StoreState::default()
        });
        Self {
            api,
            storage,
            state: Arc::new(tx),
        }
    }

    pub fn snapshot(&self) -> StoreState {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<StoreState> {
        self.state.subscribe()
    }

    pub fn current_user(&self) -> Option<User> {
        self.state.borrow().user.clone()
    }

    // ---- session ----------------------------------------------------------

    pub async fn login(&self, email: &str, password: &str) -> ActionResult<User> {
        let payload = LoginPayload {
            email: email.to_string(),
            password: password.to_string(),
        };
        if let Err(e) = payload.validate() {
            return ActionResult::err(Error::from(e).user_message());
        }

        match self.api.post_json::<TokenResponse, _>("/api/auth/login", &payload).await {
            Ok(token) => {
                let user = self.establish_session(token, email);
                info!(user_id = user.id, role = user.role.as_str(), "logged in");
                ActionResult::ok(user)
            }
            Err(err) => {
                warn!(error = %err, "login failed");
                let message = match &err {
                    Error::Unauthorized(msg) if !msg.is_empty() => msg.clone(),
                    Error::Unauthorized(_) => "Invalid email or password".to_string(),
                    other => other.user_message(),
                };
                ActionResult::err(message)
            }
        }
    }

    pub async fn register(
        &self,
        email: &str,
        password: &str,
        resume: Option<ResumeFile>,
        role: Role,
    ) -> ActionResult<User> {
        let payload = RegisterPayload {
            email: email.to_string(),
            password: password.to_string(),
            role,
        };
        if let Err(e) = payload.validate() {
            return ActionResult::err(Error::from(e).user_message());
        }

        // The resume rides along for applicants only; HR registration is a
        // plain account.
        let mut form = Form::new()
            .text("email", payload.email.clone())
            .text("password", payload.password.clone())
            .text("role", role.as_str());
        if role == Role::Applicant {
            let Some(file) = resume else {
                return ActionResult::err("Please attach a resume");
            };
            if let Err(e) = validate_resume_file(&file) {
                return ActionResult::err(e.user_message());
            }
            match file_part(&file) {
                Ok(part) => form = form.part("cv", part),
                Err(e) => return ActionResult::err(e.user_message()),
            }
        }

        match self.api.post_multipart::<TokenResponse>("/api/auth/register", form).await {
            Ok(token) => {
                let user = self.establish_session(token, email);
                info!(user_id = user.id, role = user.role.as_str(), "registered");
                ActionResult::ok(user)
            }
            Err(err) => {
                warn!(error = %err, "registration failed");
                ActionResult::err(err.user_message())
            }
        }
    }

    /// Clears the session and, so the next login never sees a previous
    /// session's data, every fetched resource cache. Active toast timers
    /// drain on their own.
    pub fn logout(&self) {
        info!("logged out");
        self.storage.remove(ACCESS_TOKEN_KEY);
        self.storage.remove(USER_KEY);
        self.state.send_modify(|s| {
            s.user = None;
            s.vacancies.clear();
            s.applications.clear();
        });
    }

    fn establish_session(&self, token: TokenResponse, email: &str) -> User {
        self.storage.set(ACCESS_TOKEN_KEY, &token.access_token);
        let user = User::from_auth(token.user_id, email, token.role, None);
        if let Ok(raw) = serde_json::to_string(&user) {
            self.storage.set(USER_KEY, &raw);
        }
        self.state.send_modify(|s| s.user = Some(user.clone()));
        user
    }

    // ---- vacancies --------------------------------------------------------

    /// Role-routed list fetch: HR sees the management list with response
    /// counters, applicants the public offer cards. Replaces the cached
    /// collection wholesale.
    pub async fn fetch_vacancies(&self) -> ActionResult<Vec<Vacancy>> {
        let role = match self.current_user() {
            Some(user) => user.role,
            None => return ActionResult::err("No active session"),
        };
        let fetched: Result<Vec<Vacancy>> = match role {
            Role::Hr => self
                .api
                .get_json::<Vec<HrVacancySummary>>("/api/hr/vacancies")
                .await
                .map(|list| list.into_iter().map(Vacancy::from).collect()),
            Role::Applicant => self
                .api
                .get_json::<Vec<ApplicantVacancy>>("/api/applicant/vacancies")
                .await
                .map(|list| list.into_iter().map(Vacancy::from).collect()),
        };
        match fetched {
            Ok(vacancies) => {
                self.state.send_modify(|s| s.vacancies = vacancies.clone());
                ActionResult::ok(vacancies)
            }
            Err(err) => self.fail("Failed to load vacancies", err),
        }
    }

    /// Applicant vacancy detail. The endpoint answers with a list; the first
    /// element is the record, an empty list is not-found.
    pub async fn fetch_vacancy(&self, vacancy_id: i64) -> ActionResult<Vacancy> {
        let path = format!("/api/applicant/vacancies/{}", vacancy_id);
        match self.api.get_json::<Vec<ApplicantVacancy>>(&path).await {
            Ok(list) => match list.into_iter().next() {
                Some(dto) => ActionResult::ok(dto.into()),
                None => ActionResult::none(),
            },
            Err(Error::NotFound(_)) => ActionResult::none(),
            Err(err) => self.fail("Failed to load vacancy", err),
        }
    }

    /// HR vacancy detail: the vacancy card plus its responses table. The
    /// card part is upserted into the cached collection.
    pub async fn fetch_hr_vacancy(&self, vacancy_id: i64) -> ActionResult<HrVacancyDetail> {
        let path = format!("/api/hr/vacancies/{}", vacancy_id);
        match self.api.get_json::<HrVacancyDetail>(&path).await {
            Ok(detail) => {
                let vacancy: Vacancy = detail.vacancy.clone().into();
                self.state.send_modify(|s| upsert_vacancy(&mut s.vacancies, vacancy));
                ActionResult::ok(detail)
            }
            Err(Error::NotFound(_)) => ActionResult::none(),
            Err(err) => self.fail("Failed to load vacancy", err),
        }
    }

    pub async fn fetch_hr_applicant(
        &self,
        applicant_id: i64,
        vacancy_id: i64,
    ) -> ActionResult<ApplicantReview> {
        let path = format!(
            "/api/hr/applicants/{}?vacancy_id={}&applicant_id={}",
            applicant_id, vacancy_id, applicant_id
        );
        match self.api.get_json::<ApplicantReview>(&path).await {
            Ok(review) => ActionResult::ok(review),
            Err(Error::NotFound(_)) => ActionResult::none(),
            Err(err) => self.fail("Failed to load applicant", err),
        }
    }

    /// Confirms the status change with the server, then patches the one
    /// matching cached entry. Nothing is touched optimistically.
    pub async fn change_vacancy_status(
        &self,
        vacancy_id: i64,
        status: VacancyStatus,
    ) -> ActionResult<VacancyStatus> {
        let path = format!("/api/hr/vacancies/{}/status", vacancy_id);
        let body = VacancyStatusUpdateRequest { status };
        match self
            .api
            .put_json::<VacancyStatusUpdateResponse, _>(&path, &body)
            .await
        {
            Ok(confirmed) => {
                self.state.send_modify(|s| {
                    if let Some(v) = s.vacancies.iter_mut().find(|v| v.vacancy_id == vacancy_id) {
                        v.status = confirmed.status;
                    }
                });
                self.success_toast("Vacancy status updated", "");
                ActionResult::ok(confirmed.status)
            }
            Err(err) => self.fail("Failed to change vacancy status", err),
        }
    }

    /// Create (no id) or update (id) a vacancy from an uploaded CV. The
    /// returned record is merged into the collection by id, so a follow-up
    /// list fetch shows it exactly once.
    pub async fn upload_cv(&self, file: ResumeFile, vacancy_id: Option<i64>) -> ActionResult<Vacancy> {
        if let Err(e) = validate_resume_file(&file) {
            return ActionResult::err(e.user_message());
        }
        let form = match file_part(&file) {
            Ok(part) => Form::new().part("file", part),
            Err(e) => return ActionResult::err(e.user_message()),
        };
        let uploaded = match vacancy_id {
            Some(id) => {
                let path = format!("/api/hr/vacancies/{}", id);
                self.api.put_multipart::<HrVacancySummary>(&path, form).await
            }
            None => {
                self.api
                    .post_multipart::<HrVacancySummary>("/api/hr/vacancies", form)
                    .await
            }
        };
        match uploaded {
            Ok(dto) => {
                let vacancy: Vacancy = dto.into();
                self.state
                    .send_modify(|s| upsert_vacancy(&mut s.vacancies, vacancy.clone()));
                let title = if vacancy_id.is_some() {
                    "Vacancy updated"
                } else {
                    "Vacancy created"
                };
                self.success_toast(title, &vacancy.name);
                ActionResult::ok(vacancy)
            }
            Err(err) => self.fail("Failed to upload CV", err),
        }
    }

    /// Applicant-visible feed: cached vacancies minus the ones already
    /// applied to, minus closed and inactive postings. Pure selector.
    pub fn filtered_vacancies(&self) -> Vec<Vacancy> {
        let state = self.state.borrow();
        let applied: HashSet<i64> = state.applications.iter().map(|a| a.vacancy_id).collect();
        state
            .vacancies
            .iter()
            .filter(|v| !applied.contains(&v.vacancy_id) && !v.status.is_hidden_from_applicants())
            .cloned()
            .collect()
    }

    // ---- applications -----------------------------------------------------

    pub async fn fetch_applications(&self) -> ActionResult<Vec<JobApplication>> {
        match self
            .api
            .get_json::<Vec<JobApplicationListItem>>("/api/applicant/job_applications")
            .await
        {
            Ok(list) => {
                let applications: Vec<JobApplication> =
                    list.into_iter().map(JobApplication::from).collect();
                self.state
                    .send_modify(|s| s.applications = applications.clone());
                ActionResult::ok(applications)
            }
            Err(err) => self.fail("Failed to load applications", err),
        }
    }

    pub async fn fetch_application(&self, vacancy_id: i64) -> ActionResult<JobApplication> {
        let path = format!("/api/applicant/job_applications/{}", vacancy_id);
        match self.api.get_json::<JobApplicationDetail>(&path).await {
            Ok(detail) => ActionResult::ok(detail.into_application(vacancy_id)),
            Err(Error::NotFound(_)) => ActionResult::none(),
            Err(err) => self.fail("Failed to load application", err),
        }
    }

    /// Submits an application, then re-fetches the list so it stays
    /// authoritative; no synthetic record is appended locally.
    pub async fn apply_to_vacancy(&self, vacancy_id: i64) -> ActionResult<()> {
        let path = format!("/api/applicant/job_applications/{}", vacancy_id);
        match self.api.post_empty::<serde_json::Value>(&path).await {
            Ok(_) => {
                info!(vacancy_id, "application submitted");
                self.success_toast("Application submitted", "");
                self.fetch_applications().await;
                ActionResult::ok(())
            }
            Err(err) => self.fail("Failed to apply", err),
        }
    }

    pub async fn fetch_interview_link(&self, vacancy_id: i64) -> ActionResult<String> {
        let path = format!(
            "/api/applicant/job_applications/{}/interview?vacancy_id={}",
            vacancy_id, vacancy_id
        );
        match self.api.get_json::<InterviewLinkResponse>(&path).await {
            Ok(response) => match response.interview_link {
                Some(link) => ActionResult::ok(link),
                None => ActionResult::none(),
            },
            Err(Error::NotFound(_)) => ActionResult::none(),
            Err(err) => self.fail("Failed to load interview link", err),
        }
    }

    pub async fn upload_resume(&self, file: ResumeFile) -> ActionResult<()> {
        if let Err(e) = validate_resume_file(&file) {
            return ActionResult::err(e.user_message());
        }
        let form = match file_part(&file) {
            Ok(part) => Form::new().part("file", part),
            Err(e) => return ActionResult::err(e.user_message()),
        };
        match self
            .api
            .post_multipart::<serde_json::Value>("/api/user/me/resume", form)
            .await
        {
            Ok(_) => {
                self.success_toast("Resume uploaded", &file.file_name);
                ActionResult::ok(())
            }
            Err(err) => self.fail("Failed to upload resume", err),
        }
    }

    // ---- toasts -----------------------------------------------------------

    /// Appends a toast and schedules its removal after `duration_ms`, unless
    /// the duration is zero. Manual dismissal does not cancel the timer;
    /// removal is idempotent so the late callback is a no-op.
    pub fn add_toast(
        &self,
        title: &str,
        description: &str,
        variant: ToastVariant,
        duration_ms: u64,
    ) -> String {
        let toast = Toast {
            id: generate_toast_id(),
            title: title.to_string(),
            description: description.to_string(),
            variant,
            duration_ms,
        };
        let id = toast.id.clone();
        self.state.send_modify(|s| s.toasts.push(toast));

        if duration_ms > 0 {
            let store = self.clone();
            let expired = id.clone();
            tokio::spawn(async move {
                tokio::time::sleep(Duration::from_millis(duration_ms)).await;
                store.remove_toast(&expired);
            });
        }
        id
    }

    pub fn remove_toast(&self, id: &str) {
        self.state.send_modify(|s| s.toasts.retain(|t| t.id != id));
    }

    pub fn success_toast(&self, title: &str, description: &str) -> String {
        self.add_toast(title, description, ToastVariant::Success, DEFAULT_TOAST_DURATION_MS)
    }

    pub fn error_toast(&self, title: &str, description: &str) -> String {
        self.add_toast(title, description, ToastVariant::Destructive, DEFAULT_TOAST_DURATION_MS)
    }

    // ---- internals --------------------------------------------------------

    fn fail<T>(&self, title: &str, err: Error) -> ActionResult<T> {
        warn!(error = %err, "{}", title);
        let message = err.user_message();
        self.error_toast(title, &message);
        ActionResult::err(message)
    }
}

/// Replace-by-id or append; the collection never holds two entries with the
/// same `vacancy_id`.
fn upsert_vacancy(vacancies: &mut Vec<Vacancy>, vacancy: Vacancy) {
    match vacancies.iter_mut().find(|v| v.vacancy_id == vacancy.vacancy_id) {
        Some(existing) => *existing = vacancy,
        None => vacancies.push(vacancy),
    }
}

fn restore_session(storage: &dyn Storage) -> Option<User> {
    let raw = storage.get(USER_KEY)?;
    match serde_json::from_str::<User>(&raw) {
        Ok(user) => Some(user),
        Err(e) => {
            // Same policy as the web client: corrupted session data is
            // dropped, not surfaced.
            warn!(error = %e, "discarding corrupt persisted user");
            storage.remove(USER_KEY);
            None
        }
    }
}
