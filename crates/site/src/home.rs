//! Home-page view state: the fetched project list, the rotating hero
//! background, and the enquiry form.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{watch, Mutex};
use tracing::{debug, warn};

use client::projects::ProjectQuery;
use client::{enquiries, projects, ApiClient};
use models::{ApiError, CreateEnquiry, Enquiry, Project};

use crate::hero::HeroFrame;

/// How often the hero background advances to the next project.
pub const ROTATION_PERIOD: Duration = Duration::from_secs(15);

/// Outcome of the last enquiry submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Success,
    Error,
}

/// Local state of the contact form. Plain strings throughout; a successful
/// submission resets every field to empty.
#[derive(Debug, Clone, Default)]
pub struct EnquiryForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
    pub project_code: String,
    pub submitting: bool,
    pub status: SubmitStatus,
}

impl EnquiryForm {
    fn to_request(&self) -> CreateEnquiry {
        CreateEnquiry {
            // The form always submits the field, empty or not.
            project_code: Some(self.project_code.clone()),
            name: self.name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            message: self.message.clone(),
        }
    }

    fn reset(&mut self) {
        self.name.clear();
        self.email.clear();
        self.phone.clear();
        self.message.clear();
        self.project_code.clear();
    }
}

pub struct HomePage {
    projects: Vec<Project>,
    index: usize,
    pub loading: bool,
    pub load_error: Option<ApiError>,
    pub form: EnquiryForm,
    hero_tx: watch::Sender<HeroFrame>,
}

impl HomePage {
    /// The hero sender comes from the parent that also wires the navbar;
    /// the page never owns a global.
    pub fn new(hero_tx: watch::Sender<HeroFrame>) -> Self {
        Self {
            projects: Vec::new(),
            index: 0,
            loading: false,
            load_error: None,
            form: EnquiryForm::default(),
            hero_tx,
        }
    }

    /// Fetch the project list. A failure is recorded and the page stays
    /// interactive; it is never fatal.
    pub async fn load(&mut self, client: &ApiClient) {
        self.loading = true;
        match projects::list(client, &ProjectQuery::default()).await {
            Ok(page) => {
                self.projects = page.content;
                self.load_error = None;
            }
            Err(e) => {
                warn!(error = %e, "could not load projects for home page");
                self.load_error = Some(e);
            }
        }
        self.loading = false;
        self.broadcast();
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn current_index(&self) -> usize {
        self.index
    }

    /// Background image for the current rotation position: the current
    /// project's hero image, else the first project that has one.
    pub fn current_background_image(&self) -> Option<String> {
        let current = self.projects.get(self.index)?;
        if current.hero_image_url.is_some() {
            return current.hero_image_url.clone();
        }
        self.projects.iter().find_map(|p| p.hero_image_url.clone())
    }

    /// Advance the rotation one step (cyclic) and broadcast the new frame.
    /// With no projects loaded this does nothing.
    pub fn tick(&mut self) {
        if self.projects.is_empty() {
            return;
        }
        self.index = (self.index + 1) % self.projects.len();
        self.broadcast();
    }

    fn broadcast(&self) {
        let frame = HeroFrame { image_url: self.current_background_image(), index: self.index };
        debug!(index = frame.index, has_image = frame.image_url.is_some(), "hero frame");
        self.hero_tx.send_replace(frame);
    }

    /// Submit the enquiry form. On success the caller gets the created
    /// record and the form resets to all-empty fields; on failure the
    /// error propagates and the form keeps its contents.
    pub async fn submit_enquiry(&mut self, client: &ApiClient) -> Result<Enquiry, ApiError> {
        self.form.submitting = true;
        self.form.status = SubmitStatus::Idle;
        let request = self.form.to_request();
        let result = enquiries::create(client, &request).await;
        self.form.submitting = false;
        match result {
            Ok(created) => {
                self.form.reset();
                self.form.status = SubmitStatus::Success;
                Ok(created)
            }
            Err(e) => {
                self.form.status = SubmitStatus::Error;
                Err(e)
            }
        }
    }
}

/// Handle to the recurring rotation task; dropping it (unmounting the
/// page) cancels the timer.
pub struct RotationHandle {
    task: tokio::task::JoinHandle<()>,
}

impl Drop for RotationHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}

/// One recurring scheduled tick per mounted home page.
pub fn spawn_rotation(page: Arc<Mutex<HomePage>>, period: Duration) -> RotationHandle {
    let task = tokio::spawn(async move {
        let mut ticker = tokio::time::interval(period);
        // interval fires immediately; the first frame was already
        // broadcast by `load`.
        ticker.tick().await;
        loop {
            ticker.tick().await;
            page.lock().await.tick();
        }
    });
    RotationHandle { task }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hero::hero_channel;
    use models::ProjectStatus;

    fn project(id: i64, hero: Option<&str>) -> Project {
        Project {
            id,
            code: format!("JVC-{id:03}"),
            name: format!("Project {id}"),
            description: None,
            city: "Chennai".into(),
            project_status: ProjectStatus::UnderConstruction,
            hero_image_url: hero.map(str::to_string),
            start_date: None,
            end_date: None,
            updated_at: "2025-02-11T08:00:00Z".into(),
            images: Vec::new(),
        }
    }

    fn page_with(projects: Vec<Project>) -> (HomePage, watch::Receiver<HeroFrame>) {
        let (tx, rx) = hero_channel();
        let mut page = HomePage::new(tx);
        page.projects = projects;
        (page, rx)
    }

    #[test]
    fn n_ticks_wrap_back_to_zero() {
        let (mut page, rx) = page_with(vec![
            project(1, Some("a.jpg")),
            project(2, Some("b.jpg")),
            project(3, Some("c.jpg")),
        ]);
        for _ in 0..3 {
            page.tick();
        }
        assert_eq!(page.current_index(), 0);
        assert_eq!(rx.borrow().index, 0);
    }

    #[test]
    fn each_tick_advances_by_one() {
        let (mut page, rx) = page_with(vec![project(1, Some("a.jpg")), project(2, Some("b.jpg"))]);
        page.tick();
        assert_eq!(page.current_index(), 1);
        assert_eq!(rx.borrow().image_url.as_deref(), Some("b.jpg"));
    }

    #[test]
    fn tick_without_projects_is_a_no_op() {
        let (mut page, rx) = page_with(Vec::new());
        page.tick();
        assert_eq!(page.current_index(), 0);
        assert_eq!(*rx.borrow(), HeroFrame::default());
    }

    #[test]
    fn falls_back_to_first_project_with_an_image() {
        let (mut page, _rx) = page_with(vec![project(1, None), project(2, Some("b.jpg"))]);
        assert_eq!(page.current_background_image().as_deref(), Some("b.jpg"));
        page.tick();
        assert_eq!(page.current_background_image().as_deref(), Some("b.jpg"));
    }

    #[test]
    fn no_project_has_an_image() {
        let (page, _rx) = page_with(vec![project(1, None)]);
        assert_eq!(page.current_background_image(), None);
    }

    #[tokio::test(start_paused = true)]
    async fn rotation_task_ticks_on_the_period_and_stops_on_drop() {
        let (page, rx) = page_with(vec![
            project(1, Some("a.jpg")),
            project(2, Some("b.jpg")),
            project(3, Some("c.jpg")),
        ]);
        let page = Arc::new(Mutex::new(page));
        let handle = spawn_rotation(Arc::clone(&page), ROTATION_PERIOD);

        // Three periods elapse: ticks at 15s, 30s, 45s wrap back to 0.
        tokio::time::sleep(Duration::from_secs(46)).await;
        assert_eq!(page.lock().await.current_index(), 0);
        assert_eq!(rx.borrow().index, 0);

        // Unmounting the page cancels the timer.
        drop(handle);
        tokio::time::sleep(Duration::from_secs(60)).await;
        assert_eq!(page.lock().await.current_index(), 0);
    }

    #[test]
    fn form_request_always_carries_project_code() {
        let form = EnquiryForm { name: "A".into(), ..Default::default() };
        let req = form.to_request();
        assert_eq!(req.project_code.as_deref(), Some(""));
        assert_eq!(req.name, "A");
    }
}
