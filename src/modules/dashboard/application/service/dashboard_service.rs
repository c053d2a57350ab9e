use std::time::Duration;

use serde::Serialize;

use crate::config::ClientConfig;
use crate::modules::content::application::domain::entities::{
    CaseStudy, Mentorship, Testimonial,
};
use crate::modules::dashboard::adapter::outgoing::{DemoStore, DemoStoreError};
use crate::modules::dashboard::application::ports::outgoing::{
    AdminGateway, AdminGatewayError, CaseStudyCreate, CaseStudyPatch, LoginRedirect,
    MentorshipCreate, MentorshipPatch, TestimonialCreate, TestimonialPatch,
};
use crate::modules::session::application::ports::outgoing::{SessionStore, SessionStoreError};

/// Reserved demo credentials, recognized entirely client-side. Never sent
/// to the real API.
pub const DEMO_EMAIL: &str = "demo@amgad.design";
pub const DEMO_PASSWORD: &str = "demo123";

const DEMO_TOKEN: &str = "demo-session-token";
const DEMO_USER_NAME: &str = "Demo User";

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum DashboardError {
    #[error("Unauthorized")]
    Unauthorized,

    #[error("No authentication token found. Please login.")]
    NotLoggedIn,

    #[error("{entity} not found")]
    NotFound { entity: &'static str },

    /// Backend validation or business error, message passed through
    /// verbatim for display to the admin user.
    #[error("{0}")]
    Rejected(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Failed to decode response: {0}")]
    Decode(String),

    #[error(transparent)]
    Session(#[from] SessionStoreError),
}

impl From<DemoStoreError> for DashboardError {
    fn from(err: DemoStoreError) -> Self {
        match err {
            DemoStoreError::NotFound { entity } => DashboardError::NotFound { entity },
            DemoStoreError::Poisoned => {
                DashboardError::Rejected("Demo data unavailable".to_string())
            }
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Domain
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    User,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardUser {
    pub name: String,
    pub email: String,
    pub role: UserRole,
}

/// Aggregate counts for the dashboard summary tiles. Always computed
/// client-side by reducing the three collections; there is no backend
/// aggregate endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_projects: usize,
    pub total_testimonials: usize,
    pub total_mentorship_sessions: usize,
    pub featured_projects: usize,
    pub featured_testimonials: usize,
    pub featured_sessions: usize,
}

//
// ──────────────────────────────────────────────────────────
// Service
// ──────────────────────────────────────────────────────────
//

/// Dashboard Access Facade.
///
/// Every read/write branches on the stored demo-mode flag: demo sessions
/// mutate the in-memory [`DemoStore`], real sessions issue authenticated
/// requests through the [`AdminGateway`]. A 401 from the gateway is a
/// hard stop: the stored session is cleared, the login redirect fires,
/// and the call rejects as unauthorized.
///
/// Demo operations incur the same simulated latency as network calls so
/// loading-state UI behaves identically regardless of mode.
pub struct DashboardService<G, S, R>
where
    G: AdminGateway,
    S: SessionStore,
    R: LoginRedirect,
{
    gateway: G,
    session: S,
    redirect: R,
    demo: DemoStore,
    simulated_latency: Duration,
}

impl<G, S, R> DashboardService<G, S, R>
where
    G: AdminGateway,
    S: SessionStore,
    R: LoginRedirect,
{
    pub fn new(gateway: G, session: S, redirect: R, config: &ClientConfig) -> Self {
        Self {
            gateway,
            session,
            redirect,
            demo: DemoStore::seeded(),
            simulated_latency: config.simulated_latency,
        }
    }

    pub fn is_authenticated(&self) -> Result<bool, DashboardError> {
        Ok(self.session.is_authenticated()?)
    }

    pub fn is_demo_mode(&self) -> Result<bool, DashboardError> {
        Ok(self.session.demo_mode()?)
    }

    async fn demo_pause(&self) {
        tokio::time::sleep(self.simulated_latency).await;
    }

    fn require_token(&self) -> Result<String, DashboardError> {
        self.session.token()?.ok_or(DashboardError::NotLoggedIn)
    }

    /// Translates a gateway failure, enforcing the 401 invariant: clear
    /// the stored session, send the UI to the login page, reject.
    fn gateway_error(&self, entity: &'static str, err: AdminGatewayError) -> DashboardError {
        match err {
            AdminGatewayError::Unauthorized => {
                if let Err(store_err) = self.session.remove_token() {
                    tracing::error!(error = %store_err, "failed to clear session after 401");
                }
                self.redirect.redirect_to_login();
                DashboardError::Unauthorized
            }
            AdminGatewayError::NotFound => DashboardError::NotFound { entity },
            AdminGatewayError::Rejected(message) => DashboardError::Rejected(message),
            AdminGatewayError::Network(message) => DashboardError::Network(message),
            AdminGatewayError::Decode(message) => DashboardError::Decode(message),
        }
    }

    // ------------------------
    // Authentication
    // ------------------------

    pub async fn login(
        &self,
        email: &str,
        password: &str,
    ) -> Result<DashboardUser, DashboardError> {
        if email == DEMO_EMAIL && password == DEMO_PASSWORD {
            self.demo_pause().await;
            self.session.set_token(DEMO_TOKEN)?;
            self.session.set_demo_mode(true)?;
            tracing::info!("demo mode activated, all changes are temporary");
            return Ok(DashboardUser {
                name: DEMO_USER_NAME.to_string(),
                email: DEMO_EMAIL.to_string(),
                role: UserRole::Admin,
            });
        }

        self.session.set_demo_mode(false)?;
        match self.gateway.login(email, password).await {
            Ok(user) => {
                self.session.set_token(&user.token)?;
                tracing::info!(email = %user.email, "login succeeded");
                Ok(DashboardUser {
                    name: user.name,
                    email: user.email,
                    role: if user.is_admin {
                        UserRole::Admin
                    } else {
                        UserRole::User
                    },
                })
            }
            Err(AdminGatewayError::Unauthorized) => {
                Err(DashboardError::Rejected("Invalid email or password".to_string()))
            }
            Err(AdminGatewayError::NotFound) => {
                Err(DashboardError::Rejected("Login failed".to_string()))
            }
            Err(AdminGatewayError::Rejected(message)) => Err(DashboardError::Rejected(message)),
            Err(AdminGatewayError::Network(message)) => Err(DashboardError::Network(message)),
            Err(AdminGatewayError::Decode(message)) => Err(DashboardError::Decode(message)),
        }
    }

    /// Clears the session. A demo session additionally resets the demo
    /// dataset to its seed values, so demo edits never survive a
    /// logout/login cycle.
    pub async fn logout(&self) -> Result<(), DashboardError> {
        if self.session.demo_mode()? {
            self.demo.reset()?;
            tracing::info!("demo session ended, demo data reset");
        }
        self.session.remove_token()?;
        Ok(())
    }

    // ------------------------
    // Case studies
    // ------------------------

    pub async fn get_all_case_studies(&self) -> Result<Vec<CaseStudy>, DashboardError> {
        if self.session.demo_mode()? {
            self.demo_pause().await;
            return Ok(self.demo.case_studies()?);
        }
        let token = self.require_token()?;
        self.gateway
            .list_case_studies(&token)
            .await
            .map_err(|err| self.gateway_error("Case study", err))
    }

    pub async fn create_case_study(
        &self,
        data: CaseStudyCreate,
    ) -> Result<CaseStudy, DashboardError> {
        if self.session.demo_mode()? {
            self.demo_pause().await;
            return Ok(self.demo.insert_case_study(data)?);
        }
        let token = self.require_token()?;
        self.gateway
            .create_case_study(&token, &data)
            .await
            .map_err(|err| self.gateway_error("Case study", err))
    }

    /// The backend addresses case studies by slug, and a rename must be
    /// issued against the NEW slug: a slug in the patch takes precedence
    /// over the identifier argument. The demo store resolves the passed
    /// identifier itself (id or current slug).
    pub async fn update_case_study(
        &self,
        key: &str,
        patch: &CaseStudyPatch,
    ) -> Result<CaseStudy, DashboardError> {
        if self.session.demo_mode()? {
            self.demo_pause().await;
            return Ok(self.demo.patch_case_study(key, patch)?);
        }
        let token = self.require_token()?;
        let key = patch.slug.as_deref().unwrap_or(key);
        self.gateway
            .update_case_study(&token, key, patch)
            .await
            .map_err(|err| self.gateway_error("Case study", err))
    }

    pub async fn delete_case_study(&self, key: &str) -> Result<(), DashboardError> {
        if self.session.demo_mode()? {
            self.demo_pause().await;
            return Ok(self.demo.remove_case_study(key)?);
        }
        let token = self.require_token()?;
        self.gateway
            .delete_case_study(&token, key)
            .await
            .map_err(|err| self.gateway_error("Case study", err))
    }

    // ------------------------
    // Testimonials
    // ------------------------

    pub async fn get_all_testimonials(&self) -> Result<Vec<Testimonial>, DashboardError> {
        if self.session.demo_mode()? {
            self.demo_pause().await;
            return Ok(self.demo.testimonials()?);
        }
        let token = self.require_token()?;
        self.gateway
            .list_testimonials(&token)
            .await
            .map_err(|err| self.gateway_error("Testimonial", err))
    }

    pub async fn create_testimonial(
        &self,
        data: TestimonialCreate,
    ) -> Result<Testimonial, DashboardError> {
        if self.session.demo_mode()? {
            self.demo_pause().await;
            return Ok(self.demo.insert_testimonial(data)?);
        }
        let token = self.require_token()?;
        self.gateway
            .create_testimonial(&token, &data)
            .await
            .map_err(|err| self.gateway_error("Testimonial", err))
    }

    pub async fn update_testimonial(
        &self,
        key: &str,
        patch: &TestimonialPatch,
    ) -> Result<Testimonial, DashboardError> {
        if self.session.demo_mode()? {
            self.demo_pause().await;
            return Ok(self.demo.patch_testimonial(key, patch)?);
        }
        let token = self.require_token()?;
        self.gateway
            .update_testimonial(&token, key, patch)
            .await
            .map_err(|err| self.gateway_error("Testimonial", err))
    }

    pub async fn delete_testimonial(&self, key: &str) -> Result<(), DashboardError> {
        if self.session.demo_mode()? {
            self.demo_pause().await;
            return Ok(self.demo.remove_testimonial(key)?);
        }
        let token = self.require_token()?;
        self.gateway
            .delete_testimonial(&token, key)
            .await
            .map_err(|err| self.gateway_error("Testimonial", err))
    }

    // ------------------------
    // Mentorship
    // ------------------------

    pub async fn get_all_mentorship_sessions(&self) -> Result<Vec<Mentorship>, DashboardError> {
        if self.session.demo_mode()? {
            self.demo_pause().await;
            return Ok(self.demo.mentorship_sessions()?);
        }
        let token = self.require_token()?;
        self.gateway
            .list_mentorship_sessions(&token)
            .await
            .map_err(|err| self.gateway_error("Mentorship session", err))
    }

    pub async fn create_mentorship_session(
        &self,
        data: MentorshipCreate,
    ) -> Result<Mentorship, DashboardError> {
        if self.session.demo_mode()? {
            self.demo_pause().await;
            return Ok(self.demo.insert_mentorship_session(data)?);
        }
        let token = self.require_token()?;
        self.gateway
            .create_mentorship_session(&token, &data)
            .await
            .map_err(|err| self.gateway_error("Mentorship session", err))
    }

    /// Same slug-precedence rule as [`Self::update_case_study`].
    pub async fn update_mentorship_session(
        &self,
        key: &str,
        patch: &MentorshipPatch,
    ) -> Result<Mentorship, DashboardError> {
        if self.session.demo_mode()? {
            self.demo_pause().await;
            return Ok(self.demo.patch_mentorship_session(key, patch)?);
        }
        let token = self.require_token()?;
        let key = patch.slug.as_deref().unwrap_or(key);
        self.gateway
            .update_mentorship_session(&token, key, patch)
            .await
            .map_err(|err| self.gateway_error("Mentorship session", err))
    }

    pub async fn delete_mentorship_session(&self, key: &str) -> Result<(), DashboardError> {
        if self.session.demo_mode()? {
            self.demo_pause().await;
            return Ok(self.demo.remove_mentorship_session(key)?);
        }
        let token = self.require_token()?;
        self.gateway
            .delete_mentorship_session(&token, key)
            .await
            .map_err(|err| self.gateway_error("Mentorship session", err))
    }

    // ------------------------
    // Stats
    // ------------------------

    /// Summary-tile counts, reduced client-side over all three
    /// collections. Never fails: any fetch error yields zeroed counts so
    /// the dashboard landing page renders regardless.
    pub async fn get_dashboard_stats(&self) -> DashboardStats {
        let (projects, testimonials, sessions) = futures::join!(
            self.get_all_case_studies(),
            self.get_all_testimonials(),
            self.get_all_mentorship_sessions(),
        );

        match (projects, testimonials, sessions) {
            (Ok(projects), Ok(testimonials), Ok(sessions)) => DashboardStats {
                total_projects: projects.len(),
                total_testimonials: testimonials.len(),
                total_mentorship_sessions: sessions.len(),
                featured_projects: projects.iter().filter(|p| p.is_featured).count(),
                featured_testimonials: testimonials.iter().filter(|t| t.is_featured).count(),
                featured_sessions: sessions.iter().filter(|s| s.is_featured).count(),
            },
            (projects, testimonials, sessions) => {
                for err in [projects.err(), testimonials.err(), sessions.err()]
                    .into_iter()
                    .flatten()
                {
                    tracing::warn!(error = %err, "dashboard stats fetch failed, zeroing counts");
                }
                DashboardStats::default()
            }
        }
    }
}
