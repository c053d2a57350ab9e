use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::ClientConfig;
use crate::modules::content::application::domain::entities::{
    CaseStudy, Mentorship, Testimonial,
};
use crate::modules::dashboard::application::ports::outgoing::{
    AdminGateway, AdminGatewayError, AuthenticatedUser, CaseStudyCreate, CaseStudyPatch,
    MentorshipCreate, MentorshipPatch, TestimonialCreate, TestimonialPatch,
};
use crate::shared::http::{read_json, HttpError};

/// reqwest-backed implementation of `AdminGateway`.
///
/// Every call except `login` carries `Authorization: Bearer <token>`.
/// Status translation is shared with the content adapter; the 401
/// consequences (session wipe, redirect) live in the service, not here.
pub struct HttpAdminGateway {
    client: reqwest::Client,
    base_url: String,
}

fn map_http_error(err: HttpError) -> AdminGatewayError {
    match err {
        HttpError::Unauthorized => AdminGatewayError::Unauthorized,
        HttpError::NotFound => AdminGatewayError::NotFound,
        HttpError::Rejected(message) => AdminGatewayError::Rejected(message),
        HttpError::Network(message) => AdminGatewayError::Network(message),
        HttpError::Decode(message) => AdminGatewayError::Decode(message),
    }
}

#[derive(Serialize)]
struct LoginBody<'a> {
    email: &'a str,
    password: &'a str,
}

impl HttpAdminGateway {
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: config.api_base.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get<T: DeserializeOwned>(
        &self,
        token: &str,
        path: &str,
    ) -> Result<T, AdminGatewayError> {
        let response = self
            .client
            .get(self.url(path))
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| AdminGatewayError::Network(e.to_string()))?;
        read_json(response).await.map_err(map_http_error)
    }

    async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        token: &str,
        path: &str,
        body: &B,
    ) -> Result<T, AdminGatewayError> {
        let response = self
            .client
            .post(self.url(path))
            .bearer_auth(token)
            .json(body)
            .send()
            .await
            .map_err(|e| AdminGatewayError::Network(e.to_string()))?;
        read_json(response).await.map_err(map_http_error)
    }

    async fn put<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        token: &str,
        path: &str,
        body: &B,
    ) -> Result<T, AdminGatewayError> {
        let response = self
            .client
            .put(self.url(path))
            .bearer_auth(token)
            .json(body)
            .send()
            .await
            .map_err(|e| AdminGatewayError::Network(e.to_string()))?;
        read_json(response).await.map_err(map_http_error)
    }

    async fn delete(&self, token: &str, path: &str) -> Result<(), AdminGatewayError> {
        let response = self
            .client
            .delete(self.url(path))
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| AdminGatewayError::Network(e.to_string()))?;
        // Delete responses carry a `{message}` body we do not need.
        read_json::<serde_json::Value>(response)
            .await
            .map(|_| ())
            .map_err(map_http_error)
    }
}

#[async_trait]
impl AdminGateway for HttpAdminGateway {
    async fn login(
        &self,
        email: &str,
        password: &str,
    ) -> Result<AuthenticatedUser, AdminGatewayError> {
        let response = self
            .client
            .post(self.url("/users/login"))
            .json(&LoginBody { email, password })
            .send()
            .await
            .map_err(|e| AdminGatewayError::Network(e.to_string()))?;
        read_json(response).await.map_err(map_http_error)
    }

    async fn list_case_studies(&self, token: &str) -> Result<Vec<CaseStudy>, AdminGatewayError> {
        self.get(token, "/case-studies").await
    }

    async fn create_case_study(
        &self,
        token: &str,
        data: &CaseStudyCreate,
    ) -> Result<CaseStudy, AdminGatewayError> {
        self.post(token, "/case-studies", data).await
    }

    async fn update_case_study(
        &self,
        token: &str,
        key: &str,
        patch: &CaseStudyPatch,
    ) -> Result<CaseStudy, AdminGatewayError> {
        self.put(token, &format!("/case-studies/{key}"), patch).await
    }

    async fn delete_case_study(&self, token: &str, key: &str) -> Result<(), AdminGatewayError> {
        self.delete(token, &format!("/case-studies/{key}")).await
    }

    async fn list_testimonials(&self, token: &str) -> Result<Vec<Testimonial>, AdminGatewayError> {
        self.get(token, "/testimonials").await
    }

    async fn create_testimonial(
        &self,
        token: &str,
        data: &TestimonialCreate,
    ) -> Result<Testimonial, AdminGatewayError> {
        self.post(token, "/testimonials", data).await
    }

    async fn update_testimonial(
        &self,
        token: &str,
        key: &str,
        patch: &TestimonialPatch,
    ) -> Result<Testimonial, AdminGatewayError> {
        self.put(token, &format!("/testimonials/{key}"), patch).await
    }

    async fn delete_testimonial(&self, token: &str, key: &str) -> Result<(), AdminGatewayError> {
        self.delete(token, &format!("/testimonials/{key}")).await
    }

    async fn list_mentorship_sessions(
        &self,
        token: &str,
    ) -> Result<Vec<Mentorship>, AdminGatewayError> {
        self.get(token, "/mentorship").await
    }

    async fn create_mentorship_session(
        &self,
        token: &str,
        data: &MentorshipCreate,
    ) -> Result<Mentorship, AdminGatewayError> {
        self.post(token, "/mentorship", data).await
    }

    async fn update_mentorship_session(
        &self,
        token: &str,
        key: &str,
        patch: &MentorshipPatch,
    ) -> Result<Mentorship, AdminGatewayError> {
        self.put(token, &format!("/mentorship/{key}"), patch).await
    }

    async fn delete_mentorship_session(
        &self,
        token: &str,
        key: &str,
    ) -> Result<(), AdminGatewayError> {
        self.delete(token, &format!("/mentorship/{key}")).await
    }
}
