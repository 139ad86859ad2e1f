//! Inquiry Board Endpoints

use reqwest::Method;

use super::ApiClient;
use crate::error::ApiResult;
use crate::models::{NewQuestion, PasswordBody, QuestionDetail, QuestionPage};

impl ApiClient {
    /// `page` is zero-based
    pub async fn list_questions(&self, page: u32) -> ApiResult<QuestionPage> {
        self.get_json(&format!("/question?page={}", page)).await
    }

    pub async fn create_question(&self, question: &NewQuestion) -> ApiResult<()> {
        self.send_ignore_body(Method::POST, "/question", Some(question)).await
    }

    /// FAQ entries are public
    pub async fn get_faq(&self, id: u32) -> ApiResult<QuestionDetail> {
        self.get_json(&format!("/question/{}", id)).await
    }

    /// Guests unlock their own inquiry with the password they set
    pub async fn open_question(&self, id: u32, password: &str) -> ApiResult<QuestionDetail> {
        self.send_json(Method::POST, &format!("/question/{}", id), Some(&PasswordBody { password })).await
    }

    pub async fn get_question_as_admin(&self, id: u32) -> ApiResult<QuestionDetail> {
        self.get_json(&format!("/admin/question/{}", id)).await
    }

    /// Mark an inquiry answered
    pub async fn complete_question(&self, id: u32) -> ApiResult<()> {
        self.send_ignore_body::<()>(Method::PUT, &format!("/admin/question/{}/complete", id), None).await
    }
}
