//! Frontend Models
//!
//! Data structures matching backend JSON (camelCase on the wire).

use serde::{Deserialize, Serialize};

/// Uploaded image reference
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageRef {
    pub id: u32,
    pub original_filename: String,
    #[serde(default)]
    pub saved_path: String,
    /// `None` when the product has no image yet
    pub server_filename: Option<String>,
}

/// Product card data. Display order is the position in the list the backend returns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: u32,
    pub product_name: String,
    #[serde(default)]
    pub image: ImageRef,
}

/// Product category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductCategory {
    pub id: u32,
    pub category_name: String,
    #[serde(default)]
    pub image: ImageRef,
}

/// Inquiry board row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionSummary {
    pub id: u32,
    pub title: String,
    pub writer: String,
    pub created_date: String,
    #[serde(default)]
    pub status: bool,
    #[serde(default)]
    pub faq: bool,
}

/// One page of the inquiry board
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionPage {
    pub content: Vec<QuestionSummary>,
    pub total_pages: u32,
    /// Zero-based page index
    pub number: u32,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordUpdate {
    pub cur_password: String,
    pub new_password: String,
    pub new_password_check: String,
}

/// Body of `POST /question`
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct NewQuestion {
    pub title: String,
    pub writer: String,
    pub content: String,
    /// Lets the writer open the inquiry later
    pub password: String,
}

/// Body of `POST /admin/login` and of the password-gated inquiry view
#[derive(Debug, Clone, Serialize)]
pub struct PasswordBody<'a> {
    pub password: &'a str,
}

/// Reply under an inquiry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: u32,
    pub content: String,
    #[serde(default)]
    pub writer: String,
    #[serde(default)]
    pub create_time: String,
}

/// Full inquiry, as returned once the viewer is allowed to read it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionDetail {
    pub id: u32,
    pub title: String,
    pub writer: String,
    #[serde(default)]
    pub create_time: String,
    pub content: String,
    /// Attached images, served under `files/question/`
    #[serde(default)]
    pub files: Vec<ImageRef>,
    #[serde(default)]
    pub comments: Vec<Comment>,
    #[serde(default)]
    pub status: bool,
    #[serde(default)]
    pub faq: bool,
}

/// Server file names of the company introduction images (`GET /admin/images`)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyImages {
    #[serde(default)]
    pub comp_info_image: Option<String>,
    #[serde(default)]
    pub history_image: Option<String>,
    #[serde(default)]
    pub org_chart_image: Option<String>,
}

/// Catalogue, material approval and tax documents (`GET /admin/catalog-material`)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogDocuments {
    #[serde(default)]
    pub catalog_original_filename: Option<String>,
    #[serde(default)]
    pub catalog_server_filename: Option<String>,
    #[serde(default)]
    pub material_original_filename: Option<String>,
    #[serde(default)]
    pub material_server_filename: Option<String>,
    #[serde(default)]
    pub tax_original_filename: Option<String>,
    #[serde(default)]
    pub tax_server_filename: Option<String>,
}

/// One downloadable file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Download {
    pub label: &'static str,
    pub server_filename: String,
    /// Name the browser saves the file as
    pub original_filename: String,
}

impl CatalogDocuments {
    /// Documents that have been uploaded, in display order
    pub fn downloads(&self) -> Vec<Download> {
        [
            ("Catalogue", &self.catalog_server_filename, &self.catalog_original_filename),
            ("Material approval", &self.material_server_filename, &self.material_original_filename),
            ("Tax certificate", &self.tax_server_filename, &self.tax_original_filename),
        ]
        .into_iter()
        .filter_map(|(label, server, original)| {
            let server = server.as_deref().filter(|s| !s.is_empty())?;
            Some(Download {
                label,
                server_filename: server.to_string(),
                original_filename: original.clone().unwrap_or_else(|| server.to_string()),
            })
        })
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_from_backend_json() {
        let json = r#"{
            "id": 3,
            "productName": "Guard rail",
            "image": {"id": 9, "originalFilename": "rail.png", "savedPath": "/p", "serverFilename": null}
        }"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.id, 3);
        assert_eq!(product.product_name, "Guard rail");
        assert_eq!(product.image.server_filename, None);
    }

    #[test]
    fn test_question_detail_defaults() {
        let json = r#"{"id": 4, "title": "Quote", "writer": "Kim", "content": "40m?"}"#;
        let detail: QuestionDetail = serde_json::from_str(json).unwrap();
        assert!(detail.files.is_empty());
        assert!(detail.comments.is_empty());
        assert!(!detail.status);
    }

    #[test]
    fn test_downloads_skip_missing_documents() {
        let docs: CatalogDocuments = serde_json::from_str(r#"{
            "catalogOriginalFilename": "catalog.pdf",
            "catalogServerFilename": "c-1.pdf",
            "materialServerFilename": "",
            "taxServerFilename": "t-1.pdf"
        }"#).unwrap();

        let downloads = docs.downloads();
        assert_eq!(downloads.len(), 2);
        assert_eq!(downloads[0].label, "Catalogue");
        assert_eq!(downloads[0].original_filename, "catalog.pdf");
        // no original name recorded, save under the server name
        assert_eq!(downloads[1].original_filename, "t-1.pdf");
    }

    #[test]
    fn test_password_update_is_camel_case() {
        let body = serde_json::to_value(PasswordUpdate {
            cur_password: "a".into(),
            new_password: "b".into(),
            new_password_check: "b".into(),
        }).unwrap();
        assert_eq!(body["curPassword"], "a");
        assert_eq!(body["newPasswordCheck"], "b");
    }
}
