//! Content API client implementation

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::Deserialize;
use urlencoding::encode;

use crate::domain::entities::{FeedPage, PostDetail, PostLink, PostSummary, Section};
use crate::domain::ports::ContentSource;
use crate::error::ContentError;

/// Document type queried from the content API
const DOCUMENT_TYPE: &str = "posts";

/// Implementation of the content source over the CMS REST API
pub struct ContentApiClient {
    http: Client,
    base_url: String,
    access_token: Option<String>,
}

impl ContentApiClient {
    pub fn new(base_url: String, access_token: Option<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            access_token,
        }
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn get(&self, url: &str) -> reqwest::RequestBuilder {
        let request = self.http.get(url);
        match &self.access_token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn handle_response<T: for<'de> Deserialize<'de>>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, ContentError> {
        let status = response.status();

        if status.is_success() {
            response
                .json()
                .await
                .map_err(|e| ContentError::Deserialization(e.to_string()))
        } else if status.as_u16() == 401 || status.as_u16() == 403 {
            Err(ContentError::Unauthorized)
        } else {
            let message = response.text().await.unwrap_or_default();
            Err(ContentError::Api {
                status: status.as_u16(),
                message,
            })
        }
    }
}

/// Response types from the content API
#[derive(Deserialize)]
struct PageResponse {
    results: Vec<DocumentResponse>,
    next_page: Option<String>,
}

#[derive(Deserialize)]
struct DocumentResponse {
    id: String,
    first_publication_date: Option<DateTime<Utc>>,
    last_publication_date: Option<DateTime<Utc>>,
    data: DocumentData,
}

#[derive(Deserialize)]
struct DocumentData {
    title: String,
    #[serde(default)]
    subtitle: String,
    author: String,
    banner: Option<Banner>,
    #[serde(default)]
    content: Vec<SectionResponse>,
}

#[derive(Deserialize)]
struct Banner {
    url: String,
}

#[derive(Deserialize)]
struct SectionResponse {
    heading: String,
    body: Vec<Paragraph>,
}

#[derive(Deserialize)]
struct Paragraph {
    text: String,
}

impl From<DocumentResponse> for PostSummary {
    fn from(doc: DocumentResponse) -> Self {
        PostSummary {
            id: doc.id,
            published_at: doc.first_publication_date,
            title: doc.data.title,
            subtitle: doc.data.subtitle,
            author: doc.data.author,
        }
    }
}

impl From<DocumentResponse> for PostDetail {
    fn from(doc: DocumentResponse) -> Self {
        PostDetail {
            id: doc.id,
            published_at: doc.first_publication_date,
            last_edited_at: doc.last_publication_date,
            title: doc.data.title,
            author: doc.data.author,
            banner_url: doc.data.banner.map(|b| b.url).unwrap_or_default(),
            sections: doc.data.content.into_iter().map(Section::from).collect(),
        }
    }
}

impl From<SectionResponse> for Section {
    fn from(section: SectionResponse) -> Self {
        Section {
            heading: section.heading,
            paragraphs: section.body.into_iter().map(|p| p.text).collect(),
        }
    }
}

impl From<DocumentResponse> for PostLink {
    fn from(doc: DocumentResponse) -> Self {
        PostLink {
            id: doc.id,
            title: doc.data.title,
        }
    }
}

#[async_trait]
impl ContentSource for ContentApiClient {
    async fn fetch_page(
        &self,
        page_size: u32,
        cursor: Option<&str>,
    ) -> Result<FeedPage, ContentError> {
        // A cursor is the complete next-page URL handed back by the API;
        // fetch it verbatim.
        let response = match cursor {
            Some(url) => self.get(url).send().await?,
            None => {
                let url = self.api_url("/documents");
                self.get(&url)
                    .query(&[("type", DOCUMENT_TYPE)])
                    .query(&[("page_size", page_size)])
                    .send()
                    .await?
            }
        };

        let page: PageResponse = self.handle_response(response).await?;

        Ok(FeedPage {
            items: page.results.into_iter().map(PostSummary::from).collect(),
            next_cursor: page.next_page,
        })
    }

    async fn fetch_post(&self, id: &str) -> Result<Option<PostDetail>, ContentError> {
        let url = self.api_url(&format!("/documents/{}", encode(id)));
        let response = self.get(&url).send().await?;

        if response.status().as_u16() == 404 {
            return Ok(None);
        }

        let doc: DocumentResponse = self.handle_response(response).await?;
        Ok(Some(doc.into()))
    }

    async fn fetch_summary_after(&self, id: &str) -> Result<Option<PostLink>, ContentError> {
        let url = self.api_url("/documents");
        let response = self
            .get(&url)
            .query(&[("type", DOCUMENT_TYPE), ("after", id)])
            .query(&[("page_size", 1)])
            .send()
            .await?;

        let page: PageResponse = self.handle_response(response).await?;
        Ok(page.results.into_iter().next().map(PostLink::from))
    }
}
