//! Image listing: request, normalization and link construction.

use crate::core::api::{GalleryApi, Transport};
use crate::core::error::GalleryError;
use crate::models::wire::{ListRequest, ListResponse};
use crate::models::{AccessTier, ImageLinks, ImageRecord, ListResult};
use crate::utils::{encode_component, insert_param};

/// Issues list requests and normalizes their responses.
pub struct ListClient<'a, T> {
    api: &'a GalleryApi<T>,
}

impl<'a, T: Transport> ListClient<'a, T> {
    pub fn new(api: &'a GalleryApi<T>) -> Self {
        Self { api }
    }

    /// Fetch one page of images. Failures are returned as-is, never retried.
    pub async fn fetch_page(
        &self,
        access_tier: AccessTier,
        page: u32,
        tags: &[String],
        token: &str,
    ) -> Result<ListResult, GalleryError> {
        let request = ListRequest {
            access_type: access_tier,
            page,
            token: token.to_string(),
            tags: tags.to_vec(),
        };
        let response = self.api.list(&request).await?;
        Ok(normalize(response))
    }
}

/// Drop records missing a file name or access path; keep server order.
///
/// No deduplication and no sorting.
pub fn normalize(response: ListResponse) -> ListResult {
    let images = response
        .images
        .unwrap_or_default()
        .into_iter()
        .filter_map(|image| {
            let file_name = image.file_name.filter(|s| !s.is_empty())?;
            let access_path = image.access_path.filter(|s| !s.is_empty())?;
            Some(ImageRecord {
                file_name,
                access_path,
                image_token: image.image_token.filter(|s| !s.is_empty()),
            })
        })
        .collect();

    ListResult {
        images,
        has_next_page: response.next_page,
    }
}

/// Full-size and thumbnail URLs for an image.
///
/// `<base>/uploads/<access_path>/<file_name>`, plus `token=` when the server
/// issued a per-image token; the thumbnail adds `thumbnail=yes`.
pub fn image_links(base: &str, record: &ImageRecord) -> ImageLinks {
    let mut full = format!(
        "{}/uploads/{}/{}",
        base,
        encode_component(&record.access_path),
        encode_component(&record.file_name)
    );
    if let Some(token) = &record.image_token {
        full = insert_param(&full, "token", token);
    }
    let thumbnail = insert_param(&full, "thumbnail", "yes");
    ImageLinks { full, thumbnail }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::test_support::ScriptedTransport;
    use crate::models::wire::ListedImage;

    fn listed(file_name: Option<&str>, access_path: Option<&str>, token: Option<&str>) -> ListedImage {
        ListedImage {
            file_name: file_name.map(String::from),
            access_path: access_path.map(String::from),
            image_token: token.map(String::from),
        }
    }

    #[test]
    fn test_normalize_drops_incomplete_records() {
        let response = ListResponse {
            images: Some(vec![
                listed(Some("a.png"), Some("pub"), None),
                listed(Some(""), Some("pub"), None),
                listed(None, Some("pub"), None),
                listed(Some("b.png"), Some(""), None),
                listed(Some("c.png"), None, None),
                listed(Some("d.png"), Some("private"), Some("tok")),
            ]),
            next_page: true,
        };
        let result = normalize(response);
        let names: Vec<_> = result.images.iter().map(|i| i.file_name.as_str()).collect();
        assert_eq!(names, ["a.png", "d.png"]);
        assert!(result.has_next_page);
        assert!(
            result
                .images
                .iter()
                .all(|i| !i.file_name.is_empty() && !i.access_path.is_empty())
        );
    }

    #[test]
    fn test_normalize_keeps_order_and_duplicates() {
        let response = ListResponse {
            images: Some(vec![
                listed(Some("z.png"), Some("pub"), None),
                listed(Some("a.png"), Some("pub"), None),
                listed(Some("z.png"), Some("pub"), None),
            ]),
            next_page: false,
        };
        let names: Vec<_> = normalize(response)
            .images
            .into_iter()
            .map(|i| i.file_name)
            .collect();
        assert_eq!(names, ["z.png", "a.png", "z.png"]);
    }

    #[test]
    fn test_normalize_null_images() {
        let result = normalize(ListResponse {
            images: None,
            next_page: false,
        });
        assert!(result.images.is_empty());
        assert!(!result.has_next_page);
    }

    #[test]
    fn test_empty_image_token_is_absent() {
        let result = normalize(ListResponse {
            images: Some(vec![listed(Some("a.png"), Some("pub"), Some(""))]),
            next_page: false,
        });
        assert_eq!(result.images[0].image_token, None);
    }

    #[test]
    fn test_image_links_public() {
        let record = ImageRecord {
            file_name: "a.png".to_string(),
            access_path: "pub".to_string(),
            image_token: None,
        };
        let links = image_links("https://h", &record);
        assert_eq!(links.full, "https://h/uploads/pub/a.png");
        assert_eq!(links.thumbnail, "https://h/uploads/pub/a.png?thumbnail=yes");
    }

    #[test]
    fn test_image_links_with_token_and_escaping() {
        let record = ImageRecord {
            file_name: "my pic.png".to_string(),
            access_path: "private".to_string(),
            image_token: Some("t/k=".to_string()),
        };
        let links = image_links("https://h", &record);
        assert_eq!(links.full, "https://h/uploads/private/my%20pic.png?token=t%2Fk%3D");
        assert_eq!(
            links.thumbnail,
            "https://h/uploads/private/my%20pic.png?token=t%2Fk%3D&thumbnail=yes"
        );
    }

    #[tokio::test]
    async fn test_fetch_page_scenario() {
        let transport = ScriptedTransport::new();
        transport.respond(
            "/list",
            Ok(r#"{"images":[{"file_name":"a.png","access_path":"pub"}],"next_page":true}"#.to_string()),
        );
        let api = GalleryApi::new(transport.clone(), "https://h");

        let result = ListClient::new(&api)
            .fetch_page(AccessTier::Public, 1, &[], "")
            .await
            .unwrap();
        assert_eq!(result.images.len(), 1);
        assert!(result.has_next_page);

        let body: serde_json::Value = serde_json::from_str(&transport.requests()[0].body).unwrap();
        assert_eq!(
            body,
            serde_json::json!({"access_type": "public", "page": 1, "token": "", "tags": []})
        );
    }

    #[tokio::test]
    async fn test_fetch_page_forwards_failure() {
        let transport = ScriptedTransport::new();
        let failure = GalleryError::Api {
            status: 403,
            status_text: "Forbidden".to_string(),
            body: r#"{"code":"forbidden","message":"Authentication failure"}"#.to_string(),
        };
        transport.respond("/list", Err(failure.clone()));
        let api = GalleryApi::new(transport.clone(), "https://h");

        let err = ListClient::new(&api)
            .fetch_page(AccessTier::Private, 1, &[], "bad")
            .await
            .unwrap_err();
        assert_eq!(err, failure);
        assert_eq!(transport.requests().len(), 1);
    }
}
