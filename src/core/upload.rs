//! Checksummed upload pipeline.
//!
//! Each file is handled on its own: validate the name, read, base64-encode,
//! hash the *encoded* payload, then submit. The server verifies the
//! SHA-256 of the payload text it receives, so the order is fixed.

use std::future::Future;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use rand::Rng;
use sha2::{Digest, Sha256};

use crate::config::storage_name;
use crate::core::api::{GalleryApi, Transport};
use crate::core::error::{GalleryError, ValidationError};
use crate::models::wire::{UploadMetadata, UploadRequest};
use crate::models::{AccessTier, UploadJob, UploadOutcome};

/// A file selected for upload.
pub trait FileSource {
    /// Original file name as picked by the user.
    fn name(&self) -> String;
    /// Full file contents.
    fn read(&self) -> impl Future<Output = Result<Vec<u8>, GalleryError>>;
}

/// Encode raw bytes into the transport payload (standard base64).
pub fn encode_payload(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

/// Lowercase hex SHA-256 of the encoded payload text.
pub fn checksum(payload: &str) -> String {
    hex::encode(Sha256::digest(payload.as_bytes()))
}

/// Text after the last `.` of a file name, if non-empty.
pub fn file_extension(file_name: &str) -> Option<&str> {
    file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext)
        .filter(|ext| !ext.is_empty())
}

/// Random lowercase hex string of the given length.
pub fn random_hex(len: usize) -> String {
    let mut rng = rand::thread_rng();
    (0..len)
        .map(|_| {
            let idx = rng.gen_range(0..storage_name::ALPHABET.len());
            storage_name::ALPHABET[idx] as char
        })
        .collect()
}

/// Randomized storage name keeping the original extension.
pub fn derive_storage_name(original: &str) -> Result<String, ValidationError> {
    let ext = file_extension(original).ok_or_else(|| ValidationError::MissingExtension {
        file_name: original.to_string(),
    })?;
    Ok(format!("{}.{}", random_hex(storage_name::RANDOM_LEN), ext))
}

/// Build the job for one file's contents.
pub fn prepare_job(
    raw_bytes: Vec<u8>,
    target_access_tier: AccessTier,
    tags: Vec<String>,
    derived_file_name: String,
) -> UploadJob {
    let payload = encode_payload(&raw_bytes);
    let checksum = checksum(&payload);
    UploadJob {
        raw_bytes,
        payload,
        checksum,
        target_access_tier,
        tags,
        derived_file_name,
    }
}

impl UploadJob {
    /// Wire body for `PUT /upload`.
    pub fn to_request(&self, token: &str) -> UploadRequest {
        UploadRequest {
            token: token.to_string(),
            access_type: self.target_access_tier,
            payload: self.payload.clone(),
            checksum: self.checksum.clone(),
            metadata: UploadMetadata {
                file_name: self.derived_file_name.clone(),
                tags: self.tags.clone(),
            },
        }
    }
}

/// Runs the per-file upload steps against the API.
pub struct UploadPipeline<'a, T> {
    api: &'a GalleryApi<T>,
}

impl<'a, T: Transport> UploadPipeline<'a, T> {
    pub fn new(api: &'a GalleryApi<T>) -> Self {
        Self { api }
    }

    /// Upload one file of a batch of `total`; never affects other files.
    pub async fn run<F: FileSource>(
        &self,
        file: &F,
        token: &str,
        target: AccessTier,
        tags: &[String],
        sequence: usize,
        total: usize,
    ) -> UploadOutcome {
        let original_name = file.name();
        let result = self.submit(file, &original_name, token, target, tags).await;
        UploadOutcome {
            sequence,
            total,
            original_name,
            result,
        }
    }

    async fn submit<F: FileSource>(
        &self,
        file: &F,
        original_name: &str,
        token: &str,
        target: AccessTier,
        tags: &[String],
    ) -> Result<String, GalleryError> {
        // Rejected before reading; the file would never be submitted anyway.
        let derived_file_name = derive_storage_name(original_name)?;
        let raw_bytes = file.read().await?;
        let job = prepare_job(raw_bytes, target, tags.to_vec(), derived_file_name);
        self.api.upload(&job.to_request(token)).await?;
        Ok(job.derived_file_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::test_support::{MemoryFile, ScriptedTransport};

    #[test]
    fn test_checksum_known_vector() {
        // SHA-256("aGVsbG8=")
        let payload = encode_payload(b"hello");
        assert_eq!(payload, "aGVsbG8=");
        assert_eq!(
            checksum(&payload),
            hex::encode(Sha256::digest(b"aGVsbG8="))
        );
        assert_ne!(checksum(&payload), hex::encode(Sha256::digest(b"hello")));
        assert_eq!(checksum(&payload).len(), 64);
    }

    #[test]
    fn test_checksum_round_trip_large_payload() {
        let raw: Vec<u8> = (0..3 * 1024 * 1024 + 7).map(|i| (i * 31 % 251) as u8).collect();
        let job = prepare_job(raw.clone(), AccessTier::Public, vec![], "x.png".to_string());

        let decoded = STANDARD.decode(&job.payload).unwrap();
        assert_eq!(decoded, raw);
        assert_eq!(checksum(&encode_payload(&decoded)), job.checksum);
    }

    #[test]
    fn test_file_extension() {
        assert_eq!(file_extension("cat.png"), Some("png"));
        assert_eq!(file_extension("archive.tar.gz"), Some("gz"));
        assert_eq!(file_extension(".jpg"), Some("jpg"));
        assert_eq!(file_extension("README"), None);
        assert_eq!(file_extension("trailing."), None);
        assert_eq!(file_extension(""), None);
    }

    #[test]
    fn test_derive_storage_name() {
        let name = derive_storage_name("Holiday Photo.JPG").unwrap();
        let (random, ext) = name.split_once('.').unwrap();
        assert_eq!(ext, "JPG");
        assert_eq!(random.len(), storage_name::RANDOM_LEN);
        assert!(random.bytes().all(|c| storage_name::ALPHABET.contains(&c)));
    }

    #[test]
    fn test_derive_storage_name_unique() {
        let names: std::collections::HashSet<_> = (0..200)
            .map(|_| derive_storage_name("a.png").unwrap())
            .collect();
        assert_eq!(names.len(), 200);
        assert!(names.iter().all(|n| n.ends_with(".png")));
    }

    #[test]
    fn test_derive_storage_name_requires_extension() {
        assert_eq!(
            derive_storage_name("notes"),
            Err(ValidationError::MissingExtension {
                file_name: "notes".to_string()
            })
        );
    }

    #[tokio::test]
    async fn test_run_submits_checksummed_payload() {
        let transport = ScriptedTransport::new();
        transport.respond("/upload", Ok(String::new()));
        let api = GalleryApi::new(transport.clone(), "https://h");
        let file = MemoryFile::new("cat.png", b"meow".to_vec());
        let tags = vec!["cats".to_string()];

        let outcome = UploadPipeline::new(&api)
            .run(&file, "tok", AccessTier::Private, &tags, 1, 1)
            .await;
        let stored = outcome.result.unwrap();
        assert!(stored.ends_with(".png"));

        let body: serde_json::Value =
            serde_json::from_str(&transport.requests()[0].body).unwrap();
        assert_eq!(body["token"], "tok");
        assert_eq!(body["access_type"], "private");
        assert_eq!(body["payload"], "bWVvdw==");
        assert_eq!(body["checksum"], checksum("bWVvdw=="));
        assert_eq!(body["metadata"]["file_name"], stored.as_str());
        assert_eq!(body["metadata"]["tags"], serde_json::json!(["cats"]));
    }

    #[tokio::test]
    async fn test_run_without_extension_makes_no_request() {
        let transport = ScriptedTransport::new();
        let api = GalleryApi::new(transport.clone(), "https://h");
        let file = MemoryFile::new("README", b"text".to_vec());

        let outcome = UploadPipeline::new(&api)
            .run(&file, "tok", AccessTier::Public, &[], 2, 2)
            .await;
        assert!(matches!(
            outcome.result,
            Err(GalleryError::Validation(ValidationError::MissingExtension { .. }))
        ));
        assert_eq!(outcome.sequence, 2);
        assert!(transport.requests().is_empty());
        assert_eq!(file.reads(), 0);
    }
}
