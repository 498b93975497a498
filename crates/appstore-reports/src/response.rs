//! Response decoding strategies selected by `Content-Type`.
//!
//! | Content type | Handler | Body |
//! |--------------|---------|------|
//! | `application/json` | [`JsonResponseHandler`] | JSON document |
//! | `application/a-gzip`, `application/octet-stream` | [`GzipResponseHandler`] | gzip-compressed TSV |
//! | anything else | [`JsonResponseHandler`] | JSON document |
//!
//! Bodies are single-read. A caller that needs to inspect a body and still pass
//! the response on reads it with [`ResponseHandler::read_body`] and installs the
//! result of [`ResponseHandler::restore_body`] as the new body.

use std::io::{Read, Write};

use flate2::read::MultiGzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{ClientError, DecodeError};
use crate::http_client::{HttpResponse, ResponseBody};
use crate::tsv::TsvDialect;

pub const CONTENT_TYPE_JSON: &str = "application/json";
pub const CONTENT_TYPE_GZIP: &str = "application/a-gzip";
pub const CONTENT_TYPE_OCTET_STREAM: &str = "application/octet-stream";

/// Read/restore contract shared by every decoding strategy.
pub trait ResponseHandler: Send + Sync {
    /// Consumes the response body and returns its logical bytes.
    fn read_body(&self, response: &mut HttpResponse) -> Result<Vec<u8>, DecodeError>;

    /// Produces a fresh body carrying the same logical bytes.
    fn restore_body(&self, data: &[u8]) -> Result<ResponseBody, DecodeError>;
}

/// Decodes previously read bytes into `T`.
pub trait UnmarshalBody<T>: ResponseHandler {
    fn unmarshal_body(&self, data: &[u8]) -> Result<T, DecodeError>;
}

fn take_stream(response: &mut HttpResponse) -> Result<Box<dyn Read + Send>, DecodeError> {
    response.body.take().ok_or(DecodeError::BodyConsumed)
}

#[derive(Debug, Clone, Copy, Default)]
pub struct JsonResponseHandler;

impl ResponseHandler for JsonResponseHandler {
    fn read_body(&self, response: &mut HttpResponse) -> Result<Vec<u8>, DecodeError> {
        let mut stream = take_stream(response)?;
        let mut data = Vec::new();
        stream
            .read_to_end(&mut data)
            .map_err(|err| DecodeError::Io(err.to_string()))?;
        Ok(data)
    }

    fn restore_body(&self, data: &[u8]) -> Result<ResponseBody, DecodeError> {
        Ok(ResponseBody::from_bytes(data.to_vec()))
    }
}

impl<T: DeserializeOwned> UnmarshalBody<T> for JsonResponseHandler {
    fn unmarshal_body(&self, data: &[u8]) -> Result<T, DecodeError> {
        serde_json::from_slice(data).map_err(|err| DecodeError::Json(err.to_string()))
    }
}

/// Gzip-compressed TSV report bodies.
#[derive(Debug, Clone, Copy, Default)]
pub struct GzipResponseHandler {
    dialect: TsvDialect,
}

impl GzipResponseHandler {
    pub const fn new(dialect: TsvDialect) -> Self {
        Self { dialect }
    }

    pub const fn dialect(&self) -> TsvDialect {
        self.dialect
    }
}

impl ResponseHandler for GzipResponseHandler {
    fn read_body(&self, response: &mut HttpResponse) -> Result<Vec<u8>, DecodeError> {
        let stream = take_stream(response)?;
        // Reports may arrive as several concatenated gzip members.
        let mut decoder = MultiGzDecoder::new(stream);
        let mut data = Vec::new();
        decoder
            .read_to_end(&mut data)
            .map_err(|err| DecodeError::Gzip(err.to_string()))?;
        Ok(data)
    }

    fn restore_body(&self, data: &[u8]) -> Result<ResponseBody, DecodeError> {
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder
            .write_all(data)
            .map_err(|err| DecodeError::Gzip(err.to_string()))?;
        let compressed = encoder
            .finish()
            .map_err(|err| DecodeError::Gzip(err.to_string()))?;
        Ok(ResponseBody::from_bytes(compressed))
    }
}

impl<R: DeserializeOwned> UnmarshalBody<Vec<R>> for GzipResponseHandler {
    fn unmarshal_body(&self, data: &[u8]) -> Result<Vec<R>, DecodeError> {
        self.dialect.decode(data)
    }
}

/// Strategy chosen from a response's content type.
#[derive(Debug, Clone, Copy)]
pub enum ContentHandler {
    Json(JsonResponseHandler),
    Gzip(GzipResponseHandler),
}

impl ContentHandler {
    pub fn for_content_type(content_type: &str) -> Self {
        Self::for_content_type_with(content_type, TsvDialect::default())
    }

    pub fn for_content_type_with(content_type: &str, dialect: TsvDialect) -> Self {
        let media_type = content_type
            .split(';')
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();
        match media_type.as_str() {
            CONTENT_TYPE_GZIP | CONTENT_TYPE_OCTET_STREAM => {
                Self::Gzip(GzipResponseHandler::new(dialect))
            }
            _ => Self::Json(JsonResponseHandler),
        }
    }

    pub fn for_response(response: &HttpResponse) -> Self {
        Self::for_content_type(response.content_type().unwrap_or_default())
    }

    fn as_handler(&self) -> &dyn ResponseHandler {
        match self {
            Self::Json(handler) => handler,
            Self::Gzip(handler) => handler,
        }
    }
}

impl ResponseHandler for ContentHandler {
    fn read_body(&self, response: &mut HttpResponse) -> Result<Vec<u8>, DecodeError> {
        self.as_handler().read_body(response)
    }

    fn restore_body(&self, data: &[u8]) -> Result<ResponseBody, DecodeError> {
        self.as_handler().restore_body(data)
    }
}

impl<R: DeserializeOwned> UnmarshalBody<Vec<R>> for ContentHandler {
    fn unmarshal_body(&self, data: &[u8]) -> Result<Vec<R>, DecodeError> {
        match self {
            Self::Json(handler) => UnmarshalBody::<Vec<R>>::unmarshal_body(handler, data),
            Self::Gzip(handler) => UnmarshalBody::<Vec<R>>::unmarshal_body(handler, data),
        }
    }
}

impl UnmarshalBody<ErrorResult> for ContentHandler {
    /// Error documents are JSON whichever transfer encoding carried them.
    fn unmarshal_body(&self, data: &[u8]) -> Result<ErrorResult, DecodeError> {
        UnmarshalBody::<ErrorResult>::unmarshal_body(&JsonResponseHandler, data)
    }
}

/// Reads a body for inspection and puts an equivalent one back.
pub fn read_and_restore(response: &mut HttpResponse) -> Result<Vec<u8>, DecodeError> {
    let handler = ContentHandler::for_response(response);
    let data = handler.read_body(response)?;
    response.body = handler.restore_body(&data)?;
    Ok(data)
}

/// Error document returned with non-2xx responses.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ErrorResult {
    #[serde(default)]
    pub errors: Vec<ApiErrorEntry>,
}

impl ErrorResult {
    pub fn first(&self) -> Option<&ApiErrorEntry> {
        self.errors.first()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiErrorEntry {
    pub id: String,
    pub status: String,
    pub code: String,
    pub title: String,
    pub detail: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<ApiErrorSource>,
}

/// Query parameter or JSON pointer that produced an error.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiErrorSource {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub parameter: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub pointer: String,
}

/// Decoded report rows plus the response they came from.
///
/// The response body has been restored and can be read again.
#[derive(Debug)]
pub struct ReportResponse<T> {
    pub status: u16,
    pub data: Vec<T>,
    pub errors: Vec<ApiErrorEntry>,
    pub response: HttpResponse,
}

impl<T> ReportResponse<T> {
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }

    /// Detail of the first API error, or an empty string.
    pub fn get_error(&self) -> &str {
        self.errors
            .first()
            .map(|error| error.detail.as_str())
            .unwrap_or_default()
    }

    pub fn into_data(self) -> Result<Vec<T>, ClientError> {
        if self.is_success() {
            Ok(self.data)
        } else {
            Err(ClientError::Api {
                status: self.status,
                detail: self.get_error().to_owned(),
            })
        }
    }
}

/// Decodes a report response into typed rows or the API error list.
pub fn decode_report_response<R: DeserializeOwned>(
    operation: &'static str,
    mut response: HttpResponse,
) -> Result<ReportResponse<R>, ClientError> {
    let handler = ContentHandler::for_response(&response);
    let data = handler
        .read_body(&mut response)
        .map_err(|source| ClientError::decode(operation, source))?;
    response.body = handler
        .restore_body(&data)
        .map_err(|source| ClientError::decode(operation, source))?;

    let status = response.status;
    if response.is_success() {
        let rows = UnmarshalBody::<Vec<R>>::unmarshal_body(&handler, &data)
            .map_err(|source| ClientError::decode(operation, source))?;
        debug!(operation, rows = rows.len(), "report decoded");
        return Ok(ReportResponse {
            status,
            data: rows,
            errors: Vec::new(),
            response,
        });
    }

    let envelope = UnmarshalBody::<ErrorResult>::unmarshal_body(&handler, &data)
        .map_err(|source| ClientError::decode(operation, source))?;
    warn!(
        operation,
        status,
        detail = envelope.first().map(|error| error.detail.as_str()).unwrap_or_default(),
        "report request rejected by API"
    );
    Ok(ReportResponse {
        status,
        data: Vec::new(),
        errors: envelope.errors,
        response,
    })
}

#[cfg(test)]
mod tests {
    use flate2::read::GzDecoder;

    use super::*;

    fn gzip(data: &[u8]) -> Vec<u8> {
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(data).expect("in-memory write");
        encoder.finish().expect("in-memory finish")
    }

    fn gunzip(data: &[u8]) -> Vec<u8> {
        let mut out = Vec::new();
        GzDecoder::new(data)
            .read_to_end(&mut out)
            .expect("valid gzip");
        out
    }

    fn read_all(body: &mut ResponseBody) -> Vec<u8> {
        let mut out = Vec::new();
        body.take()
            .expect("restored body must be readable")
            .read_to_end(&mut out)
            .expect("in-memory read");
        out
    }

    const ERROR_JSON: &str = r#"{"errors":[{"id":"1","status":"400","code":"PARAMETER_ERROR.INVALID","title":"bad","detail":"The version parameter you have specified is invalid.","source":{"parameter":"filter[version]"}}]}"#;

    #[test]
    fn selects_handler_by_content_type() {
        assert!(matches!(ContentHandler::for_content_type("application/a-gzip"), ContentHandler::Gzip(_)));
        assert!(matches!(
            ContentHandler::for_content_type("application/octet-stream"),
            ContentHandler::Gzip(_)
        ));
        assert!(matches!(
            ContentHandler::for_content_type("application/json; charset=utf-8"),
            ContentHandler::Json(_)
        ));
        assert!(matches!(ContentHandler::for_content_type("text/html"), ContentHandler::Json(_)));
        assert!(matches!(ContentHandler::for_content_type(""), ContentHandler::Json(_)));
    }

    #[test]
    fn gzip_read_then_restore_preserves_content() {
        let original = b"Title\tQuantity\nfoo\t1\n".to_vec();
        let mut response = HttpResponse::new(200)
            .with_header("Content-Type", CONTENT_TYPE_GZIP)
            .with_body(gzip(&original));

        let handler = ContentHandler::for_response(&response);
        let data = handler.read_body(&mut response).expect("gzip body");
        assert_eq!(data, original);
        assert!(response.body.is_consumed());

        response.body = handler.restore_body(&data).expect("re-gzip");
        assert_eq!(gunzip(&read_all(&mut response.body)), original);
    }

    #[test]
    fn gzip_reads_every_concatenated_member() {
        let mut body = gzip(b"Title\tQuantity\nfoo\t1\n");
        body.extend(gzip(b"bar\t2\n"));
        let mut response = HttpResponse::new(200)
            .with_header("Content-Type", CONTENT_TYPE_GZIP)
            .with_body(body);

        let handler = GzipResponseHandler::default();
        let data = handler.read_body(&mut response).expect("multi-member gzip");
        assert_eq!(data, b"Title\tQuantity\nfoo\t1\nbar\t2\n");

        #[derive(Deserialize)]
        struct Row {
            #[serde(rename = "Title")]
            title: String,
        }
        let rows: Vec<Row> = handler.unmarshal_body(&data).expect("both rows");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].title, "bar");
    }

    #[test]
    fn json_read_then_restore_preserves_bytes() {
        let mut response = HttpResponse::new(400)
            .with_header("Content-Type", "application/json")
            .with_body(ERROR_JSON);
        let data = read_and_restore(&mut response).expect("json body");
        assert_eq!(data, ERROR_JSON.as_bytes());
        assert_eq!(read_all(&mut response.body), ERROR_JSON.as_bytes());
    }

    #[test]
    fn reading_a_consumed_body_fails() {
        let mut response = HttpResponse::new(200).with_body("{}");
        JsonResponseHandler.read_body(&mut response).expect("first read");
        let err = JsonResponseHandler
            .read_body(&mut response)
            .expect_err("second read must fail");
        assert_eq!(err, DecodeError::BodyConsumed);
    }

    #[test]
    fn malformed_gzip_is_a_decode_error() {
        let mut response = HttpResponse::new(200)
            .with_header("Content-Type", CONTENT_TYPE_GZIP)
            .with_body(b"not gzip at all".to_vec());
        let err = GzipResponseHandler::default()
            .read_body(&mut response)
            .expect_err("invalid gzip");
        assert!(matches!(err, DecodeError::Gzip(_)));
    }

    #[test]
    fn error_envelope_surfaces_first_detail() {
        let response = HttpResponse::new(400)
            .with_header("Content-Type", "application/json")
            .with_body(ERROR_JSON);
        let result = decode_report_response::<serde_json::Value>("test.decode", response)
            .expect("error envelope decodes");

        assert!(!result.is_success());
        assert_eq!(result.get_error(), "The version parameter you have specified is invalid.");
        assert_eq!(result.errors.len(), 1);
        assert_eq!(
            result.errors[0].source.as_ref().map(|source| source.parameter.as_str()),
            Some("filter[version]")
        );
        assert!(result.data.is_empty());

        let err = result.into_data().expect_err("failure surfaces detail");
        assert_eq!(err.to_string(), "The version parameter you have specified is invalid.");
    }

    #[test]
    fn malformed_error_json_is_wrapped_with_operation() {
        let response = HttpResponse::new(500)
            .with_header("Content-Type", "application/json")
            .with_body("<html>");
        let err = decode_report_response::<serde_json::Value>("test.decode", response)
            .expect_err("html is not an error document");
        assert!(err.to_string().starts_with("test.decode decode error: malformed json payload"));
    }
}
