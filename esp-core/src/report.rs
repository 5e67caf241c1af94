//! HTTP-Report Format
//!
//! Baut den JSON-Body und den HTTP/1.1 POST Request für einen Report.

use core::fmt::Write;

use heapless::String;
use serde::Serialize;

use crate::traits::ReportError;

/// Maximale Größe des kompletten Requests (Header + Body)
pub const REQUEST_BUFFER_SIZE: usize = 512;

/// Maximale Größe des JSON-Bodys
pub const BODY_BUFFER_SIZE: usize = 128;

/// Fester Wert für das `time`-Feld
pub const REPORT_TIME: &str = "14,14,14";

/// Fester Wert für das `start`-Feld
pub const REPORT_START: u8 = 1;

/// Ziel des Reports (Host, Port, Pfad)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportTarget<'a> {
    pub host: &'a str,
    pub port: u16,
    pub path: &'a str,
}

/// JSON-Body: `{"time":"...","start":1,"duration":<count>}`
#[derive(Serialize)]
struct ReportBody<'a> {
    time: &'a str,
    start: u8,
    duration: i32,
}

/// Serialisiert den JSON-Body in `buf`, gibt die Länge zurück
pub fn format_body(duration: i32, buf: &mut [u8]) -> Result<usize, ReportError> {
    let body = ReportBody {
        time: REPORT_TIME,
        start: REPORT_START,
        duration,
    };
    serde_json_core::to_slice(&body, buf).map_err(|_| ReportError::RequestTooLarge)
}

/// Baut den kompletten POST Request mit `Content-Length` und `Connection: close`
///
/// # Beispiele
///
/// ```
/// # use drehgeber_core::{ReportTarget, build_request};
/// let target = ReportTarget { host: "10.0.0.2", port: 5000, path: "/post-data" };
/// let request = build_request(&target, 2).unwrap();
/// assert!(request.ends_with("{\"time\":\"14,14,14\",\"start\":1,\"duration\":2}"));
/// ```
pub fn build_request(
    target: &ReportTarget<'_>,
    duration: i32,
) -> Result<String<REQUEST_BUFFER_SIZE>, ReportError> {
    let mut body_buf = [0u8; BODY_BUFFER_SIZE];
    let len = format_body(duration, &mut body_buf)?;
    let body = core::str::from_utf8(&body_buf[..len]).map_err(|_| ReportError::RequestTooLarge)?;

    let mut request = String::new();
    write!(
        request,
        "POST {} HTTP/1.1\r\n\
         Host: {}:{}\r\n\
         Content-Type: application/json\r\n\
         Content-Length: {}\r\n\
         Connection: close\r\n\
         \r\n\
         {}",
        target.path,
        target.host,
        target.port,
        body.len(),
        body
    )
    .map_err(|_| ReportError::RequestTooLarge)?;

    Ok(request)
}
