use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("Could not reach the server: {0}")]
    Network(String),
    #[error("The server answered with {status}: {message}")]
    Status { status: u16, message: String },
    #[error("Error from serde decode: {0}")]
    Decode(String),
    #[error("The browser refused the operation: {0}")]
    Browser(String),
    #[error("Your request is incorrect: {0}")]
    InvalidRequest(String),
    #[error("There is something missing or something that is not allowed with the file system: {0}")]
    FileSystem(String),
    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl Error {
    /// The http status this error is reported with.
    pub fn to_code(&self) -> u16 {
        match *self {
            Error::Network(_) => 500,
            Error::Status { status, .. } => status,
            Error::Decode(_) => 500,
            Error::Browser(_) => 500,
            Error::InvalidRequest(_) => 400,
            Error::FileSystem(_) => 500,
            Error::Config(_) => 500,
        }
    }
}

impl From<Error> for String {
    fn from(val: Error) -> Self {
        match val {
            Error::Network(s) => s,
            Error::Status { status, message } => format!("{} {}", status, message),
            Error::Decode(s) => s,
            Error::Browser(s) => s,
            Error::InvalidRequest(s) => s,
            Error::FileSystem(s) => s,
            Error::Config(s) => s,
        }
    }
}

impl From<gloo::net::Error> for Error {
    fn from(e: gloo::net::Error) -> Self {
        match e {
            gloo::net::Error::SerdeError(e) => Error::Decode(e.to_string()),
            e => Error::Network(e.to_string()),
        }
    }
}

impl From<wasm_bindgen::JsValue> for Error {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        Error::Browser(format!("{:?}", value))
    }
}

#[cfg(feature = "ssr")]
impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::FileSystem(e.to_string())
    }
}

#[cfg(feature = "ssr")]
impl From<axum::extract::multipart::MultipartError> for Error {
    fn from(e: axum::extract::multipart::MultipartError) -> Self {
        Error::InvalidRequest(format!("malformed multipart body: {}", e.body_text()))
    }
}

#[cfg(feature = "ssr")]
impl axum::response::IntoResponse for Error {
    fn into_response(self) -> axum::response::Response {
        use axum::{http::StatusCode, Json};

        let status =
            StatusCode::from_u16(self.to_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let message: String = self.into();
        (status, Json(serde_json::json!({ "error": message }))).into_response()
    }
}
