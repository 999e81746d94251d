use actix_web::error::InternalError;
use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse};
use serde::Serialize;

/// Envelope of every JSON body the service returns.
#[derive(Debug, Serialize)]
pub struct JsonResponse<T> {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub list: Option<Vec<T>>,
}

pub struct JsonResponseBuilder<T> {
    message: String,
    id: Option<i32>,
    item: Option<T>,
    list: Option<Vec<T>>,
}

impl<T> Default for JsonResponseBuilder<T> {
    fn default() -> Self {
        Self {
            message: String::new(),
            id: None,
            item: None,
            list: None,
        }
    }
}

impl<T> JsonResponse<T> {
    pub fn build() -> JsonResponseBuilder<T> {
        JsonResponseBuilder::default()
    }
}

impl<T> JsonResponseBuilder<T>
where
    T: Serialize,
{
    pub fn set_msg(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn set_id(mut self, id: i32) -> Self {
        self.id = Some(id);
        self
    }

    pub fn set_item(mut self, item: T) -> Self {
        self.item = Some(item);
        self
    }

    pub fn set_list(mut self, list: Vec<T>) -> Self {
        self.list = Some(list);
        self
    }

    pub fn to_json_response(self) -> JsonResponse<T> {
        JsonResponse {
            message: self.message,
            id: self.id,
            item: self.item,
            list: self.list,
        }
    }

    pub fn ok(self, message: impl Into<String>) -> web::Json<JsonResponse<T>> {
        web::Json(self.set_msg(message).to_json_response())
    }

    pub fn created(self, message: impl Into<String>) -> HttpResponse {
        HttpResponse::Created().json(self.set_msg(message).to_json_response())
    }

    fn error(self, status: StatusCode, message: String) -> actix_web::Error {
        let response = HttpResponse::build(status).json(self.set_msg(message.clone()).to_json_response());
        InternalError::from_response(message, response).into()
    }

    pub fn bad_request(self, message: impl Into<String>) -> actix_web::Error {
        self.error(StatusCode::BAD_REQUEST, message.into())
    }

    pub fn unauthorized(self, message: impl Into<String>) -> actix_web::Error {
        self.error(StatusCode::UNAUTHORIZED, message.into())
    }
}
