use rocket::{
    catch,
    Request,
    http::Status,
    serde::json::Json
};
use crate::models::web::ErrorBody;

type Reply = (Status, Json<ErrorBody>);

fn reply(status: Status, message: &str) -> Reply {
    (status, Json(ErrorBody::new(status, message)))
}

#[catch(400)]
pub fn bad_request(_req: &Request<'_>) -> Reply {
    reply(Status::BadRequest, "bad request")
}

#[catch(404)]
pub fn not_found(_req: &Request<'_>) -> Reply {
    reply(Status::NotFound, "resource not found")
}

#[catch(422)]
pub fn unprocessable(_req: &Request<'_>) -> Reply {
    reply(Status::UnprocessableEntity, "unprocessable")
}

#[catch(default)]
pub fn fallback(status: Status, _req: &Request<'_>) -> Reply {
    reply(status, status.reason_lossy())
}
