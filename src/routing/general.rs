use {
    std::path::PathBuf,
    rocket::{options, http::Status}
};

// preflight requests only need the headers the CORS fairing adds
#[options("/<_path..>")]
pub fn preflight(_path: PathBuf) -> Status {
    Status::NoContent
}
