//! One thin typed wrapper per server endpoint. Transport lives in
//! [`crate::net`]; reply shapes live in `burrow_core::response`.

use burrow_core::{endpoints, ListingReply, StatusReply};
use serde::de::DeserializeOwned;
use web_sys::{File, FormData};

use crate::net;

fn parse<T: DeserializeOwned>(text: &str) -> Result<T, String> {
    serde_json::from_str(text).map_err(|e| format!("response parse: {e}"))
}

pub async fn get_local_dir() -> Result<ListingReply, String> {
    parse(&net::get_text(endpoints::GET_LOCAL_DIR).await?)
}

pub async fn check_local_dir() -> Result<StatusReply, String> {
    parse(&net::get_text(endpoints::CHECK_LOCAL_DIR).await?)
}

/// GET an endpoint that replies with the `{ok, message}` envelope.
pub async fn get_status(endpoint: &str) -> Result<StatusReply, String> {
    parse(&net::get_text(endpoint).await?)
}

/// POST multipart form data to an endpoint replying with `{ok, message}`.
pub async fn post_status(endpoint: &str, form: &FormData) -> Result<StatusReply, String> {
    parse(&net::post_form(endpoint, form).await?)
}

pub async fn viz_add_group(group: &str, key: &str, value: &str) -> Result<StatusReply, String> {
    let url = net::query_url(
        endpoints::VIZ_ADD_GROUP,
        &[("group", group), ("key", key), ("value", value)],
    );
    parse(&net::get_text(&url).await?)
}

pub async fn download_flip_file(flip_id: &str) -> Result<StatusReply, String> {
    let url = net::query_url(endpoints::DOWNLOAD_FLIP_FILE, &[("flip-id", flip_id)]);
    parse(&net::get_text(&url).await?)
}

/// Upload one file; the server expects a single `file` part per request.
pub async fn upload_file(file: &File) -> Result<StatusReply, String> {
    let form = FormData::new().map_err(|e| format!("FormData: {e:?}"))?;
    form.append_with_blob_and_filename("file", file, &file.name())
        .map_err(|e| format!("append file: {e:?}"))?;
    parse(&net::post_form(endpoints::UPLOAD_FILE, &form).await?)
}
