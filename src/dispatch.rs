//! Action dispatch: combine an operation's accumulator with its parameter
//! region, call the endpoint, and route the reply to a toast, a listing
//! refresh, or a gallery.

use burrow_core::{endpoints, media_kind, split_file_list, FilesReply, Operation, StatusReply};
use leptos::prelude::{GetUntracked, Set, Update};
use leptos::task::spawn_local;

use crate::api;
use crate::forms;
use crate::net;
use crate::state::{AppState, Gallery, GalleryItem};

fn gallery_from(title: &str, joined: &str) -> Gallery {
    let items = split_file_list(joined)
        .into_iter()
        .map(|path| {
            let kind = media_kind(&path);
            GalleryItem { path, kind }
        })
        .collect();
    Gallery {
        title: title.to_string(),
        items,
    }
}

/// Re-fetch the directory listing, replacing the sidebar's lists wholesale.
pub fn refresh_listing(state: AppState) {
    state.listing_loading.set(true);
    spawn_local(async move {
        match api::get_local_dir().await {
            Ok(reply) if reply.ok => state.listing.set(Some(reply.listing)),
            Ok(reply) => {
                let text = reply
                    .message
                    .unwrap_or_else(|| "directory listing failed".to_string());
                state.show_error_toast(text);
            }
            Err(e) => {
                log::error!("{} failed: {e}", endpoints::GET_LOCAL_DIR);
                state.show_error_toast(format!("Directory listing failed: {e}"));
            }
        }
        state.listing_loading.set(false);
    });
}

/// Startup probe of the configured data directory.
pub fn check_local_dir(state: AppState) {
    spawn_local(async move {
        match api::check_local_dir().await {
            Ok(reply) if reply.is_err() => {
                state.show_error_toast(reply.message_or("data directory unavailable"));
            }
            Ok(_) => {}
            Err(e) => {
                log::error!("{} failed: {e}", endpoints::CHECK_LOCAL_DIR);
                state.show_error_toast(format!("Server unreachable: {e}"));
            }
        }
    });
}

/// Run one accumulator-backed operation. Selected files and the parameter
/// region POST as multipart; a bare GET goes out when there is nothing to
/// send. No in-flight guard: a second click races the first and the last
/// reply wins.
pub fn run_operation(state: AppState, op: Operation) {
    let batch = match op {
        Operation::Extract => state.batch_extract.get_untracked(),
        Operation::LearnModel => state.model_scan.get_untracked(),
        _ => false,
    };
    let endpoint = op.endpoint_for(batch);
    let selection = state.selection(op).get_untracked();
    let params = forms::collect_form_region(op.params_region());

    spawn_local(async move {
        let result = if selection.is_empty() && params.is_empty() {
            net::get_text(endpoint).await
        } else {
            match forms::form_data_from(&params, &op.file_pairs(&selection)) {
                Ok(form) => net::post_form(endpoint, &form).await,
                Err(e) => Err(e),
            }
        };
        match result {
            Ok(text) => handle_operation_reply(state, op, &text),
            Err(e) => {
                log::error!("{endpoint} failed: {e}");
                state.show_error_toast(format!("{} failed: {e}", op.label()));
            }
        }
    });
}

fn handle_operation_reply(state: AppState, op: Operation, text: &str) {
    if op.yields_gallery() {
        if let Ok(reply) = serde_json::from_str::<FilesReply>(text) {
            if !reply.files.is_empty() {
                state
                    .gallery
                    .set(Some(gallery_from(op.label(), &reply.files)));
                return;
            }
        }
    }
    match serde_json::from_str::<StatusReply>(text) {
        Ok(reply) if reply.is_err() => state.show_error_toast(reply.message_or("request failed")),
        Ok(reply) => {
            state.show_info_toast(reply.message_or("done"));
            refresh_listing(state);
        }
        Err(e) => {
            log::error!("{} reply parse failed: {e}", op.endpoint());
            state.show_error_toast(format!("{}: unexpected reply", op.label()));
        }
    }
}

/// GET-only actions: plots, score clipping, changepoints, aggregation,
/// crowd movies.
pub fn run_simple(state: AppState, endpoint: &'static str, label: &'static str, refresh: bool) {
    spawn_local(async move {
        match api::get_status(endpoint).await {
            Ok(reply) if reply.is_err() => {
                state.show_error_toast(reply.message_or("request failed"));
            }
            Ok(reply) => {
                state.show_info_toast(reply.message_or(label));
                if refresh {
                    refresh_listing(state);
                }
            }
            Err(e) => {
                log::error!("{endpoint} failed: {e}");
                state.show_error_toast(format!("{label} failed: {e}"));
            }
        }
    });
}

/// POST a parameter region as multipart form data.
pub fn post_form_region(
    state: AppState,
    endpoint: &'static str,
    region_id: &'static str,
    label: &'static str,
) {
    let params = forms::collect_form_region(region_id);
    spawn_local(async move {
        let result = match forms::form_data_from(&params, &[]) {
            Ok(form) => api::post_status(endpoint, &form).await,
            Err(e) => Err(e),
        };
        match result {
            Ok(reply) if reply.is_err() => {
                state.show_error_toast(reply.message_or("request failed"));
            }
            Ok(reply) => state.show_info_toast(reply.message_or(label)),
            Err(e) => {
                log::error!("{endpoint} failed: {e}");
                state.show_error_toast(format!("{label} failed: {e}"));
            }
        }
    });
}

/// Upload the extraction parameter region; batch mode posts the gridsearch
/// variant instead.
pub fn generate_config(state: AppState) {
    let endpoint = if state.batch_extract.get_untracked() {
        endpoints::GEN_GRIDSEARCH_CONFIG
    } else {
        endpoints::GENERATE_CONFIG
    };
    post_form_region(
        state,
        endpoint,
        Operation::Extract.params_region(),
        "Configuration generated",
    );
}

pub fn generate_viz_index(state: AppState) {
    post_form_region(
        state,
        endpoints::GENERATE_VIZ_INDEX,
        "index-params",
        "Index generated",
    );
}

/// Apply an index-group label from the `group-params` region.
pub fn add_group(state: AppState) {
    let params = forms::collect_form_region("group-params");
    let group = params.first("group").unwrap_or_default().to_string();
    let key = params.first("key").unwrap_or_default().to_string();
    let value = params.first("value").unwrap_or_default().to_string();
    if group.is_empty() {
        state.show_error_toast("Group name is required");
        return;
    }
    spawn_local(async move {
        match api::viz_add_group(&group, &key, &value).await {
            Ok(reply) if reply.is_err() => {
                state.show_error_toast(reply.message_or("request failed"));
            }
            Ok(reply) => state.show_info_toast(reply.message_or("Group applied")),
            Err(e) => {
                log::error!("{} failed: {e}", endpoints::VIZ_ADD_GROUP);
                state.show_error_toast(format!("Add group failed: {e}"));
            }
        }
    });
}

pub fn download_flip(state: AppState, flip_id: &'static str) {
    spawn_local(async move {
        match api::download_flip_file(flip_id).await {
            Ok(reply) if reply.is_err() => {
                state.show_error_toast(reply.message_or("download failed"));
            }
            Ok(reply) => state.show_info_toast(reply.message_or("Flip file downloaded")),
            Err(e) => {
                log::error!("{} failed: {e}", endpoints::DOWNLOAD_FLIP_FILE);
                state.show_error_toast(format!("Flip download failed: {e}"));
            }
        }
    });
}

/// Upload chosen files, one request per file (the server accepts a single
/// part per call).
pub fn upload_files(state: AppState, files: web_sys::FileList) {
    for i in 0..files.length() {
        let Some(file) = files.get(i) else { continue };
        state.upload_count.update(|c| *c += 1);
        spawn_local(async move {
            match api::upload_file(&file).await {
                Ok(reply) if reply.is_err() => {
                    state.show_error_toast(reply.message_or("upload failed"));
                }
                Ok(reply) => {
                    state.show_info_toast(
                        reply.message_or(&format!("{} uploaded", file.name())),
                    );
                    refresh_listing(state);
                }
                Err(e) => {
                    log::error!("upload of {} failed: {e}", file.name());
                    state.show_error_toast(format!("Upload failed: {e}"));
                }
            }
            state.upload_count.update(|c| *c = c.saturating_sub(1));
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use burrow_core::MediaKind;

    #[test]
    fn test_gallery_from_classifies_tiles() {
        let gallery = gallery_from("Find ROI", "a/roi.png||a/first_frame.mp4||");
        assert_eq!(gallery.title, "Find ROI");
        assert_eq!(gallery.items.len(), 2);
        assert_eq!(gallery.items[0].kind, MediaKind::Image);
        assert_eq!(gallery.items[0].path, "a/roi.png");
        assert_eq!(gallery.items[1].kind, MediaKind::Video);
    }

    #[test]
    fn test_gallery_from_empty_reply() {
        let gallery = gallery_from("Extract Raw Data", "");
        assert!(gallery.items.is_empty());
    }
}
