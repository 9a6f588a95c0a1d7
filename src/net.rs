use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{FormData, RequestInit, Response};

async fn response_for(url: &str, init: Option<&RequestInit>) -> Result<Response, String> {
    let window = web_sys::window().ok_or("No window")?;
    let promise = match init {
        Some(init) => window.fetch_with_str_and_init(url, init),
        None => window.fetch_with_str(url),
    };
    let resp_value = JsFuture::from(promise)
        .await
        .map_err(|e| format!("fetch error: {e:?}"))?;
    let resp: Response = resp_value
        .dyn_into()
        .map_err(|_| "Response cast failed".to_string())?;
    if !resp.ok() {
        return Err(format!("HTTP {}", resp.status()));
    }
    Ok(resp)
}

async fn body_text(resp: Response) -> Result<String, String> {
    let text = JsFuture::from(resp.text().map_err(|e| format!("{e:?}"))?)
        .await
        .map_err(|e| format!("text: {e:?}"))?;
    text.as_string().ok_or_else(|| "Not a string".to_string())
}

pub async fn get_text(url: &str) -> Result<String, String> {
    body_text(response_for(url, None).await?).await
}

pub async fn post_form(url: &str, form: &FormData) -> Result<String, String> {
    let init = RequestInit::new();
    init.set_method("POST");
    init.set_body(form.as_ref());
    body_text(response_for(url, Some(&init)).await?).await
}

/// Append URI-encoded query parameters to an endpoint path.
pub fn query_url(path: &str, params: &[(&str, &str)]) -> String {
    let mut url = String::from(path);
    for (i, (key, value)) in params.iter().enumerate() {
        url.push(if i == 0 { '?' } else { '&' });
        url.push_str(&String::from(js_sys::encode_uri_component(key)));
        url.push('=');
        url.push_str(&String::from(js_sys::encode_uri_component(value)));
    }
    url
}
