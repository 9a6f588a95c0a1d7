use burrow_core::FormValues;
use wasm_bindgen::JsCast;
use web_sys::{Element, FormData, HtmlInputElement, HtmlSelectElement};

/// Collect named `input`/`select` values from a form region, in document
/// order. Controls without a `name` are skipped; repeated names accumulate
/// as multi-value fields.
pub fn collect_form_region(region_id: &str) -> FormValues {
    let mut values = FormValues::new();
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return values;
    };
    let selector = format!("#{region_id} input, #{region_id} select");
    let Ok(nodes) = document.query_selector_all(&selector) else {
        return values;
    };
    for i in 0..nodes.length() {
        let Some(node) = nodes.get(i) else { continue };
        let Ok(element) = node.dyn_into::<Element>() else {
            continue;
        };
        let (name, value) = if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
            (input.name(), input.value())
        } else if let Some(select) = element.dyn_ref::<HtmlSelectElement>() {
            (select.name(), select.value())
        } else {
            continue;
        };
        if name.is_empty() {
            continue;
        }
        values.append(name, value);
    }
    values
}

/// Build the multipart body for one request: serialized parameters plus
/// the operation's (field, path) file pairs.
pub fn form_data_from(values: &FormValues, files: &[(&str, &str)]) -> Result<FormData, String> {
    let form = FormData::new().map_err(|e| format!("FormData: {e:?}"))?;
    for (name, value) in values.iter() {
        form.append_with_str(name, value)
            .map_err(|e| format!("append {name}: {e:?}"))?;
    }
    for (field, path) in files {
        form.append_with_str(field, path)
            .map_err(|e| format!("append {field}: {e:?}"))?;
    }
    Ok(form)
}
