//! Habit name suggestions: a remote endpoint when one is configured at
//! build time, the engine's offline list otherwise.

use mindflow_game::{fallback_list, Language, MAX_SUGGESTIONS};

/// Compile-time endpoint override. Unset builds always use the offline list.
pub const SUGGEST_ENDPOINT: Option<&str> = option_env!("MINDFLOW_SUGGEST_URL");

/// Fetch up to [`MAX_SUGGESTIONS`] names for a focus area. Network and
/// decode failures degrade to the offline list, never to an error.
#[cfg(target_arch = "wasm32")]
#[allow(clippy::future_not_send)] // Wasm futures rely on `JsFuture`, which is not `Send`.
pub async fn fetch_suggestions(focus_area: &str, language: Language) -> Vec<String> {
    match try_fetch(focus_area, language).await {
        Ok(names) if !names.is_empty() => names,
        Ok(_) => fallback_list(language),
        Err(err) => {
            log::warn!("suggestion fetch failed, using offline list: {err}");
            fallback_list(language)
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[allow(clippy::future_not_send)] // Wasm futures rely on `JsFuture`, which is not `Send`.
async fn try_fetch(focus_area: &str, language: Language) -> anyhow::Result<Vec<String>> {
    use anyhow::anyhow;

    let Some(endpoint) = SUGGEST_ENDPOINT else {
        return Ok(Vec::new());
    };
    let focus = js_sys::encode_uri_component(focus_area);
    let url = format!("{endpoint}?focus={focus}&lang={}", language.as_str());
    let response = crate::dom::fetch_response(&url)
        .await
        .map_err(|err| anyhow!(crate::dom::js_error_message(&err)))?;
    if !response.ok() {
        anyhow::bail!("suggestion endpoint returned {}", response.status());
    }
    let promise = response
        .json()
        .map_err(|err| anyhow!(crate::dom::js_error_message(&err)))?;
    let body = wasm_bindgen_futures::JsFuture::from(promise)
        .await
        .map_err(|err| anyhow!(crate::dom::js_error_message(&err)))?;
    let names: Vec<String> =
        serde_wasm_bindgen::from_value(body).map_err(|err| anyhow!(err.to_string()))?;
    Ok(names.into_iter().take(MAX_SUGGESTIONS).collect())
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn fetch_suggestions(_focus_area: &str, language: Language) -> Vec<String> {
    fallback_list(language)
}

#[cfg(test)]
mod tests {
    use super::fetch_suggestions;
    use futures::executor::block_on;
    use mindflow_game::{Language, MAX_SUGGESTIONS};

    #[test]
    fn offline_build_serves_the_fallback_list() {
        let names = block_on(fetch_suggestions("fitness", Language::En));
        assert_eq!(names.len(), MAX_SUGGESTIONS);
        assert!(names.iter().all(|name| !name.is_empty()));
    }
}
