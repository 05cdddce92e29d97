//! Out-of-core collaborators
//!
//! Opaque glue the game triggers but does not own: the payment-checkout
//! initiator bound to two named offers, an external scheduling-link opener,
//! and a social share action. None of this touches the sim.

/// The two purchasable offers on the lost overlay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Offer {
    EscapePass,
    Founders,
}

impl Offer {
    /// Identifier the checkout backend expects
    pub fn id(&self) -> &'static str {
        match self {
            Offer::EscapePass => "escape-pass",
            Offer::Founders => "founders",
        }
    }
}

/// Share text composed from the escape time
pub fn share_text(elapsed_secs: u64) -> String {
    format!("I escaped the Matrix in {elapsed_secs}s. Can you? #MatrixXscape")
}

/// Hand off to the external checkout flow for the given offer (WASM only)
#[cfg(target_arch = "wasm32")]
pub fn open_checkout(offer: Offer) {
    log::info!("Opening checkout for offer '{}'", offer.id());
    if let Some(window) = web_sys::window() {
        let _ = window.open_with_url(&format!("/checkout?offer={}", offer.id()));
    }
}

/// Open the external scheduling link (WASM only)
#[cfg(target_arch = "wasm32")]
pub fn open_scheduler() {
    if let Some(window) = web_sys::window() {
        let _ = window.open_with_url("/schedule");
    }
}

/// Share the escape time via the platform share sheet, falling back to a
/// web intent when the share API is absent (WASM only)
#[cfg(target_arch = "wasm32")]
pub fn share_escape_time(elapsed_secs: u64) {
    use wasm_bindgen::JsValue;

    let text = share_text(elapsed_secs);
    let Some(window) = web_sys::window() else {
        return;
    };
    let navigator = window.navigator();

    let has_share = js_sys::Reflect::has(navigator.as_ref(), &JsValue::from_str("share"))
        .unwrap_or(false);
    if has_share {
        let data = web_sys::ShareData::new();
        data.set_title("MatrixXscape");
        data.set_text(&text);
        let _ = navigator.share_with_data(&data);
    } else {
        let encoded = js_sys::encode_uri_component(&text);
        let url = format!("https://twitter.com/intent/tweet?text={}", String::from(encoded));
        let _ = window.open_with_url(&url);
    }
}

/// Native stubs
#[cfg(not(target_arch = "wasm32"))]
pub fn open_checkout(offer: Offer) {
    log::info!("checkout stub: offer '{}'", offer.id());
}

#[cfg(not(target_arch = "wasm32"))]
pub fn open_scheduler() {
    log::info!("scheduler stub");
}

#[cfg(not(target_arch = "wasm32"))]
pub fn share_escape_time(elapsed_secs: u64) {
    log::info!("share stub: {}", share_text(elapsed_secs));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offer_ids_are_stable() {
        assert_eq!(Offer::EscapePass.id(), "escape-pass");
        assert_eq!(Offer::Founders.id(), "founders");
    }

    #[test]
    fn test_share_text_carries_elapsed_time() {
        assert!(share_text(92).contains("92s"));
    }
}
