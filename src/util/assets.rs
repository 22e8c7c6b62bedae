use std::{borrow::Cow, sync::OnceLock};

use rust_embed::RustEmbed;

/// Embed the entire `assets/` directory into the binary.
#[derive(RustEmbed)]
#[folder = "assets"]
struct EmbeddedAssets;

static MAIN_CSS: OnceLock<String> = OnceLock::new();
static TAILWIND_CSS: OnceLock<String> = OnceLock::new();
static FAVICON_DATA_URI: OnceLock<String> = OnceLock::new();

/// Returns the contents of `assets/main.css` as a static string.
pub fn main_css() -> &'static str {
    MAIN_CSS
        .get_or_init(|| load_text("/assets/main.css"))
        .as_str()
}

/// Returns the generated `assets/tailwind.css`, or an empty sheet when it has
/// not been built (`npx tailwindcss -i ./input.css -o ./assets/tailwind.css`).
pub fn tailwind_css() -> &'static str {
    TAILWIND_CSS
        .get_or_init(|| {
            load_optional("/assets/tailwind.css")
                .and_then(|bytes| String::from_utf8(bytes.into_owned()).ok())
                .unwrap_or_default()
        })
        .as_str()
}

/// Returns a data URI for the favicon.
pub fn favicon_data_uri() -> &'static str {
    FAVICON_DATA_URI
        .get_or_init(|| load_data_uri("/assets/favicon.svg"))
        .as_str()
}

/// Raw bytes of a bundled mock fixture, e.g. `fixture("subscribers.json")`.
pub fn fixture(name: &str) -> Option<Cow<'static, [u8]>> {
    load_optional(&format!("/assets/mock/{name}"))
}

fn load_text(path: &str) -> String {
    let asset = load_asset(path);
    String::from_utf8(asset.into_owned())
        .unwrap_or_else(|_| panic!("Embedded asset {path} is not valid UTF-8"))
}

fn load_data_uri(path: &str) -> String {
    let asset = load_asset(path);
    let mime = guess_mime(path);
    let encoded = encode_base64(asset.as_ref());
    format!("data:{mime};base64,{encoded}")
}

fn load_asset(path: &str) -> Cow<'static, [u8]> {
    load_optional(path).unwrap_or_else(|| panic!("Failed to locate embedded asset: {path}"))
}

fn load_optional(path: &str) -> Option<Cow<'static, [u8]>> {
    let canonical = canonical_asset_path(path);
    EmbeddedAssets::get(&canonical).map(|file| file.data)
}

fn canonical_asset_path(path: &str) -> String {
    let trimmed = path.trim_start_matches('/');
    if let Some(rest) = trimmed.strip_prefix("assets/") {
        rest.to_string()
    } else {
        trimmed.to_string()
    }
}

fn guess_mime(path: &str) -> &'static str {
    if path.ends_with(".css") {
        "text/css"
    } else if path.ends_with(".svg") {
        "image/svg+xml"
    } else if path.ends_with(".json") {
        "application/json"
    } else {
        "application/octet-stream"
    }
}

fn encode_base64(input: &[u8]) -> String {
    const TABLE: &[u8; 64] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";
    let mut output = String::with_capacity(input.len().div_ceil(3) * 4);

    for chunk in input.chunks(3) {
        let b0 = chunk[0];
        let b1 = chunk.get(1).copied().unwrap_or(0);
        let b2 = chunk.get(2).copied().unwrap_or(0);

        output.push(TABLE[(b0 >> 2) as usize] as char);
        output.push(TABLE[(((b0 & 0b11) << 4) | (b1 >> 4)) as usize] as char);

        if chunk.len() > 1 {
            output.push(TABLE[(((b1 & 0b1111) << 2) | (b2 >> 6)) as usize] as char);
        } else {
            output.push('=');
        }

        if chunk.len() > 2 {
            output.push(TABLE[(b2 & 0b0011_1111) as usize] as char);
        } else {
            output.push('=');
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base64_pads_partial_chunks() {
        assert_eq!(encode_base64(b"F"), "Rg==");
        assert_eq!(encode_base64(b"Fi"), "Rmk=");
        assert_eq!(encode_base64(b"Fib"), "Rmli");
    }

    #[test]
    fn mime_covers_bundled_kinds_only() {
        assert_eq!(guess_mime("/assets/favicon.svg"), "image/svg+xml");
        assert_eq!(guess_mime("/assets/mock/journey.json"), "application/json");
        assert_eq!(guess_mime("/assets/icon.png"), "application/octet-stream");
    }

    #[test]
    fn asset_paths_are_canonicalized() {
        assert_eq!(canonical_asset_path("/assets/mock/a.json"), "mock/a.json");
        assert_eq!(canonical_asset_path("main.css"), "main.css");
    }

    #[test]
    fn bundled_assets_are_reachable() {
        assert!(favicon_data_uri().starts_with("data:image/svg+xml;base64,"));
        assert!(main_css().contains("body"));
        assert!(fixture("journey.json").is_some());
        assert!(fixture("missing.json").is_none());
    }
}
