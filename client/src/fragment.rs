//! Room bootstrap via an addressable fragment: `key=value` pairs after `#`,
//! percent-encoded. A shared link or a restart with the same fragment drops
//! the viewer back into the same room.

use url::form_urlencoded;

/// Looks up one key in a fragment. Accepts the fragment with or without its
/// leading `#`.
pub fn extract(fragment: &str, key: &str) -> Option<String> {
    let raw = fragment.strip_prefix('#').unwrap_or(fragment);
    form_urlencoded::parse(raw.as_bytes())
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.into_owned())
}

/// Builds the fragment to publish after a successful join or create.
pub fn compose(room: &str, password: &str) -> String {
    form_urlencoded::Serializer::new(String::new())
        .append_pair("room", room)
        .append_pair("password", password)
        .finish()
}
