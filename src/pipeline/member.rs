//! Team member records and the field normalisation rules applied to each row

use serde::{Deserialize, Serialize};

/// Directory the front end serves member photos from
pub const IMAGE_DIR: &str = "/img/team";

/// Scheme prepended to social links that are given as bare host/path
pub const DEFAULT_URL_SCHEME: &str = "https://";

/// Column names recognised in the input header
pub mod columns {
    pub const NAME: &str = "name";
    pub const POSITION: &str = "position";
    pub const IMAGE: &str = "image";
    pub const EMAIL: &str = "email";
    pub const LINKEDIN: &str = "linkedin";
    pub const INSTAGRAM: &str = "instagram";
    pub const FACEBOOK: &str = "facebook";

    /// Columns that end up in the `social` object, in output order
    pub const SOCIAL: [&str; 4] = [EMAIL, LINKEDIN, INSTAGRAM, FACEBOOK];
}

/// One entry of the output array
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberRecord {
    pub name: String,
    pub position: String,
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub social: Option<Social>,
}

/// Contact and social links of a member. Never serialized empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Social {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instagram: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub facebook: Option<String>,
}

impl Social {
    /// Build the social links from raw cell values.
    ///
    /// `lookup` returns the raw value for a column name. Blank values are
    /// dropped; link columns get a scheme when they lack one.
    pub fn from_cells<'a>(lookup: impl Fn(&str) -> &'a str) -> Option<Social> {
        let social = Social {
            email: non_empty(lookup(columns::EMAIL)),
            linkedin: normalize_link(lookup(columns::LINKEDIN)),
            instagram: normalize_link(lookup(columns::INSTAGRAM)),
            facebook: normalize_link(lookup(columns::FACEBOOK)),
        };
        (!social.is_empty()).then_some(social)
    }

    pub fn is_empty(&self) -> bool {
        self.email.is_none()
            && self.linkedin.is_none()
            && self.instagram.is_none()
            && self.facebook.is_none()
    }
}

impl MemberRecord {
    /// Assemble a record from already trimmed name and position.
    pub fn new(name: String, position: String, image: &str, social: Option<Social>) -> Self {
        let image = match image.trim() {
            "" => default_image_path(&name),
            given => given.to_string(),
        };
        Self {
            name,
            position,
            image,
            social,
        }
    }
}

/// `/img/team/<slug>.jpg` for a member name
pub fn default_image_path(name: &str) -> String {
    format!("{}/{}.jpg", IMAGE_DIR, image_slug(name))
}

/// Lowercased name with spaces replaced by underscores
pub fn image_slug(name: &str) -> String {
    name.trim().to_lowercase().replace(' ', "_")
}

/// Trim a link and give it a scheme if it is a bare host/path. Blank → `None`.
pub fn normalize_link(raw: &str) -> Option<String> {
    let link = raw.trim();
    if link.is_empty() {
        None
    } else if has_url_scheme(link) {
        Some(link.to_string())
    } else {
        Some(format!("{}{}", DEFAULT_URL_SCHEME, link))
    }
}

/// True when `value` starts with `<scheme>://`, scheme per RFC 3986
/// (letter, then letters, digits, `+`, `-` or `.`).
pub fn has_url_scheme(value: &str) -> bool {
    let Some((scheme, _)) = value.split_once("://") else {
        return false;
    };
    let mut chars = scheme.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() => {
            chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
        }
        _ => false,
    }
}

fn non_empty(raw: &str) -> Option<String> {
    let value = raw.trim();
    (!value.is_empty()).then(|| value.to_string())
}
