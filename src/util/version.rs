pub const APP_NAME: &str = "Costify";
pub const APP_TAGLINE: &str = "cost sheets & suggested prices";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
pub const GIT_TAG: Option<&str> = option_env!("GIT_TAG");

pub fn version_label() -> String {
    if let Some(tag) = GIT_TAG {
        tag.to_string()
    } else {
        format!("v{}", APP_VERSION)
    }
}

pub fn window_title() -> String {
    format!("{} {}", APP_NAME, version_label())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_is_tag_or_prefixed_package_version() {
        let label = version_label();
        match GIT_TAG {
            Some(tag) => assert_eq!(label, tag),
            None => assert_eq!(label, format!("v{APP_VERSION}")),
        }
        assert!(window_title().starts_with(APP_NAME));
    }
}
