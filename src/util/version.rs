use semver::Version;
use thiserror::Error;

pub const APP_NAME: &str = "Fiber Operator Portal";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
pub const GIT_TAG: Option<&str> = option_env!("GIT_TAG");

#[derive(Error, Debug)]
pub enum VersionError {
    #[error("invalid version format: {0}")]
    InvalidVersion(String),
}

fn parse_version_str(input: &str) -> Result<Version, VersionError> {
    let trimmed = input.trim_start_matches(['v', 'V']);
    Version::parse(trimmed).map_err(|err| VersionError::InvalidVersion(err.to_string()))
}

pub fn current_version() -> Result<Version, VersionError> {
    if let Some(tag) = GIT_TAG {
        return parse_version_str(tag);
    }

    parse_version_str(APP_VERSION)
}

pub fn version_label() -> String {
    if let Some(tag) = GIT_TAG {
        tag.to_string()
    } else {
        format!("v{}", APP_VERSION)
    }
}

/// Short release channel shown next to the version on the settings page.
pub fn release_channel(version: &Version) -> &'static str {
    if !version.pre.is_empty() {
        "Pre-release"
    } else if version.major == 0 {
        "Preview"
    } else {
        "Stable"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_may_carry_a_v_prefix() {
        assert_eq!(parse_version_str("v1.2.3").unwrap(), Version::new(1, 2, 3));
        assert_eq!(parse_version_str("0.1.0").unwrap(), Version::new(0, 1, 0));
        assert!(parse_version_str("latest").is_err());
    }

    #[test]
    fn channel_follows_version_shape() {
        assert_eq!(release_channel(&Version::parse("1.0.0-rc.1").unwrap()), "Pre-release");
        assert_eq!(release_channel(&Version::new(0, 4, 0)), "Preview");
        assert_eq!(release_channel(&Version::new(2, 0, 0)), "Stable");
    }
}
