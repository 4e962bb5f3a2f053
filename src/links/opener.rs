//! Hands URLs to the platform's default browser.

use std::process::Command;

use bevy::prelude::*;

use super::error::LinkError;
use crate::core::OpenLinkEvent;

// Not `cmd /C start`: cmd would treat `&`, `|` and `^` in a query string as
// command separators.
#[cfg(target_os = "windows")]
const OPENER: (&str, &[&str]) = ("rundll32", &["url.dll,FileProtocolHandler"]);
#[cfg(target_os = "macos")]
const OPENER: (&str, &[&str]) = ("open", &[]);
#[cfg(not(any(target_os = "windows", target_os = "macos")))]
const OPENER: (&str, &[&str]) = ("xdg-open", &[]);

/// Reject anything that is not an http(s) link.
pub fn check_url(url: &str) -> Result<&str, LinkError> {
    let url = url.trim();
    if url.is_empty() {
        return Err(LinkError::EmptyUrl);
    }
    if !(url.starts_with("https://") || url.starts_with("http://")) {
        return Err(LinkError::UnsupportedScheme {
            url: url.to_string(),
        });
    }
    Ok(url)
}

/// Launch the opener without waiting for it.
pub fn launch_url(url: &str) -> Result<(), LinkError> {
    let url = check_url(url)?;
    let (opener, args) = OPENER;

    Command::new(opener)
        .args(args)
        .arg(url)
        .spawn()
        .map_err(|e| LinkError::SpawnFailed {
            opener,
            url: url.to_string(),
            details: e.to_string(),
        })?;
    Ok(())
}

/// Open every requested link. Failures are logged and dropped.
pub fn open_external_links(mut requests: EventReader<OpenLinkEvent>) {
    for request in requests.read() {
        info!("Opening {}", request.url);
        if let Err(e) = launch_url(&request.url) {
            warn!("{}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn web_links_pass() {
        assert_eq!(
            check_url(" https://github.com/bradyrichardson ").unwrap(),
            "https://github.com/bradyrichardson"
        );
        assert!(check_url("http://example.com").is_ok());
    }

    #[test]
    fn opener_is_never_a_shell() {
        let (opener, _) = OPENER;
        for shell in ["cmd", "sh", "bash", "powershell"] {
            assert_ne!(opener, shell);
        }
        assert_eq!(
            check_url("https://example.com/?a=1&b=2|3").unwrap(),
            "https://example.com/?a=1&b=2|3"
        );
    }

    #[test]
    fn empty_and_foreign_urls_are_rejected() {
        assert!(matches!(check_url("   "), Err(LinkError::EmptyUrl)));
        assert!(matches!(
            check_url("file:///etc/passwd"),
            Err(LinkError::UnsupportedScheme { .. })
        ));
        assert!(matches!(
            launch_url("& calc.exe"),
            Err(LinkError::UnsupportedScheme { .. })
        ));
    }
}
