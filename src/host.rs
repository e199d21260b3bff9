//! Reduces a raw URL or hostname string to the host it names.

use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

use crate::error::{ExtractError, HostnameErrorKind, Result};

/// URI scheme followed by "://", or a scheme-relative "//"
static SCHEME_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:[A-Za-z][A-Za-z0-9+.\-]*:)?//")
        .expect("SCHEME_PATTERN: hardcoded regex is invalid")
});

/// Characters that can never appear inside a host label
static INVALID_LABEL_CHAR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[\s:@\[\]]").expect("INVALID_LABEL_CHAR: hardcoded regex is invalid")
});

/// Lowercase hostname split into labels
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hostname {
    labels: Vec<String>,
}

impl Hostname {
    /// Split a bare hostname into labels.
    ///
    /// A single trailing dot (the DNS root) is dropped; any other empty
    /// label is an error. Non-ASCII bytes are kept as given.
    pub fn parse(name: &str) -> Result<Self> {
        let lowered = name.to_ascii_lowercase();
        let trimmed = lowered.strip_suffix('.').unwrap_or(lowered.as_str());
        if trimmed.is_empty() {
            return Err(ExtractError::hostname(HostnameErrorKind::Empty, name));
        }

        let labels: Vec<String> = trimmed.split('.').map(str::to_string).collect();
        if labels.iter().any(String::is_empty) {
            return Err(ExtractError::hostname(HostnameErrorKind::EmptyLabel, name));
        }
        if INVALID_LABEL_CHAR.is_match(trimmed) {
            return Err(ExtractError::hostname(HostnameErrorKind::InvalidCharacter, name));
        }

        Ok(Self { labels })
    }

    /// Labels in hostname order
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Number of labels
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Always false for a parsed hostname
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

impl fmt::Display for Hostname {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.labels.join("."))
    }
}

/// Host named by an input string
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Host {
    /// IPv4 or IPv6 literal
    Ip(IpAddr),
    /// DNS name
    Name(Hostname),
}

impl Host {
    /// Strip scheme, userinfo, path, query, fragment and port from `raw`
    /// and classify what remains.
    pub fn parse(raw: &str) -> Result<Self> {
        let input = raw.trim();
        let rest = SCHEME_PATTERN
            .find(input)
            .map_or(input, |m| &input[m.end()..]);

        // Authority ends at the first path, query or fragment delimiter
        let authority = rest
            .find(['/', '?', '#'])
            .map_or(rest, |pos| &rest[..pos]);

        // userinfo may itself contain '@' when unescaped; the host follows the last one
        let host_port = authority
            .rsplit_once('@')
            .map_or(authority, |(_, host)| host);

        if let Some(bracketed) = host_port.strip_prefix('[') {
            return Self::parse_bracketed(bracketed, raw);
        }

        // Unbracketed IPv6 has more than one colon and no port
        if host_port.matches(':').count() > 1 {
            if let Ok(ip) = host_port.parse::<Ipv6Addr>() {
                return Ok(Host::Ip(IpAddr::V6(ip)));
            }
        }

        let host = strip_port(host_port, raw)?;
        if host.is_empty() {
            return Err(ExtractError::hostname(HostnameErrorKind::Empty, raw));
        }

        let root_stripped = host.strip_suffix('.').unwrap_or(host);
        if let Ok(ip) = root_stripped.parse::<Ipv4Addr>() {
            return Ok(Host::Ip(IpAddr::V4(ip)));
        }

        Hostname::parse(host).map(Host::Name)
    }

    fn parse_bracketed(bracketed: &str, raw: &str) -> Result<Self> {
        let invalid = || ExtractError::hostname(HostnameErrorKind::InvalidIpLiteral, raw);

        let (addr, after) = bracketed.split_once(']').ok_or_else(invalid)?;
        let ip = addr.parse::<Ipv6Addr>().map_err(|_| invalid())?;
        // Only a port may follow the closing bracket
        if !after.is_empty() {
            let port = after.strip_prefix(':').ok_or_else(invalid)?;
            check_port(port, raw)?;
        }
        Ok(Host::Ip(IpAddr::V6(ip)))
    }
}

/// Remove a trailing ":<port>". An empty port is allowed, as in URLs.
fn strip_port<'a>(host_port: &'a str, raw: &str) -> Result<&'a str> {
    let Some((host, port)) = host_port.rsplit_once(':') else {
        return Ok(host_port);
    };
    check_port(port, raw)?;
    Ok(host)
}

fn check_port(port: &str, raw: &str) -> Result<()> {
    if !port.is_empty() && port.parse::<u16>().is_err() {
        return Err(ExtractError::hostname(HostnameErrorKind::InvalidPort, raw));
    }
    Ok(())
}
