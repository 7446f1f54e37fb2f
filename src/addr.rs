//! IP address validation and canonicalization.

use crate::error::Error;
use ipnet::IpNet;
use std::net::IpAddr;
use std::sync::LazyLock;

/// Ranges the remote service cannot score.
static LOCAL_NETS: LazyLock<Vec<IpNet>> = LazyLock::new(|| {
    [
        "127.0.0.0/8",    // IPv4 loopback
        "10.0.0.0/8",     // RFC1918
        "172.16.0.0/12",  // RFC1918
        "192.168.0.0/16", // RFC1918
        "::1/128",        // IPv6 loopback
        "fc00::/7",       // IPv6 unique local
        "fe80::/10",      // IPv6 link local
    ]
    .iter()
    .map(|net| net.parse().expect("static CIDR literal"))
    .collect()
});

/// Collapse IPv4-mapped IPv6 addresses (`::ffff:a.b.c.d`) to plain IPv4 so
/// the locality rules and the outbound query see one canonical form.
pub fn canonicalize(ip: IpAddr) -> IpAddr {
    match ip {
        IpAddr::V6(v6) => match v6.to_ipv4_mapped() {
            Some(v4) => IpAddr::V4(v4),
            None => ip,
        },
        v4 => v4,
    }
}

/// Parse an IP literal and canonicalize it.
pub fn parse_ip(raw: &str) -> Result<IpAddr, Error> {
    let ip: IpAddr = raw
        .trim()
        .parse()
        .map_err(|_| Error::InvalidAddress(raw.to_string()))?;
    Ok(canonicalize(ip))
}

/// Check whether an address falls in a local/private range.
pub fn is_local(ip: &IpAddr) -> bool {
    LOCAL_NETS.iter().any(|net| net.contains(ip))
}

/// Validate an address for dispatch: syntactically correct and non-local.
pub fn validate(raw: &str) -> Result<IpAddr, Error> {
    let ip = parse_ip(raw)?;
    if is_local(&ip) {
        return Err(Error::LocalAddress(ip));
    }
    Ok(ip)
}
