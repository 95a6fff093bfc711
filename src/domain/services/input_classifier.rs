//! Input Classifier
//!
//! Pure predicates that decide, before any network call, what kind of
//! lookup a piece of free text is asking for.

use std::net::IpAddr;

/// Returns true if `input` is an IPv4 or IPv6 literal.
///
/// Surrounding whitespace is ignored. Hostnames, CIDR blocks and
/// addresses with ports are not literals.
///
/// # Examples
/// ```
/// use arcgis_geocoder::domain::services::is_ip_literal;
///
/// assert!(is_ip_literal("127.0.0.1"));
/// assert!(is_ip_literal("::ffff:88.188.221.14"));
/// assert!(!is_ip_literal("10 avenue Gambetta, Paris, France"));
/// ```
pub fn is_ip_literal(input: &str) -> bool {
    input.trim().parse::<IpAddr>().is_ok()
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn test_ipv4_literals() {
        assert!(is_ip_literal("127.0.0.1"));
        assert!(is_ip_literal("88.188.221.14"));
        assert!(is_ip_literal("0.0.0.0"));
        assert!(is_ip_literal(" 10.0.0.1 "));
    }

    #[test]
    fn test_ipv6_literals() {
        assert!(is_ip_literal("::1"));
        assert!(is_ip_literal("::ffff:88.188.221.14"));
        assert!(is_ip_literal("2001:db8::8a2e:370:7334"));
        assert!(is_ip_literal("fe80::1"));
    }

    #[test]
    fn test_addresses_are_not_ip() {
        assert!(!is_ip_literal("10 avenue Gambetta, Paris, France"));
        assert!(!is_ip_literal("Hannover"));
        assert!(!is_ip_literal(""));
    }

    #[test]
    fn test_near_misses_are_not_ip() {
        assert!(!is_ip_literal("256.1.1.1"));
        assert!(!is_ip_literal("1.2.3"));
        assert!(!is_ip_literal("10.0.0.1:80"));
        assert!(!is_ip_literal("10.0.0.0/8"));
        assert!(!is_ip_literal("localhost"));
    }
}
