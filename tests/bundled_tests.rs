//! Integration tests against the pinned rule snapshot shipped in `data/`.

#![cfg(feature = "bundled")]

use domain_extract_r::{bundled, Extractor, ExtractorOptions};

fn registered(raw: &str) -> String {
    bundled::extract(raw).unwrap().registered_domain()
}

#[test]
fn test_common_hosts() {
    let cases = [
        ("https://www.google.com/search?q=rust", "google.com"),
        ("http://forums.news.cnn.com/", "cnn.com"),
        ("www.bbc.co.uk", "bbc.co.uk"),
        ("https://www.ox.ac.uk/admissions", "ox.ac.uk"),
        ("shop.example.com.au", "example.com.au"),
        ("mail.yahoo.co.jp", "yahoo.co.jp"),
        ("www.example.xn--p1ai", "example.xn--p1ai"),
        ("https://crates.io/crates/regex", "crates.io"),
    ];
    for (raw, expected) in cases {
        assert_eq!(registered(raw), expected, "{}", raw);
    }
}

#[test]
fn test_wildcard_and_exception_hosts() {
    let r = bundled::extract("city.kawasaki.jp").unwrap();
    assert_eq!(r.domain, "city");
    assert_eq!(r.suffix_str(), "kawasaki.jp");

    let r = bundled::extract("www.city.yokohama.jp").unwrap();
    assert_eq!(r.subdomain_str(), "www");
    assert_eq!(r.registered_domain(), "city.yokohama.jp");

    let r = bundled::extract("foo.bar.kobe.jp").unwrap();
    assert_eq!(r.registered_domain(), "foo.bar.kobe.jp");

    let r = bundled::extract("ec2-1-2-3-4.us-east-1.compute.amazonaws.com").unwrap();
    assert_eq!(r.domain, "ec2-1-2-3-4");
    assert_eq!(r.suffix_str(), "us-east-1.compute.amazonaws.com");
    assert!(r.is_private);
}

#[test]
fn test_private_domains_follow_options() {
    assert_eq!(registered("octocat.github.io"), "octocat.github.io");

    let icann_only = Extractor::with_options(
        bundled::index(),
        ExtractorOptions::default().with_private_domains(false),
    );
    let r = icann_only.extract("octocat.github.io").unwrap();
    assert_eq!(r.registered_domain(), "github.io");
    assert_eq!(r.subdomain_str(), "octocat");
}

#[test]
fn test_degraded_and_passthrough_results() {
    let r = bundled::extract("co.uk").unwrap();
    assert!(r.is_bare_suffix());
    assert_eq!(r.registered_domain(), "co.uk");

    let r = bundled::extract("http://192.168.1.1:8080/").unwrap();
    assert_eq!(r.registered_domain(), "192.168.1.1");
    assert!(r.ip_addr().is_some());

    let r = bundled::extract("localhost").unwrap();
    assert_eq!(r.registered_domain(), "localhost");
}
