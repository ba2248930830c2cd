// SPDX-License-Identifier: MIT OR Apache-2.0

use std::sync::Arc;
use std::thread;

use openstack_clouds::testkit::CloudsFixture;
use openstack_clouds::{AuthOptions, CloudsConfig, CloudsError, ParseCause, ParseError};

const CLOUDS_YAML: &str = r#"
clouds:
  alpha:
    auth:
      username: u
      password: p
      auth_url: http://x
  staging:
    region_name: RegionOne
    auth:
      auth_url: https://keystone.staging.example.com:5000/v3
      username: deployer
      password: hunter2
      tenant_name: staging
      tenant_id: 0f3c2a
    interface: public
  metadata-only:
    region_name: RegionTwo
"#;

#[test]
fn test_load_from_file() -> anyhow::Result<()> {
    let fixture = CloudsFixture::new()?;
    let path = fixture.write("clouds.yaml", CLOUDS_YAML)?;

    let config = CloudsConfig::from_file(&path)?;

    assert_eq!(
        config.get("alpha")?,
        AuthOptions {
            identity_endpoint: "http://x".to_string(),
            username: "u".to_string(),
            password: "p".to_string(),
            tenant_name: String::new(),
            tenant_id: String::new(),
        }
    );

    let staging = config.get("staging")?;
    assert_eq!(staging.tenant_name, "staging");
    assert_eq!(staging.tenant_id, "0f3c2a");
    assert_eq!(staging.identity_url()?.port(), Some(5000));

    let beta = config.get("beta").unwrap_err();
    assert_eq!(beta.to_string(), "config: cloud `beta` not found");
    Ok(())
}

#[test]
fn test_sections_without_auth_are_omitted() -> anyhow::Result<()> {
    let fixture = CloudsFixture::new()?;
    let path = fixture.write("clouds.yaml", CLOUDS_YAML)?;

    let config = CloudsConfig::from_file(path)?;
    let all = config.all().expect("clouds are defined");

    assert_eq!(all.len(), 2);
    assert!(!all.contains_key("metadata-only"));
    assert!(matches!(
        config.get("metadata-only"),
        Err(CloudsError::NotFound(_))
    ));
    Ok(())
}

#[test]
fn test_missing_file_is_io_error() -> anyhow::Result<()> {
    let fixture = CloudsFixture::new()?;
    let path = fixture.path("nope.yaml");

    let err = CloudsConfig::from_file(&path).unwrap_err();

    match &err {
        CloudsError::Io { path: failed, .. } => assert_eq!(failed, &path),
        other => panic!("unexpected error: {:?}", other),
    }
    assert!(!err.is_parse());
    Ok(())
}

#[test]
fn test_parse_error_names_file() -> anyhow::Result<()> {
    let fixture = CloudsFixture::new()?;
    let path = fixture.write("clouds.yaml", "clouds: [unclosed")?;

    let err = CloudsConfig::from_file(&path).unwrap_err();

    assert!(err
        .to_string()
        .starts_with(&format!("config: cannot parse {}: ", path.display())));
    assert!(std::error::Error::source(&err).is_some());
    Ok(())
}

#[test]
fn test_missing_and_empty_clouds_match() -> anyhow::Result<()> {
    let fixture = CloudsFixture::new()?;
    let missing = fixture.write("missing/clouds.yaml", "defaults:\n  interface: public\n")?;
    let empty = fixture.write("empty/clouds.yaml", "clouds: {}\n")?;

    for path in [&missing, &empty] {
        match CloudsConfig::from_file(path) {
            Err(CloudsError::Parse(ParseError {
                file,
                cause: ParseCause::Empty,
            })) => assert_eq!(&file, path),
            other => panic!("unexpected result: {:?}", other),
        }
    }
    Ok(())
}

#[test]
fn test_invalid_utf8_is_parse_error() -> anyhow::Result<()> {
    let fixture = CloudsFixture::new()?;
    let path = fixture.path("clouds.yaml");
    std::fs::write(&path, b"clouds: \xc3\x28\n")?;

    let err = CloudsConfig::from_file(&path).unwrap_err();
    assert!(err.is_parse());
    Ok(())
}

#[test]
fn test_search_prefers_readable_over_missing() -> anyhow::Result<()> {
    let fixture = CloudsFixture::new()?;
    let user = fixture.write("home/.config/openstack/clouds.yaml", CLOUDS_YAML)?;
    let system = fixture.write(
        "etc/openstack/clouds.yaml",
        "clouds:\n  system:\n    auth:\n      username: root\n",
    )?;

    let config = CloudsConfig::from_paths([fixture.path("cwd/clouds.yaml"), user, system])?;

    assert!(config.get("alpha").is_ok());
    assert!(config.get("system").is_err());
    Ok(())
}

#[test]
fn test_search_stops_at_malformed_file() -> anyhow::Result<()> {
    let fixture = CloudsFixture::new()?;
    let cwd = fixture.write("cwd/clouds.yaml", "clouds:\n  - not: [a, mapping\n")?;
    let user = fixture.write("home/.config/openstack/clouds.yaml", CLOUDS_YAML)?;

    let err = CloudsConfig::from_paths([cwd.clone(), user]).unwrap_err();

    match err {
        CloudsError::Parse(parse) => assert_eq!(parse.file, cwd),
        other => panic!("unexpected error: {:?}", other),
    }
    Ok(())
}

#[test]
fn test_shared_across_threads() -> anyhow::Result<()> {
    let config = Arc::new(CloudsConfig::from_yaml(CLOUDS_YAML)?);

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let config = Arc::clone(&config);
            thread::spawn(move || config.get("staging").map(|auth| auth.username))
        })
        .collect();

    for handle in handles {
        let username = handle.join().expect("reader thread panicked")?;
        assert_eq!(username, "deployer");
    }
    Ok(())
}
