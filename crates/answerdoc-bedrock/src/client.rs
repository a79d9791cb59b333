/// Build an `SdkConfig` for Bedrock calls.
///
/// Credentials come from the named profile when one is given, otherwise from
/// the default provider chain (environment, instance role, SSO cache).
pub async fn build_config(region: &str, profile: Option<&str>) -> aws_config::SdkConfig {
    let mut builder = aws_config::defaults(aws_config::BehaviorVersion::latest())
        .region(aws_config::Region::new(region.to_string()));

    if let Some(profile_name) = profile {
        builder = builder.profile_name(profile_name);
    }

    builder.load().await
}
