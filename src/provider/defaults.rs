//! Default profile and group resolution
//!
//! Monitors reference location, notification and threshold profiles and user
//! groups by id. When the configuration leaves one of them out, the provider
//! picks one from the account. Names given in `*_name(s)` attributes are
//! resolved to ids. Every resolved id is written back to the resource data.

use tracing::debug;

use crate::{
    api::{
        types::{LocationProfile, MonitorType, ThresholdProfile, UserGroup},
        Site24x7Client,
    },
    provider::{resource_data::ResourceData, ProviderError},
};

pub async fn default_location_profile(
    client: &Site24x7Client,
    name: &str,
) -> Result<LocationProfile, ProviderError> {
    let profiles = client.location_profiles().list().await?;

    if !name.is_empty() {
        if let Some(profile) = profiles.iter().find(|p| p.profile_name.contains(name)) {
            return Ok(profile.clone());
        }
    }

    profiles
        .into_iter()
        .next()
        .ok_or_else(|| ProviderError::not_found("No Location Profiles Configured"))
}

pub async fn default_threshold_profile(
    client: &Site24x7Client,
    monitor_type: MonitorType,
) -> Result<ThresholdProfile, ProviderError> {
    let profiles = client.threshold_profiles().list().await?;

    if let Some(profile) = profiles
        .iter()
        .find(|p| p.monitor_type == monitor_type.as_str())
    {
        return Ok(profile.clone());
    }

    profiles.into_iter().next().ok_or_else(|| {
        ProviderError::not_found(format!(
            "Unable to find threshold profiles in Site24x7! Please configure threshold profile for the monitor type : {monitor_type} by visiting Admin -> Configuration Profiles -> Threshold and Availability"
        ))
    })
}

pub async fn default_user_group(client: &Site24x7Client) -> Result<UserGroup, ProviderError> {
    client
        .user_groups()
        .list()
        .await?
        .into_iter()
        .next()
        .ok_or_else(no_user_groups)
}

fn no_user_groups() -> ProviderError {
    ProviderError::not_found(
        "Unable to find user groups in Site24x7! Please configure user groups by visiting Admin -> User & Alert Management -> User Alert Group",
    )
}

pub async fn location_profile_id(
    client: &Site24x7Client,
    d: &mut ResourceData,
) -> Result<String, ProviderError> {
    let configured = d.get_string("location_profile_id");
    if !configured.is_empty() {
        return Ok(configured);
    }

    let profile = default_location_profile(client, &d.get_string("location_profile_name")).await?;
    debug!(profile_id = %profile.profile_id, "resolved default location profile");
    d.set("location_profile_id", &profile.profile_id);
    Ok(profile.profile_id)
}

pub async fn threshold_profile_id(
    client: &Site24x7Client,
    d: &mut ResourceData,
    monitor_type: MonitorType,
) -> Result<String, ProviderError> {
    let configured = d.get_string("threshold_profile_id");
    if !configured.is_empty() {
        return Ok(configured);
    }

    let profile = default_threshold_profile(client, monitor_type).await?;
    debug!(profile_id = %profile.profile_id, %monitor_type, "resolved default threshold profile");
    d.set("threshold_profile_id", &profile.profile_id);
    Ok(profile.profile_id)
}

// Resolves `notification_profile_name` to the last profile containing it, or
// falls back to the first profile when no id is configured.
pub async fn set_notification_profile(
    client: &Site24x7Client,
    d: &mut ResourceData,
) -> Result<String, ProviderError> {
    let name = d.get_string("notification_profile_name");
    let configured = d.get_string("notification_profile_id");
    if name.is_empty() && !configured.is_empty() {
        return Ok(configured);
    }

    let profiles = client.notification_profiles().list().await?;
    if profiles.is_empty() {
        return Err(ProviderError::not_found(
            "Unable to find notification profiles in Site24x7. Please configure them by visiting Admin -> Configuration Profiles -> Notification Profiles",
        ));
    }

    let profile = if name.is_empty() {
        &profiles[0]
    } else {
        profiles
            .iter()
            .rev()
            .find(|p| p.profile_name.contains(&name))
            .ok_or_else(|| {
                ProviderError::not_found(format!(
                    "Unable to find notification profile matching the string : \"{name}\" in Site24x7. Please configure a valid value for the argument \"notification_profile_name\""
                ))
            })?
    };

    d.set("notification_profile_id", &profile.profile_id);
    Ok(profile.profile_id.clone())
}

pub async fn set_user_groups(
    client: &Site24x7Client,
    d: &mut ResourceData,
    fall_back_to_first: bool,
) -> Result<Vec<String>, ProviderError> {
    let names = d.get_string_list("user_group_names");
    let configured = d.get_string_list("user_group_ids");

    if names.is_empty() {
        if !configured.is_empty() || !fall_back_to_first {
            return Ok(configured);
        }
        let group = default_user_group(client).await?;
        let ids = vec![group.user_group_id];
        d.set("user_group_ids", &ids);
        return Ok(ids);
    }

    let groups = client.user_groups().list().await?;
    if groups.is_empty() {
        return Err(no_user_groups());
    }

    let mut ids = Vec::new();
    for name in &names {
        let matched: Vec<&UserGroup> = groups
            .iter()
            .filter(|group| group.display_name.contains(name.as_str()))
            .collect();
        if matched.is_empty() {
            return Err(ProviderError::not_found(format!(
                "Unable to find user group matching the string : \"{name}\" in Site24x7. Please configure a valid value for the argument \"user_group_names\""
            )));
        }
        for group in matched {
            if !ids.contains(&group.user_group_id) {
                ids.push(group.user_group_id.clone());
            }
        }
    }

    d.set("user_group_ids", &ids);
    Ok(ids)
}

pub async fn set_tags(
    client: &Site24x7Client,
    d: &mut ResourceData,
) -> Result<Vec<String>, ProviderError> {
    let names = d.get_string_list("tag_names");
    if names.is_empty() {
        return Ok(d.get_string_list("tag_ids"));
    }

    let tags = client.tags().list().await?;
    let mut ids = Vec::new();
    for name in &names {
        let before = ids.len();
        for tag in tags.iter().filter(|tag| &tag.tag_name == name) {
            if !ids.contains(&tag.tag_id) {
                ids.push(tag.tag_id.clone());
            }
        }
        if ids.len() == before && !tags.iter().any(|tag| &tag.tag_name == name) {
            return Err(ProviderError::not_found(format!(
                "Unable to find tag matching the string : \"{name}\" in Site24x7. Please configure a valid value for the argument \"tag_names\""
            )));
        }
    }

    d.set("tag_ids", &ids);
    Ok(ids)
}
