//! Dashboard State
//!
//! Created when the dashboard mounts, which kicks off the profile fetch, and
//! dropped when it unmounts. [`DashboardState::model`] turns the load status
//! into exactly what the view paints.

use std::sync::Arc;

use tokio::runtime::Handle;

use super::data_source::{InternDataSource, INTERN_PROFILE};
use super::loader::{LoadStatus, Loadable, PendingFetch};
use crate::shared::currency::format_rupees;
use crate::shared::intern::{reward_status, InternProfile};

/// Role shown under the intern's name
pub const ROLE_LABEL: &str = "Fundraising Intern";

pub struct DashboardState {
    profile: Loadable<InternProfile>,
}

/// What the dashboard shows for the current load status
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DashboardModel {
    Loading,
    Failed { message: String },
    Loaded(DashboardCard),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardCard {
    pub name: String,
    pub role: &'static str,
    pub referral_code: String,
    pub donations: String,
    pub rewards: Vec<RewardLine>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewardLine {
    pub label: String,
    pub unlocked: bool,
}

impl DashboardState {
    /// Mount the dashboard and start fetching the profile.
    pub fn mount(source: Arc<dyn InternDataSource>, runtime: &Handle) -> Self {
        let pending = PendingFetch::spawn(runtime, move |cancel| async move {
            source.fetch_intern_profile(cancel).await
        });
        Self {
            profile: Loadable::start(INTERN_PROFILE, pending),
        }
    }

    pub fn poll(&mut self) -> bool {
        self.profile.poll()
    }

    pub fn wait(&mut self, timeout: std::time::Duration) -> bool {
        self.profile.wait(timeout)
    }

    pub fn status(&self) -> &LoadStatus<InternProfile> {
        self.profile.status()
    }

    pub fn profile(&self) -> Option<&InternProfile> {
        self.profile.status().loaded()
    }

    pub fn model(&self) -> DashboardModel {
        match self.profile.status() {
            LoadStatus::Loading => DashboardModel::Loading,
            LoadStatus::Failed(message) => DashboardModel::Failed {
                message: message.clone(),
            },
            LoadStatus::Loaded(profile) => DashboardModel::Loaded(DashboardCard::from(profile)),
        }
    }
}

impl From<&InternProfile> for DashboardCard {
    fn from(profile: &InternProfile) -> Self {
        let rewards = reward_status(profile.total_donations)
            .into_iter()
            .map(|(tier, unlocked)| RewardLine {
                label: format!("{}: {}", format_rupees(tier.threshold), tier.description),
                unlocked,
            })
            .collect();

        Self {
            name: profile.name.clone(),
            role: ROLE_LABEL,
            referral_code: profile.referral_code.clone(),
            donations: format_rupees(profile.total_donations),
            rewards,
        }
    }
}
