//! Enumerated column types shared across the marketplace tables.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Role a user registered with; fixed at registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    #[sea_orm(string_value = "owner")]
    Owner,
    #[sea_orm(string_value = "walker")]
    Walker,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
#[serde(rename_all = "lowercase")]
pub enum DogSize {
    #[sea_orm(string_value = "small")]
    Small,
    #[sea_orm(string_value = "medium")]
    Medium,
    #[sea_orm(string_value = "large")]
    Large,
}

/// Lifecycle state of a walk request.
///
/// Requests start `Open` and only ever move forward: `Open` can be accepted
/// or cancelled, `Accepted` can be completed or cancelled, and `Completed`
/// and `Cancelled` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
#[serde(rename_all = "lowercase")]
pub enum WalkStatus {
    #[sea_orm(string_value = "open")]
    Open,
    #[sea_orm(string_value = "accepted")]
    Accepted,
    #[sea_orm(string_value = "completed")]
    Completed,
    #[sea_orm(string_value = "cancelled")]
    Cancelled,
}

impl WalkStatus {
    /// Returns true once a request can no longer change state.
    pub fn is_terminal(&self) -> bool {
        matches!(self, WalkStatus::Completed | WalkStatus::Cancelled)
    }

    /// Whether the transition graph has an edge from `self` to `next`.
    pub fn can_transition_to(&self, next: WalkStatus) -> bool {
        matches!(
            (self, next),
            (WalkStatus::Open, WalkStatus::Accepted)
                | (WalkStatus::Open, WalkStatus::Cancelled)
                | (WalkStatus::Accepted, WalkStatus::Completed)
                | (WalkStatus::Accepted, WalkStatus::Cancelled)
        )
    }
}
