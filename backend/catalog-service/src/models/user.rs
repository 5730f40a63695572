use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubscriptionStatus {
    Free,
    Premium,
}

impl SubscriptionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SubscriptionStatus::Free => "Free",
            SubscriptionStatus::Premium => "Premium",
        }
    }
}

impl fmt::Display for SubscriptionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SubscriptionStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Free" => Ok(SubscriptionStatus::Free),
            "Premium" => Ok(SubscriptionStatus::Premium),
            other => Err(format!("unknown subscription status '{}'", other)),
        }
    }
}

/// Subscriber account.
///
/// `subscription_status` is free-form text in storage; `subscription()`
/// interprets the two values the product knows about.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct User {
    pub user_id: i64,
    pub name: String,
    pub email: String,
    /// Stored credential; never leaves the service
    #[serde(skip_serializing, default)]
    pub password: String,
    pub subscription_status: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// `None` for statuses written by other systems that this service does not model.
    pub fn subscription(&self) -> Option<SubscriptionStatus> {
        self.subscription_status.parse().ok()
    }
}
