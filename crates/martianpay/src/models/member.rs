//! Team members of a merchant account and pending invitations.

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use martianpay_core::{api_enum, types::Timestamp};

use crate::concepts::api_resource;

api_enum! {
    pub enum MemberRole {
        Owner => "owner",
        Admin => "admin",
        Developer => "developer",
        Finance => "finance",
        Viewer => "viewer",
    }
}

api_enum! {
    pub enum MemberStatus {
        Active => "active",
        Disabled => "disabled",
    }
}

api_enum! {
    pub enum InviteStatus {
        Pending => "pending",
        Accepted => "accepted",
        Expired => "expired",
        Revoked => "revoked",
    }
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub id: String,
    pub object: Option<String>,
    pub merchant_account_id: Option<String>,
    pub email: Option<String>,
    pub name: Option<String>,
    pub role: Option<MemberRole>,
    pub status: Option<MemberStatus>,
    pub two_factor_enabled: Option<bool>,
    pub last_login_at: Option<Timestamp>,
    pub created: Option<Timestamp>,
    pub updated: Option<Timestamp>,
}

api_resource!(Member, "member");

/// An invitation for someone to join the merchant's team.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invite {
    pub id: String,
    pub object: Option<String>,
    pub merchant_account_id: Option<String>,
    pub email: Option<String>,
    pub role: Option<MemberRole>,
    pub status: Option<InviteStatus>,
    /// Member ID of the inviter.
    pub invited_by: Option<String>,
    pub expires_at: Option<Timestamp>,
    pub accepted_at: Option<Timestamp>,
    pub created: Option<Timestamp>,
}

api_resource!(Invite, "invite");

impl Invite {
    /// A pending invite past `expires_at` can no longer be accepted, even before the
    /// server flips its status.
    pub fn is_acceptable_at(&self, now: Timestamp) -> bool {
        self.status == Some(InviteStatus::Pending) && self.expires_at.is_none_or(|exp| now < exp)
    }
}
