//! Account payloads produced by the backend and by sign-in.

use serde::Serialize;

use crate::domain::foundation::UserId;

/// Payload of a successful `verify` call: the identity already has an account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifiedUser {
    pub user_id: UserId,
}

/// Payload of a successful `sign_up` call: a new account was created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SignedUpUser {
    #[serde(rename = "userId")]
    pub user_id: UserId,
    pub name: String,
}

/// Outcome of a successful sign-in.
///
/// Tells observers whether the identity was just registered (so the UI can
/// run onboarding) or already had an account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind")]
pub enum SignedInUser {
    NewUser {
        #[serde(rename = "userId")]
        user_id: UserId,
        name: String,
    },
    ExistingUser {
        #[serde(rename = "userId")]
        user_id: UserId,
    },
}

impl SignedInUser {
    /// Returns the kind discriminant (`"NewUser"` or `"ExistingUser"`).
    pub fn kind(&self) -> &'static str {
        match self {
            SignedInUser::NewUser { .. } => "NewUser",
            SignedInUser::ExistingUser { .. } => "ExistingUser",
        }
    }

    /// Returns the backend account id.
    pub fn user_id(&self) -> &UserId {
        match self {
            SignedInUser::NewUser { user_id, .. } | SignedInUser::ExistingUser { user_id } => {
                user_id
            }
        }
    }

    /// Returns true if the account was created during this sign-in.
    pub fn is_new(&self) -> bool {
        matches!(self, SignedInUser::NewUser { .. })
    }
}

impl From<VerifiedUser> for SignedInUser {
    fn from(user: VerifiedUser) -> Self {
        SignedInUser::ExistingUser {
            user_id: user.user_id,
        }
    }
}

impl From<SignedUpUser> for SignedInUser {
    fn from(user: SignedUpUser) -> Self {
        SignedInUser::NewUser {
            user_id: user.user_id,
            name: user.name,
        }
    }
}
