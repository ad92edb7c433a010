//! Members Index / Lookup Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, oapi::extract::QueryParam, prelude::*};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use tablebill_app::domain::members::models::Member;

use crate::{extensions::*, members::errors::into_status_error, state::State};

/// Member Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct MemberResponse {
    /// The unique identifier of the member
    pub id: Uuid,

    /// The member's display name
    pub name: String,

    /// The member's mobile number; the lookup key
    pub mobile: String,

    /// Whole-number discount percentage, 0-100
    pub discount_percent: u8,

    /// The date and time the member was registered
    pub created_at: String,
}

impl From<Member> for MemberResponse {
    fn from(member: Member) -> Self {
        Self {
            id: member.id,
            name: member.name,
            mobile: member.mobile,
            discount_percent: member.discount_percent,
            created_at: member.created_at.to_string(),
        }
    }
}

/// Member Lookup Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct MemberLookupResponse {
    /// The membership matching the searched mobile number
    pub member: MemberResponse,
}

/// Members Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct MembersResponse {
    /// The registered members
    pub members: Vec<MemberResponse>,
}

/// Members Index / Lookup Handler
///
/// With `?search={mobile}` returns the single matching membership; without it
/// returns every registered member.
#[endpoint(
    tags("members"),
    summary = "List Members / Lookup Membership",
    responses(
        (status_code = StatusCode::OK, description = "Membership data"),
        (status_code = StatusCode::NOT_FOUND, description = "No membership found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    search: QueryParam<String, false>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<(), StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    match search.into_inner() {
        Some(mobile) => {
            let member = state
                .app
                .members
                .find_member(mobile)
                .await
                .map_err(into_status_error)?;

            res.render(Json(MemberLookupResponse {
                member: member.into(),
            }));
        }
        None => {
            let members = state
                .app
                .members
                .list_members()
                .await
                .or_500("failed to fetch members")?;

            res.render(Json(MembersResponse {
                members: members.into_iter().map(Into::into).collect(),
            }));
        }
    }

    Ok(())
}
