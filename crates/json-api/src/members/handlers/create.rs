//! Create Member Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, oapi::extract::JsonBody, prelude::*};
use serde::{Deserialize, Serialize};

use tablebill_app::domain::members::models::NewMember;

use crate::{
    extensions::*,
    members::{errors::into_status_error, index::MemberResponse},
    state::State,
};

/// Create Member Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CreateMemberRequest {
    /// The member's display name
    pub name: String,

    /// The member's mobile number; unique per member
    pub mobile: String,

    /// Whole-number discount percentage, 0-100
    pub discount_percent: u8,
}

impl From<CreateMemberRequest> for NewMember {
    fn from(request: CreateMemberRequest) -> Self {
        NewMember {
            name: request.name,
            mobile: request.mobile,
            discount_percent: request.discount_percent,
        }
    }
}

/// Member Created Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct MemberCreatedResponse {
    /// Confirmation message
    pub message: String,

    /// The registered member
    pub member: MemberResponse,
}

/// Create Member Handler
#[endpoint(
    tags("members"),
    summary = "Add Member",
    responses(
        (status_code = StatusCode::CREATED, description = "Member added"),
        (status_code = StatusCode::CONFLICT, description = "Member already exists"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CreateMemberRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<MemberCreatedResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let member = state
        .app
        .members
        .create_member(json.into_inner().into())
        .await
        .map_err(into_status_error)?;

    res.status_code(StatusCode::CREATED);

    Ok(Json(MemberCreatedResponse {
        message: "Member added successfully".to_string(),
        member: member.into(),
    }))
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;
    use salvo::test::TestClient;
    use serde_json::json;
    use testresult::TestResult;
    use uuid::Uuid;

    use tablebill_app::domain::members::{MembersServiceError, MockMembersService, models::Member};

    use crate::test_helpers::members_service;

    use super::*;

    fn make_service(members: MockMembersService) -> Service {
        members_service(members, Router::with_path("api/add-member").post(handler))
    }

    #[tokio::test]
    async fn test_create_member_success() -> TestResult {
        let mut members = MockMembersService::new();

        members
            .expect_create_member()
            .once()
            .withf(|member| {
                *member
                    == NewMember {
                        name: "Asha".to_string(),
                        mobile: "01712345678".to_string(),
                        discount_percent: 10,
                    }
            })
            .return_once(|member| {
                Ok(Member {
                    id: Uuid::now_v7(),
                    name: member.name,
                    mobile: member.mobile,
                    discount_percent: member.discount_percent,
                    created_at: Timestamp::UNIX_EPOCH,
                })
            });

        members.expect_list_members().never();
        members.expect_find_member().never();
        members.expect_delete_member().never();

        let res = TestClient::post("http://example.com/api/add-member")
            .json(&json!({ "name": "Asha", "mobile": "01712345678", "discount_percent": 10 }))
            .send(&make_service(members))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::CREATED));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_member_invalid_discount_returns_400() -> TestResult {
        let mut members = MockMembersService::new();

        members
            .expect_create_member()
            .once()
            .return_once(|_| Err(MembersServiceError::InvalidDiscount(101)));

        members.expect_list_members().never();
        members.expect_find_member().never();
        members.expect_delete_member().never();

        let res = TestClient::post("http://example.com/api/add-member")
            .json(&json!({ "name": "Asha", "mobile": "01712345678", "discount_percent": 101 }))
            .send(&make_service(members))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }
}
