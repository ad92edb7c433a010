//! Members service.

use async_trait::async_trait;
use mockall::automock;
use uuid::Uuid;

use crate::{
    domain::members::{
        errors::MembersServiceError,
        models::{Member, NewMember},
    },
    store::{Collection, Document},
};

#[derive(Debug, Clone)]
struct MemberData {
    name: String,
    mobile: String,
    discount_percent: u8,
}

/// In-memory members service.
#[derive(Debug, Clone, Default)]
pub struct MemMembersService {
    members: Collection<MemberData>,
}

impl MemMembersService {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn into_member(document: Document<MemberData>) -> Member {
    Member {
        id: document.id,
        name: document.data.name,
        mobile: document.data.mobile,
        discount_percent: document.data.discount_percent,
        created_at: document.created_at,
    }
}

#[async_trait]
impl MembersService for MemMembersService {
    async fn list_members(&self) -> Result<Vec<Member>, MembersServiceError> {
        Ok(self
            .members
            .list()
            .await
            .into_iter()
            .map(into_member)
            .collect())
    }

    async fn find_member(&self, mobile: String) -> Result<Member, MembersServiceError> {
        self.members
            .find(|member| member.mobile == mobile)
            .await
            .map(into_member)
            .ok_or(MembersServiceError::NotFound)
    }

    async fn create_member(&self, member: NewMember) -> Result<Member, MembersServiceError> {
        if member.mobile.trim().is_empty() {
            return Err(MembersServiceError::MissingMobile);
        }

        if member.discount_percent > 100 {
            return Err(MembersServiceError::InvalidDiscount(member.discount_percent));
        }

        if self
            .members
            .find(|existing| existing.mobile == member.mobile)
            .await
            .is_some()
        {
            return Err(MembersServiceError::AlreadyExists);
        }

        let document = self
            .members
            .insert(MemberData {
                name: member.name,
                mobile: member.mobile,
                discount_percent: member.discount_percent,
            })
            .await;

        Ok(into_member(document))
    }

    async fn delete_member(&self, id: Uuid) -> Result<(), MembersServiceError> {
        if !self.members.delete(id).await {
            return Err(MembersServiceError::NotFound);
        }

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait MembersService: Send + Sync {
    /// Lists members in creation order.
    async fn list_members(&self) -> Result<Vec<Member>, MembersServiceError>;

    /// Finds the member registered under a mobile number.
    async fn find_member(&self, mobile: String) -> Result<Member, MembersServiceError>;

    /// Creates a member; mobile numbers are unique, discounts are 0-100.
    async fn create_member(&self, member: NewMember) -> Result<Member, MembersServiceError>;

    /// Deletes a member by id.
    async fn delete_member(&self, id: Uuid) -> Result<(), MembersServiceError>;
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    fn new_member(mobile: &str, discount_percent: u8) -> NewMember {
        NewMember {
            name: "Asha".to_string(),
            mobile: mobile.to_string(),
            discount_percent,
        }
    }

    #[tokio::test]
    async fn find_member_by_mobile() -> TestResult {
        let service = MemMembersService::new();

        service.create_member(new_member("01712345678", 10)).await?;

        let member = service.find_member("01712345678".to_string()).await?;

        assert_eq!(member.discount_percent, 10);

        Ok(())
    }

    #[tokio::test]
    async fn unknown_mobile_returns_not_found() {
        let service = MemMembersService::new();

        let result = service.find_member("01700000000".to_string()).await;

        assert_eq!(result, Err(MembersServiceError::NotFound));
    }

    #[tokio::test]
    async fn duplicate_mobile_is_rejected() -> TestResult {
        let service = MemMembersService::new();

        service.create_member(new_member("01712345678", 10)).await?;

        let result = service.create_member(new_member("01712345678", 20)).await;

        assert_eq!(result, Err(MembersServiceError::AlreadyExists));

        Ok(())
    }

    #[tokio::test]
    async fn discount_above_one_hundred_is_rejected() {
        let service = MemMembersService::new();

        let result = service.create_member(new_member("01712345678", 101)).await;

        assert_eq!(result, Err(MembersServiceError::InvalidDiscount(101)));
    }

    #[tokio::test]
    async fn blank_mobile_is_rejected() {
        let service = MemMembersService::new();

        let result = service.create_member(new_member("  ", 10)).await;

        assert_eq!(result, Err(MembersServiceError::MissingMobile));
    }

    #[tokio::test]
    async fn delete_member_makes_it_unfindable() -> TestResult {
        let service = MemMembersService::new();

        let member = service.create_member(new_member("01712345678", 10)).await?;

        service.delete_member(member.id).await?;

        let result = service.find_member("01712345678".to_string()).await;

        assert_eq!(result, Err(MembersServiceError::NotFound));

        Ok(())
    }
}
