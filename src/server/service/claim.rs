//! Claim service for business logic.
//!
//! Wraps the transactional claim repository for the `/api/claims` resource and
//! turns refused outcomes into HTTP-facing errors.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::claim::ClaimRepository,
    error::AppError,
    model::claim::{Claim, ClaimDetail, ClaimOutcome, ClaimParams},
    service::item::insufficient,
};

pub struct ClaimService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ClaimService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<ClaimDetail>, AppError> {
        let repo = ClaimRepository::new(self.db);
        Ok(repo.get_all().await?)
    }

    pub async fn get_by_guest(
        &self,
        guest_name: &str,
        guest_number: &str,
    ) -> Result<Vec<ClaimDetail>, AppError> {
        let repo = ClaimRepository::new(self.db);
        Ok(repo.get_by_guest(guest_name, guest_number).await?)
    }

    pub async fn get_by_item(&self, item_name: &str) -> Result<Vec<ClaimDetail>, AppError> {
        let repo = ClaimRepository::new(self.db);
        Ok(repo.get_by_item(item_name).await?)
    }

    /// Claims units of an item, adding to any existing claim by the guest.
    ///
    /// # Returns
    /// - `Ok(ClaimDetail)` - The stored claim
    /// - `Err(AppError::BadRequest)` - Guest or item does not exist
    /// - `Err(AppError::Conflict)` - Not enough units left
    /// - `Err(AppError::DbErr)` - Database error, nothing changed
    pub async fn create(&self, params: ClaimParams) -> Result<ClaimDetail, AppError> {
        let repo = ClaimRepository::new(self.db);

        let change = match repo.claim(params).await? {
            ClaimOutcome::Done(change) => change,
            ClaimOutcome::Insufficient { available } => return Err(insufficient(available)),
            _ => {
                return Err(AppError::BadRequest(
                    "Guest or item does not exist".to_string(),
                ))
            }
        };

        self.detail(change.claim).await
    }

    /// Sets a claim to an absolute quantity.
    ///
    /// # Returns
    /// - `Ok(ClaimDetail)` - The updated claim
    /// - `Err(AppError::NotFound)` - No such claim
    /// - `Err(AppError::Conflict)` - Increase exceeds what remains
    /// - `Err(AppError::DbErr)` - Database error, nothing changed
    pub async fn update(
        &self,
        guest_name: &str,
        guest_number: &str,
        item_name: &str,
        quantity: i32,
    ) -> Result<ClaimDetail, AppError> {
        let repo = ClaimRepository::new(self.db);

        let change = match repo
            .set_quantity(guest_name, guest_number, item_name, quantity)
            .await?
        {
            ClaimOutcome::Done(change) => change,
            ClaimOutcome::Insufficient { available } => return Err(insufficient(available)),
            _ => return Err(AppError::NotFound("Claim not found".to_string())),
        };

        self.detail(change.claim).await
    }

    /// Removes a single claim and releases its units.
    ///
    /// # Returns
    /// - `Ok(ClaimDetail)` - The claim as it was before removal
    /// - `Err(AppError::NotFound)` - No such claim
    /// - `Err(AppError::DbErr)` - Database error, nothing changed
    pub async fn delete(
        &self,
        guest_name: &str,
        guest_number: &str,
        item_name: &str,
    ) -> Result<ClaimDetail, AppError> {
        let repo = ClaimRepository::new(self.db);

        let detail = repo
            .find(guest_name, guest_number, item_name)
            .await?
            .ok_or_else(|| AppError::NotFound("Claim not found".to_string()))?;

        match repo.unclaim(guest_name, guest_number, item_name).await? {
            ClaimOutcome::Done(change) => Ok(ClaimDetail {
                claim: change.claim,
                ..detail
            }),
            _ => Err(AppError::NotFound("Claim not found".to_string())),
        }
    }

    /// Removes every claim made by a guest.
    ///
    /// # Returns
    /// - `Ok(Vec<ClaimDetail>)` - The removed claims, possibly empty
    /// - `Err(AppError::DbErr)` - Database error, nothing changed
    pub async fn delete_by_guest(
        &self,
        guest_name: &str,
        guest_number: &str,
    ) -> Result<Vec<ClaimDetail>, AppError> {
        let repo = ClaimRepository::new(self.db);

        let details = repo.get_by_guest(guest_name, guest_number).await?;
        let removed = repo.delete_by_guest(guest_name, guest_number).await?;

        Ok(retain_removed(details, &removed))
    }

    /// Removes every claim on an item.
    ///
    /// # Returns
    /// - `Ok(Vec<ClaimDetail>)` - The removed claims, possibly empty
    /// - `Err(AppError::DbErr)` - Database error, nothing changed
    pub async fn delete_by_item(&self, item_name: &str) -> Result<Vec<ClaimDetail>, AppError> {
        let repo = ClaimRepository::new(self.db);

        let details = repo.get_by_item(item_name).await?;
        let removed = repo.delete_by_item(item_name).await?;

        Ok(retain_removed(details, &removed))
    }

    async fn detail(&self, claim: Claim) -> Result<ClaimDetail, AppError> {
        let repo = ClaimRepository::new(self.db);

        repo.find(&claim.guest_name, &claim.guest_number, &claim.item_name)
            .await?
            .ok_or_else(|| AppError::NotFound("Claim not found".to_string()))
    }
}

/// Keeps the details of claims that were actually removed, with removal-time quantities.
fn retain_removed(details: Vec<ClaimDetail>, removed: &[Claim]) -> Vec<ClaimDetail> {
    details
        .into_iter()
        .filter_map(|detail| {
            removed
                .iter()
                .find(|claim| {
                    claim.guest_name == detail.claim.guest_name
                        && claim.guest_number == detail.claim.guest_number
                        && claim.item_name == detail.claim.item_name
                })
                .map(|claim| ClaimDetail {
                    claim: claim.clone(),
                    ..detail
                })
        })
        .collect()
}
