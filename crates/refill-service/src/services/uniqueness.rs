//! Uniqueness guard
//!
//! Rejects writes that would break an invariant spanning several rows.
//! The check is a read-then-decide step: a concurrent writer can slip in
//! between check and insert, in which case the storage unique index rejects
//! the write and the repository reports the same conflict error.

use refill_core::{DomainError, Id, NewBottle, NewLike};
use tracing::{debug, instrument};

use super::context::ServiceContext;
use super::error::ServiceResult;

pub struct UniquenessGuard<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> UniquenessGuard<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// A non-empty tag id may belong to one bottle only. `exclude` is the
    /// bottle being updated.
    #[instrument(skip(self, bottle), fields(nfc_id = %bottle.nfc_id))]
    pub async fn check_bottle(&self, bottle: &NewBottle, exclude: Option<Id>) -> ServiceResult<()> {
        if !bottle.has_nfc_tag() {
            return Ok(());
        }

        if self
            .ctx
            .bottle_repo()
            .nfc_id_exists(&bottle.nfc_id, exclude)
            .await?
        {
            debug!("NFC id already registered");
            return Err(DomainError::NfcIdAlreadyExists(bottle.nfc_id.clone()).into());
        }

        Ok(())
    }

    /// A user likes a station at most once. `exclude` is the like being updated.
    #[instrument(skip(self))]
    pub async fn check_like(&self, like: &NewLike, exclude: Option<Id>) -> ServiceResult<()> {
        let existing = self
            .ctx
            .like_repo()
            .find_by_pair(like.station_id, like.user_id)
            .await?;

        match existing {
            Some(found) if Some(found.id) != exclude => {
                debug!(like_id = %found.id, "Like already exists");
                Err(DomainError::LikeAlreadyExists {
                    station_id: like.station_id,
                    user_id: like.user_id,
                }
                .into())
            }
            _ => Ok(()),
        }
    }
}
