// Read side snapshot for the reports.
//
// The store lists newest first; tallies count oldest first so that ties go to the
// nominee who reached the count earliest.

use crate::modules::votes::core::vote_record::VoteRecord;
use crate::shared::infrastructure::vote_store::{VoteStore, VoteStoreError};

pub async fn load_chronological(store: &dyn VoteStore) -> Result<Vec<VoteRecord>, VoteStoreError> {
    let mut records = store.list_all().await?;
    records.reverse();
    Ok(records)
}
