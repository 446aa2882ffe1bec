use crate::errors::{AppError, AppResult};
use crate::models::Request;
use crate::store::TableStore;

/// Student-side booking requests. They are only read by the coach; nothing
/// here creates lessons.
pub struct RequestLogic;

impl RequestLogic {
    pub fn add(store: &TableStore, request: Request) -> AppResult<()> {
        if request.name.trim().is_empty() {
            return Err(AppError::InvalidInput("Please enter your name.".into()));
        }

        let mut requests: Vec<Request> = store.load();
        requests.push(request);
        store.save(&requests)
    }

    /// Drop every request. Returns how many were removed.
    pub fn clear(store: &TableStore) -> AppResult<usize> {
        let count = store.load::<Request>().len();
        store.save::<Request>(&[])?;
        Ok(count)
    }
}
