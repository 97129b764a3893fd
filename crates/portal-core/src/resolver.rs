//! Lookup resolution: raw query -> exactly one record or a typed failure.
//!
//! Each call is a pure function of the search mode, the raw query and the
//! store. Every outcome is written to the operational log together with the
//! query as the user typed it.

use tracing::{error, info, warn};

use portal_model::{InvalidQueryReason, LookupError, LookupResult, SearchMode, StudentId};
use portal_normalization::{PHONE_DIGITS, extract_digits, trailing_digits};

use crate::store::RecordStore;

impl RecordStore {
    /// Resolves a query in the given mode without logging.
    pub fn lookup(&self, mode: SearchMode, raw_query: &str) -> LookupResult<'_> {
        let digits = extract_digits(raw_query);
        if digits.is_empty() {
            return Err(LookupError::InvalidQuery {
                query: raw_query.to_string(),
                reason: InvalidQueryReason::NoDigits,
            });
        }
        match mode {
            SearchMode::Id => self.lookup_id(&digits),
            SearchMode::Phone => self.lookup_phone(&digits),
        }
    }

    /// Resolves a query and records the outcome in the operational log.
    pub fn resolve(&self, mode: SearchMode, raw_query: &str) -> LookupResult<'_> {
        let result = self.lookup(mode, raw_query);
        log_outcome(mode.as_str(), raw_query, &result);
        result
    }

    fn lookup_id(&self, digits: &str) -> LookupResult<'_> {
        let not_found = || LookupError::NotFound {
            mode: SearchMode::Id,
            key: digits.to_string(),
        };
        // More digits than a u64 holds can never be a stored id.
        let id = digits.parse::<u64>().map_err(|_| not_found())?;
        self.get(StudentId::new(id)).ok_or_else(not_found)
    }

    fn lookup_phone(&self, digits: &str) -> LookupResult<'_> {
        let phone = trailing_digits(digits, PHONE_DIGITS);
        let matches = self.find_by_phone(phone);
        match matches.as_slice() {
            [] => Err(LookupError::NotFound {
                mode: SearchMode::Phone,
                key: phone.to_string(),
            }),
            [record] => Ok(*record),
            _ => Err(LookupError::Ambiguous {
                phone: phone.to_string(),
                count: matches.len(),
            }),
        }
    }
}

/// Resolves a request whose mode arrives as free text (`"id"` or `"phone"`).
pub fn resolve_request<'a>(
    store: &'a RecordStore,
    mode: &str,
    raw_query: &str,
) -> LookupResult<'a> {
    match mode.parse::<SearchMode>() {
        Ok(mode) => store.resolve(mode, raw_query),
        Err(err) => {
            log_outcome(mode, raw_query, &Err(err.clone()));
            Err(err)
        }
    }
}

/// Writes one operational log entry for a lookup outcome.
pub fn log_outcome(mode: &str, raw_query: &str, result: &LookupResult<'_>) {
    match result {
        Ok(record) => info!(mode, query = raw_query, student_id = %record.id, "student found"),
        Err(err @ LookupError::Unexpected { .. }) => {
            error!(mode, query = raw_query, kind = err.kind(), "{err}");
        }
        Err(err) => warn!(mode, query = raw_query, kind = err.kind(), "{err}"),
    }
}
