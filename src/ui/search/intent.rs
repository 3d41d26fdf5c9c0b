use crate::omdb::MovieRecord;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum SearchIntent {
    /// User typed a character into the query field.
    Typed(char),
    /// User pasted text into the query field.
    Pasted(String),
    /// User deleted the character before the cursor.
    DeletedBack,
    /// User cleared the whole query field.
    Cleared,
    /// A request for the current query was issued under this id.
    Started { request_id: u64 },
    /// The API returned a record. Ignored unless the id matches the
    /// in-flight request.
    Found { request_id: u64, movie: MovieRecord },
    /// The API reported no match.
    Missed { request_id: u64 },
    /// The request failed at the transport level.
    Errored { request_id: u64 },
}

impl Intent for SearchIntent {}
