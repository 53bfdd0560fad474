//! The only module that touches the `note` table. Each function maps one
//! logical operation onto SQL over a borrowed pooled connection.

use diesel::prelude::*;

use crate::models::note::{IncomingNote, QueryNote};
use crate::schema::note::dsl::*;

pub fn find_all(connection: &mut PgConnection) -> QueryResult<Vec<QueryNote>> {
    note.load::<QueryNote>(connection)
}

pub fn insert(
    connection: &mut PgConnection,
    input: &IncomingNote,
) -> QueryResult<QueryNote> {
    diesel::insert_into(note)
        .values(input)
        .returning((id, name, description))
        .get_result::<QueryNote>(connection)
}

pub fn find_by_id(
    connection: &mut PgConnection,
    note_id: i32,
) -> QueryResult<Option<QueryNote>> {
    note.find(note_id)
        .get_result::<QueryNote>(connection)
        .optional()
}

// update and delete do not report whether a row matched; callers that care
// about absence check with find_by_id first.
pub fn update(
    connection: &mut PgConnection,
    note_id: i32,
    input: &IncomingNote,
) -> QueryResult<()> {
    diesel::update(note.find(note_id))
        .set(input)
        .execute(connection)?;
    Ok(())
}

pub fn delete(connection: &mut PgConnection, note_id: i32) -> QueryResult<()> {
    diesel::delete(note.find(note_id)).execute(connection)?;
    Ok(())
}
