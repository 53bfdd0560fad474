//! CRUD operations over the note store. Mutations addressed by id check
//! existence before writing, since the store's update/delete statements
//! succeed silently when no row matches. The check and the write are two
//! round-trips, so a concurrent delete between them can still slip through;
//! the write then matches zero rows and no error is raised.

use diesel::pg::PgConnection;

use crate::errors::ServerError;
use crate::models::note::{IncomingNote, QueryNote};
use crate::store;

pub fn list_all(connection: &mut PgConnection) -> Result<Vec<QueryNote>, ServerError> {
    Ok(store::find_all(connection)?)
}

pub fn create(
    connection: &mut PgConnection,
    input: &IncomingNote,
) -> Result<QueryNote, ServerError> {
    Ok(store::insert(connection, input)?)
}

pub fn get(connection: &mut PgConnection, note_id: i32) -> Result<QueryNote, ServerError> {
    store::find_by_id(connection, note_id)?.ok_or(ServerError::NotFound(note_id))
}

pub fn update(
    connection: &mut PgConnection,
    note_id: i32,
    input: &IncomingNote,
) -> Result<(), ServerError> {
    if store::find_by_id(connection, note_id)?.is_none() {
        return Err(ServerError::NotFound(note_id));
    }
    store::update(connection, note_id, input)?;
    Ok(())
}

pub fn delete(connection: &mut PgConnection, note_id: i32) -> Result<(), ServerError> {
    if store::find_by_id(connection, note_id)?.is_none() {
        return Err(ServerError::NotFound(note_id));
    }
    store::delete(connection, note_id)?;
    Ok(())
}
