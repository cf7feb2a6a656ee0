// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::path::Path;

use rusqlite::{Connection, Row, params};
use tracing::{debug, info};

use crate::error::PersistenceError;
use crate::records::{BookingRecord, BookingRow, NewBookingRecord};
use crate::schema::initialize_schema;
use suds_domain::BookingStatus;

const SELECT_COLUMNS: &str = "booking_id, service_type, hours, bedrooms, bathrooms, frequency, \
     date, preferred_time, extras, first_name, last_name, email, phone, address, postal_code, \
     special_instructions, total_price, status, created_at";

/// The `SQLite`-backed booking store.
///
/// Owns a single connection. Callers that share a store across tasks wrap
/// it in a mutex; the store itself performs no locking.
#[derive(Debug)]
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Creates an in-memory store with an initialized schema.
    ///
    /// # Errors
    ///
    /// Returns an error if the connection or schema initialization fails.
    pub fn new_in_memory() -> Result<Self, PersistenceError> {
        let conn: Connection = Connection::open_in_memory()
            .map_err(|err| PersistenceError::DatabaseConnectionFailed(err.to_string()))?;
        initialize_schema(&conn)?;
        info!("Opened in-memory booking store");
        Ok(Self { conn })
    }

    /// Creates a file-backed store with an initialized schema.
    ///
    /// # Errors
    ///
    /// Returns an error if the connection or schema initialization fails.
    pub fn new_with_file<P: AsRef<Path>>(path: P) -> Result<Self, PersistenceError> {
        let conn: Connection = Connection::open(&path)
            .map_err(|err| PersistenceError::DatabaseConnectionFailed(err.to_string()))?;
        initialize_schema(&conn)?;
        info!(path = %path.as_ref().display(), "Opened booking store");
        Ok(Self { conn })
    }

    /// Inserts a validated booking and returns the persisted record.
    ///
    /// The status always starts at `pending`; the extras set is stored as a
    /// JSON array of extra identifiers.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the insert fails.
    pub fn insert_booking(
        &mut self,
        record: &NewBookingRecord,
    ) -> Result<BookingRecord, PersistenceError> {
        let extras_json: String = serde_json::to_string(&record.extras)?;

        self.conn.execute(
            "INSERT INTO bookings (
                service_type, hours, bedrooms, bathrooms, frequency, date, preferred_time,
                extras, first_name, last_name, email, phone, address, postal_code,
                special_instructions, total_price, status
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15, ?16, ?17)",
            params![
                record.service_type.as_str(),
                record.hours,
                record.bedrooms,
                record.bathrooms,
                record.frequency.as_str(),
                record.date,
                record.preferred_time.as_str(),
                extras_json,
                record.first_name,
                record.last_name,
                record.email,
                record.phone,
                record.address,
                record.postal_code,
                record.special_instructions,
                record.total_price,
                BookingStatus::Pending.as_str(),
            ],
        )?;

        let booking_id: i64 = self.conn.last_insert_rowid();
        info!(booking_id, "Inserted booking");
        self.get_booking(booking_id)
    }

    /// Fetches a booking by its identifier.
    ///
    /// # Errors
    ///
    /// Returns `BookingNotFound` for an unknown identifier.
    pub fn get_booking(&self, booking_id: i64) -> Result<BookingRecord, PersistenceError> {
        let query: String = format!("SELECT {SELECT_COLUMNS} FROM bookings WHERE booking_id = ?1");
        let row: Option<BookingRow> = self
            .conn
            .query_row(&query, params![booking_id], read_row)
            .map(Some)
            .or_else(|err| match err {
                rusqlite::Error::QueryReturnedNoRows => Ok(None),
                other => Err(PersistenceError::from(other)),
            })?;
        row.map_or(
            Err(PersistenceError::BookingNotFound(booking_id)),
            BookingRecord::try_from,
        )
    }

    /// Lists all bookings, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or a stored row is corrupt.
    pub fn list_bookings(&self) -> Result<Vec<BookingRecord>, PersistenceError> {
        let query: String =
            format!("SELECT {SELECT_COLUMNS} FROM bookings ORDER BY booking_id DESC");
        self.collect_bookings(&query, params![])
    }

    /// Lists bookings with the given status, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or a stored row is corrupt.
    pub fn list_bookings_by_status(
        &self,
        status: BookingStatus,
    ) -> Result<Vec<BookingRecord>, PersistenceError> {
        let query: String = format!(
            "SELECT {SELECT_COLUMNS} FROM bookings WHERE status = ?1 ORDER BY booking_id DESC"
        );
        self.collect_bookings(&query, params![status.as_str()])
    }

    /// Transitions a booking to a new lifecycle status.
    ///
    /// The transition is validated against
    /// [`BookingStatus::can_transition_to`] before anything is written.
    ///
    /// # Errors
    ///
    /// Returns `BookingNotFound` for an unknown identifier and
    /// `IllegalStatusTransition` when the lifecycle forbids the change.
    pub fn update_status(
        &mut self,
        booking_id: i64,
        new_status: BookingStatus,
    ) -> Result<BookingRecord, PersistenceError> {
        let current: BookingRecord = self.get_booking(booking_id)?;
        if !current.status.can_transition_to(new_status) {
            return Err(PersistenceError::IllegalStatusTransition {
                booking_id,
                from: current.status.to_string(),
                to: new_status.to_string(),
            });
        }

        self.conn.execute(
            "UPDATE bookings SET status = ?1 WHERE booking_id = ?2",
            params![new_status.as_str(), booking_id],
        )?;
        debug!(
            booking_id,
            from = %current.status,
            to = %new_status,
            "Updated booking status"
        );
        self.get_booking(booking_id)
    }

    /// Runs a select and maps every row onto a domain record.
    fn collect_bookings(
        &self,
        query: &str,
        params: impl rusqlite::Params,
    ) -> Result<Vec<BookingRecord>, PersistenceError> {
        let mut stmt = self.conn.prepare(query)?;
        let rows = stmt.query_map(params, read_row)?;
        let mut bookings: Vec<BookingRecord> = Vec::new();
        for row in rows {
            bookings.push(BookingRecord::try_from(row?)?);
        }
        Ok(bookings)
    }
}

/// Reads the raw column values of one `bookings` row.
fn read_row(row: &Row<'_>) -> rusqlite::Result<BookingRow> {
    Ok(BookingRow {
        booking_id: row.get(0)?,
        service_type: row.get(1)?,
        hours: row.get(2)?,
        bedrooms: row.get(3)?,
        bathrooms: row.get(4)?,
        frequency: row.get(5)?,
        date: row.get(6)?,
        preferred_time: row.get(7)?,
        extras_json: row.get(8)?,
        first_name: row.get(9)?,
        last_name: row.get(10)?,
        email: row.get(11)?,
        phone: row.get(12)?,
        address: row.get(13)?,
        postal_code: row.get(14)?,
        special_instructions: row.get(15)?,
        total_price: row.get(16)?,
        status: row.get(17)?,
        created_at: row.get(18)?,
    })
}
