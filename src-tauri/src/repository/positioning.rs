//! Order Assignment
//!
//! New lists and cards go after their last sibling: `max(order) + 1`, or 0
//! for the first child. Deletions leave gaps; nothing is re-packed.

use rusqlite::{params, Connection};

use crate::domain::DomainResult;
use super::db::db_err;

/// Tables whose rows carry a per-parent position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum OrderedTable {
    /// `lists`, scoped by `board_id`
    Lists,
    /// `cards`, scoped by `list_id`
    Cards,
}

impl OrderedTable {
    fn next_position_sql(self) -> &'static str {
        match self {
            OrderedTable::Lists => "SELECT COALESCE(MAX(position), -1) + 1 FROM lists WHERE board_id = ?",
            OrderedTable::Cards => "SELECT COALESCE(MAX(position), -1) + 1 FROM cards WHERE list_id = ?",
        }
    }
}

/// Get next position for a parent (used in create)
///
/// Must run under the same connection lock as the insert that uses it.
pub(crate) fn next_position(conn: &Connection, table: OrderedTable, parent_id: u32) -> DomainResult<i32> {
    conn.query_row(table.next_position_sql(), params![parent_id], |row| row.get::<_, i32>(0))
        .map_err(db_err)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(
            "CREATE TABLE lists (id INTEGER PRIMARY KEY, board_id INTEGER NOT NULL, position INTEGER NOT NULL);
             CREATE TABLE cards (id INTEGER PRIMARY KEY, list_id INTEGER NOT NULL, position INTEGER NOT NULL);",
        )
        .unwrap();
        conn
    }

    #[test]
    fn test_first_position_is_zero() {
        let conn = setup();
        assert_eq!(next_position(&conn, OrderedTable::Lists, 1).unwrap(), 0);
        assert_eq!(next_position(&conn, OrderedTable::Cards, 1).unwrap(), 0);
    }

    #[test]
    fn test_next_position_follows_max_and_keeps_gaps() {
        let conn = setup();
        conn.execute_batch(
            "INSERT INTO lists (board_id, position) VALUES (1, 0), (1, 4), (2, 9);",
        )
        .unwrap();
        assert_eq!(next_position(&conn, OrderedTable::Lists, 1).unwrap(), 5);
        assert_eq!(next_position(&conn, OrderedTable::Lists, 2).unwrap(), 10);
        assert_eq!(next_position(&conn, OrderedTable::Lists, 3).unwrap(), 0);
    }
}
