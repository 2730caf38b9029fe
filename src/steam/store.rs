use std::{fmt::Display, path::Path};

use rusqlite::{params, Connection};

use super::models::Game;

/// Opens (or creates) the database at `path` and makes sure the `games` table exists.
pub fn open(path: impl AsRef<Path>) -> Result<Connection, Error> {
    let conn = Connection::open(path)?;
    initialize(&conn)?;
    Ok(conn)
}

pub fn initialize(conn: &Connection) -> Result<(), Error> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS games (
            id INTEGER PRIMARY KEY,
            name TEXT NOT NULL,
            image TEXT,
            price INTEGER
        );
        "#,
    )?;
    Ok(())
}

/// Returns `false` when a game with the same id is already stored. The stored row is left alone.
pub fn insert_or_skip(conn: &Connection, game: &Game) -> Result<bool, Error> {
    let changed = conn.execute(
        "INSERT OR IGNORE INTO games (id, name, image, price) VALUES (?1, ?2, ?3, ?4)",
        params![game.id, game.name, game.image, game.price],
    )?;
    Ok(changed > 0)
}

pub fn count_games(conn: &Connection) -> Result<i64, Error> {
    Ok(conn.query_row("SELECT COUNT(*) FROM games", [], |row| row.get(0))?)
}

#[cfg(test)]
pub fn find_game(conn: &Connection, id: i64) -> Result<Option<Game>, Error> {
    use rusqlite::OptionalExtension;

    Ok(conn
        .query_row(
            "SELECT id, name, image, price FROM games WHERE id = ?1",
            [id],
            |row| {
                Ok(Game {
                    id: row.get(0)?,
                    name: row.get(1)?,
                    image: row.get::<_, Option<String>>(2)?.unwrap_or_default(),
                    price: row.get::<_, Option<i64>>(3)?.unwrap_or(0),
                })
            },
        )
        .optional()?)
}

#[derive(Debug)]
pub enum Error {
    Sqlite(rusqlite::Error),
}

impl From<rusqlite::Error> for Error {
    fn from(value: rusqlite::Error) -> Self {
        Error::Sqlite(value)
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Sqlite(err) => write!(f, "SqliteError({})", err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_game() -> Game {
        Game {
            id: 1,
            name: "Test Game".to_string(),
            image: "x.png".to_string(),
            price: 999,
        }
    }

    #[test]
    fn initialize_twice_is_harmless() {
        let conn = Connection::open_in_memory().unwrap();
        initialize(&conn).unwrap();
        insert_or_skip(&conn, &test_game()).unwrap();
        initialize(&conn).unwrap();
        assert_eq!(count_games(&conn).unwrap(), 1);
    }

    #[test]
    fn insert_then_find() {
        let conn = Connection::open_in_memory().unwrap();
        initialize(&conn).unwrap();
        assert!(insert_or_skip(&conn, &test_game()).unwrap());
        assert_eq!(find_game(&conn, 1).unwrap(), Some(test_game()));
        assert_eq!(find_game(&conn, 2).unwrap(), None);
    }

    #[test]
    fn duplicate_id_is_skipped_without_overwriting() {
        let conn = Connection::open_in_memory().unwrap();
        initialize(&conn).unwrap();
        assert!(insert_or_skip(&conn, &test_game()).unwrap());

        let renamed = Game {
            name: "Renamed".to_string(),
            price: 0,
            ..test_game()
        };
        assert!(!insert_or_skip(&conn, &renamed).unwrap());
        assert_eq!(count_games(&conn).unwrap(), 1);
        assert_eq!(find_game(&conn, 1).unwrap(), Some(test_game()));
    }

    #[test]
    fn open_creates_file_backed_store() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("games.db");
        {
            let conn = open(&path).unwrap();
            insert_or_skip(&conn, &test_game()).unwrap();
        }
        let conn = open(&path).unwrap();
        assert_eq!(count_games(&conn).unwrap(), 1);
    }

    #[test]
    fn open_fails_on_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("games.db");
        assert!(open(path).is_err());
    }
}
