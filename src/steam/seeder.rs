use std::fmt::Display;

use async_trait::async_trait;
use rusqlite::Connection;

use super::{
    client::{self, StoreSearchRequest},
    logger::FilteringLogger,
    models::{Game, StoreItem},
    store,
};

pub const DEFAULT_TITLES: [&str; 10] = [
    "Elden Ring",
    "Hades",
    "Cyberpunk 2077",
    "Hollow Knight",
    "FIFA 23",
    "GTA V",
    "God of War",
    "Zelda",
    "Baldur's Gate 3",
    "The Witcher 3",
];

#[async_trait]
pub trait TitleResolver {
    /// Looks up a human readable title and returns the first match.
    async fn resolve(
        &self,
        title: &str,
        logger: &FilteringLogger<'_>,
    ) -> Result<Option<StoreItem>, client::Error>;
}

pub struct StoreSearchResolver {
    pub client: reqwest::Client,
    pub base_url: String,
    pub language: String,
    pub country: String,
}

impl Default for StoreSearchResolver {
    fn default() -> Self {
        StoreSearchResolver {
            client: reqwest::Client::new(),
            base_url: client::BASE_URL.to_string(),
            language: client::DEFAULT_LANGUAGE.to_string(),
            country: client::DEFAULT_COUNTRY.to_string(),
        }
    }
}

#[async_trait]
impl TitleResolver for StoreSearchResolver {
    async fn resolve(
        &self,
        title: &str,
        logger: &FilteringLogger<'_>,
    ) -> Result<Option<StoreItem>, client::Error> {
        client::search_store(
            &self.client,
            StoreSearchRequest {
                base_url: &self.base_url,
                term: title,
                language: &self.language,
                country: &self.country,
            },
            logger,
        )
        .await
    }
}

#[derive(Debug, Default, PartialEq, Eq, Clone, Copy)]
pub struct SeedSummary {
    pub inserted: usize,
    pub already_stored: usize,
    pub not_found: usize,
    pub failed: usize,
}

impl Display for SeedSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} inserted, {} already stored, {} not found, {} failed",
            self.inserted, self.already_stored, self.not_found, self.failed
        )
    }
}

enum Outcome {
    Inserted(Game),
    AlreadyStored(Game),
    NotFound,
}

/// Resolves every title in order and stores the first match of each one.
///
/// A title that fails to resolve or insert is logged and skipped. Only failing to open or
/// commit the transaction is returned as an error.
pub async fn seed_titles<'a, R>(
    titles: &[&str],
    resolver: &R,
    conn: &mut Connection,
    logger: &'a FilteringLogger<'a>,
) -> Result<SeedSummary, Error>
where
    R: TitleResolver + ?Sized,
{
    let tx = conn.transaction().map_err(store::Error::from)?;
    let mut summary = SeedSummary::default();

    for title in titles {
        match resolve_and_insert(title, resolver, &tx, logger).await {
            Ok(Outcome::Inserted(game)) => {
                summary.inserted += 1;
                logger.info(format!("Inserted: {}", game.name)).await;
                logger.trace(format!("stored {}", game)).await;
            }
            Ok(Outcome::AlreadyStored(game)) => {
                summary.already_stored += 1;
                logger.info(format!("Already stored: {}", game.name)).await;
            }
            Ok(Outcome::NotFound) => {
                summary.not_found += 1;
                logger.info(format!("No match for {}", title)).await;
            }
            Err(err) => {
                summary.failed += 1;
                logger
                    .error(format!("Failed to fetch {}: {}", title, err))
                    .await;
            }
        }
    }

    tx.commit().map_err(store::Error::from)?;
    Ok(summary)
}

async fn resolve_and_insert<R>(
    title: &str,
    resolver: &R,
    conn: &Connection,
    logger: &FilteringLogger<'_>,
) -> Result<Outcome, Error>
where
    R: TitleResolver + ?Sized,
{
    let game = match resolver.resolve(title, logger).await? {
        Some(item) => Game::from(item),
        None => return Ok(Outcome::NotFound),
    };
    if store::insert_or_skip(conn, &game)? {
        Ok(Outcome::Inserted(game))
    } else {
        Ok(Outcome::AlreadyStored(game))
    }
}

#[derive(Debug)]
pub enum Error {
    Client(client::Error),
    Store(store::Error),
}

impl From<client::Error> for Error {
    fn from(value: client::Error) -> Self {
        Error::Client(value)
    }
}

impl From<store::Error> for Error {
    fn from(value: store::Error) -> Self {
        Error::Store(value)
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Client(value) => write!(f, "ClientError: {}", value),
            Error::Store(value) => write!(f, "StoreError: {}", value),
        }
    }
}
