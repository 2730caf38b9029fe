use serde::Deserialize;
use std::fmt;

/// One element of the `items` array returned by the store search endpoint.
#[derive(Debug, Deserialize, PartialEq, Eq, Clone)]
pub struct StoreItem {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub tiny_image: Option<String>,
    #[serde(default)]
    pub price: Option<StorePrice>,
}

#[derive(Debug, Deserialize, PartialEq, Eq, Clone)]
pub struct StorePrice {
    #[serde(rename = "final", default)]
    pub final_price: Option<i64>,
}

/// A row of the `games` table.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Game {
    pub id: i64,
    pub name: String,
    pub image: String,
    pub price: i64,
}

impl From<StoreItem> for Game {
    fn from(item: StoreItem) -> Self {
        Game {
            id: item.id,
            name: item.name,
            image: item.tiny_image.unwrap_or_default(),
            price: item
                .price
                .and_then(|price| price.final_price)
                .unwrap_or(0),
        }
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Game {{ id: {}, name: \"{}\", price: {} }}",
            self.id, self.name, self.price
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_thumbnail_and_price_default_to_empty_and_zero() {
        let game = Game::from(StoreItem {
            id: 1245620,
            name: "ELDEN RING".to_string(),
            tiny_image: None,
            price: None,
        });
        assert_eq!(game.image, "");
        assert_eq!(game.price, 0);
    }

    #[test]
    fn price_object_without_final_is_free() {
        let game = Game::from(StoreItem {
            id: 1145360,
            name: "Hades".to_string(),
            tiny_image: Some("hades.jpg".to_string()),
            price: Some(StorePrice { final_price: None }),
        });
        assert_eq!(game.price, 0);
        assert_eq!(game.image, "hades.jpg");
    }
}
