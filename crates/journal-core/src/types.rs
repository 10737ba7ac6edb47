//! Catalog domain types: products, filter criteria and sort options

use serde::{Deserialize, Deserializer, Serialize};

/// Identifier assigned to a product by the catalog service
pub type ProductId = i64;

/// Decode a JSON `null` string as an empty string.
fn nullable_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// A single catalog entry as returned by the catalog service.
///
/// The list controller only looks at `id`; the remaining fields are carried
/// through to the view untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,

    #[serde(default, deserialize_with = "nullable_string")]
    pub name: String,

    #[serde(default, deserialize_with = "nullable_string")]
    pub brand: String,

    /// Full ingredient list, free text
    #[serde(default, deserialize_with = "nullable_string")]
    pub ingredients_list: String,

    /// Highlighted ingredients, free text
    #[serde(default, deserialize_with = "nullable_string")]
    pub star_ingredients: String,

    #[serde(default, deserialize_with = "nullable_string")]
    pub product_type: String,

    /// Price in whole currency units
    #[serde(default)]
    pub price: Option<i64>,
}

/// Request body for creating or updating a product (no `id`)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDraft {
    pub name: String,
    pub brand: String,
    pub ingredients_list: String,
    pub star_ingredients: String,
    pub product_type: String,
    pub price: Option<i64>,
}

impl From<&Product> for ProductDraft {
    fn from(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            brand: product.brand.clone(),
            ingredients_list: product.ingredients_list.clone(),
            star_ingredients: product.star_ingredients.clone(),
            product_type: product.product_type.clone(),
            price: product.price,
        }
    }
}

impl ProductDraft {
    /// Attach a service-assigned id, producing the stored representation.
    pub fn with_id(self, id: ProductId) -> Product {
        Product {
            id,
            name: self.name,
            brand: self.brand,
            ingredients_list: self.ingredients_list,
            star_ingredients: self.star_ingredients,
            product_type: self.product_type,
            price: self.price,
        }
    }
}

// ─────────────────────────────────────────────────────────────────
// Product Type
// ─────────────────────────────────────────────────────────────────

/// Product categories understood by the catalog service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProductType {
    Cleanser,
    Toner,
    Booster,
    Emulsion,
    Moisturizer,
    Ampoule,
    Treatment,
    Mask,
    Sunscreen,
    Serum,
    Essence,
    #[serde(rename = "Eye Cream")]
    EyeCream,
    #[serde(rename = "Lip Care")]
    LipCare,
    #[serde(rename = "Body Care")]
    BodyCare,
    Other,
}

impl ProductType {
    /// All product types, in the order they are offered in the filter bar
    pub const ALL: [ProductType; 15] = [
        ProductType::Cleanser,
        ProductType::Toner,
        ProductType::Booster,
        ProductType::Emulsion,
        ProductType::Moisturizer,
        ProductType::Ampoule,
        ProductType::Treatment,
        ProductType::Mask,
        ProductType::Sunscreen,
        ProductType::Serum,
        ProductType::Essence,
        ProductType::EyeCream,
        ProductType::LipCare,
        ProductType::BodyCare,
        ProductType::Other,
    ];

    /// Wire value (also the display label)
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductType::Cleanser => "Cleanser",
            ProductType::Toner => "Toner",
            ProductType::Booster => "Booster",
            ProductType::Emulsion => "Emulsion",
            ProductType::Moisturizer => "Moisturizer",
            ProductType::Ampoule => "Ampoule",
            ProductType::Treatment => "Treatment",
            ProductType::Mask => "Mask",
            ProductType::Sunscreen => "Sunscreen",
            ProductType::Serum => "Serum",
            ProductType::Essence => "Essence",
            ProductType::EyeCream => "Eye Cream",
            ProductType::LipCare => "Lip Care",
            ProductType::BodyCare => "Body Care",
            ProductType::Other => "Other",
        }
    }

    /// Parse a wire value; matching is exact, as the service stores it.
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|t| t.as_str() == value)
    }

    /// Cycle through `None -> first -> ... -> last -> None`.
    pub fn cycle(current: Option<Self>) -> Option<Self> {
        match current {
            None => Some(Self::ALL[0]),
            Some(t) => {
                let idx = Self::ALL.iter().position(|x| *x == t).unwrap_or(0);
                Self::ALL.get(idx + 1).copied()
            }
        }
    }
}

impl std::fmt::Display for ProductType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Label for an optional product type filter
pub fn product_type_label(product_type: Option<ProductType>) -> &'static str {
    product_type.map_or("All Types", |t| t.as_str())
}

// ─────────────────────────────────────────────────────────────────
// Sort Key
// ─────────────────────────────────────────────────────────────────

/// Sort order requested from the catalog service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SortKey {
    #[default]
    #[serde(rename = "name")]
    Name,
    #[serde(rename = "name-desc")]
    NameDesc,
    #[serde(rename = "price")]
    Price,
    #[serde(rename = "price-desc")]
    PriceDesc,
    #[serde(rename = "brand")]
    Brand,
    #[serde(rename = "date")]
    Date,
}

impl SortKey {
    pub const ALL: [SortKey; 6] = [
        SortKey::Name,
        SortKey::NameDesc,
        SortKey::Price,
        SortKey::PriceDesc,
        SortKey::Brand,
        SortKey::Date,
    ];

    /// Value of the `sortBy` query parameter
    pub fn as_param(&self) -> &'static str {
        match self {
            SortKey::Name => "name",
            SortKey::NameDesc => "name-desc",
            SortKey::Price => "price",
            SortKey::PriceDesc => "price-desc",
            SortKey::Brand => "brand",
            SortKey::Date => "date",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortKey::Name => "Name A-Z",
            SortKey::NameDesc => "Name Z-A",
            SortKey::Price => "Price Low-High",
            SortKey::PriceDesc => "Price High-Low",
            SortKey::Brand => "Brand",
            SortKey::Date => "Date Added",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|k| k.as_param() == value)
    }

    /// Next sort key, wrapping around
    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|k| *k == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }
}

// ─────────────────────────────────────────────────────────────────
// Tags
// ─────────────────────────────────────────────────────────────────

/// Tags the catalog service knows how to filter on
pub const AVAILABLE_TAGS: [&str; 4] = [
    "alcohol-free",
    "fragrance-free",
    "oil-free",
    "sensitive skin friendly",
];

/// Human label for a tag: dashes become spaces, words are capitalized.
///
/// `"oil-free"` → `"Oil Free"`
pub fn tag_label(tag: &str) -> String {
    tag.replace('-', " ")
        .split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

// ─────────────────────────────────────────────────────────────────
// Filter State
// ─────────────────────────────────────────────────────────────────

/// User-selected criteria narrowing and ordering the catalog.
///
/// `tags` is a set semantically; it keeps insertion order so the query
/// string is stable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct FilterState {
    pub product_type: Option<ProductType>,
    pub tags: Vec<String>,
    pub brand: Option<String>,
    pub search: String,
    pub sort: SortKey,
}

impl FilterState {
    /// True when any narrowing criterion is set (sort order does not count).
    pub fn has_active_filters(&self) -> bool {
        self.product_type.is_some()
            || !self.tags.is_empty()
            || self.brand.is_some()
            || !self.search.is_empty()
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Copy of this filter with `tag` added if absent or removed if present.
    pub fn with_tag_toggled(&self, tag: &str) -> Self {
        let mut next = self.clone();
        if next.has_tag(tag) {
            next.tags.retain(|t| t != tag);
        } else {
            next.tags.push(tag.to_string());
        }
        next
    }

    pub fn with_search(&self, search: impl Into<String>) -> Self {
        Self {
            search: search.into(),
            ..self.clone()
        }
    }

    pub fn with_product_type(&self, product_type: Option<ProductType>) -> Self {
        Self {
            product_type,
            ..self.clone()
        }
    }

    /// Empty brand strings are treated as "all brands".
    pub fn with_brand(&self, brand: Option<String>) -> Self {
        Self {
            brand: brand.filter(|b| !b.is_empty()),
            ..self.clone()
        }
    }

    pub fn with_sort(&self, sort: SortKey) -> Self {
        Self {
            sort,
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_decodes_camel_case_with_nulls() {
        let json = r#"{
            "id": 7,
            "name": "Snail Mucin Essence",
            "brand": "COSRX",
            "ingredientsList": null,
            "starIngredients": "snail secretion filtrate",
            "productType": "Essence",
            "price": 25
        }"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.id, 7);
        assert_eq!(product.ingredients_list, "");
        assert_eq!(product.star_ingredients, "snail secretion filtrate");
        assert_eq!(product.price, Some(25));
    }

    #[test]
    fn test_product_missing_price_is_none() {
        let product: Product = serde_json::from_str(r#"{"id": 1, "name": "Toner"}"#).unwrap();
        assert_eq!(product.price, None);
        assert_eq!(product.brand, "");
    }

    #[test]
    fn test_draft_serializes_without_id() {
        let draft = ProductDraft {
            name: "Cica Cream".into(),
            brand: "Dr. Jart".into(),
            product_type: "Moisturizer".into(),
            price: Some(40),
            ..Default::default()
        };
        let value = serde_json::to_value(&draft).unwrap();
        assert!(value.get("id").is_none());
        assert_eq!(value["productType"], "Moisturizer");
        assert_eq!(value["ingredientsList"], "");
    }

    #[test]
    fn test_product_type_parse_and_label() {
        assert_eq!(ProductType::parse("Eye Cream"), Some(ProductType::EyeCream));
        assert_eq!(ProductType::parse("eye cream"), None);
        assert_eq!(product_type_label(None), "All Types");
        assert_eq!(product_type_label(Some(ProductType::LipCare)), "Lip Care");
    }

    #[test]
    fn test_product_type_cycle_wraps_to_none() {
        assert_eq!(ProductType::cycle(None), Some(ProductType::Cleanser));
        assert_eq!(
            ProductType::cycle(Some(ProductType::Cleanser)),
            Some(ProductType::Toner)
        );
        assert_eq!(ProductType::cycle(Some(ProductType::Other)), None);
    }

    #[test]
    fn test_sort_key_params_and_labels() {
        assert_eq!(SortKey::default(), SortKey::Name);
        assert_eq!(SortKey::PriceDesc.as_param(), "price-desc");
        assert_eq!(SortKey::Date.label(), "Date Added");
        assert_eq!(SortKey::parse("name-desc"), Some(SortKey::NameDesc));
        assert_eq!(SortKey::Date.next(), SortKey::Name);
    }

    #[test]
    fn test_tag_label() {
        assert_eq!(tag_label("oil-free"), "Oil Free");
        assert_eq!(tag_label("sensitive skin friendly"), "Sensitive Skin Friendly");
    }

    #[test]
    fn test_toggle_tag_adds_then_removes() {
        let filter = FilterState::default();
        let with = filter.with_tag_toggled("oil-free");
        assert_eq!(with.tags, vec!["oil-free".to_string()]);

        let both = with.with_tag_toggled("alcohol-free");
        assert_eq!(both.tags, vec!["oil-free", "alcohol-free"]);

        let without = both.with_tag_toggled("oil-free");
        assert_eq!(without.tags, vec!["alcohol-free"]);
    }

    #[test]
    fn test_has_active_filters_ignores_sort() {
        assert!(!FilterState::default().has_active_filters());
        assert!(!FilterState::default()
            .with_sort(SortKey::Price)
            .has_active_filters());
        assert!(FilterState::default()
            .with_search("snail")
            .has_active_filters());
        assert!(FilterState::default()
            .with_brand(Some("COSRX".into()))
            .has_active_filters());
    }

    #[test]
    fn test_empty_brand_means_all_brands() {
        let filter = FilterState::default().with_brand(Some(String::new()));
        assert_eq!(filter.brand, None);
    }
}
