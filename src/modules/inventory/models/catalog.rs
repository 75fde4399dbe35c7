// Inventory catalog entities. Categories, groups, units and their
// sub-variants all share the same name/description creation shape; only
// the item master carries a richer body.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::{AppError, Result};
use crate::modules::vouchers::models::GstRate;

/// The simple catalog families, each with its own backend collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CatalogKind {
    Category,
    SubCategory,
    Unit,
    Group,
    SubGroup,
}

impl std::fmt::Display for CatalogKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogKind::Category => write!(f, "category"),
            CatalogKind::SubCategory => write!(f, "subcategory"),
            CatalogKind::Unit => write!(f, "unit"),
            CatalogKind::Group => write!(f, "group"),
            CatalogKind::SubGroup => write!(f, "subgroup"),
        }
    }
}

/// Creation body shared by every simple catalog family.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub name: String,
    #[serde(default)]
    pub description: String,
}

impl CatalogEntry {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(AppError::validation("Name is required"));
        }
        Ok(())
    }
}

/// One stored catalog entity as returned by listings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogRecord {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: String,
}

/// Item master record: the richer creation body for `/Product/items`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ItemMaster {
    pub name: String,
    #[serde(default)]
    pub description: String,

    /// Stock-keeping code
    #[serde(default, rename = "itemCode")]
    pub item_code: String,

    #[serde(rename = "unitId")]
    pub unit_id: i64,

    #[serde(rename = "categoryId")]
    pub category_id: i64,

    #[serde(rename = "groupId")]
    pub group_id: i64,

    /// Default tax breakdown applied when the item lands on a line
    pub gst: GstRate,

    #[serde(rename = "purchasePrice")]
    pub purchase_price: Decimal,

    #[serde(rename = "salePrice")]
    pub sale_price: Decimal,
}

impl ItemMaster {
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(AppError::validation("Item name is required"));
        }
        if self.unit_id == 0 {
            return Err(AppError::validation("Unit is required"));
        }
        if self.purchase_price < Decimal::ZERO || self.sale_price < Decimal::ZERO {
            return Err(AppError::validation("Prices must be non-negative"));
        }
        self.gst.validate()
    }
}

/// One stored item master as returned by listings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemRecord {
    pub id: i64,
    pub name: String,
    #[serde(default, rename = "itemCode")]
    pub item_code: String,
    #[serde(default)]
    pub gst: GstRate,
    #[serde(rename = "salePrice")]
    pub sale_price: Option<Decimal>,
}
