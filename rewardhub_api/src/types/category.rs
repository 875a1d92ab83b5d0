//! Category types for the public `/categories` search.

use serde::{Deserialize, Serialize};

/// Unique identifier for a category (opaque UUID string).
pub type CategoryId = String;

#[derive(Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,

    pub name: String,

    /// URL-safe slug derived from the name.
    pub slug: String,

    pub icon: CategoryIcon,
}

/// The closed set of icon names the backend may send for a category.
///
/// Unrecognized names deserialize to [`CategoryIcon::Box`], the declared
/// fallback, instead of failing or being indexed dynamically.
#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Debug)]
#[serde(rename_all = "kebab-case")]
pub enum CategoryIcon {
    ShoppingCart,
    Utensils,
    Shirt,
    Pill,
    Fuel,
    Home,
    Gamepad,
    Plane,
    PawPrint,
    Dumbbell,
    #[serde(other)]
    Box,
}

impl std::fmt::Display for CategoryIcon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                CategoryIcon::ShoppingCart => "shopping-cart",
                CategoryIcon::Utensils => "utensils",
                CategoryIcon::Shirt => "shirt",
                CategoryIcon::Pill => "pill",
                CategoryIcon::Fuel => "fuel",
                CategoryIcon::Home => "home",
                CategoryIcon::Gamepad => "gamepad",
                CategoryIcon::Plane => "plane",
                CategoryIcon::PawPrint => "paw-print",
                CategoryIcon::Dumbbell => "dumbbell",
                CategoryIcon::Box => "box",
            }
        )
    }
}
