pub mod item;

pub use item::CatalogItem;
