mod datetime;
mod item_id;
mod richtext;

pub use datetime::DateTime;
pub use item_id::ItemId;
pub use richtext::RichText;
