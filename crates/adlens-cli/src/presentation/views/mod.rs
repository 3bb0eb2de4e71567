//! Text views. Each ViewModel implements `CreateView`; the returned
//! `Display` value handles layout, filtering by `ViewMode`, and formatting.

mod campaign;
mod insights;
mod system;
pub mod tui;
