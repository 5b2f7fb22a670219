//! Routes and the shared current-route cell.

mod navigator;
mod route;

pub use navigator::Navigator;
pub use route::Route;
