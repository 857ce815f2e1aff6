mod metrics;
mod summary;
mod tabs;
mod view;

pub use view::Dashboard;
